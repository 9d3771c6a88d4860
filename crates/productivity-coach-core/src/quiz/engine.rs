//! Quiz state machine.
//!
//! ```text
//! Answering --submit--> Revealed --(advance delay)--> Answering (next question)
//!                                              \----> Finished (last question)
//! ```
//!
//! The advance is a fire-once deadline held in state; the owner drives it by
//! calling `poll`. The outcome is produced exactly once, by the poll that
//! finishes the last question. `cancel` throws away the attempt.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use super::bank::{standard_questions, QuizQuestion};
use crate::error::QuizError;
use crate::events::Event;
use crate::rewards::{quiz_rewards, RewardEvent};
use crate::timer::now_ms;

pub const DEFAULT_ADVANCE_DELAY_MS: u64 = 1500;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "phase", rename_all = "snake_case")]
pub enum QuizPhase {
    Answering,
    Revealed { advance_at_ms: u64 },
    Finished,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizOutcome {
    pub score: u32,
    pub total: u32,
    pub xp_earned: u64,
    pub coins_earned: u64,
    pub answers: Vec<Option<usize>>,
}

impl QuizOutcome {
    pub fn reward(&self) -> RewardEvent {
        RewardEvent {
            xp_earned: self.xp_earned,
            coins_earned: self.coins_earned,
        }
    }
}

/// What a `poll` did once the advance deadline passed.
#[derive(Debug, Clone, PartialEq)]
pub enum QuizStep {
    Advanced(Event),
    Completed(QuizOutcome),
}

#[derive(Debug, Clone)]
pub struct QuizEngine {
    questions: Vec<QuizQuestion>,
    current: usize,
    selected: Option<usize>,
    answers: Vec<Option<usize>>,
    correct_count: u32,
    phase: QuizPhase,
    advance_delay_ms: u64,
}

impl Default for QuizEngine {
    fn default() -> Self {
        Self::new(standard_questions(), DEFAULT_ADVANCE_DELAY_MS)
    }
}

impl QuizEngine {
    pub fn new(questions: Vec<QuizQuestion>, advance_delay_ms: u64) -> Self {
        let answers = vec![None; questions.len()];
        Self {
            questions,
            current: 0,
            selected: None,
            answers,
            correct_count: 0,
            phase: QuizPhase::Answering,
            advance_delay_ms,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn phase(&self) -> QuizPhase {
        self.phase
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_question(&self) -> Option<&QuizQuestion> {
        self.questions.get(self.current)
    }

    pub fn questions(&self) -> &[QuizQuestion] {
        &self.questions
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn correct_count(&self) -> u32 {
        self.correct_count
    }

    pub fn is_locked(&self) -> bool {
        !matches!(self.phase, QuizPhase::Answering)
    }

    /// `(current + 1) / len * 100`
    pub fn progress_pct(&self) -> f64 {
        if self.questions.is_empty() {
            return 0.0;
        }
        (self.current + 1) as f64 / self.questions.len() as f64 * 100.0
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Choose an answer for the current question.
    ///
    /// Returns `Ok(false)` when the answer is already locked in.
    pub fn select(&mut self, answer: usize) -> Result<bool, QuizError> {
        if self.phase == QuizPhase::Finished {
            return Err(QuizError::Finished);
        }
        let question = self.current_question().ok_or(QuizError::Finished)?;
        if answer >= question.options.len() {
            return Err(QuizError::InvalidAnswer {
                question: self.current,
                answer,
                options: question.options.len(),
            });
        }
        if self.is_locked() {
            return Ok(false);
        }
        self.selected = Some(answer);
        Ok(true)
    }

    pub fn submit(&mut self) -> Option<Event> {
        self.submit_at(now_ms())
    }

    /// Lock the selected answer and reveal whether it was right.
    /// No-op without a selection or while already revealed.
    pub fn submit_at(&mut self, now_ms: u64) -> Option<Event> {
        if self.is_locked() {
            return None;
        }
        let selected = self.selected?;
        let question = self.questions.get(self.current)?;
        let correct = question.is_correct(selected);
        let correct_answer = question.correct_answer;

        self.answers[self.current] = Some(selected);
        if correct {
            self.correct_count += 1;
        }
        self.phase = QuizPhase::Revealed {
            advance_at_ms: now_ms + self.advance_delay_ms,
        };

        Some(Event::QuizAnswerRevealed {
            question_index: self.current,
            selected,
            correct_answer,
            correct,
            at: Utc::now(),
        })
    }

    pub fn poll(&mut self) -> Option<QuizStep> {
        self.poll_at(now_ms())
    }

    /// Advance once the reveal delay has elapsed.
    pub fn poll_at(&mut self, now_ms: u64) -> Option<QuizStep> {
        let QuizPhase::Revealed { advance_at_ms } = self.phase else {
            return None;
        };
        if now_ms < advance_at_ms {
            return None;
        }

        if self.current + 1 < self.questions.len() {
            self.current += 1;
            self.selected = None;
            self.phase = QuizPhase::Answering;
            return Some(QuizStep::Advanced(Event::QuizAdvanced {
                question_index: self.current,
                at: Utc::now(),
            }));
        }

        self.phase = QuizPhase::Finished;
        let reward = quiz_rewards(self.correct_count);
        let outcome = QuizOutcome {
            score: self.correct_count,
            total: self.questions.len() as u32,
            xp_earned: reward.xp_earned,
            coins_earned: reward.coins_earned,
            answers: self.answers.clone(),
        };
        tracing::info!(score = outcome.score, xp = outcome.xp_earned, "quiz finished");
        Some(QuizStep::Completed(outcome))
    }

    /// Abandon the attempt. Progress and any pending advance are discarded.
    pub fn cancel(&mut self) -> Event {
        self.current = 0;
        self.selected = None;
        self.answers = vec![None; self.questions.len()];
        self.correct_count = 0;
        self.phase = QuizPhase::Answering;
        Event::QuizCancelled { at: Utc::now() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DELAY: u64 = DEFAULT_ADVANCE_DELAY_MS;

    /// Answer every question, returning the final outcome.
    fn play(engine: &mut QuizEngine, answers: &[usize]) -> Option<QuizOutcome> {
        let mut now = 0;
        let mut outcome = None;
        for &answer in answers {
            engine.select(answer).unwrap();
            engine.submit_at(now).unwrap();
            now += DELAY;
            if let Some(QuizStep::Completed(o)) = engine.poll_at(now) {
                outcome = Some(o);
            }
        }
        outcome
    }

    #[test]
    fn four_of_five_correct() {
        let mut engine = QuizEngine::default();
        let outcome = play(&mut engine, &[2, 1, 0, 2, 0]).unwrap();
        assert_eq!(outcome.score, 4);
        assert_eq!(outcome.xp_earned, 200);
        assert_eq!(outcome.coins_earned, 100);
        assert_eq!(outcome.answers[4], Some(0));
        assert_eq!(engine.phase(), QuizPhase::Finished);
    }

    #[test]
    fn outcome_is_emitted_once() {
        let mut engine = QuizEngine::default();
        play(&mut engine, &[2, 1, 0, 2, 3]).unwrap();
        assert!(engine.poll_at(u64::MAX).is_none());
        assert_eq!(engine.select(0), Err(QuizError::Finished));
    }

    #[test]
    fn selection_can_change_until_submitted() {
        let mut engine = QuizEngine::default();
        assert_eq!(engine.select(0), Ok(true));
        assert_eq!(engine.select(2), Ok(true));
        let revealed = engine.submit_at(0).unwrap();
        assert!(matches!(
            revealed,
            Event::QuizAnswerRevealed { selected: 2, correct: true, .. }
        ));

        assert_eq!(engine.select(1), Ok(false));
        assert_eq!(engine.selected(), Some(2));
        assert!(engine.submit_at(10).is_none());
        assert_eq!(engine.correct_count(), 1);
    }

    #[test]
    fn submit_without_selection_is_noop() {
        let mut engine = QuizEngine::default();
        assert!(engine.submit_at(0).is_none());
        assert_eq!(engine.phase(), QuizPhase::Answering);
    }

    #[test]
    fn advance_waits_for_delay() {
        let mut engine = QuizEngine::default();
        engine.select(2).unwrap();
        engine.submit_at(1_000).unwrap();
        assert!(engine.poll_at(1_000 + DELAY - 1).is_none());
        assert_eq!(engine.current_index(), 0);

        let step = engine.poll_at(1_000 + DELAY).unwrap();
        assert!(matches!(
            step,
            QuizStep::Advanced(Event::QuizAdvanced { question_index: 1, .. })
        ));
        assert_eq!(engine.selected(), None);
        assert!(!engine.is_locked());
    }

    #[test]
    fn out_of_range_answer_is_rejected() {
        let mut engine = QuizEngine::default();
        assert_eq!(
            engine.select(4),
            Err(QuizError::InvalidAnswer {
                question: 0,
                answer: 4,
                options: 4
            })
        );
    }

    #[test]
    fn cancel_discards_progress() {
        let mut engine = QuizEngine::default();
        engine.select(2).unwrap();
        engine.submit_at(0);
        engine.poll_at(DELAY);
        engine.select(1).unwrap();
        engine.submit_at(DELAY);

        engine.cancel();
        assert_eq!(engine.current_index(), 0);
        assert_eq!(engine.correct_count(), 0);
        assert_eq!(engine.phase(), QuizPhase::Answering);
        // Pending advance is gone too.
        assert!(engine.poll_at(u64::MAX).is_none());
    }

    #[test]
    fn progress_percentage() {
        let mut engine = QuizEngine::default();
        assert!((engine.progress_pct() - 20.0).abs() < 1e-9);
        engine.select(2).unwrap();
        engine.submit_at(0);
        engine.poll_at(DELAY);
        assert!((engine.progress_pct() - 40.0).abs() < 1e-9);
    }
}
