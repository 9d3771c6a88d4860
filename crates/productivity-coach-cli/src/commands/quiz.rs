use clap::Subcommand;
use productivity_coach_core::{Config, Event, QuizEngine, QuizQuestion, QuizStep};

use super::{dashboard, print_json};

#[derive(Subcommand)]
pub enum QuizAction {
    /// List the questions and their options
    Questions,
    /// Answer all five questions in one go
    Take {
        /// Comma-separated answers, as indices (0-3) or letters (A-D)
        #[arg(long, value_delimiter = ',')]
        answers: Vec<String>,
    },
}

fn parse_answer(raw: &str) -> Result<usize, String> {
    let raw = raw.trim();
    if let Ok(index) = raw.parse::<usize>() {
        return Ok(index);
    }
    match raw.to_ascii_uppercase().as_bytes() {
        [letter @ b'A'..=b'Z'] => Ok((letter - b'A') as usize),
        _ => Err(format!("invalid answer '{raw}'")),
    }
}

pub fn run(action: QuizAction) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();

    match action {
        QuizAction::Questions => {
            let engine = QuizEngine::default();
            let questions: Vec<_> = engine
                .questions()
                .iter()
                .map(|q| {
                    let options: Vec<String> = q
                        .options
                        .iter()
                        .enumerate()
                        .map(|(i, o)| format!("{}. {o}", QuizQuestion::option_label(i)))
                        .collect();
                    serde_json::json!({ "id": q.id, "question": q.question, "options": options })
                })
                .collect();
            print_json(&questions)
        }
        QuizAction::Take { answers } => {
            let answers = answers
                .iter()
                .map(|a| parse_answer(a))
                .collect::<Result<Vec<_>, _>>()?;
            let mut engine = QuizEngine::new(
                productivity_coach_core::quiz::standard_questions(),
                config.quiz.advance_delay_ms,
            );
            if answers.len() != engine.questions().len() {
                return Err(format!(
                    "expected {} answers, got {}",
                    engine.questions().len(),
                    answers.len()
                )
                .into());
            }

            // Virtual clock: each reveal is followed by exactly the advance delay.
            let mut now_ms = 0u64;
            let mut events: Vec<Event> = Vec::new();
            let mut outcome = None;
            for answer in answers {
                engine.select(answer)?;
                events.extend(engine.submit_at(now_ms));
                now_ms += config.quiz.advance_delay_ms;
                match engine.poll_at(now_ms) {
                    Some(QuizStep::Advanced(event)) => events.push(event),
                    Some(QuizStep::Completed(done)) => outcome = Some(done),
                    None => {}
                }
            }

            let outcome = outcome.ok_or("quiz did not finish")?;
            let mut dashboard = dashboard(&config);
            let applied = dashboard.complete_quiz(&outcome);
            events.extend(applied.events);

            print_json(&serde_json::json!({
                "outcome": outcome,
                "events": events,
                "profile": dashboard.profile(),
            }))
        }
    }
}
