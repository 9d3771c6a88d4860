mod bank;
mod engine;

pub use bank::{answer_key, standard_questions, QuizQuestion};
pub use engine::{QuizEngine, QuizOutcome, QuizPhase, QuizStep, DEFAULT_ADVANCE_DELAY_MS};
