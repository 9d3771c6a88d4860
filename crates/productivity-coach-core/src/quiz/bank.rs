use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizQuestion {
    pub id: u32,
    pub question: String,
    pub options: Vec<String>,
    /// Index into `options`.
    pub correct_answer: usize,
}

impl QuizQuestion {
    fn new(id: u32, question: &str, options: [&str; 4], correct_answer: usize) -> Self {
        Self {
            id,
            question: question.to_string(),
            options: options.iter().map(|o| o.to_string()).collect(),
            correct_answer,
        }
    }

    pub fn is_correct(&self, answer: usize) -> bool {
        answer == self.correct_answer
    }

    /// Option label as rendered: `A.`, `B.`, ...
    pub fn option_label(index: usize) -> char {
        (b'A' + index as u8) as char
    }
}

/// The fixed five-question bank.
pub fn standard_questions() -> Vec<QuizQuestion> {
    vec![
        QuizQuestion::new(
            1,
            "What is the capital of France?",
            ["London", "Berlin", "Paris", "Madrid"],
            2,
        ),
        QuizQuestion::new(
            2,
            "Which planet is known as the Red Planet?",
            ["Venus", "Mars", "Jupiter", "Saturn"],
            1,
        ),
        QuizQuestion::new(3, "What is 15 × 8?", ["120", "110", "130", "140"], 0),
        QuizQuestion::new(
            4,
            "Who painted the Mona Lisa?",
            ["Van Gogh", "Picasso", "Da Vinci", "Monet"],
            2,
        ),
        QuizQuestion::new(
            5,
            "What is the largest ocean on Earth?",
            ["Atlantic", "Indian", "Arctic", "Pacific"],
            3,
        ),
    ]
}

/// Correct answer index for each question, in order.
pub fn answer_key(questions: &[QuizQuestion]) -> Vec<usize> {
    questions.iter().map(|q| q.correct_answer).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_bank_has_five_valid_questions() {
        let questions = standard_questions();
        assert_eq!(questions.len(), 5);
        for q in &questions {
            assert!(q.correct_answer < q.options.len());
        }
        assert_eq!(answer_key(&questions), vec![2, 1, 0, 2, 3]);
    }

    #[test]
    fn option_labels() {
        assert_eq!(QuizQuestion::option_label(0), 'A');
        assert_eq!(QuizQuestion::option_label(3), 'D');
    }
}
