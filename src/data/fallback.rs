//! Built-in question set used when no other source can be resolved.

use crate::models::{Question, QuestionId};

struct Entry {
    question: &'static str,
    options: [&'static str; 4],
    correct_answer: &'static str,
}

const FALLBACK_QUESTIONS: [Entry; 10] = [
    Entry {
        question: "What is the largest planet in our solar system?",
        options: ["Jupiter", "Saturn", "Neptune", "Earth"],
        correct_answer: "Jupiter",
    },
    Entry {
        question: "Which element has the chemical symbol O?",
        options: ["Gold", "Oxygen", "Osmium", "Iron"],
        correct_answer: "Oxygen",
    },
    Entry {
        question: "How many continents are there on Earth?",
        options: ["Five", "Six", "Seven", "Eight"],
        correct_answer: "Seven",
    },
    Entry {
        question: "Who painted the Mona Lisa?",
        options: [
            "Vincent van Gogh",
            "Leonardo da Vinci",
            "Pablo Picasso",
            "Claude Monet",
        ],
        correct_answer: "Leonardo da Vinci",
    },
    Entry {
        question: "What is the boiling point of water at sea level in Celsius?",
        options: ["90", "100", "110", "120"],
        correct_answer: "100",
    },
    Entry {
        question: "Which ocean is the largest by surface area?",
        options: ["Atlantic", "Indian", "Arctic", "Pacific"],
        correct_answer: "Pacific",
    },
    Entry {
        question: "What is the capital city of Japan?",
        options: ["Osaka", "Kyoto", "Tokyo", "Nagoya"],
        correct_answer: "Tokyo",
    },
    Entry {
        question: "How many sides does a hexagon have?",
        options: ["Five", "Six", "Seven", "Eight"],
        correct_answer: "Six",
    },
    Entry {
        question: "Which gas do plants absorb from the atmosphere for photosynthesis?",
        options: ["Nitrogen", "Oxygen", "Carbon dioxide", "Helium"],
        correct_answer: "Carbon dioxide",
    },
    Entry {
        question: "What is the smallest prime number?",
        options: ["0", "1", "2", "3"],
        correct_answer: "2",
    },
];

pub fn fallback_questions() -> Vec<Question> {
    FALLBACK_QUESTIONS
        .iter()
        .zip(1..)
        .map(|(entry, id)| Question {
            id: Some(QuestionId::Number(id)),
            question: entry.question.to_string(),
            options: entry.options.iter().map(|o| o.to_string()).collect(),
            correct_answer: entry.correct_answer.to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_has_ten_questions() {
        assert_eq!(fallback_questions().len(), 10);
    }

    #[test]
    fn test_fallback_answers_are_options() {
        for question in fallback_questions() {
            assert!(
                question.options.contains(&question.correct_answer),
                "{} has no matching option",
                question.question
            );
        }
    }

    #[test]
    fn test_fallback_ids_are_sequential() {
        let ids: Vec<_> = fallback_questions().into_iter().map(|q| q.id).collect();
        assert_eq!(ids[0], Some(QuestionId::Number(1)));
        assert_eq!(ids[9], Some(QuestionId::Number(10)));
    }
}
