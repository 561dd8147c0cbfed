//! Quiz progression state machine.
//!
//! [`Progression`] owns the question set and the [`QuizState`] for the current
//! attempt. Callers read the state and drive it through three transitions:
//! [`select_answer`](Progression::select_answer), [`advance`](Progression::advance)
//! and [`restart`](Progression::restart). Guard violations are silent no-ops.

use crate::data::QuestionSet;
use crate::models::{Question, QuizState};

/// How a single question ended up once the quiz is over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Correct,
    Incorrect,
    Unanswered,
}

pub struct Progression {
    questions: QuestionSet,
    state: QuizState,
}

impl Progression {
    pub fn new(questions: QuestionSet) -> Self {
        Self {
            questions,
            state: QuizState::new(),
        }
    }

    pub fn questions(&self) -> &QuestionSet {
        &self.questions
    }

    pub fn state(&self) -> &QuizState {
        &self.state
    }

    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    /// The question awaiting an answer, or `None` once every question was left.
    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.state.current_question)
    }

    pub fn current_answer(&self) -> Option<&str> {
        self.state.answer_for(self.state.current_question)
    }

    pub fn is_last_question(&self) -> bool {
        self.state.current_question + 1 == self.questions.len()
    }

    /// Record `option` for the current question, replacing any earlier choice.
    ///
    /// Ignored once the quiz is complete.
    pub fn select_answer(&mut self, option: impl Into<String>) {
        if self.state.is_complete {
            return;
        }
        self.state
            .answers
            .insert(self.state.current_question, option.into());
    }

    /// Score the current question and move to the next one.
    ///
    /// A missing answer counts as incorrect. Leaving the last question
    /// completes the quiz. Ignored when there is no question left to leave.
    pub fn advance(&mut self) {
        let index = self.state.current_question;
        let Some(question) = self.questions.get(index) else {
            return;
        };

        let correct = self
            .state
            .answer_for(index)
            .is_some_and(|answer| question.is_correct(answer));
        if correct {
            self.state.score += 1;
        }
        self.state.current_question = index + 1;
        self.state.is_complete = index == self.questions.len() - 1;

        tracing::debug!(
            question = index,
            correct,
            score = self.state.score,
            complete = self.state.is_complete,
            "advanced"
        );
    }

    /// Start a fresh attempt over the same questions.
    pub fn restart(&mut self) {
        self.state = QuizState::new();
        tracing::debug!("quiz restarted");
    }

    /// Per-question results in set order.
    pub fn outcomes(&self) -> Vec<Outcome> {
        self.questions
            .iter()
            .enumerate()
            .map(|(index, question)| match self.state.answer_for(index) {
                None => Outcome::Unanswered,
                Some(answer) if question.is_correct(answer) => Outcome::Correct,
                Some(_) => Outcome::Incorrect,
            })
            .collect()
    }

    pub fn percentage(&self) -> f64 {
        (self.state.score as f64 / self.questions.len() as f64) * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Origin;

    fn question(text: &str, answer: &str) -> Question {
        Question {
            id: None,
            question: text.to_string(),
            options: vec!["A".into(), "B".into(), "C".into(), "X".into()],
            correct_answer: answer.to_string(),
        }
    }

    fn abc() -> Progression {
        let questions = vec![question("1", "A"), question("2", "B"), question("3", "C")];
        Progression::new(QuestionSet::new(questions, Origin::Remote("test".into())).unwrap())
    }

    #[test]
    fn test_initial_state() {
        let quiz = abc();
        assert_eq!(quiz.state(), &QuizState::new());
        assert_eq!(quiz.current_question().map(|q| q.question.as_str()), Some("1"));
        assert!(!quiz.is_last_question());
    }

    #[test]
    fn test_scenario_two_of_three() {
        let mut quiz = abc();
        for answer in ["A", "B", "X"] {
            quiz.select_answer(answer);
            quiz.advance();
        }
        assert_eq!(quiz.state().score, 2);
        assert!(quiz.state().is_complete);
        assert_eq!(quiz.state().current_question, 3);
        assert!(quiz.current_question().is_none());
        assert_eq!(
            quiz.outcomes(),
            [Outcome::Correct, Outcome::Correct, Outcome::Incorrect]
        );
    }

    #[test]
    fn test_n_advances_complete_the_quiz() {
        let mut quiz = Progression::new(QuestionSet::fallback("test"));
        let n = quiz.total_questions();
        for i in 0..n {
            assert!(!quiz.state().is_complete);
            assert_eq!(quiz.state().current_question, i);
            quiz.advance();
        }
        assert_eq!(quiz.state().current_question, n);
        assert!(quiz.state().is_complete);
        assert_eq!(quiz.state().score, 0);
    }

    #[test]
    fn test_score_matches_correct_answers() {
        let mut quiz = Progression::new(QuestionSet::fallback("test"));
        let picks: Vec<String> = quiz
            .questions()
            .iter()
            .enumerate()
            .map(|(i, q)| {
                if i % 3 == 0 {
                    q.correct_answer.clone()
                } else {
                    "wrong".to_string()
                }
            })
            .collect();
        for pick in &picks {
            quiz.select_answer(pick.as_str());
            quiz.advance();
        }
        let expected = quiz
            .questions()
            .iter()
            .enumerate()
            .filter(|(i, q)| quiz.state().answer_for(*i) == Some(q.correct_answer.as_str()))
            .count();
        assert_eq!(quiz.state().score, expected);
        assert_eq!(expected, 4);
    }

    #[test]
    fn test_select_overwrites_and_is_idempotent() {
        let mut quiz = abc();
        quiz.select_answer("B");
        quiz.select_answer("B");
        assert_eq!(quiz.state().answers.len(), 1);
        assert_eq!(quiz.current_answer(), Some("B"));

        quiz.select_answer("A");
        assert_eq!(quiz.current_answer(), Some("A"));
        assert_eq!(quiz.state().score, 0);
        assert_eq!(quiz.state().current_question, 0);

        quiz.advance();
        assert_eq!(quiz.state().score, 1);
    }

    #[test]
    fn test_select_after_complete_is_ignored() {
        let mut quiz = abc();
        for _ in 0..3 {
            quiz.select_answer("A");
            quiz.advance();
        }
        let before = quiz.state().clone();
        quiz.select_answer("C");
        assert_eq!(quiz.state(), &before);
    }

    #[test]
    fn test_advance_past_end_is_ignored() {
        let mut quiz = abc();
        for _ in 0..3 {
            quiz.advance();
        }
        let before = quiz.state().clone();
        quiz.advance();
        quiz.advance();
        assert_eq!(quiz.state(), &before);
    }

    #[test]
    fn test_advance_without_answer_counts_incorrect() {
        let mut quiz = abc();
        quiz.advance();
        assert_eq!(quiz.state().score, 0);
        assert_eq!(quiz.state().current_question, 1);
        assert!(!quiz.state().is_complete);
        assert_eq!(quiz.outcomes()[0], Outcome::Unanswered);
    }

    #[test]
    fn test_restart_resets_everything() {
        let mut quiz = abc();
        quiz.select_answer("A");
        quiz.advance();
        quiz.select_answer("B");
        quiz.restart();
        assert_eq!(quiz.state(), &QuizState::new());
        assert_eq!(quiz.total_questions(), 3);

        for _ in 0..3 {
            quiz.advance();
        }
        quiz.restart();
        assert_eq!(quiz.state(), &QuizState::new());
    }

    #[test]
    fn test_answer_outside_options_never_scores() {
        let mut quiz = Progression::new(
            QuestionSet::new(vec![question("odd", "Z")], Origin::Remote("test".into())).unwrap(),
        );
        assert!(quiz.is_last_question());
        for option in ["A", "B", "C", "X"] {
            quiz.select_answer(option);
        }
        quiz.advance();
        assert_eq!(quiz.state().score, 0);
        assert!(quiz.state().is_complete);
    }

    #[test]
    fn test_percentage() {
        let mut quiz = abc();
        quiz.select_answer("A");
        quiz.advance();
        assert!((quiz.percentage() - 100.0 / 3.0).abs() < 1e-9);
    }
}
