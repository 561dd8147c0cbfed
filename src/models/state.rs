use std::collections::BTreeMap;

/// Progress through one attempt at a question set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuizState {
    /// Index of the question being answered. Equals the set length once complete.
    pub current_question: usize,
    /// Selected option per question index. Last selection wins.
    pub answers: BTreeMap<usize, String>,
    pub score: usize,
    pub is_complete: bool,
}

impl QuizState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn answer_for(&self, index: usize) -> Option<&str> {
        self.answers.get(&index).map(String::as_str)
    }
}

/// Which view the shell should render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Welcome,
    InProgress,
    Complete,
}
