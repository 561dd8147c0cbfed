use crate::data::QuestionSet;
use crate::models::{Phase, Question, QuizState};
use crate::progression::Progression;

/// Presentation controller: the progression plus the view state around it.
pub struct App {
    progression: Progression,
    started: bool,
    highlighted: usize,
    result_scroll: usize,
}

impl App {
    pub fn new(questions: QuestionSet) -> Self {
        Self {
            progression: Progression::new(questions),
            started: false,
            highlighted: 0,
            result_scroll: 0,
        }
    }

    pub fn phase(&self) -> Phase {
        if !self.started {
            Phase::Welcome
        } else if self.progression.state().is_complete {
            Phase::Complete
        } else {
            Phase::InProgress
        }
    }

    pub fn progression(&self) -> &Progression {
        &self.progression
    }

    pub fn questions(&self) -> &QuestionSet {
        self.progression.questions()
    }

    pub fn state(&self) -> &QuizState {
        self.progression.state()
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.progression.current_question()
    }

    pub fn current_question_number(&self) -> usize {
        self.state().current_question + 1
    }

    pub fn total_questions(&self) -> usize {
        self.progression.total_questions()
    }

    pub fn highlighted(&self) -> usize {
        self.highlighted
    }

    pub fn result_scroll(&self) -> usize {
        self.result_scroll
    }

    pub fn start(&mut self) {
        if self.phase() == Phase::Welcome {
            self.started = true;
            self.highlighted = 0;
        }
    }

    fn option_count(&self) -> usize {
        self.current_question().map_or(0, |q| q.options.len())
    }

    pub fn highlight_next(&mut self) {
        let count = self.option_count();
        if count > 0 {
            self.highlighted = (self.highlighted + 1) % count;
        }
    }

    pub fn highlight_previous(&mut self) {
        let count = self.option_count();
        if count > 0 {
            self.highlighted = (self.highlighted + count - 1) % count;
        }
    }

    pub fn select_answer(&mut self, option: impl Into<String>) {
        if self.phase() == Phase::InProgress {
            self.progression.select_answer(option);
        }
    }

    /// Select the option under the highlight.
    pub fn select_highlighted(&mut self) {
        let option = self
            .current_question()
            .and_then(|q| q.options.get(self.highlighted))
            .cloned();
        if let Some(option) = option {
            self.select_answer(option);
        }
    }

    /// The shell only offers "next" once the current question has an answer.
    pub fn can_advance(&self) -> bool {
        self.phase() == Phase::InProgress && self.progression.current_answer().is_some()
    }

    pub fn advance(&mut self) {
        if self.can_advance() {
            self.progression.advance();
            self.highlighted = 0;
        }
    }

    /// Label for the advance control on the current question.
    pub fn advance_label(&self) -> &'static str {
        if self.progression.is_last_question() {
            "Complete Quest"
        } else {
            "Next Question"
        }
    }

    /// Back to the welcome screen with a fresh attempt over the same questions.
    pub fn restart(&mut self) {
        self.progression.restart();
        self.started = false;
        self.highlighted = 0;
        self.result_scroll = 0;
    }

    pub fn scroll_results_down(&mut self) {
        let max_scroll = self.total_questions().saturating_sub(1);
        self.result_scroll = (self.result_scroll + 1).min(max_scroll);
    }

    pub fn scroll_results_up(&mut self) {
        self.result_scroll = self.result_scroll.saturating_sub(1);
    }
}
