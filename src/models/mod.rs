mod question;
mod state;

pub use question::{Question, QuestionId};
pub use state::{Phase, QuizState};
