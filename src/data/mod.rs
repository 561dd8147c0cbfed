mod error;
mod fallback;
mod payload;
mod resolver;
mod set;

pub use error::ResolveError;
pub use fallback::fallback_questions;
pub use payload::{parse_questions, questions_from_value};
pub use resolver::Resolver;
pub use set::{Origin, QuestionSet};
