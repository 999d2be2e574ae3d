//! Questionnaire - questions, their dimensions, and the answers collected for them.

mod answers;
mod dimension;
mod question;

pub use answers::AnswerSet;
pub use dimension::Dimension;
pub use question::{Question, QuestionCatalog};
