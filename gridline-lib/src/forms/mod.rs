//! Form payload models

mod question;

pub use question::Choice;
pub use question::QuestionForm;
pub use question::encode_question;
