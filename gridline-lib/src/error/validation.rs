//! ValidationError for form payloads

/// Errors raised when validating a form payload before submission.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// The question prompt is empty or whitespace.
    #[error("Question prompt must not be empty")]
    EmptyPrompt,

    /// A multiple-choice question has too few choices.
    #[error("Multiple-choice questions need at least {min} choices, got {got}")]
    NotEnoughChoices { min: usize, got: usize },

    /// A multiple-choice question does not have exactly one correct choice.
    #[error("Multiple-choice questions need exactly one correct choice, got {got}")]
    AmbiguousCorrectChoice { got: usize },

    /// A choice has empty text.
    #[error("Choice text must not be empty")]
    EmptyChoice,
}
