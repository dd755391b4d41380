//! Bank-question form payloads
//!
//! Question submissions are a tagged variant per question type, validated
//! before encoding. Serialization to the backend's flat wire shape is
//! isolated to [`encode_question`]; nothing else in the crate manipulates
//! ad hoc string-keyed payloads.

use serde::Deserialize;
use serde::Serialize;
use serde_json::json;

use crate::error::ValidationError;

/// One choice of a multiple-choice question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choice {
    /// The choice text.
    pub text: String,
    /// Whether this is the correct choice.
    pub correct: bool,
}

impl Choice {
    /// Creates a new choice.
    pub fn new(text: impl Into<String>, correct: bool) -> Self {
        Self {
            text: text.into(),
            correct,
        }
    }
}

/// A bank-question form, tagged by question type.
///
/// # Example
///
/// ```
/// use gridline_lib::forms::Choice;
/// use gridline_lib::forms::QuestionForm;
///
/// let question = QuestionForm::MultipleChoice {
///     prompt: "2 + 2 = ?".to_string(),
///     choices: vec![
///         Choice::new("3", false),
///         Choice::new("4", true),
///         Choice::new("5", false),
///     ],
/// };
/// assert!(question.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum QuestionForm {
    /// A question with several choices, exactly one correct.
    MultipleChoice {
        /// The question prompt.
        prompt: String,
        /// The offered choices.
        choices: Vec<Choice>,
    },
    /// A true/false question.
    TrueFalse {
        /// The question prompt.
        prompt: String,
        /// The correct answer.
        answer: bool,
    },
    /// A free-text question.
    Written {
        /// The question prompt.
        prompt: String,
        /// A model answer for graders, if provided.
        model_answer: Option<String>,
    },
}

impl QuestionForm {
    /// Returns the wire tag of this question type.
    pub fn kind(&self) -> &'static str {
        match self {
            QuestionForm::MultipleChoice { .. } => "multiple_choice",
            QuestionForm::TrueFalse { .. } => "true_false",
            QuestionForm::Written { .. } => "written",
        }
    }

    /// Returns the question prompt.
    pub fn prompt(&self) -> &str {
        match self {
            QuestionForm::MultipleChoice { prompt, .. } => prompt,
            QuestionForm::TrueFalse { prompt, .. } => prompt,
            QuestionForm::Written { prompt, .. } => prompt,
        }
    }

    /// Validates the form before submission.
    ///
    /// # Errors
    ///
    /// Rejects empty prompts; multiple-choice questions additionally need at
    /// least two non-empty choices with exactly one marked correct.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.prompt().trim().is_empty() {
            return Err(ValidationError::EmptyPrompt);
        }

        if let QuestionForm::MultipleChoice { choices, .. } = self {
            if choices.len() < 2 {
                return Err(ValidationError::NotEnoughChoices {
                    min: 2,
                    got: choices.len(),
                });
            }
            if choices.iter().any(|c| c.text.trim().is_empty()) {
                return Err(ValidationError::EmptyChoice);
            }
            let correct = choices.iter().filter(|c| c.correct).count();
            if correct != 1 {
                return Err(ValidationError::AmbiguousCorrectChoice { got: correct });
            }
        }

        Ok(())
    }
}

/// Encodes a question form into the backend's flat submission shape.
///
/// This is the only place the wire format is produced. Callers are expected
/// to [`validate`](QuestionForm::validate) first; encoding an invalid
/// multiple-choice form falls back to choice 0 as the correct option.
pub fn encode_question(form: &QuestionForm) -> serde_json::Value {
    match form {
        QuestionForm::MultipleChoice { prompt, choices } => {
            let correct_option = choices.iter().position(|c| c.correct).unwrap_or(0);
            json!({
                "type": form.kind(),
                "question": prompt,
                "options": choices.iter().map(|c| c.text.as_str()).collect::<Vec<_>>(),
                "correct_option": correct_option,
            })
        }
        QuestionForm::TrueFalse { prompt, answer } => json!({
            "type": form.kind(),
            "question": prompt,
            "answer": if *answer { 1 } else { 0 },
        }),
        QuestionForm::Written {
            prompt,
            model_answer,
        } => json!({
            "type": form.kind(),
            "question": prompt,
            "model_answer": model_answer,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn multiple_choice() -> QuestionForm {
        QuestionForm::MultipleChoice {
            prompt: "Capital of France?".to_string(),
            choices: vec![
                Choice::new("Lyon", false),
                Choice::new("Paris", true),
                Choice::new("Nice", false),
            ],
        }
    }

    #[test]
    fn test_validate_accepts_well_formed() {
        assert!(multiple_choice().validate().is_ok());
        let tf = QuestionForm::TrueFalse {
            prompt: "The sky is blue.".to_string(),
            answer: true,
        };
        assert!(tf.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_prompt() {
        let form = QuestionForm::Written {
            prompt: "   ".to_string(),
            model_answer: None,
        };
        assert_eq!(form.validate(), Err(ValidationError::EmptyPrompt));
    }

    #[test]
    fn test_validate_rejects_single_choice() {
        let form = QuestionForm::MultipleChoice {
            prompt: "Pick one".to_string(),
            choices: vec![Choice::new("only", true)],
        };
        assert_eq!(
            form.validate(),
            Err(ValidationError::NotEnoughChoices { min: 2, got: 1 })
        );
    }

    #[test]
    fn test_validate_rejects_two_correct_choices() {
        let form = QuestionForm::MultipleChoice {
            prompt: "Pick one".to_string(),
            choices: vec![Choice::new("a", true), Choice::new("b", true)],
        };
        assert_eq!(
            form.validate(),
            Err(ValidationError::AmbiguousCorrectChoice { got: 2 })
        );
    }

    #[test]
    fn test_encode_multiple_choice() {
        let encoded = encode_question(&multiple_choice());
        assert_eq!(encoded["type"], "multiple_choice");
        assert_eq!(encoded["question"], "Capital of France?");
        assert_eq!(encoded["options"][1], "Paris");
        assert_eq!(encoded["correct_option"], 1);
    }

    #[test]
    fn test_encode_true_false_uses_numeric_answer() {
        let form = QuestionForm::TrueFalse {
            prompt: "Water is wet.".to_string(),
            answer: false,
        };
        let encoded = encode_question(&form);
        assert_eq!(encoded["answer"], 0);
    }

    #[test]
    fn test_tagged_serde_roundtrip() {
        let form = multiple_choice();
        let json = serde_json::to_string(&form).unwrap();
        assert!(json.contains(r#""kind":"multiple_choice""#));
        let back: QuestionForm = serde_json::from_str(&json).unwrap();
        assert_eq!(back, form);
    }
}
