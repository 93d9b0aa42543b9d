use thiserror::Error;

use crate::report::Section;

/// Whether a finding blocks acceptance of the submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Warning,
    Error,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }
}

/// One validation finding, tied to the field or line it concerns.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("document is empty or whitespace-only")]
    EmptyDocument,

    #[error("required field `{field}` is missing or empty")]
    MissingRequiredField { field: Section },

    #[error("unrecognized section header: `{line}`")]
    UnrecognizedHeader { line: String },
}

impl FieldError {
    pub fn severity(&self) -> Severity {
        match self {
            FieldError::UnrecognizedHeader { .. } => Severity::Warning,
            FieldError::EmptyDocument | FieldError::MissingRequiredField { .. } => Severity::Error,
        }
    }

    /// The section this finding concerns, where one applies.
    pub fn field(&self) -> Option<Section> {
        match self {
            FieldError::MissingRequiredField { field } => Some(*field),
            FieldError::EmptyDocument | FieldError::UnrecognizedHeader { .. } => None,
        }
    }

    pub fn is_fatal(&self) -> bool {
        self.severity() == Severity::Error
    }
}
