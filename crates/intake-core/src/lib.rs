pub mod error;
pub mod report;

pub use error::{FieldError, Severity};
pub use report::{BugReport, Section};
