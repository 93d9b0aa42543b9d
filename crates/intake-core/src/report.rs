use std::fmt;

use serde::{Deserialize, Serialize};

/// A validated bug-report submission.
///
/// Built by the intake parser from template-filled text, or deserialized
/// directly from a structured form payload. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BugReport {
    pub description: String,
    pub affected_version: Option<String>,
    pub python_version: Option<String>,
    pub operating_system: Option<String>,
    pub reproduction_steps: Vec<String>,
    pub expected_behavior: String,
    pub logs: Option<String>,
}

/// The labeled sections of the bug-report template, in template order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    Description,
    AffectedVersion,
    PythonVersion,
    OperatingSystem,
    ReproductionSteps,
    ExpectedBehavior,
    Logs,
}

impl Section {
    pub const ALL: &[Section] = &[
        Section::Description,
        Section::AffectedVersion,
        Section::PythonVersion,
        Section::OperatingSystem,
        Section::ReproductionSteps,
        Section::ExpectedBehavior,
        Section::Logs,
    ];

    /// The header label as it appears in the template.
    pub fn label(&self) -> &'static str {
        match self {
            Section::Description => "Describe the bug",
            Section::AffectedVersion => "Affected version",
            Section::PythonVersion => "Python version",
            Section::OperatingSystem => "Operating System",
            Section::ReproductionSteps => "To Reproduce",
            Section::ExpectedBehavior => "Expected behavior",
            Section::Logs => "Logs and outputs",
        }
    }

    /// The field name used in error messages and structured payloads.
    pub fn field_name(&self) -> &'static str {
        match self {
            Section::Description => "description",
            Section::AffectedVersion => "affected_version",
            Section::PythonVersion => "python_version",
            Section::OperatingSystem => "operating_system",
            Section::ReproductionSteps => "reproduction_steps",
            Section::ExpectedBehavior => "expected_behavior",
            Section::Logs => "logs",
        }
    }

    /// Required sections must be non-empty after trimming.
    pub fn is_required(&self) -> bool {
        matches!(self, Section::Description | Section::ExpectedBehavior)
    }

    /// Case-insensitive exact match against the known labels.
    pub fn match_label(s: &str) -> Option<Self> {
        Section::ALL
            .iter()
            .copied()
            .find(|section| section.label().eq_ignore_ascii_case(s))
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.field_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_match_case_insensitively() {
        for section in Section::ALL {
            assert_eq!(
                Section::match_label(section.label()),
                Some(*section),
                "Section::{:?} should match its own label",
                section
            );
            assert_eq!(
                Section::match_label(&section.label().to_uppercase()),
                Some(*section)
            );
        }
        assert_eq!(Section::match_label("Steps to reproduce"), None);
    }

    #[test]
    fn only_description_and_expected_behavior_are_required() {
        let required: Vec<_> = Section::ALL
            .iter()
            .filter(|s| s.is_required())
            .collect();
        assert_eq!(
            required,
            vec![&Section::Description, &Section::ExpectedBehavior]
        );
    }

    #[test]
    fn report_round_trips_through_json() {
        let report = BugReport {
            description: "panic on startup".to_string(),
            affected_version: Some("1.4.2".to_string()),
            python_version: None,
            operating_system: Some("Debian 12".to_string()),
            reproduction_steps: vec!["open app".to_string(), "crash".to_string()],
            expected_behavior: "no panic".to_string(),
            logs: None,
        };
        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"affected_version\":\"1.4.2\""));
        let back: BugReport = serde_json::from_str(&json).unwrap();
        assert_eq!(back, report);
    }
}
