use intake_core::{BugReport, FieldError, Section};

/// Validate raw submission text against the bug-report template layout.
///
/// The scan walks the input once, left to right, splitting it into sections
/// at each known header (case-insensitive exact label match). Every finding
/// is collected; nothing short-circuits. `Err` is returned only when at
/// least one fatal finding is present, and it carries the full ordered list,
/// warnings included. Warning-only input validates successfully.
pub fn validate(raw: &str) -> Result<BugReport, Vec<FieldError>> {
    let (report, errors) = scan(raw);
    if errors.iter().any(FieldError::is_fatal) {
        Err(errors)
    } else {
        Ok(report)
    }
}

/// Every finding from a scan, warnings included, even when the input would
/// validate. Lets callers surface non-fatal problems on accepted reports.
pub fn diagnostics(raw: &str) -> Vec<FieldError> {
    scan(raw).1
}

fn scan(raw: &str) -> (BugReport, Vec<FieldError>) {
    let mut report = BugReport {
        description: String::new(),
        affected_version: None,
        python_version: None,
        operating_system: None,
        reproduction_steps: Vec::new(),
        expected_behavior: String::new(),
        logs: None,
    };
    let mut errors = Vec::new();

    if raw.trim().is_empty() {
        errors.push(FieldError::EmptyDocument);
        return (report, errors);
    }

    let mut sections: Vec<(Section, String)> = Vec::new();

    for line in raw.lines() {
        let trimmed = line.trim();

        let section = match adorned_label(trimmed) {
            Some(label) => {
                let matched = Section::match_label(label);
                if matched.is_none() {
                    errors.push(FieldError::UnrecognizedHeader {
                        line: trimmed.to_string(),
                    });
                }
                matched
            }
            // Bare label lines also count as headers.
            None => Section::match_label(trimmed.trim_end_matches(':')),
        };

        if let Some(section) = section {
            sections.push((section, String::new()));
            continue;
        }

        // Body text, including adorned lines that matched no known label.
        // Text before the first known header belongs to no field.
        if let Some((_, body)) = sections.last_mut() {
            body.push_str(line);
            body.push('\n');
        }
    }

    for (section, body) in sections {
        let body = body.trim();
        match section {
            Section::Description => report.description = body.to_string(),
            Section::AffectedVersion => report.affected_version = optional(body),
            Section::PythonVersion => report.python_version = optional(body),
            Section::OperatingSystem => report.operating_system = optional(body),
            Section::ReproductionSteps => report.reproduction_steps = split_steps(body),
            Section::ExpectedBehavior => report.expected_behavior = body.to_string(),
            Section::Logs => report.logs = optional(body),
        }
    }

    if report.description.is_empty() {
        errors.push(FieldError::MissingRequiredField {
            field: Section::Description,
        });
    }
    if report.expected_behavior.is_empty() {
        errors.push(FieldError::MissingRequiredField {
            field: Section::ExpectedBehavior,
        });
    }

    (report, errors)
}

fn optional(body: &str) -> Option<String> {
    if body.is_empty() {
        None
    } else {
        Some(body.to_string())
    }
}

/// Extract the label text when a line is adorned like a header.
///
/// Recognizes markdown headings (`## Label`) and bold-wrapped labels
/// (`**Label**`), each with an optional trailing colon.
fn adorned_label(line: &str) -> Option<&str> {
    if let Some(rest) = line.strip_prefix('#') {
        let label = rest
            .trim_start_matches('#')
            .trim()
            .trim_end_matches(':')
            .trim_end();
        if label.is_empty() {
            return None;
        }
        return Some(label);
    }

    let line = line.strip_suffix(':').unwrap_or(line);
    let inner = line.strip_prefix("**")?.strip_suffix("**")?.trim();
    if inner.is_empty() {
        return None;
    }
    Some(inner)
}

/// Split a reproduction-steps body into an ordered sequence of steps.
///
/// Steps are introduced by numbered prefixes (`1.`, `2)`, ...). Lines
/// without a numeral prefix continue the previous step; unnumbered text
/// before the first numbered line opens the first step.
fn split_steps(body: &str) -> Vec<String> {
    let mut steps: Vec<String> = Vec::new();

    for line in body.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        if let Some(rest) = strip_step_number(trimmed) {
            steps.push(rest.to_string());
        } else if let Some(last) = steps.last_mut() {
            if !last.is_empty() {
                last.push(' ');
            }
            last.push_str(trimmed);
        } else {
            steps.push(trimmed.to_string());
        }
    }

    steps
}

fn strip_step_number(line: &str) -> Option<&str> {
    let digits = line
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(line.len());
    if digits == 0 {
        return None;
    }
    let rest = &line[digits..];
    let rest = rest.strip_prefix('.').or_else(|| rest.strip_prefix(')'))?;
    Some(rest.trim_start())
}
