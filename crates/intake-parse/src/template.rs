use intake_core::{BugReport, Section};

/// Serialize a report back into the template layout.
///
/// Sections come out in template order with bold headers; optional sections
/// that are `None` are omitted. Re-validating the output reproduces the
/// report.
pub fn render(report: &BugReport) -> String {
    let mut out = String::new();

    push_section(&mut out, Section::Description, Some(&report.description));
    push_section(
        &mut out,
        Section::AffectedVersion,
        report.affected_version.as_deref(),
    );
    push_section(
        &mut out,
        Section::PythonVersion,
        report.python_version.as_deref(),
    );
    push_section(
        &mut out,
        Section::OperatingSystem,
        report.operating_system.as_deref(),
    );

    if !report.reproduction_steps.is_empty() {
        out.push_str(&format!("**{}**\n", Section::ReproductionSteps.label()));
        for (i, step) in report.reproduction_steps.iter().enumerate() {
            out.push_str(&format!("{}. {}\n", i + 1, step));
        }
        out.push('\n');
    }

    push_section(
        &mut out,
        Section::ExpectedBehavior,
        Some(&report.expected_behavior),
    );
    push_section(&mut out, Section::Logs, report.logs.as_deref());

    out
}

/// The blank submission form, placeholder prompts included.
pub fn blank() -> String {
    let mut out = String::new();
    for section in Section::ALL {
        out.push_str(&format!(
            "**{}**\n{}\n\n",
            section.label(),
            placeholder(*section)
        ));
    }
    out
}

fn push_section(out: &mut String, section: Section, body: Option<&str>) {
    if let Some(body) = body {
        out.push_str(&format!("**{}**\n{}\n\n", section.label(), body));
    }
}

fn placeholder(section: Section) -> &'static str {
    match section {
        Section::Description => "A clear and concise description of what the bug is.",
        Section::AffectedVersion => "The version you are running, e.g. from `--version`.",
        Section::PythonVersion => "The interpreter version, if applicable.",
        Section::OperatingSystem => "Name and version, e.g. Debian 12.",
        Section::ReproductionSteps => "1. ...\n2. ...\n3. ...",
        Section::ExpectedBehavior => {
            "A clear and concise description of what you expected to happen."
        }
        Section::Logs => "If applicable, add logs or program output to help explain the problem.",
    }
}
