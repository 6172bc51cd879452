//! Rendering of a readiness report.
//!
//! Normal output walks the groups in order: a numbered heading, one
//! glyph line per check, and the hint under each failure. Quiet output
//! keeps only failures. Verbose output adds each check's details.

use crate::config::StudyConfig;
use crate::readiness::{CheckGroup, CheckResult, RunReport};
use crate::ui::{StatusKind, UserInterface};

/// Print every group of the report followed by the closing banner.
pub fn show_report(ui: &mut dyn UserInterface, report: &RunReport, config: &StudyConfig) {
    let mode = ui.output_mode();
    ui.show_header(&format!("{} - Setup Verification", config.app_name));

    for group in CheckGroup::ALL {
        let results: Vec<&CheckResult> = report
            .in_group(group)
            .filter(|r| mode.shows_passing() || !r.passed)
            .collect();
        if results.is_empty() {
            continue;
        }

        if mode.shows_passing() {
            ui.show_heading(&format!("{}. {}", group.number(), group.title()));
        }
        for result in results {
            show_result(ui, result, mode.shows_details());
        }
        if mode.shows_passing() {
            ui.message("");
        }
    }

    show_banner(ui, report, config);
}

/// Print one check line, its hint on failure, and optionally its details.
pub fn show_result(ui: &mut dyn UserInterface, result: &CheckResult, details: bool) {
    ui.show_check(StatusKind::from(result), &result.label);
    if let Some(hint) = &result.hint {
        ui.show_hint(hint);
    }
    if details {
        for line in &result.details {
            ui.message(&format!("    · {}", line));
        }
    }
}

/// Print the ready / not-ready banner.
pub fn show_banner(ui: &mut dyn UserInterface, report: &RunReport, config: &StudyConfig) {
    if report.is_ready() {
        ui.success("All checks passed! You're ready to run the study.");
        let optional = report.informational_failures().len();
        if optional > 0 {
            ui.message(&format!(
                "{} optional check(s) not satisfied; the study can still run.",
                optional
            ));
        }
        let mut steps = config.next_steps.iter();
        if let Some(first) = steps.next() {
            ui.message("");
            ui.message("To start the study, run:");
            ui.show_command(first);
        }
        let rest: Vec<_> = steps.collect();
        if !rest.is_empty() {
            ui.message("");
            ui.message("Or manually:");
            for step in rest {
                ui.show_command(step);
            }
        }
    } else {
        ui.warning("Some issues were found. Please fix them before running the study.");
        ui.message("");
        ui.message(&format!(
            "See {} for detailed installation instructions.",
            config.setup_doc
        ));
    }
}
