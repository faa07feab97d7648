//! Text and JSON rendering. Nothing in the core prints; everything shown to the
//! user goes through here.

use crate::core::engine::{MapReport, MutationOutcome};
use crate::core::{Antenna, HazardPosition};
use crate::utils::error::Result;
use std::fmt::Write;

const TABLE_BORDER: &str = "===========";

pub fn format_antennas<'a, I>(antennas: I) -> String
where
    I: IntoIterator<Item = &'a Antenna>,
{
    let mut out = String::new();
    for antenna in antennas {
        let _ = writeln!(
            out,
            "Antenna {} em ({}, {})",
            antenna.frequency, antenna.position.x, antenna.position.y
        );
    }
    if out.is_empty() {
        out.push_str("No antennas registered.\n");
    }
    out
}

pub fn format_hazard_table<'a, I>(hazards: I) -> String
where
    I: IntoIterator<Item = &'a HazardPosition>,
{
    let mut out = String::new();
    let _ = writeln!(out, "{TABLE_BORDER}");
    let _ = writeln!(out, "| X  | Y  |");
    let _ = writeln!(out, "{TABLE_BORDER}");
    for position in hazards {
        let _ = writeln!(out, "| {:2} | {:2} |", position.x, position.y);
    }
    let _ = writeln!(out, "{TABLE_BORDER}");
    out
}

pub fn format_mutation(outcome: &MutationOutcome) -> String {
    match outcome {
        MutationOutcome::Inserted { antenna } => format!(
            "Antenna {} inserted at ({}, {})",
            antenna.frequency, antenna.position.x, antenna.position.y
        ),
        MutationOutcome::Rejected { reason, .. } => format!("Error: {}", reason),
        MutationOutcome::Removed { antenna } => format!(
            "Antenna removed at ({}, {})",
            antenna.position.x, antenna.position.y
        ),
        MutationOutcome::NotFound { position } => {
            format!("No antenna at ({}, {})", position.x, position.y)
        }
    }
}

pub fn format_frequencies(frequencies: &[char]) -> String {
    if frequencies.is_empty() {
        return "Frequencies: none\n".to_string();
    }
    let joined: Vec<String> = frequencies.iter().map(char::to_string).collect();
    format!("Frequencies: {}\n", joined.join(", "))
}

pub fn render_text(report: &MapReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Loaded antennas:");
    out.push_str(&format_antennas(&report.loaded));

    if !report.mutations.is_empty() {
        out.push('\n');
        for outcome in &report.mutations {
            let _ = writeln!(out, "{}", format_mutation(outcome));
        }
        let _ = writeln!(out, "\nAntennas after changes:");
        out.push_str(&format_antennas(&report.remaining));
    }

    out.push('\n');
    out.push_str(&format_frequencies(&report.frequencies));

    let _ = writeln!(out, "\nHazard positions:");
    out.push_str(&format_hazard_table(&report.hazards));
    out
}

pub fn render_json(report: &MapReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}
