// src/core/versions.rs

use crate::models::VersionEntry;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Leading whitespace and `*` markers the tool prints before a version.
    static ref LEADING_MARKERS: Regex = Regex::new(r"^[\s*]+").expect("static regex is valid");
}

/// Splits `swapenv version ls` output into entries.
///
/// Lines that are blank, or hold nothing but markers, are dropped. The first
/// remaining entry is the latest release and is labelled as such. Each
/// entry's `version` is the bare identifier with markers removed, ready to
/// pass back to `swapenv version <id>`.
pub fn parse_version_list(output: &str) -> Vec<VersionEntry> {
    output
        .lines()
        .filter_map(|line| {
            let version = strip_markers(line);
            (!version.is_empty()).then_some((line, version))
        })
        .enumerate()
        .map(|(index, (line, version))| {
            let latest = index == 0;
            let label = if latest {
                format!(t!("versions.label.latest"), version = line)
            } else {
                format!(t!("versions.label.other"), version = line)
            };
            VersionEntry {
                label,
                version,
                latest,
            }
        })
        .collect()
}

/// Removes leading markers and surrounding whitespace from a version line.
pub fn strip_markers(line: &str) -> String {
    LEADING_MARKERS.replace(line, "").trim().to_string()
}
