//! Structured warnings and errors produced while compiling a grid.
//!
//! Warnings never stop compilation: the compiler substitutes a safe value and carries on.
//! Errors describe station layouts the simulator cannot use; any error prevents a
//! [`crate::config::model::Configuration`] from being assembled. Rendering either kind is
//! left to the caller.
use std::fmt;

use serde::Serialize;
use thiserror::Error;

use crate::grid::MAX_GRID_SIZE;
use crate::station::StationRole;

/// How serious a diagnostic is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Warning,
    Error,
}

/// A recoverable problem. Compilation continues with substituted values.
#[non_exhaustive]
#[derive(Clone, Debug, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Warning {
    #[error(
        "cell ({x}, {y}) holds invalid value '{raw}'; changed to 3 - SM & TC obstacles"
    )]
    InvalidCell { x: usize, y: usize, raw: String },

    #[error("grid of {cols}x{rows} exceeds the allowed size of {max}")]
    OversizedGrid { cols: usize, rows: usize, max: usize },

    #[error("grid has no stations; at least one station is expected")]
    NoStations,
}

impl Warning {
    pub(crate) fn oversized(cols: usize, rows: usize) -> Self {
        Warning::OversizedGrid {
            cols,
            rows,
            max: MAX_GRID_SIZE,
        }
    }
}

/// A station layout violation. Any of these rejects the grid.
#[non_exhaustive]
#[derive(Clone, Debug, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StationError {
    #[error("invalid station value {value}; station values must end with 0, 1 or 2")]
    InvalidStationRole { value: u32 },

    #[error("duplicated station value {value} found in {cells} cells")]
    DuplicateStationValue { value: u32, cells: usize },

    #[error(
        "station id {id} ends with 0 (drop & pick) and is also used by values ending with 1 or 2"
    )]
    MixedStationId { id: u32 },

    #[error("station id {id} has no {missing} cell; values ending with 1 (drop) must pair with values ending with 2 (pick)")]
    MissingStationPair { id: u32, missing: StationRole },
}

/// Collected warnings and errors from one compilation.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Diagnostics {
    warnings: Vec<Warning>,
    errors: Vec<StationError>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_warning(&mut self, warning: Warning) {
        self.warnings.push(warning);
    }

    pub fn push_error(&mut self, error: StationError) {
        self.errors.push(error);
    }

    pub fn extend_warnings(&mut self, warnings: impl IntoIterator<Item = Warning>) {
        self.warnings.extend(warnings);
    }

    pub fn extend_errors(&mut self, errors: impl IntoIterator<Item = StationError>) {
        self.errors.extend(errors);
    }

    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }

    pub fn errors(&self) -> &[StationError] {
        &self.errors
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn is_empty(&self) -> bool {
        self.warnings.is_empty() && self.errors.is_empty()
    }

    /// Highest severity present, if any diagnostic was recorded.
    pub fn severity(&self) -> Option<Severity> {
        if self.has_errors() {
            Some(Severity::Error)
        } else if !self.warnings.is_empty() {
            Some(Severity::Warning)
        } else {
            None
        }
    }

    /// All diagnostics as `(severity, message)` pairs, errors first.
    pub fn messages(&self) -> Vec<(Severity, String)> {
        self.errors
            .iter()
            .map(|e| (Severity::Error, e.to_string()))
            .chain(
                self.warnings
                    .iter()
                    .map(|w| (Severity::Warning, w.to_string())),
            )
            .collect()
    }
}

impl fmt::Display for Diagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} error(s), {} warning(s)",
            self.errors.len(),
            self.warnings.len()
        )?;
        for (i, error) in self.errors.iter().enumerate() {
            let sep = if i == 0 { ": " } else { "; " };
            write!(f, "{sep}{error}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_reflects_worst_entry() {
        let mut diagnostics = Diagnostics::new();
        assert!(diagnostics.is_empty());
        assert_eq!(diagnostics.severity(), None);

        diagnostics.push_warning(Warning::NoStations);
        assert!(!diagnostics.is_empty());
        assert_eq!(diagnostics.severity(), Some(Severity::Warning));

        diagnostics.push_error(StationError::MixedStationId { id: 3 });
        assert_eq!(diagnostics.severity(), Some(Severity::Error));
    }

    #[test]
    fn messages_list_errors_before_warnings() {
        let mut diagnostics = Diagnostics::new();
        diagnostics.push_warning(Warning::NoStations);
        diagnostics.push_error(StationError::InvalidStationRole { value: 15 });

        let messages = diagnostics.messages();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].0, Severity::Error);
        assert!(messages[0].1.contains("15"));
        assert_eq!(messages[1].0, Severity::Warning);
    }

    #[test]
    fn display_names_every_error() {
        let mut diagnostics = Diagnostics::new();
        diagnostics.push_error(StationError::DuplicateStationValue {
            value: 21,
            cells: 2,
        });
        diagnostics.push_error(StationError::MissingStationPair {
            id: 3,
            missing: StationRole::Pick,
        });

        let text = diagnostics.to_string();
        assert!(text.starts_with("2 error(s), 0 warning(s): "));
        assert!(text.contains("value 21"));
        assert!(text.contains("station id 3 has no pick cell"));
    }

    #[test]
    fn serializes_with_kind_tags() {
        let mut diagnostics = Diagnostics::new();
        diagnostics.push_warning(Warning::InvalidCell {
            x: 1,
            y: 2,
            raw: "5".into(),
        });

        let value = serde_json::to_value(&diagnostics).expect("serializable");
        assert_eq!(value["warnings"][0]["kind"], "invalid_cell");
        assert_eq!(value["warnings"][0]["raw"], "5");
    }
}
