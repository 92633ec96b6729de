//! Choice Builder
//!
//! Turns reference rows into label/value pairs for single-selection
//! prompts. Order always matches the input row order; nothing is re-sorted.
//!
//! Manager selection gets a leading "None" sentinel so "no manager" is a
//! first-class choice rather than a magic id.

use crate::queries::IdLabel;

/// Label shown for the no-manager sentinel
pub const NO_MANAGER_LABEL: &str = "None";

/// A label/value pair offered for single selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    pub label: String,
    pub value: u32,
}

/// A manager selection pair; `value` of `None` means "no manager"
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManagerChoice {
    pub label: String,
    pub value: Option<u32>,
}

/// Build selection choices from reference rows, preserving input order
///
/// An empty row set yields an empty choice list; the interactive layer
/// decides what to do with it.
pub fn build_choices(rows: &[IdLabel]) -> Vec<Choice> {
    rows.iter()
        .map(|row| Choice { label: row.label.clone(), value: row.id })
        .collect()
}

/// Build manager choices with a leading "None" sentinel
pub fn build_manager_choices(rows: &[IdLabel]) -> Vec<ManagerChoice> {
    let mut choices = Vec::with_capacity(rows.len() + 1);
    choices.push(ManagerChoice { label: NO_MANAGER_LABEL.to_string(), value: None });
    choices.extend(rows.iter().map(|row| ManagerChoice {
        label: row.label.clone(),
        value: Some(row.id),
    }));
    choices
}

/// Labels of a choice list, in order, for handing to a selection prompt
pub fn labels(choices: &[Choice]) -> Vec<String> {
    choices.iter().map(|c| c.label.clone()).collect()
}

/// Labels of a manager choice list, in order
pub fn manager_labels(choices: &[ManagerChoice]) -> Vec<String> {
    choices.iter().map(|c| c.label.clone()).collect()
}
