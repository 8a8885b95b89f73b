use crate::{
    api::FieldList,
    catalog::{Label, ProblemRecord},
};
use leetvault_derive::FieldList;
use serde::Serialize;

/// Display color of a difficulty label. Unknown labels fall back to black.
pub fn difficulty_color(difficulty: &str) -> &'static str {
    match difficulty {
        "Easy" => "#00b8a3",
        "Medium" => "#ffc01e",
        "Hard" => "#ff375f",
        _ => "#000000",
    }
}

/// Badge class of a status label, e.g. `In Progress` becomes `in-progress`.
pub fn status_class(status: &str) -> String {
    status.to_lowercase().replace(' ', "-")
}

/// Display fields of one problem row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FieldList)]
pub struct RowView {
    pub number: String,
    pub name: String,
    pub difficulty: String,
    pub difficulty_color: &'static str,
    pub description: String,
    pub category: String,
    pub complexity: String,
    pub status: String,
    pub status_class: String,
    pub date_solved: String,
    pub notes: Option<String>,
}

impl From<&ProblemRecord> for RowView {
    fn from(record: &ProblemRecord) -> Self {
        let difficulty = record.difficulty.label();
        let status = record.status.label();

        RowView {
            number: format!("#{}", record.number),
            name: record.name.clone(),
            difficulty: difficulty.to_string(),
            difficulty_color: difficulty_color(difficulty),
            description: record.description.clone(),
            category: record.category.label().to_string(),
            complexity: format!(
                "Time: {} | Space: {}",
                record.time_complexity, record.space_complexity
            ),
            status: status.to_string(),
            status_class: status_class(status),
            date_solved: format!("Solved: {}", record.date_solved),
            notes: record.notes.clone(),
        }
    }
}
