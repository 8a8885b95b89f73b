use anyhow::Result;
use clap::ValueEnum;
use itertools::Itertools;
use leetvault_libs::{
    api::{FieldFacetCount, FieldList, ListResultResponse, ListResultStats},
    catalog::{FacetCounts, FilterState, ProblemStore},
    view::RowView,
};
use serde_json::Value;
use std::io::Write;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RenderError {
    #[error("unknown column `{column}`, expected some of [{valid}]")]
    UnknownColumn { column: String, valid: &'static str },
}

#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub format: OutputFormat,
    pub facet: bool,
    pub columns: Vec<&'static str>,
}

impl RenderOptions {
    /// Resolves the requested columns against the row fields. All fields are
    /// used when none are given.
    pub fn new(
        format: OutputFormat,
        facet: bool,
        columns: Option<Vec<String>>,
    ) -> std::result::Result<Self, RenderError> {
        let columns = match columns {
            None => RowView::fields().to_vec(),
            Some(requested) => requested
                .iter()
                .map(|column| {
                    RowView::fields()
                        .iter()
                        .copied()
                        .find(|field| *field == column.trim())
                        .ok_or_else(|| RenderError::UnknownColumn {
                            column: column.clone(),
                            valid: RowView::field_list(),
                        })
                })
                .collect::<std::result::Result<Vec<_>, _>>()?,
        };

        Ok(Self {
            format,
            facet,
            columns,
        })
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            facet: false,
            columns: RowView::fields().to_vec(),
        }
    }
}

/// Derives the visible records for `filter` and writes them to `out`.
/// Returns the number of rendered rows.
pub fn render_list<W: Write>(
    out: &mut W,
    store: &ProblemStore,
    filter: &FilterState,
    options: &RenderOptions,
) -> Result<usize> {
    let records = store.derive(filter);
    let rows = records
        .iter()
        .map(|record| RowView::from(*record))
        .collect::<Vec<RowView>>();
    let total = store.len();
    let count = rows.len();

    tracing::info!(
        target: "querylog",
        "hits={} total={} params={}",
        count, total, serde_json::to_string(filter).unwrap_or_default()
    );

    let facet = if options.facet {
        Some(store.facets(filter))
    } else {
        None
    };

    match options.format {
        OutputFormat::Text => write_text(out, filter, &rows, total, facet.as_ref())?,
        OutputFormat::Tsv => write_tsv(out, &rows, &options.columns)?,
        OutputFormat::Json => {
            let response: ListResultResponse<&FilterState, RowView, FacetCounts> =
                ListResultResponse {
                    stats: ListResultStats {
                        total,
                        count,
                        params: filter,
                        facet,
                    },
                    items: rows,
                    message: None,
                };
            serde_json::to_writer_pretty(&mut *out, &response)?;
            writeln!(out)?;
        }
    }

    Ok(count)
}

/// Writes an empty `json` envelope carrying `message`, for failures that
/// happen before any row can be derived.
pub fn render_error<W: Write>(
    out: &mut W,
    filter: &FilterState,
    message: impl ToString,
) -> Result<()> {
    let response: ListResultResponse<&FilterState, RowView, FacetCounts> =
        ListResultResponse::error(filter, message);
    serde_json::to_writer_pretty(&mut *out, &response)?;
    writeln!(out)?;
    Ok(())
}

fn write_text<W: Write>(
    out: &mut W,
    filter: &FilterState,
    rows: &[RowView],
    total: usize,
    facet: Option<&FacetCounts>,
) -> Result<()> {
    writeln!(
        out,
        "Showing {} of {} problems (difficulty: {}, status: {}, category: {})",
        rows.len(),
        total,
        filter.difficulty,
        filter.status,
        filter.category
    )?;

    if rows.is_empty() {
        writeln!(out, "No problems match the current filters.")?;
    }

    for row in rows {
        writeln!(out)?;
        writeln!(
            out,
            "{} {} [{} {}]",
            row.number, row.name, row.difficulty, row.difficulty_color
        )?;
        writeln!(out, "  {}", row.description)?;
        writeln!(out, "  {} | {}", row.category, row.complexity)?;
        writeln!(
            out,
            "  {} ({}) | {}",
            row.status, row.status_class, row.date_solved
        )?;
        if let Some(notes) = &row.notes {
            writeln!(out, "  Notes: {}", notes)?;
        }
    }

    if let Some(facet) = facet {
        writeln!(out)?;
        writeln!(out, "difficulty: {}", facet_line(&facet.difficulty))?;
        writeln!(out, "status: {}", facet_line(&facet.status))?;
        writeln!(out, "category: {}", facet_line(&facet.category))?;
    }

    Ok(())
}

fn facet_line(facet: &FieldFacetCount) -> String {
    facet
        .counts
        .iter()
        .map(|element| format!("{} ({})", element.key, element.count))
        .join(", ")
}

fn write_tsv<W: Write>(out: &mut W, rows: &[RowView], columns: &[&str]) -> Result<()> {
    writeln!(out, "{}", columns.join("\t"))?;

    for row in rows {
        let value = serde_json::to_value(row)?;
        let line = columns
            .iter()
            .map(|column| match value.get(*column) {
                Some(Value::String(s)) => s.replace(['\t', '\n'], " "),
                Some(Value::Null) | None => String::new(),
                Some(other) => other.to_string(),
            })
            .join("\t");
        writeln!(out, "{}", line)?;
    }

    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use leetvault_libs::catalog::{Difficulty, Selection};

    fn render(filter: &FilterState, options: &RenderOptions) -> (usize, String) {
        let store = ProblemStore::sample();
        let mut out = Vec::new();
        let count = render_list(&mut out, &store, filter, options).unwrap();
        (count, String::from_utf8(out).unwrap())
    }

    #[test]
    fn text_lists_every_sample_row() {
        let (count, text) = render(&FilterState::default(), &RenderOptions::default());

        assert_eq!(count, 2);
        assert!(text.starts_with(
            "Showing 2 of 2 problems (difficulty: All, status: All, category: All)\n"
        ));
        assert!(text.contains("#1 Two Sum [Easy #00b8a3]\n"));
        assert!(text.contains("  Array & Hashing | Time: O(n) | Space: O(n)\n"));
        assert!(text.contains("  Solved (solved) | Solved: 2024-03-20\n"));
        assert!(text.contains("#2 Add Two Numbers [Medium #ffc01e]\n"));
        assert!(text.find("Two Sum").unwrap() < text.find("Add Two Numbers").unwrap());
    }

    #[test]
    fn text_reports_empty_result() {
        let filter = FilterState {
            difficulty: Selection::Only(Difficulty::Hard),
            ..FilterState::default()
        };
        let (count, text) = render(&filter, &RenderOptions::default());

        assert_eq!(count, 0);
        assert!(text.contains("Showing 0 of 2 problems (difficulty: Hard,"));
        assert!(text.contains("No problems match the current filters."));
    }

    #[test]
    fn text_with_facets() {
        let options = RenderOptions::new(OutputFormat::Text, true, None).unwrap();
        let (_, text) = render(&FilterState::default(), &options);

        assert!(text.contains("difficulty: Easy (1), Medium (1), Hard (0)\n"));
        assert!(text.contains("status: Solved (2), In Progress (0), Not Started (0)\n"));
    }

    #[test]
    fn json_envelope() {
        let filter = FilterState {
            difficulty: Selection::Only(Difficulty::Easy),
            ..FilterState::default()
        };
        let options = RenderOptions::new(OutputFormat::Json, false, None).unwrap();
        let (count, text) = render(&filter, &options);
        let value: Value = serde_json::from_str(&text).unwrap();

        assert_eq!(count, 1);
        assert_eq!(value["stats"]["total"], 2);
        assert_eq!(value["stats"]["count"], 1);
        assert_eq!(value["stats"]["params"]["difficulty"], "Easy");
        assert_eq!(value["stats"]["params"]["category"], "All");
        assert_eq!(value["stats"]["facet"], Value::Null);
        assert_eq!(value["items"][0]["name"], "Two Sum");
        assert_eq!(value["items"][0]["status_class"], "solved");
        assert_eq!(value["message"], Value::Null);
    }

    #[test]
    fn json_error_envelope() {
        let filter = FilterState {
            difficulty: Selection::Only(Difficulty::Medium),
            ..FilterState::default()
        };
        let mut out = Vec::new();
        render_error(&mut out, &filter, "failed to load problems from seed.json").unwrap();
        let value: Value = serde_json::from_slice(&out).unwrap();

        assert_eq!(value["stats"]["total"], 0);
        assert_eq!(value["stats"]["count"], 0);
        assert_eq!(value["stats"]["params"]["difficulty"], "Medium");
        assert_eq!(value["items"], serde_json::json!([]));
        assert_eq!(value["message"], "failed to load problems from seed.json");
    }

    #[test]
    fn tsv_with_selected_columns() {
        let options = RenderOptions::new(
            OutputFormat::Tsv,
            false,
            Some(vec![String::from("number"), String::from("name"), String::from("notes")]),
        )
        .unwrap();
        let (_, text) = render(&FilterState::default(), &options);

        assert_eq!(
            text,
            "number\tname\tnotes\n#1\tTwo Sum\tClassic hash map problem\n#2\tAdd Two Numbers\tWatch out for carry at the end\n"
        );
    }

    #[test]
    fn tsv_header_defaults_to_every_field() {
        let options = RenderOptions::new(OutputFormat::Tsv, false, None).unwrap();
        let (_, text) = render(&FilterState::default(), &options);
        let header = text.lines().next().unwrap();

        assert_eq!(header, RowView::field_list().replace(',', "\t"));
    }

    #[test]
    fn unknown_column_is_rejected() {
        let err = RenderOptions::new(OutputFormat::Tsv, false, Some(vec![String::from("color")]))
            .unwrap_err();

        assert_eq!(
            err,
            RenderError::UnknownColumn {
                column: String::from("color"),
                valid: RowView::field_list(),
            }
        );
    }
}
