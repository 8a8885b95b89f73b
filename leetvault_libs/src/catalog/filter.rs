use crate::catalog::{
    error::{CatalogError, Result},
    model::{Category, Difficulty, Label, ProblemRecord, Status},
};
use serde::{Serialize, Serializer};
use std::{fmt, str::FromStr};

const ALL: &str = "All";

/// A filter value: either the wildcard or one concrete value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Selection<T> {
    All,
    Only(T),
}

impl<T> Default for Selection<T> {
    fn default() -> Self {
        Selection::All
    }
}

impl<T: PartialEq> Selection<T> {
    pub fn matches(&self, value: &T) -> bool {
        match self {
            Selection::All => true,
            Selection::Only(selected) => selected == value,
        }
    }
}

impl<T: Label> Selection<T> {
    pub fn label(&self) -> &'static str {
        match self {
            Selection::All => ALL,
            Selection::Only(value) => value.label(),
        }
    }
}

impl<T: Label> fmt::Display for Selection<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl<T: Label> FromStr for Selection<T> {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self> {
        if s.trim().eq_ignore_ascii_case(ALL) {
            Ok(Selection::All)
        } else {
            T::parse_label(s).map(Selection::Only)
        }
    }
}

impl<T: Label> Serialize for Selection<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

/// Names one of the three filterable fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterField {
    Difficulty,
    Status,
    Category,
}

impl FromStr for FilterField {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "difficulty" => Ok(FilterField::Difficulty),
            "status" => Ok(FilterField::Status),
            "category" => Ok(FilterField::Category),
            _ => Err(CatalogError::UnknownField(s.to_string())),
        }
    }
}

/// The active filter selections of a view. Every field starts as `All`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct FilterState {
    pub difficulty: Selection<Difficulty>,
    pub status: Selection<Status>,
    pub category: Selection<Category>,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_unfiltered(&self) -> bool {
        *self == Self::default()
    }

    /// Replaces one field with a parsed value. On a parse error the state is
    /// left unchanged.
    pub fn set(&mut self, field: FilterField, value: &str) -> Result<()> {
        match field {
            FilterField::Difficulty => self.difficulty = value.parse()?,
            FilterField::Status => self.status = value.parse()?,
            FilterField::Category => self.category = value.parse()?,
        }
        Ok(())
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn matches(&self, record: &ProblemRecord) -> bool {
        self.difficulty.matches(&record.difficulty)
            && self.status.matches(&record.status)
            && self.category.matches(&record.category)
    }

    /// Returns the records passing every selection, in their original order.
    pub fn apply<'a>(&self, records: &'a [ProblemRecord]) -> Vec<&'a ProblemRecord> {
        records
            .iter()
            .filter(|record| self.matches(record))
            .collect()
    }
}
