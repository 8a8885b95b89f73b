use crate::catalog::error::{CatalogError, Result};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use std::{fmt, str::FromStr};
use validator::Validate;

/// A closed set of values identified by their display labels.
pub trait Label: Sized + Copy + 'static {
    /// Name of the value set, used in error messages.
    const KIND: &'static str;
    /// Every value, in display order.
    const VALUES: &'static [Self];

    fn label(&self) -> &'static str;

    /// Lower-case, hyphenated form of the label, e.g. `array-hashing`.
    fn slug(&self) -> String {
        self.label()
            .to_ascii_lowercase()
            .replace(" & ", "-")
            .replace(' ', "-")
    }

    /// Parses either the label or the slug, ignoring ASCII case.
    fn parse_label(value: &str) -> Result<Self> {
        let trimmed = value.trim();
        Self::VALUES
            .iter()
            .copied()
            .find(|v| {
                v.label().eq_ignore_ascii_case(trimmed) || v.slug() == trimmed.to_ascii_lowercase()
            })
            .ok_or_else(|| CatalogError::UnknownLabel {
                kind: Self::KIND,
                value: value.to_string(),
            })
    }
}

macro_rules! labelled_enum {
    ($(#[$meta:meta])* $name:ident, $kind:literal { $($variant:ident => $label:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $label)]
                $variant,
            )+
        }

        impl Label for $name {
            const KIND: &'static str = $kind;
            const VALUES: &'static [Self] = &[$($name::$variant),+];

            fn label(&self) -> &'static str {
                match self {
                    $($name::$variant => $label,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str(self.label())
            }
        }

        impl FromStr for $name {
            type Err = CatalogError;

            fn from_str(s: &str) -> Result<Self> {
                Self::parse_label(s)
            }
        }
    };
}

labelled_enum!(
    Difficulty, "difficulty" {
        Easy => "Easy",
        Medium => "Medium",
        Hard => "Hard",
    }
);

labelled_enum!(
    Status, "status" {
        Solved => "Solved",
        InProgress => "In Progress",
        NotStarted => "Not Started",
    }
);

labelled_enum!(
    Category, "category" {
        ArrayHashing => "Array & Hashing",
        TwoPointers => "Two Pointers",
        SlidingWindow => "Sliding Window",
        Stack => "Stack",
        BinarySearch => "Binary Search",
        LinkedList => "Linked List",
        Tree => "Tree",
        HeapPriorityQueue => "Heap & Priority Queue",
        Backtracking => "Backtracking",
        Tries => "Tries",
        Graph => "Graph",
        DynamicProgramming => "Dynamic Programming",
        Greedy => "Greedy",
        Intervals => "Intervals",
        MathGeometry => "Math & Geometry",
        BitManipulation => "Bit Manipulation",
    }
);

/// One coding-practice problem. Field names serialize in camelCase.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ProblemRecord {
    pub id: i64,
    pub number: i64,
    #[validate(length(min = 1))]
    pub name: String,
    pub description: String,
    pub difficulty: Difficulty,
    pub category: Category,
    pub solution: String,
    pub approach: String,
    pub time_complexity: String,
    pub space_complexity: String,
    pub date_solved: String,
    pub status: Status,
    pub notes: Option<String>,
}
