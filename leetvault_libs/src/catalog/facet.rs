use crate::{
    api::FieldFacetCount,
    catalog::{
        filter::{FilterState, Selection},
        model::{Label, ProblemRecord},
    },
};
use serde::{Deserialize, Serialize};

/// Per-value record counts for each filter field.
///
/// A field's own selection is left out when counting it, so each count is the
/// number of rows that choosing that value would produce.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetCounts {
    pub difficulty: FieldFacetCount,
    pub status: FieldFacetCount,
    pub category: FieldFacetCount,
}

impl FacetCounts {
    pub fn count(records: &[ProblemRecord], filter: &FilterState) -> Self {
        let difficulty = FilterState {
            difficulty: Selection::All,
            ..*filter
        };
        let status = FilterState {
            status: Selection::All,
            ..*filter
        };
        let category = FilterState {
            category: Selection::All,
            ..*filter
        };

        Self {
            difficulty: count_field(&difficulty.apply(records), |record| record.difficulty),
            status: count_field(&status.apply(records), |record| record.status),
            category: count_field(&category.apply(records), |record| record.category),
        }
    }
}

fn count_field<T, F>(records: &[&ProblemRecord], key: F) -> FieldFacetCount
where
    T: Label + PartialEq,
    F: Fn(&ProblemRecord) -> T,
{
    T::VALUES
        .iter()
        .map(|value| {
            let count = records.iter().filter(|&&record| key(record) == *value).count();
            (value.label().to_string(), count)
        })
        .collect::<Vec<(String, usize)>>()
        .into()
}
