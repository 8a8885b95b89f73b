use serde::{Deserialize, Serialize};

pub trait FieldList {
    fn fields() -> &'static [&'static str];
    fn field_list() -> &'static str;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetCountElement {
    pub key: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldFacetCount {
    pub counts: Vec<FacetCountElement>,
}

impl FieldFacetCount {
    pub fn get(&self, key: &str) -> Option<usize> {
        self.counts
            .iter()
            .find(|element| element.key == key)
            .map(|element| element.count)
    }
}

impl From<Vec<(String, usize)>> for FieldFacetCount {
    fn from(counts: Vec<(String, usize)>) -> FieldFacetCount {
        FieldFacetCount {
            counts: counts
                .into_iter()
                .map(|(key, count)| FacetCountElement { key, count })
                .collect(),
        }
    }
}

/// Envelope returned by the `json` output of a list view.
#[derive(Debug, Serialize)]
pub struct ListResultResponse<P, D, F>
where
    P: Serialize,
    D: Serialize,
    F: Serialize,
{
    pub stats: ListResultStats<P, F>,
    pub items: Vec<D>,
    pub message: Option<String>,
}

impl<P, D, F> ListResultResponse<P, D, F>
where
    P: Serialize,
    D: Serialize,
    F: Serialize,
{
    pub fn error(params: P, message: impl ToString) -> Self {
        Self {
            stats: ListResultStats {
                total: 0,
                count: 0,
                params,
                facet: None,
            },
            items: Vec::new(),
            message: Some(message.to_string()),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ListResultStats<P, F> {
    pub total: usize,
    pub count: usize,
    pub params: P,
    pub facet: Option<F>,
}
