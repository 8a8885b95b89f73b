use crate::catalog::{
    error::{CatalogError, Result},
    facet::FacetCounts,
    filter::FilterState,
    model::{Category, Difficulty, ProblemRecord, Status},
};
use itertools::Itertools;
use once_cell::sync::Lazy;
use std::{fs, path::Path};
use validator::Validate;

static SAMPLE_PROBLEMS: Lazy<Vec<ProblemRecord>> = Lazy::new(|| {
    vec![
        ProblemRecord {
            id: 1,
            number: 1,
            name: String::from("Two Sum"),
            description: String::from("Given an array of integers nums and an integer target, return indices of the two numbers such that they add up to target."),
            difficulty: Difficulty::Easy,
            category: Category::ArrayHashing,
            solution: String::from("Use a hash map to store complements"),
            approach: String::from("Hash Map"),
            time_complexity: String::from("O(n)"),
            space_complexity: String::from("O(n)"),
            date_solved: String::from("2024-03-20"),
            status: Status::Solved,
            notes: Some(String::from("Classic hash map problem")),
        },
        ProblemRecord {
            id: 2,
            number: 2,
            name: String::from("Add Two Numbers"),
            description: String::from("You are given two non-empty linked lists representing two non-negative integers. The digits are stored in reverse order, and each of their nodes contains a single digit."),
            difficulty: Difficulty::Medium,
            category: Category::LinkedList,
            solution: String::from("Simulate addition with carry"),
            approach: String::from("Linked List Traversal"),
            time_complexity: String::from("O(max(n,m))"),
            space_complexity: String::from("O(max(n,m))"),
            date_solved: String::from("2024-03-19"),
            status: Status::Solved,
            notes: Some(String::from("Watch out for carry at the end")),
        },
    ]
});

/// The fixed, ordered sequence of problems a view reads from.
///
/// A store is built once and has no write path.
#[derive(Debug, Clone)]
pub struct ProblemStore {
    records: Vec<ProblemRecord>,
}

impl ProblemStore {
    /// The built-in sample problems.
    pub fn sample() -> Self {
        Self {
            records: SAMPLE_PROBLEMS.clone(),
        }
    }

    /// Validates every record and rejects duplicate ids.
    pub fn from_records(records: Vec<ProblemRecord>) -> Result<Self> {
        for record in records.iter() {
            record
                .validate()
                .map_err(|source| CatalogError::InvalidRecord {
                    id: record.id,
                    source,
                })?;
        }

        if let Some(id) = records.iter().map(|record| record.id).duplicates().next() {
            return Err(CatalogError::DuplicateId(id));
        }

        tracing::debug!("problem store built with {} records", records.len());
        Ok(Self { records })
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let records: Vec<ProblemRecord> = serde_json::from_str(json)?;
        Self::from_records(records)
    }

    pub fn from_json_file(path: &Path) -> Result<Self> {
        tracing::info!("load problems from {}", path.display());
        let json = fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn records(&self) -> &[ProblemRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Derives the records visible under `filter`, in store order.
    pub fn derive(&self, filter: &FilterState) -> Vec<&ProblemRecord> {
        let derived = filter.apply(&self.records);
        tracing::debug!(
            "derived {} of {} records for {:?}",
            derived.len(),
            self.records.len(),
            filter
        );
        derived
    }

    pub fn facets(&self, filter: &FilterState) -> FacetCounts {
        FacetCounts::count(&self.records, filter)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::catalog::filter::Selection;
    use std::io::Write;

    const SEED: &str = r#"[
        {
            "id": 10,
            "number": 121,
            "name": "Best Time to Buy and Sell Stock",
            "description": "Maximize profit from one transaction.",
            "difficulty": "Easy",
            "category": "Sliding Window",
            "solution": "Track the running minimum",
            "approach": "One pass",
            "timeComplexity": "O(n)",
            "spaceComplexity": "O(1)",
            "dateSolved": "2024-04-01",
            "status": "Solved"
        },
        {
            "id": 11,
            "number": 42,
            "name": "Trapping Rain Water",
            "description": "Compute trapped water.",
            "difficulty": "Hard",
            "category": "Two Pointers",
            "solution": "Move the lower side inward",
            "approach": "Two pointers",
            "timeComplexity": "O(n)",
            "spaceComplexity": "O(1)",
            "dateSolved": "",
            "status": "Not Started",
            "notes": "Revisit"
        }
    ]"#;

    #[test]
    fn sample_store_keeps_order() {
        let store = ProblemStore::sample();
        assert_eq!(store.len(), 2);
        assert!(!store.is_empty());
        let names = store
            .records()
            .iter()
            .map(|record| record.name.as_str())
            .collect::<Vec<_>>();
        assert_eq!(names, vec!["Two Sum", "Add Two Numbers"]);
    }

    #[test]
    fn derive_from_sample() {
        let store = ProblemStore::sample();
        let filter = FilterState {
            difficulty: Selection::Only(Difficulty::Easy),
            ..FilterState::default()
        };
        let derived = store.derive(&filter);
        assert_eq!(derived.len(), 1);
        assert_eq!(derived[0].name, "Two Sum");
    }

    #[test]
    fn load_from_json() {
        let store = ProblemStore::from_json_str(SEED).unwrap();
        assert_eq!(store.len(), 2);
        assert_eq!(store.records()[1].category, Category::TwoPointers);
        assert_eq!(store.records()[1].notes.as_deref(), Some("Revisit"));
    }

    #[test]
    fn load_from_file() {
        let path = std::env::temp_dir().join(format!("leetvault-seed-{}.json", std::process::id()));
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(SEED.as_bytes()).unwrap();

        let store = ProblemStore::from_json_file(&path).unwrap();
        assert_eq!(store.len(), 2);

        fs::remove_file(&path).unwrap();
        assert!(matches!(
            ProblemStore::from_json_file(&path),
            Err(CatalogError::ReadError(_))
        ));
    }

    #[test]
    fn reject_duplicate_ids() {
        let mut records = ProblemStore::sample().records().to_vec();
        records[1].id = records[0].id;
        assert!(matches!(
            ProblemStore::from_records(records),
            Err(CatalogError::DuplicateId(1))
        ));
    }

    #[test]
    fn reject_empty_name() {
        let mut records = ProblemStore::sample().records().to_vec();
        records[0].name = String::new();
        assert!(matches!(
            ProblemStore::from_records(records),
            Err(CatalogError::InvalidRecord { id: 1, .. })
        ));
    }

    #[test]
    fn reject_unknown_category() {
        let json = SEED.replace("Sliding Window", "Geometry");
        assert!(matches!(
            ProblemStore::from_json_str(&json),
            Err(CatalogError::DeserializeError(_))
        ));
    }
}
