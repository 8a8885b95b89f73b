mod error;
pub mod facet;
pub mod filter;
pub mod model;
pub mod store;

pub use error::{CatalogError, Result};
pub use facet::FacetCounts;
pub use filter::{FilterField, FilterState, Selection};
pub use model::{Category, Difficulty, Label, ProblemRecord, Status};
pub use store::ProblemStore;
