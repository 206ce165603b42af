//! Predicate filtering for movie rows.
//!
//! This crate provides:
//! - Criterion / ActiveCriteria: the typed filter conditions a user supplied
//! - RowPredicate trait and one implementation per dataset field
//! - A registry that maps each criterion to its predicate
//! - RowFilter, which keeps the rows satisfying every active criterion
//!
//! ## Semantics
//! - A row survives iff it satisfies every criterion present in the set;
//!   an empty set keeps every row
//! - after/before, above/below and more-than/less-than are strict;
//!   min/max are inclusive
//! - genre is OR over the requested genres, actor is AND over the requested
//!   actors, director compares "first last" as a whole
//! - a cell that cannot be decoded makes its row fail that criterion; the
//!   scan goes on (fail-closed)
//! - unknown or contradictory criteria, and criteria that need a column the
//!   dataset lacks, are errors reported before any row is evaluated
//!
//! ## Example Usage
//! ```ignore
//! use movie_filter::{filter, ActiveCriteria, Criterion};
//!
//! let criteria = ActiveCriteria::new()
//!     .with(Criterion::YearAfter(2000))
//!     .with(Criterion::genre(&["Drama", "Crime"])?)
//!     .with(Criterion::actor(&["Morgan", "Freeman"])?);
//!
//! let matching = filter(table.into_rows(), &criteria)?;
//! ```

pub mod criteria;
pub mod error;
pub mod filters;
pub mod registry;
pub mod row_filter;
pub mod traits;

// Re-export main types
pub use criteria::{ActiveCriteria, Criterion, CriterionKind, CriterionValue};
pub use error::{FilterError, Result};
pub use row_filter::{filter, RowFilter};
pub use traits::RowPredicate;
