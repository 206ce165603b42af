//! Predicate implementations, one module per dataset field.
//!
//! Range predicates share [`Comparison`]: the "after/above/more-than" and
//! "before/below/less-than" flavours are strict, the "min/max" flavours are
//! inclusive.

pub mod actor;
pub mod director;
pub mod genre;
pub mod gross;
pub mod rating;
pub mod runtime;
pub mod votes;
pub mod year;

// Re-export for convenience
pub use actor::ActorFilter;
pub use director::DirectorFilter;
pub use genre::GenreFilter;
pub use gross::GrossFilter;
pub use rating::RatingFilter;
pub use runtime::RuntimeFilter;
pub use votes::VotesFilter;
pub use year::YearFilter;

/// How a decoded row value is compared with the criterion's bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    /// value > bound
    Above,
    /// value < bound
    Below,
    /// value >= bound
    AtLeast,
    /// value <= bound
    AtMost,
}

impl Comparison {
    pub fn holds<T: PartialOrd>(self, value: T, bound: T) -> bool {
        match self {
            Comparison::Above => value > bound,
            Comparison::Below => value < bound,
            Comparison::AtLeast => value >= bound,
            Comparison::AtMost => value <= bound,
        }
    }
}
