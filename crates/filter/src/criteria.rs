//! Filter criteria and the set of criteria active for one run.
//!
//! A [`Criterion`] is one typed condition supplied by the user. The
//! [`ActiveCriteria`] set holds only the criteria that were actually given;
//! a criterion that is absent places no constraint on the rows. Presence is
//! always tested by key, never by looking at the value, so `votes_min = 0`
//! is a real (if permissive) filter.

use crate::error::{FilterError, Result};
use data_loader::columns;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

// =============================================================================
// CriterionKind
// =============================================================================

/// The name of a criterion, independent of its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CriterionKind {
    YearAfter,
    YearBefore,
    RatingAbove,
    RatingBelow,
    VotesMin,
    VotesMax,
    RuntimeMoreThan,
    RuntimeLessThan,
    GrossMin,
    GrossMax,
    Genre,
    Director,
    Actor,
}

impl CriterionKind {
    pub const ALL: [CriterionKind; 13] = [
        CriterionKind::YearAfter,
        CriterionKind::YearBefore,
        CriterionKind::RatingAbove,
        CriterionKind::RatingBelow,
        CriterionKind::VotesMin,
        CriterionKind::VotesMax,
        CriterionKind::RuntimeMoreThan,
        CriterionKind::RuntimeLessThan,
        CriterionKind::GrossMin,
        CriterionKind::GrossMax,
        CriterionKind::Genre,
        CriterionKind::Director,
        CriterionKind::Actor,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CriterionKind::YearAfter => "year_after",
            CriterionKind::YearBefore => "year_before",
            CriterionKind::RatingAbove => "rating_above",
            CriterionKind::RatingBelow => "rating_below",
            CriterionKind::VotesMin => "votes_min",
            CriterionKind::VotesMax => "votes_max",
            CriterionKind::RuntimeMoreThan => "runtime_more_than",
            CriterionKind::RuntimeLessThan => "runtime_less_than",
            CriterionKind::GrossMin => "gross_min",
            CriterionKind::GrossMax => "gross_max",
            CriterionKind::Genre => "genre",
            CriterionKind::Director => "director",
            CriterionKind::Actor => "actor",
        }
    }

    /// Dataset columns this criterion reads.
    pub fn columns(&self) -> &'static [&'static str] {
        match self {
            CriterionKind::YearAfter | CriterionKind::YearBefore => &[columns::RELEASED_YEAR],
            CriterionKind::RatingAbove | CriterionKind::RatingBelow => &[columns::IMDB_RATING],
            CriterionKind::VotesMin | CriterionKind::VotesMax => &[columns::NO_OF_VOTES],
            CriterionKind::RuntimeMoreThan | CriterionKind::RuntimeLessThan => {
                &[columns::RUNTIME]
            }
            CriterionKind::GrossMin | CriterionKind::GrossMax => &[columns::GROSS],
            CriterionKind::Genre => &[columns::GENRE],
            CriterionKind::Director => &[columns::DIRECTOR],
            CriterionKind::Actor => &columns::STARS,
        }
    }
}

impl fmt::Display for CriterionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CriterionKind {
    type Err = FilterError;

    /// Accepts both `year_after` and the command-line spelling `year-after`.
    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().replace('-', "_");
        CriterionKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_str() == normalized)
            .ok_or_else(|| FilterError::UnknownCriterion(s.to_string()))
    }
}

// =============================================================================
// Criterion
// =============================================================================

/// One typed filter condition.
#[derive(Debug, Clone, PartialEq)]
pub enum Criterion {
    YearAfter(i32),
    YearBefore(i32),
    RatingAbove(f64),
    RatingBelow(f64),
    VotesMin(u64),
    VotesMax(u64),
    RuntimeMoreThan(u32),
    RuntimeLessThan(u32),
    GrossMin(u64),
    GrossMax(u64),
    /// Any of these genres (OR)
    Genre(Vec<String>),
    Director { first: String, last: String },
    /// All of these actors (AND), one full name per entry
    Actor(Vec<String>),
}

impl Criterion {
    /// Genre criterion from one or more genre names.
    pub fn genre<S: AsRef<str>>(genres: &[S]) -> Result<Self> {
        let genres: Vec<String> = genres
            .iter()
            .map(|g| g.as_ref().trim().to_string())
            .filter(|g| !g.is_empty())
            .collect();
        if genres.is_empty() {
            return Err(FilterError::invalid("genre", "at least one genre is required"));
        }
        Ok(Criterion::Genre(genres))
    }

    /// Director criterion from exactly a first and a last name.
    pub fn director<S: AsRef<str>>(parts: &[S]) -> Result<Self> {
        match parts {
            [first, last] if !first.as_ref().trim().is_empty() && !last.as_ref().trim().is_empty() => {
                Ok(Criterion::Director {
                    first: first.as_ref().trim().to_string(),
                    last: last.as_ref().trim().to_string(),
                })
            }
            _ => Err(FilterError::invalid(
                "director",
                format!("expected a first and a last name, got {} word(s)", parts.len()),
            )),
        }
    }

    /// Actor criterion from command-line words.
    ///
    /// The words are joined with spaces and split again on commas, so
    /// `["Tom", "Hanks,", "Tim", "Robbins"]` names two actors.
    pub fn actor<S: AsRef<str>>(words: &[S]) -> Result<Self> {
        let joined = words
            .iter()
            .map(|w| w.as_ref())
            .collect::<Vec<_>>()
            .join(" ");
        let names: Vec<String> = joined.split(',').map(|n| n.trim().to_string()).collect();

        if words.is_empty() || names.iter().any(|n| n.is_empty()) {
            return Err(FilterError::invalid("actor", "actor names cannot be empty"));
        }
        Ok(Criterion::Actor(names))
    }

    /// Build a criterion from its name and a loosely typed value.
    ///
    /// This is the entry point for callers that hold criteria as
    /// name/value pairs. Unknown names and values of the wrong shape are
    /// rejected here, before any row is looked at.
    pub fn from_named(name: &str, value: CriterionValue) -> Result<Self> {
        let kind: CriterionKind = name.parse()?;
        let criterion = kind.as_str();

        let criterion = match kind {
            CriterionKind::YearAfter => Criterion::YearAfter(value.as_i32(criterion)?),
            CriterionKind::YearBefore => Criterion::YearBefore(value.as_i32(criterion)?),
            CriterionKind::RatingAbove => Criterion::RatingAbove(value.as_f64(criterion)?),
            CriterionKind::RatingBelow => Criterion::RatingBelow(value.as_f64(criterion)?),
            CriterionKind::VotesMin => Criterion::VotesMin(value.as_u64(criterion)?),
            CriterionKind::VotesMax => Criterion::VotesMax(value.as_u64(criterion)?),
            CriterionKind::RuntimeMoreThan => {
                Criterion::RuntimeMoreThan(value.as_u32(criterion)?)
            }
            CriterionKind::RuntimeLessThan => {
                Criterion::RuntimeLessThan(value.as_u32(criterion)?)
            }
            CriterionKind::GrossMin => Criterion::GrossMin(value.as_u64(criterion)?),
            CriterionKind::GrossMax => Criterion::GrossMax(value.as_u64(criterion)?),
            CriterionKind::Genre => Criterion::genre(value.as_list(criterion)?)?,
            CriterionKind::Director => Criterion::director(value.as_list(criterion)?)?,
            CriterionKind::Actor => Criterion::actor(value.as_list(criterion)?)?,
        };
        Ok(criterion)
    }

    pub fn kind(&self) -> CriterionKind {
        match self {
            Criterion::YearAfter(_) => CriterionKind::YearAfter,
            Criterion::YearBefore(_) => CriterionKind::YearBefore,
            Criterion::RatingAbove(_) => CriterionKind::RatingAbove,
            Criterion::RatingBelow(_) => CriterionKind::RatingBelow,
            Criterion::VotesMin(_) => CriterionKind::VotesMin,
            Criterion::VotesMax(_) => CriterionKind::VotesMax,
            Criterion::RuntimeMoreThan(_) => CriterionKind::RuntimeMoreThan,
            Criterion::RuntimeLessThan(_) => CriterionKind::RuntimeLessThan,
            Criterion::GrossMin(_) => CriterionKind::GrossMin,
            Criterion::GrossMax(_) => CriterionKind::GrossMax,
            Criterion::Genre(_) => CriterionKind::Genre,
            Criterion::Director { .. } => CriterionKind::Director,
            Criterion::Actor(_) => CriterionKind::Actor,
        }
    }
}

impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self.kind().as_str();
        match self {
            Criterion::YearAfter(v) | Criterion::YearBefore(v) => write!(f, "{name}={v}"),
            Criterion::RatingAbove(v) | Criterion::RatingBelow(v) => write!(f, "{name}={v}"),
            Criterion::VotesMin(v)
            | Criterion::VotesMax(v)
            | Criterion::GrossMin(v)
            | Criterion::GrossMax(v) => write!(f, "{name}={v}"),
            Criterion::RuntimeMoreThan(v) | Criterion::RuntimeLessThan(v) => {
                write!(f, "{name}={v}")
            }
            Criterion::Genre(list) | Criterion::Actor(list) => {
                write!(f, "{name}=[{}]", list.join(", "))
            }
            Criterion::Director { first, last } => write!(f, "{name}={first} {last}"),
        }
    }
}

// =============================================================================
// CriterionValue
// =============================================================================

/// Untyped criterion value, as handed over by a name/value caller.
#[derive(Debug, Clone, PartialEq)]
pub enum CriterionValue {
    Integer(i64),
    Decimal(f64),
    List(Vec<String>),
}

impl CriterionValue {
    fn as_i64(&self, criterion: &str) -> Result<i64> {
        match self {
            CriterionValue::Integer(v) => Ok(*v),
            other => Err(FilterError::invalid(
                criterion,
                format!("expected an integer, got {:?}", other),
            )),
        }
    }

    fn as_i32(&self, criterion: &str) -> Result<i32> {
        let v = self.as_i64(criterion)?;
        i32::try_from(v).map_err(|_| FilterError::invalid(criterion, format!("{v} is out of range")))
    }

    fn as_u64(&self, criterion: &str) -> Result<u64> {
        let v = self.as_i64(criterion)?;
        u64::try_from(v)
            .map_err(|_| FilterError::invalid(criterion, format!("{v} must not be negative")))
    }

    fn as_u32(&self, criterion: &str) -> Result<u32> {
        let v = self.as_i64(criterion)?;
        u32::try_from(v).map_err(|_| {
            FilterError::invalid(criterion, format!("{v} is not a valid number of minutes"))
        })
    }

    fn as_f64(&self, criterion: &str) -> Result<f64> {
        match self {
            CriterionValue::Decimal(v) if v.is_finite() => Ok(*v),
            CriterionValue::Integer(v) => Ok(*v as f64),
            other => Err(FilterError::invalid(
                criterion,
                format!("expected a decimal number, got {:?}", other),
            )),
        }
    }

    fn as_list(&self, criterion: &str) -> Result<&[String]> {
        match self {
            CriterionValue::List(list) => Ok(list),
            other => Err(FilterError::invalid(
                criterion,
                format!("expected a list of names, got {:?}", other),
            )),
        }
    }
}

impl From<i64> for CriterionValue {
    fn from(v: i64) -> Self {
        CriterionValue::Integer(v)
    }
}

impl From<f64> for CriterionValue {
    fn from(v: f64) -> Self {
        CriterionValue::Decimal(v)
    }
}

impl From<Vec<String>> for CriterionValue {
    fn from(v: Vec<String>) -> Self {
        CriterionValue::List(v)
    }
}

impl From<&[&str]> for CriterionValue {
    fn from(v: &[&str]) -> Self {
        CriterionValue::List(v.iter().map(|s| s.to_string()).collect())
    }
}

// =============================================================================
// ActiveCriteria
// =============================================================================

/// The criteria a user actually supplied, keyed by criterion name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ActiveCriteria {
    criteria: BTreeMap<CriterionKind, Criterion>,
}

impl ActiveCriteria {
    /// An empty set: every row matches.
    pub fn new() -> Self {
        Self {
            criteria: BTreeMap::new(),
        }
    }

    /// Add a criterion (builder pattern). A later criterion of the same kind
    /// replaces an earlier one.
    pub fn with(mut self, criterion: Criterion) -> Self {
        self.insert(criterion);
        self
    }

    /// Add a criterion, returning the one it replaced, if any.
    pub fn insert(&mut self, criterion: Criterion) -> Option<Criterion> {
        self.criteria.insert(criterion.kind(), criterion)
    }

    /// Build the set from name/value pairs, failing on the first bad pair.
    pub fn from_named<N, I>(pairs: I) -> Result<Self>
    where
        N: AsRef<str>,
        I: IntoIterator<Item = (N, CriterionValue)>,
    {
        let mut active = ActiveCriteria::new();
        for (name, value) in pairs {
            active.insert(Criterion::from_named(name.as_ref(), value)?);
        }
        Ok(active)
    }

    pub fn get(&self, kind: CriterionKind) -> Option<&Criterion> {
        self.criteria.get(&kind)
    }

    pub fn contains(&self, kind: CriterionKind) -> bool {
        self.criteria.contains_key(&kind)
    }

    pub fn len(&self) -> usize {
        self.criteria.len()
    }

    pub fn is_empty(&self) -> bool {
        self.criteria.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Criterion> {
        self.criteria.values()
    }

    /// Reject pairs of criteria that no row could ever satisfy together.
    pub fn check_consistency(&self) -> Result<()> {
        use Criterion::*;

        if let (Some(YearAfter(after)), Some(YearBefore(before))) = (
            self.get(CriterionKind::YearAfter),
            self.get(CriterionKind::YearBefore),
        ) {
            if after >= before {
                return Err(inconsistent(
                    CriterionKind::YearAfter,
                    CriterionKind::YearBefore,
                    format!("{after} must be less than {before}"),
                ));
            }
        }

        if let (Some(RatingAbove(above)), Some(RatingBelow(below))) = (
            self.get(CriterionKind::RatingAbove),
            self.get(CriterionKind::RatingBelow),
        ) {
            if above >= below {
                return Err(inconsistent(
                    CriterionKind::RatingAbove,
                    CriterionKind::RatingBelow,
                    format!("{above} must be less than {below}"),
                ));
            }
        }

        if let (Some(RuntimeMoreThan(more)), Some(RuntimeLessThan(less))) = (
            self.get(CriterionKind::RuntimeMoreThan),
            self.get(CriterionKind::RuntimeLessThan),
        ) {
            if more >= less {
                return Err(inconsistent(
                    CriterionKind::RuntimeMoreThan,
                    CriterionKind::RuntimeLessThan,
                    format!("{more} must be less than {less}"),
                ));
            }
        }

        if let (Some(VotesMin(min)), Some(VotesMax(max))) = (
            self.get(CriterionKind::VotesMin),
            self.get(CriterionKind::VotesMax),
        ) {
            if min > max {
                return Err(inconsistent(
                    CriterionKind::VotesMin,
                    CriterionKind::VotesMax,
                    format!("{min} must be less than or equal to {max}"),
                ));
            }
        }

        if let (Some(GrossMin(min)), Some(GrossMax(max))) = (
            self.get(CriterionKind::GrossMin),
            self.get(CriterionKind::GrossMax),
        ) {
            if min > max {
                return Err(inconsistent(
                    CriterionKind::GrossMin,
                    CriterionKind::GrossMax,
                    format!("{min} must be less than or equal to {max}"),
                ));
            }
        }

        Ok(())
    }
}

fn inconsistent(first: CriterionKind, second: CriterionKind, reason: String) -> FilterError {
    FilterError::Inconsistent {
        first: first.as_str(),
        second: second.as_str(),
        reason,
    }
}

impl FromIterator<Criterion> for ActiveCriteria {
    fn from_iter<I: IntoIterator<Item = Criterion>>(iter: I) -> Self {
        let mut active = ActiveCriteria::new();
        for criterion in iter {
            active.insert(criterion);
        }
        active
    }
}
