//! Maps each criterion to the predicate that evaluates it.

use crate::criteria::Criterion;
use crate::filters::*;
use crate::traits::RowPredicate;

/// Build the predicate for one criterion.
///
/// The match is exhaustive, so adding a criterion without an evaluator is a
/// compile error rather than a silent pass-through.
pub fn predicate_for(criterion: &Criterion) -> Box<dyn RowPredicate> {
    match criterion {
        Criterion::YearAfter(year) => Box::new(YearFilter::after(*year)),
        Criterion::YearBefore(year) => Box::new(YearFilter::before(*year)),
        Criterion::RatingAbove(rating) => Box::new(RatingFilter::above(*rating)),
        Criterion::RatingBelow(rating) => Box::new(RatingFilter::below(*rating)),
        Criterion::VotesMin(votes) => Box::new(VotesFilter::min(*votes)),
        Criterion::VotesMax(votes) => Box::new(VotesFilter::max(*votes)),
        Criterion::RuntimeMoreThan(minutes) => Box::new(RuntimeFilter::more_than(*minutes)),
        Criterion::RuntimeLessThan(minutes) => Box::new(RuntimeFilter::less_than(*minutes)),
        Criterion::GrossMin(gross) => Box::new(GrossFilter::min(*gross)),
        Criterion::GrossMax(gross) => Box::new(GrossFilter::max(*gross)),
        Criterion::Genre(genres) => Box::new(GenreFilter::new(genres.as_slice())),
        Criterion::Director { first, last } => Box::new(DirectorFilter::new(first, last)),
        Criterion::Actor(names) => Box::new(ActorFilter::new(names.as_slice())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_predicate_names_match_criteria() {
        let criteria = vec![
            Criterion::YearAfter(2000),
            Criterion::RatingBelow(9.0),
            Criterion::VotesMin(10),
            Criterion::RuntimeLessThan(200),
            Criterion::GrossMax(100),
            Criterion::genre(&["Drama"]).unwrap(),
            Criterion::director(&["Jane", "Doe"]).unwrap(),
            Criterion::actor(&["X"]).unwrap(),
        ];

        for criterion in &criteria {
            let predicate = predicate_for(criterion);
            assert_eq!(predicate.name(), criterion.kind().as_str());
            assert_eq!(predicate.columns(), criterion.kind().columns());
        }
    }
}
