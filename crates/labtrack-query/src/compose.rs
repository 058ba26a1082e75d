//! Conjunction of filter predicates.

use crate::predicate::Predicate;

/// The logical AND of a set of predicates.
///
/// An empty conjunction accepts every record. Predicates are pure, so the
/// order they are added in has no observable effect.
#[derive(Debug)]
pub struct Conjunction<'t, T> {
    predicates: Vec<Predicate<'t, T>>,
}

impl<'t, T> Conjunction<'t, T> {
    /// A conjunction with no predicates; matches everything.
    pub fn all() -> Self {
        Conjunction {
            predicates: Vec::new(),
        }
    }

    /// Adds one predicate.
    pub fn push(&mut self, predicate: Predicate<'t, T>) {
        self.predicates.push(predicate);
    }

    /// Merges two conjunctions into one that requires both.
    pub fn and(mut self, other: Conjunction<'t, T>) -> Self {
        self.predicates.extend(other.predicates);
        self
    }

    /// Returns `true` if no predicate was supplied.
    pub fn is_match_all(&self) -> bool {
        self.predicates.is_empty()
    }

    /// Returns `true` if some predicate failed to parse, so nothing can match.
    pub fn is_unsatisfiable(&self) -> bool {
        self.predicates.iter().any(Predicate::is_never)
    }

    pub fn predicates(&self) -> &[Predicate<'t, T>] {
        &self.predicates
    }

    pub fn len(&self) -> usize {
        self.predicates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }

    /// Tests a record against every predicate.
    pub fn matches(&self, record: &T) -> bool {
        self.predicates.iter().all(|predicate| predicate.matches(record))
    }
}

impl<T> Default for Conjunction<'_, T> {
    fn default() -> Self {
        Conjunction::all()
    }
}

impl<T> Clone for Conjunction<'_, T> {
    fn clone(&self) -> Self {
        Conjunction {
            predicates: self.predicates.clone(),
        }
    }
}

impl<'t, T> FromIterator<Predicate<'t, T>> for Conjunction<'t, T> {
    fn from_iter<I: IntoIterator<Item = Predicate<'t, T>>>(iter: I) -> Self {
        Conjunction {
            predicates: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::{Field, FieldPath};
    use crate::mode::MatchMode;
    use crate::value::Value;

    struct Item {
        name: String,
        active: bool,
    }

    fn items() -> Vec<Item> {
        vec![
            Item {
                name: "Alpha".into(),
                active: true,
            },
            Item {
                name: "Beta".into(),
                active: false,
            },
            Item {
                name: "Alpine".into(),
                active: false,
            },
        ]
    }

    fn name() -> Field<Item> {
        Field::new("name", FieldPath::column(|i: &Item| Value::String(&i.name)))
    }

    fn active() -> Field<Item> {
        Field::new("active", FieldPath::column(|i: &Item| Value::Bool(i.active)))
    }

    #[test]
    fn empty_matches_everything() {
        let conj: Conjunction<'_, Item> = Conjunction::all();
        assert!(conj.is_match_all());
        assert!(items().iter().all(|i| conj.matches(i)));
    }

    #[test]
    fn all_predicates_must_hold() {
        let (name, active) = (name(), active());
        let conj: Conjunction<'_, Item> = [
            Predicate::compile(&name, MatchMode::Contains, Some("Alp")),
            Predicate::compile(&active, MatchMode::BoolEquality, Some("false")),
        ]
        .into_iter()
        .flatten()
        .collect();

        let hits: Vec<_> = items()
            .into_iter()
            .filter(|i| conj.matches(i))
            .map(|i| i.name)
            .collect();
        assert_eq!(hits, vec!["Alpine"]);
    }

    #[test]
    fn and_is_order_independent() {
        fn single<'t>(field: &'t Field<Item>, mode: MatchMode, raw: &str) -> Conjunction<'t, Item> {
            Predicate::compile(field, mode, Some(raw)).into_iter().collect()
        }

        let (name, active) = (name(), active());
        let left = single(&name, MatchMode::Contains, "Alp")
            .and(single(&active, MatchMode::BoolEquality, "true"));
        let right = single(&active, MatchMode::BoolEquality, "true")
            .and(single(&name, MatchMode::Contains, "Alp"));
        for item in items() {
            assert_eq!(left.matches(&item), right.matches(&item));
        }
        assert_eq!(left.len(), 2);
    }

    #[test]
    fn unparseable_member_makes_it_unsatisfiable() {
        let active = active();
        let conj: Conjunction<'_, Item> =
            Predicate::compile(&active, MatchMode::BoolEquality, Some("maybe"))
                .into_iter()
                .collect();
        assert!(conj.is_unsatisfiable());
        assert!(!items().iter().any(|i| conj.matches(i)));
    }
}
