//! Composable character predicate
//!
//! A small predicate tree supporting conjunction only. Text needles are
//! normalised to upper case on construction so that every evaluator compares
//! case-insensitively in the same way.

use crate::entities::Character;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CharacterPredicate {
    /// Matches every character
    #[default]
    Always,
    /// Upper-cased name contains the needle
    NameContains(String),
    /// Upper-cased species name is one of the values
    SpeciesIn(Vec<String>),
    /// Any class membership (main or secondary) has one of the upper-cased names
    ClassesIn(Vec<String>),
    And(Box<CharacterPredicate>, Box<CharacterPredicate>),
}

impl CharacterPredicate {
    pub fn name_contains(needle: &str) -> Self {
        Self::NameContains(needle.to_uppercase())
    }

    pub fn species_in<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::SpeciesIn(normalize(names))
    }

    pub fn classes_in<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::ClassesIn(normalize(names))
    }

    /// Conjunction; `Always` is the identity
    pub fn and(self, other: CharacterPredicate) -> Self {
        match (self, other) {
            (Self::Always, p) | (p, Self::Always) => p,
            (a, b) => Self::And(Box::new(a), Box::new(b)),
        }
    }

    pub fn is_always(&self) -> bool {
        matches!(self, Self::Always)
    }

    /// Leaf criteria in evaluation order, `Always` excluded
    pub fn criteria(&self) -> Vec<&CharacterPredicate> {
        match self {
            Self::Always => Vec::new(),
            Self::And(a, b) => {
                let mut leaves = a.criteria();
                leaves.extend(b.criteria());
                leaves
            }
            leaf => vec![leaf],
        }
    }

    /// Evaluate against an in-memory character
    pub fn matches(&self, character: &Character) -> bool {
        match self {
            Self::Always => true,
            Self::NameContains(needle) => character.name.to_uppercase().contains(needle.as_str()),
            Self::SpeciesIn(names) => names.contains(&character.species.name.to_uppercase()),
            Self::ClassesIn(names) => character
                .all_classes()
                .any(|class| names.contains(&class.normalized_name())),
            Self::And(a, b) => a.matches(character) && b.matches(character),
        }
    }
}

fn normalize<I, S>(names: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    names.into_iter().map(|n| n.as_ref().to_uppercase()).collect()
}
