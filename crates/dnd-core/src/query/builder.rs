//! Filter and order builders
//!
//! Builders turn caller-facing query primitives into the resolved forms that
//! repositories consume.

use crate::query::{
    CharacterFilter, CharacterOrdering, CharacterPredicate, Order, OrderKey,
};

/// Builds a predicate from filter criteria
pub trait FilterBuilder {
    type Predicate;

    fn build(&self) -> Self::Predicate;
}

/// Builds a concrete ordering from a symbolic one
pub trait OrderBuilder {
    type Ordering;

    fn build(&self) -> Self::Ordering;
}

/// AND-combines every criterion set on a [`CharacterFilter`]
#[derive(Debug, Clone, Copy)]
pub struct CharacterFilterBuilder<'a> {
    filter: &'a CharacterFilter,
}

impl<'a> CharacterFilterBuilder<'a> {
    pub fn new(filter: &'a CharacterFilter) -> Self {
        Self { filter }
    }
}

impl FilterBuilder for CharacterFilterBuilder<'_> {
    type Predicate = CharacterPredicate;

    fn build(&self) -> CharacterPredicate {
        let mut predicate = CharacterPredicate::Always;

        if let Some(name) = &self.filter.name {
            predicate = predicate.and(CharacterPredicate::name_contains(name));
        }
        if !self.filter.species.is_empty() {
            predicate = predicate.and(CharacterPredicate::species_in(&self.filter.species));
        }
        if !self.filter.classes.is_empty() {
            predicate = predicate.and(CharacterPredicate::classes_in(&self.filter.classes));
        }

        predicate
    }
}

/// Resolves an [`Order`] key; unrecognised keys order by id
#[derive(Debug, Clone, Copy)]
pub struct CharacterOrderBuilder<'a> {
    order: &'a Order,
}

impl<'a> CharacterOrderBuilder<'a> {
    pub fn new(order: &'a Order) -> Self {
        Self { order }
    }
}

impl OrderBuilder for CharacterOrderBuilder<'_> {
    type Ordering = CharacterOrdering;

    fn build(&self) -> CharacterOrdering {
        CharacterOrdering::new(
            OrderKey::resolve(&self.order.key).unwrap_or(OrderKey::Id),
            self.order.direction(),
        )
    }
}
