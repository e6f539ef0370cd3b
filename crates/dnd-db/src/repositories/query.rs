//! Translation of character predicates and orderings into PostgreSQL
//!
//! Every user-supplied value is bound as a parameter; only fixed fragments are
//! pushed as SQL text.

use dnd_core::query::{CharacterOrdering, CharacterPredicate, OrderKey, Page};
use sqlx::{Postgres, QueryBuilder};

/// Columns of [`crate::models::CharacterModel`]
pub(crate) const CHARACTER_COLUMNS: &str = "SELECT c.id, c.name, c.player_name, \
     c.strength, c.dexterity, c.constitution, c.intelligence, c.wisdom, c.charisma, \
     s.name AS species_name, s.speed AS species_speed, s.size AS species_size";

pub(crate) const CHARACTER_FROM: &str =
    " FROM characters c JOIN species s ON s.id = c.specie_id";

const MAIN_CLASS_NAME: &str = "(SELECT cl.name FROM character_classes cc \
     JOIN classes cl ON cl.id = cc.class_id \
     WHERE cc.character_id = c.id AND cc.is_main_class LIMIT 1) COLLATE \"C\"";

/// Append ` WHERE <predicate>`
pub(crate) fn push_where(builder: &mut QueryBuilder<'_, Postgres>, predicate: &CharacterPredicate) {
    builder.push(" WHERE ");
    push_predicate(builder, predicate);
}

fn push_predicate(builder: &mut QueryBuilder<'_, Postgres>, predicate: &CharacterPredicate) {
    match predicate {
        CharacterPredicate::Always => {
            builder.push("TRUE");
        }
        CharacterPredicate::NameContains(needle) => {
            builder
                .push("strpos(UPPER(c.name), ")
                .push_bind(needle.clone())
                .push(") > 0");
        }
        CharacterPredicate::SpeciesIn(names) => {
            builder
                .push("UPPER(s.name) = ANY(")
                .push_bind(names.clone())
                .push(")");
        }
        CharacterPredicate::ClassesIn(names) => {
            builder
                .push(
                    "EXISTS (SELECT 1 FROM character_classes fc \
                     JOIN classes fcl ON fcl.id = fc.class_id \
                     WHERE fc.character_id = c.id AND UPPER(fcl.name) = ANY(",
                )
                .push_bind(names.clone())
                .push("))");
        }
        CharacterPredicate::And(left, right) => {
            builder.push("(");
            push_predicate(builder, left);
            builder.push(" AND ");
            push_predicate(builder, right);
            builder.push(")");
        }
    }
}

/// Text keys sort under the "C" collation: plain code point order, like `str::cmp`
fn order_expression(key: OrderKey) -> &'static str {
    match key {
        OrderKey::Id => "c.id",
        OrderKey::Name => "c.name COLLATE \"C\"",
        OrderKey::Specie => "s.name COLLATE \"C\"",
        OrderKey::MainClass => MAIN_CLASS_NAME,
    }
}

/// Append ` ORDER BY`, with the id as tiebreaker for non-id keys
pub(crate) fn push_order_by(builder: &mut QueryBuilder<'_, Postgres>, ordering: &CharacterOrdering) {
    let direction = if ordering.direction.is_ascending() {
        "ASC"
    } else {
        "DESC"
    };

    builder
        .push(" ORDER BY ")
        .push(order_expression(ordering.key))
        .push(" ")
        .push(direction);
    if ordering.key != OrderKey::Id {
        builder.push(", c.id ").push(direction);
    }
}

/// Append ` LIMIT .. OFFSET ..` unless the page is infinite
pub(crate) fn push_page(builder: &mut QueryBuilder<'_, Postgres>, page: Page) {
    if let Some((offset, limit)) = page.bounds() {
        builder
            .push(" LIMIT ")
            .push_bind(limit as i64)
            .push(" OFFSET ")
            .push_bind(offset as i64);
    }
}
