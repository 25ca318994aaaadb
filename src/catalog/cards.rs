//! The card catalog.
//!
//! The deck is generated, not hand-listed: two location cards per board
//! location (one per era), three industry cards per type per era, and
//! four wilds per era. 102 cards total. Ids are assigned in generation
//! order, so the catalog is stable across runs.

use crate::core::{CardId, CardKind, EraTag, Industry};

use super::locations::LOCATIONS;

/// A deck card. Static reference data.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Card {
    pub id: CardId,
    pub kind: CardKind,
    pub era: EraTag,
}

const INDUSTRY_CARDS_PER_ERA: usize = 3;
const WILD_CARDS_PER_ERA: usize = 4;

/// Generate the full 102-card catalog.
#[must_use]
pub fn all_cards() -> Vec<Card> {
    let mut cards = Vec::new();
    let mut push = |cards: &mut Vec<Card>, kind: CardKind, era: EraTag| {
        cards.push(Card {
            id: CardId::new(cards.len() as u16),
            kind,
            era,
        });
    };

    for location in &LOCATIONS {
        push(&mut cards, CardKind::Location(location.id), EraTag::Canal);
        push(&mut cards, CardKind::Location(location.id), EraTag::Rail);
    }

    for industry in Industry::ALL {
        for _ in 0..INDUSTRY_CARDS_PER_ERA {
            push(&mut cards, CardKind::Industry(industry), EraTag::Canal);
        }
        for _ in 0..INDUSTRY_CARDS_PER_ERA {
            push(&mut cards, CardKind::Industry(industry), EraTag::Rail);
        }
    }

    for _ in 0..WILD_CARDS_PER_ERA {
        push(&mut cards, CardKind::Wild, EraTag::Canal);
    }
    for _ in 0..WILD_CARDS_PER_ERA {
        push(&mut cards, CardKind::Wild, EraTag::Rail);
    }

    cards
}
