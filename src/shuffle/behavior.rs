//! Shuffle behaviors.
//!
//! Each behavior imitates one way a person rearranges a pile of cards.
//! Behaviors carry no state beyond their repetition count and only ever
//! move cards, so applying one any number of times keeps the multiset of
//! cards and the stack length unchanged.

use crate::cards::Card;
use crate::core::rng::GameRng;
use crate::stack::Stack;

use super::BehaviorKind;

/// Default number of passes per application.
pub const DEFAULT_REPETITIONS: usize = 12;

/// One shuffling strategy.
pub trait Behavior: std::fmt::Debug {
    /// Which behavior this is.
    fn kind(&self) -> BehaviorKind;

    /// Rearrange `stack` in place.
    fn shuffle(&self, stack: &mut Stack, rng: &mut GameRng);
}

// =============================================================================
// HandWise
// =============================================================================

/// Peels runs off the top into the right hand and drops each completed
/// run onto the left hand, then keeps the left hand's order.
#[derive(Clone, Debug)]
pub struct HandWise {
    repetitions: usize,
}

impl HandWise {
    /// Create with an explicit repetition count.
    #[must_use]
    pub fn new(repetitions: usize) -> Self {
        Self { repetitions }
    }
}

impl Default for HandWise {
    fn default() -> Self {
        Self::new(DEFAULT_REPETITIONS)
    }
}

impl Behavior for HandWise {
    fn kind(&self) -> BehaviorKind {
        BehaviorKind::HandWise
    }

    fn shuffle(&self, stack: &mut Stack, rng: &mut GameRng) {
        let cards = stack.cards_mut();
        let total = cards.len();
        if total < 2 {
            return;
        }

        for _ in 0..self.repetitions {
            let run = rng.between(3, total / 4);
            let mut left: Vec<Card> = Vec::with_capacity(total);
            let mut right: Vec<Card> = Vec::with_capacity(run);

            let mut peeled = 0;
            while let Some(card) = cards.pop() {
                right.push(card);
                peeled += 1;
                if peeled % run == 0 {
                    left.extend(right.drain(..).rev());
                }
            }
            left.extend(right.drain(..).rev());

            *cards = left;
        }
    }
}

// =============================================================================
// Stacked
// =============================================================================

/// Lifts a random-sized block off the top card by card and lays it back
/// on the remainder, which turns the block over in place.
#[derive(Clone, Debug)]
pub struct Stacked {
    repetitions: usize,
}

impl Stacked {
    /// Smallest block lifted off the top of stacks larger than this.
    pub const MIN_BLOCK: usize = 12;

    /// Create with an explicit repetition count.
    #[must_use]
    pub fn new(repetitions: usize) -> Self {
        Self { repetitions }
    }
}

impl Default for Stacked {
    fn default() -> Self {
        Self::new(DEFAULT_REPETITIONS)
    }
}

impl Behavior for Stacked {
    fn kind(&self) -> BehaviorKind {
        BehaviorKind::Stacked
    }

    fn shuffle(&self, stack: &mut Stack, rng: &mut GameRng) {
        let cards = stack.cards_mut();
        let total = cards.len();
        if total < 2 {
            return;
        }

        // Short stacks draw from [1, len) so the block size still varies.
        let lower = if total > Self::MIN_BLOCK { Self::MIN_BLOCK } else { 1 };
        for _ in 0..self.repetitions {
            let block = rng.between(lower, total);
            cards[total - block..].reverse();
        }
    }
}

// =============================================================================
// HalfStacked
// =============================================================================

/// Deals the stack alternately into two halves, then puts the
/// even-position half below the odd-position half.
#[derive(Clone, Debug)]
pub struct HalfStacked {
    repetitions: usize,
}

impl HalfStacked {
    /// Create with an explicit repetition count.
    #[must_use]
    pub fn new(repetitions: usize) -> Self {
        Self { repetitions }
    }
}

impl Default for HalfStacked {
    fn default() -> Self {
        Self::new(DEFAULT_REPETITIONS)
    }
}

impl Behavior for HalfStacked {
    fn kind(&self) -> BehaviorKind {
        BehaviorKind::HalfStacked
    }

    fn shuffle(&self, stack: &mut Stack, _rng: &mut GameRng) {
        let cards = stack.cards_mut();
        let total = cards.len();

        for _ in 1..self.repetitions {
            let mut even = Vec::with_capacity(total / 2 + 1);
            let mut odd = Vec::with_capacity(total / 2);
            for (position, card) in cards.drain(..).enumerate() {
                if position % 2 == 0 {
                    even.push(card);
                } else {
                    odd.push(card);
                }
            }
            even.append(&mut odd);
            *cards = even;
        }
    }
}

// =============================================================================
// TableSpreaded
// =============================================================================

/// Spreads the cards on the table and gathers them one at a time from
/// random positions.
#[derive(Clone, Debug)]
pub struct TableSpreaded {
    repetitions: usize,
}

impl TableSpreaded {
    /// Create with an explicit repetition count.
    #[must_use]
    pub fn new(repetitions: usize) -> Self {
        Self { repetitions }
    }
}

impl Default for TableSpreaded {
    fn default() -> Self {
        Self::new(DEFAULT_REPETITIONS)
    }
}

impl Behavior for TableSpreaded {
    fn kind(&self) -> BehaviorKind {
        BehaviorKind::TableSpreaded
    }

    fn shuffle(&self, stack: &mut Stack, rng: &mut GameRng) {
        let cards = stack.cards_mut();
        let total = cards.len();

        for _ in 0..self.repetitions {
            let mut pile = Vec::with_capacity(total);
            while !cards.is_empty() {
                let position = rng.below(cards.len());
                pile.push(cards.swap_remove(position));
            }
            *cards = pile;
        }
    }
}

// =============================================================================
// UpSideDown
// =============================================================================

/// Turns the whole stack over once.
#[derive(Clone, Debug, Default)]
pub struct UpSideDown;

impl Behavior for UpSideDown {
    fn kind(&self) -> BehaviorKind {
        BehaviorKind::UpSideDown
    }

    fn shuffle(&self, stack: &mut Stack, _rng: &mut GameRng) {
        stack.cards_mut().reverse();
    }
}

// =============================================================================
// Faked
// =============================================================================

/// Pretends to shuffle.
#[derive(Clone, Debug, Default)]
pub struct Faked;

impl Behavior for Faked {
    fn kind(&self) -> BehaviorKind {
        BehaviorKind::Faked
    }

    fn shuffle(&self, _stack: &mut Stack, _rng: &mut GameRng) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Catalog;
    use crate::stack::Deck;

    fn deck_stack() -> Stack {
        Deck::french52(Catalog::standard()).unwrap().stack().clone()
    }

    fn ids(stack: &Stack) -> Vec<String> {
        stack.iter().map(Card::id).collect()
    }

    fn sorted_ids(stack: &Stack) -> Vec<String> {
        let mut v = ids(stack);
        v.sort();
        v
    }

    #[test]
    fn test_faked_keeps_order() {
        let mut stack = deck_stack();
        let before = ids(&stack);
        Faked.shuffle(&mut stack, &mut GameRng::new(1));
        assert_eq!(ids(&stack), before);
    }

    #[test]
    fn test_upside_down_reverses() {
        let mut stack = deck_stack();
        let mut expected = ids(&stack);
        expected.reverse();

        let mut rng = GameRng::new(1);
        UpSideDown.shuffle(&mut stack, &mut rng);
        assert_eq!(ids(&stack), expected);

        UpSideDown.shuffle(&mut stack, &mut rng);
        expected.reverse();
        assert_eq!(ids(&stack), expected);
    }

    #[test]
    fn test_half_stacked_single_pass() {
        let cards = Catalog::standard()
            .build_all(["S2", "S3", "S4", "S5", "S6"])
            .unwrap();
        let mut stack = Stack::from_cards(5, cards).unwrap();

        // Two repetitions means one interleaving pass.
        HalfStacked::new(2).shuffle(&mut stack, &mut GameRng::new(1));
        assert_eq!(ids(&stack), vec!["S2", "S4", "S6", "S3", "S5"]);
    }

    #[test]
    fn test_stacked_turns_top_block_over() {
        let ids13 = ["S2", "S3", "S4", "S5", "S6", "S7", "S8", "S9", "ST", "SJ", "SQ", "SK", "SA"];
        let cards = Catalog::standard().build_all(ids13).unwrap();
        let mut stack = Stack::from_cards(13, cards).unwrap();

        // Thirteen cards: block size is drawn from [12, 13), so the top twelve flip.
        Stacked::new(1).shuffle(&mut stack, &mut GameRng::new(1));
        assert_eq!(
            ids(&stack),
            vec!["S2", "SA", "SK", "SQ", "SJ", "ST", "S9", "S8", "S7", "S6", "S5", "S4", "S3"]
        );
    }

    #[test]
    fn test_stacked_short_stack_uses_rng() {
        let catalog = Catalog::standard();
        let mut outcomes = std::collections::HashSet::new();
        for seed in 0..50 {
            let cards = catalog.build_all(["S2", "S3", "S4", "S5", "S6"]).unwrap();
            let mut stack = Stack::from_cards(5, cards).unwrap();
            Stacked::new(1).shuffle(&mut stack, &mut GameRng::new(seed));

            // The block never reaches the bottom card.
            assert_eq!(stack.get(0).unwrap().id(), "S2");
            outcomes.insert(ids(&stack));
        }
        assert!(outcomes.len() > 1);
    }

    #[test]
    fn test_hand_wise_small_stack_uses_minimum_run() {
        let cards = Catalog::standard()
            .build_all(["S2", "S3", "S4", "S5", "S6", "S7"])
            .unwrap();
        let mut stack = Stack::from_cards(6, cards).unwrap();

        // total / 4 == 1, so the run length falls back to 3:
        // runs [S7 S6 S5] then [S4 S3 S2] are laid down bottom-up intact.
        HandWise::new(1).shuffle(&mut stack, &mut GameRng::new(1));
        assert_eq!(ids(&stack), vec!["S5", "S6", "S7", "S2", "S3", "S4"]);
    }

    #[test]
    fn test_every_behavior_is_a_permutation() {
        let behaviors: Vec<Box<dyn Behavior>> = vec![
            Box::new(HandWise::default()),
            Box::new(Stacked::default()),
            Box::new(HalfStacked::default()),
            Box::new(TableSpreaded::default()),
            Box::new(UpSideDown),
            Box::new(Faked),
        ];

        let mut rng = GameRng::new(42);
        for behavior in &behaviors {
            let mut stack = deck_stack();
            let before = sorted_ids(&stack);
            for _ in 0..5 {
                behavior.shuffle(&mut stack, &mut rng);
            }
            assert_eq!(stack.len(), 52, "{:?}", behavior.kind());
            assert_eq!(sorted_ids(&stack), before, "{:?}", behavior.kind());
        }
    }

    #[test]
    fn test_empty_and_single_stacks() {
        let behaviors: Vec<Box<dyn Behavior>> = vec![
            Box::new(HandWise::default()),
            Box::new(Stacked::default()),
            Box::new(HalfStacked::default()),
            Box::new(TableSpreaded::default()),
            Box::new(UpSideDown),
        ];
        let mut rng = GameRng::new(3);

        for behavior in &behaviors {
            let mut empty = Stack::new(4).unwrap();
            behavior.shuffle(&mut empty, &mut rng);
            assert!(empty.is_empty());

            let mut single = Stack::new(4).unwrap();
            single.push(Catalog::standard().build("HA").unwrap()).unwrap();
            behavior.shuffle(&mut single, &mut rng);
            assert_eq!(ids(&single), vec!["HA"]);
        }
    }
}
