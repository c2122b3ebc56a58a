//! Bounded, ordered card container.
//!
//! Index 0 is the bottom of the stack, the last index is the top.
//! `push` adds on top, `pop` takes from the top.

use std::fmt;

use crate::cards::Card;
use crate::core::error::{CardError, Result};

/// An ordered pile of cards with a fixed maximum length.
///
/// The length never exceeds `max()`: every operation that adds cards
/// checks capacity before mutating.
///
/// ## Example
///
/// ```
/// use rust_cardtable::cards::Catalog;
/// use rust_cardtable::stack::Stack;
///
/// let catalog = Catalog::standard();
/// let mut stack = Stack::new(3).unwrap();
/// stack.push(catalog.build("SA").unwrap()).unwrap();
/// stack.push(catalog.build("H7").unwrap()).unwrap();
///
/// assert_eq!(stack.top().map(|c| c.id()), Some("H7".to_string()));
/// assert_eq!(stack.pop().unwrap().id(), "H7");
/// assert_eq!(stack.len(), 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Stack {
    max: usize,
    cards: Vec<Card>,
}

impl Stack {
    /// Create an empty stack holding at most `max` cards.
    ///
    /// Fails with `NotValid` if `max` is zero.
    pub fn new(max: usize) -> Result<Self> {
        if max == 0 {
            return Err(CardError::not_valid(
                "Stack.new - maximum number of cards must be positive",
            ));
        }
        Ok(Self {
            max,
            cards: Vec::with_capacity(max),
        })
    }

    /// Create a stack from cards given bottom to top.
    pub fn from_cards(max: usize, cards: Vec<Card>) -> Result<Self> {
        let mut stack = Self::new(max)?;
        if cards.len() > max {
            return Err(CardError::not_possible(format!(
                "Stack.from_cards - {} cards exceed maximum {}",
                cards.len(),
                max
            )));
        }
        stack.cards = cards;
        Ok(stack)
    }

    /// Maximum number of cards.
    #[must_use]
    pub fn max(&self) -> usize {
        self.max
    }

    /// Current number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the stack holds no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Check if the stack is at capacity.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cards.len() >= self.max
    }

    /// Cards bottom to top.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Iterate bottom to top.
    pub fn iter(&self) -> std::slice::Iter<'_, Card> {
        self.cards.iter()
    }

    /// Top card, if any.
    #[must_use]
    pub fn top(&self) -> Option<&Card> {
        self.cards.last()
    }

    /// Check whether a card with the same identity is in the stack.
    #[must_use]
    pub fn contains(&self, card: &Card) -> bool {
        self.cards.contains(card)
    }

    /// Bounds-checked read.
    pub fn get(&self, index: usize) -> Result<&Card> {
        self.cards.get(index).ok_or_else(|| {
            CardError::not_valid(format!(
                "Stack.get - index {} out of range for {} cards",
                index,
                self.cards.len()
            ))
        })
    }

    /// Put a card on top.
    ///
    /// Fails with `NotPossible` when the stack is full.
    pub fn push(&mut self, card: Card) -> Result<()> {
        if self.is_full() {
            return Err(CardError::not_possible(format!(
                "Stack.push - stack is full at {} cards",
                self.max
            )));
        }
        self.cards.push(card);
        Ok(())
    }

    /// Move every card of `other` onto this stack's top, keeping their order.
    ///
    /// `other` is left empty. Fails with `NotPossible` if `other` is empty
    /// or the combined cards would exceed this stack's maximum; in that
    /// case neither stack changes.
    pub fn push_stack(&mut self, other: &mut Stack) -> Result<()> {
        if other.is_empty() {
            return Err(CardError::not_possible("Stack.push_stack - given stack is empty"));
        }
        if self.cards.len() + other.len() > self.max {
            return Err(CardError::not_possible(format!(
                "Stack.push_stack - {} + {} cards exceed maximum {}",
                self.cards.len(),
                other.len(),
                self.max
            )));
        }
        self.cards.append(&mut other.cards);
        Ok(())
    }

    /// Insert a card at `index` (0 = bottom, `len()` = top).
    pub fn insert(&mut self, index: usize, card: Card) -> Result<()> {
        if index > self.cards.len() {
            return Err(CardError::not_valid(format!(
                "Stack.insert - index {} out of range for {} cards",
                index,
                self.cards.len()
            )));
        }
        if self.is_full() {
            return Err(CardError::not_possible(format!(
                "Stack.insert - stack is full at {} cards",
                self.max
            )));
        }
        self.cards.insert(index, card);
        Ok(())
    }

    /// Take the top card.
    ///
    /// Fails with `NotPossible` on an empty stack.
    pub fn pop(&mut self) -> Result<Card> {
        self.cards
            .pop()
            .ok_or_else(|| CardError::not_possible("Stack.pop - stack is empty"))
    }

    /// Take the top `n` cards as a new stack of maximum `n`.
    ///
    /// The returned stack keeps the cards' bottom-to-top order, so
    /// `push_stack` puts them back exactly where they were.
    pub fn pop_n(&mut self, n: usize) -> Result<Stack> {
        if n == 0 {
            return Err(CardError::not_possible("Stack.pop_n - number of cards must be positive"));
        }
        if n > self.cards.len() {
            return Err(CardError::not_possible(format!(
                "Stack.pop_n - {} cards requested but only {} present",
                n,
                self.cards.len()
            )));
        }
        let at = self.cards.len() - n;
        Ok(Stack {
            max: n,
            cards: self.cards.split_off(at),
        })
    }

    /// Remove and return the card at `index`.
    pub fn remove_at(&mut self, index: usize) -> Result<Card> {
        if index >= self.cards.len() {
            return Err(CardError::not_valid(format!(
                "Stack.remove_at - index {} out of range for {} cards",
                index,
                self.cards.len()
            )));
        }
        Ok(self.cards.remove(index))
    }

    /// Sort ascending by value, then color.
    pub fn sort(&mut self) {
        self.cards.sort();
    }

    /// Drop every card.
    pub fn clear(&mut self) {
        self.cards.clear();
    }

    /// Remove and return every card, bottom to top.
    pub fn take_all(&mut self) -> Vec<Card> {
        std::mem::take(&mut self.cards)
    }

    /// Raw access for permutations that keep the length unchanged.
    pub(crate) fn cards_mut(&mut self) -> &mut Vec<Card> {
        &mut self.cards
    }
}

impl<'a> IntoIterator for &'a Stack {
    type Item = &'a Card;
    type IntoIter = std::slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}

impl fmt::Display for Stack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for card in &self.cards {
            if !first {
                f.write_str(" ")?;
            }
            write!(f, "{}", card)?;
            first = false;
        }
        Ok(())
    }
}
