//! Card facets: the suit and rank layers a card is composed of.
//!
//! Each facet contributes a raw value, a one-character code and a tag
//! name. A card's derived identity is computed by folding over its
//! facets outer-to-inner, see [`crate::cards::Card`].

use serde::{Deserialize, Serialize};

/// One layer of a card's identity.
pub trait Facet {
    /// Raw contribution to the card's summed value.
    fn raw_value(&self) -> u32;

    /// Short code, concatenated into the card ID.
    fn code(&self) -> &'static str;

    /// Tag name, concatenated into the card's XML tag.
    fn tag(&self) -> &'static str;
}

/// French suits. Raw values are hundreds so `sum / 100` yields the color.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    /// Spade (color 4).
    Spade,
    /// Cross, also known as clubs (color 3).
    Cross,
    /// Heart (color 2).
    Heart,
    /// Diamond (color 1).
    Diamond,
}

impl Suit {
    /// All suits in catalog order.
    pub const ALL: [Suit; 4] = [Suit::Spade, Suit::Cross, Suit::Heart, Suit::Diamond];

    /// Parse a suit code (`S`, `C`, `H`, `D`), case-insensitive.
    #[must_use]
    pub fn from_code(code: char) -> Option<Suit> {
        match code.to_ascii_uppercase() {
            'S' => Some(Suit::Spade),
            'C' => Some(Suit::Cross),
            'H' => Some(Suit::Heart),
            'D' => Some(Suit::Diamond),
            _ => None,
        }
    }

    /// Color index: 4 = Spade, 3 = Cross, 2 = Heart, 1 = Diamond.
    #[must_use]
    pub const fn color(self) -> u32 {
        match self {
            Suit::Spade => 4,
            Suit::Cross => 3,
            Suit::Heart => 2,
            Suit::Diamond => 1,
        }
    }
}

impl Facet for Suit {
    fn raw_value(&self) -> u32 {
        self.color() * 100
    }

    fn code(&self) -> &'static str {
        match self {
            Suit::Spade => "S",
            Suit::Cross => "C",
            Suit::Heart => "H",
            Suit::Diamond => "D",
        }
    }

    fn tag(&self) -> &'static str {
        match self {
            Suit::Spade => "Spade",
            Suit::Cross => "Cross",
            Suit::Heart => "Heart",
            Suit::Diamond => "Diamond",
        }
    }
}

/// Card ranks including the joker.
///
/// Court cards and the ace are spaced by ten so that they outrank every
/// pip card in the summed value.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rank {
    Ace,
    King,
    Queen,
    Jack,
    Ten,
    Nine,
    Eight,
    Seven,
    Six,
    Five,
    Four,
    Three,
    Two,
    Joker,
}

impl Rank {
    /// The thirteen regular ranks, highest first.
    pub const REGULAR: [Rank; 13] = [
        Rank::Ace,
        Rank::King,
        Rank::Queen,
        Rank::Jack,
        Rank::Ten,
        Rank::Nine,
        Rank::Eight,
        Rank::Seven,
        Rank::Six,
        Rank::Five,
        Rank::Four,
        Rank::Three,
        Rank::Two,
    ];

    /// Ranks of the 32-card piquet deck (seven through ace), highest first.
    pub const PIQUET: [Rank; 8] = [
        Rank::Ace,
        Rank::King,
        Rank::Queen,
        Rank::Jack,
        Rank::Ten,
        Rank::Nine,
        Rank::Eight,
        Rank::Seven,
    ];

    /// Parse a rank code (`A K Q J T 9..2`, `0` for joker), case-insensitive.
    #[must_use]
    pub fn from_code(code: char) -> Option<Rank> {
        let rank = match code.to_ascii_uppercase() {
            'A' => Rank::Ace,
            'K' => Rank::King,
            'Q' => Rank::Queen,
            'J' => Rank::Jack,
            'T' => Rank::Ten,
            '9' => Rank::Nine,
            '8' => Rank::Eight,
            '7' => Rank::Seven,
            '6' => Rank::Six,
            '5' => Rank::Five,
            '4' => Rank::Four,
            '3' => Rank::Three,
            '2' => Rank::Two,
            '0' => Rank::Joker,
            _ => return None,
        };
        Some(rank)
    }
}

impl Facet for Rank {
    fn raw_value(&self) -> u32 {
        match self {
            Rank::Ace => 50,
            Rank::King => 40,
            Rank::Queen => 30,
            Rank::Jack => 20,
            Rank::Ten => 10,
            Rank::Nine => 9,
            Rank::Eight => 8,
            Rank::Seven => 7,
            Rank::Six => 6,
            Rank::Five => 5,
            Rank::Four => 4,
            Rank::Three => 3,
            Rank::Two => 2,
            Rank::Joker => 0,
        }
    }

    fn code(&self) -> &'static str {
        match self {
            Rank::Ace => "A",
            Rank::King => "K",
            Rank::Queen => "Q",
            Rank::Jack => "J",
            Rank::Ten => "T",
            Rank::Nine => "9",
            Rank::Eight => "8",
            Rank::Seven => "7",
            Rank::Six => "6",
            Rank::Five => "5",
            Rank::Four => "4",
            Rank::Three => "3",
            Rank::Two => "2",
            Rank::Joker => "0",
        }
    }

    fn tag(&self) -> &'static str {
        match self {
            Rank::Ace => "Ace",
            Rank::King => "King",
            Rank::Queen => "Queen",
            Rank::Jack => "Jack",
            Rank::Ten => "Ten",
            Rank::Nine => "Nine",
            Rank::Eight => "Eight",
            Rank::Seven => "Seven",
            Rank::Six => "Six",
            Rank::Five => "Five",
            Rank::Four => "Four",
            Rank::Three => "Three",
            Rank::Two => "Two",
            Rank::Joker => "Joker",
        }
    }
}
