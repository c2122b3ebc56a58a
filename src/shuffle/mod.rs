//! Shuffle engine.
//!
//! Shuffling is split into stateless behaviors and a `Shuffler` that
//! applies an ordered list of them:
//!
//! | Behavior        | Per pass                                                   |
//! |-----------------|------------------------------------------------------------|
//! | `HandWise`      | Peel runs off the top, stack them in the other hand        |
//! | `Stacked`       | Lift a random block off the top and lay it back turned over |
//! | `HalfStacked`   | Deal into two halves by parity, even half below odd half   |
//! | `TableSpreaded` | Gather cards one by one from random positions              |
//! | `UpSideDown`    | Reverse the stack (single pass)                            |
//! | `Faked`         | Nothing                                                    |
//!
//! Randomness always comes from the caller's [`GameRng`](crate::core::GameRng).

mod behavior;
mod factory;
mod shuffler;

pub use behavior::{
    Behavior, Faked, HalfStacked, HandWise, Stacked, TableSpreaded, UpSideDown, DEFAULT_REPETITIONS,
};
pub use factory::{build_behaviors, build_from_config, BehaviorKind};
pub use shuffler::Shuffler;
