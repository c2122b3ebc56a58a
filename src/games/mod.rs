//! Game orchestration built on the core.

pub mod holdem;
