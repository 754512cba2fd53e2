//! Core automaton value types.
//!
//! This module contains the types every other part of the crate is built on:
//! - State identifiers
//! - Triggers and stack slots, with the reserved `-` marker
//! - The symbol stack
//! - The per-run trace of fired transitions

mod history;
mod stack;
mod state;
mod symbol;

pub use history::{Step, Trace};
pub use stack::SymbolStack;
pub use state::StateId;
pub use symbol::{Slot, Trigger, DONT_CARE, TERMINATOR};
