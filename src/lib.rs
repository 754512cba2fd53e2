//! Pushdown: a deterministic pushdown automaton simulator
//!
//! An automaton is a transition table (rules plus one accepting state) and
//! an engine that owns the symbol stack. Each input string is consumed one
//! character at a time through the first applicable rule, epsilon rules are
//! then applied until none fits, and the reached state decides the verdict.
//!
//! # Core Concepts
//!
//! - **Transition table**: ordered rules `(from, to, trigger, pop, push)`;
//!   the first applicable rule always wins
//! - **Don't-care marker**: `-` means epsilon as a trigger, "no pop" as a pop
//!   symbol and "push nothing" as a push entry
//! - **Engine**: runs inputs, bounds epsilon closure and keeps a trace
//!
//! # Example
//!
//! ```rust
//! use pushdown::engine::{Pda, Verdict};
//! use pushdown::table::TransitionTable;
//!
//! // a^n b^n, n >= 0
//! let text = "
//!     2
//!     0 0 a - A ;
//!     0 1 b A ;
//!     1 1 b A ;
//!     0 2 - e e ;
//!     1 2 - e e ;
//! ";
//! let (table, summary) = TransitionTable::parse(text).unwrap();
//! assert_eq!(summary.records, 5);
//!
//! let mut pda = Pda::new(table);
//! assert_eq!(pda.run("aabb").unwrap().verdict, Verdict::Accepted);
//! assert_eq!(pda.run("").unwrap().verdict, Verdict::Accepted);
//! assert_eq!(pda.run("aab").unwrap().verdict, Verdict::Rejected);
//! assert!(pda.run("ba").is_err());
//! ```

pub mod builder;
pub mod core;
pub mod engine;
pub mod input;
pub mod table;

// Re-export commonly used types
pub use builder::{BuildError, PdaBuilder, TransitionBuilder};
pub use core::{Slot, StateId, SymbolStack, Trigger};
pub use engine::{EngineConfig, Pda, RunError, RunReport, Verdict};
pub use table::{LoadError, LoadSummary, Transition, TransitionTable};
