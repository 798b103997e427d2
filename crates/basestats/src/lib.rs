//! Base stat table generation for the simulator.
//!
//! This crate turns the tab-separated stat exports found under
//! `assets/db_inputs/basestats/` into the generated Go source consumed by the
//! simulator's stat calculations:
//! - Table loading (row-indexed and column-indexed lookups)
//! - Class identity and column offsets
//! - The six-table class stat aggregate
//! - Go source emission (rating constants + per-class, per-level maps)
//!
//! Data flows one way: files → [`IndexedTable`] → [`ClassStats`] → [`GoEmitter`]
//! → output file.

pub mod class;
pub mod config;
pub mod emit;
pub mod error;
pub mod loaders;
pub mod pipeline;

pub use class::{Class, MAX_LEVEL, REFERENCE_LEVELS};
pub use config::{EmitConfig, GeneratorConfig, TableLayout, TableSource};
pub use emit::{GoEmitter, RatingConstants, format_percent};
pub use error::{ErrorKind, Result, StatsError};
pub use loaders::{ClassStats, ConfigLoader, IndexMode, IndexedTable, StatsFactory};
pub use pipeline::{CheckOutcome, Generated, check, generate};
