//! Command implementations for xtask
//!
//! Each command is a separate module that implements its own CLI args and execution logic.

mod gen_base_stats;

pub use gen_base_stats::GenBaseStats;
