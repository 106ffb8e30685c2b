//! Jenks natural breaks (exact optimal 1-D partition by dynamic programming).
//!
//! Purpose
//! - Classify a value column into `k` contiguous classes minimizing the total
//!   within-class sum of squared deviations, once per dataset.
//!
//! Conventions
//! - Breaks are class upper limits framed by the global minimum and maximum:
//!   `[min, upper(class 1), .., upper(class k-1), max]`, then de-duplicated.
//! - Series with `n <= k` values pass through as their sorted distinct values.
//! - Equal-cost partitions keep the first candidate seen while the trailing class grows
//!   from its shortest length, so the shortest final class wins a tie. Golden tests pin
//!   this down.
//!
//! Code cross-refs: `jenks::{solve_tables, backtrack}`, `types::BreakSet`.

mod jenks;
mod types;

pub use jenks::compute_breaks;
pub use types::BreakSet;

#[cfg(test)]
mod tests;
