// Deterministic visibility scoring.
// Implements: league tier, ability/academic bands, base tables, adjustments,
// market multipliers. No I/O anywhere in this tree — handlers pass `as_of` in.

pub mod ability;
pub mod academics;
pub mod engine;
pub mod experience;
pub mod league;
pub mod market;
pub mod tables;
