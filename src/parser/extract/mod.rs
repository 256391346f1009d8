//! Field extractors: pure pattern-matching functions, one per semantic field.
//! A missing pattern is never an error; the field stays at its empty default.

pub mod included;
pub mod price;
pub mod processor;
pub mod regions;
