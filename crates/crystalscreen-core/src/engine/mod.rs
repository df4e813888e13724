//! Screening engines built on the core parameter models.
//!
//! Every function here is pure and deterministic: it reads the immutable
//! reference catalogs and a caller-supplied parameter record, and produces a
//! fresh result table per run. Candidates are independent of each other, so
//! ordering of evaluation never changes a result.

pub mod coformer;
pub mod glass;
pub mod hansen;
pub mod solvent;
