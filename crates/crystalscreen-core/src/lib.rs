//! # CrystalScreen Core Library
//!
//! A group-contribution molecular parameter estimator and comparative screening
//! engine for early-stage solid-state formulation work: solvent selection, salt
//! and cocrystal coformer ranking, and amorphous solid dispersion feasibility.
//!
//! ## Architectural Philosophy
//!
//! The library is designed with a strict three-layer architecture to ensure a clear
//! separation of concerns, making it modular, testable, and extensible.
//!
//! - **[`core`]: The Foundation.** Contains stateless data models
//!   (`Fragment`, `AggregateParameterRecord`, the solvent and coformer catalogs),
//!   the immutable group-contribution reference tables, and the pure estimator,
//!   parser, and biopharmaceutics math.
//!
//! - **[`engine`]: The Logic Core.** Implements the comparative screening
//!   algorithms: Hansen distance ranking for solvents, and the multi-factor
//!   coformer score combining ionization thermodynamics, supramolecular synthon
//!   compatibility, polymer miscibility, hygroscopicity, and impurity risk.
//!
//! - **[`workflows`]: The Public API.** The highest-level, user-facing layer.
//!   It ties `engine` and `core` together into complete screening runs: structure
//!   in, ranked tables out. Every output is plain data for a presentation or
//!   export layer to consume.
//!
//! All reference tables are fixed, versioned data constructed at compile time and
//! never mutated; every scoring call is a pure, deterministic function over those
//! tables plus caller-supplied records. Predictions carry documented confidence
//! bands and are screening aids, not measurements.

pub mod core;
pub mod engine;
pub mod workflows;
