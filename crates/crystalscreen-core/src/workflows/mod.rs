//! High-level screening workflows.
//!
//! Workflows are the top-level entry points of the crate: they resolve the
//! structure input into a parameter record, run the requested screening
//! engines over the bundled catalogs, and assemble a single report. All
//! validation and logging happens here; the core and engine layers below
//! stay pure.

pub mod screen;
