pub mod coformers;
pub mod corrections;
pub mod fragments;
pub mod solvents;
pub mod synthons;
