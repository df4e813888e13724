pub mod biopharm;
pub mod constants;
pub mod estimator;
pub mod models;
pub mod parser;
pub mod tables;
