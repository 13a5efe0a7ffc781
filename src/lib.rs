pub mod config;
pub mod error;
pub mod optimizer;
pub mod schedule;
pub mod scorer;
pub mod season;
pub mod store;
// cmd and reports are modules of the binary crate (main.rs).
