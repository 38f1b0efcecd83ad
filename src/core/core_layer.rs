// The core module holds the export logic.
// It never talks to the network or disk directly; infra does that.

#[path = "config/mod.rs"]
pub mod config;

#[path = "export/mod.rs"]
pub mod export;
