// The infra module implements the core export traits against real I/O.

#[path = "google/mod.rs"]
pub mod google;

#[path = "files/mod.rs"]
pub mod files;
