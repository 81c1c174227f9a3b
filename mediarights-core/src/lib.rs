//! # mediarights-core
//!
//! Pure data transformations behind an image library's search box and
//! rights editor: alias-aware search query rewriting and derivation of
//! time-bounded usage leases from rights category templates.

pub mod client;
pub mod clock;
pub mod config;
pub mod leases;
pub mod query;
pub mod rights;
pub mod search;
pub mod types;

#[cfg(test)]
mod rights_test;
#[cfg(test)]
mod search_test;
