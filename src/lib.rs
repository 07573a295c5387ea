//! # Rift Stats
//!
//! Draft, performance and objective statistics over competitive
//! League of Legends match records.
//!
//! ## Architecture
//!
//! - **models**: Core data structures (matches, drafts, stats, objective events)
//! - **storage**: Filesystem data lake operations (JSONL) and the in-memory dataset
//! - **search**: Search criteria and match selection
//! - **calculate**: Per team/side aggregations and report assembly
//! - **api**: REST API endpoints
//! - **config**: Configuration loading and validation

pub mod api;
pub mod calculate;
pub mod config;
pub mod models;
pub mod search;
pub mod storage;

#[cfg(test)]
mod fixtures;

pub use models::*;
