//! Bundle orchestration and coordination.
//!
//! This module provides the main [`Bundler`] orchestrator that runs the
//! requested package types and reports what they produced.
//!
//! # Module Organization
//!
//! - [`checksum`] - `RECORD` digests and artifact SHA-256 checksums
//! - [`orchestrator`] - Main [`Bundler`] struct and bundling operations

pub mod checksum;
mod orchestrator;

pub use checksum::{calculate_sha256, record_digest};
pub use orchestrator::Bundler;
