//! Test framework for the rbindex crates
//!
//! This crate provides the harness that drives the ordered index through
//! long randomized operation sequences, plus the record type and fixtures
//! shared by the Gherkin suite. Unlike the index crates, this runs in
//! userspace and can use std.

pub mod bootstrap;
pub mod config;
pub mod error;
pub mod fixtures;
pub mod helpers;

pub use crate::bootstrap::init_tracing;
pub use crate::config::HarnessConfig;
pub use crate::error::HarnessError;
pub use crate::fixtures::{random_walk_shape, NodeShape};
pub use crate::helpers::{random_ops, random_ops_all, Lcg, RandomRun, TestNode};
