//! Core types for the intrusive ordered index
//!
//! This crate provides the small closed vocabulary shared by the tree and
//! its test harness: node handles, colors, directions and insertion modes.

#![cfg_attr(not(test), no_std)]

pub mod types;

pub use types::*;
