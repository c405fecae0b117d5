//! Core utilities shared across the switchboard crates.
//!
//! This crate provides the error handling foundation used by the
//! integration configuration codec.

pub mod error;

pub use error::Result;
