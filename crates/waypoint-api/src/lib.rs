//! Shared types for the waypoint synchronization core
//!
//! This crate holds the domain value types (`Place`, `Coordinate`) and the
//! error taxonomy (`SyncError`) used across the workspace. It deliberately
//! contains no I/O so every other crate can depend on it.

pub mod error;
pub mod types;

pub use error::{Result, SyncError};
pub use types::{Coordinate, FetchError, FetchState, Place};
