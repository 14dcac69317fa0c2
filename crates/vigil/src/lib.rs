//! Vigil - attendance report engine for presence-event data.
//!
//! This crate provides both a CLI application and a library for querying
//! attendance records: filtering, sorting, pagination, aggregate totals,
//! and CSV export.

#![forbid(unsafe_code)]

// Public modules for library usage
pub mod app;
pub mod domain;
pub mod engine;
pub mod error;
pub mod source;

// Public CLI module (needed by binary)
pub mod cli;

// Output formatting
pub mod output;

// Internal modules (not exposed as public API)
pub(crate) mod config;
