//! MythRealms - GDD & Content Management Platform
//!
//! Stores game design documents, characters, weapons, quests, music tracks
//! and uploaded assets, and serves them over an HTTP API.

pub mod api;
pub mod assets;
pub mod cli;
pub mod config;
pub mod context;
pub mod di;
pub mod error;
pub mod migrations;
pub mod models;
pub mod repositories;
pub mod services;
pub mod store;

// Re-export FromRef at crate root for di-macros generated code
pub use di::FromRef;
