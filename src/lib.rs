//! Translation orchestration engine.
//!
//! Coordinates several independent, unreliable, rate-limited external
//! translation providers into one reliable surface: a cascade with
//! graceful fallback, a TTL-bounded result cache, heuristic language
//! detection, and sentiment/context enrichment attached to every result.

pub mod cache;
pub mod config;
pub mod detect;
pub mod engine;
pub mod enrichment;
pub mod error;
pub mod language;
pub mod providers;
pub mod retry;
pub mod server;
pub mod types;
