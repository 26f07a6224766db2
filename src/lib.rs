//! Audio Trip choreography sheet ingestion
//!
//! A Rust library for pulling the community choreography sheet (a published
//! CSV) and turning it into validated entries.
//!
//! This library provides tools for:
//! - Fetching the sheet over HTTP(S)
//! - Parsing rows positionally into typed fields (warnings, artists,
//!   difficulties, BPM, length, date, link, notes)
//! - Validating every row and reporting each rejection with all violated rules
//! - Rendering entries for the command-line listing

pub mod config;
pub mod constants;
pub mod error;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod choreography_fetcher;
        pub mod choreography_parser;
        pub mod sheet_fetcher;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
    pub mod render;
}

// Re-export commonly used types
pub use app::models::{Choreography, Difficulty, Rejection, ValidationField, Warning};
pub use app::services::choreography_fetcher::ChoreographyFetcher;
pub use config::Config;
pub use error::{Error, Result};
