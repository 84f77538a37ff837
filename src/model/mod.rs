//! Model module - Application state and data types
//!
//! This module contains all the data structures and state management for the application.
//! It is organized into submodules by responsibility:
//!
//! - `types`: Core type definitions (track record, focus enum, snapshots)
//! - `catalog`: iTunes Search API client wrapper
//! - `app_model`: Main application model with state management methods

mod app_model;
mod catalog;
mod types;

// Re-export all public types for convenient access
pub use types::{ActiveSection, PlaybackTarget, SearchResponse, Snapshot, Track};

pub use catalog::{CatalogClient, CatalogError};

pub use app_model::{AppModel, DEFAULT_SEARCH_TERM, DEFAULT_VOLUME, VOLUME_STEP};
