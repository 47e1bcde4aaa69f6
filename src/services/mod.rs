//! External service interactions
//!
//! This module contains services for interacting with external systems:
//! - Local key-value storage for favorites
//! - Background image fetching for event artwork

pub mod image_loader;
pub mod store;

pub use image_loader::{HttpFetcher, ImageLoader, ImageState, StaticProbe, PLACEHOLDER_TEXT};
pub use store::{JsonFileStore, KeyValueStore, MemoryStore};
