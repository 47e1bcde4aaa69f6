//! Model layer - centralized state management
//!
//! This module contains all state-related types:
//! - `DomainState` - Business data (catalog, owned tickets, favorites)
//! - `filter` - Pure filter/sort over the catalog
//! - `checkout` / `creation` - The two wizard state machines
//! - `profile` - Dashboard profile and settings
//! - `ModalStack` - Modal overlay management

pub mod catalog;
pub mod checkout;
pub mod creation;
pub mod domain;
pub mod event;
pub mod favorites;
pub mod filter;
pub mod modal;
pub mod profile;
pub mod tickets;
pub mod ui;

// Re-export commonly used types
pub use creation::CreateStep;
pub use favorites::Favorites;
pub use ui::View;
