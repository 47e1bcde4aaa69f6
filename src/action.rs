//! Action enum - All possible application actions
//!
//! Actions are discrete operations that the application can perform.
//! Components emit Actions in response to events, and the App processes
//! them to update state.

use crate::model::ui::View;
use std::fmt;

/// All possible actions in the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // ─────────────────────────────────────────────────────────────────────────
    // App Lifecycle
    // ─────────────────────────────────────────────────────────────────────────
    /// Regular tick for animations/updates
    Tick,
    /// Terminal was resized
    Resize(u16, u16),
    /// Force quit without confirmation
    ForceQuit,
    /// Transition from splash to main app
    SplashComplete,

    // ─────────────────────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────────────────────
    /// Move to next item in the active list
    NextItem,
    /// Move to previous item in the active list
    PrevItem,
    /// Jump to first item
    FirstItem,
    /// Jump to last item
    LastItem,
    /// Switch to the next view in the tab bar
    NextView,
    /// Switch to the previous view in the tab bar
    PrevView,
    /// Switch to a specific view
    SetView(View),

    // ─────────────────────────────────────────────────────────────────────────
    // Modals
    // ─────────────────────────────────────────────────────────────────────────
    /// Open quit confirmation dialog
    OpenQuitDialog,
    /// Open help dialog showing all keyboard shortcuts
    OpenHelp,
    /// Close the current modal
    CloseModal,
    /// Confirm the current modal action
    ConfirmModal,

    // ─────────────────────────────────────────────────────────────────────────
    // Search
    // ─────────────────────────────────────────────────────────────────────────
    /// Enter search mode
    EnterSearchMode,
    /// Exit search mode
    ExitSearchMode,
    /// Add character to search query
    SearchInput(char),
    /// Remove last character from search query
    SearchBackspace,
    /// Replace the query with the first suggestion's title
    AcceptSuggestion,

    // ─────────────────────────────────────────────────────────────────────────
    // Catalog Filters
    // ─────────────────────────────────────────────────────────────────────────
    /// Open the filter dialog
    OpenFilterDialog,
    /// Move to the next sort key
    CycleSort,
    /// Show only favorites, or everything again
    ToggleFavoritesOnly,
    /// Reset query and filters
    ClearFilters,
    /// Apply a saved search by its position in the list
    ApplySavedSearch(usize),
    /// Prompt for a name to save the current search under
    OpenSaveSearch,
    /// Save the current search with this name
    SaveSearch(String),

    // ─────────────────────────────────────────────────────────────────────────
    // Favorites
    // ─────────────────────────────────────────────────────────────────────────
    /// Toggle the selected event's favorite flag
    ToggleFavorite,

    // ─────────────────────────────────────────────────────────────────────────
    // Checkout
    // ─────────────────────────────────────────────────────────────────────────
    /// Start buying tickets for the selected event
    OpenCheckout,

    // ─────────────────────────────────────────────────────────────────────────
    // Event Creation
    // ─────────────────────────────────────────────────────────────────────────
    /// Publish the drafted event
    PublishEvent,
    /// Discard the drafted event
    CancelEventDraft,

    // ─────────────────────────────────────────────────────────────────────────
    // Ticket Collection
    // ─────────────────────────────────────────────────────────────────────────
    /// Move to the next ticket status filter
    CycleTicketFilter,

    // ─────────────────────────────────────────────────────────────────────────
    // Profile
    // ─────────────────────────────────────────────────────────────────────────
    /// Keep the edited profile
    SaveProfile,
    /// Put the profile and settings back to their defaults
    ResetProfile,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Tick => write!(f, "Tick"),
            Action::Resize(w, h) => write!(f, "Resize({}, {})", w, h),
            Action::ForceQuit => write!(f, "ForceQuit"),
            Action::SplashComplete => write!(f, "SplashComplete"),
            Action::NextItem => write!(f, "NextItem"),
            Action::PrevItem => write!(f, "PrevItem"),
            Action::FirstItem => write!(f, "FirstItem"),
            Action::LastItem => write!(f, "LastItem"),
            Action::NextView => write!(f, "NextView"),
            Action::PrevView => write!(f, "PrevView"),
            Action::SetView(view) => write!(f, "SetView({})", view.name()),
            Action::OpenQuitDialog => write!(f, "OpenQuitDialog"),
            Action::OpenHelp => write!(f, "OpenHelp"),
            Action::CloseModal => write!(f, "CloseModal"),
            Action::ConfirmModal => write!(f, "ConfirmModal"),
            Action::EnterSearchMode => write!(f, "EnterSearchMode"),
            Action::ExitSearchMode => write!(f, "ExitSearchMode"),
            Action::SearchInput(c) => write!(f, "SearchInput('{}')", c),
            Action::SearchBackspace => write!(f, "SearchBackspace"),
            Action::AcceptSuggestion => write!(f, "AcceptSuggestion"),
            Action::OpenFilterDialog => write!(f, "OpenFilterDialog"),
            Action::CycleSort => write!(f, "CycleSort"),
            Action::ToggleFavoritesOnly => write!(f, "ToggleFavoritesOnly"),
            Action::ClearFilters => write!(f, "ClearFilters"),
            Action::ApplySavedSearch(index) => write!(f, "ApplySavedSearch({})", index),
            Action::OpenSaveSearch => write!(f, "OpenSaveSearch"),
            Action::SaveSearch(name) => write!(f, "SaveSearch({})", name),
            Action::ToggleFavorite => write!(f, "ToggleFavorite"),
            Action::OpenCheckout => write!(f, "OpenCheckout"),
            Action::PublishEvent => write!(f, "PublishEvent"),
            Action::CancelEventDraft => write!(f, "CancelEventDraft"),
            Action::CycleTicketFilter => write!(f, "CycleTicketFilter"),
            Action::SaveProfile => write!(f, "SaveProfile"),
            Action::ResetProfile => write!(f, "ResetProfile"),
        }
    }
}
