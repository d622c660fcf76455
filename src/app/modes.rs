//! Input, view, and popup state types for the application.
//!
//! This module defines the state machine enums that control user interaction.
//! These types determine which keybindings are active, how input is processed,
//! and which records are displayed.
//!
//! # State Machines
//!
//! The application operates in one of two primary input modes:
//! - **Normal**: Default navigation and command mode
//! - **Search**: Active search with typing or result navigation focus
//!
//! The view mode narrows the base record set before the filter predicates:
//! - **All**: Every provider in the directory
//! - **TeleOnly**: Only providers offering teleconsultation
//!
//! The detail popup is its own two-state machine, {Closed, Open(id)}: opening
//! an absent id is a no-op, re-opening the same id is idempotent, and closing
//! from Closed changes nothing.

use crate::domain::ProviderId;

/// Focus state within search mode.
///
/// Determines whether search input is being typed or filtered results are
/// being navigated. Controls which keybindings are active during search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchFocus {
    /// User is typing in the search input field.
    ///
    /// Accepts character input, backspace, and enter (to switch to Navigating).
    Typing,

    /// User is navigating through filtered results.
    ///
    /// Accepts j/k for movement, enter to open details, and / to return to Typing.
    Navigating,
}

/// Current input handling mode.
///
/// Controls which keybindings are active and how user input is processed.
/// Determines the displayed footer text and whether the search bar is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Default navigation and command mode.
    Normal,

    /// Active search mode with focus state.
    Search(SearchFocus),
}

/// View filtering mode determining the base record set.
///
/// Applied before the specialty and query predicates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    /// Shows every provider in the directory.
    All,

    /// Shows only providers offering teleconsultation.
    TeleOnly,
}

/// Detail popup state.
///
/// The popup shows one record by id. All transitions are total: they either
/// move between the two states or leave the machine where it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopupState {
    /// No detail popup is visible.
    Closed,

    /// The detail popup for the given provider id is visible.
    Open(ProviderId),
}

impl PopupState {
    /// Returns `true` when a detail popup is visible.
    #[must_use]
    pub const fn is_open(self) -> bool {
        matches!(self, Self::Open(_))
    }

    /// Returns the id of the open record, if any.
    #[must_use]
    pub const fn open_id(self) -> Option<ProviderId> {
        match self {
            Self::Open(id) => Some(id),
            Self::Closed => None,
        }
    }
}
