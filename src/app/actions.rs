//! Actions representing side effects to be executed by the terminal runtime.
//!
//! This module defines the [`Action`] type, imperative commands produced by the
//! event handler after processing user input. Actions bridge pure state
//! transformations and effectful operations performed in `main.rs`. Almost
//! everything in this application is a state change plus a redraw, so the
//! action set is small.

/// Commands representing side effects to be executed by the terminal runtime.
///
/// Produced by [`crate::app::handle_event`] and executed by the event loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Leaves the event loop and restores the terminal.
    Quit,

    /// Hands a `tel:` URI to the platform opener, best-effort.
    ///
    /// Emitted when the user triggers the call binding on a record. The
    /// runtime spawns `xdg-open`/`open` and logs, but otherwise ignores,
    /// spawn failures.
    OpenPhoneLink {
        /// The full `tel:` URI, e.g. `tel:+91-8888000011`.
        uri: String,
    },
}
