//! Editor events and outcomes.

use memeforge_composition_model::Composition;
use memeforge_platform_core::ImageSource;

/// The two caption fields on the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CaptionField {
    Top,
    Bottom,
}

/// Everything the surrounding UI can tell the session.
///
/// Surface events replace the original global keyboard-notification bus:
/// whoever owns the session feeds them in directly.
#[derive(Debug, Clone, PartialEq)]
pub enum EditorEvent {
    /// The screen became visible; capture availability is re-queried.
    BecameVisible,
    /// A caption field gained focus.
    EditingBegan(CaptionField),
    /// A caption field's text was replaced.
    CaptionChanged(CaptionField, String),
    /// The input method's confirm action; yields focus.
    SubmitPressed(CaptionField),
    /// The input surface (keyboard) is about to appear.
    SurfaceAppearing { height: u32 },
    /// The input surface is about to disappear.
    SurfaceDisappearing,
    /// Open the media-selection flow for the given source.
    PickRequested(ImageSource),
    /// Render a composite and hand it to the share facility.
    ShareRequested,
    /// Reset the screen to its initial state.
    CancelPressed,
}

/// What dispatching an event produced.
#[derive(Debug)]
pub enum EventOutcome {
    /// State updated; nothing for the caller to collect.
    Handled,
    /// A share completed; the transient record is handed back and the
    /// caller discards it (future persistence hook).
    Shared(Composition),
    /// A share flow ran but was dismissed or reported failure.
    ShareNotCompleted,
}
