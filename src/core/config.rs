//! Per-call play configuration.

use serde::{Deserialize, Serialize};

/// Options threaded through the move engine.
///
/// `speculative` is set while previewing a move. It only changes how the
/// `focus` flag is assigned when a spooky mark is completed: committed plays
/// leave both halves unfocused, previews leave both halves focused so a host
/// can highlight them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayConfig {
    /// Whether this play is a preview rather than a committed move.
    pub speculative: bool,
}

impl PlayConfig {
    /// Configuration for a committed move.
    #[must_use]
    pub const fn committed() -> Self {
        Self { speculative: false }
    }

    /// Configuration for a previewed move.
    #[must_use]
    pub const fn speculative() -> Self {
        Self { speculative: true }
    }

    /// Set speculative mode.
    pub fn with_speculative(mut self, speculative: bool) -> Self {
        self.speculative = speculative;
        self
    }
}
