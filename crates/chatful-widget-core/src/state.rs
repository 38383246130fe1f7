use serde::Serialize;

/// Page-lifetime widget state. `loaded` is a one-way latch that makes the
/// bootstrap idempotent when the embed snippet is duplicated; `open` tracks
/// chat-surface visibility; `init_sent` guarantees the cross-frame
/// handshake fires at most once even if the frame's load event repeats.
#[derive(Debug, Clone, Default, Serialize)]
pub struct WidgetState {
    loaded: bool,
    open: bool,
    init_sent: bool,
}

impl WidgetState {
    /// Claims the single bootstrap slot. Returns `false` when a previous
    /// entry already claimed it; callers must then do nothing at all.
    pub fn begin_bootstrap(&mut self) -> bool {
        if self.loaded {
            return false;
        }
        self.loaded = true;
        true
    }

    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Flips chat-surface visibility and returns the new state.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Latches the init handshake. Returns `true` only for the first call.
    pub fn mark_init_sent(&mut self) -> bool {
        if self.init_sent {
            return false;
        }
        self.init_sent = true;
        true
    }
}
