//! Transient toast notification state.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

/// How long a toast stays visible.
pub const TOAST_HIDE_MS: u32 = 3_600;

/// Toast visibility plus the payload shown in it.
///
/// `seq` increments on every [`notify`](ToastState::notify) so the host can
/// restart its hide timer even when the payload text repeats. Only one hide
/// timer is ever live; scheduling a new one replaces the pending one.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastState {
    pub title: String,
    pub message: String,
    pub visible: bool,
    pub seq: u64,
}

impl ToastState {
    /// Show a toast. An empty title falls back to "Done!".
    pub fn notify(&mut self, title: &str, message: &str) {
        self.title = if title.is_empty() { "Done!".to_owned() } else { title.to_owned() };
        self.message = message.to_owned();
        self.visible = true;
        self.seq += 1;
    }

    /// Hide the toast. The payload is kept for the fade-out.
    pub fn hide(&mut self) {
        self.visible = false;
    }
}
