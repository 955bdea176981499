/// Ticks a notice stays on screen (tick rate is 100ms, so ~4 seconds).
pub const NOTICE_TTL_TICKS: usize = 40;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Error,
}

/// A transient one-line status message shown in the footer, e.g. the
/// outcome of handing an address to the platform opener.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub text: String,
    pub kind: NoticeKind,
    /// Tick after which the notice is dropped.
    expires_at: usize,
}

impl Notice {
    pub fn info(text: impl Into<String>, now: usize) -> Self {
        Self {
            text: text.into(),
            kind: NoticeKind::Info,
            expires_at: now + NOTICE_TTL_TICKS,
        }
    }

    pub fn error(text: impl Into<String>, now: usize) -> Self {
        Self {
            text: text.into(),
            kind: NoticeKind::Error,
            expires_at: now + NOTICE_TTL_TICKS,
        }
    }

    pub fn is_expired(&self, tick: usize) -> bool {
        tick >= self.expires_at
    }
}
