//! The transient line the footer shows after copy, export and save.
//!
//! There is one slot: a new message replaces the old one and restarts the
//! clock. Errors stay up longer than confirmations.

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackKind {
    Error,
    Success,
}

impl FeedbackKind {
    pub fn lifetime(self) -> Duration {
        match self {
            Self::Error => Duration::from_secs(3),
            Self::Success => Duration::from_secs(2),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    pub kind: FeedbackKind,
    pub text: String,
    pub expires_at: Instant,
}

#[derive(Debug, Clone, Default)]
pub struct FeedbackSlot {
    current: Option<Feedback>,
}

impl FeedbackSlot {
    pub fn show(&mut self, kind: FeedbackKind, text: impl Into<String>, now: Instant) {
        self.current = Some(Feedback {
            kind,
            text: text.into(),
            expires_at: now + kind.lifetime(),
        });
    }

    pub fn error(&mut self, text: impl Into<String>, now: Instant) {
        self.show(FeedbackKind::Error, text, now);
    }

    pub fn success(&mut self, text: impl Into<String>, now: Instant) {
        self.show(FeedbackKind::Success, text, now);
    }

    pub fn current(&self) -> Option<&Feedback> {
        self.current.as_ref()
    }

    /// Text of the current message if it is of `kind`.
    pub fn text_of(&self, kind: FeedbackKind) -> Option<&str> {
        self.current
            .as_ref()
            .filter(|f| f.kind == kind)
            .map(|f| f.text.as_str())
    }

    pub fn expires_at(&self) -> Option<Instant> {
        self.current.as_ref().map(|f| f.expires_at)
    }

    /// Drops the message once its time is up. Returns whether it did.
    pub fn expire(&mut self, now: Instant) -> bool {
        let expired = self.expires_at().is_some_and(|at| at <= now);
        if expired {
            self.current = None;
        }
        expired
    }

    pub fn clear(&mut self) {
        self.current = None;
    }
}
