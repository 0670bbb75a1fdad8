//! Guard decisions for the modal redirect, kept free of browser types.

use crate::page::PageContext;

/// Query parameter the gym landing page appends when linking a challenge.
pub const FROM_GYM_PARAM: &str = "from_gym";

/// Parameter value signalling gym origin.
const FROM_GYM_ACTIVE: &str = "1";

/// True when the current page load should arm the redirect guard: the
/// challenges page, entered from the gym.
pub fn should_guard(context: &PageContext) -> bool {
    context.is_challenges_page()
        && context.query_param(FROM_GYM_PARAM).as_deref() == Some(FROM_GYM_ACTIVE)
}

/// How the poll loop looks for the modal element.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Delay between lookups, in milliseconds.
    pub interval_ms: i32,
    /// Lookup budget; `None` keeps polling for the lifetime of the page.
    pub max_attempts: Option<u32>,
}

impl RetryPolicy {
    /// True if another lookup may be scheduled after `attempts` misses.
    pub fn allows_retry(&self, attempts: u32) -> bool {
        self.max_attempts.is_none_or(|max| attempts < max)
    }
}

impl Default for RetryPolicy {
    /// 200 ms between lookups, no upper bound: the host platform injects
    /// the challenge modal at an arbitrary point after page load, so the
    /// guard waits as long as the page lives.
    fn default() -> Self {
        Self {
            interval_ms: 200,
            max_attempts: None,
        }
    }
}

/// Lifecycle of the guard on one page load.
///
/// `WaitingForModal → Listening` on the first successful lookup,
/// `Listening → Redirected` when the close event fires. `Redirected` is
/// terminal; the navigation it represents unloads the page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardState {
    WaitingForModal { attempts: u32 },
    Listening,
    Redirected,
}

impl GuardState {
    pub fn new() -> Self {
        Self::WaitingForModal { attempts: 0 }
    }

    /// Advance after one modal lookup.
    pub fn after_lookup(self, found: bool) -> Self {
        match self {
            Self::WaitingForModal { .. } if found => Self::Listening,
            Self::WaitingForModal { attempts } => Self::WaitingForModal {
                attempts: attempts.saturating_add(1),
            },
            other => other,
        }
    }

    /// Advance when the modal close event fires.
    pub fn after_close(self) -> Self {
        match self {
            Self::Listening => Self::Redirected,
            other => other,
        }
    }
}

impl Default for GuardState {
    fn default() -> Self {
        Self::new()
    }
}
