//! Page context captured from the browser location.
//!
//! Everything except [`PageContext::capture`] is plain string logic so the
//! route predicates and query lookup can be tested without a browser.

use std::borrow::Cow;

use url::form_urlencoded;

/// Exact path of the challenges page watched by the modal-redirect guard.
pub const CHALLENGES_PATH: &str = "/challenges";

/// Landing page the guard navigates back to.
pub const GYM_PATH: &str = "/gym";

/// Snapshot of the current URL, taken once per page load.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageContext {
    path: String,
    query: String,
}

impl PageContext {
    /// Build a context from a path and a raw query string.
    ///
    /// A leading `?` in the query (as returned by `location.search`) is
    /// tolerated.
    pub fn new(path: impl Into<String>, query: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            query: query.into(),
        }
    }

    /// Capture the context from `window.location`.
    ///
    /// Returns `None` outside a browser page; callers treat that as "no
    /// hook applies", never as an error.
    pub fn capture() -> Option<Self> {
        let location = web_sys::window()?.location();
        let path = location.pathname().ok()?;
        let query = location.search().unwrap_or_default();
        Some(Self::new(path, query))
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// First value of the given query parameter, percent-decoded.
    ///
    /// Parsing is lenient: input that does not decode as a query string
    /// simply yields no pairs, so a malformed query behaves exactly like an
    /// absent parameter.
    pub fn query_param(&self, name: &str) -> Option<Cow<'_, str>> {
        form_urlencoded::parse(self.query.trim_start_matches('?').as_bytes())
            .find(|(key, _)| key.as_ref() == name)
            .map(|(_, value)| value)
    }

    /// True on pages where the field enhancer runs (substring match, the
    /// host platform serves `/register`, `/settings`, and variants).
    pub fn is_enhanced_form_page(&self) -> bool {
        self.path.contains("register") || self.path.contains("settings")
    }

    /// True on the challenges page. Exact match: sub-pages like
    /// `/challenges/1` are rendered without the gym modal flow.
    pub fn is_challenges_page(&self) -> bool {
        self.path == CHALLENGES_PATH
    }
}
