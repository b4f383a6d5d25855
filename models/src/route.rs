//! Client-side route table.
//!
//! DESIGN
//! ======
//! The table is an ordered slice: resolution walks it front to back and the
//! first matching entry wins. The catch-all entry therefore has to sit at the
//! end, otherwise it would swallow every explicit route behind it.
//! [`RouteTable::validate`] enforces that shape.
//!
//! Matching follows history-mode router defaults: query and fragment are
//! ignored, one trailing slash is optional, and comparison is ASCII
//! case-insensitive. Explicit paths are compared after percent-decoding,
//! so `/%61bout` is `/about`; catch-all segments are split first and
//! decoded one by one, so an encoded `%2F` stays inside its segment.
//!
//! The browser router and the server's history fallback both consult the
//! same table, so a deep link gets the same answer from either side.

use std::collections::HashSet;
use std::fmt;

use percent_encoding::percent_decode_str;

/// Screens the app can render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Home,
    About,
    UserList,
    Login,
    NotFound,
}

impl Page {
    /// Document title for the page.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::About => "About",
            Self::UserList => "Users",
            Self::Login => "Login",
            Self::NotFound => "Not Found",
        }
    }
}

/// Path pattern of a route entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathPattern {
    /// Literal path such as `/about`.
    Exact(&'static str),
    /// Matches any path; the remainder is captured under `param`.
    CatchAll { param: &'static str },
}

impl PathPattern {
    /// Try to match a normalized path, returning captured segments.
    ///
    /// `raw` still carries percent escapes; `decoded` is the same path with
    /// escapes decoded before the trailing slash is trimmed.
    fn captures(&self, raw: &str, decoded: &str) -> Option<Vec<String>> {
        match self {
            Self::Exact(literal) => normalize(literal).eq_ignore_ascii_case(decoded).then(Vec::new),
            Self::CatchAll { .. } => Some(
                raw.strip_prefix('/')
                    .unwrap_or(raw)
                    .split('/')
                    .filter(|segment| !segment.is_empty())
                    .map(|segment| percent_decode_str(segment).decode_utf8_lossy().into_owned())
                    .collect(),
            ),
        }
    }

    #[must_use]
    pub fn is_catch_all(&self) -> bool {
        matches!(self, Self::CatchAll { .. })
    }
}

impl fmt::Display for PathPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exact(literal) => f.write_str(literal),
            Self::CatchAll { param } => write!(f, "/:{param}(.*)*"),
        }
    }
}

/// One row of the route table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteEntry {
    pub pattern: PathPattern,
    pub name: &'static str,
    pub page: Page,
}

/// Result of resolving a path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch<'a> {
    pub entry: &'a RouteEntry,
    /// Percent-decoded segments captured by a catch-all; empty for exact routes.
    pub params: Vec<String>,
}

impl RouteMatch<'_> {
    #[must_use]
    pub fn page(&self) -> Page {
        self.entry.page
    }

    /// Captured remainder rejoined as a path, e.g. `a/b`.
    #[must_use]
    pub fn captured_path(&self) -> String {
        self.params.join("/")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouteTableError {
    #[error("route table has no catch-all entry")]
    MissingCatchAll,
    #[error("catch-all route {0:?} must be the last entry")]
    CatchAllNotLast(&'static str),
    #[error("duplicate route name {0:?}")]
    DuplicateName(&'static str),
    #[error("duplicate route path {0:?}")]
    DuplicatePath(&'static str),
    #[error("route path {0:?} must start with '/'")]
    InvalidPath(&'static str),
}

const NOT_FOUND_ROUTE: RouteEntry =
    RouteEntry { pattern: PathPattern::CatchAll { param: "pathMatch" }, name: "not-found", page: Page::NotFound };

const STANDARD_ROUTES: &[RouteEntry] = &[
    RouteEntry { pattern: PathPattern::Exact("/"), name: "home", page: Page::Home },
    RouteEntry { pattern: PathPattern::Exact("/about"), name: "about", page: Page::About },
    RouteEntry { pattern: PathPattern::Exact("/users"), name: "users", page: Page::UserList },
    RouteEntry { pattern: PathPattern::Exact("/login"), name: "login", page: Page::Login },
    NOT_FOUND_ROUTE,
];

/// Ordered route table; first match wins.
#[derive(Debug, Clone, Copy)]
pub struct RouteTable<'a> {
    entries: &'a [RouteEntry],
}

impl<'a> RouteTable<'a> {
    #[must_use]
    pub const fn new(entries: &'a [RouteEntry]) -> Self {
        Self { entries }
    }

    #[must_use]
    pub fn entries(&self) -> &'a [RouteEntry] {
        self.entries
    }

    /// Resolve `path` (which may carry a query string or fragment).
    ///
    /// Always `Some` for a table that passes [`Self::validate`]; use the free
    /// [`resolve`] for the standard table.
    #[must_use]
    pub fn resolve(&self, path: &str) -> Option<RouteMatch<'a>> {
        let raw = normalize(path);
        let decoded = percent_decode_str(strip_query(path)).decode_utf8_lossy();
        let decoded = trim_trailing_slash(&decoded);
        self.entries
            .iter()
            .find_map(|entry| entry.pattern.captures(raw, decoded).map(|params| RouteMatch { entry, params }))
    }

    #[must_use]
    pub fn by_name(&self, name: &str) -> Option<&'a RouteEntry> {
        self.entries.iter().find(|entry| entry.name == name)
    }

    /// Link target for `page`; `None` for pages only reachable via catch-all.
    #[must_use]
    pub fn path_for(&self, page: Page) -> Option<&'static str> {
        self.entries.iter().find_map(|entry| match entry.pattern {
            PathPattern::Exact(path) if entry.page == page => Some(path),
            _ => None,
        })
    }

    /// Check the structural invariants of the table.
    ///
    /// # Errors
    ///
    /// Returns the first violation found, scanning in table order.
    pub fn validate(&self) -> Result<(), RouteTableError> {
        let mut names = HashSet::new();
        let mut paths = HashSet::new();
        let last = self.entries.len().saturating_sub(1);

        for (idx, entry) in self.entries.iter().enumerate() {
            if !names.insert(entry.name) {
                return Err(RouteTableError::DuplicateName(entry.name));
            }
            match entry.pattern {
                PathPattern::Exact(path) => {
                    if !path.starts_with('/') {
                        return Err(RouteTableError::InvalidPath(path));
                    }
                    if !paths.insert(normalize(path).to_ascii_lowercase()) {
                        return Err(RouteTableError::DuplicatePath(path));
                    }
                }
                PathPattern::CatchAll { .. } if idx != last => {
                    return Err(RouteTableError::CatchAllNotLast(entry.name));
                }
                PathPattern::CatchAll { .. } => {}
            }
        }

        if self.entries.last().is_some_and(|entry| entry.pattern.is_catch_all()) {
            Ok(())
        } else {
            Err(RouteTableError::MissingCatchAll)
        }
    }
}

impl RouteTable<'static> {
    /// Home, about, users, login, then the not-found catch-all.
    #[must_use]
    pub const fn standard() -> Self {
        Self::new(STANDARD_ROUTES)
    }
}

impl Default for RouteTable<'static> {
    fn default() -> Self {
        Self::standard()
    }
}

/// Resolve `path` against the standard table. Never misses: anything not
/// claimed by an explicit route lands on the not-found catch-all.
#[must_use]
pub fn resolve(path: &str) -> RouteMatch<'static> {
    RouteTable::standard()
        .resolve(path)
        .unwrap_or_else(|| RouteMatch { entry: &NOT_FOUND_ROUTE, params: Vec::new() })
}

/// Page for `path` under the standard table.
#[must_use]
pub fn page_for(path: &str) -> Page {
    resolve(path).page()
}

/// Strip query/fragment and one trailing slash; empty becomes `/`.
fn normalize(path: &str) -> &str {
    trim_trailing_slash(strip_query(path))
}

fn strip_query(path: &str) -> &str {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    &path[..end]
}

fn trim_trailing_slash(path: &str) -> &str {
    let path = path.strip_suffix('/').filter(|p| !p.is_empty()).unwrap_or(path);
    if path.is_empty() { "/" } else { path }
}

#[cfg(test)]
#[path = "route_test.rs"]
mod tests;
