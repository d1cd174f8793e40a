//! Request path to candidate files.
//!
//! A request path is rewritten through every route rule whose prefix
//! matches, longest prefix first (one candidate per target directory),
//! and finally against the document root. Requests for compiled formats also try their source
//! formats first: `/app.css` probes `app.min.scss`, `app.scss`, then
//! `app.css`.

use std::borrow::Cow;
use std::path::{Path, PathBuf};

use percent_encoding::percent_decode_str;
use thiserror::Error;

/// Source formats tried ahead of a compiled extension, in priority order.
fn source_counterparts(extension: &str) -> &'static [&'static str] {
    match extension {
        ".css" => &[".min.scss", ".scss"],
        ".js" => &[".min.ejs", ".ejs"],
        _ => &[],
    }
}

/// MIME type for a request path's extension, `text/plain` if unknown.
pub fn mime_type(extension: &str) -> &'static str {
    match extension {
        ".scss" | ".css" => "text/css",
        ".ejs" | ".js" => "application/javascript",
        ".html" => "text/html",
        _ => "text/plain",
    }
}

/// Last extension of the final path segment, with its dot.
pub(crate) fn extension(request_path: &str) -> &str {
    let name = request_path.rsplit('/').next().unwrap_or(request_path);
    name.rfind('.').map_or("", |index| &name[index..])
}

/// Percent-decode a request path. The result is what gets resolved, so
/// encoded `..` segments are caught by [`RouteTable::resolve`].
pub fn decode_path(raw: &str) -> Result<String, RouteError> {
    percent_decode_str(raw)
        .decode_utf8()
        .map(Cow::into_owned)
        .map_err(|_| RouteError::Encoding(raw.to_string()))
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RouteError {
    #[error("request path is not absolute: {0}")]
    NotAbsolute(String),

    #[error("request path is not valid UTF-8 once decoded: {0}")]
    Encoding(String),

    #[error("request path leaves the document root: {0}")]
    Traversal(String),
}

/// URL prefix fanned out to one or more directories under the root.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteRule {
    prefix: String,
    targets: Vec<String>,
}

impl RouteRule {
    pub fn new(prefix: &str, targets: impl IntoIterator<Item = impl Into<String>>) -> Self {
        let trimmed = prefix.trim_end_matches('/');
        let prefix = if trimmed.is_empty() { "/" } else { trimmed };
        RouteRule {
            prefix: prefix.to_string(),
            targets: targets.into_iter().map(Into::into).collect(),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn targets(&self) -> &[String] {
        &self.targets
    }

    /// Remainder of `path` after the prefix, if the prefix matches on a
    /// segment boundary.
    fn strip<'p>(&self, path: &'p str) -> Option<&'p str> {
        if self.prefix == "/" {
            return Some(path);
        }
        let rest = path.strip_prefix(self.prefix.as_str())?;
        (rest.is_empty() || rest.starts_with('/')).then_some(rest)
    }
}

/// Ordered candidates and the MIME type for one request path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Resolution {
    pub candidates: Vec<PathBuf>,
    pub mime: &'static str,
}

/// Route rules, kept longest prefix first.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RouteTable {
    rules: Vec<RouteRule>,
}

impl RouteTable {
    pub fn new(rules: impl IntoIterator<Item = RouteRule>) -> Self {
        let mut table = RouteTable::default();
        for rule in rules {
            table.add(rule);
        }
        table
    }

    /// Add a rule; targets for an existing prefix are appended to it.
    pub fn add(&mut self, rule: RouteRule) {
        if let Some(existing) = self.rules.iter_mut().find(|r| r.prefix == rule.prefix) {
            existing.targets.extend(rule.targets);
            return;
        }
        self.rules.push(rule);
        self.rules.sort_by(|a, b| b.prefix.len().cmp(&a.prefix.len()));
    }

    pub fn rules(&self) -> &[RouteRule] {
        &self.rules
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Every rule whose prefix matches `path`, longest prefix first, with
    /// the rest of the path.
    pub fn matching<'a>(
        &'a self,
        path: &'a str,
    ) -> impl Iterator<Item = (&'a RouteRule, &'a str)> {
        self.rules
            .iter()
            .filter_map(move |rule| rule.strip(path).map(|rest| (rule, rest)))
    }

    /// Candidate files under `root` for `request_path`, in the order they
    /// should be tried. Never empty.
    pub fn resolve(&self, root: &Path, request_path: &str) -> Result<Resolution, RouteError> {
        if !request_path.starts_with('/') {
            return Err(RouteError::NotAbsolute(request_path.to_string()));
        }
        if request_path.split('/').any(|segment| segment == "..") {
            return Err(RouteError::Traversal(request_path.to_string()));
        }

        let mut raw = Vec::new();
        for (rule, rest) in self.matching(request_path) {
            raw.extend(
                rule.targets
                    .iter()
                    .map(|target| under(root, &[target.as_str(), rest])),
            );
        }
        raw.push(under(root, &[request_path]));

        let extension = extension(request_path);
        let mut candidates = Vec::new();
        for path in &raw {
            for counterpart in source_counterparts(extension) {
                candidates.push(replace_extension(path, extension, counterpart));
            }
        }
        candidates.extend(raw);

        Ok(Resolution {
            candidates,
            mime: mime_type(extension),
        })
    }
}

/// Join URL-style path pieces under `root`, dropping empty and `.` segments.
fn under(root: &Path, pieces: &[&str]) -> PathBuf {
    let mut path = root.to_path_buf();
    for piece in pieces {
        for segment in piece.split('/') {
            if !segment.is_empty() && segment != "." {
                path.push(segment);
            }
        }
    }
    path
}

fn replace_extension(path: &Path, from: &str, to: &str) -> PathBuf {
    let Some(name) = path.file_name().and_then(|name| name.to_str()) else {
        return path.to_path_buf();
    };
    let stem = name.strip_suffix(from).unwrap_or(name);
    path.with_file_name(format!("{stem}{to}"))
}
