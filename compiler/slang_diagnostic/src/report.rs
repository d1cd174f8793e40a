//! Error reports: an error's cause chain flattened for display.
//!
//! A report has a title, an optional status line, a headline message and
//! an ordered list of issues. Each issue is one link of the cause chain;
//! links that are [`SourceError`]s carry an annotated excerpt. The same
//! report feeds the terminal emitter and the server's HTML error page.

use std::error::Error;

use crate::SourceError;

/// Headline used when the failure itself is a located source error.
pub const COMPILATION_ERROR: &str = "compilation error";

/// One contributing error in a report.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Issue {
    pub message: String,
    pub excerpt: Option<Vec<String>>,
    /// 0-based line of the excerpted error.
    pub line: Option<usize>,
}

impl Issue {
    pub fn message(message: impl Into<String>) -> Self {
        Issue {
            message: message.into(),
            excerpt: None,
            line: None,
        }
    }

    /// Issue for a located error; `render` produces its excerpt lines.
    pub fn located<F>(err: &SourceError, render: F) -> Self
    where
        F: FnOnce(&SourceError) -> Vec<String>,
    {
        Issue {
            message: format!("{}\n{}", err.location(), err.message()),
            excerpt: Some(render(err)),
            line: Some(err.line()),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Report {
    pub title: String,
    /// Status line such as `404: Not Found`.
    pub status: Option<String>,
    pub message: String,
    pub issues: Vec<Issue>,
}

impl Report {
    /// Flatten `err` and its causes into a report.
    ///
    /// The walk stops at the first [`SourceError`]: it becomes the last
    /// issue. A link whose direct cause is a `SourceError` adds nothing of
    /// its own, since the located error already says everything it would.
    pub fn from_error<F>(err: &(dyn Error + 'static), render: F) -> Self
    where
        F: Fn(&SourceError) -> Vec<String>,
    {
        let mut issues = Vec::new();

        let (message, mut next) = if let Some(located) = located_cause(err) {
            (COMPILATION_ERROR.to_string(), Some(located as &(dyn Error + 'static)))
        } else {
            (err.to_string(), err.source())
        };

        while let Some(link) = next {
            if let Some(located) = link.downcast_ref::<SourceError>() {
                issues.push(Issue::located(located, &render));
                break;
            }
            if let Some(located) = direct_source_error(link) {
                issues.push(Issue::located(located, &render));
                break;
            }
            issues.push(Issue::message(link.to_string()));
            next = link.source();
        }

        Report {
            title: "Error".to_string(),
            status: None,
            message,
            issues,
        }
    }

    #[must_use]
    pub fn with_status(mut self, code: u16, reason: &str) -> Self {
        self.status = Some(format!("{code}: {reason}"));
        self
    }
}

/// `err` itself, or the source error it directly wraps.
fn located_cause<'a>(err: &'a (dyn Error + 'static)) -> Option<&'a SourceError> {
    err.downcast_ref::<SourceError>()
        .or_else(|| direct_source_error(err))
}

fn direct_source_error<'a>(err: &'a (dyn Error + 'static)) -> Option<&'a SourceError> {
    err.source()?.downcast_ref::<SourceError>()
}
