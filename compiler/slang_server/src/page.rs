//! HTML error pages.

use std::fmt::Write;

use axum::http::header::CONTENT_TYPE;
use axum::response::{IntoResponse, Response};
use slang_diagnostic::{Annotation, Report, ReportEmitter};

use crate::ServeError;

/// Lines of source shown on each side of an error line.
const EXCERPT_CONTEXT: usize = 3;

const MARKER_OPEN: &str = "<span class=\"marker\">";
const MARKER_CLOSE: &str = "</span>";

const STYLE: &str = "body{font-family:sans-serif;margin:2em;color:#222}\
h1{font-size:1.4em}h2{font-size:1em;color:#777}\
.issue{margin:1em 0;padding:.5em 1em;border-left:4px solid #c33;background:#fafafa}\
.issue pre{margin:0;white-space:pre-wrap}\
ol.excerpt{font-family:monospace;background:#f0f0f0;padding:.5em 0 .5em 4em}\
ol.excerpt li{white-space:pre}\
.marker{background:#c33;color:#fff}";

/// Escape text for inclusion in HTML content or attribute values.
pub(crate) fn escape_html(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#39;"),
            c => result.push(c),
        }
    }
    result
}

/// Renders reports as a standalone HTML document.
#[derive(Default)]
pub(crate) struct HtmlPage {
    html: String,
}

impl HtmlPage {
    pub(crate) fn into_html(self) -> String {
        self.html
    }
}

impl ReportEmitter for HtmlPage {
    fn emit(&mut self, report: &Report) {
        let out = &mut self.html;
        let title = escape_html(&report.title);
        let _ = write!(
            out,
            "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n\
             <title>{title}</title>\n<style>{STYLE}</style>\n</head>\n<body>\n"
        );
        if let Some(status) = &report.status {
            let _ = writeln!(out, "<h1>{}</h1>", escape_html(status));
        }
        let _ = writeln!(out, "<h2>{}</h2>", escape_html(&report.message));

        for issue in &report.issues {
            let _ = writeln!(out, "<div class=\"issue\">");
            let _ = writeln!(out, "<pre>{}</pre>", escape_html(&issue.message));
            if let Some(excerpt) = &issue.excerpt {
                let first = issue
                    .line
                    .map_or(0, |line| line.saturating_sub(EXCERPT_CONTEXT));
                let _ = writeln!(out, "<ol class=\"excerpt\" start=\"{}\">", first + 1);
                for line in excerpt {
                    // Excerpt lines arrive escaped, with markup markers.
                    let _ = writeln!(out, "<li>{line}</li>");
                }
                let _ = writeln!(out, "</ol>");
            }
            let _ = writeln!(out, "</div>");
        }
        let _ = writeln!(out, "</body>\n</html>");
    }

    fn flush(&mut self) {}
}

/// Log `err` and turn it into an HTML error response.
pub(crate) fn error_response(err: &ServeError) -> Response {
    let status = err.status();
    tracing::error!(status = status.as_u16(), "{err}");

    let report = Report::from_error(err, |located| {
        located.excerpt_lines(
            Annotation::Markers {
                prefix: MARKER_OPEN,
                suffix: MARKER_CLOSE,
            },
            EXCERPT_CONTEXT,
            escape_html,
        )
    })
    .with_status(status.as_u16(), status.canonical_reason().unwrap_or("Error"));

    let mut page = HtmlPage::default();
    page.emit(&report);
    (
        status,
        [(CONTENT_TYPE, "text/html; charset=utf-8")],
        page.into_html(),
    )
        .into_response()
}
