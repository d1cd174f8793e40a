//! Native backends: whole input in, whole output (or a message) out.

use std::path::Path;

use grass::OutputStyle;

pub(crate) const STYLESHEET: &str = "stylesheet";

/// Compile SCSS (or plain CSS). `@import` resolves against `load_path`.
pub(crate) fn stylesheet(
    source: &str,
    load_path: &Path,
    compress: bool,
) -> Result<String, String> {
    let style = if compress {
        OutputStyle::Compressed
    } else {
        OutputStyle::Expanded
    };
    let options = grass::Options::default().style(style).load_path(load_path);
    grass::from_string(source.to_owned(), &options).map_err(|err| err.to_string())
}

pub(crate) fn minify(source: &str) -> String {
    minifier::js::minify(source).to_string()
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
