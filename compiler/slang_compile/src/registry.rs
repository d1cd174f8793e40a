//! Extension to compiler table.
//!
//! Dispatch is on the *full* extension: everything from the first `.` of
//! the file name that is not its first character. `style.min.scss` has
//! full extension `.min.scss`; `.htaccess` has none.

use std::path::Path;

use crate::Compiler;

/// Full multi-part extension of the file name, or `""`.
pub fn full_extension(path: &Path) -> &str {
    let Some(name) = path.file_name().and_then(|name| name.to_str()) else {
        return "";
    };
    match name.find('.') {
        Some(index) if index > 0 => &name[index..],
        _ => "",
    }
}

/// The compiler (or chain) for `path`; unknown extensions pass through.
pub fn compiler_for(path: &Path) -> Compiler {
    match full_extension(path) {
        ".min.scss" | ".min.css" => Compiler::Stylesheet { compress: true },
        ".scss" => Compiler::Stylesheet { compress: false },
        ".min.ejs" => Compiler::Chain(vec![Compiler::Ejs, Compiler::Minify]),
        ".ejs" => Compiler::Ejs,
        ".min.js" => Compiler::Minify,
        _ => Compiler::Literal,
    }
}

/// Whether `path` selects anything other than the literal compiler.
pub fn can_compile(path: &Path) -> bool {
    !matches!(compiler_for(path), Compiler::Literal)
}
