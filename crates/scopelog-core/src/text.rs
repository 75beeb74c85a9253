//! Indentation helpers shared by the compact and verbose renderers.

/// Default indentation unit: one tab per level.
pub const TAB: &str = "\t";

/// Line separator used when joining rendered lines.
#[cfg(windows)]
pub const LINE_SEPARATOR: &str = "\r\n";
#[cfg(not(windows))]
pub const LINE_SEPARATOR: &str = "\n";

/// `message` prefixed with `indent` tabs, or just the tabs when `message` is `None`.
pub fn tabs(indent: usize, message: Option<&str>) -> String {
    indent_with(TAB, indent, message)
}

/// Like [`tabs`] with an arbitrary indentation unit.
pub fn indent_with(unit: &str, indent: usize, message: Option<&str>) -> String {
    let mut out = unit.repeat(indent);
    if let Some(message) = message {
        out.push_str(message);
    }
    out
}

/// True for empty and all-whitespace messages, which produce no rendered line.
pub fn is_blank(message: &str) -> bool {
    message.trim().is_empty()
}
