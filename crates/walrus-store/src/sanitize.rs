//! Terminal escape stripping for captured tool output.

use std::borrow::Cow;
use std::sync::OnceLock;

use regex::Regex;

fn ansi_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        // CSI sequences (colors, cursor moves) and OSC sequences (hyperlinks, titles)
        Regex::new(r"\x1b\[[0-?]*[ -/]*[@-~]|\x1b\][^\x07\x1b]*(?:\x07|\x1b\\)|\x1b[@-Z\\-_]")
            .expect("static ANSI pattern is valid")
    })
}

/// Remove ANSI/VT escape sequences. Borrows when nothing needs stripping.
pub fn strip_ansi(text: &str) -> Cow<'_, str> {
    if !text.contains('\x1b') {
        return Cow::Borrowed(text);
    }
    ansi_pattern().replace_all(text, "")
}
