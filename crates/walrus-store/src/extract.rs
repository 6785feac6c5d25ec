//! Locating the JSON result inside noisy tool output.
//!
//! The Walrus CLI interleaves progress lines and log records with its
//! `--json` result, and log lines may themselves contain bracketed,
//! JSON-looking fragments. Each candidate is therefore handed to
//! `serde_json`, and the first one that actually parses wins.

use serde_json::{Deserializer, Value};

/// Parse the first JSON array literal of the form `[ { ... } ]` in `text`.
///
/// A candidate starts at a `[` whose next non-whitespace character is `{`.
/// Only one value is read from each candidate, so trailing output is
/// ignored. Returns `None` when no candidate exists, and the first parse
/// error when candidates existed but none of them parsed.
pub fn first_json_array(text: &str) -> Option<serde_json::Result<Value>> {
    let mut first_err = None;

    for (open, _) in text.match_indices('[') {
        if !opens_object_array(&text[open + 1..]) {
            continue;
        }

        match Deserializer::from_str(&text[open..]).into_iter::<Value>().next() {
            Some(Ok(value)) if value.is_array() => return Some(Ok(value)),
            Some(Err(e)) => {
                first_err.get_or_insert(e);
            }
            _ => {}
        }
    }

    first_err.map(Err)
}

fn opens_object_array(rest: &str) -> bool {
    rest.trim_start().starts_with('{')
}
