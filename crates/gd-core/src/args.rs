//! `key=value` argument codec
//!
//! Predicate and filter arguments travel through the editor as a text area
//! with one `key=value` pair per line. Positional arguments use generated
//! keys (`_genkey_0`, `_genkey_1`, ...).

use indexmap::IndexMap;

/// Insertion-ordered argument map.
pub type Args = IndexMap<String, String>;

/// Generated key for positional argument `n`.
pub fn genkey(n: usize) -> String {
    format!("_genkey_{}", n)
}

/// Parse a text area into arguments.
///
/// Blank lines and lines without `=` are skipped. Only the first `=` splits,
/// so values may contain `=`. A repeated key keeps its first position and
/// takes the last value.
pub fn parse_args(text: &str) -> Args {
    let mut args = Args::new();

    for raw_line in text.split('\n') {
        let line = raw_line.trim();
        if line.is_empty() {
            continue;
        }
        if let Some((key, value)) = line.split_once('=') {
            args.insert(key.trim().to_string(), value.trim().to_string());
        }
    }

    args
}

/// Render arguments back into text-area form.
pub fn format_args(args: &Args) -> String {
    let mut out = String::new();
    for (key, value) in args {
        out.push_str(key);
        out.push('=');
        out.push_str(value);
        out.push('\n');
    }
    out.trim().to_string()
}
