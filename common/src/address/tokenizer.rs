/// Splits `text` on every occurrence of `delimiter`.
///
/// Empty tokens are kept: `""` gives `[""]`, `"a..b"` gives `["a", "", "b"]`
/// and a trailing delimiter gives a trailing `""`.
pub fn split(text: &str, delimiter: char) -> Vec<&str> {
    text.split(delimiter).collect()
}

/// First field of a tab-separated line. Everything after the first tab is ignored.
pub fn first_field(line: &str) -> &str {
    line.split('\t').next().unwrap_or(line)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
