//! Line handling around the model call.

/// Split on `\n`, keeping empty lines as empty strings.
pub fn split_lines(text: &str) -> Vec<&str> {
    text.split('\n').collect()
}

/// Append one trailing space to every line.
///
/// Workaround for the fine-tuned checkpoint, which tends to hallucinate extra
/// content on lines that end without whitespace. Empirical, not a guarantee;
/// kept separate so it can be dropped once the model no longer needs it.
pub fn append_trailing_space(lines: &[&str]) -> Vec<String> {
    lines.iter().map(|line| format!("{line} ")).collect()
}

pub fn join_lines(lines: &[String]) -> String {
    lines.join("\n")
}
