/// Fallback wrap width when the terminal size cannot be determined
/// (piped output, tests).
pub const DEFAULT_WIDTH: usize = 70;

/// Upper bound on the wrap width; very wide terminals make prose hard
/// to read.
pub const MAX_WIDTH: usize = 100;

/// Width to reflow output to: the current terminal width capped at
/// `MAX_WIDTH`, or `DEFAULT_WIDTH` when there is no terminal.
pub fn display_width() -> usize {
    terminal_size::terminal_size()
        .map(|(w, _)| (w.0 as usize).min(MAX_WIDTH))
        .unwrap_or(DEFAULT_WIDTH)
}

/// Reflow `text` into lines of at most `width` characters.
///
/// Runs of whitespace (including newlines) collapse to single spaces.
/// Words are never split; a word longer than `width` gets its own line.
pub fn fill(text: &str, width: usize) -> String {
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if current.is_empty() {
            current.push_str(word);
        } else if current.chars().count() + 1 + word.chars().count() <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }

    lines.join("\n")
}
