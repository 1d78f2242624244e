pub const NO_DESCRIPTION: &str = "No description provided";
pub const ELLIPSIS: &str = "...";

/// Character budget and line cap for wrapped description text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WrapOptions {
    pub width: usize,
    pub max_lines: usize,
}

impl Default for WrapOptions {
    fn default() -> Self {
        Self {
            width: 60,
            max_lines: 3,
        }
    }
}

/// Greedy word wrap with a hard cap on the number of lines.
///
/// Width is approximated as one unit per character. A word longer than the
/// budget gets a line of its own and is never split. When the text needs
/// more than `max_lines` lines the last kept line ends with [`ELLIPSIS`].
pub fn wrap_text_multiline(text: &str, options: WrapOptions) -> Vec<String> {
    let width = options.width.max(1);
    let max_lines = options.max_lines.max(1);

    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut current_width = 0usize;
    let mut truncated = false;

    for word in text.split_whitespace() {
        let word_width = text_width(word);
        if current.is_empty() {
            current.push_str(word);
            current_width = word_width;
            continue;
        }
        if current_width + 1 + word_width <= width {
            current.push(' ');
            current.push_str(word);
            current_width += 1 + word_width;
            continue;
        }
        lines.push(std::mem::take(&mut current));
        if lines.len() == max_lines {
            truncated = true;
            break;
        }
        current.push_str(word);
        current_width = word_width;
    }
    if !truncated && !current.is_empty() {
        lines.push(current);
    }

    if lines.is_empty() {
        return vec![NO_DESCRIPTION.to_string()];
    }
    if truncated && let Some(last) = lines.last_mut() {
        last.push_str(ELLIPSIS);
    }
    tracing::trace!(lines = lines.len(), truncated, "wrapped description");
    lines
}

pub fn text_width(text: &str) -> usize {
    text.chars().count()
}

/// Encodes markup-significant and non-ASCII BMP characters as numeric entities.
///
/// Characters already followed by `#` are left alone so pre-encoded
/// references survive a second pass. Backspace characters are removed.
pub fn encode_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch == '\u{8}' {
            continue;
        }
        let encodable = matches!(ch, '<' | '>' | '&' | '\u{a0}'..='\u{9999}');
        if encodable && chars.peek() != Some(&'#') {
            out.push_str(&format!("&#{};", ch as u32));
        } else {
            out.push(ch);
        }
    }
    out
}

pub fn escape_xml(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

/// Compact count: `42`, `1.5k`, `12k`.
pub fn k_formatter(count: u64) -> String {
    if count <= 999 {
        return count.to_string();
    }
    // One decimal rounded from the nearest double, ties upward.
    let thousands = count as f64 / 1000.0;
    let formatted = if matches!(count % 1000, 250 | 750) {
        let tenths = count / 100 + 1;
        format!("{}.{}", tenths / 10, tenths % 10)
    } else {
        format!("{thousands:.1}")
    };
    format!("{}k", formatted.strip_suffix(".0").unwrap_or(&formatted))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wrap(text: &str) -> Vec<String> {
        wrap_text_multiline(text, WrapOptions::default())
    }

    #[test]
    fn short_text_stays_on_one_line() {
        assert_eq!(wrap("Small text should not wrap"), vec!["Small text should not wrap"]);
    }

    #[test]
    fn long_text_wraps_on_word_boundaries() {
        let text = "Hello world long long long text that keeps going and going until it has to wrap";
        let lines = wrap(text);
        assert_eq!(lines.len(), 2);
        assert!(lines.iter().all(|line| text_width(line) <= 60));
        assert_eq!(lines.join(" "), text);
    }

    #[test]
    fn output_is_capped_with_ellipsis() {
        let text = "word ".repeat(200);
        let lines = wrap(&text);
        assert_eq!(lines.len(), 3);
        assert!(lines[2].ends_with(ELLIPSIS));
        assert!(!lines[1].ends_with(ELLIPSIS));
    }

    #[test]
    fn exactly_max_lines_is_not_truncated() {
        let options = WrapOptions {
            width: 5,
            max_lines: 3,
        };
        let lines = wrap_text_multiline("aaaaa bbbbb ccccc", options);
        assert_eq!(lines, vec!["aaaaa", "bbbbb", "ccccc"]);
    }

    #[test]
    fn oversized_word_gets_its_own_line() {
        let long = "x".repeat(80);
        let text = format!("short {long} tail");
        let lines = wrap(&text);
        assert_eq!(lines, vec!["short".to_string(), long, "tail".to_string()]);
    }

    #[test]
    fn words_that_fit_are_never_split() {
        let text = "alpha beta gamma delta epsilon zeta eta theta iota kappa lambda mu nu xi omicron pi";
        let options = WrapOptions {
            width: 12,
            max_lines: 20,
        };
        let words: Vec<&str> = text.split_whitespace().collect();
        let rejoined: Vec<String> = wrap_text_multiline(text, options)
            .iter()
            .flat_map(|line| line.split(' ').map(str::to_string).collect::<Vec<_>>())
            .collect();
        assert_eq!(rejoined, words);
    }

    #[test]
    fn blank_input_yields_placeholder() {
        assert_eq!(wrap("   \n\t "), vec![NO_DESCRIPTION]);
        assert_eq!(wrap(NO_DESCRIPTION), vec![NO_DESCRIPTION]);
    }

    #[test]
    fn encode_html_escapes_markup_and_latin1() {
        assert_eq!(encode_html("<b>&"), "&#60;b&#62;&#38;");
        assert_eq!(encode_html("café"), "caf&#233;");
        assert_eq!(encode_html("🚀 ok"), "🚀 ok");
        assert_eq!(encode_html("a\u{8}b"), "ab");
        assert_eq!(encode_html("&#39;"), "&#39;");
    }

    #[test]
    fn k_formatter_compacts_thousands() {
        assert_eq!(k_formatter(0), "0");
        assert_eq!(k_formatter(42), "42");
        assert_eq!(k_formatter(999), "999");
        assert_eq!(k_formatter(1000), "1k");
        assert_eq!(k_formatter(1500), "1.5k");
        assert_eq!(k_formatter(38000), "38k");
        assert_eq!(k_formatter(12_345), "12.3k");
    }

    #[test]
    fn k_formatter_rounds_from_the_nearest_double() {
        // 1.15 and 9.95 are stored just below the half, 1.05 just above.
        assert_eq!(k_formatter(1150), "1.1k");
        assert_eq!(k_formatter(1050), "1.1k");
        // Exact halves round up.
        assert_eq!(k_formatter(1250), "1.3k");
        assert_eq!(k_formatter(2750), "2.8k");
        assert_eq!(k_formatter(9950), "9.9k");
    }

    #[test]
    fn k_formatter_handles_the_largest_count() {
        assert_eq!(k_formatter(u64::MAX), "18446744073709552k");
        assert_eq!(k_formatter(u64::MAX - 10), "18446744073709552k");
    }
}
