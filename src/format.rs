//! Reply text formatting.
//!
//! Bot replies arrive as plain text with light conventions baked in: line
//! breaks separate lines, bare URLs should become links, and digit runs
//! shaped like phone extensions get emphasized. This module turns reply text
//! into structured spans so any renderer can style them; the scan is pure
//! and idempotent.
//!
//! The phone rule matches `ddd-dddd`, `dddd-dddd`, or a bare four-digit run.
//! A four-digit number that is not an extension is still emphasized; the
//! rule is ambiguous on purpose and matches what the service's authors
//! write into reply text.

/// A styled fragment of a single line of reply text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Span {
    /// Unstyled text.
    Text(String),

    /// A bare `http://` or `https://` URL.
    Link(String),

    /// A phone-number-like digit sequence.
    Phone(String),
}

impl Span {
    /// Returns the raw text of the span.
    pub fn as_str(&self) -> &str {
        match self {
            Span::Text(s) | Span::Link(s) | Span::Phone(s) => s,
        }
    }
}

/// Splits reply text into lines of styled spans.
///
/// Line breaks in the input become separate lines in the output; empty
/// lines are preserved as empty span lists.
pub fn format_message(text: &str) -> Vec<Vec<Span>> {
    text.split('\n').map(scan_line).collect()
}

/// Extracts bullet-marked option labels from reply text.
///
/// A line whose content starts with `"• "` contributes one label: the text
/// after the bullet, cut at the first `:` and trimmed. These labels back
/// the quick-reply affordances; callers cap how many they surface.
pub fn extract_options(text: &str) -> Vec<String> {
    text.lines()
        .filter_map(|line| {
            let rest = line.trim_start().strip_prefix("• ")?;
            let label = rest.split(':').next().unwrap_or(rest).trim();
            if label.is_empty() {
                None
            } else {
                Some(label.to_string())
            }
        })
        .collect()
}

fn scan_line(line: &str) -> Vec<Span> {
    let mut spans = Vec::new();
    let mut plain = String::new();
    let mut i = 0;
    while i < line.len() {
        let rest = &line[i..];
        if rest.starts_with("http://") || rest.starts_with("https://") {
            let len = rest.find(char::is_whitespace).unwrap_or(rest.len());
            flush(&mut spans, &mut plain);
            spans.push(Span::Link(rest[..len].to_string()));
            i += len;
            continue;
        }
        if let Some(len) = match_phone(rest) {
            flush(&mut spans, &mut plain);
            spans.push(Span::Phone(rest[..len].to_string()));
            i += len;
            continue;
        }
        let ch = match rest.chars().next() {
            Some(ch) => ch,
            None => break,
        };
        plain.push(ch);
        i += ch.len_utf8();
    }
    flush(&mut spans, &mut plain);
    spans
}

/// Matches a phone-like prefix: `\d{3,4}-\d{4}` (greedy) or `\d{4}`.
fn match_phone(s: &str) -> Option<usize> {
    let bytes = s.as_bytes();
    let digits = bytes.iter().take_while(|b| b.is_ascii_digit()).count();
    if digits == 0 {
        return None;
    }
    // Greedy: a four-digit prefix wins over a three-digit one.
    for prefix in [4usize, 3] {
        if digits == prefix
            && bytes.get(prefix) == Some(&b'-')
            && bytes.len() >= prefix + 5
            && bytes[prefix + 1..prefix + 5].iter().all(u8::is_ascii_digit)
        {
            return Some(prefix + 5);
        }
    }
    if digits >= 4 { Some(4) } else { None }
}

fn flush(spans: &mut Vec<Span>, plain: &mut String) {
    if !plain.is_empty() {
        spans.push(Span::Text(std::mem::take(plain)));
    }
}
