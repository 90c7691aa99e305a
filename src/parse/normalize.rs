//! Line normalization: comment stripping, space removal and quote canonicalization.

pub const COMMENT_DELIM: char = ';';
pub const QUOTE: char = '"';
pub const SPACE: char = ' ';

/// Left and right double quotation marks, rewritten to [`QUOTE`].
const TYPOGRAPHIC_QUOTES: [char; 2] = ['\u{201C}', '\u{201D}'];

/// A line after normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedLine {
    pub text: String,
    /// The line ended while still inside a quoted run.
    pub unterminated_quote: bool,
}

impl NormalizedLine {
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Strip a raw line down to its significant characters.
///
/// Outside quotes, spaces are dropped and `;` ends the line. Inside quotes
/// every character is kept verbatim. Each quote (canonical or typographic)
/// toggles the quote state and is emitted as `"`. An unbalanced quote keeps
/// the remainder of the line quoted.
pub fn normalize_line(line: &str) -> NormalizedLine {
    let mut text = String::with_capacity(line.len());
    let mut in_quotes = false;

    for c in line.chars() {
        let c = if TYPOGRAPHIC_QUOTES.contains(&c) { QUOTE } else { c };

        if c == QUOTE {
            in_quotes = !in_quotes;
            text.push(QUOTE);
            continue;
        }
        if in_quotes {
            text.push(c);
            continue;
        }
        if c == COMMENT_DELIM {
            break;
        }
        if c != SPACE {
            text.push(c);
        }
    }

    NormalizedLine { text, unterminated_quote: in_quotes }
}
