//! Character classification helpers shared by the repair parser.

/// The four quote families recognised by the string parser. A string opened
/// with a member of one family can only be closed by a member of the same
/// family: `"` closes `"`, `'` closes `'`, curly single quotes close each
/// other, curly double quotes close each other.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum QuoteFamily {
    Double,
    Single,
    SingleLike,
    DoubleLike,
}

impl QuoteFamily {
    pub(crate) fn of(c: char) -> Option<Self> {
        if c == '"' {
            Some(QuoteFamily::Double)
        } else if c == '\'' {
            Some(QuoteFamily::Single)
        } else if is_single_quote_like(c) {
            Some(QuoteFamily::SingleLike)
        } else if is_double_quote_like(c) {
            Some(QuoteFamily::DoubleLike)
        } else {
            None
        }
    }

    #[inline]
    pub(crate) fn is_end(self, c: char) -> bool {
        match self {
            QuoteFamily::Double => c == '"',
            QuoteFamily::Single => c == '\'',
            QuoteFamily::SingleLike => is_single_quote_like(c),
            QuoteFamily::DoubleLike => is_double_quote_like(c),
        }
    }
}

#[inline]
pub(crate) fn is_double_quote_like(c: char) -> bool {
    c == '"' || c == '\u{201C}' || c == '\u{201D}'
}

#[inline]
pub(crate) fn is_single_quote_like(c: char) -> bool {
    matches!(c, '\'' | '\u{2018}' | '\u{2019}' | '\u{60}' | '\u{B4}')
}

#[inline]
pub(crate) fn is_quote(c: char) -> bool {
    is_double_quote_like(c) || is_single_quote_like(c)
}

#[inline]
pub(crate) fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\n' | '\t' | '\r')
}

#[inline]
pub(crate) fn is_whitespace_except_newline(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r')
}

#[inline]
pub(crate) fn is_whitespace_byte(b: u8) -> bool {
    matches!(b, b' ' | b'\n' | b'\t' | b'\r')
}

/// Exotic unicode whitespace that gets normalised to a regular space on
/// output: non-breaking space, the en-quad..hair-space range, narrow
/// no-break space, medium mathematical space and ideographic space.
#[inline]
pub(crate) fn is_special_whitespace(c: char) -> bool {
    c == '\u{A0}'
        || ('\u{2000}'..='\u{200A}').contains(&c)
        || c == '\u{202F}'
        || c == '\u{205F}'
        || c == '\u{3000}'
}

#[inline]
pub(crate) fn is_delimiter(c: char) -> bool {
    matches!(
        c,
        ',' | ':' | '[' | ']' | '/' | '{' | '}' | '(' | ')' | '\n' | '+'
    )
}

#[inline]
pub(crate) fn is_delimiter_byte(b: u8) -> bool {
    matches!(
        b,
        b',' | b':' | b'[' | b']' | b'/' | b'{' | b'}' | b'(' | b')' | b'\n' | b'+'
    )
}

/// The stop class used when walking an unquoted string value. More
/// restrictive than [`is_delimiter`]: `:`, `(` and `)` may legitimately
/// appear inside unquoted text ("She said: no way", "This is F(3)").
#[inline]
pub(crate) fn is_unquoted_string_delimiter(c: char) -> bool {
    matches!(c, ',' | '[' | ']' | '/' | '{' | '}' | '+' | '\n')
}

#[inline]
pub(crate) fn is_start_of_value(c: char) -> bool {
    is_quote(c) || matches!(c, '[' | '{' | '-' | '_') || c.is_ascii_alphanumeric()
}

/// Valid JSON string scalars are U+0020 and above.
#[inline]
pub(crate) fn is_valid_string_character(c: char) -> bool {
    c >= '\u{20}'
}

/// The control characters that have a short JSON escape.
#[inline]
pub(crate) fn control_escape(c: char) -> Option<&'static str> {
    match c {
        '\u{8}' => Some("\\b"),
        '\u{C}' => Some("\\f"),
        '\n' => Some("\\n"),
        '\r' => Some("\\r"),
        '\t' => Some("\\t"),
        _ => None,
    }
}

/// Single-character escapes that pass through a string untouched.
#[inline]
pub(crate) fn is_pass_through_escape(c: char) -> bool {
    matches!(c, '"' | '\\' | '/' | 'b' | 'f' | 'n' | 'r' | 't')
}

#[inline]
pub(crate) fn is_function_name_char_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_' || c == '$'
}

#[inline]
pub(crate) fn is_function_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '$'
}

/// True when `text[start..end]` is exactly a URL scheme prefix like
/// `https://`. Indices may be byte positions inside a multibyte scalar, in
/// which case there is no match.
pub(crate) fn matches_url_start(text: &str, start: usize, end: usize) -> bool {
    let end = end.min(text.len());
    if start >= end {
        return false;
    }
    let Some(slice) = text.get(start..end) else {
        return false;
    };
    match slice.strip_suffix("://") {
        Some(scheme) => matches!(scheme, "http" | "https" | "ftp" | "mailto" | "file" | "data" | "irc"),
        None => false,
    }
}

#[inline]
pub(crate) fn is_url_char(c: char) -> bool {
    c.is_ascii_alphanumeric()
        || matches!(
            c,
            '-' | '.'
                | '_'
                | '~'
                | ':'
                | '/'
                | '?'
                | '#'
                | '@'
                | '!'
                | '$'
                | '&'
                | '\''
                | '('
                | ')'
                | '*'
                | '+'
                | ';'
                | '='
        )
}
