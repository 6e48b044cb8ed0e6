//! Échappement des valeurs TEXT iCalendar (RFC 5545 §3.3.11).

/// Échappe `\`, fin de ligne, `,` et `;`.
///
/// Un seul passage caractère par caractère : une barre oblique insérée pour
/// un caractère n'est jamais ré-échappée. CR et CRLF deviennent `\n`.
pub fn escape_text(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 8);
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
                out.push_str("\\n");
            }
            ',' => out.push_str("\\,"),
            ';' => out.push_str("\\;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_special_characters() {
        assert_eq!(escape_text("Park, Ji"), "Park\\, Ji");
        assert_eq!(escape_text("a;b"), "a\\;b");
        assert_eq!(escape_text("line1\nline2"), "line1\\nline2");
        assert_eq!(escape_text("back\\slash"), "back\\\\slash");
    }

    #[test]
    fn no_double_escaping() {
        assert_eq!(escape_text("\\,"), "\\\\\\,");
        assert_eq!(escape_text("\\n"), "\\\\n");
        assert_eq!(escape_text("a\r\nb\rc"), "a\\nb\\nc");
    }

    #[test]
    fn plain_text_untouched() {
        assert_eq!(escape_text("병당 - 김철수"), "병당 - 김철수");
        assert_eq!(escape_text(""), "");
    }
}
