//! Pliage des lignes de contenu à 75 octets (RFC 5545 §3.1).

const MAX_LINE_OCTETS: usize = 75;

/// Plie `line` en segments de 75 octets au plus, suite précédée d'un espace,
/// chaque segment terminé par CRLF. Ne coupe jamais un caractère UTF-8.
pub fn fold_line(line: &str) -> String {
    if line.len() <= MAX_LINE_OCTETS {
        return format!("{line}\r\n");
    }

    let mut out = String::with_capacity(line.len() + line.len() / MAX_LINE_OCTETS * 3 + 2);
    let mut rest = line;
    let mut first = true;
    while !rest.is_empty() {
        // l'espace de continuation compte dans les 75 octets
        let budget = if first { MAX_LINE_OCTETS } else { MAX_LINE_OCTETS - 1 };
        let mut end = budget.min(rest.len());
        while !rest.is_char_boundary(end) {
            end -= 1;
        }
        if !first {
            out.push(' ');
        }
        out.push_str(&rest[..end]);
        out.push_str("\r\n");
        rest = &rest[end..];
        first = false;
    }
    out
}
