// Pure text cleanup + injection screening for the enrollment form.
// Everything here must stay deterministic and panic-free so the gate can
// call it on arbitrary user input.

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum FieldKind {
    Name,
    Email,
    Phone,
    Text,
}

/// Normalizes a raw field value for the given kind. Idempotent:
/// sanitizing an already-sanitized value returns it unchanged.
pub fn sanitize(raw: &str, kind: FieldKind) -> String {
    match kind {
        FieldKind::Name => collapse_whitespace(
            &raw.chars()
                .filter(|c| c.is_alphabetic() || matches!(c, ' ' | '-' | '\'' | '.'))
                .collect::<String>(),
        ),
        FieldKind::Email => raw
            .trim()
            .chars()
            .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '@' | '_' | '%' | '+' | '-'))
            .map(|c| c.to_ascii_lowercase())
            .collect(),
        FieldKind::Phone => collapse_whitespace(
            &raw.chars()
                .filter(|c| c.is_ascii_digit() || matches!(c, '+' | '(' | ')' | '-' | ' '))
                .collect::<String>(),
        ),
        FieldKind::Text => collapse_whitespace(
            &raw.chars()
                .filter(|c| !c.is_control() && *c != '<' && *c != '>')
                .collect::<String>(),
        ),
    }
}

fn collapse_whitespace(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join(" ")
}

// Lowercased substrings that mark a value as injection-like. The form only
// carries names, contact details and short free text, so anything
// script/SQL/shell shaped is safe to refuse outright.
const SUSPICIOUS_PATTERNS: &[&str] = &[
    "<script",
    "</script",
    "javascript:",
    "vbscript:",
    "data:text/html",
    "onerror=",
    "onload=",
    "onclick=",
    "onfocus=",
    "srcdoc=",
    "<iframe",
    "<object",
    "<embed",
    "union select",
    "drop table",
    "insert into",
    "delete from",
    "' or '",
    "\" or \"",
    "1=1--",
    "${",
    "{{",
    "$(",
    "`",
    "\\x00",
];

/// True when the value looks like a script/markup/SQL/command payload
/// rather than ordinary form text.
pub fn contains_suspicious_pattern(value: &str) -> bool {
    if value.chars().any(|c| c == '\0' || (c.is_control() && c != '\n' && c != '\t')) {
        return true;
    }
    let lowered = value.to_lowercase();
    SUSPICIOUS_PATTERNS.iter().any(|p| lowered.contains(p))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_keeps_letters_and_separators() {
        assert_eq!(sanitize("  Aino-Maija  O'Brien Jr. ", FieldKind::Name), "Aino-Maija O'Brien Jr.");
        assert_eq!(sanitize("R0b3rt); --", FieldKind::Name), "Rbrt --");
    }

    #[test]
    fn email_is_lowercased_and_stripped() {
        assert_eq!(sanitize(" Maija.Virtanen+opintie@Example.COM ", FieldKind::Email), "maija.virtanen+opintie@example.com");
        assert_eq!(sanitize("a b<script>@x.fi", FieldKind::Email), "abscript@x.fi");
    }

    #[test]
    fn phone_keeps_dial_characters() {
        assert_eq!(sanitize(" +358 (0)45 123-4567 ", FieldKind::Phone), "+358 (0)45 123-4567");
        assert_eq!(sanitize("call me: 0451234567", FieldKind::Phone), "0451234567");
    }

    #[test]
    fn text_strips_markup_and_control_chars() {
        assert_eq!(sanitize("sound\u{0} engineer <b>now</b>", FieldKind::Text), "sound engineer bnow/b");
        assert_eq!(sanitize("  two   words ", FieldKind::Text), "two words");
    }

    #[test]
    fn sanitize_is_idempotent() {
        let samples = [
            ("  Aino-Maija  O'Brien ", FieldKind::Name),
            (" Maija.V+x@Example.COM ", FieldKind::Email),
            (" +358 45 123 4567 ", FieldKind::Phone),
            ("freelance <tag> producer", FieldKind::Text),
        ];
        for (raw, kind) in samples {
            let once = sanitize(raw, kind);
            assert_eq!(sanitize(&once, kind), once, "not idempotent for {raw:?}");
        }
    }

    #[test]
    fn suspicious_patterns_are_flagged() {
        assert!(contains_suspicious_pattern("<SCRIPT>alert(1)</script>"));
        assert!(contains_suspicious_pattern("javascript:void(0)"));
        assert!(contains_suspicious_pattern("Robert'; DROP TABLE students"));
        assert!(contains_suspicious_pattern("{{constructor.constructor}}"));
        assert!(contains_suspicious_pattern("$(rm -rf /)"));
        assert!(contains_suspicious_pattern("img onerror=alert(1)"));
    }

    #[test]
    fn ordinary_values_pass_the_scan() {
        assert!(!contains_suspicious_pattern("Maija Virtanen"));
        assert!(!contains_suspicious_pattern("maija@example.com"));
        assert!(!contains_suspicious_pattern("Self-employed (music tutor)"));
        assert!(!contains_suspicious_pattern("vocal-coaching"));
    }
}
