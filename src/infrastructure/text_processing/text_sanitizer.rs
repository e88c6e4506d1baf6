use regex::Regex;
use std::sync::LazyLock;
use unicode_normalization::UnicodeNormalization;

/// A word broken across lines with a trailing hyphen.
static BROKEN_WORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?P<head>\w)-[ \t]*\r?\n[ \t]*(?P<tail>\w)").expect("valid hyphenation pattern")
});

/// Cleans text pulled out of a PDF page: NFKC (ligatures), soft hyphens and
/// zero-width characters removed, words re-joined across hyphenated line
/// breaks, runs of blank lines reduced to one paragraph break.
pub fn sanitize_extracted_text(raw: &str) -> String {
    let normalized: String = raw
        .nfkc()
        .filter(|ch| !is_invisible(*ch))
        .map(|ch| if ch == '\u{000C}' { '\n' } else { ch })
        .collect();
    let de_hyphenated = BROKEN_WORD.replace_all(&normalized, "$head$tail");

    let mut paragraphs: Vec<Vec<String>> = vec![Vec::new()];
    for line in de_hyphenated.lines() {
        let collapsed = line.split_whitespace().collect::<Vec<_>>().join(" ");
        if !collapsed.is_empty() {
            if let Some(current) = paragraphs.last_mut() {
                current.push(collapsed);
            }
        } else if paragraphs.last().is_some_and(|p| !p.is_empty()) {
            paragraphs.push(Vec::new());
        }
    }

    paragraphs
        .into_iter()
        .filter(|lines| !lines.is_empty())
        .map(|lines| lines.join("\n"))
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn is_invisible(ch: char) -> bool {
    matches!(ch, '\u{00AD}' | '\u{200B}' | '\u{200C}' | '\u{200D}' | '\u{FEFF}')
        || (ch.is_control() && !matches!(ch, '\n' | '\r' | '\t' | '\u{000C}'))
}
