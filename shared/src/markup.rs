/// A run of styling-tip text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TipSegment {
    Plain(String),
    Strong(String),
}

const MARKER: &str = "**";

/// Splits a tip on `**bold**` pairs. Pairs match lazily, need at least one
/// character between the markers and never span a line break; anything
/// unmatched stays literal.
pub fn parse_tip(tip: &str) -> Vec<TipSegment> {
    let mut segments = Vec::new();
    let mut plain_start = 0;
    let mut cursor = 0;

    while let Some(offset) = tip[cursor..].find(MARKER) {
        let open = cursor + offset;
        match closing_marker(&tip[open + MARKER.len()..]) {
            Some(len) => {
                if plain_start < open {
                    segments.push(TipSegment::Plain(tip[plain_start..open].to_string()));
                }
                let inner_start = open + MARKER.len();
                segments.push(TipSegment::Strong(
                    tip[inner_start..inner_start + len].to_string(),
                ));
                cursor = inner_start + len + MARKER.len();
                plain_start = cursor;
            }
            None => {
                // retry one character further, the way a regex scan would
                cursor = open + 1;
            }
        }
    }

    if plain_start < tip.len() {
        segments.push(TipSegment::Plain(tip[plain_start..].to_string()));
    }
    segments
}

/// Length of the bold run before the first closing marker in `rest`.
fn closing_marker(rest: &str) -> Option<usize> {
    for (index, ch) in rest.char_indices() {
        if ch == '\n' || ch == '\r' {
            return None;
        }
        let end = index + ch.len_utf8();
        if rest[end..].starts_with(MARKER) {
            return Some(end);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use TipSegment::{Plain, Strong};

    fn plain(s: &str) -> TipSegment {
        Plain(s.to_string())
    }

    fn strong(s: &str) -> TipSegment {
        Strong(s.to_string())
    }

    #[test]
    fn test_bold_in_the_middle() {
        assert_eq!(
            parse_tip("Layer **wool** over cotton"),
            [plain("Layer "), strong("wool"), plain(" over cotton")]
        );
    }

    #[test]
    fn test_unterminated_marker_is_literal() {
        assert_eq!(parse_tip("Use **bold"), [plain("Use **bold")]);
    }

    #[test]
    fn test_multiple_pairs_and_korean_text() {
        assert_eq!(
            parse_tip("**니트**와 **코트**를 매치"),
            [strong("니트"), plain("와 "), strong("코트"), plain("를 매치")]
        );
    }

    #[test]
    fn test_empty_pair_is_not_bold() {
        assert_eq!(parse_tip("a **** b"), [plain("a **** b")]);
    }

    #[test]
    fn test_asterisk_inside_bold() {
        assert_eq!(parse_tip("*****"), [strong("*")]);
        assert_eq!(parse_tip("***a**"), [strong("*a")]);
    }

    #[test]
    fn test_pair_does_not_cross_lines() {
        assert_eq!(parse_tip("**one\ntwo**"), [plain("**one\ntwo**")]);
    }

    #[test]
    fn test_plain_and_empty() {
        assert_eq!(parse_tip("no markup"), [plain("no markup")]);
        assert!(parse_tip("").is_empty());
    }
}
