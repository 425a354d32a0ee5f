//! Wildcard patterns in the Simple and Win32 dialects.
//!
//! Patterns compile to a token list that is run as a small NFA over the
//! name's characters, one state per token plus an accepting state. Two
//! common shapes skip the NFA entirely: a lone `*` and `*` followed by
//! plain text (an "ends with" test).
//!
//! Win32 patterns are translated first, the way DOS did it:
//!
//! | Input | Becomes |
//! |---|---|
//! | empty, `.`, `*`, `*.*` | `*` (everything) |
//! | `?` | `>` (DOS_QM) |
//! | `.` before `?` or `*` | `"` (DOS_DOT) |
//! | trailing `*.` | `<` (DOS_STAR) |

use walkspec_core::{MatchCasing, MatchType};

use crate::casing::resolve_ignore_case;

const WIN32_WILDCARDS: [char; 5] = ['*', '?', '<', '>', '"'];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token {
    Literal(char),
    /// `?` in the Simple dialect: exactly one character.
    AnyChar,
    /// `*`: any run of characters.
    Star,
    /// `<`: any run that does not consume the name's last period.
    DosStar,
    /// `>`: one non-period character. Matches nothing before a period, at
    /// the end of the name, or anywhere inside the final extension.
    DosQm,
    /// `"`: a period, or nothing once the name is exhausted.
    DosDot,
}

impl Token {
    fn render(self, out: &mut String) {
        match self {
            Token::Literal(c) => {
                if c == '\\' || WIN32_WILDCARDS.contains(&c) {
                    out.push('\\');
                }
                out.push(c);
            }
            Token::AnyChar => out.push('?'),
            Token::Star => out.push('*'),
            Token::DosStar => out.push('<'),
            Token::DosQm => out.push('>'),
            Token::DosDot => out.push('"'),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Matcher {
    Everything,
    EndsWith(Vec<char>),
    Tokens(Vec<Token>),
}

/// A compiled search pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WildcardPattern {
    source: String,
    match_type: MatchType,
    matcher: Matcher,
}

impl WildcardPattern {
    /// Compile `pattern` in the given dialect.
    pub fn new(pattern: &str, match_type: MatchType) -> Self {
        let tokens = match match_type {
            MatchType::Simple => tokenize_simple(pattern),
            MatchType::Win32 => tokenize_win32(pattern),
        };
        let matcher = optimize(tokens);
        tracing::debug!(pattern, %match_type, ?matcher, "compiled wildcard pattern");

        Self {
            source: pattern.to_string(),
            match_type,
            matcher,
        }
    }

    /// The pattern text as supplied.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// The dialect this pattern was compiled with.
    pub fn match_type(&self) -> MatchType {
        self.match_type
    }

    /// Whether the pattern matches every name.
    pub fn matches_everything(&self) -> bool {
        self.matcher == Matcher::Everything
    }

    /// Test `name` against the pattern. Empty names never match.
    pub fn is_match(&self, name: &str, ignore_case: bool) -> bool {
        if name.is_empty() {
            return false;
        }
        match &self.matcher {
            Matcher::Everything => true,
            Matcher::EndsWith(suffix) => ends_with(name, suffix, ignore_case),
            Matcher::Tokens(tokens) => run_nfa(tokens, name, ignore_case),
        }
    }

    /// Test `name` with the case rule in `casing`, resolving
    /// [`MatchCasing::PlatformDefault`] to the host platform's default.
    pub fn is_match_with(&self, name: &str, casing: MatchCasing) -> bool {
        self.is_match(name, resolve_ignore_case(casing))
    }
}

/// Test a single name against a pattern.
///
/// Convenience over [`WildcardPattern`]; compile the pattern once when
/// matching many names.
pub fn matches(name: &str, pattern: &str, match_type: MatchType, casing: MatchCasing) -> bool {
    WildcardPattern::new(pattern, match_type).is_match_with(name, casing)
}

/// The DOS translation of a Win32 pattern, written with `<`, `>` and `"`
/// for the DOS wildcards and `\` escaping literal wildcard characters.
pub fn translate_win32_expression(pattern: &str) -> String {
    let mut out = String::with_capacity(pattern.len());
    for token in tokenize_win32(pattern) {
        token.render(&mut out);
    }
    out
}

fn tokenize_simple(pattern: &str) -> Vec<Token> {
    pattern
        .chars()
        .map(|c| match c {
            '*' => Token::Star,
            '?' => Token::AnyChar,
            c => Token::Literal(c),
        })
        .collect()
}

fn tokenize_win32(pattern: &str) -> Vec<Token> {
    if pattern.is_empty() || pattern == "." || pattern == "*" || pattern == "*.*" {
        return vec![Token::Star];
    }

    let chars: Vec<char> = pattern.chars().collect();
    let mut tokens = Vec::with_capacity(chars.len());
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        let next = chars.get(i + 1).copied();
        match c {
            '\\' => match next {
                Some(escaped) => {
                    tokens.push(Token::Literal(escaped));
                    i += 1;
                }
                None => tokens.push(Token::Literal('\\')),
            },
            '.' if next.is_none() && tokens.last() == Some(&Token::Star) => {
                // "*." at the end: names without an extension
                if let Some(last) = tokens.last_mut() {
                    *last = Token::DosStar;
                }
            }
            '.' if matches!(next, Some('?' | '*')) => tokens.push(Token::DosDot),
            '?' | '>' => tokens.push(Token::DosQm),
            '*' => tokens.push(Token::Star),
            '<' => tokens.push(Token::DosStar),
            '"' => tokens.push(Token::DosDot),
            c => tokens.push(Token::Literal(c)),
        }
        i += 1;
    }

    tokens
}

fn optimize(tokens: Vec<Token>) -> Matcher {
    match tokens.as_slice() {
        [Token::Star] => return Matcher::Everything,
        [Token::Star, rest @ ..] => {
            let suffix: Option<Vec<char>> = rest
                .iter()
                .map(|t| match t {
                    Token::Literal(c) => Some(*c),
                    _ => None,
                })
                .collect();
            if let Some(suffix) = suffix {
                return Matcher::EndsWith(suffix);
            }
        }
        _ => {}
    }
    Matcher::Tokens(tokens)
}

fn chars_equal(a: char, b: char, ignore_case: bool) -> bool {
    a == b || (ignore_case && a.to_lowercase().eq(b.to_lowercase()))
}

fn ends_with(name: &str, suffix: &[char], ignore_case: bool) -> bool {
    let mut name_chars = name.chars().rev();
    suffix
        .iter()
        .rev()
        .all(|&s| name_chars.next().is_some_and(|c| chars_equal(s, c, ignore_case)))
}

fn run_nfa(tokens: &[Token], name: &str, ignore_case: bool) -> bool {
    let accept = tokens.len();
    let mut current = vec![false; accept + 1];
    let mut next = vec![false; accept + 1];
    let extension_start = tokens
        .iter()
        .rposition(|t| matches!(t, Token::DosDot | Token::Literal('.')));

    current[0] = true;
    epsilon_closure(tokens, &mut current, name.chars().next(), extension_start);

    for (idx, c) in name.char_indices() {
        let end = idx + c.len_utf8();
        let at_last_period = c == '.' && !name[end..].contains('.');

        next.fill(false);
        for state in 0..accept {
            if !current[state] {
                continue;
            }
            match tokens[state] {
                Token::Star => next[state] = true,
                Token::DosStar => {
                    if !at_last_period {
                        next[state] = true;
                    }
                }
                Token::DosQm => {
                    if c != '.' {
                        next[state + 1] = true;
                    }
                }
                Token::DosDot => {
                    if c == '.' {
                        next[state + 1] = true;
                    }
                }
                Token::AnyChar => next[state + 1] = true,
                Token::Literal(l) => {
                    if chars_equal(l, c, ignore_case) {
                        next[state + 1] = true;
                    }
                }
            }
        }

        std::mem::swap(&mut current, &mut next);
        epsilon_closure(tokens, &mut current, name[end..].chars().next(), extension_start);

        if !current.contains(&true) {
            return false;
        }
    }

    current[accept]
}

/// Follow zero-width transitions. They only move forward, so one
/// ascending pass reaches the fixpoint.
///
/// `upcoming` is the next unread name character. A `>` after
/// `extension_start` sits in the pattern's final extension and may always
/// match nothing.
fn epsilon_closure(
    tokens: &[Token],
    states: &mut [bool],
    upcoming: Option<char>,
    extension_start: Option<usize>,
) {
    for (state, token) in tokens.iter().enumerate() {
        if !states[state] {
            continue;
        }
        let zero_width = match token {
            Token::Star | Token::DosStar => true,
            Token::DosQm => {
                matches!(upcoming, None | Some('.'))
                    || extension_start.is_some_and(|start| state > start)
            }
            Token::DosDot => upcoming.is_none(),
            Token::AnyChar | Token::Literal(_) => false,
        };
        if zero_width {
            states[state + 1] = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn simple(name: &str, pattern: &str) -> bool {
        WildcardPattern::new(pattern, MatchType::Simple).is_match(name, false)
    }

    fn win32(name: &str, pattern: &str) -> bool {
        WildcardPattern::new(pattern, MatchType::Win32).is_match(name, false)
    }

    #[test]
    fn test_simple_star_dot_star_needs_period() {
        assert!(!simple("file", "*.*"));
        assert!(simple("file.txt", "*.*"));
        assert!(simple(".profile", "*.*"));
    }

    #[test]
    fn test_simple_question_mark_is_exactly_one() {
        assert!(simple("abc", "a?c"));
        assert!(!simple("ac", "a?c"));
        assert!(!simple("abbc", "a?c"));
        assert!(simple("a.c", "a?c"));
    }

    #[test]
    fn test_simple_has_no_dos_wildcards() {
        assert!(simple("a<b", "a<b"));
        assert!(!simple("axb", "a<b"));
        assert!(simple("a\"b", "a\"b"));
        assert!(simple("a\\b", "a\\b"));
    }

    #[test]
    fn test_simple_empty_pattern_matches_nothing() {
        assert!(!simple("file", ""));
    }

    #[test]
    fn test_win32_match_all_forms() {
        for pattern in ["", ".", "*", "*.*"] {
            let compiled = WildcardPattern::new(pattern, MatchType::Win32);
            assert!(compiled.matches_everything(), "{pattern:?}");
            assert!(compiled.is_match("file", false));
            assert!(compiled.is_match("file.txt", false));
        }
    }

    #[test]
    fn test_win32_question_marks_in_extension() {
        assert!(win32("file.t", "file.??t"));
        assert!(win32("file.at", "file.??t"));
        assert!(win32("file.txt", "file.??t"));
        assert!(!win32("file.text", "file.??t"));
        assert!(!win32("file", "file.??t"));
    }

    #[test]
    fn test_win32_question_mark_never_eats_period() {
        assert!(!win32("a.b", "a?b"));
        assert!(win32("axb", "a?b"));
    }

    #[test]
    fn test_win32_question_mark_empty_only_at_boundaries() {
        assert!(!win32("ab", "a?b"));
        assert!(!win32("ab.txt", "a?b.txt"));
        assert!(!win32("x", "???x"));
        // Before a period and at the end of the name
        assert!(win32("ab.txt", "ab??.txt"));
        assert!(win32("ab", "ab??"));
        assert!(win32("abc", "ab??"));
        assert!(!win32("abcde", "ab??"));
    }

    #[test]
    fn test_win32_dot_star_allows_no_extension() {
        assert!(win32("file", "file.*"));
        assert!(win32("file.txt", "file.*"));
        assert!(!win32("filed", "file.*"));
    }

    #[test]
    fn test_win32_trailing_star_dot() {
        assert!(win32("readme", "*."));
        assert!(!win32("readme.md", "*."));
        assert!(win32("abc", "a*."));
        assert!(!win32("a.b", "a*."));
    }

    #[test]
    fn test_win32_raw_dos_wildcards() {
        assert!(win32("archive.tar.gz", "<.gz"));
        assert!(!win32("archive.tar.gz", "<"));
        assert!(win32("axb", "a>b"));
        assert!(!win32("ab", "a>b"));
        assert!(!win32("file", "file\"txt"));
    }

    #[test]
    fn test_win32_escape() {
        assert!(win32("what?", "what\\?"));
        assert!(!win32("whatx", "what\\?"));
        assert!(win32("tail\\", "tail\\"));
    }

    #[test]
    fn test_ends_with_fast_path() {
        let compiled = WildcardPattern::new("*.rs", MatchType::Simple);
        assert_eq!(compiled.matcher, Matcher::EndsWith(vec!['.', 'r', 's']));
        assert!(compiled.is_match("lib.rs", false));
        assert!(compiled.is_match("LIB.RS", true));
        assert!(!compiled.is_match("LIB.RS", false));
        assert!(!compiled.is_match("rs", false));
    }

    #[test]
    fn test_ignore_case_in_nfa() {
        let compiled = WildcardPattern::new("Read?e*", MatchType::Simple);
        assert!(compiled.is_match("README.md", true));
        assert!(!compiled.is_match("README.md", false));
    }

    #[test]
    fn test_non_ascii_names() {
        assert!(simple("café.txt", "caf?.txt"));
        assert!(WildcardPattern::new("ÉTÉ*", MatchType::Simple).is_match("été.doc", true));
    }

    #[test]
    fn test_empty_name_never_matches() {
        assert!(!win32("", "*"));
        assert!(!simple("", ""));
    }

    #[test]
    fn test_translate() {
        assert_eq!(translate_win32_expression("*.*"), "*");
        assert_eq!(translate_win32_expression("file.??t"), "file\">>t");
        assert_eq!(translate_win32_expression("*."), "<");
        assert_eq!(translate_win32_expression("a.b"), "a.b");
        assert_eq!(translate_win32_expression("x\\?"), "x\\?");
    }
}
