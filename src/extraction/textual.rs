//! Line-oriented `def` scanner used when structural parsing fails.
//!
//! Lower fidelity than the tree-sitter pass: a `def name(` inside a
//! multi-line string is reported as a function.

use super::{FunctionExtractor, Strategy};
use crate::core::Result;
use once_cell::sync::Lazy;
use regex::Regex;

/// Optional same-line decorators, optional `async`, then `def name(`.
static DEF_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*(?:@[^\s(]+(?:\([^)]*\))?\s+)*(?:async\s+)?def\s+([^\W\d]\w*)\s*\(").unwrap()
});

/// A definition found by the textual scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextualMatch {
    pub name: String,
    /// 1-based line of the `def` keyword
    pub line: usize,
    /// Decorators directly above the definition
    pub decorators: usize,
}

#[derive(Debug, Default, Clone, Copy)]
pub struct TextualExtractor;

impl TextualExtractor {
    pub fn scan(&self, source: &str) -> Vec<String> {
        scan_definitions(source).into_iter().map(|m| m.name).collect()
    }
}

impl FunctionExtractor for TextualExtractor {
    fn strategy(&self) -> Strategy {
        Strategy::Textual
    }

    fn extract(&self, source: &str) -> Result<Vec<String>> {
        Ok(self.scan(source))
    }
}

/// Scan line by line. Consecutive decorator lines, including continuation
/// lines of a decorator whose brackets are still open, attach to the next
/// `def` and never produce entries themselves. A `def` at or left of the
/// decorator's indentation always ends the continuation, so an unclosed
/// decorator bracket cannot hide the rest of the file.
pub fn scan_definitions(source: &str) -> Vec<TextualMatch> {
    let mut matches = Vec::new();
    let mut decorators = 0usize;
    let mut open_brackets = 0i32;
    let mut decorator_indent = 0usize;

    for (index, line) in source.lines().enumerate() {
        let captures = DEF_PATTERN.captures(line);

        if open_brackets > 0 {
            if captures.is_some() && indentation(line) <= decorator_indent {
                open_brackets = 0;
            } else {
                open_brackets = (open_brackets + bracket_balance(line)).max(0);
                continue;
            }
        }

        if let Some(caps) = captures {
            matches.push(TextualMatch {
                name: caps[1].to_string(),
                line: index + 1,
                decorators,
            });
            decorators = 0;
            continue;
        }

        let trimmed = line.trim_start();
        if trimmed.starts_with('@') {
            decorators += 1;
            decorator_indent = indentation(line);
            open_brackets = bracket_balance(line).max(0);
        } else if !trimmed.is_empty() && !trimmed.starts_with('#') {
            decorators = 0;
        }
    }

    matches
}

fn indentation(line: &str) -> usize {
    line.len() - line.trim_start().len()
}

/// Opening minus closing brackets outside string literals, ignoring
/// anything after a `#`. String state does not carry across lines.
fn bracket_balance(line: &str) -> i32 {
    let chars: Vec<char> = line.chars().collect();
    let mut balance = 0;
    let mut quote: Option<(char, bool)> = None;
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];

        match quote {
            Some((q, is_triple)) => {
                if c == '\\' {
                    i += 1;
                } else if c == q && (!is_triple || triple_quote_at(&chars, i, q)) {
                    quote = None;
                    if is_triple {
                        i += 2;
                    }
                }
            }
            None => match c {
                '#' => break,
                '\'' | '"' => {
                    let is_triple = triple_quote_at(&chars, i, c);
                    quote = Some((c, is_triple));
                    if is_triple {
                        i += 2;
                    }
                }
                '(' | '[' | '{' => balance += 1,
                ')' | ']' | '}' => balance -= 1,
                _ => {}
            },
        }
        i += 1;
    }

    balance
}

fn triple_quote_at(chars: &[char], i: usize, quote: char) -> bool {
    i + 2 < chars.len() && chars[i + 1] == quote && chars[i + 2] == quote
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_and_function_free_sources() {
        assert!(TextualExtractor.scan("").is_empty());
        assert!(TextualExtractor.scan("x = 1\ny = 'define(this)'\n").is_empty());
    }

    #[test]
    fn test_decorated_definition() {
        let source = indoc! {r#"
            def foo(:
                pass

            @decorator
            def bar(
        "#};
        let found = scan_definitions(source);
        assert_eq!(
            found,
            vec![
                TextualMatch { name: "foo".into(), line: 1, decorators: 0 },
                TextualMatch { name: "bar".into(), line: 5, decorators: 1 },
            ]
        );
    }

    #[test]
    fn test_multi_line_decorator_is_one_declaration() {
        let source = indoc! {r#"
            @retry(
                times=3,
                on=(IOError,
                    OSError),
            )
            @log_calls
            def fetch(url):
                print "fetching", url
        "#};
        let found = scan_definitions(source);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "fetch");
        assert_eq!(found[0].decorators, 2);
    }

    #[test]
    fn test_def_inside_decorator_arguments_is_ignored() {
        let source = indoc! {r#"
            @register(
                "def fake(x): pass",
            )
            def real():
                pass
        "#};
        assert_eq!(TextualExtractor.scan(source), vec!["real"]);
    }

    #[test]
    fn test_same_line_decorator_and_async() {
        let source = "@staticmethod def helper(x):\n    async def inner():\n";
        assert_eq!(TextualExtractor.scan(source), vec!["helper", "inner"]);
    }

    #[test]
    fn test_decorator_count_resets_on_other_code() {
        let source = "@orphan\nx = 1\ndef plain():\n";
        let found = scan_definitions(source);
        assert_eq!(found[0].decorators, 0);
    }

    #[test]
    fn test_string_literal_false_positive_is_reported() {
        let source = "doc = '''\ndef not_really(x):\n'''\n";
        assert_eq!(TextualExtractor.scan(source), vec!["not_really"]);
    }

    #[test]
    fn test_bracket_balance_ignores_comments() {
        assert_eq!(bracket_balance("@dec(  # (("), 1);
        assert_eq!(bracket_balance(")"), -1);
    }

    #[test]
    fn test_bracket_balance_ignores_string_contents() {
        assert_eq!(bracket_balance(r#"@route("/a(")"#), 0);
        assert_eq!(bracket_balance(r#"@tag('x)', "[#")"#), 0);
        assert_eq!(bracket_balance(r#"@doc("""(""", ('"'))"#), 0);
        assert_eq!(bracket_balance(r#"@esc("\"(", x"#), 1);
    }

    #[test]
    fn test_unclosed_decorator_does_not_hide_later_definitions() {
        let source = indoc! {r#"
            @retry(times=3
            def fetch(url):
                pass

            def save(x):
                pass

            def load(y):
                pass
        "#};
        let found = scan_definitions(source);
        let names: Vec<&str> = found.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["fetch", "save", "load"]);
        assert_eq!(found[0].decorators, 1);
    }

    #[test]
    fn test_bracket_inside_decorator_string_argument() {
        let source = indoc! {r#"
            @route("/a(")
            def index():
                pass
            def other():
                pass
            x = (
        "#};
        assert_eq!(TextualExtractor.scan(source), vec!["index", "other"]);
    }

    #[test]
    fn test_indented_def_inside_open_decorator_is_skipped() {
        let source = indoc! {r#"
            @register(
                def hook(): pass,
            def real():
                pass
        "#};
        assert_eq!(TextualExtractor.scan(source), vec!["real"]);
    }
}
