//! Docstring reformatter: line-by-line state machine.
//!
//! Recognizes Google-style `Args:`/`Returns:` sections and Sphinx-style
//! `:param name:`/`:return:` fields in raw doc comment text and rewrites them into
//! uniform Markdown. While rewriting, it records the set of documented parameter
//! names and whether a return value was documented, so the result can be
//! cross-checked against the declared signature.
//!
//! Every input line appears in the output, in order; lines are only rewritten,
//! never dropped.

use regex::Regex;
use std::sync::LazyLock;

/// Sentinel substituted for a symbol that has no docstring. The reformatter is
/// never invoked in that case; there is nothing to extract.
pub const MISSING_DOCSTRING_SENTINEL: &str = "!!! WARNING: NO DOCSTRING FOUND !!!";

// -- Regex patterns -----------------------------------------------------------

static RE_ARG_HEADER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\s*Args:?$").unwrap());

static RE_RETURN_HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*Returns?:?$").unwrap());

static RE_INDENTED_ENTRY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s+:?[\w\d]").unwrap());

static RE_SPHINX_FIELD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\s*:").unwrap());

static RE_SPHINX_PARAM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*:param\s+(\w+)\s*:").unwrap());

static RE_SPHINX_RETURN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*:returns?\s*:").unwrap());

// `name: description` and `name (type): description` entry forms
static RE_ENTRY_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*(\w+)\s*(?:\([^)]*\))?\s*:").unwrap());

static RE_BLANK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\s*$").unwrap());

static RE_INDENT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\s+").unwrap());

// -- Data ---------------------------------------------------------------------

/// Parameter names and return presence found while reformatting a docstring.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedSignature {
    /// Documented parameter names, in first-seen order, without duplicates
    pub params: Vec<String>,
    /// Whether the docstring documents a return value
    pub has_return: bool,
}

impl ExtractedSignature {
    fn record_param(&mut self, name: &str) {
        if !self.params.iter().any(|p| p == name) {
            self.params.push(name.to_string());
        }
    }
}

/// A reformatted docstring together with the signature it documents.
#[derive(Debug, Clone)]
pub struct FormattedDocstring {
    /// The docstring rewritten as Markdown
    pub markdown: String,
    /// The parameter names and return presence seen during reformatting
    pub signature: ExtractedSignature,
}

/// One docstring line, classified.
#[derive(Debug, Clone, PartialEq, Eq)]
enum LineKind {
    ArgHeader,
    ReturnHeader,
    SphinxParam(String),
    SphinxReturn,
    SphinxOther,
    Blank,
    Plain,
}

/// Parser state, one state per line. A blank line resets to `Normal`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Normal,
    InArgsBlock,
    InReturnsBlock,
}

// -- Public API ---------------------------------------------------------------

/// Reformats a raw docstring into Markdown and extracts its documented signature.
///
/// The caller is responsible for substituting [`MISSING_DOCSTRING_SENTINEL`] when
/// the docstring is absent; this function expects actual text.
pub fn reformat(doc_text: &str) -> FormattedDocstring {
    let mut state = State::Normal;
    let mut signature = ExtractedSignature::default();
    let mut lines = Vec::new();

    for line in doc_text.split('\n') {
        lines.push(process_line(line, &mut state, &mut signature));
    }

    FormattedDocstring {
        markdown: lines.join("\n"),
        signature,
    }
}

// -- Line processing ----------------------------------------------------------

fn classify(line: &str) -> LineKind {
    if RE_ARG_HEADER.is_match(line) {
        return LineKind::ArgHeader;
    }
    if RE_RETURN_HEADER.is_match(line) {
        return LineKind::ReturnHeader;
    }
    if let Some(caps) = RE_SPHINX_PARAM.captures(line) {
        return LineKind::SphinxParam(caps[1].to_string());
    }
    if RE_SPHINX_RETURN.is_match(line) {
        return LineKind::SphinxReturn;
    }
    if RE_SPHINX_FIELD.is_match(line) {
        return LineKind::SphinxOther;
    }
    if RE_BLANK.is_match(line) {
        return LineKind::Blank;
    }
    LineKind::Plain
}

fn process_line(line: &str, state: &mut State, signature: &mut ExtractedSignature) -> String {
    match classify(line) {
        LineKind::ArgHeader => {
            *state = State::InArgsBlock;
            "**Args:**".to_string()
        }
        LineKind::ReturnHeader => {
            *state = State::InReturnsBlock;
            "**Returns:**".to_string()
        }
        // Sphinx fields are recognized in any state
        LineKind::SphinxParam(name) => {
            signature.record_param(&name);
            bullet_indent(line)
        }
        LineKind::SphinxReturn => {
            signature.has_return = true;
            bullet_indent(line)
        }
        LineKind::SphinxOther => bullet_indent(line),
        LineKind::Blank => {
            // Closes any open Args/Returns block; passed through unchanged
            *state = State::Normal;
            line.to_string()
        }
        LineKind::Plain => match *state {
            State::InArgsBlock if RE_INDENTED_ENTRY.is_match(line) => {
                if let Some(caps) = RE_ENTRY_NAME.captures(line) {
                    signature.record_param(&caps[1]);
                }
                bullet_indent(line)
            }
            State::InReturnsBlock if RE_INDENTED_ENTRY.is_match(line) => {
                signature.has_return = true;
                bullet_indent(line)
            }
            _ => remove_indentation(line),
        },
    }
}

/// Replaces leading whitespace with a bullet.
fn bullet_indent(line: &str) -> String {
    if RE_INDENT.is_match(line) {
        RE_INDENT.replace(line, "- ").into_owned()
    } else {
        format!("- {}", line)
    }
}

/// Strips any leading whitespace.
fn remove_indentation(line: &str) -> String {
    RE_INDENT.replace(line, "").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_plain_prose_passes_through_unindented() {
        let doc = " Adds one to a value.\n\n Nothing else to say.";
        let result = reformat(doc);

        assert_eq!(result.markdown, "Adds one to a value.\n\nNothing else to say.");
        assert!(result.signature.params.is_empty());
        assert!(!result.signature.has_return);
    }

    #[test]
    fn test_google_style_args_and_returns() {
        let doc = " Adds one.\n\n Args:\n     x: value\n\n Returns:\n     result";
        let result = reformat(doc);

        assert_eq!(
            result.markdown,
            "Adds one.\n\n**Args:**\n- x: value\n\n**Returns:**\n- result"
        );
        assert_eq!(result.signature.params, vec!["x".to_string()]);
        assert!(result.signature.has_return);
    }

    #[test]
    fn test_unindented_headers_recognized() {
        let doc = "Adds one.\n\nArgs:\n    x: value\n\nReturns:\n    result";
        let result = reformat(doc);

        assert_eq!(
            result.markdown,
            "Adds one.\n\n**Args:**\n- x: value\n\n**Returns:**\n- result"
        );
        assert_eq!(result.signature.params, vec!["x".to_string()]);
        assert!(result.signature.has_return);
    }

    #[test]
    fn test_arg_header_without_colon() {
        let result = reformat(" Args\n     x: value");
        assert!(result.markdown.starts_with("**Args:**"));
        assert_eq!(result.signature.params, vec!["x".to_string()]);
    }

    #[test]
    fn test_return_header_singular_form() {
        let result = reformat(" Return:\n     something");
        assert!(result.markdown.contains("**Returns:**"));
        assert!(result.signature.has_return);
    }

    #[test]
    fn test_typed_google_entry_extracts_name() {
        let doc = " Args:\n     count (usize): how many";
        let result = reformat(doc);

        assert_eq!(result.signature.params, vec!["count".to_string()]);
        assert!(result.markdown.contains("- count (usize): how many"));
    }

    #[test]
    fn test_multiple_args_extracted_in_order() {
        let doc = " Args:\n     first: one\n     second: two\n     third: three";
        let result = reformat(doc);

        assert_eq!(
            result.signature.params,
            vec!["first".to_string(), "second".to_string(), "third".to_string()]
        );
    }

    #[test]
    fn test_blank_line_closes_args_block() {
        // After the blank line the indented line is plain prose again
        let doc = " Args:\n     x: value\n\n     stray indented prose";
        let result = reformat(doc);

        assert_eq!(
            result.markdown,
            "**Args:**\n- x: value\n\nstray indented prose"
        );
        assert_eq!(result.signature.params, vec!["x".to_string()]);
    }

    #[test]
    fn test_sphinx_param_recognized_in_any_state() {
        let doc = " Summary.\n :param address: where to send\n :param port: listen port";
        let result = reformat(doc);

        assert_eq!(
            result.signature.params,
            vec!["address".to_string(), "port".to_string()]
        );
        assert!(result.markdown.contains("- :param address: where to send"));
        assert!(result.markdown.contains("- :param port: listen port"));
    }

    #[test]
    fn test_sphinx_return_recognized() {
        let doc = " Summary.\n :return: the thing";
        let result = reformat(doc);

        assert!(result.signature.has_return);
        assert!(result.markdown.contains("- :return: the thing"));
    }

    #[test]
    fn test_sphinx_returns_plural_recognized() {
        let result = reformat(" :returns: same thing");
        assert!(result.signature.has_return);
    }

    #[test]
    fn test_duplicate_params_recorded_once() {
        let doc = " Args:\n     x: first mention\n     x: second mention";
        let result = reformat(doc);

        assert_eq!(result.signature.params, vec!["x".to_string()]);
    }

    #[test]
    fn test_indented_entry_outside_block_is_prose() {
        // Without an Args header, an indented line is plain prose
        let doc = "     looks like an entry: but is not";
        let result = reformat(doc);

        assert_eq!(result.markdown, "looks like an entry: but is not");
        assert!(result.signature.params.is_empty());
    }

    #[test]
    fn test_no_line_dropped_or_reordered() {
        let doc = " one\n\n Args:\n     a: x\n\n two\n three";
        let result = reformat(doc);

        assert_eq!(result.markdown.lines().count(), doc.lines().count());
        assert_eq!(
            result.markdown,
            "one\n\n**Args:**\n- a: x\n\ntwo\nthree"
        );
    }

    #[test]
    fn test_blank_line_passed_through_unchanged() {
        let result = reformat("a\n\nb");
        assert_eq!(result.markdown, "a\n\nb");
    }

    #[test]
    fn test_reformat_is_deterministic() {
        let doc = " Summary.\n\n Args:\n     x: value\n :param y: other";
        let first = reformat(doc);
        let second = reformat(doc);

        assert_eq!(first.markdown, second.markdown);
        assert_eq!(first.signature, second.signature);
    }
}
