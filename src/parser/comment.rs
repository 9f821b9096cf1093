//! JavaDoc-style comment association and @ tag extraction.
//!
//! Two passes over a candidate doc comment: first decide whether the
//! comment actually documents the element below it (adjacency + `/**`
//! shape), then tokenize the interior into an ordered tag list and
//! interpret the known tags into the element's DocRecord.

use crate::model::*;
use regex::Regex;
use std::sync::LazyLock;

// -- Regex patterns -----------------------------------------------------------

static RE_DOC_OPEN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\s*/\*\*").unwrap());

static RE_OPEN_STRIP: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\s*/\*\*\s*").unwrap());

static RE_CLOSE_STRIP: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s*\*/\s*$").unwrap());

// Left-margin decoration of multi-line comments: whitespace, optional '*',
// more whitespace. Lines without the '*' still lose their indentation.
static RE_MARGIN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\s*\*?\s*").unwrap());

// "@xxxxx Lorem ipsum" — tag name plus the first line of its text
static RE_TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^@(\S+)(.*?)\s*$").unwrap());

// Leading '{TYPE}' clause: shortest match to the first '}'
static RE_TYPE_CLAUSE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\s*\{(.*?)\}\s*").unwrap());

// "NAME DESCRIPTION..." after the type clause has been removed
static RE_NAME_REST: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(\S+)\s*(.*)$").unwrap());

// -- Comment association ------------------------------------------------------

/// Decide whether `comment` documents the element declared on
/// `element_line` and, if so, extract its tags into `record`.
///
/// Association requires the comment to end on the line directly above the
/// declaration and to open with `/**` (a plain `/*` never qualifies).
/// Anything else leaves the record untouched.
pub fn associate(record: &mut DocRecord, element_line: u32, comment: Option<&RawComment>) {
    let Some(comment) = comment else {
        return;
    };

    let end = comment.start_line + comment.body.split('\n').count() as u32 - 1;
    if element_line != end + 1 || !RE_DOC_OPEN.is_match(&comment.body) {
        return;
    }

    let interior = RE_OPEN_STRIP.replace(&comment.body, "");
    let interior = RE_CLOSE_STRIP.replace(&interior, "");
    extract_tags(record, &interior);
}

// -- Tag extraction -----------------------------------------------------------

/// Tokenize the comment interior into tags and interpret them into `record`.
pub fn extract_tags(record: &mut DocRecord, interior: &str) {
    for tag in split_tags(interior) {
        interpret_tag(record, &tag);
    }
}

/// Split the interior text into an ordered tag sequence.
///
/// One accumulating tag at a time: an `@name` line closes out the current
/// tag and opens a new one, any other line continues the current tag's
/// text. Text before the first `@` line becomes the nameless description
/// tag. Continuation lines are joined with single spaces.
fn split_tags(interior: &str) -> Vec<Tag> {
    let mut tags: Vec<Tag> = Vec::new();
    let mut curr = Tag::default();

    for line in interior.split('\n') {
        let cleaned = RE_MARGIN.replace(line, "");

        if let Some(caps) = RE_TAG.captures(&cleaned) {
            // Close out the current tag. A comment that opens directly
            // with an @ line has nothing accumulated yet; don't emit an
            // empty nameless tag for it.
            if !(tags.is_empty() && curr.name.is_none() && curr.text.is_empty()) {
                tags.push(curr);
            }
            curr = Tag {
                name: Some(caps[1].to_lowercase()),
                text: caps[2].trim_start().to_string(),
            };
        } else {
            let content = cleaned.trim_end();
            if !content.is_empty() {
                if !curr.text.is_empty() {
                    curr.text.push(' ');
                }
                curr.text.push_str(content);
            }
        }
    }

    if curr.name.is_some() || !curr.text.is_empty() {
        tags.push(curr);
    }

    tags
}

/// Dispatch one tag into the record. Malformed tag text never fails;
/// at worst the tag contributes nothing.
fn interpret_tag(record: &mut DocRecord, tag: &Tag) {
    match tag.name.as_deref() {
        None => {
            record.description = tag.text.clone();
        }
        Some("param") => {
            let (type_annotation, rest) = split_type_clause(&tag.text);
            // No name token means nothing to document; drop the tag.
            let Some(caps) = RE_NAME_REST.captures(rest) else {
                return;
            };
            record.params.push(ParamDoc {
                name: caps[1].to_string(),
                type_annotation,
                description: caps[2].to_string(),
            });
        }
        Some("return" | "returns") => {
            let (type_annotation, rest) = split_type_clause(&tag.text);
            record.returns = Some(ReturnDoc {
                type_annotation,
                description: rest.trim().to_string(),
            });
        }
        Some("type") => {
            let (type_annotation, rest) = split_type_clause(&tag.text);
            record.type_doc = Some(TypeDoc {
                type_annotation,
                description: rest.trim().to_string(),
            });
        }
        Some(other) => {
            record
                .extra
                .entry(other.to_string())
                .or_default()
                .push(tag.text.clone());
        }
    }
}

/// Split a leading `{TYPE}` clause off a tag's text.
///
/// Returns the captured annotation (if any) and the remainder. An
/// unbalanced `{` simply fails to match: no annotation, full text kept.
fn split_type_clause(text: &str) -> (Option<String>, &str) {
    match RE_TYPE_CLAUSE.captures(text) {
        Some(caps) => {
            let end = caps.get(0).map(|m| m.end()).unwrap_or(0);
            (Some(caps[1].to_string()), &text[end..])
        }
        None => (None, text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc_comment(body: &str, start_line: u32) -> RawComment {
        RawComment {
            body: body.to_string(),
            start_line,
        }
    }

    // -- association --

    #[test]
    fn associate_adjacent_comment() {
        let comment = doc_comment("/**\n * A greeting.\n */", 1);
        let mut record = DocRecord::default();
        associate(&mut record, 4, Some(&comment));
        assert_eq!(record.description, "A greeting.");
    }

    #[test]
    fn associate_rejects_gap() {
        // Comment ends on line 3, element on line 5: blank line between.
        let comment = doc_comment("/**\n * A greeting.\n */", 1);
        let mut record = DocRecord::default();
        associate(&mut record, 5, Some(&comment));
        assert!(record.is_empty());
    }

    #[test]
    fn associate_rejects_same_line() {
        let comment = doc_comment("/** inline */", 4);
        let mut record = DocRecord::default();
        associate(&mut record, 4, Some(&comment));
        assert!(record.is_empty());
    }

    #[test]
    fn associate_rejects_plain_block_comment() {
        let comment = doc_comment("/*\n * Not documentation.\n */", 1);
        let mut record = DocRecord::default();
        associate(&mut record, 4, Some(&comment));
        assert!(record.is_empty());
    }

    #[test]
    fn associate_none_is_noop() {
        let mut record = DocRecord::default();
        associate(&mut record, 4, None);
        assert!(record.is_empty());
    }

    #[test]
    fn associate_single_line_doc() {
        let comment = doc_comment("/** One-liner. */", 3);
        let mut record = DocRecord::default();
        associate(&mut record, 4, Some(&comment));
        assert_eq!(record.description, "One-liner.");
    }

    #[test]
    fn associate_indented_opener() {
        let comment = doc_comment("    /**\n     * Indented.\n     */", 1);
        let mut record = DocRecord::default();
        associate(&mut record, 4, Some(&comment));
        assert_eq!(record.description, "Indented.");
    }

    // -- tokenization --

    #[test]
    fn description_only() {
        let mut record = DocRecord::default();
        extract_tags(&mut record, "* Line one.\n* Line two.");
        assert_eq!(record.description, "Line one. Line two.");
        assert!(record.params.is_empty());
        assert!(record.returns.is_none());
    }

    #[test]
    fn multi_line_tag_continuation() {
        let mut record = DocRecord::default();
        extract_tags(
            &mut record,
            "* @param {String} s A value\n*   spanning three\n*   physical lines.",
        );
        assert_eq!(record.params.len(), 1);
        assert_eq!(
            record.params[0].description,
            "A value spanning three physical lines."
        );
    }

    #[test]
    fn tag_lines_without_margin_star() {
        let mut record = DocRecord::default();
        extract_tags(&mut record, "  Summary.\n  @param {int} n Count.");
        assert_eq!(record.description, "Summary.");
        assert_eq!(record.params[0].name, "n");
    }

    #[test]
    fn leading_at_line_emits_no_empty_description_tag() {
        let tags = split_tags("* @param {String} s Value.");
        assert_eq!(tags.len(), 1);
        assert_eq!(tags[0].name.as_deref(), Some("param"));
    }

    #[test]
    fn tag_names_are_lowercased() {
        let mut record = DocRecord::default();
        extract_tags(&mut record, "* @Param {String} s Value.");
        assert_eq!(record.params.len(), 1);
    }

    // -- interpretation --

    #[test]
    fn param_order_and_types() {
        let mut record = DocRecord::default();
        extract_tags(
            &mut record,
            "* @param {String} name The name.\n* @param {boolean} flag A flag.",
        );
        assert_eq!(record.params.len(), 2);
        assert_eq!(
            record.params[0],
            ParamDoc {
                name: "name".to_string(),
                type_annotation: Some("String".to_string()),
                description: "The name.".to_string(),
            }
        );
        assert_eq!(record.params[1].name, "flag");
        assert_eq!(record.params[1].type_annotation.as_deref(), Some("boolean"));
    }

    #[test]
    fn param_without_type_clause() {
        let mut record = DocRecord::default();
        extract_tags(&mut record, "* @param count How many.");
        assert_eq!(record.params[0].name, "count");
        assert_eq!(record.params[0].type_annotation, None);
        assert_eq!(record.params[0].description, "How many.");
    }

    #[test]
    fn param_without_name_is_skipped() {
        let mut record = DocRecord::default();
        extract_tags(&mut record, "* @param {}");
        assert!(record.params.is_empty());
    }

    #[test]
    fn param_bare_is_skipped() {
        let mut record = DocRecord::default();
        extract_tags(&mut record, "* @param");
        assert!(record.params.is_empty());
    }

    #[test]
    fn return_and_returns_are_synonyms() {
        let mut a = DocRecord::default();
        extract_tags(&mut a, "* @return {String} out");
        let mut b = DocRecord::default();
        extract_tags(&mut b, "* @returns {String} out");
        assert_eq!(a.returns, b.returns);
        let ret = a.returns.unwrap();
        assert_eq!(ret.type_annotation.as_deref(), Some("String"));
        assert_eq!(ret.description, "out");
    }

    #[test]
    fn second_return_overwrites_first() {
        let mut record = DocRecord::default();
        extract_tags(&mut record, "* @return {int} first\n* @returns {String} second");
        let ret = record.returns.unwrap();
        assert_eq!(ret.type_annotation.as_deref(), Some("String"));
        assert_eq!(ret.description, "second");
    }

    #[test]
    fn type_tag_gets_its_own_field() {
        let mut record = DocRecord::default();
        extract_tags(&mut record, "* @type {String} a label");
        assert!(record.returns.is_none());
        let ty = record.type_doc.unwrap();
        assert_eq!(ty.type_annotation.as_deref(), Some("String"));
        assert_eq!(ty.description, "a label");
    }

    #[test]
    fn unbalanced_brace_keeps_full_text() {
        let (ty, rest) = split_type_clause("{String value here");
        assert_eq!(ty, None);
        assert_eq!(rest, "{String value here");
    }

    #[test]
    fn type_clause_shortest_match() {
        let (ty, rest) = split_type_clause("{Array} of {String} items");
        assert_eq!(ty.as_deref(), Some("Array"));
        assert_eq!(rest, "of {String} items");
    }

    #[test]
    fn unrecognized_tags_preserved_verbatim() {
        let mut record = DocRecord::default();
        extract_tags(
            &mut record,
            "* @see otherFunc\n* @example foo()\n* @example bar()",
        );
        assert_eq!(record.extra["see"], vec!["otherFunc"]);
        assert_eq!(record.extra["example"], vec!["foo()", "bar()"]);
    }

    #[test]
    fn extraction_is_idempotent() {
        let interior = "* Greets.\n* @param {String} who Target.\n* @return {String} greeting";
        let mut first = DocRecord::default();
        extract_tags(&mut first, interior);
        let mut second = DocRecord::default();
        extract_tags(&mut second, interior);
        assert_eq!(first, second);
    }
}
