use std::sync::OnceLock;

use regex::Regex;

/// Matches one markup tag: an opening `<` up to the first following `>`.
///
/// Deliberately not a full HTML parser. Comments, script/style contents, and
/// attributes containing `>` are mishandled the same way the upstream CMS
/// pipeline mishandles them; excerpt fragments in practice are simple
/// paragraph markup where this pattern is sufficient.
const TAG_PATTERN: &str = "<.*?>";

static TAG_RE: OnceLock<Regex> = OnceLock::new();

fn tag_re() -> &'static Regex {
    TAG_RE.get_or_init(|| Regex::new(TAG_PATTERN).expect("tag pattern is valid"))
}

/// Removes markup from an HTML fragment.
///
/// Three passes, in order:
///
/// 1. Every `<`…`>` span is deleted (non-greedy: each `<` closes at the first
///    `>` after it). Unterminated tags are left in place.
/// 2. HTML character entities are decoded (`&amp;` → `&`, numeric references,
///    etc.). Decoding happens *after* tag removal, so encoded angle brackets
///    survive into the output.
/// 3. Newline characters are removed entirely, not replaced with a space, so
///    words adjacent across a line break concatenate.
///
/// Never fails; an empty fragment maps to an empty string.
///
/// # Examples
///
/// ```
/// use blogprep::strip_tags;
///
/// assert_eq!(strip_tags("<p>Hello &amp; welcome</p>\nLine2"), "Hello & welcomeLine2");
/// assert_eq!(strip_tags("&lt;b&gt;"), "<b>");
/// assert_eq!(strip_tags(""), "");
/// ```
pub fn strip_tags(raw_html: &str) -> String {
    let without_tags = tag_re().replace_all(raw_html, "");
    let decoded = html_escape::decode_html_entities(without_tags.as_ref());
    decoded.replace('\n', "")
}
