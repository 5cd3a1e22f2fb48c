use chrono::NaiveDateTime;
use serde_json::Value;
use thiserror::Error;

use crate::html::strip_tags;

/// Maximum excerpt length in characters, before the ellipsis marker.
pub const EXCERPT_LIMIT: usize = 340;

/// Marker appended to every generated excerpt.
pub const EXCERPT_ELLIPSIS: &str = " […]";

/// Timestamp format the content API uses for `date_gmt`.
///
/// This is a strict external contract: a record that does not match it is a
/// data-integrity failure, not a cue to try alternate formats.
const DATE_GMT_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Human-readable date format: day without leading zero, full month name,
/// four-digit year ("9 June 2023").
const DISPLAY_DATE_FORMAT: &str = "%-d %B %Y";

/// Errors surfaced while enriching an article record.
///
/// None of these are recovered internally: a malformed upstream date should
/// fail the page render for that article rather than display silently wrong.
#[derive(Debug, Error)]
pub enum TransformError {
    /// `date_gmt` was present but did not match the content API's timestamp
    /// format.
    #[error("article date_gmt {value:?} is not a YYYY-MM-DDTHH:MM:SS timestamp: {source}")]
    MalformedDate {
        value: String,
        #[source]
        source: chrono::format::ParseError,
    },

    /// `date_gmt` was present but not a JSON string.
    #[error("article date_gmt must be a string, found {found}")]
    DateNotString { found: &'static str },

    /// The article record itself was not a JSON object.
    #[error("article record must be a JSON object")]
    NotAnObject,
}

/// Enriches an article record in place.
///
/// The record is mutated, not copied; the caller keeps ownership and sees the
/// enriched fields on its own value. Steps, in order:
///
/// 1. `image` is set to `featured_image` (JSON null when `None`).
/// 2. `author` is set to `author` (JSON null when `None`).
/// 3. If `date_gmt` is present it is parsed strictly as
///    `YYYY-MM-DDTHH:MM:SS` and `date` is set to the human-readable form
///    ("9 June 2023"). A mismatch is a [`TransformError::MalformedDate`].
/// 4. If `excerpt.rendered` is a string, it is stripped of markup, truncated
///    to [`EXCERPT_LIMIT`] characters, and stored as `excerpt.raw` with the
///    [`EXCERPT_ELLIPSIS`] marker appended. The marker is appended whenever
///    an excerpt exists, whether or not truncation actually occurred — this
///    matches the established pipeline behavior.
///
/// A missing `excerpt`, or one without a string `rendered`, is a valid
/// nothing-to-do state: excerpt fields are left untouched, not defaulted.
/// All other fields on the record pass through unchanged.
///
/// Repeated application is stable for `image`/`author`/`date`, but not for
/// `excerpt.raw`, which is derived from `excerpt.rendered` on every call and
/// always re-appends the marker.
///
/// # Examples
///
/// ```
/// use blogprep::transform_article;
/// use serde_json::json;
///
/// let mut article = json!({
///     "title": "A post",
///     "date_gmt": "2023-06-09T10:00:00",
///     "excerpt": { "rendered": "<p>Short excerpt</p>" },
/// });
/// transform_article(&mut article, None, Some("jo")).unwrap();
///
/// assert_eq!(article["date"], "9 June 2023");
/// assert_eq!(article["author"], "jo");
/// assert_eq!(article["excerpt"]["raw"], "Short excerpt […]");
/// assert_eq!(article["title"], "A post"); // untouched
/// ```
pub fn transform_article(
    article: &mut Value,
    featured_image: Option<&str>,
    author: Option<&str>,
) -> Result<(), TransformError> {
    let obj = article.as_object_mut().ok_or(TransformError::NotAnObject)?;

    obj.insert("image".to_string(), optional_str(featured_image));
    obj.insert("author".to_string(), optional_str(author));

    if let Some(date_gmt) = obj.get("date_gmt") {
        let value = date_gmt
            .as_str()
            .ok_or_else(|| TransformError::DateNotString {
                found: json_type_name(date_gmt),
            })?;
        let parsed = NaiveDateTime::parse_from_str(value, DATE_GMT_FORMAT).map_err(|source| {
            TransformError::MalformedDate {
                value: value.to_string(),
                source,
            }
        })?;
        let formatted = parsed.format(DISPLAY_DATE_FORMAT).to_string();
        tracing::trace!(date_gmt = value, date = %formatted, "reformatted article date");
        obj.insert("date".to_string(), Value::String(formatted));
    }

    let raw_excerpt = obj
        .get("excerpt")
        .and_then(|excerpt| excerpt.get("rendered"))
        .and_then(Value::as_str)
        .map(|rendered| truncate_excerpt(&strip_tags(rendered)));
    if let Some(raw) = raw_excerpt {
        // `excerpt` is known to be an object: `rendered` was read out of it
        if let Some(excerpt) = obj.get_mut("excerpt").and_then(Value::as_object_mut) {
            excerpt.insert("raw".to_string(), Value::String(raw));
        }
    }

    Ok(())
}

/// Truncates a stripped excerpt to [`EXCERPT_LIMIT`] characters and appends
/// the ellipsis marker.
///
/// The last three characters of the candidate are scrubbed of any literal
/// `[`, `…`, or `]` first, so a truncation point that lands inside an
/// existing marker does not produce a doubled one.
fn truncate_excerpt(stripped: &str) -> String {
    let candidate: Vec<char> = stripped.chars().take(EXCERPT_LIMIT).collect();
    let split = candidate.len().saturating_sub(3);

    let mut raw = String::with_capacity(stripped.len().min(EXCERPT_LIMIT * 4) + 8);
    raw.extend(&candidate[..split]);
    raw.extend(
        candidate[split..]
            .iter()
            .filter(|&&c| !matches!(c, '[' | '…' | ']')),
    );
    raw.push_str(EXCERPT_ELLIPSIS);
    raw
}

fn optional_str(value: Option<&str>) -> Value {
    match value {
        Some(s) => Value::String(s.to_string()),
        None => Value::Null,
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
