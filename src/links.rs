use std::borrow::Cow;
use std::sync::OnceLock;

use regex::{NoExpand, Regex};

/// Legacy admin host as it appears in feed text, with an optional
/// `/YYYY/MM/DD` date path segment that the rewrite discards.
const LEGACY_HOST_PATTERN: &str = r"https://admin\.insights\.ubuntu\.com(/\d{4}/\d{2}/\d{2})?";

static LEGACY_HOST_RE: OnceLock<Regex> = OnceLock::new();

fn legacy_host_re() -> &'static Regex {
    LEGACY_HOST_RE.get_or_init(|| Regex::new(LEGACY_HOST_PATTERN).expect("host pattern is valid"))
}

/// Rewrites legacy admin-host URLs embedded in feed text to a public host.
///
/// Every occurrence of `https://admin.insights.ubuntu.com`, optionally
/// followed by a `/YYYY/MM/DD` date segment, becomes `host`; the date segment
/// is dropped, not appended. Matching is global and case-sensitive, and the
/// replacement is literal (a host containing `$` is inserted verbatim).
///
/// Returns `Cow::Borrowed` when nothing matched.
///
/// # Examples
///
/// ```
/// use blogprep::rewrite_feed_urls;
///
/// let feed = "See https://admin.insights.ubuntu.com/2021/05/04/post";
/// assert_eq!(
///     rewrite_feed_urls(feed, "https://snapcraft.io/blog"),
///     "See https://snapcraft.io/blog/post"
/// );
/// ```
pub fn rewrite_feed_urls<'a>(feed: &'a str, host: &str) -> Cow<'a, str> {
    let rewritten = legacy_host_re().replace_all(feed, NoExpand(host));
    if let Cow::Owned(_) = rewritten {
        tracing::trace!(host, "rewrote legacy feed urls");
    }
    rewritten
}
