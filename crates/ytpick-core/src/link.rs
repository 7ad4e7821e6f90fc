//! Link normalization to the canonical watch-form URL.
//!
//! Every external yt-dlp invocation receives the same canonical
//! `https://www.youtube.com/watch?v=<id>` form, regardless of which
//! YouTube URL flavor the user pasted.

use url::Url;

/// Hosts serving the long-form `/watch` and `/shorts/` routes.
const LONG_FORM_HOSTS: &[&str] = &["youtube.com", "www.youtube.com", "m.youtube.com"];

/// Host serving share-style short links (`youtu.be/<id>`).
const SHORT_LINK_HOST: &str = "youtu.be";

/// Normalizes a user-supplied link into the canonical watch-form URL.
///
/// Recognized inputs:
/// - long-form `/watch?v=<id>` URLs (query parameter `v`)
/// - long-form `/shorts/<id>` URLs (path segment after `/shorts/`)
/// - short-link `youtu.be/<id>` URLs (first non-empty path segment)
///
/// Returns `None` for unparseable input, unknown hosts, or recognized
/// hosts without an extractable identifier. Normalizing an
/// already-canonical URL returns an equal canonical URL.
pub fn normalize(input: &str) -> Option<String> {
    let parsed = Url::parse(input.trim()).ok()?;
    let host = parsed.host_str()?.to_ascii_lowercase();

    let id = if LONG_FORM_HOSTS.contains(&host.as_str()) {
        extract_long_form_id(&parsed)?
    } else if host == SHORT_LINK_HOST {
        extract_short_link_id(&parsed)?
    } else {
        return None;
    };

    if id.is_empty() {
        return None;
    }
    Some(format!("https://www.youtube.com/watch?v={id}"))
}

/// Identifier from a long-form URL: `v` query parameter on the watch
/// route, or the path segment following `/shorts/`.
fn extract_long_form_id(url: &Url) -> Option<String> {
    let path = url.path();
    if path == "/watch" {
        return url
            .query_pairs()
            .find(|(key, _)| key == "v")
            .map(|(_, value)| value.into_owned());
    }
    if let Some(rest) = path.strip_prefix("/shorts/") {
        let segment = rest.split('/').next()?;
        if !segment.is_empty() {
            return Some(segment.to_string());
        }
    }
    None
}

/// Identifier from a short link: the first non-empty path segment.
fn extract_short_link_id(url: &Url) -> Option<String> {
    url.path_segments()?
        .find(|segment| !segment.is_empty())
        .map(|segment| segment.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn watch_url() {
        assert_eq!(
            normalize("https://www.youtube.com/watch?v=dQw4w9WgXcQ").as_deref(),
            Some("https://www.youtube.com/watch?v=dQw4w9WgXcQ")
        );
    }

    #[test]
    fn watch_url_extra_params() {
        assert_eq!(
            normalize("https://www.youtube.com/watch?v=dQw4w9WgXcQ&t=30&feature=share").as_deref(),
            Some("https://www.youtube.com/watch?v=dQw4w9WgXcQ")
        );
    }

    #[test]
    fn bare_and_mobile_hosts() {
        assert_eq!(
            normalize("https://youtube.com/watch?v=abc123def45").as_deref(),
            Some("https://www.youtube.com/watch?v=abc123def45")
        );
        assert_eq!(
            normalize("https://m.youtube.com/watch?v=abc123def45").as_deref(),
            Some("https://www.youtube.com/watch?v=abc123def45")
        );
    }

    #[test]
    fn shorts_url() {
        assert_eq!(
            normalize("https://www.youtube.com/shorts/abc123def45").as_deref(),
            Some("https://www.youtube.com/watch?v=abc123def45")
        );
        assert_eq!(
            normalize("https://www.youtube.com/shorts/abc123def45/extra").as_deref(),
            Some("https://www.youtube.com/watch?v=abc123def45")
        );
    }

    #[test]
    fn short_link() {
        assert_eq!(
            normalize("https://youtu.be/dQw4w9WgXcQ").as_deref(),
            Some("https://www.youtube.com/watch?v=dQw4w9WgXcQ")
        );
        assert_eq!(
            normalize("https://youtu.be/dQw4w9WgXcQ?t=30").as_deref(),
            Some("https://www.youtube.com/watch?v=dQw4w9WgXcQ")
        );
    }

    #[test]
    fn idempotent() {
        let canonical = normalize("https://youtu.be/dQw4w9WgXcQ").unwrap();
        assert_eq!(normalize(&canonical).as_deref(), Some(canonical.as_str()));
    }

    #[test]
    fn rejects_unknown_hosts() {
        assert_eq!(normalize("https://vimeo.com/12345"), None);
        assert_eq!(normalize("https://evil-youtube.com/watch?v=dQw4w9WgXcQ"), None);
    }

    #[test]
    fn rejects_missing_id() {
        assert_eq!(normalize("https://www.youtube.com/watch"), None);
        assert_eq!(normalize("https://www.youtube.com/watch?v="), None);
        assert_eq!(normalize("https://www.youtube.com/shorts/"), None);
        assert_eq!(normalize("https://youtu.be/"), None);
        assert_eq!(normalize("https://www.youtube.com/feed/subscriptions"), None);
    }

    #[test]
    fn rejects_unparseable_input() {
        assert_eq!(normalize(""), None);
        assert_eq!(normalize("not a url at all"), None);
        assert_eq!(normalize("watch?v=dQw4w9WgXcQ"), None);
    }

    #[test]
    fn trims_surrounding_whitespace() {
        assert_eq!(
            normalize("  https://youtu.be/dQw4w9WgXcQ  ").as_deref(),
            Some("https://www.youtube.com/watch?v=dQw4w9WgXcQ")
        );
    }
}
