//! Format-table parsing: eligible listing rows into ordered id → row catalogs.
//!
//! The listing tool's `-F` report is a stable line-oriented text contract:
//! each selectable stream is one row whose leading token is the stream
//! identifier. Rows are filtered here by literal substring markers, never
//! re-derived from a schema.

/// Ordered mapping of stream identifier → full descriptor row.
///
/// Keys are unique; insertion order matches first appearance in the source
/// text. The catalogs are tiny (a handful of rows), so lookup is linear.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    entries: Vec<(String, String)>,
}

impl Catalog {
    /// Inserts a row; an existing identifier has its row replaced in place
    /// (last write wins, key position unchanged).
    pub fn insert(&mut self, id: String, row: String) {
        if let Some(entry) = self.entries.iter_mut().find(|(key, _)| *key == id) {
            entry.1 = row;
        } else {
            self.entries.push((id, row));
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entries.iter().any(|(key, _)| key == id)
    }

    pub fn get(&self, id: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(key, _)| key == id)
            .map(|(_, row)| row.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Identifiers in insertion order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    /// Descriptor rows in insertion order.
    pub fn rows(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(_, row)| row.as_str())
    }
}

/// The two catalogs produced from one listing: video and audio streams.
///
/// Built once per probe cycle and discarded when a new link is submitted.
#[derive(Debug, Clone, Default)]
pub struct StreamCatalog {
    pub video: Catalog,
    pub audio: Catalog,
}

impl StreamCatalog {
    /// True when neither catalog holds a single eligible stream
    /// (the "nothing available" outcome, distinct from a parse fault).
    pub fn is_empty(&self) -> bool {
        self.video.is_empty() && self.audio.is_empty()
    }
}

/// Parses the raw listing text into video/audio catalogs.
///
/// A line is a candidate row only if it starts (after leading whitespace)
/// with a decimal numeral; its identifier is the first whitespace-delimited
/// token. A candidate row is:
/// - video when it contains "video" (case-insensitive) and any of the
///   `resolutions` tokens as a literal substring;
/// - audio when it contains "audio only" (case-insensitive).
///
/// A row matching neither is dropped. A degenerate row matching both lands
/// in both catalogs, deliberately. Empty or malformed input yields two
/// empty catalogs.
pub fn parse_formats(raw: &str, resolutions: &[String]) -> StreamCatalog {
    let mut catalog = StreamCatalog::default();
    for line in raw.lines() {
        let trimmed = line.trim_start();
        if !trimmed.starts_with(|c: char| c.is_ascii_digit()) {
            continue;
        }
        let id = match trimmed.split_whitespace().next() {
            Some(token) => token,
            None => continue,
        };

        let lower = line.to_lowercase();
        if lower.contains("video") && resolutions.iter().any(|res| line.contains(res.as_str())) {
            catalog.video.insert(id.to_string(), line.to_string());
        }
        if lower.contains("audio only") {
            catalog.audio.insert(id.to_string(), line.to_string());
        }
    }
    catalog
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolutions() -> Vec<String> {
        ["2160", "1440", "1080"].iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn audio_row() {
        let catalog = parse_formats("140 m4a audio only 128k", &resolutions());
        assert_eq!(catalog.audio.get("140"), Some("140 m4a audio only 128k"));
        assert!(catalog.video.is_empty());
    }

    #[test]
    fn video_row() {
        let catalog = parse_formats("399 mp4 video 1080p", &resolutions());
        assert_eq!(catalog.video.get("399"), Some("399 mp4 video 1080p"));
        assert!(catalog.audio.is_empty());
    }

    #[test]
    fn row_without_leading_digits_excluded() {
        let raw = "ID  EXT  RESOLUTION\nformat video 1080p\n--- audio only ---";
        let catalog = parse_formats(raw, &resolutions());
        assert!(catalog.is_empty());
    }

    #[test]
    fn video_requires_acceptable_resolution() {
        let catalog = parse_formats("18 mp4 video 360p", &resolutions());
        assert!(catalog.video.is_empty());
    }

    #[test]
    fn video_requires_video_marker() {
        let catalog = parse_formats("616 webm 1080p premium", &resolutions());
        assert!(catalog.video.is_empty());
    }

    #[test]
    fn classification_is_case_insensitive() {
        let catalog = parse_formats("140 m4a AUDIO ONLY\n399 mp4 VIDEO 2160p", &resolutions());
        assert!(catalog.audio.contains("140"));
        assert!(catalog.video.contains("399"));
    }

    #[test]
    fn leading_whitespace_allowed() {
        let catalog = parse_formats("   140 m4a audio only", &resolutions());
        assert!(catalog.audio.contains("140"));
    }

    #[test]
    fn insertion_order_preserved() {
        let raw = "251 webm audio only\n140 m4a audio only\n139 m4a audio only";
        let catalog = parse_formats(raw, &resolutions());
        let ids: Vec<&str> = catalog.audio.ids().collect();
        assert_eq!(ids, ["251", "140", "139"]);
    }

    #[test]
    fn duplicate_id_last_write_wins() {
        let raw = "140 m4a audio only 128k\n140 m4a audio only 256k";
        let catalog = parse_formats(raw, &resolutions());
        assert_eq!(catalog.audio.len(), 1);
        assert_eq!(catalog.audio.get("140"), Some("140 m4a audio only 256k"));
    }

    #[test]
    fn degenerate_row_lands_in_both_catalogs() {
        let catalog = parse_formats("999 odd video 1080p audio only", &resolutions());
        assert!(catalog.video.contains("999"));
        assert!(catalog.audio.contains("999"));
    }

    #[test]
    fn empty_input_yields_empty_catalogs() {
        assert!(parse_formats("", &resolutions()).is_empty());
        assert!(parse_formats("\n\n\n", &resolutions()).is_empty());
    }

    #[test]
    fn identifier_is_the_full_leading_token() {
        let catalog = parse_formats("616-drc mp4 video 1080p", &resolutions());
        assert!(catalog.video.contains("616-drc"));
    }
}
