//! Title and live-status metadata from the `-J` probe document.

use serde::Deserialize;

/// The slice of the yt-dlp JSON probe this tool consumes. Everything else
/// in the document is ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProbeInfo {
    pub title: Option<String>,
    #[serde(default)]
    pub is_live: Option<bool>,
    #[serde(default)]
    pub live_status: Option<String>,
}

impl ProbeInfo {
    /// Parses the probe document. Malformed JSON yields `None`; the probe
    /// is advisory and its absence never fails the flow.
    pub fn from_json(raw: &str) -> Option<Self> {
        serde_json::from_str(raw).ok()
    }

    /// True when the probe marks the video as currently live.
    pub fn is_live_now(&self) -> bool {
        self.is_live.unwrap_or(false) || self.live_status.as_deref() == Some("is_live")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_title() {
        let info = ProbeInfo::from_json(r#"{"title": "A Video", "duration": 63}"#).unwrap();
        assert_eq!(info.title.as_deref(), Some("A Video"));
        assert!(!info.is_live_now());
    }

    #[test]
    fn missing_fields_default() {
        let info = ProbeInfo::from_json("{}").unwrap();
        assert_eq!(info.title, None);
        assert!(!info.is_live_now());
    }

    #[test]
    fn is_live_flag() {
        let info = ProbeInfo::from_json(r#"{"title": "t", "is_live": true}"#).unwrap();
        assert!(info.is_live_now());
    }

    #[test]
    fn live_status_string() {
        let info = ProbeInfo::from_json(r#"{"live_status": "is_live"}"#).unwrap();
        assert!(info.is_live_now());

        let vod = ProbeInfo::from_json(r#"{"live_status": "was_live"}"#).unwrap();
        assert!(!vod.is_live_now());
    }

    #[test]
    fn malformed_json_is_none() {
        assert!(ProbeInfo::from_json("").is_none());
        assert!(ProbeInfo::from_json("ERROR: not json").is_none());
    }
}
