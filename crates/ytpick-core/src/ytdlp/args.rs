//! Pure argument builders for the three yt-dlp command shapes.

use std::path::Path;

use super::combined_sort_order;

/// `-J` probe: title and live-status metadata as one JSON document.
pub fn probe_args(js_runtime: &str, link: &str) -> Vec<String> {
    vec![
        "--js-runtimes".to_string(),
        js_runtime.to_string(),
        "-J".to_string(),
        "--no-warnings".to_string(),
        link.to_string(),
    ]
}

/// `-F` listing with the forced combined sort order.
pub fn list_args(js_runtime: &str, link: &str) -> Vec<String> {
    vec![
        "--js-runtimes".to_string(),
        js_runtime.to_string(),
        "--format-sort-force".to_string(),
        "-F".to_string(),
        "-S".to_string(),
        combined_sort_order(),
        link.to_string(),
    ]
}

/// Quiet download; yt-dlp renders its own progress meter and names the
/// output after the video title inside `output_dir`.
pub fn download_args(
    js_runtime: &str,
    format_expression: &str,
    output_dir: &Path,
    concurrent_fragments: u32,
    link: &str,
) -> Vec<String> {
    let template = output_dir.join("%(title)s.%(ext)s");
    vec![
        "--js-runtimes".to_string(),
        js_runtime.to_string(),
        "-q".to_string(),
        "--no-warnings".to_string(),
        "--progress".to_string(),
        "--concurrent-fragments".to_string(),
        concurrent_fragments.to_string(),
        "-f".to_string(),
        format_expression.to_string(),
        "-o".to_string(),
        template.to_string_lossy().into_owned(),
        link.to_string(),
    ]
}
