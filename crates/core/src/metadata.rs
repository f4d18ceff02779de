//! Link-preview metadata for shareable description pages.
//!
//! Shared links carry a human-readable description in a single path segment,
//! words joined by underscores and percent-encoded
//! (`/Remote_Work`, `/Caf%C3%A9_Crew`). The front-end asks the API for the
//! metadata to render into the page head.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

/// Site name appended to every page title.
pub const SITE_NAME: &str = "Famous Since";

/// Open Graph object type for description pages.
const OG_TYPE_WEBSITE: &str = "website";

/// Twitter card variant; the preview image is a wide banner.
const TWITTER_CARD: &str = "summary_large_image";

static UNDERSCORE_RUN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"_+").expect("valid regex"));

/// Site-wide values every metadata record is built from.
#[derive(Debug, Clone)]
pub struct SiteInfo {
    /// Absolute base URL without a trailing slash, e.g. `https://famoussince.com`.
    pub base_url: String,
    /// Path of the fixed preview image relative to `base_url`.
    pub preview_image_path: String,
}

impl SiteInfo {
    pub fn new(base_url: &str, preview_image_path: &str) -> Self {
        let path = preview_image_path.trim();
        let path = if path.starts_with('/') {
            path.to_string()
        } else {
            format!("/{path}")
        };
        Self {
            base_url: base_url.trim().trim_end_matches('/').to_string(),
            preview_image_path: path,
        }
    }

    fn preview_image_url(&self) -> String {
        format!("{}{}", self.base_url, self.preview_image_path)
    }
}

/// Metadata rendered into the `<head>` of a description page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageMetadata {
    pub title: String,
    pub description: String,
    pub canonical_url: String,
    pub image: String,
    pub open_graph: OpenGraph,
    pub twitter: TwitterCard,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OpenGraph {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub site_name: &'static str,
    pub title: String,
    pub description: String,
    pub url: String,
    pub image: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TwitterCard {
    pub card: &'static str,
    pub title: String,
    pub description: String,
    pub image: String,
}

/// Recover the human-readable description from an encoded path segment.
///
/// Percent-escapes are decoded first, then each run of underscores becomes a
/// single space.
///
/// ```
/// use famous_core::metadata::decode_description;
///
/// assert_eq!(decode_description("Remote_Work"), "Remote Work");
/// assert_eq!(decode_description("Caf%C3%A9__Crew"), "Café Crew");
/// ```
pub fn decode_description(segment: &str) -> String {
    let decoded = percent_decode(segment);
    UNDERSCORE_RUN_RE.replace_all(&decoded, " ").into_owned()
}

/// Build the full metadata record for a raw (still encoded) path segment.
pub fn build_page_metadata(site: &SiteInfo, segment: &str) -> PageMetadata {
    let description = decode_description(segment);
    let title = if description.trim().is_empty() {
        SITE_NAME.to_string()
    } else {
        format!("{} | {SITE_NAME}", description.trim())
    };
    let canonical_url = format!("{}/{}", site.base_url, segment.trim_start_matches('/'));
    let image = site.preview_image_url();

    PageMetadata {
        open_graph: OpenGraph {
            kind: OG_TYPE_WEBSITE,
            site_name: SITE_NAME,
            title: title.clone(),
            description: description.clone(),
            url: canonical_url.clone(),
            image: image.clone(),
        },
        twitter: TwitterCard {
            card: TWITTER_CARD,
            title: title.clone(),
            description: description.clone(),
            image: image.clone(),
        },
        title,
        description,
        canonical_url,
        image,
    }
}

/// Decode `%XX` escapes. Malformed escapes are kept verbatim and invalid
/// UTF-8 is replaced with U+FFFD.
fn percent_decode(input: &str) -> String {
    let bytes = input.as_bytes();
    let mut out: Vec<u8> = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' && i + 2 < bytes.len() {
            let hi = (bytes[i + 1] as char).to_digit(16);
            let lo = (bytes[i + 2] as char).to_digit(16);
            if let (Some(hi), Some(lo)) = (hi, lo) {
                out.push(((hi << 4) | lo) as u8);
                i += 3;
                continue;
            }
        }
        out.push(bytes[i]);
        i += 1;
    }
    String::from_utf8_lossy(&out).into_owned()
}
