//! Sitemap module
//!
//! Turns the configured page paths and service slugs into a flat list of
//! crawlable URL entries. Building is pure; rendering to `sitemap.xml` and
//! `robots.txt` lives in [`render`].

mod render;

pub use render::{render_robots, render_xml};

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

/// How often crawlers should expect a page to change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeFrequency {
    Daily,
    Weekly,
}

impl ChangeFrequency {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Weekly => "weekly",
        }
    }
}

impl fmt::Display for ChangeFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One record in the generated sitemap
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SitemapEntry {
    pub url: String,
    pub last_modified: DateTime<Utc>,
    pub change_frequency: ChangeFrequency,
    /// Relative importance in `[0, 1]`
    pub priority: f32,
}

pub const ROOT_PRIORITY: f32 = 1.0;
pub const PAGE_PRIORITY: f32 = 0.8;
pub const SERVICE_PRIORITY: f32 = 0.7;

/// Build the sitemap for `base_url`.
///
/// Static paths come first, then `/services/<slug>` for each slug, both in
/// input order. The empty path is the site root. Every entry is stamped with
/// `now`.
pub fn build_sitemap(
    base_url: &str,
    static_paths: &[String],
    service_slugs: &[String],
    now: DateTime<Utc>,
) -> Vec<SitemapEntry> {
    let base = base_url.trim_end_matches('/');

    let pages = static_paths.iter().map(|path| {
        let is_root = path.is_empty();
        SitemapEntry {
            url: format!("{base}{path}"),
            last_modified: now,
            change_frequency: if is_root {
                ChangeFrequency::Daily
            } else {
                ChangeFrequency::Weekly
            },
            priority: if is_root { ROOT_PRIORITY } else { PAGE_PRIORITY },
        }
    });

    let services = service_slugs.iter().map(|slug| SitemapEntry {
        url: format!("{base}/services/{slug}"),
        last_modified: now,
        change_frequency: ChangeFrequency::Weekly,
        priority: SERVICE_PRIORITY,
    });

    pages.chain(services).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    const BASE: &str = "https://www.example-energy.com";

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| (*s).to_string()).collect()
    }

    fn fixed_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap()
    }

    /// Fields that must be stable across runs (timestamp excluded)
    fn stable_fields(entries: &[SitemapEntry]) -> Vec<(String, ChangeFrequency, f32)> {
        entries
            .iter()
            .map(|e| (e.url.clone(), e.change_frequency, e.priority))
            .collect()
    }

    #[test]
    fn test_entry_count() {
        let paths = strings(&["", "/about", "/services", "/contact"]);
        let slugs = strings(&["ndt", "solar-installation", "wind-energy"]);
        let entries = build_sitemap(BASE, &paths, &slugs, fixed_time());
        assert_eq!(entries.len(), paths.len() + slugs.len());
    }

    #[test]
    fn test_root_and_page_metadata() {
        let paths = strings(&["", "/about", "/services"]);
        let entries = build_sitemap(BASE, &paths, &[], fixed_time());

        assert_eq!(entries[0].url, BASE);
        assert_eq!(entries[0].change_frequency, ChangeFrequency::Daily);
        assert!((entries[0].priority - 1.0).abs() < f32::EPSILON);

        for entry in &entries[1..] {
            assert_eq!(entry.change_frequency, ChangeFrequency::Weekly);
            assert!((entry.priority - 0.8).abs() < f32::EPSILON);
        }
        assert_eq!(entries[1].url, "https://www.example-energy.com/about");
    }

    #[test]
    fn test_service_metadata() {
        let slugs = strings(&["ndt"]);
        let entries = build_sitemap(BASE, &[], &slugs, fixed_time());

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].url, "https://www.example-energy.com/services/ndt");
        assert_eq!(entries[0].change_frequency, ChangeFrequency::Weekly);
        assert!((entries[0].priority - 0.7).abs() < f32::EPSILON);
    }

    #[test]
    fn test_order_preserved() {
        let paths = strings(&["/c", "/a", "/b"]);
        let slugs = strings(&["y", "x"]);
        let urls: Vec<String> = build_sitemap("https://s.test", &paths, &slugs, fixed_time())
            .into_iter()
            .map(|e| e.url)
            .collect();

        assert_eq!(
            urls,
            vec![
                "https://s.test/c",
                "https://s.test/a",
                "https://s.test/b",
                "https://s.test/services/y",
                "https://s.test/services/x",
            ]
        );
    }

    #[test]
    fn test_idempotent_apart_from_timestamp() {
        let paths = strings(&["", "/about"]);
        let slugs = strings(&["ndt", "maintenance"]);
        let first = build_sitemap(BASE, &paths, &slugs, Utc::now());
        let second = build_sitemap(BASE, &paths, &slugs, Utc::now());
        assert_eq!(stable_fields(&first), stable_fields(&second));
    }

    #[test]
    fn test_trailing_slash_on_base() {
        let paths = strings(&["", "/about"]);
        let with_slash = build_sitemap("https://s.test/", &paths, &[], fixed_time());
        let without = build_sitemap("https://s.test", &paths, &[], fixed_time());
        assert_eq!(with_slash, without);
    }

    #[test]
    fn test_shared_timestamp_and_json_shape() {
        let entries = build_sitemap(BASE, &strings(&[""]), &strings(&["ndt"]), fixed_time());
        assert!(entries.iter().all(|e| e.last_modified == fixed_time()));

        let json = serde_json::to_value(&entries[0]).unwrap();
        assert_eq!(json["changeFrequency"], "daily");
        assert_eq!(json["lastModified"], "2024-03-01T12:00:00Z");
        assert_eq!(json["priority"], 1.0);
    }
}
