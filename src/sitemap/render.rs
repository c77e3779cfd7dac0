// sitemap.xml and robots.txt rendering

use chrono::SecondsFormat;
use std::fmt::Write;

use super::SitemapEntry;

const XML_HEADER: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;
const URLSET_OPEN: &str = r#"<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">"#;

/// Render entries as a sitemaps.org `<urlset>` document
pub fn render_xml(entries: &[SitemapEntry]) -> String {
    let mut xml = String::with_capacity(128 + entries.len() * 192);
    xml.push_str(XML_HEADER);
    xml.push('\n');
    xml.push_str(URLSET_OPEN);
    xml.push('\n');

    for entry in entries {
        // Writing into a String cannot fail
        let _ = write!(
            xml,
            "<url>\n<loc>{}</loc>\n<lastmod>{}</lastmod>\n<changefreq>{}</changefreq>\n<priority>{:.1}</priority>\n</url>\n",
            escape_xml(&entry.url),
            entry
                .last_modified
                .to_rfc3339_opts(SecondsFormat::Secs, true),
            entry.change_frequency,
            entry.priority,
        );
    }

    xml.push_str("</urlset>\n");
    xml
}

/// robots.txt allowing everything and advertising the sitemap
pub fn render_robots(base_url: &str) -> String {
    format!(
        "User-agent: *\nAllow: /\n\nSitemap: {}/sitemap.xml\n",
        base_url.trim_end_matches('/')
    )
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sitemap::build_sitemap;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_render_xml() {
        let now = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
        let entries = build_sitemap(
            "https://s.test",
            &[String::new(), "/about".to_string()],
            &["ndt".to_string()],
            now,
        );
        let xml = render_xml(&entries);

        assert!(xml.starts_with(XML_HEADER));
        assert_eq!(xml.matches("<url>").count(), 3);
        assert!(xml.contains("<loc>https://s.test</loc>"));
        assert!(xml.contains("<loc>https://s.test/services/ndt</loc>"));
        assert!(xml.contains("<lastmod>2024-03-01T12:00:00Z</lastmod>"));
        assert!(xml.contains("<changefreq>daily</changefreq>\n<priority>1.0</priority>"));
        assert!(xml.contains("<priority>0.8</priority>"));
        assert!(xml.contains("<priority>0.7</priority>"));
        assert!(xml.trim_end().ends_with("</urlset>"));
    }

    #[test]
    fn test_loc_is_escaped() {
        let now = Utc::now();
        let entries = build_sitemap("https://s.test", &["/a?x=1&y=2".to_string()], &[], now);
        let xml = render_xml(&entries);
        assert!(xml.contains("<loc>https://s.test/a?x=1&amp;y=2</loc>"));
    }

    #[test]
    fn test_robots() {
        let robots = render_robots("https://s.test/");
        assert!(robots.starts_with("User-agent: *\n"));
        assert!(robots.contains("Sitemap: https://s.test/sitemap.xml"));
    }
}
