use chrono::NaiveDate;

use crate::{config::SiteConfig, search::escape_html};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChangeFreq {
    Daily,
    Monthly,
}

impl ChangeFreq {
    pub fn as_str(self) -> &'static str {
        match self {
            ChangeFreq::Daily => "daily",
            ChangeFreq::Monthly => "monthly",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SitemapEntry {
    pub loc: String,
    pub priority: &'static str,
    pub changefreq: ChangeFreq,
}

// fixed pages, then category indexes, then the article pages
//
// articles are the site-relative urls of whatever pages exist on disk, not the search
// catalog, which only covers part of the site
pub fn entries(config: &SiteConfig, articles: &[String]) -> Vec<SitemapEntry> {
    let entry = |path: &str, priority, changefreq| SitemapEntry {
        loc: config.url_for(path),
        priority,
        changefreq,
    };

    let mut entries = vec![
        entry("/", "1.0", ChangeFreq::Daily),
        entry("/about.html", "0.8", ChangeFreq::Monthly),
        entry("/contact.html", "0.8", ChangeFreq::Monthly),
        entry("/articles/", "0.9", ChangeFreq::Daily),
    ];

    for category in &config.categories {
        entries.push(entry(&format!("/articles/{category}/"), "0.8", ChangeFreq::Daily));
    }

    for url in articles {
        entries.push(entry(url, "0.7", ChangeFreq::Monthly));
    }

    entries
}

pub fn render(entries: &[SitemapEntry], lastmod: NaiveDate) -> String {
    let lastmod = lastmod.format("%Y-%m-%d");

    let mut doc = String::from(concat!(
        r#"<?xml version="1.0" encoding="UTF-8"?>"#,
        "\n",
        r#"<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">"#,
    ));

    for entry in entries {
        doc.push_str(&format!(
            "\n    <url>\n        <loc>{}</loc>\n        <lastmod>{lastmod}</lastmod>\n        <changefreq>{}</changefreq>\n        <priority>{}</priority>\n    </url>",
            escape_html(&entry.loc),
            entry.changefreq.as_str(),
            entry.priority,
        ));
    }

    doc.push_str("\n</urlset>\n");
    doc
}
