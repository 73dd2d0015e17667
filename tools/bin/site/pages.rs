use std::{
    collections::HashSet,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use tracing::{debug, warn};
use walkdir::{DirEntry, WalkDir};

use common::catalog::{ARTICLES_PREFIX, ArticleRecord};

// differences between the compiled catalog and the generated article pages
#[derive(Debug, Default, PartialEq)]
pub struct CheckReport {
    // catalog urls with no page behind them, these are dead links in search results
    pub missing: Vec<String>,
    // pages on disk that search can never find
    pub uncatalogued: Vec<PathBuf>,
}

impl CheckReport {
    pub fn is_clean(&self) -> bool {
        self.missing.is_empty() && self.uncatalogued.is_empty()
    }
}

pub fn check_site(site_root: &Path, catalog: &[ArticleRecord]) -> Result<CheckReport> {
    let articles = site_root.join(ARTICLES_PREFIX.trim_start_matches('/'));

    let on_disk = if articles.is_dir() {
        article_pages(site_root, &articles)?
    } else {
        warn!("no articles directory at {}", articles.display());
        HashSet::new()
    };

    let catalogued: HashSet<PathBuf> = catalog
        .iter()
        .map(|record| PathBuf::from(record.file_path()))
        .collect();

    let missing = catalog
        .iter()
        .filter(|record| !on_disk.contains(&PathBuf::from(record.file_path())))
        .map(|record| record.url.to_owned())
        .collect();

    let mut uncatalogued: Vec<PathBuf> = on_disk.difference(&catalogued).cloned().collect();
    uncatalogued.sort();

    Ok(CheckReport {
        missing,
        uncatalogued,
    })
}

// article urls for the sitemap, one directory per configured category
//
// category directories that do not exist simply contribute nothing
pub fn article_urls(site_root: &Path, categories: &[String]) -> Result<Vec<String>> {
    let articles = site_root.join(ARTICLES_PREFIX.trim_start_matches('/'));
    let mut urls = Vec::new();

    for category in categories {
        let dir = articles.join(category);
        if !dir.is_dir() {
            warn!("no article directory for {category}");
            continue;
        }

        let mut names: Vec<String> = Vec::new();
        for entry in WalkDir::new(&dir).min_depth(1).max_depth(1) {
            let entry = entry.with_context(|| format!("failed to read {}", dir.display()))?;

            if is_article_page(&entry) {
                names.push(entry.file_name().to_string_lossy().into_owned());
            }
        }
        names.sort();

        debug!("found {} {category} articles", names.len());
        urls.extend(
            names
                .into_iter()
                .map(|name| format!("{ARTICLES_PREFIX}/{category}/{name}")),
        );
    }

    Ok(urls)
}

// html pages other than the category index pages
fn is_article_page(entry: &DirEntry) -> bool {
    let path = entry.path();

    entry.file_type().is_file()
        && path.extension().is_some_and(|ext| ext == "html")
        && path.file_name().is_none_or(|name| name != "index.html")
}

// every article page relative to the site root
fn article_pages(site_root: &Path, articles: &Path) -> Result<HashSet<PathBuf>> {
    let mut pages = HashSet::new();

    for entry in WalkDir::new(articles) {
        let entry = entry.context("failed to walk articles directory")?;
        let path = entry.path();

        if !is_article_page(&entry) {
            continue;
        }

        let relative = path
            .strip_prefix(site_root)
            .context("article outside site root")?
            .to_path_buf();

        debug!("found article page {}", relative.display());
        pages.insert(relative);
    }

    Ok(pages)
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::fs;

    use chrono::NaiveDate;
    use common::{config::SiteConfig, sitemap};
    use tempfile::TempDir;

    const CATALOG: &[ArticleRecord] = &[
        ArticleRecord::new("The Diet Revolution", "Food", "/articles/food/diet.html"),
        ArticleRecord::new("The Logic Revolution", "Philosophy", "/articles/philosophy/logic.html"),
    ];

    fn site(pages: &[&str]) -> TempDir {
        let dir = TempDir::new().unwrap();

        for page in pages {
            let path = dir.path().join(page);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(path, "<html></html>").unwrap();
        }

        dir
    }

    #[test]
    fn matching_site_is_clean() {
        let dir = site(&[
            "articles/food/diet.html",
            "articles/food/index.html",
            "articles/philosophy/logic.html",
            "articles/philosophy/notes.txt",
        ]);

        let report = check_site(dir.path(), CATALOG).unwrap();
        assert!(report.is_clean(), "{report:?}");
    }

    #[test]
    fn reports_both_directions() {
        let dir = site(&["articles/food/diet.html", "articles/culture/film.html"]);

        let report = check_site(dir.path(), CATALOG).unwrap();

        assert_eq!(report.missing, vec!["/articles/philosophy/logic.html"]);
        assert_eq!(report.uncatalogued, vec![PathBuf::from("articles/culture/film.html")]);
    }

    #[test]
    fn sitemap_urls_come_from_disk() {
        let dir = site(&[
            "articles/science/x.html",
            "articles/science/index.html",
            "articles/food/diet.html",
            "articles/food/b.html",
            "articles/unlisted/hidden.html",
        ]);
        let categories = vec![String::from("science"), String::from("tech"), String::from("food")];

        let urls = article_urls(dir.path(), &categories).unwrap();

        assert_eq!(
            urls,
            vec![
                "/articles/science/x.html",
                "/articles/food/b.html",
                "/articles/food/diet.html",
            ]
        );
    }

    #[test]
    fn uncatalogued_pages_reach_the_sitemap() {
        let dir = site(&["articles/science/x.html", "articles/food/diet.html"]);
        let config = SiteConfig {
            site_root: dir.path().to_path_buf(),
            ..SiteConfig::default()
        };

        let urls = article_urls(&config.site_root, &config.categories).unwrap();
        let doc = sitemap::render(&sitemap::entries(&config, &urls), NaiveDate::MIN);

        assert!(doc.contains("<loc>https://deitheon.com/articles/science/x.html</loc>"));
        assert!(doc.contains("<loc>https://deitheon.com/articles/food/diet.html</loc>"));
    }

    #[test]
    fn missing_articles_directory_means_everything_is_missing() {
        let dir = TempDir::new().unwrap();

        let report = check_site(dir.path(), CATALOG).unwrap();

        assert_eq!(report.missing.len(), CATALOG.len());
        assert!(report.uncatalogued.is_empty());
    }
}
