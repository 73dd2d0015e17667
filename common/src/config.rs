use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{Level, debug, instrument};

// browser widget timings and thresholds
//
// compiled into the wasm bundle, there is no runtime source of configuration in the browser
// beyond the theme flag in local storage.  search limits and carousel breakpoints are
// constants in their own modules
#[derive(Clone, Debug, PartialEq)]
pub struct WidgetConfig {
    pub rotate_interval_ms: u32,
    pub loading_delay_ms: u32,
    pub loading_fade_ms: u32,
    pub newsletter_message_ms: u32,
    pub scroll_top_threshold: f64,
    pub reveal_threshold: f64,
    pub reveal_root_margin: &'static str,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        WidgetConfig {
            rotate_interval_ms: 5000,
            loading_delay_ms: 800,
            loading_fade_ms: 500,
            newsletter_message_ms: 5000,
            scroll_top_threshold: 500.0,
            reveal_threshold: 0.1,
            reveal_root_margin: "0px 0px -50px 0px",
        }
    }
}

// site tooling configuration
//
// read by the deitheon-site cli, never by the browser
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct SiteConfig {
    pub base_url: String,
    pub site_root: PathBuf,
    pub categories: Vec<String>,
    pub sitemap_output: Option<PathBuf>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        SiteConfig {
            base_url: String::from("https://deitheon.com"),
            site_root: PathBuf::from("."),
            categories: [
                "philosophy",
                "science",
                "psychology",
                "society",
                "culture",
                "food",
                "tech",
                "politics",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
            sitemap_output: None,
        }
    }
}

impl SiteConfig {
    // absolute url for a site-relative path
    pub fn url_for(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    pub fn sitemap_path(&self) -> PathBuf {
        self.sitemap_output
            .clone()
            .unwrap_or_else(|| self.site_root.join("sitemap.xml"))
    }
}

// same convention as the server config, the table lives under [config] so that the file
// can carry other tables as well
#[derive(Debug, Deserialize, Serialize)]
struct TomlConfigFile {
    config: SiteConfig,
}

#[instrument(level=Level::DEBUG, skip(doc))]
pub fn parse_config(doc: &str) -> Result<SiteConfig> {
    debug!("parsing config document");

    let data: TomlConfigFile = toml::from_str(doc).context("failed to parse config file")?;

    Ok(data.config)
}

pub fn config_path(path: Option<PathBuf>) -> PathBuf {
    path.unwrap_or_else(|| PathBuf::from("deitheon.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn widget_defaults() {
        let config = WidgetConfig::default();

        assert_eq!(config.rotate_interval_ms, 5000);
        assert_eq!(config.loading_delay_ms + config.loading_fade_ms, 1300);
        assert_eq!(config.scroll_top_threshold, 500.0);
    }

    #[test]
    fn parses_config_table() {
        let doc = r#"
            [config]
            base_url = "https://example.org/"
            site_root = "/srv/site"
            categories = ["culture", "food"]
        "#;

        let config = parse_config(doc).unwrap();

        assert_eq!(config.base_url, "https://example.org/");
        assert_eq!(config.site_root, PathBuf::from("/srv/site"));
        assert_eq!(config.categories, vec!["culture", "food"]);
        assert_eq!(config.sitemap_path(), PathBuf::from("/srv/site/sitemap.xml"));
    }

    #[test]
    fn rejects_missing_table() {
        assert!(parse_config("base_url = \"x\"").is_err());
    }

    #[test]
    fn joins_urls_without_double_slashes() {
        let mut config = SiteConfig::default();
        assert_eq!(config.url_for("/about.html"), "https://deitheon.com/about.html");

        config.base_url = String::from("https://deitheon.com/");
        assert_eq!(config.url_for("articles/"), "https://deitheon.com/articles/");
        assert_eq!(config.url_for(""), "https://deitheon.com/");
    }
}
