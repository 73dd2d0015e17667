pub mod binding;
pub mod carousel;
pub mod catalog;
pub mod config;
pub mod fragment;
pub mod search;
pub mod sitemap;
pub mod theme;
