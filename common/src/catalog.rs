use serde::Serialize;

// article records
//
// the catalog is compiled in and never mutated; the matching article pages are generated
// separately and live under /articles/{category}/, which `deitheon-site check` verifies
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ArticleRecord {
    pub title: &'static str,
    pub category: &'static str,
    pub url: &'static str,
}

impl ArticleRecord {
    pub const fn new(title: &'static str, category: &'static str, url: &'static str) -> Self {
        ArticleRecord {
            title,
            category,
            url,
        }
    }

    // lowercased category, which is also the first path component under /articles/
    pub fn category_slug(&self) -> String {
        self.category.to_lowercase()
    }

    // site-relative file path, i.e. the url without its leading slash
    pub fn file_path(&self) -> &'static str {
        self.url.trim_start_matches('/')
    }
}

pub const ARTICLES_PREFIX: &str = "/articles";

pub fn article_url(category_slug: &str, article_slug: &str) -> String {
    format!("{ARTICLES_PREFIX}/{category_slug}/{article_slug}.html")
}

pub const CATALOG: &[ArticleRecord] = &[
    ArticleRecord::new("Nature of Consciousness", "Philosophy", "/articles/philosophy/nature-of-consciousness.html"),
    ArticleRecord::new("The Art Revolution: A New Perspective", "Culture", "/articles/culture/the-art-revolution-a-new-perspective.html"),
    ArticleRecord::new("The Architecture Revolution", "Culture", "/articles/culture/the-architecture-revolution-a-new-perspective.html"),
    ArticleRecord::new("The Cultural Change Revolution", "Culture", "/articles/culture/the-cultural-change-revolution-a-new-perspective.html"),
    ArticleRecord::new("The Cultural Identity Revolution", "Culture", "/articles/culture/the-cultural-identity-revolution-a-new-perspective.html"),
    ArticleRecord::new("The Fashion Revolution", "Culture", "/articles/culture/the-fashion-revolution-a-new-perspective.html"),
    ArticleRecord::new("The Film Revolution", "Culture", "/articles/culture/the-film-revolution-a-new-perspective.html"),
    ArticleRecord::new("The Literature Revolution", "Culture", "/articles/culture/the-literature-revolution-a-new-perspective.html"),
    ArticleRecord::new("The Music Revolution", "Culture", "/articles/culture/the-music-revolution-a-new-perspective.html"),
    ArticleRecord::new("The Popular Culture Revolution", "Culture", "/articles/culture/the-popular-culture-revolution-a-new-perspective.html"),
    ArticleRecord::new("The Traditions Revolution", "Culture", "/articles/culture/the-traditions-revolution-a-new-perspective.html"),
    ArticleRecord::new("The Cooking Techniques Revolution", "Food", "/articles/food/the-cooking-techniques-revolution-a-new-perspective.html"),
    ArticleRecord::new("The Cuisine Revolution", "Food", "/articles/food/the-cuisine-revolution-a-new-perspective.html"),
    ArticleRecord::new("The Diet Revolution", "Food", "/articles/food/the-diet-revolution-a-new-perspective.html"),
    ArticleRecord::new("The Food History Revolution", "Food", "/articles/food/the-food-history-revolution-a-new-perspective.html"),
    ArticleRecord::new("The Food Science Revolution", "Food", "/articles/food/the-food-science-revolution-a-new-perspective.html"),
    ArticleRecord::new("The Nutrition Revolution", "Food", "/articles/food/the-nutrition-revolution-a-new-perspective.html"),
    ArticleRecord::new("The Restaurant Culture Revolution", "Food", "/articles/food/the-restaurant-culture-revolution-a-new-perspective.html"),
    ArticleRecord::new("The Sustainable Food Revolution", "Food", "/articles/food/the-sustainable-food-revolution-a-new-perspective.html"),
    ArticleRecord::new("The Aesthetics Revolution", "Philosophy", "/articles/philosophy/the-aesthetics-revolution-a-new-perspective.html"),
    ArticleRecord::new("The Ancient Philosophy Revolution", "Philosophy", "/articles/philosophy/the-ancient-philosophy-revolution-a-new-perspective.html"),
    ArticleRecord::new("The Eastern Philosophy Revolution", "Philosophy", "/articles/philosophy/the-eastern-philosophy-revolution-a-new-perspective.html"),
    ArticleRecord::new("The Epistemology Revolution", "Philosophy", "/articles/philosophy/the-epistemology-revolution-a-new-perspective.html"),
    ArticleRecord::new("The Ethics Revolution", "Philosophy", "/articles/philosophy/the-ethics-revolution-a-new-perspective.html"),
    ArticleRecord::new("The Existentialism Revolution", "Philosophy", "/articles/philosophy/the-existentialism-revolution-a-new-perspective.html"),
    ArticleRecord::new("The Logic Revolution", "Philosophy", "/articles/philosophy/the-logic-revolution-a-new-perspective.html"),
    ArticleRecord::new("The Metaphysics Revolution", "Philosophy", "/articles/philosophy/the-metaphysics-revolution-a-new-perspective.html"),
    ArticleRecord::new("The Modern Philosophy Revolution", "Philosophy", "/articles/philosophy/the-modern-philosophy-revolution-a-new-perspective.html"),
    ArticleRecord::new("The Phenomenology Revolution", "Philosophy", "/articles/philosophy/the-phenomenology-revolution-a-new-perspective.html"),
    ArticleRecord::new("The Philosophy of Mind Revolution", "Philosophy", "/articles/philosophy/the-philosophy-of-mind-revolution-a-new-perspective.html"),
    ArticleRecord::new("The Political Philosophy Revolution", "Philosophy", "/articles/philosophy/the-political-philosophy-revolution-a-new-perspective.html"),
];

// distinct category slugs in catalog order
pub fn category_slugs(catalog: &[ArticleRecord]) -> Vec<String> {
    let mut slugs: Vec<String> = Vec::new();

    for record in catalog {
        let slug = record.category_slug();
        if !slugs.contains(&slug) {
            slugs.push(slug);
        }
    }

    slugs
}
