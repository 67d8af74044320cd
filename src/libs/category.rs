use crate::structs::category::Category;
use crate::structs::link::LinkDescriptor;

pub const FAVORITES_CATEGORY_ID: &str = "favorites";
pub const UNCATEGORIZED_CATEGORY_ID: &str = "uncategorized";

/// Category ids that are structural and never picked by keyword matching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReservedCategories {
    pub favorites: String,
    pub uncategorized: String,
}

impl Default for ReservedCategories {
    fn default() -> Self {
        ReservedCategories {
            favorites: FAVORITES_CATEGORY_ID.to_string(),
            uncategorized: UNCATEGORIZED_CATEGORY_ID.to_string(),
        }
    }
}

impl ReservedCategories {
    pub fn contains(&self, category_id: &str) -> bool {
        category_id == self.favorites || category_id == self.uncategorized
    }
}

/// Number of keywords that occur in the lower-cased `title url` text.
pub fn score_category<S: AsRef<str>>(keywords: &[S], title: &str, url: &str) -> usize {
    score_keywords(keywords, &LinkDescriptor::new(title, url).search_text())
}

// `search_text` must already be lower-cased.
fn score_keywords<S: AsRef<str>>(keywords: &[S], search_text: &str) -> usize {
    keywords
        .iter()
        .filter(|keyword| keyword_matches(keyword.as_ref(), search_text))
        .count()
}

fn keyword_matches(keyword: &str, search_text: &str) -> bool {
    search_text.contains(&keyword.to_lowercase())
}

/// Keyword matcher over a user's categories.
///
/// `defaults` is only consulted when the caller passes an empty category list.
#[derive(Debug, Clone, Default)]
pub struct CategoryMatcher {
    reserved: ReservedCategories,
    defaults: Vec<Category>,
}

impl CategoryMatcher {
    pub fn new(reserved: ReservedCategories, defaults: Vec<Category>) -> Self {
        CategoryMatcher { reserved, defaults }
    }

    /// First category, in list order, with any keyword hit. Later categories are
    /// not looked at once a hit is found, even if they would score higher.
    pub fn suggest<'a>(&'a self, link: &LinkDescriptor, categories: &'a [Category]) -> Option<&'a str> {
        let search_text = link.search_text();

        self.candidates(categories)
            .find(|category| {
                category
                    .keywords
                    .iter()
                    .any(|keyword| keyword_matches(keyword, &search_text))
            })
            .map(|category| category.id.as_str())
    }

    /// Ids of every category with at least one keyword hit, highest score first.
    /// Equal scores keep their input order.
    pub fn rank<'a>(&'a self, link: &LinkDescriptor, categories: &'a [Category]) -> Vec<&'a str> {
        let search_text = link.search_text();

        let mut scored: Vec<(&str, usize)> = self
            .candidates(categories)
            .map(|category| (category.id.as_str(), score_keywords(&category.keywords, &search_text)))
            .filter(|(_, score)| *score > 0)
            .collect();

        // sort_by is stable
        scored.sort_by(|a, b| b.1.cmp(&a.1));

        scored.into_iter().map(|(id, _)| id).collect()
    }

    /// Suggestion with "no match" mapped to the uncategorized id.
    pub fn resolve<'a>(&'a self, suggestion: Option<&'a str>) -> &'a str {
        suggestion.unwrap_or(&self.reserved.uncategorized)
    }

    fn candidates<'a>(&'a self, categories: &'a [Category]) -> impl Iterator<Item = &'a Category> {
        let source = if categories.is_empty() {
            &self.defaults[..]
        } else {
            categories
        };

        source
            .iter()
            .filter(move |category| !self.reserved.contains(&category.id))
    }
}

/// Free-standing form of [`CategoryMatcher::suggest`] using the default reserved ids.
pub fn suggest_category(
    title: &str,
    url: &str,
    categories: &[Category],
    default_categories: &[Category],
) -> Option<String> {
    CategoryMatcher::new(ReservedCategories::default(), default_categories.to_vec())
        .suggest(&LinkDescriptor::new(title, url), categories)
        .map(str::to_string)
}

/// Free-standing form of [`CategoryMatcher::rank`] using the default reserved ids.
pub fn rank_matching_categories(
    title: &str,
    url: &str,
    categories: &[Category],
    default_categories: &[Category],
) -> Vec<String> {
    CategoryMatcher::new(ReservedCategories::default(), default_categories.to_vec())
        .rank(&LinkDescriptor::new(title, url), categories)
        .into_iter()
        .map(str::to_string)
        .collect()
}
