use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::structs::category::Category;

use super::defaults::default_categories;
use super::redis::get_redis_service;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error(transparent)]
    RedisError(#[from] redis::RedisError),

    #[error(transparent)]
    SerdeError(#[from] serde_json::Error),

    #[error(transparent)]
    IoError(#[from] std::io::Error),

    #[error("Redis url not set in ENV")]
    RedisUrlMissing,
}

/// Source of a user's categories, in display order.
pub trait CategoryStore: Send + Sync {
    fn fetch_categories(&self, user_id: &str) -> Result<Vec<Category>, StoreError>;
}

/// Serves the built-in default set to every user.
#[derive(Debug, Clone, Default)]
pub struct DefaultCategoryStore;

impl CategoryStore for DefaultCategoryStore {
    fn fetch_categories(&self, _user_id: &str) -> Result<Vec<Category>, StoreError> {
        Ok(default_categories())
    }
}

/// JSON file holding one category list shared by all users.
#[derive(Debug, Clone)]
pub struct FileCategoryStore {
    path: PathBuf,
}

impl FileCategoryStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        FileCategoryStore {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl CategoryStore for FileCategoryStore {
    fn fetch_categories(&self, _user_id: &str) -> Result<Vec<Category>, StoreError> {
        let contents = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&contents)?)
    }
}

/// Categories for a one-off lookup: the JSON file if given, otherwise the user's
/// categories in redis, otherwise the default set.
pub fn load_categories(
    categories_file: Option<&Path>,
    user_id: Option<&str>,
    redis_url: Option<&str>,
) -> Result<Vec<Category>, StoreError> {
    if let Some(path) = categories_file {
        return FileCategoryStore::new(path).fetch_categories(user_id.unwrap_or(""));
    }

    match user_id {
        Some(user_id) => get_redis_service(redis_url)?.fetch_categories(user_id),
        None => DefaultCategoryStore.fetch_categories(""),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_file(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("linkshelf-{}-{}", std::process::id(), name));
        fs::write(&path, contents).expect("temp file is writable");
        path
    }

    #[test]
    fn default_store_ignores_user() {
        let store = DefaultCategoryStore;
        assert_eq!(
            store.fetch_categories("someone").unwrap(),
            store.fetch_categories("someone-else").unwrap()
        );
    }

    #[test]
    fn file_store_reads_categories_in_order() {
        let path = temp_file(
            "categories.json",
            r#"[{"id":"news","name":"News","keywords":["news"]},{"id":"shopping","name":"Shopping"}]"#,
        );

        let categories = FileCategoryStore::new(&path).fetch_categories("u1").unwrap();
        let _ = fs::remove_file(&path);

        let ids: Vec<&str> = categories.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["news", "shopping"]);
        assert!(categories[1].keywords.is_empty());
    }

    #[test]
    fn file_store_reports_bad_json() {
        let path = temp_file("broken.json", "{ not json");

        let result = FileCategoryStore::new(&path).fetch_categories("u1");
        let _ = fs::remove_file(&path);

        assert!(matches!(result, Err(StoreError::SerdeError(_))));
    }

    #[test]
    fn load_categories_prefers_the_file() {
        let path = temp_file("preferred.json", r#"[{"id":"mine","name":"Mine","keywords":["rust"]}]"#);

        let categories = load_categories(Some(path.as_path()), Some("u1"), None).unwrap();
        let _ = fs::remove_file(&path);

        assert_eq!(categories.len(), 1);
        assert_eq!(categories[0].id, "mine");
    }

    #[test]
    fn load_categories_for_user_needs_redis() {
        let result = load_categories(None, Some("u1"), None);
        assert!(matches!(result, Err(StoreError::RedisUrlMissing)));
    }

    #[test]
    fn load_categories_without_source_uses_defaults() {
        let categories = load_categories(None, None, None).unwrap();
        assert_eq!(categories, default_categories());
    }

    #[test]
    fn file_store_reports_missing_file() {
        let result = FileCategoryStore::new("/nonexistent/linkshelf/categories.json").fetch_categories("u1");
        assert!(matches!(result, Err(StoreError::IoError(_))));
    }
}
