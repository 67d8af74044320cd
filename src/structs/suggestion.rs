use serde::{Deserialize, Serialize};

use super::category::Category;
use super::link::LinkDescriptor;

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestionRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub url: String,
    pub user_id: Option<String>,
    pub categories: Option<Vec<Category>>,
}

impl SuggestionRequest {
    pub fn link(&self) -> LinkDescriptor {
        LinkDescriptor::new(&self.title, &self.url)
    }
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestResponse {
    pub category_id: Option<String>,
    pub resolved_category_id: String,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankResponse {
    pub category_ids: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_uses_camel_case() {
        let request: SuggestionRequest = serde_json::from_str(
            r#"{"title":"쿠팡 쇼핑 할인","url":"https://coupang.com","userId":"u1"}"#,
        )
        .expect("valid request");

        assert_eq!(request.user_id.as_deref(), Some("u1"));
        assert!(request.categories.is_none());
        assert_eq!(request.link().search_text(), "쿠팡 쇼핑 할인 https://coupang.com");
    }

    #[test]
    fn no_suggestion_serializes_as_null() {
        let response = SuggestResponse {
            category_id: None,
            resolved_category_id: "uncategorized".to_string(),
        };

        assert_eq!(
            serde_json::to_string(&response).expect("serializable"),
            r#"{"categoryId":null,"resolvedCategoryId":"uncategorized"}"#
        );
    }
}
