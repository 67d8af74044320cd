use crate::structs::category::Category;

use super::category::{FAVORITES_CATEGORY_ID, UNCATEGORIZED_CATEGORY_ID};

/// Categories every new user starts with, in display order.
pub fn default_categories() -> Vec<Category> {
    vec![
        Category::new(FAVORITES_CATEGORY_ID, "즐겨찾기", "⭐", &[]),
        Category::new(UNCATEGORIZED_CATEGORY_ID, "미분류", "📁", &[]),
        Category::new(
            "news",
            "뉴스",
            "📰",
            &["news", "뉴스", "속보", "기사", "press", "times"],
        ),
        Category::new(
            "shopping",
            "쇼핑",
            "🛒",
            &["shop", "쇼핑", "store", "coupang", "쿠팡", "11st", "gmarket", "할인"],
        ),
        Category::new(
            "tech",
            "개발",
            "💻",
            &["github", "stackoverflow", "개발", "developer", "dev.to", "velog", "tech"],
        ),
        Category::new(
            "video",
            "영상",
            "🎬",
            &["youtube", "youtu.be", "영상", "netflix", "vimeo", "twitch"],
        ),
        Category::new(
            "food",
            "맛집",
            "🍽️",
            &["recipe", "레시피", "맛집", "food", "restaurant", "배달"],
        ),
        Category::new(
            "travel",
            "여행",
            "✈️",
            &["travel", "여행", "hotel", "호텔", "airbnb", "flight", "항공"],
        ),
    ]
}
