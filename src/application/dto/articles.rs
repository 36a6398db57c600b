use crate::domain::article::Article;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::serde_time;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ArticleDto {
    pub id: i64,
    pub title: String,
    pub content: String,
    #[serde(with = "serde_time")]
    #[schema(example = "2024-05-01T09:30:00.000Z")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "serde_time")]
    #[schema(example = "2024-05-01T09:30:00.000Z")]
    pub updated_at: DateTime<Utc>,
}

impl From<Article> for ArticleDto {
    fn from(article: Article) -> Self {
        Self {
            id: article.id.into(),
            title: article.title.into_inner(),
            content: article.content.into_inner(),
            created_at: article.created_at,
            updated_at: article.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::article::{ArticleContent, ArticleId, ArticleTitle};
    use chrono::TimeZone;

    #[test]
    fn serializes_expected_fields() {
        let ts = Utc.with_ymd_and_hms(2024, 5, 1, 9, 30, 0).unwrap();
        let dto = ArticleDto::from(Article {
            id: ArticleId::new(3).unwrap(),
            title: ArticleTitle::new("明後日の天気").unwrap(),
            content: ArticleContent::new("雨").unwrap(),
            created_at: ts,
            updated_at: ts,
        });

        let value = serde_json::to_value(&dto).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "id": 3,
                "title": "明後日の天気",
                "content": "雨",
                "created_at": "2024-05-01T09:30:00.000Z",
                "updated_at": "2024-05-01T09:30:00.000Z",
            })
        );
    }
}
