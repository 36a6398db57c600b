use super::ArticleQueryService;
use crate::application::{dto::ArticleDto, error::ApplicationResult};

#[derive(Debug, Clone, Copy, Default)]
pub struct ListArticlesQuery;

impl ArticleQueryService {
    /// Every stored article in ascending id order; an empty store yields an empty list.
    pub async fn list_articles(
        &self,
        _query: ListArticlesQuery,
    ) -> ApplicationResult<Vec<ArticleDto>> {
        let records = self.read_repo.list().await?;
        tracing::debug!(count = records.len(), "listed articles");
        Ok(records.into_iter().map(Into::into).collect())
    }
}
