// src/application/commands/articles/create.rs
use super::ArticleCommandService;
use crate::{
    application::{dto::ArticleDto, error::ApplicationResult},
    domain::{article::ArticleDraft, errors::DomainError},
};

/// Attributes as submitted; a missing field is validated as blank.
#[derive(Debug, Clone, Default)]
pub struct CreateArticleCommand {
    pub title: Option<String>,
    pub content: Option<String>,
}

impl CreateArticleCommand {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            content: Some(content.into()),
        }
    }
}

impl ArticleCommandService {
    pub async fn create_article(
        &self,
        command: CreateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let draft = ArticleDraft::new(command.title.as_deref(), command.content.as_deref());
        let new_article = draft
            .into_new_article(self.clock.now())
            .inspect_err(|err| {
                if let DomainError::Validation(errors) = err {
                    tracing::debug!(%errors, "article rejected");
                }
            })?;

        let created = self.write_repo.insert(new_article).await?;
        tracing::info!(article_id = %created.id, "article created");
        Ok(created.into())
    }
}
