// src/application/commands/articles/delete.rs
use super::ArticleCommandService;
use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::{article::ArticleId, errors::DomainError},
};

pub struct DeleteArticleCommand {
    pub id: i64,
}

impl ArticleCommandService {
    pub async fn delete_article(&self, command: DeleteArticleCommand) -> ApplicationResult<()> {
        let id = ArticleId::new(command.id)?;
        match self.write_repo.delete(id).await {
            Ok(()) => {
                tracing::info!(article_id = %id, "article deleted");
                Ok(())
            }
            Err(DomainError::NotFound(_)) => Err(ApplicationError::not_found(format!(
                "article {id} not found"
            ))),
            Err(other) => Err(other.into()),
        }
    }
}
