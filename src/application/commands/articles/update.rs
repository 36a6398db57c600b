use super::ArticleCommandService;
use crate::{
    application::{
        dto::ArticleDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::{ArticleDraft, ArticleId, ArticleUpdate},
};

/// `None` leaves a field as stored; `Some(None)` clears it.
pub struct UpdateArticleCommand {
    pub id: i64,
    pub title: Option<Option<String>>,
    pub content: Option<Option<String>>,
}

impl ArticleCommandService {
    pub async fn update_article(
        &self,
        command: UpdateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let id = ArticleId::new(command.id)?;
        let article = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found(format!("article {id} not found")))?;

        // The merged record is what gets validated, not just the submitted fields.
        let title = command
            .title
            .unwrap_or_else(|| Some(article.title.as_str().to_owned()));
        let content = command
            .content
            .unwrap_or_else(|| Some(article.content.as_str().to_owned()));
        let (title, content) = ArticleDraft::new(title.as_deref(), content.as_deref())
            .parse()
            .inspect_err(|err| tracing::debug!(article_id = %id, error = %err, "update rejected"))?;

        if title == article.title && content == article.content {
            return Ok(article.into());
        }

        let mut update = ArticleUpdate::new(id, self.clock.now());
        if title != article.title {
            update = update.with_title(title);
        }
        if content != article.content {
            update = update.with_content(content);
        }

        let updated = self.write_repo.update(update).await?;
        tracing::info!(article_id = %id, "article updated");
        Ok(updated.into())
    }
}
