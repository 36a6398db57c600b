// src/domain/article/validation.rs
use crate::domain::article::entity::NewArticle;
use crate::domain::article::value_objects::{ArticleContent, ArticleTitle};
use crate::domain::errors::DomainResult;
use crate::domain::validation::{BLANK, ValidationErrors, char_len, is_blank};
use chrono::{DateTime, Utc};

pub const TITLE_MIN_CHARS: usize = 2;
pub const TITLE_MAX_CHARS: usize = 10;

pub(crate) fn check_title(value: Option<&str>, errors: &mut ValidationErrors) {
    if is_blank(value) {
        errors.add("title", BLANK);
    }

    let len = char_len(value);
    if len < TITLE_MIN_CHARS {
        errors.add(
            "title",
            format!("is too short (minimum is {TITLE_MIN_CHARS} characters)"),
        );
    } else if len > TITLE_MAX_CHARS {
        errors.add(
            "title",
            format!("is too long (maximum is {TITLE_MAX_CHARS} characters)"),
        );
    }
}

pub(crate) fn check_content(value: Option<&str>, errors: &mut ValidationErrors) {
    if is_blank(value) {
        errors.add("content", BLANK);
    }
}

/// Candidate attributes for an article, checked before anything is persisted.
#[derive(Debug, Clone, Copy, Default)]
pub struct ArticleDraft<'a> {
    pub title: Option<&'a str>,
    pub content: Option<&'a str>,
}

impl<'a> ArticleDraft<'a> {
    pub fn new(title: Option<&'a str>, content: Option<&'a str>) -> Self {
        Self { title, content }
    }

    /// Runs every rule and returns the collected field errors (empty when valid).
    pub fn validate(&self) -> ValidationErrors {
        let mut errors = ValidationErrors::new();
        check_title(self.title, &mut errors);
        check_content(self.content, &mut errors);
        errors
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }

    pub fn parse(&self) -> DomainResult<(ArticleTitle, ArticleContent)> {
        self.validate().into_result(())?;
        let title = ArticleTitle::new(self.title.unwrap_or_default())?;
        let content = ArticleContent::new(self.content.unwrap_or_default())?;
        Ok((title, content))
    }

    pub fn into_new_article(self, now: DateTime<Utc>) -> DomainResult<NewArticle> {
        let (title, content) = self.parse()?;
        Ok(NewArticle {
            title,
            content,
            created_at: now,
            updated_at: now,
        })
    }
}
