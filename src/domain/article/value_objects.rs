use crate::domain::article::validation::{check_content, check_title};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::validation::ValidationErrors;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ArticleId(pub i64);

impl ArticleId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::InvalidIdentifier(
                "article id must be positive".into(),
            ))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<ArticleId> for i64 {
    fn from(value: ArticleId) -> Self {
        value.0
    }
}

impl fmt::Display for ArticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleTitle(String);

impl ArticleTitle {
    /// Wraps a value read back from storage. Rules apply on write only.
    pub(crate) fn from_stored(value: String) -> Self {
        Self(value)
    }

    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        let mut errors = ValidationErrors::new();
        check_title(Some(&value), &mut errors);
        errors.into_result(Self(value)).map_err(Into::into)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ArticleTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<ArticleTitle> for String {
    fn from(value: ArticleTitle) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleContent(String);

impl ArticleContent {
    /// Wraps a value read back from storage. Rules apply on write only.
    pub(crate) fn from_stored(value: String) -> Self {
        Self(value)
    }

    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        let mut errors = ValidationErrors::new();
        check_content(Some(&value), &mut errors);
        errors.into_result(Self(value)).map_err(Into::into)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ArticleContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<ArticleContent> for String {
    fn from(value: ArticleContent) -> Self {
        value.0
    }
}
