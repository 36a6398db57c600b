// tests/support/mocks/article_repos.rs
use article_board::domain::article::{
    Article, ArticleId, ArticleReadRepository, ArticleUpdate, ArticleWriteRepository, NewArticle,
};
use article_board::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Mutex;

/* -------------------------------- InMemoryArticleRepo -------------------------------- */

#[derive(Default)]
struct Store {
    last_id: i64,
    rows: BTreeMap<i64, Article>,
}

/// メモリ上で動作する記事リポジトリ（読み書き両方）
#[derive(Default)]
pub struct InMemoryArticleRepo {
    inner: Mutex<Store>,
}

impl InMemoryArticleRepo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.inner.lock().unwrap().rows.len()
    }

    pub fn get(&self, id: i64) -> Option<Article> {
        self.inner.lock().unwrap().rows.get(&id).cloned()
    }
}

#[async_trait]
impl ArticleWriteRepository for InMemoryArticleRepo {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let mut store = self.inner.lock().unwrap();
        store.last_id += 1;
        let next = store.last_id;
        let article = article.into_article(ArticleId::new(next)?);
        store.rows.insert(next, article.clone());
        Ok(article)
    }

    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article> {
        let mut store = self.inner.lock().unwrap();
        let article = store
            .rows
            .get_mut(&i64::from(update.id))
            .ok_or_else(|| DomainError::NotFound(format!("article {} not found", update.id)))?;
        article.apply(update);
        Ok(article.clone())
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        let mut store = self.inner.lock().unwrap();
        store
            .rows
            .remove(&i64::from(id))
            .map(|_| ())
            .ok_or_else(|| DomainError::NotFound(format!("article {id} not found")))
    }
}

#[async_trait]
impl ArticleReadRepository for InMemoryArticleRepo {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        Ok(self.get(i64::from(id)))
    }

    async fn list(&self) -> DomainResult<Vec<Article>> {
        Ok(self.inner.lock().unwrap().rows.values().cloned().collect())
    }
}

/* -------------------------------- FailingArticleRepo -------------------------------- */

/// すべての操作が永続化エラーになるリポジトリ
pub struct FailingArticleRepo;

fn broken() -> DomainError {
    DomainError::Persistence("database is unavailable".into())
}

#[async_trait]
impl ArticleWriteRepository for FailingArticleRepo {
    async fn insert(&self, _article: NewArticle) -> DomainResult<Article> {
        Err(broken())
    }

    async fn update(&self, _update: ArticleUpdate) -> DomainResult<Article> {
        Err(broken())
    }

    async fn delete(&self, _id: ArticleId) -> DomainResult<()> {
        Err(broken())
    }
}

#[async_trait]
impl ArticleReadRepository for FailingArticleRepo {
    async fn find_by_id(&self, _id: ArticleId) -> DomainResult<Option<Article>> {
        Err(broken())
    }

    async fn list(&self) -> DomainResult<Vec<Article>> {
        Err(broken())
    }
}
