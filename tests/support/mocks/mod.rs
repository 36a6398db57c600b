pub mod article_repos;
pub mod time;

pub use article_repos::{FailingArticleRepo, InMemoryArticleRepo};
pub use time::{FIXED_NOW, FixedClock};
