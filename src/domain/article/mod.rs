pub mod entity;
pub mod repository;
pub mod validation;
pub mod value_objects;

pub use entity::{Article, ArticleUpdate, NewArticle};
pub use repository::{ArticleReadRepository, ArticleWriteRepository};
pub use validation::{ArticleDraft, TITLE_MAX_CHARS, TITLE_MIN_CHARS};
pub use value_objects::{ArticleContent, ArticleId, ArticleTitle};
