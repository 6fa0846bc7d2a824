/*! Corpus management.

[CorpusManager] validates a dataset directory (`<id>_raw.txt` files with
dense ids `1..N`, optional `<id>_meta.json` siblings) and loads it into an
id-addressed collection of [Article]s.
!*/
mod article;
mod manager;

pub use article::{Article, ArticleMeta};
pub use manager::{article_id, CorpusManager};
