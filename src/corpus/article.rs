//! Article model.
use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::conllu::Sentence;

/// Article metadata, read from the `<id>_meta.json` sibling of a raw file.
#[derive(Debug, Default, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ArticleMeta {
    pub id: usize,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub author: Vec<String>,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub topics: Vec<String>,
}

/// In-memory article: raw text plus, once the pipeline has run,
/// its ordered sentences.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    id: usize,
    text: String,
    meta: Option<ArticleMeta>,
    sentences: Vec<Sentence>,
}

impl Article {
    pub fn new(id: usize, text: String) -> Self {
        Self {
            id,
            text,
            meta: None,
            sentences: Vec::new(),
        }
    }

    pub fn id(&self) -> usize {
        self.id
    }

    /// Raw article text, as read from disk.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_meta(&mut self, meta: ArticleMeta) {
        self.meta = Some(meta);
    }

    pub fn meta(&self) -> Option<&ArticleMeta> {
        self.meta.as_ref()
    }

    /// Attaches processed sentences. Done exactly once per pipeline run.
    pub fn set_sentences(&mut self, sentences: Vec<Sentence>) {
        self.sentences = sentences;
    }

    pub fn sentences(&self) -> &[Sentence] {
        &self.sentences
    }

    /// Cleaned text of the article, one line per sentence.
    pub fn clean_text(&self) -> String {
        self.sentences
            .iter()
            .map(|sentence| sentence.clean_text())
            .join("\n")
    }
}
