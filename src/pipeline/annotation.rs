//! Annotation pipeline.
//!
//! Segments each article into sentences, tokenizes, optionally runs the
//! configured [Annotate] stage over every token, attaches the sentences
//! to the article and serializes. Without an annotator only cleaned text
//! is written (basic variant); with one, full CONLL-U is written as well
//! (advanced variant).
use std::path::PathBuf;

use itertools::Itertools;
use log::{info, warn};

use super::Pipeline;
use crate::annotate::Annotate;
use crate::conllu::{Sentence, Token};
use crate::corpus::CorpusManager;
use crate::error::Error;
use crate::io::writer;
use crate::processing::split_sentences;

pub struct AnnotationPipeline {
    corpus: CorpusManager,
    dst: PathBuf,
    annotator: Option<Box<dyn Annotate>>,
}

impl AnnotationPipeline {
    /// Basic variant: cleaned-text output only.
    pub fn new(corpus: CorpusManager, dst: PathBuf) -> Self {
        Self {
            corpus,
            dst,
            annotator: None,
        }
    }

    /// Advanced variant: the annotator runs over every token and the
    /// output additionally carries morphological CONLL-U columns.
    pub fn with_annotator(
        corpus: CorpusManager,
        dst: PathBuf,
        annotator: Box<dyn Annotate>,
    ) -> Self {
        Self {
            corpus,
            dst,
            annotator: Some(annotator),
        }
    }

    /// Segments and tokenizes `text`. Tokens keep their raw
    /// (unlowercased) form; sentence positions are 0-based in
    /// segmentation order.
    fn process(text: &str) -> Vec<Sentence> {
        split_sentences(text)
            .into_iter()
            .enumerate()
            .map(|(position, sentence)| {
                let tokens = sentence.split_whitespace().map(Token::new).collect();
                Sentence::new(position, sentence, tokens)
            })
            .collect()
    }
}

impl Pipeline<()> for AnnotationPipeline {
    /// Processes every article of the corpus, one at a time, in
    /// ascending article-id order. A failure while serializing one
    /// article halts the run; earlier articles stay on disk untouched.
    fn run(&mut self) -> Result<(), Error> {
        let include_tags = self.annotator.is_some();
        let ids: Vec<usize> = self.corpus.get_articles().keys().copied().sorted().collect();

        for id in ids {
            let annotator = self.annotator.as_deref();
            let article = match self.corpus.get_articles_mut().get_mut(&id) {
                Some(article) => article,
                None => {
                    warn!("article {} disappeared from the corpus mapping", id);
                    continue;
                }
            };
            info!("processing article {}", id);

            let mut sentences = Self::process(article.text());
            if let Some(annotator) = annotator {
                for sentence in &mut sentences {
                    for token in sentence.tokens_mut() {
                        annotator.annotate(token);
                    }
                }
            }

            article.set_sentences(sentences);
            writer::write_cleaned(&self.dst, article)?;
            if include_tags {
                writer::write_conllu(&self.dst, article, true)?;
            }
        }
        Ok(())
    }
}
