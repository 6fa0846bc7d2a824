//! Annotate trait
//!
//! Annotations attach morphological information to tokens. The advanced
//! pipeline is the basic one composed with one [Annotate] stage.
use std::borrow::Borrow;

use log::debug;

use crate::analyzer::Analyzer;
use crate::conllu::{MorphologicalAnnotation, Token};
use crate::tagset::TagConverter;

/// Anything that can annotate a single token in place.
pub trait Annotate {
    fn annotate(&self, token: &mut Token);
}

/// Annotator combining a morphological analyzer with a tag converter:
/// analyze the surface form, convert the native tag to UD, attach the
/// annotation.
///
/// Failures (unknown form, unmapped POS) leave the token unannotated;
/// an article is never aborted because of one token.
pub struct UdAnnotator<A, C> {
    analyzer: A,
    converter: C,
}

impl<A, C> UdAnnotator<A, C> {
    pub fn new(analyzer: A, converter: C) -> Self {
        Self {
            analyzer,
            converter,
        }
    }
}

impl<A, C> Annotate for UdAnnotator<A, C>
where
    A: Analyzer,
    C: TagConverter,
    A::Tag: Borrow<C::Tag>,
{
    fn annotate(&self, token: &mut Token) {
        let analysis = match self.analyzer.analyze(token.text()) {
            Some(analysis) => analysis,
            None => {
                debug!("no analysis for token {:?}", token.text());
                return;
            }
        };

        let pos = match self.converter.convert_pos(analysis.tag.borrow()) {
            Ok(pos) => pos,
            Err(e) => {
                debug!("dropping tag for token {:?}: {:?}", token.text(), e);
                return;
            }
        };
        let feats = self.converter.convert_morphological_tags(analysis.tag.borrow());

        token.set_annotation(MorphologicalAnnotation::new(
            analysis.lemma,
            pos.to_string(),
            feats,
        ));
    }
}
