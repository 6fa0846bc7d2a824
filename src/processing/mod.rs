/*! Text processing collaborators.

Currently only sentence segmentation; tokenization proper is plain
whitespace splitting done by the pipeline.
!*/
mod segment;

pub use segment::split_sentences;
