/*! CONLL-U data model.

Holds the [Token] and [Sentence] types and their rendering into
CONLL-U text, with or without the morphological columns.
!*/
mod sentence;
mod token;

pub use sentence::Sentence;
pub use token::{clean_form, MorphologicalAnnotation, Token};
