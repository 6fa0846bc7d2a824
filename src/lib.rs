pub mod analyzer;
pub mod annotate;
pub mod conllu;
pub mod corpus;
pub mod error;
pub mod io;
pub mod pipeline;
pub mod processing;
pub mod tagset;
