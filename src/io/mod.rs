/*! File collaborators.

Raw/meta readers and cleaned/CONLL-U writers. The pipeline itself never
touches the filesystem directly.
!*/
pub mod reader;
pub mod writer;
