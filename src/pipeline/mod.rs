/*! Pipelines.

The module provides a light [pipeline::Pipeline] trait and the
[AnnotationPipeline], whose basic/advanced behavior is a
construction-time choice of an optional annotation stage.
!*/
mod annotation;
#[allow(clippy::module_inception)]
pub mod pipeline;

pub use annotation::AnnotationPipeline;
pub use pipeline::Pipeline;
