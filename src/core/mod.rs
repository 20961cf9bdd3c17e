//! Core-Domänentypen: Markierungen, Wandfoto, Canvas-Transformation, Regionserkennung, Probleme.

pub mod annotation;
pub mod canvas;
pub mod problem;
pub mod segmenter;
pub mod wall_image;

pub use annotation::{Annotation, AnnotationSet, HoldColor, Shape};
pub use canvas::CanvasTransform;
pub use problem::{add_tag, normalize_tags, NewProblem, Problem, ProblemType};
pub use segmenter::{
    find_region, trace_hold, FallbackReason, Region, SegmentParams, TraceOutcome,
};
pub use wall_image::{fit_display_size, WallImage};
