//! Rendering for CI surfaces (Markdown comments, GitHub annotations).
//!
//! Renderers take a `RenderableReport` rather than the wire envelope so they
//! stay free of serde and timestamps.

#![forbid(unsafe_code)]

mod gha;
mod markdown;
mod model;

pub use gha::render_github_annotations;
pub use markdown::render_markdown;
pub use model::{
    RenderableData, RenderableFinding, RenderableLocation, RenderableReport, RenderableSeverity,
    RenderableVerdictStatus,
};
