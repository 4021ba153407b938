//! Pure text rendering for decoded thesaurus responses.
//!
//! Nothing here performs I/O: callers write the returned strings wherever
//! they like.

pub mod document;
pub mod entry;
pub mod palette;
pub mod sense;

pub use document::{
    RenderOptions, render_entry, render_grouped_result_set, render_lexical_entry, render_result,
    render_result_set, render_sense,
};
pub use palette::Palette;
