//! Text normalization for mycolookup.
//!
//! Every provider hands back free text of uneven quality: HTML fragments
//! from scraped pages, multi-paragraph encyclopedia extracts, lowercase
//! vernacular names. This crate turns all of it into one uniform shape:
//! - [`normalize`] strips markup, trims and caps prose at [`MAX_SENTENCES`]
//! - [`capitalize`] upper-cases the first character of a name
//! - [`passes_quality_gate`] rejects prose shorter than a minimum length
//! - [`shape_suggestions`] dedups, sorts and caps candidate taxon names
//!
//! All functions are pure and total: empty input yields empty output.

mod names;
mod prose;

pub use names::{capitalize, is_binomial, shape_suggestions};
pub use prose::{
    accept_prose, normalize, passes_quality_gate, strip_tags, truncate_sentences,
    MAX_SENTENCES, MIN_PROSE_CHARS,
};
