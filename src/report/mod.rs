//! Markdown report rendering
//!
//! Produces `bibliotheken.md` from the Wikipedia stage's records and
//! `libraries.md` from the AI summaries, plus a colored terminal view
//! of either report.

mod render;
mod terminal;

pub use render::{render_candidates, render_summaries};
pub use terminal::format_markdown;
