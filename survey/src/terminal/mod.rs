//! Crossterm-backed key source and renderer for real terminals.

mod keys;
mod render;

pub use keys::{TerminalKeys, decode};
pub use render::TerminalRenderer;

use survey_types::Stdio;

/// Stdin keys paired with a stdout renderer.
pub fn stdio() -> Stdio {
    Stdio::new(TerminalKeys::new(), TerminalRenderer::stdout())
}
