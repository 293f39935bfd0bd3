//! Output formatting for the terminal.

pub mod markup_text;
pub mod preview;
