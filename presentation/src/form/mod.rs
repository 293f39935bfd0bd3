//! Interactive blog form.
//!
//! - [`markup`]: terminal stand-in for the rich-text surface
//! - [`session`]: the form wiring (draft editor, uploads, options)
//! - [`repl`]: line-oriented front end

pub mod markup;
pub mod repl;
pub mod session;
