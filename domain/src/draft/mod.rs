//! Draft subdomain: the blog post being composed.

pub mod category;
pub mod entities;
pub mod keys;
