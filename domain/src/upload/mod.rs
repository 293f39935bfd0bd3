//! Image upload value objects.

pub mod value_objects;
