//! Pages: layouts bound to concrete source images.

pub mod page;
