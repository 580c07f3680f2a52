//! Household income projection across a parental leave period.
//!
//! `core` holds the projection engine; `render` turns a calendar document
//! into printable HTML or terminal tables.

pub mod core;
pub mod render;
pub mod utils;
