//! Slapable cards and their categories.

pub mod category;
pub mod entities;
