//! Country records and their comparable stats.

pub mod entities;
pub mod stat;
