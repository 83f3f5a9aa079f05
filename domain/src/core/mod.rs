//! Core domain concepts shared across all subdomains.
//!
//! - [`error::DomainError`] — domain-level errors
//! - [`sample::random_sample`] — uniform sampling without replacement

pub mod error;
pub mod sample;
