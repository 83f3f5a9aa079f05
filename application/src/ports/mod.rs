//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure and presentation
//! adapters must implement.

pub mod dataset_source;
pub mod render_surface;
pub mod session_storage;
pub mod ui_event;
