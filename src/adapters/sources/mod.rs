//! Agenda data source adapters
//!
//! - LIMS records API (live)
//! - Fixed fallback list

pub mod fallback;
pub mod lims;

pub use fallback::FallbackSource;
pub use lims::{LimsSource, LIMS_API_URL};
