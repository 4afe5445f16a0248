//! HTTP request handlers organized by domain
//!
//! Each submodule contains handlers for a specific API area.

pub mod cards;
pub mod classify;
pub mod recommend;

// Re-export all handlers for use in router
pub use cards::*;
pub use classify::*;
pub use recommend::*;
