//! Response models for the catalog API
//!
//! Decode targets for the three resource shapes the explorer reads:
//! listing pages, location areas and creatures.

pub mod page;
pub mod resources;

// Re-export commonly used types
pub use page::{NamedResource, Page};
pub use resources::{Encounter, LocationArea, Pokemon};
