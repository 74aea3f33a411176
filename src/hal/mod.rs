//! Hardware Abstraction Layer
//!
//! Collaborator interfaces the host implements for the PHY driver.
//!
//! # Modules
//!
//! - [`mdio`]: MDIO bus for PHY register access (Clause 22 + indirect MMD)
//! - [`of`]: Device-tree node access for per-PHY configuration
//!
//! # Delay and GPIO Integration
//!
//! The optional hardware reset path uses `embedded_hal::delay::DelayNs` and
//! `embedded_hal::digital::OutputPin` directly. Pass the implementations
//! from your HAL.

pub mod mdio;
pub mod of;

// Re-export commonly used types
pub use mdio::{MdioBus, check_address};
pub use of::{OfNode, PropValue, Property, StaticNode};
