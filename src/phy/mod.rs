//! Ethernet PHY Drivers
//!
//! This module provides the PHY lifecycle trait, the IEEE 802.3 generic
//! PHY helpers, and the Atheros AR803x driver family.
//!
//! # Architecture
//!
//! Drivers talk to the chip only through the [`MdioBus`](crate::hal::MdioBus)
//! trait and read their board options through [`OfNode`](crate::hal::OfNode).
//! This allows:
//!
//! - Reuse with any MAC that exposes an MDIO bus
//! - Boards with or without a flattened device tree
//! - Testing with mock MDIO implementations
//!
//! # Supported PHY Chips
//!
//! - [`ChipVariant::Ar8021`]: Qualcomm Atheros AR8021
//! - [`ChipVariant::Ar8031`]: Qualcomm Atheros AR8031 / AR8033
//! - [`ChipVariant::Ar8035`]: Qualcomm Atheros AR8035
//!
//! # Example
//!
//! ```ignore
//! use ph_ar803x_phy::phy::{Ar803x, PhyDriver, PhyRegistry, genphy, register_drivers};
//!
//! let mut registry = PhyRegistry::<4>::new();
//! register_drivers(&mut registry)?;
//!
//! let id = genphy::read_phy_id(&mut mdio, 0)?;
//! let chip = registry.lookup(id).ok_or(ConfigError::UnsupportedPhy)?;
//!
//! let mut phy = Ar803x::new(0, chip).with_interface(PhyInterface::RgmiiId);
//! phy.config(&mut mdio, Some(&node))?;
//! ```

pub mod ar803x;
pub mod generic;
pub mod registry;

pub use ar803x::{
    AR8021_INFO, AR8031_INFO, AR8035_INFO, Ar803x, Ar803xWithReset, ChipVariant, PhyDriverInfo,
    apply_options, configure_delays,
};
pub use generic::{LinkStatus, PhyCapabilities, PhyDriver, genphy};
pub use registry::{PhyRegistry, register_drivers};

// Re-export register definitions
pub use crate::internal::phy_regs::ar803x as ar803x_regs;
pub use crate::internal::phy_regs::standard::{anar, bmcr, bmsr, ctrl1000, phy_reg, stat1000};
