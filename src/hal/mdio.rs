//! MDIO (Management Data Input/Output) bus abstraction
//!
//! The driver never talks to hardware directly. The host supplies an
//! [`MdioBus`] implementation for its MAC's station management interface
//! and the PHY code issues Clause 22 transactions through it.
//!
//! Extended (MMD) registers are reached through the Clause 22 indirect
//! access window (registers 13/14, IEEE 802.3 Annex 22D). Buses that can
//! issue native Clause 45 frames may override [`MdioBus::read_mmd`] and
//! [`MdioBus::write_mmd`].

use crate::driver::error::{BusError, Result};
use crate::internal::phy_regs::standard::{mmd_ctrl, phy_reg};

// =============================================================================
// MDIO Constants
// =============================================================================

/// Maximum valid PHY address (5-bit field)
pub const MAX_PHY_ADDR: u8 = 31;

/// Maximum valid register address (5-bit field)
pub const MAX_REG_ADDR: u8 = 31;

/// Check that a Clause 22 frame's address fields fit their 5-bit slots
///
/// Bus implementations call this before putting a frame on the wire.
pub fn check_address(phy_addr: u8, reg_addr: u8) -> Result<()> {
    if phy_addr > MAX_PHY_ADDR || reg_addr > MAX_REG_ADDR {
        return Err(BusError::InvalidAddress.into());
    }
    Ok(())
}

// =============================================================================
// MDIO Bus Trait
// =============================================================================

/// Trait for MDIO bus operations
///
/// This trait can be implemented by different backends, allowing
/// the PHY driver to work with various MDIO implementations.
pub trait MdioBus {
    /// Read a Clause 22 PHY register
    fn read(&mut self, phy_addr: u8, reg_addr: u8) -> Result<u16>;

    /// Write a Clause 22 PHY register
    fn write(&mut self, phy_addr: u8, reg_addr: u8, value: u16) -> Result<()>;

    /// Read an MMD register (`devad`, `reg`)
    ///
    /// Defaults to the Clause 22 indirect access sequence.
    fn read_mmd(&mut self, phy_addr: u8, devad: u8, reg: u16) -> Result<u16> {
        indirect::read(self, phy_addr, devad, reg)
    }

    /// Write an MMD register (`devad`, `reg`)
    ///
    /// Defaults to the Clause 22 indirect access sequence.
    fn write_mmd(&mut self, phy_addr: u8, devad: u8, reg: u16, value: u16) -> Result<()> {
        indirect::write(self, phy_addr, devad, reg, value)
    }
}

impl<M: MdioBus + ?Sized> MdioBus for &mut M {
    fn read(&mut self, phy_addr: u8, reg_addr: u8) -> Result<u16> {
        (**self).read(phy_addr, reg_addr)
    }

    fn write(&mut self, phy_addr: u8, reg_addr: u8, value: u16) -> Result<()> {
        (**self).write(phy_addr, reg_addr, value)
    }

    fn read_mmd(&mut self, phy_addr: u8, devad: u8, reg: u16) -> Result<u16> {
        (**self).read_mmd(phy_addr, devad, reg)
    }

    fn write_mmd(&mut self, phy_addr: u8, devad: u8, reg: u16, value: u16) -> Result<()> {
        (**self).write_mmd(phy_addr, devad, reg, value)
    }
}

// =============================================================================
// Clause 22 Indirect MMD Access
// =============================================================================

/// Clause 45 register access tunnelled through Clause 22 registers 13/14
///
/// Exposed so that a bus overriding the MMD methods for some devices can
/// still fall back to the indirect sequence for others.
pub mod indirect {
    use super::*;

    /// Select `devad`/`reg` and switch the window to data mode
    fn select<M: MdioBus + ?Sized>(mdio: &mut M, phy_addr: u8, devad: u8, reg: u16) -> Result<()> {
        check_address(phy_addr, phy_reg::MMD_CTRL)?;
        let devad = u16::from(devad) & mmd_ctrl::DEVAD_MASK;
        mdio.write(phy_addr, phy_reg::MMD_CTRL, mmd_ctrl::FUNC_ADDRESS | devad)?;
        mdio.write(phy_addr, phy_reg::MMD_DATA, reg)?;
        mdio.write(phy_addr, phy_reg::MMD_CTRL, mmd_ctrl::FUNC_DATA | devad)
    }

    /// Read an MMD register through the indirect window
    pub fn read<M: MdioBus + ?Sized>(mdio: &mut M, phy_addr: u8, devad: u8, reg: u16) -> Result<u16> {
        select(mdio, phy_addr, devad, reg)?;
        mdio.read(phy_addr, phy_reg::MMD_DATA)
    }

    /// Write an MMD register through the indirect window
    pub fn write<M: MdioBus + ?Sized>(
        mdio: &mut M,
        phy_addr: u8,
        devad: u8,
        reg: u16,
        value: u16,
    ) -> Result<()> {
        select(mdio, phy_addr, devad, reg)?;
        mdio.write(phy_addr, phy_reg::MMD_DATA, value)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
