//! Generic PHY Driver Trait
//!
//! This module defines the lifecycle interface every PHY driver exposes to
//! the host, plus the IEEE 802.3 Clause 22 "generic PHY" helpers that
//! vendor drivers delegate to once their own configuration is done.

use crate::driver::config::{Duplex, Speed};
use crate::driver::error::Result;
use crate::hal::mdio::MdioBus;
use crate::hal::of::OfNode;

// =============================================================================
// Link Status
// =============================================================================

/// Ethernet link status information
///
/// Contains the negotiated or configured link parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LinkStatus {
    /// Link speed
    pub speed: Speed,
    /// Duplex mode
    pub duplex: Duplex,
}

impl LinkStatus {
    /// Create a new link status
    pub const fn new(speed: Speed, duplex: Duplex) -> Self {
        Self { speed, duplex }
    }

    /// 1000 Mbps Full Duplex
    pub const fn gigabit_full() -> Self {
        Self::new(Speed::Mbps1000, Duplex::Full)
    }

    /// 100 Mbps Full Duplex
    pub const fn fast_full() -> Self {
        Self::new(Speed::Mbps100, Duplex::Full)
    }

    /// 10 Mbps Half Duplex
    pub const fn slow_half() -> Self {
        Self::new(Speed::Mbps10, Duplex::Half)
    }
}

// =============================================================================
// PHY Capabilities
// =============================================================================

/// PHY hardware capabilities
///
/// Published by a driver as its supported link-mode set and used by the
/// generic layer to build the auto-negotiation advertisement.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PhyCapabilities {
    /// Supports 1000BASE-T Full Duplex
    pub speed_1000_fd: bool,
    /// Supports 1000BASE-T Half Duplex
    pub speed_1000_hd: bool,
    /// Supports 100BASE-TX Full Duplex
    pub speed_100_fd: bool,
    /// Supports 100BASE-TX Half Duplex
    pub speed_100_hd: bool,
    /// Supports 10BASE-T Full Duplex
    pub speed_10_fd: bool,
    /// Supports 10BASE-T Half Duplex
    pub speed_10_hd: bool,
    /// Supports auto-negotiation
    pub auto_negotiation: bool,
    /// Supports PAUSE flow control
    pub pause: bool,
    /// Supports asymmetric PAUSE
    pub pause_asymmetric: bool,
}

impl PhyCapabilities {
    /// No capabilities (driver not configured yet)
    pub const fn none() -> Self {
        Self {
            speed_1000_fd: false,
            speed_1000_hd: false,
            speed_100_fd: false,
            speed_100_hd: false,
            speed_10_fd: false,
            speed_10_hd: false,
            auto_negotiation: false,
            pause: false,
            pause_asymmetric: false,
        }
    }

    /// 10/100 Mbps PHY capabilities
    pub const fn standard_10_100() -> Self {
        Self {
            speed_100_fd: true,
            speed_100_hd: true,
            speed_10_fd: true,
            speed_10_hd: true,
            auto_negotiation: true,
            ..Self::none()
        }
    }

    /// 10/100/1000 Mbps PHY capabilities
    pub const fn gigabit() -> Self {
        Self {
            speed_1000_fd: true,
            speed_1000_hd: true,
            ..Self::standard_10_100()
        }
    }

    /// Any gigabit mode is supported
    pub const fn has_gigabit(&self) -> bool {
        self.speed_1000_fd || self.speed_1000_hd
    }
}

// =============================================================================
// PHY Driver Trait
// =============================================================================

/// Lifecycle interface of a PHY driver
///
/// The host calls [`config`](PhyDriver::config) once when the PHY is
/// attached, [`startup`](PhyDriver::startup) whenever it brings the
/// interface up, and [`shutdown`](PhyDriver::shutdown) when it tears it
/// down. A `config` error means the attach failed; there is no retry.
pub trait PhyDriver {
    /// Get the PHY address (0-31)
    fn address(&self) -> u8;

    /// Configure the PHY and start auto-negotiation
    fn config<M: MdioBus, N: OfNode>(&mut self, mdio: &mut M, node: Option<&N>) -> Result<()>;

    /// Bring the link up and resolve speed/duplex
    ///
    /// Returns `None` while the link is down.
    fn startup<M: MdioBus>(&mut self, mdio: &mut M) -> Result<Option<LinkStatus>>;

    /// Stop using the PHY
    fn shutdown<M: MdioBus>(&mut self, mdio: &mut M) -> Result<()>;

    /// Link modes published by the last successful `config`
    fn supported(&self) -> PhyCapabilities;
}

// =============================================================================
// Generic PHY Layer
// =============================================================================

/// Generic IEEE 802.3 Clause 22 PHY operations
pub mod genphy {
    use super::*;
    use crate::internal::phy_regs::standard::{anar, bmcr, bmsr, ctrl1000, phy_reg, stat1000};

    /// Read the 32-bit PHY identifier: `(PHYIDR1 << 16) | PHYIDR2`
    pub fn read_phy_id<M: MdioBus>(mdio: &mut M, phy_addr: u8) -> Result<u32> {
        let id1 = mdio.read(phy_addr, phy_reg::PHYIDR1)? as u32;
        let id2 = mdio.read(phy_addr, phy_reg::PHYIDR2)? as u32;
        Ok((id1 << 16) | id2)
    }

    /// Write the advertisement registers from `supported`
    ///
    /// Returns `true` if any advertisement changed.
    fn config_advert<M: MdioBus>(
        mdio: &mut M,
        phy_addr: u8,
        supported: &PhyCapabilities,
    ) -> Result<bool> {
        let mut changed = false;

        let old = mdio.read(phy_addr, phy_reg::ANAR)?;
        let mut adv = old & !anar::ALL;
        if supported.speed_10_hd {
            adv |= anar::T10_HD;
        }
        if supported.speed_10_fd {
            adv |= anar::T10_FD;
        }
        if supported.speed_100_hd {
            adv |= anar::TX_HD;
        }
        if supported.speed_100_fd {
            adv |= anar::TX_FD;
        }
        if supported.pause {
            adv |= anar::PAUSE;
        }
        if supported.pause_asymmetric {
            adv |= anar::PAUSE_ASYM;
        }
        if adv != old {
            mdio.write(phy_addr, phy_reg::ANAR, adv)?;
            changed = true;
        }

        // 1000BASE-T control only exists behind the extended status bit
        let status = mdio.read(phy_addr, phy_reg::BMSR)?;
        if status & bmsr::ESTATUS == 0 {
            return Ok(changed);
        }

        let old = mdio.read(phy_addr, phy_reg::CTRL1000)?;
        let mut adv = old & !(ctrl1000::ADV_1000_FD | ctrl1000::ADV_1000_HD);
        if supported.speed_1000_hd {
            adv |= ctrl1000::ADV_1000_HD;
        }
        if supported.speed_1000_fd {
            adv |= ctrl1000::ADV_1000_FD;
        }
        if adv != old {
            mdio.write(phy_addr, phy_reg::CTRL1000, adv)?;
            changed = true;
        }

        Ok(changed)
    }

    /// Program the advertisement and restart auto-negotiation if needed
    ///
    /// Negotiation is restarted when the advertisement changed, or when
    /// BMCR shows auto-negotiation disabled or the PHY isolated.
    pub fn config_aneg<M: MdioBus>(
        mdio: &mut M,
        phy_addr: u8,
        supported: &PhyCapabilities,
    ) -> Result<()> {
        let mut changed = config_advert(mdio, phy_addr, supported)?;

        if !changed {
            let ctl = mdio.read(phy_addr, phy_reg::BMCR)?;
            changed = ctl & bmcr::AN_ENABLE == 0 || ctl & bmcr::ISOLATE != 0;
        }

        if changed {
            restart_aneg(mdio, phy_addr)?;
        }
        Ok(())
    }

    /// Enable and restart auto-negotiation, leaving isolation
    pub fn restart_aneg<M: MdioBus>(mdio: &mut M, phy_addr: u8) -> Result<()> {
        let ctl = mdio.read(phy_addr, phy_reg::BMCR)?;
        mdio.write(
            phy_addr,
            phy_reg::BMCR,
            (ctl | bmcr::AN_ENABLE | bmcr::AN_RESTART) & !bmcr::ISOLATE,
        )
    }

    /// Update link state and resolve speed/duplex
    ///
    /// BMSR link status latches low, so it is read twice: the first read
    /// clears a stale link-down event. Returns `None` while the link is
    /// down or negotiation is still running.
    pub fn startup<M: MdioBus>(
        mdio: &mut M,
        phy_addr: u8,
        supported: &PhyCapabilities,
    ) -> Result<Option<LinkStatus>> {
        let _ = mdio.read(phy_addr, phy_reg::BMSR)?;
        let status = mdio.read(phy_addr, phy_reg::BMSR)?;
        if status & bmsr::LINK_STATUS == 0 {
            return Ok(None);
        }

        let ctl = mdio.read(phy_addr, phy_reg::BMCR)?;
        if ctl & bmcr::AN_ENABLE == 0 {
            return Ok(Some(forced_link(ctl)));
        }
        if status & bmsr::AN_COMPLETE == 0 {
            return Ok(None);
        }

        if supported.has_gigabit() {
            let lpa = mdio.read(phy_addr, phy_reg::STAT1000)?;
            let adv = mdio.read(phy_addr, phy_reg::CTRL1000)?;
            let common = (lpa >> stat1000::LP_SHIFT) & adv;
            if common & ctrl1000::ADV_1000_FD != 0 {
                return Ok(Some(LinkStatus::new(Speed::Mbps1000, Duplex::Full)));
            }
            if common & ctrl1000::ADV_1000_HD != 0 {
                return Ok(Some(LinkStatus::new(Speed::Mbps1000, Duplex::Half)));
            }
        }

        let lpa = mdio.read(phy_addr, phy_reg::ANLPAR)?;
        let adv = mdio.read(phy_addr, phy_reg::ANAR)?;
        let common = lpa & adv;

        let link = if common & anar::TX_FD != 0 {
            LinkStatus::new(Speed::Mbps100, Duplex::Full)
        } else if common & anar::TX_HD != 0 {
            LinkStatus::new(Speed::Mbps100, Duplex::Half)
        } else if common & anar::T10_FD != 0 {
            LinkStatus::new(Speed::Mbps10, Duplex::Full)
        } else {
            LinkStatus::new(Speed::Mbps10, Duplex::Half)
        };
        Ok(Some(link))
    }

    /// Speed/duplex from BMCR when auto-negotiation is off
    fn forced_link(ctl: u16) -> LinkStatus {
        let speed = if ctl & bmcr::SPEED_1000 != 0 {
            Speed::Mbps1000
        } else if ctl & bmcr::SPEED_100 != 0 {
            Speed::Mbps100
        } else {
            Speed::Mbps10
        };

        let duplex = if ctl & bmcr::DUPLEX_FULL != 0 {
            Duplex::Full
        } else {
            Duplex::Half
        };

        LinkStatus::new(speed, duplex)
    }

    /// Generic shutdown: nothing to do at the register level
    pub fn shutdown<M: MdioBus>(_mdio: &mut M, _phy_addr: u8) -> Result<()> {
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
