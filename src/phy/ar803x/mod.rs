//! AR803x PHY Driver
//!
//! Driver for the Qualcomm Atheros AR8021, AR8031/AR8033 and AR8035
//! Gigabit Ethernet PHYs.
//!
//! Configuration happens once, when the PHY is attached:
//!
//! 1. Options are read from the PHY's device-tree node (or supplied with
//!    [`Ar803x::with_options`])
//! 2. The RGMII clock delays are strapped from the interface mode
//! 3. PLL keep-alive, I/O voltage and the CLK_25M output are programmed
//! 4. The gigabit link-mode set is published and auto-negotiation restarted
//!
//! The AR8021 has no configurable options; it receives two fixed register
//! writes instead.
//!
//! # RGMII Delays
//!
//! | Interface    | TX delay (dbg 0x05 bit 8) | RX delay (dbg 0x00 bit 15) |
//! |--------------|---------------------------|----------------------------|
//! | `Rgmii`      | cleared                   | cleared                    |
//! | `RgmiiTxid`  | set                       | cleared                    |
//! | `RgmiiRxid`  | cleared                   | set                        |
//! | `RgmiiId`    | set                       | set                        |
//!
//! The RX delay bit comes out of reset set, so plain RGMII always clears
//! it explicitly.
//!
//! # Example
//!
//! ```ignore
//! use ph_ar803x_phy::phy::{Ar803x, PhyDriver};
//! use ph_ar803x_phy::PhyInterface;
//!
//! let mut phy = Ar803x::probe(&mut mdio, 4)?.with_interface(PhyInterface::RgmiiId);
//! phy.config(&mut mdio, Some(&node))?;
//!
//! if let Some(link) = phy.startup(&mut mdio)? {
//!     mac.set_speed(link.speed);
//!     mac.set_duplex(link.duplex);
//! }
//! ```

pub mod debug;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;

use crate::driver::config::{Ar803xOptions, MissingNodePolicy, PhyInterface};
use crate::driver::error::{ConfigError, Result};
use crate::hal::mdio::{MAX_PHY_ADDR, MdioBus};
use crate::hal::of::OfNode;
use crate::internal::phy_regs::ar803x::{ar8021, debug as dbg, mmd7, phy_id, timing};
use crate::internal::phy_regs::standard::phy_reg;

use self::debug::{mask_debug, write_debug};
use super::generic::{LinkStatus, PhyCapabilities, PhyDriver, genphy};

// =============================================================================
// Driver Table
// =============================================================================

/// Detection and capability record for one chip family
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PhyDriverInfo {
    /// Human-readable chip name
    pub name: &'static str,
    /// PHY identifier (`(PHYIDR1 << 16) | PHYIDR2`)
    pub uid: u32,
    /// Identifier bits compared during detection
    pub mask: u32,
    /// Link modes published after configuration
    pub features: PhyCapabilities,
}

impl PhyDriverInfo {
    /// `true` if `id` belongs to this chip family
    #[must_use]
    pub const fn matches(&self, id: u32) -> bool {
        (id & self.mask) == (self.uid & self.mask)
    }
}

/// AR8021
pub const AR8021_INFO: PhyDriverInfo = PhyDriverInfo {
    name: "AR8021",
    uid: phy_id::AR8021,
    mask: phy_id::AR8021_MASK,
    features: PhyCapabilities::gigabit(),
};

/// AR8031 / AR8033
pub const AR8031_INFO: PhyDriverInfo = PhyDriverInfo {
    name: "AR8031/AR8033",
    uid: phy_id::AR8031,
    mask: phy_id::AR803X_MASK,
    features: PhyCapabilities::gigabit(),
};

/// AR8035
pub const AR8035_INFO: PhyDriverInfo = PhyDriverInfo {
    name: "AR8035",
    uid: phy_id::AR8035,
    mask: phy_id::AR803X_MASK,
    features: PhyCapabilities::gigabit(),
};

/// Supported chip families
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ChipVariant {
    /// AR8021 (fixed bring-up, no options)
    Ar8021,
    /// AR8031 / AR8033
    Ar8031,
    /// AR8035
    Ar8035,
}

impl ChipVariant {
    /// Every variant, in registration order
    pub const ALL: [ChipVariant; 3] = [ChipVariant::Ar8021, ChipVariant::Ar8031, ChipVariant::Ar8035];

    /// Driver table entry
    #[must_use]
    pub const fn info(self) -> &'static PhyDriverInfo {
        match self {
            ChipVariant::Ar8021 => &AR8021_INFO,
            ChipVariant::Ar8031 => &AR8031_INFO,
            ChipVariant::Ar8035 => &AR8035_INFO,
        }
    }

    /// Chip name
    #[must_use]
    pub const fn name(self) -> &'static str {
        self.info().name
    }

    /// Whether the chip takes device-tree options and delay straps
    #[must_use]
    pub const fn is_configurable(self) -> bool {
        !matches!(self, ChipVariant::Ar8021)
    }

    /// Identify the chip from its PHY identifier
    pub fn from_phy_id(id: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|chip| chip.info().matches(id))
    }
}

// =============================================================================
// Configuration Steps
// =============================================================================

/// Strap the RGMII clock delays for `interface`
///
/// TX first, then RX. A delay that the interface does not ask for is
/// cleared. Stops at the first bus error; earlier writes stay in place.
pub fn configure_delays<M: MdioBus>(mdio: &mut M, phy_addr: u8, interface: PhyInterface) -> Result<()> {
    if interface.wants_tx_delay() {
        mask_debug(mdio, phy_addr, dbg::REG_5, 0, dbg::RGMII_TX_CLK_DLY)?;
    } else {
        mask_debug(mdio, phy_addr, dbg::REG_5, dbg::RGMII_TX_CLK_DLY, 0)?;
    }

    if interface.wants_rx_delay() {
        mask_debug(mdio, phy_addr, dbg::REG_0, 0, dbg::RGMII_RX_CLK_DLY)
    } else {
        mask_debug(mdio, phy_addr, dbg::REG_0, dbg::RGMII_RX_CLK_DLY, 0)
    }
}

/// Program PLL keep-alive, I/O voltage and the CLK_25M output
///
/// Debug register 0x1F is always written so both bits end up in a known
/// state. CLK_25M is only touched when `options` owns some of its bits.
pub fn apply_options<M: MdioBus>(mdio: &mut M, phy_addr: u8, options: &Ar803xOptions) -> Result<()> {
    let (clear, set) = options.debug_1f_masks();
    mask_debug(mdio, phy_addr, dbg::REG_1F, clear, set)?;

    if options.clk_25m_mask == 0 {
        #[cfg(feature = "defmt")]
        defmt::debug!("CLK_25M not configured, skipping MMD write");
        return Ok(());
    }

    let value = mdio.read_mmd(phy_addr, mmd7::DEVAD, mmd7::CLK25M)?;
    let value = (value & !options.clk_25m_mask) | options.clk_25m_reg;
    mdio.write_mmd(phy_addr, mmd7::DEVAD, mmd7::CLK25M, value)
}

// =============================================================================
// AR803x Driver
// =============================================================================

/// AR803x PHY driver
///
/// This variant does not include a hardware reset pin. Use
/// [`Ar803xWithReset`] if you need hardware reset control.
#[derive(Debug, Clone)]
pub struct Ar803x {
    /// PHY address on MDIO bus (0-31)
    addr: u8,
    /// Chip family
    chip: ChipVariant,
    /// MAC interface mode
    interface: PhyInterface,
    /// What to do when the PHY has no device-tree node
    missing_node_policy: MissingNodePolicy,
    /// Options supplied through the builder, used instead of the node
    preset: Option<Ar803xOptions>,
    /// Options applied by the last successful `config`
    options: Option<Ar803xOptions>,
    /// Published link modes
    supported: PhyCapabilities,
}

impl Ar803x {
    /// Create a new driver for `chip` at `addr`
    ///
    /// The interface defaults to plain RGMII and a missing device-tree
    /// node is rejected.
    #[must_use]
    pub const fn new(addr: u8, chip: ChipVariant) -> Self {
        Self {
            addr,
            chip,
            interface: PhyInterface::Rgmii,
            missing_node_policy: MissingNodePolicy::Reject,
            preset: None,
            options: None,
            supported: PhyCapabilities::none(),
        }
    }

    /// Set the MAC interface mode
    #[must_use]
    pub const fn with_interface(mut self, interface: PhyInterface) -> Self {
        self.interface = interface;
        self
    }

    /// Set the missing device-tree node policy
    #[must_use]
    pub const fn with_missing_node_policy(mut self, policy: MissingNodePolicy) -> Self {
        self.missing_node_policy = policy;
        self
    }

    /// Use `options` instead of parsing the device-tree node
    #[must_use]
    pub const fn with_options(mut self, options: Ar803xOptions) -> Self {
        self.preset = Some(options);
        self
    }

    /// Detect the chip at `addr`
    ///
    /// # Errors
    ///
    /// - [`ConfigError::InvalidPhyAddress`] if `addr` is above 31
    /// - [`ConfigError::UnsupportedPhy`] if the identifier matches no chip
    /// - Bus errors from reading the identifier registers
    pub fn probe<M: MdioBus>(mdio: &mut M, addr: u8) -> Result<Self> {
        if addr > MAX_PHY_ADDR {
            return Err(ConfigError::InvalidPhyAddress.into());
        }

        let id = genphy::read_phy_id(mdio, addr)?;
        match ChipVariant::from_phy_id(id) {
            Some(chip) => {
                #[cfg(feature = "defmt")]
                defmt::debug!("PHY {=u8}: {=str} (id {=u32:#010x})", addr, chip.name(), id);
                Ok(Self::new(addr, chip))
            }
            None => {
                #[cfg(feature = "defmt")]
                defmt::warn!("PHY {=u8}: unsupported id {=u32:#010x}", addr, id);
                Err(ConfigError::UnsupportedPhy.into())
            }
        }
    }

    /// Chip family
    #[must_use]
    pub const fn chip(&self) -> ChipVariant {
        self.chip
    }

    /// MAC interface mode
    #[must_use]
    pub const fn interface(&self) -> PhyInterface {
        self.interface
    }

    /// Options applied by the last successful configuration
    ///
    /// `None` before configuration, for the AR8021, and when a missing
    /// node was tolerated.
    #[must_use]
    pub const fn options(&self) -> Option<&Ar803xOptions> {
        self.options.as_ref()
    }

    /// Resolve the options for this attach
    fn load_options<N: OfNode>(&self, node: Option<&N>) -> Result<Option<Ar803xOptions>> {
        if let Some(preset) = self.preset {
            return Ok(Some(preset));
        }

        match Ar803xOptions::from_node(node) {
            Ok(options) => Ok(Some(options)),
            Err(ConfigError::MissingNode) if self.missing_node_policy == MissingNodePolicy::UseDefaults => {
                #[cfg(feature = "defmt")]
                defmt::warn!("PHY {=u8}: no device-tree node, using defaults", self.addr);
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }

    fn config_ar8021<M: MdioBus>(&mut self, mdio: &mut M) -> Result<()> {
        mdio.write(self.addr, phy_reg::BMCR, ar8021::BMCR_INIT)?;
        write_debug(mdio, self.addr, dbg::REG_5, ar8021::DEBUG_REG_5_INIT)?;

        self.supported = self.chip.info().features;
        Ok(())
    }

    fn config_ar803x<M: MdioBus, N: OfNode>(&mut self, mdio: &mut M, node: Option<&N>) -> Result<()> {
        let options = self.load_options(node)?;

        configure_delays(mdio, self.addr, self.interface)?;

        if let Some(options) = &options {
            apply_options(mdio, self.addr, options)?;
        }

        self.options = options;
        self.supported = self.chip.info().features;

        genphy::config_aneg(mdio, self.addr, &self.supported)?;
        genphy::restart_aneg(mdio, self.addr)
    }
}

impl PhyDriver for Ar803x {
    fn address(&self) -> u8 {
        self.addr
    }

    fn config<M: MdioBus, N: OfNode>(&mut self, mdio: &mut M, node: Option<&N>) -> Result<()> {
        #[cfg(feature = "defmt")]
        defmt::debug!("PHY {=u8}: configuring {=str}", self.addr, self.chip.name());

        let result = if self.chip.is_configurable() {
            self.config_ar803x(mdio, node)
        } else {
            self.config_ar8021(mdio)
        };

        #[cfg(feature = "defmt")]
        if let Err(e) = &result {
            defmt::error!("PHY {=u8}: configuration failed: {}", self.addr, e);
        }

        result
    }

    fn startup<M: MdioBus>(&mut self, mdio: &mut M) -> Result<Option<LinkStatus>> {
        genphy::startup(mdio, self.addr, &self.supported)
    }

    fn shutdown<M: MdioBus>(&mut self, mdio: &mut M) -> Result<()> {
        genphy::shutdown(mdio, self.addr)
    }

    fn supported(&self) -> PhyCapabilities {
        self.supported
    }
}

// =============================================================================
// AR803x with Hardware Reset
// =============================================================================

/// AR803x PHY driver with hardware reset pin
///
/// # Example
///
/// ```ignore
/// use ph_ar803x_phy::phy::{Ar803x, Ar803xWithReset, ChipVariant, PhyDriver};
///
/// let reset_pin = io.pins.gpio5.into_push_pull_output();
/// let mut phy = Ar803xWithReset::new(Ar803x::new(0, ChipVariant::Ar8035), reset_pin);
///
/// phy.hardware_reset(&mut delay)?;
/// phy.config(&mut mdio, Some(&node))?;
/// ```
#[derive(Debug)]
pub struct Ar803xWithReset<RST: OutputPin> {
    /// Inner PHY driver
    inner: Ar803x,
    /// Reset pin (active low)
    reset_pin: RST,
}

impl<RST: OutputPin> Ar803xWithReset<RST> {
    /// Wrap `inner` with a reset pin
    ///
    /// The pin is driven high (inactive) immediately.
    pub fn new(inner: Ar803x, mut reset_pin: RST) -> Self {
        let _ = reset_pin.set_high();
        Self { inner, reset_pin }
    }

    /// Pulse the reset pin and wait for the PHY to recover
    ///
    /// Straps are re-latched on reset, so call this before `config`.
    pub fn hardware_reset<D: DelayNs>(&mut self, delay: &mut D) -> Result<()> {
        self.assert_reset()?;
        delay.delay_us(timing::RESET_PULSE_US);

        self.deassert_reset()?;
        delay.delay_us(timing::RESET_RECOVERY_US);

        Ok(())
    }

    /// Hold the PHY in reset
    pub fn assert_reset(&mut self) -> Result<()> {
        self.reset_pin.set_low().map_err(|_| ConfigError::GpioError)?;
        Ok(())
    }

    /// Release the PHY from reset
    ///
    /// Wait at least 1 ms before the first MDIO access.
    pub fn deassert_reset(&mut self) -> Result<()> {
        self.reset_pin.set_high().map_err(|_| ConfigError::GpioError)?;
        Ok(())
    }

    /// The wrapped driver
    pub fn inner(&self) -> &Ar803x {
        &self.inner
    }

    /// Release the reset pin
    pub fn into_parts(self) -> (Ar803x, RST) {
        (self.inner, self.reset_pin)
    }
}

impl<RST: OutputPin> PhyDriver for Ar803xWithReset<RST> {
    fn address(&self) -> u8 {
        self.inner.address()
    }

    fn config<M: MdioBus, N: OfNode>(&mut self, mdio: &mut M, node: Option<&N>) -> Result<()> {
        self.inner.config(mdio, node)
    }

    fn startup<M: MdioBus>(&mut self, mdio: &mut M) -> Result<Option<LinkStatus>> {
        self.inner.startup(mdio)
    }

    fn shutdown<M: MdioBus>(&mut self, mdio: &mut M) -> Result<()> {
        self.inner.shutdown(mdio)
    }

    fn supported(&self) -> PhyCapabilities {
        self.inner.supported()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
