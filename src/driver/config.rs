//! Configuration types for the AR803x PHY driver
//!
//! [`Ar803xOptions`] is the per-PHY option record applied during
//! configuration. It can be built with the `with_*` methods or parsed from
//! a device-tree node with [`Ar803xOptions::from_node`]; both paths yield the
//! same register value/mask pair.

use crate::driver::error::{ConfigError, ConfigResult};
use crate::hal::of::OfNode;
use crate::internal::phy_regs::ar803x::{debug, mmd7};

/// Device-tree property names understood by the parser
pub mod props {
    /// Keep the internal PLL enabled (boolean)
    pub const KEEP_PLL_ENABLED: &str = "atheros,keep-pll-enabled";
    /// Use 1.8 V RGMII I/O (boolean)
    pub const RGMII_IO_1V8: &str = "atheros,rgmii-io-1v8";
    /// CLK_25M output frequency in Hz (u32)
    pub const CLK_OUT_FREQUENCY: &str = "atheros,clk-out-frequency";
    /// CLK_25M output drive strength (string)
    pub const CLK_OUT_STRENGTH: &str = "atheros,clk-out-strength";
}

/// Ethernet link speed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Speed {
    /// 10 Mbps
    #[default]
    Mbps10,
    /// 100 Mbps
    Mbps100,
    /// 1000 Mbps
    Mbps1000,
}

/// Ethernet duplex mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Duplex {
    /// Half duplex
    #[default]
    Half,
    /// Full duplex
    Full,
}

/// MAC-to-PHY interface mode
///
/// The RGMII variants name which side adds the clock delay: `RgmiiId`
/// asks the PHY for both delays, `RgmiiRxid`/`RgmiiTxid` for one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PhyInterface {
    /// Media Independent Interface
    Mii,
    /// Gigabit Media Independent Interface
    Gmii,
    /// RGMII, delays provided by the MAC or board traces
    #[default]
    Rgmii,
    /// RGMII, PHY adds RX and TX clock delay
    RgmiiId,
    /// RGMII, PHY adds RX clock delay only
    RgmiiRxid,
    /// RGMII, PHY adds TX clock delay only
    RgmiiTxid,
    /// Serial Gigabit Media Independent Interface
    Sgmii,
}

impl PhyInterface {
    /// PHY must delay the TX clock
    pub const fn wants_tx_delay(self) -> bool {
        matches!(self, PhyInterface::RgmiiTxid | PhyInterface::RgmiiId)
    }

    /// PHY must delay the RX clock
    pub const fn wants_rx_delay(self) -> bool {
        matches!(self, PhyInterface::RgmiiRxid | PhyInterface::RgmiiId)
    }
}

/// What to do when the PHY has no device-tree node
///
/// Boards disagree here: some firmware builds never describe the PHY and
/// expect power-on defaults, others treat a missing node as a wiring error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MissingNodePolicy {
    /// Fail configuration with [`ConfigError::MissingNode`]
    #[default]
    Reject,
    /// Continue without options; debug register 0x1F and CLK_25M are left alone
    UseDefaults,
}

/// CLK_25M output frequency (XTAL or PLL sourced)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ClockOutFrequency {
    /// 25 MHz from the crystal
    Xtal25MHz,
    /// 50 MHz from the PLL
    Pll50MHz,
    /// 62.5 MHz from the PLL
    Pll62_5MHz,
    /// 125 MHz from the PLL
    Pll125MHz,
}

impl ClockOutFrequency {
    /// Map a frequency in Hz to a supported output setting
    pub const fn from_hz(hz: u32) -> ConfigResult<Self> {
        match hz {
            25_000_000 => Ok(Self::Xtal25MHz),
            50_000_000 => Ok(Self::Pll50MHz),
            62_500_000 => Ok(Self::Pll62_5MHz),
            125_000_000 => Ok(Self::Pll125MHz),
            _ => Err(ConfigError::InvalidClockFrequency),
        }
    }

    /// Frequency in Hz
    pub const fn hz(self) -> u32 {
        match self {
            Self::Xtal25MHz => 25_000_000,
            Self::Pll50MHz => 50_000_000,
            Self::Pll62_5MHz => 62_500_000,
            Self::Pll125MHz => 125_000_000,
        }
    }

    /// CLK_25M frequency select field value
    pub const fn field(self) -> u16 {
        match self {
            Self::Xtal25MHz => mmd7::CLK_OUT_25MHZ_XTAL,
            Self::Pll50MHz => mmd7::CLK_OUT_50MHZ_PLL,
            Self::Pll62_5MHz => mmd7::CLK_OUT_62_5MHZ_PLL,
            Self::Pll125MHz => mmd7::CLK_OUT_125MHZ_PLL,
        }
    }
}

/// CLK_25M output drive strength
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ClockOutStrength {
    /// Full drive strength
    Full,
    /// Half drive strength
    Half,
    /// Quarter drive strength
    Quarter,
}

impl ClockOutStrength {
    /// Parse the device-tree spelling (`full`, `half`, `quarter`)
    pub fn parse(s: &str) -> ConfigResult<Self> {
        match s {
            "full" => Ok(Self::Full),
            "half" => Ok(Self::Half),
            "quarter" => Ok(Self::Quarter),
            _ => Err(ConfigError::InvalidClockStrength),
        }
    }

    /// CLK_25M strength field value
    pub const fn field(self) -> u16 {
        match self {
            Self::Full => mmd7::CLK_OUT_STRENGTH_FULL,
            Self::Half => mmd7::CLK_OUT_STRENGTH_HALF,
            Self::Quarter => mmd7::CLK_OUT_STRENGTH_QUARTER,
        }
    }
}

/// Per-PHY options applied by the extended register step
///
/// `clk_25m_mask` selects which CLK_25M bits are owned by this record.
/// A zero mask leaves the register untouched (not even read).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Ar803xOptions {
    /// Keep the internal PLL running
    pub keep_pll_enabled: bool,
    /// 1.8 V RGMII I/O voltage instead of the strapped level
    pub rgmii_io_1v8: bool,
    /// CLK_25M bits to set
    pub clk_25m_reg: u16,
    /// CLK_25M bits owned by `clk_25m_reg`
    pub clk_25m_mask: u16,
}

impl Ar803xOptions {
    /// Options with everything disabled and CLK_25M untouched
    #[must_use]
    pub const fn new() -> Self {
        Self {
            keep_pll_enabled: false,
            rgmii_io_1v8: false,
            clk_25m_reg: 0,
            clk_25m_mask: 0,
        }
    }

    // =========================================================================
    // Builder Methods
    // =========================================================================

    /// Keep the internal PLL enabled
    #[must_use]
    pub const fn with_keep_pll_enabled(mut self, enabled: bool) -> Self {
        self.keep_pll_enabled = enabled;
        self
    }

    /// Select 1.8 V RGMII I/O
    #[must_use]
    pub const fn with_rgmii_io_1v8(mut self, enabled: bool) -> Self {
        self.rgmii_io_1v8 = enabled;
        self
    }

    /// Drive CLK_25M at the given frequency
    #[must_use]
    pub const fn with_clock_out_frequency(mut self, freq: ClockOutFrequency) -> Self {
        self.clk_25m_reg = (self.clk_25m_reg & !mmd7::CLK_OUT_MASK) | freq.field();
        self.clk_25m_mask |= mmd7::CLK_OUT_MASK;
        self
    }

    /// Drive CLK_25M with the given strength
    #[must_use]
    pub const fn with_clock_out_strength(mut self, strength: ClockOutStrength) -> Self {
        self.clk_25m_reg = (self.clk_25m_reg & !mmd7::CLK_OUT_STRENGTH_MASK) | strength.field();
        self.clk_25m_mask |= mmd7::CLK_OUT_STRENGTH_MASK;
        self
    }

    // =========================================================================
    // Device Tree
    // =========================================================================

    /// Parse options from the PHY's device-tree node
    ///
    /// A missing or invalid node is [`ConfigError::MissingNode`]; callers
    /// that tolerate it apply their [`MissingNodePolicy`] first.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::MissingNode`] if `node` is `None` or not valid
    /// - [`ConfigError::InvalidClockFrequency`] for a non-zero unsupported frequency
    /// - [`ConfigError::InvalidClockStrength`] for an unknown strength string
    pub fn from_node<N: OfNode>(node: Option<&N>) -> ConfigResult<Self> {
        let node = match node {
            Some(node) if node.is_valid() => node,
            _ => return Err(ConfigError::MissingNode),
        };

        #[cfg(feature = "defmt")]
        defmt::debug!("found PHY node: {=str}", node.name());

        let mut options = Self::new()
            .with_keep_pll_enabled(node.read_bool(props::KEEP_PLL_ENABLED))
            .with_rgmii_io_1v8(node.read_bool(props::RGMII_IO_1V8));

        // Only XTAL and PLL sources can be selected here. The DSP sources
        // are meant for synchronous Ethernet.
        let freq = node.read_u32_default(props::CLK_OUT_FREQUENCY, 0);
        if freq != 0 {
            match ClockOutFrequency::from_hz(freq) {
                Ok(f) => options = options.with_clock_out_frequency(f),
                Err(e) => {
                    #[cfg(feature = "defmt")]
                    defmt::error!("invalid atheros,clk-out-frequency: {=u32}", freq);
                    return Err(e);
                }
            }
        }

        if let Some(strength) = node.read_string(props::CLK_OUT_STRENGTH) {
            match ClockOutStrength::parse(strength) {
                Ok(s) => options = options.with_clock_out_strength(s),
                Err(e) => {
                    #[cfg(feature = "defmt")]
                    defmt::error!("invalid atheros,clk-out-strength: {=str}", strength);
                    return Err(e);
                }
            }
        }

        #[cfg(feature = "defmt")]
        defmt::debug!(
            "keep_pll={} rgmii_1v8={} clk_25m_reg={=u16:#06x}",
            options.keep_pll_enabled,
            options.rgmii_io_1v8,
            options.clk_25m_reg
        );

        Ok(options)
    }

    // =========================================================================
    // Register Values
    // =========================================================================

    /// `(clear, set)` masks for debug register 0x1F
    ///
    /// Every managed bit lands in exactly one of the two masks, so the
    /// resulting register state does not depend on what was there before.
    pub const fn debug_1f_masks(&self) -> (u16, u16) {
        let mut set = 0;
        let mut clear = 0;

        if self.keep_pll_enabled {
            set |= debug::PLL_ON;
        } else {
            clear |= debug::PLL_ON;
        }

        if self.rgmii_io_1v8 {
            set |= debug::RGMII_1V8;
        } else {
            clear |= debug::RGMII_1V8;
        }

        (clear, set)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
