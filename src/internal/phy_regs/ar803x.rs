//! AR803x Vendor-Specific Register Definitions
//!
//! Register definitions for the Qualcomm Atheros AR8021/AR8031/AR8033/AR8035
//! Gigabit Ethernet PHYs.
//!
//! # Module Organization
//!
//! - `phy_id`: PHY identifiers and detection masks
//! - `reg`: Clause 22 vendor registers (debug port)
//! - `debug`: Debug register indices and bits
//! - `mmd7`: MMD device 7 registers (CLK_25M output control)
//! - `ar8021`: Fixed bring-up values for the AR8021
//! - `timing`: Hardware reset timing
//!
//! # References
//!
//! - AR8031 / AR8033 / AR8035 datasheets

#![allow(dead_code)]

// =============================================================================
// PHY Identifiers
// =============================================================================

/// PHY identifier constants (`(PHYIDR1 << 16) | PHYIDR2`)
pub mod phy_id {
    /// AR8021
    pub const AR8021: u32 = 0x004D_D040;
    /// AR8021 detection mask
    pub const AR8021_MASK: u32 = 0x004F_FFF0;
    /// AR8031 / AR8033
    pub const AR8031: u32 = 0x004D_D074;
    /// AR8035
    pub const AR8035: u32 = 0x004D_D072;
    /// AR8031/AR8035 detection mask (bit 4 distinguishes neither)
    pub const AR803X_MASK: u32 = 0xFFFF_FFEF;
}

// =============================================================================
// Vendor Clause 22 Registers
// =============================================================================

/// AR803x vendor-specific register addresses
pub mod reg {
    /// Debug port address offset register
    pub const DEBUG_ADDR: u8 = 0x1D;
    /// Debug port data register
    pub const DEBUG_DATA: u8 = 0x1E;
}

// =============================================================================
// Debug Registers
// =============================================================================

/// Debug register indices and bits (reached through the debug port)
pub mod debug {
    /// Debug register 0x00 (analog test control)
    pub const REG_0: u16 = 0x00;
    /// RGMII RX clock delay enable (register 0x00)
    pub const RGMII_RX_CLK_DLY: u16 = 1 << 15;

    /// Debug register 0x05 (SerDes test and system mode control)
    pub const REG_5: u16 = 0x05;
    /// RGMII TX clock delay enable (register 0x05)
    pub const RGMII_TX_CLK_DLY: u16 = 1 << 8;

    /// Debug register 0x1F (chip configuration)
    pub const REG_1F: u16 = 0x1F;
    /// Keep the internal PLL running in power-saving states (register 0x1F)
    pub const PLL_ON: u16 = 1 << 2;
    /// 1.8 V RGMII I/O voltage (register 0x1F)
    pub const RGMII_1V8: u16 = 1 << 3;
}

// =============================================================================
// MMD Device 7 Registers
// =============================================================================

/// MMD device 7 (vendor AN) registers
pub mod mmd7 {
    /// MMD device address
    pub const DEVAD: u8 = 7;

    /// CLK_25M output control register
    pub const CLK25M: u16 = 0x8016;

    /// CLK_25M frequency select: 25 MHz from crystal
    pub const CLK_OUT_25MHZ_XTAL: u16 = 0 << 2;
    /// CLK_25M frequency select: 25 MHz from DSP
    pub const CLK_OUT_25MHZ_DSP: u16 = 1 << 2;
    /// CLK_25M frequency select: 50 MHz from PLL
    pub const CLK_OUT_50MHZ_PLL: u16 = 2 << 2;
    /// CLK_25M frequency select: 50 MHz from DSP
    pub const CLK_OUT_50MHZ_DSP: u16 = 3 << 2;
    /// CLK_25M frequency select: 62.5 MHz from PLL
    pub const CLK_OUT_62_5MHZ_PLL: u16 = 4 << 2;
    /// CLK_25M frequency select: 62.5 MHz from DSP
    pub const CLK_OUT_62_5MHZ_DSP: u16 = 5 << 2;
    /// CLK_25M frequency select: 125 MHz from PLL
    pub const CLK_OUT_125MHZ_PLL: u16 = 6 << 2;
    /// CLK_25M frequency select: 125 MHz from DSP
    pub const CLK_OUT_125MHZ_DSP: u16 = 7 << 2;
    /// CLK_25M frequency select field
    pub const CLK_OUT_MASK: u16 = 7 << 2;

    /// CLK_25M drive strength: full
    pub const CLK_OUT_STRENGTH_FULL: u16 = 0 << 6;
    /// CLK_25M drive strength: half
    pub const CLK_OUT_STRENGTH_HALF: u16 = 1 << 6;
    /// CLK_25M drive strength: quarter
    pub const CLK_OUT_STRENGTH_QUARTER: u16 = 2 << 6;
    /// CLK_25M drive strength field
    pub const CLK_OUT_STRENGTH_MASK: u16 = 3 << 6;
}

// =============================================================================
// AR8021 Bring-up Values
// =============================================================================

/// Fixed register values written during AR8021 configuration
pub mod ar8021 {
    /// BMCR: auto-negotiation enable + restart
    pub const BMCR_INIT: u16 = 0x1200;
    /// Debug register 0x05 value
    pub const DEBUG_REG_5_INIT: u16 = 0x3D47;
}

// =============================================================================
// Timing
// =============================================================================

/// Hardware reset timing
pub mod timing {
    /// Reset pulse duration in microseconds (minimum 10 ms after power-up per datasheet)
    pub const RESET_PULSE_US: u32 = 10_000;
    /// Recovery time before the first MDIO access, in microseconds
    pub const RESET_RECOVERY_US: u32 = 1_000;
}
