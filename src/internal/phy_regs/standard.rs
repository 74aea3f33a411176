//! IEEE 802.3 PHY Register Definitions
//!
//! Standard Clause 22 register addresses and bit definitions used by the
//! generic PHY layer and the MDIO indirect MMD window.
//!
//! | Register | Name | Description |
//! |----------|------|-------------|
//! | 0 | BMCR | Basic Mode Control |
//! | 1 | BMSR | Basic Mode Status |
//! | 2 | PHYIDR1 | PHY Identifier 1 |
//! | 3 | PHYIDR2 | PHY Identifier 2 |
//! | 4 | ANAR | Auto-Negotiation Advertisement |
//! | 5 | ANLPAR | Link Partner Ability |
//! | 9 | CTRL1000 | 1000BASE-T Control |
//! | 10 | STAT1000 | 1000BASE-T Status |
//! | 13 | MMD_CTRL | MMD Access Control |
//! | 14 | MMD_DATA | MMD Access Address/Data |
//! | 15 | ESTATUS | Extended Status |

// Complete register maps, not every bit is referenced
#![allow(dead_code)]

// =============================================================================
// Standard PHY Register Addresses
// =============================================================================

/// Standard PHY register addresses (IEEE 802.3 Clause 22)
pub mod phy_reg {
    /// Basic Mode Control Register
    pub const BMCR: u8 = 0;
    /// Basic Mode Status Register
    pub const BMSR: u8 = 1;
    /// PHY Identifier 1
    pub const PHYIDR1: u8 = 2;
    /// PHY Identifier 2
    pub const PHYIDR2: u8 = 3;
    /// Auto-Negotiation Advertisement Register
    pub const ANAR: u8 = 4;
    /// Auto-Negotiation Link Partner Ability Register
    pub const ANLPAR: u8 = 5;
    /// Auto-Negotiation Expansion Register
    pub const ANER: u8 = 6;
    /// 1000BASE-T Control Register
    pub const CTRL1000: u8 = 9;
    /// 1000BASE-T Status Register
    pub const STAT1000: u8 = 10;
    /// MMD Access Control Register
    pub const MMD_CTRL: u8 = 13;
    /// MMD Access Address/Data Register
    pub const MMD_DATA: u8 = 14;
    /// Extended Status Register
    pub const ESTATUS: u8 = 15;
}

// =============================================================================
// BMCR - Basic Mode Control Register (Register 0)
// =============================================================================

/// BMCR (Basic Mode Control Register) bits
pub mod bmcr {
    /// Soft reset - self-clearing
    pub const RESET: u16 = 1 << 15;
    /// Loopback mode
    pub const LOOPBACK: u16 = 1 << 14;
    /// Speed select LSB (100 Mbps if set alone)
    pub const SPEED_100: u16 = 1 << 13;
    /// Auto-negotiation enable
    pub const AN_ENABLE: u16 = 1 << 12;
    /// Power down
    pub const POWER_DOWN: u16 = 1 << 11;
    /// Isolate PHY from the MAC interface
    pub const ISOLATE: u16 = 1 << 10;
    /// Restart auto-negotiation - self-clearing
    pub const AN_RESTART: u16 = 1 << 9;
    /// Duplex mode (full duplex if set)
    pub const DUPLEX_FULL: u16 = 1 << 8;
    /// Speed select MSB (1000 Mbps if set alone)
    pub const SPEED_1000: u16 = 1 << 6;
}

// =============================================================================
// BMSR - Basic Mode Status Register (Register 1)
// =============================================================================

/// BMSR (Basic Mode Status Register) bits
pub mod bmsr {
    /// 100BASE-T4 capable
    pub const T4_CAPABLE: u16 = 1 << 15;
    /// 100BASE-TX full duplex capable
    pub const TX_FD_CAPABLE: u16 = 1 << 14;
    /// 100BASE-TX half duplex capable
    pub const TX_HD_CAPABLE: u16 = 1 << 13;
    /// 10BASE-T full duplex capable
    pub const T10_FD_CAPABLE: u16 = 1 << 12;
    /// 10BASE-T half duplex capable
    pub const T10_HD_CAPABLE: u16 = 1 << 11;
    /// Extended status register present
    pub const ESTATUS: u16 = 1 << 8;
    /// Auto-negotiation complete
    pub const AN_COMPLETE: u16 = 1 << 5;
    /// Remote fault detected
    pub const REMOTE_FAULT: u16 = 1 << 4;
    /// Auto-negotiation ability
    pub const AN_ABILITY: u16 = 1 << 3;
    /// Link status (latched low)
    pub const LINK_STATUS: u16 = 1 << 2;
    /// Jabber condition detected
    pub const JABBER_DETECT: u16 = 1 << 1;
    /// Extended register capabilities
    pub const EXT_CAPABLE: u16 = 1 << 0;
}

// =============================================================================
// ANAR / ANLPAR - Advertisement and Link Partner Ability (Registers 4, 5)
// =============================================================================

/// ANAR / ANLPAR bits (shared layout)
pub mod anar {
    /// Next page indication
    pub const NEXT_PAGE: u16 = 1 << 15;
    /// Acknowledge
    pub const ACK: u16 = 1 << 14;
    /// Remote fault
    pub const REMOTE_FAULT: u16 = 1 << 13;
    /// Asymmetric pause
    pub const PAUSE_ASYM: u16 = 1 << 11;
    /// Pause capable
    pub const PAUSE: u16 = 1 << 10;
    /// 100BASE-T4
    pub const T4: u16 = 1 << 9;
    /// 100BASE-TX full duplex
    pub const TX_FD: u16 = 1 << 8;
    /// 100BASE-TX half duplex
    pub const TX_HD: u16 = 1 << 7;
    /// 10BASE-T full duplex
    pub const T10_FD: u16 = 1 << 6;
    /// 10BASE-T half duplex
    pub const T10_HD: u16 = 1 << 5;
    /// Selector field mask
    pub const SELECTOR: u16 = 0x001F;
    /// IEEE 802.3 selector value
    pub const SELECTOR_IEEE802_3: u16 = 0x0001;
    /// All speed/duplex/pause bits the generic layer manages
    pub const ALL: u16 = T10_HD | T10_FD | TX_HD | TX_FD | T4 | PAUSE | PAUSE_ASYM;
}

// =============================================================================
// CTRL1000 / STAT1000 - 1000BASE-T Control and Status (Registers 9, 10)
// =============================================================================

/// 1000BASE-T Control Register bits
pub mod ctrl1000 {
    /// Advertise 1000BASE-T full duplex
    pub const ADV_1000_FD: u16 = 1 << 9;
    /// Advertise 1000BASE-T half duplex
    pub const ADV_1000_HD: u16 = 1 << 8;
}

/// 1000BASE-T Status Register bits
///
/// Partner bits sit two positions above the matching CTRL1000 bits.
pub mod stat1000 {
    /// Link partner is 1000BASE-T full duplex capable
    pub const LP_1000_FD: u16 = 1 << 11;
    /// Link partner is 1000BASE-T half duplex capable
    pub const LP_1000_HD: u16 = 1 << 10;
    /// Shift aligning STAT1000 partner bits with CTRL1000 advertisement bits
    pub const LP_SHIFT: u16 = 2;
}

// =============================================================================
// ESTATUS - Extended Status Register (Register 15)
// =============================================================================

/// Extended Status Register bits
pub mod estatus {
    /// 1000BASE-T full duplex capable
    pub const T1000_FD: u16 = 1 << 13;
    /// 1000BASE-T half duplex capable
    pub const T1000_HD: u16 = 1 << 12;
}

// =============================================================================
// MMD Access Control Register (Register 13)
// =============================================================================

/// MMD access control bits (IEEE 802.3 Annex 22D)
pub mod mmd_ctrl {
    /// Function: address
    pub const FUNC_ADDRESS: u16 = 0x0000;
    /// Function: data, no post increment
    pub const FUNC_DATA: u16 = 0x4000;
    /// Device address field
    pub const DEVAD_MASK: u16 = 0x001F;
}
