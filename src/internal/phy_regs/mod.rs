//! PHY Register Definitions
//!
//! Register definitions for PHY devices accessed via MDIO.
//!
//! # Module Organization
//!
//! - [`standard`] - IEEE 802.3 Clause 22 standard PHY registers
//! - [`ar803x`] - AR803x vendor registers, debug registers and MMD7 fields
//!
//! # Access Method
//!
//! Clause 22 registers are read and written directly through
//! [`MdioBus`](crate::hal::mdio::MdioBus). Debug registers go through the
//! vendor address/data port (0x1D/0x1E); MMD registers through the
//! Clause 22 indirect window (13/14) unless the bus overrides it.

pub mod ar803x;
pub mod standard;
