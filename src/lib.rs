//! Atheros AR803x PHY Driver
//!
//! A `no_std`, `no_alloc` driver for the Qualcomm Atheros AR8021, AR8031/AR8033
//! and AR8035 Gigabit Ethernet PHYs.
//!
//! The driver runs once while the board brings up its Ethernet port. It
//! straps the RGMII clock delays, the PLL keep-alive and I/O voltage bits,
//! and the CLK_25M output so that the PHY negotiates correctly with the
//! attached MAC.
//!
//! # Architecture
//!
//! The crate is organized into three layers:
//!
//! 1. **PHY Layer** ([`phy`]): AR803x driver, generic IEEE 802.3 helpers, driver registry
//! 2. **Driver Types** ([`driver`]): Option record, interface modes, errors
//! 3. **HAL Layer** ([`hal`]): MDIO bus and device-tree node interfaces the host implements
//!
//! ## Register Access
//!
//! - **Clause 22**: Standard registers and the vendor debug port (0x1D/0x1E)
//! - **MMD**: Device 7 register 0x8016 (CLK_25M), indirectly via registers 13/14
//!
//! # Supported PHY Chips
//!
//! | Chip          | Identifier    | Mask          |
//! |---------------|---------------|---------------|
//! | AR8021        | `0x004D_D040` | `0x004F_FFF0` |
//! | AR8031/AR8033 | `0x004D_D074` | `0xFFFF_FFEF` |
//! | AR8035        | `0x004D_D072` | `0xFFFF_FFEF` |
//!
//! # Features
//!
//! - `defmt`: Enable defmt logging and formatting for public types
//!
//! # Device Tree Properties
//!
//! | Property                    | Type   | Effect                              |
//! |-----------------------------|--------|-------------------------------------|
//! | `atheros,keep-pll-enabled`  | flag   | Keep the PLL on in power-save        |
//! | `atheros,rgmii-io-1v8`      | flag   | 1.8 V RGMII I/O                     |
//! | `atheros,clk-out-frequency` | u32    | 25 / 50 / 62.5 / 125 MHz on CLK_25M |
//! | `atheros,clk-out-strength`  | string | `full`, `half` or `quarter`         |
//!
//! # Example
//!
//! ```ignore
//! use ph_ar803x_phy::{Ar803x, PhyDriver, PhyInterface, PhyRegistry, register_drivers};
//! use ph_ar803x_phy::hal::{Property, StaticNode};
//!
//! static PHY_NODE: StaticNode<'static> = StaticNode::new(
//!     "ethernet-phy@4",
//!     &[
//!         Property::flag("atheros,keep-pll-enabled"),
//!         Property::u32("atheros,clk-out-frequency", 125_000_000),
//!     ],
//! );
//!
//! let mut registry = PhyRegistry::<4>::new();
//! register_drivers(&mut registry)?;
//!
//! let mut phy = Ar803x::probe(&mut mdio, 4)?.with_interface(PhyInterface::RgmiiId);
//! phy.config(&mut mdio, Some(&PHY_NODE))?;
//!
//! if let Some(link) = phy.startup(&mut mdio)? {
//!     mac.set_speed(link.speed);
//!     mac.set_duplex(link.duplex);
//! }
//! ```

#![no_std]
#![deny(missing_docs)]
#![forbid(unsafe_code)]
// Clippy lint levels live here; the same table is in Cargo.toml.
#![deny(clippy::correctness)]
#![warn(
    clippy::suspicious,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::cloned_instead_of_copied,
    clippy::explicit_iter_loop,
    clippy::implicit_clone,
    clippy::inconsistent_struct_constructor,
    clippy::manual_assert,
    clippy::manual_let_else,
    clippy::match_same_arms,
    clippy::needless_pass_by_value,
    clippy::semicolon_if_nothing_returned,
    clippy::uninlined_format_args,
    clippy::unnested_or_patterns,
    clippy::std_instead_of_core,
    clippy::std_instead_of_alloc,
    clippy::alloc_instead_of_core
)]
#![allow(
    clippy::mod_module_files,
    clippy::self_named_module_files,
    clippy::similar_names,
    clippy::too_many_arguments,
    clippy::struct_excessive_bools,
    clippy::fn_params_excessive_bools,
    clippy::must_use_candidate,
    clippy::assertions_on_constants,
    clippy::cast_possible_truncation,
    clippy::cast_lossless,
    clippy::panic_in_result_fn,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::module_name_repetitions,
    clippy::wildcard_imports,
    clippy::items_after_statements
)]

// =============================================================================
// Modules
// =============================================================================

pub mod driver;
pub mod hal;
pub mod phy;

// Internal implementation details (pub(crate) only)
mod internal;

// Test utilities (only available during testing)
#[cfg(test)]
pub(crate) mod test_utils;

// =============================================================================
// Re-exports
// =============================================================================

pub use driver::config::{
    Ar803xOptions, ClockOutFrequency, ClockOutStrength, Duplex, MissingNodePolicy, PhyInterface,
    Speed,
};
pub use driver::error::{BusError, BusResult, ConfigError, ConfigResult, Error, Result};

// Re-export PHY types
pub use phy::{
    Ar803x, Ar803xWithReset, ChipVariant, LinkStatus, PhyCapabilities, PhyDriver, PhyDriverInfo,
    PhyRegistry, register_drivers,
};
