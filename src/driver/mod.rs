//! Core driver types shared by the PHY layer.
//!
//! - [`config`] - Option record, interface modes and builder methods
//! - [`error`] - Error types and result aliases
//!
//! # Example
//!
//! ```ignore
//! use ph_ar803x_phy::driver::{Ar803xOptions, ClockOutFrequency};
//!
//! let options = Ar803xOptions::new()
//!     .with_keep_pll_enabled(true)
//!     .with_clock_out_frequency(ClockOutFrequency::Pll125MHz);
//! ```

pub mod config;
pub mod error;

pub use config::{
    Ar803xOptions, ClockOutFrequency, ClockOutStrength, Duplex, MissingNodePolicy, PhyInterface,
    Speed,
};
pub use error::{BusError, BusResult, ConfigError, ConfigResult, Error, Result};
