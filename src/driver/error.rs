//! Error types for the AR803x PHY driver
//!
//! Errors are organized by domain for better diagnostics:
//! - [`BusError`]: MDIO transport failures
//! - [`ConfigError`]: Unusable configuration (device tree, PHY ID, addresses)
//!
//! The unified [`Error`] enum wraps both domains plus [`Error::OutOfMemory`],
//! and is returned by every driver entry point.

// =============================================================================
// Bus Errors
// =============================================================================

/// MDIO transport errors
///
/// Returned by [`MdioBus`](crate::hal::mdio::MdioBus) implementations when a
/// read or write transaction cannot be completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BusError {
    /// Transaction did not complete in time
    Timeout,
    /// No PHY answered at the requested address
    NoResponse,
    /// Read transaction failed
    ReadFailed,
    /// Write transaction failed
    WriteFailed,
    /// PHY or register address out of range for Clause 22
    InvalidAddress,
}

impl core::fmt::Display for BusError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl BusError {
    /// Returns a human-readable description of the error
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            BusError::Timeout => "MDIO transaction timed out",
            BusError::NoResponse => "no PHY response",
            BusError::ReadFailed => "MDIO read failed",
            BusError::WriteFailed => "MDIO write failed",
            BusError::InvalidAddress => "invalid MDIO address",
        }
    }
}

// =============================================================================
// Configuration Errors
// =============================================================================

/// Configuration errors
///
/// These abort device initialization. The host decides whether the PHY is
/// marked unusable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// The PHY has no (valid) device-tree node
    MissingNode,
    /// `atheros,clk-out-frequency` is not one of the supported rates
    InvalidClockFrequency,
    /// `atheros,clk-out-strength` is not `full`, `half` or `quarter`
    InvalidClockStrength,
    /// Invalid PHY address (must be 0-31)
    InvalidPhyAddress,
    /// PHY identifier does not belong to a supported chip
    UnsupportedPhy,
    /// Reset GPIO could not be driven
    GpioError,
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ConfigError {
    /// Returns a human-readable description of the error
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            ConfigError::MissingNode => "missing PHY device-tree node",
            ConfigError::InvalidClockFrequency => "invalid atheros,clk-out-frequency",
            ConfigError::InvalidClockStrength => "invalid atheros,clk-out-strength",
            ConfigError::InvalidPhyAddress => "invalid PHY address",
            ConfigError::UnsupportedPhy => "unsupported PHY identifier",
            ConfigError::GpioError => "reset GPIO error",
        }
    }
}

// =============================================================================
// Unified Error Type
// =============================================================================

/// This enum wraps all domain-specific errors for unified error handling.
///
/// ```ignore
/// match phy.config(&mut mdio, node) {
///     Err(Error::Bus(BusError::Timeout)) => { /* ... */ }
///     Err(Error::InvalidConfig(ConfigError::InvalidClockFrequency)) => { /* ... */ }
///     _ => {}
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// MDIO transport failure
    Bus(BusError),
    /// Unparseable or unsupported configuration
    InvalidConfig(ConfigError),
    /// No storage slot left for a driver record
    OutOfMemory,
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::Bus(e) => write!(f, "bus: {}", e.as_str()),
            Error::InvalidConfig(e) => write!(f, "config: {}", e.as_str()),
            Error::OutOfMemory => f.write_str("out of memory"),
        }
    }
}

impl From<BusError> for Error {
    fn from(e: BusError) -> Self {
        Error::Bus(e)
    }
}

impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Error::InvalidConfig(e)
    }
}

/// Result type alias for driver operations
pub type Result<T> = core::result::Result<T, Error>;

/// Result type alias for bus transactions
pub type BusResult<T> = core::result::Result<T, BusError>;

/// Result type alias for configuration parsing
pub type ConfigResult<T> = core::result::Result<T, ConfigError>;

// =============================================================================
// Unit Tests
// =============================================================================
