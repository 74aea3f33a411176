//! Testing utilities and mock implementations
//!
//! Mock collaborators for exercising the PHY driver on the host without
//! hardware access.
//!
//! Only available when running `cargo test`.

// Note: The #[cfg(test)] attribute is applied in lib.rs where this module is declared
#![allow(missing_docs)]
#![allow(clippy::std_instead_of_core, clippy::std_instead_of_alloc)]

extern crate std;

use core::cell::RefCell;
use std::collections::HashMap;
use std::vec::Vec;

use crate::driver::error::{BusError, Result};
use crate::hal::mdio::{MdioBus, check_address, indirect};
use crate::internal::phy_regs::ar803x::{debug, mmd7, reg};
use crate::internal::phy_regs::standard::{bmsr, mmd_ctrl, phy_reg};

// =============================================================================
// Transaction Log
// =============================================================================

/// One bus transaction as seen by the mock
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transaction {
    /// Clause 22 read
    Read { phy: u8, reg: u8 },
    /// Clause 22 write
    Write { phy: u8, reg: u8, value: u16 },
    /// Native MMD read
    ReadMmd { phy: u8, devad: u8, reg: u16 },
    /// Native MMD write
    WriteMmd { phy: u8, devad: u8, reg: u16, value: u16 },
}

impl Transaction {
    /// Clause 22 transaction on `phy`/`reg`
    pub fn touches(&self, phy: u8, reg: u8) -> bool {
        match *self {
            Transaction::Read { phy: p, reg: r } | Transaction::Write { phy: p, reg: r, .. } => {
                p == phy && r == reg
            }
            _ => false,
        }
    }

    /// MMD transaction on `phy`/`devad`/`reg`
    pub fn touches_mmd(&self, phy: u8, devad: u8, reg: u16) -> bool {
        match *self {
            Transaction::ReadMmd { phy: p, devad: d, reg: r }
            | Transaction::WriteMmd { phy: p, devad: d, reg: r, .. } => {
                p == phy && d == devad && r == reg
            }
            _ => false,
        }
    }

    /// Any kind of write
    pub fn is_write(&self) -> bool {
        matches!(self, Transaction::Write { .. } | Transaction::WriteMmd { .. })
    }
}

// =============================================================================
// Mock MDIO Bus
// =============================================================================

/// Mock MDIO bus for testing PHY drivers without hardware
///
/// Holds a register map per PHY address, logs every transaction, and can
/// inject a failure on a given register. Debug-port emulation routes
/// accesses to 0x1E to the debug register last selected through 0x1D,
/// the way AR803x silicon does.
///
/// # Example
///
/// ```ignore
/// let mut mdio = MockMdioBus::new().with_debug_port();
/// mdio.set_debug_register(0, 0x00, 0x82EE);
///
/// let value = read_debug(&mut mdio, 0, 0x00).unwrap();
/// assert_eq!(value, 0x82EE);
/// ```
#[derive(Debug, Default)]
pub struct MockMdioBus {
    /// Clause 22 registers: (phy_addr, reg_addr) -> value
    registers: RefCell<HashMap<(u8, u8), u16>>,
    /// MMD registers: (phy_addr, devad, reg) -> value
    mmd: RefCell<HashMap<(u8, u8, u16), u16>>,
    /// Debug registers: (phy_addr, index) -> value
    debug: RefCell<HashMap<(u8, u16), u16>>,
    /// Every transaction, in order
    log: RefCell<Vec<Transaction>>,
    /// Injected read failures: (phy_addr, reg_addr) -> error
    read_faults: RefCell<HashMap<(u8, u8), BusError>>,
    /// Injected write failures: (phy_addr, reg_addr) -> error
    write_faults: RefCell<HashMap<(u8, u8), BusError>>,
    /// Injected MMD read failures
    mmd_read_faults: RefCell<HashMap<(u8, u8, u16), BusError>>,
    /// Route MMD accesses through the Clause 22 indirect window
    indirect_mmd: bool,
    /// Indirect window state per PHY: (devad, reg, data mode)
    mmd_window: RefCell<HashMap<u8, (u8, u16, bool)>>,
    /// Emulate the AR803x debug address/data port
    debug_port: bool,
}

impl MockMdioBus {
    /// Create a new mock MDIO bus
    pub fn new() -> Self {
        Self::default()
    }

    /// Use the Clause 22 indirect sequence instead of native MMD access
    pub fn with_indirect_mmd(mut self) -> Self {
        self.indirect_mmd = true;
        self
    }

    /// Emulate the AR803x debug port on registers 0x1D/0x1E
    pub fn with_debug_port(mut self) -> Self {
        self.debug_port = true;
        self
    }

    /// Set a Clause 22 register value
    pub fn set_register(&self, phy_addr: u8, reg_addr: u8, value: u16) {
        self.registers.borrow_mut().insert((phy_addr, reg_addr), value);
    }

    /// Current value of a Clause 22 register
    pub fn register(&self, phy_addr: u8, reg_addr: u8) -> Option<u16> {
        self.registers.borrow().get(&(phy_addr, reg_addr)).copied()
    }

    /// Set an MMD register value
    pub fn set_mmd_register(&self, phy_addr: u8, devad: u8, reg: u16, value: u16) {
        self.mmd.borrow_mut().insert((phy_addr, devad, reg), value);
    }

    /// Current value of an MMD register
    pub fn mmd_register(&self, phy_addr: u8, devad: u8, reg: u16) -> Option<u16> {
        self.mmd.borrow().get(&(phy_addr, devad, reg)).copied()
    }

    /// Set a debug register value (debug-port emulation)
    pub fn set_debug_register(&self, phy_addr: u8, index: u16, value: u16) {
        self.debug.borrow_mut().insert((phy_addr, index), value);
    }

    /// Current value of a debug register (debug-port emulation)
    pub fn debug_register(&self, phy_addr: u8, index: u16) -> Option<u16> {
        self.debug.borrow().get(&(phy_addr, index)).copied()
    }

    /// Fail every read of `phy_addr`/`reg_addr` with `err`
    pub fn fail_reads_of(&self, phy_addr: u8, reg_addr: u8, err: BusError) {
        self.read_faults.borrow_mut().insert((phy_addr, reg_addr), err);
    }

    /// Fail every write to `phy_addr`/`reg_addr` with `err`
    pub fn fail_writes_to(&self, phy_addr: u8, reg_addr: u8, err: BusError) {
        self.write_faults.borrow_mut().insert((phy_addr, reg_addr), err);
    }

    /// Fail every native MMD read of `devad`/`reg` with `err`
    pub fn fail_mmd_reads_of(&self, phy_addr: u8, devad: u8, reg: u16, err: BusError) {
        self.mmd_read_faults.borrow_mut().insert((phy_addr, devad, reg), err);
    }

    /// All transactions so far
    pub fn transactions(&self) -> Vec<Transaction> {
        self.log.borrow().clone()
    }

    /// Write transactions so far
    pub fn writes(&self) -> Vec<Transaction> {
        self.log.borrow().iter().copied().filter(Transaction::is_write).collect()
    }

    /// Setup for an AR803x PHY with reset-default registers
    ///
    /// Enables debug-port emulation as a side effect.
    pub fn setup_ar803x(&mut self, phy_addr: u8, phy_id: u32) {
        self.debug_port = true;

        self.set_register(phy_addr, phy_reg::PHYIDR1, (phy_id >> 16) as u16);
        self.set_register(phy_addr, phy_reg::PHYIDR2, phy_id as u16);

        let bmsr_value = bmsr::TX_FD_CAPABLE
            | bmsr::TX_HD_CAPABLE
            | bmsr::T10_FD_CAPABLE
            | bmsr::T10_HD_CAPABLE
            | bmsr::ESTATUS
            | bmsr::AN_ABILITY
            | bmsr::EXT_CAPABLE;
        self.set_register(phy_addr, phy_reg::BMSR, bmsr_value);
        self.set_register(phy_addr, phy_reg::BMCR, 0x1140);
        self.set_register(phy_addr, phy_reg::ANAR, 0x01E1);
        self.set_register(phy_addr, phy_reg::CTRL1000, 0x0300);

        // Reset values: RX delay on, TX delay off, PLL off, 1.5 V I/O
        self.set_debug_register(phy_addr, debug::REG_0, 0x82EE);
        self.set_debug_register(phy_addr, debug::REG_5, 0x2C47);
        self.set_debug_register(phy_addr, debug::REG_1F, 0x0000);

        // CLK_25M: 25 MHz XTAL, full strength
        self.set_mmd_register(phy_addr, mmd7::DEVAD, mmd7::CLK25M, 0x0000);
    }

    fn selected_debug(&self, phy_addr: u8) -> u16 {
        self.register(phy_addr, reg::DEBUG_ADDR).unwrap_or(0)
    }

    /// MMD register targeted by the indirect window, if it is in data mode
    fn window_target(&self, phy_addr: u8) -> Option<(u8, u16)> {
        match self.mmd_window.borrow().get(&phy_addr) {
            Some(&(devad, reg, true)) => Some((devad, reg)),
            _ => None,
        }
    }

    /// Track writes to the indirect window registers
    fn update_window(&self, phy_addr: u8, reg_addr: u8, value: u16) -> bool {
        let mut window = self.mmd_window.borrow_mut();
        let state = window.entry(phy_addr).or_insert((0, 0, false));
        match reg_addr {
            phy_reg::MMD_CTRL => {
                state.0 = (value & mmd_ctrl::DEVAD_MASK) as u8;
                state.2 = value & mmd_ctrl::FUNC_DATA != 0;
                false
            }
            phy_reg::MMD_DATA if !state.2 => {
                state.1 = value;
                false
            }
            phy_reg::MMD_DATA => {
                let (devad, reg) = (state.0, state.1);
                drop(window);
                self.set_mmd_register(phy_addr, devad, reg, value);
                true
            }
            _ => false,
        }
    }
}

impl MdioBus for MockMdioBus {
    fn read(&mut self, phy_addr: u8, reg_addr: u8) -> Result<u16> {
        self.log.borrow_mut().push(Transaction::Read { phy: phy_addr, reg: reg_addr });
        check_address(phy_addr, reg_addr)?;

        if let Some(err) = self.read_faults.borrow().get(&(phy_addr, reg_addr)) {
            return Err((*err).into());
        }

        if self.debug_port && reg_addr == reg::DEBUG_DATA {
            let index = self.selected_debug(phy_addr);
            return Ok(self.debug_register(phy_addr, index).unwrap_or(0));
        }

        if self.indirect_mmd && reg_addr == phy_reg::MMD_DATA {
            if let Some((devad, reg)) = self.window_target(phy_addr) {
                return Ok(self.mmd_register(phy_addr, devad, reg).unwrap_or(0));
            }
        }

        Ok(self.register(phy_addr, reg_addr).unwrap_or(0))
    }

    fn write(&mut self, phy_addr: u8, reg_addr: u8, value: u16) -> Result<()> {
        self.log
            .borrow_mut()
            .push(Transaction::Write { phy: phy_addr, reg: reg_addr, value });
        check_address(phy_addr, reg_addr)?;

        if let Some(err) = self.write_faults.borrow().get(&(phy_addr, reg_addr)) {
            return Err((*err).into());
        }

        if self.debug_port && reg_addr == reg::DEBUG_DATA {
            let index = self.selected_debug(phy_addr);
            self.set_debug_register(phy_addr, index, value);
            return Ok(());
        }

        if self.indirect_mmd && self.update_window(phy_addr, reg_addr, value) {
            return Ok(());
        }

        self.set_register(phy_addr, reg_addr, value);
        Ok(())
    }

    fn read_mmd(&mut self, phy_addr: u8, devad: u8, reg: u16) -> Result<u16> {
        if self.indirect_mmd {
            return indirect::read(self, phy_addr, devad, reg);
        }

        self.log
            .borrow_mut()
            .push(Transaction::ReadMmd { phy: phy_addr, devad, reg });

        if let Some(err) = self.mmd_read_faults.borrow().get(&(phy_addr, devad, reg)) {
            return Err((*err).into());
        }

        Ok(self.mmd_register(phy_addr, devad, reg).unwrap_or(0))
    }

    fn write_mmd(&mut self, phy_addr: u8, devad: u8, reg: u16, value: u16) -> Result<()> {
        if self.indirect_mmd {
            return indirect::write(self, phy_addr, devad, reg, value);
        }

        self.log
            .borrow_mut()
            .push(Transaction::WriteMmd { phy: phy_addr, devad, reg, value });
        self.set_mmd_register(phy_addr, devad, reg, value);
        Ok(())
    }
}

// =============================================================================
// Mock Delay
// =============================================================================

/// Mock delay for testing without actual timing
///
/// Records delays for verification without actually waiting.
#[derive(Debug, Default)]
pub struct MockDelay {
    /// Total nanoseconds delayed
    total_ns: RefCell<u64>,
}

impl MockDelay {
    /// Create a new mock delay
    pub fn new() -> Self {
        Self::default()
    }

    /// Get total nanoseconds that were "delayed"
    pub fn total_ns(&self) -> u64 {
        *self.total_ns.borrow()
    }

    /// Get total microseconds that were "delayed"
    pub fn total_us(&self) -> u64 {
        self.total_ns() / 1_000
    }
}

impl embedded_hal::delay::DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        *self.total_ns.borrow_mut() += ns as u64;
    }
}

// =============================================================================
// Mock Reset Pin
// =============================================================================

/// Pin level change recorded by [`MockPin`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinEvent {
    /// Driven low
    Low,
    /// Driven high
    High,
}

/// Error type reported by a failing [`MockPin`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockPinError;

impl embedded_hal::digital::Error for MockPinError {
    fn kind(&self) -> embedded_hal::digital::ErrorKind {
        embedded_hal::digital::ErrorKind::Other
    }
}

/// Mock output pin that records every level change
#[derive(Debug, Default)]
pub struct MockPin {
    events: Vec<PinEvent>,
    fail: bool,
}

impl MockPin {
    /// Create a working pin
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a pin whose every operation fails
    pub fn failing() -> Self {
        Self {
            events: Vec::new(),
            fail: true,
        }
    }

    /// Level changes so far
    pub fn events(&self) -> &[PinEvent] {
        &self.events
    }

    /// Current level (`None` if never driven)
    pub fn level(&self) -> Option<PinEvent> {
        self.events.last().copied()
    }
}

impl embedded_hal::digital::ErrorType for MockPin {
    type Error = MockPinError;
}

impl embedded_hal::digital::OutputPin for MockPin {
    fn set_low(&mut self) -> core::result::Result<(), Self::Error> {
        if self.fail {
            return Err(MockPinError);
        }
        self.events.push(PinEvent::Low);
        Ok(())
    }

    fn set_high(&mut self) -> core::result::Result<(), Self::Error> {
        if self.fail {
            return Err(MockPinError);
        }
        self.events.push(PinEvent::High);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::vec;

    #[test]
    fn mock_mdio_read_write() {
        let mut mdio = MockMdioBus::new();

        assert_eq!(mdio.read(0, 1).unwrap(), 0);

        mdio.set_register(0, 1, 0x1234);
        assert_eq!(mdio.read(0, 1).unwrap(), 0x1234);

        mdio.write(0, 1, 0x5678).unwrap();
        assert_eq!(mdio.read(0, 1).unwrap(), 0x5678);

        assert_eq!(mdio.writes(), vec![Transaction::Write { phy: 0, reg: 1, value: 0x5678 }]);
        assert_eq!(mdio.transactions().len(), 4);
    }

    #[test]
    fn mock_mdio_fault_injection() {
        let mut mdio = MockMdioBus::new();
        mdio.fail_reads_of(1, 2, BusError::Timeout);
        mdio.fail_writes_to(1, 3, BusError::WriteFailed);

        assert_eq!(mdio.read(1, 2), Err(BusError::Timeout.into()));
        assert_eq!(mdio.write(1, 3, 0xFFFF), Err(BusError::WriteFailed.into()));
        assert_eq!(mdio.register(1, 3), None, "failed write must not land");
        assert!(mdio.read(0, 2).is_ok());
    }

    #[test]
    fn mock_mdio_rejects_out_of_range_address() {
        let mut mdio = MockMdioBus::new();

        assert_eq!(mdio.read(0, 32), Err(BusError::InvalidAddress.into()));
        assert_eq!(mdio.write(32, 0, 0x1234), Err(BusError::InvalidAddress.into()));
        assert_eq!(mdio.register(32, 0), None);
    }

    #[test]
    fn mock_debug_port_routes_by_selected_index() {
        let mut mdio = MockMdioBus::new().with_debug_port();
        mdio.set_debug_register(0, 0x05, 0x2000);

        mdio.write(0, 0x1D, 0x05).unwrap();
        assert_eq!(mdio.read(0, 0x1E).unwrap(), 0x2000);

        mdio.write(0, 0x1E, 0x2100).unwrap();
        assert_eq!(mdio.debug_register(0, 0x05), Some(0x2100));
        assert_eq!(mdio.register(0, 0x1E), None);
    }

    #[test]
    fn mock_native_mmd() {
        let mut mdio = MockMdioBus::new();
        mdio.set_mmd_register(0, 7, 0x8016, 0x0018);

        assert_eq!(mdio.read_mmd(0, 7, 0x8016).unwrap(), 0x0018);
        mdio.write_mmd(0, 7, 0x8016, 0x0058).unwrap();
        assert_eq!(mdio.mmd_register(0, 7, 0x8016), Some(0x0058));

        let log = mdio.transactions();
        assert!(log.iter().all(|t| t.touches_mmd(0, 7, 0x8016)));
    }

    #[test]
    fn mock_indirect_window_reaches_mmd_map() {
        let mut mdio = MockMdioBus::new().with_indirect_mmd();
        mdio.set_mmd_register(3, 7, 0x8016, 0x0040);

        assert_eq!(mdio.read_mmd(3, 7, 0x8016).unwrap(), 0x0040);
        mdio.write_mmd(3, 7, 0x8016, 0x0058).unwrap();
        assert_eq!(mdio.mmd_register(3, 7, 0x8016), Some(0x0058));
        assert_eq!(mdio.register(3, 14), Some(0x8016), "address phase lands in reg 14");
    }

    #[test]
    fn mock_delay_tracking() {
        let mut delay = MockDelay::new();

        embedded_hal::delay::DelayNs::delay_us(&mut delay, 10);
        embedded_hal::delay::DelayNs::delay_ns(&mut delay, 500);

        assert_eq!(delay.total_ns(), 10_500);
        assert_eq!(delay.total_us(), 10);
    }

    #[test]
    fn mock_pin_records_levels() {
        use embedded_hal::digital::OutputPin;

        let mut pin = MockPin::new();
        pin.set_low().unwrap();
        pin.set_high().unwrap();

        assert_eq!(pin.events(), &[PinEvent::Low, PinEvent::High]);
        assert_eq!(pin.level(), Some(PinEvent::High));
        assert!(MockPin::failing().set_low().is_err());
    }
}
