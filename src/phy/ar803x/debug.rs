//! AR803x debug register port
//!
//! The debug bank is reached through a two-register window: the index goes
//! to the address register (0x1D), the value is then read from or written
//! to the data register (0x1E). The address register keeps its value, so a
//! read-modify-write selects the index only once.

use crate::driver::error::Result;
use crate::hal::mdio::MdioBus;
use crate::internal::phy_regs::ar803x::reg;

/// Read debug register `index`
pub fn read_debug<M: MdioBus>(mdio: &mut M, phy_addr: u8, index: u16) -> Result<u16> {
    mdio.write(phy_addr, reg::DEBUG_ADDR, index)?;
    mdio.read(phy_addr, reg::DEBUG_DATA)
}

/// Write `value` to debug register `index`
pub fn write_debug<M: MdioBus>(mdio: &mut M, phy_addr: u8, index: u16, value: u16) -> Result<()> {
    mdio.write(phy_addr, reg::DEBUG_ADDR, index)?;
    mdio.write(phy_addr, reg::DEBUG_DATA, value)
}

/// Read-modify-write of debug register `index`
///
/// Clears `clear`, then sets `set`. Nothing is written if the read fails.
/// Not atomic against other bus masters.
pub fn mask_debug<M: MdioBus>(
    mdio: &mut M,
    phy_addr: u8,
    index: u16,
    clear: u16,
    set: u16,
) -> Result<()> {
    let value = read_debug(mdio, phy_addr, index)?;
    mdio.write(phy_addr, reg::DEBUG_DATA, (value & !clear) | set)
}
