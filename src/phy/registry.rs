//! PHY driver registry
//!
//! The host's PHY subsystem matches each detected identifier against a
//! table of driver records. The table is a fixed-capacity array owned by
//! the host and filled once at start-up by [`register_drivers`]:
//!
//! ```ignore
//! let mut registry = PhyRegistry::<8>::new();
//! register_drivers(&mut registry)?;
//!
//! let id = genphy::read_phy_id(&mut mdio, addr)?;
//! if let Some(chip) = registry.lookup(id) {
//!     let mut phy = Ar803x::new(addr, chip);
//!     phy.config(&mut mdio, Some(&node))?;
//! }
//! ```

use crate::driver::error::{Error, Result};

use super::ar803x::{ChipVariant, PhyDriverInfo};

/// Fixed-capacity table of registered chip families
#[derive(Debug, Clone)]
pub struct PhyRegistry<const N: usize> {
    entries: [Option<ChipVariant>; N],
    len: usize,
}

impl<const N: usize> Default for PhyRegistry<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> PhyRegistry<N> {
    /// Create an empty registry
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: [None; N],
            len: 0,
        }
    }

    /// Add a chip family
    ///
    /// Registering the same family twice is a no-op.
    ///
    /// # Errors
    ///
    /// [`Error::OutOfMemory`] if every slot is taken.
    pub fn register(&mut self, chip: ChipVariant) -> Result<()> {
        if self.contains(chip) {
            return Ok(());
        }

        let slot = self.entries.get_mut(self.len).ok_or(Error::OutOfMemory)?;
        *slot = Some(chip);
        self.len += 1;

        #[cfg(feature = "defmt")]
        defmt::debug!("registered PHY driver {=str}", chip.name());

        Ok(())
    }

    /// First registered family whose record matches `id`
    pub fn lookup(&self, id: u32) -> Option<ChipVariant> {
        self.iter().find(|chip| chip.info().matches(id))
    }

    /// Driver record for `id`
    pub fn driver_info(&self, id: u32) -> Option<&'static PhyDriverInfo> {
        self.lookup(id).map(ChipVariant::info)
    }

    /// Whether `chip` is registered
    pub fn contains(&self, chip: ChipVariant) -> bool {
        self.iter().any(|c| c == chip)
    }

    /// Registered families, in registration order
    pub fn iter(&self) -> impl Iterator<Item = ChipVariant> + '_ {
        self.entries[..self.len].iter().flatten().copied()
    }

    /// Number of registered families
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// No family registered yet
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Total number of slots
    #[must_use]
    pub const fn capacity(&self) -> usize {
        N
    }
}

/// Register the AR8021, AR8031/AR8033 and AR8035 drivers
///
/// Call once while bringing up the PHY subsystem.
///
/// # Errors
///
/// [`Error::OutOfMemory`] if the registry cannot hold all three.
pub fn register_drivers<const N: usize>(registry: &mut PhyRegistry<N>) -> Result<()> {
    for chip in ChipVariant::ALL {
        registry.register(chip)?;
    }
    Ok(())
}
