//! Device-tree (Open Firmware) node access
//!
//! The option parser reads PHY properties through [`OfNode`], so the driver
//! works with whatever device-tree representation the host firmware has.
//!
//! For hosts without a flattened device tree, [`StaticNode`] describes the
//! same properties with a `const` slice:
//!
//! ```ignore
//! use ph_ar803x_phy::hal::of::{Property, StaticNode};
//!
//! static PHY0: StaticNode<'static> = StaticNode::new(
//!     "ethernet-phy@0",
//!     &[
//!         Property::flag("atheros,keep-pll-enabled"),
//!         Property::u32("atheros,clk-out-frequency", 125_000_000),
//!         Property::string("atheros,clk-out-strength", "half"),
//!     ],
//! );
//! ```

/// Read-only view of a device-tree node
pub trait OfNode {
    /// Node name, used for diagnostics
    fn name(&self) -> &str;

    /// Whether the handle refers to a usable node
    ///
    /// Hosts whose node handles can be dangling (for example an offset of
    /// `-1`) report that here; the parser treats an invalid node like a
    /// missing one.
    fn is_valid(&self) -> bool {
        true
    }

    /// `true` if the property exists
    fn read_bool(&self, key: &str) -> bool;

    /// String value of the property, if present
    fn read_string(&self, key: &str) -> Option<&str>;

    /// 32-bit cell value of the property, or `default` if absent
    fn read_u32_default(&self, key: &str, default: u32) -> u32;
}

impl<N: OfNode + ?Sized> OfNode for &N {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn is_valid(&self) -> bool {
        (**self).is_valid()
    }

    fn read_bool(&self, key: &str) -> bool {
        (**self).read_bool(key)
    }

    fn read_string(&self, key: &str) -> Option<&str> {
        (**self).read_string(key)
    }

    fn read_u32_default(&self, key: &str, default: u32) -> u32 {
        (**self).read_u32_default(key, default)
    }
}

// =============================================================================
// Static Property List
// =============================================================================

/// Property value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PropValue<'a> {
    /// Empty (boolean) property
    Flag,
    /// Single 32-bit cell
    U32(u32),
    /// String
    Str(&'a str),
}

/// A named property
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Property<'a> {
    /// Property name
    pub key: &'a str,
    /// Property value
    pub value: PropValue<'a>,
}

impl<'a> Property<'a> {
    /// Boolean property (present means true)
    pub const fn flag(key: &'a str) -> Self {
        Self {
            key,
            value: PropValue::Flag,
        }
    }

    /// 32-bit integer property
    pub const fn u32(key: &'a str, value: u32) -> Self {
        Self {
            key,
            value: PropValue::U32(value),
        }
    }

    /// String property
    pub const fn string(key: &'a str, value: &'a str) -> Self {
        Self {
            key,
            value: PropValue::Str(value),
        }
    }
}

/// Device-tree node backed by a property slice
#[derive(Debug, Clone, Copy)]
pub struct StaticNode<'a> {
    name: &'a str,
    props: &'a [Property<'a>],
}

impl<'a> StaticNode<'a> {
    /// Create a node from a name and its properties
    pub const fn new(name: &'a str, props: &'a [Property<'a>]) -> Self {
        Self { name, props }
    }

    fn find(&self, key: &str) -> Option<&PropValue<'a>> {
        self.props.iter().find(|p| p.key == key).map(|p| &p.value)
    }
}

impl OfNode for StaticNode<'_> {
    fn name(&self) -> &str {
        self.name
    }

    fn read_bool(&self, key: &str) -> bool {
        self.find(key).is_some()
    }

    fn read_string(&self, key: &str) -> Option<&str> {
        match self.find(key) {
            Some(PropValue::Str(s)) => Some(s),
            _ => None,
        }
    }

    fn read_u32_default(&self, key: &str, default: u32) -> u32 {
        match self.find(key) {
            Some(PropValue::U32(v)) => *v,
            _ => default,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
