//! Closed sets of command arguments.
//!
//! Each type parses from the exact CLI keyword and rejects anything else
//! with [`ValidationError::InvalidChoice`], so string input from callers is
//! checked before a command is ever built.

use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;

macro_rules! closed_choice {
    (
        $(#[$meta:meta])*
        $name:ident, $field:literal {
            $( $(#[$vmeta:meta])* $variant:ident => $keyword:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )+
        }

        impl $name {
            /// Every accepted value.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// The CLI keyword for this value.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $( $name::$variant => $keyword, )+
                }
            }
        }

        impl FromStr for $name {
            type Err = ValidationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim() {
                    $( $keyword => Ok($name::$variant), )+
                    other => Err(ValidationError::InvalidChoice {
                        field: $field,
                        value: other.to_string(),
                        allowed: Self::ALL
                            .iter()
                            .map(|v| format!("'{}'", v.as_str()))
                            .collect::<Vec<_>>()
                            .join(", "),
                    }),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

closed_choice! {
    /// Interface setting changed by `interfaces port <port> <parameter> <value>`.
    InterfaceParameter, "parameter" {
        /// Administrative state.
        AdminState => "admin-state",
        /// Auto-negotiation.
        Autoneg => "autoneg",
        /// Enhanced port performance.
        Epp => "epp",
    }
}

closed_choice! {
    /// Enable/disable switch.
    Toggle, "value" {
        Enable => "enable",
        Disable => "disable",
    }
}

closed_choice! {
    /// VLAN membership tagging.
    TagMode, "mode" {
        Untagged => "untagged",
        Tagged => "tagged",
    }
}

closed_choice! {
    /// IP interface device type.
    IpDeviceType, "device" {
        Vlan => "Vlan",
        Gre => "GRE",
        Ipip => "IPIP",
    }
}

closed_choice! {
    /// IP interface encapsulation.
    Encapsulation, "encapsulation" {
        E2 => "e2",
        Snap => "snap",
    }
}

impl Toggle {
    /// MIB enumeration value (`1` enabled, `2` disabled).
    pub fn mib_value(&self) -> u8 {
        match self {
            Toggle::Enable => 1,
            Toggle::Disable => 2,
        }
    }
}

impl From<bool> for Toggle {
    fn from(enabled: bool) -> Self {
        if enabled { Toggle::Enable } else { Toggle::Disable }
    }
}

impl IpDeviceType {
    /// Value of `alaIpInterfaceDeviceType`.
    pub fn mib_value(&self) -> u8 {
        match self {
            IpDeviceType::Vlan => 1,
            IpDeviceType::Gre => 2,
            IpDeviceType::Ipip => 3,
        }
    }
}

impl Encapsulation {
    /// Value of `alaIpInterfaceEncap`.
    pub fn mib_value(&self) -> u8 {
        match self {
            Encapsulation::E2 => 1,
            Encapsulation::Snap => 2,
        }
    }
}

/// A VLAN number, `1..=4094`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VlanId(u16);

impl VlanId {
    pub const MIN: u16 = 1;
    pub const MAX: u16 = 4094;

    /// Validate a VLAN number.
    pub fn new(id: u16) -> Result<Self, ValidationError> {
        if (Self::MIN..=Self::MAX).contains(&id) {
            Ok(Self(id))
        } else {
            Err(ValidationError::OutOfRange {
                field: "vlan",
                value: i64::from(id),
                min: i64::from(Self::MIN),
                max: i64::from(Self::MAX),
            })
        }
    }

    pub fn get(&self) -> u16 {
        self.0
    }
}

impl TryFrom<u16> for VlanId {
    type Error = ValidationError;

    fn try_from(id: u16) -> Result<Self, Self::Error> {
        Self::new(id)
    }
}

impl fmt::Display for VlanId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
