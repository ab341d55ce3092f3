//! Select-dropdown values.
//!
//! The content store encodes dropdown fields as `{ "key": ..., "value": ... }`.
//! Each value type below covers the options authored in the content model,
//! plus `Other` so an unexpected value is still carried through verbatim.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A dropdown field: the stable option key and its display value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Select<T> {
    pub key: String,
    pub value: T,
}

impl<T> Select<T> {
    pub fn new(key: impl Into<String>, value: T) -> Self {
        Self {
            key: key.into(),
            value,
        }
    }
}

macro_rules! select_value {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $label:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(from = "String", into = "String")]
        pub enum $name {
            $($variant,)+
            /// A value outside the authored options, kept as-is.
            Other(String),
        }

        impl $name {
            /// Display label as authored in the content store.
            pub fn as_str(&self) -> &str {
                match self {
                    $($name::$variant => $label,)+
                    $name::Other(value) => value,
                }
            }

            pub fn is_known(&self) -> bool {
                !matches!(self, $name::Other(_))
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                match value.as_str() {
                    $($label => $name::$variant,)+
                    _ => $name::Other(value),
                }
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                $name::from(value.to_string())
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> String {
                match value {
                    $name::Other(value) => value,
                    known => known.as_str().to_string(),
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

select_value! {
    /// Market segment a category serves.
    CategoryType {
        Residential => "Residential",
        Commercial => "Commercial",
        Industrial => "Industrial",
        Outdoor => "Outdoor",
        Specialty => "Specialty",
    }
}

select_value! {
    /// Where an application is installed.
    Environment {
        Indoor => "Indoor",
        Outdoor => "Outdoor",
        IndoorOutdoor => "Indoor/Outdoor",
    }
}

select_value! {
    ColorTemperature {
        WarmWhite => "Warm White (2700K-3000K)",
        NeutralWhite => "Neutral White (3500K-4000K)",
        CoolWhite => "Cool White (5000K-6500K)",
        Daylight => "Daylight (6500K+)",
    }
}

select_value! {
    LightType {
        Led => "LED",
        Incandescent => "Incandescent",
        Fluorescent => "Fluorescent",
        Halogen => "Halogen",
    }
}

select_value! {
    /// Inventory state shown on product cards.
    StockStatus {
        InStock => "In Stock",
        LowStock => "Low Stock",
        OutOfStock => "Out of Stock",
        PreOrder => "Pre-Order",
    }
}
