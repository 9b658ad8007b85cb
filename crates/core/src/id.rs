//! Strongly-typed identifiers used across the domain.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Identifier of a brand.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BrandId(pub u64);

/// Identifier of a product.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub u64);

macro_rules! impl_numeric_newtype {
    ($t:ty, $name:literal) => {
        impl $t {
            pub fn new(id: u64) -> Self {
                Self(id)
            }

            pub fn value(self) -> u64 {
                self.0
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                core::fmt::Display::fmt(&self.0, f)
            }
        }

        impl From<u64> for $t {
            fn from(value: u64) -> Self {
                Self(value)
            }
        }

        impl From<$t> for u64 {
            fn from(value: $t) -> Self {
                value.0
            }
        }

        impl FromStr for $t {
            type Err = DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let id = s
                    .parse::<u64>()
                    .map_err(|e| DomainError::invalid_id(format!("{}: {}", $name, e)))?;
                Ok(Self(id))
            }
        }
    };
}

impl_numeric_newtype!(BrandId, "BrandId");
impl_numeric_newtype!(ProductId, "ProductId");
