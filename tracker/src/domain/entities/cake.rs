//! Cake domain entity
//!
//! A single item within an order. Cakes have no lifecycle of their own.

use serde::{Deserialize, Serialize};

/// Unique identifier for a cake
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CakeId(pub u64);

impl From<u64> for CakeId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for CakeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A cake attached to an order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Cake {
    pub id: CakeId,
    pub flavor: String,
    pub frosting: String,
    /// Layer count exactly as entered; never parsed
    pub layers: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shape: Option<String>,
}

impl Cake {
    pub fn new(id: CakeId, new_cake: NewCake) -> Self {
        Self {
            id,
            flavor: new_cake.flavor,
            frosting: new_cake.frosting,
            layers: new_cake.layers,
            shape: new_cake.shape,
        }
    }
}

/// Data needed to add a cake to an order
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCake {
    pub flavor: String,
    pub frosting: String,
    pub layers: String,
    #[serde(default)]
    pub shape: Option<String>,
}

#[cfg(test)]
impl NewCake {
    pub fn new(
        flavor: impl Into<String>,
        frosting: impl Into<String>,
        layers: impl Into<String>,
    ) -> Self {
        Self {
            flavor: flavor.into(),
            frosting: frosting.into(),
            layers: layers.into(),
            shape: None,
        }
    }

    pub fn with_shape(mut self, shape: impl Into<String>) -> Self {
        self.shape = Some(shape.into());
        self
    }
}
