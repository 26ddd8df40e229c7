//! Order domain entity
//!
//! A customer request. The order is the only owner of its cakes, so every
//! cake mutation goes through it.

use serde::{Deserialize, Serialize};

use super::cake::{Cake, CakeId, NewCake};
use crate::domain::ports::IdGenerator;
use crate::error::DomainError;

/// Unique identifier for an order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(pub u64);

impl From<u64> for OrderId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A bakery order and its cakes, in the order they were added
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,
    pub name: String,
    pub baker: String,
    /// Free text; not parsed as a date
    pub delivery_date: String,
    pub cakes: Vec<Cake>,
}

impl Order {
    /// Create an order with no cakes
    pub fn new(id: OrderId, new_order: NewOrder) -> Self {
        Self {
            id,
            name: new_order.name,
            baker: new_order.baker,
            delivery_date: new_order.delivery_date,
            cakes: Vec::new(),
        }
    }

    /// Append a cake with a fresh identifier to the end of this order.
    ///
    /// The order is left unchanged if no identifier can be issued.
    pub fn add_cake<G>(&mut self, ids: &mut G, new_cake: NewCake) -> Result<CakeId, DomainError>
    where
        G: IdGenerator + ?Sized,
    {
        let id = CakeId(ids.next_id()?);
        self.cakes.push(Cake::new(id, new_cake));
        Ok(id)
    }

    /// Remove the cake with the given id.
    ///
    /// Returns `false` when no cake matched; that is not an error.
    pub fn remove_cake(&mut self, cake_id: CakeId) -> bool {
        match self.cakes.iter().position(|c| c.id == cake_id) {
            Some(index) => {
                self.cakes.remove(index);
                true
            }
            None => false,
        }
    }

    #[cfg(test)]
    pub fn find_cake(&self, cake_id: CakeId) -> Option<&Cake> {
        self.cakes.iter().find(|c| c.id == cake_id)
    }
}

/// Data needed to create a new order
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewOrder {
    pub name: String,
    pub baker: String,
    pub delivery_date: String,
}

#[cfg(test)]
impl NewOrder {
    pub fn new(
        name: impl Into<String>,
        baker: impl Into<String>,
        delivery_date: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            baker: baker.into(),
            delivery_date: delivery_date.into(),
        }
    }
}
