//! Tracker
//!
//! Runs one intent at a time to completion: mutate through the order
//! service, re-read the whole store, publish it to the state cell.

use crate::domain::entities::{NewCake, NewOrder};
use crate::domain::ports::{IdGenerator, OrderRepository, View};
use crate::error::AppError;

use super::intent_parser::Intent;
use super::order_service::OrderService;
use super::state::StateCell;

/// What the front end should do after an intent was handled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// A fresh snapshot was published to the view
    Published,
    /// The user asked for the command list
    Help,
    /// The user asked to stop
    Quit,
}

/// Ties the order service to the state cell
pub struct Tracker<R, G, V>
where
    R: OrderRepository,
    G: IdGenerator,
    V: View,
{
    service: OrderService<R, G>,
    state: StateCell<V>,
}

impl<R, G, V> Tracker<R, G, V>
where
    R: OrderRepository,
    G: IdGenerator,
    V: View,
{
    pub fn new(service: OrderService<R, G>, view: V) -> Self {
        Self {
            service,
            state: StateCell::new(view),
        }
    }

    /// Publish the initial store contents
    pub fn start(&mut self) {
        tracing::info!("Publishing initial state");
        self.publish();
    }

    /// Handle a single intent.
    ///
    /// Mutations publish exactly once. Errors publish nothing.
    pub fn handle(&mut self, intent: Intent) -> Result<Outcome, AppError> {
        tracing::debug!(?intent, "Handling intent");

        match intent {
            Intent::CreateOrder {
                name,
                baker,
                delivery_date,
            } => {
                self.service.create_order(NewOrder {
                    name,
                    baker,
                    delivery_date,
                })?;
            }
            Intent::AddCake {
                order_id,
                flavor,
                frosting,
                layers,
                shape,
            } => {
                self.service.add_cake(
                    order_id,
                    NewCake {
                        flavor,
                        frosting,
                        layers,
                        shape,
                    },
                )?;
            }
            Intent::DeleteOrder { order_id } => self.service.delete_order(order_id),
            Intent::DeleteCake { order_id, cake_id } => {
                self.service.delete_cake(order_id, cake_id)?;
            }
            Intent::Refresh => {}
            Intent::Help => return Ok(Outcome::Help),
            Intent::Quit => return Ok(Outcome::Quit),
        }

        self.publish();
        Ok(Outcome::Published)
    }

    fn publish(&mut self) {
        let snapshot = self.service.list_all().to_vec();
        self.state.publish(snapshot);
    }

    pub fn service(&self) -> &OrderService<R, G> {
        &self.service
    }

    pub fn state(&self) -> &StateCell<V> {
        &self.state
    }
}
