//! Actions for the Restaurant actor.
//!
//! Each operation of [`Restaurant`](crate::model::Restaurant) has a matching
//! [`RestaurantAction`] so it can be run inside the actor, serialized with every
//! other request. These actions are handled by
//! [`ActorEntity::handle_action`](crate::framework::ActorEntity::handle_action).

use crate::model::Item;
use chrono::NaiveTime;

/// Operations that can be sent to a Restaurant actor.
#[derive(Debug, Clone, PartialEq)]
pub enum RestaurantAction {
    /// Appends an item to the menu.
    AddToMenu { name: String, price: u32 },
    /// Removes the first item with this exact name.
    ///
    /// # Errors
    /// Fails with `ItemNotFound` if no item matches.
    RemoveFromMenu { name: String },
    /// Returns a copy of the menu in insertion order.
    GetMenu,
    /// Checks the operating window against the restaurant's clock.
    IsOpen,
    /// Reads the restaurant's clock.
    CurrentTime,
    /// Totals the selected item names. `None` totals 0.
    CalculateTotal { selected: Option<Vec<String>> },
}

/// Results from RestaurantActions - variants match 1:1 with RestaurantAction
#[derive(Debug, Clone, PartialEq)]
pub enum RestaurantActionResult {
    AddToMenu(()),
    RemoveFromMenu(()),
    GetMenu(Vec<Item>),
    IsOpen(bool),
    CurrentTime(NaiveTime),
    CalculateTotal(u64),
}
