//! Entity trait implementation for the Restaurant domain type.
//!
//! This module contains the [`ActorEntity`] trait implementation
//! that enables [`Restaurant`] to be owned by the generic [`crate::framework::EntityActor`].
//! Every action delegates to the synchronous method of the same name, so the
//! actor adds ordering and nothing else.

use super::actions::{RestaurantAction, RestaurantActionResult};
use super::error::RestaurantError;
use crate::framework::ActorEntity;
use crate::model::Restaurant;
use async_trait::async_trait;

#[async_trait]
impl ActorEntity for Restaurant {
    type Action = RestaurantAction;
    type ActionResult = RestaurantActionResult;
    type Error = RestaurantError;

    async fn handle_action(
        &mut self,
        action: RestaurantAction,
    ) -> Result<RestaurantActionResult, RestaurantError> {
        match action {
            RestaurantAction::AddToMenu { name, price } => {
                self.add_to_menu(name, price);
                Ok(RestaurantActionResult::AddToMenu(()))
            }
            RestaurantAction::RemoveFromMenu { name } => {
                self.remove_from_menu(&name)?;
                Ok(RestaurantActionResult::RemoveFromMenu(()))
            }
            RestaurantAction::GetMenu => Ok(RestaurantActionResult::GetMenu(self.menu().to_vec())),
            RestaurantAction::IsOpen => Ok(RestaurantActionResult::IsOpen(self.is_restaurant_open())),
            RestaurantAction::CurrentTime => Ok(RestaurantActionResult::CurrentTime(self.current_time())),
            RestaurantAction::CalculateTotal { selected } => Ok(RestaurantActionResult::CalculateTotal(
                self.calculate_total_order_value(selected.as_deref()),
            )),
        }
    }

    /// Menu size.
    fn size(&self) -> usize {
        self.menu().len()
    }
}
