use crate::clock::{Clock, SystemClock};
use crate::model::Item;
use crate::restaurant_actor::RestaurantError;
use chrono::NaiveTime;
use std::fmt::{self, Debug, Display};
use std::sync::Arc;

/// Represents a restaurant: its identity, operating window and menu.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](crate::framework::ActorEntity) trait,
/// allowing it to be owned by an [`EntityActor`](crate::framework::EntityActor) when it
/// has to be shared between tasks.
///
/// See [`impl ActorEntity for Restaurant`](#impl-ActorEntity-for-Restaurant) for the
/// actions it handles ([`RestaurantAction`](crate::restaurant_actor::RestaurantAction)).
#[derive(Clone)]
pub struct Restaurant {
    name: String,
    location: String,
    opening_time: NaiveTime,
    closing_time: NaiveTime,
    menu: Vec<Item>,
    clock: Arc<dyn Clock>,
}

impl Restaurant {
    /// Creates a new Restaurant with an empty menu, reading time from the system clock.
    ///
    /// # Arguments
    /// * `name` - Restaurant name
    /// * `location` - Where the restaurant is
    /// * `opening_time` - First instant the restaurant is open
    /// * `closing_time` - First instant the restaurant is closed again
    ///
    /// # Notes
    /// `opening_time < closing_time` is expected but not checked.
    pub fn new(
        name: impl Into<String>,
        location: impl Into<String>,
        opening_time: NaiveTime,
        closing_time: NaiveTime,
    ) -> Self {
        Self {
            name: name.into(),
            location: location.into(),
            opening_time,
            closing_time,
            menu: Vec::new(),
            clock: Arc::new(SystemClock),
        }
    }

    /// Replaces the time source, builder style.
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.set_clock(clock);
        self
    }

    pub fn set_clock(&mut self, clock: impl Clock + 'static) {
        self.clock = Arc::new(clock);
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn opening_time(&self) -> NaiveTime {
        self.opening_time
    }

    pub fn closing_time(&self) -> NaiveTime {
        self.closing_time
    }

    /// Current time-of-day according to the injected clock.
    pub fn current_time(&self) -> NaiveTime {
        self.clock.now()
    }

    /// Whether the restaurant is open right now.
    pub fn is_restaurant_open(&self) -> bool {
        self.is_open_at(self.current_time())
    }

    /// Whether `now` falls in the half-open window `[opening_time, closing_time)`.
    pub fn is_open_at(&self, now: NaiveTime) -> bool {
        self.opening_time <= now && now < self.closing_time
    }

    /// The menu in insertion order.
    pub fn menu(&self) -> &[Item] {
        &self.menu
    }

    /// First menu item whose name matches exactly.
    pub fn find_item_by_name(&self, name: &str) -> Option<&Item> {
        self.menu.iter().find(|item| item.name == name)
    }

    /// Appends an item. Duplicate names are allowed.
    pub fn add_to_menu(&mut self, name: impl Into<String>, price: u32) {
        self.menu.push(Item::new(name, price));
    }

    /// Removes the first item named `name`.
    ///
    /// # Errors
    /// [`RestaurantError::ItemNotFound`] if no item matches; the menu is left untouched.
    pub fn remove_from_menu(&mut self, name: &str) -> Result<(), RestaurantError> {
        let position = self
            .menu
            .iter()
            .position(|item| item.name == name)
            .ok_or_else(|| RestaurantError::ItemNotFound(name.to_string()))?;
        self.menu.remove(position);
        Ok(())
    }

    /// Sums the prices of the menu items named in `selected`.
    ///
    /// `None` and an empty selection both total 0. Names that are not on the
    /// menu contribute nothing.
    pub fn calculate_total_order_value(&self, selected: Option<&[String]>) -> u64 {
        let Some(selected) = selected else {
            return 0;
        };
        self.menu
            .iter()
            .filter(|item| selected.iter().any(|name| *name == item.name))
            .map(|item| u64::from(item.price))
            .sum()
    }
}

impl Debug for Restaurant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Restaurant")
            .field("name", &self.name)
            .field("location", &self.location)
            .field("opening_time", &self.opening_time)
            .field("closing_time", &self.closing_time)
            .field("menu", &self.menu)
            .finish_non_exhaustive()
    }
}

impl Display for Restaurant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Restaurant: {}", self.name)?;
        writeln!(f, "Location: {}", self.location)?;
        writeln!(f, "Opening time: {}", self.opening_time)?;
        writeln!(f, "Closing time: {}", self.closing_time)?;
        write!(f, "Menu:")?;
        for item in &self.menu {
            write!(f, "\n  {}", item)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::{FixedClock, ManualClock};
    use chrono::TimeDelta;

    fn time(s: &str) -> NaiveTime {
        s.parse().unwrap()
    }

    fn amelies_cafe() -> Restaurant {
        let mut restaurant = Restaurant::new(
            "Amelie's cafe",
            "Chennai",
            time("10:30:00"),
            time("22:00:00"),
        );
        restaurant.add_to_menu("Sweet corn soup", 119);
        restaurant.add_to_menu("Vegetable lasagne", 269);
        restaurant
    }

    // --- Open / closed ---

    #[test]
    fn test_open_between_opening_and_closing_time() {
        let restaurant = amelies_cafe();
        let clock = ManualClock::new(restaurant.closing_time() - TimeDelta::minutes(30));
        let restaurant = restaurant.with_clock(clock.clone());
        assert!(restaurant.is_restaurant_open());

        // Opening time itself is open
        clock.set(restaurant.opening_time());
        assert!(restaurant.is_restaurant_open());
    }

    #[test]
    fn test_closed_outside_opening_and_closing_time() {
        let mut restaurant = amelies_cafe();

        restaurant.set_clock(FixedClock::at(restaurant.opening_time() - TimeDelta::minutes(10)));
        assert!(!restaurant.is_restaurant_open());

        restaurant.set_clock(FixedClock::at(restaurant.closing_time() + TimeDelta::hours(1)));
        assert!(!restaurant.is_restaurant_open());

        // Closing time itself is closed
        restaurant.set_clock(FixedClock::at(restaurant.closing_time()));
        assert!(!restaurant.is_restaurant_open());
    }

    #[test]
    fn test_current_time_comes_from_injected_clock() {
        let restaurant = amelies_cafe().with_clock(|| NaiveTime::from_hms_opt(13, 15, 0).unwrap());
        assert_eq!(restaurant.current_time(), time("13:15:00"));
        assert!(restaurant.is_restaurant_open());
    }

    // --- Menu ---

    #[test]
    fn test_adding_item_increases_menu_size_by_1() {
        let mut restaurant = amelies_cafe();
        let initial = restaurant.menu().len();

        restaurant.add_to_menu("Sizzling brownie", 319);

        assert_eq!(restaurant.menu().len(), initial + 1);
        assert_eq!(restaurant.menu().last(), Some(&Item::new("Sizzling brownie", 319)));
    }

    #[test]
    fn test_adding_duplicate_name_creates_second_entry() {
        let mut restaurant = amelies_cafe();
        restaurant.add_to_menu("Sweet corn soup", 129);

        let soups = restaurant
            .menu()
            .iter()
            .filter(|item| item.name == "Sweet corn soup")
            .count();
        assert_eq!(soups, 2);
        // Lookup returns the earliest entry
        assert_eq!(restaurant.find_item_by_name("Sweet corn soup").map(Item::price), Some(119));
    }

    #[test]
    fn test_removing_item_decreases_menu_size_by_1() {
        let mut restaurant = amelies_cafe();
        let initial = restaurant.menu().len();

        restaurant.remove_from_menu("Vegetable lasagne").unwrap();

        assert_eq!(restaurant.menu().len(), initial - 1);
        assert!(restaurant.find_item_by_name("Vegetable lasagne").is_none());
    }

    #[test]
    fn test_removing_missing_item_fails_and_keeps_menu() {
        let mut restaurant = amelies_cafe();
        let initial = restaurant.menu().len();

        let result = restaurant.remove_from_menu("French fries");

        assert_eq!(result, Err(RestaurantError::ItemNotFound("French fries".to_string())));
        assert_eq!(restaurant.menu().len(), initial);
    }

    #[test]
    fn test_remove_is_case_sensitive() {
        let mut restaurant = amelies_cafe();
        assert!(restaurant.remove_from_menu("sweet corn soup").is_err());
        assert_eq!(restaurant.menu().len(), 2);
    }

    // --- Order ---

    #[test]
    fn test_order_value_is_0_for_empty_selection() {
        let restaurant = amelies_cafe();
        assert_eq!(restaurant.calculate_total_order_value(Some(&[] as &[String])), 0);
    }

    #[test]
    fn test_order_value_is_0_for_no_selection() {
        let restaurant = amelies_cafe();
        assert_eq!(restaurant.calculate_total_order_value(None), 0);
    }

    #[test]
    fn test_order_value_sums_selected_items() {
        let restaurant = amelies_cafe();
        let selected: Vec<String> = restaurant.menu().iter().map(|item| item.name.clone()).collect();

        assert_eq!(restaurant.calculate_total_order_value(Some(selected.as_slice())), 388);
    }

    #[test]
    fn test_order_value_skips_unknown_names() {
        let restaurant = amelies_cafe();
        let selected = vec!["Sweet corn soup".to_string(), "French fries".to_string()];

        assert_eq!(restaurant.calculate_total_order_value(Some(selected.as_slice())), 119);
    }

    #[test]
    fn test_display_lists_menu() {
        let rendered = amelies_cafe().to_string();
        assert!(rendered.starts_with("Restaurant: Amelie's cafe\nLocation: Chennai\n"));
        assert!(rendered.contains("Opening time: 10:30:00"));
        assert!(rendered.ends_with("Menu:\n  Sweet corn soup:119\n  Vegetable lasagne:269"));
    }
}
