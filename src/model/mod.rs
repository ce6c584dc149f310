//! Pure data structures: the [`Restaurant`] entity and the [`Item`]s on its menu.

pub mod item;
pub mod restaurant;

pub use item::*;
pub use restaurant::*;
