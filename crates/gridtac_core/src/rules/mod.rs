//! Game rules for grid games.
//!
//! Pure functions over a [`Board`](crate::Board). Rules never mutate the
//! board they inspect.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::check_winner;
