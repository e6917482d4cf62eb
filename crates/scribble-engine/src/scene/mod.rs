//! Draw list the canvas records each frame.
//!
//! Commands carry no GPU state. Paint order is z-index first, then the order
//! commands were pushed, so a stroke's shadow pass can sit under its ink pass
//! while both keep their drawing order.

mod cmd;
mod key;
mod list;
mod z_index;

pub mod shapes;

pub use cmd::DrawCmd;
pub use key::SortKey;
pub use list::{DrawItem, DrawList};
pub use z_index::ZIndex;
