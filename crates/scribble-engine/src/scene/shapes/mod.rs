pub(crate) mod circle;
pub(crate) mod line;
pub(crate) mod rect;

pub use circle::CircleCmd;
pub use line::{LineCap, LineCmd};
pub use rect::RectCmd;
