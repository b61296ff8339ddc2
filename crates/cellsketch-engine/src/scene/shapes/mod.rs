pub(crate) mod boxes;
pub(crate) mod line;
pub(crate) mod text;

pub use boxes::BoxShape;
pub use line::{Line, LineStyle};
pub use text::TextElement;
