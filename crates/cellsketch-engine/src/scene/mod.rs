//! Scene model: layers of vector elements.
//!
//! Responsibilities:
//! - hold the editor-facing element types (lines, boxes, text)
//! - preserve insertion order, which is the z-order inside a layer
//! - derive a content fingerprint used as the render cache key
//!
//! Element constructors and `Layer::push_*` helpers live in the matching file
//! under `scene::shapes`.

mod fingerprint;
mod layer;

pub mod shapes;

pub use fingerprint::Fingerprint;
pub use layer::{Layer, LayerId};
pub use shapes::{BoxShape, Line, LineStyle, TextElement};
