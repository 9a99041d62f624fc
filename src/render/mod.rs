//! HTML rendering for the message banner and separator components.
//!
//! - [`Message`] / [`MessageKind`]: Input to the message banner
//! - [`Separator`] / [`Orientation`]: Input to the separator rule
//! - [`ComponentRenderer`]: Renders both to HTML through pre-compiled templates
//!
//! Components are pure functions of their input. All interpolated text and
//! attribute values are HTML-escaped.

mod components;
mod filters;
mod renderer;
mod templates;

pub use components::{Message, MessageKind, Orientation, Separator};
pub use renderer::ComponentRenderer;
