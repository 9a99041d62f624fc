//! Component inputs.

use serde::Serialize;

/// Tone of a [`Message`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    Success,
    Error,
}

/// A short status message shown in a banner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Message {
    pub kind: MessageKind,
    pub text: String,
}

impl Message {
    pub fn new(kind: MessageKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self::new(MessageKind::Success, text)
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::new(MessageKind::Error, text)
    }
}

/// Direction a [`Separator`] runs in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    #[default]
    Horizontal,
    Vertical,
}

/// A thin rule between groups of content.
///
/// Decorative separators (the default) are hidden from assistive technology;
/// semantic ones are announced as separators.
///
/// # Example
///
/// ```rust
/// use duskmode::{Orientation, Separator};
///
/// let separator = Separator::new()
///     .orientation(Orientation::Vertical)
///     .decorative(false)
///     .class("mx-2")
///     .attr("id", "toolbar-divider");
/// assert!(!separator.is_decorative());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Separator {
    orientation: Orientation,
    decorative: bool,
    class: String,
    attrs: Vec<(String, String)>,
}

impl Separator {
    /// Creates a decorative horizontal separator.
    pub fn new() -> Self {
        Self {
            orientation: Orientation::Horizontal,
            decorative: true,
            class: String::new(),
            attrs: Vec::new(),
        }
    }

    pub fn orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    pub fn decorative(mut self, decorative: bool) -> Self {
        self.decorative = decorative;
        self
    }

    /// Adds classes after the component's own.
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = class.into();
        self
    }

    /// Adds a pass-through attribute. Attributes render in the order added;
    /// adding a name again replaces its value.
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.push((name.into(), value.into()));
        self
    }

    pub fn get_orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn is_decorative(&self) -> bool {
        self.decorative
    }

    pub fn extra_class(&self) -> &str {
        &self.class
    }

    pub fn attrs(&self) -> &[(String, String)] {
        &self.attrs
    }
}

impl Default for Separator {
    fn default() -> Self {
        Self::new()
    }
}
