//! Pre-compiled component renderer.

use minijinja::{context, Environment, Error};
use serde::Serialize;

use super::components::{Message, Orientation, Separator};
use super::filters::register_filters;
use super::templates::{MESSAGE_SOURCE, MESSAGE_TEMPLATE, SEPARATOR_SOURCE, SEPARATOR_TEMPLATE};

/// Attributes the separator sets itself; pass-through copies are dropped.
const OWNED_SEPARATOR_ATTRS: &[&str] = &["role", "class", "data-orientation", "aria-orientation"];

/// Renders components to HTML.
///
/// Templates are compiled once, when the renderer is created, and reused for
/// every render.
///
/// # Example
///
/// ```rust
/// use duskmode::{ComponentRenderer, Message, Separator};
///
/// let renderer = ComponentRenderer::new().unwrap();
///
/// let banner = renderer.message(Some(&Message::success("Saved"))).unwrap();
/// assert!(banner.contains("Saved"));
///
/// let rule = renderer.separator(&Separator::new()).unwrap();
/// assert!(rule.contains(r#"role="presentation""#));
/// ```
pub struct ComponentRenderer {
    env: Environment<'static>,
}

#[derive(Serialize)]
struct SeparatorContext<'a> {
    role: &'static str,
    orientation: Orientation,
    aria_orientation: Option<Orientation>,
    size: &'static str,
    class: &'a str,
    attrs: Vec<(&'a str, &'a str)>,
}

impl ComponentRenderer {
    /// Creates a renderer with both component templates registered.
    ///
    /// # Errors
    ///
    /// Returns an error if a built-in template fails to compile.
    pub fn new() -> Result<Self, Error> {
        let mut env = Environment::new();
        register_filters(&mut env);
        env.add_template(MESSAGE_TEMPLATE, MESSAGE_SOURCE)?;
        env.add_template(SEPARATOR_TEMPLATE, SEPARATOR_SOURCE)?;
        Ok(Self { env })
    }

    /// Renders a message banner. `None` renders the empty string.
    pub fn message(&self, message: Option<&Message>) -> Result<String, Error> {
        let tmpl = self.env.get_template(MESSAGE_TEMPLATE)?;
        tmpl.render(context! { message => message })
    }

    /// Renders a separator rule.
    pub fn separator(&self, separator: &Separator) -> Result<String, Error> {
        let orientation = separator.get_orientation();
        let decorative = separator.is_decorative();

        // A repeated name keeps its first position and its last value.
        let mut attrs: Vec<(&str, &str)> = Vec::new();
        for (name, value) in separator.attrs() {
            if !is_passthrough_attr(name) {
                continue;
            }
            match attrs
                .iter_mut()
                .find(|(seen, _)| seen.eq_ignore_ascii_case(name))
            {
                Some(existing) => existing.1 = value.as_str(),
                None => attrs.push((name.as_str(), value.as_str())),
            }
        }

        let ctx = SeparatorContext {
            role: if decorative { "presentation" } else { "separator" },
            orientation,
            aria_orientation: (!decorative && orientation == Orientation::Vertical)
                .then_some(orientation),
            size: match orientation {
                Orientation::Horizontal => "h-[1px] w-full",
                Orientation::Vertical => "h-full w-[1px]",
            },
            class: separator.extra_class(),
            attrs,
        };

        let tmpl = self.env.get_template(SEPARATOR_TEMPLATE)?;
        tmpl.render(ctx)
    }
}

fn is_passthrough_attr(name: &str) -> bool {
    let valid = !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | ':' | '.'));
    if !valid {
        tracing::debug!(attr = name, "dropping invalid separator attribute");
        return false;
    }
    !OWNED_SEPARATOR_ATTRS
        .iter()
        .any(|owned| owned.eq_ignore_ascii_case(name))
}
