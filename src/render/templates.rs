//! Component template sources.
//!
//! Names end in `.html` so minijinja auto-escapes every interpolation.

pub(crate) const MESSAGE_TEMPLATE: &str = "message.html";
pub(crate) const SEPARATOR_TEMPLATE: &str = "separator.html";

pub(crate) const MESSAGE_SOURCE: &str = concat!(
    r#"{% if message %}"#,
    r#"<div class="{{ ["text-sm font-medium", "text-red-500" if message.kind == "error" else "text-green-500"] | cn }}">"#,
    r#"{{ message.text }}"#,
    r#"</div>"#,
    r#"{% endif %}"#,
);

pub(crate) const SEPARATOR_SOURCE: &str = concat!(
    r#"<div role="{{ role }}" data-orientation="{{ orientation }}""#,
    r#"{% if aria_orientation %} aria-orientation="{{ aria_orientation }}"{% endif %}"#,
    r#" class="{{ ["shrink-0 bg-border", size, class] | cn }}""#,
    r#"{% for name, value in attrs %} {{ name }}="{{ value }}"{% endfor %}"#,
    r#"></div>"#,
);
