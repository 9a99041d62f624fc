//! MiniJinja filter registration.

use minijinja::{Environment, Error, Value};

use crate::style::class_names;

/// Registers all component filters on a minijinja environment.
pub(crate) fn register_filters(env: &mut Environment<'static>) {
    // Joins a list of class fragments: {{ ["base", extra] | cn }}
    // none, undefined and false entries are skipped.
    env.add_filter("cn", cn);
}

fn cn(value: Value) -> Result<String, Error> {
    if let Some(single) = value.as_str() {
        return Ok(class_names([single]));
    }

    let mut fragments = Vec::new();
    for item in value.try_iter()? {
        if !item.is_true() {
            continue;
        }
        match item.as_str() {
            Some(s) => fragments.push(s.to_string()),
            None => fragments.push(item.to_string()),
        }
    }
    Ok(class_names(&fragments))
}
