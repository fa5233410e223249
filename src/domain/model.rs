use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub full_name: String,
}

impl User {
    pub fn new(id: Uuid, full_name: impl Into<String>) -> Self {
        Self {
            id,
            full_name: full_name.into(),
        }
    }
}

/// Positional argument of a structured log record.
///
/// Templates reference arguments by index (`{0}`, `{1}`, ...) so that
/// backends can index the template and its arguments separately.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogValue {
    Id(Uuid),
    Text(String),
    Millis(u64),
}

impl fmt::Display for LogValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogValue::Id(id) => write!(f, "{}", id),
            LogValue::Text(text) => f.write_str(text),
            LogValue::Millis(ms) => write!(f, "{}", ms),
        }
    }
}

impl From<Uuid> for LogValue {
    fn from(id: Uuid) -> Self {
        LogValue::Id(id)
    }
}

impl From<&str> for LogValue {
    fn from(text: &str) -> Self {
        LogValue::Text(text.to_string())
    }
}

impl From<String> for LogValue {
    fn from(text: String) -> Self {
        LogValue::Text(text)
    }
}

impl From<u64> for LogValue {
    fn from(ms: u64) -> Self {
        LogValue::Millis(ms)
    }
}

/// Substitutes `{N}` placeholders with the matching positional argument.
/// Placeholders without a matching argument are kept as written.
pub fn render_template(template: &str, args: &[LogValue]) -> String {
    let mut rendered = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        rendered.push_str(&rest[..open]);
        let after = &rest[open + 1..];

        let substituted = after.find('}').and_then(|close| {
            let index: usize = after[..close].parse().ok()?;
            let arg = args.get(index)?;
            Some((arg.to_string(), close))
        });

        match substituted {
            Some((value, close)) => {
                rendered.push_str(&value);
                rest = &after[close + 1..];
            }
            None => {
                rendered.push('{');
                rest = after;
            }
        }
    }

    rendered.push_str(rest);
    rendered
}
