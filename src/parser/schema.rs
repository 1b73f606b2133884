//! Schemas and the top-level parse entry point

use crate::error::Result;
use crate::value::Value;
use serde::Serialize;
use std::collections::HashMap;

/// A parser applied to a full argument sequence
///
/// Schema entries are values of this capability. Any function of the
/// argument slice qualifies through the blanket impl, so entries are not
/// limited to flag-locator compositions.
pub trait Parser {
    fn apply(&self, args: &[String]) -> Result<Value>;
}

impl<F> Parser for F
where
    F: Fn(&[String]) -> Result<Value>,
{
    fn apply(&self, args: &[String]) -> Result<Value> {
        self(args)
    }
}

/// Option names mapped to the parsers that extract them
#[derive(Default)]
pub struct Schema {
    entries: HashMap<String, Box<dyn Parser>>,
}

impl Schema {
    /// Create an empty schema
    pub fn new() -> Self {
        Schema {
            entries: HashMap::new(),
        }
    }

    /// Add an entry, builder-style
    pub fn with(mut self, name: impl Into<String>, parser: impl Parser + 'static) -> Self {
        self.insert(name, parser);
        self
    }

    /// Add an entry
    pub fn insert(&mut self, name: impl Into<String>, parser: impl Parser + 'static) {
        self.entries.insert(name.into(), Box::new(parser));
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the schema has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Apply every schema entry to the same argument sequence
///
/// Each entry sees the full, unmodified sequence, never a per-key slice.
/// The first failing entry aborts the whole parse; there is no partial
/// result.
pub fn parse(schema: &Schema, args: &[String]) -> Result<Options> {
    let mut values = HashMap::new();
    for (name, parser) in &schema.entries {
        values.insert(name.clone(), parser.apply(args)?);
    }
    Ok(Options { values })
}

/// Parsed option values keyed by schema name
///
/// Holds exactly one entry per schema key. Options whose flag was absent
/// hold [`Value::Absent`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Options {
    values: HashMap<String, Value>,
}

impl Options {
    /// Get the value for an option name
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    /// Whether the option's flag was present in the arguments
    pub fn is_present(&self, name: &str) -> bool {
        self.values.get(name).is_some_and(|v| !v.is_absent())
    }

    /// Get a boolean option value
    pub fn get_bool(&self, name: &str) -> Option<bool> {
        self.get(name).and_then(Value::as_bool)
    }

    /// Get an integer option value
    pub fn get_int(&self, name: &str) -> Option<i64> {
        self.get(name).and_then(Value::as_int)
    }

    /// Get a float option value
    pub fn get_float(&self, name: &str) -> Option<f64> {
        self.get(name).and_then(Value::as_float)
    }

    /// Get a string option value
    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(Value::as_str)
    }

    /// Iterate over all option names and values
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.values.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Number of options
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether there are no options
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
