//! Type coercers for option value spans
//!
//! A coercer turns an optional value span into a single [`Value`]. `None`
//! means the flag was absent and yields the coercer's default; `Some` holds
//! the tokens that followed the flag, which may be empty.

use crate::error::{ParseError, Result};
use crate::value::Value;

/// Conversion from an optional value span to a single value
pub trait Coerce {
    fn coerce(&self, span: Option<&[String]>) -> Result<Value>;
}

impl<F> Coerce for F
where
    F: Fn(Option<&[String]>) -> Result<Value>,
{
    fn coerce(&self, span: Option<&[String]>) -> Result<Value> {
        self(span)
    }
}

/// Extract the single token a unary coercer requires
///
/// `None` passes through so the caller can substitute its default. A
/// present span must hold exactly one token: an empty span means the flag
/// was given without its value.
fn unary(span: Option<&[String]>) -> Result<Option<&str>> {
    match span {
        None => Ok(None),
        Some([value]) => Ok(Some(value.as_str())),
        Some([]) => Err(ParseError::TooFewValues),
        Some(_) => Err(ParseError::TooManyValues),
    }
}

/// Presence toggle
///
/// Any present span counts as `true`, values and all; only absence falls
/// back to the default.
#[derive(Debug, Clone, Copy)]
pub struct Bool {
    default: bool,
}

/// Boolean coercer with a `false` default
pub fn bool() -> Bool {
    Bool { default: false }
}

impl Bool {
    /// Set the value used when the flag is absent
    pub fn with_default(mut self, default: bool) -> Self {
        self.default = default;
        self
    }
}

impl Coerce for Bool {
    fn coerce(&self, span: Option<&[String]>) -> Result<Value> {
        match span {
            None => Ok(Value::Bool(self.default)),
            Some(_) => Ok(Value::Bool(true)),
        }
    }
}

/// Integer coercer
#[derive(Debug, Clone, Copy)]
pub struct Int {
    default: i64,
}

/// Integer coercer with a `0` default
pub fn int() -> Int {
    Int { default: 0 }
}

impl Int {
    /// Set the value used when the flag is absent
    pub fn with_default(mut self, default: i64) -> Self {
        self.default = default;
        self
    }
}

impl Coerce for Int {
    fn coerce(&self, span: Option<&[String]>) -> Result<Value> {
        match unary(span)? {
            None => Ok(Value::Int(self.default)),
            Some(raw) => leading_int(raw)
                .map(Value::Int)
                .ok_or_else(|| ParseError::InvalidValue {
                    value: raw.to_string(),
                }),
        }
    }
}

/// Parse the leading integer prefix of a token
///
/// Accepts leading whitespace and an optional sign; conversion stops at the
/// first non-digit, so `"12ab"` yields 12. `None` when no digits are found
/// or the run overflows an `i64`.
fn leading_int(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (negative, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };

    let mut value: i64 = 0;
    let mut seen = false;
    for c in digits.chars() {
        let digit = match c.to_digit(10) {
            Some(d) => i64::from(d),
            None => break,
        };
        seen = true;
        value = value.checked_mul(10)?.checked_add(digit)?;
    }

    if !seen {
        return None;
    }
    Some(if negative { -value } else { value })
}

/// Float coercer
#[derive(Debug, Clone, Copy)]
pub struct Float {
    default: f64,
}

/// Float coercer with a `0.0` default
pub fn float() -> Float {
    Float { default: 0.0 }
}

impl Float {
    /// Set the value used when the flag is absent
    pub fn with_default(mut self, default: f64) -> Self {
        self.default = default;
        self
    }
}

impl Coerce for Float {
    fn coerce(&self, span: Option<&[String]>) -> Result<Value> {
        match unary(span)? {
            None => Ok(Value::Float(self.default)),
            Some(raw) => raw
                .trim()
                .parse::<f64>()
                .map(Value::Float)
                .map_err(|_| ParseError::InvalidValue {
                    value: raw.to_string(),
                }),
        }
    }
}

/// String coercer
#[derive(Debug, Clone, Default)]
pub struct Str {
    default: String,
}

/// String coercer with an empty default
pub fn string() -> Str {
    Str {
        default: String::new(),
    }
}

impl Str {
    /// Set the value used when the flag is absent
    pub fn with_default(mut self, default: impl Into<String>) -> Self {
        self.default = default.into();
        self
    }
}

impl Coerce for Str {
    fn coerce(&self, span: Option<&[String]>) -> Result<Value> {
        match unary(span)? {
            None => Ok(Value::Str(self.default.clone())),
            Some(raw) => Ok(Value::Str(raw.to_string())),
        }
    }
}

/// List coercer: collects every span token verbatim, in order
#[derive(Debug, Clone, Copy, Default)]
pub struct List;

/// List coercer; an absent flag yields an empty list
pub fn list() -> List {
    List
}

impl Coerce for List {
    fn coerce(&self, span: Option<&[String]>) -> Result<Value> {
        let values = span
            .unwrap_or(&[])
            .iter()
            .map(|token| Value::Str(token.clone()))
            .collect();
        Ok(Value::List(values))
    }
}
