//! Flag location and value spans
//!
//! A flag is a token of the form `-` followed by one or more letters
//! (`-l`, `-p`). The value span of a flag is the run of tokens between its
//! first occurrence and the next flag-shaped token, exclusive of both.

use crate::error::Result;
use crate::parser::coerce::Coerce;
use crate::parser::schema::Parser;
use crate::value::Value;
use regex::Regex;

/// Pattern for flag-shaped tokens. No end anchor: `-l2` still delimits,
/// while `-5` is an ordinary value.
const FLAG_PATTERN: &str = r"^-[a-zA-Z]+";

/// Check whether a token is flag-shaped
pub fn is_flag(token: &str) -> bool {
    let re = Regex::new(FLAG_PATTERN).unwrap();
    re.is_match(token)
}

/// Locate the value span of `-<flag>` in an argument sequence
///
/// Returns `None` when the flag is absent. Otherwise the span runs from
/// just after the flag to the next flag-shaped token or the end of the
/// sequence, and may be empty. Only the first occurrence of the flag is
/// considered.
pub fn locate<'a>(flag: char, args: &'a [String]) -> Option<&'a [String]> {
    let target = format!("-{}", flag);
    let index = args.iter().position(|token| *token == target)?;

    let re = Regex::new(FLAG_PATTERN).unwrap();
    let end = args[index + 1..]
        .iter()
        .position(|token| re.is_match(token))
        .map(|offset| index + 1 + offset)
        .unwrap_or(args.len());

    Some(&args[index + 1..end])
}

/// Compose a flag locator with a value coercer
///
/// The resulting parser yields [`Value::Absent`] when the flag is missing;
/// the coercer is only consulted when the flag is present.
pub fn option<C: Coerce>(flag: char, coercer: C) -> Opt<C> {
    Opt { flag, coercer }
}

/// A single-letter flag paired with its value coercer
#[derive(Debug, Clone)]
pub struct Opt<C> {
    flag: char,
    coercer: C,
}

impl<C: Coerce> Parser for Opt<C> {
    fn apply(&self, args: &[String]) -> Result<Value> {
        match locate(self.flag, args) {
            None => Ok(Value::Absent),
            Some(span) => self.coercer.coerce(Some(span)),
        }
    }
}
