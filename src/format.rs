//! How a grid turns each produced `NaiveDate` into the caller's output type.

use chrono::format::{Item, StrftimeItems};
use chrono::NaiveDate;
use std::fmt::{self, Write};
use std::rc::Rc;

use crate::error::GridError;

/// Output transform applied to every date a grid produces.
///
/// Variants are tried in declaration order of priority: a callable transform,
/// a wrapper-type constructor, then a strftime-style pattern (`%Y-%m-%d`).
pub enum Formatter<T> {
    /// Arbitrary callable; its return value is used as-is.
    Transform(Rc<dyn Fn(NaiveDate) -> T>),
    /// Builds a wrapper value from the date.
    WrapperType(fn(NaiveDate) -> T),
    /// Renders the date with chrono's strftime syntax, then converts the text.
    Pattern {
        pattern: String,
        into:    fn(String) -> T,
    },
}

impl<T> Formatter<T> {
    pub fn transform(f: impl Fn(NaiveDate) -> T + 'static) -> Self {
        Formatter::Transform(Rc::new(f))
    }

    /// Constructs `T` straight from the date. `Formatter::<NaiveDate>::wrapper()`
    /// is the identity, which is what an unformatted grid uses.
    pub fn wrapper() -> Self
    where
        T: From<NaiveDate>,
    {
        Formatter::WrapperType(<T as From<NaiveDate>>::from)
    }

    pub fn pattern(pattern: impl Into<String>) -> Self
    where
        T: From<String>,
    {
        Formatter::Pattern { pattern: pattern.into(), into: <T as From<String>>::from }
    }

    pub fn apply(&self, date: NaiveDate) -> Result<T, GridError> {
        match self {
            Formatter::Transform(f)      => Ok(f(date)),
            Formatter::WrapperType(ctor) => Ok(ctor(date)),
            Formatter::Pattern { pattern, into } => {
                let items = compile(pattern)?;
                render(date, pattern, &items).map(into)
            }
        }
    }

    /// Formats a whole sequence. Either every date is formatted or the first
    /// failure is returned.
    pub fn apply_all(&self, dates: Vec<NaiveDate>) -> Result<Vec<T>, GridError> {
        match self {
            Formatter::Pattern { pattern, into } => {
                let items = compile(pattern)?;
                dates
                    .into_iter()
                    .map(|d| render(d, pattern, &items).map(into))
                    .collect()
            }
            _ => dates.into_iter().map(|d| self.apply(d)).collect(),
        }
    }
}

impl Default for Formatter<NaiveDate> {
    fn default() -> Self { Formatter::wrapper() }
}

impl<T> Clone for Formatter<T> {
    fn clone(&self) -> Self {
        match self {
            Formatter::Transform(f)       => Formatter::Transform(Rc::clone(f)),
            Formatter::WrapperType(ctor)  => Formatter::WrapperType(*ctor),
            Formatter::Pattern { pattern, into } => {
                Formatter::Pattern { pattern: pattern.clone(), into: *into }
            }
        }
    }
}

impl<T> fmt::Debug for Formatter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Formatter::Transform(_)   => f.write_str("Transform(..)"),
            Formatter::WrapperType(_) => f.write_str("WrapperType(..)"),
            Formatter::Pattern { pattern, .. } => {
                f.debug_struct("Pattern").field("pattern", pattern).finish()
            }
        }
    }
}

// ─── Pattern rendering ────────────────────────────────────────────────────────

fn compile(pattern: &str) -> Result<Vec<Item<'_>>, GridError> {
    if pattern.is_empty() {
        return Err(invalid(pattern, "pattern is empty"));
    }
    let items: Vec<Item<'_>> = StrftimeItems::new(pattern).collect();
    if items.iter().any(|i| matches!(i, Item::Error)) {
        return Err(invalid(pattern, "unrecognised format specifier"));
    }
    Ok(items)
}

fn render(date: NaiveDate, pattern: &str, items: &[Item<'_>]) -> Result<String, GridError> {
    let mut out = String::new();
    // chrono reports fields a bare date cannot supply (%H, %z, ...) as fmt::Error.
    write!(out, "{}", date.format_with_items(items.iter()))
        .map_err(|_| invalid(pattern, "pattern needs a time or offset field"))?;
    Ok(out)
}

fn invalid(pattern: &str, reason: &'static str) -> GridError {
    GridError::InvalidPattern { pattern: pattern.to_owned(), reason }
}
