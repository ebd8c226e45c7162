// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Extraction of `[...]` parameters from step sentences.
//!
//! Every placeholder becomes an [`Argument`], whose [`Kind`] is inferred from
//! its text: anything parsing as an [`f64`] is [`Kind::Numeric`], everything
//! else is [`Kind::Text`].

use derive_more::with_trait::{Deref, Display, From};
use itertools::Itertools as _;
use lazy_regex::regex;

/// Type tag of an [`Argument`].
#[derive(Clone, Copy, Debug, Display, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Kind {
    /// Accepted by [`f64`] handler parameters.
    Numeric,

    /// Accepted by [`String`] handler parameters.
    Text,
}

/// Value of a single `[...]` placeholder.
#[derive(Clone, Debug, Display, PartialEq)]
pub enum Argument {
    /// Placeholder text parsed as a double-precision number.
    #[display("{_0:?}")]
    Numeric(f64),

    /// Raw placeholder text, untouched.
    #[display("{_0}")]
    Text(String),
}

impl Argument {
    /// Returns the [`Kind`] of this [`Argument`].
    #[must_use]
    pub const fn kind(&self) -> Kind {
        match self {
            Self::Numeric(_) => Kind::Numeric,
            Self::Text(_) => Kind::Text,
        }
    }

    /// Returns the numeric value, if this is a [`Argument::Numeric`].
    #[must_use]
    pub const fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Numeric(v) => Some(*v),
            Self::Text(_) => None,
        }
    }

    /// Returns the raw text, if this is a [`Argument::Text`].
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Numeric(_) => None,
            Self::Text(s) => Some(s),
        }
    }
}

/// Positional list of [`Kind`]s a step handler accepts.
#[derive(Clone, Debug, Default, Deref, Display, Eq, From, Hash, PartialEq)]
#[display("({})", _0.iter().join(", "))]
pub struct Signature(Vec<Kind>);

impl FromIterator<Kind> for Signature {
    fn from_iter<I: IntoIterator<Item = Kind>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Infers an [`Argument`] from the raw text of a placeholder.
///
/// Surrounding whitespace is ignored while parsing a number, but a
/// [`Argument::Text`] always keeps the `raw` text byte-for-byte.
///
/// Non-finite numbers are only recognized by their exact `NaN` and
/// `Infinity` spellings (optionally signed). Other spellings like `nan`,
/// `inf` or `INFINITY` stay [`Argument::Text`].
///
/// # Example
///
/// ```rust
/// use gwt_table::parameter::{self, Argument};
///
/// assert_eq!(parameter::infer("100.0"), Argument::Numeric(100.0));
/// assert_eq!(parameter::infer(" 7 "), Argument::Numeric(7.0));
/// assert_eq!(parameter::infer("Alice"), Argument::Text("Alice".into()));
/// assert_eq!(parameter::infer("inf"), Argument::Text("inf".into()));
/// ```
#[must_use]
pub fn infer(raw: &str) -> Argument {
    let trimmed = raw.trim();
    match trimmed.parse::<f64>() {
        Ok(n) if n.is_finite() || is_non_finite_literal(trimmed) => {
            Argument::Numeric(n)
        }
        _ => Argument::Text(raw.to_owned()),
    }
}

/// Checks whether `s` is spelled exactly as `NaN` or `Infinity`, with an
/// optional sign.
fn is_non_finite_literal(s: &str) -> bool {
    let unsigned = s.strip_prefix(['+', '-']).unwrap_or(s);
    matches!(unsigned, "NaN" | "Infinity")
}

/// Returns the raw text of every `[...]` placeholder in the `sentence`, from
/// left to right.
///
/// Empty placeholders (`[]`) are not matched.
pub fn placeholders(sentence: &str) -> impl Iterator<Item = &str> + '_ {
    regex!(r"\[([^\]]+)]")
        .captures_iter(sentence)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Extracts the [`Argument`]s of the `sentence` in order of appearance.
///
/// # Example
///
/// ```rust
/// use gwt_table::parameter::{self, Argument};
///
/// assert_eq!(
///     parameter::extract("the user has [Alice] and [100.0] dollars"),
///     vec![Argument::Text("Alice".into()), Argument::Numeric(100.0)],
/// );
/// ```
#[must_use]
pub fn extract(sentence: &str) -> Vec<Argument> {
    placeholders(sentence).map(infer).collect()
}

/// Infers the [`Signature`] of the `sentence`.
///
/// Always agrees with the [`Argument::kind`]s returned by [`extract()`].
#[must_use]
pub fn signature(sentence: &str) -> Signature {
    placeholders(sentence).map(|raw| infer(raw).kind()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_in_order() {
        let args = extract("the user has [Alice] and [100.0] dollars");

        assert_eq!(
            args,
            vec![Argument::Text("Alice".into()), Argument::Numeric(100.0)],
        );
        assert_eq!(
            signature("the user has [Alice] and [100.0] dollars"),
            Signature::from(vec![Kind::Text, Kind::Numeric]),
        );
    }

    #[test]
    fn no_placeholders_yield_no_arguments() {
        assert!(extract("he clicks on the login button").is_empty());
        assert!(signature("he clicks on the login button").is_empty());
    }

    #[test]
    fn text_is_preserved_verbatim() {
        assert_eq!(
            extract("message [ Welcome, Alice ]"),
            vec![Argument::Text(" Welcome, Alice ".into())],
        );
        assert_eq!(
            extract("password [P@ssw0rd]"),
            vec![Argument::Text("P@ssw0rd".into())],
        );
    }

    #[test]
    fn numbers_of_any_notation_are_numeric() {
        assert_eq!(infer("50"), Argument::Numeric(50.0));
        assert_eq!(infer("-1.5"), Argument::Numeric(-1.5));
        assert_eq!(infer("1e3"), Argument::Numeric(1000.0));
    }

    #[test]
    fn only_exact_non_finite_spellings_are_numeric() {
        for word in ["Nan", "nan", "NAN", "inf", "-inf", "INF", "infinity", "INFINITY"] {
            assert_eq!(infer(word), Argument::Text(word.into()), "{word}");
        }

        assert!(matches!(infer("NaN"), Argument::Numeric(n) if n.is_nan()));
        assert!(matches!(infer(" -NaN "), Argument::Numeric(n) if n.is_nan()));
        assert_eq!(infer("Infinity"), Argument::Numeric(f64::INFINITY));
        assert_eq!(infer("+Infinity"), Argument::Numeric(f64::INFINITY));
        assert_eq!(infer("-Infinity"), Argument::Numeric(f64::NEG_INFINITY));
        assert_eq!(
            signature("user [Nan] and [NaN]"),
            Signature::from(vec![Kind::Text, Kind::Numeric]),
        );
    }

    #[test]
    fn empty_placeholders_are_skipped() {
        assert!(extract("nothing [] here").is_empty());
    }

    #[test]
    fn nested_bracket_is_part_of_the_text() {
        assert_eq!(extract("odd [a[b] one"), vec![Argument::Text("a[b".into())]);
    }

    #[test]
    fn argument_accessors() {
        let num = Argument::Numeric(2.5);
        let text = Argument::Text("x".into());

        assert_eq!(num.as_f64(), Some(2.5));
        assert_eq!(num.as_str(), None);
        assert_eq!(text.as_str(), Some("x"));
        assert_eq!(text.as_f64(), None);
    }

    #[test]
    fn displays_arguments_and_signatures() {
        assert_eq!(Argument::Numeric(150.0).to_string(), "150.0");
        assert_eq!(Argument::Text("Bob".into()).to_string(), "Bob");
        assert_eq!(
            Signature::from(vec![Kind::Text, Kind::Numeric]).to_string(),
            "(Text, Numeric)",
        );
        assert_eq!(Signature::default().to_string(), "()");
    }
}
