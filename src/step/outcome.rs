// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Results of step handler invocations.

use std::fmt::{Debug, Display};

/// Result of an assertion step, carrying the values it compared.
///
/// Handlers return it instead of a plain [`bool`] whenever a failure should
/// be reported with the `expected` and `actual` values.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Assertion {
    /// Whether the assertion holds.
    pub passed: bool,

    /// Rendered value the step expected.
    pub expected: Option<String>,

    /// Rendered value the fixture actually observed.
    pub actual: Option<String>,
}

impl Assertion {
    /// Creates an [`Assertion`] without any compared values.
    #[must_use]
    pub const fn that(passed: bool) -> Self {
        Self { passed, expected: None, actual: None }
    }

    /// Compares `expected` with `actual`, rendering both with their [`Debug`]
    /// representation (so `150.0_f64` renders as `150.0`).
    ///
    /// Strings are rendered quoted (`"home.html"`). Use
    /// [`Assertion::equals_displayed()`] to render them as is.
    ///
    /// # Example
    ///
    /// ```rust
    /// use gwt_table::step::Assertion;
    ///
    /// let failed = Assertion::equals(200.0, 150.0);
    /// assert!(!failed.passed);
    /// assert_eq!(failed.expected.as_deref(), Some("200.0"));
    /// assert_eq!(failed.actual.as_deref(), Some("150.0"));
    /// ```
    #[must_use]
    pub fn equals<T: Debug + PartialEq>(expected: T, actual: T) -> Self {
        Self {
            passed: expected == actual,
            expected: Some(format!("{expected:?}")),
            actual: Some(format!("{actual:?}")),
        }
    }

    /// Compares `expected` with `actual`, rendering both with their
    /// [`Display`] representation.
    ///
    /// # Example
    ///
    /// ```rust
    /// use gwt_table::step::Assertion;
    ///
    /// let failed = Assertion::equals_displayed("home.html", "loginerror.html");
    /// assert!(!failed.passed);
    /// assert_eq!(failed.expected.as_deref(), Some("home.html"));
    /// assert_eq!(failed.actual.as_deref(), Some("loginerror.html"));
    /// ```
    #[must_use]
    pub fn equals_displayed<T: Display + PartialEq>(expected: T, actual: T) -> Self {
        Self {
            passed: expected == actual,
            expected: Some(expected.to_string()),
            actual: Some(actual.to_string()),
        }
    }

    /// Sets the rendered `expected` value.
    #[must_use]
    pub fn with_expected(mut self, expected: impl Display) -> Self {
        self.expected = Some(expected.to_string());
        self
    }

    /// Sets the rendered `actual` value.
    #[must_use]
    pub fn with_actual(mut self, actual: impl Display) -> Self {
        self.actual = Some(actual.to_string());
        self
    }
}

impl From<bool> for Assertion {
    fn from(passed: bool) -> Self {
        Self::that(passed)
    }
}

/// What a step handler invocation resulted in.
#[derive(Clone, Debug, PartialEq)]
pub enum Outcome {
    /// Handler performed an action without asserting anything.
    Action,

    /// Handler asserted something.
    Assertion(Assertion),

    /// Handler reported an error.
    Failed(String),
}

/// Conversion of a step handler's return value into an [`Outcome`].
///
/// [`bool`] and [`Assertion`] make an assertion step, `()` and any other
/// value make an action step, and an [`Err`] makes the step errored.
pub trait IntoOutcome {
    /// Converts this value into an [`Outcome`].
    fn into_outcome(self) -> Outcome;
}

impl IntoOutcome for () {
    fn into_outcome(self) -> Outcome {
        Outcome::Action
    }
}

impl IntoOutcome for bool {
    fn into_outcome(self) -> Outcome {
        Outcome::Assertion(self.into())
    }
}

impl IntoOutcome for Assertion {
    fn into_outcome(self) -> Outcome {
        Outcome::Assertion(self)
    }
}

impl IntoOutcome for Outcome {
    fn into_outcome(self) -> Outcome {
        self
    }
}

macro_rules! impl_action_outcome {
    ($($ty:ty),* $(,)?) => {$(
        impl IntoOutcome for $ty {
            fn into_outcome(self) -> Outcome {
                Outcome::Action
            }
        }
    )*};
}

impl_action_outcome!(String, &'static str, f64, i64, u64, usize);

impl<T: IntoOutcome, E: Display> IntoOutcome for Result<T, E> {
    fn into_outcome(self) -> Outcome {
        match self {
            Ok(v) => v.into_outcome(),
            Err(e) => Outcome::Failed(format!("{e:#}")),
        }
    }
}
