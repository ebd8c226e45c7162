// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Classification of step outcomes into [`Verdict`]s, and their rendering
//! into result cells.

use std::fmt::Display;

use gherkin::StepType;

use crate::{cli::Config, step::Assertion};

/// Classification of a processed step.
#[derive(Clone, Debug, PartialEq)]
pub enum Verdict {
    /// Assertion step held.
    Pass,

    /// Assertion step didn't hold, optionally with a diagnostic message.
    Fail(Option<String>),

    /// Step couldn't be resolved or its handler failed.
    Error(String),

    /// Action step, which asserts nothing and so is left unannotated.
    Unmarked,
}

impl Verdict {
    /// Classifies the [`Assertion`] returned for the step `sentence`.
    ///
    /// A failed [`Assertion`] without an `actual` value renders as a bare
    /// failure, otherwise the message reads
    /// `<sentence> (expected: <expected>, actual: <actual>)`, omitting the
    /// `expected` part when it's absent.
    ///
    /// # Example
    ///
    /// ```rust
    /// use gwt_table::{step::Assertion, Verdict};
    ///
    /// let verdict = Verdict::classify(
    ///     "the balance should be [200.0] dollars",
    ///     &Assertion::equals(200.0, 150.0),
    /// );
    ///
    /// assert_eq!(
    ///     verdict.diagnostic(),
    ///     Some(
    ///         "the balance should be [200.0] dollars \
    ///          (expected: 200.0, actual: 150.0)",
    ///     ),
    /// );
    /// ```
    #[must_use]
    pub fn classify(sentence: &str, assertion: &Assertion) -> Self {
        if assertion.passed {
            return Self::Pass;
        }
        let non_empty = |v: &Option<String>| v.clone().filter(|s| !s.is_empty());

        let Some(actual) = non_empty(&assertion.actual) else {
            return Self::Fail(None);
        };
        let expected = non_empty(&assertion.expected)
            .map(|e| format!("expected: {e}, "))
            .unwrap_or_default();
        Self::Fail(Some(format!("{sentence} ({expected}actual: {actual})")))
    }

    /// Creates an [`Verdict::Error`] of the step `sentence` failed with the
    /// given `detail`.
    #[must_use]
    pub fn error(sentence: &str, detail: impl Display) -> Self {
        Self::Error(format!("{sentence} Exception: {detail}"))
    }

    /// Returns the diagnostic message of this [`Verdict`], if any.
    ///
    /// This is not always the diagnostic cell: see [`Verdict::cells()`] for
    /// where each message is rendered.
    #[must_use]
    pub fn diagnostic(&self) -> Option<&str> {
        match self {
            Self::Fail(msg) => msg.as_deref(),
            Self::Error(msg) => Some(msg),
            Self::Pass | Self::Unmarked => None,
        }
    }

    /// Indicates whether this [`Verdict`] is [`Verdict::Pass`].
    #[must_use]
    pub const fn is_pass(&self) -> bool {
        matches!(self, Self::Pass)
    }

    /// Indicates whether this [`Verdict`] is [`Verdict::Fail`].
    #[must_use]
    pub const fn is_fail(&self) -> bool {
        matches!(self, Self::Fail(_))
    }

    /// Indicates whether this [`Verdict`] is [`Verdict::Error`].
    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    /// Renders this [`Verdict`] into a `[verdict, diagnostic]` cell pair,
    /// using the markers of the given [`Config`].
    ///
    /// A [`Verdict::Fail`] message is rendered into the verdict cell as
    /// `fail:<message>`, the way a table runner styles a failed cell with its
    /// detail. Only a [`Verdict::Error`] fills the diagnostic cell, leaving
    /// the bare fail marker in the verdict cell.
    #[must_use]
    pub fn cells(&self, config: &Config) -> [String; 2] {
        match self {
            Self::Pass => [config.pass_marker.clone(), String::new()],
            Self::Fail(None) => [config.fail_marker.clone(), String::new()],
            Self::Fail(Some(msg)) => {
                [format!("{}:{msg}", config.fail_marker), String::new()]
            }
            Self::Error(msg) => [
                config.fail_marker.clone(),
                format!("{}{msg}", config.error_prefix),
            ],
            Self::Unmarked => [String::new(), String::new()],
        }
    }
}

/// Processed step of a table run.
#[derive(Clone, Debug, PartialEq)]
pub struct ResultRow {
    phase: StepType,
    verdict: Verdict,
    cells: [String; 2],
}

impl ResultRow {
    /// Creates a new [`ResultRow`] rendering the `verdict` with the given
    /// [`Config`].
    #[must_use]
    pub fn new(phase: StepType, verdict: Verdict, config: &Config) -> Self {
        let cells = verdict.cells(config);
        Self { phase, verdict, cells }
    }

    /// Returns the phase the step was processed in.
    ///
    /// Continuation rows report the phase they continue.
    #[must_use]
    pub const fn phase(&self) -> &StepType {
        &self.phase
    }

    /// Returns the [`Verdict`] of the step.
    #[must_use]
    pub const fn verdict(&self) -> &Verdict {
        &self.verdict
    }

    /// Returns the rendered verdict cell.
    #[must_use]
    pub fn verdict_cell(&self) -> &str {
        &self.cells[0]
    }

    /// Returns the rendered diagnostic cell.
    ///
    /// It is only filled for a [`Verdict::Error`]. The message of a
    /// [`Verdict::Fail`] is part of the [`ResultRow::verdict_cell()`]
    /// instead, while [`Verdict::diagnostic()`] yields either.
    #[must_use]
    pub fn diagnostic_cell(&self) -> &str {
        &self.cells[1]
    }

    /// Converts this [`ResultRow`] into its cells, as handed back to a table
    /// runner.
    #[must_use]
    pub fn into_cells(self) -> Vec<String> {
        self.cells.into()
    }
}
