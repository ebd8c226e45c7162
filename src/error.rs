// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Error types of a table run.
//!
//! - [`Error`] aborts the whole run: the table is malformed, or the fixture
//!   couldn't be set up.
//! - [`StepError`] is recovered per row and rendered into the row's
//!   diagnostic cell.

use derive_more::with_trait::Display;
use gherkin::StepType;
use itertools::Itertools as _;

use crate::parameter::Signature;

/// Alias for a [`Result`](std::result::Result) with the [`Error`] of a table
/// run.
pub type Result<T> = std::result::Result<T, Error>;

/// Unrecoverable failure of a table run.
///
/// The fixture's teardown has already been executed when this is returned.
#[derive(Debug, Display, derive_more::Error)]
pub enum Error {
    /// Table ended before a mandatory [Given], [When] or [Then] row.
    ///
    /// [Given]: https://cucumber.io/docs/gherkin/reference#given
    /// [When]: https://cucumber.io/docs/gherkin/reference#when
    /// [Then]: https://cucumber.io/docs/gherkin/reference#then
    #[display("table has no {} row: expected one at index {row}", keyword(phase))]
    MissingStep {
        /// Phase whose row is missing.
        #[error(not(source))]
        phase: StepType,

        /// Index the row was expected at.
        row: usize,
    },

    /// Row lacks a mandatory cell.
    #[display("row {row} has no cell {cell}")]
    MissingCell {
        /// Index of the row.
        row: usize,

        /// Index of the missing cell.
        cell: usize,
    },

    /// Fixture setup failed.
    #[display("fixture setup failed: {_0:#}")]
    Setup(#[error(not(source))] anyhow::Error),
}

/// Failure of a single step, turning its row into an error verdict.
#[derive(Clone, Debug, Display, derive_more::Error, PartialEq)]
pub enum StepError {
    /// No handler is registered for the identifier and [`Signature`].
    #[display("{}", not_found(identifier, signature, known))]
    NotFound {
        /// Identifier derived from the step sentence.
        #[error(not(source))]
        identifier: String,

        /// [`Signature`] inferred from the step sentence.
        signature: Signature,

        /// [`Signature`]s registered under the same identifier.
        known: Vec<Signature>,
    },

    /// Sentence opens more placeholders than it has well-formed ones.
    #[display(
        "step has {opened} `[` placeholder(s), but only {parsed} could be \
         parsed"
    )]
    Placeholders {
        /// Number of `[` in the sentence.
        opened: usize,

        /// Number of parsed `[...]` arguments.
        parsed: usize,
    },

    /// Handler returned an error.
    #[display("step failed: {_0}")]
    Failed(#[error(not(source))] String),

    /// Handler panicked.
    #[display("step panicked: {_0}")]
    Panic(#[error(not(source))] String),
}

/// Returns the Gherkin keyword of the given [`StepType`].
pub(crate) const fn keyword(ty: &StepType) -> &'static str {
    match ty {
        StepType::Given => "Given",
        StepType::When => "When",
        StepType::Then => "Then",
    }
}

/// Renders the [`StepError::NotFound`] message.
fn not_found(identifier: &str, signature: &Signature, known: &[Signature]) -> String {
    if identifier.is_empty() {
        return "step sentence yields an empty handler name".into();
    }
    let out = format!("no step handler `{identifier}` accepting {signature}");
    if known.is_empty() {
        return out;
    }
    format!(
        "{out} (registered: {})",
        known.iter().map(|sig| format!("{identifier}{sig}")).join(", "),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parameter::Kind;

    #[test]
    fn displays_missing_step() {
        let err = Error::MissingStep { phase: StepType::Then, row: 2 };

        assert_eq!(
            err.to_string(),
            "table has no Then row: expected one at index 2",
        );
    }

    #[test]
    fn displays_setup_error_chain() {
        let err = Error::Setup(
            anyhow::anyhow!("connection refused").context("cannot reach bank"),
        );

        assert_eq!(
            err.to_string(),
            "fixture setup failed: cannot reach bank: connection refused",
        );
    }

    #[test]
    fn displays_not_found_with_known_signatures() {
        let err = StepError::NotFound {
            identifier: "theBalanceShouldBeDollars".into(),
            signature: Signature::from(vec![Kind::Text]),
            known: vec![Signature::from(vec![Kind::Numeric])],
        };

        assert_eq!(
            err.to_string(),
            "no step handler `theBalanceShouldBeDollars` accepting (Text) \
             (registered: theBalanceShouldBeDollars(Numeric))",
        );
    }

    #[test]
    fn displays_not_found_for_empty_identifier() {
        let err = StepError::NotFound {
            identifier: String::new(),
            signature: Signature::default(),
            known: vec![],
        };

        assert_eq!(err.to_string(), "step sentence yields an empty handler name");
    }

    #[test]
    fn step_errors_are_errors() {
        let err = StepError::Panic("boom".into());
        let _: &dyn std::error::Error = &err;
        assert_eq!(err.to_string(), "step panicked: boom");
    }

    #[test]
    fn fatal_errors_are_errors() {
        let err = Error::MissingCell { row: 2, cell: 1 };
        let dyn_err: &dyn std::error::Error = &err;

        assert!(dyn_err.source().is_none());
        assert_eq!(dyn_err.to_string(), "row 2 has no cell 1");
    }
}
