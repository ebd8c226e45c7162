// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Orchestration of a [`Table`] run against a [`Fixture`].

use std::any;

use gherkin::StepType;
use tracing::{debug, debug_span, info, info_span, warn};

use crate::{
    cli::Config,
    error::{self, Error, Result, StepError},
    fixture::{Fixture, Session},
    normalize, panic_trap,
    parameter::{self, Argument, Signature},
    report::Report,
    step::{Collection, Outcome},
    table::{Row, Table},
    verdict::{ResultRow, Verdict},
};

/// Runner of Given/When/Then [`Table`]s.
///
/// Rows are consumed in the shape
/// `Given (AND)* When Then (AND)*`: the first row is always the Given step,
/// rows marked with the [`Config::and_keyword`] continue the Given or Then
/// phase, and anything after the Then phase is ignored.
#[derive(Clone, Debug, Default)]
pub struct Runner {
    config: Config,
}

impl Runner {
    /// Creates a new [`Runner`] with the default [`Config`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new [`Runner`] with the given [`Config`].
    #[must_use]
    pub const fn with_config(config: Config) -> Self {
        Self { config }
    }

    /// Returns the [`Config`] of this [`Runner`].
    #[must_use]
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Runs the `table` against the `fixture`, returning one [`ResultRow`]
    /// per processed step, in processing order.
    ///
    /// [`Fixture::setup()`] is called before the first row, and
    /// [`Fixture::teardown()`] exactly once before this method returns or
    /// unwinds.
    ///
    /// # Errors
    ///
    /// - [`Error::Setup`] if [`Fixture::setup()`] fails.
    /// - [`Error::MissingStep`] if the `table` ends before its Given, When or
    ///   Then row.
    /// - [`Error::MissingCell`] if a processed row has no step sentence.
    pub fn run<F: Fixture>(&self, fixture: &mut F, table: &Table) -> Result<Vec<ResultRow>> {
        let span = info_span!("table", fixture = any::type_name::<F>(), rows = table.len());
        let _entered = span.enter();

        let mut session = Session::new(fixture);
        session.setup().map_err(|e| {
            warn!("fixture setup failed: {e:#}");
            Error::Setup(e)
        })?;

        let steps = F::steps();
        let results = self.walk(&mut *session, &steps, table).inspect_err(|e| {
            warn!(error = %e, "malformed table");
        })?;

        let report = results.iter().collect::<Report>();
        info!(%report, success = report.is_success(), "table finished");
        Ok(results)
    }

    /// Walks the `table` rows through the Given, When and Then phases.
    fn walk<F>(
        &self,
        fixture: &mut F,
        steps: &Collection<F>,
        table: &Table,
    ) -> Result<Vec<ResultRow>> {
        let mut rows = table.rows().iter().enumerate().peekable();
        let mut results = Vec::with_capacity(table.len());

        for phase in [StepType::Given, StepType::When, StepType::Then] {
            let (index, row) = rows
                .next()
                .ok_or_else(|| Error::MissingStep { phase: phase.clone(), row: table.len() })?;
            results.push(self.step(fixture, steps, &phase, index, row)?);

            if matches!(phase, StepType::When) {
                continue;
            }
            while let Some((index, row)) =
                rows.next_if(|(_, row)| row.continues(&self.config.and_keyword))
            {
                results.push(self.step(fixture, steps, &phase, index, row)?);
            }
        }

        if let Some((index, _)) = rows.peek() {
            debug!(from = index, "ignoring rows after the Then phase");
        }
        Ok(results)
    }

    /// Processes a single `row` of the given `phase`.
    fn step<F>(
        &self,
        fixture: &mut F,
        steps: &Collection<F>,
        phase: &StepType,
        index: usize,
        row: &Row,
    ) -> Result<ResultRow> {
        let sentence =
            row.sentence().ok_or(Error::MissingCell { row: index, cell: 1 })?;

        let span = debug_span!("step", row = index, phase = error::keyword(phase), sentence);
        let _entered = span.enter();

        let verdict = dispatch(fixture, steps, sentence);
        match &verdict {
            Verdict::Error(msg) => warn!(%msg, "step errored"),
            v => debug!(verdict = ?v, "step processed"),
        }
        Ok(ResultRow::new(phase.clone(), verdict, &self.config))
    }
}

/// Resolves the step `sentence` against the `steps` and invokes it on the
/// `fixture`.
///
/// Resolution failures, handler errors and handler panics are all turned into
/// a [`Verdict::Error`], so a single [`Verdict`] is produced for every
/// `sentence`.
///
/// # Example
///
/// ```rust
/// use gwt_table::{runner, step::Collection, Verdict};
///
/// #[derive(Default)]
/// struct Login {
///     password: String,
/// }
///
/// let steps = Collection::new()
///     .step("entersPasswordOf", |l: &mut Login, p: String| l.password = p)
///     .step("passwordShouldBe", |l: &mut Login, p: String| l.password == p);
/// let mut login = Login::default();
///
/// assert_eq!(
///     runner::dispatch(&mut login, &steps, "enters password of [secret]"),
///     Verdict::Unmarked,
/// );
/// assert_eq!(
///     runner::dispatch(&mut login, &steps, "password should be [secret]"),
///     Verdict::Pass,
/// );
/// ```
pub fn dispatch<F>(fixture: &mut F, steps: &Collection<F>, sentence: &str) -> Verdict {
    let identifier = normalize::step_identifier(sentence);
    let args = parameter::extract(sentence);

    let opened = normalize::placeholder_count(sentence);
    if opened != args.len() {
        let err = StepError::Placeholders { opened, parsed: args.len() };
        return Verdict::error(sentence, err);
    }

    let signature = args.iter().map(Argument::kind).collect::<Signature>();
    let step = match steps.find(&identifier, &signature) {
        Ok(step) => step,
        Err(e) => return Verdict::error(sentence, e),
    };
    debug!(%identifier, %signature, "resolved step handler");

    match panic_trap::catch(|| step(fixture, &args)) {
        Ok(Outcome::Action) => Verdict::Unmarked,
        Ok(Outcome::Assertion(assertion)) => Verdict::classify(sentence, &assertion),
        Ok(Outcome::Failed(msg)) => Verdict::error(sentence, StepError::Failed(msg)),
        Err(payload) => Verdict::error(sentence, StepError::Panic(payload)),
    }
}
