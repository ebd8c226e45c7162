// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! [`Fixture`] trait and its lifecycle.

use derive_more::with_trait::{Deref, DerefMut};

use crate::{error::Result, step::Collection, table::Table, verdict::ResultRow, Runner};

/// Stateful object exercised by the steps of a [`Table`].
///
/// A single instance lives for one table run: [`Fixture::setup()`] is called
/// before the first row, and [`Fixture::teardown()`] exactly once after the
/// last one, whatever the run ends with.
///
/// # Example
///
/// ```rust
/// use gwt_table::{step::{Assertion, Collection}, Fixture, Table};
///
/// #[derive(Default)]
/// struct Account {
///     balance: f64,
/// }
///
/// impl Fixture for Account {
///     fn steps() -> Collection<Self> {
///         Collection::new()
///             .step("userHasDollarsInTheirAccount", |a: &mut Self, _: String, n: f64| {
///                 a.balance = n;
///             })
///             .step("dollarsIsDepositedInToTheAccount", |a: &mut Self, n: f64| {
///                 a.balance += n;
///             })
///             .step("theBalanceShouldBeDollars", |a: &mut Self, n: f64| {
///                 Assertion::equals(n, a.balance)
///             })
///     }
/// }
///
/// let results = Account::default()
///     .run_table(&Table::from(vec![
///         vec!["given", "user [Alice] has [100.0] dollars in their account"],
///         vec!["when", "[50.0] dollars is deposited in to the account"],
///         vec!["then", "the balance should be [150.0] dollars"],
///     ]))
///     .unwrap();
///
/// assert_eq!(results[2].verdict_cell(), "pass");
/// ```
pub trait Fixture: Sized + 'static {
    /// Returns the step handlers of this [`Fixture`].
    fn steps() -> Collection<Self>;

    /// Prepares this [`Fixture`] before the first row is processed.
    ///
    /// # Errors
    ///
    /// If the [`Fixture`] cannot be prepared. The run is aborted then, yet
    /// [`Fixture::teardown()`] is still called.
    fn setup(&mut self) -> anyhow::Result<()> {
        Ok(())
    }

    /// Releases whatever [`Fixture::setup()`] or the steps acquired.
    fn teardown(&mut self) {}

    /// Runs the given [`Table`] against this [`Fixture`] with a default
    /// [`Runner`].
    ///
    /// # Errors
    ///
    /// See [`Runner::run()`].
    fn run_table(&mut self, table: &Table) -> Result<Vec<ResultRow>> {
        Runner::default().run(self, table)
    }
}

/// Borrowed [`Fixture`] tearing itself down on [`Drop`].
#[derive(Debug, Deref, DerefMut)]
pub(crate) struct Session<'f, F: Fixture> {
    #[deref(forward)]
    #[deref_mut(forward)]
    fixture: &'f mut F,
}

impl<'f, F: Fixture> Session<'f, F> {
    /// Opens a new [`Session`] over the given `fixture`.
    pub(crate) fn new(fixture: &'f mut F) -> Self {
        Self { fixture }
    }
}

impl<F: Fixture> Drop for Session<'_, F> {
    fn drop(&mut self) {
        tracing::debug!("tearing down fixture");
        self.fixture.teardown();
    }
}
