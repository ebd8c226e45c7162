// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Registry of the step handlers a fixture exposes.

use std::{collections::HashMap, rc::Rc};

use derive_more::with_trait::Debug;
use itertools::Itertools as _;

use crate::{
    error::StepError,
    parameter::{Argument, Signature},
};

use super::{handler::Handler, outcome::Outcome};

/// Type-erased [`Handler`] stored inside a [`Collection`].
pub type Step<Fixture> = Rc<dyn Fn(&mut Fixture, &[Argument]) -> Outcome>;

/// Collection of [`Step`]s, keyed by their identifier and [`Signature`].
///
/// The same identifier may be registered with several [`Signature`]s, so
/// `theBalanceShouldBe(Numeric)` and `theBalanceShouldBe(Text)` are distinct
/// steps. Lookups are exact, so resolution is deterministic from run to run.
#[derive(Debug)]
pub struct Collection<Fixture> {
    #[debug("{:?}",
        steps.iter()
            .flat_map(|(name, sigs)| sigs.keys().map(move |s| format!("{name}{s}")))
            .sorted()
            .collect::<Vec<_>>(),
    )]
    steps: HashMap<String, HashMap<Signature, Step<Fixture>>>,
}

// Implemented manually to omit redundant `Fixture: Clone` trait bound, imposed
// by `#[derive(Clone)]`.
impl<Fixture> Clone for Collection<Fixture> {
    fn clone(&self) -> Self {
        Self { steps: self.steps.clone() }
    }
}

// Implemented manually to omit redundant `Fixture: Default` trait bound,
// imposed by `#[derive(Default)]`.
impl<Fixture> Default for Collection<Fixture> {
    fn default() -> Self {
        Self { steps: HashMap::new() }
    }
}

impl<Fixture> Collection<Fixture> {
    /// Creates a new empty [`Collection`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the `handler` under the given camel-cased `identifier`.
    ///
    /// The [`Signature`] is derived from the `handler`'s parameter types.
    /// Registering the same identifier and [`Signature`] twice replaces the
    /// former [`Handler`].
    ///
    /// # Example
    ///
    /// ```rust
    /// use gwt_table::step::Collection;
    ///
    /// #[derive(Default)]
    /// struct Account {
    ///     balance: f64,
    /// }
    ///
    /// let steps = Collection::new()
    ///     .step("dollarsIsDeposited", |a: &mut Account, n: f64| a.balance += n)
    ///     .step("theBalanceShouldBe", |a: &mut Account, n: f64| a.balance == n);
    ///
    /// assert_eq!(steps.len(), 2);
    /// ```
    #[must_use]
    pub fn step<H, Args>(mut self, identifier: impl Into<String>, handler: H) -> Self
    where
        Fixture: 'static,
        H: Handler<Fixture, Args>,
        Args: 'static,
    {
        let step: Step<Fixture> =
            Rc::new(move |fixture: &mut Fixture, args: &[Argument]| {
                handler.invoke(fixture, args)
            });
        _ = self
            .steps
            .entry(identifier.into())
            .or_default()
            .insert(H::signature(), step);
        self
    }

    /// Moves all the [`Step`]s of the `other` [`Collection`] into this one.
    ///
    /// [`Step`]s of the `other` win on conflicts.
    #[must_use]
    pub fn merge(mut self, other: Self) -> Self {
        for (name, sigs) in other.steps {
            self.steps.entry(name).or_default().extend(sigs);
        }
        self
    }

    /// Returns the [`Step`] registered under the `identifier` with exactly
    /// the given `signature`.
    ///
    /// # Errors
    ///
    /// [`StepError::NotFound`] if there is no such [`Step`].
    pub fn find(
        &self,
        identifier: &str,
        signature: &Signature,
    ) -> Result<&Step<Fixture>, StepError> {
        let sigs = self.steps.get(identifier);
        sigs.and_then(|sigs| sigs.get(signature)).ok_or_else(|| {
            StepError::NotFound {
                identifier: identifier.to_owned(),
                signature: signature.clone(),
                known: sigs
                    .map(|s| s.keys().cloned().sorted_by_key(|s| s.to_string()).collect())
                    .unwrap_or_default(),
            }
        })
    }

    /// Returns all the [`Signature`]s registered under the `identifier`.
    pub fn signatures(&self, identifier: &str) -> impl Iterator<Item = &Signature> {
        self.steps.get(identifier).into_iter().flat_map(HashMap::keys)
    }

    /// Returns the total number of registered [`Step`]s.
    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.values().map(HashMap::len).sum()
    }

    /// Indicates whether this [`Collection`] has no [`Step`]s.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
