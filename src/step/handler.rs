// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Typed step handlers.
//!
//! Any [`Fn`] taking `&mut Fixture` followed by up to 8 [`Parameter`]s
//! ([`f64`] or [`String`]) and returning an [`IntoOutcome`] is a [`Handler`].
//! Its [`Signature`] is derived from the parameter types, so a fixture method
//! like
//!
//! ```rust,ignore
//! fn user_has_dollars(&mut self, name: String, balance: f64) { .. }
//! ```
//!
//! accepts the `(Text, Numeric)` signature.

use crate::parameter::{Argument, Kind, Signature};

use super::outcome::{IntoOutcome, Outcome};

/// Type a step handler parameter can be declared with.
pub trait Parameter: Sized {
    /// [`Kind`] of [`Argument`]s this [`Parameter`] accepts.
    const KIND: Kind;

    /// Converts the given [`Argument`] into this [`Parameter`], if its
    /// [`Kind`] matches.
    fn from_argument(arg: &Argument) -> Option<Self>;
}

impl Parameter for f64 {
    const KIND: Kind = Kind::Numeric;

    fn from_argument(arg: &Argument) -> Option<Self> {
        arg.as_f64()
    }
}

impl Parameter for String {
    const KIND: Kind = Kind::Text;

    fn from_argument(arg: &Argument) -> Option<Self> {
        arg.as_str().map(ToOwned::to_owned)
    }
}

/// Step handler of a `Fixture`, callable with a list of [`Argument`]s.
///
/// `Args` is a tuple of the handler's [`Parameter`] types and only serves to
/// tell apart the implementations for different arities.
pub trait Handler<Fixture, Args>: 'static {
    /// [`Signature`] of [`Argument`]s this [`Handler`] accepts.
    fn signature() -> Signature;

    /// Invokes this [`Handler`] on the `fixture`.
    ///
    /// Yields [`Outcome::Failed`] if the `args` don't fit the
    /// [`Handler::signature()`].
    fn invoke(&self, fixture: &mut Fixture, args: &[Argument]) -> Outcome;
}

macro_rules! impl_handler {
    ($($arg:ident),*) => {
        impl<Fixture, Func, Ret, $($arg,)*> Handler<Fixture, ($($arg,)*)> for Func
        where
            Func: Fn(&mut Fixture, $($arg),*) -> Ret + 'static,
            Ret: IntoOutcome,
            $($arg: Parameter,)*
        {
            fn signature() -> Signature {
                Signature::from(vec![$($arg::KIND),*])
            }

            #[allow(non_snake_case, unused_mut, unused_variables)]
            fn invoke(&self, fixture: &mut Fixture, args: &[Argument]) -> Outcome {
                let expected = <Self as Handler<Fixture, ($($arg,)*)>>::signature();
                if args.len() != expected.len() {
                    return mismatch(&expected, args);
                }
                let mut args_iter = args.iter();
                $(
                    let Some($arg) = args_iter.next().and_then($arg::from_argument)
                    else {
                        return mismatch(&expected, args);
                    };
                )*
                self(fixture, $($arg),*).into_outcome()
            }
        }
    };
}

impl_handler!();
impl_handler!(A1);
impl_handler!(A1, A2);
impl_handler!(A1, A2, A3);
impl_handler!(A1, A2, A3, A4);
impl_handler!(A1, A2, A3, A4, A5);
impl_handler!(A1, A2, A3, A4, A5, A6);
impl_handler!(A1, A2, A3, A4, A5, A6, A7);
impl_handler!(A1, A2, A3, A4, A5, A6, A7, A8);

/// Fails the step due to `args` not fitting the `expected` [`Signature`].
fn mismatch(expected: &Signature, args: &[Argument]) -> Outcome {
    let given: Signature = args.iter().map(Argument::kind).collect();
    Outcome::Failed(format!(
        "handler accepts {expected}, but was given {given}",
    ))
}
