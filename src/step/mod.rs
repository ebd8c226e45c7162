// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Step handlers and the [`Collection`] they are registered in.
//!
//! - [`collection`]: registry keyed by identifier and [`Signature`]
//! - [`handler`]: typed [`Handler`] functions and their [`Parameter`]s
//! - [`outcome`]: what a handler returns ([`Outcome`], [`Assertion`])
//!
//! [`Signature`]: crate::parameter::Signature

pub mod collection;
pub mod handler;
pub mod outcome;

pub use self::{
    collection::{Collection, Step},
    handler::{Handler, Parameter},
    outcome::{Assertion, IntoOutcome, Outcome},
};
