// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Trapping of panics raised by step handlers.

use std::{
    any::Any,
    panic::{self, AssertUnwindSafe},
};

/// Runs the given `f`, converting a panic into its textual payload.
///
/// The closure is asserted unwind-safe: a fixture left inconsistent by a
/// panicking handler is still torn down, and later rows see whatever state
/// it left behind.
pub(crate) fn catch<T>(f: impl FnOnce() -> T) -> Result<T, String> {
    panic::catch_unwind(AssertUnwindSafe(f)).map_err(|e| coerce_payload(&*e))
}

/// Coerces the given panic payload into a [`String`].
fn coerce_payload(payload: &(dyn Any + Send)) -> String {
    if let Some(string) = payload.downcast_ref::<String>() {
        string.clone()
    } else if let Some(&string) = payload.downcast_ref::<&str>() {
        string.to_owned()
    } else {
        "(Could not resolve panic payload)".to_owned()
    }
}
