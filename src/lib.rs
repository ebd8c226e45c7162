// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

#![cfg_attr(any(doc, test), doc = include_str!("../README.md"))]
#![cfg_attr(not(any(doc, test)), doc = env!("CARGO_PKG_NAME"))]
#![deny(nonstandard_style, trivial_casts, trivial_numeric_casts)]
#![forbid(non_ascii_idents, unsafe_code)]
#![warn(
    clippy::absolute_paths,
    clippy::as_conversions,
    clippy::clone_on_ref_ptr,
    clippy::dbg_macro,
    clippy::expect_used,
    clippy::get_unwrap,
    clippy::missing_const_for_fn,
    clippy::missing_docs_in_private_items,
    clippy::pedantic,
    clippy::print_stderr,
    clippy::print_stdout,
    clippy::redundant_clone,
    clippy::str_to_string,
    clippy::todo,
    clippy::unimplemented,
    clippy::unwrap_used,
    future_incompatible,
    missing_debug_implementations,
    missing_docs,
    unused_results
)]

pub mod cli;
pub mod error;
pub mod fixture;
pub mod normalize;
mod panic_trap;
pub mod parameter;
pub mod report;
pub mod runner;
pub mod step;
pub mod table;
pub mod verdict;

#[doc(no_inline)]
pub use gherkin::StepType;

pub use self::{
    cli::Config,
    error::{Error, Result, StepError},
    fixture::Fixture,
    parameter::{Argument, Kind, Signature},
    report::Report,
    runner::Runner,
    step::{Assertion, Collection},
    table::{Row, Table},
    verdict::{ResultRow, Verdict},
};

