// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Summary of a table run.

use std::fmt;

use itertools::Itertools as _;

use crate::verdict::{ResultRow, Verdict};

/// Statistics of the [`ResultRow`]s produced by a table run.
///
/// # Example
///
/// ```rust
/// use gwt_table::{Report, Verdict};
///
/// let report: Report = [Verdict::Unmarked, Verdict::Pass, Verdict::Fail(None)]
///     .iter()
///     .collect();
///
/// assert!(!report.is_success());
/// assert_eq!(report.to_string(), "3 steps (1 passed, 1 failed, 1 unmarked)");
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Report {
    /// Number of [`Verdict::Pass`] steps.
    pub passed: usize,

    /// Number of [`Verdict::Fail`] steps.
    pub failed: usize,

    /// Number of [`Verdict::Error`] steps.
    pub errored: usize,

    /// Number of [`Verdict::Unmarked`] (action) steps.
    pub unmarked: usize,
}

impl Report {
    /// Returns total number of steps, this [`Report`] has been collected for.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.passed + self.failed + self.errored + self.unmarked
    }

    /// Indicates whether no step has failed or errored.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.failed == 0 && self.errored == 0
    }

    /// Counts the given [`Verdict`] in.
    fn add(&mut self, verdict: &Verdict) {
        match verdict {
            Verdict::Pass => self.passed += 1,
            Verdict::Fail(_) => self.failed += 1,
            Verdict::Error(_) => self.errored += 1,
            Verdict::Unmarked => self.unmarked += 1,
        }
    }
}

impl<'v> FromIterator<&'v Verdict> for Report {
    fn from_iter<I: IntoIterator<Item = &'v Verdict>>(iter: I) -> Self {
        iter.into_iter().fold(Self::default(), |mut report, v| {
            report.add(v);
            report
        })
    }
}

impl<'r> FromIterator<&'r ResultRow> for Report {
    fn from_iter<I: IntoIterator<Item = &'r ResultRow>>(iter: I) -> Self {
        iter.into_iter().map(ResultRow::verdict).collect()
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let total = self.total();
        write!(f, "{total} step{}", if total == 1 { "" } else { "s" })?;

        let stats = [
            (self.passed, "passed"),
            (self.failed, "failed"),
            (self.errored, "errored"),
            (self.unmarked, "unmarked"),
        ]
        .into_iter()
        .filter(|(n, _)| *n > 0)
        .map(|(n, label)| format!("{n} {label}"))
        .join(", ");

        if !stats.is_empty() {
            write!(f, " ({stats})")?;
        }
        Ok(())
    }
}
