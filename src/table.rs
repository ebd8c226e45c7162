// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Input table of Given/When/Then steps.
//!
//! Every [`Row`] holds a marker in its first cell (`AND` on continuation
//! rows) and the step sentence in its second one:
//!
//! ```text
//! | given | user [Alice] has [100.0] dollars in their account |
//! | when  | [50.0] dollars is deposited in to the account     |
//! | then  | the balance should be [150.0] dollars             |
//! ```

use std::fmt;

use derive_more::with_trait::{Deref, From};

/// Single row of a [`Table`].
#[derive(Clone, Debug, Default, Deref, Eq, From, PartialEq)]
pub struct Row(Vec<String>);

impl Row {
    /// Creates a new [`Row`] out of the given `cells`.
    #[must_use]
    pub fn new<I, S>(cells: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(cells.into_iter().map(Into::into).collect())
    }

    /// Returns the marker cell (the first one), if any.
    #[must_use]
    pub fn marker(&self) -> Option<&str> {
        self.0.first().map(String::as_str)
    }

    /// Returns the step sentence cell (the second one), if any.
    #[must_use]
    pub fn sentence(&self) -> Option<&str> {
        self.0.get(1).map(String::as_str)
    }

    /// Indicates whether the marker of this [`Row`] equals the given
    /// continuation `keyword`, ignoring ASCII case.
    #[must_use]
    pub fn continues(&self, keyword: &str) -> bool {
        self.marker().is_some_and(|m| m.eq_ignore_ascii_case(keyword))
    }
}

impl From<Vec<&str>> for Row {
    fn from(cells: Vec<&str>) -> Self {
        Self::new(cells)
    }
}

/// Table of step [`Row`]s, as supplied by a table-driven test runner.
///
/// # Example
///
/// ```rust
/// use gwt_table::Table;
///
/// let table = Table::from(vec![
///     vec!["given", "user [Alice] has [100.0] dollars in their account"],
///     vec!["when", "[50.0] dollars is deposited in to the account"],
///     vec!["then", "the balance should be [150.0] dollars"],
/// ]);
///
/// assert_eq!(table.len(), 3);
/// assert_eq!(table.rows()[2].marker(), Some("then"));
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Table {
    rows: Vec<Row>,
}

impl Table {
    /// Creates a new [`Table`] from a vector of [`Row`]s.
    #[must_use]
    pub const fn new(rows: Vec<Row>) -> Self {
        Self { rows }
    }

    /// Creates a [`Table`] from a Gherkin data table.
    #[must_use]
    pub fn from_gherkin(table: &gherkin::Table) -> Self {
        table.rows.iter().cloned().map(Row::from).collect()
    }

    /// Returns all the [`Row`]s.
    #[must_use]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Returns the [`Row`] at the given `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Row> {
        self.rows.get(index)
    }

    /// Checks if the table is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns the number of rows in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }
}

impl FromIterator<Row> for Table {
    fn from_iter<I: IntoIterator<Item = Row>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl From<Vec<Vec<&str>>> for Table {
    fn from(rows: Vec<Vec<&str>>) -> Self {
        rows.into_iter().map(Row::from).collect()
    }
}

impl From<Vec<Vec<String>>> for Table {
    fn from(rows: Vec<Vec<String>>) -> Self {
        rows.into_iter().map(Row::from).collect()
    }
}

impl From<&gherkin::Table> for Table {
    fn from(table: &gherkin::Table) -> Self {
        Self::from_gherkin(table)
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.rows {
            writeln!(f, "| {} |", row.join(" | "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_accessors() {
        let row = Row::from(vec!["AND", "he is directed to [home.html] page"]);

        assert_eq!(row.marker(), Some("AND"));
        assert_eq!(row.sentence(), Some("he is directed to [home.html] page"));
        assert_eq!(row.len(), 2);
    }

    #[test]
    fn short_rows_have_no_cells() {
        assert_eq!(Row::default().marker(), None);
        assert_eq!(Row::from(vec!["given"]).sentence(), None);
    }

    #[test]
    fn continuation_ignores_case() {
        assert!(Row::from(vec!["and", "x"]).continues("AND"));
        assert!(Row::from(vec!["And", "x"]).continues("AND"));
        assert!(!Row::from(vec!["then", "x"]).continues("AND"));
        assert!(!Row::from(vec![" and ", "x"]).continues("AND"));
        assert!(!Row::default().continues("AND"));
    }

    #[test]
    fn builds_from_string_rows() {
        let table = Table::from(vec![
            vec!["given".to_owned(), "a".to_owned()],
            vec!["when".to_owned(), "b".to_owned()],
        ]);

        assert_eq!(table.len(), 2);
        assert!(!table.is_empty());
        assert_eq!(table.get(1).and_then(Row::sentence), Some("b"));
        assert_eq!(table.get(2), None);
    }

    #[test]
    fn converts_gherkin_data_table() {
        let feature = gherkin::Feature::parse(
            "Feature: Login\n\
             \n\
             \x20 Scenario: Valid password\n\
             \x20   Given the steps\n\
             \x20     | given | user [Alice] arrives at the login page |\n\
             \x20     | when  | he clicks on the login button          |\n",
            gherkin::GherkinEnv::default(),
        )
        .unwrap();
        let data = feature.scenarios[0].steps[0].table.as_ref().unwrap();

        let table = Table::from(data);

        assert_eq!(table.len(), 2);
        assert_eq!(table.rows()[0].marker(), Some("given"));
        assert_eq!(
            table.rows()[0].sentence(),
            Some("user [Alice] arrives at the login page"),
        );
        assert_eq!(table.rows()[1].sentence(), Some("he clicks on the login button"));
    }

    #[test]
    fn displays_as_pipe_table() {
        let table = Table::from(vec![vec!["given", "a"], vec!["then", "b"]]);

        assert_eq!(table.to_string(), "| given | a |\n| then | b |\n");
    }
}
