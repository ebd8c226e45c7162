// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Conversion of step sentences into handler identifiers.
//!
//! A step sentence like `"user [Alice] has [100.0] dollars in their account"`
//! is turned into the `userHasDollarsInTheirAccount` identifier, which is then
//! looked up in a [`step::Collection`].
//!
//! [`step::Collection`]: crate::step::Collection

use lazy_regex::regex;

/// Removes all the `[...]` parameter placeholders from the given `sentence`
/// and trims the leftover.
#[must_use]
pub fn strip_parameters(sentence: &str) -> String {
    regex!(r"\[.*?\]")
        .replace_all(sentence, "")
        .trim()
        .to_owned()
}

/// Converts a whitespace-separated `phrase` into a camel-cased identifier.
///
/// The first character of the first word is lower-cased, the first character
/// of every following word is upper-cased, and the rest of every word is
/// lower-cased. Words are concatenated without a separator.
///
/// Punctuation is kept as is, so `"it works!"` becomes `"itWorks!"`, which
/// won't match any handler.
///
/// # Example
///
/// ```rust
/// use gwt_table::normalize;
///
/// assert_eq!(
///     normalize::identifier("Joe wants to create a profile"),
///     "joeWantsToCreateAProfile",
/// );
/// assert_eq!(normalize::identifier("   "), "");
/// ```
#[must_use]
pub fn identifier(phrase: &str) -> String {
    phrase.split_whitespace().enumerate().fold(
        String::with_capacity(phrase.len()),
        |mut out, (i, word)| {
            let mut chars = word.chars();
            if let Some(first) = chars.next() {
                if i == 0 {
                    out.extend(first.to_lowercase());
                } else {
                    out.extend(first.to_uppercase());
                }
                out.push_str(&chars.as_str().to_lowercase());
            }
            out
        },
    )
}

/// Derives the handler identifier of a raw step `sentence` (with its `[...]`
/// placeholders still in place).
#[must_use]
pub fn step_identifier(sentence: &str) -> String {
    identifier(&strip_parameters(sentence))
}

/// Number of placeholders the author opened in the `sentence`, counting every
/// `[` character.
///
/// A well-formed sentence has exactly as many placeholders as extracted
/// [`Argument`]s.
///
/// [`Argument`]: crate::parameter::Argument
#[must_use]
pub fn placeholder_count(sentence: &str) -> usize {
    sentence.matches('[').count()
}
