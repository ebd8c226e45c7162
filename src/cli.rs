// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! CLI options of a [`Runner`].
//!
//! [`Config`] doesn't parse anything by itself: a host table runner
//! flattens it into its own CLI.
//!
//! # Example
//!
//! ```rust
//! use clap::Parser as _;
//! use gwt_table::cli;
//!
//! #[derive(clap::Parser)]
//! struct HostCli {
//!     /// Table file to run.
//!     table: String,
//!
//!     #[command(flatten)]
//!     steps: cli::Config,
//! }
//!
//! let cli = HostCli::parse_from(["host", "login.tbl", "--and-keyword", "&"]);
//!
//! assert_eq!(cli.steps.and_keyword, "&");
//! assert_eq!(cli.steps.pass_marker, "pass");
//! ```
//!
//! [`Runner`]: crate::Runner

use smart_default::SmartDefault;

pub use clap::{Args, Parser};

/// Configuration of a [`Runner`], recognized as CLI options.
///
/// [`Runner`]: crate::Runner
#[derive(Clone, Debug, Eq, PartialEq, SmartDefault, clap::Args)]
#[group(skip)]
pub struct Config {
    /// Marker (case-insensitive) of rows continuing the previous step.
    #[arg(long, value_name = "word", default_value = "AND", global = true)]
    #[default(String::from("AND"))]
    pub and_keyword: String,

    /// Verdict cell of a passed step.
    #[arg(long, value_name = "text", default_value = "pass", global = true)]
    #[default(String::from("pass"))]
    pub pass_marker: String,

    /// Verdict cell of a failed or errored step.
    #[arg(long, value_name = "text", default_value = "fail", global = true)]
    #[default(String::from("fail"))]
    pub fail_marker: String,

    /// Prefix of the diagnostic cell of an errored step.
    #[arg(long, value_name = "text", default_value = "error:", global = true)]
    #[default(String::from("error:"))]
    pub error_prefix: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, clap::Parser)]
    struct Host {
        #[command(flatten)]
        config: Config,
    }

    #[test]
    fn defaults_match_cli_defaults() {
        let parsed = Host::parse_from(["host"]);

        assert_eq!(parsed.config, Config::default());
        assert_eq!(parsed.config.and_keyword, "AND");
        assert_eq!(parsed.config.error_prefix, "error:");
    }

    #[test]
    fn overrides_markers() {
        let parsed = Host::parse_from([
            "host",
            "--pass-marker",
            "ok",
            "--fail-marker=ko",
            "--error-prefix",
            "err ",
        ]);

        assert_eq!(parsed.config.pass_marker, "ok");
        assert_eq!(parsed.config.fail_marker, "ko");
        assert_eq!(parsed.config.error_prefix, "err ");
        assert_eq!(parsed.config.and_keyword, "AND");
    }
}
