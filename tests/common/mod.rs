// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Sample fixtures shared by the integration tests.

#![allow(dead_code, reason = "not every test binary uses every fixture")]

use anyhow::bail;
use gwt_table::{step::Assertion, Collection, Fixture};

/// Bank account with a single owner.
#[derive(Debug, Default)]
pub struct BankAccount {
    pub owner: String,
    pub balance: f64,
    pub setups: usize,
    pub teardowns: usize,
}

impl Fixture for BankAccount {
    fn steps() -> Collection<Self> {
        Collection::new()
            .step(
                "userHasDollarsInTheirAccount",
                |a: &mut Self, owner: String, balance: f64| {
                    a.owner = owner;
                    a.balance = balance;
                },
            )
            .step("userHasNoMoneyInTheirAccount", |a: &mut Self, owner: String| {
                a.owner = owner;
            })
            .step("dollarsIsDepositedInToTheAccount", |a: &mut Self, n: f64| {
                a.balance += n;
            })
            .step("dollarsIsWithdrawnFromTheAccount", |a: &mut Self, n: f64| {
                a.balance -= n;
            })
            .step("theBalanceShouldBeDollars", |a: &mut Self, n: f64| {
                Assertion::equals(n, a.balance)
            })
    }

    fn setup(&mut self) -> anyhow::Result<()> {
        self.setups += 1;
        Ok(())
    }

    fn teardown(&mut self) {
        self.teardowns += 1;
    }
}

/// Password every [`UserLogin`] succeeds with.
pub const PASSWORD: &str = "P@ssw0rd";

/// Login page of a web application.
#[derive(Debug, Default)]
pub struct UserLogin {
    pub user: String,
    pub password: String,
    pub logged_in: bool,
}

impl UserLogin {
    fn message(&self) -> String {
        if self.logged_in {
            format!("Welcome, {}", self.user)
        } else {
            "Invalid Username or Password!".to_owned()
        }
    }

    fn page(&self) -> &'static str {
        if self.logged_in {
            "home.html"
        } else {
            "loginerror.html"
        }
    }
}

impl Fixture for UserLogin {
    fn steps() -> Collection<Self> {
        Collection::new()
            .step("userArrivesAtTheLoginPage", |l: &mut Self, user: String| {
                l.user = user;
            })
            .step("entersPasswordOf", |l: &mut Self, password: String| {
                l.password = password;
            })
            .step("heClicksOnTheLoginButton", |l: &mut Self| {
                l.logged_in = l.password == PASSWORD;
            })
            .step("heShouldSeeAResultMessageOf", |l: &mut Self, msg: String| {
                Assertion::equals_displayed(msg, l.message())
            })
            .step("heIsDirectedToPage", |l: &mut Self, page: String| {
                l.page() == page
            })
    }
}

/// Fixture whose setup always fails.
#[derive(Debug, Default)]
pub struct Unreachable {
    pub teardowns: usize,
    pub calls: usize,
}

impl Fixture for Unreachable {
    fn steps() -> Collection<Self> {
        Collection::new().step("call", |u: &mut Self| u.calls += 1)
    }

    fn setup(&mut self) -> anyhow::Result<()> {
        bail!("service is down")
    }

    fn teardown(&mut self) {
        self.teardowns += 1;
    }
}

/// Installs a test [`tracing`] subscriber, if none is installed yet.
pub fn init_tracing() {
    _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
