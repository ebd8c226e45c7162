//! Runs Given/When/Then tables, embedded as data tables into a Gherkin
//! feature, against a bank account fixture.
//!
//! ```bash
//! RUST_LOG=gwt_table=debug cargo run --example bank_account
//! ```

use gwt_table::{step::Assertion, Collection, Fixture, Report, Table};
use tracing_subscriber::EnvFilter;

const FEATURE: &str = r"
Feature: Bank account

  Scenario: Deposit
    Given the steps
      | given | user [Alice] has [100.0] dollars in their account |
      | when  | [50.0] dollars is deposited in to the account     |
      | then  | the balance should be [150.0] dollars             |

  Scenario: Overdraft
    Given the steps
      | given | user [Bob] has no money in their account      |
      | and   | [20] dollars is deposited in to the account   |
      | when  | [25] dollars is withdrawn from the account    |
      | then  | the balance should be [0] dollars             |
      | and   | the balance should be [-5] dollars            |

  Scenario: Typo
    Given the steps
      | given | user [Carol] has [10] dollars in their acount |
      | when  | [1] dollars is deposited in to the account    |
      | then  | the balance should be [11] dollars            |
";

#[derive(Debug, Default)]
struct BankAccount {
    owner: String,
    balance: f64,
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

    fn teardown(&mut self) {
        tracing::info!(owner = %self.owner, balance = self.balance, "closing account");
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let feature = gherkin::Feature::parse(FEATURE, gherkin::GherkinEnv::default())?;

    for scenario in &feature.scenarios {
        for table in scenario.steps.iter().filter_map(|s| s.table.as_ref()) {
            let table = Table::from(table);
            let results = BankAccount::default().run_table(&table)?;

            println!("{}:", scenario.name);
            for (row, result) in table.rows().iter().zip(&results) {
                println!(
                    "  | {:<40} | {:<5} | {} |",
                    result.verdict_cell(),
                    row.marker().unwrap_or_default(),
                    row.sentence().unwrap_or_default(),
                );
                if !result.diagnostic_cell().is_empty() {
                    println!("  |   {}", result.diagnostic_cell());
                }
            }
            println!("  {}\n", results.iter().collect::<Report>());
        }
    }
    Ok(())
}
