// End-to-end runs of each example program's scenario, asserting every line
// the programs print, blank separators and section headings included.

use solid_principles::console::Transcript;
use solid_principles::lsp::violated::Account;
use solid_principles::{dip, isp, lsp, ocp, srp, Scenario};

fn scenario() -> Scenario {
    Scenario::load().expect("default scenario parses")
}

fn headings(out: &Transcript) -> Vec<&str> {
    (0..out.len())
        .filter(|&i| out.is_heading(i))
        .map(|i| out.lines()[i].as_str())
        .collect()
}

// ============================================================================
// Single Responsibility
// ============================================================================

#[test]
fn srp_violated_transcript() {
    let out = srp::violated::run(&scenario());

    assert_eq!(
        out.lines(),
        [
            "Shopping Cart Invoice:",
            "Laptop - Rs 50000.0",
            "Mouse - Rs 2000.0",
            "Total: Rs 52000.0",
            "Product : Laptop with price: 50000.0 saved to database.",
            "Product : Mouse with price: 2000.0 saved to database.",
        ]
    );
    assert!(headings(&out).is_empty());
}

#[test]
fn srp_followed_transcript() {
    let out = srp::followed::run(&scenario());

    assert_eq!(
        out.lines(),
        [
            "Shopping Cart Invoice:",
            "Laptop - Rs 50000.0",
            "Mouse - Rs 2000.0",
            "Total price : 52000.0",
            "Product : Laptop with price: 50000.0 saved to database.",
            "Product : Mouse with price: 2000.0 saved to database.",
        ]
    );
    assert!(headings(&out).is_empty());
}

// ============================================================================
// Open/Closed
// ============================================================================

#[test]
fn ocp_violated_transcript() {
    let out = ocp::violated::run(&scenario());

    assert_eq!(
        out.lines(),
        [
            "Shopping Cart Invoice:",
            "Laptop - Rs 50000.0",
            "Mouse - Rs 2000.0",
            "",
            "--- Saving Products ---",
            "Product : Laptop with price: 50000.0 saved to SQL DB.",
            "Product : Mouse with price: 2000.0 saved to SQL DB.",
            "",
            "Product : Laptop with price: 50000.0 saved to MongoDB.",
            "Product : Mouse with price: 2000.0 saved to MongoDB.",
            "",
            "Product : Laptop with price: 50000.0 saved to File Path.",
            "Product : Mouse with price: 2000.0 saved to File Path.",
        ]
    );
    assert_eq!(headings(&out), ["--- Saving Products ---"]);
    assert!(out.is_heading(4));
}

#[test]
fn ocp_followed_transcript() {
    let out = ocp::followed::run(&scenario());

    assert_eq!(
        out.lines(),
        [
            "Shopping Cart Invoice:",
            "Laptop - Rs 50000.0",
            "Mouse - Rs 2000.0",
            "Total: Rs 52000.0",
            "",
            "--- Saving Products ---",
            "Product : Laptop with price: 50000.0 saved to SQL database.",
            "Product : Mouse with price: 2000.0 saved to SQL database.",
            "",
            "Product : Laptop with price: 50000.0 saved to NoSQL database.",
            "Product : Mouse with price: 2000.0 saved to NoSQL database.",
            "",
            "Product : Laptop with price: 50000.0 saved to file.",
            "Product : Mouse with price: 2000.0 saved to file.",
        ]
    );
    assert_eq!(headings(&out), ["--- Saving Products ---"]);
    assert!(out.is_heading(5));
}

// ============================================================================
// Liskov Substitution
// ============================================================================

#[test]
fn lsp_violated_transcript() {
    let out = lsp::violated::run(&scenario());

    assert_eq!(
        out.lines(),
        [
            "",
            "Using account: SavingsAccount",
            "Deposited: 500.0, New Balance: 1500.0",
            "Withdrew: 200.0, New Balance: 1300.0",
            "",
            "Using account: CurrentAccount",
            "Deposited: 500.0, New Balance: 2500.0",
            "Withdrew: 200.0, New Balance: 2300.0",
            "",
            "Using account: FixedDepositAccount",
            "FD Account Deposited With: 500.0",
            "Exception : Withdrawals are not allowed from Fixed Deposit Account.",
        ]
    );
    assert!(headings(&out).is_empty());
}

#[test]
fn lsp_wrongly_handled_transcript() {
    let out = lsp::violated::run_wrongly_handled(&scenario());

    assert_eq!(
        out.lines(),
        [
            "",
            "Using account: SavingsAccount",
            "Deposited: 500.0, New Balance: 1500.0",
            "Withdrew: 200.0, New Balance: 1300.0",
            "",
            "Using account: CurrentAccount",
            "Deposited: 500.0, New Balance: 2500.0",
            "Withdrew: 200.0, New Balance: 2300.0",
            "",
            "Using account: FixedDepositAccount",
            "FD Account Deposited With: 500.0",
            "Skipping withdraw operation for FixedDepositAccount.",
        ]
    );
    assert!(headings(&out).is_empty());
}

#[test]
fn lsp_wrongly_handled_still_credits_the_fixed_deposit() {
    let scenario = scenario();
    let b = scenario.lsp.wrongly_handled;
    let accounts: Vec<Box<dyn Account>> = vec![
        Box::new(lsp::violated::SavingsAccount::new(b.savings)),
        Box::new(lsp::violated::CurrentAccount::new(b.current)),
        Box::new(lsp::violated::FixedDepositAccount::new(b.fixed_deposit)),
    ];
    let mut client = lsp::violated::BanksClient::new(accounts, scenario.transactions);
    client.perform_transactions();

    let balances: Vec<f64> = client.accounts().iter().map(|a| a.balance()).collect();
    assert_eq!(balances, [1300.0, 2300.0, 3500.0]);
}

#[test]
fn lsp_followed_transcript() {
    let out = lsp::followed::run(&scenario());

    assert_eq!(
        out.lines(),
        [
            "",
            "---- WithDrawable Accounts Operations ----",
            "Deposited: 500.0, New Balance: 1500.0",
            "Withdrew: 200.0, New Balance: 1300.0",
            "Deposited: 500.0, New Balance: 2500.0",
            "Withdrew: 200.0, New Balance: 2300.0",
            "",
            "---- FD Accounts Operations ----",
            "FD Account Deposited With: 500.0, New Balance: 1500.0",
        ]
    );
    assert_eq!(
        headings(&out),
        ["---- WithDrawable Accounts Operations ----", "---- FD Accounts Operations ----"]
    );
}

// ============================================================================
// Interface Segregation
// ============================================================================

#[test]
fn isp_violated_transcript() {
    let out = isp::violated::run(&scenario());

    assert_eq!(
        out.lines(),
        [
            "Area of Square : 25.0",
            "Volume of Square : not supported for 2D shape",
            "Area of Rectangle : 50.0",
            "Volume of Rectangle : not supported for 2D shape",
            "Area of Cube : 150.0",
            "Volume of Cube : 125.0",
        ]
    );
    assert!(headings(&out).is_empty());
}

#[test]
fn isp_followed_transcript() {
    let out = isp::followed::run(&scenario());

    assert_eq!(
        out.lines(),
        [
            "Area of Square : 16.0",
            "Area of Rectangle : 20.0",
            "Area of Cube : 54.0",
            "Volume of Cube : 27.0",
        ]
    );
    assert!(headings(&out).is_empty());
}

// ============================================================================
// Dependency Inversion
// ============================================================================

#[test]
fn dip_violated_transcript() {
    let out = dip::violated::run(&scenario());

    assert_eq!(
        out.lines(),
        [
            "Executing SQL Query: INSERT INTO users VALUES('Surya');",
            "Executing MongoDB Function: db.users.insert({name: 'Kalyan'})",
        ]
    );
    assert!(headings(&out).is_empty());
}

#[test]
fn dip_followed_transcript() {
    let out = dip::followed::run(&scenario());

    assert_eq!(
        out.lines(),
        [
            "Executing SQL Query: INSERT INTO users VALUES('Surya Kalyan');",
            "Executing MongoDB Function: db.users.insert({name: 'Surya Kalyan'})",
        ]
    );
    assert!(headings(&out).is_empty());
}

#[test]
fn transcripts_carry_no_escape_codes() {
    let scenario = scenario();
    let all = [
        ocp::violated::run(&scenario),
        ocp::followed::run(&scenario),
        lsp::followed::run(&scenario),
    ];
    for out in &all {
        assert!(out.lines().iter().all(|l| !l.contains('\u{1b}')));
    }
}
