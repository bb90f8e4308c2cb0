//! Pattern 3: Liskov Substitution
//!
//! A fixed deposit account cannot be withdrawn from. Forcing it behind a
//! broad `Account` trait (`violated`) means it must fail at call time, and
//! callers either catch that failure or downcast around it. Splitting the
//! capability (`followed`) means the type simply has no `withdraw`.

use std::fmt;

use crate::console;
use crate::error::AccountError;

// ============================================================================
// Shared balance arithmetic
// ============================================================================

/// Balance bookkeeping shared by every account type.
///
/// Invariant: the balance is never negative. Rejected operations leave it
/// untouched.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
struct Ledger {
    balance: f64,
}

impl Ledger {
    fn open(initial: f64) -> Self {
        // NaN, negative and negative-zero openings collapse to +0.0
        let balance = if initial > 0.0 { initial } else { 0.0 };
        Self { balance }
    }

    fn credit(&mut self, amount: f64) -> Result<f64, AccountError> {
        if !(amount > 0.0 && amount.is_finite()) {
            tracing::warn!(amount, balance = self.balance, "deposit rejected");
            return Err(AccountError::NonPositiveDeposit { amount });
        }
        self.balance += amount;
        tracing::debug!(amount, balance = self.balance, "deposit applied");
        Ok(self.balance)
    }

    fn debit(&mut self, amount: f64) -> Result<f64, AccountError> {
        if !(amount > 0.0 && amount <= self.balance) {
            tracing::warn!(amount, balance = self.balance, "withdrawal rejected");
            return Err(AccountError::InvalidWithdrawal {
                amount,
                balance: self.balance,
            });
        }
        self.balance -= amount;
        tracing::debug!(amount, balance = self.balance, "withdrawal applied");
        Ok(self.balance)
    }
}

/// Outcome of an accepted account operation. `Display` is the printed line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Receipt {
    Deposited { amount: f64, balance: f64 },
    Withdrew { amount: f64, balance: f64 },
    /// Fixed deposit accounts label their deposits differently. `balance` is
    /// `None` when the account does not report it.
    FixedDeposit { amount: f64, balance: Option<f64> },
}

impl Receipt {
    pub fn balance(&self) -> Option<f64> {
        match *self {
            Receipt::Deposited { balance, .. } | Receipt::Withdrew { balance, .. } => Some(balance),
            Receipt::FixedDeposit { balance, .. } => balance,
        }
    }
}

impl fmt::Display for Receipt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Receipt::Deposited { amount, balance } => write!(
                f,
                "Deposited: {}, New Balance: {}",
                console::amount(amount),
                console::amount(balance)
            ),
            Receipt::Withdrew { amount, balance } => write!(
                f,
                "Withdrew: {}, New Balance: {}",
                console::amount(amount),
                console::amount(balance)
            ),
            Receipt::FixedDeposit {
                amount,
                balance: Some(balance),
            } => write!(
                f,
                "FD Account Deposited With: {}, New Balance: {}",
                console::amount(amount),
                console::amount(balance)
            ),
            Receipt::FixedDeposit {
                amount,
                balance: None,
            } => write!(f, "FD Account Deposited With: {}", console::amount(amount)),
        }
    }
}

/// Print the receipt, or the rejection message when the operation failed.
fn report(out: &mut console::Transcript, result: Result<Receipt, AccountError>) {
    match result {
        Ok(receipt) => out.line(receipt),
        Err(err) => out.line(err),
    }
}

// ============================================================================
// Violated: one broad trait every account must fully implement
// ============================================================================

pub mod violated {
    use std::any::Any;

    use super::*;
    use crate::config::{BroadAccounts, Scenario, Transactions};
    use crate::console::Transcript;

    pub trait Account {
        fn name(&self) -> &'static str;
        fn balance(&self) -> f64;
        fn deposit(&mut self, amount: f64) -> Result<Receipt, AccountError>;
        fn withdraw(&mut self, amount: f64) -> Result<Receipt, AccountError>;

        /// Concrete type access. Only callers working around a broken
        /// substitution need this.
        fn as_any(&self) -> &dyn Any;
    }

    #[derive(Debug, Clone)]
    pub struct SavingsAccount {
        ledger: Ledger,
    }

    impl SavingsAccount {
        pub fn new(initial_balance: f64) -> Self {
            Self {
                ledger: Ledger::open(initial_balance),
            }
        }
    }

    impl Account for SavingsAccount {
        fn name(&self) -> &'static str {
            "SavingsAccount"
        }

        fn balance(&self) -> f64 {
            self.ledger.balance
        }

        fn deposit(&mut self, amount: f64) -> Result<Receipt, AccountError> {
            let balance = self.ledger.credit(amount)?;
            Ok(Receipt::Deposited { amount, balance })
        }

        fn withdraw(&mut self, amount: f64) -> Result<Receipt, AccountError> {
            let balance = self.ledger.debit(amount)?;
            Ok(Receipt::Withdrew { amount, balance })
        }

        fn as_any(&self) -> &dyn Any {
            self
        }
    }

    #[derive(Debug, Clone)]
    pub struct CurrentAccount {
        ledger: Ledger,
    }

    impl CurrentAccount {
        pub fn new(initial_balance: f64) -> Self {
            Self {
                ledger: Ledger::open(initial_balance),
            }
        }
    }

    impl Account for CurrentAccount {
        fn name(&self) -> &'static str {
            "CurrentAccount"
        }

        fn balance(&self) -> f64 {
            self.ledger.balance
        }

        fn deposit(&mut self, amount: f64) -> Result<Receipt, AccountError> {
            let balance = self.ledger.credit(amount)?;
            Ok(Receipt::Deposited { amount, balance })
        }

        fn withdraw(&mut self, amount: f64) -> Result<Receipt, AccountError> {
            let balance = self.ledger.debit(amount)?;
            Ok(Receipt::Withdrew { amount, balance })
        }

        fn as_any(&self) -> &dyn Any {
            self
        }
    }

    #[derive(Debug, Clone)]
    pub struct FixedDepositAccount {
        ledger: Ledger,
    }

    impl FixedDepositAccount {
        pub fn new(initial_balance: f64) -> Self {
            Self {
                ledger: Ledger::open(initial_balance),
            }
        }
    }

    impl Account for FixedDepositAccount {
        fn name(&self) -> &'static str {
            "FixedDepositAccount"
        }

        fn balance(&self) -> f64 {
            self.ledger.balance
        }

        fn deposit(&mut self, amount: f64) -> Result<Receipt, AccountError> {
            self.ledger.credit(amount)?;
            Ok(Receipt::FixedDeposit {
                amount,
                balance: None,
            })
        }

        // The trait promises a withdrawal this account cannot give.
        fn withdraw(&mut self, _amount: f64) -> Result<Receipt, AccountError> {
            tracing::warn!(account = self.name(), "withdraw called on deposit-only account");
            Err(AccountError::WithdrawalsNotAllowed {
                account: "Fixed Deposit Account",
            })
        }

        fn as_any(&self) -> &dyn Any {
            self
        }
    }

    /// Treats every account alike and catches the failure the fixed
    /// deposit account raises.
    pub struct BankClient {
        accounts: Vec<Box<dyn Account>>,
        transactions: Transactions,
    }

    impl BankClient {
        pub fn new(accounts: Vec<Box<dyn Account>>, transactions: Transactions) -> Self {
            Self {
                accounts,
                transactions,
            }
        }

        pub fn accounts(&self) -> &[Box<dyn Account>] {
            &self.accounts
        }

        pub fn perform_transactions(&mut self) -> Transcript {
            let mut out = Transcript::new();
            let Transactions { deposit, withdraw } = self.transactions;

            for account in self.accounts.iter_mut() {
                out.blank();
                out.line(format!("Using account: {}", account.name()));
                report(&mut out, account.deposit(deposit));
                match account.withdraw(withdraw) {
                    Ok(receipt) => out.line(receipt),
                    Err(err) if err.is_unsupported() => out.line(format!("Exception : {}", err)),
                    Err(err) => out.line(err),
                }
            }
            out
        }
    }

    /// Avoids the failure by checking the concrete type first, so every new
    /// restricted account means another branch here.
    pub struct BanksClient {
        accounts: Vec<Box<dyn Account>>,
        transactions: Transactions,
    }

    impl BanksClient {
        pub fn new(accounts: Vec<Box<dyn Account>>, transactions: Transactions) -> Self {
            Self {
                accounts,
                transactions,
            }
        }

        pub fn accounts(&self) -> &[Box<dyn Account>] {
            &self.accounts
        }

        pub fn perform_transactions(&mut self) -> Transcript {
            let mut out = Transcript::new();
            let Transactions { deposit, withdraw } = self.transactions;

            for account in self.accounts.iter_mut() {
                out.blank();
                out.line(format!("Using account: {}", account.name()));
                if account.as_any().is::<FixedDepositAccount>() {
                    report(&mut out, account.deposit(deposit));
                    out.line("Skipping withdraw operation for FixedDepositAccount.");
                } else {
                    report(&mut out, account.deposit(deposit));
                    report(&mut out, account.withdraw(withdraw));
                }
            }
            out
        }
    }

    fn broad_accounts(balances: BroadAccounts) -> Vec<Box<dyn Account>> {
        vec![
            Box::new(SavingsAccount::new(balances.savings)),
            Box::new(CurrentAccount::new(balances.current)),
            Box::new(FixedDepositAccount::new(balances.fixed_deposit)),
        ]
    }

    /// Everything `p3_lsp_violated` prints.
    pub fn run(scenario: &Scenario) -> Transcript {
        let accounts = broad_accounts(scenario.lsp.violated);
        BankClient::new(accounts, scenario.transactions).perform_transactions()
    }

    /// Everything `p3_lsp_wrongly_handled` prints.
    pub fn run_wrongly_handled(scenario: &Scenario) -> Transcript {
        let accounts = broad_accounts(scenario.lsp.wrongly_handled);
        BanksClient::new(accounts, scenario.transactions).perform_transactions()
    }
}

// ============================================================================
// Followed: capabilities split so no account promises what it can't do
// ============================================================================

pub mod followed {
    use super::*;
    use crate::config::{Scenario, Transactions};
    use crate::console::Transcript;

    pub trait DepositOnlyAccount {
        fn name(&self) -> &'static str;
        fn balance(&self) -> f64;
        fn deposit(&mut self, amount: f64) -> Result<Receipt, AccountError>;
    }

    pub trait WithdrawableAccount: DepositOnlyAccount {
        fn withdraw(&mut self, amount: f64) -> Result<Receipt, AccountError>;
    }

    #[derive(Debug, Clone)]
    pub struct SavingAccount {
        ledger: Ledger,
    }

    impl SavingAccount {
        pub fn new(initial_balance: f64) -> Self {
            Self {
                ledger: Ledger::open(initial_balance),
            }
        }
    }

    impl DepositOnlyAccount for SavingAccount {
        fn name(&self) -> &'static str {
            "SavingAccount"
        }

        fn balance(&self) -> f64 {
            self.ledger.balance
        }

        fn deposit(&mut self, amount: f64) -> Result<Receipt, AccountError> {
            let balance = self.ledger.credit(amount)?;
            Ok(Receipt::Deposited { amount, balance })
        }
    }

    impl WithdrawableAccount for SavingAccount {
        fn withdraw(&mut self, amount: f64) -> Result<Receipt, AccountError> {
            let balance = self.ledger.debit(amount)?;
            Ok(Receipt::Withdrew { amount, balance })
        }
    }

    #[derive(Debug, Clone)]
    pub struct SalaryAccount {
        ledger: Ledger,
    }

    impl SalaryAccount {
        pub fn new(initial_balance: f64) -> Self {
            Self {
                ledger: Ledger::open(initial_balance),
            }
        }
    }

    impl DepositOnlyAccount for SalaryAccount {
        fn name(&self) -> &'static str {
            "SalaryAccount"
        }

        fn balance(&self) -> f64 {
            self.ledger.balance
        }

        fn deposit(&mut self, amount: f64) -> Result<Receipt, AccountError> {
            let balance = self.ledger.credit(amount)?;
            Ok(Receipt::Deposited { amount, balance })
        }
    }

    impl WithdrawableAccount for SalaryAccount {
        fn withdraw(&mut self, amount: f64) -> Result<Receipt, AccountError> {
            let balance = self.ledger.debit(amount)?;
            Ok(Receipt::Withdrew { amount, balance })
        }
    }

    /// Fixed deposit account. There is no `withdraw` to call:
    ///
    /// ```compile_fail
    /// use solid_principles::lsp::followed::*;
    ///
    /// let mut fd = FdAccount::new(1000.0);
    /// fd.withdraw(200.0);
    /// ```
    #[derive(Debug, Clone)]
    pub struct FdAccount {
        ledger: Ledger,
    }

    impl FdAccount {
        pub fn new(initial_balance: f64) -> Self {
            Self {
                ledger: Ledger::open(initial_balance),
            }
        }
    }

    impl DepositOnlyAccount for FdAccount {
        fn name(&self) -> &'static str {
            "FDAccount"
        }

        fn balance(&self) -> f64 {
            self.ledger.balance
        }

        fn deposit(&mut self, amount: f64) -> Result<Receipt, AccountError> {
            let balance = self.ledger.credit(amount)?;
            Ok(Receipt::FixedDeposit {
                amount,
                balance: Some(balance),
            })
        }
    }

    /// Keeps each account in the list matching what it can do, so neither
    /// loop needs to know concrete types.
    pub struct Client {
        fd_accounts: Vec<Box<dyn DepositOnlyAccount>>,
        drawable_accounts: Vec<Box<dyn WithdrawableAccount>>,
        transactions: Transactions,
    }

    impl Client {
        pub fn new(
            fd_accounts: Vec<Box<dyn DepositOnlyAccount>>,
            drawable_accounts: Vec<Box<dyn WithdrawableAccount>>,
            transactions: Transactions,
        ) -> Self {
            Self {
                fd_accounts,
                drawable_accounts,
                transactions,
            }
        }

        pub fn fd_accounts(&self) -> &[Box<dyn DepositOnlyAccount>] {
            &self.fd_accounts
        }

        pub fn drawable_accounts(&self) -> &[Box<dyn WithdrawableAccount>] {
            &self.drawable_accounts
        }

        pub fn perform_fd_transactions(&mut self) -> Transcript {
            let mut out = Transcript::new();
            for account in self.fd_accounts.iter_mut() {
                report(&mut out, account.deposit(self.transactions.deposit));
            }
            out
        }

        pub fn perform_withdrawable_transactions(&mut self) -> Transcript {
            let mut out = Transcript::new();
            let Transactions { deposit, withdraw } = self.transactions;
            for account in self.drawable_accounts.iter_mut() {
                report(&mut out, account.deposit(deposit));
                report(&mut out, account.withdraw(withdraw));
            }
            out
        }
    }

    /// Everything `p3_lsp_followed` prints.
    pub fn run(scenario: &Scenario) -> Transcript {
        let balances = scenario.lsp.followed;
        let fd_accounts: Vec<Box<dyn DepositOnlyAccount>> =
            vec![Box::new(FdAccount::new(balances.fixed_deposit))];
        let drawable_accounts: Vec<Box<dyn WithdrawableAccount>> = vec![
            Box::new(SavingAccount::new(balances.saving)),
            Box::new(SalaryAccount::new(balances.salary)),
        ];
        let mut client = Client::new(fd_accounts, drawable_accounts, scenario.transactions);

        // No type checks: each list only holds accounts that support its operations
        let mut out = Transcript::new();
        out.banner("---- WithDrawable Accounts Operations ----");
        out.append(client.perform_withdrawable_transactions());
        out.banner("---- FD Accounts Operations ----");
        out.append(client.perform_fd_transactions());
        out
    }
}
