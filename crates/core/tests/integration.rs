//! Integration tests for account + bank flows through the public API

use bankacct_core::{format_amount, parse_amount, Account, Bank, CoreError, Decimal};
use rust_decimal_macros::dec;

fn andres() -> Account {
    Account::with_balance("Andres", parse_amount("1000.12345").unwrap())
}

#[test]
fn test_debit_keeps_trailing_digits() {
    let mut account = andres();
    account.debit(dec!(100)).unwrap();

    let balance = account.balance().unwrap();
    assert_eq!(balance.trunc(), dec!(900));
    assert_eq!(format_amount(&balance), "900.12345");
}

#[test]
fn test_credit_keeps_trailing_digits() {
    let mut account = andres();
    account.credit(dec!(100)).unwrap();

    let balance = account.balance().unwrap();
    assert_eq!(balance.trunc(), dec!(1100));
    assert_eq!(format_amount(&balance), "1100.12345");
}

#[test]
fn test_debit_more_than_balance() {
    let mut account = andres();

    let err = account.debit(dec!(1500)).unwrap_err();

    assert_eq!(err, CoreError::InsufficientFunds);
    assert_eq!(err.to_string(), "Insufficient funds");
    assert_eq!(account.balance_text().as_deref(), Some("1000.12345"));
}

#[test]
fn test_transfer_between_registered_accounts() {
    let mut john = Account::with_balance("John Doe", dec!(2500));
    let mut asier = Account::with_balance("Asier", dec!(1500));

    let mut bank = Bank::new();
    bank.set_name("Banco del Estado");
    bank.transfer(&mut asier, &mut john, dec!(500)).unwrap();

    assert_eq!(asier.balance_text().as_deref(), Some("1000"));
    assert_eq!(john.balance_text().as_deref(), Some("3000"));
}

#[test]
fn test_bank_account_relationship() {
    let mut bank = Bank::new();
    let john = bank.add_account(Account::with_balance("John Doe", dec!(2500)));
    let asier = bank.add_account(Account::with_balance("Asier", dec!(1500)));

    // Renaming after registration is visible through the back-reference.
    bank.set_name("Banco del Estado");
    bank.transfer_between(asier, john, dec!(500)).unwrap();

    let john_account = bank.account(john).unwrap();
    assert_eq!(bank.account(asier).unwrap().balance_text().as_deref(), Some("1000"));
    assert_eq!(john_account.balance_text().as_deref(), Some("3000"));
    assert_eq!(bank.accounts().len(), 2);
    assert_eq!(john_account.bank(), Some(bank.id()));
    assert_eq!(bank.name(), "Banco del Estado");
    assert!(bank.accounts().iter().any(|account| account.owner() == "Asier"));
}

#[test]
fn test_failed_transfer_leaves_both_balances() {
    let mut bank = Bank::with_name("Banco del Estado");
    let john = bank.add_account(Account::with_balance("John Doe", dec!(2500)));
    let asier = bank.add_account(Account::with_balance("Asier", dec!(1500)));

    let err = bank.transfer_between(asier, john, dec!(2000)).unwrap_err();

    assert!(err.is_insufficient_funds());
    assert_eq!(bank.account(asier).unwrap().balance(), Some(dec!(1500)));
    assert_eq!(bank.account(john).unwrap().balance(), Some(dec!(2500)));
}

#[test]
fn test_account_equality() {
    let sara = Account::with_balance("Sara", dec!(200.12));

    assert_eq!(sara, Account::with_balance("Sara", dec!(200.12)));
    assert_ne!(sara, Account::with_balance("Pablo", dec!(220.12)));
    assert_ne!(Account::new("Sara"), Account::new("Sara"));
}

#[test]
fn test_registered_account_equals_unregistered_copy() {
    let mut bank = Bank::with_name("Banco del Estado");
    let sara = bank.add_account(Account::with_balance("Sara", dec!(200.12)));

    assert_eq!(
        bank.account(sara).unwrap(),
        &Account::with_balance("Sara", dec!(200.12))
    );
}

#[test]
fn test_debit_sequence_has_no_drift() {
    let mut account = Account::with_balance("Andres", dec!(1));
    for _ in 0..10 {
        account.debit(dec!(0.1)).unwrap();
    }

    assert_eq!(account.balance(), Some(Decimal::ZERO));
    assert_eq!(account.debit(dec!(0.1)), Err(CoreError::InsufficientFunds));
}

#[test]
fn test_uninitialized_balance_policy() {
    let mut account = Account::new("Andres");
    assert!(account.debit(dec!(1)).unwrap_err().is_uninitialized_balance());

    account.set_balance(Some(dec!(10)));
    account.debit(dec!(1)).unwrap();
    assert_eq!(account.balance(), Some(dec!(9)));
}
