use bankacct::domain::account::{Account, Balance};
use bankacct::error::AccountError;
use rand::Rng;
use rand::rngs::ThreadRng;
use rust_decimal::Decimal;

const ITERATIONS: usize = 1_000;

/// A random amount in [0, 100_000.00] with two decimal places.
fn random_amount(rng: &mut ThreadRng) -> Decimal {
    Decimal::new(rng.gen_range(0..=10_000_000i64), 2)
}

fn random_negative(rng: &mut ThreadRng) -> Decimal {
    Decimal::new(-rng.gen_range(1..=10_000_000i64), 2)
}

fn open_account(balance: Decimal) -> Account {
    Account::new("prop", Balance::new(balance))
}

#[test]
fn test_deposit_adds_exact_amount() {
    let mut rng = rand::thread_rng();
    for _ in 0..ITERATIONS {
        let start = random_amount(&mut rng);
        let amount = random_amount(&mut rng);
        let mut account = open_account(start);

        assert_eq!(account.deposit(amount), Ok(()));
        assert_eq!(account.balance(), Balance::new(start + amount));
    }
}

#[test]
fn test_negative_amounts_always_rejected() {
    let mut rng = rand::thread_rng();
    for _ in 0..ITERATIONS {
        let start = random_amount(&mut rng);
        let amount = random_negative(&mut rng);
        let mut account = open_account(start);

        assert_eq!(account.deposit(amount), Err(AccountError::NegativeAmount));
        assert_eq!(account.withdraw(amount), Err(AccountError::NegativeAmount));
        assert_eq!(account.balance(), Balance::new(start));
    }
}

#[test]
fn test_covered_withdrawal_subtracts_exact_amount() {
    let mut rng = rand::thread_rng();
    for _ in 0..ITERATIONS {
        let start_cents = rng.gen_range(0..=10_000_000i64);
        let start = Decimal::new(start_cents, 2);
        let amount = Decimal::new(rng.gen_range(0..=start_cents), 2);
        let mut account = open_account(start);

        assert_eq!(account.withdraw(amount), Ok(()));
        assert_eq!(account.balance(), Balance::new(start - amount));
        assert!(account.balance() >= Balance::ZERO);
    }
}

#[test]
fn test_overdraw_always_rejected() {
    let mut rng = rand::thread_rng();
    for _ in 0..ITERATIONS {
        let start = random_amount(&mut rng);
        let amount = start + Decimal::new(rng.gen_range(1..=1_000_000i64), 2);
        let mut account = open_account(start);

        assert_eq!(
            account.withdraw(amount),
            Err(AccountError::InsufficientFunds)
        );
        assert_eq!(account.balance(), Balance::new(start));
    }
}

#[test]
fn test_closed_account_rejects_everything() {
    let mut rng = rand::thread_rng();
    for _ in 0..ITERATIONS {
        let start = random_amount(&mut rng);
        let mut account = open_account(start);
        account.close();

        let amount = if rng.gen_bool(0.5) {
            random_amount(&mut rng)
        } else {
            random_negative(&mut rng)
        };

        assert_eq!(account.deposit(amount), Err(AccountError::AccountClosed));
        assert_eq!(account.withdraw(amount), Err(AccountError::AccountClosed));
        assert_eq!(account.balance(), Balance::new(start));

        account.close();
        assert!(!account.is_open());
    }
}
