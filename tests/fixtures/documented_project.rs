//! Account bookkeeping helpers.

/// Adds one.
///
/// Args:
///     x: value
///
/// Returns:
///     result
pub fn add_one(x: i64) -> i64 {
    x + 1
}

/// Transfers an amount between two accounts.
///
/// Args:
///     amount: how much to move
///
/// Returns:
///     the new balance
pub fn transfer(amount: i64, target: u32) -> i64 {
    let _ = target;
    amount
}

/// Opens a connection.
///
/// :param address: where to connect
/// :param port: which port to use
/// :return: a live connection token
pub fn connect(address: String, port: u16) -> u64 {
    let _ = (address, port);
    0
}

pub fn undocumented(flag: bool) -> bool {
    !flag
}

/// A ledger of account balances.
pub struct Ledger {
    balances: Vec<i64>,
}

impl Ledger {
    /// Creates an empty ledger.
    pub fn new() -> Ledger {
        Ledger { balances: Vec::new() }
    }

    /// Records a deposit.
    ///
    /// Args:
    ///     account: which account to credit
    ///     amount: how much to add
    pub fn deposit(&mut self, account: usize, amount: i64) {
        let _ = (account, amount);
    }
}

/// A marker type with nothing documented inside.
pub struct EmptyMarker;
