//!
//! The token swap workload.
//!

use crate::plan::argument::Argument;
use crate::plan::step::Step;
use crate::plan::Plan;

/// The first token contract.
pub const TOKEN_0: &str = "sBNB";

/// The second token contract.
pub const TOKEN_1: &str = "sTSLA";

/// The swap pool contract.
pub const SWAP: &str = "Swap";

/// The initial reserve of each token, with 8 decimals.
pub const AMOUNT: u64 = 100_000 * 100_000_000;

/// The amount sent to the swapping accounts, with 8 decimals.
pub const TOKEN_SENT: u64 = 1_000 * 100_000_000;

///
/// Returns the token swap workload plan.
///
/// Account #0 provides the liquidity, account #1 swaps the first token for the second,
/// and account #2 swaps back. The liquidity shares queried at the end are withdrawn.
///
pub fn plan() -> Plan {
    let steps = vec![
        Step::query("getTokens", SWAP, vec![]),
        Step::transaction(
            "approve",
            TOKEN_0,
            vec![Argument::address(SWAP), Argument::literal(AMOUNT * 2)],
        )
        .with_description("approve sBNB"),
        Step::transaction(
            "approve",
            TOKEN_1,
            vec![Argument::address(SWAP), Argument::literal(AMOUNT * 2)],
        )
        .with_description("approve sTSLA"),
        Step::transaction(
            "init",
            SWAP,
            vec![Argument::literal(AMOUNT), Argument::literal(AMOUNT)],
        ),
        Step::query("getReserves", SWAP, vec![]),
        Step::transaction("addLiquidity", SWAP, vec![Argument::literal(AMOUNT)]),
        Step::transaction(
            "transfer",
            TOKEN_0,
            vec![Argument::Account(1), Argument::literal(TOKEN_SENT)],
        )
        .with_description("transfer sBNB"),
        Step::transaction(
            "approve",
            TOKEN_0,
            vec![Argument::address(SWAP), Argument::literal(TOKEN_SENT)],
        )
        .with_caller(1)
        .with_description("approve sBNB"),
        Step::transaction("token0To1", SWAP, vec![Argument::literal(TOKEN_SENT)]).with_caller(1),
        Step::query("balanceOf", TOKEN_1, vec![Argument::Account(1)]),
        Step::transaction(
            "transfer",
            TOKEN_1,
            vec![Argument::Account(2), Argument::literal(TOKEN_SENT)],
        )
        .with_description("transfer sTSLA"),
        Step::transaction(
            "approve",
            TOKEN_1,
            vec![Argument::address(SWAP), Argument::literal(TOKEN_SENT)],
        )
        .with_caller(2)
        .with_description("approve sTSLA"),
        Step::transaction("token1To0", SWAP, vec![Argument::literal(TOKEN_SENT)]).with_caller(2),
        Step::query("getShares", SWAP, vec![Argument::Account(0)]),
        Step::transaction(
            "removeLiquidity",
            SWAP,
            vec![Argument::Output {
                step: 13,
                position: 0,
            }],
        ),
    ];

    Plan::new(
        vec![TOKEN_0.to_owned(), TOKEN_1.to_owned(), SWAP.to_owned()],
        steps,
    )
}
