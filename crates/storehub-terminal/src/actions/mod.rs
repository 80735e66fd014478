//! # Payment Actions
//!
//! One module per SDK operation, all built on the same shape: shape the
//! request, issue exactly one SDK call through [`cancelable::run_cancelable`],
//! settle with exactly one [`ActionStatus`](crate::types::ActionStatus).
//!
//! Each action instance walks `Created -> SDK-call-issued ->
//! {Completed(Success) | Completed(Failure) | Cancelled}`; terminal states
//! are final and an invocation is never reused.

mod cancelable;

pub mod collect_payment;
pub mod create_payment;
pub mod process_interac_refund;
pub mod process_payment;

pub use collect_payment::CollectPaymentAction;
pub use create_payment::CreatePaymentAction;
pub use process_interac_refund::ProcessInteracRefundAction;
pub use process_payment::ProcessPaymentAction;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::error::TerminalError;

/// Converts a decimal major-unit amount into the smallest currency unit.
///
/// Two-decimal currencies only at this layer; midpoints round to even
/// (1.005 -> 100, 1.006 -> 101).
pub(crate) fn to_minor_units(amount: Decimal) -> Result<i64, TerminalError> {
    amount
        .checked_mul(Decimal::ONE_HUNDRED)
        .and_then(|cents| cents.round().to_i64())
        .ok_or_else(|| {
            TerminalError::InvalidRequest(format!("amount {amount} does not fit in minor units"))
        })
}
