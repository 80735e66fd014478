//! # Payment Value Types
//!
//! Domain types flowing through the payment actions: the caller-facing
//! [`PaymentRequest`]/[`RefundRequest`], the shaped SDK parameter objects,
//! the SDK's intent/refund representations, and the single-value
//! [`ActionStatus`] every action settles with.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::TerminalError;

// =============================================================================
// Action Status
// =============================================================================

/// The single terminal value of one bridge invocation.
///
/// Exactly one `ActionStatus` is produced per action call; the production
/// is finite and not restartable. Retry policy belongs to the caller.
#[derive(Debug, Clone, PartialEq)]
pub enum ActionStatus<T> {
    Success(T),
    Failure(TerminalError),
}

impl<T> ActionStatus<T> {
    /// True if the action settled successfully.
    pub fn is_success(&self) -> bool {
        matches!(self, ActionStatus::Success(_))
    }

    /// Converts into a plain `Result` for `?`-style consumption.
    pub fn into_result(self) -> Result<T, TerminalError> {
        match self {
            ActionStatus::Success(value) => Ok(value),
            ActionStatus::Failure(error) => Err(error),
        }
    }
}

impl<T> From<Result<T, TerminalError>> for ActionStatus<T> {
    fn from(result: Result<T, TerminalError>) -> Self {
        match result {
            Ok(value) => ActionStatus::Success(value),
            Err(error) => ActionStatus::Failure(error),
        }
    }
}

// =============================================================================
// Payment Method Types
// =============================================================================

/// Card-present payment method families the terminal can accept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethodType {
    CardPresent,
    /// Canadian debit network; requires a distinct refund call path.
    InteracPresent,
}

// =============================================================================
// Payment Intent
// =============================================================================

/// Lifecycle states of an in-progress card payment attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentIntentStatus {
    RequiresPaymentMethod,
    RequiresConfirmation,
    RequiresCapture,
    Processing,
    Canceled,
    Succeeded,
}

/// The SDK's representation of an in-progress card payment attempt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentIntent {
    pub id: String,
    pub status: PaymentIntentStatus,
    /// Amount in the smallest currency unit (cents).
    pub amount_minor: i64,
    /// Lowercase ISO currency code.
    pub currency: String,
    pub metadata: BTreeMap<String, String>,
}

// =============================================================================
// Refund
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RefundStatus {
    Succeeded,
    Pending,
    Failed,
}

/// The SDK's representation of a completed or in-flight refund.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Refund {
    pub id: String,
    pub charge_id: String,
    pub status: RefundStatus,
    pub amount_minor: i64,
    pub currency: String,
}

// =============================================================================
// Caller-Facing Requests
// =============================================================================

/// One payment attempt as described by the orchestration flow.
///
/// Constructed fresh per attempt; the bridge shapes it into SDK parameters
/// and never retains it past the single action invocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentRequest {
    /// Shown on the customer's card statement context.
    pub description: String,
    pub order_id: u64,
    /// Decimal amount in major units; two-decimal currencies only.
    pub amount: Decimal,
    pub currency: String,
    /// Two-letter store country code; drives payment-method-type selection.
    pub country_code: String,
    pub store_name: Option<String>,
    pub customer_name: Option<String>,
    pub customer_email: Option<String>,
    pub site_url: Option<String>,
    pub order_key: Option<String>,
    pub statement_descriptor: Option<String>,
    /// True when the store's payment plugin sends its own receipt emails.
    /// Suppresses the terminal-side receipt to avoid duplicates.
    pub gateway_sends_receipt: bool,
}

/// One refund attempt against a previously captured charge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RefundRequest {
    pub charge_id: String,
    pub amount: Decimal,
    pub currency: String,
    pub reason: Option<String>,
}

// =============================================================================
// Shaped SDK Parameters
// =============================================================================

/// Parameters handed to the SDK when creating a payment intent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentIntentParameters {
    pub description: String,
    /// Amount in the smallest currency unit (cents).
    pub amount_minor: i64,
    pub currency: String,
    pub payment_method_types: Vec<PaymentMethodType>,
    pub receipt_email: Option<String>,
    pub statement_descriptor: Option<String>,
    pub metadata: BTreeMap<String, String>,
}

/// Parameters handed to the SDK when processing an interac refund.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RefundParameters {
    pub charge_id: String,
    pub amount_minor: i64,
    pub currency: String,
    pub reason: Option<String>,
}

// =============================================================================
// Connected Reader
// =============================================================================

/// Identity of the currently connected card reader.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReaderInfo {
    pub id: String,
    pub model: String,
}

// =============================================================================
// Metadata Keys
// =============================================================================

/// Keys of the metadata map attached to every payment intent.
pub mod metadata {
    pub const STORE_NAME: &str = "store_name";
    pub const CUSTOMER_NAME: &str = "customer_name";
    pub const CUSTOMER_EMAIL: &str = "customer_email";
    pub const SITE_URL: &str = "site_url";
    pub const ORDER_ID: &str = "order_id";
    pub const ORDER_KEY: &str = "order_key";
    pub const READER_ID: &str = "reader_id";
    pub const READER_MODEL: &str = "reader_model";
    pub const PAYMENT_TYPE: &str = "payment_type";

    /// Fixed marker identifying card-reader payments in the backend.
    pub const PAYMENT_TYPE_CARD_READER: &str = "card_reader";
}
