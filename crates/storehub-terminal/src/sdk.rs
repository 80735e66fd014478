//! # Terminal SDK Abstraction
//!
//! The callback-style surface of the card-reader SDK, as the bridge sees
//! it. Every call takes a one-shot callback and returns a fresh
//! [`CancelableHandle`] for the in-flight hardware operation.
//!
//! ## Handle Contract
//! - Each SDK call returns a new handle; handles are never reused.
//! - The SDK flips `is_completed()` to `true` before invoking the
//!   callback, so a completed handle is never cancelled by the bridge.
//! - `cancel()` on an incomplete handle aborts the hardware operation;
//!   the callback may then never fire.

use crate::error::TerminalError;
use crate::types::{PaymentIntent, PaymentIntentParameters, ReaderInfo, Refund, RefundParameters};

/// Result delivered through an intent-producing SDK callback.
pub type IntentResult = Result<PaymentIntent, TerminalError>;

/// Result delivered through a refund-producing SDK callback.
pub type RefundResult = Result<Refund, TerminalError>;

/// One-shot callback for intent-producing SDK calls.
pub type IntentCallback = Box<dyn FnOnce(IntentResult) + Send + 'static>;

/// One-shot callback for refund-producing SDK calls.
pub type RefundCallback = Box<dyn FnOnce(RefundResult) + Send + 'static>;

/// Opaque handle to an in-flight hardware operation.
pub trait CancelableHandle: Send {
    /// Aborts the in-flight operation. No-op on a completed handle.
    fn cancel(&self);

    /// True once the SDK has delivered (or is delivering) the result.
    fn is_completed(&self) -> bool;
}

/// The callback-style card-terminal SDK.
///
/// Exactly one callback invocation per call is expected; the bridge treats
/// a dropped callback as a contract violation and settles the action with
/// [`TerminalError::CallbackDropped`].
pub trait TerminalSdk: Send + Sync {
    /// Registers a payment intent with the payment backend.
    fn create_payment_intent(
        &self,
        parameters: PaymentIntentParameters,
        on_result: IntentCallback,
    ) -> Box<dyn CancelableHandle>;

    /// Waits for the customer to present a card for the given intent.
    fn collect_payment_method(
        &self,
        intent: PaymentIntent,
        on_result: IntentCallback,
    ) -> Box<dyn CancelableHandle>;

    /// Confirms the collected payment method with the payment backend.
    fn process_payment(
        &self,
        intent: PaymentIntent,
        on_result: IntentCallback,
    ) -> Box<dyn CancelableHandle>;

    /// Runs an interac refund against a previously captured charge.
    fn process_refund(
        &self,
        parameters: RefundParameters,
        on_result: RefundCallback,
    ) -> Box<dyn CancelableHandle>;
}

/// Supplies the identity of the currently connected reader, if any.
///
/// Implemented by the reader-connection manager; the create-payment action
/// uses it to tag intents with reader metadata.
pub trait ConnectedReaderProvider: Send + Sync {
    fn connected_reader(&self) -> Option<ReaderInfo>;
}
