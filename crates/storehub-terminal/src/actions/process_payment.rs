//! # Process Payment Action
//!
//! Confirms a collected payment method with the payment backend, moving the
//! intent from `requires_confirmation` towards capture.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::actions::cancelable::run_cancelable;
use crate::sdk::TerminalSdk;
use crate::types::{ActionStatus, PaymentIntent};

/// Confirms collected payments with the payment backend.
pub struct ProcessPaymentAction {
    sdk: Arc<dyn TerminalSdk>,
}

impl ProcessPaymentAction {
    pub fn new(sdk: Arc<dyn TerminalSdk>) -> Self {
        ProcessPaymentAction { sdk }
    }

    /// Confirms the given intent's collected payment method.
    pub async fn process_payment(&self, intent: PaymentIntent) -> ActionStatus<PaymentIntent> {
        let intent_id = intent.id.clone();
        debug!(intent_id = %intent_id, "processing payment");

        let sdk = Arc::clone(&self.sdk);
        let status = run_cancelable(move |result_tx| {
            sdk.process_payment(
                intent,
                Box::new(move |result| {
                    let _ = result_tx.send(result.into());
                }),
            )
        })
        .await;

        if let ActionStatus::Failure(error) = &status {
            warn!(intent_id = %intent_id, %error, "process payment failed");
        }
        status
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TerminalError;
    use crate::test_support::{test_intent, FakeTerminalSdk};
    use crate::types::PaymentIntentStatus;

    #[tokio::test]
    async fn test_process_advances_intent_status() {
        let sdk = Arc::new(FakeTerminalSdk::success());
        let action = ProcessPaymentAction::new(sdk.clone());

        let status = action
            .process_payment(test_intent(PaymentIntentStatus::RequiresConfirmation))
            .await;

        match status {
            ActionStatus::Success(intent) => {
                assert_eq!(intent.status, PaymentIntentStatus::RequiresCapture);
            }
            other => panic!("expected success, got {other:?}"),
        }
        assert_eq!(sdk.call_count(), 1);
    }

    #[tokio::test]
    async fn test_sdk_failure_passes_through() {
        let sdk = Arc::new(FakeTerminalSdk::failure(TerminalError::sdk(
            "processing_error",
            "backend rejected the confirmation",
        )));
        let action = ProcessPaymentAction::new(sdk);

        let status = action
            .process_payment(test_intent(PaymentIntentStatus::RequiresConfirmation))
            .await;

        assert_eq!(
            status,
            ActionStatus::Failure(TerminalError::sdk(
                "processing_error",
                "backend rejected the confirmation"
            ))
        );
    }

    #[tokio::test]
    async fn test_cancelling_confirmation_cancels_the_sdk_operation() {
        let sdk = Arc::new(FakeTerminalSdk::pending());
        let action_sdk = sdk.clone();

        let task = tokio::spawn(async move {
            let action = ProcessPaymentAction::new(action_sdk);
            action
                .process_payment(test_intent(PaymentIntentStatus::RequiresConfirmation))
                .await
        });

        for _ in 0..8 {
            tokio::task::yield_now().await;
        }
        task.abort();
        let _ = task.await;

        assert_eq!(sdk.cancel_count(), 1);
    }
}
