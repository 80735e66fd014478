//! # Collect Payment Action
//!
//! Waits for the customer to present a card for an already-created payment
//! intent. The only action in the set that routinely stays in flight for a
//! long time, so cancellation (customer walks away, order screen closed)
//! matters most here.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::actions::cancelable::run_cancelable;
use crate::sdk::TerminalSdk;
use crate::types::{ActionStatus, PaymentIntent};

/// Collects a payment method from the connected reader.
pub struct CollectPaymentAction {
    sdk: Arc<dyn TerminalSdk>,
}

impl CollectPaymentAction {
    pub fn new(sdk: Arc<dyn TerminalSdk>) -> Self {
        CollectPaymentAction { sdk }
    }

    /// Waits for a card presentation against the given intent.
    ///
    /// Dropping the returned future cancels the wait on the reader.
    pub async fn collect_payment(&self, intent: PaymentIntent) -> ActionStatus<PaymentIntent> {
        let intent_id = intent.id.clone();
        debug!(intent_id = %intent_id, "collecting payment method");

        let sdk = Arc::clone(&self.sdk);
        let status = run_cancelable(move |result_tx| {
            sdk.collect_payment_method(
                intent,
                Box::new(move |result| {
                    let _ = result_tx.send(result.into());
                }),
            )
        })
        .await;

        if let ActionStatus::Failure(error) = &status {
            warn!(intent_id = %intent_id, %error, "collect payment method failed");
        }
        status
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
