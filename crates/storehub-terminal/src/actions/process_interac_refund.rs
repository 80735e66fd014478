//! # Process Interac Refund Action
//!
//! Interac-present charges cannot be refunded through the store backend;
//! the refund has to run through the card reader with the customer's card
//! present. This action shapes a [`RefundRequest`] into SDK parameters and
//! runs that in-person refund.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::actions::cancelable::run_cancelable;
use crate::actions::to_minor_units;
use crate::error::TerminalError;
use crate::sdk::TerminalSdk;
use crate::types::{ActionStatus, Refund, RefundParameters, RefundRequest};

/// Runs in-person interac refunds through the card reader.
pub struct ProcessInteracRefundAction {
    sdk: Arc<dyn TerminalSdk>,
}

impl ProcessInteracRefundAction {
    pub fn new(sdk: Arc<dyn TerminalSdk>) -> Self {
        ProcessInteracRefundAction { sdk }
    }

    /// Refunds a previously captured interac charge.
    ///
    /// Dropping the returned future cancels the in-flight refund on the
    /// reader.
    pub async fn refund_payment(&self, request: &RefundRequest) -> ActionStatus<Refund> {
        let parameters = match build_parameters(request) {
            Ok(parameters) => parameters,
            Err(error) => {
                warn!(charge_id = %request.charge_id, %error, "rejecting refund request");
                return ActionStatus::Failure(error);
            }
        };

        debug!(
            charge_id = %parameters.charge_id,
            amount_minor = parameters.amount_minor,
            currency = %parameters.currency,
            "processing interac refund"
        );

        let sdk = Arc::clone(&self.sdk);
        let status = run_cancelable(move |result_tx| {
            sdk.process_refund(
                parameters,
                Box::new(move |result| {
                    let _ = result_tx.send(result.into());
                }),
            )
        })
        .await;

        if let ActionStatus::Failure(error) = &status {
            warn!(charge_id = %request.charge_id, %error, "interac refund failed");
        }
        status
    }
}

fn build_parameters(request: &RefundRequest) -> Result<RefundParameters, TerminalError> {
    Ok(RefundParameters {
        charge_id: request.charge_id.clone(),
        amount_minor: to_minor_units(request.amount)?,
        currency: request.currency.to_lowercase(),
        reason: request.reason.clone(),
    })
}

// =============================================================================
// Unit Tests
// =============================================================================
