//! # Create Payment Action
//!
//! Shapes a [`PaymentRequest`] into SDK parameters and registers the
//! payment intent with the payment backend.
//!
//! ## Request Shaping
//! ```text
//! PaymentRequest
//!      │
//!      ├── amount ─────────────► minor units (x100, midpoint-to-even)
//!      ├── country_code ───────► allowed payment method types
//!      ├── customer_email ─────► receipt email, UNLESS the store's
//!      │                         gateway already sends receipts
//!      └── order/store fields ─► metadata map (blank values omitted,
//!                                reader id/model only when connected)
//!      ▼
//! PaymentIntentParameters ──► TerminalSdk::create_payment_intent
//! ```

use std::collections::BTreeMap;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::actions::cancelable::run_cancelable;
use crate::actions::to_minor_units;
use crate::country;
use crate::error::TerminalError;
use crate::sdk::{ConnectedReaderProvider, TerminalSdk};
use crate::types::{
    metadata, ActionStatus, PaymentIntent, PaymentIntentParameters, PaymentRequest,
};

/// Registers payment intents with the payment backend.
pub struct CreatePaymentAction {
    sdk: Arc<dyn TerminalSdk>,
    reader_provider: Arc<dyn ConnectedReaderProvider>,
}

impl CreatePaymentAction {
    pub fn new(sdk: Arc<dyn TerminalSdk>, reader_provider: Arc<dyn ConnectedReaderProvider>) -> Self {
        CreatePaymentAction {
            sdk,
            reader_provider,
        }
    }

    /// Creates a payment intent for the given request.
    ///
    /// Settles with exactly one [`ActionStatus`]; dropping the returned
    /// future before the SDK answers cancels the in-flight operation.
    pub async fn create_payment_intent(
        &self,
        request: &PaymentRequest,
    ) -> ActionStatus<PaymentIntent> {
        let parameters = match self.build_parameters(request) {
            Ok(parameters) => parameters,
            Err(error) => {
                warn!(order_id = request.order_id, %error, "rejecting payment request");
                return ActionStatus::Failure(error);
            }
        };

        debug!(
            order_id = request.order_id,
            amount_minor = parameters.amount_minor,
            currency = %parameters.currency,
            "creating payment intent"
        );

        let sdk = Arc::clone(&self.sdk);
        let status = run_cancelable(move |result_tx| {
            sdk.create_payment_intent(
                parameters,
                Box::new(move |result| {
                    let _ = result_tx.send(result.into());
                }),
            )
        })
        .await;

        if let ActionStatus::Failure(error) = &status {
            warn!(order_id = request.order_id, %error, "create payment intent failed");
        }
        status
    }

    fn build_parameters(
        &self,
        request: &PaymentRequest,
    ) -> Result<PaymentIntentParameters, TerminalError> {
        let amount_minor = to_minor_units(request.amount)?;

        // Suppress the terminal-side receipt when the store's gateway
        // already emails one, so the customer is not billed twice in inbox
        let receipt_email = if request.gateway_sends_receipt {
            None
        } else {
            non_blank(request.customer_email.as_deref())
        };

        let mut map = BTreeMap::new();
        insert_non_blank(&mut map, metadata::STORE_NAME, request.store_name.as_deref());
        insert_non_blank(
            &mut map,
            metadata::CUSTOMER_NAME,
            request.customer_name.as_deref(),
        );
        if let Some(email) = &receipt_email {
            map.insert(metadata::CUSTOMER_EMAIL.to_owned(), email.clone());
        }
        insert_non_blank(&mut map, metadata::SITE_URL, request.site_url.as_deref());
        map.insert(metadata::ORDER_ID.to_owned(), request.order_id.to_string());
        insert_non_blank(&mut map, metadata::ORDER_KEY, request.order_key.as_deref());
        if let Some(reader) = self.reader_provider.connected_reader() {
            map.insert(metadata::READER_ID.to_owned(), reader.id);
            map.insert(metadata::READER_MODEL.to_owned(), reader.model);
        }
        map.insert(
            metadata::PAYMENT_TYPE.to_owned(),
            metadata::PAYMENT_TYPE_CARD_READER.to_owned(),
        );

        Ok(PaymentIntentParameters {
            description: request.description.clone(),
            amount_minor,
            currency: request.currency.to_lowercase(),
            payment_method_types: country::payment_method_types_for(&request.country_code)
                .to_vec(),
            receipt_email,
            statement_descriptor: non_blank(request.statement_descriptor.as_deref()),
            metadata: map,
        })
    }
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .filter(|value| !value.trim().is_empty())
        .map(str::to_owned)
}

fn insert_non_blank(map: &mut BTreeMap<String, String>, key: &str, value: Option<&str>) {
    if let Some(value) = non_blank(value) {
        map.insert(key.to_owned(), value);
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
