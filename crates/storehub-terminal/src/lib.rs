//! # StoreHub Terminal
//!
//! Async bridge over the callback-style card-reader SDK used for in-person
//! payments. Each SDK operation is wrapped in an action that settles with
//! exactly one [`ActionStatus`] and propagates future-drop as hardware
//! cancellation.
//!
//! ## Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────┐
//! │                   payment orchestration                   │
//! │        (create -> collect -> process, or refund)          │
//! └──────────────┬────────────────────────────────────────────┘
//!                │ async fn, one ActionStatus per call
//! ┌──────────────▼────────────────────────────────────────────┐
//! │  actions::{create, collect, process, interac_refund}      │
//! │  - request shaping (minor units, metadata, receipts)      │
//! │  - cancelable bridge (oneshot + handle guard)             │
//! └──────────────┬────────────────────────────────────────────┘
//!                │ callbacks + CancelableHandle
//! ┌──────────────▼────────────────────────────────────────────┐
//! │  TerminalSdk / ConnectedReaderProvider (trait seams)      │
//! └───────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use rust_decimal_macros::dec;
//! use storehub_terminal::{ActionStatus, CreatePaymentAction, PaymentRequest};
//! # use storehub_terminal::sdk::{ConnectedReaderProvider, TerminalSdk};
//! # async fn demo(sdk: Arc<dyn TerminalSdk>, readers: Arc<dyn ConnectedReaderProvider>) {
//! let action = CreatePaymentAction::new(sdk, readers);
//! let request = PaymentRequest {
//!     description: "Order #42".into(),
//!     order_id: 42,
//!     amount: dec!(19.99),
//!     currency: "USD".into(),
//!     country_code: "US".into(),
//!     store_name: None,
//!     customer_name: None,
//!     customer_email: None,
//!     site_url: None,
//!     order_key: None,
//!     statement_descriptor: None,
//!     gateway_sends_receipt: false,
//! };
//!
//! match action.create_payment_intent(&request).await {
//!     ActionStatus::Success(intent) => println!("intent {} created", intent.id),
//!     ActionStatus::Failure(error) => eprintln!("payment failed: {error}"),
//! }
//! # }
//! ```

pub mod actions;
pub mod country;
pub mod error;
pub mod sdk;
pub mod types;

#[cfg(test)]
pub(crate) mod test_support;

pub use actions::{
    CollectPaymentAction, CreatePaymentAction, ProcessInteracRefundAction, ProcessPaymentAction,
};
pub use error::TerminalError;
pub use types::{
    ActionStatus, PaymentIntent, PaymentIntentStatus, PaymentMethodType, PaymentRequest, Refund,
    RefundRequest, RefundStatus,
};
