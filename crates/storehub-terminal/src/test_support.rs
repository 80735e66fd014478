//! Fakes shared across the action tests: a scripted SDK, cancelable
//! handles with cancellation probes, and a reader provider.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use crate::error::TerminalError;
use crate::sdk::{
    CancelableHandle, ConnectedReaderProvider, IntentCallback, RefundCallback, TerminalSdk,
};
use crate::types::{
    PaymentIntent, PaymentIntentParameters, PaymentIntentStatus, ReaderInfo, Refund,
    RefundParameters, RefundStatus,
};

// =============================================================================
// Fake Handle
// =============================================================================

pub(crate) struct FakeHandle {
    completed: Arc<AtomicBool>,
    cancels: Arc<AtomicUsize>,
}

impl FakeHandle {
    pub(crate) fn completed() -> Self {
        FakeHandle::with(true, Arc::new(AtomicUsize::new(0)))
    }

    pub(crate) fn pending() -> Self {
        FakeHandle::with(false, Arc::new(AtomicUsize::new(0)))
    }

    pub(crate) fn with(completed: bool, cancels: Arc<AtomicUsize>) -> Self {
        FakeHandle {
            completed: Arc::new(AtomicBool::new(completed)),
            cancels,
        }
    }

    /// Observer that stays valid after the handle moves into the bridge.
    pub(crate) fn probe(&self) -> HandleProbe {
        HandleProbe {
            cancels: self.cancels.clone(),
        }
    }
}

impl CancelableHandle for FakeHandle {
    fn cancel(&self) {
        self.cancels.fetch_add(1, Ordering::SeqCst);
    }

    fn is_completed(&self) -> bool {
        self.completed.load(Ordering::SeqCst)
    }
}

pub(crate) struct HandleProbe {
    cancels: Arc<AtomicUsize>,
}

impl HandleProbe {
    pub(crate) fn cancel_count(&self) -> usize {
        self.cancels.load(Ordering::SeqCst)
    }
}

// =============================================================================
// Fake SDK
// =============================================================================

/// How the fake SDK settles each incoming call.
pub(crate) enum RespondMode {
    /// Invoke the callback synchronously with a success payload.
    Success,
    /// Invoke the callback synchronously with the given error.
    Failure(TerminalError),
    /// Hold the callback forever; the returned handle stays incomplete.
    Pending,
    /// Drop the callback without invoking it (SDK contract violation).
    DropCallback,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum RecordedCall {
    CreateIntent(PaymentIntentParameters),
    CollectMethod(PaymentIntent),
    ProcessPayment(PaymentIntent),
    ProcessRefund(RefundParameters),
}

enum ParkedCallback {
    Intent(IntentCallback),
    Refund(RefundCallback),
}

pub(crate) struct FakeTerminalSdk {
    mode: RespondMode,
    calls: Mutex<Vec<RecordedCall>>,
    cancels: Arc<AtomicUsize>,
    parked: Mutex<Vec<ParkedCallback>>,
}

impl FakeTerminalSdk {
    pub(crate) fn success() -> Self {
        FakeTerminalSdk::with_mode(RespondMode::Success)
    }

    pub(crate) fn failure(error: TerminalError) -> Self {
        FakeTerminalSdk::with_mode(RespondMode::Failure(error))
    }

    pub(crate) fn pending() -> Self {
        FakeTerminalSdk::with_mode(RespondMode::Pending)
    }

    pub(crate) fn drop_callback() -> Self {
        FakeTerminalSdk::with_mode(RespondMode::DropCallback)
    }

    fn with_mode(mode: RespondMode) -> Self {
        FakeTerminalSdk {
            mode,
            calls: Mutex::new(Vec::new()),
            cancels: Arc::new(AtomicUsize::new(0)),
            parked: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub(crate) fn cancel_count(&self) -> usize {
        self.cancels.load(Ordering::SeqCst)
    }

    pub(crate) fn recorded(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Parameters of the single recorded create-intent call.
    pub(crate) fn created_intent_parameters(&self) -> PaymentIntentParameters {
        match self.recorded().as_slice() {
            [RecordedCall::CreateIntent(parameters)] => parameters.clone(),
            other => panic!("expected exactly one create-intent call, got {other:?}"),
        }
    }

    fn record(&self, call: RecordedCall) {
        self.calls.lock().unwrap().push(call);
    }

    fn handle(&self, completed: bool) -> Box<dyn CancelableHandle> {
        Box::new(FakeHandle::with(completed, self.cancels.clone()))
    }

    fn settle_intent(
        &self,
        success: PaymentIntent,
        on_result: IntentCallback,
    ) -> Box<dyn CancelableHandle> {
        match &self.mode {
            RespondMode::Success => {
                let handle = self.handle(true);
                on_result(Ok(success));
                handle
            }
            RespondMode::Failure(error) => {
                let handle = self.handle(true);
                on_result(Err(error.clone()));
                handle
            }
            RespondMode::Pending => {
                self.parked.lock().unwrap().push(ParkedCallback::Intent(on_result));
                self.handle(false)
            }
            RespondMode::DropCallback => {
                drop(on_result);
                self.handle(true)
            }
        }
    }
}

impl TerminalSdk for FakeTerminalSdk {
    fn create_payment_intent(
        &self,
        parameters: PaymentIntentParameters,
        on_result: IntentCallback,
    ) -> Box<dyn CancelableHandle> {
        self.record(RecordedCall::CreateIntent(parameters.clone()));
        let intent = PaymentIntent {
            id: "pi_test".into(),
            status: PaymentIntentStatus::RequiresPaymentMethod,
            amount_minor: parameters.amount_minor,
            currency: parameters.currency,
            metadata: parameters.metadata,
        };
        self.settle_intent(intent, on_result)
    }

    fn collect_payment_method(
        &self,
        intent: PaymentIntent,
        on_result: IntentCallback,
    ) -> Box<dyn CancelableHandle> {
        self.record(RecordedCall::CollectMethod(intent.clone()));
        let advanced = PaymentIntent {
            status: PaymentIntentStatus::RequiresConfirmation,
            ..intent
        };
        self.settle_intent(advanced, on_result)
    }

    fn process_payment(
        &self,
        intent: PaymentIntent,
        on_result: IntentCallback,
    ) -> Box<dyn CancelableHandle> {
        self.record(RecordedCall::ProcessPayment(intent.clone()));
        let advanced = PaymentIntent {
            status: PaymentIntentStatus::RequiresCapture,
            ..intent
        };
        self.settle_intent(advanced, on_result)
    }

    fn process_refund(
        &self,
        parameters: RefundParameters,
        on_result: RefundCallback,
    ) -> Box<dyn CancelableHandle> {
        self.record(RecordedCall::ProcessRefund(parameters.clone()));
        match &self.mode {
            RespondMode::Success => {
                let handle = self.handle(true);
                on_result(Ok(Refund {
                    id: "re_test".into(),
                    charge_id: parameters.charge_id,
                    status: RefundStatus::Succeeded,
                    amount_minor: parameters.amount_minor,
                    currency: parameters.currency,
                }));
                handle
            }
            RespondMode::Failure(error) => {
                let handle = self.handle(true);
                on_result(Err(error.clone()));
                handle
            }
            RespondMode::Pending => {
                self.parked.lock().unwrap().push(ParkedCallback::Refund(on_result));
                self.handle(false)
            }
            RespondMode::DropCallback => {
                drop(on_result);
                self.handle(true)
            }
        }
    }
}

// =============================================================================
// Fake Reader Provider
// =============================================================================

pub(crate) struct FakeReaderProvider {
    reader: Option<ReaderInfo>,
}

impl FakeReaderProvider {
    pub(crate) fn connected(id: &str, model: &str) -> Self {
        FakeReaderProvider {
            reader: Some(ReaderInfo {
                id: id.into(),
                model: model.into(),
            }),
        }
    }

    pub(crate) fn disconnected() -> Self {
        FakeReaderProvider { reader: None }
    }
}

impl ConnectedReaderProvider for FakeReaderProvider {
    fn connected_reader(&self) -> Option<ReaderInfo> {
        self.reader.clone()
    }
}

// =============================================================================
// Shared Fixtures
// =============================================================================

pub(crate) fn test_intent(status: PaymentIntentStatus) -> PaymentIntent {
    PaymentIntent {
        id: "pi_test".into(),
        status,
        amount_minor: 100,
        currency: "usd".into(),
        metadata: Default::default(),
    }
}
