//! Password-reset request flow.
//!
//! A [`ResetRequest`] moves `Editing -> Submitting -> Submitted` and back to
//! `Editing` on "try again". [`ResetFlow`] wires it to a
//! [`PasswordResetService`] and makes sure only one request is in flight.

use std::cell::RefCell;
use std::rc::Rc;

use futures::future::LocalBoxFuture;
use futures::FutureExt;
use log::{debug, error, info};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResetError {
    #[error("request failed: {0}")]
    Network(String),
    #[error("reset rejected with status {status}: {message}")]
    Rejected { status: u16, message: String },
    #[error("could not encode request: {0}")]
    Encode(String),
}

/// Sends reset instructions for an email address.
pub trait PasswordResetService {
    fn request_reset(&self, email: &str) -> LocalBoxFuture<'static, Result<(), ResetError>>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResetStatus {
    #[default]
    Editing,
    Submitting,
    Submitted,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResetRequest {
    email: String,
    status: ResetStatus,
    last_failure: Option<ResetError>,
}

impl ResetRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn status(&self) -> ResetStatus {
        self.status
    }

    /// Most recent collaborator failure. Never shown to the user.
    pub fn last_failure(&self) -> Option<&ResetError> {
        self.last_failure.as_ref()
    }

    pub fn submit_disabled(&self) -> bool {
        self.status == ResetStatus::Submitting
    }

    pub fn update_email(&mut self, value: impl Into<String>) -> bool {
        if self.status != ResetStatus::Editing {
            return false;
        }
        self.email = value.into();
        true
    }

    /// Returns the address to send, or `None` if a request is already
    /// running or has finished.
    pub fn begin_submit(&mut self) -> Option<String> {
        if self.status != ResetStatus::Editing {
            return None;
        }
        self.status = ResetStatus::Submitting;
        self.last_failure = None;
        Some(self.email.clone())
    }

    /// Success and failure both land in `Submitted`.
    pub fn complete(&mut self, outcome: Result<(), ResetError>) -> bool {
        if self.status != ResetStatus::Submitting {
            return false;
        }
        self.status = ResetStatus::Submitted;
        self.last_failure = outcome.err();
        true
    }

    /// Back to the form. The email stays filled in.
    pub fn reset(&mut self) -> bool {
        if self.status != ResetStatus::Submitted {
            return false;
        }
        self.status = ResetStatus::Editing;
        true
    }
}

pub struct ResetFlow {
    request: Rc<RefCell<ResetRequest>>,
    service: Rc<dyn PasswordResetService>,
    on_change: Rc<dyn Fn()>,
}

impl ResetFlow {
    pub fn new(service: Rc<dyn PasswordResetService>, on_change: impl Fn() + 'static) -> Self {
        Self {
            request: Rc::new(RefCell::new(ResetRequest::new())),
            service,
            on_change: Rc::new(on_change),
        }
    }

    pub fn snapshot(&self) -> ResetRequest {
        self.request.borrow().clone()
    }

    pub fn update_email(&self, value: impl Into<String>) {
        let changed = self.request.borrow_mut().update_email(value);
        if changed {
            (self.on_change)();
        }
    }

    /// Starts a reset request. The returned future must be driven to
    /// completion by the caller; `None` means one is already in flight.
    pub fn submit(&self) -> Option<LocalBoxFuture<'static, ()>> {
        let email = self.request.borrow_mut().begin_submit()?;
        debug!("Reset request submitting");
        (self.on_change)();

        let request = self.request.clone();
        let on_change = self.on_change.clone();
        let pending = self.service.request_reset(&email);
        Some(
            async move {
                let outcome = pending.await;
                match &outcome {
                    Ok(()) => info!("Password reset requested"),
                    Err(e) => error!("Password reset request failed: {}", e),
                }
                let changed = request.borrow_mut().complete(outcome);
                if changed {
                    on_change();
                }
            }
            .boxed_local(),
        )
    }

    pub fn reset(&self) {
        let changed = self.request.borrow_mut().reset();
        if changed {
            debug!("Reset request back to editing");
            (self.on_change)();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::channel::oneshot;
    use futures::executor::block_on;
    use std::cell::Cell;

    struct Succeeds {
        calls: Rc<RefCell<Vec<String>>>,
    }

    impl PasswordResetService for Succeeds {
        fn request_reset(&self, email: &str) -> LocalBoxFuture<'static, Result<(), ResetError>> {
            self.calls.borrow_mut().push(email.to_string());
            async { Ok(()) }.boxed_local()
        }
    }

    struct Fails;

    impl PasswordResetService for Fails {
        fn request_reset(&self, _email: &str) -> LocalBoxFuture<'static, Result<(), ResetError>> {
            async { Err(ResetError::Network("connection refused".to_string())) }.boxed_local()
        }
    }

    /// Resolves only when the test sends on the channel.
    struct Manual {
        pending: RefCell<Option<oneshot::Receiver<Result<(), ResetError>>>>,
        calls: Cell<usize>,
    }

    impl PasswordResetService for Manual {
        fn request_reset(&self, _email: &str) -> LocalBoxFuture<'static, Result<(), ResetError>> {
            self.calls.set(self.calls.get() + 1);
            let rx = self.pending.borrow_mut().take().expect("only one request expected");
            async move { rx.await.unwrap_or_else(|_| Err(ResetError::Network("dropped".into()))) }
                .boxed_local()
        }
    }

    fn succeeding() -> (Rc<Succeeds>, Rc<RefCell<Vec<String>>>) {
        let calls = Rc::new(RefCell::new(Vec::new()));
        (Rc::new(Succeeds { calls: calls.clone() }), calls)
    }

    #[test]
    fn new_request_is_editing_and_empty() {
        let request = ResetRequest::new();
        assert_eq!(request.status(), ResetStatus::Editing);
        assert_eq!(request.email(), "");
        assert!(!request.submit_disabled());
        assert!(request.last_failure().is_none());
    }

    #[test]
    fn update_email_only_while_editing() {
        let mut request = ResetRequest::new();
        assert!(request.update_email("alice@example.com"));
        request.begin_submit();
        assert!(!request.update_email("mallory@example.com"));
        assert_eq!(request.email(), "alice@example.com");

        request.complete(Ok(()));
        assert!(!request.update_email("mallory@example.com"));
        assert_eq!(request.email(), "alice@example.com");
    }

    #[test]
    fn begin_submit_guards_against_reentry() {
        let mut request = ResetRequest::new();
        request.update_email("alice@example.com");
        assert_eq!(request.begin_submit().as_deref(), Some("alice@example.com"));
        assert!(request.submit_disabled());
        assert_eq!(request.begin_submit(), None);
        assert_eq!(request.status(), ResetStatus::Submitting);
    }

    #[test]
    fn complete_and_reset_ignored_in_wrong_state() {
        let mut request = ResetRequest::new();
        assert!(!request.complete(Ok(())));
        assert!(!request.reset());
        assert_eq!(request.status(), ResetStatus::Editing);

        request.begin_submit();
        assert!(!request.reset());
        assert_eq!(request.status(), ResetStatus::Submitting);
    }

    #[test]
    fn successful_submission_shows_confirmation() {
        let (service, calls) = succeeding();
        let flow = ResetFlow::new(service, || {});
        flow.update_email("alice@example.com");

        let pending = flow.submit().expect("first submit starts a request");
        assert_eq!(flow.snapshot().status(), ResetStatus::Submitting);
        block_on(pending);

        let state = flow.snapshot();
        assert_eq!(state.status(), ResetStatus::Submitted);
        assert_eq!(state.email(), "alice@example.com");
        assert!(state.last_failure().is_none());
        assert_eq!(*calls.borrow(), vec!["alice@example.com".to_string()]);
    }

    // Failures are still reported to the user as sent. The error is kept
    // for diagnostics only.
    #[test]
    fn failed_submission_still_shows_confirmation() {
        let flow = ResetFlow::new(Rc::new(Fails), || {});
        flow.update_email("alice@example.com");
        block_on(flow.submit().expect("submit starts"));

        let state = flow.snapshot();
        assert_eq!(state.status(), ResetStatus::Submitted);
        assert_eq!(state.email(), "alice@example.com");
        assert_eq!(
            state.last_failure(),
            Some(&ResetError::Network("connection refused".to_string()))
        );
    }

    #[test]
    fn second_submit_while_in_flight_is_noop() {
        let (tx, rx) = oneshot::channel();
        let service = Rc::new(Manual {
            pending: RefCell::new(Some(rx)),
            calls: Cell::new(0),
        });
        let flow = ResetFlow::new(service.clone(), || {});
        flow.update_email("alice@example.com");

        let pending = flow.submit().expect("first submit starts");
        assert!(flow.snapshot().submit_disabled());
        assert!(flow.submit().is_none());
        assert!(flow.submit().is_none());
        assert_eq!(service.calls.get(), 1);

        tx.send(Ok(())).expect("receiver alive");
        block_on(pending);
        assert_eq!(flow.snapshot().status(), ResetStatus::Submitted);
        assert!(!flow.snapshot().submit_disabled());
    }

    #[test]
    fn try_again_keeps_email_and_reenables_submit() {
        let (service, calls) = succeeding();
        let flow = ResetFlow::new(service, || {});
        flow.update_email("alice@example.com");
        block_on(flow.submit().expect("submit starts"));

        flow.reset();
        let state = flow.snapshot();
        assert_eq!(state.status(), ResetStatus::Editing);
        assert_eq!(state.email(), "alice@example.com");
        assert!(!state.submit_disabled());

        block_on(flow.submit().expect("can submit again after reset"));
        assert_eq!(calls.borrow().len(), 2);
    }

    #[test]
    fn resubmitting_clears_previous_failure() {
        let mut request = ResetRequest::new();
        request.update_email("alice@example.com");
        request.begin_submit();
        request.complete(Err(ResetError::Rejected {
            status: 500,
            message: "boom".to_string(),
        }));
        assert!(request.last_failure().is_some());

        request.reset();
        request.begin_submit();
        assert!(request.last_failure().is_none());
    }

    #[test]
    fn change_callback_fires_on_each_transition() {
        let (service, _) = succeeding();
        let changes = Rc::new(Cell::new(0));
        let flow = {
            let changes = changes.clone();
            ResetFlow::new(service, move || changes.set(changes.get() + 1))
        };

        flow.update_email("alice@example.com");
        assert_eq!(changes.get(), 1);
        let pending = flow.submit().expect("submit starts");
        assert_eq!(changes.get(), 2);
        block_on(pending);
        assert_eq!(changes.get(), 3);
        flow.reset();
        assert_eq!(changes.get(), 4);

        // Ignored operations do not notify.
        flow.reset();
        assert_eq!(changes.get(), 4);
    }

    #[test]
    fn error_messages_are_readable() {
        let err = ResetError::Rejected {
            status: 429,
            message: "slow down".to_string(),
        };
        assert_eq!(err.to_string(), "reset rejected with status 429: slow down");
    }
}
