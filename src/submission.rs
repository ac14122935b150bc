//! Submission controller for the contact form
//!
//! A submit request validates the form and, when it is valid, hands the
//! message to the transport on a spawned task. The result comes back over a
//! oneshot channel and is applied by [`SubmissionController::poll`] on the
//! event loop. The form stays `Submitting` for the whole round trip, and
//! further submit requests are ignored until then.

use crate::state::{ContactForm, Notification, Notifier, SubmissionState};
use crate::transport::{MessageTransport, TemplateParams, TransportError};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::oneshot::{self, error::TryRecvError};

type Settlement = Result<(), TransportError>;

/// What happened to a submit request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitAttempt {
    /// A submission is already in flight
    Ignored,
    /// Validation failed, errors were published to the form
    Invalid,
    /// The message was handed to the transport
    Started,
}

/// How a submission settled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    Failure,
}

/// Drives validate → send → settle for one form
pub struct SubmissionController {
    transport: Arc<dyn MessageTransport>,
    recipient_label: String,
    timeout: Option<Duration>,
    pending: Option<oneshot::Receiver<Settlement>>,
}

impl SubmissionController {
    pub fn new(
        transport: Arc<dyn MessageTransport>,
        recipient_label: impl Into<String>,
        timeout: Option<Duration>,
    ) -> Self {
        Self {
            transport,
            recipient_label: recipient_label.into(),
            timeout,
            pending: None,
        }
    }

    /// Whether a send is waiting to settle
    #[cfg(test)]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Validate the form and start sending it if valid.
    ///
    /// Must be called from within a tokio runtime.
    pub fn request_submit(&mut self, form: &mut ContactForm) -> SubmitAttempt {
        if form.is_submitting() || self.pending.is_some() {
            tracing::debug!("Submit ignored, a message is already being sent");
            return SubmitAttempt::Ignored;
        }

        if !form.run_validation() {
            return SubmitAttempt::Invalid;
        }

        let params = TemplateParams {
            from_name: form.values.name.clone(),
            from_email: form.values.email.clone(),
            to_name: self.recipient_label.clone(),
            message: form.values.message.clone(),
        };

        form.submission = SubmissionState::Submitting;
        tracing::info!("Sending contact message");

        let (tx, rx) = oneshot::channel();
        let transport = Arc::clone(&self.transport);
        let timeout = self.timeout;
        tokio::spawn(async move {
            let result = deliver(transport.as_ref(), &params, timeout).await;
            // Receiver gone means the form was dropped, nothing left to update
            let _ = tx.send(result);
        });
        self.pending = Some(rx);

        SubmitAttempt::Started
    }

    /// Apply the result if the send has settled, without blocking
    pub fn poll(&mut self, form: &mut ContactForm, notifier: &mut dyn Notifier) -> Option<Outcome> {
        let rx = self.pending.as_mut()?;
        let result = match rx.try_recv() {
            Ok(result) => result,
            Err(TryRecvError::Empty) => return None,
            // Sender dropped without a result: the task panicked or was aborted
            Err(TryRecvError::Closed) => Err(TransportError::Aborted),
        };
        self.pending = None;
        Some(settle(form, notifier, result))
    }

    /// Wait for the in-flight send and apply its result
    #[cfg(test)]
    pub async fn wait(
        &mut self,
        form: &mut ContactForm,
        notifier: &mut dyn Notifier,
    ) -> Option<Outcome> {
        let rx = self.pending.take()?;
        let result = rx.await.unwrap_or(Err(TransportError::Aborted));
        Some(settle(form, notifier, result))
    }
}

async fn deliver(
    transport: &dyn MessageTransport,
    params: &TemplateParams,
    timeout: Option<Duration>,
) -> Settlement {
    match timeout {
        Some(limit) => tokio::time::timeout(limit, transport.send(params))
            .await
            .unwrap_or(Err(TransportError::Timeout(limit))),
        None => transport.send(params).await,
    }
}

/// Puts the form back to `Idle` when dropped
struct SubmittingGuard<'a>(&'a mut ContactForm);

impl Drop for SubmittingGuard<'_> {
    fn drop(&mut self) {
        self.0.submission = SubmissionState::Idle;
    }
}

fn settle(form: &mut ContactForm, notifier: &mut dyn Notifier, result: Settlement) -> Outcome {
    let guard = SubmittingGuard(form);

    match result {
        Ok(()) => {
            tracing::info!("Contact message sent");
            notifier.notify(Notification::sent());
            guard.0.reset_values();
            Outcome::Success
        }
        Err(err) => {
            tracing::error!(error = %err, "Error sending contact message");
            notifier.notify(Notification::send_failed());
            Outcome::Failure
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{
        Field, FormValues, MockNotifier, NotificationKind, NotificationQueue, EMAIL_INVALID, EMAIL_REQUIRED,
        MESSAGE_REQUIRED, NAME_REQUIRED,
    };
    use crate::transport::MockMessageTransport;
    use async_trait::async_trait;
    use pretty_assertions::assert_eq;

    const RECIPIENT: &str = "ANB Tech Solution";

    fn form_with(name: &str, email: &str, message: &str) -> ContactForm {
        let mut form = ContactForm::new();
        form.update_field(Field::Name, name);
        form.update_field(Field::Email, email);
        form.update_field(Field::Message, message);
        form
    }

    fn controller(transport: MockMessageTransport) -> SubmissionController {
        SubmissionController::new(Arc::new(transport), RECIPIENT, None)
    }

    fn notifier_expecting(kind: NotificationKind) -> MockNotifier {
        let mut notifier = MockNotifier::new();
        notifier
            .expect_notify()
            .withf(move |n| n.kind == kind)
            .times(1)
            .return_const(());
        notifier
    }

    fn rejected() -> TransportError {
        TransportError::Rejected {
            status: 500,
            body: "boom".to_string(),
        }
    }

    #[tokio::test]
    async fn test_empty_form_reports_all_fields_without_sending() {
        let mut transport = MockMessageTransport::new();
        transport.expect_send().never();
        let mut controller = controller(transport);
        let mut form = ContactForm::new();

        assert_eq!(controller.request_submit(&mut form), SubmitAttempt::Invalid);

        assert_eq!(form.error_for(Field::Name), Some(NAME_REQUIRED));
        assert_eq!(form.error_for(Field::Email), Some(EMAIL_REQUIRED));
        assert_eq!(form.error_for(Field::Message), Some(MESSAGE_REQUIRED));
        assert_eq!(form.submission, SubmissionState::Idle);
        assert!(!controller.is_pending());
    }

    #[tokio::test]
    async fn test_invalid_email_is_not_sent() {
        let mut transport = MockMessageTransport::new();
        transport.expect_send().never();
        let mut controller = controller(transport);
        let mut form = form_with("Ana", "not-an-email", "hi");

        assert_eq!(controller.request_submit(&mut form), SubmitAttempt::Invalid);

        assert_eq!(form.errors.len(), 1);
        assert_eq!(form.error_for(Field::Email), Some(EMAIL_INVALID));
        assert!(!form.is_submitting());
    }

    #[tokio::test]
    async fn test_successful_send_resets_form() {
        let mut transport = MockMessageTransport::new();
        transport
            .expect_send()
            .withf(|p| {
                p.from_name == "Ana"
                    && p.from_email == "ana@x.com"
                    && p.to_name == RECIPIENT
                    && p.message == "hi"
            })
            .times(1)
            .returning(|_| Ok(()));
        let mut controller = controller(transport);
        let mut notifier = notifier_expecting(NotificationKind::Success);
        let mut form = form_with("Ana", "ana@x.com", "hi");

        assert_eq!(controller.request_submit(&mut form), SubmitAttempt::Started);
        assert!(form.is_submitting());
        assert!(form.errors.is_empty());

        let outcome = controller.wait(&mut form, &mut notifier).await;

        assert_eq!(outcome, Some(Outcome::Success));
        assert_eq!(form.values, FormValues::default());
        assert_eq!(form.submission, SubmissionState::Idle);
        assert!(!controller.is_pending());
    }

    #[tokio::test]
    async fn test_failed_send_keeps_values() {
        let mut transport = MockMessageTransport::new();
        transport
            .expect_send()
            .times(1)
            .returning(|_| Err(rejected()));
        let mut controller = controller(transport);
        let mut notifier = notifier_expecting(NotificationKind::Error);
        let mut form = form_with("Ana", "ana@x.com", "hi");

        controller.request_submit(&mut form);
        let outcome = controller.wait(&mut form, &mut notifier).await;

        assert_eq!(outcome, Some(Outcome::Failure));
        assert_eq!(form.values, FormValues::new("Ana", "ana@x.com", "hi"));
        assert_eq!(form.submission, SubmissionState::Idle);
    }

    #[tokio::test]
    async fn test_submit_while_sending_is_ignored() {
        let mut transport = MockMessageTransport::new();
        transport.expect_send().times(1).returning(|_| Ok(()));
        let mut controller = controller(transport);
        let mut notifier = notifier_expecting(NotificationKind::Success);
        let mut form = form_with("Ana", "ana@x.com", "hi");

        assert_eq!(controller.request_submit(&mut form), SubmitAttempt::Started);
        assert_eq!(controller.request_submit(&mut form), SubmitAttempt::Ignored);
        assert_eq!(controller.request_submit(&mut form), SubmitAttempt::Ignored);

        controller.wait(&mut form, &mut notifier).await;
        assert!(!form.is_submitting());
    }

    #[tokio::test]
    async fn test_submit_with_unsettled_send_is_ignored() {
        let mut transport = MockMessageTransport::new();
        transport.expect_send().times(1).returning(|_| Ok(()));
        let mut controller = controller(transport);
        let mut notifier = notifier_expecting(NotificationKind::Success);
        let mut form = form_with("Ana", "ana@x.com", "hi");

        assert_eq!(controller.request_submit(&mut form), SubmitAttempt::Started);
        // The in-flight send gates re-entry even if the flag was cleared
        form.submission = SubmissionState::Idle;
        assert_eq!(controller.request_submit(&mut form), SubmitAttempt::Ignored);

        assert_eq!(controller.wait(&mut form, &mut notifier).await, Some(Outcome::Success));
        assert!(!controller.is_pending());
    }

    #[tokio::test]
    async fn test_retry_after_failure_sends_again() {
        let mut transport = MockMessageTransport::new();
        let mut seq = mockall::Sequence::new();
        transport
            .expect_send()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Err(rejected()));
        transport
            .expect_send()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));
        let mut controller = controller(transport);
        let mut queue = NotificationQueue::default();
        let mut form = form_with("Ana", "ana@x.com", "hi");

        controller.request_submit(&mut form);
        assert_eq!(controller.wait(&mut form, &mut queue).await, Some(Outcome::Failure));

        assert_eq!(controller.request_submit(&mut form), SubmitAttempt::Started);
        assert_eq!(controller.wait(&mut form, &mut queue).await, Some(Outcome::Success));

        assert_eq!(queue.len(), 2);
        assert_eq!(queue.current().map(|n| n.kind), Some(NotificationKind::Error));
    }

    #[tokio::test]
    async fn test_valid_submit_clears_stale_errors() {
        let mut transport = MockMessageTransport::new();
        transport.expect_send().times(1).returning(|_| Ok(()));
        let mut controller = controller(transport);
        let mut queue = NotificationQueue::default();
        let mut form = ContactForm::new();

        controller.request_submit(&mut form);
        assert_eq!(form.errors.len(), 3);

        form.update_field(Field::Name, "Ana");
        form.update_field(Field::Email, "ana@x.com");
        form.update_field(Field::Message, "hi");
        assert_eq!(form.errors.len(), 3); // stale until the next submit

        assert_eq!(controller.request_submit(&mut form), SubmitAttempt::Started);
        assert!(form.errors.is_empty());
        controller.wait(&mut form, &mut queue).await;
        assert!(form.values.is_empty());
    }

    #[tokio::test]
    async fn test_poll_returns_none_until_settled() {
        let mut transport = MockMessageTransport::new();
        transport.expect_send().times(1).returning(|_| Ok(()));
        let mut controller = controller(transport);
        let mut queue = NotificationQueue::default();
        let mut form = form_with("Ana", "ana@x.com", "hi");

        assert_eq!(controller.poll(&mut form, &mut queue), None);

        controller.request_submit(&mut form);
        // The send task has not run yet on this single-threaded runtime
        assert_eq!(controller.poll(&mut form, &mut queue), None);
        assert!(form.is_submitting());

        let outcome = loop {
            tokio::task::yield_now().await;
            if let Some(outcome) = controller.poll(&mut form, &mut queue) {
                break outcome;
            }
        };

        assert_eq!(outcome, Outcome::Success);
        assert!(!form.is_submitting());
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn test_wait_without_pending_send() {
        let mut controller = controller(MockMessageTransport::new());
        let mut queue = NotificationQueue::default();
        let mut form = ContactForm::new();

        let outcome = tokio_test::block_on(controller.wait(&mut form, &mut queue));
        assert_eq!(outcome, None);
        assert!(!queue.is_showing());
    }

    struct PanickingTransport;

    #[async_trait]
    impl MessageTransport for PanickingTransport {
        async fn send(&self, _params: &TemplateParams) -> Result<(), TransportError> {
            panic!("transport blew up");
        }
    }

    #[tokio::test]
    async fn test_panicking_transport_settles_as_failure() {
        let mut controller =
            SubmissionController::new(Arc::new(PanickingTransport), RECIPIENT, None);
        let mut notifier = notifier_expecting(NotificationKind::Error);
        let mut form = form_with("Ana", "ana@x.com", "hi");

        controller.request_submit(&mut form);
        let outcome = controller.wait(&mut form, &mut notifier).await;

        assert_eq!(outcome, Some(Outcome::Failure));
        assert_eq!(form.submission, SubmissionState::Idle);
        assert_eq!(form.values.name, "Ana");
    }

    struct StalledTransport;

    #[async_trait]
    impl MessageTransport for StalledTransport {
        async fn send(&self, _params: &TemplateParams) -> Result<(), TransportError> {
            tokio::time::sleep(Duration::from_secs(60)).await;
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_timeout_settles_as_failure() {
        let mut controller = SubmissionController::new(
            Arc::new(StalledTransport),
            RECIPIENT,
            Some(Duration::from_millis(20)),
        );
        let mut notifier = notifier_expecting(NotificationKind::Error);
        let mut form = form_with("Ana", "ana@x.com", "hi");

        controller.request_submit(&mut form);
        let outcome = controller.wait(&mut form, &mut notifier).await;

        assert_eq!(outcome, Some(Outcome::Failure));
        assert!(!form.is_submitting());
        assert_eq!(form.values.message, "hi");
    }

    struct PanickingNotifier;

    impl Notifier for PanickingNotifier {
        fn notify(&mut self, _notification: Notification) {
            panic!("overlay failed");
        }
    }

    #[test]
    fn test_guard_releases_submitting_when_notifier_panics() {
        let mut form = form_with("Ana", "ana@x.com", "hi");
        form.submission = SubmissionState::Submitting;
        let mut notifier = PanickingNotifier;

        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            settle(&mut form, &mut notifier, Ok(()))
        }));

        assert!(result.is_err());
        assert_eq!(form.submission, SubmissionState::Idle);
    }

    #[test]
    fn test_settle_clears_submitting_once() {
        let mut form = form_with("Ana", "ana@x.com", "hi");
        form.submission = SubmissionState::Submitting;
        let mut queue = NotificationQueue::default();

        assert_eq!(settle(&mut form, &mut queue, Err(rejected())), Outcome::Failure);
        assert_eq!(form.submission, SubmissionState::Idle);
        assert_eq!(queue.len(), 1);
    }
}
