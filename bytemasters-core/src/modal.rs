//! Contact modal lifecycle
//!
//! `ModalSession` is the single owner of the modal's mutable state: which
//! phase the dialog is in and which element had focus before it opened. The
//! browser layer asks it before every DOM change and carries out whatever it
//! answers, so the ordering rules live here and can be tested without a page.
//!
//! ```text
//! Closed -> Open -> Submitting -> Success -> Closing -> Closed
//!             ^  \________________________/    |
//!             |        (failure: back to Open) |
//!             +------ send another ------------+
//! ```
//!
//! The close timer is never cancelled. Should the visitor choose "send
//! another" while a close is still pending, the late timer tears down the
//! fresh dialog; see `finish_close`.
use crate::contact::{ContactForm, SubmitError, ValidationError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalPhase {
    #[default]
    Closed,
    Open,
    Submitting,
    Success,
    /// Close requested; the subtree stays attached until the transition delay elapses.
    Closing,
}

/// Answer to a submit attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitDecision {
    /// Form is valid; issue exactly one request.
    Send,
    /// Alert the visitor and stay open.
    Invalid(ValidationError),
    /// Dialog is not accepting submissions (a request is in flight or it is closing).
    Ignored(ModalPhase),
}

/// What to do once a request settles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitResolution {
    /// Replace the form with the confirmation.
    Succeeded,
    /// Alert the visitor; the form is usable again.
    Failed(SubmitError),
    /// The dialog closed while the request was in flight.
    Stale(Result<(), SubmitError>),
}

/// Effects of the deferred close timer firing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CloseEffect<F> {
    /// Remove the overlay subtree, if one is still attached.
    pub detach: bool,
    /// Element to hand focus back to.
    pub restore_focus: Option<F>,
}

/// Session-scoped modal controller state.
///
/// `F` is whatever handle the host uses for a focusable element.
#[derive(Debug, Clone)]
pub struct ModalSession<F> {
    phase: ModalPhase,
    last_focused: Option<F>,
    close_delay_ms: u32,
}

impl<F: Clone> ModalSession<F> {
    #[must_use]
    pub const fn new(close_delay_ms: u32) -> Self {
        Self {
            phase: ModalPhase::Closed,
            last_focused: None,
            close_delay_ms,
        }
    }

    #[must_use]
    pub const fn phase(&self) -> ModalPhase {
        self.phase
    }

    /// The overlay subtree exists in the document.
    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.phase != ModalPhase::Closed
    }

    #[must_use]
    pub const fn close_delay_ms(&self) -> u32 {
        self.close_delay_ms
    }

    /// Request to open. Returns `true` when the caller must build the dialog.
    ///
    /// Only a fully closed session opens, so a dialog that is still fading
    /// out blocks a second one.
    pub fn open(&mut self, focused: Option<F>) -> bool {
        if self.phase != ModalPhase::Closed {
            log::debug!("contact modal already mounted ({:?}); open ignored", self.phase);
            return false;
        }
        self.last_focused = focused;
        self.phase = ModalPhase::Open;
        true
    }

    pub fn begin_submit(&mut self, form: &ContactForm) -> SubmitDecision {
        if self.phase != ModalPhase::Open {
            return SubmitDecision::Ignored(self.phase);
        }
        if let Err(err) = form.validate() {
            return SubmitDecision::Invalid(err);
        }
        self.phase = ModalPhase::Submitting;
        SubmitDecision::Send
    }

    pub fn finish_submit(&mut self, outcome: Result<(), SubmitError>) -> SubmitResolution {
        if self.phase != ModalPhase::Submitting {
            return SubmitResolution::Stale(outcome);
        }
        match outcome {
            Ok(()) => {
                self.phase = ModalPhase::Success;
                SubmitResolution::Succeeded
            }
            Err(err) => {
                self.phase = ModalPhase::Open;
                SubmitResolution::Failed(err)
            }
        }
    }

    /// Request to close. Returns the delay after which `finish_close` must run.
    ///
    /// Each call while mounted schedules its own timer, matching how the
    /// page behaves when the visitor hits Escape twice.
    pub fn close(&mut self) -> Option<u32> {
        if self.phase == ModalPhase::Closed {
            return None;
        }
        self.phase = ModalPhase::Closing;
        Some(self.close_delay_ms)
    }

    /// Deferred half of `close`.
    ///
    /// Detaches whatever dialog is mounted at that moment and always hands
    /// back the focus target, even if an earlier timer already detached it.
    pub fn finish_close(&mut self) -> CloseEffect<F> {
        let detach = self.phase != ModalPhase::Closed;
        self.phase = ModalPhase::Closed;
        CloseEffect {
            detach,
            restore_focus: self.last_focused.clone(),
        }
    }

    /// "Send another": discard the confirmation and start over with a blank form.
    ///
    /// Keeps the focus target captured by the first open, since the button
    /// that triggered this is destroyed with the old dialog.
    pub fn restart(&mut self) -> bool {
        match self.phase {
            ModalPhase::Success | ModalPhase::Closing => {
                self.phase = ModalPhase::Open;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::RequiredField;

    fn filled() -> ContactForm {
        ContactForm {
            name: String::from("Ada"),
            email: String::from("ada@example.test"),
            subject: String::from("Consulta"),
            message: String::from("Hola"),
        }
    }

    #[test]
    fn second_open_is_ignored() {
        let mut session = ModalSession::new(280);
        assert!(session.open(Some("cta")));
        assert!(!session.open(Some("other")));
        assert_eq!(session.phase(), ModalPhase::Open);
        session.close();
        assert_eq!(session.finish_close().restore_focus, Some("cta"));
    }

    #[test]
    fn invalid_form_stays_open() {
        let mut session = ModalSession::<()>::new(280);
        session.open(None);
        let decision = session.begin_submit(&ContactForm {
            email: String::from(" "),
            ..filled()
        });
        match decision {
            SubmitDecision::Invalid(err) => assert_eq!(err.missing, vec![RequiredField::Email]),
            other => panic!("unexpected decision {other:?}"),
        }
        assert_eq!(session.phase(), ModalPhase::Open);
    }

    #[test]
    fn in_flight_submission_blocks_resubmit() {
        let mut session = ModalSession::<()>::new(280);
        session.open(None);
        assert_eq!(session.begin_submit(&filled()), SubmitDecision::Send);
        assert_eq!(
            session.begin_submit(&filled()),
            SubmitDecision::Ignored(ModalPhase::Submitting)
        );
    }

    #[test]
    fn failure_returns_to_open() {
        let mut session = ModalSession::<()>::new(280);
        session.open(None);
        session.begin_submit(&filled());
        let resolution = session.finish_submit(Err(SubmitError::rejected(500, "down")));
        assert!(matches!(resolution, SubmitResolution::Failed(_)));
        assert_eq!(session.phase(), ModalPhase::Open);
        assert_eq!(session.begin_submit(&filled()), SubmitDecision::Send);
    }

    #[test]
    fn closing_mid_request_makes_result_stale() {
        let mut session = ModalSession::<()>::new(280);
        session.open(None);
        session.begin_submit(&filled());
        assert_eq!(session.close(), Some(280));
        assert_eq!(session.finish_submit(Ok(())), SubmitResolution::Stale(Ok(())));
        assert_eq!(session.phase(), ModalPhase::Closing);
    }

    #[test]
    fn close_while_closed_does_nothing() {
        let mut session = ModalSession::<()>::new(280);
        assert_eq!(session.close(), None);
    }

    #[test]
    fn open_is_blocked_until_timer_fires() {
        let mut session = ModalSession::new(280);
        session.open(Some(1));
        session.close();
        assert!(!session.open(Some(2)));
        let effect = session.finish_close();
        assert!(effect.detach);
        assert_eq!(effect.restore_focus, Some(1));
        assert!(session.open(Some(2)));
    }

    #[test]
    fn double_close_second_timer_only_restores_focus() {
        let mut session = ModalSession::new(280);
        session.open(Some("cta"));
        assert!(session.close().is_some());
        assert!(session.close().is_some());
        assert!(session.finish_close().detach);
        let late = session.finish_close();
        assert!(!late.detach);
        assert_eq!(late.restore_focus, Some("cta"));
    }

    #[test]
    fn restart_only_from_success_or_closing() {
        let mut session = ModalSession::<()>::new(280);
        assert!(!session.restart());
        session.open(None);
        assert!(!session.restart());
        session.begin_submit(&filled());
        session.finish_submit(Ok(()));
        assert!(session.restart());
        assert_eq!(session.phase(), ModalPhase::Open);
    }
}
