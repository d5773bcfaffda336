//! The controller for the five-step test transfer wizard.
//!
//! State only changes through [`WizardState::advance`] and
//! [`WizardState::retreat`]. Each step hands over a [`StepOutput`]; the
//! controller merges it and moves on, or redirects to the earliest step whose
//! data is missing.

use dioxus_logger::tracing::info;
use dioxus_logger::tracing::warn;
use serde::Deserialize;
use serde::Serialize;
use strum::IntoEnumIterator;
use thiserror::Error;

use crate::address_rules::abbreviate_address;
use crate::asset::Asset;
use crate::chain::Chain;
use crate::route::RouteSelection;
use crate::transfer_details::TransferDetails;

/// The wizard's steps, in order.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Default,
    Serialize,
    Deserialize,
    strum::EnumIter,
    strum::EnumString,
    strum::IntoStaticStr,
    strum::Display,
    strum::EnumIs,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum TransferStep {
    #[default]
    AssetSelection,
    SafetyScan,
    TestTransfer,
    EmailVerification,
    LinkSharing,
}

impl TransferStep {
    pub const COUNT: usize = 5;

    pub fn index(&self) -> usize {
        match self {
            Self::AssetSelection => 0,
            Self::SafetyScan => 1,
            Self::TestTransfer => 2,
            Self::EmailVerification => 3,
            Self::LinkSharing => 4,
        }
    }

    pub fn next(&self) -> Option<Self> {
        Self::iter().nth(self.index() + 1)
    }

    pub fn previous(&self) -> Option<Self> {
        self.index().checked_sub(1).and_then(|i| Self::iter().nth(i))
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::AssetSelection => "Select Asset",
            Self::SafetyScan => "Safety Scan",
            Self::TestTransfer => "Test Transfer",
            Self::EmailVerification => "Verify Email",
            Self::LinkSharing => "Share Link",
        }
    }
}

/// The result a step hands to the controller when it completes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum StepOutput {
    RouteConfirmed(RouteSelection),
    ScanAcknowledged,
    TransferSent(TransferDetails),
    EmailVerified { email: String },
    LinkShared,
}

impl StepOutput {
    /// The step that produces this output.
    pub fn step(&self) -> TransferStep {
        match self {
            Self::RouteConfirmed(_) => TransferStep::AssetSelection,
            Self::ScanAcknowledged => TransferStep::SafetyScan,
            Self::TransferSent(_) => TransferStep::TestTransfer,
            Self::EmailVerified { .. } => TransferStep::EmailVerification,
            Self::LinkShared => TransferStep::LinkSharing,
        }
    }
}

/// The outcome of a call to [`WizardState::advance`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Advanced { from: TransferStep, to: TransferStep },
    /// Prerequisites of the active step were missing.
    Redirected { to: TransferStep },
    /// The final step finished; the caller should leave the wizard.
    Completed,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WizardError {
    #[error("the {received} step cannot complete the active {expected} step")]
    StepMismatch {
        expected: TransferStep,
        received: TransferStep,
    },
    #[error("transfer details belong to a different route")]
    RouteMismatch,
}

/// Cross-step state of one wizard session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WizardState {
    step: TransferStep,
    route: Option<RouteSelection>,
    details: Option<TransferDetails>,
    verified_email: Option<String>,
}

impl WizardState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enters at an arbitrary step, e.g. from a deep link. The next
    /// `advance` redirects if that step's data is missing.
    pub fn resume_at(step: TransferStep) -> Self {
        Self {
            step,
            ..Self::default()
        }
    }

    pub fn step(&self) -> TransferStep {
        self.step
    }

    pub fn route(&self) -> Option<&RouteSelection> {
        self.route.as_ref()
    }

    pub fn asset(&self) -> Option<Asset> {
        self.route.as_ref().map(RouteSelection::asset)
    }

    pub fn chain(&self) -> Option<Chain> {
        self.route.as_ref().map(RouteSelection::chain)
    }

    pub fn details(&self) -> Option<&TransferDetails> {
        self.details.as_ref()
    }

    pub fn verified_email(&self) -> Option<&str> {
        self.verified_email.as_deref()
    }

    /// `(index + 1) / step count`, always in `(0, 1]`.
    pub fn progress_fraction(&self) -> f64 {
        (self.step.index() + 1) as f64 / TransferStep::COUNT as f64
    }

    /// The earliest step that must be redone before the active step can
    /// run, or `None` if everything it needs is present.
    pub fn missing_prerequisite(&self) -> Option<TransferStep> {
        let step = self.step;
        if step > TransferStep::AssetSelection && self.route.is_none() {
            return Some(TransferStep::AssetSelection);
        }
        if step > TransferStep::TestTransfer && self.details.is_none() {
            return Some(TransferStep::TestTransfer);
        }
        if step > TransferStep::EmailVerification && self.verified_email.is_none() {
            return Some(TransferStep::EmailVerification);
        }
        None
    }

    /// Moves back to the earliest step with missing data, if any.
    pub fn restore_prerequisites(&mut self) -> Option<Transition> {
        let to = self.missing_prerequisite()?;
        warn!("{} is missing its prerequisites; redirecting to {}", self.step, to);
        self.step = to;
        Some(Transition::Redirected { to })
    }

    /// Merges `output` and moves to the next step.
    ///
    /// On error the state is left untouched.
    pub fn advance(&mut self, output: StepOutput) -> Result<Transition, WizardError> {
        if let Some(redirect) = self.restore_prerequisites() {
            return Ok(redirect);
        }

        let received = output.step();
        if received != self.step {
            warn!("rejected {received} output while on {}", self.step);
            return Err(WizardError::StepMismatch {
                expected: self.step,
                received,
            });
        }

        match output {
            StepOutput::RouteConfirmed(route) => {
                if self.route.as_ref() != Some(&route) {
                    self.details = None;
                    self.verified_email = None;
                }
                info!(
                    "route set: {} on {} to {}",
                    route.asset(),
                    route.chain(),
                    abbreviate_address(route.address())
                );
                self.route = Some(route);
            }
            StepOutput::ScanAcknowledged => {}
            StepOutput::TransferSent(details) => {
                if self.route.as_ref() != Some(details.route()) {
                    warn!("rejected transfer details for another route");
                    return Err(WizardError::RouteMismatch);
                }
                if self.details.as_ref() != Some(&details) {
                    self.verified_email = None;
                }
                self.details = Some(details);
            }
            StepOutput::EmailVerified { email } => {
                self.verified_email = Some(email);
            }
            StepOutput::LinkShared => {}
        }

        match self.step.next() {
            Some(to) => {
                let from = self.step;
                self.step = to;
                info!("wizard advanced from {from} to {to}");
                Ok(Transition::Advanced { from, to })
            }
            None => {
                info!("wizard completed");
                Ok(Transition::Completed)
            }
        }
    }

    /// Steps back once, keeping everything collected so far. Returns `false`
    /// on the first step.
    pub fn retreat(&mut self) -> bool {
        match self.step.previous() {
            Some(previous) => {
                info!("wizard retreated from {} to {previous}", self.step);
                self.step = previous;
                true
            }
            None => false,
        }
    }
}
