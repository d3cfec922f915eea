use std::sync::Arc;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;

use super::draft::{ApplicationDraft, Occupation};
use super::submission::{SubmissionOutcome, SubmissionPort};

/// The five form steps, in wizard order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    Personal,
    Address,
    Employment,
    Property,
    Review,
}

impl WizardStep {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::Personal,
            Self::Address,
            Self::Employment,
            Self::Property,
            Self::Review,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Personal => "Personal",
            Self::Address => "Address",
            Self::Employment => "Employment",
            Self::Property => "Property",
            Self::Review => "Review",
        }
    }

    /// One-based position shown in the progress indicator.
    pub const fn number(self) -> u8 {
        match self {
            Self::Personal => 1,
            Self::Address => 2,
            Self::Employment => 3,
            Self::Property => 4,
            Self::Review => 5,
        }
    }

    const fn following(self) -> Option<Self> {
        match self {
            Self::Personal => Some(Self::Address),
            Self::Address => Some(Self::Employment),
            Self::Employment => Some(Self::Property),
            Self::Property => Some(Self::Review),
            Self::Review => None,
        }
    }

    const fn preceding(self) -> Option<Self> {
        match self {
            Self::Personal => None,
            Self::Address => Some(Self::Personal),
            Self::Employment => Some(Self::Address),
            Self::Property => Some(Self::Employment),
            Self::Review => Some(Self::Property),
        }
    }
}

/// Where the wizard is in its lifecycle. `Submitted` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardState {
    InProgress(WizardStep),
    Submitting,
    Submitted,
}

/// Entry in the property picklist, labeled the way the listing page
/// shows it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PropertyChoice {
    pub id: String,
    pub label: String,
}

/// Immutable confirmation view once the application has gone out. Only
/// this display subset of the draft survives submission.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubmittedApplication {
    pub applicant_name: String,
    pub email: String,
    pub phone: String,
    pub move_in_date: Option<NaiveDate>,
    pub property_address: Option<String>,
}

/// Single-session state machine behind the application form. Holds the
/// draft, gates step progression on per-step completeness, and hands
/// the finished draft to a [`SubmissionPort`].
///
/// Invalid transitions are deliberate no-ops: the UI disables the
/// control instead of handling an error.
pub struct ApplicationWizard {
    catalog: Arc<Catalog>,
    draft: ApplicationDraft,
    state: WizardState,
    last_rejection: Option<String>,
    submitted: Option<SubmittedApplication>,
}

impl ApplicationWizard {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            catalog,
            draft: ApplicationDraft::default(),
            state: WizardState::InProgress(WizardStep::Personal),
            last_rejection: None,
            submitted: None,
        }
    }

    /// Start with the preferred property pre-filled, as when the
    /// applicant arrives from a property-detail page. The id is taken
    /// as-is; an unknown id simply resolves to no address later.
    pub fn with_property(catalog: Arc<Catalog>, property_id: impl Into<String>) -> Self {
        let mut wizard = Self::new(catalog);
        wizard.draft.preferred_property = property_id.into();
        wizard
    }

    pub fn state(&self) -> WizardState {
        self.state
    }

    pub fn current_step(&self) -> Option<WizardStep> {
        match self.state {
            WizardState::InProgress(step) => Some(step),
            WizardState::Submitting | WizardState::Submitted => None,
        }
    }

    pub fn draft(&self) -> &ApplicationDraft {
        &self.draft
    }

    /// Mutable access to the draft while the form is still open. Once
    /// submission starts the draft is frozen.
    pub fn draft_mut(&mut self) -> Option<&mut ApplicationDraft> {
        match self.state {
            WizardState::InProgress(_) => Some(&mut self.draft),
            WizardState::Submitting | WizardState::Submitted => None,
        }
    }

    /// The property picklist for the tenancy step, in catalog order.
    pub fn property_choices(&self) -> Vec<PropertyChoice> {
        self.catalog
            .properties()
            .iter()
            .map(|property| PropertyChoice {
                id: property.id.clone(),
                label: format!("{}, {}", property.address, property.city),
            })
            .collect()
    }

    /// Required-field check for one step, evaluated against the current
    /// draft. Required means non-empty; no format validation.
    pub fn step_complete(&self, step: WizardStep) -> bool {
        let draft = &self.draft;
        match step {
            WizardStep::Personal => [
                &draft.first_name,
                &draft.last_name,
                &draft.email,
                &draft.phone,
            ]
            .iter()
            .all(|field| !field.is_empty()),
            WizardStep::Address => [
                &draft.current_address,
                &draft.current_city,
                &draft.current_state,
            ]
            .iter()
            .all(|field| !field.is_empty()),
            // Single-branch check: students gate on university, everyone
            // else (employed or student-and-employed) on employer.
            WizardStep::Employment => match draft.occupation {
                Occupation::Student => !draft.university.is_empty(),
                Occupation::Employed | Occupation::Both => !draft.employer.is_empty(),
            },
            WizardStep::Property => {
                !draft.preferred_property.is_empty() && draft.move_in_date.is_some()
            }
            WizardStep::Review => {
                draft.acknowledge_credit && draft.acknowledge_deposit && draft.acknowledge_accuracy
            }
        }
    }

    /// Move forward one step. A no-op when the current step is
    /// incomplete, at the review step, or outside `InProgress`.
    pub fn advance(&mut self) -> WizardState {
        if let WizardState::InProgress(step) = self.state {
            if let Some(next) = step.following() {
                if self.step_complete(step) {
                    self.state = WizardState::InProgress(next);
                }
            }
        }
        self.state
    }

    /// Move back one step, unconditionally. A no-op at the first step
    /// and outside `InProgress`.
    pub fn retreat(&mut self) -> WizardState {
        if let WizardState::InProgress(step) = self.state {
            if let Some(previous) = step.preceding() {
                self.state = WizardState::InProgress(previous);
            }
        }
        self.state
    }

    /// Submit the application through the delivery port. Only allowed
    /// from a complete review step; anywhere else this is a no-op.
    ///
    /// The wizard sits in `Submitting` until the port resolves. An
    /// accepted application freezes the draft and moves to `Submitted`;
    /// a rejected one reopens the review step with the reason recorded
    /// so the applicant can try again.
    pub async fn submit(&mut self, port: &dyn SubmissionPort) -> WizardState {
        match self.state {
            WizardState::InProgress(WizardStep::Review)
                if self.step_complete(WizardStep::Review) => {}
            _ => return self.state,
        }

        self.state = WizardState::Submitting;
        let property_address = self
            .catalog
            .property_by_id(&self.draft.preferred_property)
            .map(|property| property.address.clone());
        let submission = self.draft.to_submission(property_address.as_deref());

        match port.submit(submission).await {
            SubmissionOutcome::Accepted => {
                self.last_rejection = None;
                self.submitted = Some(SubmittedApplication {
                    applicant_name: self.draft.applicant_name(),
                    email: self.draft.email.clone(),
                    phone: self.draft.phone.clone(),
                    move_in_date: self.draft.move_in_date,
                    property_address,
                });
                self.state = WizardState::Submitted;
            }
            SubmissionOutcome::Rejected { reason } => {
                self.last_rejection = Some(reason);
                self.state = WizardState::InProgress(WizardStep::Review);
            }
        }

        self.state
    }

    /// Reason the most recent delivery attempt was rejected, if any.
    pub fn last_rejection(&self) -> Option<&str> {
        self.last_rejection.as_deref()
    }

    /// The confirmation view, available once `Submitted`.
    pub fn submitted(&self) -> Option<&SubmittedApplication> {
        self.submitted.as_ref()
    }
}
