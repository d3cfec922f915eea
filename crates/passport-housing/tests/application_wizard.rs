//! End-to-end scenarios for the rental application wizard, driven the
//! way the form drives it: pre-fill from a property page, edit step by
//! step, advance, and submit through a delivery port.

mod common {
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;
    use chrono::NaiveDate;

    use passport_housing::catalog::Catalog;
    use passport_housing::wizard::{FormSubmission, SubmissionOutcome, SubmissionPort};

    pub(super) fn catalog() -> Arc<Catalog> {
        Arc::new(Catalog::standard())
    }

    pub(super) fn august_move_in() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 15).expect("valid date")
    }

    /// Instantly-resolving port that keeps every payload it accepts.
    #[derive(Default)]
    pub(super) struct CapturePort {
        accepted: Mutex<Vec<FormSubmission>>,
    }

    impl CapturePort {
        pub(super) fn accepted(&self) -> Vec<FormSubmission> {
            self.accepted.lock().expect("port mutex poisoned").clone()
        }
    }

    #[async_trait]
    impl SubmissionPort for CapturePort {
        async fn submit(&self, submission: FormSubmission) -> SubmissionOutcome {
            self.accepted
                .lock()
                .expect("port mutex poisoned")
                .push(submission);
            SubmissionOutcome::Accepted
        }
    }

    /// Port that rejects every attempt with a fixed reason.
    pub(super) struct RefusingPort;

    #[async_trait]
    impl SubmissionPort for RefusingPort {
        async fn submit(&self, _submission: FormSubmission) -> SubmissionOutcome {
            SubmissionOutcome::Rejected {
                reason: "Mailbox over quota".to_string(),
            }
        }
    }
}

mod scenarios {
    use super::common::*;
    use passport_housing::wizard::{
        ApplicationWizard, Occupation, WizardState, WizardStep,
    };

    #[tokio::test]
    async fn referral_from_a_property_page_flows_through_to_the_confirmation() {
        // Arriving from /properties/lee-road-2419 pre-fills the wizard.
        let mut wizard = ApplicationWizard::with_property(catalog(), "lee-road-2419");
        assert_eq!(wizard.current_step(), Some(WizardStep::Personal));

        {
            let draft = wizard.draft_mut().expect("draft editable");
            draft.first_name = "Priya".to_string();
            draft.last_name = "Raman".to_string();
            draft.email = "priya.raman@example.edu".to_string();
            draft.phone = "216-555-0177".to_string();
        }
        wizard.advance();

        {
            let draft = wizard.draft_mut().expect("draft editable");
            draft.current_address = "1815 Hazel Drive".to_string();
            draft.current_city = "Cleveland".to_string();
            draft.current_state = "OH".to_string();
        }
        wizard.advance();

        wizard.draft_mut().expect("draft editable").university =
            "Case Western Reserve University".to_string();
        wizard.advance();

        // The property came along from the referring page; only the
        // move-in date is still missing.
        assert_eq!(wizard.draft().preferred_property, "lee-road-2419");
        wizard.draft_mut().expect("draft editable").move_in_date = Some(august_move_in());
        wizard.advance();
        assert_eq!(wizard.current_step(), Some(WizardStep::Review));

        {
            let draft = wizard.draft_mut().expect("draft editable");
            draft.acknowledge_credit = true;
            draft.acknowledge_deposit = true;
            draft.acknowledge_accuracy = true;
        }

        let port = CapturePort::default();
        assert_eq!(wizard.submit(&port).await, WizardState::Submitted);

        let summary = wizard.submitted().expect("confirmation available");
        assert_eq!(summary.applicant_name, "Priya Raman");
        assert_eq!(summary.property_address.as_deref(), Some("2419 Lee Road"));
        assert_eq!(summary.move_in_date, Some(august_move_in()));

        let delivered = port.accepted();
        assert_eq!(delivered.len(), 1);
        assert_eq!(delivered[0].form_type, "rental-application");
    }

    #[tokio::test]
    async fn an_employed_applicant_never_sees_the_university_fields() {
        let mut wizard = ApplicationWizard::new(catalog());
        {
            let draft = wizard.draft_mut().expect("draft editable");
            draft.first_name = "Marcus".to_string();
            draft.last_name = "Bell".to_string();
            draft.email = "marcus.bell@example.com".to_string();
            draft.phone = "440-555-0101".to_string();
            draft.current_address = "77 Public Square".to_string();
            draft.current_city = "Cleveland".to_string();
            draft.current_state = "OH".to_string();
            draft.occupation = Occupation::Employed;
        }
        wizard.advance();
        wizard.advance();
        assert_eq!(wizard.current_step(), Some(WizardStep::Employment));
        assert!(!wizard.draft().shows_university_fields());

        // Gated on employer, not on any student field.
        assert_eq!(
            wizard.advance(),
            WizardState::InProgress(WizardStep::Employment)
        );
        {
            let draft = wizard.draft_mut().expect("draft editable");
            draft.employer = "University Hospitals".to_string();
            draft.monthly_income = "4800".to_string();
        }
        assert_eq!(
            wizard.advance(),
            WizardState::InProgress(WizardStep::Property)
        );
    }

    #[tokio::test]
    async fn a_rejected_delivery_leaves_the_application_recoverable() {
        let mut wizard = ApplicationWizard::with_property(catalog(), "grandview-2256");
        {
            let draft = wizard.draft_mut().expect("draft editable");
            draft.first_name = "Noor".to_string();
            draft.last_name = "Haddad".to_string();
            draft.email = "noor.haddad@example.edu".to_string();
            draft.phone = "216-555-0112".to_string();
            draft.current_address = "2020 Abington Road".to_string();
            draft.current_city = "Cleveland".to_string();
            draft.current_state = "OH".to_string();
            draft.university = "Cleveland Institute of Art".to_string();
            draft.move_in_date = Some(august_move_in());
            draft.acknowledge_credit = true;
            draft.acknowledge_deposit = true;
            draft.acknowledge_accuracy = true;
        }
        for _ in 0..4 {
            wizard.advance();
        }

        let state = wizard.submit(&RefusingPort).await;
        assert_eq!(state, WizardState::InProgress(WizardStep::Review));
        assert_eq!(wizard.last_rejection(), Some("Mailbox over quota"));

        // The draft is still live; a second attempt can go through.
        let port = CapturePort::default();
        assert_eq!(wizard.submit(&port).await, WizardState::Submitted);
        assert_eq!(
            wizard
                .submitted()
                .and_then(|summary| summary.property_address.as_deref()),
            Some("2256-58 Grandview Avenue")
        );
    }

    #[tokio::test]
    async fn an_unknown_prefilled_property_still_submits_without_an_address() {
        // The referring page's id is taken as-is; the catalog simply has
        // no address for it at confirmation time.
        let mut wizard = ApplicationWizard::with_property(catalog(), "demolished-house-1900");
        {
            let draft = wizard.draft_mut().expect("draft editable");
            draft.first_name = "Ada".to_string();
            draft.last_name = "Nowak".to_string();
            draft.email = "ada.nowak@example.edu".to_string();
            draft.phone = "216-555-0186".to_string();
            draft.current_address = "11 Bellflower Court".to_string();
            draft.current_city = "Cleveland".to_string();
            draft.current_state = "OH".to_string();
            draft.university = "Case Western Reserve University".to_string();
            draft.move_in_date = Some(august_move_in());
            draft.acknowledge_credit = true;
            draft.acknowledge_deposit = true;
            draft.acknowledge_accuracy = true;
        }
        for _ in 0..4 {
            wizard.advance();
        }

        let port = CapturePort::default();
        assert_eq!(wizard.submit(&port).await, WizardState::Submitted);
        let summary = wizard.submitted().expect("confirmation available");
        assert!(summary.property_address.is_none());
    }
}
