use std::sync::Arc;
use std::time::Duration;

use chrono::NaiveDate;
use clap::Args;

use crate::infra::InMemorySubmissionSink;
use passport_housing::catalog::Catalog;
use passport_housing::error::AppError;
use passport_housing::wizard::{ApplicationWizard, WizardState, WizardStep};

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Property id to pre-fill, as if arriving from its detail page.
    #[arg(long, default_value = "lee-road-2419")]
    pub(crate) property: String,
    /// Desired move-in date (YYYY-MM-DD). Defaults to 2026-08-01.
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) move_in: Option<NaiveDate>,
    /// Simulated backend delay in milliseconds.
    #[arg(long, default_value_t = 1500)]
    pub(crate) delay_ms: u64,
}

pub(crate) async fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        property,
        move_in,
        delay_ms,
    } = args;

    let move_in =
        move_in.unwrap_or_else(|| NaiveDate::from_ymd_opt(2026, 8, 1).expect("valid date"));

    let catalog = Arc::new(Catalog::standard());
    println!("Passport Student Housing application demo");
    println!(
        "Portfolio: {} properties | {} bedrooms total | {} featured | {} summer sublets ({} bedrooms)",
        catalog.properties().len(),
        catalog.total_bedrooms(),
        catalog.featured().len(),
        catalog.summer_sublets().len(),
        catalog.summer_sublet_bedrooms()
    );

    let mut wizard = ApplicationWizard::with_property(catalog.clone(), property.clone());
    match catalog.property_by_id(&property) {
        Some(found) => println!(
            "Pre-filled from {} ({}, {})",
            found.id, found.address, found.city
        ),
        None => println!("Pre-filled property {property} is not in the catalog"),
    }

    print_step(&wizard);
    {
        let draft = wizard.draft_mut().expect("draft editable");
        draft.first_name = "Dana".to_string();
        draft.last_name = "Okafor".to_string();
        draft.email = "dana.okafor@example.edu".to_string();
        draft.phone = "216-555-0142".to_string();
    }
    wizard.advance();

    print_step(&wizard);
    {
        let draft = wizard.draft_mut().expect("draft editable");
        draft.current_address = "11900 Carlton Road".to_string();
        draft.current_city = "Cleveland".to_string();
        draft.current_state = "OH".to_string();
        draft.reason_for_leaving = "Closer to campus".to_string();
    }
    wizard.advance();

    print_step(&wizard);
    {
        let draft = wizard.draft_mut().expect("draft editable");
        draft.university = "Case Western Reserve University".to_string();
        draft.graduation_year = "2027".to_string();
    }
    wizard.advance();

    print_step(&wizard);
    {
        let draft = wizard.draft_mut().expect("draft editable");
        draft.move_in_date = Some(move_in);
    }
    wizard.advance();

    print_step(&wizard);
    {
        let draft = wizard.draft_mut().expect("draft editable");
        draft.acknowledge_credit = true;
        draft.acknowledge_deposit = true;
        draft.acknowledge_accuracy = true;
    }

    println!("Submitting through the in-memory backend ({delay_ms} ms delay)...");
    let port = InMemorySubmissionSink::with_delay(Duration::from_millis(delay_ms));
    let state = wizard.submit(&port).await;

    match state {
        WizardState::Submitted => {
            let summary = wizard.submitted().expect("confirmation available");
            println!("Application submitted.");
            match serde_json::to_string_pretty(summary) {
                Ok(json) => println!("Confirmation payload:\n{json}"),
                Err(err) => println!("Confirmation payload unavailable: {err}"),
            }
            if let Some(delivered) = port.received().first() {
                println!(
                    "Delivered form type: {} ({} data fields)",
                    delivered.form_type,
                    delivered.data.len()
                );
            }
        }
        other => {
            println!("Submission did not complete (state {other:?})");
            if let Some(reason) = wizard.last_rejection() {
                println!("Rejection reason: {reason}");
            }
        }
    }

    Ok(())
}

fn print_step(wizard: &ApplicationWizard) {
    if let Some(step) = wizard.current_step() {
        println!(
            "Step {}/{}: {}",
            step.number(),
            WizardStep::ordered().len(),
            step.label()
        );
    }
}
