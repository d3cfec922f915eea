use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::submission::FormSubmission;

/// How the applicant supports themselves. Drives which employment-step
/// fields are shown and which one gates progression.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Occupation {
    #[default]
    Student,
    Employed,
    Both,
}

impl Occupation {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Student => "Student",
            Self::Employed => "Employed",
            Self::Both => "Student & Employed",
        }
    }

    /// University and graduation-year fields apply.
    pub const fn includes_student(self) -> bool {
        matches!(self, Self::Student | Self::Both)
    }

    /// Employer and income fields apply.
    pub const fn includes_employment(self) -> bool {
        matches!(self, Self::Employed | Self::Both)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaseTerm {
    Summer,
    #[default]
    TwelveMonths,
    AcademicYear,
}

impl LeaseTerm {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Summer => "Summer (June-August)",
            Self::TwelveMonths => "12 Months",
            Self::AcademicYear => "Academic Year",
        }
    }
}

/// A yes/no background question. The free-text explanation is only
/// shown (and expected) once the answer is yes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Disclosure {
    pub answer: bool,
    pub explanation: String,
}

impl Disclosure {
    pub fn explanation_applies(&self) -> bool {
        self.answer
    }
}

/// The in-progress rental application, grouped by wizard step. Created
/// empty, mutated field by field as the applicant types, and discarded
/// with the session unless it reaches submission.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ApplicationDraft {
    // Personal
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub date_of_birth: Option<NaiveDate>,

    // Current residence
    pub current_address: String,
    pub current_city: String,
    pub current_state: String,
    pub current_zip: String,
    pub current_landlord: String,
    pub current_landlord_phone: String,
    pub months_at_address: Option<u32>,
    pub reason_for_leaving: String,

    // Occupation
    pub occupation: Occupation,
    pub university: String,
    pub graduation_year: String,
    pub employer: String,
    pub employer_phone: String,
    pub monthly_income: String,

    // Desired tenancy
    pub preferred_property: String,
    pub preferred_bedrooms: Option<u32>,
    pub move_in_date: Option<NaiveDate>,
    pub lease_term: LeaseTerm,

    // Background disclosures
    pub eviction: Disclosure,
    pub foreclosure: Disclosure,
    pub pets: Disclosure,

    // Emergency contact
    pub emergency_name: String,
    pub emergency_phone: String,
    pub emergency_relation: String,

    // Additional
    pub additional_occupants: String,
    pub additional_info: String,

    // Legal acknowledgements
    pub acknowledge_credit: bool,
    pub acknowledge_deposit: bool,
    pub acknowledge_accuracy: bool,
}

impl ApplicationDraft {
    pub fn applicant_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }

    /// University/graduation fields are visible for students and
    /// student-employees.
    pub fn shows_university_fields(&self) -> bool {
        self.occupation.includes_student()
    }

    /// Employer/income fields are visible for the employed and
    /// student-employees.
    pub fn shows_employer_fields(&self) -> bool {
        self.occupation.includes_employment()
    }

    /// Flatten the draft into the wire payload for the form endpoint.
    /// The chosen property's resolved address rides along so reviewers
    /// do not have to translate the id.
    pub fn to_submission(&self, property_address: Option<&str>) -> FormSubmission {
        let mut data: BTreeMap<String, Value> = match serde_json::to_value(self) {
            Ok(Value::Object(fields)) => fields.into_iter().collect(),
            _ => BTreeMap::new(),
        };
        if let Some(address) = property_address {
            data.insert(
                "preferredPropertyAddress".to_string(),
                Value::String(address.to_string()),
            );
        }

        FormSubmission {
            form_type: "rental-application".to_string(),
            name: Some(self.applicant_name()),
            email: Some(self.email.clone()),
            phone: Some(self.phone.clone()),
            data,
        }
    }
}
