//! The Talent aggregate as handed to the transactional writer: one parent
//! record plus its owned child collections, validated up front.
//!
//! The `New*` structs double as the deserialization targets for the generator's
//! JSON payload, so loosely-typed maps never reach the writer.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewTalent {
    pub first_name: String,
    #[serde(default)]
    pub middle_name: Option<String>,
    pub last_name: String,
    #[serde(default)]
    pub home_phone: Option<String>,
    #[serde(default)]
    pub work_phone: Option<String>,
    #[serde(default)]
    pub mobile_phone: Option<String>,
    pub email_address: String,
    #[serde(default)]
    pub tax_id_number: Option<String>,
    #[serde(default)]
    pub birthday: Option<NaiveDate>,
    pub gender: String,
    #[serde(default)]
    pub hire_date: Option<NaiveDate>,
    pub status: String,
    #[serde(default)]
    pub filing_status: Option<String>,
    #[serde(default)]
    pub federal_allowances: Option<i32>,
    #[serde(default)]
    pub state_allowances: Option<i32>,
    #[serde(default)]
    pub race: Option<String>,
    #[serde(default)]
    pub disability: Option<String>,
    #[serde(default)]
    pub veteran_status: Option<String>,
    #[serde(default)]
    pub placement_status: Option<String>,
    #[serde(default)]
    pub office_name: Option<String>,
    #[serde(default)]
    pub employment_type: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewAddress {
    #[serde(rename = "type")]
    pub address_type: String,
    pub street1: String,
    #[serde(default)]
    pub street2: Option<String>,
    pub city: String,
    pub state_province: String,
    pub postal_code: String,
    pub country: String,
    #[serde(default)]
    pub county: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewSkill {
    #[serde(default)]
    pub position_id: Option<i32>,
    #[serde(default)]
    pub description_id: Option<i32>,
    pub skill_position: String,
    pub skill_description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewWorkHistory {
    pub company: String,
    pub title: String,
    pub from_date: NaiveDate,
    #[serde(default)]
    pub to_date: Option<NaiveDate>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub duties: Option<String>,
    #[serde(default)]
    pub reason_for_leaving: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NewResume {
    pub resume_filename: String,
    pub resume_text: String,
    /// Decoded bytes; stored as-is and base64-encoded only on read.
    pub resume_contents: Vec<u8>,
}

/// A fully-formed Talent aggregate, ready for a single atomic insert.
#[derive(Debug, Clone)]
pub struct TalentAggregate {
    pub talent: NewTalent,
    pub addresses: Vec<NewAddress>,
    pub skills: Vec<NewSkill>,
    pub work_history: Vec<NewWorkHistory>,
    pub resume: Option<NewResume>,
}

impl TalentAggregate {
    /// Validates completeness before anything touches storage: the mandatory
    /// scalars must be non-empty and every required child list non-empty.
    /// The read path deliberately does not enforce this — it reflects whatever
    /// storage holds.
    pub fn new(
        talent: NewTalent,
        addresses: Vec<NewAddress>,
        skills: Vec<NewSkill>,
        work_history: Vec<NewWorkHistory>,
        resume: Option<NewResume>,
    ) -> Result<Self, AppError> {
        let required = [
            ("first_name", &talent.first_name),
            ("last_name", &talent.last_name),
            ("email_address", &talent.email_address),
            ("gender", &talent.gender),
            ("status", &talent.status),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(missing(field));
            }
        }
        if addresses.is_empty() {
            return Err(missing("addresses"));
        }
        if skills.is_empty() {
            return Err(missing("skills"));
        }
        if work_history.is_empty() {
            return Err(missing("work_history"));
        }

        Ok(Self {
            talent,
            addresses,
            skills,
            work_history,
            resume,
        })
    }
}

fn missing(field: &str) -> AppError {
    AppError::Validation(format!("Missing required field: {field}"))
}
