//! Row structs mirroring the persisted talent schema.
//!
//! `talents` is the aggregate root; every other table hangs off it via
//! `talent_id`. These are storage shapes only — the external JSON contract
//! lives in `talent::projection`.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct TalentRow {
    pub id: i32,
    pub first_name: String,
    pub middle_name: Option<String>,
    pub last_name: String,
    pub home_phone: Option<String>,
    pub work_phone: Option<String>,
    pub mobile_phone: Option<String>,
    pub page_number: Option<String>,
    pub email_address: String,
    pub email_address2: Option<String>,
    pub tax_id_number: Option<String>,
    pub birthday: Option<NaiveDate>,
    pub gender: String,
    pub hire_date: Option<NaiveDate>,
    pub status: String,
    pub filing_status: Option<String>,
    pub federal_allowances: Option<i32>,
    pub state_allowances: Option<i32>,
    pub additional_federal_withholding: Option<f64>,
    pub i9_validated_date: Option<NaiveDate>,
    pub front_office_id: Option<i32>,
    pub latest_activity_date: Option<DateTime<Utc>>,
    pub latest_activity_name: Option<String>,
    pub link: Option<String>,
    pub race: Option<String>,
    pub disability: Option<String>,
    pub veteran_status: Option<String>,
    pub email_opt_out: Option<bool>,
    pub is_archived: Option<bool>,
    pub placement_status: Option<String>,
    pub representative_user: Option<i32>,
    pub w2_consent: Option<bool>,
    pub electronic_1095c_consent: Option<bool>,
    pub referred_by: Option<String>,
    pub availability_date: Option<NaiveDate>,
    pub status_id: Option<i32>,
    pub office_name: Option<String>,
    pub office_division: Option<String>,
    pub entered_by_user_id: Option<i32>,
    pub entered_by_user: Option<String>,
    pub representative_user_email: Option<String>,
    pub created_date: Option<DateTime<Utc>>,
    pub last_updated_date: Option<DateTime<Utc>>,
    pub latest_work: Option<String>,
    pub last_contacted: Option<DateTime<Utc>>,
    pub flag: Option<String>,
    pub origin: Option<String>,
    pub origin_record_id: Option<String>,
    pub electronic_1099_consent: Option<bool>,
    pub text_consent: Option<String>,
    pub rehire_date: Option<NaiveDate>,
    pub termination_date: Option<NaiveDate>,
    pub employment_type_id: Option<i32>,
    pub employment_type: Option<String>,
    pub employment_type_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct AddressRow {
    pub id: i32,
    pub talent_id: i32,
    /// `resident`, `mailing`, `payroll`, or unclassified.
    #[sqlx(rename = "type")]
    pub address_type: Option<String>,
    pub street1: String,
    pub street2: Option<String>,
    pub city: String,
    pub state_province: String,
    pub postal_code: String,
    pub country: String,
    pub county: Option<String>,
    /// Populated out-of-band, never by the seeding tool.
    pub geo_code: Option<String>,
    pub school_district_code: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct SkillRow {
    pub id: i32,
    pub talent_id: i32,
    pub position_id: Option<i32>,
    pub description_id: Option<i32>,
    pub skill_position: String,
    pub skill_description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct WorkHistoryRow {
    pub id: i32,
    pub talent_id: i32,
    pub company: String,
    pub title: String,
    pub from_date: NaiveDate,
    /// None means "current position".
    pub to_date: Option<NaiveDate>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    pub duties: Option<String>,
    pub reason_for_leaving: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct TalentResumeRow {
    pub resume_id: i32,
    pub talent_id: i32,
    pub resume_filename: String,
    pub resume_text: Option<String>,
    /// Decoded bytes. Base64 encoding happens once, at the projection boundary.
    pub resume_contents: Option<Vec<u8>>,
    pub created_date: DateTime<Utc>,
    pub last_updated_date: DateTime<Utc>,
}
