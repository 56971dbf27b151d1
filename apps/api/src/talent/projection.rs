//! Read Projection: maps stored rows into the external JSON contract.
//!
//! The field names are the API contract, quirks included (`state_Province`,
//! `electronic1095CConsent`). Nullable numeric and boolean columns coerce to
//! `0` / `0.0` / `false` rather than `null`, matching what existing clients
//! already receive.

use base64::engine::general_purpose::STANDARD as B64;
use base64::Engine as _;
use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

use crate::models::talent::{
    AddressRow, SkillRow, TalentResumeRow, TalentRow, WorkHistoryRow,
};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressView {
    pub street1: String,
    pub street2: Option<String>,
    pub city: String,
    #[serde(rename = "state_Province")]
    pub state_province: String,
    pub postal_code: String,
    pub country: String,
    pub county: Option<String>,
    pub geo_code: Option<String>,
    pub school_district_code: Option<String>,
}

impl From<&AddressRow> for AddressView {
    fn from(row: &AddressRow) -> Self {
        Self {
            street1: row.street1.clone(),
            street2: row.street2.clone(),
            city: row.city.clone(),
            state_province: row.state_province.clone(),
            postal_code: row.postal_code.clone(),
            country: row.country.clone(),
            county: row.county.clone(),
            geo_code: row.geo_code.clone(),
            school_district_code: row.school_district_code.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillView {
    pub position_id: i32,
    pub description_id: i32,
    pub skill_position: String,
    pub skill_description: String,
}

impl From<&SkillRow> for SkillView {
    fn from(row: &SkillRow) -> Self {
        Self {
            position_id: row.position_id.unwrap_or_default(),
            description_id: row.description_id.unwrap_or_default(),
            skill_position: row.skill_position.clone(),
            skill_description: row.skill_description.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkHistoryView {
    pub company: String,
    pub title: String,
    pub from_date: NaiveDate,
    pub to_date: Option<NaiveDate>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    pub duties: Option<String>,
    pub reason_for_leaving: Option<String>,
    pub notes: Option<String>,
}

impl From<&WorkHistoryRow> for WorkHistoryView {
    fn from(row: &WorkHistoryRow) -> Self {
        Self {
            company: row.company.clone(),
            title: row.title.clone(),
            from_date: row.from_date,
            to_date: row.to_date,
            city: row.city.clone(),
            state: row.state.clone(),
            country: row.country.clone(),
            duties: row.duties.clone(),
            reason_for_leaving: row.reason_for_leaving.clone(),
            notes: row.notes.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeView {
    pub resume_id: i32,
    pub resume_filename: String,
    pub resume_text: Option<String>,
    /// Base64 of the stored bytes — encoded here and nowhere else.
    pub resume_contents: Option<String>,
    pub created_date: DateTime<Utc>,
    pub last_updated_date: DateTime<Utc>,
}

impl From<&TalentResumeRow> for ResumeView {
    fn from(row: &TalentResumeRow) -> Self {
        Self {
            resume_id: row.resume_id,
            resume_filename: row.resume_filename.clone(),
            resume_text: row.resume_text.clone(),
            resume_contents: row.resume_contents.as_deref().map(|b| B64.encode(b)),
            created_date: row.created_date,
            last_updated_date: row.last_updated_date,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TalentProjection {
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
    pub resident_address: Option<AddressView>,
    pub mailing_address: Option<AddressView>,
    pub payroll_address: Option<AddressView>,
    pub addresses: Vec<AddressView>,
    pub skills: Vec<SkillView>,
    pub work_history: Vec<WorkHistoryView>,
    pub status: String,
    pub filing_status: Option<String>,
    pub federal_allowances: i32,
    pub state_allowances: i32,
    pub additional_federal_withholding: f64,
    pub i9_validated_date: Option<NaiveDate>,
    pub front_office_id: i32,
    pub latest_activity_date: Option<DateTime<Utc>>,
    pub latest_activity_name: Option<String>,
    pub link: Option<String>,
    pub race: Option<String>,
    pub disability: Option<String>,
    pub veteran_status: Option<String>,
    pub email_opt_out: bool,
    pub is_archived: bool,
    pub placement_status: Option<String>,
    pub representative_user: i32,
    pub w2_consent: bool,
    #[serde(rename = "electronic1095CConsent")]
    pub electronic_1095c_consent: bool,
    pub referred_by: Option<String>,
    pub availability_date: Option<NaiveDate>,
    pub status_id: i32,
    pub office_name: Option<String>,
    pub office_division: Option<String>,
    pub entered_by_user_id: i32,
    pub entered_by_user: Option<String>,
    pub representative_user_email: Option<String>,
    pub created_date: Option<DateTime<Utc>>,
    pub last_updated_date: Option<DateTime<Utc>>,
    pub latest_work: Option<String>,
    pub last_contacted: Option<DateTime<Utc>>,
    pub flag: Option<String>,
    pub origin: Option<String>,
    pub origin_record_id: Option<String>,
    pub electronic_1099_consent: bool,
    pub text_consent: Option<String>,
    pub rehire_date: Option<NaiveDate>,
    pub termination_date: Option<NaiveDate>,
    pub employment_type_id: i32,
    pub employment_type: Option<String>,
    pub employment_type_name: Option<String>,
    /// Only present when the caller asked for it and storage holds one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub talent_resume: Option<ResumeView>,
}

/// Builds the external representation from the five independent reads.
///
/// Addresses bucket into the three typed slots; when several rows share a type,
/// the last one in storage order wins — callers should not rely on this when
/// duplicates exist. The unfiltered list is exposed alongside. Work history
/// comes back newest-from-date first.
pub fn project_talent(
    talent: TalentRow,
    addresses: Vec<AddressRow>,
    skills: Vec<SkillRow>,
    mut work_history: Vec<WorkHistoryRow>,
    resume: Option<TalentResumeRow>,
) -> TalentProjection {
    let mut resident_address = None;
    let mut mailing_address = None;
    let mut payroll_address = None;
    for address in &addresses {
        match address.address_type.as_deref() {
            Some("resident") => resident_address = Some(AddressView::from(address)),
            Some("mailing") => mailing_address = Some(AddressView::from(address)),
            Some("payroll") => payroll_address = Some(AddressView::from(address)),
            _ => {}
        }
    }

    work_history.sort_by(|a, b| b.from_date.cmp(&a.from_date));

    TalentProjection {
        id: talent.id,
        first_name: talent.first_name,
        middle_name: talent.middle_name,
        last_name: talent.last_name,
        home_phone: talent.home_phone,
        work_phone: talent.work_phone,
        mobile_phone: talent.mobile_phone,
        page_number: talent.page_number,
        email_address: talent.email_address,
        email_address2: talent.email_address2,
        tax_id_number: talent.tax_id_number,
        birthday: talent.birthday,
        gender: talent.gender,
        hire_date: talent.hire_date,
        resident_address,
        mailing_address,
        payroll_address,
        addresses: addresses.iter().map(AddressView::from).collect(),
        skills: skills.iter().map(SkillView::from).collect(),
        work_history: work_history.iter().map(WorkHistoryView::from).collect(),
        status: talent.status,
        filing_status: talent.filing_status,
        federal_allowances: talent.federal_allowances.unwrap_or_default(),
        state_allowances: talent.state_allowances.unwrap_or_default(),
        additional_federal_withholding: talent
            .additional_federal_withholding
            .unwrap_or_default(),
        i9_validated_date: talent.i9_validated_date,
        front_office_id: talent.front_office_id.unwrap_or_default(),
        latest_activity_date: talent.latest_activity_date,
        latest_activity_name: talent.latest_activity_name,
        link: talent.link,
        race: talent.race,
        disability: talent.disability,
        veteran_status: talent.veteran_status,
        email_opt_out: talent.email_opt_out.unwrap_or_default(),
        is_archived: talent.is_archived.unwrap_or_default(),
        placement_status: talent.placement_status,
        representative_user: talent.representative_user.unwrap_or_default(),
        w2_consent: talent.w2_consent.unwrap_or_default(),
        electronic_1095c_consent: talent.electronic_1095c_consent.unwrap_or_default(),
        referred_by: talent.referred_by,
        availability_date: talent.availability_date,
        status_id: talent.status_id.unwrap_or_default(),
        office_name: talent.office_name,
        office_division: talent.office_division,
        entered_by_user_id: talent.entered_by_user_id.unwrap_or_default(),
        entered_by_user: talent.entered_by_user,
        representative_user_email: talent.representative_user_email,
        created_date: talent.created_date,
        last_updated_date: talent.last_updated_date,
        latest_work: talent.latest_work,
        last_contacted: talent.last_contacted,
        flag: talent.flag,
        origin: talent.origin,
        origin_record_id: talent.origin_record_id,
        electronic_1099_consent: talent.electronic_1099_consent.unwrap_or_default(),
        text_consent: talent.text_consent,
        rehire_date: talent.rehire_date,
        termination_date: talent.termination_date,
        employment_type_id: talent.employment_type_id.unwrap_or_default(),
        employment_type: talent.employment_type,
        employment_type_name: talent.employment_type_name,
        talent_resume: resume.as_ref().map(ResumeView::from),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn talent_row(id: i32) -> TalentRow {
        TalentRow {
            id,
            first_name: "Grace".to_string(),
            middle_name: None,
            last_name: "Hopper".to_string(),
            home_phone: None,
            work_phone: None,
            mobile_phone: None,
            page_number: None,
            email_address: "grace@example.com".to_string(),
            email_address2: None,
            tax_id_number: None,
            birthday: None,
            gender: "female".to_string(),
            hire_date: None,
            status: "active".to_string(),
            filing_status: None,
            federal_allowances: None,
            state_allowances: Some(2),
            additional_federal_withholding: None,
            i9_validated_date: None,
            front_office_id: None,
            latest_activity_date: None,
            latest_activity_name: None,
            link: None,
            race: None,
            disability: None,
            veteran_status: None,
            email_opt_out: None,
            is_archived: Some(false),
            placement_status: None,
            representative_user: None,
            w2_consent: None,
            electronic_1095c_consent: Some(true),
            referred_by: None,
            availability_date: None,
            status_id: None,
            office_name: None,
            office_division: None,
            entered_by_user_id: None,
            entered_by_user: None,
            representative_user_email: None,
            created_date: None,
            last_updated_date: None,
            latest_work: None,
            last_contacted: None,
            flag: None,
            origin: None,
            origin_record_id: None,
            electronic_1099_consent: None,
            text_consent: None,
            rehire_date: None,
            termination_date: None,
            employment_type_id: None,
            employment_type: None,
            employment_type_name: None,
        }
    }

    fn address_row(id: i32, address_type: &str, street1: &str) -> AddressRow {
        AddressRow {
            id,
            talent_id: 1,
            address_type: Some(address_type.to_string()),
            street1: street1.to_string(),
            street2: None,
            city: "Austin".to_string(),
            state_province: "TX".to_string(),
            postal_code: "73301".to_string(),
            country: "USA".to_string(),
            county: None,
            geo_code: None,
            school_district_code: None,
        }
    }

    fn work_row(id: i32, from_date: NaiveDate) -> WorkHistoryRow {
        WorkHistoryRow {
            id,
            talent_id: 1,
            company: "Navy".to_string(),
            title: "Engineer".to_string(),
            from_date,
            to_date: None,
            city: None,
            state: None,
            country: None,
            duties: None,
            reason_for_leaving: None,
            notes: None,
        }
    }

    #[test]
    fn id_matches_requested_row() {
        let projection = project_talent(talent_row(42), vec![], vec![], vec![], None);
        assert_eq!(projection.id, 42);
    }

    #[test]
    fn later_duplicate_address_type_wins_but_list_keeps_all() {
        let addresses = vec![
            address_row(1, "resident", "1 First St"),
            address_row(2, "mailing", "2 Second St"),
            address_row(3, "payroll", "3 Third St"),
            address_row(4, "payroll", "4 Fourth St"),
        ];
        let projection = project_talent(talent_row(1), addresses, vec![], vec![], None);

        assert_eq!(projection.payroll_address.unwrap().street1, "4 Fourth St");
        assert_eq!(projection.resident_address.unwrap().street1, "1 First St");
        assert_eq!(projection.mailing_address.unwrap().street1, "2 Second St");
        assert_eq!(projection.addresses.len(), 4);
    }

    #[test]
    fn unclassified_address_type_fills_no_slot() {
        let addresses = vec![address_row(1, "vacation", "9 Elsewhere")];
        let projection = project_talent(talent_row(1), addresses, vec![], vec![], None);
        assert!(projection.resident_address.is_none());
        assert!(projection.mailing_address.is_none());
        assert!(projection.payroll_address.is_none());
        assert_eq!(projection.addresses.len(), 1);
    }

    #[test]
    fn work_history_is_sorted_newest_first() {
        let history = vec![
            work_row(1, NaiveDate::from_ymd_opt(2019, 1, 1).unwrap()),
            work_row(2, NaiveDate::from_ymd_opt(2022, 6, 1).unwrap()),
            work_row(3, NaiveDate::from_ymd_opt(2020, 3, 15).unwrap()),
        ];
        let projection = project_talent(talent_row(1), vec![], vec![], history, None);
        let dates: Vec<NaiveDate> = projection
            .work_history
            .iter()
            .map(|w| w.from_date)
            .collect();
        assert_eq!(
            dates,
            vec![
                NaiveDate::from_ymd_opt(2022, 6, 1).unwrap(),
                NaiveDate::from_ymd_opt(2020, 3, 15).unwrap(),
                NaiveDate::from_ymd_opt(2019, 1, 1).unwrap(),
            ]
        );
    }

    #[test]
    fn null_numeric_and_boolean_columns_coerce_to_defaults() {
        let projection = project_talent(talent_row(1), vec![], vec![], vec![], None);
        assert_eq!(projection.federal_allowances, 0);
        assert_eq!(projection.state_allowances, 2);
        assert_eq!(projection.additional_federal_withholding, 0.0);
        assert!(!projection.email_opt_out);
        assert!(projection.electronic_1095c_consent);
    }

    #[test]
    fn resume_is_absent_unless_provided() {
        let projection = project_talent(talent_row(1), vec![], vec![], vec![], None);
        let json = serde_json::to_value(&projection).unwrap();
        assert!(json.get("talentResume").is_none());
    }

    #[test]
    fn resume_view_encodes_contents_once() {
        let created = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let resume = TalentResumeRow {
            resume_id: 7,
            talent_id: 1,
            resume_filename: "grace_hopper_resume.txt".to_string(),
            resume_text: Some("COBOL pioneer".to_string()),
            resume_contents: Some(b"COBOL pioneer".to_vec()),
            created_date: created,
            last_updated_date: created,
        };
        let projection = project_talent(talent_row(1), vec![], vec![], vec![], Some(resume));
        let view = projection.talent_resume.unwrap();
        assert_eq!(view.resume_id, 7);
        assert_eq!(view.resume_contents.as_deref(), Some("Q09CT0wgcGlvbmVlcg=="));
    }

    #[test]
    fn serialized_field_names_match_the_contract() {
        let addresses = vec![address_row(1, "resident", "1 First St")];
        let projection = project_talent(talent_row(1), addresses, vec![], vec![], None);
        let json = serde_json::to_value(&projection).unwrap();

        assert!(json.get("firstName").is_some());
        assert!(json.get("emailAddress2").is_some());
        assert!(json.get("i9ValidatedDate").is_some());
        assert!(json.get("electronic1095CConsent").is_some());
        assert!(json.get("electronic1099Consent").is_some());
        assert!(json.get("w2Consent").is_some());

        let resident = json.get("residentAddress").unwrap();
        assert!(resident.get("state_Province").is_some());
        assert!(resident.get("postalCode").is_some());
        assert!(resident.get("schoolDistrictCode").is_some());
    }
}
