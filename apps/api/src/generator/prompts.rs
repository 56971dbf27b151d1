//! Prompt constants for the seeding tool's generation calls.

/// System prompt for profile generation — enforces JSON-only output.
pub const PROFILE_SYSTEM: &str =
    "You are a helpful assistant that generates realistic talent profiles. \
    Return only valid JSON, no other text.";

/// Schema the profile call must follow. The field names line up one-to-one
/// with the talent tables.
const PROFILE_SCHEMA: &str = r#"Generate a realistic talent profile with the following fields in JSON format. Return ONLY the JSON object, no other text:
{
    "first_name": "string",
    "middle_name": "string or null",
    "last_name": "string",
    "home_phone": "XXX-XXX-XXXX",
    "work_phone": "XXX-XXX-XXXX",
    "mobile_phone": "XXX-XXX-XXXX",
    "email_address": "email@example.com",
    "tax_id_number": "XXX-XX-XXXX",
    "birthday": "YYYY-MM-DD",
    "gender": "male/female/other",
    "hire_date": "YYYY-MM-DD",
    "status": "active/inactive",
    "filing_status": "single/married/head of household",
    "federal_allowances": number,
    "state_allowances": number,
    "race": "white/black/asian/hispanic/other",
    "disability": "yes/no",
    "veteran_status": "yes/no",
    "placement_status": "available/placed/not_available",
    "office_name": "string",
    "employment_type": "full-time/part-time/contract",
    "addresses": [
        {
            "type": "resident",
            "street1": "string",
            "street2": "string or null",
            "city": "string",
            "state_province": "string",
            "postal_code": "string",
            "country": "USA",
            "county": "string"
        },
        {
            "type": "mailing",
            "street1": "string",
            "street2": "string or null",
            "city": "string",
            "state_province": "string",
            "postal_code": "string",
            "country": "USA",
            "county": "string"
        }
    ],
    "skills": [
        {
            "position_id": number,
            "description_id": number,
            "skill_position": "string",
            "skill_description": "string"
        }
    ],
    "work_history": [
        {
            "company": "string",
            "title": "string",
            "from_date": "YYYY-MM-DD",
            "to_date": "YYYY-MM-DD or null for current position",
            "city": "string",
            "state": "string",
            "country": "USA",
            "duties": "string",
            "reason_for_leaving": "string",
            "notes": "string or null"
        }
    ]
}"#;

const PROFILE_GUIDANCE: &str = " Make it realistic and diverse. \
For addresses, use real US cities and states. \
For skills, generate 3-5 realistic professional skills that match the talent's profile. \
Each skill should have a position (like 'Software Developer', 'Project Manager', etc.) \
and a detailed description of their expertise in that area. \
For work history, generate 2-4 previous positions that show career progression and are \
relevant to the talent's profile. Include detailed duties and realistic reasons for \
leaving each position.";

/// Assembles the profile prompt, optionally steered by a natural-language hint.
pub fn profile_prompt(hint: Option<&str>) -> String {
    let mut prompt = String::new();
    if let Some(hint) = hint {
        prompt.push_str(&format!(
            "Generate a talent profile that matches this description: \"{hint}\". "
        ));
    }
    prompt.push_str(PROFILE_SCHEMA);
    prompt.push_str(PROFILE_GUIDANCE);
    prompt
}

/// System prompt for resume generation.
pub const RESUME_SYSTEM: &str =
    "You are a professional resume writer. Generate a detailed, well-formatted \
    resume based on the provided talent profile.";

/// Resume prompt template. The profile JSON is appended at the end.
const RESUME_TEMPLATE: &str = r#"Generate a detailed professional resume (5000-6000 characters) for the following talent profile. The resume should be formatted as plain text and include all the information provided. Make sure to:
1. Use the exact contact information provided
2. Include a detailed professional summary
3. List all skills with detailed descriptions
4. Include comprehensive work history with detailed achievements and responsibilities
5. Add relevant education and certifications
6. Include any relevant professional affiliations or memberships
7. Add a section for notable achievements or awards
8. Include any relevant volunteer work or community involvement

Here is the talent profile to use:
"#;

pub fn resume_prompt(profile_json: &str) -> String {
    format!("{RESUME_TEMPLATE}{profile_json}")
}
