//! Transactional Writer: inserts one fully-formed Talent aggregate atomically.
//!
//! Parent row first (capturing the generated id), then each child collection,
//! then the optional resume. Everything runs inside one transaction; any
//! failure drops the transaction, which rolls back the whole aggregate.

use sqlx::PgPool;
use tracing::debug;

use crate::errors::AppError;
use crate::talent::aggregate::TalentAggregate;

const INSERT_TALENT: &str = "\
    INSERT INTO talents (
        first_name, middle_name, last_name, home_phone, work_phone, mobile_phone,
        email_address, tax_id_number, birthday, gender, hire_date, status,
        filing_status, federal_allowances, state_allowances, race, disability,
        veteran_status, placement_status, office_name, employment_type,
        created_date, last_updated_date
    ) VALUES (
        $1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12,
        $13, $14, $15, $16, $17, $18, $19, $20, $21, NOW(), NOW()
    ) RETURNING id";

const INSERT_ADDRESS: &str = "\
    INSERT INTO addresses (
        talent_id, type, street1, street2, city, state_province,
        postal_code, country, county
    ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)";

const INSERT_SKILL: &str = "\
    INSERT INTO skills (
        talent_id, position_id, description_id, skill_position, skill_description
    ) VALUES ($1, $2, $3, $4, $5)";

const INSERT_WORK_HISTORY: &str = "\
    INSERT INTO work_history (
        talent_id, company, title, from_date, to_date,
        city, state, country, duties, reason_for_leaving, notes
    ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)";

const INSERT_RESUME: &str = "\
    INSERT INTO talent_resumes (
        talent_id, resume_filename, resume_text, resume_contents
    ) VALUES ($1, $2, $3, $4)";

/// Inserts the aggregate and returns the generated talent id.
pub async fn insert_talent(
    pool: &PgPool,
    aggregate: &TalentAggregate,
) -> Result<i32, AppError> {
    let mut tx = pool.begin().await.map_err(AppError::Write)?;

    let talent = &aggregate.talent;
    let (talent_id,): (i32,) = sqlx::query_as(INSERT_TALENT)
        .bind(&talent.first_name)
        .bind(&talent.middle_name)
        .bind(&talent.last_name)
        .bind(&talent.home_phone)
        .bind(&talent.work_phone)
        .bind(&talent.mobile_phone)
        .bind(&talent.email_address)
        .bind(&talent.tax_id_number)
        .bind(talent.birthday)
        .bind(&talent.gender)
        .bind(talent.hire_date)
        .bind(&talent.status)
        .bind(&talent.filing_status)
        .bind(talent.federal_allowances)
        .bind(talent.state_allowances)
        .bind(&talent.race)
        .bind(&talent.disability)
        .bind(&talent.veteran_status)
        .bind(&talent.placement_status)
        .bind(&talent.office_name)
        .bind(&talent.employment_type)
        .fetch_one(&mut *tx)
        .await
        .map_err(AppError::Write)?;

    for address in &aggregate.addresses {
        sqlx::query(INSERT_ADDRESS)
            .bind(talent_id)
            .bind(&address.address_type)
            .bind(&address.street1)
            .bind(&address.street2)
            .bind(&address.city)
            .bind(&address.state_province)
            .bind(&address.postal_code)
            .bind(&address.country)
            .bind(&address.county)
            .execute(&mut *tx)
            .await
            .map_err(AppError::Write)?;
    }

    for skill in &aggregate.skills {
        sqlx::query(INSERT_SKILL)
            .bind(talent_id)
            .bind(skill.position_id)
            .bind(skill.description_id)
            .bind(&skill.skill_position)
            .bind(&skill.skill_description)
            .execute(&mut *tx)
            .await
            .map_err(AppError::Write)?;
    }

    for work in &aggregate.work_history {
        sqlx::query(INSERT_WORK_HISTORY)
            .bind(talent_id)
            .bind(&work.company)
            .bind(&work.title)
            .bind(work.from_date)
            .bind(work.to_date)
            .bind(&work.city)
            .bind(&work.state)
            .bind(&work.country)
            .bind(&work.duties)
            .bind(&work.reason_for_leaving)
            .bind(&work.notes)
            .execute(&mut *tx)
            .await
            .map_err(AppError::Write)?;
    }

    if let Some(resume) = &aggregate.resume {
        sqlx::query(INSERT_RESUME)
            .bind(talent_id)
            .bind(&resume.resume_filename)
            .bind(&resume.resume_text)
            .bind(&resume.resume_contents)
            .execute(&mut *tx)
            .await
            .map_err(AppError::Write)?;
    }

    tx.commit().await.map_err(AppError::Write)?;

    debug!(
        "Inserted talent {talent_id} with {} addresses, {} skills, {} work history entries",
        aggregate.addresses.len(),
        aggregate.skills.len(),
        aggregate.work_history.len()
    );

    Ok(talent_id)
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use sqlx::PgPool;

    use super::*;
    use crate::talent::aggregate::{
        NewAddress, NewResume, NewSkill, NewTalent, NewWorkHistory,
    };

    fn talent() -> NewTalent {
        NewTalent {
            first_name: "Rosa".to_string(),
            middle_name: None,
            last_name: "Diaz".to_string(),
            home_phone: Some("512-555-0104".to_string()),
            work_phone: None,
            mobile_phone: None,
            email_address: "rosa.diaz@example.com".to_string(),
            tax_id_number: None,
            birthday: NaiveDate::from_ymd_opt(1990, 7, 4),
            gender: "female".to_string(),
            hire_date: None,
            status: "active".to_string(),
            filing_status: Some("single".to_string()),
            federal_allowances: Some(1),
            state_allowances: Some(0),
            race: None,
            disability: None,
            veteran_status: None,
            placement_status: Some("available".to_string()),
            office_name: Some("Austin Central".to_string()),
            employment_type: Some("full-time".to_string()),
        }
    }

    fn address(address_type: &str) -> NewAddress {
        NewAddress {
            address_type: address_type.to_string(),
            street1: "800 Congress Ave".to_string(),
            street2: None,
            city: "Austin".to_string(),
            state_province: "TX".to_string(),
            postal_code: "78701".to_string(),
            country: "USA".to_string(),
            county: Some("Travis".to_string()),
        }
    }

    fn skill(position: &str) -> NewSkill {
        NewSkill {
            position_id: Some(1),
            description_id: Some(2),
            skill_position: position.to_string(),
            skill_description: format!("Experienced {position}"),
        }
    }

    fn work(year: i32) -> NewWorkHistory {
        NewWorkHistory {
            company: "Acme Corp".to_string(),
            title: "Technician".to_string(),
            from_date: NaiveDate::from_ymd_opt(year, 1, 1).unwrap(),
            to_date: None,
            city: Some("Austin".to_string()),
            state: Some("TX".to_string()),
            country: Some("USA".to_string()),
            duties: Some("Kept the machines running".to_string()),
            reason_for_leaving: Some("Relocation".to_string()),
            notes: None,
        }
    }

    fn resume() -> NewResume {
        NewResume {
            resume_filename: "rosa_diaz_resume.txt".to_string(),
            resume_text: "Technician with a decade of experience.".to_string(),
            resume_contents: b"Technician with a decade of experience.".to_vec(),
        }
    }

    async fn count(pool: &PgPool, table: &str, talent_id: i32) -> i64 {
        sqlx::query_scalar(&format!(
            "SELECT COUNT(*) FROM {table} WHERE talent_id = $1"
        ))
        .bind(talent_id)
        .fetch_one(pool)
        .await
        .unwrap()
    }

    #[sqlx::test]
    async fn inserts_every_row_of_the_aggregate(pool: PgPool) {
        let aggregate = TalentAggregate::new(
            talent(),
            vec![address("resident"), address("mailing")],
            vec![skill("Welder"), skill("Rigger"), skill("Inspector")],
            vec![work(2019), work(2021)],
            Some(resume()),
        )
        .unwrap();

        let talent_id = insert_talent(&pool, &aggregate).await.unwrap();

        let talents: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM talents WHERE id = $1")
            .bind(talent_id)
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(talents, 1);
        assert_eq!(count(&pool, "addresses", talent_id).await, 2);
        assert_eq!(count(&pool, "skills", talent_id).await, 3);
        assert_eq!(count(&pool, "work_history", talent_id).await, 2);
        assert_eq!(count(&pool, "talent_resumes", talent_id).await, 1);
    }

    #[sqlx::test]
    async fn failed_child_insert_rolls_back_the_whole_aggregate(pool: PgPool) {
        // Force the third skill insert to violate a constraint.
        sqlx::query(
            "CREATE UNIQUE INDEX one_position_per_talent ON skills(talent_id, skill_position)",
        )
        .execute(&pool)
        .await
        .unwrap();

        let aggregate = TalentAggregate::new(
            talent(),
            vec![address("resident")],
            vec![skill("Welder"), skill("Rigger"), skill("Welder")],
            vec![work(2020)],
            Some(resume()),
        )
        .unwrap();

        let result = insert_talent(&pool, &aggregate).await;
        assert!(matches!(result, Err(AppError::Write(_))));

        // Nothing from the aggregate survives — not the parent, not the
        // children inserted before the failure.
        for table in ["talents", "addresses", "skills", "work_history", "talent_resumes"] {
            let rows: i64 = sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {table}"))
                .fetch_one(&pool)
                .await
                .unwrap();
            assert_eq!(rows, 0, "{table} should be empty after rollback");
        }
    }
}
