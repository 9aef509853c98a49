//! Volunteer-skills directory queries

use crate::client::DatabaseClient;
use crate::error::DbResult;
use crate::params::encode_insert_params;
use rusqlite::types::Value;
use rusqlite::{named_params, ToSql};
use std::collections::HashMap;

/// Column order for the volunteer_skill bulk insert
const VOLUNTEER_SKILL_COLUMNS: &[&str] = &["volunteer_id", "skill_id"];

/// Read/write operations over the volunteer-skills schema.
///
/// Expects the tables and views created by the shipped migrations:
/// `volunteer`, `skill`, the `volunteer_skill` join table, and the
/// flattened `volunteer_skills` view.
pub struct SkillsDirectory<'a> {
    client: &'a DatabaseClient,
}

impl<'a> SkillsDirectory<'a> {
    pub fn new(client: &'a DatabaseClient) -> Self {
        Self { client }
    }

    /// All volunteers as `(id, "given family")`, ordered by given name
    pub fn volunteers(&self) -> DbResult<Vec<(i64, String)>> {
        self.client.query(
            "SELECT id, given_name, family_name FROM volunteer ORDER BY given_name;",
            &[],
            |row| {
                let given: String = row.get(1)?;
                let family: String = row.get(2)?;
                Ok((row.get(0)?, format!("{given} {family}")))
            },
        )
    }

    /// Every skill that can be claimed, as `(id, name)` ordered by name
    pub fn possible_skills(&self) -> DbResult<Vec<(i64, String)>> {
        self.client
            .query("SELECT id, name FROM skill ORDER BY name;", &[], |row| {
                Ok((row.get(0)?, row.get(1)?))
            })
    }

    /// Skills at least one volunteer holds, sorted by name
    pub fn available_skills(&self) -> DbResult<Vec<String>> {
        let mut skills = self.client.query(
            "SELECT DISTINCT skill FROM volunteer_skills;",
            &[],
            |row| row.get(0),
        )?;
        skills.sort();
        Ok(skills)
    }

    pub fn count_volunteers(&self) -> DbResult<i64> {
        self.client
            .query_scalar("SELECT count(id) FROM volunteer;", &[])
    }

    pub fn count_skills_possible(&self) -> DbResult<i64> {
        self.client.query_scalar("SELECT count(id) FROM skill;", &[])
    }

    pub fn count_skills_available(&self) -> DbResult<i64> {
        self.client
            .query_scalar("SELECT count(DISTINCT skill) FROM volunteer_skills;", &[])
    }

    /// Skill count per volunteer, for the stats chart
    pub fn skills_per_volunteer(&self) -> DbResult<Vec<(String, i64)>> {
        self.client.query(
            "SELECT volunteer, count(skill) FROM volunteer_skills GROUP BY volunteer;",
            &[],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )
    }

    /// Volunteer count per skill, for the stats chart
    pub fn volunteers_per_skill(&self) -> DbResult<Vec<(String, i64)>> {
        self.client.query(
            "SELECT skill, count(volunteer) FROM volunteer_skills GROUP BY skill;",
            &[],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )
    }

    /// Skill ids currently held by one volunteer
    pub fn skills_for_volunteer(&self, volunteer_id: i64) -> DbResult<Vec<i64>> {
        self.client.query(
            "SELECT skill_id FROM volunteer_skill WHERE volunteer_id = :volunteer_id;",
            named_params! { ":volunteer_id": volunteer_id },
            |row| row.get(0),
        )
    }

    /// Volunteers holding *all* of the given skills, sorted by name.
    ///
    /// Each skill is bound as its own `:skill_<i>` parameter; skill names
    /// never reach the SQL text itself.
    pub fn volunteers_with_skills(&self, skills: &[String]) -> DbResult<Vec<String>> {
        if skills.is_empty() {
            return Ok(Vec::new());
        }

        let in_list = (0..skills.len())
            .map(|i| format!(":skill_{i}"))
            .collect::<Vec<_>>()
            .join(", ");
        let sql = format!(
            "SELECT volunteer FROM volunteer_skills WHERE skill IN ({in_list}) \
             GROUP BY volunteer HAVING count(DISTINCT skill) = :wanted;",
        );

        let wanted = skills.len() as i64;
        let mut bound: Vec<(String, &dyn ToSql)> = skills
            .iter()
            .enumerate()
            .map(|(i, skill)| (format!(":skill_{i}"), skill as &dyn ToSql))
            .collect();
        bound.push((":wanted".to_string(), &wanted as &dyn ToSql));

        let refs: Vec<(&str, &dyn ToSql)> =
            bound.iter().map(|(k, v)| (k.as_str(), *v)).collect();

        let mut volunteers = self.client.query(&sql, refs.as_slice(), |row| row.get(0))?;
        volunteers.sort();
        Ok(volunteers)
    }

    /// Replace a volunteer's skill set.
    ///
    /// Delete and bulk insert run on one held connection inside a single
    /// transaction, so a failed insert rolls the delete back too. An empty
    /// `skill_ids` clears the volunteer's skills.
    pub fn set_volunteer_skills(&self, volunteer_id: i64, skill_ids: &[i64]) -> DbResult<()> {
        let mut conn = self.client.engine().lock()?;
        let tx = conn.transaction()?;

        tx.execute(
            "DELETE FROM volunteer_skill WHERE volunteer_id = :volunteer_id;",
            named_params! { ":volunteer_id": volunteer_id },
        )?;

        if !skill_ids.is_empty() {
            let rows: Vec<HashMap<String, Value>> = skill_ids
                .iter()
                .map(|skill_id| {
                    HashMap::from([
                        ("volunteer_id".to_string(), Value::Integer(volunteer_id)),
                        ("skill_id".to_string(), Value::Integer(*skill_id)),
                    ])
                })
                .collect();

            let (placeholders, params) = encode_insert_params(&rows, VOLUNTEER_SKILL_COLUMNS);
            let statement = format!(
                "INSERT INTO volunteer_skill (volunteer_id, skill_id) VALUES {};",
                placeholders.join(", ")
            );

            let named: Vec<(String, Value)> = params
                .into_iter()
                .map(|(name, value)| (format!(":{name}"), value))
                .collect();
            let refs: Vec<(&str, &dyn ToSql)> = named
                .iter()
                .map(|(name, value)| (name.as_str(), value as &dyn ToSql))
                .collect();

            tx.execute(&statement, refs.as_slice())?;
        }

        tx.commit()?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "directory_test.rs"]
mod tests;
