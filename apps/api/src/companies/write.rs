//! Transactional write path for company records.
//!
//! Every write runs as one transaction per request: the company row and all
//! of its technology links commit together or not at all. A reader never
//! observes a half-replaced link set. Statements are strictly sequential
//! because link insertion depends on the generated company id.

use serde::Deserialize;
use sqlx::{PgPool, Postgres, Transaction};
use tracing::debug;

use crate::errors::AppError;
use crate::models::company::Company;
use crate::models::technology::TechCategory;

/// Incoming company payload for create and update.
///
/// The three technology lists are required fields (empty lists are valid).
/// Names are resolved against the catalog per category; unresolvable names
/// are skipped, not rejected.
#[derive(Debug, Clone, Deserialize)]
pub struct CompanyPayload {
    pub name: String,
    pub description: String,
    pub latitude: f64,
    pub longitude: f64,
    pub address: String,
    pub technologies_back: Vec<String>,
    pub technologies_front: Vec<String>,
    pub technologies_cloud: Vec<String>,
}

impl CompanyPayload {
    /// The name lists paired with their catalog category, in link order.
    fn grouped(&self) -> [(TechCategory, &[String]); 3] {
        [
            (TechCategory::Backend, self.technologies_back.as_slice()),
            (TechCategory::Frontend, self.technologies_front.as_slice()),
            (TechCategory::Cloud, self.technologies_cloud.as_slice()),
        ]
    }
}

/// Inserts a company and links its technologies in one transaction.
/// Returns the generated company id.
pub async fn create_company(pool: &PgPool, payload: &CompanyPayload) -> Result<i32, AppError> {
    let mut tx = pool.begin().await?;

    let company_id: i32 = sqlx::query_scalar(
        "INSERT INTO companies (name, description, latitude, longitude, address) \
         VALUES ($1, $2, $3, $4, $5) RETURNING id",
    )
    .bind(&payload.name)
    .bind(&payload.description)
    .bind(payload.latitude)
    .bind(payload.longitude)
    .bind(&payload.address)
    .fetch_one(&mut *tx)
    .await?;

    link_technologies(&mut tx, company_id, payload).await?;

    tx.commit().await?;
    Ok(company_id)
}

/// Updates a company's scalar fields and fully replaces its technology links.
///
/// Full replace: the existing link set is deleted and rebuilt from the
/// payload, inside the same transaction as the scalar update, so concurrent
/// readers see either the old set or the new set, never the gap in between.
pub async fn update_company(
    pool: &PgPool,
    id: i32,
    payload: &CompanyPayload,
) -> Result<(), AppError> {
    let mut tx = pool.begin().await?;

    let result = sqlx::query(
        "UPDATE companies SET name = $1, description = $2, latitude = $3, longitude = $4, \
         address = $5, updated_at = NOW() WHERE id = $6",
    )
    .bind(&payload.name)
    .bind(&payload.description)
    .bind(payload.latitude)
    .bind(payload.longitude)
    .bind(&payload.address)
    .bind(id)
    .execute(&mut *tx)
    .await?;

    if result.rows_affected() == 0 {
        // Dropping the transaction rolls it back.
        return Err(AppError::NotFound("Company not found".to_string()));
    }

    sqlx::query("DELETE FROM company_technologies WHERE company_id = $1")
        .bind(id)
        .execute(&mut *tx)
        .await?;

    link_technologies(&mut tx, id, payload).await?;

    tx.commit().await?;
    Ok(())
}

/// Deletes a company and its link rows in one transaction.
///
/// Link rows go first so the parent delete cannot trip a referential
/// integrity constraint or strand orphaned links.
pub async fn delete_company(pool: &PgPool, id: i32) -> Result<(), AppError> {
    let mut tx = pool.begin().await?;

    sqlx::query("DELETE FROM company_technologies WHERE company_id = $1")
        .bind(id)
        .execute(&mut *tx)
        .await?;

    sqlx::query("DELETE FROM company_job_types WHERE company_id = $1")
        .bind(id)
        .execute(&mut *tx)
        .await?;

    let result = sqlx::query("DELETE FROM companies WHERE id = $1")
        .bind(id)
        .execute(&mut *tx)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound("Company not found".to_string()));
    }

    tx.commit().await?;
    Ok(())
}

/// Returns every company with technology names grouped by category and
/// job-type names aggregated alongside. Grouping happens in SQL; rows are
/// returned as-is. No ORDER BY — row order is unspecified.
pub async fn list_companies(pool: &PgPool) -> Result<Vec<Company>, AppError> {
    let companies = sqlx::query_as::<_, Company>(
        r#"
        SELECT
          c.id, c.name, c.description, c.latitude, c.longitude, c.address,
          c.created_at, c.updated_at,
          COALESCE(ARRAY_AGG(DISTINCT t.name) FILTER (WHERE t.type = 'Backend'), '{}') AS technologies_back,
          COALESCE(ARRAY_AGG(DISTINCT t.name) FILTER (WHERE t.type = 'Frontend'), '{}') AS technologies_front,
          COALESCE(ARRAY_AGG(DISTINCT t.name) FILTER (WHERE t.type = 'Cloud'), '{}') AS technologies_cloud,
          COALESCE(ARRAY_AGG(DISTINCT jt.name) FILTER (WHERE jt.name IS NOT NULL), '{}') AS types_postes
        FROM companies c
        LEFT JOIN company_technologies ct ON c.id = ct.company_id
        LEFT JOIN technologies t ON ct.technology_id = t.id
        LEFT JOIN company_job_types cjt ON c.id = cjt.company_id
        LEFT JOIN job_types jt ON cjt.job_type_id = jt.id
        GROUP BY c.id
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(companies)
}

/// Resolves each supplied name against the catalog by `(name, category)` and
/// inserts a link row for every match. Unknown names are skipped silently;
/// the skip count goes to the diagnostic channel only, never to the caller.
async fn link_technologies(
    tx: &mut Transaction<'_, Postgres>,
    company_id: i32,
    payload: &CompanyPayload,
) -> Result<(), AppError> {
    let mut skipped = 0usize;

    for (category, names) in payload.grouped() {
        for name in names {
            let tech_id: Option<i32> =
                sqlx::query_scalar("SELECT id FROM technologies WHERE name = $1 AND type = $2")
                    .bind(name)
                    .bind(category.as_str())
                    .fetch_optional(&mut **tx)
                    .await?;

            match tech_id {
                Some(tech_id) => {
                    sqlx::query(
                        "INSERT INTO company_technologies (company_id, technology_id) \
                         VALUES ($1, $2)",
                    )
                    .bind(company_id)
                    .bind(tech_id)
                    .execute(&mut **tx)
                    .await?;
                }
                None => {
                    debug!(
                        "No {} technology named {name:?} in catalog; link skipped",
                        category.as_str()
                    );
                    skipped += 1;
                }
            }
        }
    }

    if skipped > 0 {
        debug!("Skipped {skipped} unknown technology name(s) for company {company_id}");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn full_payload() -> serde_json::Value {
        json!({
            "name": "Acme",
            "description": "desc",
            "latitude": 1.0,
            "longitude": 2.0,
            "address": "1 Main St",
            "technologies_back": ["Go"],
            "technologies_front": [],
            "technologies_cloud": []
        })
    }

    #[test]
    fn payload_deserializes_with_empty_lists() {
        let payload: CompanyPayload = serde_json::from_value(full_payload()).unwrap();
        assert_eq!(payload.name, "Acme");
        assert_eq!(payload.technologies_back, vec!["Go"]);
        assert!(payload.technologies_front.is_empty());
        assert!(payload.technologies_cloud.is_empty());
    }

    #[test]
    fn payload_requires_all_three_lists() {
        let mut body = full_payload();
        body.as_object_mut().unwrap().remove("technologies_cloud");
        assert!(serde_json::from_value::<CompanyPayload>(body).is_err());
    }

    #[test]
    fn grouped_pairs_lists_with_categories_in_link_order() {
        let payload: CompanyPayload = serde_json::from_value(json!({
            "name": "Acme",
            "description": "desc",
            "latitude": 0.0,
            "longitude": 0.0,
            "address": "1 Main St",
            "technologies_back": ["Go", "Rust"],
            "technologies_front": ["React"],
            "technologies_cloud": ["AWS"]
        }))
        .unwrap();

        let grouped = payload.grouped();
        assert_eq!(grouped[0].0, TechCategory::Backend);
        assert_eq!(grouped[0].1, ["Go", "Rust"]);
        assert_eq!(grouped[1].0, TechCategory::Frontend);
        assert_eq!(grouped[1].1, ["React"]);
        assert_eq!(grouped[2].0, TechCategory::Cloud);
        assert_eq!(grouped[2].1, ["AWS"]);
    }
}
