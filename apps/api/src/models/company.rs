use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

/// A company row joined with its technology and job-type names, grouped by
/// category. The grouping is done by the storage layer (ARRAY_AGG); this
/// struct carries the result as-is.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Company {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub latitude: f64,
    pub longitude: f64,
    pub address: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub technologies_back: Vec<String>,
    pub technologies_front: Vec<String>,
    pub technologies_cloud: Vec<String>,
    pub types_postes: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn response_shape_exposes_the_contract_field_names() {
        let company = Company {
            id: 1,
            name: "Acme".to_string(),
            description: "desc".to_string(),
            latitude: 1.0,
            longitude: 2.0,
            address: "1 Main St".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
            technologies_back: vec!["Go".to_string()],
            technologies_front: vec![],
            technologies_cloud: vec![],
            types_postes: vec!["CDI".to_string()],
        };

        let value = serde_json::to_value(&company).unwrap();
        let object = value.as_object().unwrap();

        let expected = [
            "id",
            "name",
            "description",
            "latitude",
            "longitude",
            "address",
            "created_at",
            "updated_at",
            "technologies_back",
            "technologies_front",
            "technologies_cloud",
            "types_postes",
        ];
        for key in expected {
            assert!(object.contains_key(key), "missing response key {key:?}");
        }
        assert_eq!(object.len(), expected.len());
    }
}
