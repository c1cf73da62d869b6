use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Catalog category for a technology tag. Stored as its string form in the
/// `type` column of the technologies table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TechCategory {
    Backend,
    Frontend,
    Cloud,
}

impl TechCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            TechCategory::Backend => "Backend",
            TechCategory::Frontend => "Frontend",
            TechCategory::Cloud => "Cloud",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Technology {
    pub id: i32,
    pub name: String,
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub kind: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Name-only projection used by the per-category lookup endpoint.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct TechnologyName {
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_string_forms_match_catalog() {
        assert_eq!(TechCategory::Backend.as_str(), "Backend");
        assert_eq!(TechCategory::Frontend.as_str(), "Frontend");
        assert_eq!(TechCategory::Cloud.as_str(), "Cloud");
    }
}
