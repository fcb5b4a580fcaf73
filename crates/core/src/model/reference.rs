//! Reference records looked up by id.

use chrono::NaiveDate;
use polimoney_shared::types::{DistrictId, ElectionId, OrganizationId, PoliticianId};
use serde::{Deserialize, Serialize};

/// A politician.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Politician {
    /// Politician ID.
    pub id: PoliticianId,
    /// Name.
    pub name: String,
    /// Name reading (kana).
    pub name_kana: Option<String>,
}

/// A political organization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Organization {
    /// Organization ID.
    pub id: OrganizationId,
    /// Name.
    pub name: String,
    /// Organization type.
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

/// An election.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Election {
    /// Election ID.
    pub id: ElectionId,
    /// Name.
    pub name: String,
    /// Election type code (`HR`, `HC`, ...).
    #[serde(rename = "type")]
    pub election_type: String,
    /// District the election is held in.
    pub district_id: DistrictId,
    /// Election day.
    pub election_date: NaiveDate,
}

/// An electoral district.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct District {
    /// District ID.
    pub id: DistrictId,
    /// Name.
    pub name: String,
}

/// An election type catalog row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElectionTypeRecord {
    /// Type code.
    pub code: String,
    /// Display name, if set.
    pub name: Option<String>,
}
