use serde::{Deserialize, Serialize};

/// One row of the `leader` table.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Leader {
    pub leader_id: i32,
    pub name: String,
    pub years_in_service: i32,
    pub country_id: i32,
}

/// How a new leader names its country: a numeric id, or a name looked up case-insensitively.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CountryRef {
    Id(i32),
    Name(String),
}

/// Body of `POST /leaders`. The country comes from `country_id` (id or name) or `country`
/// (name); `country_id` wins when both are sent. Either way it must exist before insert.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewLeader {
    pub name: String,
    pub years_in_service: i32,
    #[serde(default, alias = "country_name", skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country_id: Option<CountryRef>,
}

impl NewLeader {
    pub fn country_ref(&self) -> Option<CountryRef> {
        self.country_id
            .clone()
            .or_else(|| self.country.clone().map(CountryRef::Name))
    }
}

/// Body of `PATCH /leaders/:name`. Every present key is merged, ids included; the row
/// written is the one keyed by the merged `leader_id`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct LeaderPatch {
    #[serde(default)]
    pub leader_id: Option<i32>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub years_in_service: Option<i32>,
    #[serde(default)]
    pub country_id: Option<i32>,
}

impl LeaderPatch {
    pub fn apply(self, leader: &mut Leader) {
        if let Some(leader_id) = self.leader_id {
            leader.leader_id = leader_id;
        }
        if let Some(name) = self.name {
            leader.name = name;
        }
        if let Some(years) = self.years_in_service {
            leader.years_in_service = years;
        }
        if let Some(country_id) = self.country_id {
            leader.country_id = country_id;
        }
    }
}
