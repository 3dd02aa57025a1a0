//! Entity data structures, creation payloads and partial updates.

mod country;
mod leader;
mod patch;

pub use country::{Country, CountryPatch, NewCountry};
pub use leader::{CountryRef, Leader, LeaderPatch, NewLeader};

use serde::{Deserialize, Serialize};

/// Listing row: only the name column is selected by the index endpoints.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct NameOnly {
    pub name: String,
}
