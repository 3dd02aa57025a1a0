//! Leader operations. Creation resolves the country by name first.

use crate::error::AppError;
use crate::model::{CountryRef, Leader, LeaderPatch, NameOnly, NewLeader};
use crate::service::{country, CountryService};
use crate::store::Store;

pub const NONE_AVAILABLE: &str = "No leaders available";
pub const NOT_FOUND: &str = "Unable to locate leader";
pub const ALREADY_EXISTS: &str = "A leader with this name already exists";
pub const UPDATE_FAILED: &str = "Failed to update leader";

pub struct LeaderService;

impl LeaderService {
    pub async fn get_all(store: &dyn Store) -> Result<Vec<NameOnly>, AppError> {
        let rows = store.leader_names().await?;
        if rows.is_empty() {
            return Err(AppError::NotFound(NONE_AVAILABLE.into()));
        }
        Ok(rows)
    }

    pub async fn get_one_by_leader_name(store: &dyn Store, name: &str) -> Result<Leader, AppError> {
        let mut rows = store.leaders_by_name(name).await?;
        if rows.len() != 1 {
            return Err(AppError::NotFound(NOT_FOUND.into()));
        }
        Ok(rows.remove(0))
    }

    /// Resolve the country (by id or name), check the name is free, insert.
    /// Country lookup errors propagate as-is.
    pub async fn create(store: &dyn Store, new: &NewLeader) -> Result<Leader, AppError> {
        let country = match new.country_ref() {
            Some(CountryRef::Id(id)) => CountryService::get_one_by_country_id(store, id).await?,
            Some(CountryRef::Name(name)) => CountryService::get_one_by_country_name(store, &name).await?,
            None => return Err(AppError::NotFound(country::NOT_FOUND.into())),
        };
        let existing = store.leader_names_matching(&new.name).await?;
        if !existing.is_empty() {
            return Err(AppError::Conflict(ALREADY_EXISTS.into()));
        }
        let leader = store
            .insert_leader(&new.name, new.years_in_service, country.country_id)
            .await?;
        tracing::info!(leader_id = leader.leader_id, name = %leader.name, country_id = leader.country_id, "leader created");
        Ok(leader)
    }

    /// Merge every present patch field (name and country_id included) and write the full row.
    pub async fn update(store: &dyn Store, leader: &mut Leader, patch: LeaderPatch) -> Result<Leader, AppError> {
        patch.apply(leader);
        match store.update_leader(leader).await? {
            Some(row) => {
                *leader = row.clone();
                Ok(row)
            }
            None => Err(AppError::UpdateFailed(UPDATE_FAILED.into())),
        }
    }

    pub async fn destroy(store: &dyn Store, leader: &Leader) -> Result<Leader, AppError> {
        let row = store
            .delete_leader_by_name(&leader.name)
            .await?
            .ok_or_else(|| AppError::NotFound(NOT_FOUND.into()))?;
        tracing::info!(leader_id = row.leader_id, name = %row.name, "leader deleted");
        Ok(row)
    }
}
