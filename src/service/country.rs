//! Country operations: list, lookup by name, create, update, destroy.

use crate::error::AppError;
use crate::model::{Country, CountryPatch, NameOnly, NewCountry};
use crate::store::Store;

pub const NONE_AVAILABLE: &str = "No countries available";
pub const NOT_FOUND: &str = "Unable to locate country";
pub const ALREADY_EXISTS: &str = "A country with this name already exists";
pub const UPDATE_FAILED: &str = "Failed to update country";

pub struct CountryService;

impl CountryService {
    /// All country names in storage order. An empty table is an error.
    pub async fn get_all(store: &dyn Store) -> Result<Vec<NameOnly>, AppError> {
        let rows = store.country_names().await?;
        if rows.is_empty() {
            return Err(AppError::NotFound(NONE_AVAILABLE.into()));
        }
        Ok(rows)
    }

    /// Case-insensitive lookup. Exactly one row must match.
    pub async fn get_one_by_country_name(store: &dyn Store, name: &str) -> Result<Country, AppError> {
        let mut rows = store.countries_by_name(name).await?;
        if rows.len() != 1 {
            return Err(AppError::NotFound(NOT_FOUND.into()));
        }
        Ok(rows.remove(0))
    }

    /// Lookup by id. Exactly one row must match.
    pub async fn get_one_by_country_id(store: &dyn Store, country_id: i32) -> Result<Country, AppError> {
        let mut rows = store.countries_by_id(country_id).await?;
        if rows.len() != 1 {
            return Err(AppError::NotFound(NOT_FOUND.into()));
        }
        Ok(rows.remove(0))
    }

    /// Existence check, then insert. The two statements are separate round-trips.
    pub async fn create(store: &dyn Store, new: &NewCountry) -> Result<Country, AppError> {
        let existing = store.country_names_matching(&new.name).await?;
        if !existing.is_empty() {
            return Err(AppError::Conflict(ALREADY_EXISTS.into()));
        }
        let country = store.insert_country(new).await?;
        tracing::info!(country_id = country.country_id, name = %country.name, "country created");
        Ok(country)
    }

    /// Merge `patch` into `country`, write the full row, and refresh `country` from the stored row.
    pub async fn update(store: &dyn Store, country: &mut Country, patch: CountryPatch) -> Result<Country, AppError> {
        patch.apply(country);
        match store.update_country(country).await? {
            Some(row) => {
                *country = row.clone();
                Ok(row)
            }
            None => Err(AppError::UpdateFailed(UPDATE_FAILED.into())),
        }
    }

    /// Delete by the entity's current name and return the deleted row.
    pub async fn destroy(store: &dyn Store, country: &Country) -> Result<Country, AppError> {
        let row = store
            .delete_country_by_name(&country.name)
            .await?
            .ok_or_else(|| AppError::NotFound(NOT_FOUND.into()))?;
        tracing::info!(country_id = row.country_id, name = %row.name, "country deleted");
        Ok(row)
    }
}
