//! In-process store with the same statement semantics as the `country`/`leader` schema:
//! serial ids, case-insensitive lookups, case-sensitive delete, check and foreign key
//! constraints, cascading leader delete. Each method holds the lock for one statement only.

use super::Store;
use crate::error::AppError;
use crate::model::{Country, Leader, NameOnly, NewCountry};
use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard};

#[derive(Default)]
struct Tables {
    countries: Vec<Country>,
    leaders: Vec<Leader>,
    next_country_id: i32,
    next_leader_id: i32,
}

#[derive(Default)]
pub struct MemoryStore {
    tables: Mutex<Tables>,
    closed: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn tables(&self) -> Result<MutexGuard<'_, Tables>, AppError> {
        if self.closed.load(Ordering::SeqCst) {
            return Err(AppError::Db(sqlx::Error::PoolClosed));
        }
        Ok(self.tables.lock().unwrap_or_else(|poisoned| poisoned.into_inner()))
    }
}

fn same_name(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

fn check_non_negative(table: &str, column: &str, value: i64) -> Result<(), AppError> {
    if value < 0 {
        return Err(AppError::Constraint(format!(
            "new row for relation \"{}\" violates check constraint \"{}_{}_check\"",
            table, table, column
        )));
    }
    Ok(())
}

fn check_country_exists(tables: &Tables, country_id: i32) -> Result<(), AppError> {
    if !tables.countries.iter().any(|c| c.country_id == country_id) {
        return Err(AppError::Constraint(
            "insert or update on table \"leader\" violates foreign key constraint \"leader_country_id_fkey\"".into(),
        ));
    }
    Ok(())
}

#[async_trait]
impl Store for MemoryStore {
    async fn ping(&self) -> Result<(), AppError> {
        self.tables().map(|_| ())
    }

    async fn close(&self) {
        self.closed.store(true, Ordering::SeqCst);
    }

    async fn country_names(&self) -> Result<Vec<NameOnly>, AppError> {
        let t = self.tables()?;
        Ok(t.countries
            .iter()
            .map(|c| NameOnly { name: c.name.clone() })
            .collect())
    }

    async fn countries_by_name(&self, name: &str) -> Result<Vec<Country>, AppError> {
        let t = self.tables()?;
        Ok(t.countries
            .iter()
            .filter(|c| same_name(&c.name, name))
            .cloned()
            .collect())
    }

    async fn countries_by_id(&self, country_id: i32) -> Result<Vec<Country>, AppError> {
        let t = self.tables()?;
        Ok(t.countries
            .iter()
            .filter(|c| c.country_id == country_id)
            .cloned()
            .collect())
    }

    async fn country_names_matching(&self, name: &str) -> Result<Vec<NameOnly>, AppError> {
        let t = self.tables()?;
        Ok(t.countries
            .iter()
            .filter(|c| same_name(&c.name, name))
            .map(|c| NameOnly { name: c.name.clone() })
            .collect())
    }

    async fn insert_country(&self, new: &NewCountry) -> Result<Country, AppError> {
        let mut t = self.tables()?;
        check_non_negative("country", "population", new.population)?;
        t.next_country_id += 1;
        let country = Country {
            country_id: t.next_country_id,
            name: new.name.clone(),
            capital: new.capital.clone(),
            population: new.population,
            languages: new.languages.clone(),
            fun_fact: None,
            map_image_url: None,
        };
        t.countries.push(country.clone());
        Ok(country)
    }

    async fn update_country(&self, country: &Country) -> Result<Option<Country>, AppError> {
        let mut t = self.tables()?;
        check_non_negative("country", "population", country.population)?;
        match t.countries.iter_mut().find(|c| c.country_id == country.country_id) {
            Some(row) => {
                *row = country.clone();
                Ok(Some(row.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete_country_by_name(&self, name: &str) -> Result<Option<Country>, AppError> {
        let mut t = self.tables()?;
        let Some(pos) = t.countries.iter().position(|c| c.name == name) else {
            return Ok(None);
        };
        let removed = t.countries.remove(pos);
        t.leaders.retain(|l| l.country_id != removed.country_id);
        Ok(Some(removed))
    }

    async fn leader_names(&self) -> Result<Vec<NameOnly>, AppError> {
        let t = self.tables()?;
        Ok(t.leaders
            .iter()
            .map(|l| NameOnly { name: l.name.clone() })
            .collect())
    }

    async fn leaders_by_name(&self, name: &str) -> Result<Vec<Leader>, AppError> {
        let t = self.tables()?;
        Ok(t.leaders
            .iter()
            .filter(|l| same_name(&l.name, name))
            .cloned()
            .collect())
    }

    async fn leader_names_matching(&self, name: &str) -> Result<Vec<NameOnly>, AppError> {
        let t = self.tables()?;
        Ok(t.leaders
            .iter()
            .filter(|l| same_name(&l.name, name))
            .map(|l| NameOnly { name: l.name.clone() })
            .collect())
    }

    async fn insert_leader(&self, name: &str, years_in_service: i32, country_id: i32) -> Result<Leader, AppError> {
        let mut t = self.tables()?;
        check_non_negative("leader", "years_in_service", years_in_service.into())?;
        check_country_exists(&t, country_id)?;
        t.next_leader_id += 1;
        let leader = Leader {
            leader_id: t.next_leader_id,
            name: name.to_string(),
            years_in_service,
            country_id,
        };
        t.leaders.push(leader.clone());
        Ok(leader)
    }

    async fn update_leader(&self, leader: &Leader) -> Result<Option<Leader>, AppError> {
        let mut t = self.tables()?;
        check_non_negative("leader", "years_in_service", leader.years_in_service.into())?;
        check_country_exists(&t, leader.country_id)?;
        match t.leaders.iter_mut().find(|l| l.leader_id == leader.leader_id) {
            Some(row) => {
                *row = leader.clone();
                Ok(Some(row.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete_leader_by_name(&self, name: &str) -> Result<Option<Leader>, AppError> {
        let mut t = self.tables()?;
        let Some(pos) = t.leaders.iter().position(|l| l.name == name) else {
            return Ok(None);
        };
        Ok(Some(t.leaders.remove(pos)))
    }
}
