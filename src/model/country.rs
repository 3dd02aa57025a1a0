use super::patch::double_option;
use serde::{Deserialize, Serialize};

/// One row of the `country` table.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Country {
    pub country_id: i32,
    pub name: String,
    pub capital: String,
    pub population: i64,
    pub languages: String,
    pub fun_fact: Option<String>,
    pub map_image_url: Option<String>,
}

/// Body of `POST /countries`. Only these four columns are inserted.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewCountry {
    pub name: String,
    pub capital: String,
    pub population: i64,
    pub languages: String,
}

/// Body of `PATCH /countries/:name`. Each present key overwrites the in-memory value, ids
/// included, so a `country_id` here changes which row the full-row update targets.
/// `fun_fact` and `map_image_url` may be set to `null` explicitly.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct CountryPatch {
    #[serde(default)]
    pub country_id: Option<i32>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub capital: Option<String>,
    #[serde(default)]
    pub population: Option<i64>,
    #[serde(default)]
    pub languages: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub fun_fact: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub map_image_url: Option<Option<String>>,
}

impl CountryPatch {
    pub fn apply(self, country: &mut Country) {
        if let Some(country_id) = self.country_id {
            country.country_id = country_id;
        }
        if let Some(name) = self.name {
            country.name = name;
        }
        if let Some(capital) = self.capital {
            country.capital = capital;
        }
        if let Some(population) = self.population {
            country.population = population;
        }
        if let Some(languages) = self.languages {
            country.languages = languages;
        }
        if let Some(fun_fact) = self.fun_fact {
            country.fun_fact = fun_fact;
        }
        if let Some(map_image_url) = self.map_image_url {
            country.map_image_url = map_image_url;
        }
    }
}
