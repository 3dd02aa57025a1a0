pub const SELECT_NAMES: &str = "SELECT name FROM country";

pub const SELECT_BY_NAME: &str = "SELECT * FROM country WHERE LOWER(name) = LOWER($1)";

pub const SELECT_BY_ID: &str = "SELECT * FROM country WHERE country_id = $1";

pub const SELECT_NAME_BY_NAME: &str = "SELECT name FROM country WHERE LOWER(name) = LOWER($1)";

pub const INSERT: &str = "INSERT INTO country (name, capital, population, languages) \
     VALUES ($1, $2, $3, $4) RETURNING *";

pub const UPDATE: &str = "UPDATE country \
     SET name = $1, capital = $2, population = $3, languages = $4, fun_fact = $5, map_image_url = $6 \
     WHERE country_id = $7 RETURNING *";

pub const DELETE_BY_NAME: &str = "DELETE FROM country WHERE name = $1 RETURNING *";
