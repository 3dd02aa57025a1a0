pub const SELECT_NAMES: &str = "SELECT name FROM leader";

pub const SELECT_BY_NAME: &str = "SELECT * FROM leader WHERE LOWER(name) = LOWER($1)";

pub const SELECT_NAME_BY_NAME: &str = "SELECT name FROM leader WHERE LOWER(name) = LOWER($1)";

pub const INSERT: &str = "INSERT INTO leader (name, years_in_service, country_id) \
     VALUES ($1, $2, $3) RETURNING *";

pub const UPDATE: &str = "UPDATE leader \
     SET name = $1, years_in_service = $2, country_id = $3 \
     WHERE leader_id = $4 RETURNING *";

pub const DELETE_BY_NAME: &str = "DELETE FROM leader WHERE name = $1 RETURNING *";
