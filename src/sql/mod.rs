//! Static parameterized statements. Values are always bound, never interpolated.

pub mod country;
pub mod leader;
