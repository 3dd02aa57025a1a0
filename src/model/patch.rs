use serde::{Deserialize, Deserializer};

/// Distinguishes an absent key (`None`) from an explicit `null` (`Some(None)`).
/// Pair with `#[serde(default)]` so absent keys hit the default.
pub(crate) fn double_option<'de, T, D>(de: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(de).map(Some)
}
