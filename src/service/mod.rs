//! Entity operations over an injected [`Store`](crate::store::Store).

mod country;
mod leader;
pub use country::CountryService;
pub use leader::LeaderService;
