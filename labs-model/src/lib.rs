//! Validated value objects used by the labs exercises.
//!
//! The central type is [`Appliance`], a small record with structural
//! equality. It is the element type the chain list exercise stores.
mod apartment;
mod appliance;
mod emission;
mod error;
mod inventory;

pub use apartment::Apartment;
pub use appliance::{Appliance, Kind};
pub use emission::EmissionRange;
pub use error::{Error, Result};
pub use inventory::{find_identical, sort_catalog, SportInventory};
