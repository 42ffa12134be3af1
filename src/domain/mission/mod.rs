//! Mission module - the cost request as submitted.
//!
//! Plain data decoded from the mission document plus the two categorical
//! lookups the costing model needs from it: mission director and launch
//! vehicle.

pub mod coerce;
mod launch_vehicle;
mod mission_director;
mod request;

pub use launch_vehicle::LaunchVehicle;
pub use mission_director::MissionDirector;
pub use request::{
    Constellation, GroundStation, LaunchSpec, MissionContext, MissionRequest, PayloadSpec,
    SpacecraftSpec,
};
