//! Core domain types.
//!
//! These types are validated at construction, so code downstream of the
//! parsing boundary never has to re-check coordinates or boarding codes.

mod point;
mod school;
mod stop;

pub use point::{GeoPoint, InvalidPoint};
pub use school::{School, SchoolRecord, StopCounts};
pub use stop::{InvalidBoardingCode, Stop, WheelchairBoarding};
