//! Transit stops and their wheelchair boarding status.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::GeoPoint;

/// Error returned when a wheelchair boarding code is not 0, 1 or 2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("invalid wheelchair boarding code: {0}")]
pub struct InvalidBoardingCode(pub u8);

/// Wheelchair boarding status of a stop.
///
/// Encoded on the wire as the transit-data convention's numeric code:
/// `0` unknown, `1` accessible, `2` not accessible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum WheelchairBoarding {
    #[default]
    Unknown,
    Accessible,
    NotAccessible,
}

impl WheelchairBoarding {
    pub fn from_code(code: u8) -> Result<Self, InvalidBoardingCode> {
        match code {
            0 => Ok(Self::Unknown),
            1 => Ok(Self::Accessible),
            2 => Ok(Self::NotAccessible),
            other => Err(InvalidBoardingCode(other)),
        }
    }

    pub fn code(self) -> u8 {
        match self {
            Self::Unknown => 0,
            Self::Accessible => 1,
            Self::NotAccessible => 2,
        }
    }

    /// Confirmed accessible (code 1). Used by the nearby-stops query.
    pub fn is_accessible(self) -> bool {
        self == Self::Accessible
    }

    /// Any recorded status, accessible or not (code > 0).
    ///
    /// The school join counts these as wheelchair stops; it is deliberately
    /// looser than [`is_accessible`](Self::is_accessible).
    pub fn is_known(self) -> bool {
        self.code() > 0
    }
}

impl Serialize for WheelchairBoarding {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.code())
    }
}

impl<'de> Deserialize<'de> for WheelchairBoarding {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = u8::deserialize(deserializer)?;
        Self::from_code(code).map_err(serde::de::Error::custom)
    }
}

/// A transit stop from the stop dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct Stop {
    /// Stop identifier, unique within the dataset.
    pub stop_id: String,

    /// Human-readable stop name, if the source provides one.
    pub name: Option<String>,

    pub location: GeoPoint,

    pub wheelchair_boarding: WheelchairBoarding,
}

impl Stop {
    pub fn new(
        stop_id: impl Into<String>,
        location: GeoPoint,
        wheelchair_boarding: WheelchairBoarding,
    ) -> Self {
        Self {
            stop_id: stop_id.into(),
            name: None,
            location,
            wheelchair_boarding,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}
