//! Domain types for map locations.

use serde::{Deserialize, Serialize};

/// Geographic coordinates in WGS84 degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// Marker category shown on the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocationCategory {
    Beach,
    Repair,
    Shop,
}

impl LocationCategory {
    /// Label used by the UI layer for marker grouping.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Beach => "beach",
            Self::Repair => "repair",
            Self::Shop => "shop",
        }
    }
}

/// Contact details shared by shops and repair services.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContactInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instagram: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub whatsapp: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hours: Option<String>,
}

/// Category-specific data carried by a location.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum LocationDetails {
    Beach {
        /// Wave quality, 1 (poor) to 5 (world class).
        wave_quality: u8,
        /// Difficulty, 1 (beginner) to 5 (expert).
        difficulty: u8,
        best_tide: String,
        best_wind: String,
    },
    Repair {
        #[serde(flatten)]
        contact: ContactInfo,
        /// Community rating, 1.0 to 5.0.
        rating: f32,
        #[serde(skip_serializing_if = "Option::is_none")]
        specialty: Option<String>,
    },
    Shop {
        #[serde(flatten)]
        contact: ContactInfo,
        /// Community rating, 1.0 to 5.0.
        rating: f32,
    },
}

/// A point of interest on the map: surf beach, repair service, or surf shop.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Location {
    pub id: String,
    pub name: String,
    pub coordinates: Coordinates,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(flatten)]
    pub details: LocationDetails,
}

impl Location {
    /// The marker category, derived from the detail payload.
    pub fn category(&self) -> LocationCategory {
        match self.details {
            LocationDetails::Beach { .. } => LocationCategory::Beach,
            LocationDetails::Repair { .. } => LocationCategory::Repair,
            LocationDetails::Shop { .. } => LocationCategory::Shop,
        }
    }

    pub fn is_beach(&self) -> bool {
        matches!(self.details, LocationDetails::Beach { .. })
    }

    /// Community rating for shops and repair services; beaches have none.
    pub fn rating(&self) -> Option<f32> {
        match self.details {
            LocationDetails::Beach { .. } => None,
            LocationDetails::Repair { rating, .. } | LocationDetails::Shop { rating, .. } => {
                Some(rating)
            }
        }
    }
}
