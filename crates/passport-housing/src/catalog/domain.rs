use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A rental building or house, the unit of catalog identity.
///
/// The `id` is stable: it appears in URLs and applications reference it
/// as the preferred property.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Property {
    pub id: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub neighborhood: String,
    pub property_type: PropertyType,
    pub units: Vec<Unit>,
    pub features: Vec<String>,
    pub nearby_schools: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance_to_campus: Option<String>,
    pub images: Vec<String>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub summer_sublet: bool,
}

impl Property {
    /// Bedrooms across every unit in the building.
    pub fn total_bedrooms(&self) -> u32 {
        self.units.iter().map(|unit| unit.bedrooms).sum()
    }

    /// True when at least one unit has exactly this bedroom count.
    pub fn has_bedroom_count(&self, bedrooms: u32) -> bool {
        self.units.iter().any(|unit| unit.bedrooms == bedrooms)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PropertyType {
    SingleFamily,
    MultiFamily,
}

impl PropertyType {
    pub const fn label(self) -> &'static str {
        match self {
            Self::SingleFamily => "Single Family",
            Self::MultiFamily => "Multi Family",
        }
    }
}

/// A leasable sub-division of a property. Owned exclusively by its
/// parent; unit ids are unique within the building.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Unit {
    pub id: String,
    pub bedrooms: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bathrooms: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub floor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rent: Option<u32>,
    pub available: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available_date: Option<NaiveDate>,
}
