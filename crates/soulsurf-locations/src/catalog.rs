//! Seeded location catalog and category filtering.

use crate::types::{ContactInfo, Coordinates, Location, LocationCategory, LocationDetails};

/// Which marker categories the map is currently showing.
///
/// Mirrors the filter toggles in the UI layer; everything on by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryFilter {
    pub beaches: bool,
    pub repairs: bool,
    pub shops: bool,
}

impl Default for CategoryFilter {
    fn default() -> Self {
        Self {
            beaches: true,
            repairs: true,
            shops: true,
        }
    }
}

impl CategoryFilter {
    pub fn allows(&self, category: LocationCategory) -> bool {
        match category {
            LocationCategory::Beach => self.beaches,
            LocationCategory::Repair => self.repairs,
            LocationCategory::Shop => self.shops,
        }
    }
}

/// Immutable collection of every location known to the app.
#[derive(Debug, Clone)]
pub struct LocationCatalog {
    locations: Vec<Location>,
}

impl LocationCatalog {
    /// Build a catalog from an explicit location list.
    pub fn new(locations: Vec<Location>) -> Self {
        Self { locations }
    }

    /// The built-in Fortaleza-CE location set.
    pub fn seed() -> Self {
        Self::new(seed_locations())
    }

    pub fn all(&self) -> &[Location] {
        &self.locations
    }

    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    /// Look up a location by id.
    pub fn get(&self, id: &str) -> Option<&Location> {
        self.locations.iter().find(|l| l.id == id)
    }

    /// All surf beaches, in seed order.
    pub fn beaches(&self) -> impl Iterator<Item = &Location> {
        self.locations.iter().filter(|l| l.is_beach())
    }

    /// Locations visible under the given filter, in seed order.
    pub fn filtered(&self, filter: &CategoryFilter) -> Vec<&Location> {
        self.locations
            .iter()
            .filter(|l| filter.allows(l.category()))
            .collect()
    }
}

impl Default for LocationCatalog {
    fn default() -> Self {
        Self::seed()
    }
}

fn seed_locations() -> Vec<Location> {
    let mut locations = Vec::new();

    // Beaches in Fortaleza-CE
    locations.push(Location {
        id: "beach-1".to_string(),
        name: "Praia do Futuro".to_string(),
        coordinates: Coordinates {
            latitude: -3.7413,
            longitude: -38.4500,
        },
        description: Some(
            "Praia popular com ondas consistentes, perfeita para iniciantes e surfistas \
             intermediários."
                .to_string(),
        ),
        details: LocationDetails::Beach {
            wave_quality: 4,
            difficulty: 2,
            best_tide: "Maré média a alta".to_string(),
            best_wind: "Terral (SO)".to_string(),
        },
    });
    locations.push(Location {
        id: "beach-2".to_string(),
        name: "Praia de Iracema".to_string(),
        coordinates: Coordinates {
            latitude: -3.7204,
            longitude: -38.5138,
        },
        description: Some(
            "Praia urbana com quebra de recife, boa para surfistas intermediários durante o \
             swell adequado."
                .to_string(),
        ),
        details: LocationDetails::Beach {
            wave_quality: 3,
            difficulty: 3,
            best_tide: "Maré baixa a média".to_string(),
            best_wind: "Terral (S)".to_string(),
        },
    });
    locations.push(Location {
        id: "beach-3".to_string(),
        name: "Praia do Titanzinho".to_string(),
        coordinates: Coordinates {
            latitude: -3.7100,
            longitude: -38.4683,
        },
        description: Some(
            "Point break famoso com ondas potentes, berço de muitos profissionais brasileiros."
                .to_string(),
        ),
        details: LocationDetails::Beach {
            wave_quality: 5,
            difficulty: 4,
            best_tide: "Todas as marés, melhor na média".to_string(),
            best_wind: "Terral (SO)".to_string(),
        },
    });

    // Surfboard repair services
    locations.push(Location {
        id: "repair-1".to_string(),
        name: "Ceará Ding Repair".to_string(),
        coordinates: Coordinates {
            latitude: -3.7307,
            longitude: -38.5003,
        },
        description: None,
        details: LocationDetails::Repair {
            contact: ContactInfo {
                instagram: Some("@cearadingrepair".to_string()),
                phone: Some("+55 85 98765-4321".to_string()),
                whatsapp: Some("+55 85 98765-4321".to_string()),
                hours: Some("Seg-Sex: 9h-18h, Sáb: 9h-14h".to_string()),
            },
            rating: 4.8,
            specialty: Some("Todos os reparos, especializado em fibra de vidro".to_string()),
        },
    });
    locations.push(Location {
        id: "repair-2".to_string(),
        name: "Mestre Shaper".to_string(),
        coordinates: Coordinates {
            latitude: -3.7337,
            longitude: -38.4931,
        },
        description: None,
        details: LocationDetails::Repair {
            contact: ContactInfo {
                instagram: Some("@mestreshaper".to_string()),
                phone: Some("+55 85 99876-5432".to_string()),
                whatsapp: None,
                hours: Some("Seg-Sáb: 10h-19h".to_string()),
            },
            rating: 4.5,
            specialty: Some("Shape personalizado e reparos".to_string()),
        },
    });

    // Surf shops
    locations.push(Location {
        id: "shop-1".to_string(),
        name: "Fortaleza Surf".to_string(),
        coordinates: Coordinates {
            latitude: -3.7280,
            longitude: -38.5020,
        },
        description: None,
        details: LocationDetails::Shop {
            contact: ContactInfo {
                instagram: Some("@fortalezasurfshop".to_string()),
                phone: Some("+55 85 3222-1234".to_string()),
                whatsapp: Some("+55 85 98888-1234".to_string()),
                hours: Some("Diariamente: 9h-20h".to_string()),
            },
            rating: 4.6,
        },
    });
    locations.push(Location {
        id: "shop-2".to_string(),
        name: "Rip Wave Store".to_string(),
        coordinates: Coordinates {
            latitude: -3.7350,
            longitude: -38.5070,
        },
        description: None,
        details: LocationDetails::Shop {
            contact: ContactInfo {
                instagram: Some("@ripwavestore".to_string()),
                phone: Some("+55 85 3222-5678".to_string()),
                whatsapp: None,
                hours: Some("Seg-Sáb: 10h-19h".to_string()),
            },
            rating: 4.2,
        },
    });
    locations.push(Location {
        id: "shop-3".to_string(),
        name: "Ceará Surfboards".to_string(),
        coordinates: Coordinates {
            latitude: -3.7420,
            longitude: -38.4900,
        },
        description: None,
        details: LocationDetails::Shop {
            contact: ContactInfo {
                instagram: Some("@cearasurfboards".to_string()),
                phone: Some("+55 85 3222-9012".to_string()),
                whatsapp: Some("+55 85 99999-9012".to_string()),
                hours: Some("Diariamente: 8h-21h".to_string()),
            },
            rating: 4.7,
        },
    });

    locations
}
