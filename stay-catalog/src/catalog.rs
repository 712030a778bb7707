use std::path::Path;

use stay_core::Listing;

/// Default page size for search results.
pub const ITEMS_PER_PAGE: usize = 12;

/// An amenity the dataset may reference, with its display label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AmenityInfo {
    pub id: &'static str,
    pub label: &'static str,
}

pub const AMENITIES: &[AmenityInfo] = &[
    AmenityInfo { id: "wifi", label: "WiFi" },
    AmenityInfo { id: "kitchen", label: "Kitchen" },
    AmenityInfo { id: "parking", label: "Free parking" },
    AmenityInfo { id: "pool", label: "Pool" },
    AmenityInfo { id: "petFriendly", label: "Pet friendly" },
    AmenityInfo { id: "airConditioning", label: "Air conditioning" },
    AmenityInfo { id: "washer", label: "Washer" },
    AmenityInfo { id: "tv", label: "TV" },
    AmenityInfo { id: "heating", label: "Heating" },
    AmenityInfo { id: "workspace", label: "Workspace" },
];

/// Rating thresholds offered by the filter panel.
pub const RATING_FILTERS: &[(f64, &str)] = &[(4.0, "4+ stars"), (4.5, "4.5+ stars")];

pub fn amenity_label(id: &str) -> Option<&'static str> {
    AMENITIES.iter().find(|a| a.id == id).map(|a| a.label)
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read dataset: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed dataset: {0}")]
    Parse(#[from] serde_json::Error),
}

/// The loaded listing collection. Read-only after construction; every search
/// operates over a borrowed slice of it.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    listings: Vec<Listing>,
}

impl Catalog {
    pub fn new(listings: Vec<Listing>) -> Self {
        Self { listings }
    }

    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let listings: Vec<Listing> = serde_json::from_str(json)?;
        tracing::debug!("loaded catalog with {} listings", listings.len());
        Ok(Self { listings })
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json(&raw)
    }

    pub fn listings(&self) -> &[Listing] {
        &self.listings
    }

    pub fn get(&self, id: &str) -> Option<&Listing> {
        self.listings.iter().find(|l| l.id == id)
    }

    pub fn len(&self) -> usize {
        self.listings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }
}
