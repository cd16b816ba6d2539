//! Marker data model.
//!
//! Destinations are a fixed table compiled into the binary. Custom markers are
//! created by the user at runtime and live only as long as the process.

pub type DestinationId = usize;
pub type MarkerId = usize;

/// A geographic position in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

impl std::fmt::Display for LatLng {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.4}, {:.4}", self.lat, self.lng)
    }
}

/// A predefined point of interest.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Destination {
    pub id: DestinationId,
    pub name: &'static str,
    pub position: LatLng,
    pub description: &'static str,
}

/// A user-placed marker. Never mutated after creation.
#[derive(Debug, Clone, PartialEq)]
pub struct CustomMarker {
    pub id: MarkerId,
    pub position: LatLng,
    pub name: String,
    pub description: String,
}

/// Identifies a marker on the canvas regardless of origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarkerRef {
    Destination(DestinationId),
    Custom(MarkerId),
}

pub const DESTINATIONS: [Destination; 4] = [
    Destination {
        id: 1,
        name: "London",
        position: LatLng::new(51.505, -0.09),
        description: "The capital of England and the United Kingdom",
    },
    Destination {
        id: 2,
        name: "Paris",
        position: LatLng::new(48.8566, 2.3522),
        description: "The City of Light, capital of France",
    },
    Destination {
        id: 3,
        name: "New York",
        position: LatLng::new(40.7128, -74.0060),
        description: "The Big Apple, a global center of culture and commerce",
    },
    Destination {
        id: 4,
        name: "Tokyo",
        position: LatLng::new(35.6762, 139.6503),
        description: "The capital of Japan, a blend of tradition and innovation",
    },
];

pub fn find_destination(id: DestinationId) -> Option<&'static Destination> {
    DESTINATIONS.iter().find(|d| d.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_destination_ids_unique() {
        let ids: HashSet<_> = DESTINATIONS.iter().map(|d| d.id).collect();
        assert_eq!(ids.len(), DESTINATIONS.len());
    }

    #[test]
    fn test_find_destination() {
        assert_eq!(find_destination(2).map(|d| d.name), Some("Paris"));
        assert!(find_destination(99).is_none());
    }
}
