//! Attributes of the sites in a network.
//!
//! The network itself is generic over the vertex attribute. [`Site`] is the
//! attribute used for fuel and charging stations. The only part of it that the
//! algorithms look at is its [`Position`], and only for reporting distances
//! (never for choosing routes).

use std::fmt;

/// Rough number of kilometers per degree of latitude or longitude.
pub const KM_PER_DEGREE: f64 = 111.0;

/// Geographic coordinates in degrees.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Position {
    pub lat: f64,
    pub lon: f64,
}

impl Position {
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Straight-line approximation of the distance in kilometers.
    ///
    /// Treats degrees as planar coordinates, which is good enough for sites a
    /// few tens of kilometers apart.
    pub fn rough_distance(&self, other: &Position) -> f64 {
        let dlat = self.lat - other.lat;
        let dlon = self.lon - other.lon;
        (dlat * dlat + dlon * dlon).sqrt() * KM_PER_DEGREE
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.4}, {:.4})", self.lat, self.lon)
    }
}

/// Vertex attributes that have a geographic position.
pub trait Locate {
    fn position(&self) -> Position;
}

impl Locate for Position {
    fn position(&self) -> Position {
        *self
    }
}

impl<T: Locate> Locate for &T {
    fn position(&self) -> Position {
        (**self).position()
    }
}

/// A fuel or charging station.
#[derive(Debug, Clone, PartialEq)]
pub struct Site {
    pub name: String,
    pub location: String,
    pub position: Position,
    /// Services offered at the site (fuel types, charging, amenities).
    pub services: Vec<String>,
}

impl Site {
    pub fn new(name: impl Into<String>, location: impl Into<String>, position: Position) -> Self {
        Self {
            name: name.into(),
            location: location.into(),
            position,
            services: Vec::new(),
        }
    }

    pub fn with_service(mut self, service: impl Into<String>) -> Self {
        self.add_service(service);
        self
    }

    /// Adds a service unless the site already offers it.
    pub fn add_service(&mut self, service: impl Into<String>) {
        let service = service.into();
        if !self.has_service(&service) {
            self.services.push(service);
        }
    }

    pub fn has_service(&self, service: &str) -> bool {
        self.services.iter().any(|s| s == service)
    }

    pub fn rough_distance(&self, other: &Site) -> f64 {
        self.position.rough_distance(&other.position)
    }
}

impl Locate for Site {
    fn position(&self) -> Position {
        self.position
    }
}

impl fmt::Display for Site {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {} at {}", self.name, self.location, self.position)
    }
}
