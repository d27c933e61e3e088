//! Geographic coordinates and great-circle distance.

/// Mean Earth radius in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Kilometres per statute mile.
const KM_PER_MILE: f64 = 1.60934;

/// A geographic coordinate in degrees.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeoCoord {
    /// Longitude, degrees.
    pub lon: f64,
    /// Latitude, degrees.
    pub lat: f64,
}

impl GeoCoord {
    /// Create a coordinate from `(longitude, latitude)` in degrees.
    pub fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }
}

/// Output unit for [`haversine`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DistanceUnit {
    /// Kilometres (the unit the diffusion stencil weights with).
    Kilometres,
    /// Statute miles.
    Miles,
}

/// Great-circle distance between two coordinates.
///
/// Half-angle haversine formulation over a spherical Earth of radius
/// [`EARTH_RADIUS_KM`].
///
/// # Examples
///
/// ```
/// use clime_space::{haversine, DistanceUnit, GeoCoord};
///
/// let origin = GeoCoord::new(0.0, 0.0);
/// assert_eq!(haversine(origin, origin, DistanceUnit::Kilometres), 0.0);
///
/// // Equator to pole is a quarter great-circle.
/// let pole = GeoCoord::new(0.0, 90.0);
/// let d = haversine(origin, pole, DistanceUnit::Kilometres);
/// assert!((d - 10_007.5).abs() < 0.1);
/// ```
pub fn haversine(a: GeoCoord, b: GeoCoord, unit: DistanceUnit) -> f64 {
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lon = (b.lon - a.lon).to_radians();

    let h = (d_lat / 2.0).sin().powi(2)
        + a.lat.to_radians().cos() * b.lat.to_radians().cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());
    let d = EARTH_RADIUS_KM * c;

    match unit {
        DistanceUnit::Kilometres => d,
        DistanceUnit::Miles => d / KM_PER_MILE,
    }
}
