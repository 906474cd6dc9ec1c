//! Planar coordinate helpers used to lay out shipment routes on a map.
//!
//! Everything here works in coordinate-degree space. None of it is geodesic:
//! the curves exist to read well on a web-mercator map, not to navigate by.

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

pub const DEFAULT_ARC_SEGMENTS: usize = 60;
pub const ARC_CURVE_FACTOR: f64 = 0.12;
pub const ARC_MAX_AMPLITUDE_DEG: f64 = 15.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinate {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    pub fn is_finite(&self) -> bool {
        self.lat.is_finite() && self.lng.is_finite()
    }

    /// Finite and inside [-90, 90] x [-180, 180].
    pub fn is_valid(&self) -> bool {
        self.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lng)
    }

    pub fn planar_distance(&self, other: Coordinate) -> f64 {
        let d_lat = other.lat - self.lat;
        let d_lng = other.lng - self.lng;
        (d_lat * d_lat + d_lng * d_lng).sqrt()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub north: f64,
    pub south: f64,
    pub east: f64,
    pub west: f64,
}

impl BoundingBox {
    pub fn around(coord: Coordinate) -> Self {
        Self {
            north: coord.lat,
            south: coord.lat,
            east: coord.lng,
            west: coord.lng,
        }
    }

    /// Smallest box holding every point, or `None` for an empty input.
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = Coordinate>,
    {
        let mut points = points.into_iter();
        let first = points.next()?;
        let mut bounds = Self::around(first);
        for point in points {
            bounds.extend(point);
        }
        Some(bounds)
    }

    pub fn extend(&mut self, coord: Coordinate) {
        self.north = self.north.max(coord.lat);
        self.south = self.south.min(coord.lat);
        self.east = self.east.max(coord.lng);
        self.west = self.west.min(coord.lng);
    }

    pub fn contains(&self, coord: Coordinate) -> bool {
        coord.lat <= self.north
            && coord.lat >= self.south
            && coord.lng <= self.east
            && coord.lng >= self.west
    }

    pub fn south_west(&self) -> Coordinate {
        Coordinate::new(self.south, self.west)
    }

    pub fn north_east(&self) -> Coordinate {
        Coordinate::new(self.north, self.east)
    }

    pub fn center(&self) -> Coordinate {
        Coordinate::new(
            (self.north + self.south) / 2.0,
            (self.east + self.west) / 2.0,
        )
    }

    pub fn is_point(&self) -> bool {
        self.north == self.south && self.east == self.west
    }
}

/// Bulge height in degrees for a hop between two points.
pub fn arc_amplitude(start: Coordinate, end: Coordinate) -> f64 {
    (start.planar_distance(end) * ARC_CURVE_FACTOR).min(ARC_MAX_AMPLITUDE_DEG)
}

/// Curved "hop" between two coordinates.
///
/// Longitude is interpolated linearly; latitude is interpolated linearly and
/// then lifted by `sin(pi * t) * amplitude`, so the bulge is symmetric and
/// peaks halfway. The result always holds `segments + 1` points, the first
/// equal to `start` and the last equal to `end`. A `segments` of zero is
/// treated as one.
pub fn arc(start: Coordinate, end: Coordinate, segments: usize) -> Vec<Coordinate> {
    let segments = segments.max(1);
    if start == end {
        return vec![start; segments + 1];
    }

    let amplitude = arc_amplitude(start, end);
    (0..=segments)
        .map(|index| {
            let t = index as f64 / segments as f64;
            let bulge = if index == 0 || index == segments {
                0.0
            } else {
                (PI * t).sin() * amplitude
            };
            Coordinate::new(lerp(start.lat, end.lat, t) + bulge, lerp(start.lng, end.lng, t))
        })
        .collect()
}

/// Index into a polyline of `len` points for a journey `progress_percent` complete.
///
/// Computed as `floor(progress / 100 * len)` and clamped to the last index.
/// Returns `None` only for an empty polyline.
pub fn progress_index(len: usize, progress_percent: u8) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let progress = f64::from(progress_percent.min(100)) / 100.0;
    let index = (progress * len as f64).floor() as usize;
    Some(index.min(len - 1))
}

pub fn point_at_progress(points: &[Coordinate], progress_percent: u8) -> Option<Coordinate> {
    progress_index(points.len(), progress_percent).map(|index| points[index])
}

// Exact at both ends, unlike `a + (b - a) * t`.
fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a * (1.0 - t) + b * t
}
