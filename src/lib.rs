// Copyright (c) 2026 Ken Barker

// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"),
// to deal in the Software without restriction, including without limitation the
// rights to use, copy, modify, merge, publish, distribute, sublicense, and/or
// sell copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:

// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.

// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN
// THE SOFTWARE.

//! wgs84-distance
//!
//! A library for calculating the surface distance between two positions on the
//! [WGS-84](https://www.icao.int/NACC/Documents/Meetings/2014/ECARAIM/REF08-Doc9674.pdf)
//! ellipsoid.
//!
//! The library provides two independent, stateless solvers:
//!
//! - [`great_circle`] calculates the distance with the haversine formula,
//!   corrected by the local (geocentric) Earth radius at the latitudes of the
//!   positions;
//! - [`vincenty`] calculates the ellipsoidal geodesic distance with Vincenty's
//!   iterative inverse method.
//!
//! Both solvers operate on a [`GeodesicSegment`]: an ordered pair of validated
//! geodetic positions, with latitudes in [-90°, +90°] and longitudes in
//! [-180°, +180°]. A longitude of exactly -180° should be normalized to +180°
//! with [`normalize_longitude`] before constructing a segment, so that
//! segments spanning the antimeridian in either direction are identical.
//!
//! The [`Ellipsoid`] type holds the fixed constants derived from the Semimajor
//! axis and flattening ratio. The static [`WGS84_ELLIPSOID`] represents
//! the WGS-84 `Ellipsoid` and is used by the convenience functions
//! [`calculate_great_circle_distance`] and [`calculate_geodesic_distance`].
//!
//! All calculations are pure functions of their inputs and the read-only
//! ellipsoid constants, so they may be called concurrently from multiple
//! threads without synchronization.
//!
//! The library depends upon the following crates:
//!
//! - [angle-sc](https://crates.io/crates/angle-sc) - to define `Degrees` and
//!   `Radians` and perform tolerance comparisons;
//! - [unit-sphere](https://crates.io/crates/unit-sphere) - to define `LatLong`;
//! - [icao-units](https://crates.io/crates/icao-units) - to define `Metres`;
//! - [libm](https://crates.io/crates/libm) - to perform trigonometric
//!   calculations without the standard library.
//!
//! The library is declared [no_std](https://docs.rust-embedded.org/book/intro/no-std.html)
//! so it can be used in embedded applications.

#![cfg_attr(not(test), no_std)]

pub mod ellipsoid;
pub mod great_circle;
pub mod vincenty;

pub use angle_sc::{Degrees, Radians};
pub use icao_units::si::Metres;
pub use unit_sphere::LatLong;
pub use vincenty::VincentyError;

/// The absolute tolerance, in radians, for degenerate case detection and for
/// the convergence of Vincenty's inverse method.
///
/// A single tolerance is used throughout so that branch selection near the
/// degenerate boundaries is consistent between the solvers.
pub const EPSILON: f64 = 1e-12;

/// The parameters of an `Ellipsoid`.
#[derive(Clone, Debug, PartialEq)]
pub struct Ellipsoid {
    /// The Semimajor axis of the ellipsoid.
    a: Metres,
    /// The flattening of the ellipsoid, a ratio.
    f: f64,

    /// The Semiminor axis of the ellipsoid.
    b: Metres,
    /// One minus the flattening ratio.
    one_minus_f: f64,
    /// The square of the second Eccentricity of the ellipsoid: `(a²-b²)/b²`.
    ep_2: f64,
}

impl Ellipsoid {
    /// Constructor.
    /// * `a` - the Semimajor axis of the `Ellipsoid`.
    /// * `f` - the flattening of the `Ellipsoid`, a ratio.
    #[must_use]
    pub const fn new(a: Metres, f: f64) -> Self {
        Self {
            a,
            f,
            b: ellipsoid::calculate_minor_axis(a, f),
            one_minus_f: 1.0 - f,
            ep_2: ellipsoid::calculate_sq_2nd_eccentricity(f),
        }
    }

    /// Construct an `Ellipsoid` with the WGS-84 parameters.
    #[must_use]
    pub const fn wgs84() -> Self {
        Self::new(ellipsoid::wgs84::A, ellipsoid::wgs84::F)
    }

    /// The Semimajor axis of the ellipsoid.
    #[must_use]
    pub const fn a(&self) -> Metres {
        self.a
    }

    /// The flattening of the ellipsoid, a ratio.
    #[must_use]
    pub const fn f(&self) -> f64 {
        self.f
    }

    /// The Semiminor axis of the ellipsoid.
    #[must_use]
    pub const fn b(&self) -> Metres {
        self.b
    }

    /// One minus the flattening ratio.
    #[must_use]
    pub const fn one_minus_f(&self) -> f64 {
        self.one_minus_f
    }

    /// The square of the second Eccentricity of the ellipsoid.
    #[must_use]
    pub const fn ep_2(&self) -> f64 {
        self.ep_2
    }

    /// The geocentric radius of the ellipsoid at a geodetic latitude.
    /// * `lat` - the geodetic latitude.
    #[must_use]
    pub fn local_radius(&self, lat: Radians) -> Metres {
        ellipsoid::calculate_local_radius(lat, self.a, self.b)
    }

    /// The geocentric diameter of the ellipsoid at a geodetic latitude,
    /// i.e. twice the `local_radius`.
    /// * `lat` - the geodetic latitude.
    #[must_use]
    pub fn local_diameter(&self, lat: Radians) -> Metres {
        Metres(2.0 * self.local_radius(lat).0)
    }
}

/// A static instance of the WGS-84 `Ellipsoid`.
///
/// All of its constants are derived by const arithmetic, so no lazy
/// initialisation is required.
pub static WGS84_ELLIPSOID: Ellipsoid = Ellipsoid::wgs84();

/// An ordered pair of positions on the surface of an ellipsoid, representing
/// the path whose surface distance is to be calculated.
///
/// The positions must have been validated: latitudes in [-90°, +90°] and
/// longitudes in [-180°, +180°]. A `GeodesicSegment` is immutable once
/// constructed.
#[derive(Clone, Debug, PartialEq)]
pub struct GeodesicSegment {
    /// The start position in geodetic coordinates.
    a: LatLong,
    /// The finish position in geodetic coordinates.
    b: LatLong,
}

impl GeodesicSegment {
    /// Construct a `GeodesicSegment`.
    /// * `a`, `b` - the start and finish positions in geodetic coordinates.
    #[must_use]
    pub const fn new(a: LatLong, b: LatLong) -> Self {
        Self { a, b }
    }

    /// Accessor for the start position.
    #[must_use]
    pub const fn a(&self) -> &LatLong {
        &self.a
    }

    /// Accessor for the finish position.
    #[must_use]
    pub const fn b(&self) -> &LatLong {
        &self.b
    }
}

/// Normalize a longitude of exactly -180° to +180°.
///
/// Callers should apply this to longitudes before constructing a
/// [`GeodesicSegment`], so that segments crossing the antimeridian in either
/// direction calculate identical distances.
/// * `lon` - the longitude.
#[allow(clippy::float_cmp)]
#[must_use]
pub fn normalize_longitude(lon: Degrees) -> Degrees {
    if lon.0 == -180.0 {
        Degrees(180.0)
    } else {
        lon
    }
}

/// Calculate the great circle distance (in metres) between a pair of
/// positions, using the haversine formula corrected by the local Earth
/// radius at the average latitude of the positions.
/// * `a`, `b` - the start and finish positions in geodetic coordinates.
/// * `ellipsoid` - the `Ellipsoid`.
///
/// returns the great circle distance between the positions in metres.
///
/// # Examples
/// ```
/// use unit_sphere::LatLong;
/// use wgs84_distance::{calculate_great_circle_distance, Degrees, WGS84_ELLIPSOID};
///
/// let istanbul = LatLong::new(Degrees(42.0), Degrees(29.0));
/// let washington = LatLong::new(Degrees(39.0), Degrees(-77.0));
/// let distance = calculate_great_circle_distance(&istanbul, &washington, &WGS84_ELLIPSOID);
///
/// println!("Istanbul-Washington great circle distance: {:.2}m", distance.0);
/// ```
#[must_use]
pub fn calculate_great_circle_distance(
    a: &LatLong,
    b: &LatLong,
    ellipsoid: &Ellipsoid,
) -> Metres {
    let segment = GeodesicSegment::new(
        LatLong::new(a.lat(), a.lon()),
        LatLong::new(b.lat(), b.lon()),
    );
    great_circle::distance(&segment, ellipsoid)
}

/// Calculate the geodesic distance (in metres) between a pair of positions,
/// using Vincenty's iterative inverse method.
/// * `a`, `b` - the start and finish positions in geodetic coordinates.
/// * `ellipsoid` - the `Ellipsoid`.
///
/// returns the geodesic distance between the positions in metres.
///
/// # Errors
///
/// Returns [`VincentyError::NotConverged`] if the iteration does not converge
/// within [`vincenty::MAX_ITERATIONS`]; a known weak point of the method for
/// antipodal, near antipodal and equatorial positions.
///
/// # Examples
/// ```
/// use angle_sc::is_within_tolerance;
/// use unit_sphere::LatLong;
/// use wgs84_distance::{calculate_geodesic_distance, Degrees, WGS84_ELLIPSOID};
///
/// let istanbul = LatLong::new(Degrees(42.0), Degrees(29.0));
/// let washington = LatLong::new(Degrees(39.0), Degrees(-77.0));
/// let distance = calculate_geodesic_distance(&istanbul, &washington, &WGS84_ELLIPSOID).unwrap();
///
/// assert!(is_within_tolerance(8339863.136, distance.0, 1e-2));
/// ```
pub fn calculate_geodesic_distance(
    a: &LatLong,
    b: &LatLong,
    ellipsoid: &Ellipsoid,
) -> Result<Metres, VincentyError> {
    let segment = GeodesicSegment::new(
        LatLong::new(a.lat(), a.lon()),
        LatLong::new(b.lat(), b.lon()),
    );
    vincenty::distance(&segment, ellipsoid)
}
