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

//! The ellipsoid module contains functions for deriving the constants of an
//! ellipsoid from its Semimajor axis and flattening ratio, together with the
//! location-dependent (geocentric) Earth radius used by the great circle
//! distance calculation.

#![allow(clippy::suboptimal_flops)]

use crate::{Metres, EPSILON};
use angle_sc::{is_small, Radians};

pub mod wgs84 {
    //! The WGS 84 geoid primary parameters from the ICAO
    //! [WGS 84 Implementation Manual Version 2.4](https://www.icao.int/safety/pbn/Documentation/EUROCONTROL/Eurocontrol%20WGS%2084%20Implementation%20Manual.pdf)
    //! Chapter 3, page 14.

    use crate::Metres;

    /// The WGS 84 Semimajor axis measured in metres.
    /// This is the radius at the equator.
    pub const A: Metres = Metres(6_378_137.0);

    /// The WGS 84 flattening, a ratio.
    /// This is the flattening of the ellipsoid at the poles.
    pub const F: f64 = 1.0 / 298.257_223_563;
}

/// Calculate the Semiminor axis of an ellipsoid.
/// * `a` - the Semimajor axis of an ellipsoid.
/// * `f` - the flattening ratio.
/// # Examples
/// ```
/// use wgs84_distance::Metres;
/// use wgs84_distance::ellipsoid::{calculate_minor_axis, wgs84};
///
/// // The WGS 84 Semiminor axis measured in metres.
/// let b : Metres = Metres(6_356_752.314_245_179);
/// assert_eq!(b, calculate_minor_axis(wgs84::A, wgs84::F));
/// ```
#[must_use]
pub const fn calculate_minor_axis(a: Metres, f: f64) -> Metres {
    Metres(a.0 * (1.0 - f))
}

/// Calculate the square of the Eccentricity of an ellipsoid.
/// * `f` - the flattening ratio.
/// # Examples
/// ```
/// use wgs84_distance::ellipsoid::{calculate_sq_eccentricity, wgs84};
///
/// // The WGS 84 sq_eccentricity.
/// assert_eq!(0.0066943799901413165, calculate_sq_eccentricity(wgs84::F));
/// ```
#[must_use]
pub const fn calculate_sq_eccentricity(f: f64) -> f64 {
    f * (2.0 - f)
}

/// Calculate the square of the second Eccentricity of an ellipsoid:
/// `(a² - b²) / b²`.
/// * `f` - the flattening ratio.
/// # Examples
/// ```
/// use wgs84_distance::ellipsoid::{calculate_sq_2nd_eccentricity, wgs84};
///
/// // The WGS 84 sq 2nd eccentricity.
/// assert_eq!(0.006739496742276434, calculate_sq_2nd_eccentricity(wgs84::F));
/// ```
#[must_use]
pub const fn calculate_sq_2nd_eccentricity(f: f64) -> f64 {
    let one_minus_f = 1.0 - f;
    calculate_sq_eccentricity(f) / (one_minus_f * one_minus_f)
}

/// Calculate the geocentric radius of an ellipsoid at a geodetic latitude,
/// see [Location-dependent radii](https://en.wikipedia.org/wiki/Earth_radius#Location-dependent_radii).
///
/// Latitudes within `EPSILON` of the Equator return the Semimajor axis and
/// latitudes within `EPSILON` of a pole return the Semiminor axis, avoiding
/// cancellation errors in the general expression at those latitudes.
/// * `lat` - the geodetic latitude.
/// * `a` - the Semimajor axis of an ellipsoid.
/// * `b` - the Semiminor axis of an ellipsoid.
/// # Examples
/// ```
/// use angle_sc::Radians;
/// use wgs84_distance::ellipsoid::{calculate_local_radius, calculate_minor_axis, wgs84};
///
/// let b = calculate_minor_axis(wgs84::A, wgs84::F);
/// assert_eq!(wgs84::A, calculate_local_radius(Radians(0.0), wgs84::A, b));
/// assert_eq!(b, calculate_local_radius(Radians(-core::f64::consts::FRAC_PI_2), wgs84::A, b));
/// ```
#[must_use]
pub fn calculate_local_radius(lat: Radians, a: Metres, b: Metres) -> Metres {
    if is_small(libm::fabs(lat.0), EPSILON) {
        return a;
    }
    if is_small(
        libm::fabs(libm::fabs(lat.0) - core::f64::consts::FRAC_PI_2),
        EPSILON,
    ) {
        return b;
    }

    let sq_a = a.0 * a.0;
    let sq_b = b.0 * b.0;
    let (s, c) = libm::sincos(lat.0);
    let rs = sq_b * s * s;
    let rc = sq_a * c * c;
    Metres(libm::sqrt((sq_b * rs + sq_a * rc) / (rs + rc)))
}
