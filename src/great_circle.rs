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

//! The `great_circle` module calculates the distance between two positions
//! with the [haversine formula](https://en.wikipedia.org/wiki/Haversine_formula#Formulation),
//! corrected for the flattening of the Earth by using the local (geocentric)
//! Earth diameter at the average latitude of the positions.
//!
//! Segments that run purely East-West or purely North-South (within
//! [`EPSILON`]) are calculated with reduced forms of the formula, so zero
//! separation never reaches the inverse sine.

#![allow(clippy::suboptimal_flops)]

use crate::{Ellipsoid, GeodesicSegment, Metres, EPSILON};
use angle_sc::{is_small, trig, Radians};

/// Calculate the great circle distance between the positions of a
/// `GeodesicSegment` in metres.
/// * `segment` - the start and finish positions.
/// * `ellipsoid` - the `Ellipsoid`.
///
/// returns the great circle distance between the positions in metres.
#[must_use]
pub fn distance(segment: &GeodesicSegment, ellipsoid: &Ellipsoid) -> Metres {
    let lat1 = segment.a().lat().0.to_radians();
    let lat2 = segment.b().lat().0.to_radians();
    let delta_lat = lat2 - lat1;
    let delta_lon = segment.b().lon().0.to_radians() - segment.a().lon().0.to_radians();

    let zero_delta_lat = is_small(libm::fabs(delta_lat), EPSILON);
    let zero_delta_lon = is_small(libm::fabs(delta_lon), EPSILON);

    // coincident positions, avoids the inverse sine at zero separation
    if zero_delta_lat && zero_delta_lon {
        return Metres(0.0);
    }

    // a purely East-West segment, using the diameter at the start latitude
    if zero_delta_lat {
        let d = ellipsoid.local_diameter(Radians(lat1));
        return Metres(
            d.0 * libm::asin(libm::fabs(
                libm::cos(lat1) * libm::sin(0.5 * delta_lon),
            )),
        );
    }

    let d = ellipsoid.local_diameter(Radians(0.5 * (lat1 + lat2)));

    // a purely North-South segment
    if zero_delta_lon {
        return Metres(d.0 * libm::asin(libm::fabs(libm::sin(0.5 * delta_lat))));
    }

    let sin_half_lat = libm::sin(0.5 * delta_lat);
    let sin_half_lon = libm::sin(0.5 * delta_lon);
    let h = sin_half_lat * sin_half_lat
        + libm::cos(lat1) * libm::cos(lat2) * sin_half_lon * sin_half_lon;
    // clamp guards against floating point overshoot above one
    let sin_half_angle = trig::UnitNegRange::clamp(libm::sqrt(h));
    Metres(d.0 * libm::asin(sin_half_angle.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Degrees, LatLong, WGS84_ELLIPSOID};
    use angle_sc::is_within_tolerance;

    fn segment(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> GeodesicSegment {
        GeodesicSegment::new(
            LatLong::new(Degrees(lat1), Degrees(lon1)),
            LatLong::new(Degrees(lat2), Degrees(lon2)),
        )
    }

    #[test]
    fn test_coincident_positions() {
        assert_eq!(
            Metres(0.0),
            distance(&segment(45.0, 9.0, 45.0, 9.0), &WGS84_ELLIPSOID)
        );
        assert_eq!(
            Metres(0.0),
            distance(&segment(-90.0, 180.0, -90.0, 180.0), &WGS84_ELLIPSOID)
        );
    }

    #[test]
    fn test_one_degree_along_the_equator() {
        // uses the East-West branch with the equatorial diameter,
        // so the distance is exactly one degree of equatorial arc
        let d = distance(&segment(0.0, 0.0, 0.0, 1.0), &WGS84_ELLIPSOID);
        let expected = WGS84_ELLIPSOID.a().0 * 1.0_f64.to_radians();
        assert!(is_within_tolerance(expected, d.0, 1e-8));
        assert!(is_within_tolerance(111_319.49, d.0, 1e-2));
    }

    #[test]
    fn test_pole_to_pole() {
        // a purely North-South segment; the average latitude is the Equator
        // so the haversine arc is half an equatorial circumference
        let d = distance(&segment(90.0, 0.0, -90.0, 0.0), &WGS84_ELLIPSOID);
        let expected = core::f64::consts::PI * WGS84_ELLIPSOID.a().0;
        assert!(is_within_tolerance(expected, d.0, 1e-8));
    }

    #[test]
    fn test_east_west_at_latitude() {
        // one degree of longitude at 60N spans roughly half the
        // equatorial value, scaled by the local radius
        let d = distance(&segment(60.0, 5.0, 60.0, 6.0), &WGS84_ELLIPSOID);
        assert!(55_000.0 < d.0 && d.0 < 56_000.0);

        // symmetric East-West
        let d2 = distance(&segment(60.0, 6.0, 60.0, 5.0), &WGS84_ELLIPSOID);
        assert!(is_within_tolerance(d.0, d2.0, 1e-8));
    }

    #[test]
    fn test_degenerate_branches_match_general_formula() {
        // a longitude delta just above EPSILON selects the general formula,
        // which must agree with the North-South branch in the limit
        let north_south = distance(&segment(10.0, 20.0, 11.0, 20.0), &WGS84_ELLIPSOID);
        let nearly_north_south = distance(
            &segment(10.0, 20.0, 11.0, 20.0 + 1e-9),
            &WGS84_ELLIPSOID,
        );
        assert!(is_within_tolerance(north_south.0, nearly_north_south.0, 1e-3));

        // and likewise for the East-West branch
        let east_west = distance(&segment(10.0, 20.0, 10.0, 21.0), &WGS84_ELLIPSOID);
        let nearly_east_west = distance(
            &segment(10.0, 20.0, 10.0 + 1e-9, 21.0),
            &WGS84_ELLIPSOID,
        );
        assert!(is_within_tolerance(east_west.0, nearly_east_west.0, 1e-3));
    }

    #[test]
    fn test_antimeridian_segments_are_equal() {
        // a longitude difference of +180 and -180 degrees must calculate
        // the same distance
        let eastward = distance(&segment(30.0, 0.0, 30.0, 180.0), &WGS84_ELLIPSOID);
        let westward = distance(&segment(30.0, 180.0, 30.0, 0.0), &WGS84_ELLIPSOID);
        assert!(is_within_tolerance(eastward.0, westward.0, 1e-8));
    }
}
