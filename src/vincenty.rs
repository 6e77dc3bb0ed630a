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

//! The `vincenty` module calculates the geodesic distance between two
//! positions on an ellipsoid with
//! [Vincenty's inverse method](https://en.wikipedia.org/wiki/Vincenty%27s_formulae),
//! iterating on the longitude difference on the auxiliary sphere.
//!
//! The method is known not to converge for antipodal and near antipodal
//! positions. The midpoint term `cos2σm` divides by `cos²α` without a zero
//! guard, so purely equatorial segments (where `cos²α` is zero) do not
//! converge either. The iteration is therefore bounded by
//! [`MAX_ITERATIONS`] and failure to converge within the bound is reported
//! as [`VincentyError::NotConverged`], never as a fallback value.

#![allow(clippy::many_single_char_names)]
#![allow(clippy::similar_names)]
#![allow(clippy::suboptimal_flops)]

use crate::{Ellipsoid, GeodesicSegment, Metres, EPSILON};
use angle_sc::is_small;
use thiserror::Error;

/// The maximum number of iterations of the longitude difference.
///
/// Vincenty's method normally converges within tens of iterations; the bound
/// guarantees termination for the antipodal and equatorial inputs where the
/// unbounded method loops forever.
pub const MAX_ITERATIONS: u32 = 1000;

/// The error type for Vincenty's inverse method.
#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub enum VincentyError {
    /// The iteration did not converge within `MAX_ITERATIONS`.
    #[error("failed to converge within {} iterations", MAX_ITERATIONS)]
    NotConverged,
}

/// Calculate the geodesic distance between the positions of a
/// `GeodesicSegment` in metres, using Vincenty's inverse method.
/// * `segment` - the start and finish positions.
/// * `ellipsoid` - the `Ellipsoid`.
///
/// returns the geodesic distance between the positions in metres.
///
/// # Errors
///
/// Returns [`VincentyError::NotConverged`] if the longitude difference does
/// not converge within [`MAX_ITERATIONS`].
pub fn distance(
    segment: &GeodesicSegment,
    ellipsoid: &Ellipsoid,
) -> Result<Metres, VincentyError> {
    let lat1 = segment.a().lat().0.to_radians();
    let lat2 = segment.b().lat().0.to_radians();
    let delta_lat = lat2 - lat1;
    let delta_lon = segment.b().lon().0.to_radians() - segment.a().lon().0.to_radians();

    // coincident positions
    if is_small(libm::fabs(delta_lat), EPSILON) && is_small(libm::fabs(delta_lon), EPSILON) {
        return Ok(Metres(0.0));
    }

    let f = ellipsoid.f();

    // the reduced latitudes on the auxiliary sphere
    let u1 = libm::atan(ellipsoid.one_minus_f() * libm::tan(lat1));
    let u2 = libm::atan(ellipsoid.one_minus_f() * libm::tan(lat2));
    let (sin_u1, cos_u1) = libm::sincos(u1);
    let (sin_u2, cos_u2) = libm::sincos(u2);

    // iterate on lambda, the longitude difference on the auxiliary sphere
    let mut lambda = delta_lon;
    for _ in 0..MAX_ITERATIONS {
        let (sin_lambda, cos_lambda) = libm::sincos(lambda);

        let x = cos_u2 * sin_lambda;
        let y = cos_u1 * sin_u2 - sin_u1 * cos_u2 * cos_lambda;
        let sin_sigma = libm::sqrt(x * x + y * y);
        let cos_sigma = sin_u1 * sin_u2 + cos_u1 * cos_u2 * cos_lambda;
        let sigma = libm::atan2(sin_sigma, cos_sigma);

        let sin_alpha = cos_u1 * cos_u2 * sin_lambda / sin_sigma;
        let sq_cos_alpha = 1.0 - sin_alpha * sin_alpha;

        // Note: sq_cos_alpha is zero on an equatorial segment, so cos_2sigma_m
        // becomes NaN there and the iteration runs to the bound.
        let cos_2sigma_m = cos_sigma - 2.0 * sin_u1 * sin_u2 / sq_cos_alpha;

        let c = (f / 16.0) * sq_cos_alpha * (4.0 + f * (4.0 - 3.0 * sq_cos_alpha));
        let previous_lambda = lambda;
        lambda = delta_lon
            + (1.0 - c)
                * f
                * sin_alpha
                * (sigma
                    + c * sin_sigma
                        * (cos_2sigma_m
                            + c * cos_sigma * (-1.0 + 2.0 * cos_2sigma_m * cos_2sigma_m)));

        if libm::fabs(lambda - previous_lambda) <= EPSILON {
            // the series coefficients, in simplified continued fraction form
            let sq_u = sq_cos_alpha * ellipsoid.ep_2();
            let t = libm::sqrt(1.0 + sq_u);
            let k1 = (t - 1.0) / (t + 1.0);
            let a = (1.0 + 0.25 * k1 * k1) / (1.0 - k1);
            let b = k1 * (1.0 - 0.375 * k1 * k1);

            let delta_sigma = b
                * sin_sigma
                * (cos_2sigma_m
                    + 0.25
                        * b
                        * (cos_sigma * (-1.0 + 2.0 * cos_2sigma_m * cos_2sigma_m)
                            - (b / 6.0)
                                * cos_2sigma_m
                                * (-3.0 + 4.0 * sin_sigma * sin_sigma)
                                * (-3.0 + 4.0 * cos_2sigma_m * cos_2sigma_m)));

            return Ok(Metres(ellipsoid.b().0 * a * (sigma - delta_sigma)));
        }
    }

    Err(VincentyError::NotConverged)
}
