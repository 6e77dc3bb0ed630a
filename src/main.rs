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

//! Calculate the surface distance between two lat/lon points on Earth:
//!
//! ```text
//! wgs84-distance lat1 lon1 lat2 lon2
//! ```
//!
//! where all arguments are decimal degrees. Outputs the great circle
//! distance in metres with centimetre precision on the first line and the
//! Vincenty geodesic distance with millimetre precision on the second.
//!
//! Each validation failure maps to its own process exit code.

use std::env;
use std::process::ExitCode;

use thiserror::Error;
use unit_sphere::LatLong;
use wgs84_distance::{
    calculate_geodesic_distance, calculate_great_circle_distance, normalize_longitude, Degrees,
    WGS84_ELLIPSOID,
};

/// The validation and calculation failures of the command line wrapper,
/// each with a distinct exit code.
#[derive(Clone, Debug, Error, PartialEq)]
enum CliError {
    #[error("Provide 4 arguments: lat1 lon1 lat2 lon2.")]
    ArgumentCount,
    #[error("Not a number: {0}.")]
    NotANumber(String),
    #[error("Out of range: {0}.")]
    OutOfRange(String),
    #[error("Latitude must be between -90 and +90: {0}.")]
    LatitudeBounds(String),
    #[error("Longitude must be between -180 and +180: {0}.")]
    LongitudeBounds(String),
    #[error("Geodesic distance did not converge.")]
    NotConverged,
}

impl CliError {
    const fn exit_code(&self) -> u8 {
        match self {
            Self::ArgumentCount => 1,
            Self::NotANumber(_) => 2,
            Self::OutOfRange(_) => 3,
            Self::LatitudeBounds(_) => 4,
            Self::LongitudeBounds(_) => 5,
            Self::NotConverged => 6,
        }
    }
}

/// Parse a command line argument as a finite `f64`.
fn parse_argument(arg: &str) -> Result<f64, CliError> {
    let value: f64 = arg
        .parse()
        .map_err(|_| CliError::NotANumber(arg.to_string()))?;
    // overflow, "inf" and "nan" all parse but are not representable coordinates
    if value.is_finite() {
        Ok(value)
    } else {
        Err(CliError::OutOfRange(arg.to_string()))
    }
}

fn run(args: &[String]) -> Result<(), CliError> {
    if args.len() != 4 {
        return Err(CliError::ArgumentCount);
    }

    let mut values = [0.0_f64; 4];
    for (value, arg) in values.iter_mut().zip(args) {
        *value = parse_argument(arg)?;
    }

    // arguments 1 and 3 are latitudes, 2 and 4 are longitudes
    for i in [0, 2] {
        if values[i] < -90.0 || 90.0 < values[i] {
            return Err(CliError::LatitudeBounds(args[i].clone()));
        }
    }
    for i in [1, 3] {
        if values[i] < -180.0 || 180.0 < values[i] {
            return Err(CliError::LongitudeBounds(args[i].clone()));
        }
    }

    let a = LatLong::new(Degrees(values[0]), normalize_longitude(Degrees(values[1])));
    let b = LatLong::new(Degrees(values[2]), normalize_longitude(Degrees(values[3])));

    let great_circle = calculate_great_circle_distance(&a, &b, &WGS84_ELLIPSOID);
    println!("{:.2}", great_circle.0);

    let geodesic = calculate_geodesic_distance(&a, &b, &WGS84_ELLIPSOID)
        .map_err(|_| CliError::NotConverged)?;
    println!("{:.3}", geodesic.0);

    Ok(())
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().skip(1).collect();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("{error}");
            ExitCode::from(error.exit_code())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(strs: &[&str]) -> Vec<String> {
        strs.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_argument_count() {
        assert_eq!(Err(CliError::ArgumentCount), run(&args(&[])));
        assert_eq!(
            Err(CliError::ArgumentCount),
            run(&args(&["1.0", "2.0", "3.0"]))
        );
        assert_eq!(
            Err(CliError::ArgumentCount),
            run(&args(&["1.0", "2.0", "3.0", "4.0", "5.0"]))
        );
    }

    #[test]
    fn test_parse_argument() {
        assert_eq!(Ok(51.477811), parse_argument("51.477811"));
        assert_eq!(Ok(-0.001475), parse_argument("-0.001475"));
        assert_eq!(
            Err(CliError::NotANumber("51,477811".to_string())),
            parse_argument("51,477811")
        );
        assert_eq!(
            Err(CliError::OutOfRange("1e999".to_string())),
            parse_argument("1e999")
        );
        assert_eq!(
            Err(CliError::OutOfRange("NaN".to_string())),
            parse_argument("NaN")
        );
    }

    #[test]
    fn test_coordinate_bounds() {
        assert_eq!(
            Err(CliError::LatitudeBounds("90.1".to_string())),
            run(&args(&["90.1", "0.0", "0.0", "0.0"]))
        );
        assert_eq!(
            Err(CliError::LatitudeBounds("-91".to_string())),
            run(&args(&["0.0", "0.0", "-91", "0.0"]))
        );
        assert_eq!(
            Err(CliError::LongitudeBounds("180.5".to_string())),
            run(&args(&["0.0", "180.5", "0.0", "0.0"]))
        );
        assert_eq!(
            Err(CliError::LongitudeBounds("-181".to_string())),
            run(&args(&["0.0", "0.0", "0.0", "-181"]))
        );
    }

    #[test]
    fn test_valid_segment() {
        // Greenwich Observatory to the Eiffel Tower
        assert_eq!(
            Ok(()),
            run(&args(&["51.477811", "-0.001475", "48.858222", "2.2945"]))
        );
    }

    #[test]
    fn test_equatorial_segment_reports_non_convergence() {
        assert_eq!(
            Err(CliError::NotConverged),
            run(&args(&["0.0", "0.0", "0.0", "1.0"]))
        );
    }

    #[test]
    fn test_exit_codes_are_distinct() {
        let errors = [
            CliError::ArgumentCount,
            CliError::NotANumber(String::new()),
            CliError::OutOfRange(String::new()),
            CliError::LatitudeBounds(String::new()),
            CliError::LongitudeBounds(String::new()),
            CliError::NotConverged,
        ];
        for (i, error) in errors.iter().enumerate() {
            assert_eq!(1 + i, usize::from(error.exit_code()));
        }
    }
}
