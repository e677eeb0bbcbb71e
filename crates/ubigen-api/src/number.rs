//! JSON scalars and how they are printed.
//!
//! The API may send integers or floats for any statistic. Integers stay
//! integers when printed (`2`, not `2.0`); floats use the shortest
//! round-tripping form with a signed, two-digit exponent (`3e-06`, `1e+16`).

use std::fmt;

use serde::Deserialize;

use crate::stats;

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Int(i64),
    Float(f64),
}

impl Scalar {
    pub fn as_f64(self) -> f64 {
        match self {
            Scalar::Int(i) => i as f64,
            Scalar::Float(f) => f,
        }
    }

    /// Integers are already round and come back unchanged.
    pub fn round_to(self, decimals: usize) -> Self {
        match self {
            Scalar::Int(_) => self,
            Scalar::Float(f) => Scalar::Float(stats::round_to(f, decimals)),
        }
    }

    pub fn scale(self, factor: i64) -> Self {
        match self {
            Scalar::Int(i) => i
                .checked_mul(factor)
                .map(Scalar::Int)
                .unwrap_or(Scalar::Float(i as f64 * factor as f64)),
            Scalar::Float(f) => Scalar::Float(f * factor as f64),
        }
    }
}

impl From<f64> for Scalar {
    fn from(f: f64) -> Self {
        Scalar::Float(f)
    }
}

impl From<i64> for Scalar {
    fn from(i: i64) -> Self {
        Scalar::Int(i)
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Int(i) => write!(f, "{}", i),
            Scalar::Float(v) => f.write_str(&format_float(*v)),
        }
    }
}

/// Shortest round-tripping form, `.0` kept on integral values.
///
/// `{:?}` already switches to scientific notation below 1e-4 and from 1e16 up;
/// the exponent is rewritten to carry a sign and at least two digits.
pub fn format_float(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    let repr = format!("{:?}", value);
    match repr.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{}e{}{:0>2}", mantissa, sign, digits)
        }
        None => repr,
    }
}
