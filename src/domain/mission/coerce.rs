//! Lenient scalar decoding for mission documents.
//!
//! Mission documents come from several tools that disagree on scalar types:
//! masses arrive as integers, flags as `0`/`1`, years as floats. Every field
//! decoder here accepts any scalar (or `null`) and coerces it to the field's
//! type. Unparseable text and `null` become the type's zero value.

use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl Scalar {
    fn as_f64(&self) -> f64 {
        match self {
            Scalar::Bool(b) => f64::from(u8::from(*b)),
            Scalar::Int(i) => *i as f64,
            Scalar::Float(f) => *f,
            Scalar::Text(s) => s.trim().parse().unwrap_or(0.0),
        }
    }

    fn as_i32(&self) -> i32 {
        match self {
            Scalar::Bool(b) => i32::from(*b),
            Scalar::Int(i) => (*i).clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32,
            Scalar::Float(f) => f.trunc() as i32,
            Scalar::Text(s) => {
                let s = s.trim();
                s.parse::<i32>()
                    .ok()
                    .or_else(|| s.parse::<f64>().ok().map(|f| f.trunc() as i32))
                    .unwrap_or(0)
            }
        }
    }

    fn as_bool(&self) -> bool {
        match self {
            Scalar::Bool(b) => *b,
            Scalar::Int(i) => *i != 0,
            Scalar::Float(f) => *f != 0.0,
            Scalar::Text(s) => matches!(s.trim(), "true" | "True" | "TRUE" | "1"),
        }
    }

    fn into_string(self) -> String {
        match self {
            Scalar::Bool(b) => b.to_string(),
            Scalar::Int(i) => i.to_string(),
            Scalar::Float(f) => f.to_string(),
            Scalar::Text(s) => s,
        }
    }
}

fn scalar<'de, D>(deserializer: D) -> Result<Option<Scalar>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<Scalar>::deserialize(deserializer)
}

/// Decodes any scalar as a float.
pub fn real<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(scalar(deserializer)?.map(|s| s.as_f64()).unwrap_or(0.0))
}

/// Decodes any scalar as an integer (floats truncate toward zero).
pub fn integer<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: From<i32>,
{
    Ok(T::from(scalar(deserializer)?.map(|s| s.as_i32()).unwrap_or(0)))
}

/// Decodes any scalar as a flag (non-zero numbers are true).
pub fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(scalar(deserializer)?.map(|s| s.as_bool()).unwrap_or(false))
}

/// Decodes any scalar as text (numbers are formatted).
pub fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(scalar(deserializer)?.map(Scalar::into_string).unwrap_or_default())
}
