use std::fmt::Display;
use std::str::FromStr;

use crate::core::error::NodeError;

/// Numeric precision tag carried by arrays and spaces.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Dtype {
    /// 32-bit float.
    #[default]
    Float32,
    /// 64-bit float.
    Float64,
}

impl Dtype {
    /// Rounds `value` through this precision.
    pub fn cast(self, value: f64) -> f64 {
        match self {
            Dtype::Float32 => value as f32 as f64,
            Dtype::Float64 => value,
        }
    }

    /// Name as used in configuration strings, e.g. "float32".
    pub fn name(self) -> &'static str {
        match self {
            Dtype::Float32 => "float32",
            Dtype::Float64 => "float64",
        }
    }
}

impl Display for Dtype {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Dtype {
    type Err = NodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "float32" => Ok(Dtype::Float32),
            "float64" => Ok(Dtype::Float64),
            other => Err(NodeError::InvalidConfig(format!("unknown dtype {other}"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn float32_cast_rounds() {
        let x = 0.1_f64;
        assert_ne!(Dtype::Float32.cast(x), x);
        assert_eq!(Dtype::Float32.cast(x), 0.1_f32 as f64);
        assert_eq!(Dtype::Float64.cast(x), x);
    }

    #[test]
    fn parse_names() {
        assert_eq!("float32".parse::<Dtype>(), Ok(Dtype::Float32));
        assert_eq!("float64".parse::<Dtype>(), Ok(Dtype::Float64));
        assert!(matches!(
            "int8".parse::<Dtype>(),
            Err(NodeError::InvalidConfig(_))
        ));
        assert_eq!(Dtype::default().to_string(), "float32");
    }
}
