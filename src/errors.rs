use std::fmt;

#[derive(Debug)]
pub enum SvgCreationError {
    NullGeometry,
}

impl std::error::Error for SvgCreationError {}

impl fmt::Display for SvgCreationError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SvgCreationError::NullGeometry => write!(f, "Empty/Invalid/Dimensionless geometry"),
        }
    }
}

/// Failures reading a seed shape from text.
#[derive(Debug, PartialEq)]
pub enum ShapeParseError {
    InvalidWkt(String),
    NotAPolygon(String),
    Empty,
}

impl std::error::Error for ShapeParseError {}

impl fmt::Display for ShapeParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ShapeParseError::InvalidWkt(msg) => write!(f, "Could not parse WKT: {}", msg),
            ShapeParseError::NotAPolygon(msg) => write!(f, "WKT is not a polygon: {}", msg),
            ShapeParseError::Empty => write!(f, "Seed shape has no vertices"),
        }
    }
}
