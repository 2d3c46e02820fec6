//! Spaces and space converters.
//!
//! A space converter maps between a raw message and a bounded numeric vector, and declares the
//! box those vectors live in. Converters are plain values: construct one and hand it to
//! whoever needs it.

/// Box space.
pub mod space;
pub use space::BoxSpace;

/// Space converter trait.
pub mod converter;
pub use converter::SpaceConverter;

/// Pendulum angle to `[sin, cos]` converter.
pub mod angle;
pub use angle::AngleConverter;

/// Scalar message converter.
pub mod scalar;
pub use scalar::ScalarConverter;

/// Array message converter.
pub mod array;
pub use array::ArrayConverter;
