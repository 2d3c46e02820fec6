//! Nodes of the pendulum tutorial.

/// Moving average filter node.
pub mod moving_average;
pub use moving_average::{MovingAverageFilter, MovingAverageProp, MovingAverageState};

/// Node wrapping a space converter.
pub mod converter;
pub use converter::ConverterNode;
