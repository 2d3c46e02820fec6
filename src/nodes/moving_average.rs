use tracing::{debug, warn};

use crate::core::dtype::Dtype;
use crate::core::error::NodeError;
use crate::core::message::{Float32, Msg, TypedArray};
use crate::core::node::{validate_rate, Node, NodeSpec};
use crate::spaces::{ArrayConverter, ScalarConverter, SpaceConverter};

/// Properties of the MovingAverageFilter node.
#[derive(Clone, Debug)]
pub struct MovingAverageProp {
    /// Window size `n >= 1`; the newest sample is weighted with `1/n`.
    pub window_size: usize,
    /// Ticks per second. Only the pipeline uses it, the filter math does not.
    pub rate: f64,
    /// Precision of the filtered output.
    pub dtype: Dtype,
}

impl Default for MovingAverageProp {
    fn default() -> Self {
        Self {
            window_size: 1,
            rate: 1.0,
            dtype: Dtype::Float32,
        }
    }
}

impl MovingAverageProp {
    fn validate(&self) -> Result<(), NodeError> {
        if self.window_size < 1 {
            return Err(NodeError::InvalidConfig(format!(
                "window size must be at least 1, got {}",
                self.window_size
            )));
        }
        validate_rate(self.rate)
    }
}

/// State of the MovingAverageFilter node.
#[derive(Clone, Debug, Default)]
pub struct MovingAverageState {
    /// current moving average
    pub moving_average: f64,
}

/// Smooths a scalar signal with the recurrence `a' = ((n - 1) * a + x) / n`.
///
/// Despite the name this is a first order IIR filter with smoothing constant `1/n`: samples
/// older than `n` ticks are never dropped, their weight decays geometrically.
#[derive(Clone, Debug)]
pub struct MovingAverageFilter {
    prop: MovingAverageProp,
    state: MovingAverageState,
}

impl MovingAverageFilter {
    /// Creates a filter with window size `window_size` and otherwise default properties.
    pub fn new(window_size: usize) -> Result<Self, NodeError> {
        Self::from_prop(MovingAverageProp {
            window_size,
            ..Default::default()
        })
    }

    /// Creates a filter from the given properties, starting at an average of 0.0.
    pub fn from_prop(prop: MovingAverageProp) -> Result<Self, NodeError> {
        prop.validate()?;
        Ok(Self {
            prop,
            state: MovingAverageState::default(),
        })
    }

    /// Properties.
    pub fn prop(&self) -> &MovingAverageProp {
        &self.prop
    }

    /// Current average.
    pub fn moving_average(&self) -> f64 {
        self.state.moving_average
    }

    /// Sets the average back to 0.0.
    pub fn reset(&mut self) {
        self.state = MovingAverageState::default();
    }

    /// Feeds one sample and returns the new average as a single element array.
    ///
    /// A sample which would make the average non-finite is dropped and the current average is
    /// returned unchanged.
    pub fn process(&mut self, sample: f64) -> TypedArray {
        let n = self.prop.window_size as f64;
        let next = ((n - 1.0) * self.state.moving_average + sample) / n;
        if next.is_finite() {
            self.state.moving_average = next;
        } else {
            warn!("dropping sample {} which makes the average non-finite", sample);
        }
        TypedArray::new(self.prop.dtype, [self.state.moving_average])
    }

    /// Converter declaring the `signal` input.
    pub fn signal_converter() -> ScalarConverter {
        ScalarConverter::new(-3.0, 3.0, Dtype::Float32)
    }

    /// Converter declaring the `filtered` output.
    pub fn filtered_converter(&self) -> ArrayConverter {
        ArrayConverter::new([-3.0], [3.0], self.prop.dtype)
    }
}

impl Node for MovingAverageFilter {
    type Input = Float32;
    type Output = TypedArray;

    fn spec(&self) -> NodeSpec {
        NodeSpec {
            name: "MovingAverageFilter".to_owned(),
            rate: self.prop.rate,
            process: Default::default(),
            inputs: vec![],
            outputs: vec![],
        }
        .with_input("signal", Self::signal_converter().declared_range().clone())
        .with_output("filtered", self.filtered_converter().declared_range().clone())
    }

    fn reset(&mut self) {
        debug!("resetting moving average from {}", self.state.moving_average);
        MovingAverageFilter::reset(self);
    }

    fn callback(&mut self, msg: &Msg<Float32>) -> Result<TypedArray, NodeError> {
        Ok(self.process(msg.latest().data as f64))
    }
}
