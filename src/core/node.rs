use std::fmt::Debug;
use std::time::Duration;

use crate::core::error::NodeError;
use crate::core::message::Msg;
use crate::spaces::BoxSpace;

/// Where the host places a node.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Process {
    /// Same process as the environment.
    #[default]
    Environment,
    /// A dedicated process.
    NewProcess,
    /// Launched outside of the host.
    External,
}

/// Name and declared space of a node input or output.
#[derive(Clone, Debug, PartialEq)]
pub struct IoSpec {
    /// Name of the input or output.
    pub name: String,
    /// Legal range of the converted values.
    pub space: BoxSpace,
}

/// Static description of a node: what it is called, how often it runs, what it consumes and
/// what it produces.
#[derive(Clone, Debug, PartialEq)]
pub struct NodeSpec {
    /// Name hint; the pipeline appends a counter to make it unique.
    pub name: String,
    /// Ticks per second.
    pub rate: f64,
    /// Process placement.
    pub process: Process,
    /// Declared inputs.
    pub inputs: Vec<IoSpec>,
    /// Declared outputs.
    pub outputs: Vec<IoSpec>,
}

impl NodeSpec {
    /// Creates a spec without inputs and outputs. Fails unless `rate` is finite and positive.
    pub fn new(name: impl Into<String>, rate: f64) -> Result<Self, NodeError> {
        validate_rate(rate)?;
        Ok(Self {
            name: name.into(),
            rate,
            process: Process::default(),
            inputs: vec![],
            outputs: vec![],
        })
    }

    /// Adds a declared input.
    pub fn with_input(mut self, name: impl Into<String>, space: BoxSpace) -> Self {
        self.inputs.push(IoSpec {
            name: name.into(),
            space,
        });
        self
    }

    /// Adds a declared output.
    pub fn with_output(mut self, name: impl Into<String>, space: BoxSpace) -> Self {
        self.outputs.push(IoSpec {
            name: name.into(),
            space,
        });
        self
    }

    /// Time between two ticks.
    pub fn period(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.rate)
    }
}

pub(crate) fn validate_rate(rate: f64) -> Result<(), NodeError> {
    if rate.is_finite() && rate > 0.0 {
        Ok(())
    } else {
        Err(NodeError::InvalidConfig(format!(
            "rate must be finite and positive, got {rate}"
        )))
    }
}

/// A node which is invoked once per tick by the pipeline.
pub trait Node: Send + 'static {
    /// Message type of the single input.
    type Input: Clone + Debug + Send + Sync + 'static;
    /// Message type of the single output.
    type Output: Clone + Debug + Send + Sync + 'static;

    /// Static description of the node.
    fn spec(&self) -> NodeSpec;

    /// Resets the node to its initial state, e.g. at an episode boundary.
    fn reset(&mut self);

    /// Process the messages of one tick - user code with main business logic goes here.
    fn callback(&mut self, msg: &Msg<Self::Input>) -> Result<Self::Output, NodeError>;
}
