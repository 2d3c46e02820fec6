//! Tick driver for nodes.

/// Publisher/subscriber channels.
pub mod channel;
pub use channel::{channel, Publisher, Subscriber};

/// Runs a single node at its rate.
pub mod runner;
pub use runner::{ActiveNode, NodeRunner};

/// The pipeline of nodes.
pub mod pipeline;
pub use pipeline::{CancelRequest, Pipeline, PipelineConfig};
