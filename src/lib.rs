#![deny(missing_docs)]

//! # Pendulum nodes
//!
//! Two small building blocks of a pendulum swing-up pipeline:
//!
//! - [MovingAverageFilter](nodes::MovingAverageFilter) smooths a scalar signal with the
//!   recurrence `a' = ((n - 1) * a + x) / n`, emitting a single element array per tick.
//! - [AngleConverter](spaces::AngleConverter) encodes a pendulum angle as
//!   `[sin(theta), cos(theta)]` and declares the box `[-1, 1]^2` these vectors live in.
//!
//! ## Module Overview
//!
//! - The [core] module contains messages, the precision tag [Dtype], the [Node] trait with its
//!   static [NodeSpec] description, and [NodeError].
//!
//! - The [spaces] module contains [BoxSpace](spaces::BoxSpace) and the
//!   [SpaceConverter](spaces::SpaceConverter) trait with its implementations. Converters are
//!   plain values which are passed to whoever needs them.
//!
//! - The [nodes] module contains the moving average filter and a node adapter for converters.
//!
//! - The [compute] module contains the [Pipeline] which ticks each node at its rate, feeding it
//!   the latest input message.
//!
//! ## Example: moving average
//!
//! ```rust
//! # use pendulum_nodes::prelude::*;
//! let mut filter = MovingAverageFilter::new(4).unwrap();
//! let out: Vec<f64> = (0..4).map(|_| filter.process(4.0)[0]).collect();
//! assert_eq!(out, vec![1.0, 1.75, 2.3125, 2.734375]);
//!
//! filter.reset();
//! assert_eq!(filter.process(4.0).data(), &[1.0]);
//! ```
//!
//! ## Example: angle encoding
//!
//! ```rust
//! # use pendulum_nodes::prelude::*;
//! let converter = AngleConverter::default();
//! let v = converter.forward(&Float32 { data: 0.0 }).unwrap();
//! assert_eq!(v.data(), &[0.0, 1.0]);
//! assert!(converter.declared_range().contains(v.data()));
//! assert!(matches!(converter.backward(&v), Err(NodeError::NotSupported(_))));
//! ```
//!
//! ## Configure and execute a pipeline
//!
//! ```rust
//! # use pendulum_nodes::prelude::*;
//! # tokio::runtime::Runtime::new().unwrap().block_on(async {
//! let mut pipeline = Pipeline::new(PipelineConfig { handle_ctrl_c: false });
//! let (signal, signal_subscriber) = channel::<Float32>();
//! let mut filtered = pipeline.add_node(
//!     MovingAverageFilter::from_prop(MovingAverageProp {
//!         window_size: 4,
//!         rate: 50.0,
//!         ..Default::default()
//!     })
//!     .unwrap(),
//!     signal_subscriber,
//! );
//! signal.send(Float32 { data: 2.0 });
//!
//! let cancel = pipeline.get_cancel_request_sender();
//! let running = tokio::spawn(pipeline.run());
//! assert_eq!(filtered.recv().await.unwrap().data(), &[0.5]);
//! cancel.send(CancelRequest).unwrap();
//! let pipeline = running.await.unwrap();
//! assert_eq!(pipeline.node_names(), vec!["MovingAverageFilter_0"]);
//! # });
//! ```

/// Messages, node contract and errors.
pub mod core;
pub use crate::core::dtype::Dtype;
pub use crate::core::error::NodeError;
pub use crate::core::message::{Float32, Msg, TypedArray};
pub use crate::core::node::{Node, NodeSpec};

/// Spaces and converters.
pub mod spaces;

/// Nodes.
pub mod nodes;

/// Tick driver.
pub mod compute;
pub use crate::compute::pipeline::Pipeline;

/// Commonly used types.
pub mod prelude {
    pub use crate::compute::{
        channel, CancelRequest, Pipeline, PipelineConfig, Publisher, Subscriber,
    };
    pub use crate::core::{Dtype, Float32, Msg, Node, NodeError, NodeSpec, TypedArray};
    pub use crate::nodes::{ConverterNode, MovingAverageFilter, MovingAverageProp};
    pub use crate::spaces::{
        AngleConverter, ArrayConverter, BoxSpace, ScalarConverter, SpaceConverter,
    };
}
