use async_trait::async_trait;
use tracing::{debug, warn};

use crate::compute::channel::{Publisher, Subscriber};
use crate::core::message::Msg;
use crate::core::node::Node;

/// A node owned by the pipeline, with runtime-erased input and output types.
#[async_trait]
pub trait ActiveNode: Send {
    /// Get the unique name of the node.
    fn name(&self) -> &str;
    /// Reset the node to its initial state.
    fn reset(&mut self);
    /// Tick the node at its rate until `kill` fires.
    async fn run(&mut self, kill: tokio::sync::broadcast::Receiver<()>);
}

/// Drives a single node: collects its input, calls it once per tick and publishes the output.
pub struct NodeRunner<N: Node> {
    name: String,
    node: N,
    input: Subscriber<N::Input>,
    output: Publisher<N::Output>,
    last: Option<N::Input>,
    tick: u64,
}

impl<N: Node> NodeRunner<N> {
    /// Creates a runner for `node`.
    pub fn new(
        name: String,
        node: N,
        input: Subscriber<N::Input>,
        output: Publisher<N::Output>,
    ) -> Self {
        Self {
            name,
            node,
            input,
            output,
            last: None,
            tick: 0,
        }
    }

    /// The driven node.
    pub fn node(&self) -> &N {
        &self.node
    }

    /// Performs one tick.
    ///
    /// All messages which arrived since the previous tick are handed to the node. If none
    /// arrived, the most recent message is delivered again. Before the first message, or if
    /// the node fails, nothing is produced.
    pub fn tick(&mut self) -> Option<N::Output> {
        let tick = self.tick;
        self.tick += 1;

        let mut msgs = self.input.drain();
        if msgs.is_empty() {
            if let Some(last) = &self.last {
                msgs.push(last.clone());
            }
        }
        let Some(msg) = Msg::new(tick, msgs) else {
            debug!("{}: no input yet at tick {}", self.name, tick);
            return None;
        };
        self.last = Some(msg.latest().clone());

        match self.node.callback(&msg) {
            Ok(out) => {
                if !self.output.send(out.clone()) {
                    debug!("{}: output has no subscriber", self.name);
                }
                Some(out)
            }
            Err(err) => {
                warn!("{}: dropping tick {}: {}", self.name, tick, err);
                None
            }
        }
    }
}

#[async_trait]
impl<N: Node> ActiveNode for NodeRunner<N> {
    fn name(&self) -> &str {
        &self.name
    }

    fn reset(&mut self) {
        self.node.reset();
        self.last = None;
        self.tick = 0;
    }

    async fn run(&mut self, mut kill: tokio::sync::broadcast::Receiver<()>) {
        let mut interval = tokio::time::interval(self.node.spec().period());
        loop {
            tokio::select! {
                _ = kill.recv() => {
                    break;
                },
                _ = interval.tick() => {
                    self.tick();
                }
            }
        }
        debug!("{} stopped after {} ticks", self.name, self.tick);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compute::channel::channel;
    use crate::core::message::Float32;
    use crate::nodes::MovingAverageFilter;

    fn filter_runner(
        n: usize,
    ) -> (
        Publisher<Float32>,
        NodeRunner<MovingAverageFilter>,
        Subscriber<crate::core::message::TypedArray>,
    ) {
        let (input_tx, input_rx) = channel();
        let (output_tx, output_rx) = channel();
        let runner = NodeRunner::new(
            "MovingAverageFilter_0".to_owned(),
            MovingAverageFilter::new(n).unwrap(),
            input_rx,
            output_tx,
        );
        (input_tx, runner, output_rx)
    }

    #[test]
    fn nothing_before_first_message() {
        let (_tx, mut runner, mut out) = filter_runner(2);
        assert!(runner.tick().is_none());
        assert!(out.try_recv().is_none());
    }

    #[test]
    fn only_latest_message_is_used() {
        let (tx, mut runner, mut out) = filter_runner(2);
        tx.send(Float32::from(10.0));
        tx.send(Float32::from(2.0));
        let y = runner.tick().unwrap();
        assert_eq!(y.data(), &[1.0]);
        assert_eq!(out.try_recv(), Some(y));
    }

    #[test]
    fn last_value_is_redelivered() {
        let (tx, mut runner, _out) = filter_runner(2);
        tx.send(Float32::from(2.0));
        assert_eq!(runner.tick().unwrap()[0], 1.0);
        assert_eq!(runner.tick().unwrap()[0], 1.5);
        assert_eq!(runner.node().moving_average(), 1.5);
    }

    #[test]
    fn reset_forgets_last_value() {
        let (tx, mut runner, _out) = filter_runner(2);
        tx.send(Float32::from(2.0));
        runner.tick();
        ActiveNode::reset(&mut runner);
        assert_eq!(runner.node().moving_average(), 0.0);
        assert!(runner.tick().is_none());
    }
}
