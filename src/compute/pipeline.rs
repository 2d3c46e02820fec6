use std::collections::HashSet;
use std::mem::swap;

use tracing::{info, warn};

use crate::compute::channel::{channel, Subscriber};
use crate::compute::runner::{ActiveNode, NodeRunner};
use crate::core::error::NodeError;
use crate::core::node::Node;

/// A message to cancel the pipeline.
#[derive(Clone, Debug)]
pub struct CancelRequest;

/// Configuration of a [Pipeline].
#[derive(Clone, Debug)]
pub struct PipelineConfig {
    /// Install a Ctrl-C handler which cancels the pipeline. Only one handler can exist per
    /// process; later attempts are logged and ignored.
    pub handle_ctrl_c: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            handle_ctrl_c: true,
        }
    }
}

/// A set of nodes, each ticked at its own rate in a dedicated tokio task.
pub struct Pipeline {
    config: PipelineConfig,
    nodes: Vec<Box<dyn ActiveNode>>,
    names: HashSet<String>,
    cancel_request_sender_template: tokio::sync::mpsc::UnboundedSender<CancelRequest>,
    cancel_request_receiver: Option<tokio::sync::mpsc::UnboundedReceiver<CancelRequest>>,
}

impl Pipeline {
    /// Creates an empty pipeline.
    pub fn new(config: PipelineConfig) -> Self {
        let (cancel_request_sender_template, cancel_request_receiver) =
            tokio::sync::mpsc::unbounded_channel();
        Self {
            config,
            nodes: vec![],
            names: HashSet::new(),
            cancel_request_sender_template,
            cancel_request_receiver: Some(cancel_request_receiver),
        }
    }

    /// Adds `node`, fed by `input`, and returns the subscriber of its output.
    ///
    /// The node is named after its spec with a counter appended, e.g. `MovingAverageFilter_0`.
    pub fn add_node<N: Node>(
        &mut self,
        node: N,
        input: Subscriber<N::Input>,
    ) -> Subscriber<N::Output> {
        let name = self.add_new_unique_name(node.spec().name);
        self.insert(name, node, input)
    }

    /// Adds `node` under the explicit name `name`.
    pub fn add_node_with_name<N: Node>(
        &mut self,
        name: impl Into<String>,
        node: N,
        input: Subscriber<N::Input>,
    ) -> Result<Subscriber<N::Output>, NodeError> {
        let name = name.into();
        if !self.names.insert(name.clone()) {
            return Err(NodeError::DuplicateName(name));
        }
        Ok(self.insert(name, node, input))
    }

    /// Names of all nodes, in insertion order.
    pub fn node_names(&self) -> Vec<&str> {
        self.nodes.iter().map(|n| n.name()).collect()
    }

    /// Returns a sender to send cancel requests to the pipeline.
    pub fn get_cancel_request_sender(&self) -> tokio::sync::mpsc::UnboundedSender<CancelRequest> {
        self.cancel_request_sender_template.clone()
    }

    /// Resets every node, e.g. at an episode boundary.
    pub fn reset(&mut self) {
        for node in self.nodes.iter_mut() {
            node.reset();
        }
    }

    /// Executes the pipeline.
    ///
    /// All nodes are reset, then each node runs in its own task until a cancel request is
    /// received. The future resolves to the pipeline itself, with every node in the state it
    /// reached.
    pub async fn run(mut self) -> Self {
        info!("Pipeline started ...");

        if self.config.handle_ctrl_c {
            let cancel_requester = self.get_cancel_request_sender();
            if let Err(err) = ctrlc::set_handler(move || {
                let _ = cancel_requester.send(CancelRequest);
            }) {
                warn!("Ctrl-C handler not installed: {}", err);
            }
        }

        let Some(mut cancel_request_receiver) = self.cancel_request_receiver.take() else {
            warn!("Pipeline is already running");
            return self;
        };

        self.reset();

        let (kill_sender, _) = tokio::sync::broadcast::channel(10);
        let mut nodes = vec![];
        swap(&mut nodes, &mut self.nodes);
        let mut handles = vec![];
        for mut node in nodes {
            let kill_receiver = kill_sender.subscribe();
            handles.push(tokio::spawn(async move {
                node.run(kill_receiver).await;
                node
            }));
        }

        match cancel_request_receiver.recv().await {
            Some(_) => {
                info!("Pipeline cancellation requested");
            }
            None => {
                warn!("Cancel request channel closed");
            }
        }
        let _ = kill_sender.send(());

        for h in handles {
            match h.await {
                Ok(node) => self.nodes.push(node),
                Err(err) => warn!("Node task failed: {}", err),
            }
        }

        while cancel_request_receiver.try_recv().is_ok() {}
        self.cancel_request_receiver = Some(cancel_request_receiver);

        info!("Pipeline execution finished");
        self
    }

    fn add_new_unique_name(&mut self, name_hint: String) -> String {
        let mut count = 0;
        loop {
            let unique_name = format!("{}_{}", name_hint, count);
            if self.names.insert(unique_name.clone()) {
                return unique_name;
            }
            count += 1;
        }
    }

    fn insert<N: Node>(
        &mut self,
        name: String,
        node: N,
        input: Subscriber<N::Input>,
    ) -> Subscriber<N::Output> {
        let (output, subscriber) = channel();
        info!("adding node {} at {} Hz", name, node.spec().rate);
        self.nodes
            .push(Box::new(NodeRunner::new(name, node, input, output)));
        subscriber
    }
}
