use crate::core::error::NodeError;
use crate::core::message::{Msg, TypedArray};
use crate::core::node::{validate_rate, Node, NodeSpec};
use crate::spaces::SpaceConverter;

/// Node which applies [SpaceConverter::forward] to the latest message of every tick.
#[derive(Clone, Debug)]
pub struct ConverterNode<C> {
    converter: C,
    rate: f64,
}

impl<C: SpaceConverter> ConverterNode<C> {
    /// Creates a converter node ticking at `rate`.
    pub fn new(converter: C, rate: f64) -> Result<Self, NodeError> {
        validate_rate(rate)?;
        Ok(Self { converter, rate })
    }

    /// The wrapped converter.
    pub fn converter(&self) -> &C {
        &self.converter
    }
}

impl<C: SpaceConverter> Node for ConverterNode<C> {
    type Input = C::Msg;
    type Output = TypedArray;

    fn spec(&self) -> NodeSpec {
        NodeSpec {
            name: self.converter.name_hint(),
            rate: self.rate,
            process: Default::default(),
            inputs: vec![],
            outputs: vec![],
        }
        .with_output("converted", self.converter.declared_range().clone())
    }

    fn reset(&mut self) {}

    fn callback(&mut self, msg: &Msg<C::Msg>) -> Result<TypedArray, NodeError> {
        self.converter.forward(msg.latest())
    }
}
