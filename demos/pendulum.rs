use std::time::Duration;

use pendulum_nodes::prelude::*;
use rand_distr::{Distribution, Normal};
use tracing::info;

/// Simulated pendulum angle measurement with gaussian noise, published at `rate` Hz.
async fn run_noisy_pendulum(
    rate: f64,
    noise: f64,
    publishers: Vec<Publisher<Float32>>,
) {
    let normal = Normal::new(0.0, noise).expect("noise must be finite and non-negative");
    let dt = 1.0 / rate;
    let mut interval = tokio::time::interval(Duration::from_secs_f64(dt));
    let (mut theta, mut theta_dot) = (1.0_f64, 0.0_f64);
    loop {
        interval.tick().await;
        theta_dot += -9.81 * theta.sin() * dt;
        theta += theta_dot * dt;
        let measured = theta + normal.sample(&mut rand::thread_rng());
        for p in publishers.iter() {
            if !p.send(Float32 {
                data: measured as f32,
            }) {
                return;
            }
        }
    }
}

/// Run the pendulum example
pub async fn run_pendulum_example() {
    let mut pipeline = Pipeline::new(PipelineConfig::default());

    let (filter_input, filter_subscriber) = channel();
    let (angle_input, angle_subscriber) = channel();

    let mut filtered = pipeline.add_node(
        MovingAverageFilter::from_prop(MovingAverageProp {
            window_size: 4,
            rate: 20.0,
            ..Default::default()
        })
        .expect("valid filter props"),
        filter_subscriber,
    );
    let mut encoded = pipeline.add_node(
        ConverterNode::new(AngleConverter::default(), 20.0).expect("valid rate"),
        angle_subscriber,
    );

    tokio::spawn(run_noisy_pendulum(50.0, 0.05, vec![filter_input, angle_input]));
    tokio::spawn(async move {
        while let Some(v) = filtered.recv().await {
            info!("filtered: {}", v);
        }
    });
    tokio::spawn(async move {
        while let Some(v) = encoded.recv().await {
            info!("encoded: {}", v);
        }
    });

    let cancel = pipeline.get_cancel_request_sender();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_secs(3)).await;
        let _ = cancel.send(CancelRequest);
    });

    pipeline.run().await;
}

fn main() {
    tracing_subscriber::fmt::init();

    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .unwrap()
        .block_on(async {
            run_pendulum_example().await;
        })
}
