use pendulum_nodes::prelude::*;

fn quiet() -> PipelineConfig {
    PipelineConfig {
        handle_ctrl_c: false,
    }
}

#[tokio::test]
async fn filter_runs_until_cancelled_and_restarts_from_reset() {
    let mut pipeline = Pipeline::new(quiet());
    let (signal, signal_subscriber) = channel::<Float32>();
    let mut filtered = pipeline.add_node(
        MovingAverageFilter::from_prop(MovingAverageProp {
            window_size: 4,
            rate: 100.0,
            ..Default::default()
        })
        .unwrap(),
        signal_subscriber,
    );
    let cancel = pipeline.get_cancel_request_sender();

    signal.send(Float32 { data: 4.0 });
    let running = tokio::spawn(pipeline.run());
    assert_eq!(filtered.recv().await.unwrap().data(), &[1.0]);
    assert_eq!(filtered.recv().await.unwrap().data(), &[1.75]);
    cancel.send(CancelRequest).unwrap();
    let pipeline = running.await.unwrap();
    while filtered.try_recv().is_some() {}

    signal.send(Float32 { data: 4.0 });
    let running = tokio::spawn(pipeline.run());
    assert_eq!(filtered.recv().await.unwrap().data(), &[1.0]);
    cancel.send(CancelRequest).unwrap();
    running.await.unwrap();
}

#[tokio::test]
async fn converter_node_encodes_angles() {
    let mut pipeline = Pipeline::new(quiet());
    let (angle, angle_subscriber) = channel::<Float32>();
    let converter = AngleConverter::new([-1.0, -1.0], [1.0, 1.0], Dtype::Float64);
    let mut encoded = pipeline.add_node(
        ConverterNode::new(converter, 100.0).unwrap(),
        angle_subscriber,
    );
    assert_eq!(pipeline.node_names(), vec!["AngleConverter_0"]);
    let cancel = pipeline.get_cancel_request_sender();

    angle.send(Float32 { data: 0.0 });
    let running = tokio::spawn(pipeline.run());
    let v = encoded.recv().await.unwrap();
    assert_eq!(v.data(), &[0.0, 1.0]);
    assert_eq!(v.dtype(), Dtype::Float64);
    cancel.send(CancelRequest).unwrap();
    running.await.unwrap();
}
