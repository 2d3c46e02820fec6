use std::f64::consts::FRAC_PI_2;

use pendulum_nodes::prelude::*;

#[test]
fn filter_converges_without_reaching_target() {
    let mut f = MovingAverageFilter::new(4).unwrap();
    let mut prev = 0.0;
    for _ in 0..30 {
        let y = f.process(4.0)[0];
        assert!(y > prev);
        assert!(y < 4.0);
        prev = y;
    }
    assert!((prev - 4.0).abs() < 1e-3);
}

#[test]
fn filter_is_not_a_sliding_window() {
    let mut f = MovingAverageFilter::from_prop(MovingAverageProp {
        window_size: 2,
        dtype: Dtype::Float64,
        ..Default::default()
    })
    .unwrap();
    f.process(8.0);
    f.process(0.0);
    // a sliding window of two would have forgotten the first sample by now
    assert_eq!(f.process(0.0)[0], 1.0);
}

#[test]
fn window_of_one_passes_through() {
    let mut f = MovingAverageFilter::new(1).unwrap();
    assert_eq!(f.process(2.5)[0], 2.5);
    assert_eq!(f.process(-1.0)[0], -1.0);
}

#[test]
fn angle_forward_and_range() {
    let c = AngleConverter::default();
    let v = c.forward(&Float32 { data: FRAC_PI_2 as f32 }).unwrap();
    assert!((v[0] - 1.0).abs() < 1e-6);
    assert!(v[1].abs() < 1e-6);
    assert_eq!(c.declared_range().low().as_slice(), &[-1.0, -1.0]);
    assert_eq!(c.declared_range().high().as_slice(), &[1.0, 1.0]);
    assert_eq!(c.declared_range().dtype(), Dtype::Float32);
}

#[test]
fn stock_converters_share_the_trait() {
    fn range_len<C: SpaceConverter>(c: &C) -> usize {
        c.declared_range().len()
    }
    assert_eq!(range_len(&AngleConverter::default()), 2);
    assert_eq!(range_len(&ScalarConverter::new(-3.0, 3.0, Dtype::Float32)), 1);
    assert_eq!(range_len(&ArrayConverter::new([-3.0], [3.0], Dtype::Float32)), 1);
}
