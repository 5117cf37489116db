use std::f64::consts::PI;

use approx::{assert_abs_diff_eq, assert_relative_eq};
use ndarray::{s, Array1};
use num_complex::Complex64;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::error::SamplingError;
use crate::trajectory::cartesian::{normalized_frequency, DEBUG_RETAINED_COLUMNS};
use crate::trajectory::spiral::single_shot;
use crate::trajectory::{
    debugging_cartesian_trajectory, debugging_cartesian_trajectory_with_rng, golden_angle,
    radial_trajectory, radial_trajectory_len, spiral_trajectory, spiral_trajectory_len,
    SpokeBudget, DEBUG_TRAJECTORY_LEN, DEFAULT_NUM_REVOLUTIONS,
};

const IMAGE_SHAPE: [usize; 3] = [1, 640, 400];

#[test]
fn test_spoke_budget_requires_exactly_one_factor() {
    assert_eq!(
        SpokeBudget::from_factors(Some(4), Some(2.0)),
        Err(SamplingError::BothFactorsSet)
    );
    assert_eq!(
        SpokeBudget::from_factors(None, None),
        Err(SamplingError::NoFactorSet)
    );
    assert_eq!(
        SpokeBudget::from_factors(Some(0), None),
        Err(SamplingError::InvalidAccelFactor(0))
    );
    assert_eq!(
        SpokeBudget::from_factors(None, Some(0.0)),
        Err(SamplingError::InvalidUndersampling(0.0))
    );
    assert_eq!(
        SpokeBudget::from_factors(Some(4), None),
        Ok(SpokeBudget::Acceleration(4))
    );
}

#[test]
fn test_spoke_counts() {
    let af = SpokeBudget::Acceleration(4);
    assert_eq!(af.num_spokes(400, 1.0).unwrap(), 100);

    let us = SpokeBudget::Undersampling(2.0);
    // floor(400 * pi / 4)
    assert_eq!(us.num_spokes(400, 1.0).unwrap(), 314);
    // floor(400 * pi / (2 * 6 * pi))
    let us = SpokeBudget::Undersampling(1.0);
    assert_eq!(us.num_spokes(400, 6.0 * PI).unwrap(), 33);

    assert_eq!(af.num_spokes(3, 1.0), Err(SamplingError::NoSpokes { width: 3 }));
}

#[test]
fn test_trajectories_reject_bad_factors() {
    assert_eq!(
        radial_trajectory(&IMAGE_SHAPE, Some(4), Some(1.0)),
        Err(SamplingError::BothFactorsSet)
    );
    assert_eq!(
        radial_trajectory(&IMAGE_SHAPE, None, None),
        Err(SamplingError::NoFactorSet)
    );
    assert_eq!(
        spiral_trajectory(&IMAGE_SHAPE, Some(4), Some(1.0), DEFAULT_NUM_REVOLUTIONS),
        Err(SamplingError::BothFactorsSet)
    );
    assert_eq!(
        spiral_trajectory(&IMAGE_SHAPE, None, None, DEFAULT_NUM_REVOLUTIONS),
        Err(SamplingError::NoFactorSet)
    );
    assert_eq!(
        radial_trajectory(&[640], Some(4), None),
        Err(SamplingError::RankTooLow {
            shape: vec![640],
            expected: 2
        })
    );
}

#[test]
fn test_trajectories_reject_empty_axes() {
    assert_eq!(
        radial_trajectory(&[1, 0, 400], Some(4), None),
        Err(SamplingError::EmptyAxis {
            shape: vec![1, 0, 400]
        })
    );
    assert_eq!(
        radial_trajectory_len(&[1, 640, 0], Some(4), None),
        Err(SamplingError::EmptyAxis {
            shape: vec![1, 640, 0]
        })
    );
    assert_eq!(
        spiral_trajectory(&[1, 0, 400], Some(4), None, DEFAULT_NUM_REVOLUTIONS),
        Err(SamplingError::EmptyAxis {
            shape: vec![1, 0, 400]
        })
    );
}

#[test]
fn test_spiral_rejects_zero_revolutions() {
    assert_eq!(
        spiral_trajectory_len(&IMAGE_SHAPE, None, Some(1.0), 0),
        Err(SamplingError::InvalidRevolutions(0))
    );
    assert_eq!(
        spiral_trajectory(&IMAGE_SHAPE, None, Some(1.0), 0),
        Err(SamplingError::InvalidRevolutions(0))
    );
    assert_eq!(
        spiral_trajectory_len(&IMAGE_SHAPE, Some(4), None, 0),
        Err(SamplingError::InvalidRevolutions(0))
    );
}

#[test]
fn test_tiny_undersampling_is_rejected() {
    // 1e303 spokes do not fit in a usize
    assert!(matches!(
        radial_trajectory_len(&IMAGE_SHAPE, None, Some(1e-300)),
        Err(SamplingError::TooManySamples {
            samples_per_spoke: 1,
            ..
        })
    ));
    // about 6e18 spokes fit, but not times 640 samples each
    assert!(matches!(
        radial_trajectory_len(&IMAGE_SHAPE, None, Some(1e-16)),
        Err(SamplingError::TooManySamples {
            samples_per_spoke: 640,
            ..
        })
    ));
    assert!(matches!(
        radial_trajectory(&IMAGE_SHAPE, None, Some(1e-300)),
        Err(SamplingError::TooManySamples { .. })
    ));
    assert!(matches!(
        spiral_trajectory_len(&IMAGE_SHAPE, None, Some(1e-300), DEFAULT_NUM_REVOLUTIONS),
        Err(SamplingError::TooManySamples { .. })
    ));
    assert_eq!(
        SpokeBudget::Undersampling(1.0).num_spokes(400, f64::INFINITY),
        Err(SamplingError::NoSpokes { width: 400 })
    );
}

#[test]
fn test_radial_shape() {
    let traj = radial_trajectory(&IMAGE_SHAPE, Some(4), None).unwrap();
    assert_eq!(traj.shape(), &[1, 2, 100 * 640]);
    assert_eq!(
        radial_trajectory_len(&IMAGE_SHAPE, Some(4), None).unwrap(),
        traj.shape()[2]
    );

    let traj = radial_trajectory(&IMAGE_SHAPE, None, Some(2.0)).unwrap();
    assert_eq!(traj.shape(), &[1, 2, 314 * 640]);
}

#[test]
fn test_radial_first_spoke_is_linspace() {
    let traj = radial_trajectory(&IMAGE_SHAPE, Some(4), None).unwrap();
    let spokelength = IMAGE_SHAPE[1];
    let expected = Array1::linspace(-PI, PI, spokelength).mapv(|v| v as f32);

    let ky = traj.slice(s![0, 0, 0..spokelength]);
    let kx = traj.slice(s![0, 1, 0..spokelength]);
    assert_abs_diff_eq!(ky, expected.view(), epsilon = 1e-6);
    assert!(kx.iter().all(|&v| v == 0.0));
}

#[test]
fn test_radial_spokes_follow_golden_angle_rotation() {
    let traj = radial_trajectory(&[1, 64, 40], Some(4), None).unwrap();
    let spokelength = 64;
    let nspokes = 10;
    let (sin_ga, cos_ga) = golden_angle().sin_cos();

    for spoke in 1..nspokes {
        let prev = (spoke - 1) * spokelength;
        let cur = spoke * spokelength;
        for j in 0..spokelength {
            let (prev_ky, prev_kx) = (traj[[0, 0, prev + j]] as f64, traj[[0, 1, prev + j]] as f64);
            let expected_kx = cos_ga * prev_kx - sin_ga * prev_ky;
            let expected_ky = sin_ga * prev_kx + cos_ga * prev_ky;
            assert_abs_diff_eq!(traj[[0, 1, cur + j]] as f64, expected_kx, epsilon = 1e-5);
            assert_abs_diff_eq!(traj[[0, 0, cur + j]] as f64, expected_ky, epsilon = 1e-5);
        }
    }
}

#[test]
fn test_golden_angle_value() {
    // 180 / phi = 111.246...
    assert_relative_eq!(golden_angle().to_degrees(), 111.24611797498107, epsilon = 1e-9);
}

#[test]
fn test_spiral_single_shot() {
    let shot = single_shot(640, 3);
    assert_eq!(shot.len(), 639);

    // center of the shot is the origin
    assert_eq!(shot[319], Complex64::new(0.0, 0.0));
    // the second half mirrors the arm through the origin
    for k in 1..320 {
        assert_relative_eq!(shot[319 + k].re, -shot[319 - k].re, epsilon = 1e-12);
        assert_relative_eq!(shot[319 + k].im, -shot[319 - k].im, epsilon = 1e-12);
    }
    // radius grows linearly up to pi
    assert_relative_eq!(shot[0].norm(), 319.0 / 320.0 * PI, epsilon = 1e-12);
}

#[test]
fn test_spiral_shape() {
    let traj = spiral_trajectory(&IMAGE_SHAPE, Some(4), None, DEFAULT_NUM_REVOLUTIONS).unwrap();
    assert_eq!(traj.shape(), &[1, 2, 100 * 639]);
    assert_eq!(
        spiral_trajectory_len(&IMAGE_SHAPE, Some(4), None, DEFAULT_NUM_REVOLUTIONS).unwrap(),
        traj.shape()[2]
    );

    let traj = spiral_trajectory(&IMAGE_SHAPE, None, Some(1.0), DEFAULT_NUM_REVOLUTIONS).unwrap();
    assert_eq!(traj.shape(), &[1, 2, 33 * 639]);
}

#[test]
fn test_spiral_shots_are_rotated_copies() {
    let nshots = 10;
    let traj = spiral_trajectory(&[1, 32, 40], Some(4), None, 2).unwrap();
    let shot = single_shot(32, 2);

    for (sample, z) in shot.iter().enumerate() {
        for i in 0..nshots {
            let rotated = z * Complex64::from_polar(1.0, PI * i as f64 / nshots as f64);
            let col = sample * nshots + i;
            assert_abs_diff_eq!(traj[[0, 0, col]] as f64, rotated.re, epsilon = 1e-5);
            assert_abs_diff_eq!(traj[[0, 1, col]] as f64, rotated.im, epsilon = 1e-5);
        }
    }
}

#[test]
fn test_spiral_rejects_odd_readout() {
    assert_eq!(
        spiral_trajectory(&[1, 641, 400], Some(4), None, DEFAULT_NUM_REVOLUTIONS),
        Err(SamplingError::StaticShapeMismatch {
            what: "spiral trajectory",
            expected: 100 * 640,
            actual: 100 * 639,
        })
    );
}

#[test]
fn test_debugging_trajectory_has_static_shape() {
    println!("\n--- Test: Debugging Cartesian Trajectory Shape ---");
    assert_eq!(DEBUG_TRAJECTORY_LEN, 62080);

    let mut rng = StdRng::seed_from_u64(2024);
    for draw in 0..5 {
        let traj = debugging_cartesian_trajectory_with_rng(&mut rng).unwrap();
        assert_eq!(traj.shape(), &[1, 2, 62080], "draw {}", draw);
    }
    let traj = debugging_cartesian_trajectory().unwrap();
    assert_eq!(traj.shape(), &[1, 2, 62080]);
    println!("  [PASSED] every draw has 62080 points.");
}

#[test]
fn test_debugging_trajectory_grid_layout() {
    let mut rng = StdRng::seed_from_u64(77);
    let traj = debugging_cartesian_trajectory_with_rng(&mut rng).unwrap();

    // first row of the meshgrid: every readout column at spoke position 0
    let first_spoke = traj.slice(s![0, 1, 0..DEBUG_RETAINED_COLUMNS]);
    assert!(first_spoke.iter().all(|&v| v == normalized_frequency(0, 640)));

    // readout coordinates repeat for every spoke position
    let readout = traj.slice(s![0, 0, 0..DEBUG_RETAINED_COLUMNS]).to_owned();
    let last = traj.slice(s![0, 0, DEBUG_TRAJECTORY_LEN - DEBUG_RETAINED_COLUMNS..]);
    assert_eq!(last, readout);

    // the calibration band (columns 184..216) is always present
    for col in 184..216 {
        let coord = normalized_frequency(col, 400);
        assert!(readout.iter().any(|&v| v == coord), "column {} missing", col);
    }
    assert!(readout.windows(2).into_iter().all(|w| w[0] < w[1]));
    assert!(traj.iter().all(|&v| (-std::f32::consts::PI..std::f32::consts::PI).contains(&v)));
}

#[test]
fn test_normalized_frequency() {
    assert_eq!(normalized_frequency(0, 400), -std::f32::consts::PI);
    assert_eq!(normalized_frequency(200, 400), 0.0);
    assert!(normalized_frequency(399, 400) < std::f32::consts::PI);
}
