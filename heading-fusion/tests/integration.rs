//! End-to-end flows across the fusion operations: raw samples in, compass
//! quantities out.

use approx::assert_abs_diff_eq;
use heading_fusion::{
    altitude_from_pressure, angle_variation, geomagnetic_dip, orientation_angles,
    remap_coordinate_system, rotation_and_inclination, rotation_from_vector, Axis, Quaternion,
};

#[test]
fn samples_to_orientation_angles() {
    // Device flat, top edge at magnetic north: all three angles are zero.
    let (rotation, inclination) =
        rotation_and_inclination(&[0.0, 0.0, 9.81], &[0.0, 20.0, -40.0]).unwrap();

    let [azimuth, pitch, roll] = orientation_angles(rotation.as_slice()).unwrap();
    assert_abs_diff_eq!(azimuth, 0.0, epsilon = 1e-12);
    assert_abs_diff_eq!(pitch, 0.0, epsilon = 1e-12);
    assert_abs_diff_eq!(roll, 0.0, epsilon = 1e-12);

    // The dip matches the field geometry: atan(40 / 20) below the horizon.
    let dip = geomagnetic_dip(inclination.as_slice()).unwrap();
    assert_abs_diff_eq!(dip, libm::atan2(-40.0, 20.0), epsilon = 1e-12);
}

#[test]
fn tilted_samples_give_bounded_angles() {
    let (rotation, _) = rotation_and_inclination(&[9.0, 9.0, 9.0], &[30.0, 25.0, 41.0]).unwrap();
    assert!(rotation.is_orthonormal(1e-9));

    let [azimuth, pitch, roll] = orientation_angles(rotation.as_slice()).unwrap();
    assert!(azimuth.abs() <= std::f64::consts::PI);
    assert!(pitch.abs() <= std::f64::consts::FRAC_PI_2);
    assert!(roll.abs() <= std::f64::consts::PI);
    // Gravity along (1,1,1): the device is pitched up and rolled.
    assert!(pitch < 0.0);
}

#[test]
fn rotation_vector_and_raw_samples_agree_on_identity() {
    let from_vector = rotation_from_vector(&[0.0, 0.0, 0.0]).unwrap();
    let (from_samples, _) =
        rotation_and_inclination(&[0.0, 0.0, 9.81], &[0.0, 20.0, -40.0]).unwrap();

    for (a, b) in from_vector
        .as_slice()
        .iter()
        .zip(from_samples.as_slice().iter())
    {
        assert_abs_diff_eq!(a, b, epsilon = 1e-12);
    }
}

#[test]
fn quaternion_matrix_preserves_orientation_angles() {
    let q = Quaternion::from_rotation_vector(&[-0.0245, 0.402, 0.0465]).unwrap();
    let matrix = q.rotation_matrix();
    assert!(matrix.is_orthonormal(1e-9));

    let [azimuth, pitch, roll] = orientation_angles(matrix.as_slice()).unwrap();
    assert!(azimuth.is_finite() && pitch.is_finite() && roll.is_finite());
    // Pitch for this sample matches asin of the known matrix entry.
    assert_abs_diff_eq!(pitch, libm::asin(0.007_406_365), epsilon = 1e-6);
}

#[test]
fn remap_then_extract_angles() {
    let (rotation, _) = rotation_and_inclination(&[9.0, 9.0, 9.0], &[30.0, 25.0, 41.0]).unwrap();

    // Relabel for a landscape screen, then read angles from the result.
    let remapped = remap_coordinate_system(rotation.as_slice(), Axis::Y, Axis::MinusX).unwrap();
    let [azimuth, _, _] = orientation_angles(&remapped).unwrap();
    let [original_azimuth, _, _] = orientation_angles(rotation.as_slice()).unwrap();

    // The remap only relabels axes; both azimuths are finite and differ by
    // the screen rotation, not by an arbitrary amount.
    assert!(azimuth.is_finite());
    assert!((azimuth - original_azimuth).abs() > 1e-3);
}

#[test]
fn angle_variation_of_identical_attitudes() {
    let (rotation, _) = rotation_and_inclination(&[9.0, 9.0, 9.0], &[30.0, 25.0, 41.0]).unwrap();

    // previous * current is not identity for identical orthonormal inputs
    // (that would need a transpose), so the variation is not zero; it is
    // still finite in yaw and roll for a proper rotation.
    let angles = angle_variation(rotation.as_slice(), rotation.as_slice()).unwrap();
    assert!(angles[0].is_finite());
    assert!(angles[2].is_finite());
}

#[test]
fn degenerate_gravity_marks_everything_undefined() {
    let (rotation, inclination) =
        rotation_and_inclination(&[0.0, 0.0, 0.0], &[30.0, 25.0, 41.0]).unwrap();

    // NaN flows from the matrix into every downstream quantity.
    let angles = orientation_angles(rotation.as_slice()).unwrap();
    assert!(angles.iter().all(|a| a.is_nan()));

    let dip = geomagnetic_dip(inclination.as_slice()).unwrap();
    assert!(dip.is_nan());

    // But the error channel stays clean: degenerate data is not an Err.
    assert!(rotation.defined_entries().iter().any(|e| e.is_none()));
}

#[test]
fn pressure_to_altitude_round_numbers() {
    assert_eq!(altitude_from_pressure(0.0, 100.0), f64::NEG_INFINITY);
    assert_eq!(altitude_from_pressure(5.0, 0.0), 44330.0);
    assert_eq!(altitude_from_pressure(1013.25, 1013.25), 0.0);
}

#[test]
fn repeat_calls_are_bit_identical() {
    let gravity = [9.0, 9.0, 9.0];
    let geomagnetic = [30.0, 25.0, 41.0];

    let (first, first_inc) = rotation_and_inclination(&gravity, &geomagnetic).unwrap();
    let (second, second_inc) = rotation_and_inclination(&gravity, &geomagnetic).unwrap();
    assert_eq!(first.to_array(), second.to_array());
    assert_eq!(first_inc.to_array(), second_inc.to_array());

    let a = orientation_angles(first.as_slice()).unwrap();
    let b = orientation_angles(second.as_slice()).unwrap();
    assert_eq!(a, b);
}
