// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![allow(missing_docs)]
use core::f32::consts::{FRAC_PI_2, FRAC_PI_4, PI};

use gw_math::{Mat4, Quat, Vec3, Vec4};

const ABS_TOL: f32 = 1e-5;
const REL_TOL: f32 = 1e-5;

fn assert_quat_eq(actual: Quat, expected: Quat) {
    assert!(
        actual.approx_eq_tol(&expected, ABS_TOL, REL_TOL),
        "expected {expected:?}, got {actual:?}"
    );
}

fn assert_vec3_eq(actual: Vec3, expected: Vec3) {
    assert!(
        actual.approx_eq_tol(&expected, ABS_TOL, REL_TOL),
        "expected {expected:?}, got {actual:?}"
    );
}

/// Same rotation, either cover.
fn assert_same_rotation(actual: Quat, expected: Quat) {
    assert_quat_eq(Quat::closest(&expected, &actual), expected);
}

fn sample_rotations() -> [Quat; 5] {
    [
        Quat::IDENTITY,
        Quat::from_axis_angle_u(Vec3::new(1.0, 2.0, 3.0), 0.8),
        Quat::from_axis_angle_n(Vec3::UNIT_X, PI),
        Quat::from_axis_angle_n(Vec3::UNIT_Y, 3.0),
        Quat::from_axis_angle_u(Vec3::new(-1.0, 0.5, 4.0), -2.5),
    ]
}

#[test]
fn inverse_composes_to_identity() {
    for q in sample_rotations() {
        assert_quat_eq(q.multiply(&q.inverse()), Quat::IDENTITY);
        assert_quat_eq(q.inverse().multiply(&q), Quat::IDENTITY);
    }
    let scaled = Quat::new(0.5, -1.0, 2.0, 3.0);
    assert_quat_eq(scaled.multiply(&scaled.inverse()), Quat::IDENTITY);
}

#[test]
fn part_selection_and_norm() {
    let q = Quat::new(1.0, 2.0, 3.0, 4.0);
    assert_eq!(q.scalar(), 4.0);
    assert_eq!(q.vector().to_array(), [1.0, 2.0, 3.0]);
    assert_eq!(q.norm(), 30.0);
    assert_eq!(q.norm(), q.length_squared());
    assert_eq!(q.conjugate().to_array(), [-1.0, -2.0, -3.0, 4.0]);
    assert_eq!(q.neg3(), q.conjugate());
    assert_eq!(q.neg().to_array(), [-1.0, -2.0, -3.0, -4.0]);
    assert_eq!(q.scale3(2.0).to_array(), [2.0, 4.0, 6.0, 4.0]);
    assert_eq!(q.add(&q).sub(&q), q);
}

#[test]
fn multiply_operator_matches_method() {
    let a = Quat::from_axis_angle_n(Vec3::UNIT_Y, FRAC_PI_2);
    let b = Quat::from_axis_angle_n(Vec3::UNIT_X, FRAC_PI_4);
    assert_eq!((a * b).to_array(), a.multiply(&b).to_array());
}

#[test]
fn multiply_applies_right_operand_first() {
    let yaw = Quat::from_axis_angle_n(Vec3::UNIT_Y, FRAC_PI_2);
    let pitch = Quat::from_axis_angle_n(Vec3::UNIT_X, FRAC_PI_2);
    let v = Vec3::UNIT_Z;
    let composed = yaw.multiply(&pitch).rotate(&v);
    let stepwise = yaw.rotate(&pitch.rotate(&v));
    assert_vec3_eq(composed, stepwise);
}

#[test]
fn rotate_matches_matrix() {
    let v = Vec3::new(0.3, -1.2, 2.5);
    for q in sample_rotations() {
        assert_vec3_eq(q.rotate(&v), q.to_mat4().transform_vector(&v));
    }
}

#[test]
fn zero_axis_yields_identity() {
    assert_eq!(Quat::from_axis_angle_u(Vec3::ZERO, 1.0), Quat::IDENTITY);
}

#[test]
fn degree_constructors_match_radians() {
    let axis = Vec3::new(0.0, 3.0, 4.0);
    assert_quat_eq(
        Quat::from_axis_angle_degrees_u(axis, 90.0),
        Quat::from_axis_angle_u(axis, FRAC_PI_2),
    );
    assert_quat_eq(
        Quat::from_axis_angle_degrees_n(Vec3::UNIT_Z, 45.0),
        Quat::from_axis_angle_n(Vec3::UNIT_Z, FRAC_PI_4),
    );
    assert_quat_eq(
        Quat::from_euler_degrees(30.0, -45.0, 60.0),
        Quat::from_euler_radians(PI / 6.0, -FRAC_PI_4, PI / 3.0),
    );
}

#[test]
fn euler_matches_matrix_order() {
    let (x, y, z) = (0.4, -1.1, 2.3);
    let from_quat = Quat::from_euler_radians(x, y, z).to_mat4();
    let direct = Mat4::from_euler_radians(x, y, z);
    assert!(
        from_quat.approx_eq_tol(&direct, ABS_TOL, REL_TOL),
        "{from_quat:?} vs {direct:?}"
    );
}

#[test]
fn matrix_round_trip_covers_every_branch() {
    // Identity takes the positive-trace branch; the π rotations force the
    // largest-diagonal branches for x, y and z in turn.
    let cases = [
        Quat::IDENTITY,
        Quat::from_axis_angle_u(Vec3::new(1.0, 2.0, 3.0), 0.8),
        Quat::from_axis_angle_n(Vec3::UNIT_X, PI),
        Quat::from_axis_angle_n(Vec3::UNIT_Y, PI),
        Quat::from_axis_angle_n(Vec3::UNIT_Z, PI),
        Quat::from_axis_angle_u(Vec3::new(1.0, 0.2, 0.1), 3.0),
    ];
    for q in cases {
        assert_same_rotation(Quat::from_mat4(&q.to_mat4()), q);
        assert_same_rotation(Quat::from_mat4(&Mat4::from_quat(&q)), q);
    }
}

#[test]
fn from_to_maps_direction() {
    let from = Vec3::new(1.0, 0.0, 0.0);
    let to = Vec3::new(0.0, 2.0, 2.0);
    let q = Quat::from_to(&from, &to);
    assert!((q.length() - 1.0).abs() < ABS_TOL);
    assert_vec3_eq(q.rotate(&from), to.normalize());

    let q4 = Quat::from_to_vec4(&Vec4::from_vec3(from, 0.0), &Vec4::from_vec3(to, 1.0));
    assert_quat_eq(q4, q);
}

#[test]
fn from_to_parallel_is_identity() {
    let v = Vec3::new(0.0, 3.0, 0.0);
    assert_quat_eq(Quat::from_to(&v, &Vec3::UNIT_Y), Quat::IDENTITY);
}

#[test]
fn from_to_opposite_is_half_turn() {
    for v in [Vec3::UNIT_X, Vec3::UNIT_Y, Vec3::new(1.0, -2.0, 0.5)] {
        let q = Quat::from_to(&v, &v.neg());
        assert!(q.w().abs() < ABS_TOL, "not a half turn: {q:?}");
        assert!((q.length() - 1.0).abs() < ABS_TOL);
        assert_vec3_eq(q.rotate(&v), v.neg());
    }
}

#[test]
fn slerp_endpoints_and_midpoint() {
    let rotations = sample_rotations();
    for a in rotations {
        for b in rotations {
            let b = Quat::closest(&a, &b);
            assert_quat_eq(a.slerp(&b, 0.0), a);
            assert_quat_eq(a.slerp(&b, 1.0), b);
        }
    }

    let a = Quat::IDENTITY;
    let b = Quat::from_axis_angle_n(Vec3::UNIT_Z, FRAC_PI_2);
    assert_quat_eq(a.slerp(&b, 0.5), Quat::from_axis_angle_n(Vec3::UNIT_Z, FRAC_PI_4));
}

#[test]
fn slerp_nearly_parallel_stays_unit() {
    let a = Quat::from_axis_angle_n(Vec3::UNIT_X, 0.25);
    let b = Quat::from_axis_angle_n(Vec3::UNIT_X, 0.2501);
    for t in [0.0, 0.3, 0.5, 1.0] {
        let s = a.slerp(&b, t);
        assert!(s.to_array().iter().all(|c| c.is_finite()));
        assert!((s.length() - 1.0).abs() < ABS_TOL);
    }
    assert_quat_eq(a.slerp(&a, 0.5), a);
}

#[test]
fn slerp_between_opposite_keys_stays_unit() {
    let a = Quat::from_axis_angle_n(Vec3::UNIT_Z, 0.7);
    let b = a.neg();
    for t in [0.0, 0.25, 0.5, 0.75, 1.0] {
        let s = a.slerp(&b, t);
        assert!(s.to_array().iter().all(|c| c.is_finite()), "t = {t}: {s:?}");
        assert!((s.length() - 1.0).abs() < ABS_TOL, "t = {t}: {s:?}");
    }
    assert_quat_eq(a.slerp(&b, 0.0), a);
    assert_quat_eq(a.slerp(&b, 1.0), b);
    assert!(a.dot(&a.slerp(&b, 0.5)).abs() < ABS_TOL);
}

#[test]
fn slerp_between_nearly_opposite_keys_follows_the_arc() {
    let a = Quat::from_axis_angle_n(Vec3::UNIT_Z, 0.7);
    let b = Quat::from_axis_angle_n(Vec3::UNIT_Z, 0.7 + 2.0 * PI - 1.0e-3);
    assert!(a.dot(&b) < -0.9999);
    for t in [0.0, 0.25, 0.5, 0.75, 1.0] {
        let s = a.slerp(&b, t);
        assert!((s.length() - 1.0).abs() < ABS_TOL, "t = {t}: {s:?}");
        assert!(s.x().abs() < ABS_TOL && s.y().abs() < ABS_TOL, "left the Z plane: {s:?}");
    }
    assert_quat_eq(a.slerp(&b, 1.0), b);
    assert_quat_eq(
        a.slerp(&b, 0.5),
        Quat::from_axis_angle_n(Vec3::UNIT_Z, 0.7 + PI - 0.5e-3),
    );
}

#[test]
fn lerp_is_normalised() {
    let a = Quat::IDENTITY;
    let b = Quat::from_axis_angle_n(Vec3::UNIT_Y, FRAC_PI_2);
    let l = a.lerp(&b, 0.5);
    assert!((l.length() - 1.0).abs() < ABS_TOL);
    assert_quat_eq(l, Quat::from_axis_angle_n(Vec3::UNIT_Y, FRAC_PI_4));
}

#[test]
fn spline_of_evenly_spaced_keys_is_middle_key() {
    let a = Quat::from_axis_angle_n(Vec3::UNIT_Z, 0.2);
    let b = Quat::from_axis_angle_n(Vec3::UNIT_Z, 0.7);
    let c = Quat::from_axis_angle_n(Vec3::UNIT_Z, 1.2);
    assert_quat_eq(Quat::spline(&a, &b, &c), b);
}

#[test]
fn squad_hits_keyframes() {
    let p = Quat::from_axis_angle_n(Vec3::UNIT_X, 0.1);
    let q = Quat::from_axis_angle_u(Vec3::new(0.0, 1.0, 1.0), 1.4);
    let r = Quat::from_axis_angle_n(Vec3::UNIT_Z, -0.6);
    let o = Quat::from_axis_angle_n(Vec3::UNIT_Y, 0.3);
    let a = Quat::spline(&o, &p, &q);
    let b = Quat::spline(&p, &q, &r);
    assert_quat_eq(Quat::squad(&p, &a, &b, &q, 0.0), p);
    assert_quat_eq(Quat::squad(&p, &a, &b, &q, 1.0), q);
    let mid = Quat::squad(&p, &a, &b, &q, 0.5);
    assert!((mid.length() - 1.0).abs() < 1e-5);
}

#[test]
fn non_finite_constants() {
    assert!(Quat::NAN.to_array().iter().all(|c| c.is_nan()));
    assert!(Quat::INFINITY.to_array().iter().all(|c| c.is_infinite()));
    assert!(Quat::NEG_INFINITY.w() < 0.0);
    assert_eq!(Quat::ONE.to_array(), [1.0; 4]);
    assert_eq!(Quat::ZERO.length(), 0.0);
    assert_eq!(Quat::default(), Quat::identity());
}
