use approx::assert_relative_eq;
use geom::{dot, length, normalize, refract, vec2, Vec2d, Vec2f, Vec2i, Vector2};
use proptest::prelude::*;

#[test]
fn default_constructor() {
    let v = Vector2::<i32>::default();
    assert_eq!(v.x, 0);
    assert_eq!(v.y, 0);
}

#[test]
fn scalar_constructor() {
    let v = Vector2::<i32>::new(1, 2);
    assert_eq!(v.x, 1);
    assert_eq!(v.y, 2);
}

#[test]
fn copy_constructor() {
    let v1 = Vec2i::new(1, 2);
    let v2 = v1;
    assert_eq!(v1.x, v2.x);
    assert_eq!(v1.y, v2.y);
}

#[test]
fn convert_constructor() {
    let v1 = Vec2d::new(1.1, 2.2);
    let v2 = Vec2i::from_vector(v1);
    assert_eq!(v1.x as i32, v2.x);
    assert_eq!(v1.y as i32, v2.y);
    assert_eq!(v2, Vec2i::new(1, 2));

    let v3 = Vec2i::new(5, 10);
    let v4: Vec2d = v3.cast();
    assert_eq!(v3.x as f64, v4.x);
    assert_eq!(v3.y as f64, v4.y);
}

#[test]
fn convert_assignment() {
    let mut v = Vec2i::default();
    v.assign_from(Vec2d::new(1.1, 2.2));
    assert_eq!(v, Vec2i::new(1, 2));

    let mut w = Vec2d::default();
    w.assign_from(Vec2i::new(5, 10));
    assert_eq!(w, Vec2d::new(5.0, 10.0));
}

#[test]
fn addition() {
    assert_eq!(Vec2i::new(1, 2) + Vec2i::new(0, 0), Vec2i::new(1, 2));
    assert_eq!(Vec2i::new(1, 2) + Vec2i::new(-1, -2), Vec2i::new(0, 0));
    assert_eq!(Vec2i::new(1, 1) + Vec2i::new(2, 3), Vec2i::new(3, 4));
    assert_eq!(Vec2i::new(1, 2) + Vec2i::new(2, 1), Vec2i::new(3, 3));
}

#[test]
fn addition_assignment() {
    let mut v1 = Vec2i::new(1, 2);
    let v2 = Vec2i::new(2, 1);
    v1 += v2;
    assert_eq!(v1.x, 3);
    assert_eq!(v1.y, 3);
}

#[test]
fn partial_order() {
    let a = Vec2i::new(1, 5);
    let b = Vec2i::new(5, 1);
    assert!(!(a > b));
    assert!(!(a < b));
    assert!(!(a == b));
}

#[test]
fn length_of_3_4_5_triangle() {
    assert_eq!(length(Vec2f::new(3.0, 4.0)), 5.0_f32);
}

#[test]
fn refract_total_internal_reflection() {
    // grazing ray leaving a dense medium
    let incident = normalize(Vec2f::new(0.9, -0.1));
    let r = refract(incident, Vec2f::new(0.0, 1.0), 1.33_f32);
    assert_eq!(r.x, 0.0);
    assert_eq!(r.y, 0.0);
}

fn small_int() -> impl Strategy<Value = i32> {
    -10_000..10_000
}

fn small_float() -> impl Strategy<Value = f64> {
    -1.0e3..1.0e3
}

proptest! {
    #[test]
    fn additive_identity(x in small_int(), y in small_int()) {
        let v = vec2(x, y);
        prop_assert_eq!(v + Vec2i::new(0, 0), v);
        prop_assert_eq!(v - v, Vec2i::new(0, 0));
    }

    #[test]
    fn integer_scale_round_trips(x in small_int(), y in small_int(), k in 1..100_i32) {
        let v = vec2(x, y);
        prop_assert_eq!((v * k) / k, v);
    }

    #[test]
    fn float_scale_round_trips(x in small_float(), y in small_float(), k in 0.5..100.0_f64) {
        let v = vec2(x, y);
        let w = (v * k) / k;
        assert_relative_eq!(w.x, v.x, epsilon = 1e-9, max_relative = 1e-12);
        assert_relative_eq!(w.y, v.y, epsilon = 1e-9, max_relative = 1e-12);
    }

    #[test]
    fn addition_commutes(a in (small_int(), small_int()), b in (small_float(), small_float())) {
        let a = Vec2i::from(a);
        let b = Vec2d::from(b);
        prop_assert_eq!(a + b, b + a);
    }

    #[test]
    fn dot_commutes(a in (small_float(), small_float()), b in (small_int(), small_int())) {
        let a = Vec2d::from(a);
        let b = Vec2i::from(b);
        prop_assert_eq!(dot(a, b), dot(b, a));
    }

    #[test]
    fn normalized_has_unit_length(x in small_float(), y in small_float()) {
        prop_assume!(x.abs() > 1e-6 || y.abs() > 1e-6);
        assert_relative_eq!(length(normalize(vec2(x, y))), 1.0, epsilon = 1e-12);
    }
}
