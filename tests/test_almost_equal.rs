use wasm_float_cmp::ieee754::{almost_equal, F32Cmp, F64Cmp, Ieee754};
use wasm_float_cmp::utils::almost_equal::AlmostEqual;
use wasm_float_cmp::utils::buffer_cmp::{all_almost_equal, compare_buffers};
use wasm_float_cmp::{
    almost_equal_f32, almost_equal_f64, exponent_bits_f32, is_nan_f32, is_nan_f64, sign_bit_f64,
    significand_bits_f64, ulp_distance_f32, ulp_distance_f64,
};

/// Spread of f32 values around zero, one, large magnitudes and infinities.
fn sample_f32() -> Vec<f32> {
    let mut values = vec![
        0.0,
        -0.0,
        f32::MIN_POSITIVE,
        f32::EPSILON,
        1e-9,
        -1e-9,
        0.01,
        -0.01,
        0.000_000_2,
        -0.000_000_2,
        f32::MAX,
        f32::MIN,
        f32::INFINITY,
        f32::NEG_INFINITY,
    ];

    for base in [1.0_f32, -1.0, 123.456, -98765.4, 3.0e20] {
        for step in 0..7 {
            values.push(f32::from_bit_pattern(base.to_bit_pattern() + step));
        }
    }

    values
}

#[test]
fn test_reflexivity() {
    for value in sample_f32() {
        assert!(almost_equal(value, value), "{} != itself", value);
    }
}

#[test]
fn test_symmetry() {
    let values = sample_f32();

    for &a in &values {
        for &b in &values {
            assert_eq!(
                almost_equal(a, b),
                almost_equal(b, a),
                "asymmetric result for {} and {}",
                a,
                b
            );
        }
    }
}

#[test]
fn test_nan_dominance() {
    let nans = [
        f32::NAN,
        -f32::NAN,
        f32::from_bit_pattern(0x7F80_0001),
        f32::from_bit_pattern(0xFFFF_FFFF),
    ];

    for nan in nans {
        for value in sample_f32().into_iter().chain(nans) {
            assert!(!almost_equal(nan, value));
            assert!(!almost_equal(value, nan));
        }
    }
}

#[test]
fn test_documented_boundaries() {
    // within machine epsilon of each other, signs notwithstanding
    assert!(almost_equal_f32(1e-9, -1e-9));
    assert!(!almost_equal_f32(0.01, -0.01));
    assert!(!almost_equal_f32(0.000_000_2, -0.000_000_2));

    let one = 1.0_f32.to_bit_pattern();
    assert!(almost_equal_f32(1.0, f32::from_bit_pattern(one + 4)));
    assert!(!almost_equal_f32(1.0, f32::from_bit_pattern(one + 5)));

    let one = 1.0_f64.to_bit_pattern();
    assert!(almost_equal_f64(1.0, f64::from_bit_pattern(one + 4)));
    assert!(!almost_equal_f64(1.0, f64::from_bit_pattern(one + 5)));
}

#[test]
fn test_operators_route_to_almost_equal() {
    let values = sample_f32();

    for &a in &values {
        for &b in &values {
            let expected = almost_equal(a, b);

            assert_eq!(F32Cmp::new(a) == F32Cmp::new(b), expected);
            assert_eq!(F32Cmp::new(a) == b, expected);
            assert_eq!(a == F32Cmp::new(b), expected);
            assert_eq!(a.almost_equal(b), expected);
        }
    }
}

#[test]
fn test_exported_bit_accessors() {
    assert!(is_nan_f32(f32::NAN));
    assert!(!is_nan_f32(f32::INFINITY));
    assert!(is_nan_f64(f64::NAN));
    assert!(!is_nan_f64(-0.0));

    assert_eq!(exponent_bits_f32(f32::INFINITY), 0x7F80_0000);
    assert_eq!(sign_bit_f64(-3.0), 0x8000_0000_0000_0000);
    assert_eq!(significand_bits_f64(1.5), 0x0008_0000_0000_0000);

    assert_eq!(ulp_distance_f32(1.0, 1.0 + f32::EPSILON), 1);
    assert_eq!(ulp_distance_f32(-0.0, 0.0), 0);
    assert_eq!(ulp_distance_f64(2.0, 1.0), ulp_distance_f64(1.0, 2.0));
    assert_eq!(ulp_distance_f64(1.0, 2.0), 1 << 52);
}

#[test]
fn test_comparator_matches_f64_free_function() {
    let a = F64Cmp::new(0.1 + 0.2);

    assert!(a == 0.3_f64);
    assert!(0.3_f64 == a);
    assert!(a != 0.31_f64);
    assert_eq!(a.float_data(), 0.1 + 0.2);
}

#[test]
fn test_buffer_comparison() {
    let lhs: Vec<f32> = (0..16).map(|i| i as f32 * 0.1).collect();
    let rhs: Vec<f32> = (0..16).map(|i| (i as f32 * 0.01) * 10.0).collect();

    let mask = compare_buffers(&lhs, &rhs);

    assert_eq!(mask.len(), lhs.len());
    assert!(mask.iter().all(|&flag| flag == 1));
    assert!(all_almost_equal(&lhs, &rhs));
    assert!(compare_buffers(&lhs, &rhs[1..]).is_empty());
}
