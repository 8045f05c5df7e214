use ocfmt::util::units::{bytes_to_gb, number_to_fixed};

#[test]
fn test_zero_bytes() {
    assert_eq!(bytes_to_gb(0, 6), "0");
}

#[test]
fn test_one_gib() {
    assert_eq!(bytes_to_gb(1024 * 1024 * 1024, 6), "1.000000");
}

#[test]
fn test_fractional_gib() {
    assert_eq!(bytes_to_gb(512 * 1024 * 1024, 2), "0.50");
    assert_eq!(bytes_to_gb(1024, 6), "0.000001");
}

#[test]
fn test_zero_number() {
    assert_eq!(number_to_fixed(0.0, 4), "0");
}

#[test]
fn test_number_precision() {
    assert_eq!(number_to_fixed(3.14159, 4), "3.1416");
    assert_eq!(number_to_fixed(-2.5, 1), "-2.5");
    assert_eq!(number_to_fixed(7.0, 0), "7");
}

#[test]
fn test_halfway_bytes_round_away_from_zero() {
    assert_eq!(bytes_to_gb(8 * 1024 * 1024, 6), "0.007813");
}

#[test]
fn test_halfway_numbers_round_away_from_zero() {
    assert_eq!(number_to_fixed(2.5, 0), "3");
    assert_eq!(number_to_fixed(-2.5, 0), "-3");
    assert_eq!(number_to_fixed(0.03125, 4), "0.0313");
    assert_eq!(number_to_fixed(9.995, 2), "9.99");
    assert_eq!(number_to_fixed(99.5, 0), "100");
}

#[test]
fn test_non_finite_numbers() {
    assert_eq!(number_to_fixed(f64::NAN, 2), "NaN");
    assert_eq!(number_to_fixed(f64::INFINITY, 2), "Infinity");
    assert_eq!(number_to_fixed(f64::NEG_INFINITY, 2), "-Infinity");
}
