const BYTES_PER_GB: f64 = 1024.0 * 1024.0 * 1024.0;

pub const DEFAULT_BYTES_PRECISION: usize = 6;
pub const DEFAULT_NUMBER_PRECISION: usize = 4;

/// Widest exact fractional expansion an `f64` can have.
const MAX_FRACTION_DIGITS: usize = 1074;

/// Render a byte count in GiB with a fixed number of decimals. Zero stays `"0"`.
pub fn bytes_to_gb(bytes: u64, precision: usize) -> String {
    if bytes == 0 {
        return "0".to_string();
    }
    to_fixed(bytes as f64 / BYTES_PER_GB, precision)
}

pub fn number_to_fixed(n: f64, precision: usize) -> String {
    if n == 0.0 {
        return "0".to_string();
    }
    to_fixed(n, precision)
}

/// Fixed-point rendering where exact halfway values round away from zero.
/// Non-finite values render as `NaN`, `Infinity` and `-Infinity`.
pub fn to_fixed(n: f64, precision: usize) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if !is_halfway(n, precision) {
        return format!("{:.*}", precision, n);
    }

    // Exact tie: the digits up to `precision + 1` are exact, so drop the
    // trailing 5 and bump the last kept digit.
    let mut digits = format!("{:.*}", precision + 1, n.abs());
    digits.pop();
    if digits.ends_with('.') {
        digits.pop();
    }
    let rounded = increment_decimal(&digits);
    if n < 0.0 {
        format!("-{rounded}")
    } else {
        rounded
    }
}

fn is_halfway(n: f64, precision: usize) -> bool {
    if precision >= MAX_FRACTION_DIGITS {
        return false;
    }
    let exact = format!("{:.*}", MAX_FRACTION_DIGITS, n.abs());
    let fraction = exact
        .split_once('.')
        .map_or("", |(_, f)| f)
        .trim_end_matches('0');
    fraction.len() == precision + 1 && fraction.ends_with('5')
}

/// Add one unit in the last place of a non-negative decimal string.
fn increment_decimal(digits: &str) -> String {
    let mut out: Vec<u8> = digits.bytes().collect();
    for b in out.iter_mut().rev() {
        match *b {
            b'.' => continue,
            b'9' => *b = b'0',
            _ => {
                *b += 1;
                return String::from_utf8_lossy(&out).into_owned();
            }
        }
    }
    format!("1{}", String::from_utf8_lossy(&out))
}
