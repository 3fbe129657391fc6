//! Lenient numeric parsing: read the longest numeric prefix, default to zero.

/// Length of the leading run of ASCII digits in `src`.
fn digits(src: &[u8]) -> usize {
    src.iter().take_while(|b| b.is_ascii_digit()).count()
}

/// Splits leading whitespace and an optional sign off `src`.
fn sign(src: &str) -> (&str, &str) {
    let src = src.trim_start();
    match src.as_bytes().first() {
        Some(b'+' | b'-') => src.split_at(1),
        _ => ("", src),
    }
}

/// Parses the integer prefix of `src`; `None` only when the prefix
/// overflows an `i64`.
pub(super) fn integer_prefix(src: &str) -> Option<i64> {
    let (sign, rest) = sign(src);
    let len = digits(rest.as_bytes());

    if len == 0 {
        return Some(0);
    }

    format!("{sign}{}", &rest[..len]).parse().ok()
}

/// Parses the float prefix of `src`: digits, an optional fraction and an
/// optional exponent.
pub(super) fn float_prefix(src: &str) -> f64 {
    let (sign, rest) = sign(src);
    let bytes = rest.as_bytes();

    let mut end = digits(bytes);
    let mut mantissa = end;

    if bytes.get(end) == Some(&b'.') {
        let fraction = digits(&bytes[end + 1..]);
        if fraction > 0 {
            end += 1 + fraction;
            mantissa += fraction;
        }
    }

    if mantissa == 0 {
        return 0.0;
    }

    if let Some(b'e' | b'E') = bytes.get(end) {
        let mut exp = end + 1;
        if let Some(b'+' | b'-') = bytes.get(exp) {
            exp += 1;
        }
        let exp_digits = digits(&bytes[exp..]);
        if exp_digits > 0 {
            end = exp + exp_digits;
        }
    }

    format!("{sign}{}", &rest[..end]).parse().unwrap_or_default()
}
