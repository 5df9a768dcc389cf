/// Parses a numeric literal token into a floating-point value.
///
/// The conversion is done digit by digit rather than through a generic
/// string-to-number routine: each digit left of the decimal point is scaled
/// by its power of ten relative to the point (or to the end of the token when
/// there is no point), and each digit right of the point is divided by an
/// increasing power of ten. A leading decimal point (`.5`) and a trailing one
/// (`5.`) are both accepted; a token without any digit is not.
///
/// # Parameters
/// - `token`: The token text to parse.
///
/// # Returns
/// - `Some(f64)`: The parsed value, if the token consists of ASCII digits and
///   at most one decimal point.
/// - `None`: If any other character appears, a second decimal point is found,
///   or the token contains no digit at all.
///
/// # Example
/// ```
/// use reducta::engine::number::parse_number;
///
/// assert_eq!(parse_number("5"), Some(5.0));
/// assert_eq!(parse_number(".5"), Some(0.5));
/// assert!((parse_number("12.34").unwrap() - 12.34).abs() < 1e-12);
/// assert_eq!(parse_number("+"), None);
/// assert_eq!(parse_number("1.2.3"), None);
/// ```
#[must_use]
pub fn parse_number(token: &str) -> Option<f64> {
    let bytes = token.as_bytes();

    let mut point = None;
    let mut digits = 0_usize;
    for (i, &b) in bytes.iter().enumerate() {
        match b {
            b'.' if point.is_none() => point = Some(i),
            b'0'..=b'9' => digits += 1,
            _ => return None,
        }
    }
    if digits == 0 {
        return None;
    }

    let int_end = point.unwrap_or(bytes.len());
    let mut value = 0.0;

    let mut scale = 1.0;
    for &b in bytes[..int_end].iter().rev() {
        value += f64::from(b - b'0') * scale;
        scale *= 10.0;
    }

    if let Some(point) = point {
        let mut scale = 10.0;
        for &b in &bytes[point + 1..] {
            value += f64::from(b - b'0') / scale;
            scale *= 10.0;
        }
    }

    Some(value)
}
