/// Largest magnitude the accumulators may hold: `-2^63` is still a valid duration.
pub(super) const MAGNITUDE_LIMIT: u64 = 1 << 63;

/// The leading integer overflowed [`MAGNITUDE_LIMIT`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct LeadingIntOverflow;

/// Consumes the leading `[0-9]*` of `input` as an integer.
///
/// Returns the value along with the rest of the input.
pub(super) fn leading_int(input: &str) -> Result<(u64, &str), LeadingIntOverflow> {
    let position = digits_len(input);
    let mut value = 0_u64;
    for byte in input[..position].bytes() {
        if value > MAGNITUDE_LIMIT / 10 {
            return Err(LeadingIntOverflow);
        }
        value = value * 10 + u64::from(byte - b'0');
        if value > MAGNITUDE_LIMIT {
            return Err(LeadingIntOverflow);
        }
    }

    Ok((value, &input[position..]))
}

/// A fraction `numerator / scale`, as read from the digits after a decimal point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct Fraction {
    pub numerator: u64,
    pub scale: f64,
}

/// Consumes the leading `[0-9]*` of `input` as the digits of a fraction.
///
/// This never fails: once another digit would overflow the numerator, the remaining digits
/// are skipped without adding precision.
pub(super) fn leading_fraction(input: &str) -> (Fraction, &str) {
    let position = digits_len(input);
    let mut fraction = Fraction {
        numerator: 0,
        scale: 1.0,
    };

    for byte in input[..position].bytes() {
        if fraction.numerator > (MAGNITUDE_LIMIT - 1) / 10 {
            break;
        }
        let next = fraction.numerator * 10 + u64::from(byte - b'0');
        if next > MAGNITUDE_LIMIT {
            break;
        }
        fraction.numerator = next;
        fraction.scale *= 10.0;
    }

    (fraction, &input[position..])
}

fn digits_len(input: &str) -> usize {
    input.bytes().take_while(u8::is_ascii_digit).count()
}
