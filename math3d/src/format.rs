//! `%g` style float formatting for the debug dumps.

use std::fmt::{Display, Formatter};


/// Formats the wrapped value the way C `printf("%g")` does: `precision`
/// significant digits (6 unless the formatter carries one), trailing zeros
/// removed, exponent notation when the decimal exponent is below -4 or not
/// below the precision.
#[derive(Debug, Clone, Copy)]
pub struct General(pub f32);

impl Display for General {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        let value = f64::from(self.0);
        if value.is_nan() {
            return write!(f, "nan");
        }
        if value.is_infinite() {
            return write!(f, "{}", if value < 0.0 { "-inf" } else { "inf" });
        }
        if value == 0.0 {
            return write!(f, "{}", if value.is_sign_negative() { "-0" } else { "0" });
        }
        let precision = f.precision().unwrap_or(6).max(1);
        let scientific = format!("{:.*e}", precision - 1, value);
        let (mantissa, exponent) = scientific
            .split_once('e')
            .ok_or(std::fmt::Error)?;
        let exponent: i32 = exponent.parse().map_err(|_| std::fmt::Error)?;
        if exponent < -4 || exponent >= precision as i32 {
            let sign = if exponent < 0 { '-' } else { '+' };
            write!(
                f,
                "{}e{}{:02}",
                trim_fraction(mantissa),
                sign,
                exponent.unsigned_abs()
            )
        } else {
            let decimals = (precision as i32 - 1 - exponent) as usize;
            write!(f, "{}", trim_fraction(&format!("{:.*}", decimals, value)))
        }
    }
}

/// Writes `values` separated by single spaces, forwarding the formatter
/// precision to every value.
pub(crate) fn write_general(f: &mut Formatter, values: &[f32]) -> std::fmt::Result {
    for (n, value) in values.iter().enumerate() {
        if n > 0 {
            write!(f, " ")?;
        }
        match f.precision() {
            Some(precision) => write!(f, "{:.*}", precision, General(*value))?,
            None => write!(f, "{}", General(*value))?,
        }
    }
    Ok(())
}

fn trim_fraction(digits: &str) -> &str {
    if digits.contains('.') {
        digits.trim_end_matches('0').trim_end_matches('.')
    } else {
        digits
    }
}
