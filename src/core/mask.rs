//! Input masks for the tax identifier (CPF) and phone fields
//!
//! Both formatters are total functions over the *whole* field value: every
//! non-digit is stripped and the separators are re-inserted from scratch.
//! They are applied on every change event, never on a delta, which keeps
//! them correct under insertion, deletion and paste without tracking the
//! cursor. Re-applying a formatter to its own output is a no-op.

/// Maximum number of digits in a tax identifier
pub const TAX_ID_DIGITS: usize = 11;

/// Length of a fully masked tax identifier (`NNN.NNN.NNN-NN`)
pub const TAX_ID_MAX_LEN: usize = 14;

/// Maximum number of digits in a phone number
pub const PHONE_DIGITS: usize = 11;

/// Length of a fully masked phone number (`(NN) NNNNN-NNNN`)
pub const PHONE_MAX_LEN: usize = 15;

/// Iterates over the ASCII decimal digits of `input`, dropping everything else.
pub fn digits(input: &str) -> impl Iterator<Item = char> + '_ {
    input.chars().filter(char::is_ascii_digit)
}

/// Formats arbitrary input as `NNN.NNN.NNN-NN`, truncating past 11 digits.
///
/// # Examples
///
/// ```
/// use contactbook::core::mask::format_tax_id;
///
/// assert_eq!(format_tax_id("123"), "123");
/// assert_eq!(format_tax_id("12345678901"), "123.456.789-01");
/// assert_eq!(format_tax_id("123.456.789-0199"), "123.456.789-01");
/// ```
pub fn format_tax_id(input: &str) -> String {
    let mut out = String::with_capacity(TAX_ID_MAX_LEN);
    for (i, d) in digits(input).take(TAX_ID_DIGITS).enumerate() {
        match i {
            3 | 6 => out.push('.'),
            9 => out.push('-'),
            _ => {}
        }
        out.push(d);
    }
    out
}

/// Formats arbitrary input as `(NN) NNNNN-NNNN`, truncating past 11 digits.
///
/// # Examples
///
/// ```
/// use contactbook::core::mask::format_phone;
///
/// assert_eq!(format_phone("11"), "(11");
/// assert_eq!(format_phone("119999"), "(11) 9999");
/// assert_eq!(format_phone("11999998888"), "(11) 99999-8888");
/// ```
pub fn format_phone(input: &str) -> String {
    let mut out = String::with_capacity(PHONE_MAX_LEN);
    for (i, d) in digits(input).take(PHONE_DIGITS).enumerate() {
        match i {
            0 => out.push('('),
            2 => out.push_str(") "),
            7 => out.push('-'),
            _ => {}
        }
        out.push(d);
    }
    out
}

/// True when the tax identifier carries all 11 digits.
pub fn is_complete_tax_id(value: &str) -> bool {
    digits(value).count() == TAX_ID_DIGITS
}

/// True when the phone number carries all 11 digits.
pub fn is_complete_phone(value: &str) -> bool {
    digits(value).count() == PHONE_DIGITS
}
