//! Roman numerals for era labels.

const NUMERALS: &[(u32, &str)] = &[
    (1000, "M"),
    (900, "CM"),
    (500, "D"),
    (400, "CD"),
    (100, "C"),
    (90, "XC"),
    (50, "L"),
    (40, "XL"),
    (10, "X"),
    (9, "IX"),
    (5, "V"),
    (4, "IV"),
    (1, "I"),
];

/// Writes `num` in Roman numerals. Zero gives an empty string.
///
/// # Example
///
/// ```
/// use imladris::reckoning::roman;
///
/// assert_eq!("XIV", roman::to_roman(14));
/// assert_eq!("MCMXCIX", roman::to_roman(1999));
/// ```
pub fn to_roman(mut num: u32) -> String {
    let mut roman = String::new();
    for &(value, symbol) in NUMERALS {
        while num >= value {
            num -= value;
            roman += symbol;
        }
    }
    roman
}

fn symbol_value(c: char) -> u32 {
    match c {
        'M' => 1000,
        'D' => 500,
        'C' => 100,
        'L' => 50,
        'X' => 10,
        'V' => 5,
        'I' => 1,
        _ => 0,
    }
}

/// Reads Roman numerals, case-insensitively.
///
/// A symbol followed by a greater one is subtracted from it and both are
/// consumed. Nothing is validated: unknown characters count as zero and
/// irregular forms such as `"IIX"` give whatever the scan produces. The sum
/// saturates at `u32::MAX`.
///
/// # Example
///
/// ```
/// use imladris::reckoning::roman;
///
/// assert_eq!(14, roman::from_roman("XIV"));
/// assert_eq!(16, roman::from_roman("xvi"));
/// ```
pub fn from_roman(roman: &str) -> u32 {
    let values: Vec<u32> = roman.chars().map(|c| symbol_value(c.to_ascii_uppercase())).collect();
    let mut total: u32 = 0;
    let mut i = 0;
    while i < values.len() {
        match values.get(i + 1) {
            Some(&next) if next > values[i] => {
                total = total.saturating_add(next - values[i]);
                i += 2;
            }
            _ => {
                total = total.saturating_add(values[i]);
                i += 1;
            }
        }
    }
    total
}

/// Label of `era`: Roman numerals, with a leading `-` for negative eras.
pub fn era_label(era: i32) -> String {
    let roman = to_roman(era.unsigned_abs());
    if era < 0 { format!("-{roman}") } else { roman }
}

/// Inverse of [`era_label`]. Surrounding whitespace is ignored and the
/// magnitude saturates at `i32::MAX`.
pub fn parse_era_label(label: &str) -> i32 {
    let label = label.trim();
    let (negative, digits) = match label.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, label),
    };
    let era = i32::try_from(from_roman(digits)).unwrap_or(i32::MAX);
    if negative { -era } else { era }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode() {
        for (std, num) in [
            ("", 0),
            ("I", 1),
            ("IV", 4),
            ("IX", 9),
            ("XI", 11),
            ("XIV", 14),
            ("XL", 40),
            ("XC", 90),
            ("CD", 400),
            ("CM", 900),
            ("MMMCMXCIX", 3999),
        ] {
            assert_eq!(std, to_roman(num));
        }
    }

    #[test]
    fn decode_round_trip() {
        for num in 1..=3999 {
            assert_eq!(num, from_roman(&to_roman(num)), "{num}");
        }
    }

    #[test]
    fn decode_is_lenient() {
        assert_eq!(4, from_roman("IIII"));
        assert_eq!(10, from_roman("X?"));
        assert_eq!(0, from_roman(""));
        assert_eq!(0, from_roman("era"));
        // Only one symbol of lookahead: I + (X - I).
        assert_eq!(10, from_roman("IIX"));
    }

    #[test]
    fn era_labels() {
        for (std, era) in [("I", 1), ("XVI", 16), ("-III", -3)] {
            assert_eq!(std, era_label(era));
            assert_eq!(era, parse_era_label(std));
        }
        assert_eq!(11, parse_era_label(" xi "));
    }

    #[test]
    fn long_input_saturates() {
        let huge = "M".repeat(5_000_000);
        assert_eq!(u32::MAX, from_roman(&huge));
        assert_eq!(i32::MAX, parse_era_label(&huge));
        assert_eq!(-i32::MAX, parse_era_label(&format!("-{huge}")));
        assert_eq!(u32::MAX, from_roman(&"CM".repeat(5_000_000)));
    }
}
