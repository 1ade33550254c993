pub mod comma;

/// Parses a non-negative integer, optionally ending with suffix G, M or K.
/// Underscores and commas between digits are ignored.
///
/// Allowed strings: `[0-9][0-9_,]*[GgMmKk]?`
pub fn parse_int<T: TryFrom<u64>>(s: &str) -> Result<T, String> {
    let (digits, mult) = match s.as_bytes().last() {
        None => return Err("Cannot parse an empty string into int".to_string()),
        Some(b'G') | Some(b'g') => (&s[..s.len() - 1], 1_000_000_000),
        Some(b'M') | Some(b'm') => (&s[..s.len() - 1], 1_000_000),
        Some(b'K') | Some(b'k') => (&s[..s.len() - 1], 1000),
        Some(_) => (s, 1),
    };
    if !digits.starts_with(|c: char| c.is_ascii_digit()) {
        return Err(format!("Cannot parse string {:?} to int, unexpected first letter", s));
    }

    let too_large = || format!("Cannot parse string {:?} to int, value is too large", s);
    let mut n = 0_u64;
    for c in digits.bytes() {
        match c {
            b'0' ..= b'9' => n = n.checked_mul(10).and_then(|n| n.checked_add(u64::from(c - b'0')))
                .ok_or_else(too_large)?,
            b',' | b'_' => {}
            c => return Err(format!("Cannot parse string {:?} to int, unexpected symbol '{}'", s, c as char)),
        }
    }
    n.checked_mul(mult).ok_or_else(too_large)?.try_into().map_err(|_| too_large())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_and_suffixes() {
        assert_eq!(parse_int::<u64>("1000"), Ok(1000));
        assert_eq!(parse_int::<u64>("100_000"), Ok(100_000));
        assert_eq!(parse_int::<u64>("1,000,000"), Ok(1_000_000));
        assert_eq!(parse_int::<u64>("100k"), Ok(100_000));
        assert_eq!(parse_int::<u32>("2M"), Ok(2_000_000));
        assert_eq!(parse_int::<u64>("3G"), Ok(3_000_000_000));
        assert_eq!(parse_int::<u32>("0"), Ok(0));
    }

    #[test]
    fn malformed() {
        assert!(parse_int::<u64>("").is_err());
        assert!(parse_int::<u64>("k").is_err());
        assert!(parse_int::<u64>("_5").is_err());
        assert!(parse_int::<u64>("-5").is_err());
        assert!(parse_int::<u64>("12x4").is_err());
        assert!(parse_int::<u32>("5G").is_err());
        assert!(parse_int::<u64>("99999999999999999999").is_err());
    }
}
