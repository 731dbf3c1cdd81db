// Colour parsing for the `/embed` command.

/// Used when the admin leaves the colour option empty.
pub const DEFAULT_EMBED_COLOR: &str = "#0099ff";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ColorError {
    #[error("color must be 6 hex digits like #FF0000, got `{0}`")]
    WrongLength(String),
    #[error("`{0}` is not a valid hex color")]
    InvalidDigit(String),
}

/// Parse `#RRGGBB` or `RRGGBB` into a 24-bit colour value.
pub fn parse_hex_color(input: &str) -> Result<u32, ColorError> {
    let trimmed = input.trim();
    let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);

    if digits.chars().count() != 6 {
        return Err(ColorError::WrongLength(input.to_string()));
    }
    // from_str_radix alone would accept a leading '+'
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(ColorError::InvalidDigit(input.to_string()));
    }

    u32::from_str_radix(digits, 16).map_err(|_| ColorError::InvalidDigit(input.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_with_and_without_hash() {
        assert_eq!(parse_hex_color("#FF0000"), Ok(0xFF0000));
        assert_eq!(parse_hex_color("00ff7f"), Ok(0x00FF7F));
        assert_eq!(parse_hex_color(DEFAULT_EMBED_COLOR), Ok(0x0099FF));
    }

    #[test]
    fn rejects_non_hex_digits() {
        assert_eq!(
            parse_hex_color("GG0000"),
            Err(ColorError::InvalidDigit("GG0000".to_string()))
        );
        assert!(parse_hex_color("+12345").is_err());
    }

    #[test]
    fn rejects_wrong_length() {
        assert!(matches!(
            parse_hex_color("#FFF"),
            Err(ColorError::WrongLength(_))
        ));
        assert!(matches!(
            parse_hex_color("#FF00000"),
            Err(ColorError::WrongLength(_))
        ));
        assert!(matches!(parse_hex_color(""), Err(ColorError::WrongLength(_))));
    }

    #[test]
    fn error_message_names_the_input() {
        let err = parse_hex_color("GG0000").unwrap_err();
        assert!(err.to_string().contains("GG0000"));
    }
}
