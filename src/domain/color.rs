//! Packed RGB colors and their boundary representations.
//!
//! Internally every color is a `u32` laid out as 0x00RRGGBB. The frontend
//! sees either 7-character uppercase hex strings ("#A1B2C3") or, for the
//! canvas fast path, ABGR pixels (little-endian: bytes [RR,GG,BB,AA]).

/// Packed 0x00RRGGBB color
pub type PackedColor = u32;

const RGB_MASK: u32 = 0x00FF_FFFF;

/// Format as "#RRGGBB" (uppercase), the form the frontend renders with.
pub fn to_hex(color: PackedColor) -> String {
    format!("#{:06X}", color & RGB_MASK)
}

/// Parse a "#RRGGBB" string. Case-insensitive on input; `None` on anything
/// that is not exactly '#' plus six hex digits.
pub fn parse_hex(s: &str) -> Option<PackedColor> {
    let digits = s.strip_prefix('#')?;
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    u32::from_str_radix(digits, 16).ok()
}

/// Repack to an ABGR pixel with alpha 255 for direct Canvas ImageData copy.
pub fn to_abgr(color: PackedColor) -> u32 {
    let r = (color >> 16) & 0xFF;
    let g = (color >> 8) & 0xFF;
    let b = color & 0xFF;
    0xFF00_0000 | (b << 16) | (g << 8) | r
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_round_trip_is_uppercase() {
        assert_eq!(to_hex(0x00A1B2C3), "#A1B2C3");
        assert_eq!(parse_hex("#A1B2C3"), Some(0x00A1B2C3));
        assert_eq!(parse_hex("#a1b2c3"), Some(0x00A1B2C3));
        assert_eq!(to_hex(0x0000000F), "#00000F");
    }

    #[test]
    fn parse_rejects_malformed_strings() {
        assert_eq!(parse_hex("A1B2C3"), None);
        assert_eq!(parse_hex("#A1B2"), None);
        assert_eq!(parse_hex("#A1B2C3D4"), None);
        assert_eq!(parse_hex("#GGGGGG"), None);
        assert_eq!(parse_hex(""), None);
    }

    #[test]
    fn abgr_repack_swaps_channels_and_sets_alpha() {
        assert_eq!(to_abgr(0x00112233), 0xFF332211);
        assert_eq!(to_abgr(0x00FF0000), 0xFF0000FF);
    }
}
