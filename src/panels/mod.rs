pub mod central_panel;
pub mod tools_panel;

use eframe::egui::Color32;

/// Parse an opaque "#rrggbb" color string. Anything else is left to the
/// caller's default. Color strings come from arbitrary diagram files, so
/// slicing must stay on char boundaries: non-ASCII input is rejected up
/// front.
pub(crate) fn parse_color(value: &str) -> Option<Color32> {
    let hex = value.strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color32::from_rgb(r, g, b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex_colors() {
        assert_eq!(parse_color("#ff0000"), Some(Color32::from_rgb(255, 0, 0)));
        assert_eq!(parse_color("#90be6d"), Some(Color32::from_rgb(0x90, 0xbe, 0x6d)));
    }

    #[test]
    fn rejects_malformed_colors() {
        assert_eq!(parse_color("red"), None);
        assert_eq!(parse_color("#fff"), None);
        assert_eq!(parse_color("#zzzzzz"), None);
    }

    #[test]
    fn rejects_non_ascii_without_panicking() {
        // Six bytes but not six ASCII chars; byte slicing would land
        // mid-character.
        assert_eq!(parse_color("#x\u{e9}x\u{e9}"), None);
        assert_eq!(parse_color("#\u{e9}\u{e9}\u{e9}"), None);
    }
}
