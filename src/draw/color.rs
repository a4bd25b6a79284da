//! RGBA color type, the canvas palette, and color-string parsing.

/// Represents an RGBA color with floating-point components.
///
/// All components are in the range 0.0 (minimum) to 1.0 (maximum).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    /// Red component (0.0 = no red, 1.0 = full red)
    pub r: f64,
    /// Green component (0.0 = no green, 1.0 = full green)
    pub g: f64,
    /// Blue component (0.0 = no blue, 1.0 = full blue)
    pub b: f64,
    /// Alpha/transparency (0.0 = fully transparent, 1.0 = fully opaque)
    pub a: f64,
}

impl Color {
    /// Creates a new opaque color from 8-bit channel values.
    pub const fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f64 / 255.0,
            g: g as f64 / 255.0,
            b: b as f64 / 255.0,
            a: 1.0,
        }
    }

    /// Parses a color string into a [`Color`].
    ///
    /// Accepts the palette names (case-insensitive) or an `#rrggbb` hex
    /// triplet. Anything unrecognized maps to black, so shape code never has
    /// to handle a bad color name.
    pub fn parse(spec: &str) -> Self {
        if let Some(hex) = spec.strip_prefix('#')
            && hex.len() == 6
            && let Ok(value) = u32::from_str_radix(hex, 16)
        {
            return Self::from_rgb8(
                ((value >> 16) & 0xff) as u8,
                ((value >> 8) & 0xff) as u8,
                (value & 0xff) as u8,
            );
        }

        match spec.to_lowercase().as_str() {
            "red" => RED,
            "blue" => BLUE,
            "cyan" => CYAN,
            "brown" => BROWN,
            "yellow" => YELLOW,
            "green" => GREEN,
            "magenta" => MAGENTA,
            "white" => WHITE,
            _ => BLACK,
        }
    }

    /// Packs this color into an xRGB32 pixel word (upper byte unused).
    pub fn to_xrgb(self) -> u32 {
        let channel = |c: f64| (c.clamp(0.0, 1.0) * 255.0).round() as u32;
        (channel(self.r) << 16) | (channel(self.g) << 8) | channel(self.b)
    }

    /// Unpacks an xRGB32 pixel word into an opaque color.
    pub fn from_xrgb(pixel: u32) -> Self {
        Self::from_rgb8(
            ((pixel >> 16) & 0xff) as u8,
            ((pixel >> 8) & 0xff) as u8,
            (pixel & 0xff) as u8,
        )
    }
}

// ============================================================================
// Canvas palette
// ============================================================================
//
// The slightly muted red/blue/green values match the palette the shape
// classes have always used, so exported pictures look the same.

/// Palette red.
pub const RED: Color = Color::from_rgb8(235, 25, 25);

/// Palette blue.
pub const BLUE: Color = Color::from_rgb8(30, 75, 220);

/// Palette cyan.
pub const CYAN: Color = Color::from_rgb8(30, 229, 220);

/// Palette brown.
pub const BROWN: Color = Color::from_rgb8(110, 80, 0);

/// Palette yellow.
pub const YELLOW: Color = Color::from_rgb8(255, 230, 0);

/// Palette green.
pub const GREEN: Color = Color::from_rgb8(80, 160, 60);

/// Palette magenta.
pub const MAGENTA: Color = Color::from_rgb8(255, 0, 255);

/// Palette white.
pub const WHITE: Color = Color::from_rgb8(255, 255, 255);

/// Palette black, also the fallback for unrecognized color strings.
pub const BLACK: Color = Color::from_rgb8(0, 0, 0);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_named_colors_ignores_case() {
        assert_eq!(Color::parse("red"), RED);
        assert_eq!(Color::parse("Yellow"), YELLOW);
        assert_eq!(Color::parse("WHITE"), WHITE);
    }

    #[test]
    fn parse_hex_triplet() {
        let c = Color::parse("#1e4bdc");
        assert_eq!(c, Color::from_rgb8(0x1e, 0x4b, 0xdc));
        assert_eq!(c, BLUE);
    }

    #[test]
    fn unrecognized_input_maps_to_black() {
        assert_eq!(Color::parse("chartreuse"), BLACK);
        assert_eq!(Color::parse("#12"), BLACK);
        assert_eq!(Color::parse("#zzzzzz"), BLACK);
        assert_eq!(Color::parse(""), BLACK);
    }

    #[test]
    fn xrgb_round_trip() {
        for color in [RED, BLUE, CYAN, BROWN, YELLOW, GREEN, MAGENTA, WHITE, BLACK] {
            assert_eq!(Color::from_xrgb(color.to_xrgb()), color);
        }
        assert_eq!(RED.to_xrgb(), 0x00eb_1919);
    }
}
