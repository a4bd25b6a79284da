//! Caption font resolution for exported pictures.

use pango::prelude::FontFamilyExt;

/// Decorative family preferred for the caption band.
pub const CAPTION_FAMILY: &str = "Caveat";

/// Family used when the decorative one is unavailable.
pub const FALLBACK_FAMILY: &str = "Sans";

/// Nominal caption size shared by both families.
pub const CAPTION_SIZE: i32 = 20;

/// The font selected for drawing the caption band of an exported picture.
///
/// Resolution never fails: if the decorative family is missing from the font
/// map the generic fallback is used silently, matching the way a missing
/// bundled typeface has always been absorbed.
#[derive(Debug, Clone)]
pub struct CaptionFont {
    desc: pango::FontDescription,
}

impl CaptionFont {
    /// Resolves the caption font against the font map behind `ctx`.
    pub fn resolve(ctx: &cairo::Context) -> Self {
        let layout = pangocairo::functions::create_layout(ctx);
        let available = layout
            .context()
            .list_families()
            .iter()
            .any(|family| family.name().eq_ignore_ascii_case(CAPTION_FAMILY));

        let spec = if available {
            format!("{CAPTION_FAMILY} Bold {CAPTION_SIZE}")
        } else {
            log::debug!("caption font {CAPTION_FAMILY} unavailable, using {FALLBACK_FAMILY}");
            format!("{FALLBACK_FAMILY} {CAPTION_SIZE}")
        };

        Self {
            desc: pango::FontDescription::from_string(&spec),
        }
    }

    /// Lays out `text` in the caption font on the given context.
    pub fn layout(&self, ctx: &cairo::Context, text: &str) -> pango::Layout {
        let layout = pangocairo::functions::create_layout(ctx);
        layout.set_font_description(Some(&self.desc));
        layout.set_text(text);
        layout
    }

    /// Line height of one caption line, in device pixels.
    ///
    /// Valid for empty text too: Pango reports the full line height for an
    /// empty single-line layout, which is exactly the caption band height.
    pub fn line_height(&self, ctx: &cairo::Context, text: &str) -> i32 {
        let layout = self.layout(ctx, text);
        let (_ink, logical) = layout.extents();
        logical.height() / pango::SCALE
    }

    /// The resolved family name.
    pub fn family(&self) -> Option<String> {
        self.desc.family().map(|name| name.to_string())
    }
}
