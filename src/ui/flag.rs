//! Flag rendering with image-to-emoji fallback.
//!
//! [`FlagRenderer::render`] turns a country code and its emoji glyph into a
//! [`FlagElement`]. With images enabled it asks its [`ImageSource`] for the
//! flag image; any failure there is logged and answered with the emoji element.
//! Callers never see the error.

use crate::domain::error::{FlagdialError, Result};

/// Glyph used when a record carries no flag emoji.
pub const FALLBACK_GLYPH: &str = "🏳️";

const FLAG_CDN: &str = "https://flagcdn.com/w20";

/// Countries with a known image location.
const KNOWN_FLAG_URLS: &[(&str, &str)] = &[
    ("US", "https://flagcdn.com/w20/us.png"),
    ("GB", "https://flagcdn.com/w20/gb.png"),
    ("CA", "https://flagcdn.com/w20/ca.png"),
    ("AU", "https://flagcdn.com/w20/au.png"),
    ("DE", "https://flagcdn.com/w20/de.png"),
    ("FR", "https://flagcdn.com/w20/fr.png"),
];

/// Image location for `code`.
///
/// ```
/// use flagdial::ui::flag::flag_image_url;
///
/// assert_eq!(flag_image_url("GB"), "https://flagcdn.com/w20/gb.png");
/// assert_eq!(flag_image_url("NZ"), "https://flagcdn.com/w20/nz.png");
/// ```
#[must_use]
pub fn flag_image_url(code: &str) -> String {
    KNOWN_FLAG_URLS
        .iter()
        .find(|(known, _)| *known == code)
        .map_or_else(
            || format!("{FLAG_CDN}/{}.png", code.to_lowercase()),
            |(_, url)| (*url).to_string(),
        )
}

/// A renderable flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlagElement {
    /// Emoji glyph drawn at `font_px`.
    Emoji {
        /// The glyph.
        glyph: String,
        /// Font size in pixels.
        font_px: u32,
    },
    /// Remote image.
    Image {
        /// Image location.
        url: String,
        /// Country code, used as alternative text.
        alt: String,
        /// Width in pixels.
        width_px: u32,
        /// Height in pixels.
        height_px: u32,
    },
}

/// Provider of flag images.
pub trait ImageSource {
    /// Prepares the image at `url` for display.
    ///
    /// # Errors
    ///
    /// Returns [`FlagdialError::FlagImage`] when the image cannot be shown.
    fn fetch(&self, url: &str) -> Result<()>;
}

/// Source that accepts every location and leaves loading to the display.
#[derive(Debug, Clone, Copy, Default)]
pub struct RemoteImages;

impl ImageSource for RemoteImages {
    fn fetch(&self, _url: &str) -> Result<()> {
        Ok(())
    }
}

/// Source for displays that cannot show images at all.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoImages;

impl ImageSource for NoImages {
    fn fetch(&self, url: &str) -> Result<()> {
        Err(FlagdialError::FlagImage(format!("images unsupported: {url}")))
    }
}

/// Produces flag elements for the trigger and the list.
pub struct FlagRenderer {
    source: Box<dyn ImageSource>,
}

impl std::fmt::Debug for FlagRenderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FlagRenderer").finish_non_exhaustive()
    }
}

impl Default for FlagRenderer {
    fn default() -> Self {
        Self::new(RemoteImages)
    }
}

impl FlagRenderer {
    /// Creates a renderer backed by `source`.
    pub fn new(source: impl ImageSource + 'static) -> Self {
        Self {
            source: Box::new(source),
        }
    }

    /// Renders the flag of `code`.
    ///
    /// Image height is three quarters of `size`.
    ///
    /// ```
    /// use flagdial::ui::flag::{FlagElement, FlagRenderer, NoImages};
    ///
    /// let renderer = FlagRenderer::new(NoImages);
    /// let element = renderer.render("GB", "🇬🇧", true, 16);
    /// assert_eq!(element, FlagElement::Emoji { glyph: "🇬🇧".to_string(), font_px: 16 });
    /// ```
    #[must_use]
    pub fn render(&self, code: &str, glyph: &str, use_images: bool, size: u32) -> FlagElement {
        if use_images {
            let url = flag_image_url(code);
            match self.source.fetch(&url) {
                Ok(()) => {
                    return FlagElement::Image {
                        url,
                        alt: code.to_string(),
                        width_px: size,
                        height_px: three_quarters(size),
                    };
                }
                Err(e) => {
                    tracing::debug!(code = code, error = %e, "flag image unavailable, using emoji");
                }
            }
        }

        let glyph = if glyph.is_empty() { FALLBACK_GLYPH } else { glyph };
        FlagElement::Emoji {
            glyph: glyph.to_string(),
            font_px: size,
        }
    }
}

fn three_quarters(size: u32) -> u32 {
    u32::try_from(u64::from(size) * 3 / 4).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn huge_sizes_do_not_overflow() {
        let element = FlagRenderer::default().render("GB", "🇬🇧", true, u32::MAX);
        assert!(matches!(
            element,
            FlagElement::Image { width_px: u32::MAX, height_px, .. } if height_px == 3_221_225_471
        ));
        assert_eq!(three_quarters(16), 12);
        assert_eq!(three_quarters(3), 2);
    }

    #[test]
    fn known_and_fallback_urls() {
        assert_eq!(flag_image_url("US"), "https://flagcdn.com/w20/us.png");
        assert_eq!(flag_image_url("JP"), "https://flagcdn.com/w20/jp.png");
    }

    #[test]
    fn image_element_sizes() {
        let renderer = FlagRenderer::default();
        assert_eq!(
            renderer.render("DE", "🇩🇪", true, 20),
            FlagElement::Image {
                url: "https://flagcdn.com/w20/de.png".to_string(),
                alt: "DE".to_string(),
                width_px: 20,
                height_px: 15,
            }
        );
    }

    #[test]
    fn emoji_when_images_disabled() {
        let renderer = FlagRenderer::default();
        assert_eq!(
            renderer.render("FR", "🇫🇷", false, 16),
            FlagElement::Emoji {
                glyph: "🇫🇷".to_string(),
                font_px: 16,
            }
        );
    }

    #[test]
    fn image_failure_falls_back_to_emoji() {
        let renderer = FlagRenderer::new(NoImages);
        assert!(matches!(renderer.render("AU", "🇦🇺", true, 16), FlagElement::Emoji { .. }));
    }

    #[test]
    fn missing_glyph_uses_white_flag() {
        let renderer = FlagRenderer::new(NoImages);
        assert_eq!(
            renderer.render("XX", "", true, 12),
            FlagElement::Emoji {
                glyph: FALLBACK_GLYPH.to_string(),
                font_px: 12,
            }
        );
    }
}
