//! Pure template renderer.
//!
//! [`compose`] maps card data plus a scale factor to a [`CardFace`]: concrete
//! CSS values and pixel sizes a template (or any other consumer) can lay out
//! without further decisions. Deterministic, no side effects.

use crate::model::{BusinessCardData, CardTemplate, ElementSize};

/// Unscaled card dimensions, the usual 85x54mm card at ~96 DPI.
const BASE_WIDTH_PX: f32 = 350.0;
const BASE_HEIGHT_PX: f32 = 200.0;

/// Visual description of a rendered card.
#[derive(Debug, Clone, PartialEq)]
pub struct CardFace {
    /// CSS `background` value for the card surface.
    pub background: String,
    /// Text colour (hex).
    pub text_color: String,
    /// Accent colour used for rules and highlights (hex).
    pub accent_color: String,
    /// CSS border, for the templates that carry one.
    pub border: Option<String>,
    /// Full-bleed background image URL, layered over the treatment.
    pub background_image: Option<String>,
    /// Scaled card width in pixels.
    pub width_px: u32,
    /// Scaled card height in pixels.
    pub height_px: u32,
    /// Scaled body font size in pixels.
    pub font_size_px: u32,
    /// Scaled headline font size in pixels.
    pub headline_size_px: u32,
    /// Scaled logo edge length in pixels.
    pub logo_size_px: u32,
}

/// Compose the visual description of a card at the given scale.
///
/// `scale` is clamped to a sane range so a bad query parameter cannot demand
/// a billboard-sized render.
#[must_use]
pub fn compose(data: &BusinessCardData, scale: f32) -> CardFace {
    let scale = scale.clamp(0.25, 4.0);

    let font_size_px = scaled(font_base_px(data.font_size), scale);
    CardFace {
        background: background_treatment(data),
        text_color: text_color(data).to_owned(),
        accent_color: data.accent_color.clone(),
        border: border_treatment(data),
        background_image: data.background_url.clone(),
        width_px: scaled(BASE_WIDTH_PX, scale),
        height_px: scaled(BASE_HEIGHT_PX, scale),
        font_size_px,
        headline_size_px: scaled(font_base_px(data.font_size) * 1.6, scale),
        logo_size_px: scaled(logo_base_px(data.logo_size), scale),
    }
}

/// One fixed background treatment per template.
fn background_treatment(data: &BusinessCardData) -> String {
    let primary = &data.primary_color;
    let secondary = &data.secondary_color;
    let accent = &data.accent_color;

    match data.template {
        CardTemplate::Modern => {
            format!("linear-gradient(135deg, {primary} 0%, {secondary} 100%)")
        }
        CardTemplate::Classic | CardTemplate::Minimal => "#ffffff".to_owned(),
        CardTemplate::Creative => format!(
            "linear-gradient(120deg, {primary} 0%, {accent} 50%, {secondary} 100%)"
        ),
        CardTemplate::Professional => primary.clone(),
        CardTemplate::Tech => format!("linear-gradient(160deg, #0f172a 0%, {primary} 100%)"),
    }
}

fn border_treatment(data: &BusinessCardData) -> Option<String> {
    match data.template {
        CardTemplate::Classic => Some(format!("2px solid {}", data.primary_color)),
        CardTemplate::Minimal => Some("1px solid #e5e7eb".to_owned()),
        _ => None,
    }
}

/// Light text on the saturated treatments, dark text on the white ones.
fn text_color(data: &BusinessCardData) -> &'static str {
    match data.template {
        CardTemplate::Classic | CardTemplate::Minimal => "#1f2937",
        _ => "#ffffff",
    }
}

const fn font_base_px(size: ElementSize) -> f32 {
    match size {
        ElementSize::Small => 12.0,
        ElementSize::Medium => 14.0,
        ElementSize::Large => 16.0,
    }
}

const fn logo_base_px(size: ElementSize) -> f32 {
    match size {
        ElementSize::Small => 32.0,
        ElementSize::Medium => 48.0,
        ElementSize::Large => 64.0,
    }
}

#[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)] // values are clamped small positives
fn scaled(base: f32, scale: f32) -> u32 {
    (base * scale).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn data(template: CardTemplate) -> BusinessCardData {
        BusinessCardData {
            company_name: "Usine Test".to_owned(),
            contact_name: "A. Tester".to_owned(),
            job_title: "QA".to_owned(),
            phone: "+33 1 99 99 99 99".to_owned(),
            email: "qa@usine-test.fr".to_owned(),
            website: None,
            address: None,
            tagline: None,
            social_handle: None,
            primary_color: "#111111".to_owned(),
            secondary_color: "#222222".to_owned(),
            accent_color: "#333333".to_owned(),
            logo_url: None,
            background_url: None,
            template,
            font_size: ElementSize::Medium,
            logo_size: ElementSize::Medium,
        }
    }

    #[test]
    fn test_compose_is_deterministic() {
        let d = data(CardTemplate::Creative);
        assert_eq!(compose(&d, 1.0), compose(&d, 1.0));
    }

    #[test]
    fn test_each_template_has_distinct_treatment() {
        let treatments: Vec<String> = CardTemplate::ALL
            .iter()
            .map(|t| {
                let d = data(*t);
                format!("{}|{:?}", background_treatment(&d), border_treatment(&d))
            })
            .collect();
        for (i, a) in treatments.iter().enumerate() {
            for b in treatments.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_size_mappings() {
        let mut d = data(CardTemplate::Modern);
        d.font_size = ElementSize::Small;
        d.logo_size = ElementSize::Large;
        let face = compose(&d, 1.0);
        assert_eq!(face.font_size_px, 12);
        assert_eq!(face.logo_size_px, 64);
        assert_eq!(face.width_px, 350);
        assert_eq!(face.height_px, 200);
    }

    #[test]
    fn test_scale_multiplies_dimensions() {
        let d = data(CardTemplate::Modern);
        let face = compose(&d, 2.0);
        assert_eq!(face.width_px, 700);
        assert_eq!(face.height_px, 400);
        assert_eq!(face.font_size_px, 28);
    }

    #[test]
    fn test_scale_is_clamped() {
        let d = data(CardTemplate::Modern);
        assert_eq!(compose(&d, 100.0), compose(&d, 4.0));
        assert_eq!(compose(&d, 0.0), compose(&d, 0.25));
    }

    #[test]
    fn test_light_text_on_dark_treatments() {
        assert_eq!(compose(&data(CardTemplate::Tech), 1.0).text_color, "#ffffff");
        assert_eq!(
            compose(&data(CardTemplate::Minimal), 1.0).text_color,
            "#1f2937"
        );
    }

    #[test]
    fn test_background_image_passthrough() {
        let mut d = data(CardTemplate::Professional);
        d.background_url = Some("https://cdn.example/bg.png".to_owned());
        let face = compose(&d, 1.0);
        assert_eq!(
            face.background_image.as_deref(),
            Some("https://cdn.example/bg.png")
        );
        // The base treatment stays available underneath
        assert_eq!(face.background, "#111111");
    }
}
