//! Business-card data model.
//!
//! [`BusinessCardData`] is a value object: the store never inspects it beyond
//! moving it around, and the renderer reads it immutably. [`SavedBusinessCard`]
//! is the persisted aggregate that embeds it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use ctu_core::{CardId, SupplierId};

/// Visual template a card is rendered with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CardTemplate {
    #[default]
    Modern,
    Classic,
    Minimal,
    Creative,
    Professional,
    Tech,
}

impl CardTemplate {
    /// All templates, in gallery display order.
    pub const ALL: [Self; 6] = [
        Self::Modern,
        Self::Classic,
        Self::Minimal,
        Self::Creative,
        Self::Professional,
        Self::Tech,
    ];
}

/// Discrete size for scalable card elements (text, logo).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ElementSize {
    Small,
    #[default]
    Medium,
    Large,
}

/// The card's content and styling choices.
///
/// Owned by whichever [`SavedBusinessCard`] embeds it; immutable from the
/// store's perspective (updates replace the whole value).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusinessCardData {
    /// Company name, the card's headline.
    pub company_name: String,
    /// Contact person's full name.
    pub contact_name: String,
    /// Contact person's job title.
    pub job_title: String,
    /// Contact phone number, free-form.
    pub phone: String,
    /// Contact email, free-form (cards may carry role addresses).
    pub email: String,
    /// Company website URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    /// Postal address line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    /// Short slogan shown under the company name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tagline: Option<String>,
    /// Social media handle (e.g., a LinkedIn or WeChat handle).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub social_handle: Option<String>,
    /// Primary palette colour (hex, e.g. `#1d4ed8`).
    pub primary_color: String,
    /// Secondary palette colour (hex).
    pub secondary_color: String,
    /// Accent palette colour (hex).
    pub accent_color: String,
    /// Company logo image URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
    /// Full-bleed background image URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_url: Option<String>,
    /// Visual template.
    pub template: CardTemplate,
    /// Body text size.
    #[serde(default)]
    pub font_size: ElementSize,
    /// Logo size.
    #[serde(default)]
    pub logo_size: ElementSize,
}

/// A saved business card as persisted by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedBusinessCard {
    /// Store-assigned identity.
    pub id: CardId,
    /// Display name of the saved design (not the company name).
    pub name: String,
    /// The card content itself.
    pub data: BusinessCardData,
    /// Owning supplier.
    pub supplier_id: SupplierId,
    /// When the card was created.
    pub created_at: DateTime<Utc>,
    /// When the card was last modified.
    pub updated_at: DateTime<Utc>,
    /// Whether this is the supplier's primary card. At most one card per
    /// supplier carries this flag; the store enforces it on every write.
    #[serde(default)]
    pub is_default: bool,
    /// Whether the card is visible on the supplier's public profile.
    #[serde(default)]
    pub is_public: bool,
    /// Times the card was downloaded.
    #[serde(default)]
    pub downloads: u32,
    /// Times the card was shared.
    #[serde(default)]
    pub shares: u32,
    /// Free-form labels; uniqueness is not enforced.
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Input for creating a card. Everything the store assigns itself
/// (id, timestamps, counters) is absent here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardDraft {
    /// Display name of the design.
    pub name: String,
    /// Owning supplier.
    pub supplier_id: SupplierId,
    /// Card content.
    pub data: BusinessCardData,
    /// Request the default flag; other cards of the supplier are cleared.
    #[serde(default)]
    pub is_default: bool,
    /// Public-profile visibility.
    #[serde(default)]
    pub is_public: bool,
    /// Initial tags.
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Partial update applied to a saved card.
///
/// A structural partial type: absent fields leave the stored value alone.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CardPatch {
    /// Rename the design.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Replace the card content wholesale.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<BusinessCardData>,
    /// Set or clear the default flag. Setting it to `true` clears the flag
    /// on the supplier's other cards in the same operation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_default: Option<bool>,
    /// Change public-profile visibility.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_public: Option<bool>,
    /// Replace the tag list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

impl CardPatch {
    /// Whether the patch carries no changes at all.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.data.is_none()
            && self.is_default.is_none()
            && self.is_public.is_none()
            && self.tags.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_data_json_round_trip() {
        let data = BusinessCardData {
            company_name: "Atelier Lefort".to_owned(),
            contact_name: "Marie Lefort".to_owned(),
            job_title: "Gérante".to_owned(),
            phone: "+33 6 12 34 56 78".to_owned(),
            email: "contact@atelier-lefort.fr".to_owned(),
            website: Some("https://atelier-lefort.fr".to_owned()),
            address: None,
            tagline: Some("Mobilier sur mesure".to_owned()),
            social_handle: None,
            primary_color: "#1d4ed8".to_owned(),
            secondary_color: "#3b82f6".to_owned(),
            accent_color: "#f59e0b".to_owned(),
            logo_url: None,
            background_url: None,
            template: CardTemplate::Creative,
            font_size: ElementSize::Large,
            logo_size: ElementSize::Small,
        };

        let json = serde_json::to_string(&data).expect("serialize");
        let back: BusinessCardData = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, data);
        // Absent optionals are omitted from the blob entirely
        assert!(!json.contains("address"));
    }

    #[test]
    fn test_template_defaults() {
        assert_eq!(CardTemplate::default(), CardTemplate::Modern);
        assert_eq!(ElementSize::default(), ElementSize::Medium);
        assert_eq!(CardTemplate::ALL.len(), 6);
    }

    #[test]
    fn test_empty_patch() {
        assert!(CardPatch::default().is_empty());
        let patch = CardPatch {
            is_public: Some(true),
            ..CardPatch::default()
        };
        assert!(!patch.is_empty());
    }
}
