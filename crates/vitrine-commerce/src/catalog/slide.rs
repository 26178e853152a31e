//! Hero-carousel slide types.

use crate::ids::SlideId;
use serde::{Deserialize, Serialize};

/// A hero-carousel entry shown at the top of the storefront.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Slide {
    /// Unique slide identifier.
    pub id: SlideId,
    /// Background image URL.
    pub image: String,
    /// Headline.
    pub title: String,
    /// Supporting line under the headline.
    pub subtitle: String,
    /// Call-to-action label.
    pub cta_text: String,
    /// Optional badge label (e.g., "NOVO").
    pub badge: Option<String>,
    /// Optional navigation target for the call to action.
    pub link: Option<String>,
    /// Display sequence, ascending. Values need not be contiguous.
    pub order: i32,
    /// Storefront visibility gate.
    pub active: bool,
}

/// Slides visible in the storefront: active only, sorted by ascending
/// `order`, ties kept in their original relative position.
pub fn visible_slides(slides: &[Slide]) -> Vec<&Slide> {
    let mut visible: Vec<&Slide> = slides.iter().filter(|s| s.active).collect();
    visible.sort_by_key(|s| s.order);
    visible
}
