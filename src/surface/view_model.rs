use ratatui::style::Color;
use serde::{Serialize, Serializer};

use crate::format::TrendGlyph;
use crate::routing::RouteTarget;
use crate::theme;

use super::SurfaceKind;

/// Bounded progress-bar value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Progress {
    pub value: u64,
    pub max: u64,
}

/// Tap binding that re-enters the application through a deep link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TapTarget {
    pub target: RouteTarget,
    pub uri: String,
}

/// Rendering instructions for one slot.
///
/// `None` fields keep the layout default for that property.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SlotState {
    pub visible: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_color"
    )]
    pub color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub glyph: Option<TrendGlyph>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progress: Option<Progress>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tap: Option<TapTarget>,
}

impl Default for SlotState {
    fn default() -> Self {
        Self {
            visible: true,
            text: None,
            color: None,
            glyph: None,
            progress: None,
            tap: None,
        }
    }
}

impl SlotState {
    /// True when the slot carries nothing beyond the layout default.
    pub fn is_layout_default(&self) -> bool {
        *self == Self::default()
    }
}

fn serialize_color<S: Serializer>(color: &Option<Color>, serializer: S) -> Result<S::Ok, S::Error> {
    match color.and_then(theme::hex) {
        Some(hex) => serializer.serialize_str(&hex),
        None => serializer.serialize_none(),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Slot {
    pub id: &'static str,
    #[serde(flatten)]
    pub state: SlotState,
}

/// Full set of slot instructions for one surface refresh.
///
/// Always holds every slot of the surface, in layout order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewModel {
    pub surface: SurfaceKind,
    pub slots: Vec<Slot>,
}

impl ViewModel {
    /// Every slot of `surface` in its layout-default state.
    pub fn blank(surface: SurfaceKind) -> Self {
        let slots = surface
            .slots()
            .iter()
            .map(|&id| Slot {
                id,
                state: SlotState::default(),
            })
            .collect();
        Self { surface, slots }
    }

    pub fn slot(&self, id: &str) -> Option<&SlotState> {
        self.slots.iter().find(|s| s.id == id).map(|s| &s.state)
    }

    pub fn text(&self, id: &str) -> Option<&str> {
        self.slot(id).and_then(|s| s.text.as_deref())
    }

    pub fn is_visible(&self, id: &str) -> bool {
        self.slot(id).is_some_and(|s| s.visible)
    }

    pub fn set_text(&mut self, id: &str, text: impl Into<String>) -> &mut Self {
        let text = text.into();
        self.update(id, |s| s.text = Some(text))
    }

    pub fn set_visible(&mut self, id: &str, visible: bool) -> &mut Self {
        self.update(id, |s| s.visible = visible)
    }

    pub fn set_color(&mut self, id: &str, color: Color) -> &mut Self {
        self.update(id, |s| s.color = Some(color))
    }

    pub fn set_glyph(&mut self, id: &str, glyph: TrendGlyph) -> &mut Self {
        self.update(id, |s| s.glyph = Some(glyph))
    }

    pub fn set_progress(&mut self, id: &str, progress: Progress) -> &mut Self {
        self.update(id, |s| s.progress = Some(progress))
    }

    pub fn set_tap(&mut self, id: &str, tap: TapTarget) -> &mut Self {
        self.update(id, |s| s.tap = Some(tap))
    }

    fn update(&mut self, id: &str, apply: impl FnOnce(&mut SlotState)) -> &mut Self {
        match self.slots.iter_mut().find(|s| s.id == id) {
            Some(slot) => apply(&mut slot.state),
            None => tracing::warn!(surface = %self.surface, slot = id, "Unknown slot"),
        }
        self
    }
}
