//! Shared test utilities: a renderer that records every call it receives.

use profilegate::{
    CredentialTable, InputField, ScreenController, TextRegion, View, ViewRenderer,
};

/// One call made on the renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderCall {
    SetVisible(View),
    SetText(TextRegion, String),
    Focus(InputField),
    ClearField(InputField),
}

#[derive(Debug, Default)]
pub struct RecordingRenderer {
    pub calls: Vec<RenderCall>,
}

#[allow(dead_code)]
impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget what has been recorded so far.
    pub fn reset(&mut self) {
        self.calls.clear();
    }

    /// Last view made visible.
    pub fn visible(&self) -> Option<View> {
        self.calls.iter().rev().find_map(|call| match call {
            RenderCall::SetVisible(view) => Some(*view),
            _ => None,
        })
    }

    /// Last text written to `region`.
    pub fn last_text(&self, region: TextRegion) -> Option<&str> {
        self.calls.iter().rev().find_map(|call| match call {
            RenderCall::SetText(r, text) if *r == region => Some(text.as_str()),
            _ => None,
        })
    }

    pub fn visited(&self, view: View) -> bool {
        self.calls.contains(&RenderCall::SetVisible(view))
    }
}

impl ViewRenderer for RecordingRenderer {
    fn set_visible(&mut self, view: View) {
        self.calls.push(RenderCall::SetVisible(view));
    }

    fn set_text(&mut self, region: TextRegion, text: &str) {
        self.calls.push(RenderCall::SetText(region, text.to_string()));
    }

    fn focus(&mut self, field: InputField) {
        self.calls.push(RenderCall::Focus(field));
    }

    fn clear_field(&mut self, field: InputField) {
        self.calls.push(RenderCall::ClearField(field));
    }
}

/// Controller over `table` with a fresh recorder.
#[allow(dead_code)]
pub fn controller(table: CredentialTable) -> ScreenController<RecordingRenderer> {
    ScreenController::new(table, RecordingRenderer::new())
}
