/// View-bezogener Anwendungszustand
#[derive(Debug, Default)]
pub struct ViewState {
    /// Aktuelle Viewport-Größe in Pixel
    pub viewport_size: [f32; 2],
    /// Wird bei jeder Änderung am sichtbaren Canvas erhöht (Host lädt Textur neu)
    pub canvas_revision: u64,
}

impl ViewState {
    /// Erstellt den Standard-View-Zustand.
    pub fn new() -> Self {
        Self {
            viewport_size: [0.0, 0.0],
            canvas_revision: 0,
        }
    }

    /// Markiert den sichtbaren Canvas als veraltet.
    pub fn mark_canvas_dirty(&mut self) {
        self.canvas_revision = self.canvas_revision.wrapping_add(1);
    }
}
