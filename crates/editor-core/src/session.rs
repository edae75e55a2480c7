//! Editor session management.

use image::RgbaImage;

use memeforge_common::config::EditorDefaults;
use memeforge_common::{MemeforgeError, MemeforgeResult};
use memeforge_composition_model::Composition;
use memeforge_platform_core::{
    CaptureProbe, ImageSource, MediaPicker, PickOutcome, ScreenBounds, ScreenFrame,
    ScreenRenderer, ShareFacility, ShareOutcome,
};

use crate::event::{CaptionField, EditorEvent, EventOutcome};

/// Configuration for a new editor session.
#[derive(Debug, Clone)]
pub struct EditorConfig {
    /// Screen bounds the composite is rendered at.
    pub bounds: ScreenBounds,

    /// Placeholder text for the top caption field.
    pub top_default: String,

    /// Placeholder text for the bottom caption field.
    pub bottom_default: String,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self::from_defaults(&EditorDefaults::default())
    }
}

impl EditorConfig {
    /// Build from the application configuration.
    pub fn from_defaults(defaults: &EditorDefaults) -> Self {
        Self {
            bounds: ScreenBounds::new(defaults.screen_width, defaults.screen_height),
            top_default: defaults.top_text.clone(),
            bottom_default: defaults.bottom_text.clone(),
        }
    }
}

/// The caption editor screen, as a headless event-driven session.
///
/// Single-threaded: every operation runs to completion before the next
/// event is dispatched, and collaborator calls are plain synchronous
/// trait calls.
pub struct EditorSession {
    config: EditorConfig,

    top_caption: String,
    bottom_caption: String,
    current_image: Option<RgbaImage>,

    /// True exactly once a picker flow resolves with a selection.
    export_enabled: bool,
    /// Recomputed on every `BecameVisible`.
    camera_available: bool,
    focused: Option<CaptionField>,
    /// Vertical screen offset; 0 is the resting position.
    origin_y: i32,
    /// Chrome is hidden while flattening so it never lands in the output.
    chrome_visible: bool,

    picker: Box<dyn MediaPicker>,
    probe: Box<dyn CaptureProbe>,
    share_facility: Box<dyn ShareFacility>,
    renderer: Box<dyn ScreenRenderer>,
}

impl EditorSession {
    /// Create a session with all collaborators injected.
    pub fn new(
        config: EditorConfig,
        picker: Box<dyn MediaPicker>,
        probe: Box<dyn CaptureProbe>,
        share_facility: Box<dyn ShareFacility>,
        renderer: Box<dyn ScreenRenderer>,
    ) -> Self {
        let top_caption = config.top_default.clone();
        let bottom_caption = config.bottom_default.clone();
        Self {
            config,
            top_caption,
            bottom_caption,
            current_image: None,
            export_enabled: false,
            camera_available: false,
            focused: None,
            origin_y: 0,
            chrome_visible: true,
            picker,
            probe,
            share_facility,
            renderer,
        }
    }

    /// Dispatch a single UI event.
    pub fn handle_event(&mut self, event: EditorEvent) -> MemeforgeResult<EventOutcome> {
        match event {
            EditorEvent::BecameVisible => self.became_visible(),
            EditorEvent::EditingBegan(field) => self.begin_editing(field),
            EditorEvent::CaptionChanged(field, text) => self.set_caption(field, text),
            EditorEvent::SubmitPressed(field) => self.submit(field),
            EditorEvent::SurfaceAppearing { height } => self.surface_appearing(height),
            EditorEvent::SurfaceDisappearing => self.surface_disappearing(),
            EditorEvent::PickRequested(source) => {
                self.pick_image(source)?;
                return Ok(EventOutcome::Handled);
            }
            EditorEvent::ShareRequested => {
                return Ok(match self.share()? {
                    Some(composition) => EventOutcome::Shared(composition),
                    None => EventOutcome::ShareNotCompleted,
                });
            }
            EditorEvent::CancelPressed => self.cancel(),
        }
        Ok(EventOutcome::Handled)
    }

    /// Re-query capture availability; gates whether the camera control
    /// is offered. Unavailability is a normal state, not an error.
    pub fn became_visible(&mut self) {
        self.camera_available = self.probe.camera_available();
        tracing::debug!(
            camera_available = self.camera_available,
            "Editor became visible"
        );
    }

    /// Focus a caption field; placeholder text clears so the user types
    /// fresh text instead of editing the placeholder.
    pub fn begin_editing(&mut self, field: CaptionField) {
        self.focused = Some(field);
        match field {
            CaptionField::Top if self.top_caption == self.config.top_default => {
                self.top_caption.clear();
            }
            CaptionField::Bottom if self.bottom_caption == self.config.bottom_default => {
                self.bottom_caption.clear();
            }
            _ => {}
        }
    }

    /// Replace a field's text. Plain text, no validation.
    pub fn set_caption(&mut self, field: CaptionField, text: impl Into<String>) {
        match field {
            CaptionField::Top => self.top_caption = text.into(),
            CaptionField::Bottom => self.bottom_caption = text.into(),
        }
    }

    /// Confirm action: yields focus, inserts nothing.
    pub fn submit(&mut self, field: CaptionField) {
        if self.focused == Some(field) {
            self.focused = None;
        }
    }

    /// Shift the screen up by the incoming surface height, but only when
    /// the bottom field is focused and the screen is at rest. Repeated
    /// notifications while already shifted must not shift again.
    pub fn surface_appearing(&mut self, height: u32) {
        if self.focused == Some(CaptionField::Bottom) && self.origin_y == 0 {
            self.origin_y = -(height as i32);
            tracing::debug!(height, "Screen shifted for input surface");
        }
    }

    /// Restore the resting position when the surface hides while the
    /// bottom field is still focused; a no-op at rest.
    pub fn surface_disappearing(&mut self) {
        if self.focused == Some(CaptionField::Bottom) && self.origin_y != 0 {
            self.origin_y = 0;
            tracing::debug!("Screen restored to resting position");
        }
    }

    /// Run the media-selection flow. A selection enables export and
    /// stores the bitmap; a cancellation leaves all state unchanged.
    /// Returns whether an image was selected.
    pub fn pick_image(&mut self, source: ImageSource) -> MemeforgeResult<bool> {
        if source == ImageSource::Camera && !self.camera_available {
            // The UI never offers the control in this state
            return Err(MemeforgeError::unsupported(
                "Camera requested while no capture device is available",
            ));
        }

        match self.picker.pick(source)? {
            PickOutcome::Selected(image) => {
                tracing::info!(
                    width = image.width(),
                    height = image.height(),
                    ?source,
                    "Image selected"
                );
                self.current_image = Some(image);
                self.export_enabled = true;
                Ok(true)
            }
            PickOutcome::Cancelled => {
                tracing::info!(?source, "Picker dismissed");
                Ok(false)
            }
        }
    }

    /// Flatten the current screen state into a bitmap of the configured
    /// bounds. Chrome is hidden for the duration and restored afterwards,
    /// even when flattening fails.
    pub fn render_composite(&mut self) -> MemeforgeResult<RgbaImage> {
        self.chrome_visible = false;
        let outcome = {
            let frame = ScreenFrame {
                bounds: self.config.bounds,
                image: self.current_image.as_ref(),
                top_text: &self.top_caption,
                bottom_text: &self.bottom_caption,
                chrome_visible: self.chrome_visible,
            };
            self.renderer.flatten(&frame)
        };
        self.chrome_visible = true;

        let rendered = outcome?;
        let expected = (self.config.bounds.width, self.config.bounds.height);
        if rendered.dimensions() != expected {
            return Err(MemeforgeError::render(format!(
                "Renderer returned {:?}, expected {expected:?}",
                rendered.dimensions()
            )));
        }
        Ok(rendered)
    }

    /// Render a fresh composite and hand it to the share facility.
    ///
    /// Invariant checked here (the one call site that used to assume it
    /// fatally): export enabled implies a source image is present. On a
    /// completed share the transient [`Composition`] is returned to the
    /// caller, which discards it.
    pub fn share(&mut self) -> MemeforgeResult<Option<Composition>> {
        let Some(source) = self.current_image.clone() else {
            return Err(MemeforgeError::precondition(
                "Share requested without a source image; export must not have been enabled",
            ));
        };

        let rendered = self.render_composite()?;
        match self.share_facility.share(&rendered)? {
            ShareOutcome::Completed => {
                let composition = Composition::new(
                    self.top_caption.clone(),
                    self.bottom_caption.clone(),
                    source,
                    rendered,
                );
                tracing::info!(
                    top = %composition.top_text,
                    bottom = %composition.bottom_text,
                    "Share completed"
                );
                Ok(Some(composition))
            }
            ShareOutcome::Cancelled => {
                tracing::info!("Share dismissed");
                Ok(None)
            }
            ShareOutcome::Failed { message } => {
                tracing::warn!(%message, "Share reported failure");
                Ok(None)
            }
        }
    }

    /// Reset to the initial state: export disabled, image cleared, both
    /// captions back to their placeholders.
    pub fn cancel(&mut self) {
        self.export_enabled = false;
        self.current_image = None;
        self.top_caption = self.config.top_default.clone();
        self.bottom_caption = self.config.bottom_default.clone();
        tracing::info!("Editor reset to defaults");
    }

    // Accessors

    pub fn top_caption(&self) -> &str {
        &self.top_caption
    }

    pub fn bottom_caption(&self) -> &str {
        &self.bottom_caption
    }

    pub fn current_image(&self) -> Option<&RgbaImage> {
        self.current_image.as_ref()
    }

    pub fn export_enabled(&self) -> bool {
        self.export_enabled
    }

    pub fn camera_available(&self) -> bool {
        self.camera_available
    }

    pub fn focused(&self) -> Option<CaptionField> {
        self.focused
    }

    pub fn origin_y(&self) -> i32 {
        self.origin_y
    }

    pub fn chrome_visible(&self) -> bool {
        self.chrome_visible
    }

    pub fn bounds(&self) -> ScreenBounds {
        self.config.bounds
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;
    use std::cell::{Cell, RefCell};
    use std::collections::VecDeque;
    use std::rc::Rc;

    struct StubPicker {
        outcomes: RefCell<VecDeque<PickOutcome>>,
    }

    impl StubPicker {
        fn selecting(image: RgbaImage) -> Box<Self> {
            Box::new(Self {
                outcomes: RefCell::new(VecDeque::from([PickOutcome::Selected(image)])),
            })
        }

        fn cancelling() -> Box<Self> {
            Box::new(Self {
                outcomes: RefCell::new(VecDeque::new()),
            })
        }
    }

    impl MediaPicker for StubPicker {
        fn pick(&mut self, _source: ImageSource) -> MemeforgeResult<PickOutcome> {
            Ok(self
                .outcomes
                .borrow_mut()
                .pop_front()
                .unwrap_or(PickOutcome::Cancelled))
        }
    }

    struct SharedProbe(Rc<Cell<bool>>);

    impl CaptureProbe for SharedProbe {
        fn camera_available(&self) -> bool {
            self.0.get()
        }
    }

    struct StubShare {
        outcome: ShareOutcome,
        shared_dims: Rc<RefCell<Vec<(u32, u32)>>>,
    }

    impl StubShare {
        fn completing(shared_dims: Rc<RefCell<Vec<(u32, u32)>>>) -> Box<Self> {
            Box::new(Self {
                outcome: ShareOutcome::Completed,
                shared_dims,
            })
        }

        fn with_outcome(outcome: ShareOutcome) -> Box<Self> {
            Box::new(Self {
                outcome,
                shared_dims: Rc::new(RefCell::new(Vec::new())),
            })
        }
    }

    impl ShareFacility for StubShare {
        fn share(&mut self, image: &RgbaImage) -> MemeforgeResult<ShareOutcome> {
            self.shared_dims.borrow_mut().push(image.dimensions());
            Ok(self.outcome.clone())
        }
    }

    /// Records every frame it is asked to flatten.
    struct StubRenderer {
        frames: Rc<RefCell<Vec<(ScreenBounds, bool, bool)>>>,
    }

    impl StubRenderer {
        fn recording(frames: Rc<RefCell<Vec<(ScreenBounds, bool, bool)>>>) -> Box<Self> {
            Box::new(Self { frames })
        }
    }

    impl ScreenRenderer for StubRenderer {
        fn flatten(&mut self, frame: &ScreenFrame<'_>) -> MemeforgeResult<RgbaImage> {
            self.frames.borrow_mut().push((
                frame.bounds,
                frame.image.is_some(),
                frame.chrome_visible,
            ));
            Ok(RgbaImage::new(frame.bounds.width, frame.bounds.height))
        }
    }

    struct WrongSizeRenderer;

    impl ScreenRenderer for WrongSizeRenderer {
        fn flatten(&mut self, _frame: &ScreenFrame<'_>) -> MemeforgeResult<RgbaImage> {
            Ok(RgbaImage::new(1, 1))
        }
    }

    fn test_config() -> EditorConfig {
        EditorConfig {
            bounds: ScreenBounds::new(320, 568),
            top_default: "TOP".to_string(),
            bottom_default: "BOTTOM".to_string(),
        }
    }

    fn session_with(
        picker: Box<dyn MediaPicker>,
        camera: Rc<Cell<bool>>,
        share: Box<dyn ShareFacility>,
    ) -> EditorSession {
        let frames = Rc::new(RefCell::new(Vec::new()));
        EditorSession::new(
            test_config(),
            picker,
            Box::new(SharedProbe(camera)),
            share,
            StubRenderer::recording(frames),
        )
    }

    fn plain_session() -> EditorSession {
        session_with(
            StubPicker::cancelling(),
            Rc::new(Cell::new(false)),
            StubShare::with_outcome(ShareOutcome::Completed),
        )
    }

    fn marker_image() -> RgbaImage {
        RgbaImage::from_pixel(4, 4, Rgba([123, 45, 67, 255]))
    }

    #[test]
    fn fresh_session_has_placeholder_state() {
        let session = plain_session();
        assert!(!session.export_enabled());
        assert_eq!(session.top_caption(), "TOP");
        assert_eq!(session.bottom_caption(), "BOTTOM");
        assert!(session.current_image().is_none());
        assert_eq!(session.origin_y(), 0);
        assert!(session.chrome_visible());
    }

    #[test]
    fn became_visible_requeries_the_probe_each_time() {
        let camera = Rc::new(Cell::new(false));
        let mut session = session_with(
            StubPicker::cancelling(),
            camera.clone(),
            StubShare::with_outcome(ShareOutcome::Completed),
        );

        session.became_visible();
        assert!(!session.camera_available());

        // Device plugged in between appearances
        camera.set(true);
        session.became_visible();
        assert!(session.camera_available());
    }

    #[test]
    fn editing_began_clears_only_placeholder_text() {
        let mut session = plain_session();

        session.begin_editing(CaptionField::Top);
        assert_eq!(session.top_caption(), "");
        assert_eq!(session.bottom_caption(), "BOTTOM");

        session.set_caption(CaptionField::Top, "KEEP ME");
        session.begin_editing(CaptionField::Top);
        assert_eq!(session.top_caption(), "KEEP ME");

        session.begin_editing(CaptionField::Bottom);
        assert_eq!(session.bottom_caption(), "");
    }

    #[test]
    fn submit_yields_focus() {
        let mut session = plain_session();
        session.begin_editing(CaptionField::Top);
        assert_eq!(session.focused(), Some(CaptionField::Top));

        session.submit(CaptionField::Top);
        assert_eq!(session.focused(), None);
    }

    #[test]
    fn selection_enables_export_and_stores_the_image() {
        let mut session = session_with(
            StubPicker::selecting(marker_image()),
            Rc::new(Cell::new(false)),
            StubShare::with_outcome(ShareOutcome::Completed),
        );

        let selected = session.pick_image(ImageSource::Library).unwrap();
        assert!(selected);
        assert!(session.export_enabled());
        assert_eq!(session.current_image().unwrap(), &marker_image());
    }

    #[test]
    fn cancellation_leaves_state_unchanged() {
        let mut session = plain_session();
        let selected = session.pick_image(ImageSource::Library).unwrap();
        assert!(!selected);
        assert!(!session.export_enabled());
        assert!(session.current_image().is_none());
    }

    #[test]
    fn camera_pick_refused_while_unavailable() {
        let mut session = plain_session();
        let err = session.pick_image(ImageSource::Camera).unwrap_err();
        assert!(matches!(err, MemeforgeError::Unsupported { .. }));
    }

    #[test]
    fn camera_pick_allowed_once_probe_reports_a_device() {
        let camera = Rc::new(Cell::new(true));
        let mut session = session_with(
            StubPicker::selecting(marker_image()),
            camera,
            StubShare::with_outcome(ShareOutcome::Completed),
        );
        session.became_visible();

        assert!(session.pick_image(ImageSource::Camera).unwrap());
        assert!(session.export_enabled());
    }

    #[test]
    fn cancel_resets_regardless_of_prior_state() {
        let mut session = session_with(
            StubPicker::selecting(marker_image()),
            Rc::new(Cell::new(false)),
            StubShare::with_outcome(ShareOutcome::Completed),
        );
        session.pick_image(ImageSource::Library).unwrap();
        session.begin_editing(CaptionField::Top);
        session.set_caption(CaptionField::Top, "EDITED");
        session.begin_editing(CaptionField::Bottom);
        session.set_caption(CaptionField::Bottom, "ALSO EDITED");

        session.cancel();

        assert!(!session.export_enabled());
        assert!(session.current_image().is_none());
        assert_eq!(session.top_caption(), "TOP");
        assert_eq!(session.bottom_caption(), "BOTTOM");
    }

    #[test]
    fn surface_shift_applies_only_to_focused_bottom_field_at_rest() {
        let mut session = plain_session();

        // Top field never shifts the screen
        session.begin_editing(CaptionField::Top);
        session.surface_appearing(300);
        assert_eq!(session.origin_y(), 0);

        session.begin_editing(CaptionField::Bottom);
        session.surface_appearing(300);
        assert_eq!(session.origin_y(), -300);

        // Repeated notification while shifted must not shift again
        session.surface_appearing(300);
        assert_eq!(session.origin_y(), -300);

        session.surface_disappearing();
        assert_eq!(session.origin_y(), 0);

        // Disappearing at rest is a no-op
        session.surface_disappearing();
        assert_eq!(session.origin_y(), 0);
    }

    #[test]
    fn render_composite_matches_bounds_and_restores_chrome() {
        let frames = Rc::new(RefCell::new(Vec::new()));
        let mut session = EditorSession::new(
            test_config(),
            StubPicker::cancelling(),
            Box::new(SharedProbe(Rc::new(Cell::new(false)))),
            StubShare::with_outcome(ShareOutcome::Completed),
            StubRenderer::recording(frames.clone()),
        );

        let rendered = session.render_composite().unwrap();
        assert_eq!(rendered.dimensions(), (320, 568));

        // The renderer saw hidden chrome; the session restored it after
        let recorded = frames.borrow();
        assert_eq!(recorded.len(), 1);
        assert!(!recorded[0].2);
        assert!(session.chrome_visible());
    }

    #[test]
    fn renderer_contract_violation_is_a_render_error() {
        let mut session = EditorSession::new(
            test_config(),
            StubPicker::cancelling(),
            Box::new(SharedProbe(Rc::new(Cell::new(false)))),
            StubShare::with_outcome(ShareOutcome::Completed),
            Box::new(WrongSizeRenderer),
        );

        let err = session.render_composite().unwrap_err();
        assert!(matches!(err, MemeforgeError::Render { .. }));
        // Chrome still restored on the failure path
        assert!(session.chrome_visible());
    }

    #[test]
    fn share_without_image_is_a_precondition_error() {
        let mut session = plain_session();
        let err = session.share().unwrap_err();
        assert!(matches!(err, MemeforgeError::Precondition { .. }));
    }

    #[test]
    fn dismissed_share_builds_no_composition() {
        let mut session = session_with(
            StubPicker::selecting(marker_image()),
            Rc::new(Cell::new(false)),
            StubShare::with_outcome(ShareOutcome::Cancelled),
        );
        session.pick_image(ImageSource::Library).unwrap();

        assert!(session.share().unwrap().is_none());
    }

    #[test]
    fn failed_share_builds_no_composition() {
        let mut session = session_with(
            StubPicker::selecting(marker_image()),
            Rc::new(Cell::new(false)),
            StubShare::with_outcome(ShareOutcome::Failed {
                message: "no connectivity".to_string(),
            }),
        );
        session.pick_image(ImageSource::Library).unwrap();

        assert!(session.share().unwrap().is_none());
    }

    #[test]
    fn end_to_end_edit_and_share_builds_the_composition() {
        let shared_dims = Rc::new(RefCell::new(Vec::new()));
        let frames = Rc::new(RefCell::new(Vec::new()));
        let mut session = EditorSession::new(
            test_config(),
            StubPicker::selecting(marker_image()),
            Box::new(SharedProbe(Rc::new(Cell::new(false)))),
            StubShare::completing(shared_dims.clone()),
            StubRenderer::recording(frames),
        );

        session.handle_event(EditorEvent::BecameVisible).unwrap();
        session
            .handle_event(EditorEvent::PickRequested(ImageSource::Library))
            .unwrap();
        assert_eq!(session.top_caption(), "TOP");
        assert_eq!(session.bottom_caption(), "BOTTOM");

        session
            .handle_event(EditorEvent::EditingBegan(CaptionField::Top))
            .unwrap();
        session
            .handle_event(EditorEvent::CaptionChanged(
                CaptionField::Top,
                "HELLO".to_string(),
            ))
            .unwrap();
        session
            .handle_event(EditorEvent::SubmitPressed(CaptionField::Top))
            .unwrap();

        session
            .handle_event(EditorEvent::EditingBegan(CaptionField::Bottom))
            .unwrap();
        session
            .handle_event(EditorEvent::SurfaceAppearing { height: 240 })
            .unwrap();
        assert_eq!(session.origin_y(), -240);
        session
            .handle_event(EditorEvent::CaptionChanged(
                CaptionField::Bottom,
                "WORLD".to_string(),
            ))
            .unwrap();
        session.handle_event(EditorEvent::SurfaceDisappearing).unwrap();
        session
            .handle_event(EditorEvent::SubmitPressed(CaptionField::Bottom))
            .unwrap();
        assert_eq!(session.origin_y(), 0);

        let outcome = session.handle_event(EditorEvent::ShareRequested).unwrap();
        let EventOutcome::Shared(composition) = outcome else {
            panic!("expected a completed share");
        };

        assert_eq!(composition.top_text, "HELLO");
        assert_eq!(composition.bottom_text, "WORLD");
        assert_eq!(composition.source_image, marker_image());
        assert_eq!(composition.rendered_image.dimensions(), (320, 568));
        // The share facility received the freshly rendered composite
        assert_eq!(shared_dims.borrow().as_slice(), &[(320, 568)]);
    }
}
