//! Single owner of the viewer state.
//!
//! The web frontend keeps one `Viewer` behind an `Rc<RefCell<_>>` and routes
//! every button press and touch event through it, so nothing else mutates the
//! displayed model.

use crate::catalog::Catalog;
use crate::display::SceneDisplay;
use crate::error::ViewerError;
use crate::gesture::{GestureInterpreter, TouchInput};
use crate::selector::ModelSelector;
use crate::state::ViewerState;

pub struct Viewer<D: SceneDisplay> {
    selector: ModelSelector,
    gestures: GestureInterpreter,
    state: ViewerState,
    display: D,
    info_visible: bool,
}

impl<D: SceneDisplay> Viewer<D> {
    pub fn new(catalog: Catalog, display: D) -> Self {
        Self {
            selector: ModelSelector::new(catalog),
            gestures: GestureInterpreter::new(),
            state: ViewerState::default(),
            display,
            info_visible: true,
        }
    }

    pub fn state(&self) -> &ViewerState {
        &self.state
    }

    pub fn catalog(&self) -> &Catalog {
        self.selector.catalog()
    }

    pub fn gestures(&self) -> &GestureInterpreter {
        &self.gestures
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn info_visible(&self) -> bool {
        self.info_visible
    }

    /// Unknown keys leave everything untouched, including a gesture in progress.
    pub fn load(&mut self, key: &str) -> Result<(), ViewerError> {
        self.selector.load(key, &mut self.state, &mut self.display)?;
        self.gestures.cancel();
        Ok(())
    }

    pub fn cycle_next(&mut self) -> Result<(), ViewerError> {
        self.selector.cycle_next(&mut self.state, &mut self.display)?;
        self.gestures.cancel();
        Ok(())
    }

    pub fn reset(&mut self) {
        self.gestures.cancel();
        self.selector.reset(&mut self.state, &mut self.display);
    }

    pub fn toggle_info(&mut self) -> bool {
        self.info_visible = !self.info_visible;
        self.display.set_info_visible(self.info_visible);
        self.info_visible
    }

    /// Run one touch event through the gesture interpreter and push the
    /// resulting transform to the display if it changed.
    pub fn handle_touch(&mut self, input: &TouchInput) -> Result<(), ViewerError> {
        if self.gestures.handle(input, &mut self.state)? {
            let transform = self.selector.transform(&self.state);
            self.display.set_transform(&transform);
        }
        Ok(())
    }
}
