use crate::camera::CameraChoreographer;
use crate::config::Config;
use crate::debounce::WheelDebouncer;
use crate::loader::Loader;
use crate::navigation::Navigator;
use crate::overlay::OverlayState;
use crate::section::Section;
use std::cell::RefCell;
use std::rc::Rc;

/// Application state
pub struct AppState {
    /// Current section and the ways to change it
    pub navigator: Navigator,
    /// Live camera, retargeted by the navigator on every transition
    pub camera: Rc<RefCell<CameraChoreographer>>,
    /// Project highlight and modal, closed by the navigator on section change
    pub overlay: Rc<RefCell<OverlayState>>,
    /// Boot sequence
    pub loader: Loader,
    /// Enable debug mode
    pub debug: bool,
    /// Frame tick paused
    pub paused: bool,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        let debouncer = WheelDebouncer::new(config.cooldown_ms, config.wheel_threshold);
        let mut navigator = Navigator::new(config.start, debouncer, config.boundary);

        let camera = Rc::new(RefCell::new(CameraChoreographer::new(config.tween_duration)));
        // First flight in from the starting position
        camera.borrow_mut().frame_section(config.start);
        let subscriber = Rc::clone(&camera);
        navigator.subscribe(move |change| subscriber.borrow_mut().on_section_change(change));

        let overlay = Rc::new(RefCell::new(OverlayState::default()));
        let subscriber = Rc::clone(&overlay);
        navigator.subscribe(move |change| subscriber.borrow_mut().on_section_change(change));

        let loader = if config.skip_intro {
            Loader::finished()
        } else {
            Loader::new(config.seed)
        };

        AppState {
            navigator,
            camera,
            overlay,
            loader,
            debug: false,
            paused: false,
        }
    }

    pub fn current_section(&self) -> Section {
        self.navigator.current()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::TweenPhase;

    #[test]
    fn navigation_retargets_the_camera() {
        let mut state = AppState::new(&Config::default());
        assert_eq!(state.camera.borrow().target(), Section::Hero.camera_target());

        state.navigator.select_direct(Section::Skills);
        let camera = state.camera.borrow();
        assert_eq!(camera.target().position, [0.0, 12.0, 15.0]);
        assert_eq!(camera.position_phase(), TweenPhase::Interpolating);
    }

    #[test]
    fn navigation_closes_the_modal() {
        let mut state = AppState::new(&Config::default());
        state.navigator.select_direct(Section::Projects);
        state.overlay.borrow_mut().open_highlighted();
        state.navigator.advance();
        assert!(!state.overlay.borrow().is_modal_open());
    }

    #[test]
    fn start_section_is_honoured() {
        let config = Config {
            start: Section::Contact,
            skip_intro: true,
            ..Config::default()
        };
        let state = AppState::new(&config);
        assert_eq!(state.current_section(), Section::Contact);
        assert_eq!(state.camera.borrow().target().position, [0.0, 0.0, 16.0]);
        assert!(state.loader.is_done());
    }
}
