use crate::camera::Pointer;
use crate::graphics::Canvas;
use crate::input::Input;
use crate::overlay::{self, ClickTarget};
use crate::scene::Scene;
use crate::section::Section;
use crate::state::AppState;
use std::io::{self, Write};
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Whether the event loop keeps running
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Full-screen portfolio widget
pub struct PortfolioWidget {
    frames_since_last_update: usize,
    last_fps_calculation: Instant,
    fps: f64,
    /// Widget size in cells
    size: (u16, u16),
    canvas: Canvas,
    scene: Scene,
}

impl PortfolioWidget {
    pub fn new(size: (u16, u16), scene: Scene) -> Self {
        PortfolioWidget {
            frames_since_last_update: 0,
            last_fps_calculation: Instant::now(),
            fps: 0.0,
            size,
            canvas: Canvas::new(size.0 as usize, size.1 as usize),
            scene,
        }
    }

    pub fn size(&self) -> (u16, u16) {
        self.size
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    /// Handle one input event; `now_ms` is the session clock used for debouncing
    pub fn event(&mut self, input: Input, data: &mut AppState, now_ms: u64) -> Flow {
        match input {
            Input::Quit => return Flow::Quit,
            Input::Resize { width, height } => {
                self.size = (width, height);
                self.canvas.resize(width as usize, height as usize);
                return Flow::Continue;
            }
            Input::PointerMove { column, row } => {
                let pointer = Pointer::from_screen(
                    column as f64,
                    row as f64,
                    self.size.0 as f64,
                    self.size.1 as f64,
                );
                data.camera.borrow_mut().set_pointer(pointer);
                return Flow::Continue;
            }
            Input::ToggleDebug => {
                data.debug = !data.debug;
                return Flow::Continue;
            }
            Input::TogglePause => {
                data.paused = !data.paused;
                info!(paused = data.paused, "pause toggled");
                return Flow::Continue;
            }
            _ => {}
        }

        if !data.loader.is_done() {
            if !matches!(input, Input::Wheel(_)) {
                data.loader.skip();
            }
            return Flow::Continue;
        }

        let modal_open = data.overlay.borrow().is_modal_open();
        let section = data.current_section();
        match input {
            Input::Close => {
                data.overlay.borrow_mut().close_modal();
            }
            Input::Navigate(_) | Input::Wheel(_) if modal_open => {
                debug!("navigation swallowed by open modal");
            }
            Input::Navigate(key) => {
                data.navigator.on_key(key);
            }
            Input::Wheel(delta_y) => {
                data.navigator.on_wheel(delta_y, now_ms);
            }
            Input::Select(target) => {
                data.navigator.select_direct(target);
            }
            Input::NextProject | Input::PreviousProject => {
                if section == Section::Projects && !modal_open {
                    data.overlay
                        .borrow_mut()
                        .cycle_highlight(input == Input::NextProject);
                }
            }
            Input::Activate => match section {
                _ if modal_open => {}
                Section::Hero => {
                    data.navigator.select_direct(Section::Projects);
                }
                Section::Projects => data.overlay.borrow_mut().open_highlighted(),
                _ => {}
            },
            Input::Click { column, row } => {
                let target = overlay::hit_test(
                    section,
                    &data.overlay.borrow(),
                    column as usize,
                    row as usize,
                    self.size.0 as usize,
                    self.size.1 as usize,
                );
                match target {
                    Some(ClickTarget::Section(target)) => {
                        data.navigator.select_direct(target);
                    }
                    Some(ClickTarget::CallToAction) => {
                        data.navigator.select_direct(Section::Projects);
                    }
                    Some(ClickTarget::Project(index)) => data.overlay.borrow_mut().open_project(index),
                    None => {}
                }
            }
            _ => {}
        }
        Flow::Continue
    }

    /// Advance one frame of animation
    pub fn tick(&mut self, data: &mut AppState, dt: Duration) {
        data.loader.advance(dt);
        if data.paused {
            return;
        }
        data.camera.borrow_mut().advance(dt);
        self.scene.advance(dt);
    }

    /// Paint the current frame into the canvas and queue it onto `out`
    pub fn paint<W: Write>(&mut self, data: &AppState, out: &mut W) -> io::Result<()> {
        // Update FPS calculation
        self.frames_since_last_update += 1;
        let now = Instant::now();
        let duration = now.duration_since(self.last_fps_calculation);
        if duration.as_secs_f64() >= 1.0 {
            self.fps = self.frames_since_last_update as f64 / duration.as_secs_f64();
            self.frames_since_last_update = 0;
            self.last_fps_calculation = now;
        }

        self.render(data);
        self.canvas.flush(out)
    }

    /// Compose the frame without writing it anywhere
    pub fn render(&mut self, data: &AppState) {
        self.canvas.clear();

        if !data.loader.is_done() {
            overlay::draw_loader(&mut self.canvas, &data.loader);
            return;
        }

        let frame = data.camera.borrow().frame();
        self.scene.draw(&mut self.canvas, &frame);
        overlay::draw(&mut self.canvas, data.current_section(), &data.overlay.borrow());

        if data.debug {
            let camera = data.camera.borrow();
            let target = camera.target();
            let pointer = camera.pointer();
            let lines = [
                format!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION")),
                format!("Section: {}", data.current_section()),
                format!(
                    "Position: ({:.2}, {:.2}, {:.2})",
                    frame.position[0], frame.position[1], frame.position[2]
                ),
                format!(
                    "Rotation: ({:.2}, {:.2}, {:.2})",
                    frame.rotation[0], frame.rotation[1], frame.rotation[2]
                ),
                format!(
                    "Target: ({:.1}, {:.1}, {:.1}) {:?}",
                    target.position[0],
                    target.position[1],
                    target.position[2],
                    camera.position_phase()
                ),
                format!("Pointer: ({:.2}, {:.2})", pointer.x, pointer.y),
                format!("FPS: {:.2}", self.fps),
            ];
            overlay::draw_debug(&mut self.canvas, &lines);
        }

        if data.paused {
            overlay::draw_paused(&mut self.canvas);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::navigation::NavKey;

    fn ready_state() -> AppState {
        AppState::new(&Config {
            skip_intro: true,
            ..Config::default()
        })
    }

    fn widget() -> PortfolioWidget {
        PortfolioWidget::new((120, 36), Scene::new(50, 1))
    }

    #[test]
    fn keys_and_wheel_drive_navigation() {
        let mut state = ready_state();
        let mut widget = widget();
        widget.event(Input::Navigate(NavKey::Next), &mut state, 0);
        assert_eq!(state.current_section(), Section::About);
        widget.event(Input::Wheel(100.0), &mut state, 10);
        widget.event(Input::Wheel(100.0), &mut state, 500);
        assert_eq!(state.current_section(), Section::Skills);
        widget.event(Input::Wheel(100.0), &mut state, 1_200);
        assert_eq!(state.current_section(), Section::Projects);
    }

    #[test]
    fn modal_swallows_navigation_but_not_selection() {
        let mut state = ready_state();
        let mut widget = widget();
        widget.event(Input::Select(Section::Projects), &mut state, 0);
        widget.event(Input::NextProject, &mut state, 0);
        widget.event(Input::Activate, &mut state, 0);
        assert_eq!(state.overlay.borrow().modal().map(|p| p.id), Some("payzen"));

        widget.event(Input::Navigate(NavKey::Next), &mut state, 0);
        widget.event(Input::Wheel(100.0), &mut state, 0);
        assert_eq!(state.current_section(), Section::Projects);

        widget.event(Input::Close, &mut state, 0);
        assert!(!state.overlay.borrow().is_modal_open());

        widget.event(Input::Activate, &mut state, 0);
        widget.event(Input::Select(Section::Contact), &mut state, 0);
        assert_eq!(state.current_section(), Section::Contact);
        assert!(!state.overlay.borrow().is_modal_open());
    }

    #[test]
    fn hero_call_to_action_goes_to_projects() {
        let mut state = ready_state();
        let mut widget = widget();
        widget.event(Input::Activate, &mut state, 0);
        assert_eq!(state.current_section(), Section::Projects);
    }

    #[test]
    fn nav_bar_click_selects_section() {
        let mut state = ready_state();
        let mut widget = widget();
        let (section, x, _) = overlay::nav_items(120)[4];
        widget.event(Input::Click { column: x as u16, row: 0 }, &mut state, 0);
        assert_eq!(state.current_section(), section);
    }

    #[test]
    fn input_during_boot_skips_it() {
        let mut state = AppState::new(&Config::default());
        let mut widget = widget();
        widget.event(Input::Wheel(100.0), &mut state, 0);
        assert!(!state.loader.is_done());
        widget.event(Input::Navigate(NavKey::Next), &mut state, 0);
        assert!(state.loader.is_done());
        assert_eq!(state.current_section(), Section::Hero);
    }

    #[test]
    fn pause_freezes_the_camera() {
        let mut state = ready_state();
        let mut widget = widget();
        widget.event(Input::TogglePause, &mut state, 0);
        let before = state.camera.borrow().pose();
        widget.tick(&mut state, Duration::from_millis(500));
        assert_eq!(state.camera.borrow().pose(), before);
        widget.event(Input::TogglePause, &mut state, 0);
        widget.tick(&mut state, Duration::from_millis(500));
        assert_ne!(state.camera.borrow().pose(), before);
    }

    #[test]
    fn pointer_follows_widget_size() {
        let mut state = ready_state();
        let mut widget = widget();
        widget.event(Input::PointerMove { column: 60, row: 18 }, &mut state, 0);
        assert_eq!(state.camera.borrow().pointer(), Pointer { x: 0.0, y: 0.0 });
        widget.event(Input::Resize { width: 60, height: 18 }, &mut state, 0);
        widget.event(Input::PointerMove { column: 60, row: 18 }, &mut state, 0);
        assert_eq!(state.camera.borrow().pointer(), Pointer { x: 1.0, y: -1.0 });
    }

    #[test]
    fn render_shows_the_active_section() {
        let mut state = ready_state();
        let mut widget = widget();
        widget.event(Input::Select(Section::Experience), &mut state, 0);
        widget.tick(&mut state, Duration::from_millis(33));
        widget.render(&state);
        assert!(widget.canvas().row_text(0).contains("JOURNEY"));
        let mut out = Vec::new();
        widget.paint(&state, &mut out).unwrap();
        assert!(!out.is_empty());
    }
}
