use nexus_folio::config::{Args, Config};
use nexus_folio::error::AppError;
use nexus_folio::scene::Scene;
use nexus_folio::state::AppState;
use nexus_folio::terminal::TerminalGuard;
use nexus_folio::widget::{Flow, PortfolioWidget};
use nexus_folio::{input, logging};
use clap::Parser;
use crossterm::event;
use std::io::{self, BufWriter};
use std::time::Instant;
use tracing::info;

/// Runs the portfolio until the user quits
fn run(config: &Config) -> Result<(), AppError> {
    let terminal = TerminalGuard::new()?;
    let mut state = AppState::new(config);
    let mut widget = PortfolioWidget::new(
        terminal.size()?,
        Scene::new(config.point_count, config.seed),
    );
    let mut out = BufWriter::new(io::stdout());

    let session_start = Instant::now();
    let mut last_frame = Instant::now();
    info!(
        section = %state.current_section(),
        size = ?widget.size(),
        "portfolio started"
    );

    loop {
        let next_frame = last_frame + config.frame_interval;
        let timeout = next_frame.saturating_duration_since(Instant::now());
        if event::poll(timeout)? {
            let event = event::read()?;
            if let Some(action) = input::map_event(&event, config.wheel_delta) {
                let now_ms = session_start.elapsed().as_millis() as u64;
                if widget.event(action, &mut state, now_ms) == Flow::Quit {
                    break;
                }
            }
        }

        let now = Instant::now();
        if now < last_frame + config.frame_interval {
            continue;
        }
        widget.tick(&mut state, now - last_frame);
        last_frame = now;
        widget.paint(&state, &mut out)?;
    }

    info!(section = %state.current_section(), "portfolio closed");
    Ok(())
}

/// Main function
fn main() -> Result<(), AppError> {
    let config = Config::try_from(Args::parse())?;
    logging::init(config.log_file.as_deref(), &config.log_level)?;
    run(&config)
}
