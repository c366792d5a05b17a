//! Text chrome drawn over the scene: navigation bar, footer, the active
//! section's panel, the project modal and the loading screen.
//!
//! Panels are looked up per section in [`PANELS`]; layout helpers are shared
//! with hit-testing so clicks land on what was drawn.

use crate::content::{
    Project, ACHIEVEMENTS, BIO, CONTACT_LINKS, EXPERIENCES, OWNER, PROJECTS, SKILL_CATEGORIES,
    TAGLINE,
};
use crate::graphics::Canvas;
use crate::loader::Loader;
use crate::navigation::SectionChange;
use crate::section::Section;
use crossterm::style::Color;
use tracing::debug;

const ACCENT: Color = Color::Rgb { r: 255, g: 0, b: 128 };
const TEXT: Color = Color::Rgb { r: 229, g: 231, b: 235 };
const MUTED: Color = Color::Rgb { r: 113, g: 113, b: 122 };

const BRAND: &str = "[S] SHIVANGI SHARMA";
const NAV_GAP: usize = 3;
const CALL_TO_ACTION: &str = "[ Enter ] EXPLORE WORK >";
const MAX_PANEL_WIDTH: usize = 76;

/// Something clickable on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    Section(Section),
    CallToAction,
    Project(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: usize,
    pub y: usize,
    pub width: usize,
    pub height: usize,
}

impl Rect {
    fn contains(&self, column: usize, row: usize) -> bool {
        column >= self.x && column < self.x + self.width && row >= self.y && row < self.y + self.height
    }

    /// Area inside a one-cell border and a one-column margin
    fn inner(&self) -> Rect {
        Rect {
            x: self.x + 2,
            y: self.y + 1,
            width: self.width.saturating_sub(4),
            height: self.height.saturating_sub(2),
        }
    }
}

/// Project highlight and modal state
#[derive(Debug, Clone, Default)]
pub struct OverlayState {
    highlighted: usize,
    modal: Option<usize>,
}

impl OverlayState {
    pub fn highlighted(&self) -> usize {
        self.highlighted
    }

    pub fn modal(&self) -> Option<&'static Project> {
        self.modal.and_then(|index| PROJECTS.get(index))
    }

    pub fn is_modal_open(&self) -> bool {
        self.modal.is_some()
    }

    /// Moves the project highlight, wrapping around the list
    pub fn cycle_highlight(&mut self, forward: bool) {
        let count = PROJECTS.len();
        if count == 0 {
            return;
        }
        self.highlighted = if forward {
            (self.highlighted + 1) % count
        } else {
            (self.highlighted + count - 1) % count
        };
    }

    pub fn open_project(&mut self, index: usize) {
        if let Some(project) = PROJECTS.get(index) {
            debug!(project = project.id, "project modal opened");
            self.highlighted = index;
            self.modal = Some(index);
        }
    }

    pub fn open_highlighted(&mut self) {
        self.open_project(self.highlighted);
    }

    /// Closes the modal; returns whether one was open
    pub fn close_modal(&mut self) -> bool {
        self.modal.take().is_some()
    }

    pub fn on_section_change(&mut self, change: SectionChange) {
        if change.previous != change.current && self.close_modal() {
            debug!(to = %change.current, "project modal closed by navigation");
        }
    }
}

/// Draws one section's panel into `area`
pub type PanelFn = fn(&mut Canvas, Rect, &OverlayState);

/// Panel renderers indexed by [`Section::index`]
pub const PANELS: [PanelFn; Section::COUNT] = [
    draw_hero,
    draw_about,
    draw_skills,
    draw_projects,
    draw_experience,
    draw_achievements,
    draw_contact,
];

pub fn panel_for(section: Section) -> PanelFn {
    PANELS[section.index()]
}

/// Column span of each navigation bar label
pub fn nav_items(width: usize) -> Vec<(Section, usize, usize)> {
    let mut x = BRAND.len() + 4;
    let mut items = Vec::with_capacity(Section::COUNT);
    for section in Section::ALL {
        let len = section.label().len();
        if x + len > width {
            break;
        }
        items.push((section, x, len));
        x += len + NAV_GAP;
    }
    items
}

/// Column of each footer dot, right-aligned on the last row
pub fn footer_dots(width: usize) -> Vec<(Section, usize)> {
    let span = Section::COUNT * 2 - 1;
    let start = width.saturating_sub(span + 2);
    Section::ALL
        .iter()
        .enumerate()
        .map(|(i, section)| (*section, start + i * 2))
        .collect()
}

/// Area of the section panel
pub fn content_rect(width: usize, height: usize) -> Rect {
    let panel_width = width.saturating_sub(4).min(MAX_PANEL_WIDTH);
    Rect {
        x: (width - panel_width) / 2,
        y: 2,
        width: panel_width,
        height: height.saturating_sub(5),
    }
}

fn modal_rect(width: usize, height: usize) -> Rect {
    let panel = content_rect(width, height);
    Rect {
        x: panel.x + 2,
        y: panel.y + 1,
        width: panel.width.saturating_sub(4),
        height: panel.height.saturating_sub(2),
    }
}

fn call_to_action_rect(area: Rect) -> Rect {
    let inner = area.inner();
    Rect {
        x: inner.x + inner.width.saturating_sub(CALL_TO_ACTION.len()) / 2,
        y: inner.y + inner.height / 2 + 2,
        width: CALL_TO_ACTION.len(),
        height: 1,
    }
}

fn project_row(area: Rect, index: usize) -> usize {
    area.inner().y + 2 + index * 2
}

/// Finds what sits under a click
pub fn hit_test(
    section: Section,
    overlay: &OverlayState,
    column: usize,
    row: usize,
    width: usize,
    height: usize,
) -> Option<ClickTarget> {
    if row == 0 {
        return nav_items(width)
            .into_iter()
            .find(|(_, x, len)| column >= *x && column < x + len)
            .map(|(section, _, _)| ClickTarget::Section(section));
    }
    if row + 1 == height {
        return footer_dots(width)
            .into_iter()
            .find(|(_, x)| *x == column)
            .map(|(section, _)| ClickTarget::Section(section));
    }
    if overlay.is_modal_open() {
        return None;
    }
    let area = content_rect(width, height);
    match section {
        Section::Hero if call_to_action_rect(area).contains(column, row) => {
            Some(ClickTarget::CallToAction)
        }
        Section::Projects if area.inner().contains(column, row) => (0..PROJECTS.len())
            .find(|index| project_row(area, *index) == row)
            .map(ClickTarget::Project),
        _ => None,
    }
}

/// Greedy word wrap; words longer than `width` are split
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    if width == 0 {
        return lines;
    }
    let mut line = String::new();
    for word in text.split_whitespace() {
        let mut word = word.to_string();
        while word.chars().count() > width {
            if !line.is_empty() {
                lines.push(std::mem::take(&mut line));
            }
            let head: String = word.chars().take(width).collect();
            word = word.chars().skip(width).collect();
            lines.push(head);
        }
        let needed = if line.is_empty() { word.len() } else { line.len() + 1 + word.len() };
        if needed > width && !line.is_empty() {
            lines.push(std::mem::take(&mut line));
        }
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(&word);
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

/// Writes wrapped text starting at `row`, returning the next free row
fn draw_paragraph(canvas: &mut Canvas, area: Rect, row: usize, text: &str, color: Color) -> usize {
    let mut row = row;
    for line in wrap_text(text, area.width) {
        if row >= area.y + area.height {
            break;
        }
        canvas.draw_text(area.x, row, &line, color, false);
        row += 1;
    }
    row
}

fn draw_heading(canvas: &mut Canvas, area: Rect, title: &str) -> usize {
    canvas.draw_text(area.x, area.y, title, ACCENT, true);
    area.y + 2
}

fn draw_centered(canvas: &mut Canvas, area: Rect, row: usize, text: &str, color: Color, bold: bool) {
    let x = area.x + area.width.saturating_sub(text.chars().count()) / 2;
    canvas.draw_text(x, row, text, color, bold);
}

fn draw_hero(canvas: &mut Canvas, area: Rect, _overlay: &OverlayState) {
    let inner = area.inner();
    let middle = inner.y + inner.height / 2;
    draw_centered(canvas, inner, middle.saturating_sub(2), &OWNER.to_uppercase(), TEXT, true);
    draw_centered(canvas, inner, middle, TAGLINE, MUTED, false);
    let cta = call_to_action_rect(area);
    canvas.draw_text(cta.x, cta.y, CALL_TO_ACTION, ACCENT, true);
}

fn draw_about(canvas: &mut Canvas, area: Rect, _overlay: &OverlayState) {
    canvas.draw_box(area.x, area.y, area.width, area.height, MUTED);
    let inner = area.inner();
    let mut row = draw_heading(canvas, inner, "MY STORY");
    for paragraph in BIO {
        row = draw_paragraph(canvas, inner, row, paragraph, TEXT) + 1;
    }
}

fn draw_skills(canvas: &mut Canvas, area: Rect, _overlay: &OverlayState) {
    canvas.draw_box(area.x, area.y, area.width, area.height, MUTED);
    let inner = area.inner();
    let mut row = draw_heading(canvas, inner, "TECH ARSENAL");
    for category in SKILL_CATEGORIES {
        if row >= inner.y + inner.height {
            break;
        }
        canvas.draw_text(inner.x, row, category.name, ACCENT, true);
        row = draw_paragraph(canvas, inner, row + 1, &category.skills.join(" · "), TEXT);
    }
}

fn draw_projects(canvas: &mut Canvas, area: Rect, overlay: &OverlayState) {
    canvas.draw_box(area.x, area.y, area.width, area.height, MUTED);
    let inner = area.inner();
    draw_heading(canvas, inner, "SELECTED WORK");
    for (index, project) in PROJECTS.iter().enumerate() {
        let row = project_row(area, index);
        if row + 1 >= inner.y + inner.height {
            break;
        }
        let selected = index == overlay.highlighted();
        let marker = if selected { ">" } else { " " };
        let title = format!("{marker} {:<18} {}", project.title, project.status.label());
        canvas.draw_text(inner.x, row, &title, if selected { ACCENT } else { TEXT }, selected);
        let summary: String = project.description.chars().take(inner.width.saturating_sub(2)).collect();
        canvas.draw_text(inner.x + 2, row + 1, &summary, MUTED, false);
    }
    let hint = "Tab next · Enter details";
    canvas.draw_text(inner.x, inner.y + inner.height.saturating_sub(1), hint, MUTED, false);
}

fn draw_experience(canvas: &mut Canvas, area: Rect, _overlay: &OverlayState) {
    canvas.draw_box(area.x, area.y, area.width, area.height, MUTED);
    let inner = area.inner();
    let mut row = draw_heading(canvas, inner, "JOURNEY");
    for experience in EXPERIENCES {
        if row >= inner.y + inner.height {
            break;
        }
        let header = format!("{} @ {}  ({})", experience.title, experience.company, experience.date);
        canvas.draw_text(inner.x, row, &header, ACCENT, true);
        row += 1;
        for detail in experience.details {
            row = draw_paragraph(canvas, inner, row, &format!("- {detail}"), TEXT);
        }
        row += 1;
    }
}

fn draw_achievements(canvas: &mut Canvas, area: Rect, _overlay: &OverlayState) {
    canvas.draw_box(area.x, area.y, area.width, area.height, MUTED);
    let inner = area.inner();
    let mut row = draw_heading(canvas, inner, "HALL OF GLORY");
    for achievement in ACHIEVEMENTS {
        if row >= inner.y + inner.height {
            break;
        }
        canvas.draw_text(inner.x, row, achievement.title, ACCENT, true);
        let line = format!("{} · {}", achievement.event, achievement.date);
        canvas.draw_text(inner.x, row + 1, &line, MUTED, false);
        row = draw_paragraph(canvas, inner, row + 2, achievement.result, TEXT) + 1;
    }
}

fn draw_contact(canvas: &mut Canvas, area: Rect, _overlay: &OverlayState) {
    canvas.draw_box(area.x, area.y, area.width, area.height, MUTED);
    let inner = area.inner();
    let mut row = draw_heading(canvas, inner, "SYNC");
    for link in CONTACT_LINKS {
        if row >= inner.y + inner.height {
            break;
        }
        canvas.draw_text(inner.x, row, link.label, MUTED, false);
        canvas.draw_text(inner.x + 12, row, link.href, TEXT, true);
        row += 2;
    }
}

fn draw_modal(canvas: &mut Canvas, area: Rect, project: &Project) {
    canvas.draw_box(area.x, area.y, area.width, area.height, ACCENT);
    let inner = area.inner();
    canvas.draw_text(inner.x, inner.y, &project.title.to_uppercase(), TEXT, true);
    let close = "[Esc]";
    canvas.draw_text(inner.x + inner.width.saturating_sub(close.len()), inner.y, close, MUTED, false);
    let mut row = draw_paragraph(canvas, inner, inner.y + 1, &project.tech.join(" · "), ACCENT) + 1;
    row = draw_paragraph(canvas, inner, row, project.detail_text(), TEXT) + 1;
    for feature in project.features {
        row = draw_paragraph(canvas, inner, row, &format!("+ {feature}"), MUTED);
    }
    row += 1;
    for (label, url) in [("source", project.github), ("live", project.link)] {
        if let Some(url) = url {
            if row < inner.y + inner.height {
                canvas.draw_text(inner.x, row, &format!("{label}: {url}"), TEXT, false);
                row += 1;
            }
        }
    }
}

/// Draws all portfolio chrome for `section`
pub fn draw(canvas: &mut Canvas, section: Section, overlay: &OverlayState) {
    let (width, height) = (canvas.width(), canvas.height());
    if width < 20 || height < 8 {
        canvas.draw_text(0, 0, section.label(), ACCENT, true);
        return;
    }

    canvas.clear_rect(0, 0, width, 1);
    canvas.draw_text(1, 0, BRAND, ACCENT, true);
    for (item, x, _) in nav_items(width) {
        let active = item == section;
        let color = if active { ACCENT } else { MUTED };
        canvas.draw_text(x, 0, &item.label().to_uppercase(), color, active);
    }

    let footer = height - 1;
    canvas.clear_rect(0, footer, width, 1);
    canvas.draw_text(1, footer, &format!("Architecture // {OWNER}"), MUTED, false);
    for (item, x) in footer_dots(width) {
        let (symbol, color) = if item == section { ('●', ACCENT) } else { ('○', MUTED) };
        canvas.put(x, footer, symbol, color, false);
    }

    let area = content_rect(width, height);
    panel_for(section)(canvas, area, overlay);
    if let Some(project) = overlay.modal() {
        draw_modal(canvas, modal_rect(width, height), project);
    }
}

/// Draws the boot screen
pub fn draw_loader(canvas: &mut Canvas, loader: &Loader) {
    let (width, height) = (canvas.width(), canvas.height());
    canvas.clear_rect(0, 0, width, height);
    let area = Rect {
        x: 0,
        y: 0,
        width,
        height,
    };
    let bar_width = width.saturating_sub(8).min(60);
    let x = (width - bar_width) / 2;
    let middle = height / 2;

    draw_centered(canvas, area, middle.saturating_sub(3), "SYSTEM AUTHORITY", ACCENT, true);
    draw_centered(canvas, area, middle.saturating_sub(1), loader.message(), TEXT, true);
    let filled = ((loader.progress() / 100.0) * bar_width as f64).round() as usize;
    for i in 0..bar_width {
        let (symbol, color) = if i < filled { ('█', ACCENT) } else { ('░', MUTED) };
        canvas.put(x + i, middle + 1, symbol, color, false);
    }
    let percent = format!("{:>3}%", loader.progress().round() as u32);
    draw_centered(canvas, area, middle + 3, &percent, ACCENT, true);
    draw_centered(
        canvas,
        area,
        height.saturating_sub(2),
        "Protocol S_SHARMA // Global Environment // v2.1.0",
        MUTED,
        false,
    );
}

/// Draws the centered pause banner
pub fn draw_paused(canvas: &mut Canvas) {
    let (width, height) = (canvas.width(), canvas.height());
    let text = " PAUSED ";
    let x = width.saturating_sub(text.len()) / 2;
    canvas.draw_text(x, height / 2, text, TEXT, true);
}

/// Draws debug lines under the navigation bar
pub fn draw_debug(canvas: &mut Canvas, lines: &[String]) {
    for (i, line) in lines.iter().enumerate() {
        canvas.draw_text(1, 1 + i, line, Color::White, false);
    }
}
