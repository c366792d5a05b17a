use crate::vertex::Vertex;
use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::style::{Attribute, Color, Print, SetAttribute, SetForegroundColor};
use std::io::{self, Write};

/// One character cell of the frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cell {
    pub symbol: char,
    pub color: Color,
    pub bold: bool,
}

impl Cell {
    pub const BLANK: Cell = Cell {
        symbol: ' ',
        color: Color::Reset,
        bold: false,
    };
}

/// Character frame buffer with a per-cell depth buffer
pub struct Canvas {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
    z_buffer: Vec<f64>,
}

impl Canvas {
    pub fn new(width: usize, height: usize) -> Self {
        Canvas {
            width,
            height,
            cells: vec![Cell::BLANK; width * height],
            z_buffer: vec![f64::INFINITY; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Resizes the canvas, discarding its contents
    pub fn resize(&mut self, width: usize, height: usize) {
        if (width, height) != (self.width, self.height) {
            *self = Canvas::new(width, height);
        }
    }

    pub fn clear(&mut self) {
        self.cells.fill(Cell::BLANK);
        self.z_buffer.fill(f64::INFINITY);
    }

    pub fn cell(&self, x: usize, y: usize) -> Option<&Cell> {
        if x < self.width && y < self.height {
            self.cells.get(y * self.width + x)
        } else {
            None
        }
    }

    /// Plots a depth-tested point; nearer points win
    pub fn plot(&mut self, x: f64, y: f64, depth: f64, symbol: char, color: Color) {
        let (x, y) = (x.floor(), y.floor());
        if x < 0.0 || y < 0.0 || x >= self.width as f64 || y >= self.height as f64 {
            return;
        }
        let offset = y as usize * self.width + x as usize;
        if depth < self.z_buffer[offset] {
            self.z_buffer[offset] = depth;
            self.cells[offset] = Cell {
                symbol,
                color,
                bold: false,
            };
        }
    }

    /// Writes an overlay cell that no later scene geometry can cover
    pub fn put(&mut self, x: usize, y: usize, symbol: char, color: Color, bold: bool) {
        if x >= self.width || y >= self.height {
            return;
        }
        let offset = y * self.width + x;
        self.z_buffer[offset] = f64::NEG_INFINITY;
        self.cells[offset] = Cell {
            symbol,
            color,
            bold,
        };
    }

    /// Draws text clipped to the canvas, returning the number of cells written
    pub fn draw_text(&mut self, x: usize, y: usize, text: &str, color: Color, bold: bool) -> usize {
        let mut written = 0;
        for (i, symbol) in text.chars().enumerate() {
            if x + i >= self.width {
                break;
            }
            self.put(x + i, y, symbol, color, bold);
            written += 1;
        }
        written
    }

    /// Fills a rectangle with blank overlay cells
    pub fn clear_rect(&mut self, x: usize, y: usize, width: usize, height: usize) {
        for row in y..(y + height).min(self.height) {
            for column in x..(x + width).min(self.width) {
                self.put(column, row, ' ', Color::Reset, false);
            }
        }
    }

    /// Draws a rectangular frame with a blank interior
    pub fn draw_box(&mut self, x: usize, y: usize, width: usize, height: usize, color: Color) {
        if width < 2 || height < 2 {
            return;
        }
        self.clear_rect(x, y, width, height);
        let right = x + width - 1;
        let bottom = y + height - 1;
        for column in x + 1..right {
            self.put(column, y, '─', color, false);
            self.put(column, bottom, '─', color, false);
        }
        for row in y + 1..bottom {
            self.put(x, row, '│', color, false);
            self.put(right, row, '│', color, false);
        }
        self.put(x, y, '╭', color, false);
        self.put(right, y, '╮', color, false);
        self.put(x, bottom, '╰', color, false);
        self.put(right, bottom, '╯', color, false);
    }

    /// The symbols of one row
    pub fn row_text(&self, y: usize) -> String {
        if y >= self.height {
            return String::new();
        }
        self.cells[y * self.width..(y + 1) * self.width]
            .iter()
            .map(|cell| cell.symbol)
            .collect()
    }

    /// Queues the whole frame onto `out`, switching style only between runs
    pub fn flush<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let mut color = Color::Reset;
        let mut bold = false;
        queue!(out, SetAttribute(Attribute::Reset), SetForegroundColor(color))?;
        for y in 0..self.height {
            queue!(out, MoveTo(0, y as u16))?;
            let mut run = String::with_capacity(self.width);
            for cell in &self.cells[y * self.width..(y + 1) * self.width] {
                if cell.color != color || cell.bold != bold {
                    queue!(out, Print(&run))?;
                    run.clear();
                    if cell.bold != bold {
                        let attribute = if cell.bold {
                            Attribute::Bold
                        } else {
                            Attribute::NormalIntensity
                        };
                        queue!(out, SetAttribute(attribute))?;
                        bold = cell.bold;
                    }
                    queue!(out, SetForegroundColor(cell.color))?;
                    color = cell.color;
                }
                run.push(cell.symbol);
            }
            queue!(out, Print(&run))?;
        }
        queue!(out, SetAttribute(Attribute::Reset))?;
        out.flush()
    }
}

/// Draws a depth-tested line between two projected vertices using Bresenham's algorithm
pub fn draw_line(v0: &Vertex, v1: &Vertex, canvas: &mut Canvas, symbol: char, color: Color) {
    let (mut x0, mut y0, x1, y1) = (
        v0.screen_position[0].round() as isize,
        v0.screen_position[1].round() as isize,
        v1.screen_position[0].round() as isize,
        v1.screen_position[1].round() as isize,
    );
    let dx = (x1 - x0).abs();
    let dy = -(y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy; // error value e_xy
    let steps = dx.max(-dy).max(1) as f64;
    let mut step = 0.0;

    // Lines that leave the screen entirely would loop for a long time
    if dx > 4 * canvas.width() as isize || -dy > 4 * canvas.height() as isize {
        return;
    }

    loop {
        let depth = v0.depth + (v1.depth - v0.depth) * (step / steps);
        canvas.plot(x0 as f64, y0 as f64, depth, symbol, color);

        if x0 == x1 && y0 == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x0 += sx;
        }
        if e2 <= dx {
            err += dx;
            y0 += sy;
        }
        step += 1.0;
    }
}

/// Fades a color toward black as depth moves through the fog band
pub fn apply_fog(color: (u8, u8, u8), depth: f64, fog_near: f64, fog_far: f64) -> Option<Color> {
    if depth >= fog_far {
        return None;
    }
    let intensity = if depth <= fog_near {
        1.0
    } else {
        1.0 - (depth - fog_near) / (fog_far - fog_near)
    };
    let r = (color.0 as f64 * intensity).min(255.0) as u8;
    let g = (color.1 as f64 * intensity).min(255.0) as u8;
    let b = (color.2 as f64 * intensity).min(255.0) as u8;
    Some(Color::Rgb { r, g, b })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vertex(x: f64, y: f64, depth: f64) -> Vertex {
        Vertex {
            position: [0.0; 3],
            screen_position: [x, y],
            depth,
        }
    }

    #[test]
    fn nearer_points_win_the_depth_test() {
        let mut canvas = Canvas::new(4, 2);
        canvas.plot(1.0, 1.0, 10.0, 'a', Color::White);
        canvas.plot(1.0, 1.0, 20.0, 'b', Color::White);
        assert_eq!(canvas.cell(1, 1).unwrap().symbol, 'a');
        canvas.plot(1.0, 1.0, 5.0, 'c', Color::White);
        assert_eq!(canvas.cell(1, 1).unwrap().symbol, 'c');
    }

    #[test]
    fn overlay_text_is_never_covered() {
        let mut canvas = Canvas::new(8, 1);
        assert_eq!(canvas.draw_text(2, 0, "hello world", Color::White, true), 6);
        canvas.plot(3.0, 0.0, 0.0, '*', Color::White);
        assert_eq!(canvas.row_text(0), "  hello ");
    }

    #[test]
    fn line_covers_both_endpoints() {
        let mut canvas = Canvas::new(10, 5);
        draw_line(&vertex(0.0, 0.0, 1.0), &vertex(9.0, 4.0, 1.0), &mut canvas, '.', Color::White);
        assert_eq!(canvas.cell(0, 0).unwrap().symbol, '.');
        assert_eq!(canvas.cell(9, 4).unwrap().symbol, '.');
    }

    #[test]
    fn fog_hides_far_points() {
        assert_eq!(apply_fog((255, 0, 128), 10.0, 30.0, 130.0), Some(Color::Rgb { r: 255, g: 0, b: 128 }));
        assert!(apply_fog((255, 0, 128), 140.0, 30.0, 130.0).is_none());
        assert_eq!(apply_fog((200, 0, 0), 80.0, 30.0, 130.0), Some(Color::Rgb { r: 100, g: 0, b: 0 }));
    }
}
