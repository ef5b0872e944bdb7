use ratatui::layout::Rect;
use vertical_pong::Court;

/// Terminal cells are roughly twice as tall as they are wide.
const CELL_ASPECT: f64 = 2.0;

pub fn centered_rect_with_percentage(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let width = area.width * percent_x / 100;
    let height = std::cmp::min(std::cmp::max(area.height * percent_y / 100, 5), area.height);
    centered_rect(width, height, area)
}

pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    // never larger than the space we have
    let width = std::cmp::min(width, area.width);
    let height = std::cmp::min(height, area.height);

    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

/// Largest rect inside `area` whose inner part (inside a one-cell border)
/// shows the court with its real proportions.
pub fn court_rect(court: &Court, area: Rect) -> Rect {
    let max_w = area.width.saturating_sub(2) as f64;
    let max_h = area.height.saturating_sub(2) as f64;
    let (court_w, court_h) = (court.width_f() * CELL_ASPECT, court.height_f());

    let (mut w, mut h) = (max_h * court_w / court_h, max_h);
    if w > max_w {
        w = max_w;
        h = max_w * court_h / court_w;
    }

    centered_rect(w.floor() as u16 + 2, h.floor() as u16 + 2, area)
}

/// Cells of `inner` covered by a court-space box at (`x`, `y`) of size
/// `w` × `h`. Always at least one cell, never outside `inner`.
pub fn court_cells(court: &Court, inner: Rect, x: f64, y: f64, w: f64, h: f64) -> Rect {
    fn span(start: f64, len: f64, court_len: f64, cells: u16) -> (u16, u16) {
        if cells == 0 {
            return (0, 0);
        }
        let scale = f64::from(cells) / court_len;
        let max = f64::from(cells - 1);
        let first = (start * scale).floor().max(0.0).min(max);
        let last = ((start + len) * scale).ceil().max(first + 1.0).min(f64::from(cells));
        (first as u16, (last - first) as u16)
    }

    let (col, width) = span(x, w, court.width_f(), inner.width);
    let (row, height) = span(y, h, court.height_f(), inner.height);
    Rect::new(inner.x + col, inner.y + row, width, height)
}
