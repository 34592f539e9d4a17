//! ASCII plotting of resampled thrust curves for terminal output.
//!
//! This is intentionally "dumb" (fixed-size grid), optimized for:
//! - eyeballing where curves disagree
//! - deterministic output (helpful for golden tests)
//!
//! Each motor is drawn with its own glyph: `1`..`9` for the first nine, `*` for
//! the rest. Earlier motors win where curves overlap.

use crate::compare::ThrustGrid;
use crate::domain::SourceBatch;

/// Render every curve in `grid` plus a legend of sources.
pub fn render_thrust_plot(grid: &ThrustGrid, batch: &SourceBatch, width: usize, height: usize) -> String {
    if grid.divisions() < 2 || grid.motor_count() == 0 {
        return "Plot: (no data)\n".to_string();
    }

    let width = width.max(10);
    let height = height.max(5);

    let times = grid.times();
    let (t_min, t_max) = (times[0], times[times.len() - 1]);
    let (y_min, y_max) = y_range(grid).unwrap_or((0.0, 1.0));
    let (y_min, y_max) = pad_range(y_min, y_max, 0.05);

    let mut canvas = vec![vec![' '; width]; height];
    for motor in 0..grid.motor_count() {
        draw_curve(&mut canvas, &grid.curve(motor), glyph(motor), (t_min, t_max), (y_min, y_max));
    }

    let mut out = String::new();
    out.push_str(&format!(
        "Plot: time=[{t_min:.3}, {t_max:.3}] s | thrust=[{y_min:.2}, {y_max:.2}] N\n"
    ));
    for row in canvas {
        out.push_str(&row.into_iter().collect::<String>());
        out.push('\n');
    }
    for (i, source) in batch.sources().enumerate() {
        out.push_str(&format!("  {} {source}\n", glyph(i)));
    }
    out
}

fn glyph(motor: usize) -> char {
    match motor {
        0..=8 => char::from(b'1' + motor as u8),
        _ => '*',
    }
}

fn y_range(grid: &ThrustGrid) -> Option<(f64, f64)> {
    let mut min_y = f64::INFINITY;
    let mut max_y = f64::NEG_INFINITY;
    for i in 0..grid.divisions() {
        for f in grid.division(i) {
            min_y = min_y.min(f);
            max_y = max_y.max(f);
        }
    }
    if min_y.is_finite() && max_y.is_finite() && max_y > min_y {
        Some((min_y, max_y))
    } else {
        None
    }
}

fn pad_range(min: f64, max: f64, frac: f64) -> (f64, f64) {
    let span = (max - min).abs();
    let pad = (span * frac).max(1e-12);
    (min - pad, max + pad)
}

fn map_x(t: f64, t_min: f64, t_max: f64, width: usize) -> usize {
    let width = width.max(2);
    if t_max <= t_min {
        return 0;
    }
    let u = ((t - t_min) / (t_max - t_min)).clamp(0.0, 1.0);
    (u * (width as f64 - 1.0)).round() as usize
}

fn map_y(y: f64, y_min: f64, y_max: f64, height: usize) -> usize {
    let height = height.max(2);
    let u = ((y - y_min) / (y_max - y_min)).clamp(0.0, 1.0);
    // Row 0 is the top of the plot.
    (height as f64 - 1.0 - (u * (height as f64 - 1.0))).round() as usize
}

fn draw_curve(
    canvas: &mut [Vec<char>],
    curve: &[(f64, f64)],
    ch: char,
    (t_min, t_max): (f64, f64),
    (y_min, y_max): (f64, f64),
) {
    let height = canvas.len();
    let width = canvas[0].len();

    let mut prev = None;
    for &(t, y) in curve {
        let x = map_x(t, t_min, t_max, width);
        let yy = map_y(y, y_min, y_max, height);
        match prev {
            Some((x0, y0)) => draw_line(canvas, x0, y0, x, yy, ch),
            None if canvas[yy][x] == ' ' => canvas[yy][x] = ch,
            None => {}
        }
        prev = Some((x, yy));
    }
}

/// Integer line drawing (Bresenham-ish). Only fills blank cells.
fn draw_line(canvas: &mut [Vec<char>], x0: usize, y0: usize, x1: usize, y1: usize, ch: char) {
    let mut x0 = x0 as isize;
    let mut y0 = y0 as isize;
    let x1 = x1 as isize;
    let y1 = y1 as isize;

    let dx = (x1 - x0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let dy = -(y1 - y0).abs();
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    loop {
        if y0 >= 0
            && (y0 as usize) < canvas.len()
            && x0 >= 0
            && (x0 as usize) < canvas[0].len()
            && canvas[y0 as usize][x0 as usize] == ' '
        {
            canvas[y0 as usize][x0 as usize] = ch;
        }

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
    }
}
