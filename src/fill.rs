//! Bucket fill.
//!
//! The traversal keeps its own work stack instead of recursing, so memory use
//! grows with the filled area and never with call depth.

use egui::Pos2;

use crate::buffer::PixelBuffer;
use crate::color::Color;

/// Repaints the 4-connected region of pixels matching the color under `seed`.
///
/// Returns the number of pixels repainted. Seeds outside the buffer, and
/// seeds whose pixel already has the fill color, leave the buffer untouched.
/// The region is painted fully opaque.
pub fn flood_fill(buffer: &mut PixelBuffer, seed: Pos2, fill: Color) -> usize {
    // NaN would round and cast to pixel 0
    if !seed.is_finite() {
        log::debug!("Ignoring non-finite fill seed {seed:?}");
        return 0;
    }

    let start_x = seed.x.round() as i64;
    let start_y = seed.y.round() as i64;

    let Ok(target) = buffer.get(start_x, start_y) else {
        log::debug!("Fill seed {seed:?} is outside the canvas");
        return 0;
    };

    let fill = fill.opaque();
    if target == fill {
        return 0;
    }

    let width = buffer.width() as usize;
    let mut visited = vec![false; width * buffer.height() as usize];
    let mut stack = vec![(start_x, start_y)];
    let mut painted = 0;

    while let Some((x, y)) = stack.pop() {
        if !buffer.in_bounds(x, y) {
            continue;
        }
        let idx = y as usize * width + x as usize;
        if visited[idx] {
            continue;
        }
        match buffer.get(x, y) {
            Ok(current) if current == target => {}
            _ => continue,
        }

        visited[idx] = true;
        buffer.put(x, y, fill);
        painted += 1;

        stack.push((x + 1, y));
        stack.push((x - 1, y));
        stack.push((x, y + 1));
        stack.push((x, y - 1));
    }

    log::debug!("Filled {painted} pixels from ({start_x}, {start_y}) with {fill}");
    painted
}
