//! Fit the fixed-size play field into the browser window

/// Share of the window the canvas may use
pub const FILL: f64 = 0.9;

/// CSS scale for a `width` x `height` canvas in a `window_w` x `window_h` window
pub fn display_scale(width: f64, height: f64, window_w: f64, window_h: f64) -> f64 {
    (window_w / width).min(window_h / height) * FILL
}

/// CSS size in pixels, aspect ratio preserved
pub fn display_size(width: f64, height: f64, window_w: f64, window_h: f64) -> (f64, f64) {
    let scale = display_scale(width, height, window_w, window_h);
    (width * scale, height * scale)
}
