//! CvSleuth application icon generator.
//!
//! Draws a procedural icon: a white page (the CV) carrying four coloured
//! bars of decreasing length (the word-frequency chart), with a lens ring
//! over the lower-right corner. Output is RGBA pixel data at any size.

/// Generate a CvSleuth icon as egui `IconData`.
pub fn generate_icon(size: u32) -> egui::IconData {
    egui::IconData {
        rgba: render_icon(size),
        width: size,
        height: size,
    }
}

/// Render the icon into an RGBA pixel buffer (top-to-bottom row order).
pub fn render_icon(size: u32) -> Vec<u8> {
    let s = size as f32;
    let mut pixels = vec![0u8; (size as usize) * (size as usize) * 4];

    // ── Layout ──────────────────────────────────────────────────
    let page_min = (s * 0.14, s * 0.06);
    let page_max = (s * 0.74, s * 0.86);
    let corner = s * 0.05;

    // Bars as (row centre y, right edge x, colour).
    let bar_left = s * 0.22;
    let bar_half_h = s * 0.035;
    let bars: &[(f32, f32, [u8; 3])] = &[
        (s * 0.22, s * 0.66, [0x89, 0xb4, 0xfa]),
        (s * 0.34, s * 0.56, [0xa6, 0xe3, 0xa1]),
        (s * 0.46, s * 0.48, [0xf9, 0xe2, 0xaf]),
        (s * 0.58, s * 0.38, [0xf3, 0x8b, 0xa8]),
    ];

    let lens_cx = s * 0.70;
    let lens_cy = s * 0.72;
    let lens_r = s * 0.17;
    let ring_w = s * 0.045;

    // ── Per-pixel rendering ─────────────────────────────────────
    for y in 0..size {
        for x in 0..size {
            let px = x as f32 + 0.5;
            let py = y as f32 + 0.5;

            let mut rgb = [0u8; 3];
            let mut alpha = 0.0f32;

            // 1. Page.
            let page_d = rounded_rect_dist(px, py, page_min, page_max, corner);
            let page_a = coverage(page_d);
            if page_a > 0.0 {
                // Faint top-to-bottom shading.
                let t = ((py - page_min.1) / (page_max.1 - page_min.1)).clamp(0.0, 1.0);
                let shade = lerp_channel(0xf5, 0xdc, t);
                rgb = [shade, shade, shade.saturating_add(6)];
                alpha = page_a;
            }

            // 2. Frequency bars.
            for &(cy, right, col) in bars {
                let d = rounded_rect_dist(
                    px,
                    py,
                    (bar_left, cy - bar_half_h),
                    (right, cy + bar_half_h),
                    bar_half_h * 0.6,
                );
                let a = coverage(d) * page_a;
                if a > 0.0 {
                    rgb = blend(rgb, col, a);
                }
            }

            // 3. Lens: tinted glass, then the ring.
            let dx = px - lens_cx;
            let dy = py - lens_cy;
            let dist = (dx * dx + dy * dy).sqrt();

            let glass_a = coverage(dist - lens_r) * 0.25;
            if glass_a > 0.0 {
                rgb = blend(rgb, [0xcd, 0xd6, 0xf4], glass_a);
                alpha = alpha + (1.0 - alpha) * glass_a;
            }

            let ring_a = coverage((dist - lens_r).abs() - ring_w / 2.0);
            if ring_a > 0.0 {
                rgb = blend(rgb, [0x58, 0x5b, 0x70], ring_a);
                alpha = alpha + (1.0 - alpha) * ring_a;
            }

            // 4. Handle, from the ring toward the bottom-right corner.
            let (hx0, hy0) = (lens_cx + lens_r * 0.72, lens_cy + lens_r * 0.72);
            let (hx1, hy1) = (s * 0.95, s * 0.95);
            let handle_a = coverage(segment_dist(px, py, hx0, hy0, hx1, hy1) - s * 0.04);
            if handle_a > 0.0 {
                rgb = blend(rgb, [0x45, 0x47, 0x5a], handle_a);
                alpha = alpha + (1.0 - alpha) * handle_a;
            }

            let idx = ((y * size + x) * 4) as usize;
            pixels[idx..idx + 3].copy_from_slice(&rgb);
            pixels[idx + 3] = (alpha * 255.0).round().clamp(0.0, 255.0) as u8;
        }
    }

    pixels
}

// ── Helpers ─────────────────────────────────────────────────────

/// Anti-aliased coverage for a signed distance (negative is inside).
fn coverage(signed_dist: f32) -> f32 {
    (0.5 - signed_dist).clamp(0.0, 1.0)
}

/// Signed distance from a point to a rounded rectangle.
fn rounded_rect_dist(px: f32, py: f32, min: (f32, f32), max: (f32, f32), r: f32) -> f32 {
    let cx = (min.0 + max.0) / 2.0;
    let cy = (min.1 + max.1) / 2.0;
    let hx = (max.0 - min.0) / 2.0 - r;
    let hy = (max.1 - min.1) / 2.0 - r;
    let qx = (px - cx).abs() - hx;
    let qy = (py - cy).abs() - hy;
    let outside = (qx.max(0.0).powi(2) + qy.max(0.0).powi(2)).sqrt();
    outside + qx.max(qy).min(0.0) - r
}

/// Distance from a point to the segment `a`..`b`.
fn segment_dist(px: f32, py: f32, ax: f32, ay: f32, bx: f32, by: f32) -> f32 {
    let (abx, aby) = (bx - ax, by - ay);
    let len_sq = abx * abx + aby * aby;
    let t = if len_sq < 1e-4 {
        0.0
    } else {
        (((px - ax) * abx + (py - ay) * aby) / len_sq).clamp(0.0, 1.0)
    };
    let (qx, qy) = (ax + t * abx, ay + t * aby);
    ((px - qx).powi(2) + (py - qy).powi(2)).sqrt()
}

fn blend(under: [u8; 3], over: [u8; 3], t: f32) -> [u8; 3] {
    [
        lerp_channel(under[0], over[0], t),
        lerp_channel(under[1], over[1], t),
        lerp_channel(under[2], over[2], t),
    ]
}

fn lerp_channel(a: u8, b: u8, t: f32) -> u8 {
    (a as f32 * (1.0 - t) + b as f32 * t).clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buffer_matches_requested_size() {
        for size in [16, 32, 64] {
            assert_eq!(render_icon(size).len(), (size * size * 4) as usize);
        }
        let icon = generate_icon(48);
        assert_eq!((icon.width, icon.height), (48, 48));
    }

    #[test]
    fn corners_are_transparent_and_page_is_opaque() {
        let size = 64u32;
        let px = render_icon(size);
        let alpha_at = |x: u32, y: u32| px[((y * size + x) * 4 + 3) as usize];

        assert_eq!(alpha_at(0, 0), 0);
        assert_eq!(alpha_at(size - 1, 0), 0);
        // Middle of the page, left of the lens.
        assert_eq!(alpha_at(size * 30 / 100, size * 40 / 100), 255);
    }

    #[test]
    fn rounded_rect_distance_sign() {
        let d_in = rounded_rect_dist(5.0, 5.0, (0.0, 0.0), (10.0, 10.0), 2.0);
        let d_out = rounded_rect_dist(20.0, 5.0, (0.0, 0.0), (10.0, 10.0), 2.0);
        assert!(d_in < 0.0);
        assert!((d_out - 10.0).abs() < 1e-4);
    }
}
