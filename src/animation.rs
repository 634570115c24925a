//! Scroll and entrance animation math shared by the pages.

/// Maps `value` from `input` onto `output`, clamping at both ends.
pub fn transform_range(value: f64, input: (f64, f64), output: (f64, f64)) -> f64 {
    let (in_start, in_end) = input;
    let (out_start, out_end) = output;
    let span = in_end - in_start;
    if span == 0.0 {
        return out_start;
    }
    let progress = ((value - in_start) / span).clamp(0.0, 1.0);
    out_start + (out_end - out_start) * progress
}

/// Share of an element's height that lies inside the viewport.
pub fn visible_fraction(top: f64, bottom: f64, viewport_height: f64) -> f64 {
    let height = bottom - top;
    if height <= 0.0 {
        return if top >= 0.0 && top <= viewport_height { 1.0 } else { 0.0 };
    }
    let overlap = bottom.min(viewport_height) - top.max(0.0);
    (overlap / height).clamp(0.0, 1.0)
}

pub fn is_in_view(fraction: f64, amount: f64) -> bool {
    let amount = amount.clamp(0.0, 1.0);
    if amount == 0.0 {
        fraction > 0.0
    } else {
        fraction >= amount
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub size_px: f64,
    pub left_pct: f64,
    pub top_pct: f64,
    pub rise_px: f64,
    pub duration_s: f64,
    pub delay_s: f64,
}

/// Fixed layout so every render places the hero particles identically.
pub fn particles(count: usize) -> Vec<Particle> {
    (0..count)
        .map(|i| {
            let i = i as f64;
            Particle {
                size_px: 5.0 + i * 2.0,
                left_pct: 10.0 + i * 8.0,
                top_pct: 15.0 + i * 7.0,
                rise_px: -50.0 - i * 5.0,
                duration_s: 5.0 + i * 0.5,
                delay_s: i * 0.5,
            }
        })
        .collect()
}

/// Starting pose of an element before it is revealed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Entrance {
    Fade,
    /// Offset in px; positive moves the element down/right before reveal.
    SlideX(f64),
    SlideY(f64),
    Scale(f64),
}

impl Entrance {
    pub fn hidden_transform(&self) -> String {
        match *self {
            Entrance::Fade => "none".to_string(),
            Entrance::SlideX(px) => format!("translateX({}px)", px),
            Entrance::SlideY(px) => format!("translateY({}px)", px),
            Entrance::Scale(factor) => format!("scale({})", factor),
        }
    }
}

/// Inline style for a reveal in either state.
pub fn reveal_style(entrance: Entrance, visible: bool, duration_s: f64, delay_s: f64) -> String {
    let (opacity, transform) = if visible {
        (1.0, "none".to_string())
    } else {
        (0.0, entrance.hidden_transform())
    };
    format!(
        "opacity: {}; transform: {}; transition: opacity {}s ease-out {}s, transform {}s ease-out {}s;",
        opacity, transform, duration_s, delay_s, duration_s, delay_s
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hero_parallax_ranges() {
        // image: [0, 500] -> [0, 100], text: [0, 500] -> [0, -50]
        assert_eq!(transform_range(0.0, (0.0, 500.0), (0.0, 100.0)), 0.0);
        assert_eq!(transform_range(250.0, (0.0, 500.0), (0.0, 100.0)), 50.0);
        assert_eq!(transform_range(500.0, (0.0, 500.0), (0.0, -50.0)), -50.0);
        assert_eq!(transform_range(100.0, (0.0, 500.0), (0.0, -50.0)), -10.0);
    }

    #[test]
    fn transform_range_clamps() {
        assert_eq!(transform_range(-40.0, (0.0, 500.0), (0.0, 100.0)), 0.0);
        assert_eq!(transform_range(2_000.0, (0.0, 500.0), (0.0, 100.0)), 100.0);
        assert_eq!(transform_range(2_000.0, (0.0, 500.0), (0.0, -50.0)), -50.0);
    }

    #[test]
    fn transform_range_zero_width_input() {
        assert_eq!(transform_range(42.0, (10.0, 10.0), (3.0, 7.0)), 3.0);
    }

    #[test]
    fn visible_fraction_partial_overlap() {
        // 400px tall element, top 120px below the fold of an 800px viewport
        assert_eq!(visible_fraction(680.0, 1_080.0, 800.0), 0.3);
        assert_eq!(visible_fraction(-200.0, 200.0, 800.0), 0.5);
        assert_eq!(visible_fraction(100.0, 300.0, 800.0), 1.0);
        assert_eq!(visible_fraction(900.0, 1_300.0, 800.0), 0.0);
        assert_eq!(visible_fraction(-500.0, -100.0, 800.0), 0.0);
    }

    #[test]
    fn element_taller_than_viewport() {
        assert_eq!(visible_fraction(-1_000.0, 3_000.0, 800.0), 0.2);
    }

    #[test]
    fn zero_height_elements() {
        assert_eq!(visible_fraction(10.0, 10.0, 800.0), 1.0);
        assert_eq!(visible_fraction(900.0, 900.0, 800.0), 0.0);
    }

    #[test]
    fn in_view_threshold() {
        assert!(is_in_view(0.3, 0.3));
        assert!(!is_in_view(0.29, 0.3));
        assert!(!is_in_view(0.0, 0.0));
        assert!(is_in_view(0.01, 0.0));
        assert!(is_in_view(1.0, 1.5));
    }

    #[test]
    fn particle_layout() {
        let ps = particles(10);
        assert_eq!(ps.len(), 10);
        assert_eq!(
            ps[0],
            Particle {
                size_px: 5.0,
                left_pct: 10.0,
                top_pct: 15.0,
                rise_px: -50.0,
                duration_s: 5.0,
                delay_s: 0.0,
            }
        );
        let last = &ps[9];
        assert_eq!(last.size_px, 23.0);
        assert_eq!(last.left_pct, 82.0);
        assert_eq!(last.top_pct, 78.0);
        assert_eq!(last.rise_px, -95.0);
        assert_eq!(last.duration_s, 9.5);
        assert_eq!(last.delay_s, 4.5);
    }

    #[test]
    fn reveal_style_states() {
        let hidden = reveal_style(Entrance::SlideY(50.0), false, 0.7, 0.2);
        assert!(hidden.starts_with("opacity: 0; transform: translateY(50px);"));
        assert!(hidden.contains("transition: opacity 0.7s ease-out 0.2s"));

        let shown = reveal_style(Entrance::Scale(0.8), true, 0.5, 0.0);
        assert!(shown.starts_with("opacity: 1; transform: none;"));
    }
}
