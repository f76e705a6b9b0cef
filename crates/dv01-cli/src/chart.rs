//! SVG line chart of a sampled zero curve.
//!
//! Tenor in years runs along the x axis, yield in percent up the y axis.
//! Both axes get gridlines at round tick values.

use std::fmt::{self, Write};

use dv01_curves::prelude::{CurvePoint, CurveSample};

/// Chart title.
pub const TITLE: &str = "Zero-Coupon Yield Curve";
/// Horizontal axis label.
pub const X_LABEL: &str = "Tenor (Years)";
/// Vertical axis label.
pub const Y_LABEL: &str = "Yield (%)";

const WIDTH: f64 = 800.0;
const HEIGHT: f64 = 500.0;
const MARGIN_LEFT: f64 = 80.0;
const MARGIN_RIGHT: f64 = 30.0;
const MARGIN_TOP: f64 = 50.0;
const MARGIN_BOTTOM: f64 = 60.0;
const TARGET_TICKS: usize = 6;

/// Linear map from data coordinates to the plot area.
#[derive(Debug, Clone, Copy)]
struct Axis {
    min: f64,
    max: f64,
    from_px: f64,
    to_px: f64,
}

impl Axis {
    fn map(&self, v: f64) -> f64 {
        let span = self.max - self.min;
        if span == 0.0 {
            return (self.from_px + self.to_px) / 2.0;
        }
        self.from_px + (v - self.min) / span * (self.to_px - self.from_px)
    }
}

/// Rounds `raw` up to 1, 2 or 5 times a power of ten.
fn nice_step(raw: f64) -> f64 {
    if !raw.is_finite() || raw <= 0.0 {
        return 1.0;
    }
    let magnitude = 10f64.powf(raw.log10().floor());
    let fraction = raw / magnitude;
    let nice = if fraction <= 1.0 {
        1.0
    } else if fraction <= 2.0 {
        2.0
    } else if fraction <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * magnitude
}

/// Tick values covering `[min, max]` at a round step.
fn ticks(min: f64, max: f64) -> Vec<f64> {
    let step = nice_step((max - min) / TARGET_TICKS as f64);
    let first = (min / step).ceil() * step;
    let mut out = Vec::new();
    let mut k = 0.0;
    loop {
        let v = first + k * step;
        if v > max + step * 1e-9 {
            break;
        }
        out.push(v);
        k += 1.0;
    }
    out
}

fn decimals_for(step: f64) -> usize {
    if step >= 1.0 {
        0
    } else {
        (-step.log10().floor()) as usize
    }
}

/// Renders the sampled curve, with markers on the input pillars.
pub fn render_svg(samples: &[CurveSample], pillars: &[CurvePoint]) -> Result<String, fmt::Error> {
    let x_min = samples.iter().map(|s| s.tenor).fold(f64::INFINITY, f64::min);
    let x_max = samples.iter().map(|s| s.tenor).fold(f64::NEG_INFINITY, f64::max);

    let rates = samples
        .iter()
        .map(|s| s.zero_rate)
        .chain(pillars.iter().map(|p| p.zero_rate))
        .map(|r| r * 100.0);
    let (lo, hi) = rates.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), r| {
        (lo.min(r), hi.max(r))
    });
    let pad = ((hi - lo) * 0.05).max(0.01);
    let (y_min, y_max) = (lo - pad, hi + pad);

    let x_axis = Axis {
        min: x_min,
        max: x_max,
        from_px: MARGIN_LEFT,
        to_px: WIDTH - MARGIN_RIGHT,
    };
    let y_axis = Axis {
        min: y_min,
        max: y_max,
        from_px: HEIGHT - MARGIN_BOTTOM,
        to_px: MARGIN_TOP,
    };

    let mut svg = String::new();
    writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{WIDTH}" height="{HEIGHT}" viewBox="0 0 {WIDTH} {HEIGHT}" font-family="sans-serif">"#
    )?;
    writeln!(svg, r#"<rect width="100%" height="100%" fill="white"/>"#)?;
    writeln!(
        svg,
        r#"<text x="{:.1}" y="30" text-anchor="middle" font-size="18">{TITLE}</text>"#,
        WIDTH / 2.0
    )?;

    // Grid and tick labels
    writeln!(svg, r##"<g stroke="#dddddd" stroke-width="1">"##)?;
    let x_ticks = ticks(x_min, x_max);
    let y_ticks = ticks(y_min, y_max);
    for &t in &x_ticks {
        let px = x_axis.map(t);
        writeln!(
            svg,
            r#"<line x1="{px:.1}" y1="{:.1}" x2="{px:.1}" y2="{:.1}"/>"#,
            y_axis.from_px, y_axis.to_px
        )?;
    }
    for &v in &y_ticks {
        let py = y_axis.map(v);
        writeln!(
            svg,
            r#"<line x1="{:.1}" y1="{py:.1}" x2="{:.1}" y2="{py:.1}"/>"#,
            x_axis.from_px, x_axis.to_px
        )?;
    }
    writeln!(svg, "</g>")?;

    writeln!(svg, r##"<g font-size="12" fill="#333333">"##)?;
    let x_dp = decimals_for(nice_step((x_max - x_min) / TARGET_TICKS as f64));
    for &t in &x_ticks {
        writeln!(
            svg,
            r#"<text x="{:.1}" y="{:.1}" text-anchor="middle">{t:.x_dp$}</text>"#,
            x_axis.map(t),
            y_axis.from_px + 18.0
        )?;
    }
    let y_dp = decimals_for(nice_step((y_max - y_min) / TARGET_TICKS as f64));
    for &v in &y_ticks {
        writeln!(
            svg,
            r#"<text x="{:.1}" y="{:.1}" text-anchor="end">{v:.y_dp$}</text>"#,
            x_axis.from_px - 8.0,
            y_axis.map(v) + 4.0
        )?;
    }
    writeln!(svg, "</g>")?;

    // Axes
    writeln!(
        svg,
        r#"<path d="M{:.1},{:.1} V{:.1} H{:.1}" fill="none" stroke="black" stroke-width="1"/>"#,
        x_axis.from_px, y_axis.to_px, y_axis.from_px, x_axis.to_px
    )?;
    writeln!(
        svg,
        r#"<text x="{:.1}" y="{:.1}" text-anchor="middle" font-size="14">{X_LABEL}</text>"#,
        (x_axis.from_px + x_axis.to_px) / 2.0,
        HEIGHT - 15.0
    )?;
    let y_mid = (y_axis.from_px + y_axis.to_px) / 2.0;
    writeln!(
        svg,
        r#"<text x="20" y="{y_mid:.1}" text-anchor="middle" font-size="14" transform="rotate(-90 20 {y_mid:.1})">{Y_LABEL}</text>"#
    )?;

    // Curve
    let mut points = String::new();
    for (i, s) in samples.iter().enumerate() {
        if i > 0 {
            points.push(' ');
        }
        write!(
            points,
            "{:.2},{:.2}",
            x_axis.map(s.tenor),
            y_axis.map(s.zero_rate * 100.0)
        )?;
    }
    writeln!(
        svg,
        r##"<polyline fill="none" stroke="#1f77b4" stroke-width="2" points="{points}"/>"##
    )?;

    // Pillars
    writeln!(svg, r##"<g fill="#1f77b4">"##)?;
    for p in pillars {
        writeln!(
            svg,
            r#"<circle cx="{:.2}" cy="{:.2}" r="3"><title>{}Y: {:.3}%</title></circle>"#,
            x_axis.map(p.tenor),
            y_axis.map(p.zero_rate * 100.0),
            p.tenor,
            p.zero_rate * 100.0
        )?;
    }
    writeln!(svg, "</g>")?;

    writeln!(svg, "</svg>")?;
    Ok(svg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use dv01_curves::CurveBuilder;

    fn sample_curve(n: usize) -> (Vec<CurveSample>, Vec<CurvePoint>) {
        let curve = CurveBuilder::new()
            .add_percent(0.5, 5.0)
            .add_percent(1.0, 5.1)
            .add_percent(2.0, 5.2)
            .add_percent(3.0, 5.3)
            .add_percent(5.0, 5.5)
            .add_percent(7.0, 5.6)
            .add_percent(10.0, 5.7)
            .build()
            .unwrap();
        (curve.sample(n).unwrap(), curve.points().to_vec())
    }

    #[test]
    fn test_nice_step() {
        for (raw, expected) in [(1.583, 2.0), (0.13, 0.2), (0.04, 0.05), (7.0, 10.0), (0.0, 1.0)] {
            assert!((nice_step(raw) - expected).abs() < 1e-12, "nice_step({raw})");
        }
    }

    #[test]
    fn test_ticks_cover_range() {
        let t = ticks(0.5, 10.0);
        assert_eq!(t, vec![2.0, 4.0, 6.0, 8.0, 10.0]);
    }

    #[test]
    fn test_render_contains_labels_and_all_samples() {
        let (samples, pillars) = sample_curve(100);
        let svg = render_svg(&samples, &pillars).unwrap();

        assert!(svg.starts_with("<svg"));
        assert!(svg.trim_end().ends_with("</svg>"));
        assert!(svg.contains(TITLE));
        assert!(svg.contains(X_LABEL));
        assert!(svg.contains(Y_LABEL));
        assert_eq!(svg.matches("<circle").count(), 7);

        let polyline = svg
            .lines()
            .find(|l| l.starts_with("<polyline"))
            .unwrap();
        let points = polyline.split("points=\"").nth(1).unwrap();
        assert_eq!(points.split(' ').count(), 100);
    }

    #[test]
    fn test_curve_spans_plot_area() {
        let (samples, pillars) = sample_curve(10);
        let svg = render_svg(&samples, &pillars).unwrap();

        let polyline = svg
            .lines()
            .find(|l| l.starts_with("<polyline"))
            .unwrap();
        let coords: Vec<&str> = polyline
            .split("points=\"")
            .nth(1)
            .unwrap()
            .trim_end_matches("\"/>")
            .split(' ')
            .collect();

        assert!(coords[0].starts_with("80.00,"));
        assert!(coords[9].starts_with("770.00,"));
    }
}
