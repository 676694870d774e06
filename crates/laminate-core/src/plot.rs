// ─────────────────────────────────────────────────────────────────────
// SCPN Laminate Core — Plot Hints
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Axis suggestions handed to the plotting front-end alongside a sweep.
//! Plain numbers only; no rendering backend is assumed.

use serde::Serialize;

use laminate_types::constants::{HIGHLIGHT_LABEL_OFFSET_MM, MAX_Y_TICKS, THICKNESS_TICK_STEP_MM};
use laminate_types::records::{SweepAxis, SweepResult};

use crate::readout::format_thickness;

pub const THICKNESS_LABEL: &str = "Thickness (mm)";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlotHints {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub x_range: (f64, f64),
    /// Starts at 0 and leaves one tick step of headroom above the curve.
    pub y_range: (f64, f64),
    pub y_tick_step: f64,
    /// Explicit x ticks; set for integer axes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x_ticks: Option<Vec<f64>>,
    pub highlight_label: String,
    pub highlight_label_position: (f64, f64),
}

impl PlotHints {
    pub fn for_sweep(sweep: &SweepResult) -> Self {
        let axis = sweep.axis();
        let points = sweep.points();
        let hl = sweep.highlight();

        let first = points[0].x;
        let last = points[points.len() - 1].x;
        let x_range = (first.min(hl.x), last.max(hl.x));

        let y_max = sweep.max_thickness_mm() + THICKNESS_TICK_STEP_MM;

        let (title, x_ticks) = match axis {
            SweepAxis::FiberVolumeFraction => ("Thickness vs fiber volume fraction", None),
            SweepAxis::PlyCount => ("Thickness vs ply count", Some(sweep.xs())),
        };

        PlotHints {
            title: title.to_string(),
            x_label: axis.label().to_string(),
            y_label: THICKNESS_LABEL.to_string(),
            x_range,
            y_range: (0.0, y_max),
            y_tick_step: tick_step_for(y_max, THICKNESS_TICK_STEP_MM),
            x_ticks,
            highlight_label: format_thickness(hl.thickness_mm),
            highlight_label_position: (hl.x, hl.thickness_mm + HIGHLIGHT_LABEL_OFFSET_MM),
        }
    }

    /// `0, step, 2·step, …` strictly below the top of `y_range`, at most
    /// `MAX_Y_TICKS` entries. A step too fine for the range is widened.
    pub fn y_ticks(&self) -> Vec<f64> {
        let (lo, hi) = self.y_range;
        let span = hi - lo;
        let step_ok = self.y_tick_step.is_finite() && self.y_tick_step > 0.0;
        if !step_ok || !span.is_finite() || span <= 0.0 {
            return vec![lo];
        }
        let step = tick_step_for(span, self.y_tick_step);
        let n = ((span / step).ceil() as usize).min(MAX_Y_TICKS);
        (0..n).map(|k| lo + k as f64 * step).collect()
    }
}

/// Smallest whole multiple of `base` that covers `span` in `MAX_Y_TICKS` ticks.
/// Slack on the ratio keeps an already widened step stable.
fn tick_step_for(span: f64, base: f64) -> f64 {
    let ratio = span / base;
    if ratio <= MAX_Y_TICKS as f64 + 1e-6 {
        base
    } else {
        base * (ratio.ceil() / MAX_Y_TICKS as f64).ceil()
    }
}
