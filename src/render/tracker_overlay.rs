use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::api::PlotView;
use crate::core::{TrackerHitResult, Viewport};
use crate::error::{TrackerError, TrackerResult};
use crate::render::{
    Color, LinePrimitive, RectPrimitive, Renderer, TextHAlign, TextPrimitive, TrackerFrame,
    TrackerMarks,
};

/// Visual parameters of the tracker overlay.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrackerOverlayStyle {
    #[serde(default = "default_line_color")]
    pub line_color: Color,
    #[serde(default = "default_line_width")]
    pub line_width: f64,
    #[serde(default = "default_marker_color")]
    pub marker_color: Color,
    #[serde(default = "default_marker_size")]
    pub marker_size_px: f64,
    #[serde(default = "default_label_color")]
    pub label_color: Color,
    #[serde(default = "default_label_font_size")]
    pub label_font_size_px: f64,
    #[serde(default = "default_label_offset")]
    pub label_offset_px: f64,
}

impl Default for TrackerOverlayStyle {
    fn default() -> Self {
        Self {
            line_color: default_line_color(),
            line_width: default_line_width(),
            marker_color: default_marker_color(),
            marker_size_px: default_marker_size(),
            label_color: default_label_color(),
            label_font_size_px: default_label_font_size(),
            label_offset_px: default_label_offset(),
        }
    }
}

impl TrackerOverlayStyle {
    #[must_use]
    pub fn with_line(mut self, color: Color, width: f64) -> Self {
        self.line_color = color;
        self.line_width = width;
        self
    }

    #[must_use]
    pub fn with_marker(mut self, color: Color, size_px: f64) -> Self {
        self.marker_color = color;
        self.marker_size_px = size_px;
        self
    }

    #[must_use]
    pub fn with_label_font_size(mut self, font_size_px: f64) -> Self {
        self.label_font_size_px = font_size_px;
        self
    }

    pub fn validate(self) -> TrackerResult<Self> {
        for (name, value) in [
            ("line_width", self.line_width),
            ("marker_size_px", self.marker_size_px),
            ("label_font_size_px", self.label_font_size_px),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(TrackerError::InvalidData(format!(
                    "tracker overlay `{name}` must be finite and > 0"
                )));
            }
        }
        if !self.label_offset_px.is_finite() {
            return Err(TrackerError::InvalidData(
                "tracker overlay `label_offset_px` must be finite".to_owned(),
            ));
        }
        self.line_color.validate()?;
        self.marker_color.validate()?;
        self.label_color.validate()?;
        Ok(self)
    }
}

fn default_line_color() -> Color {
    Color::BLACK
}

fn default_line_width() -> f64 {
    2.0
}

fn default_marker_color() -> Color {
    Color::rgb(0.13, 0.4, 0.8)
}

fn default_marker_size() -> f64 {
    8.0
}

fn default_label_color() -> Color {
    Color::BLACK
}

fn default_label_font_size() -> f64 {
    12.0
}

fn default_label_offset() -> f64 {
    8.0
}

/// View that paints the tracker on top of a plot.
///
/// Keeps the last shown hit and a visibility flag; each show/hide counts as
/// one invalidation of the overlay (plot data is never reloaded).
#[derive(Debug)]
pub struct TrackerOverlay<R: Renderer> {
    renderer: R,
    viewport: Viewport,
    style: TrackerOverlayStyle,
    last_hit: Option<TrackerHitResult>,
    visible: bool,
    invalidations: usize,
}

impl<R: Renderer> TrackerOverlay<R> {
    pub fn new(renderer: R, viewport: Viewport) -> TrackerResult<Self> {
        if !viewport.is_valid() {
            return Err(TrackerError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        Ok(Self {
            renderer,
            viewport,
            style: TrackerOverlayStyle::default(),
            last_hit: None,
            visible: false,
            invalidations: 0,
        })
    }

    pub fn with_style(mut self, style: TrackerOverlayStyle) -> TrackerResult<Self> {
        self.style = style.validate()?;
        Ok(self)
    }

    #[must_use]
    pub fn style(&self) -> TrackerOverlayStyle {
        self.style
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn is_tracker_visible(&self) -> bool {
        self.visible
    }

    /// Last hit passed to `show_tracker`, kept after the tracker is hidden.
    #[must_use]
    pub fn last_hit(&self) -> Option<&TrackerHitResult> {
        self.last_hit.as_ref()
    }

    #[must_use]
    pub fn invalidation_count(&self) -> usize {
        self.invalidations
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn into_renderer(self) -> R {
        self.renderer
    }

    /// Materializes the overlay. A hidden tracker yields a hidden frame.
    pub fn build_frame(&self) -> TrackerResult<TrackerFrame> {
        let Some(hit) = self.last_hit.as_ref().filter(|_| self.visible) else {
            return Ok(TrackerFrame::hidden(self.viewport));
        };

        let position = hit.position();
        let (top, bottom) = match hit.plot_context() {
            Some(context) => (
                context.plot_and_axis_area.top,
                context.plot_and_axis_area.bottom(),
            ),
            None => (0.0, f64::from(self.viewport.height)),
        };

        let style = self.style;
        let label = (!hit.text().is_empty()).then(|| {
            let label_on_left = position.x > f64::from(self.viewport.width) / 2.0;
            let (x, h_align) = if label_on_left {
                (position.x - style.label_offset_px, TextHAlign::Right)
            } else {
                (position.x + style.label_offset_px, TextHAlign::Left)
            };
            TextPrimitive::new(
                hit.text(),
                x,
                (position.y - style.label_offset_px).max(0.0),
                style.label_font_size_px,
                style.label_color,
                h_align,
            )
        });

        let frame = TrackerFrame::shown(
            self.viewport,
            TrackerMarks {
                series: hit.series_id(),
                reference_line: LinePrimitive::new(
                    position.x,
                    bottom,
                    position.x,
                    top,
                    style.line_width,
                    style.line_color,
                ),
                marker: RectPrimitive::centered(
                    position.x,
                    position.y,
                    style.marker_size_px,
                    style.marker_color,
                ),
                label,
            },
        );
        frame.validate()?;
        Ok(frame)
    }

    pub fn render(&mut self) -> TrackerResult<()> {
        let frame = self.build_frame()?;
        self.renderer.render(&frame)
    }

    fn invalidate(&mut self) {
        self.invalidations += 1;
    }
}

impl<R: Renderer> PlotView for TrackerOverlay<R> {
    fn show_tracker(&mut self, hit: &TrackerHitResult) {
        debug!(
            series = hit.series_id().get(),
            x = hit.position().x,
            y = hit.position().y,
            index = hit.index(),
            "show tracker"
        );
        self.last_hit = Some(hit.clone());
        self.visible = true;
        self.invalidate();
    }

    fn hide_tracker(&mut self) {
        if self.visible {
            debug!("hide tracker");
        }
        self.visible = false;
        self.invalidate();
    }
}
