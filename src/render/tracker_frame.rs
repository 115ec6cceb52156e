use crate::core::{SeriesId, Viewport};
use crate::error::{TrackerError, TrackerResult};
use crate::render::{LinePrimitive, RectPrimitive, TextPrimitive};

/// Marks drawn for one shown tracker.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackerMarks {
    pub series: SeriesId,
    /// Vertical line through the hit, drawn bottom to top.
    pub reference_line: LinePrimitive,
    pub marker: RectPrimitive,
    /// Absent when the hit has no label text.
    pub label: Option<TextPrimitive>,
}

impl TrackerMarks {
    pub fn validate(&self) -> TrackerResult<()> {
        self.reference_line.validate()?;
        if self.reference_line.x1 != self.reference_line.x2 {
            return Err(TrackerError::InvalidData(
                "tracker reference line must be vertical".to_owned(),
            ));
        }
        self.marker.validate()?;
        if let Some(label) = &self.label {
            label.validate()?;
        }
        Ok(())
    }
}

/// Tracker overlay state for one draw pass: hidden, or shown with its marks.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackerFrame {
    pub viewport: Viewport,
    pub marks: Option<TrackerMarks>,
}

impl TrackerFrame {
    #[must_use]
    pub fn hidden(viewport: Viewport) -> Self {
        Self {
            viewport,
            marks: None,
        }
    }

    #[must_use]
    pub fn shown(viewport: Viewport, marks: TrackerMarks) -> Self {
        Self {
            viewport,
            marks: Some(marks),
        }
    }

    #[must_use]
    pub fn is_hidden(&self) -> bool {
        self.marks.is_none()
    }

    #[must_use]
    pub fn label_text(&self) -> Option<&str> {
        self.marks
            .as_ref()
            .and_then(|marks| marks.label.as_ref())
            .map(|label| label.text.as_str())
    }

    pub fn validate(&self) -> TrackerResult<()> {
        if !self.viewport.is_valid() {
            return Err(TrackerError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }
        match &self.marks {
            Some(marks) => marks.validate(),
            None => Ok(()),
        }
    }
}
