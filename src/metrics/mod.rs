use crate::logging::{LogEvent, LogFields, LogLevel};
use serde_json::json;

/// Counters accumulated by a [`Renderer`](crate::render::Renderer).
#[derive(Debug, Default, Clone)]
pub struct RenderMetrics {
    frames: u64,
    panels_drawn: u64,
    missing_panels: u64,
    failed_arrangements: u64,
}

impl RenderMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_frame(&mut self, panels_drawn: usize, missing_panels: usize) {
        self.frames = self.frames.saturating_add(1);
        self.panels_drawn = self.panels_drawn.saturating_add(panels_drawn as u64);
        self.missing_panels = self.missing_panels.saturating_add(missing_panels as u64);
    }

    pub fn record_failed_arrangement(&mut self) {
        self.failed_arrangements = self.failed_arrangements.saturating_add(1);
    }

    pub fn snapshot(&self) -> MetricSnapshot {
        MetricSnapshot {
            frames: self.frames,
            panels_drawn: self.panels_drawn,
            missing_panels: self.missing_panels,
            failed_arrangements: self.failed_arrangements,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetricSnapshot {
    pub frames: u64,
    pub panels_drawn: u64,
    pub missing_panels: u64,
    pub failed_arrangements: u64,
}

impl MetricSnapshot {
    pub fn as_fields(&self) -> LogFields {
        let mut map = LogFields::new();
        map.insert("frames".to_string(), json!(self.frames));
        map.insert("panels_drawn".to_string(), json!(self.panels_drawn));
        map.insert("missing_panels".to_string(), json!(self.missing_panels));
        map.insert(
            "failed_arrangements".to_string(),
            json!(self.failed_arrangements),
        );
        map
    }

    pub fn to_log_event(&self, target: &str) -> LogEvent {
        LogEvent::with_fields(LogLevel::Info, target, "render_metrics", self.as_fields())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_accumulates() {
        let mut metrics = RenderMetrics::new();
        metrics.record_frame(3, 1);
        metrics.record_frame(2, 0);
        metrics.record_failed_arrangement();

        let snapshot = metrics.snapshot();
        assert_eq!(snapshot.frames, 2);
        assert_eq!(snapshot.panels_drawn, 5);
        assert_eq!(snapshot.missing_panels, 1);
        assert_eq!(snapshot.failed_arrangements, 1);

        let event = snapshot.to_log_event("room::render.metrics");
        assert_eq!(event.message, "render_metrics");
        assert_eq!(event.fields["panels_drawn"], json!(5));
    }
}
