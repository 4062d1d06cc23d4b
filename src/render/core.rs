use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use serde_json::Value;

use crate::error::Result;
use crate::geometry::{Rect, Size};
use crate::layout::{LayoutNode, WindowId, arrange};
use crate::logging::{LogLevel, Logger, event_with_fields, json_kv};
use crate::metrics::RenderMetrics;
use crate::screen::Screen;
use crate::style::ColorScheme;

use super::panel::Panel;

/// Renderer parameters.
#[derive(Clone)]
pub struct RendererConfig {
    /// Scheme handed to panels created through [`Renderer::new_panel`].
    pub scheme: ColorScheme,
    pub logger: Option<Logger>,
    pub metrics: Option<Arc<Mutex<RenderMetrics>>>,
    pub log_target: String,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            scheme: ColorScheme::default(),
            logger: None,
            metrics: None,
            log_target: "room::render".to_string(),
        }
    }
}

impl RendererConfig {
    pub fn with_logger(mut self, logger: Logger) -> Self {
        self.logger = Some(logger);
        self
    }

    pub fn with_scheme(mut self, scheme: ColorScheme) -> Self {
        self.scheme = scheme;
        self
    }

    /// Attach a fresh counter set and return a handle to it.
    pub fn enable_metrics(&mut self) -> Arc<Mutex<RenderMetrics>> {
        let metrics = Arc::new(Mutex::new(RenderMetrics::new()));
        self.metrics = Some(metrics.clone());
        metrics
    }

    /// Replace the scheme with one parsed from JSON.
    pub fn load_scheme(&mut self, raw: &str) -> Result<()> {
        self.scheme = ColorScheme::from_json(raw)?;
        Ok(())
    }
}

/// Whole-frame renderer: arranges the layout tree, sizes one panel per
/// window and composites them onto a fresh [`Screen`].
pub struct Renderer {
    size: Size,
    root: Option<LayoutNode>,
    panels: HashMap<WindowId, Panel>,
    focused: Option<WindowId>,
    config: RendererConfig,
}

impl Renderer {
    pub fn new(size: Size) -> Self {
        Self::with_config(size, RendererConfig::default())
    }

    pub fn with_config(size: Size, config: RendererConfig) -> Self {
        Self {
            size,
            root: None,
            panels: HashMap::new(),
            focused: None,
            config,
        }
    }

    pub fn config(&self) -> &RendererConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut RendererConfig {
        &mut self.config
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn resize(&mut self, size: Size) {
        self.size = size;
    }

    pub fn set_layout(&mut self, root: LayoutNode) {
        self.root = Some(root);
    }

    /// Panel with the configured colour scheme, not yet attached.
    pub fn new_panel(&self, title: impl Into<String>) -> Panel {
        let mut panel = Panel::new(title, 0, 0);
        panel.set_scheme(self.config.scheme);
        panel
    }

    /// Attach `panel` to the window named `window`, replacing any previous one.
    pub fn add_panel(&mut self, window: impl Into<WindowId>, panel: Panel) -> Option<Panel> {
        self.panels.insert(window.into(), panel)
    }

    pub fn remove_panel(&mut self, window: &str) -> Option<Panel> {
        self.panels.remove(window)
    }

    pub fn panel(&self, window: &str) -> Option<&Panel> {
        self.panels.get(window)
    }

    pub fn panel_mut(&mut self, window: &str) -> Option<&mut Panel> {
        self.panels.get_mut(window)
    }

    pub fn set_focus(&mut self, window: impl Into<WindowId>) {
        self.focused = Some(window.into());
    }

    pub fn clear_focus(&mut self) {
        self.focused = None;
    }

    pub fn focused(&self) -> Option<&str> {
        self.focused.as_deref()
    }

    /// Window rectangles for the current size.
    pub fn arrange(&self) -> Result<HashMap<WindowId, Rect>> {
        match &self.root {
            Some(root) => arrange(root, Rect::from_size(self.size)),
            None => Ok(HashMap::new()),
        }
    }

    /// Build the next frame. Windows without a panel stay blank.
    pub fn compose(&mut self) -> Result<Screen> {
        let mut screen = Screen::new(usize::from(self.size.width), usize::from(self.size.height));
        if self.root.is_none() || self.size.is_empty() {
            return Ok(screen);
        }

        let rects = match self.arrange() {
            Ok(rects) => rects,
            Err(err) => {
                if let Some(metrics) = &self.config.metrics {
                    if let Ok(mut metrics) = metrics.lock() {
                        metrics.record_failed_arrangement();
                    }
                }
                self.emit(
                    LogLevel::Warn,
                    "arrangement_failed",
                    [json_kv("error", err.to_string())],
                );
                return Err(err);
            }
        };

        let mut ordered: Vec<(WindowId, Rect)> = rects.into_iter().collect();
        ordered.sort_by(|a, b| a.0.cmp(&b.0));

        let mut drawn = 0usize;
        let mut missing = Vec::new();
        for (window, rect) in &ordered {
            let Some(panel) = self.panels.get_mut(window) else {
                missing.push(window.clone());
                continue;
            };
            panel
                .set_size(usize::from(rect.width), usize::from(rect.height))
                .set_focused(self.focused.as_deref() == Some(window.as_str()));
            screen.draw_panel(usize::from(rect.x), usize::from(rect.y), panel);
            drawn += 1;
        }

        for window in &missing {
            self.emit(
                LogLevel::Debug,
                "window_without_panel",
                [json_kv("window", window.as_str())],
            );
        }

        if let Some(metrics) = &self.config.metrics {
            if let Ok(mut metrics) = metrics.lock() {
                metrics.record_frame(drawn, missing.len());
            }
        }

        self.emit(
            LogLevel::Debug,
            "frame_rendered",
            [
                json_kv("width", self.size.width),
                json_kv("height", self.size.height),
                json_kv("windows", ordered.len()),
                json_kv("drawn", drawn),
                json_kv("missing", missing.len()),
            ],
        );

        Ok(screen)
    }

    /// Serialized frame: `height` lines of exactly `width` columns.
    pub fn render(&mut self) -> Result<String> {
        if self.root.is_none() || self.size.is_empty() {
            return Ok(String::new());
        }
        Ok(self.compose()?.render())
    }

    /// Log the current counters, if metrics are enabled.
    pub fn emit_metrics(&self) {
        let (Some(logger), Some(metrics)) = (&self.config.logger, &self.config.metrics) else {
            return;
        };
        let Ok(metrics) = metrics.lock() else {
            return;
        };
        let target = format!("{}.metrics", self.config.log_target);
        let _ = logger.log_event(metrics.snapshot().to_log_event(&target));
    }

    fn emit<const N: usize>(&self, level: LogLevel, message: &str, fields: [(String, Value); N]) {
        let Some(logger) = &self.config.logger else {
            return;
        };
        if !logger.enabled(level) {
            return;
        }
        let target = format!("{}.frame", self.config.log_target);
        let _ = logger.log_event(event_with_fields(level, &target, message, fields));
    }
}
