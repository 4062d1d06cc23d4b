//! Dashboard frame rendered at the current terminal size.
//!
//! Builds a responsive window tree (sidebar collapses under the main area on
//! narrow terminals), attaches a panel per window and prints one frame. Pass a
//! file path as the first argument to capture the render log as JSON lines.

use crossterm::terminal;
use room_compose::logging::{FileSink, LogLevel};
use room_compose::text::wrap_text;
use room_compose::{
    Direction, Flex, LayoutNode, LineTracker, Logger, Renderer, RendererConfig, Size,
};

const HEADER: &str = "dash:header";
const SIDEBAR: &str = "dash:sidebar";
const MAIN: &str = "dash:main";
const STATUS: &str = "dash:status";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let (width, height) = terminal::size().unwrap_or((100, 30));

    let mut config = RendererConfig::default();
    if let Some(path) = std::env::args().nth(1) {
        let logger = Logger::new(FileSink::new(path, 1 << 20)?).with_min_level(LogLevel::Debug);
        config = config.with_logger(logger);
    }
    let metrics = config.enable_metrics();

    let mut renderer = Renderer::with_config(Size::new(width, height), config);
    renderer.set_layout(build_layout());

    let mut header = renderer.new_panel("room_compose");
    header.set_content("layout + compositing demo");
    renderer.add_panel(HEADER, header);

    let mut sidebar = renderer.new_panel("Windows");
    sidebar.set_content_lines([HEADER, SIDEBAR, MAIN, STATUS]);
    renderer.add_panel(SIDEBAR, sidebar);

    let mut main_panel = renderer.new_panel("Overview 日本語 ✨");
    let body = "Each window gets a rectangle from the layout tree, each panel is fitted \
                to it, and the frame is composited line by line without disturbing \
                neighbouring styles.";
    main_panel.set_content_lines(wrap_text(body, usize::from(width / 2)));
    renderer.add_panel(MAIN, main_panel);
    renderer.set_focus(MAIN);

    let frame = renderer.compose()?;
    let mut tracker = LineTracker::new();
    print!("\x1b[2J{}", tracker.patch(&frame));

    let mut status = Flex::row(width, 1);
    status
        .set_gap(1)
        .add_fixed(" NORMAL ", 8)
        .add(format!("{width}x{height}"), 1)
        .add_fixed("q quit", 6);
    println!("\x1b[{};1H{}", height, status.render());

    let snapshot = metrics.lock().map(|m| m.snapshot()).ok();
    renderer.emit_metrics();
    if let Some(snapshot) = snapshot {
        eprintln!(
            "frames={} panels={} missing={}",
            snapshot.frames, snapshot.panels_drawn, snapshot.missing_panels
        );
    }
    Ok(())
}

fn build_layout() -> LayoutNode {
    LayoutNode::column(vec![
        LayoutNode::window(HEADER).fixed(3),
        LayoutNode::responsive(Direction::Row, |width, _height| {
            if width < 60 {
                vec![LayoutNode::window(MAIN)]
            } else {
                vec![LayoutNode::window(SIDEBAR).fixed(24), LayoutNode::window(MAIN)]
            }
        })
        .with_direction_rule(|width, _height| {
            if width < 60 {
                Direction::Column
            } else {
                Direction::Row
            }
        }),
        LayoutNode::window(STATUS).fixed(1),
    ])
}
