use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::error::{LayoutError, Result};
use crate::geometry::{Rect, Size};

/// Axis along which a container stacks its children.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Children placed left to right; sizes apply to width.
    Row,
    /// Children placed top to bottom; sizes apply to height.
    Column,
}

/// How much of the parent's primary axis a node claims.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sizing {
    /// Exact cell count, clamped to whatever space is still unreserved.
    Fixed(u16),
    /// Share of the space left after fixed siblings. Zero counts as one.
    Weight(u16),
}

impl Default for Sizing {
    fn default() -> Self {
        Sizing::Weight(1)
    }
}

impl Sizing {
    fn weight(self) -> u32 {
        match self {
            Sizing::Fixed(_) => 0,
            Sizing::Weight(weight) => u32::from(weight.max(1)),
        }
    }
}

/// Name of the render target a leaf occupies.
pub type WindowId = String;

pub type ChildSelector = Arc<dyn Fn(u16, u16) -> Vec<LayoutNode> + Send + Sync>;
pub type DirectionSelector = Arc<dyn Fn(u16, u16) -> Direction + Send + Sync>;

/// Children of a container, fixed up front or chosen from the available size.
#[derive(Clone)]
pub enum Children {
    Static(Vec<LayoutNode>),
    Responsive(ChildSelector),
}

impl Children {
    fn resolve(&self, width: u16, height: u16) -> Cow<'_, [LayoutNode]> {
        match self {
            Children::Static(children) => Cow::Borrowed(children.as_slice()),
            Children::Responsive(select) => Cow::Owned(select(width, height)),
        }
    }
}

impl fmt::Debug for Children {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Children::Static(children) => f.debug_tuple("Static").field(children).finish(),
            Children::Responsive(_) => f.write_str("Responsive(..)"),
        }
    }
}

/// Stacking direction of a container, fixed or chosen from the available size.
#[derive(Clone)]
pub enum DirectionRule {
    Static(Direction),
    Responsive(DirectionSelector),
}

impl DirectionRule {
    fn resolve(&self, width: u16, height: u16) -> Direction {
        match self {
            DirectionRule::Static(direction) => *direction,
            DirectionRule::Responsive(select) => select(width, height),
        }
    }
}

impl fmt::Debug for DirectionRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DirectionRule::Static(direction) => f.debug_tuple("Static").field(direction).finish(),
            DirectionRule::Responsive(_) => f.write_str("Responsive(..)"),
        }
    }
}

#[derive(Debug, Clone)]
pub enum NodeKind {
    Window(WindowId),
    Split {
        direction: DirectionRule,
        children: Children,
    },
}

/// Layout node representation (container or leaf).
#[derive(Debug, Clone)]
pub struct LayoutNode {
    pub kind: NodeKind,
    pub sizing: Sizing,
}

impl LayoutNode {
    pub fn window(id: impl Into<WindowId>) -> Self {
        Self {
            kind: NodeKind::Window(id.into()),
            sizing: Sizing::default(),
        }
    }

    pub fn container(direction: Direction, children: Vec<LayoutNode>) -> Self {
        Self {
            kind: NodeKind::Split {
                direction: DirectionRule::Static(direction),
                children: Children::Static(children),
            },
            sizing: Sizing::default(),
        }
    }

    pub fn row(children: Vec<LayoutNode>) -> Self {
        Self::container(Direction::Row, children)
    }

    pub fn column(children: Vec<LayoutNode>) -> Self {
        Self::container(Direction::Column, children)
    }

    /// Container whose children are picked from the size it is given, e.g. to
    /// drop a sidebar on narrow terminals.
    pub fn responsive<F>(direction: Direction, select: F) -> Self
    where
        F: Fn(u16, u16) -> Vec<LayoutNode> + Send + Sync + 'static,
    {
        Self {
            kind: NodeKind::Split {
                direction: DirectionRule::Static(direction),
                children: Children::Responsive(Arc::new(select)),
            },
            sizing: Sizing::default(),
        }
    }

    /// Replace a container's direction with one computed from its size.
    /// Has no effect on leaves.
    pub fn with_direction_rule<F>(mut self, select: F) -> Self
    where
        F: Fn(u16, u16) -> Direction + Send + Sync + 'static,
    {
        if let NodeKind::Split { direction, .. } = &mut self.kind {
            *direction = DirectionRule::Responsive(Arc::new(select));
        }
        self
    }

    pub fn fixed(mut self, size: u16) -> Self {
        self.sizing = Sizing::Fixed(size);
        self
    }

    pub fn weight(mut self, weight: u16) -> Self {
        self.sizing = Sizing::Weight(weight);
        self
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self.kind, NodeKind::Window(_))
    }
}

/// Split `available` cells between siblings.
///
/// Fixed entries are served first, in order, each clamped to what is still
/// unreserved. The rest is shared by weight; the division remainder is handed
/// out front to back, each weighted entry taking at most its own weight, so
/// the sizes add up to `available` whenever any weighted entry exists.
pub fn calc_sizes(sizings: &[Sizing], available: u16) -> Vec<u16> {
    let mut sizes = vec![0u16; sizings.len()];
    let mut reserved: u16 = 0;
    let mut total_weight: u32 = 0;

    for (slot, sizing) in sizes.iter_mut().zip(sizings) {
        match *sizing {
            Sizing::Fixed(size) => {
                let granted = size.min(available - reserved);
                *slot = granted;
                reserved += granted;
            }
            weighted => total_weight += weighted.weight(),
        }
    }

    let remaining = u32::from(available - reserved);
    if total_weight == 0 || remaining == 0 {
        return sizes;
    }

    let unit = remaining / total_weight;
    let mut extra = remaining % total_weight;
    for (slot, sizing) in sizes.iter_mut().zip(sizings) {
        let weight = sizing.weight();
        if weight == 0 {
            continue;
        }
        let bonus = weight.min(extra);
        extra -= bonus;
        // unit * weight + bonus never exceeds `remaining`, which fits in u16.
        *slot = (unit * weight + bonus) as u16;
    }

    sizes
}

/// Resolve `root` inside `area`, returning the rectangle of every window.
///
/// Children whose share rounds to zero are skipped and produce no entry.
/// A window name used twice is rejected.
pub fn arrange(root: &LayoutNode, area: Rect) -> Result<HashMap<WindowId, Rect>> {
    let mut rects = HashMap::new();
    arrange_node(root, area, &mut rects)?;
    Ok(rects)
}

fn arrange_node(node: &LayoutNode, area: Rect, accum: &mut HashMap<WindowId, Rect>) -> Result<()> {
    let (direction, children) = match &node.kind {
        NodeKind::Window(id) => {
            if accum.insert(id.clone(), area).is_some() {
                return Err(LayoutError::DuplicateWindow(id.clone()));
            }
            return Ok(());
        }
        NodeKind::Split {
            direction,
            children,
        } => (
            direction.resolve(area.width, area.height),
            children.resolve(area.width, area.height),
        ),
    };

    if children.is_empty() {
        return Ok(());
    }

    let available = match direction {
        Direction::Row => area.width,
        Direction::Column => area.height,
    };
    let sizings: Vec<Sizing> = children.iter().map(|child| child.sizing).collect();
    let sizes = calc_sizes(&sizings, available);

    let mut offset: u16 = 0;
    for (child, span) in children.iter().zip(sizes) {
        if span == 0 {
            continue;
        }
        let child_area = match direction {
            Direction::Row => Rect::new(area.x + offset, area.y, span, area.height),
            Direction::Column => Rect::new(area.x, area.y + offset, area.width, span),
        };
        arrange_node(child, child_area, accum)?;
        offset += span;
    }

    Ok(())
}

/// Layout tree rooted at the terminal origin.
#[derive(Debug, Clone)]
pub struct LayoutTree {
    pub root: LayoutNode,
}

impl LayoutTree {
    pub fn new(root: LayoutNode) -> Self {
        Self { root }
    }

    /// Solve the tree for a terminal of `size`, returning rects keyed by window.
    pub fn solve(&self, size: Size) -> Result<HashMap<WindowId, Rect>> {
        arrange(&self.root, Rect::from_size(size))
    }
}
