use serde::{Deserialize, Serialize};

use crate::geometry::Scalar;

/// Width and height of an axis-aligned rectangle
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Size<G> {
    pub w: G,
    pub h: G,
}

impl<G: Scalar> Size<G> {
    pub fn new(w: G, h: G) -> Self {
        Size { w, h }
    }
}

impl<G> From<(G, G)> for Size<G> {
    fn from((w, h): (G, G)) -> Self {
        Size { w, h }
    }
}

impl<G> From<Size<G>> for (G, G) {
    fn from(size: Size<G>) -> Self {
        (size.w, size.h)
    }
}

/// Position of a rectangle's top-left corner within a page
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Position<G> {
    pub x: G,
    pub y: G,
}

impl<G: Scalar> Position<G> {
    pub fn new(x: G, y: G) -> Self {
        Position { x, y }
    }
}

impl<G> From<(G, G)> for Position<G> {
    fn from((x, y): (G, G)) -> Self {
        Position { x, y }
    }
}

impl<G> From<Position<G>> for (G, G) {
    fn from(pos: Position<G>) -> Self {
        (pos.x, pos.y)
    }
}

/// Gap enforced between adjacent rectangles on the same page.
/// Negative values are clamped to zero at packer construction.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Spacing<G> {
    ///Horizontal gap between side-by-side rectangles
    pub x: G,
    ///Vertical gap between stacked rectangles
    pub y: G,
}

impl<G: Scalar> Spacing<G> {
    pub fn new(x: G, y: G) -> Self {
        Spacing { x, y }
    }

    /// The same gap in both dimensions.
    pub fn uniform(spacing: G) -> Self {
        Spacing {
            x: spacing,
            y: spacing,
        }
    }

    /// No gap between rectangles.
    pub fn none() -> Self {
        Spacing::uniform(G::default())
    }
}

/// Gap enforced between rectangles and the edges of their page.
/// Negative values are clamped to zero at packer construction; a padding
/// that exceeds the maximum page size is reduced to fit it.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Padding<G> {
    pub top: G,
    pub bottom: G,
    pub left: G,
    pub right: G,
}

impl<G: Scalar> Padding<G> {
    pub fn new(top: G, bottom: G, left: G, right: G) -> Self {
        Padding {
            top,
            bottom,
            left,
            right,
        }
    }

    /// The same gap on all four sides.
    pub fn uniform(padding: G) -> Self {
        Padding {
            top: padding,
            bottom: padding,
            left: padding,
            right: padding,
        }
    }

    /// No gap to the page edges.
    pub fn none() -> Self {
        Padding::uniform(G::default())
    }

    /// Total horizontal padding
    pub fn x(&self) -> G {
        self.left + self.right
    }

    /// Total vertical padding
    pub fn y(&self) -> G {
        self.top + self.bottom
    }
}
