use log::debug;

use crate::entities::packer::Context;
use crate::geometry::{Position, Scalar, Size};
use crate::util::assertions;

/// Child index meaning "no child on this side".
pub(crate) const NO_CHILD: u32 = 0;
/// Child index meaning "free"; a node carrying it in both slots is a free
/// region available for placement.
pub(crate) const FREE: u32 = 1;

/// A sub-region of a [`Page`], linked to its children by indices into the
/// page's node vector.
///
/// The two sentinel values collapse three states into the index fields
/// without a separate tag: both slots `FREE` marks a free region, `NO_CHILD`
/// marks an exhausted side of an occupied region. Index 0 doubles as the
/// pre-first-insert root, which is safe: once the first rectangle claims it,
/// index 0 is only ever reached as a deliberately occupied child.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Node<G> {
    pub size: Size<G>,
    pub right: u32,
    pub bottom: u32,
}

impl<G: Scalar> Node<G> {
    fn free(size: Size<G>) -> Self {
        Node {
            size,
            right: FREE,
            bottom: FREE,
        }
    }

    fn occupied(size: Size<G>) -> Self {
        Node {
            size,
            right: NO_CHILD,
            bottom: NO_CHILD,
        }
    }

    pub fn is_free(&self) -> bool {
        self.right == FREE && self.bottom == FREE
    }
}

/// Saved traversal state: a node still to be visited and the absolute
/// position of its top-left corner.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Frame<G> {
    pub node: u32,
    pub pos: Position<G>,
}

/// A single growable packing region.
///
/// The region is described by a binary tree of occupied and free
/// sub-regions, stored as an append-only vector of index-linked [`Node`]s.
/// Nodes are never removed; the root index moves when the occupied envelope
/// grows.
#[derive(Clone, Debug)]
pub struct Page<G> {
    pub(crate) nodes: Vec<Node<G>>,
    pub(crate) root: u32,
}

impl<G: Scalar> Default for Page<G> {
    fn default() -> Self {
        // a zero-sized free root marks the pre-first-insert state
        Page {
            nodes: vec![Node::free(Size::new(G::default(), G::default()))],
            root: 0,
        }
    }
}

impl<G: Scalar> Page<G> {
    /// Current outer size: the occupied envelope plus padding on all sides.
    pub(crate) fn outer_size(&self, ctx: &Context<G>) -> Size<G> {
        let root = &self.nodes[self.root as usize];
        Size::new(root.size.w + ctx.padding.x(), root.size.h + ctx.padding.y())
    }

    /// Attempt to place `rect` on this page, returning the position of its
    /// top-left corner in outer page coordinates.
    ///
    /// On `None` the page is left untouched and the caller moves on to the
    /// next one. `rect` must already be validated against `ctx.max_size`.
    pub(crate) fn insert(&mut self, ctx: &mut Context<G>, rect: Size<G>) -> Option<Position<G>> {
        let zero = G::default();
        debug_assert!(zero < rect.w && rect.w <= ctx.max_size.w);
        debug_assert!(zero < rect.h && rect.h <= ctx.max_size.h);

        // A page that never accepted a rectangle holds a single zero-sized
        // free root: claim it outright.
        if self.nodes[0].size.w == zero {
            debug_assert!(self.nodes.len() == 1);
            self.nodes[0] = Node::occupied(rect);
            return Some(Position::new(ctx.padding.left, ctx.padding.top));
        }

        let pos = self
            .try_insert(ctx, rect)
            .or_else(|| self.try_grow(ctx, rect));
        debug_assert!(assertions::page_tree_consistent(self));
        pos
    }

    /// Place `rect` into the existing envelope, if some free node fits it.
    fn try_insert(&mut self, ctx: &mut Context<G>, rect: Size<G>) -> Option<Position<G>> {
        let (node, pos) = self.find_node(ctx, rect)?;
        self.subdivide(ctx, node, rect);
        Some(pos)
    }

    /// In-order search for a free node that fits `rect`, tracking the
    /// absolute position of every visited region.
    ///
    /// Right subtrees are searched before bottom subtrees; pending bottom
    /// branches wait on the context's traversal stack. The stack is empty on
    /// entry and on exit, whether or not a node is found.
    fn find_node(&self, ctx: &mut Context<G>, rect: Size<G>) -> Option<(u32, Position<G>)> {
        debug_assert!(ctx.stack.is_empty());

        let mut pos = Position::new(ctx.padding.left, ctx.padding.top);
        let mut idx = self.root;

        loop {
            let node = &self.nodes[idx as usize];

            if rect.w <= node.size.w && rect.h <= node.size.h {
                if node.is_free() {
                    ctx.stack.clear();
                    return Some((idx, pos));
                } else if node.right != NO_CHILD {
                    if node.bottom != NO_CHILD {
                        let bottom = &self.nodes[node.bottom as usize];
                        ctx.stack.push(Frame {
                            node: node.bottom,
                            pos: Position::new(pos.x, pos.y + node.size.h - bottom.size.h),
                        });
                    }
                    pos.x = pos.x + node.size.w - self.nodes[node.right as usize].size.w;
                    idx = node.right;
                    continue;
                } else if node.bottom != NO_CHILD {
                    pos.y = pos.y + node.size.h - self.nodes[node.bottom as usize].size.h;
                    idx = node.bottom;
                    continue;
                }
            }

            let frame = ctx.stack.pop()?;
            idx = frame.node;
            pos = frame.pos;
        }
    }

    /// Split the free node `idx` after placing `rect` in its top-left
    /// corner. The region is cut along the rect's bottom edge first and its
    /// right edge second; the bottom strip spans the full original width:
    ///
    /// ```text
    ///     +------+-------+
    ///     | rect | right |
    ///     +------+-------+
    ///     |    bottom    |
    ///     +--------------+
    /// ```
    ///
    /// The cut order determines the shape of the free regions later searches
    /// will see. Children are appended in the order `find_node` visits them;
    /// a leftover strip thinner than the spacing is discarded.
    fn subdivide(&mut self, ctx: &Context<G>, idx: u32, rect: Size<G>) {
        debug_assert!((idx as usize) < self.nodes.len());
        debug_assert!(self.nodes[idx as usize].is_free());

        let size = self.nodes[idx as usize].size;
        debug_assert!(rect.w <= size.w && rect.h <= size.h);

        let right_w = size.w - rect.w;
        let right = if right_w > ctx.spacing.x {
            self.alloc(Node::free(Size::new(right_w - ctx.spacing.x, rect.h)))
        } else {
            NO_CHILD
        };
        self.nodes[idx as usize].right = right;

        let bottom_h = size.h - rect.h;
        let bottom = if bottom_h > ctx.spacing.y {
            self.alloc(Node::free(Size::new(size.w, bottom_h - ctx.spacing.y)))
        } else {
            NO_CHILD
        };
        self.nodes[idx as usize].bottom = bottom;
    }

    /// Attempt to enlarge the occupied envelope to make room for `rect`:
    /// down (a new row) when that keeps the envelope at least as wide as it
    /// is tall, otherwise to the right (a new column), always within
    /// `ctx.max_size`.
    ///
    /// A page where only growing down would fit the rectangle, but the
    /// envelope is already taller than wide, does not grow at all: the
    /// rectangle falls through to the next page.
    fn try_grow(&mut self, ctx: &Context<G>, rect: Size<G>) -> Option<Position<G>> {
        debug_assert!((self.root as usize) < self.nodes.len());
        let root_size = self.nodes[self.root as usize].size;

        debug_assert!(root_size.w <= ctx.max_size.w);
        debug_assert!(root_size.h <= ctx.max_size.h);
        let free_w = ctx.max_size.w - root_size.w;
        let free_h = ctx.max_size.h - root_size.h;

        let can_grow_down = free_h >= rect.h && free_h - rect.h >= ctx.spacing.y;
        let must_grow_down = can_grow_down
            && free_w >= ctx.spacing.x
            && root_size.w + ctx.spacing.x >= root_size.h + rect.h + ctx.spacing.y;
        if must_grow_down {
            let pos = Position::new(
                ctx.padding.left,
                ctx.padding.top + root_size.h + ctx.spacing.y,
            );
            self.grow_down(ctx, rect);
            return Some(pos);
        }

        let can_grow_right = free_w >= rect.w && free_w - rect.w >= ctx.spacing.x;
        if can_grow_right {
            let pos = Position::new(
                ctx.padding.left + root_size.w + ctx.spacing.x,
                ctx.padding.top,
            );
            self.grow_right(ctx, rect);
            return Some(pos);
        }

        if can_grow_down {
            // room below, but stacking a row on an envelope this tall was
            // ruled out; count the occurrence and fail the page
            debug!(
                "no grow: {:?} fits below {:?} envelope, growing right impossible",
                rect, root_size
            );
        }
        None
    }

    /// Rewrite the tree with a new root spanning the old envelope plus a
    /// new bottom row of height `rect.h`, `rect` placed at the row's left
    /// edge.
    ///
    /// The old tree is reattached under the new root. If the new row is
    /// wider than the old envelope, a pass-through node exposes the area
    /// right of the old contents as a free region; if `rect` does not fill
    /// the row, the remainder becomes a free region as well.
    fn grow_down(&mut self, ctx: &Context<G>, rect: Size<G>) {
        let old_root = self.root;
        let root_size = self.nodes[old_root as usize].size;

        debug_assert!(root_size.h < ctx.max_size.h);
        debug_assert!(rect.h <= ctx.max_size.h - root_size.h);
        debug_assert!(ctx.spacing.y <= ctx.max_size.h - root_size.h - rect.h);

        let new_root_w = if root_size.w < rect.w {
            rect.w
        } else {
            root_size.w
        };

        let new_root = self.alloc(Node {
            size: Size::new(new_root_w, root_size.h + rect.h + ctx.spacing.y),
            right: old_root,
            bottom: NO_CHILD,
        });

        if root_size.w < new_root_w && new_root_w - root_size.w > ctx.spacing.x {
            let bridge = self.alloc(Node {
                size: Size::new(new_root_w, root_size.h),
                right: NO_CHILD,
                bottom: old_root,
            });
            let sliver = self.alloc(Node::free(Size::new(
                new_root_w - root_size.w - ctx.spacing.x,
                root_size.h,
            )));
            self.nodes[bridge as usize].right = sliver;
            self.nodes[new_root as usize].right = bridge;
        }

        let row = self.alloc(Node::occupied(Size::new(new_root_w, rect.h)));
        self.nodes[new_root as usize].bottom = row;

        if rect.w < new_root_w && new_root_w - rect.w > ctx.spacing.x {
            let spare = self.alloc(Node::free(Size::new(
                new_root_w - rect.w - ctx.spacing.x,
                rect.h,
            )));
            self.nodes[row as usize].right = spare;
        }

        self.root = new_root;
    }

    /// Mirror of [`Page::grow_down`] along the other axis: a new column of
    /// width `rect.w` to the right of the envelope, `rect` placed at the
    /// column's top edge.
    fn grow_right(&mut self, ctx: &Context<G>, rect: Size<G>) {
        let old_root = self.root;
        let root_size = self.nodes[old_root as usize].size;

        debug_assert!(root_size.w < ctx.max_size.w);
        debug_assert!(rect.w <= ctx.max_size.w - root_size.w);
        debug_assert!(ctx.spacing.x <= ctx.max_size.w - root_size.w - rect.w);

        let new_root_h = if root_size.h < rect.h {
            rect.h
        } else {
            root_size.h
        };

        let new_root = self.alloc(Node {
            size: Size::new(root_size.w + rect.w + ctx.spacing.x, new_root_h),
            right: NO_CHILD,
            bottom: old_root,
        });

        if root_size.h < new_root_h && new_root_h - root_size.h > ctx.spacing.y {
            let bridge = self.alloc(Node {
                size: Size::new(root_size.w, new_root_h),
                right: old_root,
                bottom: NO_CHILD,
            });
            let sliver = self.alloc(Node::free(Size::new(
                root_size.w,
                new_root_h - root_size.h - ctx.spacing.y,
            )));
            self.nodes[bridge as usize].bottom = sliver;
            self.nodes[new_root as usize].bottom = bridge;
        }

        let column = self.alloc(Node::occupied(Size::new(rect.w, new_root_h)));
        self.nodes[new_root as usize].right = column;

        if rect.h < new_root_h && new_root_h - rect.h > ctx.spacing.y {
            let spare = self.alloc(Node::free(Size::new(
                rect.w,
                new_root_h - rect.h - ctx.spacing.y,
            )));
            self.nodes[column as usize].bottom = spare;
        }

        self.root = new_root;
    }

    fn alloc(&mut self, node: Node<G>) -> u32 {
        let idx = self.nodes.len() as u32;
        self.nodes.push(node);
        idx
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::entities::packer::Context;
    use crate::geometry::{Padding, Spacing};

    fn ctx(max_w: i32, max_h: i32) -> Context<i32> {
        Context::new(max_w, max_h, Spacing::none(), Padding::none())
    }

    #[test]
    fn first_insert_claims_the_zero_root() {
        let mut ctx = Context::new(20, 20, Spacing::uniform(1), Padding::new(1, 2, 3, 4));
        let mut page = Page::default();

        let pos = page.insert(&mut ctx, Size::new(5, 4)).unwrap();
        assert_eq!(pos, Position::new(3, 1));
        assert_eq!(page.nodes.len(), 1);
        assert!(!page.nodes[0].is_free());
        assert_eq!(page.outer_size(&ctx), Size::new(5 + 7, 4 + 3));
    }

    #[test]
    fn grow_down_reuses_the_spare_right_of_the_new_row() {
        let mut ctx = ctx(10, 10);
        let mut page = Page::default();

        assert_eq!(page.insert(&mut ctx, Size::new(10, 4)), Some(Position::new(0, 0)));

        // envelope is wider than tall, so the second rect opens a new row
        assert_eq!(page.insert(&mut ctx, Size::new(3, 3)), Some(Position::new(0, 4)));
        assert_eq!(page.nodes[page.root as usize].size, Size::new(10, 7));

        // the remainder of that row is a free node the next search finds
        assert_eq!(page.insert(&mut ctx, Size::new(3, 3)), Some(Position::new(3, 4)));
    }

    #[test]
    fn full_page_rejects_without_mutating() {
        let mut ctx = ctx(10, 10);
        let mut page = Page::default();

        assert!(page.insert(&mut ctx, Size::new(10, 10)).is_some());
        let n_nodes = page.nodes.len();

        assert_eq!(page.insert(&mut ctx, Size::new(3, 3)), None);
        assert_eq!(page.nodes.len(), n_nodes);
        assert!(ctx.stack.is_empty());
    }
}
