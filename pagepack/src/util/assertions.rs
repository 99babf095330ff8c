use itertools::Itertools;

use crate::entities::Page;
use crate::entities::page::{FREE, NO_CHILD};
use crate::geometry::{Padding, Position, Scalar, Size, Spacing};

//Various checks to verify correctness of the state of the packer
//Used in debug_assert!() blocks and tests

/// The root and every child index point inside the node vector, and no node
/// has a negative size.
pub fn page_tree_consistent<G: Scalar>(page: &Page<G>) -> bool {
    let zero = G::default();
    if page.root as usize >= page.nodes.len() {
        return false;
    }
    page.nodes.iter().all(|node| {
        let links_ok = [node.right, node.bottom]
            .into_iter()
            .all(|idx| idx == NO_CHILD || idx == FREE || (idx as usize) < page.nodes.len());
        links_ok && zero <= node.size.w && zero <= node.size.h
    })
}

/// A placed rectangle lies fully within the page's outer size, clear of the
/// padding on all four sides.
pub fn placement_within_page<G: Scalar>(
    pos: Position<G>,
    rect: Size<G>,
    page_size: Size<G>,
    padding: &Padding<G>,
) -> bool {
    padding.left <= pos.x
        && padding.top <= pos.y
        && pos.x + rect.w + padding.right <= page_size.w
        && pos.y + rect.h + padding.bottom <= page_size.h
}

/// Every pair of placements on one page is separated by at least the
/// configured spacing along at least one axis (which implies the rectangles
/// are disjoint).
pub fn placements_respect_spacing<G: Scalar>(
    placements: &[(Position<G>, Size<G>)],
    spacing: &Spacing<G>,
) -> bool {
    placements
        .iter()
        .tuple_combinations()
        .all(|(a, b)| separated(a, b, spacing))
}

fn separated<G: Scalar>(
    (a_pos, a): &(Position<G>, Size<G>),
    (b_pos, b): &(Position<G>, Size<G>),
    spacing: &Spacing<G>,
) -> bool {
    let sep_x = a_pos.x + a.w + spacing.x <= b_pos.x || b_pos.x + b.w + spacing.x <= a_pos.x;
    let sep_y = a_pos.y + a.h + spacing.y <= b_pos.y || b_pos.y + b.h + spacing.y <= a_pos.y;
    sep_x || sep_y
}
