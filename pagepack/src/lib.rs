//! Multi-page rectangle packing.
//!
//! A [`RectPacker`](entities::RectPacker) receives a stream of axis-aligned
//! rectangles and assigns each one a page index and a position within that
//! page. Placed rectangles never overlap, keep a configured spacing between
//! each other and a configured padding to the page edges, and every page
//! stays within a configured maximum size. Pages start empty and grow on
//! demand; a rectangle that fits on no existing page opens a new one.

/// Entities modelling the packing process: pages and the packer itself
pub mod entities;

/// Geometric primitives and the numeric contract they are generic over
pub mod geometry;

/// Helper functions which do not belong to any specific module
pub mod util;
