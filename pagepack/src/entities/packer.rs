use std::fmt::{Display, Formatter};

use crate::entities::page::{Frame, Page};
use crate::geometry::{Padding, Position, Scalar, Size, Spacing};
use crate::util::config::PackerConfig;

/// Where a successfully inserted rectangle ended up.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement<G> {
    /// Position of the rectangle's top-left corner within its page
    pub pos: Position<G>,
    /// Index of the page the rectangle was placed on
    pub page_index: usize,
}

/// Ways [`RectPacker::insert`] can reject a rectangle.
///
/// Rejection leaves the packer untouched.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InsertError {
    /// Width and/or height is negative.
    NegativeSize,
    /// Width and/or height is zero.
    ZeroSize,
    /// Width and/or height exceeds the usable page area, i.e. the maximum
    /// page size minus the padding. No page will ever hold this rectangle.
    RectTooBig,
}

impl Display for InsertError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            InsertError::NegativeSize => write!(f, "width and/or height is negative"),
            InsertError::ZeroSize => write!(f, "width and/or height is zero"),
            InsertError::RectTooBig => {
                write!(f, "rectangle is too big to fit in a single page")
            }
        }
    }
}

impl std::error::Error for InsertError {}

/// Clamped configuration shared by all pages of a packer, plus the traversal
/// stack reused across insertions to avoid per-call allocation.
///
/// `max_size` is the usable (inner) maximum page area: the configured
/// maximum minus the applied padding.
#[derive(Clone, Debug)]
pub(crate) struct Context<G> {
    pub max_size: Size<G>,
    pub spacing: Spacing<G>,
    pub padding: Padding<G>,
    pub stack: Vec<Frame<G>>,
}

impl<G: Scalar> Context<G> {
    /// Clamp the configuration: negative values go to zero, then every
    /// padding side eats into the usable maximum. Sides are applied in top,
    /// bottom, left, right order, each taking at most what is left of its
    /// axis.
    pub(crate) fn new(
        max_page_width: G,
        max_page_height: G,
        spacing: Spacing<G>,
        padding: Padding<G>,
    ) -> Self {
        let zero = G::default();

        let mut max_size = Size::new(max_page_width, max_page_height);
        if max_size.w < zero {
            max_size.w = zero;
        }
        if max_size.h < zero {
            max_size.h = zero;
        }

        let mut spacing = spacing;
        if spacing.x < zero {
            spacing.x = zero;
        }
        if spacing.y < zero {
            spacing.y = zero;
        }

        let mut padding = padding;
        if padding.top < zero {
            padding.top = zero;
        } else if padding.top < max_size.h {
            max_size.h = max_size.h - padding.top;
        } else {
            padding.top = max_size.h;
            max_size.h = zero;
        }

        if padding.bottom < zero {
            padding.bottom = zero;
        } else if padding.bottom < max_size.h {
            max_size.h = max_size.h - padding.bottom;
        } else {
            padding.bottom = max_size.h;
            max_size.h = zero;
        }

        if padding.left < zero {
            padding.left = zero;
        } else if padding.left < max_size.w {
            max_size.w = max_size.w - padding.left;
        } else {
            padding.left = max_size.w;
            max_size.w = zero;
        }

        if padding.right < zero {
            padding.right = zero;
        } else if padding.right < max_size.w {
            max_size.w = max_size.w - padding.right;
        } else {
            padding.right = max_size.w;
            max_size.w = zero;
        }

        Context {
            max_size,
            spacing,
            padding,
            stack: Vec::new(),
        }
    }
}

/// Multi-page rectangle packer.
///
/// Rectangles are inserted one at a time; each is assigned a page index and
/// a position within that page. Placed rectangles never overlap, keep
/// [`Spacing`] between each other and [`Padding`] to the page edges, and no
/// page outgrows the configured maximum size. Pages start empty and expand
/// on demand; a rectangle that fits on no open page opens a new one.
///
/// Feeding rectangles sorted by descending height, ties broken by
/// descending width, gives the densest packings. Any order is accepted and
/// packs without overlaps, just less tightly.
///
/// A packer serves one logical caller at a time: insertions share internal
/// scratch state and must be serialized externally if needed.
#[derive(Clone, Debug)]
pub struct RectPacker<G> {
    ctx: Context<G>,
    pages: Vec<Page<G>>,
}

impl<G: Scalar> RectPacker<G> {
    /// `max_page_width` and `max_page_height` bound every page, padding
    /// included. Negative configuration values are clamped to zero; if the
    /// maximum page size is zero, or the padding swallows all of it, every
    /// insertion fails with [`InsertError::RectTooBig`].
    ///
    /// For an effectively unbounded single page, pass the largest value the
    /// scalar type can hold (or infinity, for floats).
    pub fn new(
        max_page_width: G,
        max_page_height: G,
        spacing: Spacing<G>,
        padding: Padding<G>,
    ) -> Self {
        RectPacker {
            ctx: Context::new(max_page_width, max_page_height, spacing, padding),
            pages: vec![Page::default()],
        }
    }

    pub fn from_config(config: &PackerConfig<G>) -> Self {
        RectPacker::new(
            config.max_page_width,
            config.max_page_height,
            config.spacing,
            config.padding,
        )
    }

    /// Number of pages currently open (always at least 1).
    pub fn num_pages(&self) -> usize {
        self.pages.len()
    }

    /// Current outer size of a page: its occupied envelope plus padding. A
    /// page without any rectangle on it reports the padding alone.
    ///
    /// # Panics
    /// If `page_index >= num_pages()`.
    pub fn page_size(&self, page_index: usize) -> Size<G> {
        self.pages[page_index].outer_size(&self.ctx)
    }

    /// Insert a `width` x `height` rectangle.
    ///
    /// Pages are tried in index order and the first page that accepts the
    /// rectangle wins; if none does, a fresh page is opened for it. On
    /// error, no state changes.
    pub fn insert(&mut self, width: G, height: G) -> Result<Placement<G>, InsertError> {
        let zero = G::default();
        if width < zero || height < zero {
            return Err(InsertError::NegativeSize);
        }
        if width == zero || height == zero {
            return Err(InsertError::ZeroSize);
        }
        if self.ctx.max_size.w < width || self.ctx.max_size.h < height {
            return Err(InsertError::RectTooBig);
        }

        let rect = Size::new(width, height);
        for (page_index, page) in self.pages.iter_mut().enumerate() {
            if let Some(pos) = page.insert(&mut self.ctx, rect) {
                return Ok(Placement { pos, page_index });
            }
        }

        let mut page = Page::default();
        let pos = page
            .insert(&mut self.ctx, rect)
            .expect("a validated rect fits an empty page");
        self.pages.push(page);
        Ok(Placement {
            pos,
            page_index: self.pages.len() - 1,
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn negative_spacing_is_clamped_to_zero() {
        let mut packer = RectPacker::new(10, 15, Spacing::new(-1, -2), Padding::none());

        let first = packer.insert(5, 15).unwrap();
        assert_eq!(first.pos, Position::new(0, 0));

        // with the spacing clamped, a second column fits flush against the first
        let second = packer.insert(5, 15).unwrap();
        assert_eq!(second.pos, Position::new(5, 0));
        assert_eq!(second.page_index, 0);
        assert_eq!(packer.page_size(0), Size::new(10, 15));
    }

    #[test]
    fn oversized_padding_is_limited_to_the_page() {
        let packer = RectPacker::new(10, 15, Spacing::none(), Padding::new(16, 17, 11, 12));
        assert_eq!(packer.page_size(0), Size::new(10, 15));
    }

    #[test]
    fn oversized_padding_leaves_no_room_for_rects() {
        let mut packer = RectPacker::new(10, 15, Spacing::none(), Padding::new(16, 17, 11, 12));
        assert_eq!(packer.insert(1, 1), Err(InsertError::RectTooBig));
        assert_eq!(packer.num_pages(), 1);
    }

    #[test]
    fn from_config_matches_new() {
        let config = PackerConfig {
            max_page_width: 64,
            max_page_height: 32,
            spacing: Spacing::new(1, 2),
            padding: Padding::new(1, 2, 3, 4),
        };
        let a = RectPacker::from_config(&config);
        let b = RectPacker::new(64, 32, Spacing::new(1, 2), Padding::new(1, 2, 3, 4));
        assert_eq!(a.page_size(0), b.page_size(0));
    }
}
