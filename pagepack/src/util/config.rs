use serde::{Deserialize, Serialize};

use crate::geometry::{Padding, Spacing};

///Construction parameters of a [`RectPacker`](crate::entities::RectPacker)
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct PackerConfig<G> {
    ///Maximum width of a page, including the horizontal padding
    pub max_page_width: G,
    ///Maximum height of a page, including the vertical padding
    pub max_page_height: G,
    ///Space between rectangles
    pub spacing: Spacing<G>,
    ///Space between rectangles and the edges of a page
    pub padding: Padding<G>,
}
