use pagepack::geometry::{Padding, Spacing};
use pagepack::util::config::PackerConfig;
use serde::{Deserialize, Serialize};

use crate::io::svg_util::SvgDrawOptions;

/// Configuration for the ffd demo
#[derive(Debug, Serialize, Deserialize, Clone, Copy)]
pub struct Config {
    /// Construction parameters of the packer
    pub packer: PackerConfig<i32>,
    /// Abort if the packing ends up spread over more pages than this
    pub max_pages: usize,
    /// Optional SVG drawing options
    #[serde(default)]
    pub svg_draw_options: SvgDrawOptions,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            packer: PackerConfig {
                max_page_width: 1024,
                max_page_height: 1024,
                spacing: Spacing::uniform(2),
                padding: Padding::uniform(8),
            },
            max_pages: 1000,
            svg_draw_options: SvgDrawOptions::default(),
        }
    }
}
