use serde::Serialize;

use crate::config::Config;

/// External representation of a finished packing, written as JSON.
#[derive(Serialize, Clone, Debug)]
pub struct JsonOutput {
    pub config: Config,
    pub pages: Vec<JsonPage>,
    /// Items the packer rejected, with the reason
    pub rejected: Vec<JsonRejected>,
}

#[derive(Serialize, Clone, Debug)]
pub struct JsonPage {
    pub index: usize,
    pub width: i32,
    pub height: i32,
    pub items: Vec<JsonItem>,
}

#[derive(Serialize, Clone, Debug)]
pub struct JsonItem {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

#[derive(Serialize, Clone, Debug)]
pub struct JsonRejected {
    pub width: i32,
    pub height: i32,
    pub reason: String,
}
