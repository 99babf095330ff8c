use std::fs;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use anyhow::Result;
use log::{info, log, Level, LevelFilter};
use serde::Serialize;
use svg::Document;

use crate::EPOCH;

pub mod cli;
pub mod input;
pub mod output;
pub mod page_to_svg;
pub mod svg_util;

pub fn write_json(json: &impl Serialize, path: &Path) -> Result<()> {
    let file = File::create(path)?;
    let writer = BufWriter::new(file);

    serde_json::to_writer_pretty(writer, &json)?;

    info!(
        "Placements JSON written to file://{}",
        fs::canonicalize(path)?.to_str().unwrap()
    );
    Ok(())
}

pub fn write_svg(document: &Document, path: &Path) -> Result<()> {
    svg::save(path, document)?;
    info!(
        "Page SVG written to file://{}",
        fs::canonicalize(path)?.to_str().unwrap()
    );
    Ok(())
}

pub fn init_logger(level_filter: LevelFilter) -> Result<()> {
    fern::Dispatch::new()
        // Perform allocation-free log formatting
        .format(|out, message, record| {
            let elapsed = EPOCH.elapsed().as_secs();
            let prefix = format!(
                "[{}] [{:0>2}:{:0>2}:{:0>2}] <{}>",
                record.level(),
                elapsed / 3600,
                (elapsed / 60) % 60,
                elapsed % 60,
                std::thread::current().name().unwrap_or("-"),
            );
            out.finish(format_args!("{prefix:<27}{message}"))
        })
        // Add blanket level filter
        .level(level_filter)
        .chain(std::io::stdout())
        .apply()?;
    log!(Level::Info, "Epoch: {}", jiff::Timestamp::now());
    Ok(())
}
