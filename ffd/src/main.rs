use std::fs;
use std::fs::File;
use std::io::BufReader;

use anyhow::{bail, Context, Result};
use clap::Parser as ClapParser;
use itertools::Itertools;
use log::{info, warn};

use ffd::config::Config;
use ffd::io;
use ffd::io::cli::Cli;
use ffd::io::output::{JsonItem, JsonOutput, JsonPage, JsonRejected};
use ffd::io::page_to_svg::page_to_svg;
use pagepack::entities::RectPacker;
use pagepack::geometry::{Position, Size};

fn main() -> Result<()> {
    let args = Cli::parse();
    io::init_logger(args.log_level)?;

    let config = match &args.config_file {
        None => Config::default(),
        Some(path) => {
            let file = File::open(path).context("could not open config file")?;
            serde_json::from_reader(BufReader::new(file)).unwrap_or_else(|err| {
                warn!("Config file could not be parsed: {err}");
                warn!("Falling back on default config");
                Config::default()
            })
        }
    };
    info!("Config: {}", serde_json::to_string(&config)?);

    let mut items = io::input::read_items(&args.input_file)?;
    if items.is_empty() {
        info!("No items loaded from {:?}; nothing to do", args.input_file);
        return Ok(());
    }
    info!("Loaded {} items", items.len());

    // first-fit decreasing: tallest first, ties broken by width
    items.sort_by(|a, b| b.h.cmp(&a.h).then(b.w.cmp(&a.w)));

    let mut packer = RectPacker::from_config(&config.packer);
    let mut placed = vec![];
    let mut rejected = vec![];
    for item in items {
        match packer.insert(item.w, item.h) {
            Ok(placement) => placed.push((item, placement)),
            Err(err) => {
                warn!("Can't insert {}x{} rect: {err}", item.w, item.h);
                rejected.push(JsonRejected {
                    width: item.w,
                    height: item.h,
                    reason: err.to_string(),
                });
            }
        }
    }
    info!(
        "Packed {} items over {} pages ({} rejected)",
        placed.len(),
        packer.num_pages(),
        rejected.len()
    );

    if packer.num_pages() > config.max_pages {
        bail!(
            "too many pages: {} (limit is {})",
            packer.num_pages(),
            config.max_pages
        );
    }

    if !args.output_folder.exists() {
        fs::create_dir_all(&args.output_folder).with_context(|| {
            format!("could not create output folder: {:?}", args.output_folder)
        })?;
    }

    let by_page = placed.iter().into_group_map_by(|(_, p)| p.page_index);
    let pages = (0..packer.num_pages())
        .map(|index| {
            let page_size = packer.page_size(index);
            let items = by_page
                .get(&index)
                .into_iter()
                .flatten()
                .map(|(item, p)| JsonItem {
                    x: p.pos.x,
                    y: p.pos.y,
                    width: item.w,
                    height: item.h,
                })
                .collect_vec();
            JsonPage {
                index,
                width: page_size.w,
                height: page_size.h,
                items,
            }
        })
        .collect_vec();

    let stem = match args.input_file.file_stem().and_then(|s| s.to_str()) {
        Some("-") | None => "items",
        Some(stem) => stem,
    };

    let json_path = args.output_folder.join(format!("{stem}_placements.json"));
    io::write_json(
        &JsonOutput {
            config,
            pages: pages.clone(),
            rejected,
        },
        &json_path,
    )?;

    for page in &pages {
        if page.width == 0 || page.height == 0 {
            continue;
        }
        let placements = page
            .items
            .iter()
            .map(|item| (Position::new(item.x, item.y), Size::new(item.width, item.height)))
            .collect_vec();
        let document = page_to_svg(
            Size::new(page.width, page.height),
            &placements,
            config.svg_draw_options,
            &format!("page {}", page.index),
        );
        let svg_path = args.output_folder.join(format!("{stem}_page_{}.svg", page.index));
        io::write_svg(&document, &svg_path)?;
    }

    Ok(())
}
