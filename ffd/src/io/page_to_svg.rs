use pagepack::geometry::{Position, Size};
use svg::node::element::{Group, Rectangle, Text, Title};
use svg::Document;

use crate::io::svg_util;
use crate::io::svg_util::SvgDrawOptions;

/// Render one packed page to an SVG document: the page background plus one
/// rectangle per placed item, fills cycled from the palette.
pub fn page_to_svg(
    page_size: Size<i32>,
    placements: &[(Position<i32>, Size<i32>)],
    options: SvgDrawOptions,
    title: &str,
) -> Document {
    let theme = &options.theme;

    let smaller_side = i32::min(page_size.w, page_size.h) as f32;
    let stroke_width = smaller_side * 0.001 * theme.stroke_width_multiplier;

    let page_group = Group::new().set("id", "page").add(
        Rectangle::new()
            .set("x", 0)
            .set("y", 0)
            .set("width", page_size.w)
            .set("height", page_size.h)
            .set("fill", format!("{}", theme.page_fill))
            .add(Title::new(format!(
                "{title}, w: {}, h: {}",
                page_size.w, page_size.h
            ))),
    );

    let items_group = placements.iter().enumerate().fold(
        Group::new().set("id", "items"),
        |group, (i, (pos, rect))| {
            let fill = item_fill(i);
            group.add(
                Rectangle::new()
                    .set("x", pos.x)
                    .set("y", pos.y)
                    .set("width", rect.w)
                    .set("height", rect.h)
                    .set("fill", format!("{fill}"))
                    .set("stroke", format!("{}", theme.item_stroke))
                    .set("stroke-width", format!("{stroke_width}"))
                    .add(Title::new(format!(
                        "item {i}, {}x{} @ ({}, {})",
                        rect.w, rect.h, pos.x, pos.y
                    ))),
            )
        },
    );

    let label = match options.draw_labels {
        false => None,
        true => {
            //print some information above the top left of the page
            let content = format!(
                "width: {} | height: {} | items: {} | {}",
                page_size.w,
                page_size.h,
                placements.len(),
                title,
            );
            Some(
                Text::new(content)
                    .set("x", 0)
                    .set("y", -0.5 * 0.025 * smaller_side)
                    .set("font-size", smaller_side * 0.025)
                    .set("font-family", "monospace")
                    .set("font-weight", "500"),
            )
        }
    };

    let margin = f32::max(page_size.w as f32, page_size.h as f32) * 0.05;
    let vbox = (
        -margin,
        -margin,
        page_size.w as f32 + 2.0 * margin,
        page_size.h as f32 + 2.0 * margin,
    );

    let document = Document::new()
        .set("viewBox", vbox)
        .add(page_group)
        .add(items_group);

    match label {
        Some(label) => document.add(label),
        None => document,
    }
}

/// Cycle the palette, shifting brightness on every full pass so items more
/// than a palette apart stay distinguishable.
fn item_fill(item_idx: usize) -> svg_util::Color {
    let base = svg_util::ITEM_PALETTE[item_idx % svg_util::ITEM_PALETTE.len()];
    const SHADES: [i16; 3] = [0, -48, 48];
    let shade = SHADES[(item_idx / svg_util::ITEM_PALETTE.len()) % SHADES.len()];
    svg_util::adjust_brightness(base, shade)
}
