#[cfg(test)]
mod tests {
    use test_case::test_case;

    use ffd::config::Config;
    use ffd::io::input;
    use ffd::io::page_to_svg::page_to_svg;
    use pagepack::entities::RectPacker;
    use pagepack::geometry::{Position, Size};

    const ITEM_LIST: &str = "\
        64x64x4\n\
        32x48x8\n\
        16x16x32\n\
        128x8\n";

    #[test]
    fn item_list_packs_into_a_single_default_page() {
        let mut items = input::parse_items(ITEM_LIST.as_bytes()).unwrap();
        assert_eq!(items.len(), 4 + 8 + 32 + 1);

        items.sort_by(|a, b| b.h.cmp(&a.h).then(b.w.cmp(&a.w)));

        let config = Config::default();
        let mut packer = RectPacker::from_config(&config.packer);
        for item in &items {
            let placement = packer.insert(item.w, item.h).unwrap();
            assert_eq!(placement.page_index, 0);
        }

        let page_size = packer.page_size(0);
        assert!(page_size.w <= config.packer.max_page_width);
        assert!(page_size.h <= config.packer.max_page_height);
    }

    #[test]
    fn rejected_items_leave_the_packing_unchanged() {
        let items = input::parse_items("2000x2000\n10x10\n".as_bytes()).unwrap();

        let config = Config::default();
        let mut packer = RectPacker::from_config(&config.packer);

        assert!(packer.insert(items[0].w, items[0].h).is_err());
        assert!(packer.insert(items[1].w, items[1].h).is_ok());
        assert_eq!(packer.num_pages(), 1);
    }

    #[test_case(true ; "with labels")]
    #[test_case(false ; "without labels")]
    fn page_renders_to_svg(draw_labels: bool) {
        let mut config = Config::default();
        config.svg_draw_options.draw_labels = draw_labels;

        let placements = vec![
            (Position::new(8, 8), Size::new(64, 64)),
            (Position::new(74, 8), Size::new(32, 48)),
        ];
        let document = page_to_svg(
            Size::new(128, 96),
            &placements,
            config.svg_draw_options,
            "page 0",
        );

        let rendered = document.to_string();
        assert_eq!(rendered.matches("<rect").count(), 1 + placements.len());
        assert_eq!(rendered.contains("<text"), draw_labels);
    }
}
