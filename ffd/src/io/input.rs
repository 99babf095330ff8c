use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use anyhow::{bail, Context, Result};

/// A rectangle to pack, as described by one line of an item list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemSpec {
    pub w: i32,
    pub h: i32,
}

/// Read an item list from `path`, `-` meaning stdin.
pub fn read_items(path: &Path) -> Result<Vec<ItemSpec>> {
    if path == Path::new("-") {
        parse_items(io::stdin().lock())
    } else {
        let file = File::open(path)
            .with_context(|| format!("could not open item list {}", path.display()))?;
        parse_items(BufReader::new(file))
    }
}

/// Parse item lines: every non-blank line is `WxH` or `WxHxCOUNT`, a count
/// repeating the rectangle that many times.
pub fn parse_items(reader: impl BufRead) -> Result<Vec<ItemSpec>> {
    let mut items = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        let line = line.context("could not read item list")?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let (item, count) = parse_line(line)
            .with_context(|| format!("line {}: invalid rectangle description: {line}", idx + 1))?;
        items.extend(std::iter::repeat(item).take(count));
    }

    Ok(items)
}

fn parse_line(line: &str) -> Result<(ItemSpec, usize)> {
    let mut fields = line.split('x');

    let w = match fields.next() {
        Some(w) => w.trim().parse()?,
        None => bail!("expected WxH or WxHxCOUNT"),
    };
    let h = match fields.next() {
        Some(h) => h.trim().parse()?,
        None => bail!("expected WxH or WxHxCOUNT"),
    };
    let count = match fields.next() {
        Some(count) => count.trim().parse()?,
        None => 1,
    };
    if fields.next().is_some() {
        bail!("expected WxH or WxHxCOUNT");
    }

    Ok((ItemSpec { w, h }, count))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn plain_and_counted_lines_are_parsed() {
        let items = parse_items("10x20\n\n 4x4x3 \n".as_bytes()).unwrap();
        assert_eq!(
            items,
            vec![
                ItemSpec { w: 10, h: 20 },
                ItemSpec { w: 4, h: 4 },
                ItemSpec { w: 4, h: 4 },
                ItemSpec { w: 4, h: 4 },
            ]
        );
    }

    #[test]
    fn negative_sizes_are_parsed_and_left_to_the_packer() {
        let items = parse_items("-3x7".as_bytes()).unwrap();
        assert_eq!(items, vec![ItemSpec { w: -3, h: 7 }]);
    }

    #[test]
    fn malformed_lines_are_reported_with_their_number() {
        let err = parse_items("1x1\nbogus\n".as_bytes()).unwrap_err();
        assert!(format!("{err:#}").contains("line 2"));
    }

    #[test]
    fn too_many_fields_are_rejected() {
        assert!(parse_items("1x2x3x4".as_bytes()).is_err());
    }
}
