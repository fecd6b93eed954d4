//! Text rendering of a map with endpoints and a path.
//!
//! Each row is framed by `|`. Glyphs: `O` origin, `D` destination, `*` path,
//! `_` floor, `#` wall.

use std::collections::HashSet;
use std::io::{self, Write};

use crossterm::queue;
use crossterm::style::{Attribute, Color, ResetColor, SetAttribute, SetForegroundColor};
use gridpath_core::Point;
use gridpath_map::TileMap;

/// What to draw on top of the map.
#[derive(Debug, Clone, Copy, Default)]
pub struct Overlay<'a> {
    pub targets: Option<(Point, Point)>,
    pub path: Option<&'a [Point]>,
}

impl<'a> Overlay<'a> {
    pub fn targets(origin: Point, destination: Point) -> Self {
        Self {
            targets: Some((origin, destination)),
            path: None,
        }
    }

    pub fn with_path(mut self, path: &'a [Point]) -> Self {
        self.path = Some(path);
        self
    }
}

/// Glyph and colour for one tile.
fn glyph_at(
    map: &TileMap,
    p: Point,
    overlay: &Overlay<'_>,
    on_path: &HashSet<Point>,
) -> (char, Option<Color>) {
    if let Some((origin, destination)) = overlay.targets {
        if p == origin {
            return ('O', Some(Color::Green));
        }
        if p == destination {
            return ('D', Some(Color::Red));
        }
    }
    if on_path.contains(&p) {
        return ('*', Some(Color::Yellow));
    }
    if map.is_walkable(p) {
        ('_', None)
    } else {
        ('#', Some(Color::DarkGrey))
    }
}

/// Write the map header and rows to `out`, coloured when `color` is set.
pub fn write_map<W: Write>(
    out: &mut W,
    map: &TileMap,
    overlay: &Overlay<'_>,
    color: bool,
) -> io::Result<()> {
    let size = map.size();
    let on_path: HashSet<Point> = overlay.path.unwrap_or(&[]).iter().copied().collect();

    writeln!(out, "map size: {}x{}", size.x, size.y)?;
    for y in 0..size.y {
        write!(out, "|")?;
        for x in 0..size.x {
            let (ch, fg) = glyph_at(map, Point::new(x, y), overlay, &on_path);
            match fg {
                Some(fg) if color => {
                    queue!(out, SetForegroundColor(fg), SetAttribute(Attribute::Bold))?;
                    write!(out, "{ch}")?;
                    queue!(out, SetAttribute(Attribute::Reset), ResetColor)?;
                }
                _ => write!(out, "{ch}")?,
            }
        }
        writeln!(out, "|")?;
    }
    out.flush()
}

/// `(x, y) (x, y) ...`
pub fn format_path(path: &[Point]) -> String {
    path.iter()
        .map(|p| p.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map() -> TileMap {
        "____\n_##_\n____".parse().unwrap()
    }

    fn render_map(map: &TileMap, overlay: &Overlay<'_>) -> String {
        let mut buf = Vec::new();
        write_map(&mut buf, map, overlay, false).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn plain_map() {
        let text = render_map(&map(), &Overlay::default());
        assert_eq!(text, "map size: 4x3\n|____|\n|_##_|\n|____|\n");
    }

    #[test]
    fn targets_and_path() {
        let path = [
            Point::new(0, 0),
            Point::new(0, 1),
            Point::new(0, 2),
            Point::new(1, 2),
        ];
        let overlay = Overlay::targets(Point::new(0, 0), Point::new(1, 2)).with_path(&path);
        let text = render_map(&map(), &overlay);
        assert_eq!(text, "map size: 4x3\n|O___|\n|*##_|\n|*D__|\n");
    }

    #[test]
    fn colour_adds_escapes_without_changing_glyphs() {
        let mut buf = Vec::new();
        let overlay = Overlay::targets(Point::new(0, 0), Point::new(3, 2));
        write_map(&mut buf, &map(), &overlay, true).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains('\u{1b}'));
        assert!(text.contains('O'));
        assert!(text.contains('D'));
    }

    #[test]
    fn path_formatting() {
        let path = [Point::new(0, 0), Point::new(1, 0)];
        assert_eq!(format_path(&path), "(0, 0) (1, 0)");
    }
}
