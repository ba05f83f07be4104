use ratatui::layout::{Constraint, Direction, Layout, Rect};
use std::rc::Rc;

/// Rows taken by the header and by the footer.
const CHROME_HEIGHT: u16 = 3;

/// Header, body and footer, top to bottom. The header wins on tiny screens.
pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect) {
    let header_height = area.height.min(CHROME_HEIGHT);
    let footer_height = (area.height - header_height).min(CHROME_HEIGHT);
    let body_height = area.height - header_height - footer_height;

    let header = Rect {
        height: header_height,
        ..area
    };
    let body = Rect {
        y: area.y + header_height,
        height: body_height,
        ..area
    };
    let footer = Rect {
        y: body.y + body_height,
        height: footer_height,
        ..area
    };
    (header, body, footer)
}

/// Split the body into `count` equal columns, one per component.
pub fn component_columns(body: Rect, count: usize) -> Rc<[Rect]> {
    let count = count.max(1) as u32;
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints((0..count).map(|_| Constraint::Ratio(1, count)))
        .split(body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regions_cover_area() {
        let area = Rect::new(0, 0, 80, 24);
        let (header, body, footer) = layout_regions(area);
        assert_eq!(header.height, 3);
        assert_eq!(footer.height, 3);
        assert_eq!(body.height, 18);
        assert_eq!(body.y, 3);
        assert_eq!(footer.y, 21);
    }

    #[test]
    fn regions_survive_tiny_area() {
        let (header, body, footer) = layout_regions(Rect::new(0, 0, 10, 2));
        assert_eq!(header.height, 2);
        assert_eq!(body.height, 0);
        assert_eq!(footer.height, 0);
    }

    #[test]
    fn columns_split_evenly() {
        let columns = component_columns(Rect::new(0, 3, 80, 10), 2);
        assert_eq!(columns.len(), 2);
        assert_eq!(columns[0].width, 40);
        assert_eq!(columns[1].x, 40);
    }
}
