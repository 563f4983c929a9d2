use ratatui::layout::{Constraint, Flex, Layout, Rect};

/// A `width`×`height` rect centered in `outer`, shrunk to fit if needed.
pub fn centered_rect(width: u16, height: u16, outer: Rect) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height.min(outer.height))])
        .flex(Flex::Center)
        .areas(outer);
    let [center] = Layout::horizontal([Constraint::Length(width.min(outer.width))])
        .flex(Flex::Center)
        .areas(row);
    center
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect_fits() {
        let rect = centered_rect(20, 10, Rect::new(0, 0, 80, 24));
        assert_eq!(rect, Rect::new(30, 7, 20, 10));
    }

    #[test]
    fn test_centered_rect_clamps_to_outer() {
        let outer = Rect::new(0, 0, 10, 5);
        let rect = centered_rect(40, 20, outer);
        assert_eq!(rect, outer);
    }
}
