use super::*;

#[test]
fn nine_cards_span_five_columns() {
    let layout = CardLayout::default();
    assert_eq!(layout.columns(9), 5);
    assert_eq!(layout.content_width(9), 5.0 * 320.0 + 4.0 * 24.0);
    assert_eq!(layout.content_width(0), 0.0);
}

#[test]
fn grid_flows_column_major() {
    let grid = CardLayout::default().grid(3);
    assert_eq!(grid.rects()[0], Rect::new(0.0, 0.0, 320.0, 320.0));
    assert_eq!(grid.rects()[1], Rect::new(0.0, 344.0, 320.0, 664.0));
    assert_eq!(grid.rects()[2], Rect::new(344.0, 0.0, 664.0, 320.0));
}

#[test]
fn hover_accounts_for_offset() {
    let grid = CardLayout::default().grid(9);
    assert_eq!(grid.hovered(Point::new(10.0, 10.0), 0.0, false), Some(0));
    // Row dragged 344 px left: the second column now sits under the pointer.
    assert_eq!(grid.hovered(Point::new(10.0, 10.0), -344.0, false), Some(2));
    // Gap between cards.
    assert_eq!(grid.hovered(Point::new(330.0, 10.0), 0.0, false), None);
}

#[test]
fn hover_is_suppressed_while_dragging() {
    let grid = CardLayout::default().grid(9);
    assert_eq!(grid.hovered(Point::new(10.0, 10.0), 0.0, true), None);
}

#[test]
fn zero_rows_is_invalid() {
    let layout = CardLayout {
        rows: 0,
        ..CardLayout::default()
    };
    assert!(layout.validate().is_err());
}
