use super::*;

#[test]
fn test_mark_opponent() {
    assert_eq!(Mark::X.opponent(), Mark::O);
    assert_eq!(Mark::O.opponent(), Mark::X);
    assert_eq!(Mark::Empty.opponent(), Mark::Empty);
}

#[test]
fn test_pos_conversion() {
    let pos = Pos::new(2, 2); // Centre
    assert_eq!(pos.to_index(), 2 * 5 + 2);
    assert_eq!(pos.to_index(), 12);

    let pos2 = Pos::from_index(12);
    assert_eq!(pos2.row, 2);
    assert_eq!(pos2.col, 2);
}

#[test]
fn test_pos_validity() {
    assert!(Pos::is_valid(0, 0));
    assert!(Pos::is_valid(4, 4));
    assert!(!Pos::is_valid(-1, 0));
    assert!(!Pos::is_valid(0, -1));
    assert!(!Pos::is_valid(5, 0));
    assert!(!Pos::is_valid(0, 5));
}

#[test]
fn test_board_constants() {
    assert_eq!(BOARD_SIZE, 5);
    assert_eq!(TOTAL_CELLS, 25);
    assert_eq!(WINDOW_SIZE, 3);
    assert_eq!(WINDOW_MAX, 2);
}

#[test]
fn test_pos_ordering() {
    let pos1 = Pos::new(0, 0);
    let pos2 = Pos::new(0, 1);
    let pos3 = Pos::new(1, 0);

    assert!(pos1 < pos2);
    assert!(pos2 < pos3);
    assert!(pos1 < pos3);
}

#[test]
fn test_board_display_brackets_window() {
    let mut board = Board::new();
    board.place_mark(Pos::new(2, 2), Mark::X);
    let rendered = board.to_string();
    assert!(rendered.contains("[X]"));
    assert_eq!(rendered.lines().count(), 5);
}

#[test]
fn test_notation_round_trip() {
    assert_eq!(pos_to_notation(Pos::new(0, 0)), "A1");
    assert_eq!(pos_to_notation(Pos::new(4, 4)), "E5");
    assert_eq!(pos_to_notation(Pos::new(2, 2)), "C3");

    assert_eq!(notation_to_pos("A1"), Some(Pos::new(0, 0)));
    assert_eq!(notation_to_pos("e5"), Some(Pos::new(4, 4)));
    assert_eq!(notation_to_pos("C3"), Some(Pos::new(2, 2)));
    assert_eq!(notation_to_pos("F1"), None);
    assert_eq!(notation_to_pos("A6"), None);
    assert_eq!(notation_to_pos("A12"), None);
    assert_eq!(notation_to_pos(""), None);
}

#[test]
fn test_new_board() {
    let board = Board::new();
    assert_eq!(board.window_x(), 1);
    assert_eq!(board.window_y(), 1);
    assert_eq!(board.placements(Mark::X), 0);
    assert_eq!(board.placements(Mark::O), 0);
    assert!(Board::positions().all(|p| board.is_empty(p)));
}

#[test]
fn test_place_and_remove() {
    let mut board = Board::new();
    let pos = Pos::new(2, 2);

    board.place_mark(pos, Mark::X);
    assert_eq!(board.get(pos), Mark::X);
    assert!(!board.is_empty(pos));
    assert_eq!(board.count_marks(Mark::X), 1);

    board.remove_mark(pos);
    assert!(board.is_empty(pos));
    assert_eq!(board.count_marks(Mark::X), 0);
}

#[test]
fn test_place_empty_is_noop() {
    let mut board = Board::new();
    let pos = Pos::new(1, 1);
    board.place_mark(pos, Mark::O);
    board.place_mark(pos, Mark::Empty);
    assert_eq!(board.get(pos), Mark::O);
}

#[test]
fn test_window_membership() {
    let board = Board::new(); // window at (1, 1): rows 1-3, cols 1-3
    assert!(board.in_window(Pos::new(1, 1)));
    assert!(board.in_window(Pos::new(3, 3)));
    assert!(board.in_window(Pos::new(2, 2)));
    assert!(!board.in_window(Pos::new(0, 0)));
    assert!(!board.in_window(Pos::new(4, 2)));
    assert!(!board.in_window(Pos::new(2, 0)));
}

#[test]
fn test_window_positions_row_major() {
    let board = Board::new();
    let positions: Vec<Pos> = board.window_positions().collect();
    assert_eq!(positions.len(), 9);
    assert_eq!(positions[0], Pos::new(1, 1));
    assert_eq!(positions[1], Pos::new(1, 2));
    assert_eq!(positions[8], Pos::new(3, 3));
}

#[test]
fn test_window_center_and_corners() {
    let mut board = Board::new();
    assert_eq!(board.window_center(), Pos::new(2, 2));
    assert!(board.is_window_corner(Pos::new(1, 1)));
    assert!(board.is_window_corner(Pos::new(1, 3)));
    assert!(board.is_window_corner(Pos::new(3, 1)));
    assert!(board.is_window_corner(Pos::new(3, 3)));
    assert!(!board.is_window_corner(Pos::new(2, 2)));
    assert!(!board.is_window_corner(Pos::new(1, 2)));

    board.set_window(0, 0);
    assert_eq!(board.window_center(), Pos::new(1, 1));
    assert!(board.is_window_corner(Pos::new(0, 0)));
    assert!(!board.is_window_corner(Pos::new(3, 3)));
}

#[test]
fn test_empty_window_positions() {
    let mut board = Board::new();
    board.place_mark(Pos::new(2, 2), Mark::X);
    let empties: Vec<Pos> = board.empty_window_positions().collect();
    assert_eq!(empties.len(), 8);
    assert!(!empties.contains(&Pos::new(2, 2)));
}

#[test]
fn test_is_full() {
    let mut board = Board::new();
    assert!(!board.is_full());
    for (i, pos) in Board::positions().enumerate() {
        let mark = if i % 2 == 0 { Mark::X } else { Mark::O };
        board.place_mark(pos, mark);
    }
    assert!(board.is_full());
}

#[test]
fn test_marker_positions_ascending() {
    let mut board = Board::new();
    board.place_mark(Pos::new(3, 1), Mark::X);
    board.place_mark(Pos::new(1, 2), Mark::X);
    board.place_mark(Pos::new(2, 2), Mark::O);

    let xs: Vec<Pos> = board.marker_positions(Mark::X).collect();
    assert_eq!(xs, vec![Pos::new(1, 2), Pos::new(3, 1)]);
}
