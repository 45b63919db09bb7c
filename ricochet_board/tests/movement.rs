use ricochet_board::{Board, Bumper, Cell, Color, Direction, Goal, Point, Symbol};

#[test]
fn trivial_board_round_trips_through_text() {
    let mut cells = vec![Cell::blank(); 16];
    cells[5].goal = Some(Goal {
        color: Color::Red,
        symbol: Symbol::Star,
    });
    cells[9].bumper = Some(Bumper {
        color: Color::Blue,
        slant: false,
    });
    cells[9].fences[Direction::Up.ordinal()] = true;

    let board = Board::new(4, 4, cells).unwrap();
    let text = board.to_text();
    assert_eq!(text.chars().count(), 4 * 4 * 2);

    let reparsed = Board::from_text(4, 4, &text).unwrap();
    assert_eq!(reparsed.to_text(), text);
}

#[test]
fn cache_fast_path_revalidates_against_a_new_blocker() {
    let mut board = Board::new(10, 1, vec![Cell::blank(); 10]).unwrap();

    // First call has no other robot in the way; this populates the cache
    // entry for (start=(0,0), robot_idx=0, Right) with the wall-stop (9,0).
    let lone_robot = vec![Point::new(0, 0)];
    let slid_to_wall = board.do_move(&lone_robot, 0, Direction::Right, false);
    assert_eq!(slid_to_wall, Point::new(9, 0));

    // Same start, same direction, but now a second robot sits along the ray.
    // The fast path must notice the collision and re-simulate rather than
    // return the stale cached (9,0).
    let with_blocker = vec![Point::new(0, 0), Point::new(6, 0)];
    let stopped = board.do_move(&with_blocker, 0, Direction::Right, false);
    assert_eq!(stopped, Point::new(5, 0));
}

#[test]
fn repeated_move_hits_cache_and_agrees_with_fresh_simulation() {
    let mut board = Board::new(12, 1, vec![Cell::blank(); 12]).unwrap();
    let robots = vec![Point::new(0, 0)];

    let first = board.do_move(&robots, 0, Direction::Right, false);
    let second = board.do_move(&robots, 0, Direction::Right, false);
    assert_eq!(first, second);
    assert_eq!(first, Point::new(11, 0));
}
