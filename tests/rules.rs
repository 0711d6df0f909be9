use snake_quads::snake_game::{Direction, GameState, GridPoint, Snake};

fn pts(coords: &[(i32, i32)]) -> Vec<GridPoint> {
    coords.iter().copied().map(GridPoint::from).collect()
}

fn reference_state(direction: Direction, food: &[(i32, i32)]) -> GameState {
    let snake = Snake::new(pts(&[(1, 2), (2, 2), (2, 3), (2, 4), (3, 4), (4, 4)])).unwrap();
    GameState::new(snake, pts(food), direction)
}

fn body(state: &GameState) -> Vec<GridPoint> {
    state.snake.segments().copied().collect()
}

#[test]
fn reference_board_should_shift_forward_without_eating() {
    let mut state = reference_state(Direction::Up, &[(3, 3)]);

    state.advance();

    assert_eq!(body(&state), pts(&[(2, 2), (2, 3), (2, 4), (3, 4), (4, 4), (4, 5)]));
    assert_eq!(state.food.len(), 1);
}

#[test]
fn food_should_be_checked_under_the_pre_move_head() {
    let mut state = reference_state(Direction::Up, &[(4, 5)]);

    let step = state.advance();

    assert_eq!(step.eaten, None, "food at the new head is eaten next advance, not this one");
    assert_eq!(state.snake.length(), 6);
    assert!(state.food.contains(&GridPoint::new(4, 5)));

    let step = state.advance();
    assert_eq!(step.eaten, Some(GridPoint::new(4, 5)));
    assert_eq!(state.snake.length(), 7);
}

#[test]
fn every_direction_should_move_head_by_one_cell() {
    let cases = [
        (Direction::Up, (4, 5)),
        (Direction::Down, (4, 3)),
        (Direction::Left, (3, 4)),
        (Direction::Right, (5, 4)),
    ];
    for (direction, expected) in cases {
        let mut state = reference_state(direction, &[]);
        state.advance();
        assert_eq!(state.snake.head(), GridPoint::from(expected), "{direction:?}");
    }
}

#[test]
fn length_should_hold_without_food_or_markers() {
    let mut state = reference_state(Direction::Right, &[(9, 9)]);
    for _ in 0..20 {
        let before = state.snake.length();
        state.advance();
        assert_eq!(state.snake.length(), before);
    }
}

#[test]
fn eating_should_grow_by_one_and_consume_one_food() {
    let mut state = reference_state(Direction::Up, &[(4, 4), (7, 3)]);
    let food_before = state.food.len();
    let len_before = state.snake.length();

    let step = state.advance();

    assert_eq!(step.eaten, Some(GridPoint::new(4, 4)));
    assert_eq!(state.food.len(), food_before - 1);
    assert_eq!(state.snake.length(), len_before + 1);
    assert_eq!(state.snake.tail(), GridPoint::new(1, 2));
}

#[test]
fn food_should_never_increase_over_a_run() {
    let mut state = reference_state(Direction::Right, &[(3, 3), (7, 3), (3, 5), (6, 3)]);
    let turns = [
        Direction::Right, Direction::Down, Direction::Left, Direction::Left,
        Direction::Up, Direction::Up, Direction::Right, Direction::Right,
    ];
    let mut food = state.food.len();
    for round in 0..5 {
        for direction in turns {
            state.direction = direction;
            state.advance();
            assert!(state.food.len() <= food, "food grew in round {round}");
            food = state.food.len();
        }
    }
}

#[test]
fn snake_should_wander_off_the_board_unhindered() {
    let mut state = reference_state(Direction::Left, &[]);
    for _ in 0..50 {
        state.advance();
    }
    assert_eq!(state.snake.head(), GridPoint::new(-46, 4));
    assert_eq!(state.snake.length(), 6);
}
