use snake_quads::config::GameConfig;
use snake_quads::controls::ScriptedInput;
use snake_quads::session::Session;
use snake_quads::snake_game::{Direction, GridPoint, RandomFood};

fn run(config: &GameConfig, script: &str, frames: u64) -> Session {
    let mut session = Session::new(config).unwrap();
    let mut input = ScriptedInput::parse(script).unwrap();
    session.run(&mut input, frames);
    session
}

#[test]
fn default_game_should_step_every_sixth_frame() {
    let session = run(&GameConfig::default(), "", 18);

    assert_eq!(session.ticks(), 3);
    assert_eq!(session.state.snake.head(), GridPoint::new(4, 7));
}

#[test]
fn scripted_turn_should_take_effect_on_next_step() {
    let config = GameConfig { tick_rate: 2, ..Default::default() };
    // Frame 1 turns right, frame 2 fires the first step.
    let session = run(&config, "R,.,.,.", 4);

    assert_eq!(session.ticks(), 2);
    assert_eq!(session.state.direction, Direction::Right);
    assert_eq!(session.state.snake.head(), GridPoint::new(6, 4));
}

#[test]
fn scripted_route_should_eat_food_and_grow() {
    let config = GameConfig { tick_rate: 1, ..Default::default() };
    // Head (4,4): down to (4,3), left onto (3,3) then eat it on the following step.
    let session = run(&config, "D,L,.,.", 4);

    let snapshot = session.snapshot();
    assert_eq!(snapshot.ticks, 4);
    assert_eq!(snapshot.food, [(3, 5), (6, 3), (7, 3)].map(GridPoint::from).to_vec());
    assert_eq!(snapshot.snake.len(), 7);
    assert!(snapshot.grow.is_empty());
}

#[test]
fn quit_key_should_end_run_early() {
    let session = run(&GameConfig::default(), ".,.,Q,.,.,.,.,.", 100);

    assert!(!session.is_running());
    assert_eq!(session.frames(), 2);
    assert_eq!(session.snapshot().snake, GameConfig::default().initial_snake);
}

#[test]
fn respawn_rule_should_keep_food_count_steady() {
    let config = GameConfig { tick_rate: 1, ..Default::default() };
    let mut session =
        Session::with_spawner(&config, Box::new(RandomFood::new(10, 10, Some(11)))).unwrap();
    let mut input = ScriptedInput::parse("D,L,.,.").unwrap();

    session.run(&mut input, 4);

    assert_eq!(session.state.food.len(), 4);
    assert!(!session.state.food.contains(&GridPoint::new(3, 3)));
}

#[test]
fn snapshot_should_serialize_to_json() {
    let session = run(&GameConfig::default(), "", 6);
    let json = session.snapshot().to_json().unwrap();

    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["ticks"], 1);
    assert_eq!(value["snake"][5]["x"], 4);
    assert_eq!(value["snake"][5]["y"], 5);
    assert_eq!(value["food"].as_array().map(Vec::len), Some(4));
}
