use crate::core::Direction::*;
use crate::core::*;
use crate::test::test_util::GameTestState;

#[test]
fn when_move_right_observes_move_right() {
    let mut game = GameTestState::new("xs.x");
    let update = game.assert_move(Right);

    assert_eq!(GameUpdate::Moved(GameChangeType::PlayerMove), update);
    game.assert_matches("x.sx");
}

#[test]
fn when_move_into_solid_nothing_changes() {
    let mut game = GameTestState::new(r#"
xxxx
xs.x
xxxx
"#);
    game.assert_blocked(Left);
    game.assert_blocked(Left);
    game.assert_blocked(Up);
    game.assert_blocked(Down);
    game.assert_matches(r#"
xxxx
xs.x
xxxx
"#);
}

#[test]
fn when_push_pushes() {
    let mut game = GameTestState::new("xsc.x");
    let update = game.assert_move(Right);

    assert_eq!(
        GameUpdate::Moved(GameChangeType::PlayerAndCratesMove { crates: 1 }),
        update
    );
    game.assert_matches("x.scx");
}

#[test]
fn when_chain_pushed_into_free_all_move_one_step() {
    let mut game = GameTestState::new("xsccc..x");
    let update = game.assert_move(Right);

    assert_eq!(
        GameUpdate::Moved(GameChangeType::PlayerAndCratesMove { crates: 3 }),
        update
    );
    game.assert_matches("x.sccc.x");

    let mut crates = game.level.crates.clone();
    crates.sort();
    assert_eq!(
        vec![Vec2 { x: 3, y: 0 }, Vec2 { x: 4, y: 0 }, Vec2 { x: 5, y: 0 }],
        crates
    );
}

#[test]
fn when_chain_pushed_into_solid_nothing_moves() {
    let mut game = GameTestState::new("xsccx");
    game.assert_blocked(Right);
    game.assert_matches("xsccx");
}

#[test]
fn when_long_chain_pushed_into_solid_nothing_moves() {
    let mut game = GameTestState::new(r#"
xxx
xsx
xcx
xcx
xcx
xcx
xxx
"#);
    game.assert_blocked(Down);
}

#[test]
fn when_chain_pushed_off_grid_nothing_moves() {
    let mut game = GameTestState::new(".scc");
    game.assert_blocked(Right);
    game.assert_matches(".scc");
}

#[test]
fn when_player_walks_off_grid_is_blocked() {
    let mut game = GameTestState::new("s.");
    game.assert_blocked(Left);
    game.assert_blocked(Up);
    game.assert_blocked(Down);
    game.assert_move(Right);
    game.assert_blocked(Right);
}

#[test]
fn when_push_vertical_pushes() {
    let mut game = GameTestState::new(r#"
xxx
x.x
xcx
xsx
xxx
"#);
    game.assert_move(Up);
    game.assert_matches(r#"
xxx
xcx
xsx
x.x
xxx
"#);
    game.assert_blocked(Up);
}

#[test]
fn when_crate_pushed_over_goal_it_leaves_goal_behind() {
    let mut game = GameTestState::new("xscf.x");
    game.assert_move(Right);
    game.assert_matches("x.sC.x");
    game.assert_move(Right);
    game.assert_matches("x..scx");
}

#[test]
fn when_player_moves_back_game_is_equal() {
    let mut game = GameTestState::new("xs.cx");
    let original_state = game.level.clone();
    game.assert_move(Right);
    game.assert_move(Left);

    game.assert_matches("xs.cx");
    assert_eq!(original_state, game.level);
}

#[test]
fn when_push_is_blocked_player_can_still_walk_elsewhere() {
    let mut game = GameTestState::new(r#"
xxxxx
xsccx
x...x
x...x
xxxxx
"#);
    game.assert_blocked(Right);
    game.assert_moves(&[Down, Down, Right, Up]);
    game.assert_matches(r#"
xxxxx
x.ccx
x.s.x
x...x
xxxxx
"#);
    game.assert_blocked(Up);
}

#[test]
fn when_crates_rearranged_positions_identify_them() {
    let mut game = GameTestState::new(r#"
xxxxxx
x....x
xsc..x
x.c..x
x....x
xxxxxx
"#);
    let original_state = game.level.clone();
    game.assert_moves(&[Right, Left, Down, Right, Up, Left, Up, Right, Down]);
    game.assert_matches(r#"
xxxxxx
x....x
x.sc.x
x..c.x
x....x
xxxxxx
"#);

    let mut crates = game.level.crates.clone();
    crates.sort();
    let mut original_crates = original_state.crates.clone();
    original_crates.sort();
    assert_ne!(original_crates, crates);
}

#[test]
fn all_actions_lists_each_direction_once() {
    let actions = UserAction::all_actions();

    assert_eq!(4, actions.len());
    for direction in [Up, Down, Left, Right] {
        assert!(actions.contains(&UserAction::Move(direction)));
    }
}

#[test]
fn try_step_reports_blocked() {
    let mut game = GameTestState::new("xsx");
    assert_eq!(GameUpdate::Blocked, game.try_step(UserAction::Move(Right)));
}
