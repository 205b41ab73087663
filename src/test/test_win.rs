use crate::core::Direction::*;
use crate::core::*;
use crate::test::test_util::GameTestState;

#[test]
fn pushing_only_crate_onto_goal_wins() {
    let mut game = GameTestState::new(r#"
xxxxx
xscfx
xxxxx
"#);
    assert!(!game.level.is_won());

    game.assert_move(Right);

    game.assert_matches(r#"
xxxxx
x.sCx
xxxxx
"#);
    assert!(game.level.is_won());
    assert!(is_won(&game.level));
}

#[test]
fn level_without_crates_is_won_on_load() {
    let game = GameTestState::new("xs.fx");
    assert!(game.level.is_won());
}

#[test]
fn level_with_crate_is_not_won_on_load() {
    let game = GameTestState::new("xsc.fx");
    assert!(!game.level.is_won());
}

#[test]
fn one_crate_off_goal_is_not_won() {
    let mut game = GameTestState::new(r#"
xxxxxx
xscf.x
x.cf.x
x....x
xxxxxx
"#);
    game.assert_move(Right);
    assert_eq!(1, game.level.count_crates_on_goals());
    assert!(!game.level.is_won());

    game.assert_moves(&[Left, Down, Right]);
    assert_eq!(2, game.level.count_crates_on_goals());
    assert!(game.level.is_won());
}

#[test]
fn pushing_crate_off_goal_undoes_win() {
    let mut game = GameTestState::new("xscf.x");
    game.assert_move(Right);
    assert!(game.level.is_won());

    game.assert_move(Right);
    assert!(!game.level.is_won());
    assert_eq!(0, game.level.count_crates_on_goals());
}

#[test]
fn goal_count_counts_goal_terrain() {
    let game = GameTestState::new(r#"
xxxxx
xsfcx
xffcx
xxxxx
"#);
    assert_eq!(3, game.level.goal_count());
    assert_eq!(0, game.level.count_crates_on_goals());
}
