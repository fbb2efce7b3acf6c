mod test {
    use Direction::*;
    use crate::core::*;
    use crate::test::test_util::GameTestState;

    #[test]
    fn when_move_right_observes_move_right() {
        let mut game = GameTestState::new(r#"
#@ #
"#);
        assert_eq!(game.assert_move(Right), MoveOutcome::Moved);

        game.assert_matches(r#"
# @#
"#);
    }

    #[test]
    fn when_push_pushes() {
        let mut game = GameTestState::new(r#"
#@$ #
"#);
        game.assert_move(Right);

        game.assert_matches(r#"
# @$#
"#);
    }

    #[test]
    fn push_onto_target_completes_level() {
        let mut game = GameTestState::new(r#"
#####
#@$.#
#####
"#);
        assert_eq!(game.player(), Position::new(1, 1));
        assert_eq!(game.crates(), vec![Position::new(2, 1)]);

        game.assert_move(Right);

        assert_eq!(game.player(), Position::new(2, 1));
        assert_eq!(game.crates(), vec![Position::new(3, 1)]);
        assert!(game.game_state.is_complete());
        game.assert_matches(r#"
#####
# @*#
#####
"#);
    }

    #[test]
    fn push_into_wall_is_blocked() {
        let mut game = GameTestState::new(r#"
####
#@$#
####
"#);
        assert_eq!(game.assert_blocked(Right), MoveOutcome::Blocked(BlockReason::WallBehindCrate));
        assert_eq!(game.player(), Position::new(1, 1));
        assert_eq!(game.crates(), vec![Position::new(2, 1)]);
    }

    #[test]
    fn when_block_pushed_into_block_remains_two_blocks() {
        let mut game = GameTestState::new(r#"
#####
#@$$#
#####
"#);
        assert_eq!(game.assert_blocked(Right), MoveOutcome::Blocked(BlockReason::CrateBehindCrate));
        game.assert_matches(r#"
#####
#@$$#
#####
"#);
    }

    #[test]
    fn crate_pair_with_room_behind_still_blocks() {
        let mut game = GameTestState::new(r#"
#@$$ #
"#);
        game.assert_blocked(Right);
        game.assert_matches(r#"
#@$$ #
"#);
    }

    #[test]
    fn walking_into_wall_is_blocked() {
        let mut game = GameTestState::new(r#"
###
#@#
###
"#);
        for dir in Direction::ALL {
            assert_eq!(game.assert_blocked(dir), MoveOutcome::Blocked(BlockReason::Wall));
        }
    }

    #[test]
    fn player_walks_over_targets() {
        let mut game = GameTestState::new(r#"
#@. #
"#);
        game.assert_move(Right);
        game.assert_matches(r#"
# + #
"#);
        game.assert_move(Right);
        game.assert_matches(r#"
# .@#
"#);
    }

    #[test]
    fn crates_cannot_be_pulled() {
        let mut game = GameTestState::new(r#"
# $@ #
"#);
        game.assert_move(Right);
        game.assert_matches(r#"
# $ @#
"#);
    }

    #[test]
    fn crate_pushed_off_target_uncompletes_level() {
        let mut game = GameTestState::new(r#"
#@*  #
"#);
        assert!(game.game_state.is_complete());
        game.assert_move(Right);
        assert!(!game.game_state.is_complete());
        game.assert_matches(r#"
# +$ #
"#);
    }

    #[test]
    fn when_block_moves_game_is_inequal() {
        let mut game = GameTestState::new(r#"
#@$ #
"#);
        let original_state = game.game_state.clone();
        game.assert_move(Right);

        assert_ne!(original_state, game.game_state);
    }

    #[test]
    fn when_player_moves_back_game_is_equal() {
        let mut game = GameTestState::new(r#"
#@ $#
"#);
        let original_state = game.game_state.clone();
        game.assert_move(Right);
        game.assert_move(Left);

        game.assert_matches(r#"
#@ $#
"#);
        assert_eq!(original_state, game.game_state);
    }

    #[test]
    fn when_blocks_swap_game_remains_equal() {
        let mut game = GameTestState::new(r#"
######
#    #
#@$  #
# $  #
#    #
######
"#);
        let original_state = game.game_state.clone();
        game.assert_moves(&[
            Right, Left,
            Down, Down,
            Right, Up,
            Right, Right, Up, Up,
            Left, Down, Right, Down, Left,]);
        game.assert_matches(r#"
######
#    #
# $  #
# $@ #
#    #
######
"#);
        game.assert_moves(&[
            Down, Left, Left, Up, Up,]);

        game.assert_matches(r#"
######
#    #
#@$  #
# $  #
#    #
######
"#);
        assert_eq!(original_state, game.game_state);
    }

    #[test]
    fn ignore_never_changes_anything() {
        let mut game = GameTestState::new(r#"
#####
#@$.#
#####
"#);
        assert_eq!(game.assert_blocked(Ignore), MoveOutcome::Ignored);
    }
}
