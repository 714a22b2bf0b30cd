use super::*;

#[test]
fn test_score_counts_draws_as_half() {
    let mut result = MatchResult::new();
    result.record(GameResult::Win);
    result.record(GameResult::Draw);
    result.record(GameResult::Loss);
    result.record(GameResult::Win);
    assert_eq!(result.total_games(), 4);
    assert!((result.score() - 0.625).abs() < 1e-9);
}

#[test]
fn test_empty_match_scores_even() {
    assert_eq!(MatchResult::new().score(), 0.5);
}

#[test]
fn test_result_perspective() {
    assert_eq!(
        GameResult::for_player(Some(Player::Gote), Player::Sente),
        GameResult::Loss
    );
    assert_eq!(
        GameResult::for_player(Some(Player::Gote), Player::Gote),
        GameResult::Win
    );
    assert_eq!(GameResult::for_player(None, Player::Gote), GameResult::Draw);
    assert_eq!(GameResult::Loss.flipped(), GameResult::Win);
    assert_eq!(GameResult::Draw.flipped(), GameResult::Draw);
}
