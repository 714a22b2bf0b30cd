use thiserror::Error;

/// Every way a submitted move can be refused.
///
/// A refused move leaves the board exactly as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("square reference is off the board or malformed")]
    InvalidPosition,
    #[error("no piece on the origin square")]
    PieceNotFound,
    #[error("origin piece belongs to the side not on move")]
    WrongPlayer,
    #[error("piece cannot move there, or the promotion flag is inconsistent")]
    InvalidMove,
    #[error("drop target occupied, kind not in hand, or piece would have no forward move")]
    InvalidDrop,
    #[error("file already holds an unpromoted pawn of the same player")]
    TwoPawnRule,
    #[error("pawn drop would deliver checkmate")]
    DropMateRule,
    #[error("move leaves the mover's king attacked")]
    InCheck,
    #[error("game is already over")]
    GameOver,
}
