//! Game controller: the start / play / game-over state machine.
//!
//! The controller exclusively owns the board for the lifetime of a game.
//! A front end sends it one [`Command`] at a time and renders from its
//! accessors; a bot reply runs inside the same [`GameController::handle`]
//! call as the human move that triggered it, so no input can arrive in
//! between.

use crate::bot::{Decision, decide};
use crate::rules::{WinningLine, check_win};
use crate::{Board, Mark, Position};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Who plays against whom. Fixed from mode selection until restart.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter,
)]
pub enum GameMode {
    /// Two humans alternate at the same terminal.
    PlayerVsPlayer,
    /// The human plays X, the bot answers as O.
    PlayerVsBot,
}

impl GameMode {
    /// Button label.
    pub fn label(self) -> &'static str {
        match self {
            Self::PlayerVsPlayer => "Player vs Player",
            Self::PlayerVsBot => "Player vs Bot",
        }
    }

    /// The mark the bot plays in this mode, if there is a bot.
    pub fn bot_mark(self) -> Option<Mark> {
        match self {
            Self::PlayerVsPlayer => None,
            Self::PlayerVsBot => Some(Mark::O),
        }
    }
}

impl std::fmt::Display for GameMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Which screen the game is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for a mode selection.
    StartScreen,
    /// A game is being played.
    InProgress,
    /// A game has ended; waiting for restart.
    GameOver,
}

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    /// `mark` completed `line`.
    Win {
        /// The winning mark.
        mark: Mark,
        /// Endpoints of the completed line.
        line: WinningLine,
    },
    /// Full board, no line.
    Draw,
}

impl GameOutcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            Self::Win { mark, .. } => Some(*mark),
            Self::Draw => None,
        }
    }

    /// Returns true if the game was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, Self::Draw)
    }
}

impl std::fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Win { mark, .. } => write!(f, "Player {} wins!", mark),
            Self::Draw => write!(f, "It's a tie!"),
        }
    }
}

/// Input to the controller, with cells already resolved from screen
/// coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    /// Pick a mode on the start screen.
    SelectMode(GameMode),
    /// Place the current player's mark.
    SelectCell(Position),
    /// Leave the game-over screen.
    Restart,
    /// Stop the program.
    Quit,
}

/// What the controller did with a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Response {
    /// State changed.
    Applied,
    /// Not valid here (occupied cell, wrong phase); nothing changed.
    Ignored,
    /// The driver should exit.
    Quit,
}

/// Phase together with the data only that phase has.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Session {
    StartScreen,
    InProgress { mode: GameMode, to_move: Mark },
    GameOver { mode: GameMode, outcome: GameOutcome },
}

/// Owns the board and drives a game from mode selection to restart.
#[derive(Debug, Clone)]
pub struct GameController {
    board: Board,
    session: Session,
    last_bot_move: Option<Decision>,
    rng: StdRng,
}

impl GameController {
    /// Creates a controller on the start screen, using `rng` for bot ties.
    #[instrument(skip(rng))]
    pub fn new(rng: StdRng) -> Self {
        Self {
            board: Board::new(),
            session: Session::StartScreen,
            last_bot_move: None,
            rng,
        }
    }

    /// Creates a controller whose bot tie-breaking is reproducible.
    pub fn with_seed(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Creates a controller seeded from the operating system.
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    /// Applies one command.
    ///
    /// Commands that make no sense in the current phase, and moves on
    /// occupied cells, are ignored without changing anything.
    #[instrument(skip(self), fields(phase = ?self.phase()))]
    pub fn handle(&mut self, command: Command) -> Response {
        match (command, self.session) {
            (Command::Quit, _) => {
                info!("Quit requested");
                Response::Quit
            }
            (Command::SelectMode(mode), Session::StartScreen) => {
                self.start(mode);
                Response::Applied
            }
            (Command::SelectCell(pos), Session::InProgress { mode, to_move }) => {
                self.play_turn(mode, to_move, pos)
            }
            (Command::Restart, Session::GameOver { .. }) => {
                self.restart();
                Response::Applied
            }
            (command, _) => {
                debug!(?command, "Command not valid in this phase");
                Response::Ignored
            }
        }
    }

    /// Fresh board, X to move.
    fn start(&mut self, mode: GameMode) {
        info!(%mode, "Starting game");
        self.board.reset();
        self.last_bot_move = None;
        self.session = Session::InProgress {
            mode,
            to_move: Mark::X,
        };
    }

    /// Human move, followed by the bot's reply when it is the bot's turn.
    fn play_turn(&mut self, mode: GameMode, mover: Mark, pos: Position) -> Response {
        if !self.board.is_available(pos) {
            debug!(%pos, "Cell already taken");
            return Response::Ignored;
        }

        self.place(mode, mover, pos);

        if let Session::InProgress { to_move, .. } = self.session
            && mode.bot_mark() == Some(to_move)
        {
            self.bot_reply(mode, to_move);
        }

        Response::Applied
    }

    /// The bot's half of the turn.
    fn bot_reply(&mut self, mode: GameMode, bot: Mark) {
        match decide(&self.board, bot, bot.opponent(), &mut self.rng) {
            Some(decision) => {
                self.last_bot_move = Some(decision);
                self.place(mode, bot, *decision.position());
            }
            None => {
                // Unreachable while fullness is checked after every move.
                warn!("Bot found no free cell; ending in a draw");
                self.session = Session::GameOver {
                    mode,
                    outcome: GameOutcome::Draw,
                };
            }
        }
    }

    /// Marks the cell and moves to the next state.
    fn place(&mut self, mode: GameMode, mover: Mark, pos: Position) {
        self.board.mark(pos, mover);
        debug!(mark = %mover, %pos, "Cell marked");

        let result = check_win(&self.board, mover);
        self.session = if let Some(line) = result.winning_line() {
            info!(winner = %mover, ?line, "Game won");
            Session::GameOver {
                mode,
                outcome: GameOutcome::Win { mark: mover, line },
            }
        } else if self.board.is_full() {
            info!("Game drawn");
            Session::GameOver {
                mode,
                outcome: GameOutcome::Draw,
            }
        } else {
            Session::InProgress {
                mode,
                to_move: mover.opponent(),
            }
        };
    }

    /// Back to the start screen with an empty board.
    fn restart(&mut self) {
        info!("Restarting");
        self.board.reset();
        self.last_bot_move = None;
        self.session = Session::StartScreen;
    }

    /// The current phase.
    pub fn phase(&self) -> GamePhase {
        match self.session {
            Session::StartScreen => GamePhase::StartScreen,
            Session::InProgress { .. } => GamePhase::InProgress,
            Session::GameOver { .. } => GamePhase::GameOver,
        }
    }

    /// The board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The selected mode, outside the start screen.
    pub fn mode(&self) -> Option<GameMode> {
        match self.session {
            Session::StartScreen => None,
            Session::InProgress { mode, .. } | Session::GameOver { mode, .. } => Some(mode),
        }
    }

    /// Whose turn it is, while a game is in progress.
    pub fn current_player(&self) -> Option<Mark> {
        match self.session {
            Session::InProgress { to_move, .. } => Some(to_move),
            _ => None,
        }
    }

    /// How the game ended, on the game-over screen.
    pub fn outcome(&self) -> Option<GameOutcome> {
        match self.session {
            Session::GameOver { outcome, .. } => Some(outcome),
            _ => None,
        }
    }

    /// Winner of the finished game.
    pub fn winner(&self) -> Option<Mark> {
        self.outcome().and_then(|o| o.winner())
    }

    /// Line to highlight on the game-over screen.
    pub fn winning_line(&self) -> Option<WinningLine> {
        match self.outcome() {
            Some(GameOutcome::Win { line, .. }) => Some(line),
            _ => None,
        }
    }

    /// True when no cell is empty.
    pub fn is_board_full(&self) -> bool {
        self.board.is_full()
    }

    /// The bot's most recent move in this game.
    pub fn last_bot_move(&self) -> Option<Decision> {
        self.last_bot_move
    }

    /// One-line status for the current phase.
    pub fn status_message(&self) -> String {
        match self.session {
            Session::StartScreen => "Choose a game mode".to_string(),
            Session::InProgress { mode, to_move } => match mode.bot_mark() {
                Some(bot) if bot != to_move => match self.last_bot_move {
                    Some(d) => format!("Bot played {}. Your turn ({})", d.position(), to_move),
                    None => format!("Your turn ({})", to_move),
                },
                _ => format!("Player {}'s turn", to_move),
            },
            Session::GameOver { outcome, .. } => outcome.to_string(),
        }
    }
}

impl Default for GameController {
    fn default() -> Self {
        Self::from_entropy()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn playing(mode: GameMode) -> GameController {
        let mut game = GameController::with_seed(1);
        assert_eq!(game.handle(Command::SelectMode(mode)), Response::Applied);
        game
    }

    #[test]
    fn test_starts_on_start_screen() {
        let game = GameController::with_seed(0);
        assert_eq!(game.phase(), GamePhase::StartScreen);
        assert_eq!(game.mode(), None);
        assert_eq!(game.current_player(), None);
        assert_eq!(game.board(), &Board::new());
    }

    #[test]
    fn test_mode_selection_starts_with_x() {
        let game = playing(GameMode::PlayerVsPlayer);
        assert_eq!(game.phase(), GamePhase::InProgress);
        assert_eq!(game.mode(), Some(GameMode::PlayerVsPlayer));
        assert_eq!(game.current_player(), Some(Mark::X));
    }

    #[test]
    fn test_cells_ignored_on_start_screen() {
        let mut game = GameController::with_seed(0);
        assert_eq!(
            game.handle(Command::SelectCell(Position::Center)),
            Response::Ignored
        );
        assert_eq!(game.handle(Command::Restart), Response::Ignored);
        assert_eq!(game.board(), &Board::new());
    }

    #[test]
    fn test_players_alternate() {
        let mut game = playing(GameMode::PlayerVsPlayer);
        game.handle(Command::SelectCell(Position::Center));
        assert_eq!(game.current_player(), Some(Mark::O));
        game.handle(Command::SelectCell(Position::TopLeft));
        assert_eq!(game.current_player(), Some(Mark::X));
    }

    #[test]
    fn test_occupied_cell_ignored() {
        let mut game = playing(GameMode::PlayerVsPlayer);
        game.handle(Command::SelectCell(Position::Center));
        let before = *game.board();
        assert_eq!(
            game.handle(Command::SelectCell(Position::Center)),
            Response::Ignored
        );
        assert_eq!(game.board(), &before);
        assert_eq!(game.current_player(), Some(Mark::O));
    }

    #[test]
    fn test_mode_selection_ignored_mid_game() {
        let mut game = playing(GameMode::PlayerVsPlayer);
        assert_eq!(
            game.handle(Command::SelectMode(GameMode::PlayerVsBot)),
            Response::Ignored
        );
        assert_eq!(game.mode(), Some(GameMode::PlayerVsPlayer));
    }

    #[test]
    fn test_bot_replies_in_same_turn() {
        let mut game = playing(GameMode::PlayerVsBot);
        game.handle(Command::SelectCell(Position::TopLeft));
        assert_eq!(game.current_player(), Some(Mark::X));
        assert_eq!(game.board().count(Mark::O), 1);
        assert_eq!(game.board().get(Position::Center), crate::Cell::Occupied(Mark::O));
        let decision = game.last_bot_move().expect("bot moved");
        assert_eq!(*decision.position(), Position::Center);
    }

    #[test]
    fn test_quit_accepted_everywhere() {
        let mut game = GameController::with_seed(0);
        assert_eq!(game.handle(Command::Quit), Response::Quit);
        game.handle(Command::SelectMode(GameMode::PlayerVsPlayer));
        assert_eq!(game.handle(Command::Quit), Response::Quit);
        assert_eq!(game.phase(), GamePhase::InProgress);
    }

    #[test]
    fn test_status_messages() {
        let mut game = GameController::with_seed(0);
        assert_eq!(game.status_message(), "Choose a game mode");
        game.handle(Command::SelectMode(GameMode::PlayerVsPlayer));
        assert_eq!(game.status_message(), "Player X's turn");
        for pos in [
            Position::TopLeft,
            Position::MiddleLeft,
            Position::TopCenter,
            Position::Center,
            Position::TopRight,
        ] {
            game.handle(Command::SelectCell(pos));
        }
        assert_eq!(game.status_message(), "Player X wins!");
    }

    #[test]
    fn test_outcome_display() {
        let line = WinningLine::new(Position::TopLeft, Position::TopRight);
        assert_eq!(
            GameOutcome::Win { mark: Mark::O, line }.to_string(),
            "Player O wins!"
        );
        assert_eq!(GameOutcome::Draw.to_string(), "It's a tie!");
    }
}
