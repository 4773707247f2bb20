//! Tetris engine - orchestrates board, bag, player, active piece and timer
//!
//! The active piece is painted on the board: the board is the one record of
//! occupancy, and the piece only says which of those cells are still moving.
//! Every move or rotation is first tried on a candidate copy; only a legal
//! candidate is committed (old footprint erased, new footprint painted).

use crate::core::{
    score_for_landing, Bag, Board, BoardError, ConfigError, GameConfig, GameSnapshot, Piece,
    Player, Shape,
};
use crate::observer::{Observer, ObserverId, Observers};
use crate::types::*;

#[derive(Debug)]
pub struct Tetris {
    config: GameConfig,
    /// Milliseconds between automatic descents
    timer: u32,
    /// Starting level plus every level step earned by clearing lines
    level: u32,
    status: GameStatus,
    player: Player,
    board: Board,
    bag: Bag,
    /// The falling piece; `Some` exactly when its footprint is on the board
    current: Option<Piece>,
    observers: Observers,
}

impl Tetris {
    /// Create an engine with default parameters, waiting for `start_game`
    pub fn new(seed: u64) -> Self {
        let config = GameConfig::default();
        Self {
            player: Player::new(config.name.clone()),
            config,
            timer: MAXIMUM_TIMER,
            level: 0,
            status: GameStatus::NotStarted,
            board: Board::default(),
            bag: Bag::new(seed),
            current: None,
            observers: Observers::default(),
        }
    }

    pub fn subscribe(&mut self, observer: impl Observer + 'static) -> ObserverId {
        self.observers.subscribe(Box::new(observer))
    }

    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        self.observers.unsubscribe(id)
    }

    fn notify(&mut self) {
        self.observers.notify_all();
    }

    /// Extend (`keep_default`) or replace the shapes used from the next shuffle on
    pub fn set_bag(&mut self, shapes: Vec<Shape>, keep_default: bool) -> Result<(), ConfigError> {
        if keep_default {
            self.bag.add(shapes);
            Ok(())
        } else {
            self.bag.replace(shapes)
        }
    }

    /// Start a new session
    ///
    /// Everything is validated before anything changes; on error the engine is
    /// exactly as it was. On success the player, board and timer are reset,
    /// observers are notified, and the first piece is generated (which notifies
    /// again and leaves the game `On` or `Lost`).
    pub fn start_game(&mut self, config: GameConfig) -> Result<(), ConfigError> {
        config.validate()?;
        let board = Board::new(config.width, config.height)?;

        self.status = GameStatus::NotStarted;
        self.timer = MAXIMUM_TIMER;
        for _ in 0..config.level {
            if self.timer == MINIMUM_TIMER {
                break;
            }
            self.set_timer();
        }
        self.level = config.level;
        self.player = Player::new(config.name.trim());
        self.board = board;
        self.current = None;
        self.config = config;
        self.notify();

        self.generate_bric(true);
        Ok(())
    }

    /// Try to move the current piece one cell
    ///
    /// Returns true if the move was committed. A refused `Down` means the piece
    /// has landed: lines are cleared and scored (with `drops_count` as the
    /// hard-drop bonus) and the next piece is generated. Refused `Left`/`Right`
    /// moves change nothing.
    pub fn check_move(&mut self, dir: Direction, drops_count: u32) -> bool {
        self.step(dir, drops_count, true)
    }

    fn step(&mut self, dir: Direction, drops_count: u32, notify: bool) -> bool {
        if self.status != GameStatus::On {
            return false;
        }
        let Some(current) = self.current.as_ref() else {
            return false;
        };

        let candidate = current.translated(dir);
        let top = current.topmost_row();
        if self.fits(&candidate) {
            self.commit(candidate);
            if notify {
                self.notify();
            }
            return true;
        }

        if dir == Direction::Down {
            self.check_lines(top, drops_count);
            if self.status == GameStatus::On {
                self.generate_bric(false);
            }
        }
        false
    }

    /// Try to rotate the current piece in place; never lands it
    pub fn check_rotate(&mut self) -> bool {
        if self.status != GameStatus::On {
            return false;
        }
        let Some(current) = self.current.as_ref() else {
            return false;
        };

        let candidate = current.rotated();
        if !self.fits(&candidate) {
            return false;
        }
        self.commit(candidate);
        self.notify();
        true
    }

    /// Move the current piece down until it lands
    ///
    /// Returns the number of rows travelled, which is also the bonus passed to
    /// the landing.
    pub fn hard_drop(&mut self) -> u32 {
        let mut drops = 0;
        while self.step(Direction::Down, drops, false) {
            drops += 1;
        }
        drops
    }

    /// Per-tick driver
    ///
    /// Below the win time this is one automatic descent (which notifies when it
    /// moves or lands the piece); at or past it the game ends with `TimeUp`
    /// without moving anything. Does nothing, and notifies nobody, unless the
    /// game is `On`.
    pub fn tick(&mut self, elapsed_ms: u64) {
        if self.status != GameStatus::On {
            return;
        }
        if elapsed_ms < self.config.win_time_ms {
            self.check_move(Direction::Down, 0);
        } else {
            self.status = GameStatus::TimeUp;
            self.notify();
        }
    }

    /// Draw the next piece and place it centered on the top row
    ///
    /// `first` discards the pending queue and reshuffles (game start). If any of
    /// the spawn cells is taken the game is `Lost` and the board is left as it
    /// was. A piece that was still falling stays behind as settled cells.
    /// Once the game is over only `start_game` brings it back, so this does
    /// nothing then.
    pub fn generate_bric(&mut self, first: bool) {
        if self.status.is_over() {
            return;
        }
        if first {
            self.bag.shuffle(true);
        }
        let piece = Piece::spawn(self.bag.next_kind(), self.board.width());

        if piece
            .occupied_cells()
            .iter()
            .all(|&pos| self.board.is_free(pos))
        {
            self.paint(&piece, Some(piece.kind()));
            self.current = Some(piece);
            self.status = GameStatus::On;
        } else {
            self.current = None;
            self.status = GameStatus::Lost;
        }
        self.notify();
    }

    /// Whether the candidate only covers its predecessor's cells or free cells
    fn fits(&self, candidate: &Piece) -> bool {
        let current = self.current.as_ref();
        candidate.occupied_cells().iter().all(|&pos| {
            current.is_some_and(|piece| piece.contains(pos)) || self.board.is_free(pos)
        })
    }

    fn commit(&mut self, next: Piece) {
        if let Some(previous) = self.current.take() {
            self.paint(&previous, None);
        }
        self.paint(&next, Some(next.kind()));
        self.current = Some(next);
    }

    fn paint(&mut self, piece: &Piece, cell: Cell) {
        let cells = piece.occupied_cells();
        if let Err(err) = self.board.paint(&cells, cell) {
            invariant_broken(err);
        }
    }

    /// Settle the landed piece, clear lines, score, and check the win thresholds
    fn check_lines(&mut self, top: u8, drops_count: u32) {
        self.current = None;

        let lines = match self.board.clear_and_compact(top) {
            Ok(lines) => lines,
            Err(err) => invariant_broken(err),
        };
        if self.player.add_lines(lines) {
            self.set_level();
        }
        self.player.add_score(score_for_landing(drops_count, lines));

        if self.player.score() >= self.config.win_score {
            self.status = GameStatus::WonByScore;
        } else if self.player.lines_cleared() >= self.config.win_lines {
            self.status = GameStatus::WonByLines;
        }
        self.notify();
    }

    /// One level step every two cleared lines (even cumulative count)
    fn set_level(&mut self) {
        if self.player.lines_cleared() % 2 == 0 {
            self.level += 1;
            self.set_timer();
        }
    }

    /// Shorten the timer by one step, never below `MINIMUM_TIMER`
    fn set_timer(&mut self) {
        self.timer = self.timer.saturating_sub(TIMER_STEP).max(MINIMUM_TIMER);
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn timer(&self) -> u32 {
        self.timer
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_bric(&self) -> Option<&Piece> {
        self.current.as_ref()
    }

    /// Kind of the piece that will be generated next
    pub fn next_kind(&self) -> PieceKind {
        self.bag.peek_next()
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn win_score(&self) -> u32 {
        self.config.win_score
    }

    pub fn win_lines(&self) -> u32 {
        self.config.win_lines
    }

    pub fn win_time_ms(&self) -> u64 {
        self.config.win_time_ms
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.write_board(&self.board);
        out.active = self.current.as_ref().map(Into::into);
        out.next = Some(self.next_kind());
        out.player = (&self.player).into();
        out.status = self.status;
        out.timer_ms = self.timer;
        out.level = self.level;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for Tetris {
    fn default() -> Self {
        Self::new(1)
    }
}

/// Geometry produced a coordinate off the board; the state can no longer be trusted
#[cold]
fn invariant_broken(err: BoardError) -> ! {
    panic!("board invariant violated: {}", err)
}
