//! Event-driven game session: reads commands, plays moves, and runs searches off-thread.

use std::io::{self, BufRead};
use std::sync::mpsc;

use tracing::{debug, info, warn};

use plies_core::{Board, Color, Coordinate, MoveStatus, create_move};
use plies_engine::{MiniMax, SearchResult};

use crate::command::{Command, PlayerType, parse_command};
use crate::error::CliError;

/// Game setup: who plays each color, and how deep the computer searches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Who plays White.
    pub white: PlayerType,
    /// Who plays Black.
    pub black: PlayerType,
    /// Minimax depth in plies.
    pub depth: u32,
}

impl GameConfig {
    /// Return who plays `color`.
    pub fn player_type(&self, color: Color) -> PlayerType {
        match color {
            Color::White => self.white,
            Color::Black => self.black,
        }
    }

    fn set_player_type(&mut self, color: Color, player_type: PlayerType) {
        match color {
            Color::White => self.white = player_type,
            Color::Black => self.black = player_type,
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            white: PlayerType::Human,
            black: PlayerType::Computer,
            depth: 4,
        }
    }
}

/// Whether a search is running.
enum SessionState {
    Idle,
    Searching,
}

/// Events processed by the main session loop.
enum SessionEvent {
    Command(Result<Command, CliError>),
    SearchDone(SearchDone),
    InputClosed,
}

/// Payload returned by the search thread when it finishes.
struct SearchDone {
    /// Matches [`GameSession::generation`] unless the search was abandoned.
    generation: u64,
    result: SearchResult,
}

/// A game in progress, driven by text commands.
///
/// Searches run on a worker thread against a copy of the board. Abandoning a
/// search (with `stop` or `new`) bumps the generation
/// counter so the late result is recognized and dropped.
pub struct GameSession {
    board: Board,
    config: GameConfig,
    state: SessionState,
    generation: u64,
}

impl GameSession {
    /// Create a session on the standard layout.
    pub fn new(config: GameConfig) -> Self {
        Self {
            board: Board::standard(),
            config,
            state: SessionState::Idle,
            generation: 0,
        }
    }

    /// Return the current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Return the current configuration.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Run the event loop, reading from stdin until `quit` or input closes.
    pub fn run(mut self) -> Result<(), CliError> {
        let (tx, rx) = mpsc::channel::<SessionEvent>();

        // Spawn stdin reader thread
        let stdin_tx = tx.clone();
        std::thread::spawn(move || {
            let stdin = io::stdin();
            for line in stdin.lock().lines() {
                match line {
                    Ok(line) => {
                        let trimmed = line.trim();
                        if trimmed.is_empty() {
                            continue;
                        }
                        debug!(cmd = %trimmed, "received command");
                        if stdin_tx
                            .send(SessionEvent::Command(parse_command(trimmed)))
                            .is_err()
                        {
                            break;
                        }
                    }
                    Err(e) => {
                        let _ = stdin_tx.send(SessionEvent::Command(Err(e.into())));
                        break;
                    }
                }
            }
            let _ = stdin_tx.send(SessionEvent::InputClosed);
        });

        println!("{}", self.board);
        self.maybe_start_search(&tx);

        for event in &rx {
            match event {
                SessionEvent::Command(Ok(cmd)) => match cmd {
                    Command::New => self.handle_new(&tx),
                    Command::Show => println!("{}", self.board),
                    Command::Moves => self.handle_moves(),
                    Command::Move { from, to } => self.handle_move(from, to, &tx),
                    Command::Go => {
                        if let Err(e) = self.start_search(&tx) {
                            report(&e);
                        }
                    }
                    Command::Stop => self.handle_stop(),
                    Command::Depth(depth) => self.handle_depth(depth),
                    Command::Player { color, player_type } => {
                        self.handle_player(color, player_type, &tx)
                    }
                    Command::Status => println!("{}", self.status_line()),
                    Command::Quit => break,
                    Command::Unknown(cmd) => println!("unknown command: {cmd}"),
                },
                SessionEvent::Command(Err(CliError::Io { source })) => {
                    return Err(CliError::Io { source });
                }
                SessionEvent::Command(Err(e)) => report(&e),
                SessionEvent::SearchDone(done) => self.finish_search(done, &tx),
                SessionEvent::InputClosed => break,
            }
        }

        // A running search cannot be interrupted; its thread dies with the process.
        info!("plies shutting down");
        Ok(())
    }

    /// Play `from`-`to` for the side to move.
    ///
    /// The board only changes when the returned status is
    /// [`MoveStatus::Done`].
    pub fn play(&mut self, from: Coordinate, to: Coordinate) -> MoveStatus {
        let mv = create_move(&self.board, from, to);
        let transition = self.board.current_player().make_move(&mv);
        let status = transition.status();
        if status.is_done() {
            let next = transition.into_board();
            self.board = next;
        }
        status
    }

    /// Describe the state of the side to move.
    pub fn status_line(&self) -> String {
        let player = self.board.current_player();
        let color = player.color();
        if player.is_in_checkmate() {
            format!("checkmate, {} wins", color.flip())
        } else if player.is_in_stalemate() {
            "stalemate".to_string()
        } else if player.is_in_check() {
            format!("{color} to move, in check")
        } else {
            format!("{color} to move")
        }
    }

    /// Return `true` when the side to move is mated or stalemated.
    pub fn is_game_over(&self) -> bool {
        let player = self.board.current_player();
        player.is_in_checkmate() || player.is_in_stalemate()
    }

    fn handle_new(&mut self, tx: &mpsc::Sender<SessionEvent>) {
        self.abandon_search();
        self.board = Board::standard();
        println!("{}", self.board);
        self.maybe_start_search(tx);
    }

    fn handle_moves(&self) {
        let player = self.board.current_player();
        let moves: Vec<String> = player
            .legal_moves()
            .iter()
            .filter(|mv| player.make_move(mv).status().is_done())
            .map(ToString::to_string)
            .collect();
        println!("{}", moves.join(" "));
    }

    fn handle_move(&mut self, from: Coordinate, to: Coordinate, tx: &mpsc::Sender<SessionEvent>) {
        if matches!(self.state, SessionState::Searching) {
            warn!(%from, %to, "move received while searching, ignoring");
            println!("search in progress, use stop first");
            return;
        }
        match self.play(from, to) {
            MoveStatus::Done => {
                info!(%from, %to, "move played");
                println!("{}", self.board);
                println!("{}", self.status_line());
                self.maybe_start_search(tx);
            }
            status => println!("{from}-{to}: {status}"),
        }
    }

    fn handle_stop(&mut self) {
        if matches!(self.state, SessionState::Searching) {
            self.abandon_search();
            println!("search abandoned");
        }
    }

    fn handle_depth(&mut self, depth: u32) {
        self.config.depth = depth;
        info!(depth, "search depth set");
    }

    fn handle_player(
        &mut self,
        color: Color,
        player_type: PlayerType,
        tx: &mpsc::Sender<SessionEvent>,
    ) {
        let searched = self.board.side_to_move();
        if color == searched
            && player_type == PlayerType::Human
            && matches!(self.state, SessionState::Searching)
        {
            self.abandon_search();
            println!("search abandoned");
        }
        self.config.set_player_type(color, player_type);
        info!(%color, %player_type, "player assigned");
        self.maybe_start_search(tx);
    }

    /// Start a search if the side to move is played by the computer.
    fn maybe_start_search(&mut self, tx: &mpsc::Sender<SessionEvent>) {
        let side = self.board.side_to_move();
        if self.config.player_type(side) == PlayerType::Computer
            && matches!(self.state, SessionState::Idle)
            && !self.is_game_over()
        {
            if let Err(e) = self.start_search(tx) {
                report(&e);
            }
        }
    }

    fn start_search(&mut self, tx: &mpsc::Sender<SessionEvent>) -> Result<(), CliError> {
        if !matches!(self.state, SessionState::Idle) {
            warn!("go received while searching, ignoring");
            return Ok(());
        }
        if self.is_game_over() {
            println!("{}", self.status_line());
            return Ok(());
        }
        let search = MiniMax::new(self.config.depth)?;

        self.generation += 1;
        let generation = self.generation;
        let board = self.board.clone();
        let tx = tx.clone();

        std::thread::spawn(move || {
            let result = search.search(&board);
            let _ = tx.send(SessionEvent::SearchDone(SearchDone { generation, result }));
        });

        self.state = SessionState::Searching;
        println!("thinking ({} plies)...", self.config.depth);
        Ok(())
    }

    /// Forget the running search; its result will be discarded on arrival.
    fn abandon_search(&mut self) {
        self.generation += 1;
        self.state = SessionState::Idle;
    }

    fn finish_search(&mut self, done: SearchDone, tx: &mpsc::Sender<SessionEvent>) {
        if done.generation != self.generation {
            debug!(generation = done.generation, "discarding abandoned search result");
            return;
        }
        self.state = SessionState::Idle;

        let result = done.result;
        if result.best_move.is_null() {
            println!("no move available");
            return;
        }

        let transition = self.board.current_player().make_move(&result.best_move);
        if !transition.status().is_done() {
            warn!(mv = %result.best_move, status = %transition.status(), "search returned an unplayable move");
            return;
        }
        let next = transition.into_board();
        self.board = next;

        println!(
            "computer plays {} (score {}, {} nodes, {} ms)",
            result.best_move,
            result.score,
            result.nodes,
            result.elapsed.as_millis()
        );
        println!("{}", self.board);
        println!("{}", self.status_line());
        self.maybe_start_search(tx);
    }
}

/// Log and print an error that does not end the session.
fn report(err: &CliError) {
    warn!(error = %err, "command rejected");
    println!("error: {err}");
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}
