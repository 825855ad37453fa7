//! Minimal UCI client for an external engine process.
//!
//! An optional collaborator: when the service is configured with a path to
//! a UCI engine binary (e.g. Stockfish), `/ai-move` can ask it for a best
//! move instead of the built-in minimax selector. The internal search never
//! calls into this module.
//!
//! Only the handshake and `position fen ... / go depth N / bestmove` are
//! implemented; that is all the service needs.

use crate::error::{GameError, GameResult};
use std::io::{self, BufRead, BufReader, Write};
use std::process::{Child, ChildStdin, ChildStdout, Command, Stdio};

/// Handle to a spawned UCI engine process
pub struct UciEngine {
    child: Child,
    stdin: ChildStdin,
    stdout: BufReader<ChildStdout>,
}

impl UciEngine {
    /// Spawn the engine binary and complete the `uci`/`uciok` handshake
    pub fn spawn(path: &str) -> GameResult<Self> {
        let mut child = Command::new(path)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()?;

        let stdin = child.stdin.take().ok_or_else(pipe_error)?;
        let stdout = child.stdout.take().ok_or_else(pipe_error)?;

        let mut engine = Self {
            child,
            stdin,
            stdout: BufReader::new(stdout),
        };

        engine.send("uci")?;
        engine.wait_for("uciok")?;
        engine.send("isready")?;
        engine.wait_for("readyok")?;
        Ok(engine)
    }

    /// Ask the engine for its best move in the given position.
    ///
    /// Returns the move as a UCI token; the caller validates it against the
    /// live position like any other external move input.
    pub fn best_move(&mut self, fen: &str, depth: i32) -> GameResult<String> {
        self.send(&format!("position fen {}", fen))?;
        self.send(&format!("go depth {}", depth))?;

        let line = self.wait_for("bestmove")?;
        let token = line
            .split_whitespace()
            .nth(1)
            .ok_or_else(|| protocol_error(&line))?;

        if token == "(none)" {
            return Err(GameError::NoMoveAvailable);
        }
        Ok(token.to_string())
    }

    fn send(&mut self, command: &str) -> GameResult<()> {
        tracing::debug!(command, "uci >");
        writeln!(self.stdin, "{}", command)?;
        self.stdin.flush()?;
        Ok(())
    }

    /// Read lines until one starts with `prefix`; returns that line
    fn wait_for(&mut self, prefix: &str) -> GameResult<String> {
        loop {
            let mut line = String::new();
            let n = self.stdout.read_line(&mut line)?;
            if n == 0 {
                return Err(GameError::Engine(io::Error::new(
                    io::ErrorKind::UnexpectedEof,
                    "engine closed its output pipe",
                )));
            }
            let line = line.trim();
            tracing::debug!(line, "uci <");
            if line.starts_with(prefix) {
                return Ok(line.to_string());
            }
        }
    }
}

impl Drop for UciEngine {
    fn drop(&mut self) {
        let _ = writeln!(self.stdin, "quit");
        let _ = self.child.wait();
    }
}

fn pipe_error() -> GameError {
    GameError::Engine(io::Error::new(
        io::ErrorKind::BrokenPipe,
        "failed to capture engine stdio",
    ))
}

fn protocol_error(line: &str) -> GameError {
    GameError::Engine(io::Error::new(
        io::ErrorKind::InvalidData,
        format!("unexpected engine reply: {}", line),
    ))
}
