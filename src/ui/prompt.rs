//! Interactive input: turning typed answers into a legal `Move`.
//!
//! The player names a row (1-based), a block by its size when the row has
//! more than one, how many pins to take, and where to take them from when
//! not taking the whole block. Bad answers print a message and start the
//! question sequence again.

use std::io::{self, BufRead, Write};

use crate::core::{Board, Difficulty, Move};
use crate::error::InputError;

/// Where in a block the removed run sits.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Placement {
    /// Take from the left edge.
    Left,
    /// Take from the right edge.
    Right,
    /// Take from the exact centre, leaving two equal halves.
    Center,
}

impl Placement {
    /// Menu choice: 1 = left, 2 = right, 3 = middle.
    pub fn from_choice(choice: u32) -> Result<Self, InputError> {
        match choice {
            1 => Ok(Placement::Left),
            2 => Ok(Placement::Right),
            3 => Ok(Placement::Center),
            _ => Err(InputError::InvalidPlacement),
        }
    }

    /// Offset of the first removed pin.
    ///
    /// The centre is only defined when the remainder splits evenly.
    pub fn start(self, block_size: u32, count: u32) -> Result<u32, InputError> {
        let rest = block_size
            .checked_sub(count)
            .ok_or(InputError::InvalidCount { block_size })?;
        match self {
            Placement::Left => Ok(0),
            Placement::Right => Ok(rest),
            Placement::Center if rest % 2 == 0 => Ok(rest / 2),
            Placement::Center => Err(InputError::UnevenCenter),
        }
    }
}

/// Index of the first block with the given size.
pub fn block_index(blocks: &[u32], size: u32) -> Result<usize, InputError> {
    blocks
        .iter()
        .position(|&b| b == size)
        .ok_or(InputError::InvalidBlock)
}

/// Check a pin count against a block.
pub fn check_count(count: u32, block_size: u32) -> Result<(), InputError> {
    if (1..=block_size).contains(&count) {
        Ok(())
    } else {
        Err(InputError::InvalidCount { block_size })
    }
}

/// A move as the player describes it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveRequest {
    /// Row number as displayed (1-based).
    pub row: usize,
    /// Size of the block to take from; `None` for a single-block row.
    pub block_size: Option<u32>,
    /// Pins to take.
    pub count: u32,
    /// Where to take them; ignored when taking the whole block.
    pub placement: Option<Placement>,
}

impl MoveRequest {
    /// Resolve against a board into a legal move.
    pub fn resolve(&self, board: &Board) -> Result<Move, InputError> {
        let row_index = self.row.checked_sub(1).ok_or(InputError::InvalidRow)?;
        let row = board.row(row_index).ok_or(InputError::InvalidRow)?;
        let blocks = row.blocks();

        let block = match self.block_size {
            Some(size) => block_index(blocks, size)?,
            None if blocks.len() == 1 => 0,
            None => return Err(InputError::InvalidBlock),
        };
        let size = blocks[block];

        check_count(self.count, size)?;
        let whole = Move::new(row_index, block, 0, self.count);
        if whole.takes_whole(size) {
            return Ok(whole);
        }

        let start = self
            .placement
            .ok_or(InputError::InvalidPlacement)?
            .start(size, self.count)?;
        Ok(Move { start, ..whole })
    }
}

/// Why a question sequence stopped early.
enum Interrupt {
    Eof,
    Invalid(InputError),
    Io(io::Error),
}

impl From<InputError> for Interrupt {
    fn from(err: InputError) -> Self {
        Interrupt::Invalid(err)
    }
}

impl From<io::Error> for Interrupt {
    fn from(err: io::Error) -> Self {
        Interrupt::Io(err)
    }
}

/// Line-based prompter over any reader and writer.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    /// Create a prompter.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// The writer, for messages outside a question.
    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    /// Give back the reader and writer.
    pub fn into_parts(self) -> (R, W) {
        (self.input, self.output)
    }

    /// Ask for difficulty until a valid choice is made.
    ///
    /// Returns `None` at end of input.
    pub fn read_difficulty(&mut self) -> io::Result<Option<Difficulty>> {
        loop {
            let Some(line) = self.ask("Choose difficulty (1: Novice, 2: Intermediate, 3: Expert): ")? else {
                return Ok(None);
            };
            match line.trim() {
                "1" | "2" | "3" => return Ok(line.trim().parse().ok()),
                _ => writeln!(self.output, "{}", InputError::InvalidDifficulty)?,
            }
        }
    }

    /// Ask for a move until a legal one is described.
    ///
    /// Returns `None` at end of input.
    pub fn read_move(&mut self, board: &Board) -> io::Result<Option<Move>> {
        loop {
            match self.try_read_move(board) {
                Ok(mv) => return Ok(Some(mv)),
                Err(Interrupt::Eof) => return Ok(None),
                Err(Interrupt::Io(err)) => return Err(err),
                Err(Interrupt::Invalid(err)) => {
                    tracing::debug!(%err, "rejected input");
                    writeln!(self.output, "{err}")?;
                }
            }
        }
    }

    fn try_read_move(&mut self, board: &Board) -> Result<Move, Interrupt> {
        let rows = board.row_count();
        let row = self.read_number(&format!("Enter row to take from (1-{rows}): "))? as usize;
        let blocks = row
            .checked_sub(1)
            .and_then(|i| board.row(i))
            .ok_or(InputError::InvalidRow)?
            .blocks();

        writeln!(self.output, "Row {row} has blocks of sizes: {blocks:?}")?;

        let block_size = if blocks.len() > 1 {
            let size = self.read_number(&format!(
                "Which size block to take from? (e.g., {}): ",
                blocks[0]
            ))?;
            block_index(blocks, size)?;
            Some(size)
        } else {
            None
        };
        let size = block_size.unwrap_or(blocks[0]);

        let count = self.read_number(&format!("How many pins to take from the block of {size}? "))?;
        check_count(count, size)?;

        let placement = if count < size {
            let choice = self.read_number("From where? (1=left, 2=right, 3=middle): ")?;
            let placement = Placement::from_choice(choice)?;
            placement.start(size, count)?;
            Some(placement)
        } else {
            None
        };

        let request = MoveRequest {
            row,
            block_size,
            count,
            placement,
        };
        Ok(request.resolve(board)?)
    }

    fn read_number(&mut self, prompt: &str) -> Result<u32, Interrupt> {
        let line = self.ask(prompt)?.ok_or(Interrupt::Eof)?;
        line.trim()
            .parse()
            .map_err(|_| Interrupt::Invalid(InputError::NotANumber))
    }

    fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn prompter(script: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(Cursor::new(script.as_bytes().to_vec()), Vec::new())
    }

    fn transcript(p: Prompter<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(p.into_parts().1).unwrap()
    }

    #[test]
    fn test_placement_start() {
        assert_eq!(Placement::Left.start(7, 3), Ok(0));
        assert_eq!(Placement::Right.start(7, 3), Ok(4));
        assert_eq!(Placement::Center.start(7, 3), Ok(2));
        assert_eq!(Placement::Center.start(7, 2), Err(InputError::UnevenCenter));
        assert_eq!(Placement::from_choice(4), Err(InputError::InvalidPlacement));
    }

    #[test]
    fn test_placement_start_count_too_large() {
        for placement in [Placement::Left, Placement::Right, Placement::Center] {
            assert_eq!(
                placement.start(3, 5),
                Err(InputError::InvalidCount { block_size: 3 })
            );
        }
    }

    #[test]
    fn test_request_whole_block() {
        let request = MoveRequest {
            row: 2,
            block_size: None,
            count: 5,
            placement: None,
        };
        assert_eq!(request.resolve(&Board::initial()), Ok(Move::new(1, 0, 0, 5)));
    }

    #[test]
    fn test_request_picks_block_by_size() {
        let board = Board::from_rows(vec![vec![1, 4]]).unwrap();
        let request = MoveRequest {
            row: 1,
            block_size: Some(4),
            count: 2,
            placement: Some(Placement::Center),
        };
        assert_eq!(request.resolve(&board), Ok(Move::new(0, 1, 1, 2)));
    }

    #[test]
    fn test_request_errors() {
        let board = Board::initial();
        let base = MoveRequest {
            row: 1,
            block_size: None,
            count: 1,
            placement: Some(Placement::Left),
        };
        assert_eq!(
            MoveRequest { row: 0, ..base }.resolve(&board),
            Err(InputError::InvalidRow)
        );
        assert_eq!(
            MoveRequest { row: 4, ..base }.resolve(&board),
            Err(InputError::InvalidRow)
        );
        assert_eq!(
            MoveRequest { block_size: Some(2), ..base }.resolve(&board),
            Err(InputError::InvalidBlock)
        );
        assert_eq!(
            MoveRequest { count: 4, ..base }.resolve(&board),
            Err(InputError::InvalidCount { block_size: 3 })
        );
        assert_eq!(
            MoveRequest { placement: None, ..base }.resolve(&board),
            Err(InputError::InvalidPlacement)
        );
    }

    #[test]
    fn test_read_move_take_from_right() {
        let mut p = prompter("3\n2\n2\n");
        let mv = p.read_move(&Board::initial()).unwrap();
        assert_eq!(mv, Some(Move::new(2, 0, 5, 2)));
        assert!(transcript(p).contains("Row 3 has blocks of sizes: [7]"));
    }

    #[test]
    fn test_read_move_skips_placement_for_whole_block() {
        let mut p = prompter("1\n3\n");
        assert_eq!(p.read_move(&Board::initial()).unwrap(), Some(Move::new(0, 0, 0, 3)));
    }

    #[test]
    fn test_read_move_asks_block_size() {
        let board = Board::from_rows(vec![vec![2, 5]]).unwrap();
        let mut p = prompter("1\n5\n1\n3\n");
        assert_eq!(p.read_move(&board).unwrap(), Some(Move::new(0, 1, 2, 1)));
    }

    #[test]
    fn test_read_move_retries_after_bad_input() {
        let mut p = prompter("x\n9\n3\n2\n3\n3\n2\n2\n");
        // "x" not a number, "9" bad row, then row 3 count 2 centre (uneven),
        // then row 3 count 2 right.
        let mv = p.read_move(&Board::initial()).unwrap();
        assert_eq!(mv, Some(Move::new(2, 0, 5, 2)));

        let out = transcript(p);
        assert!(out.contains("Invalid input. Please enter numbers only."));
        assert!(out.contains("Invalid row. Please try again."));
        assert!(out.contains("Cannot take from middle and leave two equal sides. Try again."));
    }

    #[test]
    fn test_read_move_eof() {
        let mut p = prompter("2\n");
        assert_eq!(p.read_move(&Board::initial()).unwrap(), None);
    }

    #[test]
    fn test_read_difficulty() {
        let mut p = prompter("0\nexpert\n3\n");
        assert_eq!(p.read_difficulty().unwrap(), Some(Difficulty::Expert));
        let out = transcript(p);
        assert_eq!(out.matches("Invalid choice. Please enter 1, 2, or 3.").count(), 2);
    }

    #[test]
    fn test_read_difficulty_eof() {
        let mut p = prompter("");
        assert_eq!(p.read_difficulty().unwrap(), None);
    }
}
