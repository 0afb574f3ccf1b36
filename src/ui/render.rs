//! Text rendering of the board.

use crate::core::{Board, INITIAL_ROWS};

/// Symbol for a standing pin.
pub const PIN_SYMBOL: char = '│';

const RULER_WIDTH: usize = 20;

/// Render the board, one line per initial row.
///
/// Live rows are labelled with the 1-based index the prompt accepts and
/// centred on the widest initial row. A row that has been cleared keeps its
/// place and is labelled with its initial row number, as `Row 1: <empty>`.
///
/// ```
/// use pins::core::Board;
/// use pins::ui::render;
///
/// let text = render(&Board::initial());
/// assert!(text.contains("Row 3:    │││││││"));
/// ```
#[must_use]
pub fn render(board: &Board) -> String {
    let ruler = "=".repeat(RULER_WIDTH);
    let width = INITIAL_ROWS.iter().copied().max().unwrap_or(0) as usize * 2;

    let mut lines = vec![ruler.clone()];
    for origin in 0..INITIAL_ROWS.len() {
        let live = board
            .rows()
            .enumerate()
            .find(|(_, row)| row.origin() == origin);

        match live {
            Some((index, row)) => {
                let pins = row
                    .blocks()
                    .iter()
                    .map(|&n| PIN_SYMBOL.to_string().repeat(n as usize))
                    .collect::<Vec<_>>()
                    .join("  ");
                let padding = " ".repeat(width.saturating_sub(pins.chars().count()) / 2);
                lines.push(format!("Row {}: {padding}{pins}", index + 1));
            }
            None => lines.push(format!("Row {}: <empty>", origin + 1)),
        }
    }
    lines.push(ruler);

    lines.join("\n") + "\n"
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Move;
    use crate::rules::apply_move;

    #[test]
    fn test_render_initial() {
        let expected = "\
====================
Row 1:      │││
Row 2:     │││││
Row 3:    │││││││
====================
";
        assert_eq!(render(&Board::initial()), expected);
    }

    #[test]
    fn test_render_split_block() {
        let board = apply_move(&Board::initial(), &Move::new(2, 0, 3, 1)).unwrap();
        let text = render(&board);
        assert!(text.contains("Row 3:    │││  │││\n"), "{text}");
    }

    #[test]
    fn test_render_cleared_row() {
        let board = apply_move(&Board::initial(), &Move::new(0, 0, 0, 3)).unwrap();
        let lines: Vec<_> = render(&board).lines().map(str::to_string).collect();
        assert_eq!(lines[1], "Row 1: <empty>");
        assert_eq!(lines[2], "Row 1:     │││││");
        assert_eq!(lines[3], "Row 2:    │││││││");
    }

    #[test]
    fn test_render_empty_board() {
        let text = render(&Board::empty());
        assert_eq!(text.matches("<empty>").count(), 3);
        assert!(text.contains("Row 3: <empty>\n"));
    }
}
