//! Text rendering of the board.

use std::fmt;

use super::Board;

impl fmt::Display for Board {
    /// One line per row, top row first. Each value is right-justified to the
    /// width of the largest tile on the board:
    ///
    /// ```text
    /// | (   )  (  2)  (  4)  (128) |
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self
            .max_value()
            .map_or(1, |value| value.to_string().len());

        for row in self.rows() {
            f.write_str("|")?;
            for value in row {
                match value {
                    Some(value) => write!(f, " ({:>width$}) ", value, width = width)?,
                    None => write!(f, " ({:>width$}) ", "", width = width)?,
                }
            }
            writeln!(f, "|")?;
        }

        Ok(())
    }
}
