use std::error::Error;
use std::fmt;

use crate::matrices::{Column, Row};

/**
 * An error indicating failure of a matrix operation, either because an index
 * or position argument was out of range, or because the shapes of the operands
 * are incompatible.
 *
 * No operation is partially applied on failure; a matrix whose method returned
 * an error is left exactly as it was before the call.
 */
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum MatrixError {
    /**
     * A row index outside the matrix's rows.
     */
    RowOutOfBounds { row: Row, rows: Row },
    /**
     * A column index outside the matrix's columns.
     */
    ColumnOutOfBounds { column: Column, columns: Column },
    /**
     * An insertion or split position outside the valid `0..=limit` range.
     */
    PositionOutOfBounds { position: usize, limit: usize },
    /**
     * Two operands whose extents are incompatible for the operation, such as
     * concatenating by row with differing column counts.
     */
    DimensionMismatch {
        expected: (Row, Column),
        actual: (Row, Column),
    },
    /**
     * An operation that requires a non empty matrix was called on an empty one.
     */
    EmptyMatrix,
}

impl Error for MatrixError {}

impl fmt::Display for MatrixError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatrixError::RowOutOfBounds { row, rows } => {
                write!(f, "Row {} out of bounds for a matrix with {} rows", row, rows)
            }
            MatrixError::ColumnOutOfBounds { column, columns } => write!(
                f,
                "Column {} out of bounds for a matrix with {} columns",
                column, columns
            ),
            MatrixError::PositionOutOfBounds { position, limit } => write!(
                f,
                "Position {} out of bounds, valid positions are 0 to {}",
                position, limit
            ),
            MatrixError::DimensionMismatch { expected, actual } => write!(
                f,
                "Mismatched sizes, expected {}x{} but got {}x{}",
                expected.0, expected.1, actual.0, actual.1
            ),
            MatrixError::EmptyMatrix => {
                write!(f, "Operation requires a non empty matrix")
            }
        }
    }
}

#[test]
fn test_sync() {
    fn assert_sync<T: Sync>() {}
    assert_sync::<MatrixError>();
}

#[test]
fn test_send() {
    fn assert_send<T: Send>() {}
    assert_send::<MatrixError>();
}
