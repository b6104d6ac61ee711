/*!
 * Generic resizable matrix type
 *
 * A [Matrix] is a two dimensional container backed by a single flat buffer with
 * spare capacity on both ends of both axes. Rows and columns can be inserted or
 * removed at any position; edits at the edges consume slack in constant time and
 * interior edits shift whichever side has fewer elements to move, so repeated
 * structural edits stay cheap. A family of cursor style iterators traverses the
 * data in row major order or along arbitrary diagonals, forwards or backwards,
 * with or without mutation.
 */

use std::fmt;
use std::iter::repeat_with;
use std::mem;
use std::ops::{Index, IndexMut};

pub(crate) mod capacity;
pub mod errors;
pub mod iterators;

use crate::matrices::capacity::{Axis, ErasePlacement, InsertPlacement};
use crate::matrices::errors::MatrixError;
use crate::matrices::iterators::{
    DiagonalIterator, DiagonalIteratorMut, DiagonalOrder, OrderedIterator, OrderedIteratorMut,
    ReverseDiagonalIterator, ReverseDiagonalIteratorMut, ReverseOrderedIterator,
    ReverseOrderedIteratorMut, ReverseRowMajorIterator, ReverseRowMajorIteratorMut, RowMajor,
    RowMajorIterator, RowMajorIteratorMut, TraversalOrder, Window,
};

/// The maximum row and column lengths are usize, due to the internal storage being backed by a Vec
pub type Row = usize;
pub type Column = usize;

/**
 * A general purpose resizable matrix of some type.
 *
 * The data lives in one flat, row major buffer of `row_capacity() * column_capacity()`
 * cells. The logical rows and columns sit somewhere inside that buffer, with unused
 * slack before them (the capacity offsets) and after them, so that structural edits
 * near the edges do not have to move the rest of the data. Whenever an axis runs out
 * of capacity a fresh buffer is allocated with a quarter of the logical size as new
 * slack, split evenly between the two ends.
 *
 * Most methods only need `T` to be movable. Operations that can expose fresh buffer
 * cells (insertion, concatenation, resizing) require [`Default`](std::default::Default)
 * to initialise the slack, and operations that fill cells from a caller supplied
 * value require [`Clone`](std::clone::Clone).
 */
#[derive(Clone, Debug)]
pub struct Matrix<T> {
    data: Vec<T>,
    row_axis: Axis,
    column_axis: Axis,
}

/**
 * The truthiness rule for an element type, used by [any_truthy](Matrix::any_truthy).
 *
 * This is a customization point: implement it for your own element types to give
 * matrices of them a boolean interpretation. For the numeric primitives any non
 * zero value is truthy.
 */
pub trait Truthy {
    fn is_truthy(&self) -> bool;
}

macro_rules! truthy_integral {
    ($($type:ty),*) => {
        $(
            impl Truthy for $type {
                fn is_truthy(&self) -> bool {
                    *self != 0
                }
            }
        )*
    };
}

truthy_integral!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

macro_rules! truthy_float {
    ($($type:ty),*) => {
        $(
            impl Truthy for $type {
                fn is_truthy(&self) -> bool {
                    *self != 0.0
                }
            }
        )*
    };
}

truthy_float!(f32, f64);

impl Truthy for bool {
    fn is_truthy(&self) -> bool {
        *self
    }
}

/**
 * Methods for matrices of any type.
 */
impl<T> Matrix<T> {
    /**
     * Creates an empty matrix with no rows, no columns and no allocation.
     */
    pub fn new() -> Matrix<T> {
        Matrix {
            data: Vec::new(),
            row_axis: Axis::default(),
            column_axis: Axis::default(),
        }
    }

    /**
     * Returns the dimensionality of this matrix in Row, Column format
     */
    pub fn size(&self) -> (Row, Column) {
        (self.row_axis.size, self.column_axis.size)
    }

    /**
     * Gets the number of rows in this matrix.
     */
    pub fn rows(&self) -> Row {
        self.row_axis.size
    }

    /**
     * Gets the number of columns in this matrix.
     */
    pub fn columns(&self) -> Column {
        self.column_axis.size
    }

    /**
     * The number of rows the current buffer can hold without reallocating.
     */
    pub fn row_capacity(&self) -> usize {
        self.row_axis.capacity
    }

    /**
     * The number of columns the current buffer can hold without reallocating.
     */
    pub fn column_capacity(&self) -> usize {
        self.column_axis.capacity
    }

    /**
     * The number of unused row slots sitting before the first logical row.
     */
    pub fn row_capacity_offset(&self) -> usize {
        self.row_axis.offset
    }

    /**
     * The number of unused column slots sitting before the first logical column.
     */
    pub fn column_capacity_offset(&self) -> usize {
        self.column_axis.offset
    }

    /**
     * True if this matrix has no elements. An empty matrix has zero rows, zero
     * columns and zero capacity on both axes.
     */
    pub fn is_empty(&self) -> bool {
        self.row_axis.size == 0
    }

    // Maps a logical index to the cell's position in the flat buffer. Only valid
    // while the axes describe the current buffer.
    fn physical_index(&self, row: Row, column: Column) -> usize {
        (row + self.row_axis.offset) * self.column_axis.capacity
            + (column + self.column_axis.offset)
    }

    /**
     * Gets a reference to the value at this row and column if the index is in
     * range. Otherwise returns None. Rows and Columns are 0 indexed.
     */
    pub fn try_get_reference(&self, row: Row, column: Column) -> Option<&T> {
        if row < self.rows() && column < self.columns() {
            Some(&self.data[self.physical_index(row, column)])
        } else {
            None
        }
    }

    /**
     * Gets a reference to the value at this row and column. Rows and Columns are 0 indexed.
     *
     * # Panics
     *
     * Panics if the index is out of range. For a non panicking version see
     * [try_get_reference](Matrix::try_get_reference).
     */
    #[track_caller]
    pub fn get_reference(&self, row: Row, column: Column) -> &T {
        match self.try_get_reference(row, column) {
            Some(reference) => reference,
            None => panic!(
                "Index ({},{}) not in range for a {}x{} matrix",
                row,
                column,
                self.rows(),
                self.columns()
            ),
        }
    }

    /**
     * Gets a mutable reference to the value at this row and column if the index
     * is in range. Otherwise returns None.
     */
    pub fn try_get_reference_mut(&mut self, row: Row, column: Column) -> Option<&mut T> {
        if row < self.rows() && column < self.columns() {
            let index = self.physical_index(row, column);
            Some(&mut self.data[index])
        } else {
            None
        }
    }

    /**
     * Gets a mutable reference to the value at this row and column.
     *
     * # Panics
     *
     * Panics if the index is out of range. For a non panicking version see
     * [try_get_reference_mut](Matrix::try_get_reference_mut).
     */
    #[track_caller]
    pub fn get_reference_mut(&mut self, row: Row, column: Column) -> &mut T {
        let size = self.size();
        match self.try_get_reference_mut(row, column) {
            Some(reference) => reference,
            None => panic!(
                "Index ({},{}) not in range for a {}x{} matrix",
                row, column, size.0, size.1
            ),
        }
    }

    /**
     * Sets a new value to this row and column. Rows and Columns are 0 indexed.
     *
     * # Panics
     *
     * Panics if the index is out of range.
     */
    #[track_caller]
    pub fn set(&mut self, row: Row, column: Column, value: T) {
        *self.get_reference_mut(row, column) = value;
    }

    /**
     * True if at least one element in the matrix is truthy under the element
     * type's [Truthy] rule. An empty matrix is falsy.
     */
    pub fn any_truthy(&self) -> bool
    where
        T: Truthy,
    {
        self.row_major_iter().any(|value| value.is_truthy())
    }

    /**
     * Elementwise equality under an externally supplied predicate.
     *
     * Two matrices compare equal when they have the same size and the predicate
     * accepts every pair of corresponding elements. This is the customization
     * point for tolerance based comparison of floating point valued matrices,
     * where [PartialEq] would be too strict.
     *
     * ```
     * use elastic_matrix::matrices::Matrix;
     * let x: Matrix<f64> = Matrix::from(vec![vec![0.1 + 0.2]]);
     * let y = Matrix::from(vec![vec![0.3]]);
     * assert!(x != y);
     * assert!(x.approx_eq(&y, |a, b| (a - b).abs() < 1e-10));
     * ```
     */
    pub fn approx_eq(&self, other: &Matrix<T>, mut eq: impl FnMut(&T, &T) -> bool) -> bool {
        self.size() == other.size()
            && self
                .row_major_iter()
                .zip(other.row_major_iter())
                .all(|(a, b)| eq(a, b))
    }

    // Takes the buffer out of this matrix and returns only the logical cells in
    // row major order. Leaves the buffer empty; the caller must fix the axes.
    fn compact_data(&mut self) -> Vec<T> {
        if self.is_empty() {
            return Vec::new();
        }
        let width = self.column_axis.capacity;
        let first_row = self.row_axis.offset;
        let last_row = first_row + self.row_axis.size;
        let first_column = self.column_axis.offset;
        let last_column = first_column + self.column_axis.size;
        let data = mem::take(&mut self.data);
        data.into_iter()
            .enumerate()
            .filter_map(|(index, value)| {
                let physical_row = index / width;
                let physical_column = index % width;
                let logical = physical_row >= first_row
                    && physical_row < last_row
                    && physical_column >= first_column
                    && physical_column < last_column;
                logical.then_some(value)
            })
            .collect()
    }

    /**
     * Transfers ownership of the matrix contents to the caller as a flat row
     * major list of the logical elements, leaving this matrix empty.
     *
     * This is a one shot handoff of the storage, not a borrow; the slack cells
     * are discarded in the process.
     */
    pub fn take_base_vec(&mut self) -> Vec<T> {
        let values = self.compact_data();
        *self = Matrix::new();
        values
    }

    /**
     * Reallocates the buffer so that the capacity of each axis exactly matches
     * its size and both capacity offsets are zero. Does nothing when the buffer
     * is already tight, so calling this twice is the same as calling it once.
     */
    pub fn shrink_to_fit(&mut self) {
        let (rows, columns) = self.size();
        if self.row_axis.capacity == rows
            && self.column_axis.capacity == columns
            && self.row_axis.offset == 0
            && self.column_axis.offset == 0
        {
            return;
        }
        self.data = self.compact_data();
        self.row_axis = Axis {
            size: rows,
            capacity: rows,
            offset: 0,
        };
        self.column_axis = Axis {
            size: columns,
            capacity: columns,
            offset: 0,
        };
    }

    // Swaps two entire physical rows of the buffer, slack columns included.
    fn physical_row_swap(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        let width = self.column_axis.capacity;
        for i in 0..width {
            self.data.swap(a * width + i, b * width + i);
        }
    }

    /**
     * Exchanges the values in two cells of this matrix.
     */
    pub fn swap_items(
        &mut self,
        first: (Row, Column),
        second: (Row, Column),
    ) -> Result<(), MatrixError> {
        self.check_cell(first)?;
        self.check_cell(second)?;
        let a = self.physical_index(first.0, first.1);
        let b = self.physical_index(second.0, second.1);
        self.data.swap(a, b);
        Ok(())
    }

    /**
     * Exchanges two rows of this matrix.
     */
    pub fn swap_rows(&mut self, first: Row, second: Row) -> Result<(), MatrixError> {
        self.check_row(first)?;
        self.check_row(second)?;
        let offset = self.row_axis.offset;
        self.physical_row_swap(offset + first, offset + second);
        Ok(())
    }

    /**
     * Exchanges two columns of this matrix.
     */
    pub fn swap_columns(&mut self, first: Column, second: Column) -> Result<(), MatrixError> {
        self.check_column(first)?;
        self.check_column(second)?;
        if first == second {
            return Ok(());
        }
        for row in 0..self.rows() {
            let a = self.physical_index(row, first);
            let b = self.physical_index(row, second);
            self.data.swap(a, b);
        }
        Ok(())
    }

    /**
     * Exchanges a row of this matrix with a row of another matrix. The two
     * matrices must have the same number of columns.
     */
    pub fn swap_rows_with(
        &mut self,
        row: Row,
        other: &mut Matrix<T>,
        other_row: Row,
    ) -> Result<(), MatrixError> {
        self.check_row(row)?;
        other.check_row(other_row)?;
        if self.columns() != other.columns() {
            return Err(MatrixError::DimensionMismatch {
                expected: (other.rows(), self.columns()),
                actual: other.size(),
            });
        }
        for column in 0..self.columns() {
            let a = self.physical_index(row, column);
            let b = other.physical_index(other_row, column);
            mem::swap(&mut self.data[a], &mut other.data[b]);
        }
        Ok(())
    }

    /**
     * Exchanges a column of this matrix with a column of another matrix. The
     * two matrices must have the same number of rows.
     */
    pub fn swap_columns_with(
        &mut self,
        column: Column,
        other: &mut Matrix<T>,
        other_column: Column,
    ) -> Result<(), MatrixError> {
        self.check_column(column)?;
        other.check_column(other_column)?;
        if self.rows() != other.rows() {
            return Err(MatrixError::DimensionMismatch {
                expected: (self.rows(), other.columns()),
                actual: other.size(),
            });
        }
        for row in 0..self.rows() {
            let a = self.physical_index(row, column);
            let b = other.physical_index(row, other_column);
            mem::swap(&mut self.data[a], &mut other.data[b]);
        }
        Ok(())
    }

    /**
     * Exchanges a row of this matrix with a column of another matrix. The row
     * and the column must have the same length, so this matrix's column count
     * must equal the other matrix's row count.
     */
    pub fn swap_row_with_column(
        &mut self,
        row: Row,
        other: &mut Matrix<T>,
        other_column: Column,
    ) -> Result<(), MatrixError> {
        self.check_row(row)?;
        other.check_column(other_column)?;
        if self.columns() != other.rows() {
            return Err(MatrixError::DimensionMismatch {
                expected: (self.columns(), other.columns()),
                actual: other.size(),
            });
        }
        for i in 0..self.columns() {
            let a = self.physical_index(row, i);
            let b = other.physical_index(i, other_column);
            mem::swap(&mut self.data[a], &mut other.data[b]);
        }
        Ok(())
    }

    /**
     * Exchanges a row of this matrix with one of its own columns, which
     * requires the matrix to be square. Cell `(row, i)` is exchanged with cell
     * `(i, column)` for each `i` in turn.
     */
    pub fn swap_row_column(&mut self, row: Row, column: Column) -> Result<(), MatrixError> {
        self.check_row(row)?;
        self.check_column(column)?;
        if self.rows() != self.columns() {
            return Err(MatrixError::DimensionMismatch {
                expected: (self.rows(), self.rows()),
                actual: self.size(),
            });
        }
        for i in 0..self.rows() {
            let a = self.physical_index(row, i);
            let b = self.physical_index(i, column);
            self.data.swap(a, b);
        }
        Ok(())
    }

    /**
     * Removes a row from this Matrix, shifting the rows after it up by one.
     * Rows are 0 indexed.
     *
     * Whichever side of the removed row has fewer rows is the side that moves,
     * so removing at either edge never shifts anything. Removing the only row
     * empties the matrix entirely and releases the buffer; this is the one
     * removal that deallocates.
     */
    pub fn remove_row(&mut self, row: Row) -> Result<(), MatrixError> {
        self.check_row(row)?;
        match self.row_axis.plan_erase(row) {
            ErasePlacement::Deallocate => {
                *self = Matrix::new();
            }
            ErasePlacement::ShiftFront => {
                let offset = self.row_axis.offset;
                for r in (0..row).rev() {
                    self.physical_row_swap(offset + r, offset + r + 1);
                }
                self.row_axis.commit_erase(ErasePlacement::ShiftFront);
            }
            ErasePlacement::ShiftBack => {
                let offset = self.row_axis.offset;
                for r in row + 1..self.rows() {
                    self.physical_row_swap(offset + r, offset + r - 1);
                }
                self.row_axis.commit_erase(ErasePlacement::ShiftBack);
            }
        }
        Ok(())
    }

    /**
     * Removes a column from this Matrix, shifting the columns after it left by
     * one. Columns are 0 indexed.
     *
     * Removing the only column empties the matrix entirely and releases the
     * buffer, exactly as [remove_row](Matrix::remove_row) does for the only row.
     */
    pub fn remove_column(&mut self, column: Column) -> Result<(), MatrixError> {
        self.check_column(column)?;
        match self.column_axis.plan_erase(column) {
            ErasePlacement::Deallocate => {
                *self = Matrix::new();
            }
            ErasePlacement::ShiftFront => {
                let offset = self.column_axis.offset;
                for row in 0..self.rows() {
                    for c in (0..column).rev() {
                        let a = self.cell_in_row(row, offset + c);
                        let b = self.cell_in_row(row, offset + c + 1);
                        self.data.swap(a, b);
                    }
                }
                self.column_axis.commit_erase(ErasePlacement::ShiftFront);
            }
            ErasePlacement::ShiftBack => {
                let offset = self.column_axis.offset;
                for row in 0..self.rows() {
                    for c in column + 1..self.columns() {
                        let a = self.cell_in_row(row, offset + c);
                        let b = self.cell_in_row(row, offset + c - 1);
                        self.data.swap(a, b);
                    }
                }
                self.column_axis.commit_erase(ErasePlacement::ShiftBack);
            }
        }
        Ok(())
    }

    // Buffer index of a physical column within a logical row.
    fn cell_in_row(&self, row: Row, physical_column: usize) -> usize {
        (row + self.row_axis.offset) * self.column_axis.capacity + physical_column
    }

    fn check_row(&self, row: Row) -> Result<(), MatrixError> {
        if row < self.rows() {
            Ok(())
        } else {
            Err(MatrixError::RowOutOfBounds {
                row,
                rows: self.rows(),
            })
        }
    }

    fn check_column(&self, column: Column) -> Result<(), MatrixError> {
        if column < self.columns() {
            Ok(())
        } else {
            Err(MatrixError::ColumnOutOfBounds {
                column,
                columns: self.columns(),
            })
        }
    }

    fn check_cell(&self, cell: (Row, Column)) -> Result<(), MatrixError> {
        self.check_row(cell.0)?;
        self.check_column(cell.1)
    }
}

/**
 * Structural edits that can expose fresh buffer cells. These require
 * [Default] so the new slack can be initialised.
 */
impl<T: Default> Matrix<T> {
    /**
     * Creates a matrix of the provided size from a flat row major list of
     * values.
     *
     * ```
     * use elastic_matrix::matrices::Matrix;
     * let matrix = Matrix::from_flat((2, 3), vec![
     *     1, 2, 3,
     *     4, 5, 6,
     * ]);
     * assert_eq!((2, 3), matrix.size());
     * assert_eq!(6, matrix.get(1, 2));
     * ```
     *
     * # Panics
     *
     * Panics if the number of values does not match the size. For a non
     * panicking version see [try_from_flat](Matrix::try_from_flat).
     */
    #[track_caller]
    pub fn from_flat(size: (Row, Column), values: Vec<T>) -> Matrix<T> {
        match Matrix::try_from_flat(size, values) {
            Ok(matrix) => matrix,
            Err(error) => panic!("{}", error),
        }
    }

    /**
     * Creates a matrix of the provided size from a flat row major list of
     * values, failing if the list length does not match the size or only one
     * extent is zero.
     */
    pub fn try_from_flat(
        (rows, columns): (Row, Column),
        values: Vec<T>,
    ) -> Result<Matrix<T>, MatrixError> {
        if (rows == 0) != (columns == 0) {
            return Err(MatrixError::DimensionMismatch {
                expected: (0, 0),
                actual: (rows, columns),
            });
        }
        if values.len() != rows * columns {
            return Err(MatrixError::DimensionMismatch {
                expected: (rows, columns),
                actual: (1, values.len()),
            });
        }
        if rows == 0 {
            return Ok(Matrix::new());
        }
        let row_axis = Axis::fresh(rows);
        let column_axis = Axis::fresh(columns);
        let mut data: Vec<T> = repeat_with(T::default)
            .take(row_axis.capacity * column_axis.capacity)
            .collect();
        for (index, value) in values.into_iter().enumerate() {
            let row = index / columns;
            let column = index % columns;
            data[(row_axis.offset + row) * column_axis.capacity + column_axis.offset + column] =
                value;
        }
        Ok(Matrix {
            data,
            row_axis,
            column_axis,
        })
    }

    /**
     * Creates a matrix from a nested array of values, each inner vector
     * being a row, and hence the outer vector containing all rows in sequence,
     * the same way as when writing matrices in mathematics.
     *
     * Example of a 2 x 3 matrix in both notations:
     * ```ignore
     *   [
     *      1, 2, 4
     *      8, 9, 3
     *   ]
     * ```
     * ```
     * use elastic_matrix::matrices::Matrix;
     * Matrix::from(vec![
     *     vec![ 1, 2, 4 ],
     *     vec![ 8, 9, 3 ]]);
     * ```
     *
     * An empty outer vector creates the empty matrix.
     *
     * # Panics
     *
     * Panics if the rows have inconsistent lengths or a row is empty.
     */
    #[track_caller]
    pub fn from(values: Vec<Vec<T>>) -> Matrix<T> {
        if values.is_empty() {
            return Matrix::new();
        }
        let columns = values[0].len();
        assert!(columns > 0, "No columns defined");
        assert!(
            values.iter().all(|row| row.len() == columns),
            "Inconsistent size"
        );
        let rows = values.len();
        Matrix::from_flat((rows, columns), values.into_iter().flatten().collect())
    }

    // Rebuilds the buffer for a new row axis size, keeping the column axis as
    // is. When `gap` is provided the logical rows at and after it move down one
    // index, leaving an uninitialised logical row at the gap for the caller to
    // fill.
    fn reallocate_rows(&mut self, new_size: usize, gap: Option<Row>) {
        let row_axis = Axis::fresh(new_size);
        let width = self.column_axis.capacity;
        let mut data: Vec<T> = repeat_with(T::default)
            .take(row_axis.capacity * width)
            .collect();
        for row in 0..self.rows() {
            let destination = match gap {
                Some(gap) if row >= gap => row + 1,
                _ => row,
            };
            for column in 0..self.columns() {
                let source = self.physical_index(row, column);
                data[(row_axis.offset + destination) * width + self.column_axis.offset + column] =
                    mem::take(&mut self.data[source]);
            }
        }
        self.data = data;
        self.row_axis = row_axis;
    }

    // Rebuilds the buffer for a new column axis size, keeping the row axis as
    // is. `gap` works as in reallocate_rows but for a column.
    fn reallocate_columns(&mut self, new_size: usize, gap: Option<Column>) {
        let column_axis = Axis::fresh(new_size);
        let width = column_axis.capacity;
        let mut data: Vec<T> = repeat_with(T::default)
            .take(self.row_axis.capacity * width)
            .collect();
        for row in 0..self.rows() {
            for column in 0..self.columns() {
                let destination = match gap {
                    Some(gap) if column >= gap => column + 1,
                    _ => column,
                };
                let source = self.physical_index(row, column);
                data[(self.row_axis.offset + row) * width + column_axis.offset + destination] =
                    mem::take(&mut self.data[source]);
            }
        }
        self.data = data;
        self.column_axis = column_axis;
    }

    // Validates and makes room for one row at `row`, leaving the logical row
    // there ready to be overwritten, then writes the prepared values into it.
    fn insert_row_internal(&mut self, row: Row, values: Vec<T>) -> Result<(), MatrixError> {
        if self.is_empty() {
            return Err(MatrixError::EmptyMatrix);
        }
        if row > self.rows() {
            return Err(MatrixError::PositionOutOfBounds {
                position: row,
                limit: self.rows(),
            });
        }
        match self.row_axis.plan_insert(row) {
            InsertPlacement::ShiftFront => {
                let offset = self.row_axis.offset;
                for r in 0..row {
                    self.physical_row_swap(offset - 1 + r, offset + r);
                }
                self.row_axis.commit_insert(InsertPlacement::ShiftFront);
            }
            InsertPlacement::ShiftBack => {
                let offset = self.row_axis.offset;
                for r in (row..self.rows()).rev() {
                    self.physical_row_swap(offset + r + 1, offset + r);
                }
                self.row_axis.commit_insert(InsertPlacement::ShiftBack);
            }
            InsertPlacement::Reallocate => {
                self.reallocate_rows(self.rows() + 1, Some(row));
            }
        }
        for (column, value) in values.into_iter().enumerate() {
            let index = self.physical_index(row, column);
            self.data[index] = value;
        }
        Ok(())
    }

    // The column counterpart of insert_row_internal.
    fn insert_column_internal(
        &mut self,
        column: Column,
        values: Vec<T>,
    ) -> Result<(), MatrixError> {
        if self.is_empty() {
            return Err(MatrixError::EmptyMatrix);
        }
        if column > self.columns() {
            return Err(MatrixError::PositionOutOfBounds {
                position: column,
                limit: self.columns(),
            });
        }
        match self.column_axis.plan_insert(column) {
            InsertPlacement::ShiftFront => {
                let offset = self.column_axis.offset;
                for row in 0..self.rows() {
                    for c in 0..column {
                        let a = self.cell_in_row(row, offset - 1 + c);
                        let b = self.cell_in_row(row, offset + c);
                        self.data.swap(a, b);
                    }
                }
                self.column_axis.commit_insert(InsertPlacement::ShiftFront);
            }
            InsertPlacement::ShiftBack => {
                let offset = self.column_axis.offset;
                for row in 0..self.rows() {
                    for c in (column..self.columns()).rev() {
                        let a = self.cell_in_row(row, offset + c + 1);
                        let b = self.cell_in_row(row, offset + c);
                        self.data.swap(a, b);
                    }
                }
                self.column_axis.commit_insert(InsertPlacement::ShiftBack);
            }
            InsertPlacement::Reallocate => {
                self.reallocate_columns(self.columns() + 1, Some(column));
            }
        }
        for (row, value) in values.into_iter().enumerate() {
            let index = self.physical_index(row, column);
            self.data[index] = value;
        }
        Ok(())
    }

    /**
     * Inserts a new row into the Matrix at the provided index, shifting other
     * rows as needed and filling all entries with the values from the iterator
     * in sequence. Rows are 0 indexed; inserting at `rows()` appends at the
     * bottom.
     *
     * Fails if the matrix is empty, the index is beyond the row count, or the
     * iterator yields fewer values than there are columns; nothing is modified
     * on failure.
     *
     * Example of duplicating a row:
     * ```
     * use elastic_matrix::matrices::Matrix;
     * let mut x = Matrix::from(vec![vec![ 1, 2, 3 ]]);
     * let first: Vec<u8> = x.row_iter(0).copied().collect();
     * x.insert_row_with(1, first.into_iter()).unwrap();
     * assert_eq!((2, 3), x.size());
     * assert_eq!(x, Matrix::from(vec![vec![ 1, 2, 3 ], vec![ 1, 2, 3 ]]));
     * ```
     */
    pub fn insert_row_with<I>(&mut self, row: Row, values: I) -> Result<(), MatrixError>
    where
        I: Iterator<Item = T>,
    {
        let new_row: Vec<T> = values.take(self.columns()).collect();
        if !self.is_empty() && new_row.len() < self.columns() {
            return Err(MatrixError::DimensionMismatch {
                expected: (1, self.columns()),
                actual: (1, new_row.len()),
            });
        }
        self.insert_row_internal(row, new_row)
    }

    /**
     * Inserts a new column into the Matrix at the provided index, shifting
     * other columns as needed and filling all entries with the values from the
     * iterator in sequence. Columns are 0 indexed; inserting at `columns()`
     * appends at the right.
     *
     * Fails if the matrix is empty, the index is beyond the column count, or
     * the iterator yields fewer values than there are rows; nothing is
     * modified on failure.
     */
    pub fn insert_column_with<I>(&mut self, column: Column, values: I) -> Result<(), MatrixError>
    where
        I: Iterator<Item = T>,
    {
        let new_column: Vec<T> = values.take(self.rows()).collect();
        if !self.is_empty() && new_column.len() < self.rows() {
            return Err(MatrixError::DimensionMismatch {
                expected: (self.rows(), 1),
                actual: (new_column.len(), 1),
            });
        }
        self.insert_column_internal(column, new_column)
    }

    /**
     * Concatenates another matrix below this one, transferring its storage.
     * The other matrix must have the same number of columns.
     *
     * The destination's spare row capacity is reused when it is large enough
     * for the combined row count, shifting the existing rows towards the front
     * of the buffer if necessary; otherwise a fresh buffer is allocated via
     * the growth formula. Appending to an empty matrix adopts the other matrix
     * wholesale and appending an empty matrix is a no-op.
     *
     * To concatenate a matrix with itself, pass a clone:
     * ```
     * use elastic_matrix::matrices::Matrix;
     * let mut x = Matrix::from(vec![vec![ 1, 2 ], vec![ 3, 4 ]]);
     * let copy = x.clone();
     * x.append_rows(copy).unwrap();
     * assert_eq!(x, Matrix::from_flat((4, 2), vec![ 1, 2, 3, 4, 1, 2, 3, 4 ]));
     * ```
     */
    pub fn append_rows(&mut self, mut other: Matrix<T>) -> Result<(), MatrixError> {
        if other.is_empty() {
            return Ok(());
        }
        if self.is_empty() {
            *self = other;
            return Ok(());
        }
        if self.columns() != other.columns() {
            return Err(MatrixError::DimensionMismatch {
                expected: (other.rows(), self.columns()),
                actual: other.size(),
            });
        }
        let old_rows = self.rows();
        let combined = old_rows + other.rows();
        self.ensure_row_capacity(combined);
        for row in 0..other.rows() {
            for column in 0..other.columns() {
                let source = other.physical_index(row, column);
                let value = mem::take(&mut other.data[source]);
                let destination = (self.row_axis.offset + old_rows + row)
                    * self.column_axis.capacity
                    + self.column_axis.offset
                    + column;
                self.data[destination] = value;
            }
        }
        self.row_axis.size = combined;
        Ok(())
    }

    /**
     * Concatenates another matrix to the right of this one, transferring its
     * storage. The other matrix must have the same number of rows.
     *
     * Capacity reuse works as in [append_rows](Matrix::append_rows) but on the
     * column axis.
     */
    pub fn append_columns(&mut self, mut other: Matrix<T>) -> Result<(), MatrixError> {
        if other.is_empty() {
            return Ok(());
        }
        if self.is_empty() {
            *self = other;
            return Ok(());
        }
        if self.rows() != other.rows() {
            return Err(MatrixError::DimensionMismatch {
                expected: (self.rows(), other.columns()),
                actual: other.size(),
            });
        }
        let old_columns = self.columns();
        let combined = old_columns + other.columns();
        self.ensure_column_capacity(combined);
        for row in 0..other.rows() {
            for column in 0..other.columns() {
                let source = other.physical_index(row, column);
                let value = mem::take(&mut other.data[source]);
                let destination = (self.row_axis.offset + row) * self.column_axis.capacity
                    + self.column_axis.offset
                    + old_columns
                    + column;
                self.data[destination] = value;
            }
        }
        self.column_axis.size = combined;
        Ok(())
    }

    // Makes the row axis able to hold `combined` rows from its offset onwards,
    // shifting the rows towards the front of the buffer or reallocating only
    // when the capacity itself is insufficient.
    fn ensure_row_capacity(&mut self, combined: usize) {
        if self.row_axis.capacity >= combined {
            let furthest_offset = self.row_axis.capacity - combined;
            if self.row_axis.offset > furthest_offset {
                let old = self.row_axis.offset;
                for row in 0..self.rows() {
                    self.physical_row_swap(furthest_offset + row, old + row);
                }
                self.row_axis.offset = furthest_offset;
            }
        } else {
            let size = self.rows();
            self.reallocate_rows(combined, None);
            self.row_axis.size = size;
        }
    }

    // The column counterpart of ensure_row_capacity.
    fn ensure_column_capacity(&mut self, combined: usize) {
        if self.column_axis.capacity >= combined {
            let furthest_offset = self.column_axis.capacity - combined;
            if self.column_axis.offset > furthest_offset {
                let old = self.column_axis.offset;
                for row in 0..self.rows() {
                    for column in 0..self.columns() {
                        let a = self.cell_in_row(row, furthest_offset + column);
                        let b = self.cell_in_row(row, old + column);
                        self.data.swap(a, b);
                    }
                }
                self.column_axis.offset = furthest_offset;
            }
        } else {
            let size = self.columns();
            self.reallocate_columns(combined, None);
            self.column_axis.size = size;
        }
    }

    /**
     * Splits the matrix into two at the given row. Returns a newly allocated
     * matrix containing the rows `[position, rows())`, leaving `[0, position)`
     * in place. The capacity of this matrix does not shrink.
     *
     * Splitting at 0 transfers the whole matrix out and leaves this one empty;
     * splitting at `rows()` returns an empty matrix. Together with
     * [append_rows](Matrix::append_rows) this round trips:
     *
     * ```
     * use elastic_matrix::matrices::Matrix;
     * let mut x = Matrix::from(vec![vec![ 1, 2 ], vec![ 3, 4 ], vec![ 5, 6 ]]);
     * let original = x.clone();
     * let bottom = x.split_off_rows(2).unwrap();
     * assert_eq!((2, 2), x.size());
     * assert_eq!((1, 2), bottom.size());
     * x.append_rows(bottom).unwrap();
     * assert_eq!(original, x);
     * ```
     */
    pub fn split_off_rows(&mut self, position: Row) -> Result<Matrix<T>, MatrixError> {
        if position > self.rows() {
            return Err(MatrixError::PositionOutOfBounds {
                position,
                limit: self.rows(),
            });
        }
        if position == self.rows() {
            return Ok(Matrix::new());
        }
        if position == 0 {
            return Ok(mem::take(self));
        }
        let split_rows = self.rows() - position;
        let columns = self.columns();
        let row_axis = Axis::fresh(split_rows);
        let column_axis = Axis::fresh(columns);
        let mut data: Vec<T> = repeat_with(T::default)
            .take(row_axis.capacity * column_axis.capacity)
            .collect();
        for row in 0..split_rows {
            for column in 0..columns {
                let source = self.physical_index(position + row, column);
                data[(row_axis.offset + row) * column_axis.capacity + column_axis.offset + column] =
                    mem::take(&mut self.data[source]);
            }
        }
        self.row_axis.size = position;
        Ok(Matrix {
            data,
            row_axis,
            column_axis,
        })
    }

    /**
     * Splits the matrix into two at the given column. Returns a newly
     * allocated matrix containing the columns `[position, columns())`, leaving
     * `[0, position)` in place. The capacity of this matrix does not shrink.
     */
    pub fn split_off_columns(&mut self, position: Column) -> Result<Matrix<T>, MatrixError> {
        if position > self.columns() {
            return Err(MatrixError::PositionOutOfBounds {
                position,
                limit: self.columns(),
            });
        }
        if position == self.columns() {
            return Ok(Matrix::new());
        }
        if position == 0 {
            return Ok(mem::take(self));
        }
        let rows = self.rows();
        let split_columns = self.columns() - position;
        let row_axis = Axis::fresh(rows);
        let column_axis = Axis::fresh(split_columns);
        let mut data: Vec<T> = repeat_with(T::default)
            .take(row_axis.capacity * column_axis.capacity)
            .collect();
        for row in 0..rows {
            for column in 0..split_columns {
                let source = self.physical_index(row, position + column);
                data[(row_axis.offset + row) * column_axis.capacity + column_axis.offset + column] =
                    mem::take(&mut self.data[source]);
            }
        }
        self.column_axis.size = position;
        Ok(Matrix {
            data,
            row_axis,
            column_axis,
        })
    }

    /**
     * Transposes the matrix in place.
     *
     * A square matrix is transposed by swapping cells without touching the
     * buffer's shape. A rectangular matrix has to rebuild the buffer; the two
     * axes trade their capacities and offsets in the process.
     *
     * ```
     * use elastic_matrix::matrices::Matrix;
     * let mut x = Matrix::from(vec![
     *    vec![ 1, 2 ],
     *    vec![ 3, 4 ]]);
     * x.transpose();
     * let y = Matrix::from(vec![
     *    vec![ 1, 3 ],
     *    vec![ 2, 4 ]]);
     * assert_eq!(x, y);
     * ```
     */
    pub fn transpose(&mut self) {
        if self.is_empty() {
            return;
        }
        if self.rows() == self.columns() {
            for i in 0..self.rows() {
                for j in i + 1..self.columns() {
                    let a = self.physical_index(i, j);
                    let b = self.physical_index(j, i);
                    self.data.swap(a, b);
                }
            }
            return;
        }
        let (rows, columns) = self.size();
        let row_axis = self.column_axis;
        let column_axis = self.row_axis;
        let mut data: Vec<T> = repeat_with(T::default)
            .take(row_axis.capacity * column_axis.capacity)
            .collect();
        for row in 0..rows {
            for column in 0..columns {
                let source = self.physical_index(row, column);
                data[(row_axis.offset + column) * column_axis.capacity + column_axis.offset + row] =
                    mem::take(&mut self.data[source]);
            }
        }
        self.data = data;
        self.row_axis = row_axis;
        self.column_axis = column_axis;
    }

    /**
     * Changes the logical size of the matrix to the provided extents,
     * preserving the overlapping region and default initialising any newly
     * exposed cells. Shrinking never reduces the capacity of either axis;
     * growing reuses spare capacity where possible and otherwise reallocates
     * via the growth formula. Resizing either extent to zero empties the
     * matrix entirely.
     *
     * See [resize_with_value](Matrix::resize_with_value) to fill newly exposed
     * cells with a specific value instead.
     */
    pub fn resize(&mut self, rows: Row, columns: Column) {
        self.resize_internal(rows, columns, &mut T::default);
    }

    fn resize_internal(&mut self, rows: Row, columns: Column, fill: &mut dyn FnMut() -> T) {
        if rows == 0 || columns == 0 {
            *self = Matrix::new();
            return;
        }
        if self.is_empty() {
            let row_axis = Axis::fresh(rows);
            let column_axis = Axis::fresh(columns);
            self.data = repeat_with(&mut *fill)
                .take(row_axis.capacity * column_axis.capacity)
                .collect();
            self.row_axis = row_axis;
            self.column_axis = column_axis;
            return;
        }
        let (old_rows, old_columns) = self.size();
        if (old_rows, old_columns) == (rows, columns) {
            return;
        }
        let rows_fit = self.row_axis.offset + rows <= self.row_axis.capacity;
        let columns_fit = self.column_axis.offset + columns <= self.column_axis.capacity;
        if rows_fit && columns_fit {
            // the buffer can absorb the new size without moving anything
            self.row_axis.size = rows;
            self.column_axis.size = columns;
            for row in 0..rows {
                for column in 0..columns {
                    if row >= old_rows || column >= old_columns {
                        let index = self.physical_index(row, column);
                        self.data[index] = fill();
                    }
                }
            }
            return;
        }
        let row_axis = if self.row_axis.capacity >= rows {
            Axis::with_capacity(rows, self.row_axis.capacity)
        } else {
            Axis::fresh(rows)
        };
        let column_axis = if self.column_axis.capacity >= columns {
            Axis::with_capacity(columns, self.column_axis.capacity)
        } else {
            Axis::fresh(columns)
        };
        let mut data: Vec<T> = repeat_with(&mut *fill)
            .take(row_axis.capacity * column_axis.capacity)
            .collect();
        for row in 0..old_rows.min(rows) {
            for column in 0..old_columns.min(columns) {
                let source = self.physical_index(row, column);
                data[(row_axis.offset + row) * column_axis.capacity + column_axis.offset + column] =
                    mem::take(&mut self.data[source]);
            }
        }
        self.data = data;
        self.row_axis = row_axis;
        self.column_axis = column_axis;
    }

    /**
     * Grows the capacity of each axis to at least the requested amount,
     * reallocating the buffer with the slack split evenly around the data.
     * Requests at or below the current capacity of an axis are ignored;
     * capacity never shrinks. Reserving on an empty matrix does nothing, as an
     * empty matrix holds no buffer.
     */
    pub fn reserve(&mut self, row_capacity: usize, column_capacity: usize) {
        if self.is_empty() {
            return;
        }
        let row_target = self.row_axis.capacity.max(row_capacity);
        let column_target = self.column_axis.capacity.max(column_capacity);
        if row_target == self.row_axis.capacity && column_target == self.column_axis.capacity {
            return;
        }
        let (rows, columns) = self.size();
        let row_axis = Axis::with_capacity(rows, row_target);
        let column_axis = Axis::with_capacity(columns, column_target);
        let mut data: Vec<T> = repeat_with(T::default)
            .take(row_axis.capacity * column_axis.capacity)
            .collect();
        for row in 0..rows {
            for column in 0..columns {
                let source = self.physical_index(row, column);
                data[(row_axis.offset + row) * column_axis.capacity + column_axis.offset + column] =
                    mem::take(&mut self.data[source]);
            }
        }
        self.data = data;
        self.row_axis = row_axis;
        self.column_axis = column_axis;
    }
}

/**
 * Methods for matrices with types that can be copied, but still not neccessarily
 * numerical.
 */
impl<T: Clone> Matrix<T> {
    /**
     * Creates a matrix of the provided size with all elements initialised to
     * the provided value.
     */
    pub fn filled(value: T, size: (Row, Column)) -> Matrix<T> {
        let (rows, columns) = size;
        if rows == 0 || columns == 0 {
            return Matrix::new();
        }
        let row_axis = Axis::fresh(rows);
        let column_axis = Axis::fresh(columns);
        Matrix {
            data: vec![value; row_axis.capacity * column_axis.capacity],
            row_axis,
            column_axis,
        }
    }

    /**
     * Creates a square matrix of the provided size with the main diagonal set
     * to one value and every other element set to another.
     *
     * A 3 x 3 matrix from `Matrix::diagonal(3, 0, 1)`:
     * ```ignore
     * [
     *   1, 0, 0
     *   0, 1, 0
     *   0, 0, 1
     * ]
     * ```
     */
    pub fn diagonal(size: usize, off_diagonal_value: T, diagonal_value: T) -> Matrix<T> {
        let mut matrix = Matrix::filled(off_diagonal_value, (size, size));
        for i in 0..size {
            matrix.set(i, i, diagonal_value.clone());
        }
        matrix
    }

    /**
     * Gets a copy of the value at this row and column. Rows and Columns are 0 indexed.
     *
     * # Panics
     *
     * Panics if the index is out of range.
     */
    #[track_caller]
    pub fn get(&self, row: Row, column: Column) -> T {
        self.get_reference(row, column).clone()
    }

    /**
     * Overwrites every logical element with the provided value without
     * touching the capacity or the slack of either axis.
     */
    pub fn set_all(&mut self, value: T) {
        for row in 0..self.rows() {
            for column in 0..self.columns() {
                let index = self.physical_index(row, column);
                self.data[index] = value.clone();
            }
        }
    }

    /**
     * Applies a function to all values in the matrix, modifying the matrix.
     */
    pub fn map_mut(&mut self, mapping_function: impl Fn(T) -> T) {
        for row in 0..self.rows() {
            for column in 0..self.columns() {
                let index = self.physical_index(row, column);
                self.data[index] = mapping_function(self.data[index].clone());
            }
        }
    }

    /**
     * Creates and returns a new matrix with all values from the original with
     * the function applied to each. This can be used to change the type of the
     * matrix such as creating a mask:
     * ```
     * use elastic_matrix::matrices::Matrix;
     * let x = Matrix::from(vec![
     *    vec![ 0.0, 1.2 ],
     *    vec![ 5.8, 6.9 ]]);
     * let y = x.map(|element| element > 2.0);
     * let result = Matrix::from(vec![
     *    vec![ false, false ],
     *    vec![ true, true ]]);
     * assert_eq!(&y, &result);
     * ```
     */
    pub fn map<U>(&self, mapping_function: impl Fn(T) -> U) -> Matrix<U>
    where
        U: Default,
    {
        let mapped = self
            .row_major_iter()
            .map(|value| mapping_function(value.clone()))
            .collect();
        Matrix::from_flat(self.size(), mapped)
    }

    /**
     * Computes and returns the transpose of this matrix.
     *
     * ```
     * use elastic_matrix::matrices::Matrix;
     * let x = Matrix::from(vec![
     *    vec![ 1, 2 ],
     *    vec![ 3, 4 ]]);
     * let y = Matrix::from(vec![
     *    vec![ 1, 3 ],
     *    vec![ 2, 4 ]]);
     * assert_eq!(x.transposed(), y);
     * ```
     */
    pub fn transposed(&self) -> Matrix<T>
    where
        T: Default,
    {
        let (rows, columns) = self.size();
        let mut transposed = Vec::with_capacity(rows * columns);
        for column in 0..columns {
            for row in 0..rows {
                transposed.push(self.get(row, column));
            }
        }
        Matrix::from_flat((columns, rows), transposed)
    }

    /**
     * Changes the logical size of the matrix as [resize](Matrix::resize) does,
     * but fills any newly exposed cells with the provided value instead of
     * default initialising them.
     */
    pub fn resize_with_value(&mut self, rows: Row, columns: Column, value: T)
    where
        T: Default,
    {
        self.resize_internal(rows, columns, &mut || value.clone());
    }

    /**
     * Copies a rectangle of values from another matrix into this one.
     *
     * `row_count` by `column_count` values are read starting from
     * `source_position` in the source and written starting from
     * `destination_position` in this matrix. Both rectangles must lie fully in
     * bounds. A zero `row_count` or `column_count` is a no-op.
     */
    pub fn copy_from(
        &mut self,
        source: &Matrix<T>,
        row_count: usize,
        column_count: usize,
        source_position: (Row, Column),
        destination_position: (Row, Column),
    ) -> Result<(), MatrixError> {
        if row_count == 0 || column_count == 0 {
            return Ok(());
        }
        check_rectangle(source.size(), source_position, row_count, column_count)?;
        check_rectangle(self.size(), destination_position, row_count, column_count)?;
        for row in 0..row_count {
            for column in 0..column_count {
                let value = source.get(source_position.0 + row, source_position.1 + column);
                self.set(
                    destination_position.0 + row,
                    destination_position.1 + column,
                    value,
                );
            }
        }
        Ok(())
    }

    /**
     * Copies a rectangle of values from one place in this matrix to another,
     * staging the source rectangle first so overlapping regions copy
     * correctly. A zero `row_count` or `column_count` is a no-op.
     */
    pub fn copy_within(
        &mut self,
        row_count: usize,
        column_count: usize,
        source_position: (Row, Column),
        destination_position: (Row, Column),
    ) -> Result<(), MatrixError> {
        if row_count == 0 || column_count == 0 {
            return Ok(());
        }
        check_rectangle(self.size(), source_position, row_count, column_count)?;
        check_rectangle(self.size(), destination_position, row_count, column_count)?;
        let mut staged = Vec::with_capacity(row_count * column_count);
        for row in 0..row_count {
            for column in 0..column_count {
                staged.push(self.get(source_position.0 + row, source_position.1 + column));
            }
        }
        let mut values = staged.into_iter();
        for row in 0..row_count {
            for column in 0..column_count {
                if let Some(value) = values.next() {
                    self.set(
                        destination_position.0 + row,
                        destination_position.1 + column,
                        value,
                    );
                }
            }
        }
        Ok(())
    }

    /**
     * Inserts a new row into the Matrix at the provided index, shifting other
     * rows as needed and filling all entries with the provided value. Rows are
     * 0 indexed; inserting at `rows()` appends at the bottom.
     *
     * Fails if the matrix is empty or the index is beyond the row count.
     * Inserting then removing at the same position restores the original
     * matrix.
     */
    pub fn insert_row(&mut self, row: Row, value: T) -> Result<(), MatrixError>
    where
        T: Default,
    {
        let new_row = vec![value; self.columns()];
        self.insert_row_internal(row, new_row)
    }

    /**
     * Inserts a new column into the Matrix at the provided index, shifting
     * other columns as needed and filling all entries with the provided value.
     * Columns are 0 indexed; inserting at `columns()` appends at the right.
     *
     * Fails if the matrix is empty or the index is beyond the column count.
     */
    pub fn insert_column(&mut self, column: Column, value: T) -> Result<(), MatrixError>
    where
        T: Default,
    {
        let new_column = vec![value; self.rows()];
        self.insert_column_internal(column, new_column)
    }
}

// Validates that a rectangle of the given extent starting at `position` lies
// within a matrix of size `size`.
fn check_rectangle(
    size: (Row, Column),
    position: (Row, Column),
    row_count: usize,
    column_count: usize,
) -> Result<(), MatrixError> {
    if position.0 + row_count > size.0 || position.1 + column_count > size.1 {
        return Err(MatrixError::DimensionMismatch {
            expected: (row_count, column_count),
            actual: (
                size.0.saturating_sub(position.0),
                size.1.saturating_sub(position.1),
            ),
        });
    }
    Ok(())
}

/**
 * Methods for matrices with orderable types.
 */
impl<T: Ord> Matrix<T> {
    /**
     * Sorts the values along one diagonal in place, leaving every other
     * element untouched. Diagonal 0 is the main diagonal, positive indexes
     * select diagonals above it and negative indexes diagonals below it.
     *
     * # Panics
     *
     * Panics if the diagonal does not exist in this matrix.
     */
    #[track_caller]
    pub fn sort_diagonal(&mut self, diagonal: isize) {
        let order = self.assert_diagonal(diagonal);
        let span = order.span(self.size());
        // diagonals are short, an insertion sort over cell swaps is plenty
        for i in 1..span {
            let mut j = i;
            while j > 0 {
                let (previous_row, previous_column) = order.coordinate(self.size(), j - 1);
                let (row, column) = order.coordinate(self.size(), j);
                let previous = self.physical_index(previous_row, previous_column);
                let here = self.physical_index(row, column);
                if self.data[previous] > self.data[here] {
                    self.data.swap(previous, here);
                    j -= 1;
                } else {
                    break;
                }
            }
        }
    }
}

/**
 * Iterator factory methods. See the [iterators](crate::matrices::iterators)
 * module for the iterator types themselves.
 */
impl<T> Matrix<T> {
    /**
     * Returns a row major iterator over references to all values in this
     * matrix, proceeding through each row in order.
     */
    pub fn row_major_iter(&self) -> RowMajorIterator<'_, T> {
        let span = RowMajor.span(self.size());
        OrderedIterator::over(self, RowMajor, Window::full(span), 0)
    }

    /**
     * Returns a row major iterator over mutable references to all values in
     * this matrix.
     */
    pub fn row_major_iter_mut(&mut self) -> RowMajorIteratorMut<'_, T> {
        let span = RowMajor.span(self.size());
        OrderedIteratorMut::over(self, RowMajor, Window::full(span), 0)
    }

    /**
     * Returns a row major iterator positioned at the provided index, covering
     * that cell and everything after it in row major order.
     *
     * # Panics
     *
     * Panics if the index is out of range.
     */
    #[track_caller]
    pub fn row_major_iter_at(&self, row: Row, column: Column) -> RowMajorIterator<'_, T> {
        self.assert_cell(row, column);
        let span = RowMajor.span(self.size());
        OrderedIterator::over(
            self,
            RowMajor,
            Window::full(span),
            row * self.columns() + column,
        )
    }

    /**
     * The mutable counterpart of [row_major_iter_at](Matrix::row_major_iter_at).
     *
     * # Panics
     *
     * Panics if the index is out of range.
     */
    #[track_caller]
    pub fn row_major_iter_mut_at(
        &mut self,
        row: Row,
        column: Column,
    ) -> RowMajorIteratorMut<'_, T> {
        self.assert_cell(row, column);
        let span = RowMajor.span(self.size());
        let position = row * self.columns() + column;
        OrderedIteratorMut::over(self, RowMajor, Window::full(span), position)
    }

    /**
     * Returns a reverse row major iterator over references to all values in
     * this matrix, starting at the last cell of the last row and proceeding
     * towards the first cell of the first row.
     */
    pub fn reverse_row_major_iter(&self) -> ReverseRowMajorIterator<'_, T> {
        let span = RowMajor.span(self.size());
        ReverseOrderedIterator::over(self, RowMajor, Window::full(span), 0)
    }

    /**
     * The mutable counterpart of [reverse_row_major_iter](Matrix::reverse_row_major_iter).
     */
    pub fn reverse_row_major_iter_mut(&mut self) -> ReverseRowMajorIteratorMut<'_, T> {
        let span = RowMajor.span(self.size());
        ReverseOrderedIteratorMut::over(self, RowMajor, Window::full(span), 0)
    }

    /**
     * Returns an iterator over references to a single row in this matrix.
     * Rows are 0 indexed.
     *
     * # Panics
     *
     * Panics if the row is out of range.
     */
    #[track_caller]
    pub fn row_iter(&self, row: Row) -> RowMajorIterator<'_, T> {
        self.assert_row(row);
        OrderedIterator::over(self, RowMajor, self.row_window(row), 0)
    }

    /**
     * Returns an iterator over mutable references to a single row in this
     * matrix. Rows are 0 indexed.
     *
     * # Panics
     *
     * Panics if the row is out of range.
     */
    #[track_caller]
    pub fn row_iter_mut(&mut self, row: Row) -> RowMajorIteratorMut<'_, T> {
        self.assert_row(row);
        let window = self.row_window(row);
        OrderedIteratorMut::over(self, RowMajor, window, 0)
    }

    /**
     * Returns an iterator over references to a single row in this matrix,
     * traversed from the last column to the first.
     *
     * # Panics
     *
     * Panics if the row is out of range.
     */
    #[track_caller]
    pub fn reverse_row_iter(&self, row: Row) -> ReverseRowMajorIterator<'_, T> {
        self.assert_row(row);
        ReverseOrderedIterator::over(self, RowMajor, self.row_window(row), 0)
    }

    /**
     * The mutable counterpart of [reverse_row_iter](Matrix::reverse_row_iter).
     *
     * # Panics
     *
     * Panics if the row is out of range.
     */
    #[track_caller]
    pub fn reverse_row_iter_mut(&mut self, row: Row) -> ReverseRowMajorIteratorMut<'_, T> {
        self.assert_row(row);
        let window = self.row_window(row);
        ReverseOrderedIteratorMut::over(self, RowMajor, window, 0)
    }

    /**
     * Returns an iterator over references to one diagonal of this matrix,
     * proceeding down and right. Diagonal 0 is the main diagonal, positive
     * indexes select diagonals above it and negative indexes diagonals below
     * it, so for a matrix such as:
     * ```ignore
     * [
     *    1, 2, 3
     *    4, 5, 6
     *    7, 8, 9
     * ]
     * ```
     * diagonal 1 yields [2, 6] and diagonal -1 yields [4, 8].
     *
     * # Panics
     *
     * Panics if the diagonal does not exist in this matrix.
     */
    #[track_caller]
    pub fn diagonal_iter(&self, diagonal: isize) -> DiagonalIterator<'_, T> {
        let order = self.assert_diagonal(diagonal);
        let span = order.span(self.size());
        OrderedIterator::over(self, order, Window::full(span), 0)
    }

    /**
     * The mutable counterpart of [diagonal_iter](Matrix::diagonal_iter).
     *
     * # Panics
     *
     * Panics if the diagonal does not exist in this matrix.
     */
    #[track_caller]
    pub fn diagonal_iter_mut(&mut self, diagonal: isize) -> DiagonalIteratorMut<'_, T> {
        let order = self.assert_diagonal(diagonal);
        let span = order.span(self.size());
        OrderedIteratorMut::over(self, order, Window::full(span), 0)
    }

    /**
     * Returns an iterator over the diagonal passing through the provided
     * index, positioned at that cell. The same cell selects a different
     * relative position on a different diagonal, which is how an iterator can
     * be rebound to a new diagonal while keeping its place in the matrix.
     *
     * # Panics
     *
     * Panics if the index is out of range.
     */
    #[track_caller]
    pub fn diagonal_iter_at(&self, row: Row, column: Column) -> DiagonalIterator<'_, T> {
        self.assert_cell(row, column);
        let order = DiagonalOrder::through(row, column);
        let span = order.span(self.size());
        OrderedIterator::over(self, order, Window::full(span), row.min(column))
    }

    /**
     * The mutable counterpart of [diagonal_iter_at](Matrix::diagonal_iter_at).
     *
     * # Panics
     *
     * Panics if the index is out of range.
     */
    #[track_caller]
    pub fn diagonal_iter_mut_at(&mut self, row: Row, column: Column) -> DiagonalIteratorMut<'_, T> {
        self.assert_cell(row, column);
        let order = DiagonalOrder::through(row, column);
        let span = order.span(self.size());
        OrderedIteratorMut::over(self, order, Window::full(span), row.min(column))
    }

    /**
     * Returns an iterator over references to one diagonal of this matrix,
     * proceeding up and left from the diagonal's last cell.
     *
     * # Panics
     *
     * Panics if the diagonal does not exist in this matrix.
     */
    #[track_caller]
    pub fn reverse_diagonal_iter(&self, diagonal: isize) -> ReverseDiagonalIterator<'_, T> {
        let order = self.assert_diagonal(diagonal);
        let span = order.span(self.size());
        ReverseOrderedIterator::over(self, order, Window::full(span), 0)
    }

    /**
     * The mutable counterpart of [reverse_diagonal_iter](Matrix::reverse_diagonal_iter).
     *
     * # Panics
     *
     * Panics if the diagonal does not exist in this matrix.
     */
    #[track_caller]
    pub fn reverse_diagonal_iter_mut(
        &mut self,
        diagonal: isize,
    ) -> ReverseDiagonalIteratorMut<'_, T> {
        let order = self.assert_diagonal(diagonal);
        let span = order.span(self.size());
        ReverseOrderedIteratorMut::over(self, order, Window::full(span), 0)
    }

    /**
     * Returns a reverse iterator over the diagonal passing through the
     * provided index, positioned at that cell.
     *
     * # Panics
     *
     * Panics if the index is out of range.
     */
    #[track_caller]
    pub fn reverse_diagonal_iter_at(
        &self,
        row: Row,
        column: Column,
    ) -> ReverseDiagonalIterator<'_, T> {
        self.assert_cell(row, column);
        let order = DiagonalOrder::through(row, column);
        let span = order.span(self.size());
        ReverseOrderedIterator::over(self, order, Window::full(span), span - 1 - row.min(column))
    }

    /**
     * The mutable counterpart of [reverse_diagonal_iter_at](Matrix::reverse_diagonal_iter_at).
     *
     * # Panics
     *
     * Panics if the index is out of range.
     */
    #[track_caller]
    pub fn reverse_diagonal_iter_mut_at(
        &mut self,
        row: Row,
        column: Column,
    ) -> ReverseDiagonalIteratorMut<'_, T> {
        self.assert_cell(row, column);
        let order = DiagonalOrder::through(row, column);
        let span = order.span(self.size());
        let position = span - 1 - row.min(column);
        ReverseOrderedIteratorMut::over(self, order, Window::full(span), position)
    }

    fn row_window(&self, row: Row) -> Window {
        Window {
            start: row * self.columns(),
            end: (row + 1) * self.columns(),
        }
    }

    #[track_caller]
    fn assert_row(&self, row: Row) {
        if row >= self.rows() {
            panic!(
                "Row {} not in range for a {}x{} matrix",
                row,
                self.rows(),
                self.columns()
            );
        }
    }

    #[track_caller]
    fn assert_cell(&self, row: Row, column: Column) {
        if row >= self.rows() || column >= self.columns() {
            panic!(
                "Index ({},{}) not in range for a {}x{} matrix",
                row,
                column,
                self.rows(),
                self.columns()
            );
        }
    }

    #[track_caller]
    fn assert_diagonal(&self, diagonal: isize) -> DiagonalOrder {
        let order = DiagonalOrder::new(diagonal);
        if order.span(self.size()) == 0 {
            panic!(
                "Diagonal {} does not exist in a {}x{} matrix",
                diagonal,
                self.rows(),
                self.columns()
            );
        }
        order
    }
}

impl<T> Default for Matrix<T> {
    fn default() -> Self {
        Matrix::new()
    }
}

/**
 * PartialEq is implemented as two matrices are equal if and only if all their
 * elements are equal and they have the same size. Capacity and slack are not
 * compared.
 */
impl<T: PartialEq> PartialEq for Matrix<T> {
    fn eq(&self, other: &Self) -> bool {
        if self.size() != other.size() {
            return false;
        }
        self.row_major_iter()
            .zip(other.row_major_iter())
            .all(|(a, b)| a == b)
    }
}

/**
 * Linear indexing over the logical elements in row major order, so `matrix[0]`
 * is the top left element and `matrix[matrix.rows() * matrix.columns() - 1]`
 * the bottom right one.
 */
impl<T> Index<usize> for Matrix<T> {
    type Output = T;

    #[track_caller]
    fn index(&self, index: usize) -> &T {
        let (rows, columns) = self.size();
        if index >= rows * columns {
            panic!(
                "Index {} not in range for a matrix of {} elements",
                index,
                rows * columns
            );
        }
        self.get_reference(index / columns, index % columns)
    }
}

impl<T> IndexMut<usize> for Matrix<T> {
    #[track_caller]
    fn index_mut(&mut self, index: usize) -> &mut T {
        let (rows, columns) = self.size();
        if index >= rows * columns {
            panic!(
                "Index {} not in range for a matrix of {} elements",
                index,
                rows * columns
            );
        }
        self.get_reference_mut(index / columns, index % columns)
    }
}

impl<T: fmt::Display> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "[]");
        }
        for row in 0..self.rows() {
            write!(f, "[ ")?;
            for column in 0..self.columns() {
                write!(f, "{}", self.get_reference(row, column))?;
                if column + 1 < self.columns() {
                    write!(f, ", ")?;
                }
            }
            writeln!(f, " ]")?;
        }
        Ok(())
    }
}

#[test]
fn test_growth_applies_to_both_axes() {
    use crate::matrices::capacity::grow;
    let matrix = Matrix::from_flat((8, 4), vec![0; 32]);
    assert_eq!(matrix.row_capacity(), grow(8));
    assert_eq!(matrix.column_capacity(), grow(4));
}

#[cfg(feature = "serde")]
mod serde_impls {
    use super::{Column, Matrix, Row};
    use serde::de::Error;
    use serde::ser::{SerializeSeq, SerializeStruct};
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    struct Elements<'a, T>(&'a Matrix<T>);

    impl<T: Serialize> Serialize for Elements<'_, T> {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            let mut sequence = serializer.serialize_seq(Some(self.0.rows() * self.0.columns()))?;
            for element in self.0.row_major_iter() {
                sequence.serialize_element(element)?;
            }
            sequence.end()
        }
    }

    /**
     * Serializes the logical contents only; capacity and slack are rebuilt
     * from the growth formula on deserialization.
     */
    impl<T: Serialize> Serialize for Matrix<T> {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            let mut matrix = serializer.serialize_struct("Matrix", 3)?;
            matrix.serialize_field("rows", &self.rows())?;
            matrix.serialize_field("columns", &self.columns())?;
            matrix.serialize_field("elements", &Elements(self))?;
            matrix.end()
        }
    }

    #[derive(Deserialize)]
    #[serde(rename = "Matrix")]
    struct MatrixData<T> {
        rows: Row,
        columns: Column,
        elements: Vec<T>,
    }

    impl<'de, T: Deserialize<'de> + Default> Deserialize<'de> for Matrix<T> {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let data = MatrixData::deserialize(deserializer)?;
            Matrix::try_from_flat((data.rows, data.columns), data.elements)
                .map_err(D::Error::custom)
        }
    }
}
