/*!
 * Iterators over parts of a Matrix
 *
 * Every iterator here is a cursor over a fixed traversal of a matrix: a
 * [TraversalOrder] decides which cells the traversal visits and in what order,
 * and a cursor tracks a position within a window of that traversal. On top of
 * the standard [Iterator] protocol the cursors support random access, moving by
 * an arbitrary signed offset in constant time, peeking without moving, and
 * reporting the matrix coordinates they currently sit on. Two cursors over the
 * same traversal of the same matrix are ordered by position and can measure
 * their distance from each other.
 *
 * Eight concrete iterator types arise from the three binary choices of
 * traversal (row major or diagonal), direction (forward or reverse), and
 * mutability:
 *
 * | Traversal | Forward | Reverse |
 * |-|-|-|
 * | Row major | [RowMajorIterator], [RowMajorIteratorMut] | [ReverseRowMajorIterator], [ReverseRowMajorIteratorMut] |
 * | Diagonal | [DiagonalIterator], [DiagonalIteratorMut] | [ReverseDiagonalIterator], [ReverseDiagonalIteratorMut] |
 *
 * All of them are created from the factory methods on [Matrix], such as
 * [row_major_iter](Matrix::row_major_iter) and
 * [diagonal_iter_mut](Matrix::diagonal_iter_mut).
 *
 * While a shared iterator exists the matrix cannot be structurally modified,
 * and a mutable iterator excludes all other access entirely, so the
 * invalidation hazards of iterating a container under modification are ruled
 * out at compile time by the borrow checker.
 */

use std::cmp::Ordering;
use std::fmt;
use std::iter::FusedIterator;
use std::marker::PhantomData;
use std::ptr;

use crate::matrices::{Column, Matrix, Row};

/**
 * A visiting order over the cells of a matrix.
 *
 * An order maps the half open range `0..span(size)` of traversal indexes to
 * matrix coordinates. Orders are tiny copyable values; an iterator carries its
 * order with it, and two iterators only compare or measure distance when their
 * orders are equal.
 */
pub trait TraversalOrder: Copy + PartialEq {
    /**
     * How many cells this order visits in a matrix of the provided size.
     */
    fn span(&self, size: (Row, Column)) -> usize;

    /**
     * The matrix coordinate visited at this traversal index, which must be
     * less than the span.
     */
    fn coordinate(&self, size: (Row, Column), index: usize) -> (Row, Column);
}

/**
 * The row major visiting order: every cell of the matrix, proceeding through
 * each row from left to right before moving to the next row.
 */
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct RowMajor;

impl TraversalOrder for RowMajor {
    fn span(&self, size: (Row, Column)) -> usize {
        size.0 * size.1
    }

    fn coordinate(&self, size: (Row, Column), index: usize) -> (Row, Column) {
        (index / size.1, index % size.1)
    }
}

/**
 * The visiting order along one diagonal of a matrix, proceeding down and
 * right.
 *
 * Diagonal 0 starts at the top left corner; positive diagonals start further
 * right along the top row and negative diagonals further down the left column.
 * A diagonal exists in a matrix when its span there is non zero.
 */
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct DiagonalOrder {
    diagonal: isize,
}

impl DiagonalOrder {
    pub(crate) fn new(diagonal: isize) -> DiagonalOrder {
        DiagonalOrder { diagonal }
    }

    /**
     * The order for the diagonal passing through the provided coordinate.
     */
    pub(crate) fn through(row: Row, column: Column) -> DiagonalOrder {
        DiagonalOrder {
            diagonal: column as isize - row as isize,
        }
    }

    /**
     * Which diagonal this order traverses.
     */
    pub fn diagonal(&self) -> isize {
        self.diagonal
    }

    // The coordinate the diagonal enters the matrix at.
    fn start(&self) -> (Row, Column) {
        if self.diagonal >= 0 {
            (0, self.diagonal as usize)
        } else {
            ((-self.diagonal) as usize, 0)
        }
    }
}

impl TraversalOrder for DiagonalOrder {
    fn span(&self, size: (Row, Column)) -> usize {
        let (row, column) = self.start();
        if row >= size.0 || column >= size.1 {
            return 0;
        }
        (size.0 - row).min(size.1 - column)
    }

    fn coordinate(&self, _size: (Row, Column), index: usize) -> (Row, Column) {
        let (row, column) = self.start();
        (row + index, column + index)
    }
}

/**
 * The half open range of traversal indexes an iterator is restricted to.
 * A full window covers the whole traversal; a row iterator uses the window
 * of a single row within the row major traversal.
 */
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Window {
    pub(crate) start: usize,
    pub(crate) end: usize,
}

impl Window {
    pub(crate) fn full(span: usize) -> Window {
        Window {
            start: 0,
            end: span,
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.end - self.start
    }
}

/**
 * A forward cursor over a traversal of a matrix, yielding references.
 *
 * See the [module documentation](crate::matrices::iterators) for the cursor
 * API shared by all eight iterator types.
 */
pub struct OrderedIterator<'a, T, O: TraversalOrder> {
    matrix: &'a Matrix<T>,
    order: O,
    window: Window,
    position: usize,
}

/**
 * A forward row major cursor yielding references.
 */
pub type RowMajorIterator<'a, T> = OrderedIterator<'a, T, RowMajor>;

/**
 * A forward diagonal cursor yielding references.
 */
pub type DiagonalIterator<'a, T> = OrderedIterator<'a, T, DiagonalOrder>;

impl<'a, T, O: TraversalOrder> OrderedIterator<'a, T, O> {
    pub(crate) fn over(
        matrix: &'a Matrix<T>,
        order: O,
        window: Window,
        position: usize,
    ) -> OrderedIterator<'a, T, O> {
        OrderedIterator {
            matrix,
            order,
            window,
            position,
        }
    }

    /**
     * How many cells remain from the current position to the end of the
     * window, the current cell included.
     */
    pub fn remaining(&self) -> usize {
        self.window.len() - self.position
    }

    /**
     * The position of this cursor within its window, 0 being the first cell
     * the cursor can yield.
     */
    pub fn position(&self) -> usize {
        self.position
    }

    /**
     * The visiting order this cursor traverses in.
     */
    pub fn order(&self) -> O {
        self.order
    }

    // The traversal index the cursor currently sits on, if not exhausted.
    fn index(&self) -> Option<usize> {
        if self.position < self.window.len() {
            Some(self.window.start + self.position)
        } else {
            None
        }
    }

    /**
     * A reference to the value at the current position, or None once the
     * cursor has moved past the end of its window.
     */
    pub fn get(&self) -> Option<&'a T> {
        let index = self.index()?;
        let (row, column) = self.order.coordinate(self.matrix.size(), index);
        self.matrix.try_get_reference(row, column)
    }

    /**
     * A reference to the value the provided signed offset away from the
     * current position, without moving the cursor. Offsets landing outside the
     * window return None.
     */
    pub fn peek(&self, offset: isize) -> Option<&'a T> {
        let target = self.position as isize + offset;
        if target < 0 || target >= self.window.len() as isize {
            return None;
        }
        let index = self.window.start + target as usize;
        let (row, column) = self.order.coordinate(self.matrix.size(), index);
        self.matrix.try_get_reference(row, column)
    }

    /**
     * Moves the cursor by a signed offset in constant time, clamping at the
     * two ends of the window, so a cursor never moves before its first cell or
     * more than one past its last.
     */
    pub fn advance(&mut self, offset: isize) {
        let target = self.position as isize + offset;
        self.position = target.clamp(0, self.window.len() as isize) as usize;
    }

    /**
     * The row of the cell the cursor currently sits on, or None once
     * exhausted.
     */
    pub fn row(&self) -> Option<Row> {
        let index = self.index()?;
        Some(self.order.coordinate(self.matrix.size(), index).0)
    }

    /**
     * The column of the cell the cursor currently sits on, or None once
     * exhausted.
     */
    pub fn column(&self) -> Option<Column> {
        let index = self.index()?;
        Some(self.order.coordinate(self.matrix.size(), index).1)
    }

    /**
     * True if this cursor traverses the provided matrix, which is an identity
     * check on the matrix object, not an equality check on its contents.
     */
    pub fn is_for(&self, matrix: &Matrix<T>) -> bool {
        ptr::eq(self.matrix, matrix)
    }

    /**
     * How many positions ahead of the other cursor this one is, negative if it
     * is behind. Cursors over different matrices, orders or windows have no
     * distance and return None.
     */
    pub fn distance_from(&self, other: &Self) -> Option<isize> {
        if self.comparable(other) {
            Some(self.position as isize - other.position as isize)
        } else {
            None
        }
    }

    fn comparable(&self, other: &Self) -> bool {
        ptr::eq(self.matrix, other.matrix)
            && self.order == other.order
            && self.window == other.window
    }
}

impl<'a, T, O: TraversalOrder> Iterator for OrderedIterator<'a, T, O> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let value = self.get()?;
        self.position += 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining();
        (remaining, Some(remaining))
    }
}

impl<T, O: TraversalOrder> ExactSizeIterator for OrderedIterator<'_, T, O> {}
impl<T, O: TraversalOrder> FusedIterator for OrderedIterator<'_, T, O> {}

impl<T, O: TraversalOrder> Clone for OrderedIterator<'_, T, O> {
    fn clone(&self) -> Self {
        OrderedIterator {
            matrix: self.matrix,
            order: self.order,
            window: self.window,
            position: self.position,
        }
    }
}

impl<T, O: TraversalOrder + fmt::Debug> fmt::Debug for OrderedIterator<'_, T, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OrderedIterator")
            .field("order", &self.order)
            .field("window", &self.window)
            .field("position", &self.position)
            .finish()
    }
}

/**
 * Cursors over the same traversal of the same matrix are equal when they sit
 * at the same position. Cursors over different matrices, orders or windows are
 * never equal.
 */
impl<T, O: TraversalOrder> PartialEq for OrderedIterator<'_, T, O> {
    fn eq(&self, other: &Self) -> bool {
        self.comparable(other) && self.position == other.position
    }
}

/**
 * Cursors over the same traversal of the same matrix are ordered by position;
 * comparing cursors over different matrices, orders or windows yields None.
 */
impl<T, O: TraversalOrder> PartialOrd for OrderedIterator<'_, T, O> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.comparable(other) {
            Some(self.position.cmp(&other.position))
        } else {
            None
        }
    }
}

/**
 * A reverse cursor over a traversal of a matrix, yielding references.
 *
 * Position 0 is the traversal's last cell and advancing moves towards its
 * first, so `matrix.reverse_row_major_iter().next()` yields the bottom right
 * element. Everything else works as in the forward cursor.
 */
pub struct ReverseOrderedIterator<'a, T, O: TraversalOrder> {
    matrix: &'a Matrix<T>,
    order: O,
    window: Window,
    position: usize,
}

/**
 * A reverse row major cursor yielding references.
 */
pub type ReverseRowMajorIterator<'a, T> = ReverseOrderedIterator<'a, T, RowMajor>;

/**
 * A reverse diagonal cursor yielding references.
 */
pub type ReverseDiagonalIterator<'a, T> = ReverseOrderedIterator<'a, T, DiagonalOrder>;

impl<'a, T, O: TraversalOrder> ReverseOrderedIterator<'a, T, O> {
    pub(crate) fn over(
        matrix: &'a Matrix<T>,
        order: O,
        window: Window,
        position: usize,
    ) -> ReverseOrderedIterator<'a, T, O> {
        ReverseOrderedIterator {
            matrix,
            order,
            window,
            position,
        }
    }

    /**
     * How many cells remain from the current position to the start of the
     * traversal, the current cell included.
     */
    pub fn remaining(&self) -> usize {
        self.window.len() - self.position
    }

    /**
     * The position of this cursor, 0 being the traversal's last cell.
     */
    pub fn position(&self) -> usize {
        self.position
    }

    /**
     * The visiting order this cursor traverses in, backwards.
     */
    pub fn order(&self) -> O {
        self.order
    }

    // Mirrors the cursor position into a traversal index.
    fn index(&self) -> Option<usize> {
        if self.position < self.window.len() {
            Some(self.window.end - 1 - self.position)
        } else {
            None
        }
    }

    /**
     * A reference to the value at the current position, or None once the
     * cursor has moved past the start of its window.
     */
    pub fn get(&self) -> Option<&'a T> {
        let index = self.index()?;
        let (row, column) = self.order.coordinate(self.matrix.size(), index);
        self.matrix.try_get_reference(row, column)
    }

    /**
     * A reference to the value the provided signed offset away from the
     * current position in reverse traversal direction, without moving the
     * cursor.
     */
    pub fn peek(&self, offset: isize) -> Option<&'a T> {
        let target = self.position as isize + offset;
        if target < 0 || target >= self.window.len() as isize {
            return None;
        }
        let index = self.window.end - 1 - target as usize;
        let (row, column) = self.order.coordinate(self.matrix.size(), index);
        self.matrix.try_get_reference(row, column)
    }

    /**
     * Moves the cursor by a signed offset in constant time, clamping at the
     * two ends of the window. Positive offsets move towards the traversal's
     * first cell.
     */
    pub fn advance(&mut self, offset: isize) {
        let target = self.position as isize + offset;
        self.position = target.clamp(0, self.window.len() as isize) as usize;
    }

    /**
     * The row of the cell the cursor currently sits on, or None once
     * exhausted.
     */
    pub fn row(&self) -> Option<Row> {
        let index = self.index()?;
        Some(self.order.coordinate(self.matrix.size(), index).0)
    }

    /**
     * The column of the cell the cursor currently sits on, or None once
     * exhausted.
     */
    pub fn column(&self) -> Option<Column> {
        let index = self.index()?;
        Some(self.order.coordinate(self.matrix.size(), index).1)
    }

    /**
     * True if this cursor traverses the provided matrix.
     */
    pub fn is_for(&self, matrix: &Matrix<T>) -> bool {
        ptr::eq(self.matrix, matrix)
    }

    /**
     * How many positions ahead of the other cursor this one is in reverse
     * traversal direction, negative if it is behind. Cursors over different
     * matrices, orders or windows return None.
     */
    pub fn distance_from(&self, other: &Self) -> Option<isize> {
        if self.comparable(other) {
            Some(self.position as isize - other.position as isize)
        } else {
            None
        }
    }

    fn comparable(&self, other: &Self) -> bool {
        ptr::eq(self.matrix, other.matrix)
            && self.order == other.order
            && self.window == other.window
    }
}

impl<'a, T, O: TraversalOrder> Iterator for ReverseOrderedIterator<'a, T, O> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let value = self.get()?;
        self.position += 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining();
        (remaining, Some(remaining))
    }
}

impl<T, O: TraversalOrder> ExactSizeIterator for ReverseOrderedIterator<'_, T, O> {}
impl<T, O: TraversalOrder> FusedIterator for ReverseOrderedIterator<'_, T, O> {}

impl<T, O: TraversalOrder> Clone for ReverseOrderedIterator<'_, T, O> {
    fn clone(&self) -> Self {
        ReverseOrderedIterator {
            matrix: self.matrix,
            order: self.order,
            window: self.window,
            position: self.position,
        }
    }
}

impl<T, O: TraversalOrder + fmt::Debug> fmt::Debug for ReverseOrderedIterator<'_, T, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReverseOrderedIterator")
            .field("order", &self.order)
            .field("window", &self.window)
            .field("position", &self.position)
            .finish()
    }
}

impl<T, O: TraversalOrder> PartialEq for ReverseOrderedIterator<'_, T, O> {
    fn eq(&self, other: &Self) -> bool {
        self.comparable(other) && self.position == other.position
    }
}

impl<T, O: TraversalOrder> PartialOrd for ReverseOrderedIterator<'_, T, O> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.comparable(other) {
            Some(self.position.cmp(&other.position))
        } else {
            None
        }
    }
}

/**
 * A forward cursor over a traversal of a matrix, yielding mutable references.
 *
 * Holds an exclusive borrow of the matrix for its whole lifetime, so no other
 * access to the matrix can coexist with it. [into_shared](OrderedIteratorMut::into_shared)
 * converts it into the shared cursor at the same position once mutation is
 * done.
 */
pub struct OrderedIteratorMut<'a, T, O: TraversalOrder> {
    matrix: *mut Matrix<T>,
    order: O,
    window: Window,
    position: usize,
    _lifetime: PhantomData<&'a mut Matrix<T>>,
}

/**
 * A forward row major cursor yielding mutable references.
 */
pub type RowMajorIteratorMut<'a, T> = OrderedIteratorMut<'a, T, RowMajor>;

/**
 * A forward diagonal cursor yielding mutable references.
 */
pub type DiagonalIteratorMut<'a, T> = OrderedIteratorMut<'a, T, DiagonalOrder>;

impl<'a, T, O: TraversalOrder> OrderedIteratorMut<'a, T, O> {
    pub(crate) fn over(
        matrix: &'a mut Matrix<T>,
        order: O,
        window: Window,
        position: usize,
    ) -> OrderedIteratorMut<'a, T, O> {
        OrderedIteratorMut {
            matrix,
            order,
            window,
            position,
            _lifetime: PhantomData,
        }
    }

    // # Safety
    //
    // The struct was created from a unique borrow of the matrix valid for 'a
    // and holding it keeps that borrow alive, so dereferencing the pointer
    // within 'a cannot alias any outside reference.
    fn matrix(&self) -> &Matrix<T> {
        unsafe { &*self.matrix }
    }

    /**
     * How many cells remain from the current position to the end of the
     * window, the current cell included.
     */
    pub fn remaining(&self) -> usize {
        self.window.len() - self.position
    }

    /**
     * The position of this cursor within its window.
     */
    pub fn position(&self) -> usize {
        self.position
    }

    /**
     * The visiting order this cursor traverses in.
     */
    pub fn order(&self) -> O {
        self.order
    }

    fn index(&self) -> Option<usize> {
        if self.position < self.window.len() {
            Some(self.window.start + self.position)
        } else {
            None
        }
    }

    /**
     * A reference to the value at the current position, or None once the
     * cursor has moved past the end of its window.
     */
    pub fn get(&self) -> Option<&T> {
        let index = self.index()?;
        let (row, column) = self.order.coordinate(self.matrix().size(), index);
        self.matrix().try_get_reference(row, column)
    }

    /**
     * A mutable reference to the value at the current position, borrowed from
     * the cursor rather than for the full 'a, so the cursor can keep being
     * used afterwards.
     */
    pub fn get_mut(&mut self) -> Option<&mut T> {
        let index = self.index()?;
        let size = self.matrix().size();
        let (row, column) = self.order.coordinate(size, index);
        // # Safety
        //
        // As in matrix(), but borrowed mutably against &mut self so only one
        // such reference can exist at a time.
        let matrix = unsafe { &mut *self.matrix };
        matrix.try_get_reference_mut(row, column)
    }

    /**
     * A reference to the value the provided signed offset away from the
     * current position, without moving the cursor.
     */
    pub fn peek(&self, offset: isize) -> Option<&T> {
        let target = self.position as isize + offset;
        if target < 0 || target >= self.window.len() as isize {
            return None;
        }
        let index = self.window.start + target as usize;
        let (row, column) = self.order.coordinate(self.matrix().size(), index);
        self.matrix().try_get_reference(row, column)
    }

    /**
     * A mutable reference to the value the provided signed offset away from
     * the current position, without moving the cursor. Borrowed from the
     * cursor as in [get_mut](OrderedIteratorMut::get_mut).
     */
    pub fn peek_mut(&mut self, offset: isize) -> Option<&mut T> {
        let target = self.position as isize + offset;
        if target < 0 || target >= self.window.len() as isize {
            return None;
        }
        let index = self.window.start + target as usize;
        let size = self.matrix().size();
        let (row, column) = self.order.coordinate(size, index);
        // # Safety
        //
        // As in get_mut.
        let matrix = unsafe { &mut *self.matrix };
        matrix.try_get_reference_mut(row, column)
    }

    /**
     * Moves the cursor by a signed offset in constant time, clamping at the
     * two ends of the window.
     */
    pub fn advance(&mut self, offset: isize) {
        let target = self.position as isize + offset;
        self.position = target.clamp(0, self.window.len() as isize) as usize;
    }

    /**
     * The row of the cell the cursor currently sits on, or None once
     * exhausted.
     */
    pub fn row(&self) -> Option<Row> {
        let index = self.index()?;
        Some(self.order.coordinate(self.matrix().size(), index).0)
    }

    /**
     * The column of the cell the cursor currently sits on, or None once
     * exhausted.
     */
    pub fn column(&self) -> Option<Column> {
        let index = self.index()?;
        Some(self.order.coordinate(self.matrix().size(), index).1)
    }

    /**
     * True if this cursor traverses the provided matrix.
     */
    pub fn is_for(&self, matrix: &Matrix<T>) -> bool {
        ptr::eq(self.matrix.cast_const(), matrix)
    }

    /**
     * Converts this cursor into a shared one at the same position, giving up
     * the ability to mutate and regaining the ability to be cloned and
     * compared against other shared cursors.
     */
    pub fn into_shared(self) -> OrderedIterator<'a, T, O> {
        // # Safety
        //
        // The unique borrow for 'a is surrendered here and downgraded into a
        // shared one of the same lifetime.
        let matrix = unsafe { &*self.matrix };
        OrderedIterator {
            matrix,
            order: self.order,
            window: self.window,
            position: self.position,
        }
    }
}

impl<'a, T, O: TraversalOrder> Iterator for OrderedIteratorMut<'a, T, O> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<&'a mut T> {
        let index = self.index()?;
        self.position += 1;
        // # Safety
        //
        // The cursor position advances past each cell as it is yielded and
        // every traversal index maps to a distinct cell, so no two references
        // returned by this iterator can alias, and the unique borrow for 'a
        // held by the struct outlives them all.
        let matrix = unsafe { &mut *self.matrix };
        let (row, column) = self.order.coordinate(matrix.size(), index);
        matrix.try_get_reference_mut(row, column)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining();
        (remaining, Some(remaining))
    }
}

impl<T, O: TraversalOrder> ExactSizeIterator for OrderedIteratorMut<'_, T, O> {}
impl<T, O: TraversalOrder> FusedIterator for OrderedIteratorMut<'_, T, O> {}

impl<T, O: TraversalOrder + fmt::Debug> fmt::Debug for OrderedIteratorMut<'_, T, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OrderedIteratorMut")
            .field("order", &self.order)
            .field("window", &self.window)
            .field("position", &self.position)
            .finish()
    }
}

// # Safety
//
// The cursor behaves exactly like the &'a mut Matrix<T> it was created from,
// which is Send/Sync whenever T is.
unsafe impl<T: Send, O: TraversalOrder> Send for OrderedIteratorMut<'_, T, O> {}
unsafe impl<T: Sync, O: TraversalOrder> Sync for OrderedIteratorMut<'_, T, O> {}

/**
 * A reverse cursor over a traversal of a matrix, yielding mutable references.
 *
 * Position 0 is the traversal's last cell and advancing moves towards its
 * first.
 */
pub struct ReverseOrderedIteratorMut<'a, T, O: TraversalOrder> {
    matrix: *mut Matrix<T>,
    order: O,
    window: Window,
    position: usize,
    _lifetime: PhantomData<&'a mut Matrix<T>>,
}

/**
 * A reverse row major cursor yielding mutable references.
 */
pub type ReverseRowMajorIteratorMut<'a, T> = ReverseOrderedIteratorMut<'a, T, RowMajor>;

/**
 * A reverse diagonal cursor yielding mutable references.
 */
pub type ReverseDiagonalIteratorMut<'a, T> = ReverseOrderedIteratorMut<'a, T, DiagonalOrder>;

impl<'a, T, O: TraversalOrder> ReverseOrderedIteratorMut<'a, T, O> {
    pub(crate) fn over(
        matrix: &'a mut Matrix<T>,
        order: O,
        window: Window,
        position: usize,
    ) -> ReverseOrderedIteratorMut<'a, T, O> {
        ReverseOrderedIteratorMut {
            matrix,
            order,
            window,
            position,
            _lifetime: PhantomData,
        }
    }

    // # Safety
    //
    // As in OrderedIteratorMut::matrix.
    fn matrix(&self) -> &Matrix<T> {
        unsafe { &*self.matrix }
    }

    /**
     * How many cells remain from the current position to the start of the
     * traversal, the current cell included.
     */
    pub fn remaining(&self) -> usize {
        self.window.len() - self.position
    }

    /**
     * The position of this cursor, 0 being the traversal's last cell.
     */
    pub fn position(&self) -> usize {
        self.position
    }

    /**
     * The visiting order this cursor traverses in, backwards.
     */
    pub fn order(&self) -> O {
        self.order
    }

    fn index(&self) -> Option<usize> {
        if self.position < self.window.len() {
            Some(self.window.end - 1 - self.position)
        } else {
            None
        }
    }

    /**
     * A reference to the value at the current position, or None once the
     * cursor has moved past the start of its window.
     */
    pub fn get(&self) -> Option<&T> {
        let index = self.index()?;
        let (row, column) = self.order.coordinate(self.matrix().size(), index);
        self.matrix().try_get_reference(row, column)
    }

    /**
     * A mutable reference to the value at the current position, borrowed from
     * the cursor.
     */
    pub fn get_mut(&mut self) -> Option<&mut T> {
        let index = self.index()?;
        let size = self.matrix().size();
        let (row, column) = self.order.coordinate(size, index);
        // # Safety
        //
        // As in OrderedIteratorMut::get_mut.
        let matrix = unsafe { &mut *self.matrix };
        matrix.try_get_reference_mut(row, column)
    }

    /**
     * A reference to the value the provided signed offset away from the
     * current position in reverse traversal direction, without moving the
     * cursor.
     */
    pub fn peek(&self, offset: isize) -> Option<&T> {
        let target = self.position as isize + offset;
        if target < 0 || target >= self.window.len() as isize {
            return None;
        }
        let index = self.window.end - 1 - target as usize;
        let (row, column) = self.order.coordinate(self.matrix().size(), index);
        self.matrix().try_get_reference(row, column)
    }

    /**
     * A mutable reference to the value the provided signed offset away from
     * the current position in reverse traversal direction, without moving the
     * cursor. Borrowed from the cursor as in
     * [get_mut](ReverseOrderedIteratorMut::get_mut).
     */
    pub fn peek_mut(&mut self, offset: isize) -> Option<&mut T> {
        let target = self.position as isize + offset;
        if target < 0 || target >= self.window.len() as isize {
            return None;
        }
        let index = self.window.end - 1 - target as usize;
        let size = self.matrix().size();
        let (row, column) = self.order.coordinate(size, index);
        // # Safety
        //
        // As in get_mut.
        let matrix = unsafe { &mut *self.matrix };
        matrix.try_get_reference_mut(row, column)
    }

    /**
     * Moves the cursor by a signed offset in constant time, clamping at the
     * two ends of the window. Positive offsets move towards the traversal's
     * first cell.
     */
    pub fn advance(&mut self, offset: isize) {
        let target = self.position as isize + offset;
        self.position = target.clamp(0, self.window.len() as isize) as usize;
    }

    /**
     * The row of the cell the cursor currently sits on, or None once
     * exhausted.
     */
    pub fn row(&self) -> Option<Row> {
        let index = self.index()?;
        Some(self.order.coordinate(self.matrix().size(), index).0)
    }

    /**
     * The column of the cell the cursor currently sits on, or None once
     * exhausted.
     */
    pub fn column(&self) -> Option<Column> {
        let index = self.index()?;
        Some(self.order.coordinate(self.matrix().size(), index).1)
    }

    /**
     * True if this cursor traverses the provided matrix.
     */
    pub fn is_for(&self, matrix: &Matrix<T>) -> bool {
        ptr::eq(self.matrix.cast_const(), matrix)
    }

    /**
     * Converts this cursor into a shared one at the same position.
     */
    pub fn into_shared(self) -> ReverseOrderedIterator<'a, T, O> {
        // # Safety
        //
        // As in OrderedIteratorMut::into_shared.
        let matrix = unsafe { &*self.matrix };
        ReverseOrderedIterator {
            matrix,
            order: self.order,
            window: self.window,
            position: self.position,
        }
    }
}

impl<'a, T, O: TraversalOrder> Iterator for ReverseOrderedIteratorMut<'a, T, O> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<&'a mut T> {
        let index = self.index()?;
        self.position += 1;
        // # Safety
        //
        // As in OrderedIteratorMut::next; the mirrored traversal indexes are
        // still pairwise distinct cells.
        let matrix = unsafe { &mut *self.matrix };
        let (row, column) = self.order.coordinate(matrix.size(), index);
        matrix.try_get_reference_mut(row, column)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining();
        (remaining, Some(remaining))
    }
}

impl<T, O: TraversalOrder> ExactSizeIterator for ReverseOrderedIteratorMut<'_, T, O> {}
impl<T, O: TraversalOrder> FusedIterator for ReverseOrderedIteratorMut<'_, T, O> {}

impl<T, O: TraversalOrder + fmt::Debug> fmt::Debug for ReverseOrderedIteratorMut<'_, T, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReverseOrderedIteratorMut")
            .field("order", &self.order)
            .field("window", &self.window)
            .field("position", &self.position)
            .finish()
    }
}

// # Safety
//
// As for OrderedIteratorMut.
unsafe impl<T: Send, O: TraversalOrder> Send for ReverseOrderedIteratorMut<'_, T, O> {}
unsafe impl<T: Sync, O: TraversalOrder> Sync for ReverseOrderedIteratorMut<'_, T, O> {}

#[test]
fn test_sync() {
    fn assert_sync<T: Sync>() {}
    assert_sync::<RowMajorIterator<f64>>();
    assert_sync::<ReverseRowMajorIterator<f64>>();
    assert_sync::<DiagonalIterator<f64>>();
    assert_sync::<ReverseDiagonalIterator<f64>>();
    assert_sync::<RowMajorIteratorMut<f64>>();
    assert_sync::<ReverseRowMajorIteratorMut<f64>>();
    assert_sync::<DiagonalIteratorMut<f64>>();
    assert_sync::<ReverseDiagonalIteratorMut<f64>>();
}

#[test]
fn test_send() {
    fn assert_send<T: Send>() {}
    assert_send::<RowMajorIterator<f64>>();
    assert_send::<ReverseRowMajorIterator<f64>>();
    assert_send::<DiagonalIterator<f64>>();
    assert_send::<ReverseDiagonalIterator<f64>>();
    assert_send::<RowMajorIteratorMut<f64>>();
    assert_send::<ReverseRowMajorIteratorMut<f64>>();
    assert_send::<DiagonalIteratorMut<f64>>();
    assert_send::<ReverseDiagonalIteratorMut<f64>>();
}

#[test]
fn test_diagonal_spans() {
    use crate::matrices::Matrix;
    let matrix = Matrix::from_flat((2, 3), vec![0; 6]);
    assert_eq!(DiagonalOrder::new(0).span(matrix.size()), 2);
    assert_eq!(DiagonalOrder::new(2).span(matrix.size()), 1);
    assert_eq!(DiagonalOrder::new(-1).span(matrix.size()), 1);
    assert_eq!(DiagonalOrder::new(3).span(matrix.size()), 0);
    assert_eq!(DiagonalOrder::new(-2).span(matrix.size()), 0);
}
