extern crate elastic_matrix;

#[cfg(test)]
mod tests {
    use elastic_matrix::matrices::Matrix;

    #[test]
    fn check_row_major_iteration() {
        let matrix = Matrix::from(vec![vec![1, 2], vec![3, 4], vec![5, 6]]);
        let values: Vec<i32> = matrix.row_major_iter().copied().collect();
        assert_eq!(vec![1, 2, 3, 4, 5, 6], values);
        let reversed: Vec<i32> = matrix.reverse_row_major_iter().copied().collect();
        assert_eq!(vec![6, 5, 4, 3, 2, 1], reversed);
    }

    #[test]
    fn check_row_iteration() {
        let matrix = Matrix::from(vec![vec![1, 2], vec![3, 4], vec![5, 6]]);
        let mut iterator = matrix.row_iter(1);
        assert_eq!(iterator.next(), Some(&3));
        assert_eq!(iterator.next(), Some(&4));
        assert_eq!(iterator.next(), None);
        // fused, stays exhausted
        assert_eq!(iterator.next(), None);
        let backwards: Vec<i32> = matrix.reverse_row_iter(2).copied().collect();
        assert_eq!(vec![6, 5], backwards);
    }

    #[test]
    fn check_diagonal_iteration() {
        let matrix = Matrix::from(vec![vec![1, 2, 3], vec![4, 5, 6], vec![7, 8, 9]]);
        let main: Vec<i32> = matrix.diagonal_iter(0).copied().collect();
        assert_eq!(vec![1, 5, 9], main);
        let above: Vec<i32> = matrix.diagonal_iter(1).copied().collect();
        assert_eq!(vec![2, 6], above);
        let below: Vec<i32> = matrix.diagonal_iter(-1).copied().collect();
        assert_eq!(vec![4, 8], below);
        let corner: Vec<i32> = matrix.diagonal_iter(2).copied().collect();
        assert_eq!(vec![3], corner);
        let reversed: Vec<i32> = matrix.reverse_diagonal_iter(0).copied().collect();
        assert_eq!(vec![9, 5, 1], reversed);
    }

    #[test]
    #[should_panic]
    fn check_missing_diagonal() {
        let matrix = Matrix::from(vec![vec![1, 2], vec![3, 4]]);
        matrix.diagonal_iter(2);
    }

    #[test]
    fn check_cursor_positioning() {
        let matrix = Matrix::from(vec![vec![1, 2, 3], vec![4, 5, 6]]);
        let mut cursor = matrix.row_major_iter();
        assert_eq!(cursor.get(), Some(&1));
        assert_eq!(cursor.row(), Some(0));
        assert_eq!(cursor.column(), Some(0));
        cursor.advance(4);
        assert_eq!(cursor.get(), Some(&5));
        assert_eq!(cursor.row(), Some(1));
        assert_eq!(cursor.column(), Some(1));
        cursor.advance(-3);
        assert_eq!(cursor.get(), Some(&2));
        // peeking does not move the cursor
        assert_eq!(cursor.peek(1), Some(&3));
        assert_eq!(cursor.peek(-1), Some(&1));
        assert_eq!(cursor.peek(10), None);
        assert_eq!(cursor.get(), Some(&2));
    }

    #[test]
    fn check_advance_clamps() {
        let matrix = Matrix::from(vec![vec![1, 2, 3]]);
        let mut cursor = matrix.row_major_iter();
        cursor.advance(-10);
        assert_eq!(cursor.position(), 0);
        assert_eq!(cursor.get(), Some(&1));
        cursor.advance(100);
        // one past the end, exhausted but recoverable
        assert_eq!(cursor.position(), 3);
        assert_eq!(cursor.get(), None);
        assert_eq!(cursor.row(), None);
        cursor.advance(-1);
        assert_eq!(cursor.get(), Some(&3));
    }

    #[test]
    fn check_starting_offsets() {
        let matrix = Matrix::from(vec![vec![1, 2, 3], vec![4, 5, 6]]);
        let cursor = matrix.row_major_iter_at(1, 1);
        assert_eq!(cursor.get(), Some(&5));
        let remaining: Vec<i32> = cursor.copied().collect();
        assert_eq!(vec![5, 6], remaining);
        let diagonal = matrix.diagonal_iter_at(1, 2);
        // the diagonal through (1,2) is diagonal 1, positioned on its second cell
        assert_eq!(diagonal.order().diagonal(), 1);
        assert_eq!(diagonal.position(), 1);
        assert_eq!(diagonal.get(), Some(&6));
        let reverse = matrix.reverse_diagonal_iter_at(0, 1);
        assert_eq!(reverse.get(), Some(&2));
        let rest: Vec<i32> = reverse.copied().collect();
        assert_eq!(vec![2], rest);
    }

    #[test]
    fn check_cursor_comparison() {
        let matrix = Matrix::from(vec![vec![1, 2, 3], vec![4, 5, 6]]);
        let mut ahead = matrix.row_major_iter();
        let behind = matrix.row_major_iter();
        assert!(ahead == behind);
        ahead.advance(3);
        assert!(ahead > behind);
        assert!(behind < ahead);
        assert_eq!(ahead.distance_from(&behind), Some(3));
        assert_eq!(behind.distance_from(&ahead), Some(-3));
        // cursors over different matrices have no ordering and no distance
        let other = matrix.clone();
        let foreign = other.row_major_iter();
        assert!(behind != foreign);
        assert_eq!(PartialOrd::partial_cmp(&behind, &foreign), None);
        assert_eq!(behind.distance_from(&foreign), None);
        assert!(behind.is_for(&matrix));
        assert!(!behind.is_for(&other));
    }

    #[test]
    fn check_empty_matrix_cursors() {
        // cursors over an empty matrix are born exhausted and all compare
        // equal, whatever they were advanced by
        let empty: Matrix<u8> = Matrix::new();
        let mut a = empty.row_major_iter();
        let b = empty.row_major_iter();
        assert!(a == b);
        assert_eq!(a.get(), None);
        a.advance(5);
        assert!(a == b);
        assert_eq!(a.distance_from(&b), Some(0));
    }

    #[test]
    fn check_exact_size() {
        let matrix = Matrix::from(vec![vec![1, 2, 3], vec![4, 5, 6]]);
        let mut cursor = matrix.row_major_iter();
        assert_eq!(cursor.len(), 6);
        cursor.next();
        cursor.next();
        assert_eq!(cursor.len(), 4);
        assert_eq!(matrix.diagonal_iter(0).len(), 2);
        let empty: Matrix<u8> = Matrix::new();
        assert_eq!(empty.row_major_iter().len(), 0);
        assert_eq!(empty.row_major_iter().next(), None);
    }

    #[test]
    fn check_mutable_iteration() {
        let mut matrix = Matrix::from(vec![vec![1, 2], vec![3, 4]]);
        for value in matrix.row_major_iter_mut() {
            *value *= 10;
        }
        assert_eq!(matrix, Matrix::from(vec![vec![10, 20], vec![30, 40]]));
        for value in matrix.diagonal_iter_mut(0) {
            *value = 0;
        }
        assert_eq!(matrix, Matrix::from(vec![vec![0, 20], vec![30, 0]]));
        for value in matrix.reverse_row_iter_mut(1) {
            *value += 1;
        }
        assert_eq!(matrix, Matrix::from(vec![vec![0, 20], vec![31, 1]]));
    }

    #[test]
    fn check_mutable_cursor() {
        let mut matrix = Matrix::from(vec![vec![1, 2, 3], vec![4, 5, 6]]);
        let mut cursor = matrix.row_major_iter_mut_at(0, 2);
        assert_eq!(cursor.get(), Some(&3));
        if let Some(value) = cursor.get_mut() {
            *value = 30;
        }
        cursor.advance(2);
        if let Some(value) = cursor.get_mut() {
            *value = 50;
        }
        // downgrade to a shared cursor at the same position
        let shared = cursor.into_shared();
        assert_eq!(shared.position(), 4);
        assert_eq!(shared.get(), Some(&50));
        assert_eq!(matrix.get(0, 2), 30);
    }

    #[test]
    fn check_mutable_peeking() {
        let mut matrix = Matrix::from(vec![vec![1, 2, 3], vec![4, 5, 6]]);
        let mut cursor = matrix.row_major_iter_mut_at(0, 1);
        assert_eq!(cursor.peek(1), Some(&3));
        if let Some(value) = cursor.peek_mut(1) {
            *value = 30;
        }
        if let Some(value) = cursor.peek_mut(-1) {
            *value = 10;
        }
        // the cursor did not move
        assert_eq!(cursor.get(), Some(&2));
        assert_eq!(cursor.peek_mut(10), None);
        drop(cursor);
        assert_eq!(matrix, Matrix::from(vec![vec![10, 2, 30], vec![4, 5, 6]]));
        let mut reverse = matrix.reverse_row_major_iter_mut();
        if let Some(value) = reverse.peek_mut(1) {
            *value = 50;
        }
        assert_eq!(reverse.get(), Some(&6));
        drop(reverse);
        assert_eq!(matrix.get(1, 1), 50);
    }

    #[test]
    fn check_rectangular_diagonal_stepping() {
        // diagonals always step down and right one cell at a time, so in a
        // tall rectangular matrix diagonal 1 holds only the two cells
        // (0,1) and (1,2), not the rest of column 1
        let matrix = Matrix::from_flat((4, 3), vec![1, 2, -3, 4, -5, 6, 7, -8, 9, 10, -11, 12]);
        let cursor = matrix.diagonal_iter(1);
        assert_eq!(cursor.get(), Some(&2));
        let above: Vec<i32> = cursor.copied().collect();
        assert_eq!(vec![2, 6], above);
        let below: Vec<i32> = matrix.diagonal_iter(-1).copied().collect();
        assert_eq!(vec![4, -8, 12], below);
        let main: Vec<i32> = matrix.diagonal_iter(0).copied().collect();
        assert_eq!(vec![1, -5, 9], main);
    }

    #[test]
    fn check_mutable_reverse_diagonal() {
        let mut matrix = Matrix::from(vec![vec![1, 2], vec![3, 4]]);
        let mut cursor = matrix.reverse_diagonal_iter_mut(0);
        assert_eq!(cursor.next(), Some(&mut 4));
        assert_eq!(cursor.row(), Some(0));
        assert_eq!(cursor.column(), Some(0));
        if let Some(value) = cursor.get_mut() {
            *value = 100;
        }
        assert_eq!(matrix.get(0, 0), 100);
    }

    #[test]
    fn check_iterators_are_borrows() {
        // a cursor outliving its positioning calls is fine, the borrow is on
        // the matrix, not on any internal state of the factory
        let matrix = Matrix::from(vec![vec![1, 2], vec![3, 4]]);
        let mut cursors = vec![
            matrix.row_major_iter(),
            matrix.row_iter(0),
            matrix.row_major_iter_at(1, 0),
        ];
        let first: Vec<Option<i32>> = cursors
            .iter_mut()
            .map(|cursor| cursor.next().copied())
            .collect();
        assert_eq!(vec![Some(1), Some(1), Some(3)], first);
    }
}
