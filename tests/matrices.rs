extern crate elastic_matrix;

#[cfg(test)]
mod tests {
    use elastic_matrix::matrices::Matrix;
    use elastic_matrix::matrices::errors::MatrixError;

    use rand::Rng;
    use rand::SeedableRng;
    use rand::distr::Uniform;

    #[test]
    fn check_dimensionality() {
        let matrix = Matrix::from(vec![vec![1, 2], vec![3, 4], vec![5, 6]]);
        println!("{:?}", matrix);
        assert_eq!((3, 2), matrix.size());
        assert_eq!(3, matrix.rows());
        assert_eq!(2, matrix.columns());
        assert!(!matrix.is_empty());
        let empty: Matrix<i32> = Matrix::new();
        assert_eq!((0, 0), empty.size());
        assert!(empty.is_empty());
        assert_eq!(0, empty.row_capacity());
        assert_eq!(0, empty.column_capacity());
    }

    #[test]
    fn check_capacity_growth() {
        // a fresh buffer leaves a quarter of the size as slack on each axis
        let matrix = Matrix::from_flat((8, 8), vec![0; 64]);
        assert_eq!(10, matrix.row_capacity());
        assert_eq!(10, matrix.column_capacity());
        assert_eq!(1, matrix.row_capacity_offset());
        assert_eq!(1, matrix.column_capacity_offset());
        // sizes below 4 get no slack at all
        let small = Matrix::from_flat((2, 3), vec![0; 6]);
        assert_eq!(2, small.row_capacity());
        assert_eq!(3, small.column_capacity());
    }

    #[test]
    fn check_getters_and_setters() {
        let mut matrix = Matrix::from(vec![vec![1, 2], vec![3, 4]]);
        assert_eq!(3, matrix.get(1, 0));
        assert_eq!(&4, matrix.get_reference(1, 1));
        matrix.set(0, 1, 20);
        assert_eq!(20, matrix.get(0, 1));
        *matrix.get_reference_mut(0, 0) = 10;
        assert_eq!(10, matrix.get(0, 0));
        assert_eq!(None, matrix.try_get_reference(2, 0));
        assert_eq!(None, matrix.try_get_reference(0, 2));
        assert_eq!(Some(&20), matrix.try_get_reference(0, 1));
    }

    #[test]
    #[should_panic]
    fn check_out_of_range_get() {
        let matrix = Matrix::from(vec![vec![1, 2], vec![3, 4]]);
        matrix.get(2, 0);
    }

    #[test]
    fn check_linear_indexing() {
        let mut matrix = Matrix::from(vec![vec![1, 2, 3], vec![4, 5, 6]]);
        assert_eq!(1, matrix[0]);
        assert_eq!(4, matrix[3]);
        assert_eq!(6, matrix[5]);
        matrix[4] = 50;
        assert_eq!(50, matrix.get(1, 1));
    }

    #[test]
    fn check_constructors() {
        let filled = Matrix::filled(7, (2, 3));
        assert_eq!(filled, Matrix::from(vec![vec![7, 7, 7], vec![7, 7, 7]]));
        let identity = Matrix::diagonal(3, 0, 1);
        assert_eq!(
            identity,
            Matrix::from(vec![vec![1, 0, 0], vec![0, 1, 0], vec![0, 0, 1]])
        );
        let empty: Matrix<u8> = Matrix::from(vec![]);
        assert!(empty.is_empty());
        let flat = Matrix::from_flat((2, 2), vec![1, 2, 3, 4]);
        assert_eq!(flat, Matrix::from(vec![vec![1, 2], vec![3, 4]]));
    }

    #[test]
    fn check_from_flat_validation() {
        let wrong_length: Result<Matrix<u8>, _> = Matrix::try_from_flat((2, 2), vec![1, 2, 3]);
        assert!(matches!(
            wrong_length,
            Err(MatrixError::DimensionMismatch { .. })
        ));
        let half_empty: Result<Matrix<u8>, _> = Matrix::try_from_flat((0, 3), vec![]);
        assert!(half_empty.is_err());
        let empty: Matrix<u8> = Matrix::try_from_flat((0, 0), vec![]).unwrap();
        assert!(empty.is_empty());
    }

    #[test]
    fn check_insert_row() {
        let mut matrix = Matrix::from(vec![vec![1, 2], vec![5, 6]]);
        matrix.insert_row(1, 0).unwrap();
        assert_eq!(
            matrix,
            Matrix::from(vec![vec![1, 2], vec![0, 0], vec![5, 6]])
        );
        matrix.insert_row_with(3, vec![7, 8].into_iter()).unwrap();
        assert_eq!(
            matrix,
            Matrix::from(vec![vec![1, 2], vec![0, 0], vec![5, 6], vec![7, 8]])
        );
        matrix.insert_row_with(0, vec![-1, -2].into_iter()).unwrap();
        assert_eq!((5, 2), matrix.size());
        assert_eq!(-1, matrix.get(0, 0));
        assert_eq!(8, matrix.get(4, 1));
    }

    #[test]
    fn check_insert_column() {
        let mut matrix = Matrix::from(vec![vec![1, 3], vec![4, 6]]);
        matrix.insert_column_with(1, vec![2, 5].into_iter()).unwrap();
        assert_eq!(matrix, Matrix::from(vec![vec![1, 2, 3], vec![4, 5, 6]]));
        matrix.insert_column(3, 0).unwrap();
        assert_eq!(
            matrix,
            Matrix::from(vec![vec![1, 2, 3, 0], vec![4, 5, 6, 0]])
        );
        matrix.insert_column(0, 9).unwrap();
        assert_eq!(9, matrix.get(0, 0));
        assert_eq!(9, matrix.get(1, 0));
        assert_eq!((2, 5), matrix.size());
    }

    #[test]
    fn check_insert_validation() {
        let mut empty: Matrix<u8> = Matrix::new();
        assert_eq!(Err(MatrixError::EmptyMatrix), empty.insert_row(0, 1));
        let mut matrix = Matrix::from(vec![vec![1, 2]]);
        assert_eq!(
            Err(MatrixError::PositionOutOfBounds {
                position: 2,
                limit: 1
            }),
            matrix.insert_row(2, 0)
        );
        // a short iterator leaves the matrix untouched
        let result = matrix.insert_row_with(0, vec![1].into_iter());
        assert!(matches!(
            result,
            Err(MatrixError::DimensionMismatch { .. })
        ));
        assert_eq!(matrix, Matrix::from(vec![vec![1, 2]]));
    }

    #[test]
    fn check_edge_inserts_reuse_slack() {
        // an 8 row matrix allocates capacity 10 with offset 1, so one insert
        // at each edge costs no reallocation and no shifting
        let mut matrix = Matrix::from_flat((8, 8), vec![0; 64]);
        matrix.insert_row(0, 1).unwrap();
        assert_eq!(10, matrix.row_capacity());
        assert_eq!(0, matrix.row_capacity_offset());
        matrix.insert_row(9, 2).unwrap();
        assert_eq!(10, matrix.row_capacity());
        assert_eq!(10, matrix.rows());
        assert_eq!(1, matrix.get(0, 0));
        assert_eq!(2, matrix.get(9, 0));
    }

    #[test]
    fn check_remove_row() {
        let mut matrix = Matrix::from(vec![vec![1, 2], vec![3, 4], vec![5, 6]]);
        matrix.remove_row(1).unwrap();
        assert_eq!(matrix, Matrix::from(vec![vec![1, 2], vec![5, 6]]));
        matrix.remove_row(0).unwrap();
        assert_eq!(matrix, Matrix::from(vec![vec![5, 6]]));
        // removing the last row empties the matrix entirely
        matrix.remove_row(0).unwrap();
        assert!(matrix.is_empty());
        assert_eq!(0, matrix.row_capacity());
        assert_eq!(0, matrix.column_capacity());
    }

    #[test]
    fn check_remove_column() {
        let mut matrix = Matrix::from(vec![vec![1, 2, 3], vec![4, 5, 6]]);
        matrix.remove_column(1).unwrap();
        assert_eq!(matrix, Matrix::from(vec![vec![1, 3], vec![4, 6]]));
        matrix.remove_column(1).unwrap();
        matrix.remove_column(0).unwrap();
        assert!(matrix.is_empty());
        let mut matrix = Matrix::from(vec![vec![1, 2]]);
        assert_eq!(
            Err(MatrixError::ColumnOutOfBounds {
                column: 2,
                columns: 2
            }),
            matrix.remove_column(2)
        );
    }

    #[test]
    fn check_insert_remove_inverse() {
        let original = Matrix::from(vec![vec![1, 2, 3], vec![4, 5, 6], vec![7, 8, 9]]);
        for position in 0..=3 {
            let mut matrix = original.clone();
            matrix.insert_row(position, 0).unwrap();
            matrix.remove_row(position).unwrap();
            assert_eq!(original, matrix);
            let mut matrix = original.clone();
            matrix.insert_column(position, 0).unwrap();
            matrix.remove_column(position).unwrap();
            assert_eq!(original, matrix);
        }
    }

    #[test]
    fn check_append_rows() {
        let mut top = Matrix::from(vec![vec![1, 2], vec![3, 4]]);
        let bottom = Matrix::from(vec![vec![5, 6]]);
        top.append_rows(bottom).unwrap();
        assert_eq!(
            top,
            Matrix::from(vec![vec![1, 2], vec![3, 4], vec![5, 6]])
        );
        // appending an empty matrix changes nothing
        top.append_rows(Matrix::new()).unwrap();
        assert_eq!((3, 2), top.size());
        // appending to an empty matrix adopts the other
        let mut empty = Matrix::new();
        empty.append_rows(top.clone()).unwrap();
        assert_eq!(empty, top);
        // column counts must match
        let narrow = Matrix::from(vec![vec![1]]);
        assert!(top.append_rows(narrow).is_err());
    }

    #[test]
    fn check_append_columns() {
        let mut left = Matrix::from(vec![vec![1, 2], vec![4, 5]]);
        let right = Matrix::from(vec![vec![3], vec![6]]);
        left.append_columns(right).unwrap();
        assert_eq!(left, Matrix::from(vec![vec![1, 2, 3], vec![4, 5, 6]]));
        let tall = Matrix::from(vec![vec![1], vec![2], vec![3]]);
        assert!(left.append_columns(tall).is_err());
    }

    #[test]
    fn check_append_self_concatenation() {
        let mut matrix = Matrix::from(vec![vec![1, 2], vec![3, 4]]);
        let copy = matrix.clone();
        matrix.append_rows(copy).unwrap();
        assert_eq!(
            matrix,
            Matrix::from_flat((4, 2), vec![1, 2, 3, 4, 1, 2, 3, 4])
        );
    }

    #[test]
    fn check_append_reuses_reserved_capacity() {
        let mut matrix = Matrix::from(vec![vec![1, 2], vec![4, 5]]);
        matrix.reserve(2, 5);
        assert_eq!(5, matrix.column_capacity());
        let extension = Matrix::from(vec![vec![3, 0, 0], vec![6, 0, 0]]);
        matrix.append_columns(extension).unwrap();
        // the reserved buffer absorbs the combined width without reallocating
        assert_eq!(5, matrix.column_capacity());
        assert_eq!(0, matrix.column_capacity_offset());
        assert_eq!((2, 5), matrix.size());
        assert_eq!(3, matrix.get(0, 2));
    }

    #[test]
    fn check_split_off_rows() {
        let mut matrix = Matrix::from(vec![vec![1, 2], vec![3, 4], vec![5, 6]]);
        let original = matrix.clone();
        let bottom = matrix.split_off_rows(1).unwrap();
        assert_eq!(matrix, Matrix::from(vec![vec![1, 2]]));
        assert_eq!(bottom, Matrix::from(vec![vec![3, 4], vec![5, 6]]));
        matrix.append_rows(bottom).unwrap();
        assert_eq!(original, matrix);
        // splitting at the edges
        let empty = matrix.split_off_rows(3).unwrap();
        assert!(empty.is_empty());
        let whole = matrix.split_off_rows(0).unwrap();
        assert!(matrix.is_empty());
        assert_eq!(whole, original);
        assert!(matches!(
            matrix.split_off_rows(1),
            Err(MatrixError::PositionOutOfBounds { .. })
        ));
    }

    #[test]
    fn check_split_off_columns() {
        let mut matrix = Matrix::from(vec![vec![1, 2, 3], vec![4, 5, 6]]);
        let right = matrix.split_off_columns(1).unwrap();
        assert_eq!(matrix, Matrix::from(vec![vec![1], vec![4]]));
        assert_eq!(right, Matrix::from(vec![vec![2, 3], vec![5, 6]]));
        matrix.append_columns(right).unwrap();
        assert_eq!(matrix, Matrix::from(vec![vec![1, 2, 3], vec![4, 5, 6]]));
    }

    #[test]
    fn check_swaps() {
        let mut matrix = Matrix::from(vec![vec![1, 2], vec![3, 4]]);
        matrix.swap_rows(0, 1).unwrap();
        assert_eq!(matrix, Matrix::from(vec![vec![3, 4], vec![1, 2]]));
        matrix.swap_columns(0, 1).unwrap();
        assert_eq!(matrix, Matrix::from(vec![vec![4, 3], vec![2, 1]]));
        matrix.swap_items((0, 0), (1, 1)).unwrap();
        assert_eq!(matrix, Matrix::from(vec![vec![1, 3], vec![2, 4]]));
        assert!(matrix.swap_rows(0, 2).is_err());
    }

    #[test]
    fn check_swap_row_column() {
        let mut matrix = Matrix::from(vec![vec![1, 2, 3], vec![4, 5, 6], vec![7, 8, 9]]);
        matrix.swap_row_column(0, 0).unwrap();
        assert_eq!(
            matrix,
            Matrix::from(vec![vec![1, 4, 7], vec![2, 5, 6], vec![3, 8, 9]])
        );
        let mut rectangular = Matrix::from(vec![vec![1, 2, 3], vec![4, 5, 6]]);
        assert!(matches!(
            rectangular.swap_row_column(0, 0),
            Err(MatrixError::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn check_cross_matrix_swaps() {
        let mut x = Matrix::from(vec![vec![1, 2], vec![3, 4]]);
        let mut y = Matrix::from(vec![vec![5, 6], vec![7, 8]]);
        x.swap_rows_with(0, &mut y, 1).unwrap();
        assert_eq!(x, Matrix::from(vec![vec![7, 8], vec![3, 4]]));
        assert_eq!(y, Matrix::from(vec![vec![5, 6], vec![1, 2]]));
        x.swap_columns_with(1, &mut y, 0).unwrap();
        assert_eq!(x, Matrix::from(vec![vec![7, 5], vec![3, 1]]));
        assert_eq!(y, Matrix::from(vec![vec![8, 6], vec![4, 2]]));
        x.swap_row_with_column(0, &mut y, 1).unwrap();
        assert_eq!(x, Matrix::from(vec![vec![6, 2], vec![3, 1]]));
        assert_eq!(y, Matrix::from(vec![vec![8, 7], vec![4, 5]]));
    }

    #[test]
    fn check_transpose() {
        let mut square = Matrix::from(vec![vec![1, 2], vec![3, 4]]);
        square.transpose();
        assert_eq!(square, Matrix::from(vec![vec![1, 3], vec![2, 4]]));
        let mut rectangular = Matrix::from(vec![vec![1, 2, 3], vec![4, 5, 6]]);
        rectangular.transpose();
        assert_eq!(
            rectangular,
            Matrix::from(vec![vec![1, 4], vec![2, 5], vec![3, 6]])
        );
        let copied = rectangular.transposed();
        assert_eq!(copied, Matrix::from(vec![vec![1, 2, 3], vec![4, 5, 6]]));
        // transposed() leaves the original untouched
        assert_eq!((3, 2), rectangular.size());
    }

    #[test]
    fn check_resize() {
        let mut matrix = Matrix::from(vec![vec![1, 2], vec![3, 4]]);
        matrix.resize(3, 3);
        assert_eq!(
            matrix,
            Matrix::from(vec![vec![1, 2, 0], vec![3, 4, 0], vec![0, 0, 0]])
        );
        matrix.resize(1, 2);
        assert_eq!(matrix, Matrix::from(vec![vec![1, 2]]));
        // shrinking keeps the capacity
        assert!(matrix.row_capacity() >= 3);
        matrix.resize_with_value(2, 2, 9);
        assert_eq!(matrix, Matrix::from(vec![vec![1, 2], vec![9, 9]]));
        matrix.resize(0, 5);
        assert!(matrix.is_empty());
        // resizing an empty matrix populates it
        matrix.resize_with_value(2, 2, 1);
        assert_eq!(matrix, Matrix::from(vec![vec![1, 1], vec![1, 1]]));
    }

    #[test]
    fn check_reserve_and_shrink() {
        let mut matrix = Matrix::from(vec![vec![1, 2], vec![3, 4]]);
        matrix.reserve(10, 10);
        assert_eq!(10, matrix.row_capacity());
        assert_eq!(10, matrix.column_capacity());
        // the slack splits evenly around the data
        assert_eq!(4, matrix.row_capacity_offset());
        assert_eq!(matrix, Matrix::from(vec![vec![1, 2], vec![3, 4]]));
        // requests below the current capacity are ignored
        matrix.reserve(1, 1);
        assert_eq!(10, matrix.row_capacity());
        matrix.shrink_to_fit();
        assert_eq!(2, matrix.row_capacity());
        assert_eq!(2, matrix.column_capacity());
        assert_eq!(0, matrix.row_capacity_offset());
        assert_eq!(matrix, Matrix::from(vec![vec![1, 2], vec![3, 4]]));
        matrix.shrink_to_fit();
        assert_eq!(2, matrix.row_capacity());
    }

    #[test]
    fn check_copy_from() {
        let source = Matrix::from(vec![vec![1, 2, 3], vec![4, 5, 6], vec![7, 8, 9]]);
        let mut destination = Matrix::filled(0, (3, 3));
        destination.copy_from(&source, 2, 2, (1, 1), (0, 0)).unwrap();
        assert_eq!(
            destination,
            Matrix::from(vec![vec![5, 6, 0], vec![8, 9, 0], vec![0, 0, 0]])
        );
        // out of bounds rectangles are rejected before any copying
        let untouched = destination.clone();
        assert!(destination.copy_from(&source, 2, 2, (2, 2), (0, 0)).is_err());
        assert_eq!(untouched, destination);
        // zero extents are a no-op
        destination.copy_from(&source, 0, 3, (0, 0), (0, 0)).unwrap();
        assert_eq!(untouched, destination);
    }

    #[test]
    fn check_copy_within_overlapping() {
        let mut matrix = Matrix::from(vec![vec![1, 2, 3], vec![4, 5, 6], vec![7, 8, 9]]);
        matrix.copy_within(2, 2, (0, 0), (1, 1)).unwrap();
        assert_eq!(
            matrix,
            Matrix::from(vec![vec![1, 2, 3], vec![4, 1, 2], vec![7, 4, 5]])
        );
    }

    #[test]
    fn check_take_base_vec() {
        let mut matrix = Matrix::from(vec![vec![1, 2], vec![3, 4]]);
        matrix.reserve(4, 4);
        let values = matrix.take_base_vec();
        // only the logical cells come out, in row major order
        assert_eq!(vec![1, 2, 3, 4], values);
        assert!(matrix.is_empty());
    }

    #[test]
    fn check_map_and_set_all() {
        let mut matrix = Matrix::from(vec![vec![1, 2], vec![3, 4]]);
        let doubled = matrix.map(|x| x * 2);
        assert_eq!(doubled, Matrix::from(vec![vec![2, 4], vec![6, 8]]));
        let mask = matrix.map(|x| x > 2);
        assert_eq!(
            mask,
            Matrix::from(vec![vec![false, false], vec![true, true]])
        );
        matrix.map_mut(|x| x + 1);
        assert_eq!(matrix, Matrix::from(vec![vec![2, 3], vec![4, 5]]));
        matrix.set_all(0);
        assert_eq!(matrix, Matrix::filled(0, (2, 2)));
    }

    #[test]
    fn check_any_truthy() {
        let zeros = Matrix::filled(0, (2, 2));
        assert!(!zeros.any_truthy());
        let mut matrix = zeros.clone();
        matrix.set(1, 1, 3);
        assert!(matrix.any_truthy());
        let empty: Matrix<f64> = Matrix::new();
        assert!(!empty.any_truthy());
        let flags = Matrix::from(vec![vec![false, true]]);
        assert!(flags.any_truthy());
    }

    #[test]
    fn check_approx_eq() {
        let x: Matrix<f64> = Matrix::from(vec![vec![0.1 + 0.2, 1.0]]);
        let y = Matrix::from(vec![vec![0.3, 1.0]]);
        assert!(x != y);
        assert!(x.approx_eq(&y, |a, b| (a - b).abs() < 1e-10));
        let wider = Matrix::from(vec![vec![0.3, 1.0, 2.0]]);
        assert!(!x.approx_eq(&wider, |a, b| (a - b).abs() < 1e-10));
    }

    #[test]
    fn check_sort_diagonal() {
        let mut matrix = Matrix::from(vec![vec![9, 2, 3], vec![4, 5, 6], vec![7, 8, 1]]);
        matrix.sort_diagonal(0);
        assert_eq!(
            matrix,
            Matrix::from(vec![vec![1, 2, 3], vec![4, 5, 6], vec![7, 8, 9]])
        );
        let mut matrix = Matrix::from(vec![vec![0, 9], vec![0, 0], vec![0, 0]]);
        matrix.sort_diagonal(1);
        assert_eq!(9, matrix.get(0, 1));
    }

    #[test]
    fn check_sort_rectangular_diagonal() {
        // diagonals step down and right, so in this 4x3 matrix diagonal 1 is
        // the two cells {2, 6} (already sorted) and diagonal -1 is {4, -8, 12}
        let original =
            Matrix::from_flat((4, 3), vec![1, 2, -3, 4, -5, 6, 7, -8, 9, 10, -11, 12]);
        let mut matrix = original.clone();
        matrix.sort_diagonal(1);
        assert_eq!(original, matrix);
        matrix.sort_diagonal(-1);
        assert_eq!(
            matrix,
            Matrix::from_flat((4, 3), vec![1, 2, -3, -8, -5, 6, 7, 4, 9, 10, -11, 12])
        );
    }

    #[test]
    fn check_display() {
        let matrix = Matrix::from(vec![vec![1, 2], vec![3, 4]]);
        assert_eq!("[ 1, 2 ]\n[ 3, 4 ]\n", matrix.to_string());
        let empty: Matrix<u8> = Matrix::new();
        assert_eq!("[]", empty.to_string());
    }

    #[test]
    fn check_randomised_edits_preserve_contents() {
        // drive a matrix through a random mix of inserts and removals and
        // check it always matches a naive nested Vec model
        let mut random_generator = rand_chacha::ChaCha8Rng::seed_from_u64(16);
        let position_range = Uniform::new(0_usize, 100).unwrap();
        let mut matrix = Matrix::from_flat((3, 3), (0..9).collect());
        let mut model: Vec<Vec<i32>> = vec![
            vec![0, 1, 2],
            vec![3, 4, 5],
            vec![6, 7, 8],
        ];
        let mut counter = 10;
        for _ in 0..500 {
            let choice = random_generator.sample(position_range);
            let rows = model.len();
            let columns = model[0].len();
            match choice % 4 {
                0 => {
                    let row = random_generator.sample(position_range) % (rows + 1);
                    matrix.insert_row(row, counter).unwrap();
                    model.insert(row, vec![counter; columns]);
                }
                1 => {
                    let column = random_generator.sample(position_range) % (columns + 1);
                    matrix.insert_column(column, counter).unwrap();
                    for model_row in model.iter_mut() {
                        model_row.insert(column, counter);
                    }
                }
                2 if rows > 1 => {
                    let row = random_generator.sample(position_range) % rows;
                    matrix.remove_row(row).unwrap();
                    model.remove(row);
                }
                3 if columns > 1 => {
                    let column = random_generator.sample(position_range) % columns;
                    matrix.remove_column(column).unwrap();
                    for model_row in model.iter_mut() {
                        model_row.remove(column);
                    }
                }
                _ => continue,
            }
            counter += 1;
            assert_eq!(matrix, Matrix::from(model.clone()));
        }
    }

    #[cfg(feature = "serde")]
    #[test]
    fn check_serialization_round_trip() {
        let matrix = Matrix::from(vec![vec![1, 2], vec![3, 4]]);
        let json = serde_json::to_string(&matrix).unwrap();
        assert_eq!(
            json,
            "{\"rows\":2,\"columns\":2,\"elements\":[1,2,3,4]}"
        );
        let deserialized: Matrix<i32> = serde_json::from_str(&json).unwrap();
        assert_eq!(matrix, deserialized);
        let invalid: Result<Matrix<i32>, _> =
            serde_json::from_str("{\"rows\":2,\"columns\":2,\"elements\":[1,2,3]}");
        assert!(invalid.is_err());
    }
}
