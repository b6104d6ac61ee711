/*!
 * A general purpose resizable two dimensional container.
 *
 * If this is your first time using elastic-matrix, start with the
 * [Matrix](./matrices/struct.Matrix.html) type for the container itself and
 * the [iterators](./matrices/iterators/index.html) module for the cursor style
 * iterators over it.
 *
 * Unlike a `Vec<Vec<T>>`, a [Matrix](matrices::Matrix) keeps all of its data
 * in one flat buffer with spare capacity on both ends of both axes, so rows
 * *and* columns can be inserted and removed anywhere with the same amortized
 * cost profile a `Vec` gives you for one dimension.
 *
 * With the `serde` feature enabled matrices of serializable types can be
 * serialized and deserialized; only the logical contents travel, capacity is
 * rebuilt on the way in.
 */

pub mod matrices;
