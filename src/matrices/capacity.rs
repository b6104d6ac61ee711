/*!
 * The per axis capacity model backing a Matrix.
 *
 * Each axis of a matrix tracks its logical size, its physical capacity and a front
 * offset of unused slots sitting before the first logical element. The remaining
 * slack sits after the last logical element. Keeping slack on both ends lets rows
 * and columns be inserted or removed at either edge without shifting the rest of
 * the data.
 */

/**
 * The minimum capacity allocated for a logical size on one axis.
 *
 * Whenever an axis has to reallocate it sizes the fresh buffer with this formula,
 * leaving a quarter of the logical size as slack to amortise further edits.
 */
pub(crate) fn grow(size: usize) -> usize {
    size + size / 4
}

/**
 * Size, capacity and front offset for one axis of a matrix.
 *
 * Invariant: `offset + size <= capacity`, and `size == 0` implies
 * `capacity == 0` and `offset == 0` (an empty axis owns no storage).
 */
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) struct Axis {
    pub(crate) size: usize,
    pub(crate) capacity: usize,
    pub(crate) offset: usize,
}

/**
 * Where an axis decided to make room for an insertion.
 */
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum InsertPlacement {
    /**
     * The elements before the insertion position shift one slot towards the
     * front, consuming one unit of the front offset. Inserting at position 0
     * shifts nothing at all.
     */
    ShiftFront,
    /**
     * The elements at and after the insertion position shift one slot towards
     * the back, consuming one unit of the back slack. Inserting at the end
     * shifts nothing at all.
     */
    ShiftBack,
    /**
     * The axis is full, a fresh buffer of `grow(size + 1)` is needed.
     */
    Reallocate,
}

/**
 * Where an axis decided to close the gap left by an erasure.
 */
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum ErasePlacement {
    /**
     * The elements before the erased position shift one slot towards the back,
     * growing the front offset. Erasing at position 0 shifts nothing at all.
     */
    ShiftFront,
    /**
     * The elements after the erased position shift one slot towards the front,
     * growing the back slack. Erasing the last position shifts nothing at all.
     */
    ShiftBack,
    /**
     * The last element on the axis is being erased, the whole buffer goes away.
     */
    Deallocate,
}

impl Axis {
    /**
     * An axis sized for `size` elements with a freshly grown capacity and the
     * slack split evenly, favouring the back when the split is odd.
     */
    pub(crate) fn fresh(size: usize) -> Axis {
        Axis::with_capacity(size, grow(size))
    }

    /**
     * An axis of exactly this size and capacity with the slack split evenly.
     * The capacity must be at least the size.
     */
    pub(crate) fn with_capacity(size: usize, capacity: usize) -> Axis {
        debug_assert!(capacity >= size);
        if size == 0 {
            return Axis::default();
        }
        Axis {
            size,
            capacity,
            offset: (capacity - size) / 2,
        }
    }

    /**
     * The unused slots sitting after the last logical element.
     */
    pub(crate) fn back_slack(&self) -> usize {
        self.capacity - self.size - self.offset
    }

    /**
     * Decides the cheapest way to make room for one element at `position`,
     * which must be in `0..=size`.
     *
     * The side with fewer elements to move is preferred, provided it has slack
     * to move into; otherwise the other side's slack is used; a reallocation is
     * only needed once the axis is completely full.
     */
    pub(crate) fn plan_insert(&self, position: usize) -> InsertPlacement {
        debug_assert!(position <= self.size);
        let front_run = position;
        let back_run = self.size - position;
        let front_possible = self.offset > 0;
        let back_possible = self.back_slack() > 0;
        if front_run <= back_run {
            if front_possible {
                InsertPlacement::ShiftFront
            } else if back_possible {
                InsertPlacement::ShiftBack
            } else {
                InsertPlacement::Reallocate
            }
        } else if back_possible {
            InsertPlacement::ShiftBack
        } else if front_possible {
            InsertPlacement::ShiftFront
        } else {
            InsertPlacement::Reallocate
        }
    }

    /**
     * Updates the counters after the shift decided by [plan_insert](Axis::plan_insert)
     * has been carried out on the storage.
     */
    pub(crate) fn commit_insert(&mut self, placement: InsertPlacement) {
        match placement {
            InsertPlacement::ShiftFront => {
                self.offset -= 1;
                self.size += 1;
            }
            InsertPlacement::ShiftBack => {
                self.size += 1;
            }
            InsertPlacement::Reallocate => {
                *self = Axis::fresh(self.size + 1);
            }
        }
    }

    /**
     * Decides which side closes the gap when erasing the element at `position`,
     * which must be in `0..size`. The shorter adjacent run of elements moves.
     */
    pub(crate) fn plan_erase(&self, position: usize) -> ErasePlacement {
        debug_assert!(position < self.size);
        if self.size == 1 {
            return ErasePlacement::Deallocate;
        }
        let front_run = position;
        let back_run = self.size - 1 - position;
        if front_run < back_run {
            ErasePlacement::ShiftFront
        } else {
            ErasePlacement::ShiftBack
        }
    }

    /**
     * Updates the counters after the shift decided by [plan_erase](Axis::plan_erase)
     * has been carried out on the storage.
     */
    pub(crate) fn commit_erase(&mut self, placement: ErasePlacement) {
        match placement {
            ErasePlacement::ShiftFront => {
                self.offset += 1;
                self.size -= 1;
            }
            ErasePlacement::ShiftBack => {
                self.size -= 1;
            }
            ErasePlacement::Deallocate => {
                *self = Axis::default();
            }
        }
    }
}

#[test]
fn test_growth_formula() {
    assert_eq!(grow(0), 0);
    assert_eq!(grow(1), 1);
    assert_eq!(grow(3), 3);
    assert_eq!(grow(4), 5);
    assert_eq!(grow(8), 10);
    assert_eq!(grow(10), 12);
}

#[test]
fn test_fresh_axis_splits_slack_evenly() {
    let axis = Axis::fresh(8);
    assert_eq!(axis.size, 8);
    assert_eq!(axis.capacity, 10);
    assert_eq!(axis.offset, 1);
    assert_eq!(axis.back_slack(), 1);
    let axis = Axis::fresh(4);
    assert_eq!(axis.capacity, 5);
    assert_eq!(axis.offset, 0);
    assert_eq!(axis.back_slack(), 1);
}

#[test]
fn test_empty_axis_has_no_storage() {
    let axis = Axis::fresh(0);
    assert_eq!(axis, Axis::default());
    assert_eq!(axis.capacity, 0);
}

#[test]
fn test_edge_inserts_use_slack() {
    let axis = Axis {
        size: 4,
        capacity: 6,
        offset: 1,
    };
    assert_eq!(axis.plan_insert(0), InsertPlacement::ShiftFront);
    assert_eq!(axis.plan_insert(4), InsertPlacement::ShiftBack);
    let mut front = axis;
    front.commit_insert(InsertPlacement::ShiftFront);
    assert_eq!(front.offset, 0);
    assert_eq!(front.size, 5);
}

#[test]
fn test_interior_insert_prefers_shorter_side() {
    let axis = Axis {
        size: 6,
        capacity: 8,
        offset: 1,
    };
    assert_eq!(axis.plan_insert(1), InsertPlacement::ShiftFront);
    assert_eq!(axis.plan_insert(5), InsertPlacement::ShiftBack);
    // shorter side blocked, the other side still has slack
    let axis = Axis {
        size: 6,
        capacity: 7,
        offset: 0,
    };
    assert_eq!(axis.plan_insert(1), InsertPlacement::ShiftBack);
}

#[test]
fn test_full_axis_reallocates() {
    let mut axis = Axis {
        size: 4,
        capacity: 4,
        offset: 0,
    };
    assert_eq!(axis.plan_insert(2), InsertPlacement::Reallocate);
    axis.commit_insert(InsertPlacement::Reallocate);
    assert_eq!(axis.size, 5);
    assert_eq!(axis.capacity, grow(5));
}

#[test]
fn test_erase_moves_shorter_run() {
    let axis = Axis {
        size: 5,
        capacity: 6,
        offset: 0,
    };
    assert_eq!(axis.plan_erase(0), ErasePlacement::ShiftFront);
    assert_eq!(axis.plan_erase(1), ErasePlacement::ShiftFront);
    assert_eq!(axis.plan_erase(2), ErasePlacement::ShiftBack);
    assert_eq!(axis.plan_erase(4), ErasePlacement::ShiftBack);
    let mut axis = Axis {
        size: 1,
        capacity: 2,
        offset: 1,
    };
    assert_eq!(axis.plan_erase(0), ErasePlacement::Deallocate);
    axis.commit_erase(ErasePlacement::Deallocate);
    assert_eq!(axis, Axis::default());
}
