//! Single-slot reassignment.

use crate::assignment::{Assignment, Slot, UndoRecord};
use crate::rotation::RotatedRange;

/// Reroutes one reference from `remove` to `insert`.
///
/// Nodes are visited in `scan` order; within a node the first slot is
/// checked before the second. The first slot holding `remove` is
/// overwritten and the scan stops, so at most one slot changes per call.
///
/// Returns `None` without touching the assignment when no slot holds
/// `remove`.
///
/// # Examples
///
/// ```
/// use u_balance::assignment::{Assignment, Slot};
/// use u_balance::mutate::apply_mutation;
/// use u_balance::rotation::RotatedRange;
///
/// let mut a = Assignment::new(vec![[1, 2], [2, 0], [0, 1]]).unwrap();
/// let undo = apply_mutation(&mut a, 0, 2, RotatedRange::new(0, 3)).unwrap();
/// assert_eq!((undo.node, undo.slot, undo.prior), (1, Slot::Second, 0));
/// assert_eq!(a.pair(1), [2, 2]);
/// ```
pub fn apply_mutation(
    assignment: &mut Assignment,
    remove: usize,
    insert: usize,
    scan: RotatedRange,
) -> Option<UndoRecord> {
    for node in scan {
        for slot in Slot::BOTH {
            if assignment.get(node, slot) == remove {
                assignment.set(node, slot, insert);
                return Some(UndoRecord {
                    node,
                    slot,
                    prior: remove,
                });
            }
        }
    }
    None
}
