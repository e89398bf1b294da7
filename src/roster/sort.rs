use std::cmp::Ordering;

use crate::models::{SortKey, SortOrder, Student};

/// Compare two records by `key` in the requested direction.
///
/// Names compare by byte value, so upper-case letters sort ahead of
/// lower-case ones. Descending flips the operands rather than reversing the
/// result of a finished sort; paired with a stable sort this keeps records with
/// equal keys in the order they already had.
pub(crate) fn compare(a: &Student, b: &Student, key: SortKey, order: SortOrder) -> Ordering {
    let (left, right) = match order {
        SortOrder::Ascending => (a, b),
        SortOrder::Descending => (b, a),
    };
    match key {
        SortKey::Name => left.name.as_bytes().cmp(right.name.as_bytes()),
        SortKey::Gpa => gpa_key(left.gpa).total_cmp(&gpa_key(right.gpa)),
        SortKey::Age => left.age.cmp(&right.age),
    }
}

/// `total_cmp` keeps the order total even for NaN, which sorts after every
/// number. Negative zero is folded into zero so the two still tie.
fn gpa_key(gpa: f64) -> f64 {
    if gpa == 0.0 {
        0.0
    } else {
        gpa
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_compare_ordinally() {
        let upper = Student::new("Zed", 20, 1.0);
        let lower = Student::new("adam", 20, 1.0);
        assert_eq!(
            compare(&upper, &lower, SortKey::Name, SortOrder::Ascending),
            Ordering::Less
        );
        assert_eq!(
            compare(&upper, &lower, SortKey::Name, SortOrder::Descending),
            Ordering::Greater
        );
    }

    #[test]
    fn zero_and_negative_zero_gpa_tie() {
        let a = Student::new("A", 1, 0.0);
        let b = Student::new("B", 1, -0.0);
        assert_eq!(
            compare(&a, &b, SortKey::Gpa, SortOrder::Ascending),
            Ordering::Equal
        );
    }

    #[test]
    fn nan_gpa_sorts_after_every_number() {
        let nan = Student::new("N", 1, f64::NAN);
        let high = Student::new("H", 1, 10.0);
        assert_eq!(
            compare(&nan, &high, SortKey::Gpa, SortOrder::Ascending),
            Ordering::Greater
        );
        assert_eq!(
            compare(&nan, &nan, SortKey::Gpa, SortOrder::Descending),
            Ordering::Equal
        );
    }
}
