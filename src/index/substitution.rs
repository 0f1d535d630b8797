use crate::core::hash::contribution;
use crate::core::types::EDIT_BASES;
use crate::core::window::Window;
use crate::index::variant::{Edit, Variant};

/// Emit every fingerprint reachable by one substitution, and by two when
/// `allow_two` is set, at editable window positions.
///
/// Each fingerprint is an O(1) update of the window origin: the replaced
/// base's contribution is subtracted and the new base's added. Two-substitution
/// variants build on the one-substitution value at `i` with a second edit at a
/// later position `j`, so each `(i, base1, j, base2)` with `i < j` is emitted
/// exactly once.
pub fn enumerate<F>(window: &Window<'_>, allow_two: bool, mut emit: F)
where
    F: FnMut(Variant),
{
    let origin = window.origin();

    for i in window.editable_positions() {
        let original = window.base(i);
        for base1 in EDIT_BASES {
            if base1 == original {
                continue;
            }

            let first = origin - window.contribution(i) + contribution(base1, i);
            emit(Variant::new(
                Edit::Substitution {
                    position: i,
                    base: char::from(base1),
                },
                first,
            ));

            if !allow_two {
                continue;
            }

            for j in window.editable_positions().filter(|&j| j > i) {
                let original = window.base(j);
                for base2 in EDIT_BASES {
                    if base2 == original {
                        continue;
                    }
                    let second = first - window.contribution(j) + contribution(base2, j);
                    emit(Variant::new(
                        Edit::DoubleSubstitution {
                            first: (i, char::from(base1)),
                            second: (j, char::from(base2)),
                        },
                        second,
                    ));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::hash::fingerprint;

    const SOURCE: &[u8] = b"GATTACAGCTAG";

    fn collect(source: &[u8], window: usize, allow_two: bool) -> Vec<Variant> {
        let window = Window::prepare(source, window).unwrap();
        let mut variants = Vec::new();
        enumerate(&window, allow_two, |v| variants.push(v));
        variants
    }

    fn edited(window: &Window<'_>, edits: &[(usize, char)]) -> Vec<u8> {
        let mut bases = window.bases().to_vec();
        for &(position, base) in edits {
            bases[position] = base as u8;
        }
        bases
    }

    #[test]
    fn test_single_substitutions_match_rehashed_windows() {
        let window = Window::prepare(SOURCE, 10).unwrap();
        let mut count = 0;
        enumerate(&window, false, |variant| {
            let Edit::Substitution { position, base } = variant.edit else {
                panic!("unexpected edit {:?}", variant.edit);
            };
            assert_eq!(
                variant.fingerprint,
                fingerprint(&edited(&window, &[(position, base)]))
            );
            assert_ne!(variant.fingerprint, window.origin());
            count += 1;
        });
        // 7 editable positions, 3 alternate bases each
        assert_eq!(count, 21);
    }

    #[test]
    fn test_double_substitutions_are_ordered_and_complete() {
        let variants = collect(SOURCE, 10, true);
        let doubles: Vec<_> = variants
            .iter()
            .filter_map(|v| match v.edit {
                Edit::DoubleSubstitution { first, second } => Some((first, second, v.fingerprint)),
                _ => None,
            })
            .collect();

        // C(7, 2) position pairs, 3 x 3 base pairs each
        assert_eq!(doubles.len(), 21 * 9);

        let window = Window::prepare(SOURCE, 10).unwrap();
        let mut seen = std::collections::HashSet::new();
        for (first, second, fp) in doubles {
            assert!(first.0 < second.0);
            assert!(seen.insert((first, second)));
            assert_eq!(fp, fingerprint(&edited(&window, &[first, second])));
        }
    }

    #[test]
    fn test_no_substitution_in_protected_zone() {
        let window = Window::prepare(SOURCE, 10).unwrap();
        enumerate(&window, true, |variant| {
            for position in variant.edit.positions() {
                assert!(!window.is_protected(position));
            }
        });
    }

    #[test]
    fn test_non_acgt_bases_get_four_alternatives() {
        // Window "NNNNACGT" positions 0..4 are N and editable
        let source = b"GNNNNACGTA";
        let window = Window::prepare(source, 8).unwrap();
        assert_eq!(window.bases(), b"NNNNACGT");
        let subs_at_zero = collect(source, 8, false)
            .into_iter()
            .filter(|v| v.edit.positions() == vec![0])
            .count();
        assert_eq!(subs_at_zero, 4);
    }

    #[test]
    fn test_single_mode_emits_no_doubles() {
        let variants = collect(SOURCE, 10, false);
        assert!(variants
            .iter()
            .all(|v| matches!(v.edit, Edit::Substitution { .. })));
    }
}
