use crate::core::hash::contribution;
use crate::core::types::EDIT_BASES;
use crate::core::window::Window;
use crate::index::variant::{Edit, Variant};

/// Emit the single-deletion and single-insertion fingerprints at every
/// editable window position.
///
/// Both are computed from the prefix sums rather than by rehashing:
///
/// - Deleting position `i` shifts `0..i` one position right (doubling their
///   summed contribution) and pulls the base just before the window into
///   position 0.
/// - Inserting at position `i` shifts `1..=i` one position left (halving
///   their summed contribution), dropping the first window base.
///
/// A deletion equal to the origin is skipped. An insertion equal to the
/// origin or to the same position's deletion is skipped.
pub fn enumerate<F>(window: &Window<'_>, mut emit: F)
where
    F: FnMut(Variant),
{
    let origin = window.origin();
    let before = contribution(window.base_before(), 0);
    let first_base = window.contribution(0);

    for i in window.editable_positions() {
        let shifted_prefix = if i == 0 {
            0
        } else {
            window.accum(i - 1) << 1
        };
        let deletion = origin - window.accum(i) + shifted_prefix + before;
        if deletion != origin {
            emit(Variant::new(Edit::Deletion { position: i }, deletion));
        }

        for base in EDIT_BASES {
            let insertion =
                origin - window.accum(i) + contribution(base, i) + ((window.accum(i) - first_base) >> 1);
            if insertion != origin && insertion != deletion {
                emit(Variant::new(
                    Edit::Insertion {
                        position: i,
                        base: char::from(base),
                    },
                    insertion,
                ));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::hash::fingerprint;

    const SOURCE: &[u8] = b"CGATTACAGCTAGG";

    fn deleted(window: &Window<'_>, position: usize) -> Vec<u8> {
        let bases = window.bases();
        let mut out = vec![window.base_before()];
        out.extend_from_slice(&bases[..position]);
        out.extend_from_slice(&bases[position + 1..]);
        out
    }

    fn inserted(window: &Window<'_>, position: usize, base: u8) -> Vec<u8> {
        let bases = window.bases();
        let mut out = bases[1..=position].to_vec();
        out.push(base);
        out.extend_from_slice(&bases[position + 1..]);
        out
    }

    #[test]
    fn test_deletions_match_rehashed_windows() {
        let window = Window::prepare(SOURCE, 10).unwrap();
        let mut positions = Vec::new();
        enumerate(&window, |variant| {
            if let Edit::Deletion { position } = variant.edit {
                assert_eq!(variant.fingerprint, fingerprint(&deleted(&window, position)));
                positions.push(position);
            }
        });
        assert!(!positions.is_empty());
        assert!(positions.iter().all(|&p| !window.is_protected(p)));
    }

    #[test]
    fn test_insertions_match_rehashed_windows() {
        let window = Window::prepare(SOURCE, 10).unwrap();
        let mut count = 0;
        enumerate(&window, |variant| {
            if let Edit::Insertion { position, base } = variant.edit {
                assert_eq!(
                    variant.fingerprint,
                    fingerprint(&inserted(&window, position, base as u8))
                );
                assert!(!window.is_protected(position));
                count += 1;
            }
        });
        assert!(count > 0);
    }

    #[test]
    fn test_noop_edits_are_skipped() {
        // A homopolymer window: every deletion and insertion of A is a no-op
        let source = b"AAAAAAAAAAAA";
        let window = Window::prepare(source, 10).unwrap();
        let mut variants = Vec::new();
        enumerate(&window, |v| variants.push(v));

        assert!(variants.iter().all(|v| v.fingerprint != window.origin()));
        assert!(!variants
            .iter()
            .any(|v| matches!(v.edit, Edit::Deletion { .. })));
        assert!(!variants
            .iter()
            .any(|v| matches!(v.edit, Edit::Insertion { base: 'A', .. })));
        // 7 editable positions x 3 non-A insertions
        assert_eq!(variants.len(), 21);
    }

    #[test]
    fn test_insertion_equal_to_deletion_is_skipped() {
        // At position 0 an insertion of the base before the window rebuilds
        // the same window as the deletion.
        let window = Window::prepare(b"GACGTC", 4).unwrap();
        let mut variants = Vec::new();
        enumerate(&window, |v| variants.push(v));

        let deletion = variants
            .iter()
            .find(|v| matches!(v.edit, Edit::Deletion { position: 0 }))
            .unwrap();
        assert!(!variants.iter().any(|v| {
            matches!(v.edit, Edit::Insertion { .. }) && v.fingerprint == deletion.fingerprint
        }));
        // A (origin) and G (deletion) are skipped
        let insertions: Vec<char> = variants
            .iter()
            .filter_map(|v| match v.edit {
                Edit::Insertion { base, .. } => Some(base),
                _ => None,
            })
            .collect();
        assert_eq!(insertions, vec!['T', 'C']);
    }
}
