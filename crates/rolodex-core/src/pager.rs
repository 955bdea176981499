//! Pagination as pure functions of `(items, page, page_size)`.
//!
//! Everything here is total: an out-of-range page yields an empty slice,
//! and the navigation functions clamp instead of wrapping or panicking.

/// Records shown per page.
pub const PAGE_SIZE: usize = 10;

/// Number of pages needed to show `len` items; 0 for an empty list.
pub fn total_pages(len: usize, page_size: usize) -> usize {
    len.div_ceil(page_size)
}

/// The contiguous slice visible on `page`. Shorter than `page_size` on the
/// last page; empty when `page` is past the end.
pub fn page_slice<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    let start = page.saturating_mul(page_size).min(items.len());
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}

/// The visible slice paired with each item's global index, so a rendered row
/// can be identified by `(name, global index)` even when names repeat.
pub fn page_rows<T>(
    items: &[T],
    page: usize,
    page_size: usize,
) -> impl Iterator<Item = (usize, &T)> {
    let start = page.saturating_mul(page_size).min(items.len());
    page_slice(items, page, page_size)
        .iter()
        .enumerate()
        .map(move |(offset, item)| (start + offset, item))
}

/// Advance one page, clamped to the last page. The clamp bound floors at
/// page 0 so an empty list stays on page 0.
pub fn next_page(page: usize, len: usize, page_size: usize) -> usize {
    let last = total_pages(len, page_size).max(1) - 1;
    (page + 1).min(last)
}

/// Retreat one page, clamped to page 0.
pub fn prev_page(page: usize) -> usize {
    page.saturating_sub(1)
}

/// Whether the Next control is active: false once the page after this one
/// would start past the end of the list.
pub fn has_next(page: usize, len: usize, page_size: usize) -> bool {
    (page + 1).saturating_mul(page_size) < len
}

/// Whether the Previous control is active.
pub fn has_prev(page: usize) -> bool {
    page > 0
}

/// Indicator text, 1-based: `"Page 3 of 7"`. An empty list reads
/// `"Page 1 of 0"`.
pub fn page_label(page: usize, len: usize, page_size: usize) -> String {
    format!("Page {} of {}", page + 1, total_pages(len, page_size))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(n: usize) -> Vec<usize> {
        (0..n).collect()
    }

    // ── Page count ──────────────────────────────────────────────────

    #[test]
    fn total_pages_is_ceiling_division() {
        assert_eq!(total_pages(0, 10), 0);
        assert_eq!(total_pages(1, 10), 1);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
        assert_eq!(total_pages(25, 10), 3);
    }

    // ── Slicing ─────────────────────────────────────────────────────

    #[test]
    fn pages_concatenate_to_the_original_list() {
        for len in [0, 1, 9, 10, 11, 25, 30, 101] {
            let all = items(len);
            let mut rebuilt = Vec::new();
            for page in 0..total_pages(len, PAGE_SIZE) {
                rebuilt.extend_from_slice(page_slice(&all, page, PAGE_SIZE));
            }
            assert_eq!(rebuilt, all, "len={len}");
        }
    }

    #[test]
    fn last_page_may_be_short() {
        let all = items(25);
        assert_eq!(page_slice(&all, 0, 10), &(0..10).collect::<Vec<_>>()[..]);
        assert_eq!(page_slice(&all, 2, 10), &[20, 21, 22, 23, 24]);
    }

    #[test]
    fn out_of_range_page_is_empty_not_a_panic() {
        let all = items(25);
        assert!(page_slice(&all, 3, 10).is_empty());
        assert!(page_slice(&all, usize::MAX, 10).is_empty());
        assert!(page_slice::<usize>(&[], 0, 10).is_empty());
    }

    #[test]
    fn page_rows_carry_global_indices() {
        let all = vec!["dup", "dup", "dup"];
        let rows: Vec<(usize, &&str)> = page_rows(&all, 0, 2).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].0, 0);
        assert_eq!(rows[1].0, 1);

        let rows: Vec<(usize, &&str)> = page_rows(&all, 1, 2).collect();
        assert_eq!(rows[0].0, 2);
    }

    #[test]
    fn row_keys_unique_under_duplicate_names() {
        let all = vec!["same"; 25];
        let mut keys = std::collections::HashSet::new();
        for page in 0..total_pages(all.len(), PAGE_SIZE) {
            for (index, name) in page_rows(&all, page, PAGE_SIZE) {
                assert!(keys.insert((name.to_string(), index)));
            }
        }
        assert_eq!(keys.len(), all.len());
    }

    // ── Navigation clamping ─────────────────────────────────────────

    #[test]
    fn next_clamps_at_last_page() {
        // 25 items → pages 0..=2
        assert_eq!(next_page(0, 25, 10), 1);
        assert_eq!(next_page(1, 25, 10), 2);
        assert_eq!(next_page(2, 25, 10), 2);
        assert_eq!(next_page(2, 25, 10), next_page(next_page(2, 25, 10), 25, 10));
    }

    #[test]
    fn prev_clamps_at_zero() {
        assert_eq!(prev_page(2), 1);
        assert_eq!(prev_page(1), 0);
        assert_eq!(prev_page(0), 0);
    }

    #[test]
    fn next_on_empty_list_stays_on_page_zero() {
        assert_eq!(next_page(0, 0, 10), 0);
    }

    #[test]
    fn repeated_navigation_never_escapes_bounds() {
        let len = 25;
        let mut page = 0;
        for _ in 0..100 {
            page = next_page(page, len, PAGE_SIZE);
            assert!(page <= total_pages(len, PAGE_SIZE) - 1);
        }
        for _ in 0..100 {
            page = prev_page(page);
        }
        assert_eq!(page, 0);
    }

    // ── Control state ───────────────────────────────────────────────

    #[test]
    fn control_state_matches_position() {
        assert!(!has_prev(0));
        assert!(has_next(0, 25, 10));
        assert!(has_prev(2));
        assert!(!has_next(2, 25, 10));
        // Exact multiple: 20 items fit pages 0..=1
        assert!(!has_next(1, 20, 10));
        // Empty list: both inactive
        assert!(!has_prev(0));
        assert!(!has_next(0, 0, 10));
    }

    // ── Indicator text ──────────────────────────────────────────────

    #[test]
    fn label_is_one_based() {
        assert_eq!(page_label(0, 25, 10), "Page 1 of 3");
        assert_eq!(page_label(2, 25, 10), "Page 3 of 3");
    }

    #[test]
    fn empty_list_labels_page_one_of_zero() {
        assert_eq!(page_label(0, 0, 10), "Page 1 of 0");
    }
}
