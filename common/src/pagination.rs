//! Page slicing shared by the album listing on the frontend and the
//! route-level tests on the backend.

/// Returns the 1-based `page` of `items` as a slice of length at most
/// `page_size`. Out-of-range pages (including page 0) and a zero page size
/// yield an empty slice rather than an error.
pub fn paginate<T>(items: &[T], page_size: usize, page: usize) -> &[T] {
    if page_size == 0 || page == 0 {
        return &[];
    }
    let start = (page - 1).saturating_mul(page_size);
    if start >= items.len() {
        return &[];
    }
    let end = items.len().min(start.saturating_add(page_size));
    &items[start..end]
}

/// Number of pages needed to show `total` items, `page_size` at a time.
pub fn page_count(total: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    total.div_ceil(page_size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_page_then_partial_then_empty() {
        let items: Vec<u32> = (0..25).collect();

        let page1 = paginate(&items, 10, 1);
        assert_eq!(page1, (0..10).collect::<Vec<u32>>());

        let page3 = paginate(&items, 10, 3);
        assert_eq!(page3, (20..25).collect::<Vec<u32>>());

        assert!(paginate(&items, 10, 4).is_empty());
    }

    #[test]
    fn page_zero_and_zero_page_size_are_empty() {
        let items = [1, 2, 3];
        assert!(paginate(&items, 10, 0).is_empty());
        assert!(paginate(&items, 0, 1).is_empty());
    }

    #[test]
    fn empty_input_has_no_pages() {
        let items: [u32; 0] = [];
        assert!(paginate(&items, 10, 1).is_empty());
        assert_eq!(page_count(0, 10), 0);
    }

    #[test]
    fn page_count_rounds_up() {
        assert_eq!(page_count(25, 10), 3);
        assert_eq!(page_count(30, 10), 3);
        assert_eq!(page_count(1, 10), 1);
    }
}
