/// Cards per page.
pub const PAGE_SIZE: usize = 12;

/// Page-number buttons shown at once.
pub const MAX_VISIBLE_PAGES: usize = 5;

/// `ceil(count / page_size)`; 0 for an empty list (or a zero page size).
pub fn total_pages(count: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    count.div_ceil(page_size)
}

/// Slice `[(page-1)*page_size, page*page_size)` of `items`, clipped to its
/// length. Empty when `page` is 0, past the end, or `page_size` is 0.
pub fn paginate<T>(items: &[T], current_page: usize, page_size: usize) -> &[T] {
    if current_page == 0 || page_size == 0 {
        return &[];
    }

    let start = (current_page - 1).saturating_mul(page_size);
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}

/// Page numbers to show as navigation buttons.
///
/// At most `max_visible` numbers, centred on `current_page` where possible and
/// clamped to `[1, total_pages]`. Near either end the window slides so that
/// `min(max_visible, total_pages)` numbers are always shown.
pub fn visible_pages(current_page: usize, total_pages: usize, max_visible: usize) -> Vec<usize> {
    if total_pages == 0 || max_visible == 0 {
        return Vec::new();
    }
    if total_pages <= max_visible {
        return (1..=total_pages).collect();
    }

    let current = current_page.clamp(1, total_pages);
    let half = max_visible / 2;

    let mut start = current.saturating_sub(half).max(1);
    let end = (start + max_visible - 1).min(total_pages);
    if end - start + 1 < max_visible {
        start = (end + 1).saturating_sub(max_visible).max(1);
    }

    (start..=end).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages_boundaries() {
        assert_eq!(total_pages(0, 12), 0);
        assert_eq!(total_pages(1, 12), 1);
        assert_eq!(total_pages(12, 12), 1);
        assert_eq!(total_pages(13, 12), 2);
        assert_eq!(total_pages(30, 12), 3);
        assert_eq!(total_pages(150, 12), 13);
        assert_eq!(total_pages(5, 0), 0);
    }

    #[test]
    fn test_paginate_slices() {
        let items: Vec<u32> = (1..=30).collect();

        assert_eq!(paginate(&items, 1, 12), &items[0..12]);
        assert_eq!(paginate(&items, 2, 12), &items[12..24]);
        assert_eq!(paginate(&items, 3, 12), &[25, 26, 27, 28, 29, 30]);
        assert!(paginate(&items, 4, 12).is_empty());
        assert!(paginate(&items, 0, 12).is_empty());
        assert!(paginate(&items, 1, 0).is_empty());
    }

    #[test]
    fn test_paginate_empty_input() {
        let items: Vec<u32> = Vec::new();
        assert!(paginate(&items, 1, 12).is_empty());
    }

    #[test]
    fn test_visible_pages_sliding_window() {
        assert_eq!(visible_pages(1, 20, 5), vec![1, 2, 3, 4, 5]);
        assert_eq!(visible_pages(2, 20, 5), vec![1, 2, 3, 4, 5]);
        assert_eq!(visible_pages(3, 20, 5), vec![1, 2, 3, 4, 5]);
        assert_eq!(visible_pages(4, 20, 5), vec![2, 3, 4, 5, 6]);
        assert_eq!(visible_pages(10, 20, 5), vec![8, 9, 10, 11, 12]);
        assert_eq!(visible_pages(19, 20, 5), vec![16, 17, 18, 19, 20]);
        assert_eq!(visible_pages(20, 20, 5), vec![16, 17, 18, 19, 20]);
    }

    #[test]
    fn test_visible_pages_few_pages() {
        assert_eq!(visible_pages(1, 0, 5), Vec::<usize>::new());
        assert_eq!(visible_pages(1, 1, 5), vec![1]);
        assert_eq!(visible_pages(2, 3, 5), vec![1, 2, 3]);
        assert_eq!(visible_pages(5, 5, 5), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_visible_pages_always_full_width_when_possible() {
        for total in 5..=25 {
            for current in 1..=total {
                let pages = visible_pages(current, total, MAX_VISIBLE_PAGES);
                assert_eq!(pages.len(), MAX_VISIBLE_PAGES, "current={current} total={total}");
                assert!(pages.contains(&current));
                assert!(*pages.first().unwrap() >= 1);
                assert!(*pages.last().unwrap() <= total);
            }
        }
    }

    #[test]
    fn test_visible_pages_even_width() {
        assert_eq!(visible_pages(5, 10, 4), vec![3, 4, 5, 6]);
        assert_eq!(visible_pages(10, 10, 4), vec![7, 8, 9, 10]);
    }
}
