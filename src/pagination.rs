// src/pagination.rs
// Slices a filtered result list into fixed-size pages. Pure function of
// its inputs; callers re-run it whenever the list or cursor changes.

/// One page of results plus the bounds the caller needs to render
/// navigation. Navigation must disable "previous" on the first page and
/// "next" on the last rather than wrapping.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page_number: usize,
    pub total_pages: usize,
}

impl<T> Page<T> {
    pub fn is_first(&self) -> bool {
        self.page_number <= 1
    }

    pub fn is_last(&self) -> bool {
        self.page_number >= self.total_pages
    }
}

/// Returns the requested page of `items`. The page number is clamped to
/// the valid range instead of panicking; an empty list yields zero total
/// pages and an empty page 1. A `page_size` of 0 is treated as 1.
pub fn paginate<T: Clone>(items: &[T], page_size: usize, page_number: usize) -> Page<T> {
    let page_size = page_size.max(1);
    let total_pages = items.len().div_ceil(page_size);
    let page_number = page_number.clamp(1, total_pages.max(1));

    let start = (page_number - 1) * page_size;
    let end = (start + page_size).min(items.len());
    let page_items = if start < items.len() {
        items[start..end].to_vec()
    } else {
        Vec::new()
    };

    Page {
        items: page_items,
        page_number,
        total_pages,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn concatenated_pages_reconstruct_the_list() {
        let list: Vec<i32> = (0..23).collect();
        for page_size in 1..=7 {
            let total = paginate(&list, page_size, 1).total_pages;
            let mut rebuilt = Vec::new();
            for page_number in 1..=total {
                rebuilt.extend(paginate(&list, page_size, page_number).items);
            }
            assert_eq!(rebuilt, list, "page size {page_size}");
        }
    }

    #[test]
    fn total_pages_rounds_up() {
        let list: Vec<i32> = (0..50).collect();
        assert_eq!(paginate(&list, 50, 1).total_pages, 1);
        assert_eq!(paginate(&list, 49, 1).total_pages, 2);
        assert_eq!(paginate(&list, 7, 1).total_pages, 8);
    }

    #[test]
    fn empty_list_yields_zero_pages() {
        let page = paginate(&[] as &[i32], 50, 1);
        assert!(page.items.is_empty());
        assert_eq!(page.total_pages, 0);
        assert_eq!(page.page_number, 1);
    }

    #[test]
    fn out_of_range_page_number_clamps_instead_of_panicking() {
        let list: Vec<i32> = (0..10).collect();
        let past_end = paginate(&list, 4, 99);
        assert_eq!(past_end.page_number, 3);
        assert_eq!(past_end.items, vec![8, 9]);

        let before_start = paginate(&list, 4, 0);
        assert_eq!(before_start.page_number, 1);
        assert_eq!(before_start.items, vec![0, 1, 2, 3]);
    }

    #[test]
    fn boundary_flags_reflect_position() {
        let list: Vec<i32> = (0..10).collect();
        assert!(paginate(&list, 4, 1).is_first());
        assert!(!paginate(&list, 4, 1).is_last());
        assert!(paginate(&list, 4, 3).is_last());

        let single = paginate(&list, 50, 1);
        assert!(single.is_first() && single.is_last());
    }

    #[test]
    fn zero_page_size_is_treated_as_one() {
        let list: Vec<i32> = vec![1, 2, 3];
        let page = paginate(&list, 0, 2);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.items, vec![2]);
    }
}
