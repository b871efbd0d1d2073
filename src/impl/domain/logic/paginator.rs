use crate::entities::PageAction;

pub(crate) struct Paginator;

impl Paginator {
    /// `max(1, ceil(count / page_size))`. A zero page size is treated as 1.
    pub(crate) fn total_pages(count: usize, page_size: usize) -> usize {
        count.div_ceil(page_size.max(1)).max(1)
    }

    /// Items of the 1-based `page`, clamped to the bounds of `items`. Pages
    /// past the end yield an empty slice.
    pub(crate) fn paginate<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
        let page_size = page_size.max(1);
        let start = page.saturating_sub(1).saturating_mul(page_size).min(items.len());
        let end = start.saturating_add(page_size).min(items.len());
        &items[start..end]
    }

    /// Page reached from `current` by `action`. Previous on the first page and
    /// Next on the last page leave the page unchanged.
    pub(crate) fn navigate(current: usize, total_pages: usize, action: PageAction) -> usize {
        match action {
            PageAction::First => 1,
            PageAction::Previous if current > 1 => current - 1,
            PageAction::Next if current < total_pages => current + 1,
            PageAction::Previous | PageAction::Next => current,
            PageAction::Last => total_pages.max(1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_pages_never_below_one() {
        assert_eq!(Paginator::total_pages(0, 3), 1);
        assert_eq!(Paginator::total_pages(1, 3), 1);
        assert_eq!(Paginator::total_pages(3, 3), 1);
        assert_eq!(Paginator::total_pages(4, 3), 2);
        assert_eq!(Paginator::total_pages(7, 3), 3);
        assert_eq!(Paginator::total_pages(7, 1), 7);
    }

    #[test]
    fn total_pages_matches_ceiling_for_all_sizes() {
        for page_size in 1..=6 {
            for count in 0..=25 {
                let expected = std::cmp::max(1, (count + page_size - 1) / page_size);
                assert_eq!(Paginator::total_pages(count, page_size), expected);
            }
        }
    }

    #[test]
    fn pages_never_exceed_page_size() {
        let items: Vec<usize> = (1..=7).collect();
        for page_size in 1..=8 {
            for page in 1..=10 {
                assert!(Paginator::paginate(&items, page, page_size).len() <= page_size);
            }
        }
    }

    #[test]
    fn slices_pages_in_order() {
        let items: Vec<usize> = (1..=7).collect();
        assert_eq!(Paginator::paginate(&items, 1, 3), &[1, 2, 3]);
        assert_eq!(Paginator::paginate(&items, 2, 3), &[4, 5, 6]);
        assert_eq!(Paginator::paginate(&items, 3, 3), &[7]);
        assert!(Paginator::paginate(&items, 4, 3).is_empty());
        assert!(Paginator::paginate::<usize>(&[], 1, 3).is_empty());
    }

    #[test]
    fn navigation_stays_in_range() {
        assert_eq!(Paginator::navigate(2, 3, PageAction::First), 1);
        assert_eq!(Paginator::navigate(1, 3, PageAction::Previous), 1);
        assert_eq!(Paginator::navigate(2, 3, PageAction::Previous), 1);
        assert_eq!(Paginator::navigate(1, 3, PageAction::Next), 2);
        assert_eq!(Paginator::navigate(3, 3, PageAction::Next), 3);
        assert_eq!(Paginator::navigate(1, 3, PageAction::Last), 3);
        assert_eq!(Paginator::navigate(1, 1, PageAction::Next), 1);
    }
}
