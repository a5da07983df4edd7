#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    Page { number: u32, current: bool },
    Ellipsis,
}

/// Number of pages needed for `total_items`, rounding up.
pub fn total_pages(total_items: u64, page_size: u32) -> u64 {
    if page_size == 0 {
        return 0;
    }
    total_items.div_ceil(page_size as u64)
}

/// Page navigation for a list of `total_items` split into pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    current_page: u32,
    total_pages: u32,
    total_items: u64,
}

impl Pagination {
    /// Pages on each side of the current one that are always listed.
    const WINDOW: u32 = 2;

    /// `None` when everything fits on a single page.
    pub fn new(current_page: u32, total_items: u64, page_size: u32) -> Option<Self> {
        let total_pages = total_pages(total_items, page_size);
        if total_pages <= 1 {
            return None;
        }
        Some(Pagination {
            current_page,
            total_pages: u32::try_from(total_pages).unwrap_or(u32::MAX),
            total_items,
        })
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    pub fn total_items(&self) -> u64 {
        self.total_items
    }

    pub fn can_go_prev(&self) -> bool {
        self.current_page > 1
    }

    pub fn can_go_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    pub fn prev(&self) -> Option<u32> {
        self.can_go_prev().then(|| self.current_page - 1)
    }

    pub fn next(&self) -> Option<u32> {
        self.can_go_next().then(|| self.current_page + 1)
    }

    /// The page to switch to when `page` is clicked. Clicking the current
    /// page, or one that doesn't exist, goes nowhere.
    pub fn select(&self, page: u32) -> Option<u32> {
        (page != self.current_page && (1..=self.total_pages).contains(&page)).then_some(page)
    }

    /// First and last page, the window around the current page, and one
    /// ellipsis for each run of pages left out.
    pub fn items(&self) -> Vec<PageItem> {
        let last = self.total_pages;
        let lo = self.current_page.saturating_sub(Self::WINDOW).max(1);
        let hi = self.current_page.saturating_add(Self::WINDOW).min(last);
        let mut numbers = vec![1];
        numbers.extend((lo..=hi).filter(|&n| n != 1 && n != last));
        numbers.push(last);

        let mut items = Vec::with_capacity(numbers.len() * 2);
        let mut prev = 0;
        for number in numbers {
            if number > prev + 1 && prev != 0 {
                items.push(PageItem::Ellipsis);
            }
            items.push(PageItem::Page {
                number,
                current: number == self.current_page,
            });
            prev = number;
        }
        items
    }

    pub fn summary(&self) -> String {
        format!(
            "Page {} of {}, {} posts",
            self.current_page, self.total_pages, self.total_items
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listed(items: &[PageItem]) -> Vec<Option<u32>> {
        items
            .iter()
            .map(|item| match item {
                PageItem::Page { number, .. } => Some(*number),
                PageItem::Ellipsis => None,
            })
            .collect()
    }

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0, 10), 0);
        assert_eq!(total_pages(1, 10), 1);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
        assert_eq!(total_pages(100, 10), 10);
        assert_eq!(total_pages(100, 7), 15);
        assert_eq!(total_pages(5, 0), 0);
    }

    #[test]
    fn test_absent_for_single_page() {
        for (total, size) in [(0, 10), (1, 10), (10, 10), (3, 100)] {
            assert!(Pagination::new(1, total, size).is_none());
        }
        for (total, size) in [(11, 10), (100, 10), (2, 1)] {
            assert!(Pagination::new(1, total, size).is_some());
        }
    }

    #[test]
    fn test_prev_next_bounds() {
        let total_pages = 10;
        for current in 1..=total_pages {
            let pagination = Pagination::new(current, 100, 10).unwrap();
            assert_eq!(pagination.can_go_prev(), current > 1);
            assert_eq!(pagination.can_go_next(), current < total_pages);
        }
        let first = Pagination::new(1, 100, 10).unwrap();
        assert_eq!(first.prev(), None);
        assert_eq!(first.next(), Some(2));
        let last = Pagination::new(10, 100, 10).unwrap();
        assert_eq!(last.prev(), Some(9));
        assert_eq!(last.next(), None);
    }

    #[test]
    fn test_window_in_the_middle() {
        let pagination = Pagination::new(10, 200, 10).unwrap();
        assert_eq!(pagination.total_pages(), 20);
        assert_eq!(
            listed(&pagination.items()),
            vec![
                Some(1),
                None,
                Some(8),
                Some(9),
                Some(10),
                Some(11),
                Some(12),
                None,
                Some(20)
            ]
        );
        let current: Vec<_> = pagination
            .items()
            .into_iter()
            .filter(|item| matches!(item, PageItem::Page { current: true, .. }))
            .collect();
        assert_eq!(
            current,
            vec![PageItem::Page {
                number: 10,
                current: true
            }]
        );
    }

    #[test]
    fn test_window_at_edges() {
        let first = Pagination::new(1, 100, 10).unwrap();
        assert_eq!(
            listed(&first.items()),
            vec![Some(1), Some(2), Some(3), None, Some(10)]
        );
        let last = Pagination::new(10, 100, 10).unwrap();
        assert_eq!(
            listed(&last.items()),
            vec![Some(1), None, Some(8), Some(9), Some(10)]
        );
        // a single hidden page still collapses into an ellipsis
        let near = Pagination::new(5, 100, 10).unwrap();
        assert_eq!(
            listed(&near.items()),
            vec![
                Some(1),
                None,
                Some(3),
                Some(4),
                Some(5),
                Some(6),
                Some(7),
                None,
                Some(10)
            ]
        );
    }

    #[test]
    fn test_no_ellipsis_when_everything_fits() {
        let pagination = Pagination::new(3, 50, 10).unwrap();
        assert_eq!(
            listed(&pagination.items()),
            vec![Some(1), Some(2), Some(3), Some(4), Some(5)]
        );
    }

    #[test]
    fn test_huge_total_lists_only_the_window() {
        let pagination = Pagination::new(5, u64::MAX, 1).unwrap();
        assert_eq!(pagination.total_pages(), u32::MAX);
        assert_eq!(
            listed(&pagination.items()),
            vec![
                Some(1),
                None,
                Some(3),
                Some(4),
                Some(5),
                Some(6),
                Some(7),
                None,
                Some(u32::MAX)
            ]
        );
        let near_end = Pagination::new(u32::MAX - 1, u64::MAX, 1).unwrap();
        assert_eq!(
            listed(&near_end.items()),
            vec![
                Some(1),
                None,
                Some(u32::MAX - 3),
                Some(u32::MAX - 2),
                Some(u32::MAX - 1),
                Some(u32::MAX)
            ]
        );
    }

    #[test]
    fn test_select() {
        let pagination = Pagination::new(3, 100, 10).unwrap();
        assert_eq!(pagination.select(3), None);
        assert_eq!(pagination.select(0), None);
        assert_eq!(pagination.select(11), None);
        assert_eq!(pagination.select(7), Some(7));
    }

    #[test]
    fn test_summary() {
        let pagination = Pagination::new(2, 45, 10).unwrap();
        assert_eq!(pagination.summary(), "Page 2 of 5, 45 posts");
    }
}
