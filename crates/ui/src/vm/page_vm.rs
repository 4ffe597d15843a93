use drive_core::model::Page;

/// Pagination footer state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageVm {
    pub page: u32,
    pub limit: u32,
    pub page_count: u32,
    pub has_prev: bool,
    pub has_next: bool,
    pub range_label: String,
}

impl<T> From<&Page<T>> for PageVm {
    fn from(page: &Page<T>) -> Self {
        let range_label = if page.items.is_empty() {
            format!("0 of {}", page.total)
        } else {
            let first = u64::from(page.page.saturating_sub(1)) * u64::from(page.limit) + 1;
            let last = first + page.items.len() as u64 - 1;
            format!("{first}-{last} of {}", page.total)
        };
        Self {
            page: page.page,
            limit: page.limit,
            page_count: page.page_count(),
            has_prev: page.has_prev(),
            has_next: page.has_next(),
            range_label,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_label_counts_from_the_page_offset() {
        let page = Page {
            items: vec![1, 2, 3],
            total: 23,
            page: 3,
            limit: 10,
        };
        let vm = PageVm::from(&page);
        assert_eq!(vm.range_label, "21-23 of 23");
        assert!(vm.has_prev);
        assert!(!vm.has_next);
        assert_eq!(vm.page_count, 3);
    }
}
