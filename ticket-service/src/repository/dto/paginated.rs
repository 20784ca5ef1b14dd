///
/// One page of rows together with counters describing the whole collection
///
#[derive(Debug, Clone, PartialEq)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub total_count: u64,
    pub total_pages: u64,
}

impl<T> Paginated<T> {
    pub fn new(items: Vec<T>, total_count: u64, page_size: u32) -> Self {
        let total_pages = match page_size {
            0 => 0,
            page_size => total_count.div_ceil(u64::from(page_size)),
        };

        Self {
            items,
            total_count,
            total_pages,
        }
    }
}

///
/// Number of rows to skip to reach 1-based `page`
///
pub fn page_skip(page: u32, page_size: u32) -> u64 {
    u64::from(page.saturating_sub(1)) * u64::from(page_size)
}
