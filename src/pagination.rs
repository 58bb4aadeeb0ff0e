pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Number of pages needed for `count` items. Never less than one: an empty
/// result is shown as a single empty page.
pub fn total_pages(count: usize, page_size: usize) -> usize {
    count.div_ceil(page_size.max(1)).max(1)
}

pub fn clamp_page(requested: i64, total_pages: usize) -> usize {
    let last = i64::try_from(total_pages.max(1)).unwrap_or(i64::MAX);
    usize::try_from(requested.clamp(1, last)).unwrap_or(1)
}

/// Returns the clamped page slice and the total page count.
pub fn paginate<T>(items: &[T], requested: i64, page_size: usize) -> (&[T], usize) {
    let page_size = page_size.max(1);
    let total = total_pages(items.len(), page_size);
    let page = clamp_page(requested, total);

    let start = ((page - 1) * page_size).min(items.len());
    let end = (start + page_size).min(items.len());
    (&items[start..end], total)
}
