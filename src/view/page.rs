/// Number of fixed-size pages needed for `len` items. A zero page size is
/// normalized to 1.
pub fn page_count(len: usize, page_size: usize) -> usize {
    let page_size = page_size.max(1);
    len.div_ceil(page_size)
}

/// Clamp a 1-based page number into `[1, max(page_count, 1)]`.
pub fn clamp_page(page: usize, len: usize, page_size: usize) -> usize {
    page.clamp(1, page_count(len, page_size).max(1))
}

/// The slice of `items` visible on the given 1-based page.
/// Out-of-range page numbers are clamped, never an error.
pub fn paginate<T>(items: &[T], page_size: usize, page: usize) -> &[T] {
    let page_size = page_size.max(1);
    let page = clamp_page(page, items.len(), page_size);
    let start = (page - 1) * page_size;
    let end = (start + page_size).min(items.len());
    &items[start.min(items.len())..end]
}
