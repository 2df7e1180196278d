use std::ops::Range;

pub const QUESTIONS_PER_PAGE: usize = 10;

/// Index window for one page of a list of `len` items.
///
/// The window is computed as a literal slice `[(page-1)*10, (page-1)*10+10)`
/// with sequence-slicing semantics: negative bounds resolve from the end of
/// the list and everything clamps to `[0, len]`. Page 0 therefore yields an
/// empty window, while negative pages can land back inside the list. Callers
/// treat an empty window as "page does not exist".
pub fn page_window(page: i64, len: usize) -> Range<usize> {
    let start = page.saturating_sub(1).saturating_mul(QUESTIONS_PER_PAGE as i64);
    let end = start.saturating_add(QUESTIONS_PER_PAGE as i64);

    let lo = resolve_bound(start, len);
    let hi = resolve_bound(end, len);
    lo..hi.max(lo)
}

fn resolve_bound(bound: i64, len: usize) -> usize {
    let len = len as i64;
    let resolved = if bound < 0 { len + bound } else { bound };
    resolved.clamp(0, len) as usize
}
