/// Returns the visible page of `choices` and the cursor position within it.
///
/// `page_size` must already be resolved to a real capacity; `0` shows
/// everything. `sel` is an index into `choices` and is clamped to the last
/// option.
pub fn paginate<T>(page_size: usize, choices: &[T], sel: usize) -> (&[T], usize) {
    if choices.is_empty() {
        return (choices, 0);
    }
    if page_size == 0 {
        return (choices, sel.min(choices.len() - 1));
    }

    let len = choices.len();
    let sel = sel.min(len - 1);
    let half = page_size / 2;

    let (start, end, cursor) = if len < page_size {
        // not enough options to fill a page
        (0, len, sel)
    } else if sel < half {
        // first half page
        (0, page_size, sel)
    } else if len - sel - 1 < half {
        // last half page
        let start = len - page_size;
        (start, len, sel - start)
    } else {
        // somewhere in the middle
        let above = half;
        let below = page_size - above;
        (sel - above, sel + below, half)
    };

    (&choices[start..end], cursor)
}
