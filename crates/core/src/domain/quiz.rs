use rand::Rng;

/// Draws one question uniformly at random from `pool`, skipping entries
/// whose id is in `previous`. Returns `None` when every candidate has been
/// seen; the caller decides how loudly that fails.
pub fn draw_question<T, R>(
    pool: Vec<T>,
    previous: &[i64],
    id_of: impl Fn(&T) -> i64,
    rng: &mut R,
) -> Option<T>
where
    R: Rng + ?Sized,
{
    let mut remaining: Vec<T> = pool
        .into_iter()
        .filter(|candidate| !previous.contains(&id_of(candidate)))
        .collect();

    if remaining.is_empty() {
        return None;
    }

    let index = rng.gen_range(0..remaining.len());
    Some(remaining.swap_remove(index))
}
