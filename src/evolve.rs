use crate::field::Field;

/// Compute the next generation of `src` into the interior of `dst`.
///
/// `src` must have had its boundaries wrapped: every lookup is a plain
/// 8-neighbor read, with the halo standing in for the opposite edge.
/// `dst`'s halo is left untouched and is only meaningful again after
/// the next boundary update.
pub fn step(src: &Field, dst: &mut Field) {
    assert_eq!((src.width(), src.height()), (dst.width(), dst.height()));
    for y in 1..src.height() - 1 {
        for x in 1..src.width() - 1 {
            let neibs = src.get(x - 1, y - 1) as u8
                + src.get(x, y - 1) as u8
                + src.get(x + 1, y - 1) as u8
                + src.get(x - 1, y) as u8
                + src.get(x + 1, y) as u8
                + src.get(x - 1, y + 1) as u8
                + src.get(x, y + 1) as u8
                + src.get(x + 1, y + 1) as u8;
            let next = if src.get(x, y) {
                neibs == 2 || neibs == 3
            } else {
                neibs == 3
            };
            dst.set(x, y, next);
        }
    }
}
