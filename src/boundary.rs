use crate::field::Field;

/// Copy interior edges into the halo so that 8-neighbor lookups wrap.
///
/// Row wrap runs first (interior rows only), then column wrap over all
/// columns including the halo ones. The order is load-bearing: the
/// column pass reads the already-updated left/right halo columns,
/// which leaves each halo corner holding the diagonally-opposite
/// interior corner. Idempotent, since the halo is a pure projection
/// of interior state.
pub fn apply_periodic_boundaries(field: &mut Field) {
    let (w, h) = (field.width(), field.height());
    for y in 1..h - 1 {
        field.set(0, y, field.get(w - 2, y));
        field.set(w - 1, y, field.get(1, y));
    }
    for x in 0..w {
        field.set(x, 0, field.get(x, h - 2));
        field.set(x, h - 1, field.get(x, 1));
    }
}
