use gol_torus::{
    apply_periodic_boundaries, step, Config, Field, SeedPattern, Simulation, SnapshotError,
    SnapshotSink,
};

const SEED: u64 = 42;

/// Sink that records every emitted generation for inspection.
#[derive(Default)]
struct RecordingSink {
    labels: Vec<u64>,
    grids: Vec<Vec<bool>>,
}

impl SnapshotSink for RecordingSink {
    fn write(&mut self, field: &Field, timestep: u64) -> Result<(), SnapshotError> {
        self.labels.push(timestep);
        self.grids.push(field.cells().to_vec());
        Ok(())
    }
}

fn live_cells(cells: &[bool], width: usize, height: usize) -> Vec<(usize, usize)> {
    let mut alive = Vec::new();
    for y in 1..height - 1 {
        for x in 1..width - 1 {
            if cells[y * width + x] {
                alive.push((x, y));
            }
        }
    }
    alive
}

fn interior_live_cells(field: &Field) -> Vec<(usize, usize)> {
    live_cells(field.cells(), field.width(), field.height())
}

fn advance(current: &mut Field, next: &mut Field) {
    step(current, next);
    apply_periodic_boundaries(next);
    std::mem::swap(current, next);
}

#[test]
fn dead_field_stays_dead() {
    let mut current = Field::blank(10, 10);
    let mut next = Field::blank(10, 10);
    apply_periodic_boundaries(&mut current);
    for _ in 0..5 {
        advance(&mut current, &mut next);
        assert_eq!(current.population(), 0);
    }
}

#[test]
fn lone_cell_dies() {
    let mut current = Field::blank(10, 10);
    let mut next = Field::blank(10, 10);
    current.set(5, 5, true);
    apply_periodic_boundaries(&mut current);
    advance(&mut current, &mut next);
    assert_eq!(current.population(), 0);
}

#[test]
fn block_is_still_life() {
    let mut current = Field::blank(12, 12);
    let mut next = Field::blank(12, 12);
    let block = [(5, 5), (6, 5), (5, 6), (6, 6)];
    for &(x, y) in &block {
        current.set(x, y, true);
    }
    apply_periodic_boundaries(&mut current);
    for _ in 0..10 {
        advance(&mut current, &mut next);
        assert_eq!(interior_live_cells(&current), block);
    }
}

#[test]
fn left_right_wrap() {
    let w = 9;
    let mut field = Field::blank(w, 7);
    field.set(1, 1, true);
    apply_periodic_boundaries(&mut field);
    assert!(field.get(w - 1, 1), "right halo must mirror column 1");
    assert!(!field.get(0, 1));

    let mut field = Field::blank(w, 7);
    field.set(w - 2, 1, true);
    apply_periodic_boundaries(&mut field);
    assert!(field.get(0, 1), "left halo must mirror column width-2");
    assert!(!field.get(w - 1, 1));
}

#[test]
fn top_bottom_wrap() {
    let h = 7;
    let mut field = Field::blank(9, h);
    field.set(3, 1, true);
    apply_periodic_boundaries(&mut field);
    assert!(field.get(3, h - 1));

    let mut field = Field::blank(9, h);
    field.set(3, h - 2, true);
    apply_periodic_boundaries(&mut field);
    assert!(field.get(3, 0));
}

#[test]
fn corner_wrap_is_diagonal() {
    // Row wrap runs before column wrap, so each halo corner ends up
    // holding the diagonally-opposite interior corner.
    let mut field = Field::blank(5, 5);
    field.set(1, 1, true);
    apply_periodic_boundaries(&mut field);
    assert!(field.get(4, 4));
    assert!(!field.get(0, 0));
    assert!(!field.get(4, 0));
    assert!(!field.get(0, 4));

    let mut field = Field::blank(5, 5);
    field.set(3, 3, true);
    apply_periodic_boundaries(&mut field);
    assert!(field.get(0, 0));
}

#[test]
fn boundary_update_is_idempotent() {
    let mut field = Field::blank(16, 12);
    SeedPattern::Random {
        fill_rate: 0.5,
        seed: Some(SEED),
    }
    .apply(&mut field);
    apply_periodic_boundaries(&mut field);
    let once = field.cells().to_vec();
    apply_periodic_boundaries(&mut field);
    assert_eq!(field.cells(), &once[..]);
}

#[test]
fn evolution_wraps_across_edge() {
    // Vertical blinker hugging the left interior edge. On a torus its
    // horizontal phase reaches around the seam into column width-2.
    let mut current = Field::blank(7, 7);
    let mut next = Field::blank(7, 7);
    for y in [2, 3, 4] {
        current.set(1, y, true);
    }
    apply_periodic_boundaries(&mut current);
    advance(&mut current, &mut next);
    assert_eq!(interior_live_cells(&current), vec![(1, 3), (2, 3), (5, 3)]);
}

#[test]
fn runner_seed_places_five_cells() {
    // 32x32 interior: anchor is (34 / 3, 34 / 2) = (11, 17).
    let mut field = Field::blank(34, 34);
    SeedPattern::Runner.apply(&mut field);
    assert_eq!(
        interior_live_cells(&field),
        vec![(13, 17), (11, 18), (13, 18), (12, 19), (13, 19)]
    );
}

#[test]
fn runner_golden_generations() {
    let config = Config::new(32, 32, 2, SeedPattern::Runner);
    let mut sink = RecordingSink::default();
    Simulation::new(config).run(&mut sink).unwrap();

    assert_eq!(sink.labels, vec![0, 1, 2]);
    let generations: Vec<Vec<(usize, usize)>> = sink
        .grids
        .iter()
        .map(|cells| live_cells(cells, 34, 34))
        .collect();

    assert_eq!(
        generations[0],
        vec![(13, 17), (11, 18), (13, 18), (12, 19), (13, 19)]
    );
    assert_eq!(
        generations[1],
        vec![(12, 17), (13, 18), (14, 18), (12, 19), (13, 19)]
    );
    assert_eq!(
        generations[2],
        vec![(13, 17), (14, 18), (12, 19), (13, 19), (14, 19)]
    );
}

#[test]
fn driver_emits_n_plus_one_snapshots() {
    let config = Config::new(8, 8, 5, SeedPattern::Runner);
    let mut sink = RecordingSink::default();
    Simulation::new(config).run(&mut sink).unwrap();
    assert_eq!(sink.labels, vec![0, 1, 2, 3, 4, 5]);
}

#[test]
fn negative_steps_emit_only_initial_snapshot() {
    let config = Config::new(8, 8, -3, SeedPattern::Runner);
    assert_eq!(config.steps, 0);
    let mut sink = RecordingSink::default();
    Simulation::new(config).run(&mut sink).unwrap();
    assert_eq!(sink.labels, vec![0]);
}

#[test]
fn nonpositive_dimensions_fall_back_to_default() {
    let config = Config::new(0, -5, 3, SeedPattern::Runner);
    assert_eq!((config.width, config.height), (34, 34));

    let config = Config::new(16, 24, 3, SeedPattern::Runner);
    assert_eq!((config.width, config.height), (18, 26));
}

#[test]
fn random_seed_is_reproducible() {
    let pattern = SeedPattern::Random {
        fill_rate: 0.3,
        seed: Some(SEED),
    };
    let mut a = Field::blank(20, 20);
    let mut b = Field::blank(20, 20);
    pattern.apply(&mut a);
    pattern.apply(&mut b);
    assert_eq!(a.cells(), b.cells());
    assert!(a.population() > 0);

    let mut c = Field::blank(20, 20);
    SeedPattern::Random {
        fill_rate: 0.3,
        seed: Some(SEED + 1),
    }
    .apply(&mut c);
    assert_ne!(a.cells(), c.cells());
}

#[test]
fn random_seed_leaves_halo_dead() {
    let mut field = Field::blank(20, 20);
    SeedPattern::Random {
        fill_rate: 1.0,
        seed: Some(SEED),
    }
    .apply(&mut field);
    for x in 0..20 {
        assert!(!field.get(x, 0));
        assert!(!field.get(x, 19));
    }
    for y in 0..20 {
        assert!(!field.get(0, y));
        assert!(!field.get(19, y));
    }
    assert_eq!(field.population(), 18 * 18);
}
