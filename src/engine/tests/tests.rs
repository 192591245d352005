use super::*;
use crate::support::XorShift32;

/// Every draw returns the same value: 0.0 fills the grid, 0.99 leaves it empty.
struct FixedRandom(f64);

impl RandomSource for FixedRandom {
    fn next_unit(&mut self) -> f64 {
        self.0
    }
}

fn engine_with(rng: impl RandomSource + 'static) -> LifeEngine {
    LifeEngine::new(&LifeConfig::default(), Box::new(rng))
}

fn alive_sorted(grid: &Grid) -> Vec<(u32, u32)> {
    let mut cells: Vec<_> = grid.alive_cells().collect();
    cells.sort();
    cells
}

fn glider_cells(x: u32, y: u32) -> Vec<(u32, u32)> {
    let mut cells = Vec::new();
    for (dy, row) in seed::GLIDER.iter().enumerate() {
        for (dx, &on) in row.iter().enumerate() {
            if on {
                cells.push((x + dx as u32, y + dy as u32));
            }
        }
    }
    cells
}

#[test]
fn corner_cell_neighbors_wrap_around_both_axes() {
    let mut grid = Grid::new(6, 4);
    grid.set_alive(0, 0, true);

    assert_eq!(grid.count_neighbors(5, 3), 1);
    assert_eq!(grid.count_neighbors(5, 0), 1);
    assert_eq!(grid.count_neighbors(0, 3), 1);
    // Not adjacent even with wrap.
    assert_eq!(grid.count_neighbors(3, 2), 0);
    // A cell is never its own neighbor.
    assert_eq!(grid.count_neighbors(0, 0), 0);

    assert_eq!(grid.wrap_x(0, -1), 5);
    assert_eq!(grid.wrap_y(3, 1), 0);
}

#[test]
fn rule_table_matches_b3_s23() {
    for n in 0..=8u8 {
        assert_eq!(next_state(true, n), n == 2 || n == 3, "alive with {n}");
        assert_eq!(next_state(false, n), n == 3, "dead with {n}");
    }
}

#[test]
fn step_swaps_buffers_without_mixing_generations() {
    let mut grid = Grid::new(12, 9);
    let mut rng = XorShift32::new(2024);
    seed::seed(&mut grid, &mut rng, 0.35);

    let before = grid.cells().to_vec();
    let mut expected = vec![DEAD; grid.size()];
    for y in 0..grid.rows() {
        for x in 0..grid.cols() {
            let idx = grid.index(x, y);
            let alive = next_state(before[idx] == ALIVE, grid.count_neighbors(x, y));
            expected[idx] = alive as u8;
        }
    }

    let alive = grid.step();

    assert_eq!(grid.cells(), expected.as_slice());
    assert_eq!(grid.back_buffer(), before.as_slice());
    assert_eq!(alive, grid.alive_count());
}

#[test]
fn activity_band_boundaries() {
    let band = ActivityBand { min_alive: 5, max_ratio: 0.7 };

    assert!(band.needs_reseed(4, 100));
    assert!(!band.needs_reseed(5, 100));
    assert!(band.needs_reseed(70, 100));
    assert!(!band.needs_reseed(69, 100));
}

#[test]
fn dying_field_is_reseeded_after_step() {
    let mut engine = engine_with(FixedRandom(0.99));
    engine.initialize(100, 100);
    assert_eq!((engine.grid().cols(), engine.grid().rows()), (10, 10));
    assert_eq!(engine.grid().alive_count(), 0);

    // A lone block is stable at 4 cells: under the floor.
    for (x, y) in [(2, 2), (3, 2), (2, 3), (3, 3)] {
        engine.grid_mut().set_alive(x, y, true);
    }
    let report = engine.step();

    assert_eq!(report.alive, 4);
    assert!(report.reseeded);
    assert_eq!(engine.reseeds(), 1);
    // The reseed discarded the block (this source never draws a live cell).
    assert_eq!(engine.grid().alive_count(), 0);
}

#[test]
fn healthy_field_is_left_alone() {
    let mut engine = engine_with(FixedRandom(0.99));
    engine.initialize(100, 100);

    // Block (4) plus blinker (3) = 7 alive, inside the band.
    for (x, y) in [(1, 1), (2, 1), (1, 2), (2, 2), (5, 6), (6, 6), (7, 6)] {
        engine.grid_mut().set_alive(x, y, true);
    }
    let report = engine.step();

    assert_eq!(report.alive, 7);
    assert!(!report.reseeded);
    assert_eq!(engine.reseeds(), 0);
    assert!(engine.grid().is_alive(6, 5));
    assert!(engine.grid().is_alive(6, 7));
    assert!(!engine.grid().is_alive(5, 6));
}

#[test]
fn gliders_survive_any_random_draw() {
    let anchors = seed::glider_anchors(30, 30).expect("30x30 is large enough for gliders");
    assert_eq!(anchors, [(5, 5), (21, 9), (9, 21)]);

    for s in 1..20u32 {
        let mut grid = Grid::new(30, 30);
        let mut rng = XorShift32::new(s * 7919);
        seed::seed(&mut grid, &mut rng, 0.2);

        for &(ax, ay) in &anchors {
            for (x, y) in glider_cells(ax, ay) {
                assert!(grid.is_alive(x, y), "seed {s}: glider cell ({x}, {y}) dead");
            }
        }
    }
}

#[test]
fn gliders_only_add_cells() {
    let mut grid = Grid::new(30, 30);
    seed::seed(&mut grid, &mut FixedRandom(0.0), 0.2);
    assert_eq!(grid.alive_count(), 900);

    let mut sparse = Grid::new(30, 30);
    seed::seed(&mut sparse, &mut FixedRandom(0.99), 0.2);
    assert_eq!(sparse.alive_count(), 15);
}

#[test]
fn small_grids_get_no_gliders() {
    assert!(seed::glider_anchors(20, 40).is_none());
    assert!(seed::glider_anchors(40, 20).is_none());

    let mut grid = Grid::new(20, 20);
    seed::seed(&mut grid, &mut FixedRandom(0.99), 0.2);
    assert_eq!(grid.alive_count(), 0);
}

#[test]
fn glider_stamp_is_clipped_at_the_edge() {
    let mut grid = Grid::new(10, 10);
    seed::stamp_glider(&mut grid, 8, 7);
    // Column x + 2 falls off the right edge.
    assert_eq!(alive_sorted(&grid), vec![(8, 9), (9, 7), (9, 9)]);
}

#[test]
fn glider_translates_one_cell_diagonally_every_four_generations() {
    let mut grid = Grid::new(30, 30);
    seed::stamp_glider(&mut grid, 10, 10);

    for _ in 0..4 {
        grid.step();
    }

    assert_eq!(alive_sorted(&grid), {
        let mut moved = glider_cells(11, 11);
        moved.sort();
        moved
    });
}

#[test]
fn canvas_size_floors_to_whole_cells() {
    assert_eq!(Grid::dimensions_for(303, 99, 10), (30, 9));

    let mut engine = engine_with(XorShift32::default());
    engine.initialize(303, 99);
    assert_eq!(engine.grid().cols(), 30);
    assert_eq!(engine.grid().rows(), 9);
    assert_eq!(engine.grid().size(), 270);
    assert_eq!(engine.grid().back_buffer().len(), 270);
}

#[test]
fn reinitialize_replaces_both_buffers() {
    let mut engine = engine_with(XorShift32::default());
    engine.initialize(400, 300);
    engine.step();
    engine.initialize(120, 80);

    assert_eq!(engine.grid().size(), 12 * 8);
    assert_eq!(engine.grid().cells().len(), engine.grid().back_buffer().len());
    assert_eq!(engine.generation(), 0);
}

#[test]
fn blinker_flips_to_vertical_on_a_torus() {
    let mut grid = Grid::new(5, 5);
    for x in 1..=3 {
        grid.set_alive(x, 2, true);
    }

    assert_eq!(grid.step(), 3);
    assert_eq!(alive_sorted(&grid), vec![(2, 1), (2, 2), (2, 3)]);

    grid.step();
    assert_eq!(alive_sorted(&grid), vec![(1, 2), (2, 2), (3, 2)]);
}

#[test]
fn three_by_three_torus_sees_every_cell_as_neighbor() {
    let mut grid = Grid::new(3, 3);
    for x in 0..3 {
        grid.set_alive(x, 1, true);
    }
    assert_eq!(grid.count_neighbors(1, 0), 3);
    assert_eq!(grid.count_neighbors(1, 1), 2);

    // Each dead cell borders all three live ones, so the row fills the torus.
    assert_eq!(grid.step(), 9);
}

#[test]
fn degenerate_grid_steps_are_no_ops() {
    let mut engine = engine_with(XorShift32::default());
    engine.initialize(9, 400);

    assert!(engine.grid().is_degenerate());
    assert_eq!(engine.step(), StepReport::default());
    assert_eq!(engine.generation(), 0);
    assert_eq!(engine.reseeds(), 0);
}

#[test]
fn generation_counter_advances_per_step() {
    let mut engine = engine_with(XorShift32::new(5));
    engine.initialize(300, 300);
    for _ in 0..3 {
        engine.step();
    }
    assert_eq!(engine.generation(), 3);
}
