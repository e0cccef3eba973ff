#[cfg(test)]
mod tests {
    use crate::automaton::{step, step_parallel, GridSize, Pattern, Seed};
    use crate::error::ConfigError;
    use crate::state::State;

    fn alive(cells: &[u8], width: usize) -> Vec<(usize, usize)> {
        (0..cells.len())
            .filter(|&i| cells[i] != 0)
            .map(|i| (i % width, i / width))
            .collect()
    }

    fn noisy_cells(width: usize, height: usize, seed_base: u32) -> Vec<u8> {
        let mut lcg_state = seed_base.wrapping_mul(1103515245).wrapping_add(12345);
        (0..width * height)
            .map(|_| {
                lcg_state = lcg_state.wrapping_mul(1103515245).wrapping_add(12345);
                ((lcg_state >> 16) & 1) as u8
            })
            .collect()
    }

    #[test]
    fn test_determinism() {
        let source = noisy_cells(64, 64, 42);

        let mut first = vec![0u8; 4096];
        let mut second = vec![1u8; 4096];
        step(&source, &mut first, 64, 64).unwrap();
        step(&source, &mut second, 64, 64).unwrap();

        assert_eq!(first, second, "Not deterministic");
    }

    #[test]
    fn test_sequential_and_parallel_agree_over_generations() {
        let mut sequential = State::from_cells(48, 40, noisy_cells(48, 40, 2024)).unwrap();
        let mut parallel = State::from_cells(48, 40, noisy_cells(48, 40, 2024)).unwrap();
        parallel.set_mode(crate::ExecutionMode::Parallel);

        for _ in 0..20 {
            sequential.advance();
            parallel.advance();
        }

        assert_eq!(sequential.cells(), parallel.cells());
        assert_eq!(parallel.generation(), 20);
    }

    #[test]
    fn test_toroidal_wraparound_diagonal() {
        // (w-1, h-1) and (1, 1) are both diagonal neighbors of (0, 0), plus
        // (0, 0) itself: a live cell with 2 neighbors survives only if the
        // corner across the wrap is counted.
        let (w, h) = (6, 6);
        let mut source = vec![0u8; w * h];
        source[0] = 1;
        source[(h - 1) * w + (w - 1)] = 1;
        source[w + 1] = 1;

        let mut destination = vec![0u8; w * h];
        step(&source, &mut destination, w, h).unwrap();

        assert_eq!(destination[0], 1, "(0,0) should see the wrapped corner");
    }

    #[test]
    fn test_wraparound_blinker_across_edge() {
        // Horizontal blinker straddling the left/right edge at row 2.
        let size = GridSize::new(6, 5).unwrap();
        let mut source = vec![0u8; size.cell_count()];
        for x in [5, 0, 1] {
            source[size.index_of(x, 2)] = 1;
        }

        let mut destination = vec![0u8; size.cell_count()];
        step(&source, &mut destination, 6, 5).unwrap();

        assert_eq!(alive(&destination, 6), vec![(0, 1), (0, 2), (0, 3)]);
    }

    #[test]
    fn test_dead_grid_stays_dead() {
        let mut state = State::new(32, 32).unwrap();
        state.advance_by(10);
        assert_eq!(state.live_count(), 0);
        assert_eq!(state.generation(), 10);
    }

    #[test]
    fn test_block_is_stable() {
        let mut state = State::new(8, 8).unwrap();
        state.seed(Seed::Pattern(Pattern::Block)).unwrap();
        let block = state.cells().to_vec();
        assert_eq!(alive(&block, 8), vec![(3, 3), (4, 3), (3, 4), (4, 4)]);

        for _ in 0..5 {
            state.advance();
            assert_eq!(state.cells(), &block[..]);
        }
    }

    #[test]
    fn test_blinker_oscillates() {
        let mut state = State::new(5, 5).unwrap();
        state.seed(Seed::Pattern(Pattern::Blinker)).unwrap();
        assert_eq!(alive(state.cells(), 5), vec![(1, 2), (2, 2), (3, 2)]);

        state.advance();
        assert_eq!(alive(state.cells(), 5), vec![(2, 1), (2, 2), (2, 3)]);

        state.advance();
        assert_eq!(alive(state.cells(), 5), vec![(1, 2), (2, 2), (3, 2)]);
    }

    #[test]
    fn test_glider_travels_and_wraps() {
        let size = 8;
        let mut state = State::new(size, size).unwrap();
        for &(x, y) in Pattern::Glider.cells() {
            state.set_cell(x, y, true);
        }
        let start = alive(state.cells(), size);

        // Every 4 generations the glider moves one cell down and right.
        state.advance_by(4);
        let shifted: Vec<(usize, usize)> = {
            let mut cells: Vec<_> = start.iter().map(|&(x, y)| (x + 1, y + 1)).collect();
            cells.sort_by_key(|&(x, y)| (y, x));
            cells
        };
        assert_eq!(alive(state.cells(), size), shifted);

        // After a full lap of the torus it is back where it started.
        state.advance_by(4 * (size as u64 - 1));
        assert_eq!(alive(state.cells(), size), start);
        assert_eq!(state.live_count(), 5);
    }

    #[test]
    fn test_buffer_independence() {
        let mut source = noisy_cells(16, 16, 7);
        let mut destination = vec![0u8; 256];
        step(&source, &mut destination, 16, 16).unwrap();
        let snapshot = destination.clone();

        source.iter_mut().for_each(|c| *c ^= 1);

        assert_eq!(destination, snapshot);
    }

    #[test]
    fn test_advance_reads_previous_write() {
        // Generation n must read exactly what generation n-1 wrote.
        let cells = noisy_cells(20, 12, 99);
        let mut state = State::from_cells(20, 12, cells.clone()).unwrap();

        let mut expected = cells;
        let mut scratch = vec![0u8; expected.len()];
        for _ in 0..6 {
            step(&expected, &mut scratch, 20, 12).unwrap();
            std::mem::swap(&mut expected, &mut scratch);

            state.advance();
            assert_eq!(state.cells(), &expected[..]);
        }
    }

    #[test]
    fn test_invalid_configuration_rejected_up_front() {
        assert!(matches!(
            State::new(0, 0),
            Err(ConfigError::InvalidDimensions { .. })
        ));
        assert!(matches!(
            State::from_cells(4, 4, vec![0; 10]),
            Err(ConfigError::BufferSize { .. })
        ));

        let source = vec![0u8; 9];
        let mut destination = vec![0u8; 9];
        assert!(step_parallel(&source, &mut destination, 3, 0).is_err());
        assert!(step_parallel(&source, &mut destination[..8], 3, 3).is_err());
    }
}
