//! Integration tests for GridMapper

use pixel_grid::{ChainError, GridMapper, GridPos};

fn row(mapper: &GridMapper, r: usize) -> Vec<usize> {
    (0..mapper.cols())
        .map(|c| mapper.grid_to_chain(r, c).unwrap())
        .collect()
}

#[test]
fn rejects_empty_row_list() {
    assert_eq!(GridMapper::new(&[]), Err(ChainError::InvalidConfiguration));
}

#[test]
fn rejects_zero_pixel_row() {
    assert_eq!(GridMapper::new(&[4, 0, 4]), Err(ChainError::InvalidConfiguration));
    assert_eq!(GridMapper::single_row(0), Err(ChainError::InvalidConfiguration));
}

#[test]
fn dimensions_follow_row_counts() {
    let mapper = GridMapper::new(&[6, 12, 9]).unwrap();
    assert_eq!(mapper.rows(), 3);
    assert_eq!(mapper.cols(), 12);
    assert_eq!(mapper.pixel_count(), 27);
    assert_eq!(mapper.row_counts(), &[6, 12, 9]);
}

#[test]
fn single_row_is_identity() {
    let mapper = GridMapper::single_row(25).unwrap();
    assert_eq!(mapper.rows(), 1);
    assert_eq!(mapper.cols(), 25);
    for c in 0..25 {
        assert_eq!(mapper.grid_to_chain(0, c), Some(c));
        assert_eq!(mapper.chain_to_grid(c).unwrap(), &[GridPos::new(0, c)]);
    }
}

#[test]
fn widest_row_maps_one_to_one_after_offset() {
    let mapper = GridMapper::new(&[6, 12]).unwrap();
    assert_eq!(row(&mapper, 1), (6..18).collect::<Vec<_>>());
}

#[test]
fn short_row_rounds_exact_halves_to_even() {
    let mapper = GridMapper::new(&[6, 12]).unwrap();
    assert_eq!(row(&mapper, 0), vec![0, 0, 1, 2, 2, 2, 3, 4, 4, 4, 5, 0]);

    let mapper = GridMapper::new(&[7, 10]).unwrap();
    assert_eq!(row(&mapper, 0), vec![0, 1, 1, 2, 3, 4, 4, 5, 6, 6]);
}

#[test]
fn near_ties_follow_decimal_quotient_rounding() {
    let mapper = GridMapper::new(&[3, 6]).unwrap();
    assert_eq!(row(&mapper, 0), vec![0, 1, 1, 2, 2, 2]);

    let mapper = GridMapper::new(&[3, 12]).unwrap();
    assert_eq!(row(&mapper, 0), vec![0, 0, 1, 1, 1, 1, 2, 2, 2, 2, 2, 0]);

    let mapper = GridMapper::new(&[14, 28]).unwrap();
    assert_eq!(
        row(&mapper, 0),
        vec![
            0, 0, 1, 1, 2, 2, 3, 4, 4, 4, 5, 6, 6, 6, 7, 8, 8, 8, 9, 10, 10, 10, 11, 12, 12,
            12, 13, 0
        ]
    );
    assert_eq!(row(&mapper, 1), (14..42).collect::<Vec<_>>());
}

#[test]
fn last_column_wraps_onto_first_pixel_of_row() {
    let mapper = GridMapper::new(&[12, 5]).unwrap();
    assert_eq!(row(&mapper, 1), vec![12, 12, 13, 13, 14, 14, 14, 15, 15, 16, 16, 12]);
}

#[test]
fn short_row_covers_every_pixel_in_its_range() {
    let mapper = GridMapper::new(&[6, 12]).unwrap();
    let values = row(&mapper, 0);
    for pixel in 0..6 {
        assert!(values.contains(&pixel), "pixel {} unmapped", pixel);
    }
    assert!(values.iter().all(|&p| p < 6));
}

#[test]
fn every_pixel_has_at_least_one_cell() {
    for rows in [&[6, 12][..], &[3, 8, 5], &[1, 9], &[10, 10, 4], &[7]] {
        let mapper = GridMapper::new(rows).unwrap();
        for pos in 0..mapper.pixel_count() {
            let cells = mapper.chain_to_grid(pos).unwrap();
            assert!(!cells.is_empty(), "{:?}: pixel {} orphaned", rows, pos);
        }
    }
}

#[test]
fn tables_are_consistent_inverses() {
    let mapper = GridMapper::new(&[3, 8, 5, 8]).unwrap();

    for pos in 0..mapper.pixel_count() {
        for cell in mapper.chain_to_grid(pos).unwrap() {
            assert_eq!(mapper.grid_to_chain(cell.row, cell.col), Some(pos));
        }
    }

    for r in 0..mapper.rows() {
        for c in 0..mapper.cols() {
            let pos = mapper.grid_to_chain(r, c).unwrap();
            assert!(mapper.chain_to_grid(pos).unwrap().contains(&GridPos::new(r, c)));
        }
    }
}

#[test]
fn cells_are_recorded_in_row_major_order() {
    let mapper = GridMapper::new(&[6, 12]).unwrap();
    assert_eq!(
        mapper.chain_to_grid(0).unwrap(),
        &[GridPos::new(0, 0), GridPos::new(0, 1), GridPos::new(0, 11)]
    );
    assert_eq!(
        mapper.chain_to_grid(2).unwrap(),
        &[GridPos::new(0, 3), GridPos::new(0, 4), GridPos::new(0, 5)]
    );
}

#[test]
fn rows_stay_within_their_own_chain_segment() {
    let mapper = GridMapper::new(&[4, 9, 2]).unwrap();
    let mut start = 0;
    for (r, &count) in mapper.row_counts().iter().enumerate() {
        assert!(row(&mapper, r).iter().all(|&p| (start..start + count).contains(&p)));
        start += count;
    }
}

#[test]
fn out_of_range_lookups_return_none() {
    let mapper = GridMapper::new(&[6, 12]).unwrap();
    assert_eq!(mapper.grid_to_chain(2, 0), None);
    assert_eq!(mapper.grid_to_chain(0, 12), None);
    assert_eq!(mapper.chain_to_grid(18), None);
}
