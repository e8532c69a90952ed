mod common;

use common::grid;
use skiing_core::Pos;
use skiing_paths::{PathFinder, SolveError, Strategy};

#[test]
fn single_cell_grid() {
    let g = grid(vec![vec![5]]);
    let p = PathFinder::new(&g).solve().unwrap();
    assert_eq!(p.positions(), &[Pos::ZERO]);
    assert_eq!(p.elevations(&g), Ok(vec![5]));
    assert_eq!(p.len(), 1);
    assert_eq!(p.drop(), 0);
}

#[test]
fn strictly_decreasing_row() {
    let g = grid(vec![vec![5, 4, 3, 2, 1]]);
    let p = PathFinder::new(&g).solve().unwrap();
    assert_eq!(p.len(), 5);
    assert_eq!(p.drop(), 4);
    assert_eq!(p.elevations(&g), Ok(vec![5, 4, 3, 2, 1]));
}

#[test]
fn plateau_row() {
    let g = grid(vec![vec![3, 3, 3]]);
    let mut pf = PathFinder::new(&g);
    for p in g.bounds() {
        assert_eq!(pf.resolve(p).unwrap().len(), 1);
    }
    let best = pf.solve().unwrap();
    assert_eq!(best.len(), 1);
    assert_eq!(best.drop(), 0);
}

#[test]
fn two_by_two_tie_is_stable() {
    let g = grid(vec![vec![9, 8], vec![7, 2]]);
    let first = PathFinder::new(&g).solve().unwrap();
    assert_eq!(first.start(), Pos::ZERO);
    assert_eq!(first.len(), 3);
    assert_eq!(first.drop(), 7);
    let e = first.elevations(&g).unwrap();
    assert!(e == vec![9, 8, 2] || e == vec![9, 7, 2]);
    for _ in 0..5 {
        assert_eq!(PathFinder::new(&g).solve().unwrap(), first);
    }
}

#[test]
fn length_beats_steepness() {
    // From 105: left is 5 cells dropping 100, right is 6 cells dropping 5.
    let g = grid(vec![vec![5, 10, 30, 60, 105, 104, 103, 102, 101, 100]]);
    let p = PathFinder::new(&g).solve().unwrap();
    assert_eq!(p.len(), 6);
    assert_eq!(p.drop(), 5);
    assert_eq!(p.elevations(&g), Ok(vec![105, 104, 103, 102, 101, 100]));
}

#[test]
fn steeper_wins_equal_length() {
    // Every descent has at most two cells; 20 -> 1 drops the most.
    let g = grid(vec![vec![5, 4, 4, 20, 1]]);
    let p = PathFinder::new(&g).solve().unwrap();
    assert_eq!(p.len(), 2);
    assert_eq!(p.drop(), 19);
    assert_eq!(p.positions(), &[Pos::new(0, 3), Pos::new(0, 4)]);
}

#[test]
fn empty_grid_reports_no_path() {
    let g = grid(Vec::new());
    assert_eq!(PathFinder::new(&g).solve(), Err(SolveError::EmptyGrid));
}

#[test]
fn all_strategies_agree_on_sample() {
    let g = grid(vec![
        vec![4, 8, 7, 3],
        vec![2, 5, 9, 3],
        vec![6, 3, 2, 5],
        vec![4, 4, 1, 6],
    ]);
    let expected = PathFinder::new(&g).solve().unwrap();
    assert_eq!(expected.elevations(&g), Ok(vec![9, 5, 3, 2, 1]));
    for st in Strategy::ALL {
        assert_eq!(PathFinder::new(&g).solve_with(st).unwrap(), expected, "{st}");
    }
}
