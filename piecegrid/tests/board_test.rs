// Copyright 2020 Zachary Stewart
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Tests for the board: bounds, placement, lookup, moves.

use std::sync::Arc;

use piecegrid::{
    board::{Axis, BoardError, CannotAddReason, MoveError},
    Board, Piece, PieceType, Position,
};

fn soldier() -> Arc<PieceType> {
    Arc::new(PieceType::new("soldier", "Soldier", "S", 1.0, 1.0).unwrap())
}

fn piece_at(row: i64, column: i64) -> Piece {
    Piece::new(soldier(), Position::new(row, column)).unwrap()
}

#[test]
fn test_new_rejects_zero_height() {
    let err = Board::new(0, 4).unwrap_err();
    assert_eq!(err.axis(), Axis::Height);
    assert_eq!(err.to_string(), "height is required and must be positive");
}

#[test]
fn test_new_rejects_zero_width() {
    let err = Board::new(4, 0).unwrap_err();
    assert_eq!(err.axis(), Axis::Width);
    assert_eq!(err.to_string(), "width is required and must be positive");
}

#[test]
fn test_new_accepts_positive_dimensions() {
    let board = Board::new(5, 7).unwrap();
    assert_eq!(board.height(), 5);
    assert_eq!(board.width(), 7);
    assert_eq!(board.piece_count(), 0);
}

#[test]
fn test_is_position_valid_matches_exact_cells() {
    for &(height, width) in &[(1, 1), (1, 5), (4, 4), (3, 7)] {
        let board = Board::new(height, width).unwrap();
        let mut valid = 0;
        for row in -2..(height as i64 + 2) {
            for column in -2..(width as i64 + 2) {
                let expected =
                    row >= 0 && row < height as i64 && column >= 0 && column < width as i64;
                let position = Position::new(row, column);
                assert_eq!(board.is_position_valid(position), expected, "{}", position);
                if expected {
                    valid += 1;
                }
            }
        }
        assert_eq!(valid, height * width);
    }
}

#[test]
fn test_is_position_valid_rejects_extreme_values() {
    let board = Board::new(4, 4).unwrap();
    assert!(!board.is_position_valid(Position::new(i64::MIN, 0)));
    assert!(!board.is_position_valid(Position::new(0, i64::MAX)));
}

#[test]
fn test_add_piece_then_get_returns_it() {
    let mut board = Board::new(4, 4).unwrap();
    let piece = piece_at(0, 0);
    board.add_piece(piece.clone()).unwrap();
    assert_eq!(board.get_piece_at(Position::new(0, 0)).unwrap(), Some(&piece));
}

#[test]
fn test_add_piece_out_of_bounds() {
    let mut board = Board::new(4, 4).unwrap();
    let err = board.add_piece(piece_at(4, 3)).unwrap_err();
    assert_eq!(err.reason(), CannotAddReason::OutOfBounds);
    assert_eq!(err.to_string(), "Row 4, column 3 is an invalid position");
    assert_eq!(err.into_piece().position(), Position::new(4, 3));
    assert_eq!(board.piece_count(), 0);
}

#[test]
fn test_add_piece_twice_at_same_position() {
    let mut board = Board::new(4, 4).unwrap();
    board.add_piece(piece_at(0, 0)).unwrap();
    let err = board.add_piece(piece_at(0, 0)).unwrap_err();
    assert_eq!(err.reason(), CannotAddReason::CellOccupied);
    assert_eq!(err.to_string(), "Piece is already present at row 0, column 0");
    assert_eq!(board.piece_count(), 1);
}

#[test]
fn test_add_piece_at_different_position_after_first() {
    let mut board = Board::new(4, 4).unwrap();
    board.add_piece(piece_at(0, 0)).unwrap();
    let piece = piece_at(0, 1);
    board.add_piece(piece.clone()).unwrap();
    assert_eq!(board.get_piece_at(Position::new(0, 1)).unwrap(), Some(&piece));
}

#[test]
fn test_get_piece_at_empty_cell_is_none() {
    let mut board = Board::new(4, 4).unwrap();
    board.add_piece(piece_at(0, 0)).unwrap();
    board.add_piece(piece_at(2, 2)).unwrap();
    assert_eq!(board.get_piece_at(Position::new(1, 1)).unwrap(), None);
}

#[test]
fn test_get_piece_at_invalid_position() {
    let board = Board::new(4, 4).unwrap();
    let err = board.get_piece_at(Position::new(-1, 0)).unwrap_err();
    assert_eq!(err.position(), Position::new(-1, 0));
    assert_eq!(err.to_string(), "Row -1, column 0 is an invalid position");
}

#[test]
fn test_with_pieces_adds_each_piece() {
    let first = piece_at(0, 0);
    let second = piece_at(3, 3);
    let board = Board::with_pieces(4, 4, vec![first.clone(), second.clone()]).unwrap();
    assert_eq!(board.get_piece_at(Position::new(0, 0)).unwrap(), Some(&first));
    assert_eq!(board.get_piece_at(Position::new(3, 3)).unwrap(), Some(&second));
    assert_eq!(board.get_piece_at(Position::new(1, 1)).unwrap(), None);
}

#[test]
fn test_with_pieces_propagates_dimension_error() {
    match Board::with_pieces(0, 4, vec![piece_at(0, 0)]) {
        Err(BoardError::InvalidDimension(err)) => assert_eq!(err.axis(), Axis::Height),
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn test_with_pieces_stops_at_first_failure() {
    match Board::with_pieces(4, 4, vec![piece_at(0, 0), piece_at(0, 0)]) {
        Err(BoardError::AddPiece(err)) => {
            assert_eq!(err.reason(), CannotAddReason::CellOccupied)
        }
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn test_add_pieces_keeps_earlier_pieces_on_failure() {
    let mut board = Board::new(4, 4).unwrap();
    let err = board
        .add_pieces(vec![piece_at(0, 0), piece_at(1, 1), piece_at(9, 9), piece_at(2, 2)])
        .unwrap_err();
    assert_eq!(err.reason(), CannotAddReason::OutOfBounds);
    assert!(board.get_piece_at(Position::new(0, 0)).unwrap().is_some());
    assert!(board.get_piece_at(Position::new(1, 1)).unwrap().is_some());
    assert!(board.get_piece_at(Position::new(2, 2)).unwrap().is_none());
    assert_eq!(board.piece_count(), 2);
}

#[test]
fn test_pieces_share_their_type() {
    let piece_type = soldier();
    let mut board = Board::new(2, 2).unwrap();
    board
        .add_piece(Piece::new(piece_type.clone(), Position::new(0, 0)).unwrap())
        .unwrap();
    board
        .add_piece(Piece::new(piece_type.clone(), Position::new(1, 1)).unwrap())
        .unwrap();
    assert!(board
        .pieces()
        .all(|piece| Arc::ptr_eq(piece.piece_type(), &piece_type)));
}

#[test]
fn test_move_piece_updates_board_and_piece() {
    let mut board = Board::new(4, 4).unwrap();
    board.add_piece(piece_at(0, 0)).unwrap();
    board
        .move_piece(Position::new(0, 0), Position::new(2, 3))
        .unwrap();
    assert!(board.get_piece_at(Position::new(0, 0)).unwrap().is_none());
    let moved = board.get_piece_at(Position::new(2, 3)).unwrap().unwrap();
    assert_eq!(moved.position(), Position::new(2, 3));
}

#[test]
fn test_move_piece_onto_itself_is_noop() {
    let mut board = Board::new(4, 4).unwrap();
    board.add_piece(piece_at(1, 1)).unwrap();
    board
        .move_piece(Position::new(1, 1), Position::new(1, 1))
        .unwrap();
    assert_eq!(
        board.get_piece_at(Position::new(1, 1)).unwrap().unwrap().position(),
        Position::new(1, 1)
    );
}

#[test]
fn test_move_piece_errors() {
    let mut board = Board::new(4, 4).unwrap();
    board.add_piece(piece_at(0, 0)).unwrap();
    board.add_piece(piece_at(0, 1)).unwrap();

    let err = board
        .move_piece(Position::new(0, 0), Position::new(0, 4))
        .unwrap_err();
    assert_eq!(err.to_string(), "Row 0, column 4 is an invalid position");

    let err = board
        .move_piece(Position::new(3, 3), Position::new(2, 2))
        .unwrap_err();
    assert_eq!(err, MoveError::EmptyCell { row: 3, column: 3 });

    let err = board
        .move_piece(Position::new(0, 0), Position::new(0, 1))
        .unwrap_err();
    assert_eq!(err.to_string(), "Piece is already present at row 0, column 1");

    // Failed moves leave both pieces in place.
    assert_eq!(board.piece_count(), 2);
    assert!(board.get_piece_at(Position::new(0, 0)).unwrap().is_some());
}

#[test]
fn test_move_piece_keeps_piece_count_and_order() {
    let mut board = Board::new(3, 3).unwrap();
    board.add_piece(piece_at(0, 0)).unwrap();
    board.add_piece(piece_at(1, 1)).unwrap();
    board
        .move_piece(Position::new(0, 0), Position::new(2, 2))
        .unwrap();
    assert_eq!(board.piece_count(), 2);
    let positions: Vec<Position> = board.pieces().map(Piece::position).collect();
    assert_eq!(positions, vec![Position::new(1, 1), Position::new(2, 2)]);
}

#[test]
fn test_new_accepts_boards_too_large_to_enumerate() {
    let board = Board::new(1, usize::MAX / 2).unwrap();
    assert_eq!(board.piece_count(), 0);
    assert!(board.is_position_valid(Position::new(0, i64::MAX)));
    assert!(!board.is_position_valid(Position::new(1, 0)));
}

#[test]
fn test_large_board_add_get_remove() {
    let mut board = Board::new(100_000, 100_000).unwrap();
    let corner = Position::new(99_999, 99_999);
    board.add_piece(piece_at(99_999, 99_999)).unwrap();
    assert_eq!(board.piece_count(), 1);
    assert_eq!(
        board.get_piece_at(corner).unwrap().map(Piece::position),
        Some(corner)
    );
    assert!(board.get_piece_at(Position::new(100_000, 0)).is_err());
    board.move_piece(corner, Position::new(0, 0)).unwrap();
    assert!(board.remove_piece(Position::new(0, 0)).unwrap().is_some());
    assert_eq!(board.piece_count(), 0);
}

#[test]
fn test_remove_piece() {
    let mut board = Board::new(4, 4).unwrap();
    board.add_piece(piece_at(2, 1)).unwrap();
    let removed = board.remove_piece(Position::new(2, 1)).unwrap();
    assert_eq!(removed.map(|p| p.position()), Some(Position::new(2, 1)));
    assert_eq!(board.remove_piece(Position::new(2, 1)).unwrap(), None);
    assert!(board.remove_piece(Position::new(4, 0)).is_err());
    assert_eq!(board.piece_count(), 0);
}

#[test]
fn test_iter_rows_is_row_major() {
    let mut board = Board::new(2, 3).unwrap();
    board.add_piece(piece_at(1, 2)).unwrap();
    let rows: Vec<Vec<bool>> = board
        .iter_rows()
        .map(|row| row.map(|cell| cell.is_some()).collect())
        .collect();
    assert_eq!(
        rows,
        vec![vec![false, false, false], vec![false, false, true]]
    );
}

#[cfg(feature = "rng_gen")]
#[test]
fn test_random_empty_position() {
    use rand::{rngs::StdRng, SeedableRng};

    let mut rng = StdRng::seed_from_u64(7);
    let mut board = Board::new(2, 2).unwrap();
    for _ in 0..4 {
        let position = board.random_empty_position(&mut rng).unwrap();
        assert!(board.get_piece_at(position).unwrap().is_none());
        board
            .add_piece(Piece::new(soldier(), position).unwrap())
            .unwrap();
    }
    assert_eq!(board.random_empty_position(&mut rng), None);
}

#[cfg(feature = "rng_gen")]
#[test]
fn test_random_empty_position_skips_occupied_cells() {
    use rand::{rngs::StdRng, SeedableRng};

    let mut rng = StdRng::seed_from_u64(11);
    let mut board = Board::new(1, 3).unwrap();
    board.add_piece(piece_at(0, 0)).unwrap();
    board.add_piece(piece_at(0, 2)).unwrap();
    for _ in 0..20 {
        assert_eq!(
            board.random_empty_position(&mut rng),
            Some(Position::new(0, 1))
        );
    }
}

#[cfg(feature = "rng_gen")]
#[test]
fn test_random_empty_position_on_large_board() {
    use rand::{rngs::StdRng, SeedableRng};

    let mut rng = StdRng::seed_from_u64(3);
    let mut board = Board::new(1_000_000, 1_000_000).unwrap();
    for _ in 0..50 {
        let position = board.random_empty_position(&mut rng).unwrap();
        assert!(board.get_piece_at(position).unwrap().is_none());
        board.add_piece(piece_at(position.row, position.column)).unwrap();
    }
    assert_eq!(board.piece_count(), 50);
}
