//! Lumber purchase calculator.
//!
//! Lumber is sold in fixed stock lengths. When a stock board is at least as
//! long as one piece, it is cut into `floor(board / piece)` pieces and boards
//! are bought by piece count. When a board is shorter than one piece, pieces
//! are spliced and boards are bought by total linear footage instead.
//!
//! The two branches disagree at the boundary on purpose: with board == piece
//! the piece-count branch applies. Kerf, waste and sharing offcuts across
//! walls are not modeled.

use super::count_from;

/// Boards of `board_length_ft` needed for `pieces` pieces of `piece_length_ft`.
///
/// Returns 0 for zero pieces or non-positive lengths.
pub fn boards_needed(pieces: u32, piece_length_ft: f64, board_length_ft: f64) -> u32 {
    if pieces == 0 || !(piece_length_ft > 0.0) || !(board_length_ft > 0.0) {
        return 0;
    }

    let pieces = f64::from(pieces);
    let board_covers_whole_piece = board_length_ft >= piece_length_ft;

    let boards = if board_covers_whole_piece {
        let pieces_per_board = (board_length_ft / piece_length_ft).floor();
        (pieces / pieces_per_board).ceil()
    } else {
        (pieces * piece_length_ft / board_length_ft).ceil()
    };

    count_from(boards)
}

/// Stud boards to buy for a wall of the given height
pub fn studs_needed(total_studs: u32, wall_height_ft: f64, stud_length_ft: f64) -> u32 {
    boards_needed(total_studs, wall_height_ft, stud_length_ft)
}

/// Plate boards to buy for the given number of runs along a wall
pub fn plates_needed(total_plates: u32, wall_length_ft: f64, plate_length_ft: f64) -> u32 {
    boards_needed(total_plates, wall_length_ft, plate_length_ft)
}

/// Footage of stud stock bought
pub fn stud_linear_feet(studs_needed: u32, stud_length_ft: f64) -> f64 {
    f64::from(studs_needed) * stud_length_ft
}

/// Footage of plate stock bought
pub fn plate_linear_feet(plates_needed: u32, plate_length_ft: f64) -> f64 {
    f64::from(plates_needed) * plate_length_ft
}

pub fn total_linear_feet(stud_linear_feet: f64, plate_linear_feet: f64) -> f64 {
    stud_linear_feet + plate_linear_feet
}
