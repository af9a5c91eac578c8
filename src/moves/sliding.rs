// Ficheiro: src/moves/sliding.rs
// Descrição: Lógica para gerar os lances de peças deslizantes (Torres e Bispos).

use super::{move_to, MoveSink, Target};
use crate::core::*;

pub const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];
pub const ROOK_DIRECTIONS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Desliza ao longo de (dx, dy) enquanto as casas estiverem vazias. A primeira
/// peça inimiga entra como captura; uma peça amiga ou a borda param antes.
#[inline]
pub fn slide<S: MoveSink>(board: &Board, player: Player, x: i8, y: i8, dx: i8, dy: i8, sink: &mut S) {
    for distance in 1..BOARD_DIM {
        if !move_to(board, player, x, y, dx * distance, dy * distance, Target::EmptyOrCapture, sink) {
            break;
        }
    }
}

/// Desliza em cada uma das direções dadas.
pub fn slide_all<S: MoveSink>(
    board: &Board,
    player: Player,
    x: i8,
    y: i8,
    directions: &[(i8, i8)],
    sink: &mut S,
) {
    for &(dx, dy) in directions {
        slide(board, player, x, y, dx, dy, sink);
    }
}

/// Função genérica para gerar lances de Torres e Bispos.
pub fn generate_sliding_moves<S: MoveSink>(
    board: &Board,
    player: Player,
    x: i8,
    y: i8,
    piece_kind: PieceKind,
    sink: &mut S,
) {
    let directions: &[(i8, i8)] = match piece_kind {
        PieceKind::Bishop => &BISHOP_DIRECTIONS,
        PieceKind::Rook => &ROOK_DIRECTIONS,
        _ => return, // Não deve acontecer para esta função
    };
    slide_all(board, player, x, y, directions, sink);
}
