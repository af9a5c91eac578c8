// Ficheiro: src/core/board.rs
// Descrição: Módulo que contém a struct Board e os seus métodos principais.

use super::types::*;
use std::fmt;

// O tabuleiro: 64 códigos de peça com sinal, indexados por y * 8 + x.
// Casa 0 = a1, casa 7 = h1, casa 63 = h8.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    pieces: [PieceCode; BOARD_SPACES],
}

impl Board {
    /// Cria um novo tabuleiro na posição inicial padrão.
    pub fn new() -> Self {
        let mut board = Board::empty();

        // Peões na segunda e na sétima fila
        for x in 0..BOARD_DIM {
            board.set_piece_at(Self::xy_to_index(x, 1), PieceKind::Pawn.code(Player::White));
            board.set_piece_at(Self::xy_to_index(x, 6), PieceKind::Pawn.code(Player::Black));
        }

        // Primeira fila espelhada para as duas cores
        const BACK_RANK: [PieceKind; 8] = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];
        for (x, kind) in BACK_RANK.iter().enumerate() {
            let x = x as i8;
            board.set_piece_at(Self::xy_to_index(x, 0), kind.code(Player::White));
            board.set_piece_at(Self::xy_to_index(x, 7), kind.code(Player::Black));
        }

        board
    }

    /// Tabuleiro sem nenhuma peça.
    pub fn empty() -> Self {
        Board { pieces: [EMPTY; BOARD_SPACES] }
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> PieceCode {
        self.pieces[square as usize]
    }

    #[inline]
    pub fn set_piece_at(&mut self, square: Square, piece: PieceCode) {
        debug_assert!(piece != NO_PIECE, "a sentinela nunca vai para o tabuleiro");
        self.pieces[square as usize] = piece;
    }

    pub fn pieces(&self) -> &[PieceCode; BOARD_SPACES] {
        &self.pieces
    }

    /// Soma de material: positiva favorece as brancas.
    pub fn score(&self) -> Score {
        self.pieces
            .iter()
            .map(|&code| piece_value(code) * Score::from(code.signum()))
            .sum()
    }

    /// Soma de material do ponto de vista de um jogador.
    #[inline]
    pub fn score_for(&self, player: Player) -> Score {
        self.score() * Score::from(player.sign())
    }

    /// Casas ocupadas pelas peças de um jogador, em ordem crescente.
    pub fn squares_of(&self, player: Player) -> impl Iterator<Item = Square> + '_ {
        (0..BOARD_SPACES as Square).filter(move |&sq| player.owns(self.piece_at(sq)))
    }

    #[inline]
    pub fn index_to_x(index: Square) -> i8 {
        (index % BOARD_DIM as u8) as i8
    }

    #[inline]
    pub fn index_to_y(index: Square) -> i8 {
        (index / BOARD_DIM as u8) as i8
    }

    #[inline]
    pub fn xy_to_index(x: i8, y: i8) -> Square {
        debug_assert!((0..BOARD_DIM).contains(&x) && (0..BOARD_DIM).contains(&y));
        (x + y * BOARD_DIM) as Square
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

// Desenho do tabuleiro: fila 8 em cima, brancas em maiúsculas, pretas em minúsculas.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "  ")?;
        for x in 0..BOARD_DIM {
            write!(f, "{}", (b'a' + x as u8) as char)?;
        }
        writeln!(f)?;

        for y in (0..BOARD_DIM).rev() {
            write!(f, "{} ", y + 1)?;
            for x in 0..BOARD_DIM {
                let code = self.piece_at(Self::xy_to_index(x, y));
                let letter = piece_letter(code);
                if code < 0 {
                    write!(f, "{}", letter.to_ascii_lowercase())?;
                } else {
                    write!(f, "{}", letter)?;
                }
            }
            writeln!(f, " {}", y + 1)?;
        }

        write!(f, "  ")?;
        for x in 0..BOARD_DIM {
            write!(f, "{}", (b'a' + x as u8) as char)?;
        }
        writeln!(f)
    }
}
