// Ficheiro: src/core/types.rs
// Descrição: Tipos fundamentais do jogo: códigos de peça, jogadores, pontuação e o lance reversível.

use super::board::Board;
use std::fmt;

/// Código de peça. A magnitude identifica o tipo e o sinal identifica o dono
/// (positivo para as brancas, negativo para as pretas). Zero é casa vazia.
pub type PieceCode = i8;

/// Índice de casa no intervalo 0..64, calculado como `y * 8 + x`.
pub type Square = u8;

/// Pontuação heurística (soma de material).
pub type Score = i32;

pub const BOARD_DIM: i8 = 8;
pub const BOARD_SPACES: usize = 64;

pub const EMPTY: PieceCode = 0;
/// Sentinela "sem peça / fora do tabuleiro". Nunca é colocada no tabuleiro.
pub const NO_PIECE: PieceCode = i8::MAX;
/// Sentinela que termina a lista de alterações de um lance.
pub const NO_SQUARE: Square = u8::MAX;

pub const SCORE_MIN: Score = Score::MIN;
pub const SCORE_MAX: Score = Score::MAX;

// Tabelas indexadas pela magnitude do código de peça.
const PIECE_VALUES: [Score; 7] = [0, 1, 3, 3, 5, 1000, 9];
const PIECE_LETTERS: [char; 7] = [' ', 'P', 'N', 'B', 'R', 'K', 'Q'];

// Enum para representar o jogador. O sinal multiplica os códigos de peça.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    White,
    Black,
}

impl Player {
    /// +1 para as brancas, -1 para as pretas.
    #[inline]
    pub const fn sign(self) -> i8 {
        match self {
            Player::White => 1,
            Player::Black => -1,
        }
    }

    #[inline]
    pub const fn opponent(self) -> Player {
        match self {
            Player::White => Player::Black,
            Player::Black => Player::White,
        }
    }

    /// Verdadeiro se o código pertence a este jogador.
    #[inline]
    pub const fn owns(self, code: PieceCode) -> bool {
        code * self.sign() > 0
    }

    /// Verdadeiro se o código pertence ao adversário.
    #[inline]
    pub const fn is_enemy(self, code: PieceCode) -> bool {
        code * self.sign() < 0
    }
}

impl std::ops::Not for Player {
    type Output = Player;

    fn not(self) -> Self::Output {
        self.opponent()
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::White => write!(f, "White"),
            Player::Black => write!(f, "Black"),
        }
    }
}

// Enum para o tipo de peça. A numeração é a magnitude do código no tabuleiro.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i8)]
pub enum PieceKind {
    Pawn = 1,
    Knight = 2,
    Bishop = 3,
    Rook = 4,
    King = 5,
    Queen = 6,
}

impl PieceKind {
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::King,
        PieceKind::Queen,
    ];

    /// Extrai o tipo de um código de peça, ignorando o dono.
    pub const fn from_code(code: PieceCode) -> Option<PieceKind> {
        if code == NO_PIECE {
            return None;
        }
        match code.unsigned_abs() {
            1 => Some(PieceKind::Pawn),
            2 => Some(PieceKind::Knight),
            3 => Some(PieceKind::Bishop),
            4 => Some(PieceKind::Rook),
            5 => Some(PieceKind::King),
            6 => Some(PieceKind::Queen),
            _ => None,
        }
    }

    /// Código desta peça para o jogador dado.
    #[inline]
    pub const fn code(self, player: Player) -> PieceCode {
        self as i8 * player.sign()
    }

    #[inline]
    pub const fn value(self) -> Score {
        PIECE_VALUES[self as usize]
    }

    #[inline]
    pub const fn letter(self) -> char {
        PIECE_LETTERS[self as usize]
    }
}

/// Valor material de um código de peça, sem sinal.
/// Total: vazio vale 0, a sentinela vale -1 e magnitudes desconhecidas valem 0.
pub const fn piece_value(code: PieceCode) -> Score {
    if code == NO_PIECE {
        return -1;
    }
    let magnitude = code.unsigned_abs() as usize;
    if magnitude < PIECE_VALUES.len() {
        PIECE_VALUES[magnitude]
    } else {
        0
    }
}

/// Letra de um código de peça, sem distinguir o dono.
pub const fn piece_letter(code: PieceCode) -> char {
    if code == NO_PIECE {
        return '-';
    }
    let magnitude = code.unsigned_abs() as usize;
    if magnitude < PIECE_LETTERS.len() {
        PIECE_LETTERS[magnitude]
    } else {
        '?'
    }
}

/// Nome algébrico de uma casa (ex.: 12 -> "e2").
pub fn square_name(sq: Square) -> String {
    let file = (sq % 8) + b'a';
    let rank = (sq / 8) + b'1';
    format!("{}{}", file as char, rank as char)
}

// ============================================================================
// LANCE REVERSÍVEL
// ============================================================================

/// Número máximo de casas alteradas por um lance.
pub const MAX_CHANGES: usize = 4;

/// Uma alteração de casa: o código guardado é trocado com o do tabuleiro.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Change {
    pub square: Square,
    pub piece: PieceCode,
}

impl Change {
    const END: Change = Change { square: NO_SQUARE, piece: EMPTY };
}

/// Lance que funciona como interruptor: `apply` troca os códigos guardados
/// com os do tabuleiro, por isso a segunda aplicação desfaz a primeira.
///
/// Chamadas a `apply` têm de vir aos pares em volta de qualquer exploração
/// recursiva. O lance é modificado a cada aplicação.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    changes: [Change; MAX_CHANGES],
}

impl Move {
    /// Lance nulo: a primeira alteração já é a sentinela.
    pub const fn null() -> Self {
        Move { changes: [Change::END; MAX_CHANGES] }
    }

    /// Lance simples de `from` para `to`: esvazia a origem e ocupa o destino
    /// com a peça que está na origem.
    pub fn new(board: &Board, from: Square, to: Square) -> Self {
        let mut changes = [Change::END; MAX_CHANGES];
        changes[0] = Change { square: from, piece: EMPTY };
        changes[1] = Change { square: to, piece: board.piece_at(from) };
        Move { changes }
    }

    /// Aplica ou reverte o lance.
    #[inline]
    pub fn apply(&mut self, board: &mut Board) {
        for change in self.changes.iter_mut() {
            if change.square == NO_SQUARE {
                break;
            }
            let previous = board.piece_at(change.square);
            board.set_piece_at(change.square, change.piece);
            change.piece = previous;
        }
    }

    /// Pontuação do tabuleiro depois do lance. O tabuleiro fica como estava.
    pub fn score(&mut self, board: &mut Board) -> Score {
        self.apply(board);
        let score = board.score();
        self.apply(board);
        score
    }

    #[inline]
    pub fn is_null(&self) -> bool {
        self.changes[0].square == NO_SQUARE
    }

    pub fn from(&self) -> Square {
        self.changes[0].square
    }

    pub fn to(&self) -> Square {
        self.changes[1].square
    }

    /// Peça que se move. Só é válido com o lance no estado não aplicado.
    pub fn piece(&self) -> PieceCode {
        self.changes[1].piece
    }

    pub fn changes(&self) -> impl Iterator<Item = &Change> + '_ {
        self.changes.iter().take_while(|c| c.square != NO_SQUARE)
    }

    /// Coordenadas no estilo "e2e4". O lance nulo é "0000".
    pub fn notation(&self) -> String {
        if self.is_null() {
            return "0000".to_string();
        }
        format!("{}{}", square_name(self.from()), square_name(self.to()))
    }
}

impl Default for Move {
    fn default() -> Self {
        Move::null()
    }
}

// Forma textual de diagnóstico: ([casa:código],...)
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for change in self.changes() {
            write!(f, "[{}:{}],", change.square, change.piece)?;
        }
        write!(f, ")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_piece_value_table() {
        assert_eq!(piece_value(EMPTY), 0);
        assert_eq!(piece_value(NO_PIECE), -1);
        assert_eq!(piece_value(PieceKind::Pawn as i8), 1);
        assert_eq!(piece_value(-(PieceKind::Knight as i8)), 3);
        assert_eq!(piece_value(PieceKind::Bishop as i8), 3);
        assert_eq!(piece_value(PieceKind::Rook as i8), 5);
        assert_eq!(piece_value(PieceKind::Queen as i8), 9);
        assert_eq!(piece_value(-(PieceKind::King as i8)), 1000);
        assert_eq!(piece_value(42), 0);
    }

    #[test]
    fn test_king_dominates_material() {
        // 8 peões, 2 cavalos, 2 bispos, 2 torres e a dama
        let army = 8 + 2 * 3 + 2 * 3 + 2 * 5 + 9;
        assert!(PieceKind::King.value() > army);
    }

    #[test]
    fn test_piece_letters() {
        let letters: String = PieceKind::ALL.iter().map(|k| k.letter()).collect();
        assert_eq!(letters, "PNBRKQ");
        assert_eq!(piece_letter(EMPTY), ' ');
        assert_eq!(piece_letter(NO_PIECE), '-');
        assert_eq!(piece_letter(-4), 'R');
    }

    #[test]
    fn test_piece_kind_from_code() {
        assert_eq!(PieceKind::from_code(-6), Some(PieceKind::Queen));
        assert_eq!(PieceKind::from_code(1), Some(PieceKind::Pawn));
        assert_eq!(PieceKind::from_code(EMPTY), None);
        assert_eq!(PieceKind::from_code(NO_PIECE), None);
        assert_eq!(PieceKind::Rook.code(Player::Black), -4);
        assert_eq!(PieceKind::Rook.code(Player::White), 4);
    }

    #[test]
    fn test_player_sign_and_opponent() {
        assert_eq!(Player::White.sign(), 1);
        assert_eq!(Player::Black.sign(), -1);
        assert_eq!(!Player::White, Player::Black);
        assert_eq!(Player::Black.opponent(), Player::White);
        assert!(Player::White.owns(3));
        assert!(Player::Black.owns(-3));
        assert!(Player::White.is_enemy(-1));
        assert!(!Player::White.is_enemy(EMPTY));
        assert!(!Player::Black.owns(EMPTY));
    }

    #[test]
    fn test_square_name() {
        assert_eq!(square_name(0), "a1");
        assert_eq!(square_name(12), "e2");
        assert_eq!(square_name(63), "h8");
    }

    #[test]
    fn test_null_move() {
        let mv = Move::default();
        assert!(mv.is_null());
        assert_eq!(mv.changes().count(), 0);
        assert_eq!(mv.notation(), "0000");
        assert_eq!(mv.to_string(), "()");
    }

    #[test]
    fn test_move_construction_and_toggle() {
        let mut board = Board::new();
        let original = board.clone();

        // e2e4
        let mut mv = Move::new(&board, 12, 28);
        assert!(!mv.is_null());
        assert_eq!(mv.from(), 12);
        assert_eq!(mv.to(), 28);
        assert_eq!(mv.piece(), PieceKind::Pawn as i8);
        assert_eq!(mv.notation(), "e2e4");
        assert_eq!(mv.to_string(), "([12:0],[28:1],)");

        mv.apply(&mut board);
        assert_eq!(board.piece_at(12), EMPTY);
        assert_eq!(board.piece_at(28), PieceKind::Pawn as i8);
        // O lance guarda agora o estado anterior
        assert_eq!(mv.to_string(), "([12:1],[28:0],)");

        mv.apply(&mut board);
        assert_eq!(board, original);
        assert_eq!(mv, Move::new(&board, 12, 28));
    }

    #[test]
    fn test_move_capture_restores_captured_piece() {
        let mut board = Board::empty();
        board.set_piece_at(0, PieceKind::Rook.code(Player::White));
        board.set_piece_at(56, PieceKind::Queen.code(Player::Black));
        let original = board.clone();

        let mut mv = Move::new(&board, 0, 56);
        mv.apply(&mut board);
        assert_eq!(board.piece_at(56), 4);
        assert_eq!(board.score(), 5);

        mv.apply(&mut board);
        assert_eq!(board, original);
    }

    #[test]
    fn test_move_score_leaves_board_untouched() {
        let mut board = Board::empty();
        board.set_piece_at(9, PieceKind::Pawn.code(Player::White));
        board.set_piece_at(18, PieceKind::Knight.code(Player::Black));
        let original = board.clone();

        let mut mv = Move::new(&board, 9, 18);
        assert_eq!(mv.score(&mut board), 1);
        assert_eq!(board, original);
    }
}
