// Ficheiro: src/moves/mod.rs
// Descrição: Geração de lances por peça. Cada destino passa por uma política
// (só vazia, só captura, vazia ou captura) e vai parar num sink do chamador.

pub mod pawn;
pub mod knight;
pub mod sliding;
pub mod queen;
pub mod king;

use crate::core::*;

/// Política de validade do destino de um passo.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// Avanço simples de peão.
    EmptyOnly,
    /// Captura diagonal de peão.
    CaptureOnly,
    /// Todas as outras peças.
    EmptyOrCapture,
}

/// Resultado de um passo: guardar e continuar, guardar e parar, ou parar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Add,
    AddStop,
    Stop,
}

impl Target {
    #[inline]
    pub fn judge(self, player: Player, occupant: PieceCode) -> Verdict {
        match self {
            Target::EmptyOnly => {
                if occupant == EMPTY { Verdict::Add } else { Verdict::Stop }
            }
            Target::CaptureOnly => {
                if player.is_enemy(occupant) { Verdict::AddStop } else { Verdict::Stop }
            }
            Target::EmptyOrCapture => {
                if occupant == EMPTY {
                    Verdict::Add
                } else if player.is_enemy(occupant) {
                    Verdict::AddStop
                } else {
                    Verdict::Stop
                }
            }
        }
    }
}

/// Destino dos lances gerados.
pub trait MoveSink {
    fn put(&mut self, mv: Move);
}

impl MoveSink for Vec<Move> {
    fn put(&mut self, mv: Move) {
        self.push(mv);
    }
}

/// Capacidade da lista de lances de um nó.
pub const MAX_MOVES: usize = 256;

/// Lista de lances de capacidade fixa, sem alocação. Vive na pilha de cada nó da busca.
#[derive(Clone)]
pub struct MoveList {
    moves: [Move; MAX_MOVES],
    len: usize,
}

impl MoveList {
    pub fn new() -> Self {
        MoveList { moves: [Move::null(); MAX_MOVES], len: 0 }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn as_slice(&self) -> &[Move] {
        &self.moves[..self.len]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.as_slice().iter()
    }
}

impl Default for MoveList {
    fn default() -> Self {
        MoveList::new()
    }
}

impl MoveSink for MoveList {
    #[inline]
    fn put(&mut self, mv: Move) {
        assert!(self.len < MAX_MOVES, "lista de lances cheia ({} lances)", MAX_MOVES);
        self.moves[self.len] = mv;
        self.len += 1;
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl std::fmt::Debug for MoveList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter().map(|mv| mv.notation())).finish()
    }
}

// Verifica um eixo: deslocamento positivo contra o limite superior,
// os outros contra o limite inferior.
#[inline]
fn axis_fits(pos: i8, delta: i8) -> bool {
    if delta > 0 {
        pos + delta < BOARD_DIM
    } else {
        pos + delta >= 0
    }
}

/// Tenta o passo (dx, dy) a partir de (x, y) e entrega o lance ao sink se a
/// política aceitar. Devolve `true` se um deslizamento pode continuar.
#[inline]
pub fn move_to<S: MoveSink>(
    board: &Board,
    player: Player,
    x: i8,
    y: i8,
    dx: i8,
    dy: i8,
    target: Target,
    sink: &mut S,
) -> bool {
    if !axis_fits(x, dx) || !axis_fits(y, dy) {
        return false;
    }

    let from = Board::xy_to_index(x, y);
    let to = Board::xy_to_index(x + dx, y + dy);

    match target.judge(player, board.piece_at(to)) {
        Verdict::Add => {
            sink.put(Move::new(board, from, to));
            true
        }
        Verdict::AddStop => {
            sink.put(Move::new(board, from, to));
            false
        }
        Verdict::Stop => false,
    }
}

/// Gera os lances da peça em `square`, se pertencer a `player`.
pub fn generate_piece_moves<S: MoveSink>(board: &Board, player: Player, square: Square, sink: &mut S) {
    let code = board.piece_at(square);
    if !player.owns(code) {
        return;
    }

    let x = Board::index_to_x(square);
    let y = Board::index_to_y(square);

    match PieceKind::from_code(code) {
        Some(PieceKind::Pawn) => pawn::generate_pawn_moves(board, player, x, y, sink),
        Some(PieceKind::Knight) => knight::generate_knight_moves(board, player, x, y, sink),
        Some(PieceKind::Bishop) => sliding::generate_sliding_moves(board, player, x, y, PieceKind::Bishop, sink),
        Some(PieceKind::Rook) => sliding::generate_sliding_moves(board, player, x, y, PieceKind::Rook, sink),
        Some(PieceKind::Queen) => queen::generate_queen_moves(board, player, x, y, sink),
        Some(PieceKind::King) => king::generate_king_moves(board, player, x, y, sink),
        None => {}
    }
}

/// Gera todos os lances do jogador, percorrendo as casas de 0 a 63.
pub fn generate_moves<S: MoveSink>(board: &Board, player: Player, sink: &mut S) {
    for square in board.squares_of(player) {
        generate_piece_moves(board, player, square, sink);
    }
}

/// Número de lances disponíveis para o jogador.
pub fn count_moves(board: &Board, player: Player) -> usize {
    board.generate_all_moves(player).len()
}

impl Board {
    /// Gera todos os lances do jogador numa lista de capacidade fixa.
    pub fn generate_all_moves(&self, player: Player) -> MoveList {
        let mut moves = MoveList::new();
        generate_moves(self, player, &mut moves);
        moves
    }
}
