//! Board-size limits and defaults shared by the library and the CLI.

/// Board size used when none is given. Standard Go sizes are 9, 13, or 19.
pub const DEFAULT_BOARD_SIZE: usize = 9;

/// Smallest board a game can be started on.
pub const MIN_BOARD_SIZE: usize = 1;

/// Largest board that still has a column letter for every column
/// (`A` to `Z` without `I`).
pub const MAX_BOARD_SIZE: usize = 25;

/// Column letters in Go Text Protocol order. `I` is skipped to avoid
/// confusion with `J`.
pub const COLUMN_LETTERS: &[u8; MAX_BOARD_SIZE] = b"ABCDEFGHJKLMNOPQRSTUVWXYZ";

/// Multiplier on the board area used as the default self-play move cap.
pub const MAX_GAME_LEN_FACTOR: usize = 3;

/// Maximum number of plies for a self-play game on a board of `size`.
pub const fn max_game_len(size: usize) -> usize {
    size * size * MAX_GAME_LEN_FACTOR
}

// =============================================================================
// Board rendering
// =============================================================================

/// Rendered black stone.
pub const STONE_BLACK: char = 'X';

/// Rendered white stone.
pub const STONE_WHITE: char = 'O';

/// Rendered empty point.
pub const EMPTY: char = '.';
