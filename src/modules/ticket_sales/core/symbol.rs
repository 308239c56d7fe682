// Deterministic pseudo-QR symbol generator.
//
// Purpose
// - Map a ticket payload string to a square boolean grid that renders as a
//   plausible scannable code, the same way every time.
//
// Responsibilities
// - Fill cells from a polynomial rolling hash of the payload.
// - Force the three corner finder regions to the fixed marker pattern,
//   overriding the hash fill.
// - Never fail: every string, including the empty one, produces a grid.
//
// Boundaries
// - This is not an ISO/IEC 18004 codec. There is no error correction and no
//   module placement beyond the finder look-alikes; the output is a visual
//   stand-in, keyed only on determinism.

pub const DEFAULT_DIMENSION: usize = 25;

const FINDER_SIZE: usize = 7;
const FILL_MODULUS: i64 = 997;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolGrid {
    dimension: usize,
    cells: Vec<bool>,
}

impl SymbolGrid {
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    pub fn is_on(&self, row: usize, col: usize) -> bool {
        self.cells[row * self.dimension + col]
    }

    pub fn to_rows(&self) -> Vec<Vec<bool>> {
        (0..self.dimension)
            .map(|row| (0..self.dimension).map(|col| self.is_on(row, col)).collect())
            .collect()
    }

    fn set(&mut self, row: usize, col: usize, on: bool) {
        self.cells[row * self.dimension + col] = on;
    }
}

/// 32-bit signed polynomial rolling hash over the payload's UTF-16 code
/// units: hash = code + ((hash << 5) - hash), wrapping on overflow.
fn payload_hash(payload: &str) -> i32 {
    let mut hash: i32 = 0;
    for code in payload.encode_utf16() {
        hash = i32::from(code).wrapping_add(hash.wrapping_shl(5).wrapping_sub(hash));
    }
    hash
}

pub fn generate_grid(payload: &str, dimension: usize) -> SymbolGrid {
    let hash = i64::from(payload_hash(payload));
    let mut grid = SymbolGrid {
        dimension,
        cells: vec![false; dimension * dimension],
    };
    for row in 0..dimension {
        for col in 0..dimension {
            // Truncated remainder keeps the sign of a negative hash, so the
            // parity test must accept negative even seeds too.
            let seed = (hash + (row * dimension + col) as i64) % FILL_MODULUS;
            grid.set(row, col, seed % 2 == 0);
        }
    }
    if dimension >= FINDER_SIZE {
        overlay_finder(&mut grid, 0, 0);
        overlay_finder(&mut grid, 0, dimension - FINDER_SIZE);
        overlay_finder(&mut grid, dimension - FINDER_SIZE, 0);
    }
    grid
}

/// Outer ring on, inner 3x3 block on, separating ring off. Always wins over
/// the hash fill.
fn overlay_finder(grid: &mut SymbolGrid, anchor_row: usize, anchor_col: usize) {
    for r in 0..FINDER_SIZE {
        for c in 0..FINDER_SIZE {
            let ring = r == 0 || r == FINDER_SIZE - 1 || c == 0 || c == FINDER_SIZE - 1;
            let center = (2..=4).contains(&r) && (2..=4).contains(&c);
            grid.set(anchor_row + r, anchor_col + c, ring || center);
        }
    }
}

/// Reference text rendering: one character per cell, rows joined by newlines.
pub fn render_ascii(grid: &SymbolGrid) -> String {
    let mut out = String::with_capacity(grid.dimension() * (grid.dimension() + 1));
    for row in 0..grid.dimension() {
        for col in 0..grid.dimension() {
            out.push(if grid.is_on(row, col) { '#' } else { '.' });
        }
        out.push('\n');
    }
    out
}
