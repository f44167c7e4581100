//! The shared level grid.
//!
//! Level actors (walls, boxes, players, items) register themselves at the
//! grid cell nearest to their world position; the camera reads the grid
//! back as point sets: all cells holding players, or the four level
//! corners.

use std::collections::HashMap;

use bevy::math::Vec3;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Edge length of one grid cell, in world units.
pub const CELL_SIZE: f32 = 200.0;

/// A grid coordinate. `col` grows along +X, `row` along +Y.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub col: u32,
    pub row: u32,
}

impl Cell {
    pub fn new(col: u32, row: u32) -> Self {
        Self { col, row }
    }
}

/// Kind of actor occupying a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActorKind {
    Player,
    Wall,
    Box,
    Item,
}

/// Errors from grid construction and registration.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    #[error("grid must have at least one column and one row")]
    Empty,
    #[error("cell ({col}, {row}) is outside a {cols}x{rows} grid")]
    OutOfBounds {
        col: u32,
        row: u32,
        cols: u32,
        rows: u32,
    },
}

/// Serializable grid layout, loaded from JSON level configs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LevelGridConfig {
    pub cols: u32,
    pub rows: u32,
    /// World units per cell. Defaults to [`CELL_SIZE`].
    #[serde(default = "default_cell_size")]
    pub cell_size: f32,
    /// World location of the grid center.
    #[serde(default)]
    pub origin: [f32; 3],
    /// Pre-placed wall cells.
    #[serde(default)]
    pub walls: Vec<Cell>,
}

fn default_cell_size() -> f32 {
    CELL_SIZE
}

impl LevelGridConfig {
    /// Parses a grid layout from its JSON representation.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// The level map: grid dimensions plus which actor occupies which cell.
#[derive(Debug, Clone)]
pub struct LevelGrid {
    cols: u32,
    rows: u32,
    cell_size: f32,
    /// World location of the grid center.
    origin: Vec3,
    occupants: HashMap<Cell, ActorKind>,
}

impl Default for LevelGrid {
    /// The classic 9x9 arena centered at the world origin.
    fn default() -> Self {
        Self {
            cols: 9,
            rows: 9,
            cell_size: CELL_SIZE,
            origin: Vec3::ZERO,
            occupants: HashMap::new(),
        }
    }
}

impl LevelGrid {
    /// An empty grid centered at `origin` with [`CELL_SIZE`] cells.
    pub fn new(cols: u32, rows: u32, origin: Vec3) -> Result<Self, GridError> {
        if cols == 0 || rows == 0 {
            return Err(GridError::Empty);
        }
        Ok(Self {
            cols,
            rows,
            cell_size: CELL_SIZE,
            origin,
            occupants: HashMap::new(),
        })
    }

    /// Builds a grid from a level config, registering its pre-placed walls.
    pub fn from_config(config: &LevelGridConfig) -> Result<Self, GridError> {
        let mut grid = Self::new(config.cols, config.rows, Vec3::from_array(config.origin))?;
        grid.cell_size = config.cell_size;
        for wall in &config.walls {
            grid.add_actor(*wall, ActorKind::Wall)?;
        }
        Ok(grid)
    }

    pub fn cols(&self) -> u32 {
        self.cols
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    pub fn cell_size(&self) -> f32 {
        self.cell_size
    }

    /// Planar extent of the whole grid in world units.
    pub fn world_size(&self) -> (f32, f32) {
        (
            self.cols as f32 * self.cell_size,
            self.rows as f32 * self.cell_size,
        )
    }

    fn contains(&self, cell: Cell) -> bool {
        cell.col < self.cols && cell.row < self.rows
    }

    /// World location of the center of `cell`.
    pub fn cell_location(&self, cell: Cell) -> Vec3 {
        let (width, height) = self.world_size();
        let x = (cell.col as f32 + 0.5) * self.cell_size - width / 2.0;
        let y = (cell.row as f32 + 0.5) * self.cell_size - height / 2.0;
        self.origin + Vec3::new(x, y, 0.0)
    }

    /// Nearest cell to a world position, or `None` when off-grid.
    pub fn snap_to_cell(&self, world: Vec3) -> Option<Cell> {
        let (width, height) = self.world_size();
        let local = world - self.origin;
        let col = (local.x + width / 2.0) / self.cell_size;
        let row = (local.y + height / 2.0) / self.cell_size;
        if col < 0.0 || row < 0.0 {
            return None;
        }
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let cell = Cell::new(col as u32, row as u32);
        self.contains(cell).then_some(cell)
    }

    /// Registers an actor at `cell`, replacing any previous occupant.
    pub fn add_actor(&mut self, cell: Cell, kind: ActorKind) -> Result<(), GridError> {
        if !self.contains(cell) {
            return Err(GridError::OutOfBounds {
                col: cell.col,
                row: cell.row,
                cols: self.cols,
                rows: self.rows,
            });
        }
        self.occupants.insert(cell, kind);
        Ok(())
    }

    /// Unregisters whatever occupies `cell`. Returns the removed kind.
    pub fn remove_actor(&mut self, cell: Cell) -> Option<ActorKind> {
        self.occupants.remove(&cell)
    }

    pub fn actor_at(&self, cell: Cell) -> Option<ActorKind> {
        self.occupants.get(&cell).copied()
    }

    /// All cells currently occupied by actors of `kind`.
    pub fn cells_with(&self, kind: ActorKind) -> Vec<Cell> {
        self.occupants
            .iter()
            .filter(|(_, occupant)| **occupant == kind)
            .map(|(cell, _)| *cell)
            .collect()
    }

    /// World locations of all actors of `kind`.
    pub fn locations_with(&self, kind: ActorKind) -> Vec<Vec3> {
        self.cells_with(kind)
            .into_iter()
            .map(|cell| self.cell_location(cell))
            .collect()
    }

    /// The four corner cells of the level.
    pub fn corner_cells(&self) -> [Cell; 4] {
        [
            Cell::new(0, 0),
            Cell::new(self.cols - 1, 0),
            Cell::new(0, self.rows - 1),
            Cell::new(self.cols - 1, self.rows - 1),
        ]
    }

    /// World locations of the four level corners.
    pub fn corner_locations(&self) -> [Vec3; 4] {
        self.corner_cells().map(|cell| self.cell_location(cell))
    }
}
