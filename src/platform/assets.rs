//! Sprite sheet frame lookup
//!
//! The core only knows logical sheets and cell indices. Hosts slice their
//! sheet images into equal cells; cells are numbered column by column,
//! top to bottom within each column.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::sim::SheetId;

/// Pixel rectangle of one cell on a sheet image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpriteRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// Resolves a logical sheet cell to a rectangle
pub trait AssetProvider {
    fn frame_rect(&self, sheet: SheetId, cell: usize) -> Option<SpriteRect>;
}

/// A sheet image divided into equal cells
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridSheet {
    pub cells: Vec<SpriteRect>,
}

impl GridSheet {
    /// Slice a `sheet_width` x `sheet_height` image into `cell_width` x
    /// `cell_height` cells. A cell starting inside the image is kept even if
    /// it overhangs the edge.
    pub fn slice(sheet_width: u32, sheet_height: u32, cell_width: u32, cell_height: u32) -> Self {
        let mut cells = Vec::new();
        if cell_width == 0 || cell_height == 0 {
            return Self { cells };
        }
        for x in (0..sheet_width).step_by(cell_width as usize) {
            for y in (0..sheet_height).step_by(cell_height as usize) {
                cells.push(SpriteRect {
                    x,
                    y,
                    width: cell_width,
                    height: cell_height,
                });
            }
        }
        Self { cells }
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// Cell size each sheet is drawn with
pub fn cell_size(sheet: SheetId) -> (u32, u32) {
    match sheet {
        SheetId::Gopher => (60, 49),
        SheetId::Snake => (128, 31),
        SheetId::Crab => (59, 41),
        SheetId::Cup => (42, 60),
        SheetId::Backdrop => (300, 300),
        SheetId::Boom => (0, 0),
    }
}

/// All sheets of a game
#[derive(Debug, Clone, Default)]
pub struct SheetAtlas {
    sheets: HashMap<SheetId, GridSheet>,
}

impl SheetAtlas {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a sheet image of the given pixel size, sliced at the sheet's
    /// standard cell size. The boom sprite is a single whole-image cell.
    pub fn insert(&mut self, sheet: SheetId, width: u32, height: u32) {
        let grid = match sheet {
            SheetId::Boom => GridSheet::slice(width, height, width, height),
            _ => {
                let (cell_width, cell_height) = cell_size(sheet);
                GridSheet::slice(width, height, cell_width, cell_height)
            }
        };
        log::debug!("Sheet {sheet:?}: {} cells", grid.len());
        self.sheets.insert(sheet, grid);
    }

    /// Number of cells on `sheet`, zero if it is not registered
    pub fn cell_count(&self, sheet: SheetId) -> usize {
        self.sheets.get(&sheet).map_or(0, GridSheet::len)
    }
}

impl AssetProvider for SheetAtlas {
    fn frame_rect(&self, sheet: SheetId, cell: usize) -> Option<SpriteRect> {
        self.sheets.get(&sheet)?.cells.get(cell).copied()
    }
}
