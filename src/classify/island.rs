//! Island grid composition and outline classification
//!
//! Combines the three independently decoded boolean grids of a world-state
//! document into the derived terrain grids and the final classified outline.

use log::debug;

use crate::grid::{Cell, Grid};
use crate::io::error::{ExtractError, Result};

/// The three source grids an island is classified from
///
/// All three share one set of dimensions, enforced at construction. The
/// land mask marks tiles that are not water; the buildable grid marks tiles
/// eligible for construction, which extends past the shoreline into harbour
/// water.
#[derive(Debug, Clone)]
pub struct IslandGrids {
    buildable: Grid,
    land_mask: Grid,
    river: Grid,
}

impl IslandGrids {
    /// Assemble the source grids, checking that their dimensions agree
    ///
    /// # Errors
    ///
    /// Returns [`ExtractError::DimensionMismatch`] if the three grids do not
    /// share one set of dimensions.
    pub fn new(buildable: Grid, land_mask: Grid, river: Grid) -> Result<Self> {
        let area = buildable.dimensions();
        let water = land_mask.dimensions();
        let river_dims = river.dimensions();
        if area != water || area != river_dims {
            return Err(ExtractError::DimensionMismatch {
                area,
                river: river_dims,
                water,
            });
        }
        debug!("island grids assembled at {}x{}", area.0, area.1);
        Ok(Self {
            buildable,
            land_mask,
            river,
        })
    }

    /// The raw buildable-area grid: land, rivers and harbour areas
    pub fn island(&self) -> Grid {
        self.buildable.clone()
    }

    /// The decoded river grid
    pub fn river(&self) -> Grid {
        self.river.clone()
    }

    /// Buildable cells that are not land: harbour and sea-adjacent tiles
    ///
    /// # Errors
    ///
    /// Propagates `ShapeMismatch` from the grid algebra; unreachable for a
    /// value constructed through [`IslandGrids::new`].
    pub fn harbour(&self) -> Result<Grid> {
        self.buildable.subtract(&self.land_mask)
    }

    /// Buildable land cells, excluding river tiles
    ///
    /// # Errors
    ///
    /// Propagates `ShapeMismatch` from the grid algebra; unreachable for a
    /// value constructed through [`IslandGrids::new`].
    pub fn land(&self) -> Result<Grid> {
        self.buildable
            .intersect(&[&self.land_mask])?
            .subtract(&self.river)
    }

    /// The classified island outline
    ///
    /// Classifies the boundary ring of the island into three tile classes:
    /// the land outline, the subset of it that borders harbour water
    /// (coastline), and the outline of the remaining harbour area. A cell
    /// qualifying for several classes takes the highest-precedence one:
    /// coastline over land over harbour.
    ///
    /// # Errors
    ///
    /// Propagates `ShapeMismatch` from the grid algebra; unreachable for a
    /// value constructed through [`IslandGrids::new`].
    pub fn classified_outline(&self) -> Result<Grid> {
        let land = self.land()?;
        let harbour = self.harbour()?;

        let land_outline = land.outline();
        let coastline = land_outline.intersect(&[&harbour])?;
        let harbour_outline = harbour.subtract(&land_outline)?.outline();

        debug!(
            "outline classes: land {}, coastline {}, harbour {}",
            count_set(&land_outline),
            count_set(&coastline),
            count_set(&harbour_outline)
        );

        land.empty_like().overlay(&[
            &coastline.retag(Cell::Coastline),
            &land_outline.retag(Cell::Land),
            &harbour_outline.retag(Cell::Harbour),
        ])
    }
}

fn count_set(grid: &Grid) -> usize {
    grid.iter().filter(|(_, cell)| !cell.is_empty()).count()
}
