//! Schema constants and runtime configuration defaults

// Node paths of the grid-carrying nodes, relative to the document root
/// Buildable-area node path
pub const AREA_IDS_PATH: &str = "GameSessionManager/AreaIDs";
/// River grid node path
pub const RIVER_GRID_PATH: &str = "GameSessionManager/WorldManager/RiverGrid";
/// Land mask ("not water") node path
pub const WATER_PATH: &str = "GameSessionManager/WorldManager/Water";

// AnnoDesigner layout schema constants
/// Fixed layout file format version
pub const LAYOUT_FILE_VERSION: u32 = 4;
/// Fixed layout schema version string
pub const LAYOUT_VERSION: &str = "1.0.0.0";
/// Identifier of every emitted placement record
pub const BLOCKER_IDENTIFIER: &str = "BlockTile_1x1";
/// Template of every emitted placement record
pub const BLOCKER_TEMPLATE: &str = "Blocker";
/// Size string of a 1x1 blocker tile
pub const BLOCKER_SIZE: &str = "1,1";
/// Direction of every emitted placement record
pub const BLOCKER_DIRECTION: &str = "Up";
/// Fixed influence range marking the record as a pure blocker
pub const BLOCKER_INFLUENCE_RANGE: i32 = -2;

// Blocker colours as ARGB byte quadruples
/// Land blocker colour (opaque black)
pub const LAND_BLOCKER_COLOR: [u8; 4] = [255, 0, 0, 0];
/// Coastline blocker colour (dodger blue)
pub const COASTLINE_BLOCKER_COLOR: [u8; 4] = [255, 30, 144, 255];
/// Harbour blocker colour (light gray)
pub const HARBOUR_BLOCKER_COLOR: [u8; 4] = [255, 192, 192, 192];

// Output settings
/// Extension of the generated layout file
pub const LAYOUT_EXTENSION: &str = "ad";
/// Terminal columns assumed when the width cannot be queried
pub const DEFAULT_SCREEN_WIDTH: usize = 236;
