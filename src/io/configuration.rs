//! Viewer constants and runtime configuration defaults

// Maze size bounds shared by the size dialog and the generator invocation
/// Smallest allowed maze width or height in cells
pub const MIN_DIMENSION: usize = 2;
/// Largest allowed maze width or height in cells
pub const MAX_DIMENSION: usize = 30;
/// Width and height used before the size dialog is opened
pub const DEFAULT_DIMENSION: usize = 10;

// Playback speed in steps per second
/// Slowest playback speed
pub const MIN_SPEED: u32 = 1;
/// Fastest playback speed
pub const MAX_SPEED: u32 = 100;
/// Playback speed used before the speed dialog is opened
pub const DEFAULT_SPEED: u32 = 50;

/// Blend ratio used when two growing-tree methods are first selected
pub const DEFAULT_RATIO: f64 = 0.5;
/// Maximum number of characters of the ratio passed to the generator
pub const RATIO_LABEL_WIDTH: usize = 4;

// Files the external tools read and write
/// Step log written by the generator and solver
pub const DEFAULT_STEPS_FILE: &str = "maze.steps";
/// Final maze text written after generation and read by the solver
pub const DEFAULT_MAZE_FILE: &str = "maze.mz";
/// Separator between frames in a step log
pub const STEP_SEPARATOR: &str = "\n\n";

// External tool defaults
/// Environment variable holding the generator executable path
pub const GENERATOR_ENV: &str = "MAZE_GEN";
/// Environment variable holding the solver executable path
pub const SOLVER_ENV: &str = "MAZE_SOLVE";
/// Generator algorithm used when none is chosen
pub const DEFAULT_GENERATOR: &str = "kruskal";
/// Generator algorithm token for the dual-method family
pub const GROWING_TREE_GENERATOR: &str = "growing-tree";
/// Generator algorithm token for the biased family
pub const BINARY_TREE_GENERATOR: &str = "binary-tree";
/// Solver algorithm used when none is chosen
pub const DEFAULT_SOLVER: &str = "depth";

/// Environment variable read for the log filter
pub const LOG_ENV: &str = "MAZEVIEW_LOG";

// Rendering
/// Edge length of one rendered cell in pixels
pub const DEFAULT_CELL_SIZE: u32 = 32;
/// Largest accepted cell edge in pixels
pub const MAX_CELL_SIZE: u32 = 128;
/// Share of the cell a start/exit glyph may occupy
pub const GLYPH_FILL_RATIO: f64 = 0.8;
/// Share of the cell width used for path and route strokes
pub const MARK_STROKE_RATIO: f64 = 0.1;
/// Upper bound for the glyph size search
pub const MAX_FONT_SIZE: u32 = 512;

// Palette
/// Background of cells that have not been visited
pub const INACTIVE_COLOR: [u8; 4] = [127, 127, 127, 255];
/// Background of visited cells
pub const ACTIVE_COLOR: [u8; 4] = [255, 255, 255, 255];
/// Wall lines
pub const WALL_COLOR: [u8; 4] = [0, 0, 0, 255];
/// Start and exit glyphs
pub const TEXT_COLOR: [u8; 4] = [0, 0, 0, 255];
/// Traversal marks
pub const PATH_COLOR: [u8; 4] = [63, 162, 242, 255];
/// Solution route marks
pub const ROUTE_COLOR: [u8; 4] = [242, 150, 63, 255];

// Output settings
/// Minimum frame delay that viewers reliably support (in milliseconds)
pub const VIEWER_MIN_FRAME_DELAY_MS: u32 = 20;
/// The final frame of an export is held this many frame delays
pub const FINAL_FRAME_HOLD: u32 = 25;
