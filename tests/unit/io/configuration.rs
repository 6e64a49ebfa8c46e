//! Tests for viewer constants and defaults

#[cfg(test)]
mod tests {
    use mazeview::io::configuration::{
        DEFAULT_DIMENSION, DEFAULT_GENERATOR, DEFAULT_MAZE_FILE, DEFAULT_RATIO, DEFAULT_SOLVER,
        DEFAULT_SPEED, DEFAULT_STEPS_FILE, GENERATOR_ENV, GLYPH_FILL_RATIO, MAX_DIMENSION,
        MAX_SPEED, MIN_DIMENSION, MIN_SPEED, PATH_COLOR, RATIO_LABEL_WIDTH, ROUTE_COLOR,
        SOLVER_ENV, STEP_SEPARATOR, VIEWER_MIN_FRAME_DELAY_MS,
    };

    // Tests size bounds and default
    // Verified by changing the maximum dimension
    #[test]
    fn test_dimension_bounds() {
        assert_eq!((MIN_DIMENSION, MAX_DIMENSION), (2, 30));
        assert!((MIN_DIMENSION..=MAX_DIMENSION).contains(&DEFAULT_DIMENSION));
    }

    // Tests speed bounds keep the tick interval within [10, 1000] ms
    // Verified by raising the maximum speed
    #[test]
    fn test_speed_bounds() {
        assert_eq!((MIN_SPEED, MAX_SPEED), (1, 100));
        assert_eq!(1000 / MAX_SPEED, 10);
        assert_eq!(1000 / MIN_SPEED, 1000);
        assert!((MIN_SPEED..=MAX_SPEED).contains(&DEFAULT_SPEED));
    }

    // Tests ratio defaults
    // Verified by changing the label width
    #[test]
    fn test_ratio_defaults() {
        assert!((DEFAULT_RATIO - 0.5).abs() < f64::EPSILON);
        assert_eq!(RATIO_LABEL_WIDTH, 4);
    }

    // Tests tool and file defaults
    // Verified by swapping the environment variable names
    #[test]
    fn test_tool_defaults() {
        assert_eq!(GENERATOR_ENV, "MAZE_GEN");
        assert_eq!(SOLVER_ENV, "MAZE_SOLVE");
        assert_eq!(DEFAULT_GENERATOR, "kruskal");
        assert_eq!(DEFAULT_SOLVER, "depth");
        assert_eq!(DEFAULT_STEPS_FILE, "maze.steps");
        assert_eq!(DEFAULT_MAZE_FILE, "maze.mz");
        assert_eq!(STEP_SEPARATOR, "\n\n");
    }

    // Tests rendering constants
    // Verified by swapping path and route colors
    #[test]
    fn test_rendering_constants() {
        assert!((GLYPH_FILL_RATIO - 0.8).abs() < f64::EPSILON);
        assert_eq!(PATH_COLOR, [63, 162, 242, 255]);
        assert_eq!(ROUTE_COLOR, [242, 150, 63, 255]);
        assert_eq!(VIEWER_MIN_FRAME_DELAY_MS, 20);
    }
}
