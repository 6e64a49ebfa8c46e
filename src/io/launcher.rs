//! Running the external generator and solver programs
//!
//! Both tools are invoked quietly with step output enabled. They write their
//! step log to a file and print the final maze on stdout; the generator's
//! maze is saved so the solver can read it back.

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::dialog::binary_tree::BinaryTreeBias;
use crate::dialog::growing_tree::DualMethodSelector;
use crate::dialog::size::SizeConfig;
use crate::io::configuration::{
    BINARY_TREE_GENERATOR, DEFAULT_MAZE_FILE, DEFAULT_SOLVER, DEFAULT_STEPS_FILE,
    GROWING_TREE_GENERATOR,
};
use crate::io::error::{Result, ViewerError, tool_failed};
use crate::playback::sequence::StepSequence;

/// Locations of the generator and solver executables
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolPaths {
    /// Maze generator executable
    pub generator: PathBuf,
    /// Maze solver executable
    pub solver: PathBuf,
}

impl ToolPaths {
    /// Explicit executable paths
    pub fn new(generator: impl Into<PathBuf>, solver: impl Into<PathBuf>) -> Self {
        Self {
            generator: generator.into(),
            solver: solver.into(),
        }
    }
}

/// One generator invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateRequest {
    /// Algorithm name passed after `-a`
    pub algorithm: String,
    /// Algorithm parameters following the name
    pub parameters: Vec<String>,
    /// Maze size in cells
    pub size: SizeConfig,
    /// Step log the generator writes
    pub steps_file: PathBuf,
    /// Where the printed maze is saved
    pub maze_file: PathBuf,
}

impl GenerateRequest {
    /// Request for an algorithm without parameters, using the default files
    pub fn new(algorithm: impl Into<String>, size: SizeConfig) -> Self {
        Self {
            algorithm: algorithm.into(),
            parameters: Vec::new(),
            size,
            steps_file: PathBuf::from(DEFAULT_STEPS_FILE),
            maze_file: PathBuf::from(DEFAULT_MAZE_FILE),
        }
    }

    /// Growing-tree request carrying the selector's method and ratio tokens
    pub fn growing_tree(selector: &DualMethodSelector, size: SizeConfig) -> Self {
        Self {
            parameters: selector.generator_tokens(),
            ..Self::new(GROWING_TREE_GENERATOR, size)
        }
    }

    /// Binary-tree request carrying the bias token
    pub fn binary_tree(bias: BinaryTreeBias, size: SizeConfig) -> Self {
        Self {
            parameters: vec![bias.token().to_string()],
            ..Self::new(BINARY_TREE_GENERATOR, size)
        }
    }

    /// Same request writing to different files
    #[must_use]
    pub fn with_files(
        mut self,
        steps_file: impl Into<PathBuf>,
        maze_file: impl Into<PathBuf>,
    ) -> Self {
        self.steps_file = steps_file.into();
        self.maze_file = maze_file.into();
        self
    }

    /// `-q -v <steps> -a <algorithm> [parameters...] <width> <height>`
    pub fn args(&self) -> Vec<OsString> {
        let mut args: Vec<OsString> = vec![
            "-q".into(),
            "-v".into(),
            self.steps_file.clone().into_os_string(),
            "-a".into(),
            self.algorithm.clone().into(),
        ];
        args.extend(self.parameters.iter().map(OsString::from));
        args.push(self.size.width().to_string().into());
        args.push(self.size.height().to_string().into());
        args
    }
}

/// One solver invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolveRequest {
    /// Solver algorithm passed after `-a`
    pub solver: String,
    /// Step log the solver writes
    pub steps_file: PathBuf,
    /// Maze the solver reads
    pub maze_file: PathBuf,
}

impl Default for SolveRequest {
    fn default() -> Self {
        Self::new(DEFAULT_SOLVER)
    }
}

impl SolveRequest {
    /// Request for `solver` using the default files
    pub fn new(solver: impl Into<String>) -> Self {
        Self {
            solver: solver.into(),
            steps_file: PathBuf::from(DEFAULT_STEPS_FILE),
            maze_file: PathBuf::from(DEFAULT_MAZE_FILE),
        }
    }

    /// Same request using different files
    #[must_use]
    pub fn with_files(
        mut self,
        steps_file: impl Into<PathBuf>,
        maze_file: impl Into<PathBuf>,
    ) -> Self {
        self.steps_file = steps_file.into();
        self.maze_file = maze_file.into();
        self
    }

    /// `-q -v <steps> -i <maze> -a <solver>`
    pub fn args(&self) -> Vec<OsString> {
        vec![
            "-q".into(),
            "-v".into(),
            self.steps_file.clone().into_os_string(),
            "-i".into(),
            self.maze_file.clone().into_os_string(),
            "-a".into(),
            self.solver.clone().into(),
        ]
    }
}

/// Join captured output lines with `\n`, dropping line terminators
///
/// Bytes outside ASCII are replaced rather than rejected.
pub fn join_output_lines(output: &[u8]) -> String {
    String::from_utf8_lossy(output)
        .lines()
        .map(|line| line.trim_end_matches('\r'))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Run `program` with `args` and return its joined stdout
///
/// Standard error is passed through to the terminal.
///
/// # Errors
///
/// Returns [`ViewerError::ToolFailed`] if the program cannot be started,
/// exits unsuccessfully or prints nothing.
pub fn run_tool(program: &Path, args: &[OsString]) -> Result<String> {
    tracing::info!(program = %program.display(), ?args, "running external tool");

    let output = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::inherit())
        .output()
        .map_err(|e| tool_failed(program, &format!("could not start: {e}")))?;

    if !output.status.success() {
        return Err(tool_failed(program, &format!("exited with {}", output.status)));
    }

    let text = join_output_lines(&output.stdout);
    if text.trim().is_empty() {
        return Err(tool_failed(program, &"produced no output"));
    }
    Ok(text)
}

/// Result of one tool run
#[derive(Debug, Clone)]
pub struct Outcome {
    /// Final maze printed by the tool
    pub maze: String,
    /// Steps read back from the step log
    pub steps: StepSequence,
}

/// Runs generator and solver requests against fixed executables
#[derive(Debug, Clone)]
pub struct Launcher {
    paths: ToolPaths,
}

impl Launcher {
    /// Launcher for the given executables
    pub const fn new(paths: ToolPaths) -> Self {
        Self { paths }
    }

    /// Executables in use
    pub const fn paths(&self) -> &ToolPaths {
        &self.paths
    }

    /// Generate a maze, save it for the solver and load the step log
    ///
    /// # Errors
    ///
    /// Returns an error if the generator fails, the maze cannot be saved or
    /// the step log cannot be read.
    pub fn generate(&self, request: &GenerateRequest) -> Result<Outcome> {
        let maze = run_tool(&self.paths.generator, &request.args())?;

        std::fs::write(&request.maze_file, &maze).map_err(|e| ViewerError::FileSystem {
            path: request.maze_file.clone(),
            operation: "write maze",
            source: e,
        })?;

        let text = read_step_log(&request.steps_file)?;
        let steps = StepSequence::load_with_dimensions(
            &text,
            request.size.width(),
            request.size.height(),
        )
        .map_err(|e| with_origin(e, &request.steps_file))?;

        tracing::info!(
            algorithm = %request.algorithm,
            frames = steps.len(),
            "generated maze"
        );
        Ok(Outcome { maze, steps })
    }

    /// Solve the saved maze and load the step log
    ///
    /// # Errors
    ///
    /// Returns an error if the solver fails or the step log cannot be read.
    pub fn solve(&self, request: &SolveRequest) -> Result<Outcome> {
        let maze = run_tool(&self.paths.solver, &request.args())?;
        let steps = StepSequence::from_file(&request.steps_file)?;

        tracing::info!(solver = %request.solver, frames = steps.len(), "solved maze");
        Ok(Outcome { maze, steps })
    }
}

fn read_step_log(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| ViewerError::FileSystem {
        path: path.to_path_buf(),
        operation: "read step log",
        source: e,
    })
}

fn with_origin(error: ViewerError, path: &Path) -> ViewerError {
    match error {
        ViewerError::EmptyInput { .. } => ViewerError::EmptyInput {
            origin: path.display().to_string(),
        },
        other => other,
    }
}
