//! Command-line interface for generating, solving, playing and exporting mazes

use crate::dialog::binary_tree::BinaryTreeBias;
use crate::dialog::growing_tree::{DualMethodSelector, GrowingTreeMethod};
use crate::dialog::size::SizeConfig;
use crate::dialog::speed::SpeedConfig;
use crate::io::configuration::{
    BINARY_TREE_GENERATOR, DEFAULT_CELL_SIZE, DEFAULT_DIMENSION, DEFAULT_GENERATOR,
    DEFAULT_MAZE_FILE, DEFAULT_RATIO, DEFAULT_SOLVER, DEFAULT_SPEED, DEFAULT_STEPS_FILE,
    GENERATOR_ENV, GROWING_TREE_GENERATOR, SOLVER_ENV,
};
use crate::io::error::{Result, invalid_parameter};
use crate::io::launcher::{GenerateRequest, Launcher, SolveRequest, ToolPaths};
use crate::io::progress::FrameProgress;
use crate::io::render::FramePainter;
use crate::io::visualization::{export_gif, export_png};
use crate::playback::controller::{ControlSignal, PlaybackController, PlaybackState};
use crate::playback::scheduler::CooperativeScheduler;
use crate::playback::sequence::StepSequence;
use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "mazeview")]
#[command(author, version, about = "Generate, solve and replay maze step logs")]
/// Command-line arguments for the maze viewer
pub struct Cli {
    /// Only log errors and hide progress bars
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Operation to perform
    #[command(subcommand)]
    pub command: Command,
}

/// Viewer operations
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the maze generator and load its step log
    Generate(GenerateArgs),
    /// Run the maze solver on the saved maze and load its step log
    Solve(SolveArgs),
    /// Replay a step log in the terminal
    Play(PlayArgs),
    /// Render a step log to an animated GIF or a PNG
    Export(ExportArgs),
}

/// Arguments of `generate`
#[derive(clap::Args, Debug)]
pub struct GenerateArgs {
    /// Generator executable
    #[arg(long, env = GENERATOR_ENV)]
    pub generator_bin: PathBuf,

    /// Generator algorithm
    #[arg(short, long, default_value = DEFAULT_GENERATOR)]
    pub algorithm: String,

    /// Maze width in cells
    #[arg(short = 'W', long, default_value_t = DEFAULT_DIMENSION)]
    pub width: usize,

    /// Maze height in cells
    #[arg(short = 'H', long, default_value_t = DEFAULT_DIMENSION)]
    pub height: usize,

    /// Growing-tree methods, at most two, comma separated
    #[arg(short, long, value_delimiter = ',')]
    pub methods: Vec<GrowingTreeMethod>,

    /// Growing-tree blend ratio between the two methods
    #[arg(short, long, default_value_t = DEFAULT_RATIO)]
    pub ratio: f64,

    /// Binary-tree bias
    #[arg(short, long, value_enum, default_value_t)]
    pub bias: BinaryTreeBias,

    /// Step log written by the generator
    #[arg(long, default_value = DEFAULT_STEPS_FILE)]
    pub steps_file: PathBuf,

    /// File the generated maze is saved to
    #[arg(long, default_value = DEFAULT_MAZE_FILE)]
    pub maze_file: PathBuf,
}

impl GenerateArgs {
    /// Build the generator request, clamping the size
    ///
    /// # Errors
    ///
    /// Returns an error if more than two methods are given.
    pub fn request(&self) -> Result<GenerateRequest> {
        let size = SizeConfig::new(self.width, self.height);
        let request = match self.algorithm.as_str() {
            GROWING_TREE_GENERATOR => GenerateRequest::growing_tree(&self.selector()?, size),
            BINARY_TREE_GENERATOR => GenerateRequest::binary_tree(self.bias, size),
            other => GenerateRequest::new(other, size),
        };
        Ok(request.with_files(&self.steps_file, &self.maze_file))
    }

    fn selector(&self) -> Result<DualMethodSelector> {
        match self.methods.as_slice() {
            [] => Ok(DualMethodSelector::from_pair(None, None, self.ratio)),
            [only] => Ok(DualMethodSelector::from_pair(Some(*only), None, self.ratio)),
            [first, second] => Ok(DualMethodSelector::from_pair(
                Some(*first),
                Some(*second),
                self.ratio,
            )),
            more => Err(invalid_parameter(
                "methods",
                &more.len(),
                &"at most two methods can be combined",
            )),
        }
    }
}

/// Arguments of `solve`
#[derive(clap::Args, Debug)]
pub struct SolveArgs {
    /// Solver executable
    #[arg(long, env = SOLVER_ENV)]
    pub solver_bin: PathBuf,

    /// Solver algorithm
    #[arg(short, long, default_value = DEFAULT_SOLVER)]
    pub solver: String,

    /// Step log written by the solver
    #[arg(long, default_value = DEFAULT_STEPS_FILE)]
    pub steps_file: PathBuf,

    /// Maze the solver reads
    #[arg(long, default_value = DEFAULT_MAZE_FILE)]
    pub maze_file: PathBuf,
}

/// Arguments of `play`
#[derive(clap::Args, Debug)]
pub struct PlayArgs {
    /// Step log to replay
    #[arg(value_name = "STEPS")]
    pub steps_file: PathBuf,

    /// Steps per second
    #[arg(short, long, default_value_t = DEFAULT_SPEED)]
    pub speed: u32,

    /// Show only the final frame
    #[arg(short, long)]
    pub from_end: bool,
}

/// Arguments of `export`
#[derive(clap::Args, Debug)]
pub struct ExportArgs {
    /// Step log to render
    #[arg(value_name = "STEPS")]
    pub steps_file: PathBuf,

    /// Output image path
    #[arg(short, long)]
    pub output: PathBuf,

    /// Write only the final frame as a PNG
    #[arg(long)]
    pub final_only: bool,

    /// Cell edge in pixels, 9 to 128
    #[arg(short, long, default_value_t = DEFAULT_CELL_SIZE)]
    pub cell_size: u32,

    /// Steps per second of the animation
    #[arg(short, long, default_value_t = DEFAULT_SPEED)]
    pub speed: u32,
}

/// Runs one parsed command, writing user-facing output to `out`
pub struct App {
    cli: Cli,
}

impl App {
    /// Create the runner for parsed arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Parsed arguments
    pub const fn cli(&self) -> &Cli {
        &self.cli
    }

    /// Execute the command
    ///
    /// A malformed or empty step log aborts the display with a message on
    /// `out` before the error is returned.
    ///
    /// # Errors
    ///
    /// Returns an error if a tool fails, a file cannot be read or written,
    /// or a frame is malformed.
    pub fn run(&self, out: &mut impl Write) -> Result<()> {
        let result = match &self.cli.command {
            Command::Generate(args) => Self::generate(args, out),
            Command::Solve(args) => Self::solve(args, out),
            Command::Play(args) => Self::play(args, out),
            Command::Export(args) => self.export(args, out),
        };

        if let Err(error) = &result
            && error.is_payload_error()
        {
            tracing::error!(%error, "step log cannot be displayed");
            writeln!(out, "Aborted: {error}")?;
        }
        result
    }

    fn generate(args: &GenerateArgs, out: &mut impl Write) -> Result<()> {
        let request = args.request()?;
        let launcher = Launcher::new(ToolPaths::new(&args.generator_bin, PathBuf::new()));
        let outcome = launcher.generate(&request)?;

        writeln!(out, "{}", outcome.maze)?;
        writeln!(
            out,
            "{} frames in {}",
            outcome.steps.len(),
            request.steps_file.display()
        )?;
        Ok(())
    }

    fn solve(args: &SolveArgs, out: &mut impl Write) -> Result<()> {
        let request =
            SolveRequest::new(&args.solver).with_files(&args.steps_file, &args.maze_file);
        let launcher = Launcher::new(ToolPaths::new(PathBuf::new(), &args.solver_bin));
        let outcome = launcher.solve(&request)?;

        writeln!(out, "{}", outcome.maze)?;
        writeln!(
            out,
            "{} frames in {}",
            outcome.steps.len(),
            request.steps_file.display()
        )?;
        Ok(())
    }

    fn play(args: &PlayArgs, out: &mut impl Write) -> Result<()> {
        let sequence = StepSequence::from_file(&args.steps_file)?;
        let mut controller = PlaybackController::new(CooperativeScheduler::new());
        controller.load_sequence(sequence);

        if args.from_end {
            controller.jump_to_end();
            return draw_current(&controller, out);
        }

        let speed = SpeedConfig::new(args.speed);
        controller.run(speed);
        draw_current(&controller, out)?;

        while controller.state() == PlaybackState::Running {
            if let Some(interval) = controller.scheduler().interval() {
                std::thread::sleep(interval);
            }
            for signal in controller.tick() {
                if let ControlSignal::FrameChanged(_) = signal {
                    draw_current(&controller, out)?;
                }
            }
        }
        Ok(())
    }

    fn export(&self, args: &ExportArgs, out: &mut impl Write) -> Result<()> {
        let sequence = StepSequence::from_file(&args.steps_file)?;
        let painter = FramePainter::new(args.cell_size)?;

        if args.final_only {
            export_png(sequence.last_frame()?, &painter, &args.output)?;
            writeln!(out, "Wrote final frame to {}", args.output.display())?;
            return Ok(());
        }

        let label = file_label(&args.output);
        let progress = FrameProgress::for_run(sequence.len(), &label, self.cli.quiet);
        let written = export_gif(
            &sequence,
            &painter,
            SpeedConfig::new(args.speed),
            &args.output,
            &progress,
        )?;
        progress.finish("done");
        writeln!(out, "Wrote {written} frames to {}", args.output.display())?;
        Ok(())
    }
}

fn draw_current<S>(controller: &PlaybackController<S>, out: &mut impl Write) -> Result<()>
where
    S: crate::playback::scheduler::Scheduler,
{
    // Decoding first rejects malformed frames before anything is printed
    controller.current_frame()?;
    let (Some(sequence), Some(index)) = (controller.sequence(), controller.current_index()) else {
        return Ok(());
    };
    if let Some(text) = sequence.raw_frame(index) {
        writeln!(out, "step {}/{}", index + 1, sequence.len())?;
        writeln!(out, "{text}")?;
        writeln!(out)?;
    }
    Ok(())
}

fn file_label(path: &Path) -> String {
    path.file_name()
        .unwrap_or_default()
        .to_string_lossy()
        .to_string()
}
