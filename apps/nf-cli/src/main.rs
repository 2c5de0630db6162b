use clap::{Parser, Subcommand};
use std::error::Error;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

use nf_sim::{CaseConfig, Solution, run_case};

#[derive(Parser)]
#[command(name = "nf-cli")]
#[command(about = "NozzleFlow CLI - quasi-1D nozzle flow solver", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a case file without running it
    Validate {
        /// Path to the case YAML file
        case_path: PathBuf,
    },
    /// Run a case and print or export the final distributions
    Run {
        /// Path to a case YAML file (defaults omitted fields)
        #[arg(long)]
        case: Option<PathBuf>,
        /// Override the number of timesteps
        #[arg(long)]
        steps: Option<usize>,
        /// Override the grid spacing
        #[arg(long)]
        dx: Option<f64>,
        /// Override the Courant number
        #[arg(long)]
        cfl: Option<f64>,
        /// Output CSV file path (optional, defaults to a printed table)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<(), Box<dyn Error>> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { case_path } => cmd_validate(&case_path),
        Commands::Run {
            case,
            steps,
            dx,
            cfl,
            output,
        } => cmd_run(case.as_deref(), steps, dx, cfl, output.as_deref()),
    }
}

fn load_case(path: Option<&Path>) -> Result<CaseConfig, Box<dyn Error>> {
    match path {
        Some(p) => {
            let text = fs::read_to_string(p)?;
            Ok(serde_yaml::from_str(&text)?)
        }
        None => Ok(CaseConfig::default()),
    }
}

fn cmd_validate(path: &Path) -> Result<(), Box<dyn Error>> {
    let case = load_case(Some(path))?;
    case.validate()?;
    println!("OK: {}", path.display());
    println!(
        "  L = {}, dx = {}, gamma = {}, CFL = {}, steps = {}, mdot = {}",
        case.length, case.dx, case.gamma, case.cfl, case.steps, case.mass_flow
    );
    Ok(())
}

fn cmd_run(
    case_path: Option<&Path>,
    steps: Option<usize>,
    dx: Option<f64>,
    cfl: Option<f64>,
    output: Option<&Path>,
) -> Result<(), Box<dyn Error>> {
    let mut case = load_case(case_path)?;
    if let Some(steps) = steps {
        case.steps = steps;
    }
    if let Some(dx) = dx {
        case.dx = dx;
    }
    if let Some(cfl) = cfl {
        case.cfl = cfl;
    }

    let start = Instant::now();
    let solution = run_case(&case)?;
    let elapsed = start.elapsed();

    tracing::info!(
        iterations = solution.iterations,
        sim_time = solution.sim_time,
        wall_ms = elapsed.as_millis() as u64,
        "solve complete"
    );

    match output {
        Some(path) => {
            let file = fs::File::create(path)?;
            write_csv(io::BufWriter::new(file), &solution)?;
            println!("Wrote {}", path.display());
        }
        None => print_table(&solution),
    }
    Ok(())
}

fn write_csv<W: Write>(mut w: W, solution: &Solution) -> io::Result<()> {
    writeln!(w, "x,area,density,velocity,temperature,pressure,mach,mass_flow")?;
    let mf = solution.mass_flow();
    let p = &solution.primitives;
    for i in 0..solution.x.len() {
        writeln!(
            w,
            "{},{},{},{},{},{},{},{}",
            solution.x[i],
            solution.area[i],
            p.density[i],
            p.velocity[i],
            p.temperature[i],
            p.pressure[i],
            p.mach[i],
            mf[i]
        )?;
    }
    Ok(())
}

fn print_table(solution: &Solution) {
    println!(
        "{:>8} {:>8} {:>10} {:>10} {:>10} {:>10} {:>8}",
        "x", "A", "density", "velocity", "temp", "pressure", "Mach"
    );
    let p = &solution.primitives;
    for i in 0..solution.x.len() {
        println!(
            "{:>8.4} {:>8.4} {:>10.5} {:>10.5} {:>10.5} {:>10.5} {:>8.4}",
            solution.x[i],
            solution.area[i],
            p.density[i],
            p.velocity[i],
            p.temperature[i],
            p.pressure[i],
            p.mach[i]
        );
    }
    println!(
        "\n{} iterations, simulated time {:.4}, last dt {:.6}",
        solution.iterations, solution.sim_time, solution.last_dt
    );
}
