//! # Beam Statics CLI
//!
//! Command-line front end for `statics_core`: solves a beam from a JSON file
//! or from flags and prints a report, JSON or CSV.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};
use log::info;

use statics_core::api::{self, BeamRequest, TorsorAtRequest};
use statics_core::calculations::beam::BeamConfiguration;
use statics_core::calculations::supports::SupportType;
use statics_core::equations::section::RectangularSection;
use statics_core::export::diagrams_to_csv;
use statics_core::file_io::{load_request, save_json, save_text};
use statics_core::loads::{DistributedLoad, PointLoad};

mod report;

#[derive(Parser, Debug)]
#[command(name = "statics", version, about = "Beam statics solver")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Solve a beam described by a JSON request file.
    Solve(SolveArgs),
    /// Print the support reactions for a beam given by flags.
    Reactions(BeamArgs),
    /// Print the position of the combined load resultant.
    CenterOfMass(BeamArgs),
    /// Print the internal torque at one position.
    TorsorAt(TorsorAtArgs),
    /// Print rectangular section properties.
    Section(SectionArgs),
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
    Csv,
}

#[derive(ClapArgs, Debug)]
struct SolveArgs {
    /// JSON beam request.
    #[arg(long)]
    config: PathBuf,
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
    /// Write the output here instead of stdout.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(ClapArgs, Debug)]
struct BeamArgs {
    /// Beam length.
    #[arg(long)]
    length: f64,
    /// Applied torque at support A.
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    torsor: f64,
    /// Position of a fixed intermediate support C.
    #[arg(long = "support-c", value_name = "POS")]
    support_c: Option<f64>,
    /// Point load, repeatable.
    #[arg(
        long = "load",
        num_args = 2,
        value_names = ["POS", "MAG"],
        allow_negative_numbers = true
    )]
    load: Vec<f64>,
    /// Uniform distributed load, repeatable.
    #[arg(
        long = "dist",
        num_args = 3,
        value_names = ["START", "END", "W"],
        allow_negative_numbers = true
    )]
    dist: Vec<f64>,
    /// Number of diagram intervals.
    #[arg(long)]
    num_points: Option<usize>,
}

#[derive(ClapArgs, Debug)]
struct TorsorAtArgs {
    #[command(flatten)]
    beam: BeamArgs,
    /// Position along the beam.
    #[arg(long, allow_negative_numbers = true)]
    x: f64,
}

#[derive(ClapArgs, Debug)]
struct SectionArgs {
    #[arg(long)]
    width: f64,
    #[arg(long)]
    height: f64,
}

impl BeamArgs {
    fn request(&self) -> Result<BeamRequest> {
        if self.load.len() % 2 != 0 {
            bail!("--load takes POS MAG pairs");
        }
        if self.dist.len() % 3 != 0 {
            bail!("--dist takes START END W triples");
        }

        let mut beam = BeamConfiguration::new(self.length).with_torsor(self.torsor);
        if let Some(c) = self.support_c {
            beam = beam.with_support_c(SupportType::Fixed, c);
        }
        if let Some(n) = self.num_points {
            beam = beam.with_num_points(n);
        }
        for pair in self.load.chunks_exact(2) {
            beam = beam.with_point_load(PointLoad::new(pair[0], pair[1]));
        }
        for triple in self.dist.chunks_exact(3) {
            beam = beam.with_distributed_load(DistributedLoad::new(triple[0], triple[1], triple[2]));
        }
        Ok(BeamRequest::new(beam))
    }
}

fn solve(args: &SolveArgs) -> Result<()> {
    let request = load_request(&args.config)
        .with_context(|| format!("loading {}", args.config.display()))?;
    let response = api::analyze(&request)?;
    info!(
        "solved {} ({})",
        args.config.display(),
        report::reactions_line(&response.analysis.reaction_set())
    );

    let rendered = match args.format {
        OutputFormat::Text => report::analysis(&response),
        OutputFormat::Json => serde_json::to_string_pretty(&response)?,
        OutputFormat::Csv => diagrams_to_csv(&response.analysis)?,
    };

    match &args.out {
        Some(path) if args.format == OutputFormat::Json => save_json(&response, path)?,
        Some(path) => save_text(&rendered, path)?,
        None => print!("{}", rendered),
    }
    if args.format == OutputFormat::Json && args.out.is_none() {
        println!();
    }
    Ok(())
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Solve(args) => solve(&args)?,
        Command::Reactions(args) => {
            let r = api::reactions(&args.request()?)?;
            println!("{}", report::reactions_line(&r));
        }
        Command::CenterOfMass(args) => match api::center_of_mass(&args.request()?)?.x_cm {
            Some(x) => println!("x_cm = {:.4}", x),
            None => println!("x_cm = none (no net load)"),
        },
        Command::TorsorAt(args) => {
            let request = TorsorAtRequest {
                request: args.beam.request()?,
                x: args.x,
            };
            let reply = api::torsor_at(&request)?;
            println!("T({:.4}) = {:.4}", reply.x, reply.torsor);
        }
        Command::Section(args) => {
            let p = RectangularSection::new(args.width, args.height).properties()?;
            println!("A  = {:.6}", p.area);
            println!("cx = {:.6}  cy = {:.6}", p.centroid_x, p.centroid_y);
            println!("Ix = {:.6}", p.ix);
            println!("Iy = {:.6}", p.iy);
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();
    run(Cli::parse())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn beam_args(argv: &[&str]) -> BeamArgs {
        match Cli::try_parse_from(argv).unwrap().command {
            Command::Reactions(args) | Command::CenterOfMass(args) => args,
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn repeated_loads_are_grouped() {
        let args = beam_args(&[
            "statics", "reactions", "--length", "10", "--load", "5", "100", "--load", "2", "-20",
            "--dist", "0", "10", "3",
        ]);
        let request = args.request().unwrap();
        let loads = &request.beam.loads;
        assert_eq!(loads.point_loads.len(), 2);
        assert_eq!(loads.point_loads[1].magnitude, -20.0);
        assert_eq!(loads.distributed_loads.len(), 1);
        assert_eq!(loads.distributed_loads[0].intensity, 3.0);
    }

    #[test]
    fn support_c_flag_activates_fixed_support() {
        let args = beam_args(&["statics", "reactions", "--length", "10", "--support-c", "4"]);
        let beam = args.request().unwrap().beam;
        assert_eq!(beam.support_c_type, SupportType::Fixed);
        assert_eq!(beam.active_support_c(), Some(4.0));
    }

    #[test]
    fn negative_torsor_parses() {
        let args = beam_args(&["statics", "center-of-mass", "--length", "6", "--torsor", "-12.5"]);
        assert_eq!(args.torsor, -12.5);
    }

    #[test]
    fn load_flag_requires_two_values() {
        let err = Cli::try_parse_from(["statics", "reactions", "--length", "10", "--load", "5"]);
        assert!(err.is_err());
    }

    #[test]
    fn torsor_at_takes_position() {
        let cli = Cli::try_parse_from([
            "statics", "torsor-at", "--length", "10", "--torsor", "20", "--x", "5",
        ])
        .unwrap();
        match cli.command {
            Command::TorsorAt(args) => assert_eq!(args.x, 5.0),
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn report_lists_reactions() {
        let request = beam_args(&["statics", "reactions", "--length", "10", "--load", "5", "100"])
            .request()
            .unwrap();
        let response = api::analyze(&request).unwrap();
        let text = report::analysis(&response);
        assert!(text.contains("BEAM STATICS RESULTS"));
        assert!(text.contains("RA ="));
        assert!(text.contains("[OK] balanced"));
    }
}
