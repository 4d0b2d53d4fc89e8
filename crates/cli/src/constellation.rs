use std::path::PathBuf;

use anyhow::{Context, bail};
use clap::{Parser, ValueEnum};
use nominal_config::{ConstellationManifest, StrategyKind, load_constellations};
use nominal_constellation::{ConstellationParams, elements_to_states_with_mu, generate};
use nominal_export::{
    ConstellationDocument, element_rows, state_rows, write_csv, write_json, writer_for_path,
};
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Generate satellite constellations from a reference orbit"
)]
pub struct ConstellationArgs {
    /// Constellation manifest (YAML list, TOML file, or directory of TOML files)
    #[arg(
        long,
        conflicts_with_all = [
            "strategy",
            "satellites",
            "planes",
            "spacing",
            "sma_km",
            "eccentricity",
            "inclination_deg",
            "raan_deg",
            "arg_periapsis_deg",
            "offset_deg",
        ]
    )]
    pub config: Option<PathBuf>,

    /// Manifest entry to generate (defaults to the first one)
    #[arg(long, requires = "config")]
    pub name: Option<String>,

    /// Layout strategy
    #[arg(long, value_enum, required_unless_present = "config")]
    pub strategy: Option<StrategyArg>,

    /// Total number of satellites
    #[arg(long, required_unless_present = "config")]
    pub satellites: Option<usize>,

    /// Orbital planes (Walker-Delta only)
    #[arg(long, default_value_t = 1)]
    pub planes: usize,

    /// Relative spacing between planes (Walker-Delta only)
    #[arg(long, default_value_t = 1.0)]
    pub spacing: f64,

    /// Reference semi-major axis in km
    #[arg(long, required_unless_present = "config")]
    pub sma_km: Option<f64>,

    #[arg(long, default_value_t = 0.0)]
    pub eccentricity: f64,

    #[arg(long, default_value_t = 0.0)]
    pub inclination_deg: f64,

    #[arg(long, default_value_t = 0.0)]
    pub raan_deg: f64,

    #[arg(long, default_value_t = 0.0)]
    pub arg_periapsis_deg: f64,

    /// True anomaly of satellite 0 in degrees
    #[arg(long, default_value_t = 0.0)]
    pub offset_deg: f64,

    /// Central body (case-insensitive); overrides the manifest's body
    #[arg(long)]
    pub body: Option<String>,

    /// Custom body definitions added to the built-in table
    #[arg(long)]
    pub bodies: Option<PathBuf>,

    /// Emit inertial state vectors instead of classical elements
    #[arg(long, default_value_t = false)]
    pub states: bool,

    #[arg(long, value_enum, default_value_t = OutputFormat::Csv)]
    pub format: OutputFormat,

    /// Output path (`-` for stdout)
    #[arg(long, default_value = "-")]
    pub output: PathBuf,
}

#[derive(Copy, Clone, ValueEnum, Debug, PartialEq, Eq)]
pub enum StrategyArg {
    Coplanar,
    CoplanarCircular,
    WalkerDelta,
}

impl From<StrategyArg> for StrategyKind {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Coplanar => StrategyKind::Coplanar,
            StrategyArg::CoplanarCircular => StrategyKind::CoplanarCircular,
            StrategyArg::WalkerDelta => StrategyKind::WalkerDelta,
        }
    }
}

#[derive(Copy, Clone, ValueEnum, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Csv,
    Json,
}

pub fn run(args: ConstellationArgs) -> anyhow::Result<()> {
    let manifest = resolve_manifest(&args)?;
    let catalog = crate::body_catalog(args.bodies.as_deref())?;
    let mu = catalog.mu(&manifest.body)?;

    let strategy = manifest.layout()?;
    let params = ConstellationParams::try_from(&manifest)?;
    let elements = generate(&strategy, &params)
        .with_context(|| format!("generating constellation `{}`", manifest.name))?;
    info!(
        name = %manifest.name,
        body = %manifest.body,
        satellites = elements.len(),
        "constellation ready"
    );

    let body = manifest.body.to_ascii_uppercase();
    let mut writer = writer_for_path(&args.output)
        .with_context(|| format!("opening {}", args.output.display()))?;
    if args.states {
        let states = elements_to_states_with_mu(&elements, mu)?;
        let rows = state_rows(&states);
        write_rows(&mut writer, args.format, &body, strategy.name(), &rows)?;
    } else {
        let rows = element_rows(&elements);
        write_rows(&mut writer, args.format, &body, strategy.name(), &rows)?;
    }
    Ok(())
}

fn resolve_manifest(args: &ConstellationArgs) -> anyhow::Result<ConstellationManifest> {
    let mut manifest = match &args.config {
        Some(path) => {
            let manifests = load_constellations(path)
                .with_context(|| format!("loading {}", path.display()))?;
            match &args.name {
                Some(name) => manifests
                    .into_iter()
                    .find(|m| m.name.eq_ignore_ascii_case(name))
                    .with_context(|| format!("no constellation named `{name}` in {}", path.display()))?,
                None => match manifests.into_iter().next() {
                    Some(first) => first,
                    None => bail!("{} contains no constellations", path.display()),
                },
            }
        }
        None => manifest_from_flags(args)?,
    };
    if let Some(body) = &args.body {
        manifest.body = body.clone();
    }
    Ok(manifest)
}

fn manifest_from_flags(args: &ConstellationArgs) -> anyhow::Result<ConstellationManifest> {
    let (Some(strategy), Some(satellites), Some(sma_km)) =
        (args.strategy, args.satellites, args.sma_km)
    else {
        bail!("either --config or --strategy, --satellites and --sma-km are required");
    };
    Ok(ConstellationManifest {
        name: "cli".to_string(),
        body: "EARTH".to_string(),
        strategy: strategy.into(),
        satellites,
        planes: Some(args.planes),
        spacing: Some(args.spacing),
        semi_major_axis_km: sma_km,
        eccentricity: Some(args.eccentricity),
        inclination_deg: args.inclination_deg,
        raan_deg: Some(args.raan_deg),
        arg_periapsis_deg: Some(args.arg_periapsis_deg),
        true_anomaly_offset_deg: Some(args.offset_deg),
    })
}

fn write_rows<R: serde::Serialize>(
    writer: &mut dyn std::io::Write,
    format: OutputFormat,
    body: &str,
    strategy: &str,
    rows: &[R],
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Csv => write_csv(writer, rows)?,
        OutputFormat::Json => write_json(
            writer,
            &ConstellationDocument {
                body,
                strategy,
                satellites: rows,
            },
        )?,
    }
    Ok(())
}
