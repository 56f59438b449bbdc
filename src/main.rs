use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use drugrank_rust::config::{validate_threshold, AppConfig};
use drugrank_rust::errors::PipelineError;
use drugrank_rust::load_reference;
use drugrank_rust::providers::RdkitToolkit;
use drugrank_rust::workflow::{DescriptorErrorPolicy, DrugPropertyPipeline};
use log::{error, info};

const SAMPLE_NAMES: [&str; 8] = ["Adenosine",
                                 "Adenocard",
                                 "BG8967",
                                 "Bivalirudin",
                                 "BAYT006267",
                                 "diflucan",
                                 "ibrutinib",
                                 "PC-32765"];

#[derive(Parser)]
#[command(name = "drugrank", about = "Normaliza nombres de fármacos, calcula descriptores y rankea por drug-likeness")]
struct Cli {
    /// Nombres de fármacos. Sin nombres ni --names-file se usa una lista de ejemplo.
    names: Vec<String>,

    /// Archivo con un nombre por línea (se ignoran líneas vacías).
    #[arg(long)]
    names_file: Option<PathBuf>,

    /// Catálogo de referencia delimitado (ChEMBL ID, Name, Smiles, Targets).
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Sinónimos adicionales (Synonym, ChEMBL ID).
    #[arg(long)]
    synonyms: Option<PathBuf>,

    /// Destino del reporte; el formato sale de la extensión (.xlsx, .csv, .tsv, .json).
    #[arg(short, long, default_value = "result.xlsx")]
    output: PathBuf,

    /// Similitud mínima (0..=1) para coincidencias aproximadas.
    #[arg(long)]
    fuzzy_threshold: Option<f64>,

    /// Omitir registros con estructura inválida en lugar de abortar.
    #[arg(long)]
    skip_invalid: bool,

    /// Calcular descriptores en paralelo.
    #[arg(long)]
    parallel: bool,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();
    match run(cli) {
        Ok(message) => {
            println!("{message}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<String, PipelineError> {
    let mut cfg = AppConfig::from_env()?;
    if let Some(path) = cli.catalog {
        cfg.catalog_path = path;
    }
    if let Some(path) = cli.synonyms {
        cfg.synonyms_path = Some(path);
    }
    if let Some(t) = cli.fuzzy_threshold {
        cfg.fuzzy_threshold = validate_threshold(t)?;
    }
    if cli.skip_invalid {
        cfg.pipeline.on_descriptor_error = DescriptorErrorPolicy::Skip;
    }
    if cli.parallel {
        cfg.pipeline.parallel = true;
    }

    let mut names = cli.names;
    if let Some(path) = &cli.names_file {
        let content = fs::read_to_string(path).map_err(|e| {
                                                  drugrank_rust::errors::ConfigError(format!("no se pudo leer {}: {e}",
                                                                                             path.display()))
                                              })?;
        names.extend(content.lines().map(str::trim).filter(|l| !l.is_empty()).map(String::from));
    }
    if names.is_empty() {
        info!("sin nombres de entrada, se usa la lista de ejemplo");
        names = SAMPLE_NAMES.iter().map(|s| s.to_string()).collect();
    }

    info!("DrugRank procesando {} nombres", names.len());
    let (catalog, resolver) = load_reference(&cfg)?;
    let toolkit = RdkitToolkit::init().map_err(|e| PipelineError::Toolkit(e.to_string()))?;
    let pipeline = DrugPropertyPipeline::new(resolver, catalog, toolkit, cfg.pipeline);
    pipeline.generate_drug_info(&names, &cli.output)
}
