use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use chem_domain::ScoredRecord;
use log::info;
use rust_xlsxwriter::{Format, Workbook};
use serde::{Serialize, Serializer};

use crate::errors::{ExportCause, ExportError};
use crate::hashing::ranking_fingerprint;

pub const COLUMNS: [&str; 19] = ["Original Name",
                                 "ChEMBL ID",
                                 "Match",
                                 "Name",
                                 "Smiles",
                                 "Targets",
                                 "HBA",
                                 "HBD",
                                 "tPSA",
                                 "AvgMolecularWeight",
                                 "AromaticRings",
                                 "ChiralCentres",
                                 "HeavyAtoms",
                                 "LogP",
                                 "Refractivity",
                                 "RuleOfThree",
                                 "RuleOfFive",
                                 "Score",
                                 "Rank"];

const XLSX_SHEET: &str = "Ranking";
const XLSX_REAL_FORMAT: &str = "0.00";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Csv,
    Tsv,
    Json,
    Xlsx,
}

impl ReportFormat {
    /// Formato según la extensión del destino. Sin extensión conocida no hay
    /// formato por defecto.
    pub fn from_path(path: &Path) -> Result<Self, ExportCause> {
        let ext = path.extension()
                      .and_then(|e| e.to_str())
                      .map(|e| e.to_ascii_lowercase())
                      .unwrap_or_default();
        match ext.as_str() {
            "csv" => Ok(ReportFormat::Csv),
            "tsv" => Ok(ReportFormat::Tsv),
            "json" => Ok(ReportFormat::Json),
            "xlsx" => Ok(ReportFormat::Xlsx),
            _ => Err(ExportCause::UnsupportedFormat(ext)),
        }
    }
}

/// Una fila del reporte, en el orden de `COLUMNS`. Los reales se escriben
/// con dos decimales en texto y con formato `0.00` en Excel.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportRow {
    #[serde(rename = "Original Name")]
    pub original_name: String,
    #[serde(rename = "ChEMBL ID")]
    pub canonical_id: String,
    #[serde(rename = "Match")]
    pub match_type: &'static str,
    #[serde(rename = "Name")]
    pub canonical_name: String,
    #[serde(rename = "Smiles")]
    pub structure: String,
    #[serde(rename = "Targets")]
    pub known_targets: String,
    #[serde(rename = "HBA")]
    pub hba: u32,
    #[serde(rename = "HBD")]
    pub hbd: u32,
    #[serde(rename = "tPSA", serialize_with = "two_decimals")]
    pub tpsa: f64,
    #[serde(rename = "AvgMolecularWeight", serialize_with = "two_decimals")]
    pub avg_molecular_weight: f64,
    #[serde(rename = "AromaticRings")]
    pub aromatic_rings: u32,
    #[serde(rename = "ChiralCentres")]
    pub chiral_centres: u32,
    #[serde(rename = "HeavyAtoms")]
    pub heavy_atoms: u32,
    #[serde(rename = "LogP", serialize_with = "two_decimals")]
    pub log_p: f64,
    #[serde(rename = "Refractivity", serialize_with = "two_decimals")]
    pub refractivity: f64,
    #[serde(rename = "RuleOfThree")]
    pub rule_of_three: bool,
    #[serde(rename = "RuleOfFive")]
    pub rule_of_five: bool,
    #[serde(rename = "Score", serialize_with = "two_decimals")]
    pub score: f64,
    #[serde(rename = "Rank")]
    pub rank: u32,
}

impl From<&ScoredRecord> for ReportRow {
    fn from(r: &ScoredRecord) -> Self {
        let e = &r.evaluated;
        let d = &e.descriptors;
        ReportRow { original_name: e.joined.original_name.clone(),
                    canonical_id: e.joined.canonical_id.clone(),
                    match_type: e.joined.match_type.as_str(),
                    canonical_name: e.joined.canonical_name.clone(),
                    structure: e.joined.structure.clone(),
                    known_targets: e.joined.known_targets.clone(),
                    hba: d.hba,
                    hbd: d.hbd,
                    tpsa: d.tpsa,
                    avg_molecular_weight: d.avg_molecular_weight,
                    aromatic_rings: d.aromatic_rings,
                    chiral_centres: d.chiral_centres,
                    heavy_atoms: d.heavy_atoms,
                    log_p: d.log_p,
                    refractivity: d.refractivity,
                    rule_of_three: e.flags.passes_rule_of_three,
                    rule_of_five: e.flags.passes_rule_of_five,
                    score: e.score,
                    rank: r.rank }
    }
}

fn two_decimals<S: Serializer>(v: &f64, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(&format!("{:.2}", v))
}

fn round_two(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

pub fn report_rows(records: &[ScoredRecord]) -> Vec<ReportRow> {
    records.iter().map(ReportRow::from).collect()
}

// Sin marca de tiempo: dos exportaciones del mismo lote son idénticas.
#[derive(Serialize)]
struct JsonReport<'a> {
    fingerprint: String,
    rows: &'a [ReportRow],
}

/// Escribe el reporte en `destination`. No crea directorios intermedios.
pub fn export(records: &[ScoredRecord], destination: &Path) -> Result<(), ExportError> {
    let with_path = |source: ExportCause| ExportError { path: destination.to_path_buf(),
                                                         source };
    let format = ReportFormat::from_path(destination).map_err(with_path)?;
    write_report(records, destination, format).map_err(with_path)?;
    info!("reporte {:?} con {} filas escrito en {}", format, records.len(), destination.display());
    Ok(())
}

fn write_report(records: &[ScoredRecord], destination: &Path, format: ReportFormat) -> Result<(), ExportCause> {
    let rows = report_rows(records);
    let file = File::create(destination)?;
    match format {
        ReportFormat::Csv => write_delimited(file, &rows, b','),
        ReportFormat::Tsv => write_delimited(file, &rows, b'\t'),
        ReportFormat::Json => {
            let mut out = BufWriter::new(file);
            let doc = JsonReport { fingerprint: ranking_fingerprint(records),
                                   rows: &rows };
            serde_json::to_writer_pretty(&mut out, &doc)?;
            out.write_all(b"\n")?;
            out.flush()?;
            Ok(())
        }
        ReportFormat::Xlsx => write_xlsx(file, &rows),
    }
}

fn write_delimited<W: Write>(writer: W, rows: &[ReportRow], delimiter: u8) -> Result<(), ExportCause> {
    // Cabecera explícita: un reporte vacío también la lleva
    let mut wtr = csv::WriterBuilder::new().delimiter(delimiter)
                                           .has_headers(false)
                                           .from_writer(writer);
    wtr.write_record(COLUMNS)?;
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

fn write_xlsx<W: Write>(mut writer: W, rows: &[ReportRow]) -> Result<(), ExportCause> {
    let mut workbook = Workbook::new();
    let real = Format::new().set_num_format(XLSX_REAL_FORMAT);
    let sheet = workbook.add_worksheet();
    sheet.set_name(XLSX_SHEET)?;
    for (col, name) in COLUMNS.iter().enumerate() {
        sheet.write_string(0, col as u16, *name)?;
    }
    for (i, row) in rows.iter().enumerate() {
        let r = i as u32 + 1;
        sheet.write_string(r, 0, &row.original_name)?;
        sheet.write_string(r, 1, &row.canonical_id)?;
        sheet.write_string(r, 2, row.match_type)?;
        sheet.write_string(r, 3, &row.canonical_name)?;
        sheet.write_string(r, 4, &row.structure)?;
        sheet.write_string(r, 5, &row.known_targets)?;
        sheet.write_number(r, 6, row.hba)?;
        sheet.write_number(r, 7, row.hbd)?;
        sheet.write_number_with_format(r, 8, round_two(row.tpsa), &real)?;
        sheet.write_number_with_format(r, 9, round_two(row.avg_molecular_weight), &real)?;
        sheet.write_number(r, 10, row.aromatic_rings)?;
        sheet.write_number(r, 11, row.chiral_centres)?;
        sheet.write_number(r, 12, row.heavy_atoms)?;
        sheet.write_number_with_format(r, 13, round_two(row.log_p), &real)?;
        sheet.write_number_with_format(r, 14, round_two(row.refractivity), &real)?;
        sheet.write_boolean(r, 15, row.rule_of_three)?;
        sheet.write_boolean(r, 16, row.rule_of_five)?;
        sheet.write_number_with_format(r, 17, round_two(row.score), &real)?;
        sheet.write_number(r, 18, row.rank)?;
    }
    let bytes = workbook.save_to_buffer()?;
    writer.write_all(&bytes)?;
    writer.flush()?;
    Ok(())
}
