//! Catálogo de referencia de compuestos conocidos.
//!
//! Tabla delimitada (por defecto `;`) con columnas `ChEMBL ID`, `Name`,
//! `Smiles` y `Targets`; se carga completa en memoria una sola vez y es de
//! solo lectura durante toda la vida del pipeline. El orden de inserción se
//! conserva para que el índice del resolvedor sea determinista.
use std::fs::File;
use std::io::Read;
use std::path::Path;

use chem_domain::CatalogEntry;
use indexmap::IndexMap;
use log::{debug, info, warn};
use serde::Deserialize;

use crate::errors::CatalogError;

#[derive(Debug, Deserialize)]
struct CatalogRow {
    #[serde(rename = "ChEMBL ID")]
    chembl_id: String,
    #[serde(rename = "Name", default)]
    name: Option<String>,
    #[serde(rename = "Smiles", default)]
    smiles: Option<String>,
    #[serde(rename = "Targets", default)]
    targets: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SynonymRow {
    #[serde(rename = "Synonym")]
    synonym: String,
    #[serde(rename = "ChEMBL ID")]
    chembl_id: String,
}

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: IndexMap<String, CatalogEntry>,
}

impl Catalog {
    pub fn from_path(path: impl AsRef<Path>, delimiter: u8) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| CatalogError::Io { path: path.to_path_buf(),
                                                                        source })?;
        Self::from_reader(file, delimiter, path)
    }

    /// `origin` solo se usa para dar contexto a los errores.
    pub fn from_reader<R: Read>(reader: R, delimiter: u8, origin: &Path) -> Result<Self, CatalogError> {
        let mut rdr = csv_reader(reader, delimiter);
        let mut catalog = Catalog::default();
        for row in rdr.deserialize::<CatalogRow>() {
            let row = row.map_err(|source| CatalogError::Parse { path: origin.to_path_buf(),
                                                                 source })?;
            let id = row.chembl_id.trim().to_string();
            if id.is_empty() {
                debug!("fila de catálogo sin identificador, se omite");
                continue;
            }
            let entry = CatalogEntry { canonical_id: id.clone(),
                                       canonical_name: row.name.unwrap_or_default().trim().to_string(),
                                       structure: row.smiles.unwrap_or_default().trim().to_string(),
                                       known_targets: row.targets.unwrap_or_default().trim().to_string() };
            catalog.insert(entry);
        }
        info!("catálogo cargado desde {}: {} compuestos", origin.display(), catalog.len());
        Ok(catalog)
    }

    pub fn from_entries<I>(entries: I) -> Self
        where I: IntoIterator<Item = CatalogEntry>
    {
        let mut catalog = Catalog::default();
        for entry in entries {
            catalog.insert(entry);
        }
        catalog
    }

    // La primera fila con un identificador gana.
    fn insert(&mut self, entry: CatalogEntry) {
        if self.entries.contains_key(&entry.canonical_id) {
            warn!("identificador duplicado en catálogo: {} (se conserva la primera fila)", entry.canonical_id);
            return;
        }
        self.entries.insert(entry.canonical_id.clone(), entry);
    }

    pub fn get(&self, canonical_id: &str) -> Option<&CatalogEntry> {
        self.entries.get(canonical_id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> impl Iterator<Item = &CatalogEntry> {
        self.entries.values()
    }

    /// Pares (nombre, identificador) para ajustar el índice del resolvedor.
    /// El propio identificador también se indexa como nombre.
    pub fn name_index(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::with_capacity(self.entries.len() * 2);
        for entry in self.entries.values() {
            if !entry.canonical_name.is_empty() {
                pairs.push((entry.canonical_name.clone(), entry.canonical_id.clone()));
            }
            pairs.push((entry.canonical_id.clone(), entry.canonical_id.clone()));
        }
        pairs
    }
}

/// Carga pares (sinónimo, identificador) con columnas `Synonym` y `ChEMBL ID`.
pub fn load_synonyms(path: impl AsRef<Path>, delimiter: u8) -> Result<Vec<(String, String)>, CatalogError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| CatalogError::Io { path: path.to_path_buf(),
                                                                    source })?;
    let mut rdr = csv_reader(file, delimiter);
    let mut pairs = Vec::new();
    for row in rdr.deserialize::<SynonymRow>() {
        let row = row.map_err(|source| CatalogError::Parse { path: path.to_path_buf(),
                                                             source })?;
        let (name, id) = (row.synonym.trim(), row.chembl_id.trim());
        if !name.is_empty() && !id.is_empty() {
            pairs.push((name.to_string(), id.to_string()));
        }
    }
    info!("sinónimos cargados desde {}: {}", path.display(), pairs.len());
    Ok(pairs)
}

fn csv_reader<R: Read>(reader: R, delimiter: u8) -> csv::Reader<R> {
    csv::ReaderBuilder::new().delimiter(delimiter)
                             .flexible(true)
                             .from_reader(reader)
}
