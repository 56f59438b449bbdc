//! Descriptores moleculares calculados por registro.
//!
//! `DescriptorKind` enumera los nueve descriptores en el orden en que se
//! reportan; `DescriptorSet` es el registro plano e inmutable que consumen
//! las reglas y la puntuación.
use serde::{Deserialize, Serialize};

use crate::DomainError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DescriptorKind {
    Hba,
    Hbd,
    Tpsa,
    AvgMolecularWeight,
    AromaticRings,
    ChiralCentres,
    HeavyAtoms,
    LogP,
    Refractivity,
}

impl DescriptorKind {
    pub const ALL: [DescriptorKind; 9] = [DescriptorKind::Hba,
                                          DescriptorKind::Hbd,
                                          DescriptorKind::Tpsa,
                                          DescriptorKind::AvgMolecularWeight,
                                          DescriptorKind::AromaticRings,
                                          DescriptorKind::ChiralCentres,
                                          DescriptorKind::HeavyAtoms,
                                          DescriptorKind::LogP,
                                          DescriptorKind::Refractivity];

    /// Nombre de columna en el reporte.
    pub fn column_name(&self) -> &'static str {
        match self {
            DescriptorKind::Hba => "HBA",
            DescriptorKind::Hbd => "HBD",
            DescriptorKind::Tpsa => "tPSA",
            DescriptorKind::AvgMolecularWeight => "AvgMolecularWeight",
            DescriptorKind::AromaticRings => "AromaticRings",
            DescriptorKind::ChiralCentres => "ChiralCentres",
            DescriptorKind::HeavyAtoms => "HeavyAtoms",
            DescriptorKind::LogP => "LogP",
            DescriptorKind::Refractivity => "Refractivity",
        }
    }

    /// Descriptores que son conteos enteros no negativos.
    pub fn is_count(&self) -> bool {
        matches!(self,
                 DescriptorKind::Hba
                 | DescriptorKind::Hbd
                 | DescriptorKind::AromaticRings
                 | DescriptorKind::ChiralCentres
                 | DescriptorKind::HeavyAtoms)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DescriptorSet {
    pub hba: u32,
    pub hbd: u32,
    pub tpsa: f64,
    pub avg_molecular_weight: f64,
    pub aromatic_rings: u32,
    pub chiral_centres: u32,
    pub heavy_atoms: u32,
    pub log_p: f64,
    pub refractivity: f64,
}

impl DescriptorSet {
    /// Construye el conjunto pidiendo cada descriptor a `value_of`, en el
    /// orden de `DescriptorKind::ALL`. El primer error corta la construcción.
    ///
    /// # Errores
    /// `DomainError::Validation` si un valor no es finito o si un conteo no es
    /// un entero no negativo.
    pub fn from_values<F, E>(mut value_of: F) -> Result<Self, E>
        where F: FnMut(DescriptorKind) -> Result<f64, E>,
              E: From<DomainError>
    {
        let mut values = [0.0_f64; 9];
        for (slot, kind) in values.iter_mut().zip(DescriptorKind::ALL) {
            let v = value_of(kind)?;
            *slot = Self::validate(kind, v)?;
        }
        Ok(DescriptorSet { hba: values[0] as u32,
                           hbd: values[1] as u32,
                           tpsa: values[2],
                           avg_molecular_weight: values[3],
                           aromatic_rings: values[4] as u32,
                           chiral_centres: values[5] as u32,
                           heavy_atoms: values[6] as u32,
                           log_p: values[7],
                           refractivity: values[8] })
    }

    fn validate(kind: DescriptorKind, value: f64) -> Result<f64, DomainError> {
        if !value.is_finite() {
            return Err(DomainError::Validation(format!("{} no es finito: {}", kind.column_name(), value)));
        }
        if kind.is_count() && (value < 0.0 || value.fract() != 0.0 || value > u32::MAX as f64) {
            return Err(DomainError::Validation(format!("{} debe ser un conteo entero no negativo: {}",
                                                       kind.column_name(),
                                                       value)));
        }
        Ok(value)
    }

    pub fn get(&self, kind: DescriptorKind) -> f64 {
        match kind {
            DescriptorKind::Hba => self.hba as f64,
            DescriptorKind::Hbd => self.hbd as f64,
            DescriptorKind::Tpsa => self.tpsa,
            DescriptorKind::AvgMolecularWeight => self.avg_molecular_weight,
            DescriptorKind::AromaticRings => self.aromatic_rings as f64,
            DescriptorKind::ChiralCentres => self.chiral_centres as f64,
            DescriptorKind::HeavyAtoms => self.heavy_atoms as f64,
            DescriptorKind::LogP => self.log_p,
            DescriptorKind::Refractivity => self.refractivity,
        }
    }
}
