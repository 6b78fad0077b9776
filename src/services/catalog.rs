use crate::models::{ComplexityRange, SupplierRecord, TechnologyProfile};
use serde::Deserialize;
use serde_json::Value;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur while loading reference catalogs
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed catalog JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Catalog root must be a JSON array")]
    NotAnArray,

    #[error("Invalid technology profile {name:?}: complexity range [{min}, {max}] must satisfy 1 <= min <= max <= 10")]
    InvalidRange { name: String, min: u8, max: u8 },

    #[error("Technology profile name must not be empty")]
    EmptyName,
}

/// Supplier entry as it appears in the contractors dataset
#[derive(Debug, Deserialize)]
struct CatalogEntry {
    #[serde(rename = "Contractor_Name")]
    contractor_name: Option<String>,
    #[serde(rename = "Factory_Name")]
    factory_name: Option<String>,
    #[serde(rename = "Building_Tech_Type")]
    building_tech_type: Option<String>,
    #[serde(rename = "Tech_Type")]
    tech_type: Option<String>,
    #[serde(rename = "Preferred_Region")]
    preferred_region: Option<String>,
    #[serde(rename = "totalScore")]
    total_score: Option<Value>,
    #[serde(rename = "Alliance_Company_Name")]
    alliance: Option<String>,
    #[serde(rename = "Contact_Person")]
    contact_person: Option<String>,
    #[serde(rename = "Email")]
    email: Option<String>,
    #[serde(rename = "Mobile_Number")]
    mobile_number: Option<Value>,
}

fn first_non_empty(primary: Option<String>, fallback: Option<String>) -> Option<String> {
    primary
        .filter(|s| !s.is_empty())
        .or_else(|| fallback.filter(|s| !s.is_empty()))
}

impl From<CatalogEntry> for SupplierRecord {
    fn from(entry: CatalogEntry) -> Self {
        SupplierRecord {
            name: first_non_empty(entry.contractor_name, entry.factory_name),
            technology: first_non_empty(entry.building_tech_type, entry.tech_type),
            region: entry.preferred_region.unwrap_or_default(),
            // Non-numeric ratings such as "N/A" count as absent
            rating: entry.total_score.as_ref().and_then(Value::as_f64),
            alliance: entry.alliance,
            contact_person: entry.contact_person,
            email: entry.email,
            phone: entry.mobile_number.and_then(|v| match v {
                Value::String(s) => Some(s),
                Value::Number(n) => Some(n.to_string()),
                _ => None,
            }),
        }
    }
}

/// Parse a supplier catalog from JSON text
///
/// Entries that fail to decode are skipped with a warning; only a malformed
/// document as a whole is an error.
pub fn parse_suppliers(json: &str) -> Result<Vec<SupplierRecord>, CatalogError> {
    let root: Value = serde_json::from_str(json)?;
    let Value::Array(entries) = root else {
        return Err(CatalogError::NotAnArray);
    };

    let suppliers = entries
        .into_iter()
        .enumerate()
        .filter_map(|(index, value)| match serde_json::from_value::<CatalogEntry>(value) {
            Ok(entry) => Some(SupplierRecord::from(entry)),
            Err(e) => {
                tracing::warn!("Skipping supplier entry {}: {}", index, e);
                None
            }
        })
        .collect();

    Ok(suppliers)
}

/// Read a supplier catalog file
pub fn read_suppliers<P: AsRef<Path>>(path: P) -> Result<Vec<SupplierRecord>, CatalogError> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.display().to_string(),
        source,
    })?;
    parse_suppliers(&json)
}

/// Load the supplier catalog, degrading to an empty catalog on any failure
pub fn load_suppliers<P: AsRef<Path>>(path: P) -> Vec<SupplierRecord> {
    match read_suppliers(&path) {
        Ok(suppliers) => {
            tracing::info!(
                "Loaded {} suppliers from {}",
                suppliers.len(),
                path.as_ref().display()
            );
            suppliers
        }
        Err(e) => {
            tracing::error!("Supplier catalog unavailable, continuing with none: {}", e);
            Vec::new()
        }
    }
}

/// Build a validated technology profile
pub fn technology_profile(
    name: &str,
    min: u8,
    max: u8,
    aliases: &[String],
) -> Result<TechnologyProfile, CatalogError> {
    if name.trim().is_empty() {
        return Err(CatalogError::EmptyName);
    }

    let range = ComplexityRange::new(min, max).ok_or_else(|| CatalogError::InvalidRange {
        name: name.to_string(),
        min,
        max,
    })?;

    Ok(TechnologyProfile {
        name: name.to_string(),
        complexity_range: range,
        aliases: aliases.to_vec(),
    })
}

/// Built-in table of supported construction technologies
pub fn default_technologies() -> Vec<TechnologyProfile> {
    const TABLE: &[(&str, u8, u8, &[&str])] = &[
        ("Autoclaved Aerated Concrete", 2, 5, &["AAC", "ALC"]),
        ("Precast system", 4, 8, &["Precast Concrete"]),
        ("ICF", 4, 7, &["Insulated Concrete Forms"]),
        ("Modular LGS", 4, 6, &["Light Steel", "Prefabricated Units"]),
        ("Repidwall", 5, 8, &["Rapid Wall"]),
        ("Tunnel Formwork", 6, 9, &["Tunnel Forms"]),
        ("3D panel system (M2)", 4, 7, &["3D Panel"]),
        ("Concrete modular", 7, 10, &["Modular Concrete"]),
        ("Panel Wall System", 5, 8, &["Wall Panel"]),
        ("Post tension", 4, 8, &["Post-tension"]),
        ("Form work system", 3, 6, &["Formwork"]),
        ("Steel Structer", 5, 8, &["Steel Frame", "Steel Structure"]),
        ("ALC", 2, 5, &["Autoclaved Lightweight Concrete"]),
        ("BIM", 5, 9, &["Building Information Modeling"]),
        ("Prefabrication", 4, 8, &["Prefab"]),
    ];

    TABLE
        .iter()
        .filter_map(|&(name, min, max, aliases)| {
            ComplexityRange::new(min, max).map(|range| TechnologyProfile::new(name, range, aliases))
        })
        .collect()
}
