//! The canonical column set shipped with the normalizer.
//!
//! New source spellings are added here, appended to the end of the relevant
//! alias list so existing files keep resolving to the same header. New
//! canonical columns are appended to the end of the table; published columns
//! never move.

use navlog_model::{AliasTable, ColumnSpec, Result, ValueTransform};

/// Version of the built-in table, reported in logs and run reports.
pub const BUILTIN_TABLE_VERSION: &str = "3";

/// Canonical column holding per-row labels (or a synthesized row index).
pub const ROW_ID_COLUMN: &str = "Row Name";

type ColumnEntry = (&'static str, &'static [&'static str], ValueTransform);

const BUILTIN_COLUMNS: &[ColumnEntry] = &[
    (
        ROW_ID_COLUMN,
        &["row name", "row", "index"],
        ValueTransform::Identity,
    ),
    (
        "Timestamp",
        &["timestamp", "time", "date"],
        ValueTransform::Timestamp,
    ),
    (
        "Longitude",
        &["longitude", "long", "lon", "dvl_lon", "kalman_lon"],
        ValueTransform::Identity,
    ),
    (
        "Latitude",
        &["latitude", "lat", "dvl_lat", "kalman_lat"],
        ValueTransform::Identity,
    ),
    (
        "Depth",
        &["depth", "paro_depth_m"],
        ValueTransform::Depth,
    ),
    (
        "Conductivity",
        &["conductivity", "ctd_conductivity"],
        ValueTransform::Identity,
    ),
    (
        "PressurePSI",
        &["pressure", "ctd_pressure_psi"],
        ValueTransform::Identity,
    ),
    (
        "SalinityPSU",
        &["salinity", "ctd_salinity_psu"],
        ValueTransform::Identity,
    ),
    (
        "SoundVelocityMS",
        &["sound_velocity", "ctd_sound_velocity_ms"],
        ValueTransform::Identity,
    ),
    (
        "TemperatureC",
        &["temperature", "ctd_temp_c"],
        ValueTransform::Identity,
    ),
    (
        "Heading",
        &["heading", "octans_heading"],
        ValueTransform::Identity,
    ),
    (
        "Pitch",
        &["pitch", "octans_pitch"],
        ValueTransform::Identity,
    ),
    (
        "Roll",
        &["roll", "octans_roll"],
        ValueTransform::Identity,
    ),
    (
        "OxygenUncompensatedConcentrationMicromolar",
        &[
            "oxygenuncompensatedconcentrationmicromolar",
            "oxygen_uncompensated_concentration_micromolar",
        ],
        ValueTransform::Identity,
    ),
    (
        "OxygenUncompensatedSaturationPercent",
        &[
            "oxygenuncompensatedsaturationpercent",
            "oxygen_uncompensated_saturation_percent",
        ],
        ValueTransform::Identity,
    ),
    (
        "SealogEventText",
        &["sealogeventtext", "sealog_event_free_text"],
        ValueTransform::Identity,
    ),
    (
        "SealogEventValue",
        &["sealogeventvalue", "sealog_event_value"],
        ValueTransform::Identity,
    ),
];

/// Builds the built-in alias table.
///
/// Call once at startup and share the result; the table is immutable.
pub fn load_builtin_alias_table() -> Result<AliasTable> {
    let columns = BUILTIN_COLUMNS
        .iter()
        .map(|(name, aliases, transform)| {
            ColumnSpec::new(name, aliases.iter().copied())
                .map(|spec| spec.with_transform(*transform))
        })
        .collect::<Result<Vec<_>>>()?;
    AliasTable::new(BUILTIN_TABLE_VERSION, columns, Some(ROW_ID_COLUMN))
}
