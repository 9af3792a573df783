use navlog_model::{CellValue, ValueTransform};

use crate::error::TransformError;
use crate::normalization::{canonicalize_timestamp, correct_depth};

/// Applies `transform` to one cell.
///
/// Missing cells stay missing under every transform. For the timestamp and
/// depth transforms a whitespace-only cell also counts as missing.
pub fn apply_transform(
    transform: ValueTransform,
    cell: &CellValue,
) -> Result<CellValue, TransformError> {
    let Some(value) = cell.as_text() else {
        return Ok(CellValue::Missing);
    };
    match transform {
        ValueTransform::Identity => Ok(cell.clone()),
        _ if value.trim().is_empty() => Ok(CellValue::Missing),
        ValueTransform::Timestamp => canonicalize_timestamp(value).map(CellValue::Text),
        ValueTransform::Depth => correct_depth(value).map(CellValue::Text),
    }
}
