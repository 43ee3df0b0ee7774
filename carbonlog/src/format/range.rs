use super::number::format_with_unit;
use super::FormatOptions;
use crate::{CarbonError, CarbonResult, Quantity};
use serde::{Deserialize, Serialize};

/// Options for [`format_range`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RangeOptions {
    /// Render `5 kg - 5 kg` as `5 kg`
    pub summarize_equal: bool,
    /// Render `1 kg - 2 kg` as `1 - 2 kg`; never applied to currency
    pub summarize_unit: bool,
    #[serde(flatten)]
    pub format: FormatOptions,
}

impl Default for RangeOptions {
    fn default() -> Self {
        Self {
            summarize_equal: true,
            summarize_unit: true,
            format: FormatOptions::default(),
        }
    }
}

/// Format two quantities of the same unit as a single value or a range
///
/// Quantities with different units cannot form a range; that is a caller error.
pub fn format_range(
    from: &Quantity,
    to: &Quantity,
    options: &RangeOptions,
) -> CarbonResult<String> {
    if from.unit != to.unit {
        return Err(CarbonError::IncompatibleUnits {
            left: unit_label(from),
            right: unit_label(to),
        });
    }

    if from.value == to.value && options.summarize_equal {
        return Ok(format_with_unit(from, &options.format, true));
    }

    // "€1 - 2" would read as one euro to two of something else
    let elide_unit = options.summarize_unit && !from.is_currency();
    Ok(format!(
        "{} - {}",
        format_with_unit(from, &options.format, !elide_unit),
        format_with_unit(to, &options.format, true)
    ))
}

fn unit_label(quantity: &Quantity) -> String {
    quantity
        .unit
        .as_ref()
        .map(|u| u.symbol.clone())
        .unwrap_or_else(|| "(none)".to_string())
}
