use tracing::debug;

use crate::university::UniversityError;
use crate::university::dataset::UniversityRecord;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EstimateRatios {
    pub masters: f64,
    pub doctorates: f64,
}

fn mean(values: impl Iterator<Item = f64>) -> Option<f64> {
    let (sum, n) = values.fold((0.0, 0usize), |(s, n), v| (s + v, n + 1));
    (n > 0).then(|| sum / n as f64)
}

/// Average master and doctorate shares of the postgraduate total, taken
/// over records whose master count is known.
pub fn known_ratios(records: &[UniversityRecord]) -> Result<EstimateRatios, UniversityError> {
    let known = || {
        records
            .iter()
            .filter(|r| r.masters.is_some() && r.postgraduates > 0)
    };
    let masters = mean(known().filter_map(|r| {
        r.masters
            .map(|m| m as f64 / r.postgraduates as f64)
    }));
    let doctorates = mean(known().filter_map(|r| {
        r.doctorates
            .map(|d| d as f64 / r.postgraduates as f64)
    }));
    match (masters, doctorates) {
        (Some(masters), Some(doctorates)) => Ok(EstimateRatios {
            masters,
            doctorates,
        }),
        _ => Err(UniversityError::NoKnownRatios),
    }
}

/// Fills master and doctorate counts for records missing the master count,
/// splitting the postgraduate total by the known average shares.
///
/// Returns the number of records filled.
pub fn estimate_missing(records: &mut [UniversityRecord]) -> Result<usize, UniversityError> {
    if records.iter().all(|r| r.masters.is_some()) {
        return Ok(0);
    }
    let ratios = known_ratios(records)?;
    debug!(
        "estimating with master share {:.4} and doctorate share {:.4}",
        ratios.masters, ratios.doctorates
    );
    let mut filled = 0usize;
    for r in records.iter_mut().filter(|r| r.masters.is_none()) {
        let total = r.postgraduates as f64;
        r.masters = Some((total * ratios.masters).floor() as u32);
        r.doctorates = Some((total * ratios.doctorates).floor() as u32);
        filled += 1;
    }
    Ok(filled)
}
