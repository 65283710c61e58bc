//! CSV export of diagram series.

use std::io::Write;

use crate::DiagramResult;
use crate::axis::Series;

/// `series,x,y` rows, one per point.
pub fn series_csv(series: &[Series]) -> String {
    let mut csv = String::from("series,x,y\n");
    for s in series {
        for p in &s.points {
            csv.push_str(&format!("{},{},{}\n", s.name, p.x, p.y));
        }
    }
    csv
}

/// Write `series` as CSV (see [`series_csv`]).
pub fn write_series_csv<W: Write>(series: &[Series], mut writer: W) -> DiagramResult<()> {
    writer.write_all(series_csv(series).as_bytes())?;
    writer.flush()?;
    Ok(())
}
