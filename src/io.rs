//! Plain-text instance reading and tour writing.
//!
//! An instance is a city count on the first line followed by one `x y`
//! coordinate pair per line. City ids follow line order. A tour is written
//! as one city id per line in visiting order.

use std::io::{BufRead, Write};

use tracing::debug;

use crate::error::{Result, TspError};
use crate::models::{City, Tour};

/// Reads an instance.
///
/// Blank lines are skipped. Lines after the last declared city are
/// ignored.
///
/// # Examples
///
/// ```
/// use u_tsp::io::read_cities;
///
/// let text = "3\n0 0\n3 0\n3 4\n";
/// let cities = read_cities(text.as_bytes()).unwrap();
/// assert_eq!(cities.len(), 3);
/// assert!((cities[0].distance_to(&cities[2]) - 5.0).abs() < 1e-10);
/// ```
pub fn read_cities<R: BufRead>(reader: R) -> Result<Vec<City>> {
    let mut lines = reader.lines().enumerate();
    let mut next_line = || -> Result<Option<(usize, String)>> {
        for (number, line) in lines.by_ref() {
            let line = line?;
            if !line.trim().is_empty() {
                return Ok(Some((number + 1, line)));
            }
        }
        Ok(None)
    };

    let Some((number, header)) = next_line()? else {
        return Err(TspError::InvalidInput("missing city count".to_string()));
    };
    let count: usize = header.trim().parse().map_err(|_| {
        TspError::InvalidInput(format!("line {number}: expected a city count, got {header:?}"))
    })?;

    // The header is untrusted; grow past this only as city lines arrive.
    let mut cities = Vec::with_capacity(count.min(1 << 16));
    while cities.len() < count {
        let Some((number, line)) = next_line()? else {
            return Err(TspError::InvalidInput(format!(
                "expected {count} cities, found {}",
                cities.len()
            )));
        };
        let (x, y) = parse_point(&line).ok_or_else(|| {
            TspError::InvalidInput(format!("line {number}: expected `x y`, got {line:?}"))
        })?;
        cities.push(City::new(cities.len(), x, y));
    }

    debug!(cities = cities.len(), "read instance");
    Ok(cities)
}

fn parse_point(line: &str) -> Option<(f64, f64)> {
    let mut fields = line.split_whitespace().map(str::parse::<f64>);
    let x = fields.next()?.ok()?;
    let y = fields.next()?.ok()?;
    if fields.next().is_some() || !x.is_finite() || !y.is_finite() {
        return None;
    }
    Some((x, y))
}

/// Writes `tour` as one city id per line.
pub fn write_tour<W: Write>(tour: &Tour, mut writer: W) -> Result<()> {
    for city in tour.iter() {
        writeln!(writer, "{city}")?;
    }
    writer.flush()?;
    Ok(())
}
