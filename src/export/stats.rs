//! Semicolon-delimited table of per-generation statistics.

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use csv::{ReaderBuilder, WriterBuilder};

use super::ExportError;
use crate::schema::GenerationStat;

/// Field delimiter of the statistics table.
pub const DELIMITER: u8 = b';';

/// Write the table: a `generation;best_distance;best_fitness;average_fitness`
/// header, then one row per generation.
pub fn write_stats<W: Write>(writer: W, stats: &[GenerationStat]) -> Result<(), ExportError> {
    let mut writer = WriterBuilder::new()
        .delimiter(DELIMITER)
        .has_headers(true)
        .from_writer(writer);
    for stat in stats {
        writer.serialize(stat)?;
    }
    writer.flush()?;
    Ok(())
}

/// Write the table to a file, replacing any existing content.
pub fn write_stats_file<P: AsRef<Path>>(
    path: P,
    stats: &[GenerationStat],
) -> Result<(), ExportError> {
    let file = File::create(path)?;
    write_stats(file, stats)
}

/// Parse a table written by [`write_stats`].
pub fn read_stats<R: Read>(reader: R) -> Result<Vec<GenerationStat>, ExportError> {
    let mut reader = ReaderBuilder::new()
        .delimiter(DELIMITER)
        .has_headers(true)
        .from_reader(reader);
    let mut stats = Vec::new();
    for row in reader.deserialize() {
        stats.push(row?);
    }
    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn sample() -> Vec<GenerationStat> {
        vec![
            GenerationStat {
                generation: 0,
                best_distance: 2500.0,
                best_fitness: 0.0004,
                average_fitness: 0.0003,
            },
            GenerationStat {
                generation: 1,
                best_distance: 2000.0,
                best_fitness: 0.0005,
                average_fitness: 0.00045,
            },
        ]
    }

    #[test]
    fn test_table_layout() {
        let mut buffer = Vec::new();
        write_stats(&mut buffer, &sample()).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(
            lines[0],
            "generation;best_distance;best_fitness;average_fitness"
        );
        let fields: Vec<f64> = lines[1].split(';').map(|f| f.parse().unwrap()).collect();
        assert_eq!(fields, vec![0.0, 2500.0, 0.0004, 0.0003]);
        assert_eq!(lines[2].split(';').count(), 4);
    }

    #[test]
    fn test_file_is_readable() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("results.csv");

        write_stats_file(&path, &sample()).unwrap();
        let parsed = read_stats(File::open(&path).unwrap()).unwrap();
        assert_eq!(parsed, sample());
    }

    #[test]
    fn test_read_rejects_malformed_rows() {
        let text = "generation;best_distance;best_fitness;average_fitness\nzero;1;2;3\n";
        assert!(matches!(
            read_stats(text.as_bytes()),
            Err(ExportError::Csv(_))
        ));
    }
}
