use anyhow::anyhow;
use rust_xlsxwriter::{Color, Format, FormatPattern, Workbook};
use std::str::FromStr;

use crate::libs::segment::Segment;

pub const HEADER: [&str; 6] = [
    "Segment Sequence",
    "Length",
    "GC Content (%)",
    "Tm (°C)",
    "Overlap Sequence",
    "Overlap Length",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Tsv,
    Csv,
    Xlsx,
}

impl ExportFormat {
    pub fn from_path(output: &str) -> Self {
        let lower = output.to_ascii_lowercase();
        if lower.ends_with(".xlsx") {
            ExportFormat::Xlsx
        } else if lower.ends_with(".csv") {
            ExportFormat::Csv
        } else {
            ExportFormat::Tsv
        }
    }
}

impl FromStr for ExportFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "tsv" => Ok(ExportFormat::Tsv),
            "csv" => Ok(ExportFormat::Csv),
            "xlsx" | "excel" => Ok(ExportFormat::Xlsx),
            _ => Err(anyhow!("Unknown output format: {}", s)),
        }
    }
}

fn segment_text(seg: &Segment, highlight: bool) -> String {
    if highlight {
        seg.highlighted()
    } else {
        seg.sequence_str()
    }
}

/// One row per segment, tab or comma separated
pub fn write_delimited(
    writer: Box<dyn std::io::Write>,
    segments: &[Segment],
    delimiter: u8,
    highlight: bool,
) -> anyhow::Result<()> {
    let mut wtr = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(writer);

    wtr.write_record(HEADER)?;
    for seg in segments {
        wtr.write_record([
            segment_text(seg, highlight),
            seg.length.to_string(),
            format!("{:.2}", seg.gc),
            format!("{:.2}", seg.tm),
            seg.overlap_str(),
            seg.overlap_length.to_string(),
        ])?;
    }
    wtr.flush()?;

    Ok(())
}

/// Writes a workbook; segment cells that contain their overlap get a red fill
pub fn write_xlsx(output: &str, segments: &[Segment], highlight: bool) -> anyhow::Result<()> {
    if output == "stdout" {
        return Err(anyhow!("Cannot write xlsx to stdout"));
    }

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    let red_fill = Format::new()
        .set_background_color(Color::RGB(0xFF9999))
        .set_pattern(FormatPattern::Solid);

    for (col, title) in HEADER.iter().enumerate() {
        worksheet.write_string(0, col as u16, *title)?;
    }

    for (idx, seg) in segments.iter().enumerate() {
        let row = (idx + 1) as u32;
        let text = segment_text(seg, highlight);
        let overlap = seg.overlap_str();

        if !overlap.is_empty() && text.contains(&overlap) {
            worksheet.write_string_with_format(row, 0, &text, &red_fill)?;
        } else {
            worksheet.write_string(row, 0, &text)?;
        }
        worksheet.write_number(row, 1, seg.length as f64)?;
        worksheet.write_number(row, 2, seg.gc)?;
        worksheet.write_number(row, 3, seg.tm)?;
        worksheet.write_string(row, 4, &overlap)?;
        worksheet.write_number(row, 5, seg.overlap_length as f64)?;
    }

    workbook.save(output)?;
    Ok(())
}

/// Dispatches on `format`; delimited formats go through [`crate::writer`]
pub fn export(
    output: &str,
    format: ExportFormat,
    segments: &[Segment],
    highlight: bool,
) -> anyhow::Result<()> {
    match format {
        ExportFormat::Tsv => write_delimited(crate::writer(output)?, segments, b'\t', highlight),
        ExportFormat::Csv => write_delimited(crate::writer(output)?, segments, b',', highlight),
        ExportFormat::Xlsx => write_xlsx(output, segments, highlight),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn segments() -> Vec<Segment> {
        vec![
            Segment {
                start: 0,
                sequence: b"ATGCATGCAT".to_vec(),
                length: 10,
                gc: 40.0,
                tm: 28.0,
                overlap: b"GCAT".to_vec(),
                overlap_length: 4,
            },
            Segment {
                start: 6,
                sequence: b"GCATGGCC".to_vec(),
                length: 8,
                gc: 75.0,
                tm: 28.0,
                overlap: b"GGCC".to_vec(),
                overlap_length: 4,
            },
        ]
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(ExportFormat::from_path("out.xlsx"), ExportFormat::Xlsx);
        assert_eq!(ExportFormat::from_path("OUT.CSV"), ExportFormat::Csv);
        assert_eq!(ExportFormat::from_path("out.tsv"), ExportFormat::Tsv);
        assert_eq!(ExportFormat::from_path("stdout"), ExportFormat::Tsv);
        assert_eq!("excel".parse::<ExportFormat>().unwrap(), ExportFormat::Xlsx);
        assert!("json".parse::<ExportFormat>().is_err());
    }

    #[test]
    fn test_write_csv() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.csv");
        let output = path.to_str().unwrap();
        export(output, ExportFormat::from_path(output), &segments(), true).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(
            lines[0],
            "Segment Sequence,Length,GC Content (%),Tm (°C),Overlap Sequence,Overlap Length"
        );
        assert_eq!(lines[1], "ATGCAT[GCAT],10,40.00,28.00,GCAT,4");
        assert_eq!(lines[2], "GCAT[GGCC],8,75.00,28.00,GGCC,4");
    }

    #[test]
    fn test_write_tsv_plain() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.tsv");
        let output = path.to_str().unwrap();
        export(output, ExportFormat::Tsv, &segments(), false).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("Segment Sequence\tLength\t"));
        assert!(content.contains("ATGCATGCAT\t10\t40.00\t28.00\tGCAT\t4\n"));
    }

    #[test]
    fn test_write_xlsx() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.xlsx");
        let output = path.to_str().unwrap();
        export(output, ExportFormat::Xlsx, &segments(), true).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        // xlsx is a zip container
        assert_eq!(&bytes[..2], b"PK");
    }

    #[test]
    fn test_xlsx_stdout() {
        assert!(write_xlsx("stdout", &segments(), true).is_err());
    }
}
