use anyhow::{anyhow, Context};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use std::str::FromStr;

/// ```
/// use std::io::BufRead;
/// let reader = gibsembler::reader("tests/gibson/pUC_mini.fa").unwrap();
/// let mut lines = vec![];
/// for line in reader.lines() {
///     lines.push(line);
/// }
/// assert_eq!(lines.len(), 3);
/// ```
pub fn reader(input: &str) -> anyhow::Result<Box<dyn BufRead>> {
    let reader: Box<dyn BufRead> = if input == "stdin" {
        Box::new(BufReader::new(std::io::stdin()))
    } else {
        let path = Path::new(input);
        let file = std::fs::File::open(path)
            .with_context(|| format!("could not open {}", path.display()))?;

        if path.extension() == Some(std::ffi::OsStr::new("gz")) {
            Box::new(BufReader::new(flate2::read::MultiGzDecoder::new(file)))
        } else {
            Box::new(BufReader::new(file))
        }
    };

    Ok(reader)
}

pub fn writer(output: &str) -> anyhow::Result<Box<dyn Write>> {
    let writer: Box<dyn Write> = if output == "stdout" {
        Box::new(BufWriter::new(std::io::stdout()))
    } else {
        let file = std::fs::File::create(output)
            .with_context(|| format!("could not create {}", output))?;
        Box::new(BufWriter::new(file))
    };

    Ok(writer)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeqFormat {
    Fasta,
    GenBank,
}

impl SeqFormat {
    /// GenBank for `.gb`, `.gbk` and `.genbank`, with or without a trailing `.gz`
    pub fn from_path(input: &str) -> Self {
        if input == "stdin" {
            return SeqFormat::Fasta;
        }
        let lower = input.to_ascii_lowercase();
        let stem = lower.strip_suffix(".gz").unwrap_or(&lower);
        let ext = Path::new(stem)
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("");
        match ext {
            "gb" | "gbk" | "genbank" => SeqFormat::GenBank,
            _ => SeqFormat::Fasta,
        }
    }
}

impl FromStr for SeqFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "fasta" | "fa" => Ok(SeqFormat::Fasta),
            "genbank" | "gb" | "gbk" => Ok(SeqFormat::GenBank),
            _ => Err(anyhow!("Unknown sequence format: {}", s)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeqRecord {
    pub name: String,
    /// Upper-cased symbols
    pub seq: Vec<u8>,
    /// GenBank topology; `None` for FASTA
    pub circular: Option<bool>,
}

pub fn read_records(input: &str, format: SeqFormat) -> anyhow::Result<Vec<SeqRecord>> {
    let reader = reader(input)?;
    let mut records = vec![];

    match format {
        SeqFormat::Fasta => {
            let mut fa_in = noodles_fasta::io::Reader::new(reader);
            for result in fa_in.records() {
                let record = result.with_context(|| format!("malformed FASTA in {}", input))?;
                let name = String::from_utf8(record.name().into())?;
                let seq = record.sequence().as_ref().to_ascii_uppercase();
                records.push(SeqRecord {
                    name,
                    seq,
                    circular: None,
                });
            }
        }
        SeqFormat::GenBank => {
            for result in gb_io::reader::SeqReader::new(reader) {
                let gb = result.map_err(|e| anyhow!("malformed GenBank in {}: {}", input, e))?;
                let circular = matches!(gb.topology, gb_io::seq::Topology::Circular);
                records.push(SeqRecord {
                    name: gb.name.clone().unwrap_or_default(),
                    seq: gb.seq.to_ascii_uppercase(),
                    circular: Some(circular),
                });
            }
        }
    }

    Ok(records)
}

/// Reads a file that must contain exactly one record
pub fn read_single(input: &str, format: SeqFormat) -> anyhow::Result<SeqRecord> {
    let mut records = read_records(input, format)?;
    if records.len() != 1 {
        return Err(anyhow!(
            "{} contains {} records, expected exactly one",
            input,
            records.len()
        ));
    }
    let record = records.remove(0);

    if record.circular == Some(false) {
        log::warn!(
            "{} is annotated as linear; segmenting it as a circular molecule",
            record.name
        );
    }

    Ok(record)
}
