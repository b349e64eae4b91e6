use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use flate2::read::GzDecoder;
use log::debug;

use crate::error::{Error, Result};
use crate::tensor::Tensor;

/// A labeled example: class index plus a fixed-length feature column vector.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    label: usize,
    features: Tensor,
}

impl Sample {
    pub fn new(label: usize, features: Vec<f32>) -> Self {
        Self { label, features: Tensor::column(features) }
    }

    pub fn label(&self) -> usize {
        self.label
    }

    pub fn features(&self) -> &Tensor {
        &self.features
    }
}

/// Reads samples from a headerless CSV file, one sample per line:
/// `label,feature_0,feature_1,...`. Paths ending in `.gz` are decompressed
/// on the fly.
pub fn load_samples<P: AsRef<Path>>(path: P) -> Result<Vec<Sample>> {
    let path = path.as_ref();
    debug!("loading samples from {}", path.display());

    let file = File::open(path)?;
    let reader: Box<dyn Read> = if path.extension().is_some_and(|ext| ext == "gz") {
        Box::new(GzDecoder::new(file))
    } else {
        Box::new(file)
    };

    let samples = read_samples(BufReader::new(reader))?;
    debug!("loaded {} samples from {}", samples.len(), path.display());
    Ok(samples)
}

/// Parses CSV samples from any buffered reader. Blank lines are skipped and
/// every sample must have as many features as the first one.
pub fn read_samples<R: BufRead>(reader: R) -> Result<Vec<Sample>> {
    let mut samples: Vec<Sample> = Vec::new();
    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let line_no = i + 1;
        let sample = parse_line(line_no, &line)?;

        if let Some(first) = samples.first() {
            let expected = first.features.rows();
            if sample.features.rows() != expected {
                return Err(Error::Parse {
                    line: line_no,
                    message: format!("expected {} features, found {}", expected, sample.features.rows()),
                });
            }
        }
        samples.push(sample);
    }
    Ok(samples)
}

/// Parses one `label,feature,...` line; `line` is only used in error messages.
pub fn parse_line(line: usize, text: &str) -> Result<Sample> {
    let mut fields = text.trim().split(',').map(str::trim);

    let label = fields
        .next()
        .filter(|f| !f.is_empty())
        .ok_or_else(|| Error::Parse { line, message: "missing label".to_owned() })?;
    let label = label.parse::<usize>().map_err(|e| Error::Parse {
        line,
        message: format!("invalid label {label:?}: {e}"),
    })?;

    let features = fields
        .enumerate()
        .map(|(col, field)| {
            field.parse::<i32>().map(|v| v as f32).map_err(|e| Error::Parse {
                line,
                message: format!("invalid feature {col} {field:?}: {e}"),
            })
        })
        .collect::<Result<Vec<f32>>>()?;

    if features.is_empty() {
        return Err(Error::Parse { line, message: "sample has no features".to_owned() });
    }

    Ok(Sample::new(label, features))
}

/// Divides every feature by `max`, e.g. 255 for 8-bit pixel intensities.
/// `max` must be positive.
pub fn normalize(samples: &mut [Sample], max: f32) {
    debug_assert!(max > 0.0, "normalize: max must be positive, got {max}");
    for sample in samples {
        sample.features = sample.features.map(|x| x / max);
    }
}
