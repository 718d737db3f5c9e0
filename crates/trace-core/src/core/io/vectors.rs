use std::fs::File;
use std::io::Read;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum VectorReadError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("CSV parsing error: {source}")]
    Csv {
        #[from]
        source: csv::Error,
    },
    #[error("Invalid number '{field}' on line {line}, column {column}")]
    InvalidNumber {
        line: u64,
        column: usize,
        field: String,
    },
    #[error("Line {line} holds no values")]
    EmptyRow { line: u64 },
}

/// Field separator used by a vector file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Delimiter {
    #[default]
    Comma,
    Tab,
    /// One or more spaces, as written by `numpy.savetxt` and similar tools.
    Whitespace,
}

impl Delimiter {
    /// Guesses the delimiter from a file extension (`.csv` → comma, `.tsv` → tab,
    /// anything else → whitespace).
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .as_deref()
        {
            Some("csv") => Delimiter::Comma,
            Some("tsv") => Delimiter::Tab,
            _ => Delimiter::Whitespace,
        }
    }

    fn byte(self) -> u8 {
        match self {
            Delimiter::Comma => b',',
            Delimiter::Tab => b'\t',
            Delimiter::Whitespace => b' ',
        }
    }
}

/// Reads one feature vector per row from a headerless delimited file.
///
/// Lines starting with `#` are skipped. Rows may have different lengths; the layout of each
/// row is validated later, when it is wrapped into a feature vector.
pub fn read_vectors_from_path(path: &Path) -> Result<Vec<Vec<f64>>, VectorReadError> {
    let file = File::open(path).map_err(|e| VectorReadError::Io {
        path: path.to_string_lossy().to_string(),
        source: e,
    })?;
    read_vectors(file, Delimiter::from_path(path))
}

pub fn read_vectors(reader: impl Read, delimiter: Delimiter) -> Result<Vec<Vec<f64>>, VectorReadError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .comment(Some(b'#'))
        .trim(csv::Trim::All)
        .delimiter(delimiter.byte())
        .from_reader(reader);

    let mut vectors = Vec::new();
    for result in csv_reader.records() {
        let record = result?;
        let line = record.position().map(|p| p.line()).unwrap_or_default();

        let fields = record
            .iter()
            .enumerate()
            .filter(|(_, field)| delimiter != Delimiter::Whitespace || !field.is_empty());

        let mut row = Vec::with_capacity(record.len());
        for (column, field) in fields {
            let value = field
                .parse::<f64>()
                .map_err(|_| VectorReadError::InvalidNumber {
                    line,
                    column: column + 1,
                    field: field.to_string(),
                })?;
            row.push(value);
        }

        if row.is_empty() {
            return Err(VectorReadError::EmptyRow { line });
        }
        vectors.push(row);
    }

    Ok(vectors)
}
