//! Tabular datasets in the iris layout: a header row, then `n_inputs` numeric
//! feature columns followed by `n_outputs` one-hot label columns.

use std::io::Read;
use std::path::Path;

use crate::errors::{NetworkError, Result};
use crate::math::matrix::Matrix;

/// Feature and label matrices with one row per example.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    pub inputs: Matrix,
    pub labels: Matrix,
}

impl Dataset {
    pub fn len(&self) -> usize {
        self.inputs.rows
    }

    pub fn is_empty(&self) -> bool {
        self.inputs.rows == 0
    }

    /// Reads a CSV file; see [`Dataset::from_reader`].
    pub fn load_csv<P: AsRef<Path>>(path: P, n_inputs: usize, n_outputs: usize) -> Result<Dataset> {
        let file = std::fs::File::open(path)?;
        Dataset::from_reader(file, n_inputs, n_outputs)
    }

    /// Parses CSV text whose first row is a header.
    ///
    /// Every record must have exactly `n_inputs + n_outputs` numeric fields.
    pub fn from_reader<R: Read>(reader: R, n_inputs: usize, n_outputs: usize) -> Result<Dataset> {
        if n_inputs == 0 {
            return Err(NetworkError::Data("at least one feature column is required".into()));
        }
        let width = n_inputs + n_outputs;
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut inputs = Vec::new();
        let mut labels = Vec::new();

        for (idx, record) in reader.records().enumerate() {
            let record = record?;
            // Row numbers count the header as row 1.
            let row_num = idx + 2;

            if record.len() != width {
                return Err(NetworkError::Data(format!(
                    "row {row_num}: expected {width} fields, got {}",
                    record.len()
                )));
            }

            let values = record
                .iter()
                .map(|cell| {
                    cell.parse::<f64>().map_err(|_| {
                        NetworkError::Data(format!("row {row_num}: '{cell}' is not a valid number"))
                    })
                })
                .collect::<Result<Vec<f64>>>()?;

            inputs.extend_from_slice(&values[..n_inputs]);
            labels.extend_from_slice(&values[n_inputs..]);
        }

        let rows = inputs.len() / n_inputs;
        log::debug!("loaded {rows} examples ({n_inputs} features, {n_outputs} classes)");

        Ok(Dataset {
            inputs: Matrix::from_flat(rows, n_inputs, inputs)?,
            labels: Matrix::from_flat(rows, n_outputs, labels)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const IRIS_SAMPLE: &str = "\
sepal_length,sepal_width,petal_length,petal_width,setosa,versicolor,virginica
0.305555556,0.583333333,0.118644068,0.041666667,1.0,0.0,0.0
0.666666667,0.458333333,0.627118644,0.583333333,0.0,1.0,0.0
0.944444444,0.75,0.966101695,0.875,0.0,0.0,1.0
";

    #[test]
    fn splits_features_and_labels() {
        let dataset = Dataset::from_reader(IRIS_SAMPLE.as_bytes(), 4, 3).unwrap();

        assert_eq!(dataset.len(), 3);
        assert_eq!(dataset.inputs.shape(), (3, 4));
        assert_eq!(dataset.labels.shape(), (3, 3));
        assert_eq!(dataset.inputs.row(2), &[0.944444444, 0.75, 0.966101695, 0.875]);
        assert_eq!(dataset.labels.row(1), &[0.0, 1.0, 0.0]);
    }

    #[test]
    fn header_only_yields_empty_dataset() {
        let dataset = Dataset::from_reader("a,b,c\n".as_bytes(), 2, 1).unwrap();
        assert!(dataset.is_empty());
        assert_eq!(dataset.inputs.shape(), (0, 2));
    }

    #[test]
    fn rejects_wrong_field_count() {
        let text = "a,b,c\n1,2,3\n4,5\n";
        let err = Dataset::from_reader(text.as_bytes(), 2, 1).unwrap_err();
        assert!(matches!(err, NetworkError::Data(msg) if msg.starts_with("row 3")));
    }

    #[test]
    fn rejects_non_numeric_cell() {
        let text = "a,b,c\n1,two,0\n";
        let err = Dataset::from_reader(text.as_bytes(), 2, 1).unwrap_err();
        assert!(matches!(err, NetworkError::Data(msg) if msg.contains("'two'")));
    }

    #[test]
    fn rejects_zero_feature_columns() {
        let text = "a,b\n0,1\n";
        let err = Dataset::from_reader(text.as_bytes(), 0, 2).unwrap_err();
        assert!(matches!(err, NetworkError::Data(msg) if msg.contains("feature column")));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = Dataset::load_csv("definitely/not/here.csv", 4, 3).unwrap_err();
        assert!(matches!(err, NetworkError::Io(_)));
    }
}
