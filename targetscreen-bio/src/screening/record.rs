use serde::{Deserialize, Serialize, Serializer};
use std::cmp::Ordering;

/// One retained candidate alignment, the persisted unit of output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScreeningRecord {
    /// 1-based start of the candidate in its input sequence
    #[serde(rename = "Position")]
    pub position: usize,
    #[serde(rename = "Sequence")]
    pub sequence: String,
    #[serde(rename = "Length")]
    pub length: usize,
    #[serde(rename = "Matched")]
    pub matched: usize,
    #[serde(rename = "Conservation")]
    pub conservation: f64,
    #[serde(rename = "Score")]
    pub score: f64,
    /// Written as an integer whenever it is a whole number
    #[serde(rename = "Score Max", serialize_with = "serialize_score_max")]
    pub score_max: f64,
    #[serde(rename = "Score-wise Conservation")]
    pub scorewise_conservation: f64,
}

impl ScreeningRecord {
    /// Best first: score-wise conservation, then conservation, then input order
    pub fn rank_cmp(&self, other: &Self) -> Ordering {
        other
            .scorewise_conservation
            .total_cmp(&self.scorewise_conservation)
            .then_with(|| other.conservation.total_cmp(&self.conservation))
            .then_with(|| self.length.cmp(&other.length))
            .then_with(|| self.position.cmp(&other.position))
    }
}

fn serialize_score_max<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if value.fract() == 0.0 && value.abs() < i64::MAX as f64 {
        serializer.serialize_i64(*value as i64)
    } else {
        serializer.serialize_f64(*value)
    }
}

/// Records of one screening run plus its diagnostic counters
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScreeningReport {
    pub input_id: String,
    pub reference_id: String,
    /// In candidate order: length, then start position
    pub records: Vec<ScreeningRecord>,
    pub candidates_considered: usize,
    pub records_retained: usize,
    pub windows_rejected: usize,
}

impl ScreeningReport {
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Records sorted best first, leaving the report order untouched
    pub fn ranked(&self) -> Vec<&ScreeningRecord> {
        let mut ranked: Vec<&ScreeningRecord> = self.records.iter().collect();
        ranked.sort_by(|a, b| a.rank_cmp(b));
        ranked
    }

    /// Retained fraction of candidates considered
    pub fn retention_rate(&self) -> f64 {
        if self.candidates_considered == 0 {
            0.0
        } else {
            self.records_retained as f64 / self.candidates_considered as f64
        }
    }
}
