/// Grouping metadata rows into reference/input comparisons
use super::metadata::MetadataRow;
use std::collections::BTreeMap;
use targetscreen_bio::Sequence;
use targetscreen_core::{ScreenerError, ScreenerResult};

/// Rows per comparison id, ids ascending, rows in file order
pub fn group_comparisons(rows: Vec<MetadataRow>) -> BTreeMap<u32, Vec<MetadataRow>> {
    let mut groups: BTreeMap<u32, Vec<MetadataRow>> = BTreeMap::new();
    for row in rows {
        groups.entry(row.comparison).or_default().push(row);
    }
    groups
}

/// A well-formed comparison: the first row is the reference, the second the input
#[derive(Debug, Clone, PartialEq)]
pub struct Comparison {
    pub id: u32,
    pub reference: Sequence,
    pub input: Sequence,
}

impl Comparison {
    pub fn from_rows(id: u32, rows: Vec<MetadataRow>) -> ScreenerResult<Self> {
        let [reference, input]: [MetadataRow; 2] =
            rows.try_into().map_err(|rows: Vec<MetadataRow>| {
                ScreenerError::MalformedPairing {
                    comparison: id,
                    rows: rows.len(),
                }
            })?;

        Ok(Self {
            id,
            reference: Sequence::from_text(reference.region, &reference.sequence),
            input: Sequence::from_text(input.region, &input.sequence),
        })
    }

    /// Output directory name: `pair{id}_{input}_{reference}`
    pub fn pair_name(&self) -> String {
        format!("pair{}_{}_{}", self.id, self.input.id, self.reference.id)
    }

    /// Table name for screening `input` against `reference`
    pub fn table_name(input: &Sequence, reference: &Sequence) -> String {
        format!("input_{}_refseq_{}", input.id, reference.id)
    }
}
