//! Scenario payload loading.
//!
//! The scenario collaborator delivers one JSON document per scenario:
//! `metadata.metrics` maps each metric uid to its descriptor and
//! `candidates` lists the scored options. A candidate is either
//! `{"id": ..., "values": {uid: number}}` or a flat `{uid: number}` object.

use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use tradeoff_core::{Candidate, CandidateId, CandidateStore, Direction, MetricDescriptor, MetricSet};

use crate::error::ScenarioError;

#[derive(Debug, Deserialize)]
struct ScenarioPayload {
    metadata: MetadataPayload,
    candidates: Vec<CandidatePayload>,
}

#[derive(Debug, Deserialize)]
struct MetadataPayload {
    metrics: BTreeMap<String, MetricPayload>,
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
enum MetricType {
    #[default]
    Quantitative,
    Qualitative,
}

#[derive(Debug, Deserialize)]
struct MetricPayload {
    name: Option<String>,
    #[serde(rename = "type", default)]
    metric_type: MetricType,
    #[serde(rename = "higherIsBetter", alias = "higher_is_better", default = "default_true")]
    higher_is_better: bool,
    range_min: Option<f64>,
    range_max: Option<f64>,
    decimals: Option<u32>,
    #[serde(default)]
    options: Vec<String>,
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum CandidatePayload {
    Named {
        id: Option<serde_json::Value>,
        values: BTreeMap<String, f64>,
    },
    Flat(BTreeMap<String, f64>),
}

impl CandidatePayload {
    fn into_candidate(self, idx: usize) -> Candidate {
        let id = CandidateId(idx);
        let (label, values) = match self {
            CandidatePayload::Named { id: label, values } => {
                let label = match label {
                    Some(serde_json::Value::String(s)) => s,
                    Some(other) => other.to_string(),
                    None => idx.to_string(),
                };
                (label, values)
            }
            CandidatePayload::Flat(values) => (idx.to_string(), values),
        };
        values
            .into_iter()
            .fold(Candidate::new(id, label), |c, (uid, v)| c.with_value(uid, v))
    }
}

fn descriptor(
    uid: &str,
    payload: MetricPayload,
    candidates: &[Candidate],
) -> Result<MetricDescriptor, ScenarioError> {
    let name = payload.name.unwrap_or_else(|| uid.to_string());
    let direction = Direction::from_higher_is_better(payload.higher_is_better);

    let mut descriptor = match payload.metric_type {
        MetricType::Qualitative => {
            if payload.options.is_empty() {
                return Err(ScenarioError::Invalid(format!(
                    "qualitative metric {uid} has no options"
                )));
            }
            MetricDescriptor::qualitative(uid, name, payload.options)
        }
        MetricType::Quantitative => {
            // A missing range edge falls back to the observed values.
            let observed = || candidates.iter().filter_map(|c| c.get(uid));
            let min = payload
                .range_min
                .or_else(|| observed().reduce(f64::min))
                .ok_or_else(|| ScenarioError::Invalid(format!("metric {uid} has no range and no values")))?;
            let max = payload
                .range_max
                .or_else(|| observed().reduce(f64::max))
                .ok_or_else(|| ScenarioError::Invalid(format!("metric {uid} has no range and no values")))?;
            MetricDescriptor::quantitative(uid, name, min, max)
        }
    }
    .with_direction(direction);

    if let Some(decimals) = payload.decimals {
        descriptor = descriptor.with_decimals(decimals);
    }
    Ok(descriptor)
}

/// Parses a scenario document into a validated candidate store.
///
/// # Errors
///
/// Fails on malformed JSON, descriptors that cannot be completed, or any
/// validation error raised by [`CandidateStore::new`].
///
/// # Example
///
/// ```
/// let store = tradeoff::load_scenario(r#"{
///     "metadata": { "metrics": {
///         "fpr": { "name": "FPR", "higherIsBetter": false, "range_min": 0, "range_max": 1 }
///     } },
///     "candidates": [ { "fpr": 0.1 }, { "fpr": 0.3 } ]
/// }"#).unwrap();
///
/// assert_eq!(store.len(), 2);
/// assert!(!store.metric("fpr").unwrap().direction.higher_is_better());
/// ```
pub fn load_scenario(json: &str) -> Result<CandidateStore, ScenarioError> {
    let payload: ScenarioPayload = serde_json::from_str(json)?;
    build_store(payload)
}

/// Reads and parses a scenario document.
pub fn load_scenario_reader(reader: impl Read) -> Result<CandidateStore, ScenarioError> {
    let payload: ScenarioPayload = serde_json::from_reader(reader)?;
    build_store(payload)
}

/// Reads and parses a scenario file.
pub fn load_scenario_file(path: impl AsRef<Path>) -> Result<CandidateStore, ScenarioError> {
    let file = std::fs::File::open(path)?;
    load_scenario_reader(std::io::BufReader::new(file))
}

fn build_store(payload: ScenarioPayload) -> Result<CandidateStore, ScenarioError> {
    let candidates: Vec<Candidate> = payload
        .candidates
        .into_iter()
        .enumerate()
        .map(|(idx, c)| c.into_candidate(idx))
        .collect();

    let mut metrics = MetricSet::new();
    for (uid, metric) in payload.metadata.metrics {
        metrics.insert(descriptor(&uid, metric, &candidates)?);
    }

    Ok(CandidateStore::new(metrics, candidates)?)
}
