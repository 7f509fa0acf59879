use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use std::io::{Read, Write};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use sitegrid::Coordinate;

use crate::error::ModelError;
use crate::objective::{Objective, SitePair};

// ---------- Exchange (wire) types: flat lists, serde-friendly ----------

#[derive(Serialize, Deserialize)]
struct VariableRecord {
    site: Coordinate,
    bias: f64,
}

#[derive(Serialize, Deserialize)]
struct InteractionRecord {
    u: Coordinate,
    v: Coordinate,
    bias: f64,
}

#[derive(Serialize, Deserialize)]
struct ObjectiveRecord {
    variables: Vec<VariableRecord>,
    interactions: Vec<InteractionRecord>,
    #[serde(default)]
    offset: f64,
}

impl From<&Objective> for ObjectiveRecord {
    fn from(objective: &Objective) -> Self {
        ObjectiveRecord {
            variables: objective.linear().iter()
                .map(|(&site, &bias)| VariableRecord { site, bias })
                .collect(),
            interactions: objective.quadratic().iter()
                .map(|(pair, &bias)| InteractionRecord { u: pair.lo(), v: pair.hi(), bias })
                .collect(),
            offset: objective.offset(),
        }
    }
}

impl TryFrom<ObjectiveRecord> for Objective {
    type Error = ModelError;

    fn try_from(record: ObjectiveRecord) -> Result<Self, ModelError> {
        let mut linear = BTreeMap::new();
        for VariableRecord { site, bias } in record.variables {
            if linear.insert(site, bias).is_some() {
                return Err(ModelError::MalformedObjective(format!("variable {site} is listed twice")));
            }
        }

        let mut quadratic = BTreeMap::new();
        for InteractionRecord { u, v, bias } in record.interactions {
            let pair = SitePair::new(u, v)
                .ok_or_else(|| ModelError::MalformedObjective(format!("self-interaction on {u}")))?;
            match quadratic.entry(pair) {
                Entry::Vacant(slot) => { slot.insert(bias); }
                Entry::Occupied(_) => {
                    return Err(ModelError::MalformedObjective(format!("interaction {pair} is listed twice")));
                }
            }
        }

        Objective::from_parts(linear, quadratic, record.offset)
    }
}

impl Objective {
    /// Write as JSON: sorted `variables`, sorted `interactions`, and `offset`.
    pub fn write_json(&self, writer: impl Write) -> Result<()> {
        serde_json::to_writer_pretty(writer, &ObjectiveRecord::from(self))
            .context("failed to serialize objective")
    }

    /// Read JSON written by [`Objective::write_json`], re-checking every invariant.
    pub fn read_json(reader: impl Read) -> Result<Self> {
        let record: ObjectiveRecord = serde_json::from_reader(reader)
            .context("failed to parse objective JSON")?;
        Ok(Objective::try_from(record)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(col: u32, row: u32) -> Coordinate { Coordinate::new(col, row) }

    #[test]
    fn written_entries_are_sorted_pairs() {
        let linear = BTreeMap::from([(c(1, 0), -1.0), (c(0, 2), 0.5)]);
        let quadratic = BTreeMap::from([(SitePair::new(c(1, 0), c(0, 2)).unwrap(), 2.0)]);
        let objective = Objective::from_parts(linear, quadratic, 0.0).unwrap();

        let mut buffer = Vec::new();
        objective.write_json(&mut buffer).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();

        assert_eq!(value["variables"][0]["site"], serde_json::json!([0, 2]));
        assert_eq!(value["interactions"][0]["u"], serde_json::json!([0, 2]));
        assert_eq!(value["interactions"][0]["v"], serde_json::json!([1, 0]));
        assert_eq!(value["offset"], serde_json::json!(0.0));

        assert_eq!(Objective::read_json(buffer.as_slice()).unwrap(), objective);
    }

    #[test]
    fn rejects_self_interaction() {
        let json = r#"{"variables":[{"site":[0,0],"bias":1.0}],
                       "interactions":[{"u":[0,0],"v":[0,0],"bias":1.0}]}"#;
        let err = Objective::read_json(json.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("self-interaction"));
    }

    #[test]
    fn rejects_mirrored_duplicate() {
        let json = r#"{"variables":[{"site":[0,0],"bias":1.0},{"site":[1,1],"bias":1.0}],
                       "interactions":[{"u":[0,0],"v":[1,1],"bias":1.0},{"u":[1,1],"v":[0,0],"bias":2.0}]}"#;
        let err = Objective::read_json(json.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("listed twice"));
    }

    #[test]
    fn rejects_interaction_on_unknown_site() {
        let json = r#"{"variables":[{"site":[0,0],"bias":1.0}],
                       "interactions":[{"u":[0,0],"v":[2,2],"bias":1.0}]}"#;
        let err = Objective::read_json(json.as_bytes()).unwrap_err();
        assert!(err.downcast_ref::<ModelError>().is_some());
    }
}
