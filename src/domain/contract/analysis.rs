//! ContractAnalysis - the structured result of one analysis call.
//!
//! The generation service is an untrusted boundary. [`ContractAnalysis::from_model_output`]
//! checks every required field's presence and type before anything is built;
//! a single violation rejects the whole reply.

use std::collections::HashSet;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::domain::foundation::{RiskLevel, RiskScore, ValidationError};

use super::Clause;

/// Risk analysis of a single contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractAnalysis {
    pub contract_type: String,
    pub parties: Vec<String>,
    pub jurisdiction: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub financial_amount: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub effective_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub termination_date: Option<String>,
    pub composite_risk_score: RiskScore,
    pub summary: String,
    pub clauses: Vec<Clause>,
    pub missing_crucial_terms: Vec<String>,
    pub suggested_renegotiation_points: Vec<String>,
}

impl ContractAnalysis {
    /// Parses and validates the raw text returned by the generation service.
    ///
    /// A surrounding Markdown code fence is tolerated.
    pub fn from_model_output(raw: &str) -> Result<Self, ValidationError> {
        let json = extract_json_object(raw).ok_or_else(|| {
            ValidationError::invalid_format("response", "no JSON object found in reply")
        })?;
        let value: Value = serde_json::from_str(json).map_err(|e| {
            ValidationError::invalid_format("response", format!("malformed JSON: {}", e))
        })?;
        Self::from_value(&value)
    }

    /// Validates an already-parsed JSON value.
    pub fn from_value(value: &Value) -> Result<Self, ValidationError> {
        let root = Fields::object(value, "response")?;

        let score = root.required("compositeRiskScore")?;
        let score = score.as_f64().ok_or_else(|| {
            ValidationError::invalid_format(root.path("compositeRiskScore"), "expected a number")
        })?;

        let clause_values = root.required_array("clauses")?;
        let mut clauses = Vec::with_capacity(clause_values.len());
        for (index, clause) in clause_values.iter().enumerate() {
            clauses.push(parse_clause(clause, index)?);
        }
        disambiguate_clause_ids(&mut clauses);

        Ok(Self {
            contract_type: root.required_str("contractType")?,
            parties: root.required_str_list("parties")?,
            jurisdiction: root.required_str("jurisdiction")?,
            financial_amount: root.optional_str("financialAmount")?,
            effective_date: root.optional_str("effectiveDate")?,
            termination_date: root.optional_str("terminationDate")?,
            composite_risk_score: RiskScore::from_reported(score)?,
            summary: root.required_str("summary")?,
            clauses,
            missing_crucial_terms: root.optional_str_list("missingCrucialTerms")?,
            suggested_renegotiation_points: root
                .optional_str_list("suggestedRenegotiationPoints")?,
        })
    }

    /// Number of clauses flagged as unfavorable.
    pub fn unfavorable_count(&self) -> usize {
        self.clauses.iter().filter(|c| c.is_unfavorable).count()
    }

    /// Number of clauses at the given risk level.
    pub fn count_at(&self, level: RiskLevel) -> usize {
        self.clauses.iter().filter(|c| c.risk_level == level).count()
    }
}

fn parse_clause(value: &Value, index: usize) -> Result<Clause, ValidationError> {
    let fields = Fields::object(value, &format!("clauses[{}]", index))?;
    let risk_label = fields.required_str("riskLevel")?;
    let risk_level = risk_label.parse::<RiskLevel>().map_err(|_| {
        ValidationError::invalid_format(
            fields.path("riskLevel"),
            format!("expected Low, Medium or High, got '{}'", risk_label),
        )
    })?;

    Ok(Clause {
        id: fields.required_str("id")?,
        original_text: fields.required_str("originalText")?,
        explanation: fields.required_str("explanation")?,
        risk_level,
        category: fields.required_str("category")?,
        suggestion: fields.optional_str("suggestion")?,
        is_unfavorable: fields.required_bool("isUnfavorable")?,
    })
}

/// Keeps clause ids unique within the analysis by suffixing repeats (`c1`, `c1-2`, ...).
fn disambiguate_clause_ids(clauses: &mut [Clause]) {
    let mut seen: HashSet<String> = HashSet::with_capacity(clauses.len());
    for clause in clauses.iter_mut() {
        if seen.insert(clause.id.clone()) {
            continue;
        }
        let mut n = 2;
        let mut candidate = format!("{}-{}", clause.id, n);
        while seen.contains(&candidate) {
            n += 1;
            candidate = format!("{}-{}", clause.id, n);
        }
        tracing::warn!(original = %clause.id, renamed = %candidate, "duplicate clause id in model output");
        clause.id = candidate.clone();
        seen.insert(candidate);
    }
}

/// Finds the JSON object in a reply, unwrapping a ```json fence when present.
fn extract_json_object(raw: &str) -> Option<&str> {
    let trimmed = raw.trim();
    let body = match trimmed.strip_prefix("```") {
        Some(rest) => {
            let rest = rest.strip_prefix("json").unwrap_or(rest);
            rest.rsplit_once("```").map(|(inner, _)| inner).unwrap_or(rest)
        }
        None => trimmed,
    };
    let start = body.find('{')?;
    let end = body.rfind('}')?;
    (end >= start).then(|| &body[start..=end])
}

/// Typed accessors over one JSON object, reporting violations with a field path.
struct Fields<'a> {
    map: &'a Map<String, Value>,
    prefix: String,
}

impl<'a> Fields<'a> {
    fn object(value: &'a Value, prefix: &str) -> Result<Self, ValidationError> {
        let map = value
            .as_object()
            .ok_or_else(|| ValidationError::invalid_format(prefix, "expected an object"))?;
        Ok(Self {
            map,
            prefix: prefix.to_string(),
        })
    }

    fn path(&self, key: &str) -> String {
        if self.prefix == "response" {
            key.to_string()
        } else {
            format!("{}.{}", self.prefix, key)
        }
    }

    /// Present and not null.
    fn required(&self, key: &str) -> Result<&'a Value, ValidationError> {
        match self.map.get(key) {
            Some(Value::Null) | None => Err(ValidationError::missing_field(self.path(key))),
            Some(v) => Ok(v),
        }
    }

    fn optional(&self, key: &str) -> Option<&'a Value> {
        self.map.get(key).filter(|v| !v.is_null())
    }

    fn required_str(&self, key: &str) -> Result<String, ValidationError> {
        self.required(key)?
            .as_str()
            .map(String::from)
            .ok_or_else(|| ValidationError::invalid_format(self.path(key), "expected a string"))
    }

    fn optional_str(&self, key: &str) -> Result<Option<String>, ValidationError> {
        match self.optional(key) {
            None => Ok(None),
            Some(v) => v
                .as_str()
                .map(|s| Some(s.to_string()))
                .ok_or_else(|| ValidationError::invalid_format(self.path(key), "expected a string")),
        }
    }

    fn required_bool(&self, key: &str) -> Result<bool, ValidationError> {
        self.required(key)?
            .as_bool()
            .ok_or_else(|| ValidationError::invalid_format(self.path(key), "expected a boolean"))
    }

    fn required_array(&self, key: &str) -> Result<&'a Vec<Value>, ValidationError> {
        self.required(key)?
            .as_array()
            .ok_or_else(|| ValidationError::invalid_format(self.path(key), "expected an array"))
    }

    fn required_str_list(&self, key: &str) -> Result<Vec<String>, ValidationError> {
        let items = self.required_array(key)?;
        self.string_items(key, items)
    }

    fn optional_str_list(&self, key: &str) -> Result<Vec<String>, ValidationError> {
        match self.optional(key) {
            None => Ok(Vec::new()),
            Some(v) => {
                let items = v.as_array().ok_or_else(|| {
                    ValidationError::invalid_format(self.path(key), "expected an array")
                })?;
                self.string_items(key, items)
            }
        }
    }

    fn string_items(&self, key: &str, items: &[Value]) -> Result<Vec<String>, ValidationError> {
        items
            .iter()
            .enumerate()
            .map(|(i, item)| {
                item.as_str().map(String::from).ok_or_else(|| {
                    ValidationError::invalid_format(
                        format!("{}[{}]", self.path(key), i),
                        "expected a string",
                    )
                })
            })
            .collect()
    }
}
