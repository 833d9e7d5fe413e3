//! JSON schema describing the analysis reply.
//!
//! Types use lowercase JSON Schema names; provider adapters convert to their
//! own dialect.

use serde_json::{json, Value};

/// Top-level fields the reply must contain.
pub const REQUIRED_FIELDS: [&str; 6] = [
    "contractType",
    "parties",
    "jurisdiction",
    "compositeRiskScore",
    "summary",
    "clauses",
];

/// Fields every clause must contain.
pub const REQUIRED_CLAUSE_FIELDS: [&str; 6] = [
    "id",
    "originalText",
    "explanation",
    "riskLevel",
    "category",
    "isUnfavorable",
];

pub fn analysis_response_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "contractType": { "type": "string" },
            "parties": { "type": "array", "items": { "type": "string" } },
            "jurisdiction": { "type": "string" },
            "financialAmount": { "type": "string" },
            "effectiveDate": { "type": "string" },
            "terminationDate": { "type": "string" },
            "compositeRiskScore": { "type": "number" },
            "summary": { "type": "string" },
            "clauses": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "id": { "type": "string" },
                        "originalText": { "type": "string" },
                        "explanation": { "type": "string" },
                        "riskLevel": { "type": "string", "description": "Low, Medium, or High" },
                        "category": { "type": "string" },
                        "suggestion": { "type": "string" },
                        "isUnfavorable": { "type": "boolean" }
                    },
                    "required": REQUIRED_CLAUSE_FIELDS
                }
            },
            "missingCrucialTerms": { "type": "array", "items": { "type": "string" } },
            "suggestedRenegotiationPoints": { "type": "array", "items": { "type": "string" } }
        },
        "required": REQUIRED_FIELDS
    })
}
