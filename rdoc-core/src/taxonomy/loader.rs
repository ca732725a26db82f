//! One-shot validation of the raw taxonomy document.
//!
//! The source is `{ domain: { construct: { molecules?: [string], ... } } }`.
//! Validation happens here, once, so the match path can trust the typed
//! records instead of probing key presence at runtime. With serde_json's
//! `preserve_order` feature the resulting matrix keeps document order for
//! domains and constructs.

use serde_json::Value;
use tracing::{info, warn};

use super::matrix::{ConstructEntry, DomainEntry, TaxonomyMatrix};
use super::record::ConstructRecord;
use crate::errors::LoadError;

pub(super) fn validate(value: Value) -> Result<TaxonomyMatrix, LoadError> {
    let root = match value {
        Value::Object(map) => map,
        other => {
            return Err(LoadError::shape(
                "$",
                format!("expected an object of domains, got {}", type_name(&other)),
            ));
        }
    };

    let mut domains = Vec::with_capacity(root.len());
    for (domain_name, constructs_value) in root {
        let constructs_map = match constructs_value {
            Value::Object(map) => map,
            other => {
                return Err(LoadError::shape(
                    format!("$.{domain_name}"),
                    format!("expected an object of constructs, got {}", type_name(&other)),
                ));
            }
        };

        let mut constructs = Vec::with_capacity(constructs_map.len());
        for (construct_name, record_value) in constructs_map {
            let record = validate_record(&domain_name, &construct_name, record_value)?;
            constructs.push(ConstructEntry {
                name: construct_name,
                record,
            });
        }
        domains.push(DomainEntry {
            name: domain_name,
            constructs,
        });
    }

    let matrix = TaxonomyMatrix::from_domains(domains);
    info!(
        domains = matrix.domain_count(),
        constructs = matrix.construct_count(),
        "taxonomy matrix loaded"
    );
    Ok(matrix)
}

fn validate_record(
    domain: &str,
    construct: &str,
    value: Value,
) -> Result<ConstructRecord, LoadError> {
    let map = match value {
        Value::Object(map) => map,
        other => {
            return Err(LoadError::shape(
                format!("$.{domain}.{construct}"),
                format!("expected an evidence record, got {}", type_name(&other)),
            ));
        }
    };

    let mut record = ConstructRecord::default();
    for (key, field_value) in map {
        let slot = match key.as_str() {
            "molecules" => &mut record.molecules,
            "cells" => &mut record.cells,
            "circuits" => &mut record.circuits,
            "behavior" => &mut record.behavior,
            "paradigms" => &mut record.paradigms,
            "self_report" => &mut record.self_report,
            _ => {
                warn!(domain, construct, key = %key, "ignoring unknown evidence field");
                continue;
            }
        };
        let path = format!("$.{domain}.{construct}.{key}");
        *slot = Some(string_array(&path, field_value)?);
    }
    Ok(record)
}

fn string_array(path: &str, value: Value) -> Result<Vec<String>, LoadError> {
    let items = match value {
        Value::Array(items) => items,
        other => {
            return Err(LoadError::shape(
                path,
                format!("expected an array of strings, got {}", type_name(&other)),
            ));
        }
    };

    let mut strings = Vec::with_capacity(items.len());
    for (i, item) in items.into_iter().enumerate() {
        match item {
            Value::String(s) => strings.push(s),
            other => {
                return Err(LoadError::shape(
                    format!("{path}[{i}]"),
                    format!("expected a string, got {}", type_name(&other)),
                ));
            }
        }
    }
    Ok(strings)
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
