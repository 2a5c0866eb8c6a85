use serde_json::{json, Value};
use std::sync::LazyLock;

pub static CONFIG_SCHEMA: LazyLock<Value> = LazyLock::new(|| {
    json!({
        "$schema": "http://json-schema.org/draft-07/schema#",
        "type": "object",
        "properties": {
            "filter": {
                "type": "object",
                "properties": {
                    "preset": { "type": "string", "enum": ["cjk", "alphanumeric", "non_whitespace"] },
                    "ranges": { "type": "array", "items": { "$ref": "#/$defs/range" }, "minItems": 1 },
                    "pattern": { "type": "string", "minLength": 1 }
                },
                "additionalProperties": false
            },
            "thresholds": {
                "type": "object",
                "properties": {
                    "suspicious": { "type": "number", "minimum": 0, "maximum": 100 },
                    "plagiarized": { "type": "number", "minimum": 0, "maximum": 100 }
                },
                "required": ["suspicious", "plagiarized"]
            },
            "output": {
                "type": "object",
                "properties": {
                    "format": { "type": "string", "enum": ["score", "json", "markdown"] },
                    "include_common": { "type": "boolean" }
                }
            },
            "limits": {
                "type": "object",
                "properties": {
                    "max_file_bytes": { "type": "integer", "minimum": 1 },
                    "max_table_cells": { "type": "integer", "minimum": 1 }
                }
            }
        },
        "additionalProperties": false,
        "$defs": {
            "range": {
                "type": "object",
                "properties": {
                    "start": { "type": "string", "minLength": 1 },
                    "end": { "type": "string", "minLength": 1 }
                },
                "required": ["start", "end"]
            }
        }
    })
});
