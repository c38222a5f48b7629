use anyhow::{Context, Result, anyhow};
use schemars::Schema;
use serde_json::{Map, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    String,
    Integer,
    Number,
    Boolean,
}

/// One promptable field of a choice's `params` object.
#[derive(Debug, Clone)]
pub struct FieldSpec {
    pub name: String,
    pub title: String,
    pub description: Option<String>,
    pub required: bool,
    pub nullable: bool,
    pub kind: FieldKind,
    pub default: Option<Value>,
    pub min: Option<f64>,
    pub max: Option<f64>,
    /// Set for `"format": "path"` fields.
    pub path: Option<PathSpec>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathSpec {
    pub must_exist: bool,
    pub extensions: Vec<String>,
}

/// Field specs of the `params` branch whose `type` tag equals `kind_key`.
///
/// Fields the schema skips (nested choices filled by subprompts) and fields
/// with no scalar type are left out.
pub fn specs_for_kind(root: &Schema, kind_key: &str) -> Result<Vec<FieldSpec>> {
    let root_obj = root.as_object().context("root schema is not an object")?;

    let alts = root_obj
        .get("oneOf")
        .or_else(|| root_obj.get("anyOf"))
        .and_then(Value::as_array)
        .context("missing oneOf/anyOf")?;

    let branch = alts
        .iter()
        .filter_map(Value::as_object)
        .filter_map(|b| b.get("properties").and_then(Value::as_object))
        .find(|props| discriminant_matches(props, kind_key))
        .ok_or_else(|| anyhow!("no branch found for type={kind_key}"))?;

    let Some(params_obj) = branch
        .get("params")
        .and_then(Value::as_object)
        .and_then(|o| resolve_ref_obj(root_obj, o))
    else {
        return Ok(vec![]);
    };

    let Some(params_props) = params_obj.get("properties").and_then(Value::as_object) else {
        return Ok(vec![]);
    };

    let required: Vec<&str> = params_obj
        .get("required")
        .and_then(Value::as_array)
        .map(|a| a.iter().filter_map(Value::as_str).collect())
        .unwrap_or_default();

    let mut out = Vec::new();
    for (name, field_schema) in params_props {
        let mut fs_obj = field_schema
            .as_object()
            .context("field schema not object")?;

        // Metadata may sit beside the $ref, so read it before resolving.
        let outer = fs_obj;
        if fs_obj.get("$ref").is_some() {
            fs_obj = resolve_ref_obj(root_obj, fs_obj)
                .ok_or_else(|| anyhow!("failed to resolve field $ref for '{name}'"))?;
        }
        let lookup = |key: &str| outer.get(key).or_else(|| fs_obj.get(key));

        let Some((kind, nullable)) = detect_field_kind(fs_obj.get("type")) else {
            continue;
        };

        let path = (lookup("format").and_then(Value::as_str) == Some("path")).then(|| PathSpec {
            must_exist: lookup("x-must-exist")
                .and_then(Value::as_bool)
                .unwrap_or(false),
            extensions: lookup("x-extensions")
                .and_then(Value::as_array)
                .map(|a| a.iter().filter_map(Value::as_str).map(str::to_string).collect())
                .unwrap_or_default(),
        });

        out.push(FieldSpec {
            name: name.clone(),
            title: lookup("title")
                .and_then(Value::as_str)
                .unwrap_or(name)
                .to_string(),
            description: lookup("description")
                .and_then(Value::as_str)
                .map(str::to_string),
            required: required.contains(&name.as_str()),
            nullable,
            kind,
            default: lookup("default").cloned(),
            min: fs_obj
                .get("minimum")
                .or_else(|| fs_obj.get("exclusiveMinimum"))
                .and_then(Value::as_f64),
            max: fs_obj
                .get("maximum")
                .or_else(|| fs_obj.get("exclusiveMaximum"))
                .and_then(Value::as_f64),
            path,
        });
    }

    Ok(out)
}

fn discriminant_matches(props: &Map<String, Value>, kind_key: &str) -> bool {
    let Some(tobj) = props.get("type").and_then(Value::as_object) else {
        return false;
    };

    if tobj.get("const").and_then(Value::as_str) == Some(kind_key) {
        return true;
    }
    matches!(
        tobj.get("enum").and_then(Value::as_array).map(Vec::as_slice),
        Some([only]) if only.as_str() == Some(kind_key)
    )
}

/// Resolve a local `$ref` like `#/$defs/CsvParameters` against the root
/// object. Objects without a `$ref` resolve to themselves.
fn resolve_ref_obj<'a>(
    root_obj: &'a Map<String, Value>,
    obj: &'a Map<String, Value>,
) -> Option<&'a Map<String, Value>> {
    match obj.get("$ref") {
        Some(Value::String(r)) => {
            let path = r.strip_prefix("#/")?;
            let mut cur: &Map<String, Value> = root_obj;
            for raw_seg in path.split('/') {
                // JSON Pointer unescape (~1 => /, ~0 => ~)
                let seg = raw_seg.replace("~1", "/").replace("~0", "~");
                cur = cur.get(&seg)?.as_object()?;
            }
            Some(cur)
        }
        _ => Some(obj),
    }
}

/// Scalar kind of a field, and whether `null` is also accepted.
fn detect_field_kind(ty: Option<&Value>) -> Option<(FieldKind, bool)> {
    fn scalar(s: &str) -> Option<FieldKind> {
        match s {
            "string" => Some(FieldKind::String),
            "integer" => Some(FieldKind::Integer),
            "number" => Some(FieldKind::Number),
            "boolean" => Some(FieldKind::Boolean),
            _ => None,
        }
    }

    match ty {
        Some(Value::String(s)) => scalar(s).map(|k| (k, false)),
        Some(Value::Array(arr)) => {
            // Option<T> shows up as ["T", "null"]
            let names: Vec<&str> = arr.iter().filter_map(Value::as_str).collect();
            let kind = names.iter().find_map(|s| scalar(s))?;
            Some((kind, names.contains(&"null")))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn schema(v: Value) -> Schema {
        Schema::try_from(v).unwrap()
    }

    fn sample() -> Schema {
        schema(json!({
            "oneOf": [
                {
                    "properties": {
                        "type": { "const": "csv-file" },
                        "params": { "$ref": "#/$defs/CsvParameters" }
                    }
                },
                {
                    "properties": {
                        "type": { "enum": ["bare"] }
                    }
                }
            ],
            "$defs": {
                "CsvParameters": {
                    "type": "object",
                    "properties": {
                        "path": {
                            "type": "string",
                            "title": "CSV Path",
                            "format": "path",
                            "x-must-exist": true,
                            "x-extensions": ["csv"]
                        },
                        "limit": { "type": ["integer", "null"], "minimum": 1 },
                        "format": { "$ref": "#/$defs/Format", "default": "text" },
                        "nested": { "type": "object" }
                    },
                    "required": ["path"]
                },
                "Format": { "type": "string", "enum": ["text", "json"] }
            }
        }))
    }

    #[test]
    fn resolves_branch_and_fields() {
        let specs = specs_for_kind(&sample(), "csv-file").unwrap();
        let names: Vec<&str> = specs.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["path", "limit", "format"]);

        let path = &specs[0];
        assert_eq!(path.title, "CSV Path");
        assert!(path.required);
        assert_eq!(
            path.path,
            Some(PathSpec {
                must_exist: true,
                extensions: vec!["csv".into()],
            })
        );

        let limit = &specs[1];
        assert_eq!(limit.kind, FieldKind::Integer);
        assert!(limit.nullable);
        assert!(!limit.required);
        assert_eq!(limit.min, Some(1.0));
        assert_eq!(limit.title, "limit");
    }

    #[test]
    fn ref_field_keeps_sibling_default() {
        let specs = specs_for_kind(&sample(), "csv-file").unwrap();
        let format = specs.iter().find(|s| s.name == "format").unwrap();
        assert_eq!(format.kind, FieldKind::String);
        assert_eq!(format.default, Some(json!("text")));
        assert!(format.path.is_none());
    }

    #[test]
    fn branch_without_params_has_no_fields() {
        assert!(specs_for_kind(&sample(), "bare").unwrap().is_empty());
    }

    #[test]
    fn unknown_kind_is_an_error() {
        assert!(specs_for_kind(&sample(), "sea-generator").is_err());
    }
}
