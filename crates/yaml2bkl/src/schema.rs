//! Typed view of a makefile description.
//!
//! The YAML document is loosely typed; this module decodes it once into
//! [`Makefile`], so the transform only deals with known shapes. Missing or
//! `null` optional keys decode to "nothing", while values of the wrong shape
//! are reported as [`ErrorKind::Schema`](crate::ErrorKind::Schema) errors
//! carrying the key path of the offending value.

use indexmap::IndexMap;
use serde_yaml::{Mapping, Number, Sequence, Value};
use tracing::debug;

use crate::error::{Error, Result};

/// Root of a makefile description
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Makefile {
    pub include: Option<Include>,
    pub conditions: Vec<Condition>,
    pub variables: IndexMap<String, VariableValue>,
    pub executables: IndexMap<String, Executable>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Include {
    pub file: String,
}

/// A conditional block of variable assignments
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Condition {
    pub cond: String,
    pub set: IndexMap<String, String>,
}

/// Value of a global variable
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum VariableValue {
    /// Plain value, already in canonical string form
    Scalar(String),
    /// Value that only applies when `cond` holds
    Conditional { cond: String, value: String },
}

/// An executable target
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Executable {
    pub template: String,
    pub template_append: String,
    pub condition: String,
    pub sources: Option<Vec<String>>,
    pub headers: Option<Vec<String>>,
    pub libraries: Libraries,
}

/// Libraries an executable links against, by group
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Libraries {
    pub wx: Vec<String>,
    pub sys: Vec<String>,
}

impl Makefile {
    /// Decode the `makefile` key of a loaded document.
    ///
    /// A null document or a missing `makefile` key yields an empty description.
    pub fn from_document(document: &Value) -> Result<Self> {
        let root = match document {
            Value::Null => return Ok(Self::default()),
            other => expect_mapping(other, "document")?,
        };
        let Some(body) = lookup(root, "makefile") else {
            debug!("no makefile key, using an empty description");
            return Ok(Self::default());
        };
        let body = expect_mapping(body, "makefile")?;

        let makefile = Self {
            include: decode_include(body)?,
            conditions: decode_conditions(body)?,
            variables: decode_variables(body)?,
            executables: decode_executables(body)?,
        };
        debug!(
            conditions = makefile.conditions.len(),
            variables = makefile.variables.len(),
            executables = makefile.executables.len(),
            "makefile description decoded"
        );
        Ok(makefile)
    }
}

fn decode_include(body: &Mapping) -> Result<Option<Include>> {
    let Some(include) = lookup(body, "include") else {
        return Ok(None);
    };
    let include = expect_mapping(include, "makefile.include")?;
    lookup(include, "file")
        .map(|file| scalar_string(file, "makefile.include.file"))
        .transpose()
        .map(|file| file.map(|file| Include { file }))
}

fn decode_conditions(body: &Mapping) -> Result<Vec<Condition>> {
    let Some(conditions) = lookup(body, "conditions") else {
        return Ok(Vec::new());
    };
    expect_sequence(conditions, "makefile.conditions")?
        .iter()
        .enumerate()
        .map(|(index, entry)| -> Result<Condition> {
            let path = format!("makefile.conditions[{index}]");
            let entry = expect_mapping(entry, &path)?;
            let cond = required_string(entry, "if", &path)?;
            let set = match lookup(entry, "set") {
                Some(set) => string_map(expect_mapping(set, &format!("{path}.set"))?, &path)?,
                None => IndexMap::new(),
            };
            Ok(Condition { cond, set })
        })
        .collect()
}

fn decode_variables(body: &Mapping) -> Result<IndexMap<String, VariableValue>> {
    let Some(variables) = lookup(body, "variables") else {
        return Ok(IndexMap::new());
    };
    let variables = expect_mapping(variables, "makefile.variables")?;

    let mut decoded = IndexMap::with_capacity(variables.len());
    for (key, value) in variables {
        let name = key_string(key, "makefile.variables")?;
        let path = format!("makefile.variables.{name}");
        let value = match value {
            Value::Mapping(map) if map.contains_key("if") => VariableValue::Conditional {
                cond: required_string(map, "if", &path)?,
                value: optional_string(map, "value", &path)?,
            },
            Value::Mapping(_) => {
                return Err(Error::schema(path, "mapping values need an `if` key"));
            }
            other => VariableValue::Scalar(scalar_string(other, &path)?),
        };
        decoded.insert(name, value);
    }
    Ok(decoded)
}

fn decode_executables(body: &Mapping) -> Result<IndexMap<String, Executable>> {
    let Some(executables) = lookup(body, "executables") else {
        return Ok(IndexMap::new());
    };
    let executables = expect_mapping(executables, "makefile.executables")?;

    let mut decoded = IndexMap::with_capacity(executables.len());
    for (key, entry) in executables {
        let id = key_string(key, "makefile.executables")?;
        let path = format!("makefile.executables.{id}");
        let executable = match entry {
            Value::Null => Executable::default(),
            other => decode_executable(expect_mapping(other, &path)?, &path)?,
        };
        decoded.insert(id, executable);
    }
    Ok(decoded)
}

fn decode_executable(entry: &Mapping, path: &str) -> Result<Executable> {
    let libraries = match lookup(entry, "libraries") {
        Some(libraries) => {
            let libs_path = format!("{path}.libraries");
            let libraries = expect_mapping(libraries, &libs_path)?;
            Libraries {
                wx: string_list(libraries, "wx", &libs_path)?.unwrap_or_default(),
                sys: string_list(libraries, "sys", &libs_path)?.unwrap_or_default(),
            }
        }
        None => Libraries::default(),
    };

    Ok(Executable {
        template: optional_string(entry, "template", path)?,
        template_append: optional_string(entry, "template_append", path)?,
        condition: optional_string(entry, "condition", path)?,
        sources: string_list(entry, "sources", path)?,
        headers: string_list(entry, "headers", path)?,
        libraries,
    })
}

/// Canonical string form of a scalar, or `None` for collections.
///
/// Booleans render as `True`/`False` and null as `None`, which is what the
/// downstream bakefile tooling expects to see in variable values.
pub fn canonical_string(value: &Value) -> Option<String> {
    match value {
        Value::Null => Some("None".to_string()),
        Value::Bool(true) => Some("True".to_string()),
        Value::Bool(false) => Some("False".to_string()),
        Value::Number(n) => Some(format_number(n)),
        Value::String(s) => Some(s.clone()),
        Value::Sequence(_) | Value::Mapping(_) | Value::Tagged(_) => None,
    }
}

fn format_number(n: &Number) -> String {
    match n.as_f64() {
        Some(f) if n.is_f64() => format_float(f),
        _ => n.to_string(),
    }
}

fn format_float(f: f64) -> String {
    if f.is_nan() {
        return "nan".to_string();
    }
    if f.is_infinite() {
        return if f > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    let magnitude = f.abs();
    if magnitude >= 1e16 || (magnitude != 0.0 && magnitude < 1e-4) {
        // 1e+16, 2.5e-05
        let formatted = format!("{f:e}");
        return match formatted.split_once('e') {
            Some((mantissa, exponent)) => {
                let (sign, digits) = match exponent.strip_prefix('-') {
                    Some(digits) => ('-', digits),
                    None => ('+', exponent),
                };
                format!("{mantissa}e{sign}{digits:0>2}")
            }
            None => formatted,
        };
    }
    if f.fract() == 0.0 {
        format!("{f:.1}")
    } else {
        f.to_string()
    }
}

/// Optional keys holding `null` count as absent
fn lookup<'a>(map: &'a Mapping, key: &str) -> Option<&'a Value> {
    map.get(key).filter(|value| !value.is_null())
}

fn expect_mapping<'a>(value: &'a Value, path: &str) -> Result<&'a Mapping> {
    value
        .as_mapping()
        .ok_or_else(|| Error::schema(path, format!("expected a mapping, found {}", kind_of(value))))
}

fn expect_sequence<'a>(value: &'a Value, path: &str) -> Result<&'a Sequence> {
    value.as_sequence().ok_or_else(|| {
        Error::schema(path, format!("expected a sequence, found {}", kind_of(value)))
    })
}

fn scalar_string(value: &Value, path: &str) -> Result<String> {
    canonical_string(value)
        .ok_or_else(|| Error::schema(path, format!("expected a scalar, found {}", kind_of(value))))
}

fn key_string(key: &Value, parent: &str) -> Result<String> {
    canonical_string(key).ok_or_else(|| {
        Error::schema(parent, format!("keys must be scalars, found {}", kind_of(key)))
    })
}

fn required_string(map: &Mapping, key: &str, path: &str) -> Result<String> {
    match lookup(map, key) {
        Some(value) => scalar_string(value, &format!("{path}.{key}")),
        None => Err(Error::schema(path, format!("missing required key `{key}`"))),
    }
}

fn optional_string(map: &Mapping, key: &str, path: &str) -> Result<String> {
    lookup(map, key)
        .map(|value| scalar_string(value, &format!("{path}.{key}")))
        .transpose()
        .map(Option::unwrap_or_default)
}

fn string_list(map: &Mapping, key: &str, path: &str) -> Result<Option<Vec<String>>> {
    let Some(value) = lookup(map, key) else {
        return Ok(None);
    };
    let path = format!("{path}.{key}");
    expect_sequence(value, &path)?
        .iter()
        .enumerate()
        .map(|(index, item)| scalar_string(item, &format!("{path}[{index}]")))
        .collect::<Result<Vec<_>>>()
        .map(Some)
}

fn string_map(map: &Mapping, path: &str) -> Result<IndexMap<String, String>> {
    let path = format!("{path}.set");
    map.iter()
        .map(|(key, value)| -> Result<(String, String)> {
            let name = key_string(key, &path)?;
            let value = scalar_string(value, &format!("{path}.{name}"))?;
            Ok((name, value))
        })
        .collect()
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a sequence",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}
