use anyhow::{Context, Result};
use serde_json::{Map, Value};
use std::path::Path;
use strum::{EnumMessage, IntoEnumIterator};

use crate::ui::cli::drivers::PromptDriver;
use crate::ui::types::choices::{FieldKind, FieldSpec, PathSpec, UIChoice, specs_for_kind};

const DIM_ITALIC: &str = "\x1b[2m\x1b[3m";
const RESET: &str = "\x1b[0m";

fn kind_label<K>(k: K) -> String
where
    K: Copy + Into<&'static str> + EnumMessage,
{
    let label = k.get_message().unwrap_or_else(|| k.into());
    match k.get_detailed_message() {
        Some(desc) if !desc.is_empty() => format!("{label}  {DIM_ITALIC}{desc}{RESET}"),
        _ => label.to_string(),
    }
}

/// Walks the user through picking a variant of `C` and filling its params.
///
/// Each field's title, help, default and range come from the JSON schema of
/// `C`; nested choices are collected through [`UIChoice::subprompts`].
pub fn prompt_choice<C: UIChoice, D: PromptDriver>(driver: &D) -> Result<C> {
    let kinds: Vec<C::Kind> = C::Kind::iter().collect();
    let labels: Vec<String> = kinds.iter().map(|&k| kind_label(k)).collect();

    let idx = driver.ask_select(C::prompt_label(), C::prompt_help(), &labels)?;
    let choice_kind = *kinds.get(idx).context("selection out of range")?;

    let key: &'static str = choice_kind.into();
    let specs = specs_for_kind(&C::schema(), key)?;
    let defaults = C::default_params(choice_kind);

    let mut params = Map::new();
    for s in specs {
        let init = s
            .default
            .clone()
            .or_else(|| defaults.get(&s.name).cloned())
            .filter(|v| !v.is_null());
        if let Some(val) = prompt_field(driver, &s, init)? {
            params.insert(s.name.clone(), val);
        }
    }

    if let Some(extra) = C::subprompts(driver, choice_kind)? {
        params.extend(extra);
    }
    C::from_parts(choice_kind, Value::Object(params))
}

/// `None` leaves the field out so serde applies its default.
fn prompt_field<D: PromptDriver>(
    driver: &D,
    s: &FieldSpec,
    init: Option<Value>,
) -> Result<Option<Value>> {
    let help = s.description.as_deref().unwrap_or("");

    if let Some(path) = &s.path {
        let def = init.as_ref().and_then(Value::as_str).unwrap_or_default();
        let answer = prompt_path_until_ok(driver, &s.title, help, def, path)?;
        return Ok(Some(Value::String(answer)));
    }

    if s.nullable || (!s.required && init.is_none()) {
        let def_txt = match &init {
            Some(Value::String(txt)) => txt.clone(),
            Some(v) => v.to_string(),
            None => String::new(),
        };
        let answer = driver.ask_string(&s.title, &format!("{help}\n(leave blank for none)"), &def_txt)?;
        let answer = answer.trim();
        if answer.is_empty() {
            return Ok(None);
        }
        return parse_answer(s, answer).map(Some);
    }

    let val = match s.kind {
        FieldKind::Boolean => {
            let def = init.and_then(|v| v.as_bool()).unwrap_or(false);
            Value::Bool(driver.ask_bool(&s.title, help, def)?)
        }
        FieldKind::String => {
            let def = init
                .and_then(|v| v.as_str().map(str::to_string))
                .unwrap_or_default();
            Value::String(driver.ask_string(&s.title, help, &def)?)
        }
        FieldKind::Integer => {
            let def = init.and_then(|v| v.as_u64()).unwrap_or(0);
            Value::from(driver.ask_u64(
                &s.title,
                help,
                def,
                s.min.map(|x| x as u64),
                s.max.map(|x| x as u64),
            )?)
        }
        FieldKind::Number => {
            let def = init.and_then(|v| v.as_f64()).unwrap_or(0.0);
            Value::from(driver.ask_f64(&s.title, help, def, s.min, s.max)?)
        }
    };
    Ok(Some(val))
}

fn parse_answer(s: &FieldSpec, answer: &str) -> Result<Value> {
    Ok(match s.kind {
        FieldKind::Integer => {
            let n: u64 = answer
                .parse()
                .with_context(|| format!("invalid integer for {}", s.title))?;
            Value::from(n)
        }
        FieldKind::Number => {
            let x: f64 = answer
                .parse()
                .with_context(|| format!("invalid number for {}", s.title))?;
            Value::from(x)
        }
        FieldKind::Boolean => {
            let b: bool = answer
                .parse()
                .with_context(|| format!("invalid boolean for {}", s.title))?;
            Value::Bool(b)
        }
        FieldKind::String => Value::String(answer.to_string()),
    })
}

fn validate_path_str(input: &str, spec: &PathSpec) -> Result<(), String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err("Path cannot be empty".into());
    }
    let p = Path::new(trimmed);

    if spec.must_exist && !p.exists() {
        return Err(format!("Path does not exist: {}", p.display()));
    }
    if p.exists() && !p.is_file() {
        return Err("Expected a file path, not a directory".into());
    }
    if !spec.extensions.is_empty() {
        match p.extension().and_then(|e| e.to_str()) {
            Some(ext) if spec.extensions.iter().any(|e| e.eq_ignore_ascii_case(ext)) => {}
            _ => return Err(format!("Expected a .{} file", spec.extensions.join(" / ."))),
        }
    }
    Ok(())
}

fn prompt_path_until_ok<D: PromptDriver>(
    driver: &D,
    title: &str,
    help: &str,
    default: &str,
    spec: &PathSpec,
) -> Result<String> {
    loop {
        let answer = driver.ask_string(title, help, default)?;
        match validate_path_str(&answer, spec) {
            Ok(()) => return Ok(answer.trim().to_string()),
            Err(msg) => eprintln!("✗ {msg}"),
        }
    }
}
