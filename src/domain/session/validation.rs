//! Request validation for starting a planning session.
//!
//! A small set of composable per-field validators plus one cross-field
//! date check. Validation is a pure function of the raw JSON payload:
//! it either produces a typed [`CreateSessionInput`] or a map from wire
//! field names to the messages that apply to them.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use serde::Serialize;
use serde_json::Value;

// Wire field names of the create-session request.
const USUARIO_ID: &str = "usuarioId";
const INTERESES: &str = "intereses";
const FECHA_INICIO: &str = "fechaInicio";
const FECHA_FIN: &str = "fechaFin";
const TIPO_EXPERIENCIA: &str = "tipoExperiencia";
const NUMERO_VIAJEROS: &str = "numeroViajeros";
const RESTRICCIONES: &str = "restricciones";

// Client-facing messages.
const MSG_REQUIRED: &str = "Este campo es obligatorio";
const MSG_NOT_A_STRING: &str = "Debe ser una cadena de texto";
const MSG_EMPTY_STRING: &str = "Debe contener al menos un carácter";
const MSG_NOT_A_LIST: &str = "Debe ser una lista";
const MSG_NO_INTERESTS: &str = "Debe proporcionar al menos un interés";
const MSG_INVALID_DATE: &str = "Debe ser una fecha válida";
const MSG_TRAVELERS_REQUIRED: &str = "Debe indicar el número de viajeros";
const MSG_NOT_A_NUMBER: &str = "Debe ser un número";
const MSG_NOT_AN_INTEGER: &str = "Debe ser un número entero";
const MSG_TOO_FEW_TRAVELERS: &str = "Debe haber al menos un viajero";
const MSG_TOO_MANY_TRAVELERS: &str = "El número de viajeros no puede exceder 99";
const MSG_END_BEFORE_START: &str =
    "La fecha de fin debe ser posterior o igual a la fecha de inicio";

/// Maximum number of travelers on a single session.
const MAX_TRAVELERS: u32 = 99;

/// Validated input for starting a planning session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateSessionInput {
    pub user_id: Option<String>,
    pub interests: Vec<String>,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub experience_type: String,
    pub traveler_count: u32,
    pub restrictions: Vec<String>,
}

/// Field-attributed validation failures.
///
/// Keys are wire field names; each field keeps its messages in the
/// order the rules were evaluated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(BTreeMap<String, Vec<String>>);

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Messages recorded for a field; empty when the field passed.
    pub fn messages(&self, field: &str) -> &[String] {
        self.0.get(field).map(Vec::as_slice).unwrap_or(&[])
    }

    fn push(&mut self, field: &str, message: &str) {
        self.0
            .entry(field.to_string())
            .or_default()
            .push(message.to_string());
    }
}

/// Validates a raw create-session payload.
///
/// All per-field rules run independently so every offending field shows
/// up in the result. The end-date rule runs whenever both dates parsed,
/// and its failure is attributed to the `fechaFin` field.
pub fn validate_create_session(payload: &Value) -> Result<CreateSessionInput, ValidationErrors> {
    let empty = serde_json::Map::new();
    let body = payload.as_object().unwrap_or(&empty);
    let mut errors = ValidationErrors::default();

    let user_id = optional_trimmed_string(body.get(USUARIO_ID), USUARIO_ID, &mut errors);
    let interests = interest_list(body.get(INTERESES), &mut errors);
    let start_date = required_date(body.get(FECHA_INICIO), FECHA_INICIO, &mut errors);
    let end_date = required_date(body.get(FECHA_FIN), FECHA_FIN, &mut errors);
    let experience_type =
        required_trimmed_string(body.get(TIPO_EXPERIENCIA), TIPO_EXPERIENCIA, &mut errors);
    let traveler_count = traveler_count(body.get(NUMERO_VIAJEROS), &mut errors);
    let restrictions = restriction_list(body.get(RESTRICCIONES), &mut errors);

    if let (Some(start), Some(end)) = (start_date, end_date) {
        if end < start {
            errors.push(FECHA_FIN, MSG_END_BEFORE_START);
        }
    }

    match (
        interests,
        start_date,
        end_date,
        experience_type,
        traveler_count,
        restrictions,
    ) {
        (
            Some(interests),
            Some(start_date),
            Some(end_date),
            Some(experience_type),
            Some(traveler_count),
            Some(restrictions),
        ) if errors.is_empty() => Ok(CreateSessionInput {
            user_id,
            interests,
            start_date,
            end_date,
            experience_type,
            traveler_count,
            restrictions,
        }),
        _ => Err(errors),
    }
}

fn optional_trimmed_string(
    value: Option<&Value>,
    field: &str,
    errors: &mut ValidationErrors,
) -> Option<String> {
    match value {
        None | Some(Value::Null) => None,
        Some(value) => trimmed_string(value, field, errors),
    }
}

fn required_trimmed_string(
    value: Option<&Value>,
    field: &str,
    errors: &mut ValidationErrors,
) -> Option<String> {
    match value {
        None | Some(Value::Null) => {
            errors.push(field, MSG_REQUIRED);
            None
        }
        Some(value) => trimmed_string(value, field, errors),
    }
}

fn trimmed_string(value: &Value, field: &str, errors: &mut ValidationErrors) -> Option<String> {
    let Some(raw) = value.as_str() else {
        errors.push(field, MSG_NOT_A_STRING);
        return None;
    };
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        errors.push(field, MSG_EMPTY_STRING);
        return None;
    }
    Some(trimmed.to_string())
}

fn interest_list(value: Option<&Value>, errors: &mut ValidationErrors) -> Option<Vec<String>> {
    match value {
        None | Some(Value::Null) => {
            errors.push(INTERESES, MSG_REQUIRED);
            None
        }
        Some(value) => {
            let items = string_list(value, INTERESES, errors)?;
            if items.is_empty() {
                errors.push(INTERESES, MSG_NO_INTERESTS);
                return None;
            }
            Some(items)
        }
    }
}

fn restriction_list(value: Option<&Value>, errors: &mut ValidationErrors) -> Option<Vec<String>> {
    match value {
        None | Some(Value::Null) => Some(Vec::new()),
        Some(value) => string_list(value, RESTRICCIONES, errors),
    }
}

/// Coerces a JSON array into non-empty trimmed strings, preserving order.
/// Element failures are attributed to the array's field.
fn string_list(value: &Value, field: &str, errors: &mut ValidationErrors) -> Option<Vec<String>> {
    let Some(raw) = value.as_array() else {
        errors.push(field, MSG_NOT_A_LIST);
        return None;
    };
    let mut items = Vec::with_capacity(raw.len());
    let mut valid = true;
    for element in raw {
        match trimmed_string(element, field, errors) {
            Some(item) => items.push(item),
            None => valid = false,
        }
    }
    valid.then_some(items)
}

fn required_date(
    value: Option<&Value>,
    field: &str,
    errors: &mut ValidationErrors,
) -> Option<DateTime<Utc>> {
    match value {
        None | Some(Value::Null) => {
            errors.push(field, MSG_REQUIRED);
            None
        }
        Some(value) => match parse_date(value) {
            Some(date) => Some(date),
            None => {
                errors.push(field, MSG_INVALID_DATE);
                None
            }
        },
    }
}

/// Accepts RFC 3339 timestamps, calendar dates (`YYYY-MM-DD`, taken as
/// midnight UTC), and epoch-millisecond numbers.
fn parse_date(value: &Value) -> Option<DateTime<Utc>> {
    match value {
        Value::String(raw) => {
            if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
                return Some(parsed.with_timezone(&Utc));
            }
            let date = raw.parse::<NaiveDate>().ok()?;
            date.and_hms_opt(0, 0, 0)
                .map(|dt| Utc.from_utc_datetime(&dt))
        }
        Value::Number(raw) => {
            let millis = raw.as_i64()?;
            Utc.timestamp_millis_opt(millis).single()
        }
        _ => None,
    }
}

fn traveler_count(value: Option<&Value>, errors: &mut ValidationErrors) -> Option<u32> {
    let number = match value {
        None | Some(Value::Null) => {
            errors.push(NUMERO_VIAJEROS, MSG_TRAVELERS_REQUIRED);
            return None;
        }
        Some(Value::Number(raw)) => raw.as_f64(),
        Some(Value::String(raw)) => raw.trim().parse::<f64>().ok(),
        Some(_) => None,
    };
    let Some(number) = number else {
        errors.push(NUMERO_VIAJEROS, MSG_NOT_A_NUMBER);
        return None;
    };
    // Each failing rule reports its own message.
    let mut valid = true;
    if number.fract() != 0.0 {
        errors.push(NUMERO_VIAJEROS, MSG_NOT_AN_INTEGER);
        valid = false;
    }
    if number < 1.0 {
        errors.push(NUMERO_VIAJEROS, MSG_TOO_FEW_TRAVELERS);
        valid = false;
    }
    if number > f64::from(MAX_TRAVELERS) {
        errors.push(NUMERO_VIAJEROS, MSG_TOO_MANY_TRAVELERS);
        valid = false;
    }
    valid.then_some(number as u32)
}
