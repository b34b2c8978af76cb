use env_schema::canonical;
use env_serializer::{serialize, CAPABILITY_FLAGS, LINE_ENDING, SECRETS};
use form_state::{FormState, ValidationErrors};

fn leading_lines() -> Vec<String> {
    SECRETS
        .iter()
        .map(|key| format!("{}=\"\"", key))
        .chain(CAPABILITY_FLAGS.iter().map(|key| format!("{}=\"true\"", key)))
        .collect()
}

#[test]
fn test_serialize_is_deterministic() {
    let schema = canonical();
    let mut state = FormState::initialize(schema);
    let mut errors = ValidationErrors::default();
    state.set(schema, &mut errors, "TIMEZONE", "UTC").unwrap();

    let first = serialize(schema, &state);
    let second = serialize(schema, &state);
    assert_eq!(first.as_bytes(), second.as_bytes());
}

#[test]
fn test_fixed_lines_lead_regardless_of_state() {
    let schema = canonical();
    let mut state = FormState::initialize(schema);
    let mut errors = ValidationErrors::default();
    state.set(schema, &mut errors, "DEBUG", "true").unwrap();
    state.set(schema, &mut errors, "SERVER_ID", "").unwrap();
    state.set(schema, &mut errors, "MAX_RETRIES", "7").unwrap();

    let expected = leading_lines();
    for state in [FormState::initialize(schema), state] {
        let output = serialize(schema, &state);
        let head: Vec<&str> = output.split(LINE_ENDING).take(expected.len()).collect();
        assert_eq!(head, expected);
    }
}

#[test]
fn test_one_line_per_field_in_schema_order() {
    let schema = canonical();
    let state = FormState::initialize(schema);
    let output = serialize(schema, &state);

    let lines: Vec<&str> = output.split(LINE_ENDING).collect();
    assert_eq!(lines.len(), leading_lines().len() + schema.len());

    let field_keys: Vec<&str> = lines[leading_lines().len()..]
        .iter()
        .map(|line| line.split('=').next().unwrap())
        .collect();
    let schema_keys: Vec<&str> = schema.iter().map(|f| f.key).collect();
    assert_eq!(field_keys, schema_keys);
}

#[test]
fn test_file_name_fields_get_extensions() {
    let schema = canonical();
    let mut state = FormState::initialize(schema);
    let output = serialize(schema, &state);
    assert!(output.contains("LOG_FILE_NAME=\"bot.log\""));
    assert!(output.contains("BAN_DATABASE_FILE_NAME=\"ban.db\""));
    assert!(output.contains("PDF_CACHE_FILE_NAME=\"pdf_cache.json\""));
    assert!(output.contains("PDF_MONITOR_URL=\"https://division.inot.pro/\""));

    let mut errors = ValidationErrors::default();
    state
        .set(schema, &mut errors, "PDF_CACHE_FILE_NAME", "cache")
        .unwrap();
    let output = serialize(schema, &state);
    assert!(output.contains("PDF_CACHE_FILE_NAME=\"cache.json\""));
}

#[test]
fn test_no_trailing_terminator() {
    let schema = canonical();
    let output = serialize(schema, &FormState::initialize(schema));
    assert!(!output.ends_with(LINE_ENDING));
    assert!(!output.contains("\r\n"));
}
