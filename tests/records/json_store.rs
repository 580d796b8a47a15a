use logograde::records::{
    EvaluationRecord, JsonFileBackend, NewEvaluation, RecordBackend, RecordStore, STORAGE_KEY,
};
use tempfile::TempDir;

fn new_eval(name: &str, grade: &str) -> NewEvaluation {
    NewEvaluation {
        student_name: name.to_string(),
        student_parallel: "4to A".to_string(),
        grade: grade.to_string(),
        analysis_text: format!("Análisis de {name}.\nCALIFICACIÓN FINAL: {grade}"),
    }
}

fn open(dir: &TempDir) -> RecordStore {
    RecordStore::new(Box::new(JsonFileBackend::new(dir.path())))
}

#[test]
fn records_survive_reopening_the_store() {
    let tmp = TempDir::new().unwrap();

    let first = open(&tmp).create(new_eval("Ana Paz", "90/100")).unwrap();
    let second = open(&tmp).create(new_eval("Luis Mamani", "75/100")).unwrap();

    let listed = open(&tmp).list();
    assert_eq!(listed, vec![second, first]);
}

#[test]
fn persisted_file_uses_fixed_key_and_camel_case_fields() {
    let tmp = TempDir::new().unwrap();
    let store = open(&tmp);
    let record = store.create(new_eval("Ana Paz", "90/100")).unwrap();

    let path = tmp.path().join(format!("{STORAGE_KEY}.json"));
    let raw = std::fs::read_to_string(&path).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();

    let entry = &value.as_array().unwrap()[0];
    assert_eq!(entry["id"], record.id.as_str());
    assert_eq!(entry["studentName"], "Ana Paz");
    assert_eq!(entry["studentParallel"], "4to A");
    assert_eq!(entry["timestamp"], record.timestamp);
    assert_eq!(entry["grade"], "90/100");
    assert!(entry["analysisText"].as_str().unwrap().contains("Análisis"));
}

#[test]
fn existing_browser_export_is_readable() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(
        tmp.path().join("logo_evaluations_db.json"),
        r#"[{"id":"5b1f0c3e-8d4a-4c52-9a55-3c1f2f0e9b11","studentName":"Rosa Choque","studentParallel":"4to C","timestamp":1710513000000,"grade":"Pendiente","analysisText":""}]"#,
    )
    .unwrap();

    let records = open(&tmp).list();

    assert_eq!(
        records,
        vec![EvaluationRecord {
            id: "5b1f0c3e-8d4a-4c52-9a55-3c1f2f0e9b11".into(),
            student_name: "Rosa Choque".into(),
            student_parallel: "4to C".into(),
            timestamp: 1_710_513_000_000,
            grade: "Pendiente".into(),
            analysis_text: String::new(),
        }]
    );
}

#[test]
fn corrupted_file_lists_empty_and_is_replaced_on_next_write() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("logo_evaluations_db.json");
    std::fs::write(&path, "{ not json").unwrap();

    let store = open(&tmp);
    assert!(store.list().is_empty());

    let record = store.create(new_eval("Ana Paz", "90/100")).unwrap();
    assert_eq!(store.list(), vec![record]);
}

#[test]
fn delete_by_prefix_after_resolving() {
    let tmp = TempDir::new().unwrap();
    let store = open(&tmp);
    let keep = store.create(new_eval("Ana Paz", "90/100")).unwrap();
    let gone = store.create(new_eval("Luis Mamani", "10/100")).unwrap();

    let resolved = store.resolve(&gone.id[..8]).unwrap();
    let remaining = store.delete(&resolved.id).unwrap();

    assert_eq!(remaining, vec![keep.clone()]);
    assert_eq!(open(&tmp).list(), vec![keep]);
}

#[test]
fn backend_round_trips_records() {
    let tmp = TempDir::new().unwrap();
    let backend = JsonFileBackend::new(tmp.path());
    let records = vec![
        EvaluationRecord {
            id: "b".into(),
            student_name: "José Quispe".into(),
            student_parallel: "4to B".into(),
            timestamp: 2,
            grade: "85/100".into(),
            analysis_text: "## Análisis\n*   Punto \"uno\"\n".into(),
        },
        EvaluationRecord {
            id: "a".into(),
            student_name: "Ana".into(),
            student_parallel: "4to A".into(),
            timestamp: 1,
            grade: "Pendiente".into(),
            analysis_text: String::new(),
        },
    ];

    backend.save(&records).unwrap();

    assert_eq!(backend.load().unwrap(), records);
}
