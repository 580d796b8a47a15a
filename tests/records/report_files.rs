use logograde::records::{EvaluationRecord, MemoryBackend, NewEvaluation, RecordStore};
use logograde::report::{ReportStyle, render_report, report_filename, write_report};
use tempfile::TempDir;

fn saved_record() -> EvaluationRecord {
    let store = RecordStore::new(Box::new(MemoryBackend::new()));
    store
        .create(NewEvaluation {
            student_name: "Ana Paz".into(),
            student_parallel: "4to B".into(),
            grade: "90/100".into(),
            analysis_text: "# Título\nTexto.".into(),
        })
        .unwrap()
}

#[test]
fn report_lists_fields_in_order() {
    let report = render_report(&saved_record(), &ReportStyle::default());

    let positions: Vec<usize> = ["Ana Paz", "4to B", "90/100", "Texto."]
        .iter()
        .map(|needle| report.find(needle).unwrap())
        .collect();
    assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
fn written_report_matches_rendered_text() {
    let tmp = TempDir::new().unwrap();
    let record = saved_record();
    let style = ReportStyle::default();

    let path = write_report(&record, &style, &tmp.path().join("reportes")).unwrap();

    assert_eq!(path.file_name().unwrap(), "Evaluacion_Ana_Paz_4to B.txt");
    assert_eq!(report_filename(&record), "Evaluacion_Ana_Paz_4to B.txt");
    assert_eq!(
        std::fs::read_to_string(&path).unwrap(),
        render_report(&record, &style)
    );
}
