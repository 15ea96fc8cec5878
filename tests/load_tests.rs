use flate2::write::GzEncoder;
use flate2::Compression;
use std::fs::{self, File};
use std::io::Write;
use std::path::PathBuf;
use tempfile::TempDir;
use voies_paris::load::{load_records, read_records, DatasetSource};
use voies_paris::LoadError;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn sample_dataset() -> serde_json::Value {
    serde_json::json!([
        {"arrtd": "05", "l_voie": "Foo", "c_desi": "RUE", "n_sq_vo": 750001234},
        {"arrtd": null, "l_longmin": "Boulevard Périphérique"},
        {"l_courtmin": "Villa Poirier"}
    ])
}

#[test]
fn test_source_parse() {
    assert_eq!(
        DatasetSource::parse("https://example.org/voie.json"),
        DatasetSource::Url("https://example.org/voie.json".to_string())
    );
    assert_eq!(
        DatasetSource::parse("Data/voie.json"),
        DatasetSource::Path(PathBuf::from("Data/voie.json"))
    );
}

#[test]
fn test_read_plain_file() {
    let temp_dir = TempDir::new().unwrap();
    let file_path = temp_dir.path().join("voie.json");
    fs::write(&file_path, sample_dataset().to_string()).unwrap();

    let records = read_records(&file_path).unwrap();

    assert_eq!(records.len(), 3);
    assert_eq!(records[0].arrtd.as_deref(), Some("05"));
    assert_eq!(records[1].arrtd, None);
    assert_eq!(records[2].arrtd, None);
    assert_eq!(records[2].l_courtmin.as_deref(), Some("Villa Poirier"));
}

#[test]
fn test_read_gzip_file() {
    let temp_dir = TempDir::new().unwrap();
    let file_path = temp_dir.path().join("voie.json.gz");
    let mut encoder = GzEncoder::new(File::create(&file_path).unwrap(), Compression::default());
    encoder
        .write_all(sample_dataset().to_string().as_bytes())
        .unwrap();
    encoder.finish().unwrap();

    let records = read_records(&file_path).unwrap();

    assert_eq!(records.len(), 3);
}

#[test]
fn test_missing_file_is_io_error() {
    let temp_dir = TempDir::new().unwrap();

    let err = read_records(&temp_dir.path().join("absent.json")).unwrap_err();

    assert!(matches!(err, LoadError::Io { .. }));
}

#[test]
fn test_non_array_payload_is_parse_error() {
    let temp_dir = TempDir::new().unwrap();
    let file_path = temp_dir.path().join("voie.json");
    fs::write(&file_path, r#"{"arrtd": "05"}"#).unwrap();

    let err = read_records(&file_path).unwrap_err();

    assert!(matches!(err, LoadError::Parse(_)));
}

#[tokio::test]
async fn test_load_over_http() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/Data/voie.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_dataset()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let source = DatasetSource::parse(&format!("{}/Data/voie.json", mock_server.uri()));
    let records = load_records(&source, None).await.unwrap();

    assert_eq!(records.len(), 3);
    assert_eq!(records[0].c_desi.as_deref(), Some("RUE"));
}

#[tokio::test]
async fn test_http_error_status_is_not_retried() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/Data/voie.json"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&mock_server)
        .await;

    let source = DatasetSource::parse(&format!("{}/Data/voie.json", mock_server.uri()));
    let err = load_records(&source, Some(5)).await.unwrap_err();

    assert!(matches!(err, LoadError::Status(status) if status.as_u16() == 503));
}

#[tokio::test]
async fn test_http_malformed_body_is_parse_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&mock_server)
        .await;

    let source = DatasetSource::parse(&format!("{}/Data/voie.json", mock_server.uri()));
    let err = load_records(&source, None).await.unwrap_err();

    assert!(matches!(err, LoadError::Parse(_)));
}

#[test]
fn test_bad_typed_field_keeps_the_rest_of_the_dataset() {
    let temp_dir = TempDir::new().unwrap();
    let file_path = temp_dir.path().join("voie.json");
    let dataset = serde_json::json!([
        {"arrtd": "05", "l_longmin": "Bar Street"},
        {"arrtd": "05", "c_desi": "RUE", "l_voie": 12},
        {"arrtd": 15, "l_voie": "Lecourbe", "c_liaison": ["de"], "l_courtmin": true}
    ]);
    fs::write(&file_path, dataset.to_string()).unwrap();

    let records = read_records(&file_path).unwrap();

    assert_eq!(records.len(), 3);
    assert_eq!(records[0].l_longmin.as_deref(), Some("Bar Street"));
    assert_eq!(records[1].l_voie.as_deref(), Some("12"));
    assert_eq!(records[2].arrtd.as_deref(), Some("15"));
    assert_eq!(records[2].c_liaison, None);
    assert_eq!(records[2].l_courtmin, None);
}

#[test]
fn test_non_object_row_is_parse_error() {
    let temp_dir = TempDir::new().unwrap();
    let file_path = temp_dir.path().join("voie.json");
    fs::write(&file_path, r#"[{"arrtd": "05"}, 42]"#).unwrap();

    let err = read_records(&file_path).unwrap_err();

    assert!(matches!(err, LoadError::Parse(_)));
}
