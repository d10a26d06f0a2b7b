//! Batch CSV processing end to end: passthrough columns, appended analysis
//! columns, and per-row status handling.

use std::io::Write;

use admeflow_rust::io::process_csv;

fn write_input(dir: &tempfile::TempDir, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join("input.csv");
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    path
}

fn read_rows(path: &std::path::Path) -> (Vec<String>, Vec<Vec<String>>) {
    let mut reader = csv::Reader::from_path(path).unwrap();
    let headers = reader.headers().unwrap().iter().map(str::to_string).collect();
    let rows = reader
        .records()
        .map(|r| r.unwrap().iter().map(str::to_string).collect())
        .collect();
    (headers, rows)
}

#[test]
fn annotates_rows_and_preserves_passthrough_columns() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(
        &dir,
        "id,SMILES,source\n\
         mol-1,CC(=O)OC1=CC=CC=C1C(=O)O,chembl\n\
         mol-2,invalid_smiles_!!!,chembl\n\
         mol-3,,manual\n\
         mol-4,CCO,manual\n",
    );
    let output = dir.path().join("output.csv");

    let report = process_csv(&input, &output, "SMILES").unwrap();
    assert_eq!(report.processed, 2);
    assert_eq!(report.failed, 1);
    assert_eq!(report.skipped, 1);

    let (headers, rows) = read_rows(&output);
    assert_eq!(&headers[..3], ["id", "SMILES", "source"]);
    assert!(headers.contains(&"status".to_string()));
    assert!(headers.contains(&"logP".to_string()));
    assert!(headers.contains(&"gi_absorption".to_string()));
    assert_eq!(rows.len(), 4);

    let status_idx = headers.iter().position(|h| h == "status").unwrap();
    let formula_idx = headers.iter().position(|h| h == "molecular_formula").unwrap();
    let lipinski_idx = headers.iter().position(|h| h == "lipinski").unwrap();

    // Input order and passthrough cells survive.
    assert_eq!(rows[0][0], "mol-1");
    assert_eq!(rows[0][2], "chembl");
    assert_eq!(rows[0][status_idx], "ok");
    assert_eq!(rows[0][formula_idx], "C9H8O4");
    assert_eq!(rows[0][lipinski_idx], "pass");

    assert!(rows[1][status_idx].starts_with("failed:"));
    assert_eq!(rows[1][formula_idx], "");

    assert_eq!(rows[2][status_idx], "skipped");
    assert_eq!(rows[3][status_idx], "ok");
    assert_eq!(rows[3][formula_idx], "C2H6O");
}

#[test]
fn missing_smiles_column_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(&dir, "id,structure\n1,CCO\n");
    let output = dir.path().join("output.csv");

    let err = process_csv(&input, &output, "SMILES").unwrap_err();
    assert!(err.to_string().contains("SMILES"));
}

#[test]
fn custom_smiles_column_name() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(&dir, "structure\nc1ccccc1\n");
    let output = dir.path().join("output.csv");

    let report = process_csv(&input, &output, "structure").unwrap();
    assert_eq!(report.processed, 1);
    assert_eq!(report.failed, 0);
}
