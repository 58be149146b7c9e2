//! Loads the text fixtures under `data/` end to end.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use svmlight_rs::compat::{load_svmlight_raw, RawLabels, RawRequest};
use svmlight_rs::io::{
    classification_from_reader, load_path, multilabel_from_reader, regression_from_reader,
};
use svmlight_rs::{Indexing, Labels, LoadOptions, SvmLightError, Task};

fn data_file(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
        .join("data")
        .join(name)
}

fn open(name: &str) -> BufReader<File> {
    BufReader::new(File::open(data_file(name)).expect("fixture should exist"))
}

#[test]
fn classification_fixture() {
    let ds = regression_from_reader(open("classification.txt"), &LoadOptions::default()).unwrap();

    assert_eq!(ds.labels, vec![1.0, 2.0, 3.0, 4.0, 1.0, 2.0]);
    assert_eq!(ds.matrix.shape(), (6, 21));
    assert_eq!(ds.matrix.indptr(), &[0, 3, 5, 6, 7, 7, 8]);

    // row 0: 3:2.5 11:-5.2 16:1.5
    assert_eq!(ds.matrix.row(0), (&[2usize, 10, 15][..], &[2.5, -5.2, 1.5][..]));
    // tab-separated tokens
    assert_eq!(ds.matrix.row(1), (&[5usize, 12][..], &[1.0, -3.0][..]));
    assert_eq!(ds.matrix.get(2, 20), 27.0);
    assert_eq!(ds.matrix.get(3, 1), 1.234567890123456e10);
    // label-only row keeps an empty slice
    assert!(ds.matrix.row(4).0.is_empty());
    // explicit zeros are stored
    assert_eq!(ds.matrix.row(5), (&[2usize][..], &[0.0][..]));
}

#[test]
fn classification_fixture_with_integer_labels_fails_on_float_label() {
    let err = classification_from_reader(open("classification.txt"), &LoadOptions::default())
        .unwrap_err();
    assert_eq!(err.to_string(), "invalid label: 1.0 (example 1)");
}

#[test]
fn zero_based_fixture_keeps_raw_columns() {
    let opts = LoadOptions {
        indexing: Indexing::ZeroBased,
        ..Default::default()
    };
    let ds = regression_from_reader(open("classification.txt"), &opts).unwrap();
    assert_eq!(ds.matrix.shape(), (6, 22));
    assert_eq!(ds.matrix.row(0).0, &[3, 11, 16]);
}

#[test]
fn multilabel_fixture() {
    let ds = multilabel_from_reader(open("multilabel.txt"), &LoadOptions::default()).unwrap();
    let labels: Vec<Vec<i64>> = ds.labels.into_iter().map(|l| l.into_vec()).collect();
    assert_eq!(labels, vec![vec![0, 1], vec![2], vec![], vec![1, 2]]);
    assert_eq!(ds.matrix.shape(), (4, 21));
    assert_eq!(ds.matrix.row(2), (&[1usize][..], &[3.123][..]));
}

#[test]
fn qid_fixture() {
    let opts = LoadOptions {
        query_id: true,
        ..Default::default()
    };
    let ds = load_path(&data_file("qid.txt"), Task::Classification, &opts).unwrap();
    assert_eq!(ds.labels, Labels::Classification(vec![3, 2, 7]));
    assert_eq!(ds.query_ids, Some(vec![Some(1), Some(1), Some(2)]));
    assert_eq!(ds.matrix.shape(), (3, 2));

    let plain = load_path(&data_file("qid.txt"), Task::Classification, &LoadOptions::default())
        .unwrap();
    assert_eq!(plain.query_ids, None);
    assert_eq!(plain.matrix, ds.matrix);
}

#[test]
fn crazy_whitespace_fixture() {
    let ds = classification_from_reader(open("crazy_whitespace.txt"), &LoadOptions::default())
        .unwrap();
    assert_eq!(ds.labels, vec![0, 1, -1]);
    assert_eq!(ds.matrix.shape(), (3, 9));
    assert_eq!(ds.matrix.row(1), (&[1usize, 6][..], &[3.0, 1e-3][..]));
    assert_eq!(ds.matrix.get(2, 2), -250.0);
    assert!(ds.matrix.get(2, 8).is_infinite());
}

#[test]
fn invalid_order_fixture_points_at_second_row() {
    let err = classification_from_reader(open("invalid_order.txt"), &LoadOptions::default())
        .unwrap_err();
    assert!(matches!(err, SvmLightError::OutOfOrderColumns { example: 2 }));
}

#[test]
fn invalid_zero_index_fixture() {
    let err = classification_from_reader(open("invalid_zero_index.txt"), &LoadOptions::default())
        .unwrap_err();
    assert!(matches!(err, SvmLightError::ZeroIndexInOneBasedMode { example: 1 }));

    let opts = LoadOptions {
        indexing: Indexing::ZeroBased,
        ..Default::default()
    };
    let ds = classification_from_reader(open("invalid_zero_index.txt"), &opts).unwrap();
    assert_eq!(ds.matrix.shape(), (1, 10));
}

#[test]
fn raw_windows_cover_fixture_once() {
    let path = data_file("classification.txt");
    let size = std::fs::metadata(&path).unwrap().len();
    let full = load_svmlight_raw(open("classification.txt"), RawRequest::default()).unwrap();

    for mark in [1, size / 3, size / 2, 2 * size / 3, size - 1] {
        let head = load_svmlight_raw(
            open("classification.txt"),
            RawRequest {
                length: mark,
                ..Default::default()
            },
        )
        .unwrap();
        let tail = load_svmlight_raw(
            open("classification.txt"),
            RawRequest {
                offset: mark,
                ..Default::default()
            },
        )
        .unwrap();

        let mut targets = Vec::new();
        for part in [&head, &tail] {
            match &part.labels {
                RawLabels::Targets(t) => targets.extend_from_slice(t),
                RawLabels::Multilabel(_) => panic!("expected targets"),
            }
        }
        assert_eq!(RawLabels::Targets(targets), full.labels, "mark {}", mark);
        assert_eq!(head.data.len() + tail.data.len(), full.data.len());
    }
}

#[test]
fn missing_file_is_io_error() {
    let err = load_path(Path::new("data/does-not-exist"), Task::Regression, &LoadOptions::default())
        .unwrap_err();
    assert!(matches!(err, SvmLightError::Io(_)));
}
