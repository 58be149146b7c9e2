//! Load one of the bundled fixtures and print what came out.
//!
//! Run:
//!   cargo run -p svmlight-rs --example inspect_fixture

use std::path::Path;

use svmlight_rs::io::load_path;
use svmlight_rs::{Labels, LoadOptions, Task};

fn main() {
    let path = Path::new(concat!(env!("CARGO_MANIFEST_DIR"), "/../../data/multilabel.txt"));
    let ds = load_path(path, Task::Multilabel, &LoadOptions::default())
        .expect("failed to load multilabel fixture");

    let (rows, cols) = ds.matrix.shape();
    println!("{} rows x {} columns, {} stored values", rows, cols, ds.matrix.nnz());

    if let Labels::Multilabel(labels) = &ds.labels {
        for (i, set) in labels.iter().enumerate() {
            let (columns, values) = ds.matrix.row(i);
            println!("row {}: labels {:?} columns {:?} values {:?}", i, set.as_slice(), columns, values);
        }
    }
}
