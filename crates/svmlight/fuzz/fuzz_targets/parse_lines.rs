#![no_main]
use libfuzzer_sys::fuzz_target;
use std::io::Cursor;
use svmlight_rs::compat::{load_svmlight_raw, RawRequest};
use svmlight_rs::io::{classification_from_reader, multilabel_from_reader};
use svmlight_rs::{Indexing, LoadOptions};

fuzz_target!(|data: &[u8]| {
    let opts = LoadOptions {
        indexing: Indexing::ZeroBased,
        query_id: true,
    };
    let _ = classification_from_reader(data, &LoadOptions::default());
    let _ = multilabel_from_reader(data, &opts);

    if data.len() > 2 {
        let (head, body) = data.split_at(2);
        let request = RawRequest {
            offset: u64::from(head[0]),
            length: u64::from(head[1]),
            ..Default::default()
        };
        let _ = load_svmlight_raw(Cursor::new(body), request);
    }
});
