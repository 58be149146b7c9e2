use std::collections::BTreeSet;
use std::fs::File;
use std::io::BufReader;
use std::process;

use svmlight_rs::io::try_load_task;
use svmlight_rs::source::SlicedLines;
use svmlight_rs::{Indexing, Labels, LoadOptions, Task, TaskDataset};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

fn exit_with_help() -> ! {
    print!(
        "\
Usage: svmlight-info [options] data_file
options:
-t task : label kind of the file (default regression)
\tclassification -- integer class labels
\tregression -- real-valued targets
\tmultilabel -- comma-separated label sets
-z : column indices are zero-based (default one-based)
-q : collect query ids
-o offset : byte offset to start reading from (default 0)
-l length : number of bytes to read after the offset (default 0, to end of file)
-v : verbose logging on stderr
"
    );
    process::exit(1);
}

fn parse_flag_arg<'a>(args: &'a [String], i: &mut usize) -> &'a str {
    if *i >= args.len() {
        exit_with_help();
    }
    let value = &args[*i];
    *i += 1;
    value.as_str()
}

fn label_summary(labels: &Labels) -> String {
    match labels {
        Labels::Classification(v) => {
            let classes: BTreeSet<i64> = v.iter().copied().collect();
            let listed: Vec<String> = classes.iter().map(|c| c.to_string()).collect();
            format!("classes: {} [{}]", classes.len(), listed.join(" "))
        }
        Labels::Regression(v) => {
            let mut seen = v.iter().copied().filter(|y| !y.is_nan());
            match seen.next() {
                Some(first) => {
                    let (lo, hi) = seen.fold((first, first), |(lo, hi), y| (lo.min(y), hi.max(y)));
                    format!("label range: {} {}", lo, hi)
                }
                None => "label range: none".to_string(),
            }
        }
        Labels::Multilabel(v) => {
            let sets: BTreeSet<&[i64]> = v.iter().map(|s| s.as_slice()).collect();
            let classes: BTreeSet<i64> = v.iter().flat_map(|s| s.iter().copied()).collect();
            format!("label sets: {} over {} classes", sets.len(), classes.len())
        }
    }
}

fn print_summary(ds: &TaskDataset) {
    let (rows, cols) = ds.matrix.shape();
    println!("task: {}", ds.labels.task().as_str());
    println!("rows: {}", rows);
    println!("columns: {}", cols);
    println!("nnz: {}", ds.matrix.nnz());
    println!("{}", label_summary(&ds.labels));
    if let Some(qids) = &ds.query_ids {
        let distinct: BTreeSet<i64> = qids.iter().flatten().copied().collect();
        println!("query ids: {}", distinct.len());
        let missing = qids.iter().filter(|q| q.is_none()).count();
        if missing > 0 {
            println!("rows without query id: {}", missing);
        }
    }
}

fn main() {
    let args: Vec<String> = std::env::args().collect();

    let mut task = Task::Regression;
    let mut opts = LoadOptions::default();
    let mut offset = 0u64;
    let mut length = 0u64;
    let mut verbose = false;

    let mut i = 1;
    while i < args.len() {
        if !args[i].starts_with('-') || args[i].len() < 2 {
            break;
        }
        let flag = &args[i];
        i += 1;

        match flag.as_bytes()[1] {
            b't' => {
                let value = parse_flag_arg(&args, &mut i);
                task = value.parse().unwrap_or_else(|e| {
                    eprintln!("{}", e);
                    exit_with_help();
                });
            }
            b'z' => opts.indexing = Indexing::ZeroBased,
            b'q' => opts.query_id = true,
            b'o' => {
                offset = parse_flag_arg(&args, &mut i)
                    .parse()
                    .unwrap_or_else(|_| exit_with_help());
            }
            b'l' => {
                length = parse_flag_arg(&args, &mut i)
                    .parse()
                    .unwrap_or_else(|_| exit_with_help());
            }
            b'v' => verbose = true,
            _ => {
                eprintln!("unknown option: {}", flag);
                exit_with_help();
            }
        }
    }

    if i + 1 != args.len() {
        exit_with_help();
    }
    let data_filename = &args[i];

    let subscriber = FmtSubscriber::builder()
        .with_max_level(if verbose { Level::DEBUG } else { Level::INFO })
        .with_writer(std::io::stderr)
        .finish();
    if tracing::subscriber::set_global_default(subscriber).is_err() {
        eprintln!("failed to install log subscriber");
    }

    let file = File::open(data_filename).unwrap_or_else(|e| {
        eprintln!("can't open file {}: {}", data_filename, e);
        process::exit(1);
    });
    if offset > 0 || length > 0 {
        info!(file = %data_filename, offset, length, "reading byte window");
    }
    let lines = SlicedLines::new(BufReader::new(file), offset, length).unwrap_or_else(|e| {
        eprintln!("can't seek in {}: {}", data_filename, e);
        process::exit(1);
    });

    match try_load_task(lines, task, &opts) {
        Ok(ds) => print_summary(&ds),
        Err(e) => {
            eprintln!("{}: {}", data_filename, e);
            process::exit(1);
        }
    }
}
