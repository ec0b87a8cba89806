use headcut::errors::Error;
use headcut::*;

use std::fs;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};

use tempfile::TempDir;

fn write_fasta_file(dir: &TempDir, name: &str, contents: &str) -> String {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path.to_string_lossy().into_owned()
}

fn path_str(dir: &TempDir, name: &str) -> String {
    dir.path().join(name).to_string_lossy().into_owned()
}

#[test]
fn cut_fasta_rewrites_headers() {
    let dir = TempDir::new().unwrap();
    let input = write_fasta_file(
        &dir,
        "seq.fa",
        ">HG02055#1#h1tg000001l\nACGTACGT\n>HG02055#1#h1tg000002l\nGGGG\n",
    );
    let output = path_str(&dir, "seq.cut.fa");

    cut_fasta(&input, &CutParams::new("#", None, ""), &output).unwrap();

    let records = read_fasta(&output, 256)
        .unwrap()
        .run_collect_records()
        .unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].header(), b"h1tg000001l");
    assert_eq!(records[0].seq(), b"ACGTACGT");
    assert_eq!(records[1].header(), b"h1tg000002l");
    assert_eq!(records[1].seq(), b"GGGG");
}

#[test]
fn long_sequences_are_wrapped_and_round_trip() {
    let dir = TempDir::new().unwrap();
    let seq = "ACGT".repeat(40);
    let input = write_fasta_file(&dir, "seq.fa", &format!(">chr1  AC:CM000663.2\n{}\n", seq));
    let output = path_str(&dir, "seq.cut.fa");

    cut_fasta(&input, &CutParams::new("", None, " "), &output).unwrap();

    let text = fs::read_to_string(&output).unwrap();
    let mut lines = text.lines();
    assert_eq!(lines.next(), Some(">chr1"));
    // 160 residues wrap into 60 + 60 + 40
    assert_eq!(
        lines.map(str::len).collect::<Vec<_>>(),
        vec![60, 60, 40]
    );

    let records = read_fasta(&output, 256)
        .unwrap()
        .run_collect_records()
        .unwrap();
    assert_eq!(records[0].seq(), seq.as_bytes());
}

#[test]
fn gzip_output_round_trips() {
    let dir = TempDir::new().unwrap();
    let input = write_fasta_file(&dir, "seq.fa", ">CHM13#chr1\nACGTACGTAC\n");
    let output = path_str(&dir, "seq.cut.fa.gz");

    cut_fasta(&input, &CutParams::new("#", None, ""), &output).unwrap();

    let records = read_fasta(&output, 256)
        .unwrap()
        .run_collect_records()
        .unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].header(), b"chr1");
    assert_eq!(records[0].seq(), b"ACGTACGTAC");
}

#[test]
fn cutting_away_an_entire_header_aborts_the_run() {
    let dir = TempDir::new().unwrap();
    let input = write_fasta_file(&dir, "seq.fa", ">keep#me\nACGT\n>X\nGGGG\n");
    let output = path_str(&dir, "seq.cut.fa");

    let err = cut_fasta(&input, &CutParams::new("X#", None, ""), &output).unwrap_err();
    assert!(matches!(err, Error::EmptyHeader { header } if header == "X"));
}

#[test]
fn multi_line_input_records_are_read_whole() {
    let dir = TempDir::new().unwrap();
    let input = write_fasta_file(&dir, "seq.fa", ">a b\nACGT\nACGT\nAC\n");

    let records = read_fasta(&input, 256)
        .unwrap()
        .run_collect_records()
        .unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].header(), b"a b");
    assert_eq!(records[0].seq(), b"ACGTACGTAC");
    assert_eq!(records[0].len(), 10);
    assert_eq!(records[0].idx(), 0);
    assert!(records[0].file().ends_with("seq.fa"));
}

#[test]
fn multithreaded_runs_process_every_record() {
    let dir = TempDir::new().unwrap();
    let input = write_fasta_file(
        &dir,
        "seq.fa",
        ">s#a\nAC\n>s#b\nACGT\n>s#c\nA\n>s#d\nGG\n>s#e\nTTTT\n",
    );
    let output = path_str(&dir, "seq.cut.fa");

    let total = AtomicUsize::new(0);

    read_fasta(&input, 2)
        .unwrap()
        .cut_headers(CutParams::new("#", None, ""))
        .count(|n| total.store(n, Ordering::Relaxed))
        .collect_fasta(&output)
        .run_with_threads(4);

    assert_eq!(total.load(Ordering::Relaxed), 5);

    let mut headers = read_fasta(&output, 256)
        .unwrap()
        .run_collect_records()
        .unwrap()
        .iter()
        .map(|r| r.header().to_vec())
        .collect::<Vec<_>>();
    headers.sort();
    assert_eq!(headers, vec![b"a".to_vec(), b"b".to_vec(), b"c".to_vec(), b"d".to_vec(), b"e".to_vec()]);

    assert!(Path::new(&output).exists());
}
