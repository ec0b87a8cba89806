use headcut::*;

use std::path::Path;

fn main() {
    env_logger::init();

    let params = PreprocessConfig::from_yaml(
        br##"
preprocessor:
  - preprocessJob: cutHeaders
    active: true
    cutBefore: "#"
    cutAfter: " "
"##,
    )
    .unwrap()
    .cut_params();

    let samples = [
        SampleFasta::new("demo_data/hprc.fa", "HG02055"),
        SampleFasta::new("demo_data/grch38.fa", "GRCh38"),
    ];

    make_header_table(
        &samples,
        params.as_ref(),
        Path::new("demo_output/work"),
        Path::new("demo_output/headers.tsv"),
    )
    .unwrap();
}
