use headcut::*;

fn main() {
    env_logger::init();

    read_fasta("demo_data/hprc.fa", 256)
        .unwrap()
        .cut_headers(CutParams::new("#", None, ""))
        .dbg()
        .collect_fasta("demo_output/hprc.cut.fa")
        .run()
        .unwrap();
}
