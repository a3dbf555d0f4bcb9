use preproinsulin::seq_analysis::protein::charge::{charge_table, count_charged};
use preproinsulin::seq_analysis::protein::clean::clean_sequence;
use preproinsulin::seq_analysis::protein::segments::{split, Segments};
use preproinsulin::workspace::WeightReport;

use lazy_static::lazy_static;

// NCBI NP_000198, human preproinsulin
static RAW_RECORD: &str = "ORIGIN
        1 malwmrllpl lallalwgpd paaafvnqhl cgshlvealy lvcgergffy tpktrreaed
       61 lqvgqvelgg gpgagslqpl alegslqkrg iveqcctsic slyqlenycn
//
";

lazy_static! {
    static ref PREPROINSULIN: String = clean_sequence(RAW_RECORD);
}

pub fn show_segments(parts: &Segments) {
    for (kind, seq) in parts.iter() {
        println!("{:<9} {:>2} {}", kind.to_string(), seq.len(), seq);
    }
}

fn main() {
    let parts = match split(&PREPROINSULIN) {
        Some(parts) => parts,
        None => {
            eprintln!("unexpected length {}", PREPROINSULIN.len());
            std::process::exit(1);
        }
    };
    show_segments(&parts);
    println!();
    print!("{}", WeightReport::from_segments(&parts));
    print!("{}", charge_table(&count_charged(parts.insulin().as_bytes())));
}
