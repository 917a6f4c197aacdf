use logo_padder::{pad, DEFAULT_OFFSET_X_PCT, DEFAULT_SCALE_FACTOR};
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::init();

    let input_path = "assets/AKHpng.png";
    let output_path = "assets/AKHpng_padded.png";

    match pad(input_path, output_path, DEFAULT_SCALE_FACTOR, DEFAULT_OFFSET_X_PCT) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
