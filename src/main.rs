use std::path::Path;
use std::process::ExitCode;

use soundgen::generate_all;

/// Where the client expects its sound assets.
const SOUNDS_DIR: &str = "client/public/sounds";

fn main() -> ExitCode {
    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).

    match generate_all(Path::new(SOUNDS_DIR)) {
        Ok(paths) => {
            for path in &paths {
                println!("Created {}", path.display());
            }
            println!("All audio files generated successfully!");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("sound generation failed: {err}");
            ExitCode::FAILURE
        }
    }
}
