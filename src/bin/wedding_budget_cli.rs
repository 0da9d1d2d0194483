use std::process;

fn main() {
    wedding_budget::init();
    if let Err(err) = wedding_budget::cli::run_cli() {
        eprintln!("error: {err}");
        process::exit(1);
    }
}
