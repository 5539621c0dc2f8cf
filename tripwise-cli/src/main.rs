//! Entry point for the `tripwise` binary.
#![forbid(unsafe_code)]

fn main() {
    if let Err(err) = tripwise_cli::run() {
        eprintln!("tripwise: {err}");
        std::process::exit(1);
    }
}
