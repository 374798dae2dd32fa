fn main() {
    if let Err(err) = qoder_cli::run() {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}
