fn main() {
    if let Err(err) = jsonmend::cli::run() {
        eprintln!("{}", err);
        std::process::exit(1);
    }
}
