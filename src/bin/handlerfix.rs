fn main() {
    if let Err(e) = handlerfix::cli::run() {
        eprintln!("handlerfix: {}", e);
        std::process::exit(1);
    }
}
