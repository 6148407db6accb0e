fn main() {
    if let Err(e) = dotnetdomain_cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
