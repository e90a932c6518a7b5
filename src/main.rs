fn main() {
    std::process::exit(sweep_cli::run());
}
