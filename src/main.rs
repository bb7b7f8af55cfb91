fn main() {
    simpleplistor::app::cli::run();
}
