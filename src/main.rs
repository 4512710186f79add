fn main() {
    patronus::app::cli::run();
}
