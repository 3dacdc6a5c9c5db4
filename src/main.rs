fn main() {
    copygen::app::cli::run();
}
