fn main() {
    tile_config::app::cli::run();
}
