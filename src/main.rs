fn main() {
    wtfpkg::run_cli();
}
