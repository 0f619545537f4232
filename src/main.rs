fn main() -> std::process::ExitCode {
    pe_build::run()
}
