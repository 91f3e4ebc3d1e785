fn main() -> std::process::ExitCode {
    records::launch("marks-service", server::run_marks)
}
