fn main() -> std::process::ExitCode {
    records::launch("student-service", server::run_student)
}
