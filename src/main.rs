#[tokio::main]
async fn main() -> std::process::ExitCode {
    gherkin_gen_lib::run().await
}
