#[tokio::main]
async fn main() {
    if let Err(err) = smartdca::api::run().await {
        eprintln!("application error: {err}");
        std::process::exit(1);
    }
}
