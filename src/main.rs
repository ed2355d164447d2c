use reset_requester::observability::logging::init_logging;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    init_logging();
    reset_requester::run().await;
}
