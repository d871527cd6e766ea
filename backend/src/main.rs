use moon::*;

async fn frontend() -> Frontend {
    Frontend::new()
        .title("Shadow Preview")
        .index_by_robots(false)
}

// The preview keeps all state in the browser, there are no messages to handle.
async fn up_msg_handler(_: UpMsgRequest<()>) {}

#[moon::main]
async fn main() -> std::io::Result<()> {
    println!("🌗 Shadow Preview backend starting");
    start(frontend, up_msg_handler, |_| {}).await
}
