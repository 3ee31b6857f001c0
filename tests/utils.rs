#![allow(dead_code)]

use item_registry_server::server::{ServerConfig, ServerNode};
use rocket::http::{ContentType, Status};
use rocket::local::{asynchronous, blocking::Client};

pub fn get_server_config(port: u16) -> ServerConfig {
    ServerConfig {
        port,
        ..ServerConfig::default()
    }
}

pub fn launch_server_node() -> (ServerNode, Client) {
    let node = ServerNode::new(ServerConfig::default());
    let client = Client::tracked(node.build()).expect("valid rocket instance");
    (node, client)
}

pub fn launch_server_node_size_2() -> ([ServerNode; 2], [Client; 2]) {
    let node_1 = ServerNode::new(get_server_config(8080));
    let node_2 = ServerNode::new(get_server_config(8081));

    let client_1 = Client::tracked(node_1.build()).expect("valid rocket instance");
    let client_2 = Client::tracked(node_2.build()).expect("valid rocket instance");
    ([node_1, node_2], [client_1, client_2])
}

pub async fn launch_async_server_node() -> (ServerNode, asynchronous::Client) {
    let node = ServerNode::new(ServerConfig::default());
    let client = asynchronous::Client::tracked(node.build())
        .await
        .expect("valid rocket instance");
    (node, client)
}

pub fn post_item(client: &Client, body: &str) -> (Status, Option<String>) {
    let response = client
        .post("/items")
        .header(ContentType::JSON)
        .body(body)
        .dispatch();
    (response.status(), response.into_string())
}
