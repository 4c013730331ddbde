use std::time::Duration;

use reqwest::Client;

const USER_AGENT: &str = "camara-gateway/0.1";

pub fn build_http_client(timeout: Duration, disable_proxy: bool) -> Result<Client, reqwest::Error> {
    let mut builder = Client::builder().user_agent(USER_AGENT).timeout(timeout);

    if disable_proxy {
        builder = builder.no_proxy();
    }

    builder.build()
}
