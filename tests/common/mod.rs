//! Shared utilities for integration testing.

use std::fs;
use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;

use snipbox::config::AppConfig;
use snipbox::http::HttpServer;
use snipbox::lifecycle::Shutdown;
use snipbox::templates::TemplateEngine;
use tempfile::TempDir;

pub const BASE: &str = r#"<!doctype html>
<html lang="en">
<head><title>{% block title %}Home{% endblock title %} - Snipbox</title></head>
<body>
{% include "partials/nav.html" %}
<main>{% block main %}{% endblock main %}</main>
</body>
</html>"#;

pub const NAV: &str = r#"<nav><a href="/">Home</a></nav>"#;

pub const HOME: &str = r#"{% extends "base.html" %}
{% block main %}<h2>Latest Snippets</h2><p>There's nothing to see here yet!</p>{% endblock main %}"#;

/// The complete fragment set for a working home page.
pub fn full_template_set() -> Vec<(&'static str, &'static str)> {
    vec![
        ("base.html", BASE),
        ("partials/nav.html", NAV),
        ("pages/home.html", HOME),
    ]
}

/// A running application instance bound to an ephemeral loopback port.
pub struct TestApp {
    pub addr: SocketAddr,
    pub shutdown: Shutdown,
    // Keeps the on-disk UI tree alive for the lifetime of the server.
    _ui_dir: TempDir,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}

/// Materialize a UI tree with the given template fragments, then boot the
/// server against it on an ephemeral port.
pub async fn spawn_app(fragments: &[(&str, &str)]) -> TestApp {
    let ui_dir = tempfile::tempdir().unwrap();
    let html_dir = ui_dir.path().join("html");
    let static_dir = ui_dir.path().join("static");

    for (name, content) in fragments {
        let path = html_dir.join(name);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }
    fs::create_dir_all(static_dir.join("css")).unwrap();
    fs::write(
        static_dir.join("css/main.css"),
        "body { font-family: sans-serif; }",
    )
    .unwrap();

    let mut config = AppConfig::default();
    config.ui.template_dir = html_dir.display().to_string();
    config.ui.static_dir = static_dir.display().to_string();

    let templates = Arc::new(TemplateEngine::load(Path::new(&config.ui.template_dir)).unwrap());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    let server = HttpServer::new(config, templates);
    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    TestApp {
        addr,
        shutdown,
        _ui_dir: ui_dir,
    }
}

/// HTTP client suitable for loopback testing.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder().no_proxy().build().unwrap()
}
