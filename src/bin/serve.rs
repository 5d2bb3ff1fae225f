//! Development server for termfolio
//!
//! A minimal static file server for the site and its wasm bundle.
//!
//! Usage: serve [DIR] [PORT]   (defaults: current directory, 8080)

use std::fs;
use std::path::{Component, Path, PathBuf};
use tiny_http::{Header, Response, Server};

const DEFAULT_PORT: u16 = 8080;

fn main() {
    let mut args = std::env::args().skip(1);
    let root = PathBuf::from(args.next().unwrap_or_else(|| ".".to_string()));
    let port = args
        .next()
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_PORT);

    let addr = format!("0.0.0.0:{}", port);
    let server = match Server::http(&addr) {
        Ok(server) => server,
        Err(e) => {
            eprintln!("Failed to start server on {}: {}", addr, e);
            std::process::exit(1);
        }
    };

    println!("┌─────────────────────────────────────┐");
    println!("│  termfolio dev server               │");
    println!("├─────────────────────────────────────┤");
    println!("│  http://localhost:{:<18}│", port);
    println!("└─────────────────────────────────────┘");
    println!("Serving {}", root.display());

    for request in server.incoming_requests() {
        let response = match resolve(&root, request.url()) {
            Some(path) => serve_file(&path),
            None => not_found(),
        };
        let _ = request.respond(response);
    }
}

/// Map a request URL to a file under `root`. Paths escaping the root are None.
fn resolve(root: &Path, url: &str) -> Option<PathBuf> {
    let url_path = url.split(['?', '#']).next().unwrap_or("/");
    let relative = Path::new(url_path.trim_start_matches('/'));

    if relative
        .components()
        .any(|c| !matches!(c, Component::Normal(_)))
    {
        return None;
    }

    let path = root.join(relative);
    if path.is_dir() {
        Some(path.join("index.html"))
    } else {
        Some(path)
    }
}

fn serve_file(path: &Path) -> Response<std::io::Cursor<Vec<u8>>> {
    match fs::read(path) {
        Ok(contents) => {
            let response = Response::from_data(contents);
            match Header::from_bytes("Content-Type", mime_type(path)) {
                Ok(header) => response.with_header(header),
                Err(_) => response,
            }
        }
        Err(_) => not_found(),
    }
}

fn not_found() -> Response<std::io::Cursor<Vec<u8>>> {
    let response = Response::from_string("404 Not Found").with_status_code(404);
    match Header::from_bytes("Content-Type", "text/plain") {
        Ok(header) => response.with_header(header),
        Err(_) => response,
    }
}

fn mime_type(path: &Path) -> &'static str {
    match path.extension().and_then(|e| e.to_str()) {
        Some("html") => "text/html; charset=utf-8",
        Some("js") => "application/javascript",
        Some("wasm") => "application/wasm",
        Some("css") => "text/css",
        Some("json") => "application/json",
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("svg") => "image/svg+xml",
        Some("ico") => "image/x-icon",
        Some("pdf") => "application/pdf",
        _ => "application/octet-stream",
    }
}
