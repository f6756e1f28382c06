mod config;

use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer};
use clap::Parser;
use env_logger::Env;
use include_dir::{include_dir, Dir};
use log::{info, warn};
use mime_guess::from_path;
use std::thread;
use std::time::Duration;

use crate::config::ServerConfig;

static STATIC_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/static/dist");

const INDEX: &str = "index.html";

/// What a request path maps to inside the embedded bundle.
#[derive(Debug, PartialEq)]
enum Asset<'a> {
    File(&'a str),
    /// Client-side route such as `/` or `/samples`; answered with the page.
    Page,
    /// Looks like a file (has an extension) but is not in the bundle.
    Missing,
}

fn resolve_asset(path: &str) -> Asset<'_> {
    let path = path.trim_start_matches('/');
    if path.is_empty() {
        return Asset::Page;
    }
    if STATIC_DIR.get_file(path).is_some() {
        return Asset::File(path);
    }
    let has_extension = path
        .rsplit('/')
        .next()
        .is_some_and(|name| name.contains('.'));
    if has_extension {
        Asset::Missing
    } else {
        Asset::Page
    }
}

fn embedded(path: &str) -> HttpResponse {
    match STATIC_DIR.get_file(path) {
        Some(file) => HttpResponse::Ok()
            .content_type(from_path(path).first_or_octet_stream().as_ref())
            .body(file.contents().to_vec()),
        None => HttpResponse::NotFound().body("Not Found"),
    }
}

/// Serves the embedded dashboard build. Unknown extension-less paths get
/// `index.html`; a missing script or stylesheet is a 404 so a stale bundle
/// fails loudly instead of loading HTML as wasm.
async fn serve_embedded(req: HttpRequest) -> HttpResponse {
    match resolve_asset(req.path()) {
        Asset::File(path) => embedded(path),
        Asset::Page => embedded(INDEX),
        Asset::Missing => {
            warn!("Asset not in the embedded bundle: {}", req.path());
            HttpResponse::NotFound().body("Not Found")
        }
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));
    let config = ServerConfig::parse();
    let url = config.url();

    if !config.no_browser {
        let url = url.clone();
        thread::spawn(move || {
            thread::sleep(Duration::from_millis(500));
            if let Err(err) = webbrowser::open(&url) {
                warn!("Could not open a browser at {}: {}", url, err);
            }
        });
    }

    info!("Dashboard running at {}", url);

    HttpServer::new(|| App::new().default_service(web::route().to(serve_embedded)))
        .bind((config.host.as_str(), config.port))?
        .run()
        .await
}
