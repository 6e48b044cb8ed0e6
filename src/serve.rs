//! Serveur statique d'aperçu : monte un répertoire sous un préfixe d'URL.

use anyhow::{bail, Context, Result};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::Router;
use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use tower_http::services::ServeDir;
use tracing::{info, warn};

/// Configuration du serveur d'aperçu
#[derive(Debug, Clone)]
pub struct PreviewConfig {
    pub root: PathBuf,
    pub prefix: String,
    /// 0 = port libre choisi par l'OS
    pub port: u16,
    pub open_browser: bool,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("dist/ics"),
            prefix: "/app/".to_string(),
            port: 0,
            open_browser: false,
        }
    }
}

/// Force un `/` initial et final. Le préfixe est monté tel quel comme route :
/// `{`, `}` et `*` y sont refusés.
pub fn normalize_prefix(prefix: &str) -> Result<String> {
    if let Some(c) = prefix.chars().find(|c| matches!(c, '{' | '}' | '*')) {
        bail!("invalid prefix {prefix:?}: character {c:?} not allowed");
    }
    let mut out = String::with_capacity(prefix.len() + 2);
    if !prefix.starts_with('/') {
        out.push('/');
    }
    out.push_str(prefix);
    if !out.ends_with('/') {
        out.push('/');
    }
    Ok(out)
}

/// `GET /` redirige vers le préfixe ; le reste hors préfixe répond 404.
pub fn router(root: &Path, prefix: &str) -> Result<Router> {
    let prefix = normalize_prefix(prefix)?;
    let files = ServeDir::new(root);
    if prefix == "/" {
        return Ok(Router::new().fallback_service(files));
    }
    let target = prefix.clone();
    let app = Router::new()
        .route(
            "/",
            get(move || async move { (StatusCode::FOUND, [(header::LOCATION, target)]) }),
        )
        .nest_service(prefix.trim_end_matches('/'), files)
        .fallback(|| async { (StatusCode::NOT_FOUND, "Not found").into_response() });
    Ok(app)
}

/// Fichiers `.ics` présents à la racine servie, triés.
pub fn list_calendars(root: &Path) -> Result<Vec<String>> {
    let mut names = Vec::new();
    for entry in fs::read_dir(root).with_context(|| format!("reading {}", root.display()))? {
        let path = entry?.path();
        if path.extension().and_then(|s| s.to_str()) != Some("ics") {
            continue;
        }
        if let Some(name) = path.file_name().and_then(|s| s.to_str()) {
            names.push(name.to_string());
        }
    }
    names.sort();
    Ok(names)
}

/// Démarre le serveur et bloque jusqu'à Ctrl-C.
pub async fn run(config: PreviewConfig) -> Result<()> {
    if !config.root.is_dir() {
        bail!(
            "root does not exist or is not a directory: {}",
            config.root.display()
        );
    }
    let root = config
        .root
        .canonicalize()
        .with_context(|| format!("resolving {}", config.root.display()))?;
    let prefix = normalize_prefix(&config.prefix)?;
    let app = router(&root, &prefix)?;

    let addr = SocketAddr::from(([127, 0, 0, 1], config.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("binding {addr}"))?;
    let port = listener.local_addr()?.port();
    let url = format!("http://localhost:{port}{prefix}");

    println!("Serving {}\n→ {url}", root.display());
    for name in list_calendars(&root)? {
        println!("  {url}{name}");
    }
    info!(root = %root.display(), %url, "preview server listening");

    if config.open_browser && open::that(&url).is_err() {
        warn!(%url, "could not open browser");
    }

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            println!("\nShutting down...");
        })
        .await?;
    Ok(())
}
