// src/preview.rs
//
// Local preview of the site: a tiny static-file server (HTTP/1.0 over TCP,
// std-only) serving the project root on a background thread. Fire and
// forget: there is no stop, it lives until the process exits.

use std::{
    error::Error,
    fs,
    io::{Read, Write},
    net::{SocketAddr, TcpListener, TcpStream},
    path::{Component, Path, PathBuf},
    sync::{Arc, Mutex},
    thread::{self, JoinHandle},
    time::Duration,
};

use crate::config::{consts::PREVIEW_INDEX, options::PreviewOptions};

const MAX_HEAD: usize = 8 * 1024;

pub struct PreviewHandle {
    pub addr: SocketAddr,
    thread: JoinHandle<()>,
}

impl PreviewHandle {
    pub fn url(&self) -> String {
        format!("http://{}/", self.addr)
    }

    /// Block on the accept loop (CLI use).
    pub fn join(self) {
        let _ = self.thread.join();
    }
}

/// Bind now (so a busy port is reported to the caller), serve on a thread.
/// If `status` is given, a dying accept loop writes its error there.
pub fn start(
    root: &Path,
    opts: &PreviewOptions,
    status: Option<Arc<Mutex<String>>>,
) -> Result<PreviewHandle, Box<dyn Error>> {
    let listener = TcpListener::bind((opts.host.as_str(), opts.port))
        .map_err(|e| err!("Failed to start server on {}:{}: {e}", opts.host, opts.port))?;
    let addr = listener.local_addr()?;
    let root = root.to_path_buf();

    logf!("Preview: Serving {} at http://{addr}/", root.display());

    let thread = thread::spawn(move || {
        for conn in listener.incoming() {
            match conn {
                Ok(stream) => {
                    let root = root.clone();
                    thread::spawn(move || {
                        if let Err(e) = handle(stream, &root) {
                            logd!("Preview: Connection error: {e}");
                        }
                    });
                }
                Err(e) => {
                    loge!("Preview: Accept failed: {e}");
                    if let Some(s) = &status {
                        if let Ok(mut guard) = s.lock() {
                            *guard = format!("Preview server stopped: {e}");
                        }
                    }
                    break;
                }
            }
        }
    });

    Ok(PreviewHandle { addr, thread })
}

fn handle(mut stream: TcpStream, root: &Path) -> Result<(), Box<dyn Error>> {
    stream.set_read_timeout(Some(Duration::from_secs(5)))?;
    stream.set_write_timeout(Some(Duration::from_secs(15)))?;

    let head = read_head(&mut stream)?;
    let request_line = head.lines().next().unwrap_or("");
    let mut parts = request_line.split_whitespace();
    let method = parts.next().unwrap_or("");
    let target = parts.next().unwrap_or("/");

    if method != "GET" && method != "HEAD" {
        return respond(&mut stream, 405, "Method Not Allowed", "text/plain", b"405 Method Not Allowed", true);
    }
    let with_body = method == "GET";

    match resolve_target(root, target) {
        Ok(path) => match fs::read(&path) {
            Ok(body) => {
                logd!("Preview: 200 {target}");
                respond(&mut stream, 200, "OK", content_type(&path), &body, with_body)
            }
            Err(_) => {
                logd!("Preview: 404 {target}");
                respond(&mut stream, 404, "Not Found", "text/plain", b"404 Not Found", with_body)
            }
        },
        Err(Refused) => {
            logd!("Preview: 403 {target}");
            respond(&mut stream, 403, "Forbidden", "text/plain", b"403 Forbidden", with_body)
        }
    }
}

fn read_head(stream: &mut TcpStream) -> Result<String, Box<dyn Error>> {
    let mut buf = Vec::with_capacity(1024);
    let mut chunk = [0u8; 1024];
    loop {
        let n = stream.read(&mut chunk)?;
        if n == 0 { break; }
        buf.extend_from_slice(&chunk[..n]);
        if buf.windows(4).any(|w| w == b"\r\n\r\n") || buf.len() >= MAX_HEAD {
            break;
        }
    }
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

fn respond(
    stream: &mut TcpStream,
    code: u16,
    reason: &str,
    ctype: &str,
    body: &[u8],
    with_body: bool,
) -> Result<(), Box<dyn Error>> {
    let head = format!(
        "HTTP/1.0 {code} {reason}\r\nContent-Type: {ctype}\r\nContent-Length: {}\r\nCache-Control: no-store\r\nConnection: close\r\n\r\n",
        body.len()
    );
    stream.write_all(head.as_bytes())?;
    if with_body {
        stream.write_all(body)?;
    }
    stream.flush()?;
    Ok(())
}

/// Request target escaped the project root.
#[derive(Debug, PartialEq, Eq)]
pub struct Refused;

/// Map a request target (`/trips.html?x=1`) to a file under `root`.
/// Directories resolve to their index.html. `..` is refused.
pub fn resolve_target(root: &Path, target: &str) -> Result<PathBuf, Refused> {
    let path_part = target.split(['?', '#']).next().unwrap_or("/");
    let decoded = percent_decode(path_part);

    let mut out = root.to_path_buf();
    for comp in Path::new(decoded.trim_start_matches('/')).components() {
        match comp {
            Component::Normal(c) => out.push(c),
            Component::CurDir => {}
            _ => return Err(Refused),
        }
    }

    if decoded.ends_with('/') || out.is_dir() {
        out.push(PREVIEW_INDEX);
    }
    Ok(out)
}

fn percent_decode(s: &str) -> String {
    let bytes = s.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' && i + 2 < bytes.len() {
            let hex = std::str::from_utf8(&bytes[i + 1..i + 3]).ok();
            if let Some(v) = hex.and_then(|h| u8::from_str_radix(h, 16).ok()) {
                out.push(v);
                i += 3;
                continue;
            }
        }
        out.push(bytes[i]);
        i += 1;
    }
    String::from_utf8_lossy(&out).into_owned()
}

pub fn content_type(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "html" | "htm" => "text/html; charset=utf-8",
        "css" => "text/css; charset=utf-8",
        "js" | "mjs" => "text/javascript; charset=utf-8",
        "json" => "application/json",
        "svg" => "image/svg+xml",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "webp" => "image/webp",
        "gif" => "image/gif",
        "ico" => "image/x-icon",
        "woff2" => "font/woff2",
        "txt" => "text/plain; charset=utf-8",
        _ => "application/octet-stream",
    }
}
