use std::collections::HashMap;
use std::io::{Read, Write};
use std::net::TcpListener;
use std::thread;

/// Canned response served by the loopback fixture server.
pub struct Route {
    pub status: u16,
    pub content_type: &'static str,
    pub body: Vec<u8>,
}

impl Route {
    pub fn json(body: &str) -> Self {
        Route {
            status: 200,
            content_type: "application/json",
            body: body.as_bytes().to_vec(),
        }
    }

    pub fn bytes(body: Vec<u8>) -> Self {
        Route {
            status: 200,
            content_type: "application/octet-stream",
            body,
        }
    }

    pub fn status(status: u16) -> Self {
        Route {
            status,
            content_type: "text/plain",
            body: Vec::new(),
        }
    }
}

/// Minimal HTTP server on a loopback port, serving canned routes by request
/// path. Bound first so routes can embed the server's own base URL.
pub struct FixtureServer {
    listener: TcpListener,
    base_url: String,
}

impl FixtureServer {
    pub fn bind() -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind fixture server");
        let addr = listener.local_addr().expect("fixture server addr");
        Self {
            listener,
            base_url: format!("http://{addr}"),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Start answering requests. Unknown paths get a 404.
    pub fn serve(self, routes: HashMap<String, Route>) -> String {
        let base_url = self.base_url;
        thread::spawn(move || {
            for stream in self.listener.incoming() {
                let Ok(mut stream) = stream else { continue };
                let Some(path) = read_request_path(&mut stream) else {
                    continue;
                };
                let fallback = Route::status(404);
                let route = routes.get(&path).unwrap_or(&fallback);
                let header = format!(
                    "HTTP/1.1 {} {}\r\nContent-Type: {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
                    route.status,
                    reason(route.status),
                    route.content_type,
                    route.body.len(),
                );
                let _ = stream.write_all(header.as_bytes());
                let _ = stream.write_all(&route.body);
            }
        });
        base_url
    }
}

fn read_request_path(stream: &mut std::net::TcpStream) -> Option<String> {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];
    loop {
        match stream.read(&mut chunk) {
            Ok(0) => break,
            Ok(n) => {
                buf.extend_from_slice(&chunk[..n]);
                if buf.windows(4).any(|w| w == b"\r\n\r\n") {
                    break;
                }
            }
            Err(_) => return None,
        }
    }
    let request = String::from_utf8_lossy(&buf);
    request.split_whitespace().nth(1).map(|p| p.to_string())
}

fn reason(status: u16) -> &'static str {
    match status {
        200 => "OK",
        404 => "Not Found",
        500 => "Internal Server Error",
        _ => "Unknown",
    }
}

/// Build an in-memory zip package from `(name, content, unix mode)` entries.
pub fn package_zip(entries: &[(&str, &[u8], Option<u32>)]) -> Vec<u8> {
    use zip::write::SimpleFileOptions;

    let mut cursor = std::io::Cursor::new(Vec::new());
    let mut writer = zip::ZipWriter::new(&mut cursor);
    for (name, content, mode) in entries {
        let mut opts = SimpleFileOptions::default();
        if let Some(mode) = mode {
            opts = opts.unix_permissions(*mode);
        }
        writer.start_file(*name, opts).expect("start zip entry");
        writer.write_all(content).expect("write zip entry");
    }
    writer.finish().expect("finish zip");
    cursor.into_inner()
}
