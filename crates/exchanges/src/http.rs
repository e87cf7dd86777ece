//! monoio-native HTTPS transport
//!
//! One-shot HTTP/1.1 requests over a fresh TLS connection per call
//! (`Connection: close`), built directly on monoio's `TcpStream` and
//! rustls. The gateway issues one-shot snapshots and orders, so
//! connection reuse buys little here.

use crate::errors::{ExchangeError, Result};
use monoio::io::{AsyncReadRent, AsyncWriteRentExt};
use monoio::net::TcpStream;
use rustls::pki_types::ServerName;
use rustls::{ClientConfig, ClientConnection, RootCertStore};
use std::collections::HashMap;
use std::io::{Read, Write};
use std::sync::Arc;

/// HTTPS client shared by all adapters.
pub struct HttpsClient {
    tls_config: Arc<ClientConfig>,
}

/// Minimal HTTP response: status line plus body.
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    /// True for any 2xx status.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

impl HttpsClient {
    /// Create a client backed by the webpki root store.
    pub fn new() -> Result<Self> {
        let mut root_store = RootCertStore::empty();
        root_store.extend(webpki_roots::TLS_SERVER_ROOTS.iter().cloned());

        let tls_config = ClientConfig::builder()
            .with_root_certificates(root_store)
            .with_no_client_auth();

        Ok(Self {
            tls_config: Arc::new(tls_config),
        })
    }

    /// Issue a request and read the full response.
    pub async fn request(
        &self,
        method: &str,
        url: &str,
        body: Option<&str>,
        headers: &HashMap<&str, &str>,
    ) -> Result<HttpResponse> {
        let parsed = url::Url::parse(url).map_err(|e| ExchangeError::InvalidUrl(e.to_string()))?;

        let host = parsed
            .host_str()
            .ok_or_else(|| ExchangeError::InvalidUrl("No host in URL".to_string()))?;
        let port = parsed.port().unwrap_or(443);

        let mut path_and_query = if parsed.path().is_empty() {
            "/".to_string()
        } else {
            parsed.path().to_string()
        };
        if let Some(query) = parsed.query() {
            path_and_query.push('?');
            path_and_query.push_str(query);
        }

        let mut stream = self.connect(host, port).await?;

        let request = build_request(method, host, &path_and_query, body, headers);
        stream.write_all(request.as_bytes()).await?;

        let raw = stream.read_to_end().await?;
        parse_response(&raw)
    }

    async fn connect(&self, host: &str, port: u16) -> Result<TlsStream> {
        let tcp = TcpStream::connect(&format!("{host}:{port}"))
            .await
            .map_err(|e| ExchangeError::Network(format!("TCP connect failed: {e}")))?;

        let server_name = ServerName::try_from(host.to_string())
            .map_err(|e| ExchangeError::Network(format!("Invalid server name: {e:?}")))?;

        let conn = ClientConnection::new(self.tls_config.clone(), server_name)
            .map_err(|e| ExchangeError::Network(format!("TLS setup failed: {e}")))?;

        let mut stream = TlsStream::new(tcp, conn);
        stream.handshake().await?;
        Ok(stream)
    }
}

fn build_request(
    method: &str,
    host: &str,
    path_and_query: &str,
    body: Option<&str>,
    headers: &HashMap<&str, &str>,
) -> String {
    let content_length = body.map(|b| b.len()).unwrap_or(0);
    let mut request = format!(
        "{method} {path_and_query} HTTP/1.1\r\n\
         Host: {host}\r\n\
         User-Agent: tradegate/0.1\r\n\
         Connection: close\r\n\
         Content-Length: {content_length}\r\n"
    );

    for (key, value) in headers {
        request.push_str(&format!("{key}: {value}\r\n"));
    }

    request.push_str("\r\n");
    if let Some(body) = body {
        request.push_str(body);
    }
    request
}

fn parse_response(data: &[u8]) -> Result<HttpResponse> {
    let text = String::from_utf8_lossy(data);

    let header_end = text.find("\r\n\r\n").ok_or_else(|| {
        ExchangeError::Network("Invalid HTTP response: no header terminator".to_string())
    })?;

    let head = &text[..header_end];
    let mut body = text[header_end + 4..].to_string();

    let status_line = head
        .lines()
        .next()
        .ok_or_else(|| ExchangeError::Network("Empty response".to_string()))?;
    let status = status_line
        .split_whitespace()
        .nth(1)
        .and_then(|s| s.parse::<u16>().ok())
        .ok_or_else(|| ExchangeError::Network("Invalid status line".to_string()))?;

    // Chunked bodies arrive because some gateways ignore Connection: close;
    // undo the framing so callers always see plain JSON.
    let chunked = head.lines().any(|l| {
        let lower = l.to_ascii_lowercase();
        lower.starts_with("transfer-encoding:") && lower.contains("chunked")
    });
    if chunked {
        body = decode_chunked(&body);
    }

    Ok(HttpResponse { status, body })
}

fn decode_chunked(body: &str) -> String {
    let mut out = String::with_capacity(body.len());
    let mut rest = body;

    while let Some(line_end) = rest.find("\r\n") {
        let size = usize::from_str_radix(rest[..line_end].trim(), 16).unwrap_or(0);
        if size == 0 {
            break;
        }
        let start = line_end + 2;
        if start + size > rest.len() {
            out.push_str(&rest[start..]);
            break;
        }
        out.push_str(&rest[start..start + size]);
        rest = rest[start + size..].trim_start_matches("\r\n");
    }

    out
}

/// rustls client connection driven over a monoio TCP stream.
struct TlsStream {
    stream: TcpStream,
    conn: ClientConnection,
}

impl TlsStream {
    fn new(stream: TcpStream, conn: ClientConnection) -> Self {
        Self { stream, conn }
    }

    /// Drive the TLS handshake to completion.
    async fn handshake(&mut self) -> Result<()> {
        while self.conn.is_handshaking() {
            self.flush_tls().await?;

            if !self.conn.is_handshaking() {
                break;
            }

            if self.conn.wants_read() {
                let n = self.fill_from_tcp().await?;
                if n == 0 {
                    return Err(ExchangeError::Network(
                        "Connection closed during handshake".to_string(),
                    ));
                }
            } else if !self.conn.wants_write() {
                return Err(ExchangeError::Network("TLS handshake stalled".to_string()));
            }
        }

        self.flush_tls().await
    }

    /// Write application data through the TLS session.
    async fn write_all(&mut self, data: &[u8]) -> Result<()> {
        self.conn
            .writer()
            .write_all(data)
            .map_err(|e| ExchangeError::Network(format!("TLS write failed: {e}")))?;
        self.flush_tls().await
    }

    /// Read decrypted data until the peer closes the connection.
    async fn read_to_end(&mut self) -> Result<Vec<u8>> {
        let mut out = Vec::new();
        let mut plain = [0u8; 4096];

        loop {
            loop {
                match self.conn.reader().read(&mut plain) {
                    Ok(0) => break,
                    Ok(n) => out.extend_from_slice(&plain[..n]),
                    Err(e) if e.kind() == std::io::ErrorKind::WouldBlock => break,
                    Err(e) => {
                        return Err(ExchangeError::Network(format!("TLS read failed: {e}")))
                    }
                }
            }

            let n = self.fill_from_tcp().await?;
            if n == 0 {
                break;
            }
        }

        Ok(out)
    }

    /// Send any pending TLS records to the socket.
    async fn flush_tls(&mut self) -> Result<()> {
        while self.conn.wants_write() {
            let mut buf = Vec::with_capacity(8192);
            let n = self
                .conn
                .write_tls(&mut buf)
                .map_err(|e| ExchangeError::Network(format!("TLS write failed: {e}")))?;
            if n == 0 {
                break;
            }
            let (result, _) = self.stream.write_all(buf).await;
            result.map_err(|e| ExchangeError::Network(format!("TCP write failed: {e}")))?;
        }
        Ok(())
    }

    /// Pull one TCP read into the TLS session. Returns bytes read (0 on EOF).
    async fn fill_from_tcp(&mut self) -> Result<usize> {
        let buf = vec![0u8; 4096];
        let (result, buf) = self.stream.read(buf).await;
        let n = result.map_err(|e| ExchangeError::Network(format!("TCP read failed: {e}")))?;

        if n > 0 {
            self.conn
                .read_tls(&mut std::io::Cursor::new(&buf[..n]))
                .map_err(|e| ExchangeError::Network(format!("TLS read failed: {e}")))?;
            self.conn
                .process_new_packets()
                .map_err(|e| ExchangeError::Network(format!("TLS process failed: {e}")))?;
        }

        Ok(n)
    }
}
