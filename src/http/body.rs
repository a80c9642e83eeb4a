//! Request body accumulation.

use axum::body::Body;
use futures_util::StreamExt;

/// Error type for reading a request body.
#[derive(Debug, thiserror::Error)]
pub enum BodyError {
    /// The transport failed before the body ended (e.g. client disconnect).
    #[error("failed to read request body: {0}")]
    Transport(#[from] axum::Error),
    #[error("request body is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Collect the whole body into a string.
///
/// Chunks are buffered as bytes and decoded once at the end, so a multi-byte
/// character split across chunks is handled. There is no size cap.
pub async fn read_all(body: Body) -> Result<String, BodyError> {
    let mut stream = body.into_data_stream();
    let mut buf = Vec::new();

    while let Some(chunk) = stream.next().await {
        buf.extend_from_slice(&chunk?);
    }

    Ok(String::from_utf8(buf)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures_util::stream;

    #[tokio::test]
    async fn empty_body() {
        assert_eq!(read_all(Body::empty()).await.unwrap(), "");
    }

    #[tokio::test]
    async fn concatenates_chunks() {
        let chunks = stream::iter(vec![
            Ok::<_, std::io::Error>("{\"cookies"),
            Ok("ToSet\":"),
            Ok("[]}"),
        ]);
        let body = read_all(Body::from_stream(chunks)).await.unwrap();
        assert_eq!(body, "{\"cookiesToSet\":[]}");
    }

    #[tokio::test]
    async fn split_multibyte_character() {
        let euro = "€".as_bytes();
        let chunks = stream::iter(vec![
            Ok::<_, std::io::Error>(euro[..1].to_vec()),
            Ok(euro[1..].to_vec()),
        ]);
        assert_eq!(read_all(Body::from_stream(chunks)).await.unwrap(), "€");
    }

    #[tokio::test]
    async fn transport_error_fails_the_read() {
        let chunks = stream::iter(vec![
            Ok("partial"),
            Err(std::io::Error::new(std::io::ErrorKind::ConnectionReset, "client went away")),
        ]);
        let err = read_all(Body::from_stream(chunks)).await.unwrap_err();
        assert!(matches!(err, BodyError::Transport(_)));
        assert!(err.to_string().contains("client went away"));
    }

    #[tokio::test]
    async fn invalid_utf8_is_reported() {
        let chunks = stream::iter(vec![Ok::<_, std::io::Error>(vec![0xff, 0xfe])]);
        let err = read_all(Body::from_stream(chunks)).await.unwrap_err();
        assert!(matches!(err, BodyError::Utf8(_)));
    }
}
