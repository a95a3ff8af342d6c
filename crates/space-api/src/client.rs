//! reqwest-backed backend client

use crate::error::{ApiError, Result};
use crate::types::{
    Feed, LikeInput, LikeResponse, Post, PostInput, ReplyInput, UsernameInput, UsernameResponse,
};
use async_trait::async_trait;
use reqwest::header::{CONTENT_TYPE, HeaderValue};
use reqwest::{Client, Method, RequestBuilder};
use serde::Serialize;
use serde::de::DeserializeOwned;
use space_utils::SpaceConfig;
use tracing::debug;

const POSTS_PATH: &str = "/posts";
const REPLY_PATH: &str = "/posts/reply";
const LIKE_PATH: &str = "/posts/like";
const FEED_PATH: &str = "/feed";
// Unconfirmed against the backend; kept in one place so it is easy to change.
const USERNAME_PATH: &str = "/users/me";

/// Operations offered by the backend
///
/// One call, one HTTP round-trip. Implementations never retry or cache.
#[cfg_attr(feature = "mock", mockall::automock)]
#[async_trait]
pub trait SpaceApi: Send + Sync {
    /// Create a new post
    async fn create_post(&self, input: PostInput) -> Result<Post>;

    /// Reply to an existing post
    async fn reply_to_post(&self, input: ReplyInput) -> Result<Post>;

    /// Like or unlike a post; the backend decides which
    async fn toggle_like(&self, input: LikeInput) -> Result<LikeResponse>;

    /// Fetch the recent-posts feed
    async fn get_feed(&self) -> Result<Feed>;

    /// Change the authenticated user's name
    async fn update_username(&self, input: UsernameInput) -> Result<UsernameResponse>;
}

/// HTTP client for the MCP Space backend
#[derive(Debug, Clone)]
pub struct SpaceApiClient {
    client: Client,
    base_url: String,
    api_token: String,
}

impl SpaceApiClient {
    /// Create a client for `base_url` authenticating with `api_token`
    ///
    /// An empty token is accepted; the backend will answer 401.
    pub fn new(base_url: impl Into<String>, api_token: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url, api_token)
    }

    /// Create a client reusing an existing reqwest client
    pub fn with_client(
        client: Client,
        base_url: impl Into<String>,
        api_token: impl Into<String>,
    ) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();

        Self {
            client,
            base_url,
            api_token: api_token.into(),
        }
    }

    /// Create from the process configuration
    pub fn from_config(config: &SpaceConfig) -> Self {
        Self::new(config.api_base_url.clone(), config.api_token.clone())
    }

    /// Base URL requests are sent to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Start a request with the auth and content-type headers applied
    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = self.url(path);
        debug!("{} {}", method, url);

        self.client
            .request(method, url)
            .bearer_auth(&self.api_token)
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
    }

    /// Send a request and decode a success body
    async fn execute<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T> {
        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            debug!("Backend returned {}", status);
            // An unreadable error body maps the same way as an unparsable one.
            let body = response.bytes().await.unwrap_or_default();
            return Err(ApiError::from_status(status, &body));
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }

    async fn send_json<B, T>(&self, method: Method, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + Sync + ?Sized,
        T: DeserializeOwned,
    {
        self.execute(self.request(method, path).json(body)).await
    }
}

#[async_trait]
impl SpaceApi for SpaceApiClient {
    async fn create_post(&self, input: PostInput) -> Result<Post> {
        self.send_json(Method::POST, POSTS_PATH, &input)
            .await
            .map_err(|e| e.context("Failed to create post"))
    }

    async fn reply_to_post(&self, input: ReplyInput) -> Result<Post> {
        self.send_json(Method::POST, REPLY_PATH, &input)
            .await
            .map_err(|e| e.context("Failed to reply to post"))
    }

    async fn toggle_like(&self, input: LikeInput) -> Result<LikeResponse> {
        self.send_json(Method::POST, LIKE_PATH, &input)
            .await
            .map_err(|e| e.context("Failed to toggle like"))
    }

    async fn get_feed(&self) -> Result<Feed> {
        self.execute(self.request(Method::GET, FEED_PATH))
            .await
            .map_err(|e| e.context("Failed to fetch feed"))
    }

    async fn update_username(&self, input: UsernameInput) -> Result<UsernameResponse> {
        self.send_json(Method::PATCH, USERNAME_PATH, &input)
            .await
            .map_err(|e| e.context("Failed to update username"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> SpaceApiClient {
        SpaceApiClient::new(server.uri(), "test-token")
    }

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let client = SpaceApiClient::new("https://example.com/api/", "t");
        assert_eq!(client.base_url(), "https://example.com/api");
        assert_eq!(client.url(FEED_PATH), "https://example.com/api/feed");
    }

    #[test]
    fn test_from_config() {
        let config = SpaceConfig::default();
        let client = SpaceApiClient::from_config(&config);
        assert_eq!(client.base_url(), "https://mcp-space.vercel.app/api");
    }

    #[tokio::test]
    async fn test_create_post_sends_headers_and_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/posts"))
            .and(header("authorization", "Bearer test-token"))
            .and(header("content-type", "application/json"))
            .and(body_json(json!({"content": "hello world"})))
            .respond_with(
                ResponseTemplate::new(201).set_body_json(json!({"id": "p1", "content": "hello world"})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let post = client_for(&server)
            .create_post(PostInput {
                content: "hello world".to_string(),
                image_url: None,
            })
            .await
            .unwrap();

        assert_eq!(post["id"], "p1");
        assert_eq!(post["content"], "hello world");
    }

    #[tokio::test]
    async fn test_base_url_path_prefix_is_kept() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/feed"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(1)
            .mount(&server)
            .await;

        let client = SpaceApiClient::new(format!("{}/api/", server.uri()), "t");
        let feed = client.get_feed().await.unwrap();
        assert!(feed.is_empty());
    }

    #[tokio::test]
    async fn test_reply_sends_parent_and_image() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/posts/reply"))
            .and(body_json(json!({
                "content": "agreed",
                "parentId": "p1",
                "imageUrl": "https://example.com/cat.png",
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": "r1", "parentId": "p1"})))
            .expect(1)
            .mount(&server)
            .await;

        let reply = client_for(&server)
            .reply_to_post(ReplyInput {
                content: "agreed".to_string(),
                parent_id: "p1".to_string(),
                image_url: Some("https://example.com/cat.png".to_string()),
            })
            .await
            .unwrap();

        assert_eq!(reply["id"], "r1");
    }

    #[tokio::test]
    async fn test_toggle_like_decodes_flag() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/posts/like"))
            .and(body_json(json!({"postId": "p9"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"liked": true})))
            .expect(1)
            .mount(&server)
            .await;

        let response = client_for(&server)
            .toggle_like(LikeInput {
                post_id: "p9".to_string(),
            })
            .await
            .unwrap();

        assert!(response.liked);
    }

    #[tokio::test]
    async fn test_feed_is_returned_whole_and_in_order() {
        let posts: Vec<_> = (0..75).map(|i| json!({"id": format!("p{i}")})).collect();

        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/feed"))
            .and(header("authorization", "Bearer test-token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!(posts)))
            .expect(1)
            .mount(&server)
            .await;

        let feed = client_for(&server).get_feed().await.unwrap();
        assert_eq!(feed, posts);
    }

    #[tokio::test]
    async fn test_update_username() {
        let server = MockServer::start().await;
        Mock::given(method("PATCH"))
            .and(path(USERNAME_PATH))
            .and(body_json(json!({"username": "newname"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"name": "newname", "id": "u1"})))
            .expect(1)
            .mount(&server)
            .await;

        let response = client_for(&server)
            .update_username(UsernameInput {
                username: "newname".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(response.name, "newname");
    }

    #[tokio::test]
    async fn test_unauthorized_is_prefixed_with_operation() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/posts"))
            .respond_with(ResponseTemplate::new(401).set_body_json(json!({"error": "nope"})))
            .expect(1)
            .mount(&server)
            .await;

        let err = client_for(&server)
            .create_post(PostInput {
                content: "x".to_string(),
                image_url: None,
            })
            .await
            .unwrap_err();

        assert!(err.is_unauthorized());
        assert_eq!(
            err.to_string(),
            "Failed to create post: Unauthorized: Please check your API token"
        );
    }

    #[tokio::test]
    async fn test_not_found() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/posts/like"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .toggle_like(LikeInput {
                post_id: "missing".to_string(),
            })
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "Failed to toggle like: Resource not found");
    }

    #[tokio::test]
    async fn test_bad_request_carries_server_detail() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/posts/reply"))
            .respond_with(
                ResponseTemplate::new(400).set_body_json(json!({"error": "Parent post does not exist"})),
            )
            .mount(&server)
            .await;

        let err = client_for(&server)
            .reply_to_post(ReplyInput {
                content: "x".to_string(),
                parent_id: "nope".to_string(),
                image_url: None,
            })
            .await
            .unwrap_err();

        assert_eq!(
            err.to_string(),
            "Failed to reply to post: Bad request: Parent post does not exist"
        );
    }

    #[tokio::test]
    async fn test_malformed_error_body_falls_back_to_status_text() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/feed"))
            .respond_with(ResponseTemplate::new(502).set_body_string("<html>Bad Gateway</html>"))
            .mount(&server)
            .await;

        let err = client_for(&server).get_feed().await.unwrap_err();
        assert_eq!(err.to_string(), "Failed to fetch feed: API error (502): Bad Gateway");
    }

    #[tokio::test]
    async fn test_truncated_unauthorized_body_still_maps_status() {
        use tokio::io::{AsyncReadExt, AsyncWriteExt};
        use tokio::net::TcpListener;

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        // Promise 100 bytes of body, send five, then hang up.
        let backend = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }
            socket
                .write_all(b"HTTP/1.1 401 Unauthorized\r\nContent-Length: 100\r\n\r\n{\"err")
                .await
                .unwrap();
            let _ = socket.shutdown().await;
        });

        let client = SpaceApiClient::new(format!("http://{addr}"), "t");
        let err = client.get_feed().await.unwrap_err();
        backend.await.unwrap();

        assert!(err.is_unauthorized());
        assert_eq!(
            err.to_string(),
            "Failed to fetch feed: Unauthorized: Please check your API token"
        );
    }

    #[tokio::test]
    async fn test_malformed_success_body_is_a_decode_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/feed"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"not": "an array"})))
            .mount(&server)
            .await;

        let err = client_for(&server).get_feed().await.unwrap_err();
        assert!(matches!(err.root(), ApiError::Decode(_)));
        assert!(err.to_string().starts_with("Failed to fetch feed: Invalid response body"));
    }

    #[tokio::test]
    async fn test_network_failure_is_wrapped() {
        // Nothing listens on port 1.
        let client = SpaceApiClient::new("http://127.0.0.1:1", "t");
        let err = client.get_feed().await.unwrap_err();

        assert!(matches!(err.root(), ApiError::Transport(_)));
        assert!(err.to_string().starts_with("Failed to fetch feed: Network error"));
    }
}
