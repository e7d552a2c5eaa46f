#[cfg(test)]
pub mod mock {
    use crate::api::client::{register_mock, MockResponse, TestResponder};
    use crate::api::ApiError;
    use reqwest::Method;
    use serde_json::Value;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    pub const GET: Method = Method::GET;
    pub const POST: Method = Method::POST;
    pub const DELETE: Method = Method::DELETE;

    /// In-process stand-in for the REST backend. Routes are matched on
    /// method and path; every request that reaches it is recorded.
    #[derive(Clone)]
    pub struct MockServer {
        inner: Arc<Mutex<Inner>>,
        base: String,
    }

    #[derive(Default)]
    struct Inner {
        routes: Vec<Route>,
        received: Vec<RecordedRequest>,
    }

    #[derive(Clone)]
    struct Route {
        method: Method,
        path: String,
        response: MockResponse,
    }

    #[derive(Clone, Debug, PartialEq)]
    pub struct RecordedRequest {
        pub method: Method,
        pub path: String,
        pub query: Option<String>,
        pub body: Option<Value>,
    }

    impl MockServer {
        pub fn start() -> Self {
            static NEXT_ID: AtomicUsize = AtomicUsize::new(1);
            let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
            Self {
                inner: Arc::new(Mutex::new(Inner::default())),
                base: format!("http://mock-{}", id),
            }
        }

        pub fn url(&self, path: &str) -> String {
            let base_url = format!("{}{}", self.base, path);
            register_mock(base_url.clone(), Arc::new(self.clone()));
            base_url
        }

        pub fn mock<F>(&self, f: F)
        where
            F: FnOnce(&mut When, &mut Then),
        {
            let mut when = When::default();
            let mut then = Then::default();
            f(&mut when, &mut then);

            let method = when.method.clone().expect("mock requires method");
            let path = when.path.clone().expect("mock requires path");
            let status = then.status.unwrap_or(200);
            let response = match then.body {
                Some(body) => MockResponse::json(status, body),
                None => MockResponse::empty(status),
            };

            let mut inner = self.inner.lock().expect("mock lock");
            inner.routes.push(Route {
                method,
                path,
                response,
            });
        }

        pub fn requests(&self) -> Vec<RecordedRequest> {
            self.inner.lock().expect("mock lock").received.clone()
        }

        pub fn hits(&self, method: Method, path: &str) -> usize {
            self.requests()
                .iter()
                .filter(|request| request.method == method && request.path == path)
                .count()
        }

        pub fn total_hits(&self) -> usize {
            self.requests().len()
        }
    }

    impl TestResponder for MockServer {
        fn respond(&self, request: &reqwest::Request) -> Result<MockResponse, ApiError> {
            let method = request.method().clone();
            let path = request.url().path().to_string();
            let body = request
                .body()
                .and_then(|body| body.as_bytes())
                .and_then(|bytes| serde_json::from_slice::<Value>(bytes).ok());

            let mut inner = self
                .inner
                .lock()
                .map_err(|_| ApiError::client("mock lock"))?;
            inner.received.push(RecordedRequest {
                method: method.clone(),
                path: path.clone(),
                query: request.url().query().map(str::to_string),
                body,
            });

            inner
                .routes
                .iter()
                .rev()
                .find(|route| route.method == method && route.path == path)
                .map(|route| route.response.clone())
                .ok_or_else(|| ApiError::network(format!("No mock for {} {}", method, path)))
        }
    }

    #[derive(Default)]
    pub struct When {
        method: Option<Method>,
        path: Option<String>,
    }

    impl When {
        pub fn method(&mut self, method: Method) -> &mut Self {
            self.method = Some(method);
            self
        }

        pub fn path(&mut self, path: &str) -> &mut Self {
            self.path = Some(path.to_string());
            self
        }
    }

    #[derive(Default)]
    pub struct Then {
        status: Option<u16>,
        body: Option<Value>,
    }

    impl Then {
        pub fn status(&mut self, status: u16) -> &mut Self {
            self.status = Some(status);
            self
        }

        pub fn json_body(&mut self, body: Value) -> &mut Self {
            self.body = Some(body);
            self
        }
    }
}
