use flickr_thin::{
    json, Flickr, FlickrError, Param, RequestDescriptor, Transport, Verb,
};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use url::Url;

/// Transport double that records every dispatched request and replays a
/// canned JSON body.
struct MockTransport {
    requests: Mutex<Vec<RequestDescriptor>>,
    reply: Vec<u8>,
}

impl MockTransport {
    fn replying(body: &str) -> Arc<Self> {
        Arc::new(MockTransport {
            requests: Mutex::new(Vec::new()),
            reply: body.as_bytes().to_vec(),
        })
    }

    fn requests(&self) -> Vec<RequestDescriptor> {
        self.requests.lock().unwrap().clone()
    }
}

impl Transport for MockTransport {
    fn execute(&self, request: &RequestDescriptor) -> flickr_thin::Result<Vec<u8>> {
        self.requests.lock().unwrap().push(request.clone());
        Ok(self.reply.clone())
    }
}

/// Transport double that always fails with an HTTP error.
struct FailingTransport;

impl Transport for FailingTransport {
    fn execute(&self, _request: &RequestDescriptor) -> flickr_thin::Result<Vec<u8>> {
        Err(FlickrError::http(503, "service unavailable".to_string()))
    }
}

fn client_with(transport: Arc<MockTransport>) -> Flickr {
    Flickr::with_secret("KEY".to_string(), "SECRET".to_string())
        .with_transport(transport)
}

fn query_map(url: &str) -> HashMap<String, String> {
    Url::parse(url)
        .expect("captured URL should parse")
        .query_pairs()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn test_method_path_reaches_the_wire() {
    let transport = MockTransport::replying("null");
    let client = client_with(Arc::clone(&transport));

    client
        .method("people.findByEmail")
        .get(Param::new())
        .expect("call failed");

    let requests = transport.requests();
    assert_eq!(requests.len(), 1);
    let query = query_map(requests[0].url());
    assert_eq!(
        query.get("method").map(String::as_str),
        Some("flickr.people.findByEmail")
    );
}

#[test]
fn test_branched_builders_are_independent() {
    let transport = MockTransport::replying("null");
    let client = client_with(Arc::clone(&transport));

    let contacts = client.method("contacts");
    contacts.push("getPublicList").get(Param::new()).unwrap();
    contacts.push("getList").get(Param::new()).unwrap();

    let methods: Vec<String> = transport
        .requests()
        .iter()
        .map(|r| query_map(r.url()).remove("method").unwrap())
        .collect();
    assert_eq!(
        methods,
        vec!["flickr.contacts.getPublicList", "flickr.contacts.getList"]
    );
}

#[test]
fn test_query_is_canonically_ordered() {
    let transport = MockTransport::replying("null");
    let client = client_with(Arc::clone(&transport));

    let mut params = Param::new();
    params.insert("text".to_string(), json!("cats"));
    params.insert("per_page".to_string(), json!(10));
    client.method("photos.search").get(params).unwrap();

    let requests = transport.requests();
    let url = requests[0].url();
    let query = url.split('?').nth(1).expect("query string missing");
    assert_eq!(
        query,
        "api_key=KEY&format=json&method=flickr.photos.search&nojsoncallback=1&per_page=10&text=cats"
    );
}

#[test]
fn test_authenticated_call_carries_matching_signature() {
    let transport = MockTransport::replying("null");
    let client = client_with(Arc::clone(&transport));

    let mut params = Param::new();
    params.insert("frob".to_string(), json!("FROB"));
    client
        .method("auth.getToken")
        .invoke(Verb::Get, true, params)
        .unwrap();

    let requests = transport.requests();
    let query = query_map(requests[0].url());
    let got_sig = query.get("api_sig").expect("api_sig missing").clone();

    // Recompute over every other transmitted parameter.
    let signed: Param = query
        .iter()
        .filter(|(k, _)| k.as_str() != "api_sig")
        .map(|(k, v)| (k.clone(), json!(v)))
        .collect();
    let expected = flickr_thin::sign(Some("SECRET"), &signed).unwrap();

    assert_eq!(got_sig, expected);
}

#[test]
fn test_authenticated_without_secret_fails() {
    let transport = MockTransport::replying("null");
    let client = Flickr::new("KEY".to_string()).with_transport(Arc::<MockTransport>::clone(&transport));

    let result = client
        .method("auth.getFrob")
        .invoke(Verb::Get, true, Param::new());
    assert!(matches!(result, Err(FlickrError::MissingSecret)));
    assert!(transport.requests().is_empty(), "no request should be sent");
}

#[test]
fn test_empty_method_path_fails() {
    let transport = MockTransport::replying("null");
    let client = client_with(Arc::clone(&transport));

    let result = client.method("").get(Param::new());
    assert!(matches!(result, Err(FlickrError::EmptyMethod)));
    assert!(transport.requests().is_empty(), "no request should be sent");
}

#[test]
fn test_post_uses_fixed_endpoint_and_body() {
    let transport = MockTransport::replying("null");
    let client = client_with(Arc::clone(&transport));

    let mut params = Param::new();
    params.insert("title".to_string(), json!("new title"));
    client.method("photos.setMeta").post(params).unwrap();

    let requests = transport.requests();
    match &requests[0] {
        RequestDescriptor::Post { url, body } => {
            assert_eq!(url, "http://api.flickr.com/services/rest/");
            assert!(!url.contains('?'), "POST parameters must not be in the URL");
            assert!(body.contains("method=flickr.photos.setMeta"));
            assert!(body.contains("title=new+title"));
        }
        other => panic!("expected a POST descriptor, got {:?}", other),
    }
}

#[test]
fn test_response_navigation_end_to_end() {
    let transport = MockTransport::replying(
        r#"{
            "contacts": {
                "contact": [
                    {"username": "ann", "iconserver": 5, "iconfarm": 2, "nsid": "123"},
                    {"username": "bob", "iconserver": 0, "iconfarm": 1, "nsid": "456"}
                ]
            },
            "stat": "ok"
        }"#,
    );
    let client = client_with(Arc::clone(&transport));

    let response = client
        .method("contacts.getPublicList")
        .get(Param::new())
        .unwrap();

    let contacts = response.get("contacts/contact").expect("contact list");
    assert_eq!(contacts.len().unwrap(), 2);

    let ann = contacts.at(0).unwrap();
    assert_eq!(ann.item("username").unwrap().to_string(), "ann");
    assert_eq!(
        ann.icon_url(),
        "http://farm2.static.flickr.com/5/buddyicons/123.jpg"
    );

    let bob = contacts.at(1).unwrap();
    assert_eq!(
        bob.icon_url(),
        "http://www.flickr.com/images/buddyicon.jpg"
    );

    // Optional attribute on a present mapping.
    assert!(ann.field("realname").unwrap().is_none());
}

#[test]
fn test_malformed_json_is_an_error() {
    let transport = MockTransport::replying("jsonFlickrApi({\"stat\": \"ok\"})");
    let client = client_with(Arc::clone(&transport));

    let result = client.method("test.echo").get(Param::new());
    assert!(matches!(result, Err(FlickrError::Json(_))));
}

#[test]
fn test_transport_failure_propagates_unchanged() {
    let client = Flickr::new("KEY".to_string()).with_transport(Arc::new(FailingTransport));

    let result = client.method("test.echo").get(Param::new());
    match result {
        Err(FlickrError::Http { status, .. }) => assert_eq!(status, 503),
        other => panic!("expected an HTTP error, got {:?}", other),
    }
}
