use url::Url;

/// The public base url the application is reachable at, used to build the
/// navigation links embedded in responses.
#[derive(Clone, Debug)]
pub struct AppBaseUrl(pub Url);

impl From<Url> for AppBaseUrl {
    fn from(url: Url) -> Self {
        Self(url)
    }
}
