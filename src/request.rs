use crate::error::{Error, Result};
use url::Url;

fn parse_base(base_url: &str) -> Result<Url> {
    Url::parse(base_url).map_err(|source| Error::InvalidUrl {
        url: base_url.to_string(),
        source,
    })
}

/// URL for a single-name lookup. `country_id` is only sent when non-empty.
pub fn single_url(base_url: &str, api_key: Option<&str>, name: &str, country: &str) -> Result<Url> {
    let mut url = parse_base(base_url)?;
    {
        let mut q = url.query_pairs_mut();
        q.append_pair("name", name);
        if !country.is_empty() {
            q.append_pair("country_id", country);
        }
        if let Some(key) = api_key {
            q.append_pair("apikey", key);
        }
    }
    Ok(url)
}

/// URL for a batch lookup: one `name[]` per entry, in input order.
/// `country_id` is always sent, even when empty.
pub fn batch_url<S: AsRef<str>>(
    base_url: &str,
    api_key: Option<&str>,
    names: &[S],
    country: &str,
) -> Result<Url> {
    let mut url = parse_base(base_url)?;
    {
        let mut q = url.query_pairs_mut();
        q.append_pair("country_id", country);
        for name in names {
            q.append_pair("name[]", name.as_ref());
        }
        if let Some(key) = api_key {
            q.append_pair("apikey", key);
        }
    }
    Ok(url)
}

/// Copy of `url` safe for logs: the API key value is masked.
pub(crate) fn redacted(url: &Url) -> String {
    let mut out = url.clone();
    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(k, v)| {
            let v = if k == "apikey" { "***".to_string() } else { v.into_owned() };
            (k.into_owned(), v)
        })
        .collect();
    out.query_pairs_mut().clear().extend_pairs(pairs);
    out.to_string()
}
